//! Decimal formatting shared by color and path output

/// Format `value` with at most `places` decimals, trailing zeros trimmed.
///
/// `-0` prints as `0`; non-finite values print as `NaN`/`inf`/`-inf`.
pub fn format_decimal(value: f64, places: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;
    let mut s = format!("{:.*}", places as usize, rounded);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Round to `places` decimals
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_decimals() {
        assert_eq!(format_decimal(200.0, 3), "200");
        assert_eq!(format_decimal(0.0, 3), "0");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(format_decimal(0.5, 3), "0.5");
        assert_eq!(format_decimal(12.125, 2), "12.13");
        assert_eq!(format_decimal(1.0 / 3.0, 3), "0.333");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_decimal(-0.0001, 3), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_decimal(f64::NAN, 3), "NaN");
        assert_eq!(format_decimal(f64::INFINITY, 3), "inf");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.12345, 3), 0.123);
    }
}
