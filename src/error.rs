//! Error types for color, geometry and style resolution

use thiserror::Error;

/// Errors that can surface from a resolver call.
///
/// Only [`ResolveError::MissingTheme`] is ever returned by the resolvers, and
/// only under [`OnMissingTheme::Fail`](crate::OnMissingTheme::Fail). The other
/// variants describe conditions that are downgraded to warnings; they exist so
/// callers can build and match on them uniformly.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolveError {
    /// Scheme color requested with no theme bound to the context
    #[error("scheme color '{color}' requested but no theme is available")]
    MissingTheme { color: String },

    /// Color-map override chain loops or exceeds the depth bound
    #[error("circular color map: {}", chain.join(" -> "))]
    CircularColorMap { chain: Vec<String> },

    /// Non-numeric attribute text where a number was expected
    #[error("malformed numeric attribute {attribute}=\"{value}\" on <{element}>")]
    MalformedNumericAttribute {
        element: String,
        attribute: String,
        value: String,
    },
}

impl ResolveError {
    /// Create a missing theme error
    pub fn missing_theme(color: impl Into<String>) -> Self {
        Self::MissingTheme {
            color: color.into(),
        }
    }

    /// Create a circular color map error
    pub fn circular(chain: Vec<String>) -> Self {
        Self::CircularColorMap { chain }
    }

    /// Create a malformed numeric attribute error
    pub fn malformed(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::MalformedNumericAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_theme_display() {
        let err = ResolveError::missing_theme("accent1");
        assert!(err.to_string().contains("accent1"));
    }

    #[test]
    fn test_circular_display() {
        let err = ResolveError::circular(vec!["tx1".into(), "bg1".into(), "tx1".into()]);
        assert!(err.to_string().contains("tx1 -> bg1 -> tx1"));
    }

    #[test]
    fn test_malformed_display() {
        let err = ResolveError::malformed("alpha", "val", "x");
        assert_eq!(
            err.to_string(),
            "malformed numeric attribute val=\"x\" on <alpha>"
        );
    }
}
