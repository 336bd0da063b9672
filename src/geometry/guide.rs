//! Shape guide formulas (`a:gd fmla="..."`)
//!
//! Guides are named values computed from built-in shape variables and
//! earlier guides. Angles inside formulas are in 60000ths of a degree.

use std::collections::HashMap;

use crate::diagnostics::{DiagnosticSink, Warning, WarningCategory};
use crate::node::{XmlNode, ANGLE_DENOMINATOR};

/// Variable environment for guide evaluation
#[derive(Debug, Clone)]
pub struct GuideContext {
    vars: HashMap<String, f64>,
}

impl GuideContext {
    /// Seed the built-in variables for a `w` x `h` shape
    pub fn new(w: f64, h: f64) -> Self {
        let ss = w.min(h);
        let ls = w.max(h);
        let mut vars = HashMap::new();
        let mut set = |k: &str, v: f64| {
            vars.insert(k.to_string(), v);
        };

        set("w", w);
        set("h", h);
        set("l", 0.0);
        set("t", 0.0);
        set("r", w);
        set("b", h);
        set("hc", w / 2.0);
        set("vc", h / 2.0);
        set("ss", ss);
        set("ls", ls);
        for d in [2, 3, 4, 5, 6, 8, 10, 12, 32] {
            set(&format!("wd{d}"), w / d as f64);
            set(&format!("hd{d}"), h / d as f64);
        }
        for d in [2, 4, 6, 8, 16, 32] {
            set(&format!("ssd{d}"), ss / d as f64);
        }
        set("cd2", 10_800_000.0);
        set("cd4", 5_400_000.0);
        set("cd8", 2_700_000.0);
        set("3cd4", 16_200_000.0);
        set("3cd8", 8_100_000.0);
        set("5cd8", 13_500_000.0);
        set("7cd8", 18_900_000.0);

        Self { vars }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.vars.insert(name.into(), value);
    }

    /// Resolve an operand: a literal number or a variable name.
    ///
    /// Unknown names yield `NaN` and a warning.
    pub fn operand(&self, token: &str, sink: &dyn DiagnosticSink) -> f64 {
        if let Ok(v) = token.parse::<f64>() {
            return v;
        }
        match self.get(token) {
            Some(v) => v,
            None => {
                sink.warn(Warning::new(
                    WarningCategory::MalformedNumber,
                    format!("unknown guide '{}'", token),
                ));
                f64::NAN
            }
        }
    }

    /// Evaluate a formula string such as `*/ w adj 100000`
    pub fn evaluate(&self, formula: &str, sink: &dyn DiagnosticSink) -> f64 {
        let mut tokens = formula.split_whitespace();
        let Some(op) = tokens.next() else {
            return f64::NAN;
        };
        let args: Vec<f64> = tokens.map(|t| self.operand(t, sink)).collect();
        let arg = |i: usize| args.get(i).copied().unwrap_or(f64::NAN);
        let (x, y, z) = (arg(0), arg(1), arg(2));
        let rad = |a: f64| (a / ANGLE_DENOMINATOR).to_radians();

        match op {
            "val" => x,
            "*/" => x * y / z,
            "+-" => x + y - z,
            "+/" => (x + y) / z,
            "?:" => {
                if x > 0.0 {
                    y
                } else {
                    z
                }
            }
            "abs" => x.abs(),
            "at2" => y.atan2(x).to_degrees() * ANGLE_DENOMINATOR,
            "cat2" => x * z.atan2(y).cos(),
            "sat2" => x * z.atan2(y).sin(),
            "cos" => x * rad(y).cos(),
            "sin" => x * rad(y).sin(),
            "tan" => x * rad(y).tan(),
            "max" => x.max(y),
            "min" => x.min(y),
            "mod" => (x * x + y * y + z * z).sqrt(),
            "pin" => {
                if y < x {
                    x
                } else if y > z {
                    z
                } else {
                    y
                }
            }
            "sqrt" => x.sqrt(),
            _ => {
                sink.warn(Warning::new(
                    WarningCategory::MalformedNumber,
                    format!("unknown guide operator '{}'", op),
                ));
                f64::NAN
            }
        }
    }

    /// Evaluate every `a:gd` child of a guide list in order, binding each name
    pub fn apply_list(&mut self, list: &XmlNode, sink: &dyn DiagnosticSink) {
        for gd in list.children_named("gd") {
            let (Some(name), Some(fmla)) = (gd.get("name"), gd.get("fmla")) else {
                continue;
            };
            let value = self.evaluate(fmla, sink);
            self.set(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;

    fn eval(formula: &str) -> f64 {
        GuideContext::new(200.0, 100.0).evaluate(formula, &Diagnostics::new())
    }

    #[test]
    fn test_builtins() {
        let ctx = GuideContext::new(200.0, 100.0);
        assert_eq!(ctx.get("ss"), Some(100.0));
        assert_eq!(ctx.get("wd4"), Some(50.0));
        assert_eq!(ctx.get("hc"), Some(100.0));
        assert_eq!(ctx.get("cd4"), Some(5_400_000.0));
    }

    #[test]
    fn test_arithmetic_operators() {
        assert_eq!(eval("val 25000"), 25000.0);
        assert_eq!(eval("*/ w 1 4"), 50.0);
        assert_eq!(eval("+- w h 50"), 250.0);
        assert_eq!(eval("+/ w h 3"), 100.0);
        assert_eq!(eval("?: -1 5 7"), 7.0);
        assert_eq!(eval("abs -3"), 3.0);
        assert_eq!(eval("max w h"), 200.0);
        assert_eq!(eval("min w h"), 100.0);
        assert_eq!(eval("pin 0 150 100"), 100.0);
        assert_eq!(eval("sqrt 16"), 4.0);
        assert_eq!(eval("mod 3 4 0"), 5.0);
    }

    #[test]
    fn test_trig_operators() {
        assert!((eval("cos 10 0") - 10.0).abs() < 1e-9);
        assert!((eval("sin 10 cd4") - 10.0).abs() < 1e-9);
        assert!((eval("at2 0 1") - 5_400_000.0).abs() < 1e-3);
        assert!((eval("cat2 10 1 0") - 10.0).abs() < 1e-9);
        assert!(eval("sat2 10 1 0").abs() < 1e-9);
    }

    #[test]
    fn test_unknown_names_are_nan() {
        let sink = Diagnostics::new();
        let ctx = GuideContext::new(1.0, 1.0);
        assert!(ctx.evaluate("val nope", &sink).is_nan());
        assert!(ctx.evaluate("frob 1 2", &sink).is_nan());
        assert_eq!(sink.take().len(), 2);
    }

    #[test]
    fn test_apply_list_chains() {
        let sink = Diagnostics::new();
        let list = XmlNode::parse(
            r#"<gdLst><gd name="a" fmla="*/ w 1 2"/><gd name="b" fmla="+- a 10 0"/></gdLst>"#,
        )
        .unwrap();
        let mut ctx = GuideContext::new(100.0, 100.0);
        ctx.apply_list(&list, &sink);
        assert_eq!(ctx.get("b"), Some(60.0));
    }
}
