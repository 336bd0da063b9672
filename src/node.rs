//! Generic attributed tree used as the input to every resolver
//!
//! The markup tokenizer is an external concern; this module only defines the
//! node shape the resolvers walk, plus an adapter from `roxmltree` so callers
//! (and tests) can feed raw DrawingML snippets.

use std::collections::BTreeMap;

use crate::diagnostics::{DiagnosticSink, Warning, WarningCategory};
use crate::error::ResolveError;

/// Fixed-point denominator for DrawingML percentages (`50000` = 50%)
pub const PERCENT_DENOMINATOR: f64 = 100_000.0;

/// Fixed-point denominator for DrawingML angles (`5400000` = 90 degrees)
pub const ANGLE_DENOMINATOR: f64 = 60_000.0;

/// An element with a local tag name, attributes, ordered children and text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlNode {
    /// Local tag name with any namespace prefix removed
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<XmlNode>,
    pub text: Option<String>,
}

impl XmlNode {
    /// Create an empty element
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: strip_prefix(&tag.into()).to_string(),
            ..Self::default()
        }
    }

    /// Add an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a child element
    pub fn child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Parse an XML document and return its root element
    pub fn parse(xml: &str) -> Result<Self, roxmltree::Error> {
        let doc = roxmltree::Document::parse(xml)?;
        Ok(Self::from(doc.root_element()))
    }

    /// Raw attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// First child element with the given tag
    pub fn find_child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// All child elements with the given tag, in document order
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Follow a chain of child tags (`["spPr", "ln", "solidFill"]`)
    pub fn find(&self, path: &[&str]) -> Option<&XmlNode> {
        path.iter()
            .try_fold(self, |node, tag| node.find_child(tag))
    }

    /// First child element regardless of tag
    pub fn first_child(&self) -> Option<&XmlNode> {
        self.children.first()
    }

    /// Parse a plain numeric attribute.
    ///
    /// Returns `None` when absent. Malformed text yields `NaN` and a warning so
    /// the defect stays visible in the output instead of being defaulted away.
    pub fn attr_f64(&self, name: &str, sink: &dyn DiagnosticSink) -> Option<f64> {
        let raw = self.get(name)?;
        match raw.trim().parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                let err = ResolveError::malformed(&self.tag, name, raw);
                sink.warn(Warning::new(WarningCategory::MalformedNumber, err.to_string()));
                Some(f64::NAN)
            }
        }
    }

    /// Parse a fixed-point percentage attribute into a fraction (`25000` → `0.25`).
    ///
    /// Also accepts the transitional `"25%"` form.
    pub fn attr_percent(&self, name: &str, sink: &dyn DiagnosticSink) -> Option<f64> {
        if let Some(raw) = self.get(name) {
            if let Some(pct) = raw.trim().strip_suffix('%') {
                if let Ok(v) = pct.parse::<f64>() {
                    return Some(v / 100.0);
                }
            }
        }
        self.attr_f64(name, sink).map(|v| v / PERCENT_DENOMINATOR)
    }

    /// Parse a 60000ths-of-a-degree angle attribute into degrees
    pub fn attr_angle(&self, name: &str, sink: &dyn DiagnosticSink) -> Option<f64> {
        self.attr_f64(name, sink).map(|v| v / ANGLE_DENOMINATOR)
    }
}

impl<'a, 'input> From<roxmltree::Node<'a, 'input>> for XmlNode {
    fn from(node: roxmltree::Node<'a, 'input>) -> Self {
        let attributes = node
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect();
        let children = node
            .children()
            .filter(|c| c.is_element())
            .map(XmlNode::from)
            .collect();
        let text = node
            .children()
            .filter(|c| c.is_text())
            .filter_map(|c| c.text())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .fold(None, |acc: Option<String>, t| match acc {
                Some(mut s) => {
                    s.push_str(t);
                    Some(s)
                }
                None => Some(t.to_string()),
            });

        XmlNode {
            tag: node.tag_name().name().to_string(),
            attributes,
            children,
            text,
        }
    }
}

fn strip_prefix(tag: &str) -> &str {
    tag.rsplit_once(':').map(|(_, local)| local).unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;

    #[test]
    fn test_parse_strips_namespace_prefix() {
        let node = XmlNode::parse(
            r#"<a:solidFill xmlns:a="urn:a"><a:srgbClr val="FF0000"><a:alpha val="50000"/></a:srgbClr></a:solidFill>"#,
        )
        .unwrap();
        assert_eq!(node.tag, "solidFill");
        let clr = node.find_child("srgbClr").unwrap();
        assert_eq!(clr.get("val"), Some("FF0000"));
        assert_eq!(clr.children[0].tag, "alpha");
    }

    #[test]
    fn test_builder_strips_prefix() {
        let node = XmlNode::new("p:spPr").child(XmlNode::new("a:ln"));
        assert_eq!(node.tag, "spPr");
        assert!(node.find(&["ln"]).is_some());
    }

    #[test]
    fn test_first_child_and_text_builder() {
        let node = XmlNode::new("fill")
            .child(XmlNode::new("gs").with_text("a"))
            .child(XmlNode::new("lin"));
        let first = node.first_child().unwrap();
        assert_eq!(first.tag, "gs");
        assert_eq!(first.text.as_deref(), Some("a"));
        assert!(XmlNode::new("empty").first_child().is_none());
    }

    #[test]
    fn test_text_content_collected() {
        let node = XmlNode::parse("<t> hello </t>").unwrap();
        assert_eq!(node.text.as_deref(), Some("hello"));
    }

    #[test]
    fn test_attr_percent_fixed_point() {
        let sink = Diagnostics::new();
        let node = XmlNode::new("lumMod").attr("val", "75000");
        assert_eq!(node.attr_percent("val", &sink), Some(0.75));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_attr_percent_literal_form() {
        let sink = Diagnostics::new();
        let node = XmlNode::new("alpha").attr("val", "40%");
        assert_eq!(node.attr_percent("val", &sink), Some(0.4));
    }

    #[test]
    fn test_malformed_number_is_nan_with_warning() {
        let sink = Diagnostics::new();
        let node = XmlNode::new("alpha").attr("val", "abc");
        let value = node.attr_percent("val", &sink).unwrap();
        assert!(value.is_nan());
        let warnings = sink.take();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, WarningCategory::MalformedNumber);
        assert_eq!(
            warnings[0].message,
            ResolveError::malformed("alpha", "val", "abc").to_string()
        );
        assert_eq!(warnings[0].message, "malformed numeric attribute val=\"abc\" on <alpha>");
    }

    #[test]
    fn test_absent_attribute_is_none() {
        let sink = Diagnostics::new();
        assert_eq!(XmlNode::new("x").attr_angle("ang", &sink), None);
    }

    #[test]
    fn test_attr_angle_degrees() {
        let sink = Diagnostics::new();
        let node = XmlNode::new("lin").attr("ang", "5400000");
        assert_eq!(node.attr_angle("ang", &sink), Some(90.0));
    }
}
