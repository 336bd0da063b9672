//! Semantic color name to scheme slot mapping (`p:clrMap`)

use std::collections::BTreeMap;

use crate::node::XmlNode;

/// Maps semantic names (`tx1`, `bg1`, ...) to scheme slot names.
///
/// A target may itself be another semantic name, so lookups follow chains.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMapOverride {
    entries: BTreeMap<String, String>,
}

impl ColorMapOverride {
    /// A mapping with no entries
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Read every attribute of a `p:clrMap` / `a:overrideClrMapping` element
    pub fn from_node(node: &XmlNode) -> Self {
        Self {
            entries: node.attributes.clone(),
        }
    }

    /// Read a slide-level `p:clrMapOvr`.
    ///
    /// Returns `None` for `a:masterClrMapping` (use the master's map).
    pub fn from_override_node(node: &XmlNode) -> Option<Self> {
        node.find_child("overrideClrMapping").map(Self::from_node)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|s| s.as_str())
    }

    /// Add or replace an entry
    pub fn insert(&mut self, name: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(name.into(), target.into());
    }

    /// Builder form of [`ColorMapOverride::insert`]
    pub fn with(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.insert(name, target);
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for ColorMapOverride {
    /// The mapping PowerPoint writes for a light-background master
    fn default() -> Self {
        Self::empty()
            .with("bg1", "lt1")
            .with("tx1", "dk1")
            .with("bg2", "lt2")
            .with("tx2", "dk2")
            .with("accent1", "accent1")
            .with("accent2", "accent2")
            .with("accent3", "accent3")
            .with("accent4", "accent4")
            .with("accent5", "accent5")
            .with("accent6", "accent6")
            .with("hlink", "hlink")
            .with("folHlink", "folHlink")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapping() {
        let map = ColorMapOverride::default();
        assert_eq!(map.get("tx1"), Some("dk1"));
        assert_eq!(map.get("bg2"), Some("lt2"));
        assert_eq!(map.get("accent4"), Some("accent4"));
        assert_eq!(map.get("phClr"), None);
    }

    #[test]
    fn test_from_clr_map_node() {
        let node = XmlNode::parse(r#"<clrMap bg1="dk1" tx1="lt1" bg2="dk2" tx2="lt2"/>"#).unwrap();
        let map = ColorMapOverride::from_node(&node);
        assert_eq!(map.get("bg1"), Some("dk1"));
        assert_eq!(map.get("tx1"), Some("lt1"));
    }

    #[test]
    fn test_override_node() {
        let master = XmlNode::parse("<clrMapOvr><masterClrMapping/></clrMapOvr>").unwrap();
        assert!(ColorMapOverride::from_override_node(&master).is_none());

        let ovr = XmlNode::parse(r#"<clrMapOvr><overrideClrMapping tx1="lt1"/></clrMapOvr>"#)
            .unwrap();
        let map = ColorMapOverride::from_override_node(&ovr).unwrap();
        assert_eq!(map.get("tx1"), Some("lt1"));
    }
}
