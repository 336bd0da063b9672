//! Theme color, font and format schemes

use std::fmt;

use crate::color::Rgb;
use crate::node::XmlNode;

/// One of the twelve color slots every theme defines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeSlot {
    Dk1,
    Lt1,
    Dk2,
    Lt2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hyperlink,
    FollowedHyperlink,
}

impl SchemeSlot {
    pub const ALL: [SchemeSlot; 12] = [
        SchemeSlot::Dk1,
        SchemeSlot::Lt1,
        SchemeSlot::Dk2,
        SchemeSlot::Lt2,
        SchemeSlot::Accent1,
        SchemeSlot::Accent2,
        SchemeSlot::Accent3,
        SchemeSlot::Accent4,
        SchemeSlot::Accent5,
        SchemeSlot::Accent6,
        SchemeSlot::Hyperlink,
        SchemeSlot::FollowedHyperlink,
    ];

    /// Element name used inside `a:clrScheme`
    pub fn name(&self) -> &'static str {
        match self {
            SchemeSlot::Dk1 => "dk1",
            SchemeSlot::Lt1 => "lt1",
            SchemeSlot::Dk2 => "dk2",
            SchemeSlot::Lt2 => "lt2",
            SchemeSlot::Accent1 => "accent1",
            SchemeSlot::Accent2 => "accent2",
            SchemeSlot::Accent3 => "accent3",
            SchemeSlot::Accent4 => "accent4",
            SchemeSlot::Accent5 => "accent5",
            SchemeSlot::Accent6 => "accent6",
            SchemeSlot::Hyperlink => "hlink",
            SchemeSlot::FollowedHyperlink => "folHlink",
        }
    }

    /// Parse a slot name; accepts the long hyperlink spellings too
    pub fn from_name(name: &str) -> Option<SchemeSlot> {
        match name {
            "hyperlink" => return Some(SchemeSlot::Hyperlink),
            "followedHyperlink" => return Some(SchemeSlot::FollowedHyperlink),
            _ => {}
        }
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SchemeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Concrete colors bound to the twelve scheme slots
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub name: Option<String>,
    colors: [Rgb; 12],
}

impl ColorScheme {
    /// Create a scheme with every slot black
    pub fn new() -> Self {
        Self {
            name: None,
            colors: [Rgb::BLACK; 12],
        }
    }

    pub fn get(&self, slot: SchemeSlot) -> Rgb {
        self.colors[slot.index()]
    }

    pub fn set(&mut self, slot: SchemeSlot, color: Rgb) {
        self.colors[slot.index()] = color;
    }

    /// Builder form of [`ColorScheme::set`]
    pub fn with(mut self, slot: SchemeSlot, color: Rgb) -> Self {
        self.set(slot, color);
        self
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new()
    }
}

/// Typefaces for one script family group (`a:majorFont` / `a:minorFont`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontCollection {
    pub latin: Option<String>,
    pub east_asian: Option<String>,
    pub complex_script: Option<String>,
}

impl FontCollection {
    pub fn latin(typeface: impl Into<String>) -> Self {
        Self {
            latin: Some(typeface.into()),
            ..Self::default()
        }
    }

    pub(crate) fn from_node(node: &XmlNode) -> Self {
        let typeface = |tag: &str| {
            node.find_child(tag)
                .and_then(|n| n.get("typeface"))
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        };
        Self {
            latin: typeface("latin"),
            east_asian: typeface("ea"),
            complex_script: typeface("cs"),
        }
    }
}

/// Major (headings) and minor (body) fonts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontScheme {
    pub major: FontCollection,
    pub minor: FontCollection,
}

impl FontScheme {
    /// Resolve `+mj-lt`/`+mn-ea`-style theme font references.
    ///
    /// Anything that is not a theme reference is returned unchanged, as is a
    /// reference to a font the scheme does not define.
    pub fn resolve_typeface<'a>(&'a self, typeface: &'a str) -> &'a str {
        let Some(reference) = typeface.strip_prefix('+') else {
            return typeface;
        };
        let Some((group, script)) = reference.split_once('-') else {
            return typeface;
        };
        let collection = match group {
            "mj" => &self.major,
            "mn" => &self.minor,
            _ => return typeface,
        };
        let resolved = match script {
            "lt" => collection.latin.as_deref(),
            "ea" => collection.east_asian.as_deref(),
            "cs" => collection.complex_script.as_deref(),
            _ => None,
        };
        resolved.unwrap_or(typeface)
    }
}

/// Theme style matrix (`a:fmtScheme`); entries stay as nodes because they
/// reference `phClr` and are only resolvable against a style reference color
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatScheme {
    pub fill_styles: Vec<XmlNode>,
    pub line_styles: Vec<XmlNode>,
    pub bg_fill_styles: Vec<XmlNode>,
}

impl FormatScheme {
    pub(crate) fn from_node(node: &XmlNode) -> Self {
        let list = |tag: &str| {
            node.find_child(tag)
                .map(|l| l.children.clone())
                .unwrap_or_default()
        };
        Self {
            fill_styles: list("fillStyleLst"),
            line_styles: list("lnStyleLst"),
            bg_fill_styles: list("bgFillStyleLst"),
        }
    }

    /// Fill for a `fillRef`/`bgRef` index.
    ///
    /// `0` means no fill, `1..=999` index the fill list, `1001..` index the
    /// background fill list (both 1-based).
    pub fn fill_style(&self, idx: u32) -> Option<&XmlNode> {
        match idx {
            0 => None,
            1..=999 => self.fill_styles.get(idx as usize - 1),
            1000 => None,
            _ => self.bg_fill_styles.get(idx as usize - 1001),
        }
    }

    /// Line for an `lnRef` index (1-based, `0` means no line)
    pub fn line_style(&self, idx: u32) -> Option<&XmlNode> {
        idx.checked_sub(1)
            .and_then(|i| self.line_styles.get(i as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_names_round_trip() {
        for slot in SchemeSlot::ALL {
            assert_eq!(SchemeSlot::from_name(slot.name()), Some(slot));
        }
    }

    #[test]
    fn test_long_hyperlink_names() {
        assert_eq!(SchemeSlot::from_name("hyperlink"), Some(SchemeSlot::Hyperlink));
        assert_eq!(
            SchemeSlot::from_name("followedHyperlink"),
            Some(SchemeSlot::FollowedHyperlink)
        );
        assert_eq!(SchemeSlot::from_name("tx1"), None);
    }

    #[test]
    fn test_color_scheme_set_get() {
        let scheme = ColorScheme::new().with(SchemeSlot::Accent3, Rgb::WHITE);
        assert_eq!(scheme.get(SchemeSlot::Accent3), Rgb::WHITE);
        assert_eq!(scheme.get(SchemeSlot::Accent4), Rgb::BLACK);
    }

    #[test]
    fn test_resolve_typeface() {
        let fonts = FontScheme {
            major: FontCollection::latin("Calibri Light"),
            minor: FontCollection {
                latin: Some("Calibri".into()),
                east_asian: Some("Yu Gothic".into()),
                complex_script: None,
            },
        };
        assert_eq!(fonts.resolve_typeface("+mj-lt"), "Calibri Light");
        assert_eq!(fonts.resolve_typeface("+mn-ea"), "Yu Gothic");
        assert_eq!(fonts.resolve_typeface("+mn-cs"), "+mn-cs");
        assert_eq!(fonts.resolve_typeface("Arial"), "Arial");
    }

    #[test]
    fn test_fill_style_indices() {
        let formats = FormatScheme {
            fill_styles: vec![XmlNode::new("solidFill"), XmlNode::new("gradFill")],
            line_styles: vec![XmlNode::new("ln")],
            bg_fill_styles: vec![XmlNode::new("noFill")],
        };
        assert!(formats.fill_style(0).is_none());
        assert_eq!(formats.fill_style(2).unwrap().tag, "gradFill");
        assert_eq!(formats.fill_style(1001).unwrap().tag, "noFill");
        assert!(formats.fill_style(1002).is_none());
        assert_eq!(formats.line_style(1).unwrap().tag, "ln");
        assert!(formats.line_style(0).is_none());
    }
}
