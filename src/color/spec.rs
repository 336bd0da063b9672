//! Declarative color descriptions and their parsing from DrawingML elements

use crate::diagnostics::{DiagnosticSink, Warning, WarningCategory};
use crate::node::XmlNode;

use super::model::Rgb;

/// Where the base color of a [`ColorSpec`] comes from
#[derive(Debug, Clone, PartialEq)]
pub enum ColorBase {
    /// `a:srgbClr`
    DirectRgb(Rgb),
    /// `a:hslClr`: hue in degrees, saturation and luminance as fractions
    DirectHsl { hue: f64, sat: f64, lum: f64 },
    /// `a:scrgbClr`: channels as fractions of full intensity
    PercentRgb { r: f64, g: f64, b: f64 },
    /// `a:prstClr`
    PresetName(String),
    /// `a:sysClr` with its `lastClr` fallback
    SystemColor { role: String, fallback: Option<Rgb> },
    /// `a:schemeClr`, either a theme slot or a semantic name resolved through the color map
    SchemeReference(String),
}

/// A percentage-based adjustment applied to a base color.
///
/// Values are fractions (`0.5` = 50%) except `HueOff`, which is in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Modifier {
    Alpha(f64),
    AlphaMod(f64),
    AlphaOff(f64),
    HueMod(f64),
    HueOff(f64),
    LumMod(f64),
    LumOff(f64),
    SatMod(f64),
    SatOff(f64),
    Shade(f64),
    Tint(f64),
}

impl Modifier {
    /// Position in the fixed application order
    pub fn rank(&self) -> u8 {
        match self {
            Modifier::Alpha(_) => 0,
            Modifier::AlphaMod(_) => 1,
            Modifier::AlphaOff(_) => 2,
            Modifier::HueMod(_) => 3,
            Modifier::HueOff(_) => 4,
            Modifier::LumMod(_) => 5,
            Modifier::LumOff(_) => 6,
            Modifier::SatMod(_) => 7,
            Modifier::SatOff(_) => 8,
            Modifier::Shade(_) => 9,
            Modifier::Tint(_) => 10,
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Modifier::Alpha(v)
            | Modifier::AlphaMod(v)
            | Modifier::AlphaOff(v)
            | Modifier::HueMod(v)
            | Modifier::HueOff(v)
            | Modifier::LumMod(v)
            | Modifier::LumOff(v)
            | Modifier::SatMod(v)
            | Modifier::SatOff(v)
            | Modifier::Shade(v)
            | Modifier::Tint(v) => v,
        }
    }

    /// Whether this modifier works in HSL space
    pub fn is_hsl(&self) -> bool {
        matches!(
            self,
            Modifier::HueMod(_)
                | Modifier::HueOff(_)
                | Modifier::LumMod(_)
                | Modifier::LumOff(_)
                | Modifier::SatMod(_)
                | Modifier::SatOff(_)
        )
    }

    /// Parse a modifier child element.
    ///
    /// Returns `None` for tags that are not modifiers or have no `val`.
    pub fn from_node(node: &XmlNode, sink: &dyn DiagnosticSink) -> Option<Modifier> {
        let make: fn(f64) -> Modifier = match node.tag.as_str() {
            "alpha" => Modifier::Alpha,
            "alphaMod" => Modifier::AlphaMod,
            "alphaOff" => Modifier::AlphaOff,
            "hueMod" => Modifier::HueMod,
            "lumMod" => Modifier::LumMod,
            "lumOff" => Modifier::LumOff,
            "satMod" => Modifier::SatMod,
            "satOff" => Modifier::SatOff,
            "shade" => Modifier::Shade,
            "tint" => Modifier::Tint,
            "hueOff" => return node.attr_angle("val", sink).map(Modifier::HueOff),
            _ => return None,
        };
        node.attr_percent("val", sink).map(make)
    }
}

/// A base color plus its modifier chain, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpec {
    pub base: ColorBase,
    pub modifiers: Vec<Modifier>,
}

/// Tags that carry a color
const COLOR_TAGS: &[&str] = &[
    "srgbClr", "hslClr", "scrgbClr", "prstClr", "sysClr", "schemeClr",
];

impl ColorSpec {
    pub fn new(base: ColorBase) -> Self {
        Self {
            base,
            modifiers: Vec::new(),
        }
    }

    /// Opaque sRGB color from integer channels
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorBase::DirectRgb(Rgb::new(r as f64, g as f64, b as f64)))
    }

    /// Reference to a scheme slot or semantic color name
    pub fn scheme(name: impl Into<String>) -> Self {
        Self::new(ColorBase::SchemeReference(name.into()))
    }

    /// Named preset color
    pub fn preset(name: impl Into<String>) -> Self {
        Self::new(ColorBase::PresetName(name.into()))
    }

    /// Append a modifier
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Whether `tag` names a DrawingML color element
    pub fn is_color_tag(tag: &str) -> bool {
        COLOR_TAGS.contains(&tag)
    }

    /// Parse a color element (`a:srgbClr`, `a:schemeClr`, ...).
    ///
    /// Returns `None` when the node is not a color element.
    pub fn from_node(node: &XmlNode, sink: &dyn DiagnosticSink) -> Option<ColorSpec> {
        let base = match node.tag.as_str() {
            "srgbClr" => {
                let val = node.get("val").unwrap_or_default();
                let rgb = Rgb::from_hex(val).unwrap_or_else(|| {
                    sink.warn(Warning::new(
                        WarningCategory::MalformedNumber,
                        format!("<srgbClr val=\"{}\"> is not a hex color", val),
                    ));
                    Rgb::new(f64::NAN, f64::NAN, f64::NAN)
                });
                ColorBase::DirectRgb(rgb)
            }
            "hslClr" => ColorBase::DirectHsl {
                hue: node.attr_angle("hue", sink).unwrap_or(0.0),
                sat: node.attr_percent("sat", sink).unwrap_or(0.0),
                lum: node.attr_percent("lum", sink).unwrap_or(0.0),
            },
            "scrgbClr" => ColorBase::PercentRgb {
                r: node.attr_percent("r", sink).unwrap_or(0.0),
                g: node.attr_percent("g", sink).unwrap_or(0.0),
                b: node.attr_percent("b", sink).unwrap_or(0.0),
            },
            "prstClr" => ColorBase::PresetName(node.get("val").unwrap_or_default().to_string()),
            "sysClr" => ColorBase::SystemColor {
                role: node.get("val").unwrap_or_default().to_string(),
                fallback: node.get("lastClr").and_then(Rgb::from_hex),
            },
            "schemeClr" => {
                ColorBase::SchemeReference(node.get("val").unwrap_or_default().to_string())
            }
            _ => return None,
        };

        let mut modifiers = Vec::new();
        for child in &node.children {
            match Modifier::from_node(child, sink) {
                Some(m) => modifiers.push(m),
                None => sink.warn(Warning::new(
                    WarningCategory::Unsupported,
                    format!("color modifier <{}> ignored", child.tag),
                )),
            }
        }

        Some(ColorSpec { base, modifiers })
    }

    /// Parse the first color element among `parent`'s children
    pub fn from_parent(parent: &XmlNode, sink: &dyn DiagnosticSink) -> Option<ColorSpec> {
        parent
            .children
            .iter()
            .find(|c| Self::is_color_tag(&c.tag))
            .and_then(|c| Self::from_node(c, sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;

    fn parse(xml: &str) -> (Option<ColorSpec>, Diagnostics) {
        let sink = Diagnostics::new();
        let node = XmlNode::parse(xml).unwrap();
        (ColorSpec::from_node(&node, &sink), sink)
    }

    #[test]
    fn test_parse_srgb_with_modifiers() {
        let (spec, sink) = parse(r#"<srgbClr val="FF0000"><alpha val="50000"/><lumMod val="75000"/></srgbClr>"#);
        let spec = spec.unwrap();
        assert_eq!(spec.base, ColorBase::DirectRgb(Rgb::new(255.0, 0.0, 0.0)));
        assert_eq!(spec.modifiers, vec![Modifier::Alpha(0.5), Modifier::LumMod(0.75)]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_parse_scheme() {
        let (spec, _) = parse(r#"<schemeClr val="accent1"><shade val="25000"/></schemeClr>"#);
        let spec = spec.unwrap();
        assert_eq!(spec.base, ColorBase::SchemeReference("accent1".into()));
        assert_eq!(spec.modifiers, vec![Modifier::Shade(0.25)]);
    }

    #[test]
    fn test_parse_hsl() {
        let (spec, _) = parse(r#"<hslClr hue="7200000" sat="100000" lum="50000"/>"#);
        assert_eq!(
            spec.unwrap().base,
            ColorBase::DirectHsl {
                hue: 120.0,
                sat: 1.0,
                lum: 0.5
            }
        );
    }

    #[test]
    fn test_parse_scrgb() {
        let (spec, _) = parse(r#"<scrgbClr r="100000" g="50000" b="0"/>"#);
        assert_eq!(
            spec.unwrap().base,
            ColorBase::PercentRgb {
                r: 1.0,
                g: 0.5,
                b: 0.0
            }
        );
    }

    #[test]
    fn test_parse_sys_color() {
        let (spec, _) = parse(r#"<sysClr val="windowText" lastClr="101010"/>"#);
        assert_eq!(
            spec.unwrap().base,
            ColorBase::SystemColor {
                role: "windowText".into(),
                fallback: Some(Rgb::from_u32(0x101010))
            }
        );
    }

    #[test]
    fn test_hue_off_is_degrees() {
        let (spec, _) = parse(r#"<srgbClr val="000000"><hueOff val="600000"/></srgbClr>"#);
        assert_eq!(spec.unwrap().modifiers, vec![Modifier::HueOff(10.0)]);
    }

    #[test]
    fn test_unknown_modifier_warns() {
        let (spec, sink) = parse(r#"<srgbClr val="000000"><gamma/></srgbClr>"#);
        assert!(spec.unwrap().modifiers.is_empty());
        assert!(sink.has(WarningCategory::Unsupported));
    }

    #[test]
    fn test_bad_hex_warns() {
        let (spec, sink) = parse(r#"<srgbClr val="red"/>"#);
        match spec.unwrap().base {
            ColorBase::DirectRgb(rgb) => assert!(rgb.r.is_nan()),
            other => panic!("unexpected base {other:?}"),
        }
        assert!(sink.has(WarningCategory::MalformedNumber));
    }

    #[test]
    fn test_non_color_node() {
        let (spec, _) = parse("<solidFill/>");
        assert!(spec.is_none());
    }

    #[test]
    fn test_from_parent() {
        let sink = Diagnostics::new();
        let fill = XmlNode::parse(r#"<solidFill><prstClr val="red"/></solidFill>"#).unwrap();
        let spec = ColorSpec::from_parent(&fill, &sink).unwrap();
        assert_eq!(spec.base, ColorBase::PresetName("red".into()));
    }

    #[test]
    fn test_rank_order() {
        let mut mods = vec![
            Modifier::Tint(0.1),
            Modifier::Shade(0.1),
            Modifier::SatMod(1.0),
            Modifier::LumOff(0.1),
            Modifier::LumMod(0.5),
            Modifier::HueMod(1.0),
            Modifier::Alpha(0.5),
        ];
        mods.sort_by_key(Modifier::rank);
        assert_eq!(mods[0], Modifier::Alpha(0.5));
        assert_eq!(mods[3], Modifier::LumOff(0.1));
        assert_eq!(mods[6], Modifier::Tint(0.1));
    }
}
