//! Immutable per-slide theme snapshot

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::color::{literal_rgb, ColorSpec, Rgb};
use crate::diagnostics::{DiagnosticSink, Warning, WarningCategory};
use crate::node::XmlNode;

use super::color_map::ColorMapOverride;
use super::scheme::{ColorScheme, FontCollection, FontScheme, FormatScheme, SchemeSlot};

/// Default bound on color-map chain length
pub const DEFAULT_MAX_COLOR_MAP_DEPTH: usize = 10;

/// Errors that can occur when loading a theme
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme XML: {0}")]
    XmlError(#[from] roxmltree::Error),
    #[error("Failed to parse theme TOML: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("Invalid color '{value}' for theme slot '{slot}'")]
    InvalidColor { slot: String, value: String },
    #[error("Unknown theme slot '{0}'")]
    UnknownSlot(String),
}

/// Resolved color, font and format schemes plus the active color map.
///
/// Built once per deck (or per slide when the slide overrides the color map)
/// and shared read-only by every element resolved against it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStore {
    pub name: Option<String>,
    pub colors: ColorScheme,
    pub color_map: ColorMapOverride,
    pub fonts: FontScheme,
    pub formats: FormatScheme,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
    color_map: Option<HashMap<String, String>>,
    fonts: Option<TomlFonts>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

#[derive(Deserialize)]
struct TomlFonts {
    major: Option<String>,
    minor: Option<String>,
}

/// The Office theme PowerPoint applies to new decks
const DEFAULT_THEME: &str = r##"
[metadata]
name = "Office Theme"

[colors]
dk1 = "000000"
lt1 = "FFFFFF"
dk2 = "44546A"
lt2 = "E7E6E6"
accent1 = "4472C4"
accent2 = "ED7D31"
accent3 = "A5A5A5"
accent4 = "FFC000"
accent5 = "5B9BD5"
accent6 = "70AD47"
hlink = "0563C1"
folHlink = "954F72"

[fonts]
major = "Calibri Light"
minor = "Calibri"
"##;

impl ThemeStore {
    /// Create a store from a color scheme and color map
    pub fn new(colors: ColorScheme, color_map: ColorMapOverride) -> Self {
        Self {
            name: colors.name.clone(),
            colors,
            color_map,
            fonts: FontScheme::default(),
            formats: FormatScheme::default(),
        }
    }

    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a theme from a TOML string.
    ///
    /// Slots missing from `[colors]` keep the default theme's value; an absent
    /// `[color_map]` means the standard mapping.
    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        Self::from_toml_over(content, Self::default().colors)
    }

    fn from_toml_over(content: &str, mut colors: ColorScheme) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        for (key, value) in &parsed.colors {
            let slot =
                SchemeSlot::from_name(key).ok_or_else(|| ThemeError::UnknownSlot(key.clone()))?;
            let rgb = Rgb::from_hex(value).ok_or_else(|| ThemeError::InvalidColor {
                slot: key.clone(),
                value: value.clone(),
            })?;
            colors.set(slot, rgb);
        }

        let name = parsed.metadata.and_then(|m| m.name);
        colors.name = name.clone();

        let color_map = match parsed.color_map {
            Some(entries) => entries
                .into_iter()
                .fold(ColorMapOverride::empty(), |map, (k, v)| map.with(k, v)),
            None => ColorMapOverride::default(),
        };

        let fonts = parsed
            .fonts
            .map(|f| FontScheme {
                major: f.major.map(FontCollection::latin).unwrap_or_default(),
                minor: f.minor.map(FontCollection::latin).unwrap_or_default(),
            })
            .unwrap_or_default();

        Ok(Self {
            name,
            colors,
            color_map,
            fonts,
            formats: FormatScheme::default(),
        })
    }

    /// Load a DrawingML theme part (`ppt/theme/themeN.xml`)
    pub fn from_theme_xml(xml: &str, sink: &dyn DiagnosticSink) -> Result<Self, ThemeError> {
        let root = XmlNode::parse(xml)?;
        Ok(Self::from_theme_node(&root, sink))
    }

    /// Build from an already-parsed `a:theme` element.
    ///
    /// Slots the theme omits or that hold unusable colors keep the default
    /// theme's value.
    pub fn from_theme_node(theme: &XmlNode, sink: &dyn DiagnosticSink) -> Self {
        let mut store = Self::default();
        store.name = theme.get("name").map(str::to_string);

        let Some(elements) = theme.find_child("themeElements") else {
            return store;
        };

        if let Some(scheme) = elements.find_child("clrScheme") {
            store.colors.name = scheme.get("name").map(str::to_string);
            for slot in SchemeSlot::ALL {
                let Some(entry) = scheme.find_child(slot.name()) else {
                    continue;
                };
                let rgb = ColorSpec::from_parent(entry, sink)
                    .and_then(|spec| literal_rgb(&spec.base, sink));
                match rgb {
                    Some(rgb) => store.colors.set(slot, rgb),
                    None => sink.warn(Warning::new(
                        WarningCategory::UnknownColor,
                        format!("theme slot '{}' has no literal color", slot),
                    )),
                }
            }
        }

        if let Some(fonts) = elements.find_child("fontScheme") {
            store.fonts = FontScheme {
                major: fonts
                    .find_child("majorFont")
                    .map(FontCollection::from_node)
                    .unwrap_or_default(),
                minor: fonts
                    .find_child("minorFont")
                    .map(FontCollection::from_node)
                    .unwrap_or_default(),
            };
        }

        if let Some(formats) = elements.find_child("fmtScheme") {
            store.formats = FormatScheme::from_node(formats);
        }

        store
    }

    /// A new snapshot with a different color map (slide-level `clrMapOvr`)
    pub fn with_color_map(&self, color_map: ColorMapOverride) -> Self {
        Self {
            color_map,
            ..self.clone()
        }
    }

    /// Builder for the format scheme
    pub fn with_formats(mut self, formats: FormatScheme) -> Self {
        self.formats = formats;
        self
    }

    /// Builder for the font scheme
    pub fn with_fonts(mut self, fonts: FontScheme) -> Self {
        self.fonts = fonts;
        self
    }

    /// Literal color bound to a scheme slot
    pub fn resolve_slot(&self, slot: SchemeSlot) -> Rgb {
        self.colors.get(slot)
    }

    /// Map a semantic color name to a slot name with the default depth bound
    pub fn resolve_semantic(&self, name: &str, sink: &dyn DiagnosticSink) -> String {
        self.resolve_semantic_bounded(name, DEFAULT_MAX_COLOR_MAP_DEPTH, sink)
    }

    /// Follow the color-map chain from `name`.
    ///
    /// A name with no entry maps to itself; semantic names (anything that is
    /// not already a slot name) also produce an `UnmappedColor` warning. A
    /// chain that revisits a name or runs past `max_depth` hops produces a
    /// `CircularColorMap` warning and falls back to `name` itself.
    pub fn resolve_semantic_bounded(
        &self,
        name: &str,
        max_depth: usize,
        sink: &dyn DiagnosticSink,
    ) -> String {
        let mut chain: Vec<&str> = vec![name];
        let mut current = name;

        for _ in 0..max_depth {
            match self.color_map.get(current) {
                Some(next) if next == current => return current.to_string(),
                Some(next) => {
                    if chain.contains(&next) {
                        chain.push(next);
                        return self.cycle_fallback(name, &chain, sink);
                    }
                    chain.push(next);
                    current = next;
                }
                None => {
                    if chain.len() == 1 && SchemeSlot::from_name(current).is_none() {
                        sink.warn(Warning::new(
                            WarningCategory::UnmappedColor,
                            format!("no color map entry for '{}'", name),
                        ));
                    }
                    return current.to_string();
                }
            }
        }

        match self.color_map.get(current) {
            Some(next) if next != current => self.cycle_fallback(name, &chain, sink),
            _ => current.to_string(),
        }
    }

    fn cycle_fallback(&self, name: &str, chain: &[&str], sink: &dyn DiagnosticSink) -> String {
        let err = crate::ResolveError::circular(chain.iter().map(|s| s.to_string()).collect());
        sink.warn(Warning::new(WarningCategory::CircularColorMap, err.to_string()));
        name.to_string()
    }

    /// Resolve a `+mj-lt`-style font reference
    pub fn resolve_typeface<'a>(&'a self, typeface: &'a str) -> &'a str {
        self.fonts.resolve_typeface(typeface)
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::from_toml_over(DEFAULT_THEME, ColorScheme::new())
            .expect("Default theme should be valid TOML")
    }
}
