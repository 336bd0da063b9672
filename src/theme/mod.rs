//! Theme store: scheme colors, fonts, style matrix and the color map
//!
//! A [`ThemeStore`] is an immutable snapshot. Slide-level color map overrides
//! produce a new snapshot via [`ThemeStore::with_color_map`]; nothing is ever
//! mutated while elements are being resolved against it.

mod color_map;
mod scheme;
mod store;

pub use color_map::ColorMapOverride;
pub use scheme::{ColorScheme, FontCollection, FontScheme, FormatScheme, SchemeSlot};
pub use store::{ThemeError, ThemeStore, DEFAULT_MAX_COLOR_MAP_DEPTH};
