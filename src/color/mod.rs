//! Color resolution engine
//!
//! Turns a [`ColorSpec`] (base color plus modifier chain) into a final
//! [`Rgba`], consulting the theme for scheme colors.

pub mod model;
pub mod presets;
pub mod resolver;
pub mod spec;

pub use model::{Hsl, ParseRgbaError, Rgb, Rgba};
pub use presets::{preset_color, system_color};
pub use resolver::{
    apply_modifiers, literal_rgb, resolve_color, resolve_color_with_placeholder,
    PLACEHOLDER_COLOR,
};
pub use spec::{ColorBase, ColorSpec, Modifier};
