//! Slide Primitives - color and geometry resolution for DrawingML shapes
//!
//! Turns theme-aware color specifications and preset/custom shape geometry
//! into render-ready primitives: `rgba(r,g,b,a)` colors and SVG path strings.
//!
//! # Example
//!
//! ```rust
//! use slide_primitives::{resolve_shape_xml, ThemeStore};
//!
//! let theme = ThemeStore::default();
//! let shape = resolve_shape_xml(
//!     r#"<sp><spPr><prstGeom prst="rect"/><solidFill><schemeClr val="accent1"/></solidFill></spPr></sp>"#,
//!     Some(&theme),
//!     200.0,
//!     200.0,
//! )
//! .unwrap();
//!
//! assert_eq!(shape.path.path, "M 0 0 L 200 0 L 200 200 L 0 200 Z");
//! ```

pub mod color;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod node;
pub mod number;
pub mod style;
pub mod theme;

pub use color::{resolve_color, ColorBase, ColorSpec, Modifier, Rgb, Rgba};
pub use config::{OnMissingTheme, ResolveConfig};
pub use context::ProcessingContext;
pub use diagnostics::{DiagnosticSink, Diagnostics, TracingSink, Warning, WarningCategory};
pub use error::ResolveError;
pub use geometry::{
    custom_path, preset_path, resolve_geometry, GeometrySpec, PathCommand, ResolvedPath,
    ShapeClassification,
};
pub use node::XmlNode;
pub use style::{
    resolve_background, resolve_fill, resolve_shape, resolve_stroke, Fill, ResolvedFill,
    ResolvedShapeStyle, ResolvedStroke,
};
pub use theme::{ColorMapOverride, ThemeError, ThemeStore};

use thiserror::Error;

/// Errors from the string-in convenience entry points
#[derive(Debug, Error)]
pub enum Error {
    /// Input was not well-formed XML
    #[error("xml error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Theme could not be loaded
    #[error("theme error: {0}")]
    Theme(#[from] ThemeError),

    /// Resolution failed under the configured policy
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),
}

/// Resolve a shape element given as XML with default configuration.
///
/// Warnings go to `tracing`.
pub fn resolve_shape_xml(
    xml: &str,
    theme: Option<&ThemeStore>,
    width: f64,
    height: f64,
) -> Result<ResolvedShapeStyle, Error> {
    let sink = TracingSink;
    let shape = XmlNode::parse(xml)?;
    let mut ctx = ProcessingContext::new(&sink).with_size(width, height);
    ctx.theme = theme;
    Ok(resolve_shape(&shape, &ctx)?)
}

/// Resolve a shape element given as XML and collect the warnings produced
///
/// # Example
///
/// ```rust
/// use slide_primitives::{resolve_shape_with_diagnostics, ResolveConfig, WarningCategory};
///
/// let (shape, warnings) = resolve_shape_with_diagnostics(
///     r#"<sp><spPr><prstGeom prst="noSuchShape"/></spPr></sp>"#,
///     None,
///     10.0,
///     10.0,
///     ResolveConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(shape.path.path, "M 0 0 L 10 0 L 10 10 L 0 10 Z");
/// assert_eq!(warnings[0].category, WarningCategory::UnknownPreset);
/// ```
pub fn resolve_shape_with_diagnostics(
    xml: &str,
    theme: Option<&ThemeStore>,
    width: f64,
    height: f64,
    config: ResolveConfig,
) -> Result<(ResolvedShapeStyle, Vec<Warning>), Error> {
    let sink = Diagnostics::new();
    let shape = XmlNode::parse(xml)?;
    let mut ctx = ProcessingContext::new(&sink)
        .with_size(width, height)
        .with_config(config);
    ctx.theme = theme;
    let resolved = resolve_shape(&shape, &ctx)?;
    Ok((resolved, sink.take()))
}
