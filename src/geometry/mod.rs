//! Geometry engine
//!
//! Produces SVG path strings for preset and custom shape outlines, together
//! with a classification tag (`Preset(name)`, `Ellipse`, `Custom`).

pub mod custom;
pub mod guide;
pub mod path;
pub mod presets;
pub mod spec;

use serde::Serialize;

use crate::context::ProcessingContext;

pub use custom::{classify, custom_geometry, custom_path};
pub use guide::GuideContext;
pub use path::{Path, PathBuilder, PathSegment, Point};
pub use presets::{is_known_preset, preset_names, preset_path};
pub use spec::{Adjustments, CustomPath, GeometrySpec, PathCommand};

/// What kind of outline a resolved path represents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ShapeClassification {
    /// Drawn by the named preset formula
    Preset(String),
    /// Custom geometry recognized as a circle/ellipse
    Ellipse,
    Custom,
}

/// A render-ready outline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPath {
    /// SVG path data using only `M L C Q A Z`
    pub path: String,
    pub classification: ShapeClassification,
}

impl ResolvedPath {
    pub fn new(path: impl Into<String>, classification: ShapeClassification) -> Self {
        Self {
            path: path.into(),
            classification,
        }
    }
}

/// Resolve any geometry into the context's target box
pub fn resolve_geometry(spec: &GeometrySpec, ctx: &ProcessingContext) -> ResolvedPath {
    match spec {
        GeometrySpec::Preset { name, adjustments } => {
            preset_path(name, ctx.width, ctx.height, adjustments, ctx)
        }
        GeometrySpec::Custom { paths } => custom_geometry(paths, ctx.width, ctx.height, ctx),
    }
}
