//! Style resolver
//!
//! Combines direct shape properties with theme style references into a
//! render-ready fill, stroke and outline.

mod fill;
mod line;

use serde::Serialize;

use crate::context::ProcessingContext;
use crate::error::ResolveError;
use crate::geometry::{resolve_geometry, GeometrySpec, ResolvedPath};
use crate::node::XmlNode;

pub use fill::{
    is_fill_tag, resolve_background, resolve_fill, resolve_fill_node, Fill, GradientFill,
    GradientKind, GradientStop, ResolvedFill,
};
pub use line::{resolve_stroke, ResolvedStroke, DEFAULT_LINE_WIDTH_EMU};

/// Everything needed to draw one shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedShapeStyle {
    pub fill: Fill,
    pub stroke: Option<ResolvedStroke>,
    pub path: ResolvedPath,
}

/// Resolve fill, stroke and outline of a shape element into the context's box.
///
/// Shapes without `prstGeom`/`custGeom` are drawn as rectangles.
pub fn resolve_shape(
    shape: &XmlNode,
    ctx: &ProcessingContext,
) -> Result<ResolvedShapeStyle, ResolveError> {
    let geometry = shape
        .find_child("spPr")
        .and_then(|sp_pr| {
            GeometrySpec::from_shape_properties(sp_pr, ctx.width, ctx.height, ctx.diagnostics)
        })
        .unwrap_or_else(|| GeometrySpec::preset("rect"));

    Ok(ResolvedShapeStyle {
        fill: resolve_fill(shape, ctx)?,
        stroke: resolve_stroke(shape, ctx)?,
        path: resolve_geometry(&geometry, ctx),
    })
}
