//! Stroke (outline) resolution from `a:ln` and `lnRef`

use serde::Serialize;

use crate::color::{resolve_color, ColorSpec, Rgba};
use crate::context::ProcessingContext;
use crate::error::ResolveError;
use crate::node::XmlNode;

use super::fill::{find_fill, resolve_fill_node, Fill};

/// Line width used when neither the shape nor the theme gives one (0.75pt)
pub const DEFAULT_LINE_WIDTH_EMU: f64 = 9525.0;

/// A resolved outline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStroke {
    pub fill: Fill,
    /// Width in EMU; unit conversion is up to the caller
    pub width: f64,
    /// Preset dash name (`dash`, `sysDot`, ...); `None` means solid
    pub dash: Option<String>,
    /// `flat`, `rnd` or `sq`
    pub cap: Option<String>,
    /// `round`, `bevel` or `miter`
    pub join: Option<String>,
    pub head_end: Option<String>,
    pub tail_end: Option<String>,
}

/// Resolve the stroke of a shape element.
///
/// Properties on `spPr/ln` override those of the theme line selected by
/// `style/lnRef`, whose `phClr` binds to the reference color. Returns `None`
/// when the shape has no outline.
pub fn resolve_stroke(
    shape: &XmlNode,
    ctx: &ProcessingContext,
) -> Result<Option<ResolvedStroke>, ResolveError> {
    let direct = shape.find(&["spPr", "ln"]);
    let reference = shape.find(&["style", "lnRef"]);

    let ref_idx = reference
        .and_then(|r| r.get("idx"))
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(0);
    if direct.is_none() && ref_idx == 0 {
        return Ok(None);
    }

    // idx 0 selects neither a theme line nor the reference color
    let ref_color = reference
        .filter(|_| ref_idx != 0)
        .and_then(|r| ColorSpec::from_parent(r, ctx.diagnostics))
        .map(|spec| resolve_color(&spec, ctx))
        .transpose()?;
    let themed = ctx
        .theme
        .and_then(|theme| theme.formats.line_style(ref_idx));

    let fill = match (direct.and_then(find_fill), themed.and_then(find_fill)) {
        (Some(node), _) => resolve_fill_node(node, ref_color, ctx)?,
        (None, Some(node)) => resolve_fill_node(node, ref_color, ctx)?,
        (None, None) => match ref_color {
            Some(color) => Fill::solid(color),
            None if direct.is_some() => Fill::solid(Rgba::opaque(0, 0, 0)),
            None => Fill::NoFill,
        },
    };
    if fill.is_none() {
        return Ok(None);
    }

    let layers: Vec<&XmlNode> = direct.into_iter().chain(themed).collect();
    let first_attr = |name: &str| {
        layers
            .iter()
            .find_map(|l| l.get(name).map(str::to_string))
    };
    let first_child_val = |tag: &str, attr: &str| {
        layers
            .iter()
            .find_map(|l| l.find_child(tag).and_then(|c| c.get(attr)))
            .map(str::to_string)
    };

    let width = layers
        .iter()
        .find_map(|l| l.attr_f64("w", ctx.diagnostics))
        .unwrap_or(DEFAULT_LINE_WIDTH_EMU);
    let join = layers.iter().find_map(|l| {
        ["round", "bevel", "miter"]
            .into_iter()
            .find(|tag| l.find_child(tag).is_some())
            .map(str::to_string)
    });
    let arrow = |tag: &str| first_child_val(tag, "type").filter(|t| t != "none");

    Ok(Some(ResolvedStroke {
        fill,
        width,
        dash: first_child_val("prstDash", "val").filter(|d| d != "solid"),
        cap: first_attr("cap"),
        join,
        head_end: arrow("headEnd"),
        tail_end: arrow("tailEnd"),
    }))
}
