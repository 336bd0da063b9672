//! Shape and background fill resolution

use serde::Serialize;

use crate::color::{resolve_color, resolve_color_with_placeholder, ColorSpec, Rgba};
use crate::context::ProcessingContext;
use crate::error::ResolveError;
use crate::node::XmlNode;
use crate::theme::FormatScheme;

/// A single resolved color in interchange form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFill {
    /// Always `rgba(r,g,b,a)`
    pub rgba: String,
}

impl ResolvedFill {
    pub fn new(color: Rgba) -> Self {
        Self {
            rgba: color.to_string(),
        }
    }
}

impl From<Rgba> for ResolvedFill {
    fn from(color: Rgba) -> Self {
        Self::new(color)
    }
}

/// Gradient geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GradientKind {
    /// Rotation in degrees, with the 90° renderer baseline already added
    Linear(f64),
    Radial,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position along the gradient, 0-100
    pub position: f64,
    pub fill: ResolvedFill,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientFill {
    pub stops: Vec<GradientStop>,
    pub kind: GradientKind,
}

/// A resolved fill of any kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Fill {
    NoFill,
    Solid(ResolvedFill),
    Gradient(GradientFill),
    Pattern {
        preset: String,
        foreground: ResolvedFill,
        background: ResolvedFill,
    },
    /// Image fill; the relationship id is resolved by the caller
    Picture { embed: Option<String> },
}

impl Fill {
    pub fn solid(color: Rgba) -> Self {
        Fill::Solid(ResolvedFill::new(color))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Fill::NoFill)
    }
}

const FILL_TAGS: &[&str] = &[
    "noFill",
    "solidFill",
    "gradFill",
    "pattFill",
    "grpFill",
    "blipFill",
];

/// Whether `tag` names a fill element
pub fn is_fill_tag(tag: &str) -> bool {
    FILL_TAGS.contains(&tag)
}

/// First fill element among `parent`'s direct children
pub(crate) fn find_fill(parent: &XmlNode) -> Option<&XmlNode> {
    parent.children.iter().find(|c| is_fill_tag(&c.tag))
}

/// Resolve the fill of a shape element (`p:sp`, `p:cxnSp`, ...).
///
/// A fill directly in `spPr` wins; otherwise the `style/fillRef` is looked up
/// in the theme's format scheme with `phClr` bound to the reference color.
/// Fills nested in `spPr/ln` belong to the stroke and are never consulted.
pub fn resolve_fill(shape: &XmlNode, ctx: &ProcessingContext) -> Result<Fill, ResolveError> {
    if let Some(direct) = shape.find_child("spPr").and_then(find_fill) {
        return resolve_fill_node(direct, None, ctx);
    }
    match shape.find(&["style", "fillRef"]) {
        Some(fill_ref) => resolve_style_reference(fill_ref, FormatScheme::fill_style, ctx),
        None => Ok(Fill::NoFill),
    }
}

/// Resolve a slide background (`p:bg`): either `bgPr` with a fill, or a
/// `bgRef` into the theme's background fill list (indices from 1001)
pub fn resolve_background(bg: &XmlNode, ctx: &ProcessingContext) -> Result<Fill, ResolveError> {
    if let Some(fill) = bg.find_child("bgPr").and_then(find_fill) {
        return resolve_fill_node(fill, None, ctx);
    }
    match bg.find_child("bgRef") {
        Some(bg_ref) => resolve_style_reference(bg_ref, FormatScheme::fill_style, ctx),
        None => Ok(Fill::NoFill),
    }
}

/// Resolve a `fillRef`/`bgRef`/`lnRef`-style reference.
///
/// Falls back to a solid fill of the reference color when the theme has no
/// entry at that index; index `0` means no fill.
pub(crate) fn resolve_style_reference(
    reference: &XmlNode,
    lookup: fn(&FormatScheme, u32) -> Option<&XmlNode>,
    ctx: &ProcessingContext,
) -> Result<Fill, ResolveError> {
    let idx = reference
        .get("idx")
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(0);
    if idx == 0 {
        return Ok(Fill::NoFill);
    }

    let ref_color = ColorSpec::from_parent(reference, ctx.diagnostics)
        .map(|spec| resolve_color(&spec, ctx))
        .transpose()?;

    let entry = ctx.theme.and_then(|theme| lookup(&theme.formats, idx));
    let entry_fill = entry.and_then(|e| if is_fill_tag(&e.tag) { Some(e) } else { find_fill(e) });
    match (entry_fill, ref_color) {
        (Some(node), placeholder) => resolve_fill_node(node, placeholder, ctx),
        (None, Some(color)) => Ok(Fill::solid(color)),
        (None, None) => Ok(Fill::NoFill),
    }
}

/// Resolve one fill element, binding `phClr` to `placeholder` if given
pub fn resolve_fill_node(
    node: &XmlNode,
    placeholder: Option<Rgba>,
    ctx: &ProcessingContext,
) -> Result<Fill, ResolveError> {
    let color_of = |parent: Option<&XmlNode>, default: Rgba| -> Result<Rgba, ResolveError> {
        match parent.and_then(|p| ColorSpec::from_parent(p, ctx.diagnostics)) {
            Some(spec) => resolve_color_with_placeholder(&spec, placeholder, ctx),
            None => Ok(placeholder.unwrap_or(default)),
        }
    };

    let fill = match node.tag.as_str() {
        "noFill" => Fill::NoFill,
        "solidFill" => Fill::solid(color_of(Some(node), Rgba::opaque(0, 0, 0))?),
        "gradFill" => Fill::Gradient(resolve_gradient(node, placeholder, ctx)?),
        "pattFill" => Fill::Pattern {
            preset: node.get("prst").unwrap_or("pct5").to_string(),
            foreground: color_of(node.find_child("fgClr"), Rgba::opaque(0, 0, 0))?.into(),
            background: color_of(node.find_child("bgClr"), Rgba::opaque(255, 255, 255))?.into(),
        },
        "grpFill" => ctx.group_fill.cloned().unwrap_or(Fill::NoFill),
        "blipFill" => Fill::Picture {
            embed: node
                .find_child("blip")
                .and_then(|b| b.get("embed"))
                .map(str::to_string),
        },
        _ => Fill::NoFill,
    };
    Ok(fill)
}

fn resolve_gradient(
    node: &XmlNode,
    placeholder: Option<Rgba>,
    ctx: &ProcessingContext,
) -> Result<GradientFill, ResolveError> {
    let sink = ctx.diagnostics;
    let mut stops = Vec::new();
    if let Some(list) = node.find_child("gsLst") {
        for gs in list.children_named("gs") {
            // stop positions are in 1000ths of a percent
            let position = gs.attr_f64("pos", sink).unwrap_or(0.0) / 1000.0;
            let color = match ColorSpec::from_parent(gs, sink) {
                Some(spec) => resolve_color_with_placeholder(&spec, placeholder, ctx)?,
                None => placeholder.unwrap_or(Rgba::opaque(0, 0, 0)),
            };
            stops.push(GradientStop {
                position,
                fill: color.into(),
            });
        }
    }
    stops.sort_by(|a, b| a.position.total_cmp(&b.position));

    let kind = if node.find_child("path").is_some() {
        GradientKind::Radial
    } else {
        let angle = node
            .find_child("lin")
            .and_then(|lin| lin.attr_angle("ang", sink))
            .unwrap_or(0.0);
        GradientKind::Linear(angle + 90.0)
    };

    Ok(GradientFill { stops, kind })
}
