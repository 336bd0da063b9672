//! Geometry descriptions and their parsing from `a:prstGeom` / `a:custGeom`

use std::collections::BTreeMap;

use crate::diagnostics::{DiagnosticSink, Warning, WarningCategory};
use crate::node::{XmlNode, ANGLE_DENOMINATOR, PERCENT_DENOMINATOR};

use super::guide::GuideContext;
use super::path::Point;

/// Named adjustment values as fractions (`val 25000` → `0.25`)
pub type Adjustments = BTreeMap<String, f64>;

/// A drawing command in a custom path's local coordinate space
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicBezierTo(Point, Point, Point),
    QuadBezierTo(Point, Point),
    /// Radii in local units, angles in degrees
    ArcTo {
        wr: f64,
        hr: f64,
        start_angle: f64,
        sweep_angle: f64,
    },
    Close,
}

/// One `a:path` of a custom geometry
#[derive(Debug, Clone, PartialEq)]
pub struct CustomPath {
    pub commands: Vec<PathCommand>,
    /// Local box width; `0` means the shape's own box
    pub local_width: f64,
    /// Local box height; `0` means the shape's own box
    pub local_height: f64,
}

impl CustomPath {
    pub fn new(commands: Vec<PathCommand>, local_width: f64, local_height: f64) -> Self {
        Self {
            commands,
            local_width,
            local_height,
        }
    }
}

/// Outline geometry of a shape
#[derive(Debug, Clone, PartialEq)]
pub enum GeometrySpec {
    Preset {
        name: String,
        adjustments: Adjustments,
    },
    Custom {
        paths: Vec<CustomPath>,
    },
}

impl GeometrySpec {
    /// Preset with no adjustments
    pub fn preset(name: impl Into<String>) -> Self {
        GeometrySpec::Preset {
            name: name.into(),
            adjustments: Adjustments::new(),
        }
    }

    /// Custom geometry with a single path
    pub fn custom(commands: Vec<PathCommand>, local_width: f64, local_height: f64) -> Self {
        GeometrySpec::Custom {
            paths: vec![CustomPath::new(commands, local_width, local_height)],
        }
    }

    /// Parse `a:prstGeom` or `a:custGeom`.
    ///
    /// `width`/`height` are the target box, used for built-in guide variables.
    pub fn from_node(
        node: &XmlNode,
        width: f64,
        height: f64,
        sink: &dyn DiagnosticSink,
    ) -> Option<GeometrySpec> {
        match node.tag.as_str() {
            "prstGeom" => Some(parse_preset(node, width, height, sink)),
            "custGeom" => Some(parse_custom(node, width, height, sink)),
            _ => None,
        }
    }

    /// Find and parse the geometry child of an `spPr` element
    pub fn from_shape_properties(
        sp_pr: &XmlNode,
        width: f64,
        height: f64,
        sink: &dyn DiagnosticSink,
    ) -> Option<GeometrySpec> {
        sp_pr
            .children
            .iter()
            .find_map(|c| Self::from_node(c, width, height, sink))
    }
}

fn parse_preset(node: &XmlNode, width: f64, height: f64, sink: &dyn DiagnosticSink) -> GeometrySpec {
    let name = node.get("prst").unwrap_or("rect").to_string();
    let mut adjustments = Adjustments::new();
    if let Some(av) = node.find_child("avLst") {
        let guides = GuideContext::new(width, height);
        for gd in av.children_named("gd") {
            let (Some(gd_name), Some(fmla)) = (gd.get("name"), gd.get("fmla")) else {
                continue;
            };
            let raw = guides.evaluate(fmla, sink);
            adjustments.insert(gd_name.to_string(), raw / PERCENT_DENOMINATOR);
        }
    }
    GeometrySpec::Preset { name, adjustments }
}

fn parse_custom(node: &XmlNode, width: f64, height: f64, sink: &dyn DiagnosticSink) -> GeometrySpec {
    let guide_lists: Vec<&XmlNode> = ["avLst", "gdLst"]
        .into_iter()
        .filter_map(|tag| node.find_child(tag))
        .collect();

    let paths = node
        .find_child("pathLst")
        .map(|list| {
            list.children_named("path")
                .map(|p| parse_path(p, &guide_lists, width, height, sink))
                .collect()
        })
        .unwrap_or_default();

    GeometrySpec::Custom { paths }
}

/// Parse one `a:path`; guides are evaluated in the path's own coordinate
/// space, falling back to the target box when `w`/`h` are absent or zero
fn parse_path(
    path: &XmlNode,
    guide_lists: &[&XmlNode],
    width: f64,
    height: f64,
    sink: &dyn DiagnosticSink,
) -> CustomPath {
    let local_width = path.attr_f64("w", sink).unwrap_or(0.0);
    let local_height = path.attr_f64("h", sink).unwrap_or(0.0);
    let mut guides = GuideContext::new(
        if local_width > 0.0 { local_width } else { width },
        if local_height > 0.0 { local_height } else { height },
    );
    for list in guide_lists {
        guides.apply_list(list, sink);
    }

    let value = |node: &XmlNode, attr: &str| match node.get(attr) {
        Some(token) => guides.operand(token, sink),
        None => 0.0,
    };
    let point = |node: &XmlNode| Point::new(value(node, "x"), value(node, "y"));
    let points = |node: &XmlNode| node.children_named("pt").map(point).collect::<Vec<_>>();

    let mut commands = Vec::new();
    for cmd in &path.children {
        let pts = points(cmd);
        let command = match (cmd.tag.as_str(), pts.as_slice()) {
            ("moveTo", [p, ..]) => PathCommand::MoveTo(*p),
            ("lnTo", [p, ..]) => PathCommand::LineTo(*p),
            ("cubicBezTo", [c1, c2, end, ..]) => PathCommand::CubicBezierTo(*c1, *c2, *end),
            ("quadBezTo", [c, end, ..]) => PathCommand::QuadBezierTo(*c, *end),
            ("arcTo", _) => PathCommand::ArcTo {
                wr: value(cmd, "wR"),
                hr: value(cmd, "hR"),
                start_angle: value(cmd, "stAng") / ANGLE_DENOMINATOR,
                sweep_angle: value(cmd, "swAng") / ANGLE_DENOMINATOR,
            },
            ("close", _) => PathCommand::Close,
            (tag, _) => {
                sink.warn(Warning::new(
                    WarningCategory::Unsupported,
                    format!("path command <{}> ignored", tag),
                ));
                continue;
            }
        };
        commands.push(command);
    }

    CustomPath {
        commands,
        local_width,
        local_height,
    }
}
