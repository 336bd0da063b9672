//! Preset shape formulas
//!
//! Each preset is a pure function of the target box and its adjustment
//! values. Adjustments are fractions; length adjustments scale the shorter
//! side (`ss`) unless noted, angle adjustments are degrees once converted.

use std::collections::HashMap;
use std::f64::consts::FRAC_1_SQRT_2;
use std::sync::OnceLock;

use crate::context::ProcessingContext;
use crate::diagnostics::{Warning, WarningCategory};
use crate::node::{ANGLE_DENOMINATOR, PERCENT_DENOMINATOR};

use super::path::{PathBuilder, Point};
use super::spec::Adjustments;
use super::{ResolvedPath, ShapeClassification};

/// Target box plus adjustment lookup handed to every formula
pub(crate) struct Frame<'a> {
    pub w: f64,
    pub h: f64,
    adjustments: &'a Adjustments,
}

impl Frame<'_> {
    fn ss(&self) -> f64 {
        self.w.min(self.h)
    }

    fn hc(&self) -> f64 {
        self.w / 2.0
    }

    fn vc(&self) -> f64 {
        self.h / 2.0
    }

    fn adj(&self, name: &str, default: f64) -> f64 {
        self.adjustments.get(name).copied().unwrap_or(default)
    }

    /// Angle adjustment in degrees (`val 5400000` is stored as `54.0`)
    fn adj_angle(&self, name: &str, default_deg: f64) -> f64 {
        self.adjustments
            .get(name)
            .map(|v| v * PERCENT_DENOMINATOR / ANGLE_DENOMINATOR)
            .unwrap_or(default_deg)
    }

    /// Point on the inscribed ellipse scaled by `k` at `deg` (0 = right, clockwise)
    fn on_ellipse(&self, deg: f64, k: f64) -> (f64, f64) {
        let a = deg.to_radians();
        (
            self.hc() + self.hc() * k * a.cos(),
            self.vc() + self.vc() * k * a.sin(),
        )
    }

    /// Scale a point given on a 21600-unit grid
    fn grid(&self, x: f64, y: f64) -> (f64, f64) {
        (self.w * x / 21600.0, self.h * y / 21600.0)
    }
}

type Formula = fn(&Frame, &mut PathBuilder);

static FORMULAS: &[(&str, Formula)] = &[
    // rectangles
    ("rect", rect),
    ("roundRect", round_rect),
    ("snip1Rect", snip1_rect),
    ("snip2SameRect", snip2_same_rect),
    ("snip2DiagRect", snip2_diag_rect),
    ("snipRoundRect", snip_round_rect),
    ("round1Rect", round1_rect),
    ("round2SameRect", round2_same_rect),
    ("round2DiagRect", round2_diag_rect),
    ("plaque", plaque),
    ("bevel", bevel),
    ("frame", frame),
    ("halfFrame", half_frame),
    ("corner", corner),
    ("diagStripe", diag_stripe),
    ("plus", plus),
    ("donut", donut),
    // basic shapes
    ("ellipse", ellipse),
    ("triangle", triangle),
    ("rtTriangle", rt_triangle),
    ("diamond", diamond),
    ("parallelogram", parallelogram),
    ("trapezoid", trapezoid),
    ("pentagon", pentagon),
    ("hexagon", hexagon),
    ("heptagon", heptagon),
    ("octagon", octagon),
    ("decagon", decagon),
    ("dodecagon", dodecagon),
    ("star4", star4),
    ("star5", star5),
    ("star6", star6),
    ("star7", star7),
    ("star8", star8),
    ("star10", star10),
    ("star12", star12),
    ("star16", star16),
    ("star24", star24),
    ("star32", star32),
    ("pie", pie),
    ("chord", chord),
    ("arc", arc),
    ("blockArc", block_arc),
    ("teardrop", teardrop),
    ("moon", moon),
    ("can", can),
    ("cube", cube),
    ("heart", heart),
    ("lightningBolt", lightning_bolt),
    ("sun", sun),
    ("wave", wave),
    ("doubleWave", double_wave),
    ("smileyFace", smiley_face),
    ("foldedCorner", folded_corner),
    // arrows
    ("rightArrow", right_arrow),
    ("leftArrow", left_arrow),
    ("upArrow", up_arrow),
    ("downArrow", down_arrow),
    ("leftRightArrow", left_right_arrow),
    ("upDownArrow", up_down_arrow),
    ("quadArrow", quad_arrow),
    ("notchedRightArrow", notched_right_arrow),
    ("stripedRightArrow", striped_right_arrow),
    ("chevron", chevron),
    ("homePlate", home_plate),
    // brackets
    ("leftBracket", left_bracket),
    ("rightBracket", right_bracket),
    ("leftBrace", left_brace),
    ("rightBrace", right_brace),
    ("bracketPair", bracket_pair),
    ("bracePair", brace_pair),
    // lines and connectors
    ("line", line),
    ("straightConnector1", line),
    ("bentConnector2", bent_connector2),
    ("bentConnector3", bent_connector3),
    ("curvedConnector3", curved_connector3),
    // flowchart
    ("flowChartProcess", rect),
    ("flowChartAlternateProcess", flow_alternate_process),
    ("flowChartDecision", diamond),
    ("flowChartInputOutput", flow_input_output),
    ("flowChartPredefinedProcess", flow_predefined_process),
    ("flowChartInternalStorage", flow_internal_storage),
    ("flowChartDocument", flow_document),
    ("flowChartTerminator", flow_terminator),
    ("flowChartPreparation", flow_preparation),
    ("flowChartManualInput", flow_manual_input),
    ("flowChartManualOperation", flow_manual_operation),
    ("flowChartConnector", ellipse),
    ("flowChartOffpageConnector", flow_offpage_connector),
    ("flowChartPunchedCard", flow_punched_card),
    ("flowChartPunchedTape", flow_punched_tape),
    ("flowChartSummingJunction", flow_summing_junction),
    ("flowChartOr", flow_or),
    ("flowChartCollate", flow_collate),
    ("flowChartSort", flow_sort),
    ("flowChartExtract", flow_extract),
    ("flowChartMerge", flow_merge),
    ("flowChartOnlineStorage", flow_online_storage),
    ("flowChartDelay", flow_delay),
    ("flowChartMagneticDisk", flow_magnetic_disk),
    ("flowChartMagneticDrum", flow_magnetic_drum),
    ("flowChartDisplay", flow_display),
    // callouts and math
    ("wedgeRectCallout", wedge_rect_callout),
    ("mathPlus", math_plus),
    ("mathMinus", math_minus),
    ("mathEqual", math_equal),
];

static TABLE: OnceLock<HashMap<&'static str, Formula>> = OnceLock::new();

fn table() -> &'static HashMap<&'static str, Formula> {
    TABLE.get_or_init(|| FORMULAS.iter().copied().collect())
}

/// Whether `name` has a bespoke formula
pub fn is_known_preset(name: &str) -> bool {
    table().contains_key(name)
}

/// Every preset name with a formula, in table order
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    FORMULAS.iter().map(|(name, _)| *name)
}

/// Build the outline of preset `name` in a `width` x `height` box.
///
/// Unknown names fall back to the rectangle formula with a warning. Action
/// buttons draw their rectangular body and classify as custom.
pub fn preset_path(
    name: &str,
    width: f64,
    height: f64,
    adjustments: &Adjustments,
    ctx: &ProcessingContext,
) -> ResolvedPath {
    let precision = ctx.config.coordinate_precision;
    let frame = Frame {
        w: width,
        h: height,
        adjustments,
    };

    let (formula, classification) = if name.starts_with("actionButton") {
        tracing::debug!(preset = name, "action button drawn as its frame");
        (rect as Formula, ShapeClassification::Custom)
    } else if let Some(formula) = table().get(name) {
        (*formula, ShapeClassification::Preset(name.to_string()))
    } else {
        ctx.diagnostics.warn(Warning::new(
            WarningCategory::UnknownPreset,
            format!("unknown preset '{}', drawing a rectangle", name),
        ));
        (rect as Formula, ShapeClassification::Preset("rect".to_string()))
    };

    let mut builder = PathBuilder::new();
    formula(&frame, &mut builder);
    ResolvedPath::new(builder.build().to_svg_d(precision), classification)
}

// ---------------------------------------------------------------------------
// shared builders

#[derive(Debug, Clone, Copy)]
enum Corner {
    Square,
    Snip(f64),
    Round(f64),
}

impl Corner {
    fn size(self) -> f64 {
        match self {
            Corner::Square => 0.0,
            Corner::Snip(r) | Corner::Round(r) => r.max(0.0),
        }
    }
}

/// Rectangle whose corners (tl, tr, br, bl) are square, snipped or rounded
fn corner_rect(b: &mut PathBuilder, x: f64, y: f64, w: f64, h: f64, corners: [Corner; 4]) {
    let [tl, tr, br, bl] = corners;
    let turn = |b: &mut PathBuilder, c: Corner, corner: Point, end: Point| match c {
        _ if c.size() <= 0.0 => {}
        Corner::Snip(_) => {
            b.line_to(end.x, end.y);
        }
        Corner::Round(_) => {
            b.quad_to(corner.x, corner.y, end.x, end.y);
        }
        Corner::Square => {}
    };

    b.move_to(x + tl.size(), y);
    b.line_to(x + w - tr.size(), y);
    turn(b, tr, Point::new(x + w, y), Point::new(x + w, y + tr.size()));
    b.line_to(x + w, y + h - br.size());
    turn(b, br, Point::new(x + w, y + h), Point::new(x + w - br.size(), y + h));
    b.line_to(x + bl.size(), y + h);
    turn(b, bl, Point::new(x, y + h), Point::new(x, y + h - bl.size()));
    if tl.size() > 0.0 {
        b.line_to(x, y + tl.size());
        turn(b, tl, Point::new(x, y), Point::new(x + tl.size(), y));
    }
    b.close();
}

/// Clamp a length adjustment into `0..=max`
fn clamp_len(v: f64, max: f64) -> f64 {
    v.max(0.0).min(max)
}

/// Regular `n`-gon inscribed in the box, first vertex at `start_deg`
fn regular_polygon(f: &Frame, b: &mut PathBuilder, n: usize, start_deg: f64) {
    let step = 360.0 / n as f64;
    let points: Vec<_> = (0..n)
        .map(|i| f.on_ellipse(start_deg + step * i as f64, 1.0))
        .collect();
    b.polygon(&points);
}

/// `n`-pointed star with inner radius `inner` (fraction of outer), top point first
fn star(f: &Frame, b: &mut PathBuilder, n: usize, inner: f64) {
    let step = 180.0 / n as f64;
    let points: Vec<_> = (0..2 * n)
        .map(|i| {
            let k = if i % 2 == 0 { 1.0 } else { inner };
            f.on_ellipse(-90.0 + step * i as f64, k)
        })
        .collect();
    b.polygon(&points);
}

/// Sweep from `start` to `end` going clockwise, a full turn when equal
fn clockwise_sweep(start: f64, end: f64) -> f64 {
    let sweep = (end - start).rem_euclid(360.0);
    if sweep == 0.0 {
        360.0
    } else {
        sweep
    }
}

fn grid_polygon(f: &Frame, b: &mut PathBuilder, points: &[(f64, f64)]) {
    let scaled: Vec<_> = points.iter().map(|&(x, y)| f.grid(x, y)).collect();
    b.polygon(&scaled);
}

// ---------------------------------------------------------------------------
// rectangles

fn rect(f: &Frame, b: &mut PathBuilder) {
    b.rect(0.0, 0.0, f.w, f.h);
}

fn round_rect(f: &Frame, b: &mut PathBuilder) {
    let r = clamp_len(f.adj("adj", 0.5) * f.ss() / 2.0, f.ss() / 2.0);
    corner_rect(b, 0.0, 0.0, f.w, f.h, [Corner::Round(r); 4]);
}

fn snip1_rect(f: &Frame, b: &mut PathBuilder) {
    let a = clamp_len(f.adj("adj", 0.16667) * f.ss(), f.ss() / 2.0);
    let s = Corner::Square;
    corner_rect(b, 0.0, 0.0, f.w, f.h, [s, Corner::Snip(a), s, s]);
}

fn snip2_same_rect(f: &Frame, b: &mut PathBuilder) {
    let top = clamp_len(f.adj("adj1", 0.16667) * f.ss(), f.ss() / 2.0);
    let bottom = clamp_len(f.adj("adj2", 0.0) * f.ss(), f.ss() / 2.0);
    corner_rect(
        b,
        0.0,
        0.0,
        f.w,
        f.h,
        [Corner::Snip(top), Corner::Snip(top), Corner::Snip(bottom), Corner::Snip(bottom)],
    );
}

fn snip2_diag_rect(f: &Frame, b: &mut PathBuilder) {
    let main = clamp_len(f.adj("adj1", 0.0) * f.ss(), f.ss() / 2.0);
    let anti = clamp_len(f.adj("adj2", 0.16667) * f.ss(), f.ss() / 2.0);
    corner_rect(
        b,
        0.0,
        0.0,
        f.w,
        f.h,
        [Corner::Snip(main), Corner::Snip(anti), Corner::Snip(main), Corner::Snip(anti)],
    );
}

fn snip_round_rect(f: &Frame, b: &mut PathBuilder) {
    let round = clamp_len(f.adj("adj1", 0.16667) * f.ss(), f.ss() / 2.0);
    let snip = clamp_len(f.adj("adj2", 0.16667) * f.ss(), f.ss() / 2.0);
    let s = Corner::Square;
    corner_rect(b, 0.0, 0.0, f.w, f.h, [Corner::Round(round), Corner::Snip(snip), s, s]);
}

fn round1_rect(f: &Frame, b: &mut PathBuilder) {
    let r = clamp_len(f.adj("adj", 0.16667) * f.ss(), f.ss() / 2.0);
    let s = Corner::Square;
    corner_rect(b, 0.0, 0.0, f.w, f.h, [s, Corner::Round(r), s, s]);
}

fn round2_same_rect(f: &Frame, b: &mut PathBuilder) {
    let top = clamp_len(f.adj("adj1", 0.16667) * f.ss(), f.ss() / 2.0);
    let bottom = clamp_len(f.adj("adj2", 0.0) * f.ss(), f.ss() / 2.0);
    corner_rect(
        b,
        0.0,
        0.0,
        f.w,
        f.h,
        [Corner::Round(top), Corner::Round(top), Corner::Round(bottom), Corner::Round(bottom)],
    );
}

fn round2_diag_rect(f: &Frame, b: &mut PathBuilder) {
    let main = clamp_len(f.adj("adj1", 0.16667) * f.ss(), f.ss() / 2.0);
    let anti = clamp_len(f.adj("adj2", 0.0) * f.ss(), f.ss() / 2.0);
    corner_rect(
        b,
        0.0,
        0.0,
        f.w,
        f.h,
        [Corner::Round(main), Corner::Round(anti), Corner::Round(main), Corner::Round(anti)],
    );
}

fn plaque(f: &Frame, b: &mut PathBuilder) {
    let a = clamp_len(f.adj("adj", 0.16667) * f.ss(), f.ss() / 2.0);
    b.move_to(0.0, a)
        .arc_by_angle(a, a, 90.0, -90.0)
        .line_to(f.w - a, 0.0)
        .arc_by_angle(a, a, 180.0, -90.0)
        .line_to(f.w, f.h - a)
        .arc_by_angle(a, a, 270.0, -90.0)
        .line_to(a, f.h)
        .arc_by_angle(a, a, 0.0, -90.0)
        .close();
}

fn bevel(f: &Frame, b: &mut PathBuilder) {
    let a = clamp_len(f.adj("adj", 0.125) * f.ss(), f.ss() / 2.0);
    b.rect(0.0, 0.0, f.w, f.h)
        .rect(a, a, f.w - 2.0 * a, f.h - 2.0 * a);
}

fn frame(f: &Frame, b: &mut PathBuilder) {
    let a = clamp_len(f.adj("adj1", 0.125) * f.ss(), f.ss() / 2.0);
    b.rect(0.0, 0.0, f.w, f.h)
        .rect(a, a, f.w - 2.0 * a, f.h - 2.0 * a);
}

fn half_frame(f: &Frame, b: &mut PathBuilder) {
    let top = clamp_len(f.adj("adj1", 0.33333) * f.ss(), f.h);
    let left = clamp_len(f.adj("adj2", 0.33333) * f.ss(), f.w);
    b.polygon(&[
        (0.0, 0.0),
        (f.w, 0.0),
        (f.w - top, top),
        (left, top),
        (left, f.h - left),
        (0.0, f.h),
    ]);
}

fn corner(f: &Frame, b: &mut PathBuilder) {
    let dy = clamp_len(f.adj("adj1", 0.5) * f.ss(), f.h);
    let dx = clamp_len(f.adj("adj2", 0.5) * f.ss(), f.w);
    b.polygon(&[
        (0.0, 0.0),
        (dx, 0.0),
        (dx, f.h - dy),
        (f.w, f.h - dy),
        (f.w, f.h),
        (0.0, f.h),
    ]);
}

fn diag_stripe(f: &Frame, b: &mut PathBuilder) {
    let a = clamp_len(f.adj("adj", 0.5), 1.0);
    b.polygon(&[(0.0, f.h * a), (f.w * a, 0.0), (f.w, 0.0), (0.0, f.h)]);
}

fn plus(f: &Frame, b: &mut PathBuilder) {
    let a = clamp_len(f.adj("adj", 0.25) * f.ss(), f.ss() / 2.0);
    let (x1, x2, y1, y2) = (a, f.w - a, a, f.h - a);
    b.polygon(&[
        (x1, 0.0),
        (x2, 0.0),
        (x2, y1),
        (f.w, y1),
        (f.w, y2),
        (x2, y2),
        (x2, f.h),
        (x1, f.h),
        (x1, y2),
        (0.0, y2),
        (0.0, y1),
        (x1, y1),
    ]);
}

fn donut(f: &Frame, b: &mut PathBuilder) {
    let d = clamp_len(f.adj("adj", 0.25) * f.ss(), f.ss() / 2.0);
    b.ellipse(f.hc(), f.vc(), f.hc(), f.vc())
        .ellipse(f.hc(), f.vc(), f.hc() - d, f.vc() - d);
}

// ---------------------------------------------------------------------------
// basic shapes

fn ellipse(f: &Frame, b: &mut PathBuilder) {
    b.ellipse(f.hc(), f.vc(), f.hc(), f.vc());
}

fn triangle(f: &Frame, b: &mut PathBuilder) {
    let apex = f.w * clamp_len(f.adj("adj", 0.5), 1.0);
    b.polygon(&[(apex, 0.0), (f.w, f.h), (0.0, f.h)]);
}

fn rt_triangle(f: &Frame, b: &mut PathBuilder) {
    b.polygon(&[(0.0, 0.0), (f.w, f.h), (0.0, f.h)]);
}

fn diamond(f: &Frame, b: &mut PathBuilder) {
    b.polygon(&[(f.hc(), 0.0), (f.w, f.vc()), (f.hc(), f.h), (0.0, f.vc())]);
}

fn parallelogram(f: &Frame, b: &mut PathBuilder) {
    let x = clamp_len(f.adj("adj", 0.25) * f.ss(), f.w);
    b.polygon(&[(x, 0.0), (f.w, 0.0), (f.w - x, f.h), (0.0, f.h)]);
}

fn trapezoid(f: &Frame, b: &mut PathBuilder) {
    let x = clamp_len(f.adj("adj", 0.25) * f.ss(), f.w / 2.0);
    b.polygon(&[(0.0, f.h), (x, 0.0), (f.w - x, 0.0), (f.w, f.h)]);
}

fn pentagon(f: &Frame, b: &mut PathBuilder) {
    regular_polygon(f, b, 5, -90.0);
}

fn hexagon(f: &Frame, b: &mut PathBuilder) {
    regular_polygon(f, b, 6, 0.0);
}

fn heptagon(f: &Frame, b: &mut PathBuilder) {
    regular_polygon(f, b, 7, -90.0);
}

fn octagon(f: &Frame, b: &mut PathBuilder) {
    regular_polygon(f, b, 8, 22.5);
}

fn decagon(f: &Frame, b: &mut PathBuilder) {
    regular_polygon(f, b, 10, 0.0);
}

fn dodecagon(f: &Frame, b: &mut PathBuilder) {
    regular_polygon(f, b, 12, 15.0);
}

// star inner radius = adj * 2 of the outer radius
fn star4(f: &Frame, b: &mut PathBuilder) {
    star(f, b, 4, f.adj("adj", 0.125) * 2.0);
}

fn star5(f: &Frame, b: &mut PathBuilder) {
    star(f, b, 5, f.adj("adj", 0.19098) * 2.0);
}

fn star6(f: &Frame, b: &mut PathBuilder) {
    star(f, b, 6, f.adj("adj", 0.28868) * 2.0);
}

fn star7(f: &Frame, b: &mut PathBuilder) {
    star(f, b, 7, f.adj("adj", 0.34601) * 2.0);
}

fn star8(f: &Frame, b: &mut PathBuilder) {
    star(f, b, 8, f.adj("adj", 0.375) * 2.0);
}

fn star10(f: &Frame, b: &mut PathBuilder) {
    star(f, b, 10, f.adj("adj", 0.42533) * 2.0);
}

fn star12(f: &Frame, b: &mut PathBuilder) {
    star(f, b, 12, f.adj("adj", 0.375) * 2.0);
}

fn star16(f: &Frame, b: &mut PathBuilder) {
    star(f, b, 16, f.adj("adj", 0.375) * 2.0);
}

fn star24(f: &Frame, b: &mut PathBuilder) {
    star(f, b, 24, f.adj("adj", 0.375) * 2.0);
}

fn star32(f: &Frame, b: &mut PathBuilder) {
    star(f, b, 32, f.adj("adj", 0.375) * 2.0);
}

fn pie(f: &Frame, b: &mut PathBuilder) {
    let start = f.adj_angle("adj1", 0.0);
    let end = f.adj_angle("adj2", 270.0);
    let (x, y) = f.on_ellipse(start, 1.0);
    b.move_to(f.hc(), f.vc())
        .line_to(x, y)
        .arc_by_angle(f.hc(), f.vc(), start, clockwise_sweep(start, end))
        .close();
}

fn chord(f: &Frame, b: &mut PathBuilder) {
    let start = f.adj_angle("adj1", 45.0);
    let end = f.adj_angle("adj2", 270.0);
    let (x, y) = f.on_ellipse(start, 1.0);
    b.move_to(x, y)
        .arc_by_angle(f.hc(), f.vc(), start, clockwise_sweep(start, end))
        .close();
}

fn arc(f: &Frame, b: &mut PathBuilder) {
    let start = f.adj_angle("adj1", 270.0);
    let end = f.adj_angle("adj2", 0.0);
    let (x, y) = f.on_ellipse(start, 1.0);
    b.move_to(x, y)
        .arc_by_angle(f.hc(), f.vc(), start, clockwise_sweep(start, end));
}

fn block_arc(f: &Frame, b: &mut PathBuilder) {
    let start = f.adj_angle("adj1", 180.0);
    let end = f.adj_angle("adj2", 0.0);
    let thickness = clamp_len(f.adj("adj3", 0.25) * f.ss(), f.ss() / 2.0);
    let sweep = clockwise_sweep(start, end);
    let (irx, iry) = (f.hc() - thickness, f.vc() - thickness);
    let (x, y) = f.on_ellipse(start, 1.0);
    let end_rad = (start + sweep).to_radians();

    b.move_to(x, y)
        .arc_by_angle(f.hc(), f.vc(), start, sweep)
        .line_to(f.hc() + irx * end_rad.cos(), f.vc() + iry * end_rad.sin())
        .arc_by_angle(irx, iry, start + sweep, -sweep)
        .close();
}

fn teardrop(f: &Frame, b: &mut PathBuilder) {
    let k = clamp_len(f.adj("adj", 1.0), 2.0);
    let tip = (f.hc() + f.hc() * k, f.vc() - f.vc() * k);
    b.move_to(0.0, f.vc())
        .arc_by_angle(f.hc(), f.vc(), 180.0, 90.0)
        .line_to(tip.0, tip.1)
        .line_to(f.w, f.vc())
        .arc_by_angle(f.hc(), f.vc(), 0.0, 180.0)
        .close();
}

fn moon(f: &Frame, b: &mut PathBuilder) {
    let g = clamp_len(f.adj("adj", 0.5) * f.ss(), f.w);
    b.move_to(f.w, 0.0)
        .arc_by_angle(f.w, f.vc(), 270.0, -180.0)
        .arc_by_angle(f.w - g, f.vc(), 90.0, 180.0)
        .close();
}

fn cylinder(b: &mut PathBuilder, w: f64, h: f64, ry: f64) {
    let rx = w / 2.0;
    b.move_to(0.0, ry)
        .arc_by_angle(rx, ry, 180.0, 180.0)
        .line_to(w, h - ry)
        .arc_by_angle(rx, ry, 0.0, 180.0)
        .close()
        .ellipse(rx, ry, rx, ry);
}

fn can(f: &Frame, b: &mut PathBuilder) {
    let ry = clamp_len(f.adj("adj", 0.25) * f.ss() / 2.0, f.h / 2.0);
    cylinder(b, f.w, f.h, ry);
}

fn cube(f: &Frame, b: &mut PathBuilder) {
    let d = clamp_len(f.adj("adj", 0.25) * f.ss(), f.ss());
    b.polygon(&[(0.0, d), (f.w - d, d), (f.w - d, f.h), (0.0, f.h)])
        .polygon(&[(0.0, d), (d, 0.0), (f.w, 0.0), (f.w - d, d)])
        .polygon(&[(f.w - d, d), (f.w, 0.0), (f.w, f.h - d), (f.w - d, f.h)]);
}

fn heart(f: &Frame, b: &mut PathBuilder) {
    let dx1 = f.w * 49.0 / 48.0;
    let dx2 = f.w * 10.0 / 48.0;
    let y1 = -f.h / 3.0;
    let top = f.h / 4.0;
    let (hc, h) = (f.hc(), f.h);
    b.move_to(hc, top)
        .cubic_to(
            Point::new(hc + dx2, y1),
            Point::new(hc + dx1, top),
            Point::new(hc, h),
        )
        .cubic_to(
            Point::new(hc - dx1, top),
            Point::new(hc - dx2, y1),
            Point::new(hc, top),
        )
        .close();
}

fn lightning_bolt(f: &Frame, b: &mut PathBuilder) {
    grid_polygon(
        f,
        b,
        &[
            (8458.0, 0.0),
            (12860.0, 6194.0),
            (11113.0, 6979.0),
            (14392.0, 10333.0),
            (13205.0, 10954.0),
            (21600.0, 21600.0),
            (10210.0, 12135.0),
            (11444.0, 11579.0),
            (6605.0, 7498.0),
            (7890.0, 6914.0),
            (0.0, 3314.0),
        ],
    );
}

fn sun(f: &Frame, b: &mut PathBuilder) {
    let core = (1.0 - 2.0 * f.adj("adj", 0.25)).clamp(0.1, 0.9);
    let base = (core + 0.1).min(0.95);
    for i in 0..8 {
        let a = 45.0 * i as f64;
        b.polygon(&[
            f.on_ellipse(a, 1.0),
            f.on_ellipse(a + 8.0, base),
            f.on_ellipse(a - 8.0, base),
        ]);
    }
    b.ellipse(f.hc(), f.vc(), f.hc() * core, f.vc() * core);
}

fn wave(f: &Frame, b: &mut PathBuilder) {
    let a = clamp_len(f.adj("adj1", 0.125) * f.h, f.h / 4.0);
    let (w, h) = (f.w, f.h);
    b.move_to(0.0, a)
        .cubic_to(
            Point::new(w / 3.0, 3.0 * a),
            Point::new(2.0 * w / 3.0, -a),
            Point::new(w, a),
        )
        .line_to(w, h - a)
        .cubic_to(
            Point::new(2.0 * w / 3.0, h - 3.0 * a),
            Point::new(w / 3.0, h + a),
            Point::new(0.0, h - a),
        )
        .close();
}

fn double_wave(f: &Frame, b: &mut PathBuilder) {
    let a = clamp_len(f.adj("adj1", 0.0625) * f.h, f.h / 4.0);
    let (w, h) = (f.w, f.h);
    b.move_to(0.0, a)
        .cubic_to(
            Point::new(w / 6.0, 3.0 * a),
            Point::new(w / 3.0, -a),
            Point::new(w / 2.0, a),
        )
        .cubic_to(
            Point::new(2.0 * w / 3.0, 3.0 * a),
            Point::new(5.0 * w / 6.0, -a),
            Point::new(w, a),
        )
        .line_to(w, h - a)
        .cubic_to(
            Point::new(5.0 * w / 6.0, h - 3.0 * a),
            Point::new(2.0 * w / 3.0, h + a),
            Point::new(w / 2.0, h - a),
        )
        .cubic_to(
            Point::new(w / 3.0, h - 3.0 * a),
            Point::new(w / 6.0, h + a),
            Point::new(0.0, h - a),
        )
        .close();
}

fn smiley_face(f: &Frame, b: &mut PathBuilder) {
    let smile = f.adj("adj", 0.04653).clamp(-0.04653, 0.04653);
    let (w, h) = (f.w, f.h);
    b.ellipse(f.hc(), f.vc(), f.hc(), f.vc())
        .ellipse(w * 0.35, h * 0.35, w * 0.05, h * 0.05)
        .ellipse(w * 0.65, h * 0.35, w * 0.05, h * 0.05)
        .move_to(w * 0.3, h * 0.7)
        .quad_to(f.hc(), h * (0.7 + 4.0 * smile), w * 0.7, h * 0.7);
}

fn folded_corner(f: &Frame, b: &mut PathBuilder) {
    let d = clamp_len(f.adj("adj", 0.16667) * f.ss(), f.ss());
    b.polygon(&[
        (0.0, 0.0),
        (f.w, 0.0),
        (f.w, f.h - d),
        (f.w - d, f.h),
        (0.0, f.h),
    ])
    .polygon(&[
        (f.w - d, f.h),
        (f.w - d * 0.8, f.h - d * 0.8),
        (f.w, f.h - d),
    ]);
}

// ---------------------------------------------------------------------------
// arrows
//
// adj1 = shaft thickness as a fraction of the cross dimension,
// adj2 = head length as a fraction of ss

fn horizontal_shaft(f: &Frame) -> (f64, f64) {
    let half = clamp_len(f.adj("adj1", 0.5), 1.0) * f.h / 2.0;
    (f.vc() - half, f.vc() + half)
}

fn vertical_shaft(f: &Frame) -> (f64, f64) {
    let half = clamp_len(f.adj("adj1", 0.5), 1.0) * f.w / 2.0;
    (f.hc() - half, f.hc() + half)
}

fn head_length(f: &Frame, max: f64) -> f64 {
    clamp_len(f.adj("adj2", 0.5) * f.ss(), max)
}

fn right_arrow(f: &Frame, b: &mut PathBuilder) {
    let (y1, y2) = horizontal_shaft(f);
    let x1 = f.w - head_length(f, f.w);
    b.polygon(&[
        (0.0, y1),
        (x1, y1),
        (x1, 0.0),
        (f.w, f.vc()),
        (x1, f.h),
        (x1, y2),
        (0.0, y2),
    ]);
}

fn left_arrow(f: &Frame, b: &mut PathBuilder) {
    let (y1, y2) = horizontal_shaft(f);
    let x1 = head_length(f, f.w);
    b.polygon(&[
        (0.0, f.vc()),
        (x1, 0.0),
        (x1, y1),
        (f.w, y1),
        (f.w, y2),
        (x1, y2),
        (x1, f.h),
    ]);
}

fn up_arrow(f: &Frame, b: &mut PathBuilder) {
    let (x1, x2) = vertical_shaft(f);
    let y1 = head_length(f, f.h);
    b.polygon(&[
        (f.hc(), 0.0),
        (f.w, y1),
        (x2, y1),
        (x2, f.h),
        (x1, f.h),
        (x1, y1),
        (0.0, y1),
    ]);
}

fn down_arrow(f: &Frame, b: &mut PathBuilder) {
    let (x1, x2) = vertical_shaft(f);
    let y1 = f.h - head_length(f, f.h);
    b.polygon(&[
        (x1, 0.0),
        (x2, 0.0),
        (x2, y1),
        (f.w, y1),
        (f.hc(), f.h),
        (0.0, y1),
        (x1, y1),
    ]);
}

fn left_right_arrow(f: &Frame, b: &mut PathBuilder) {
    let (y1, y2) = horizontal_shaft(f);
    let x1 = head_length(f, f.w / 2.0);
    let x2 = f.w - x1;
    b.polygon(&[
        (0.0, f.vc()),
        (x1, 0.0),
        (x1, y1),
        (x2, y1),
        (x2, 0.0),
        (f.w, f.vc()),
        (x2, f.h),
        (x2, y2),
        (x1, y2),
        (x1, f.h),
    ]);
}

fn up_down_arrow(f: &Frame, b: &mut PathBuilder) {
    let (x1, x2) = vertical_shaft(f);
    let y1 = head_length(f, f.h / 2.0);
    let y2 = f.h - y1;
    b.polygon(&[
        (f.hc(), 0.0),
        (f.w, y1),
        (x2, y1),
        (x2, y2),
        (f.w, y2),
        (f.hc(), f.h),
        (0.0, y2),
        (x1, y2),
        (x1, y1),
        (0.0, y1),
    ]);
}

fn quad_arrow(f: &Frame, b: &mut PathBuilder) {
    let ss = f.ss();
    let s = clamp_len(f.adj("adj1", 0.225) * ss / 2.0, ss / 2.0);
    let hw = clamp_len(f.adj("adj2", 0.225) * ss, ss / 2.0).max(s);
    let hl = clamp_len(f.adj("adj3", 0.225) * ss, ss / 2.0);
    let (w, h, hc, vc) = (f.w, f.h, f.hc(), f.vc());
    b.polygon(&[
        (hc, 0.0),
        (hc + hw, hl),
        (hc + s, hl),
        (hc + s, vc - s),
        (w - hl, vc - s),
        (w - hl, vc - hw),
        (w, vc),
        (w - hl, vc + hw),
        (w - hl, vc + s),
        (hc + s, vc + s),
        (hc + s, h - hl),
        (hc + hw, h - hl),
        (hc, h),
        (hc - hw, h - hl),
        (hc - s, h - hl),
        (hc - s, vc + s),
        (hl, vc + s),
        (hl, vc + hw),
        (0.0, vc),
        (hl, vc - hw),
        (hl, vc - s),
        (hc - s, vc - s),
        (hc - s, hl),
        (hc - hw, hl),
    ]);
}

fn notched_right_arrow(f: &Frame, b: &mut PathBuilder) {
    let (y1, y2) = horizontal_shaft(f);
    let head = head_length(f, f.w);
    let x1 = f.w - head;
    let notch = if f.h > 0.0 { head * (y2 - y1) / f.h } else { 0.0 };
    b.polygon(&[
        (0.0, y1),
        (x1, y1),
        (x1, 0.0),
        (f.w, f.vc()),
        (x1, f.h),
        (x1, y2),
        (0.0, y2),
        (notch, f.vc()),
    ]);
}

fn striped_right_arrow(f: &Frame, b: &mut PathBuilder) {
    let (y1, y2) = horizontal_shaft(f);
    let x1 = f.w - head_length(f, f.w);
    let ss = f.ss();
    let body = ss * 5.0 / 32.0;
    b.rect(0.0, y1, ss / 32.0, y2 - y1)
        .rect(ss / 16.0, y1, ss / 16.0, y2 - y1)
        .polygon(&[
            (body, y1),
            (x1, y1),
            (x1, 0.0),
            (f.w, f.vc()),
            (x1, f.h),
            (x1, y2),
            (body, y2),
        ]);
}

fn chevron(f: &Frame, b: &mut PathBuilder) {
    let x = clamp_len(f.adj("adj", 0.5) * f.ss(), f.w);
    b.polygon(&[
        (0.0, 0.0),
        (f.w - x, 0.0),
        (f.w, f.vc()),
        (f.w - x, f.h),
        (0.0, f.h),
        (x, f.vc()),
    ]);
}

fn home_plate(f: &Frame, b: &mut PathBuilder) {
    let x = clamp_len(f.adj("adj", 0.5) * f.ss(), f.w);
    b.polygon(&[
        (0.0, 0.0),
        (f.w - x, 0.0),
        (f.w, f.vc()),
        (f.w - x, f.h),
        (0.0, f.h),
    ]);
}

// ---------------------------------------------------------------------------
// brackets

fn left_bracket(f: &Frame, b: &mut PathBuilder) {
    let y = clamp_len(f.adj("adj", 0.08333) * f.ss(), f.h / 2.0);
    b.move_to(f.w, f.h)
        .quad_to(0.0, f.h, 0.0, f.h - y)
        .line_to(0.0, y)
        .quad_to(0.0, 0.0, f.w, 0.0);
}

fn right_bracket(f: &Frame, b: &mut PathBuilder) {
    let y = clamp_len(f.adj("adj", 0.08333) * f.ss(), f.h / 2.0);
    b.move_to(0.0, 0.0)
        .quad_to(f.w, 0.0, f.w, y)
        .line_to(f.w, f.h - y)
        .quad_to(f.w, f.h, 0.0, f.h);
}

fn left_brace(f: &Frame, b: &mut PathBuilder) {
    let y = clamp_len(f.adj("adj1", 0.08333) * f.ss(), f.h / 4.0);
    let ym = f.h * clamp_len(f.adj("adj2", 0.5), 1.0);
    let (w, h, hc) = (f.w, f.h, f.hc());
    b.move_to(w, h)
        .quad_to(hc, h, hc, h - y)
        .line_to(hc, ym + y)
        .quad_to(hc, ym, 0.0, ym)
        .quad_to(hc, ym, hc, ym - y)
        .line_to(hc, y)
        .quad_to(hc, 0.0, w, 0.0);
}

fn right_brace(f: &Frame, b: &mut PathBuilder) {
    let y = clamp_len(f.adj("adj1", 0.08333) * f.ss(), f.h / 4.0);
    let ym = f.h * clamp_len(f.adj("adj2", 0.5), 1.0);
    let (w, h, hc) = (f.w, f.h, f.hc());
    b.move_to(0.0, 0.0)
        .quad_to(hc, 0.0, hc, y)
        .line_to(hc, ym - y)
        .quad_to(hc, ym, w, ym)
        .quad_to(hc, ym, hc, ym + y)
        .line_to(hc, h - y)
        .quad_to(hc, h, 0.0, h);
}

fn bracket_pair(f: &Frame, b: &mut PathBuilder) {
    let r = clamp_len(f.adj("adj", 0.16667) * f.ss(), f.ss() / 2.0);
    let (w, h) = (f.w, f.h);
    b.move_to(r, h)
        .quad_to(0.0, h, 0.0, h - r)
        .line_to(0.0, r)
        .quad_to(0.0, 0.0, r, 0.0)
        .move_to(w - r, 0.0)
        .quad_to(w, 0.0, w, r)
        .line_to(w, h - r)
        .quad_to(w, h, w - r, h);
}

fn brace_pair(f: &Frame, b: &mut PathBuilder) {
    let d = clamp_len(f.adj("adj", 0.08333) * f.ss(), f.ss() / 4.0);
    let (w, h, vc) = (f.w, f.h, f.vc());
    b.move_to(2.0 * d, h)
        .quad_to(d, h, d, h - d)
        .line_to(d, vc + d)
        .quad_to(d, vc, 0.0, vc)
        .quad_to(d, vc, d, vc - d)
        .line_to(d, d)
        .quad_to(d, 0.0, 2.0 * d, 0.0)
        .move_to(w - 2.0 * d, 0.0)
        .quad_to(w - d, 0.0, w - d, d)
        .line_to(w - d, vc - d)
        .quad_to(w - d, vc, w, vc)
        .quad_to(w - d, vc, w - d, vc + d)
        .line_to(w - d, h - d)
        .quad_to(w - d, h, w - 2.0 * d, h);
}

// ---------------------------------------------------------------------------
// lines and connectors

fn line(f: &Frame, b: &mut PathBuilder) {
    b.move_to(0.0, 0.0).line_to(f.w, f.h);
}

fn bent_connector2(f: &Frame, b: &mut PathBuilder) {
    b.polyline(&[(0.0, 0.0), (f.w, 0.0), (f.w, f.h)]);
}

fn bent_connector3(f: &Frame, b: &mut PathBuilder) {
    let x1 = f.w * f.adj("adj1", 0.5);
    b.polyline(&[(0.0, 0.0), (x1, 0.0), (x1, f.h), (f.w, f.h)]);
}

fn curved_connector3(f: &Frame, b: &mut PathBuilder) {
    let x1 = f.w * f.adj("adj1", 0.5);
    b.move_to(0.0, 0.0).cubic_to(
        Point::new(x1, 0.0),
        Point::new(x1, f.h),
        Point::new(f.w, f.h),
    );
}

// ---------------------------------------------------------------------------
// flowchart

fn flow_alternate_process(f: &Frame, b: &mut PathBuilder) {
    let r = f.ss() / 6.0;
    corner_rect(b, 0.0, 0.0, f.w, f.h, [Corner::Round(r); 4]);
}

fn flow_input_output(f: &Frame, b: &mut PathBuilder) {
    let (w, h) = (f.w, f.h);
    b.polygon(&[(w / 5.0, 0.0), (w, 0.0), (4.0 * w / 5.0, h), (0.0, h)]);
}

fn flow_predefined_process(f: &Frame, b: &mut PathBuilder) {
    let (w, h) = (f.w, f.h);
    b.rect(0.0, 0.0, w, h)
        .polyline(&[(w / 8.0, 0.0), (w / 8.0, h)])
        .polyline(&[(7.0 * w / 8.0, 0.0), (7.0 * w / 8.0, h)]);
}

fn flow_internal_storage(f: &Frame, b: &mut PathBuilder) {
    let (w, h) = (f.w, f.h);
    b.rect(0.0, 0.0, w, h)
        .polyline(&[(w / 8.0, 0.0), (w / 8.0, h)])
        .polyline(&[(0.0, h / 8.0), (w, h / 8.0)]);
}

fn flow_document(f: &Frame, b: &mut PathBuilder) {
    let (x, y) = f.grid(21600.0, 17322.0);
    let c1 = f.grid(10800.0, 17322.0);
    let c2 = f.grid(10800.0, 23922.0);
    let end = f.grid(0.0, 20172.0);
    b.move_to(0.0, 0.0)
        .line_to(f.w, 0.0)
        .line_to(x, y)
        .cubic_to(
            Point::new(c1.0, c1.1),
            Point::new(c2.0, c2.1),
            Point::new(end.0, end.1),
        )
        .close();
}

fn flow_terminator(f: &Frame, b: &mut PathBuilder) {
    let rx = f.w * 3475.0 / 21600.0;
    let ry = f.vc();
    b.move_to(rx, 0.0)
        .line_to(f.w - rx, 0.0)
        .arc_by_angle(rx, ry, 270.0, 180.0)
        .line_to(rx, f.h)
        .arc_by_angle(rx, ry, 90.0, 180.0)
        .close();
}

fn flow_preparation(f: &Frame, b: &mut PathBuilder) {
    let (w, h, vc) = (f.w, f.h, f.vc());
    b.polygon(&[
        (0.0, vc),
        (w / 5.0, 0.0),
        (4.0 * w / 5.0, 0.0),
        (w, vc),
        (4.0 * w / 5.0, h),
        (w / 5.0, h),
    ]);
}

fn flow_manual_input(f: &Frame, b: &mut PathBuilder) {
    b.polygon(&[(0.0, f.h / 5.0), (f.w, 0.0), (f.w, f.h), (0.0, f.h)]);
}

fn flow_manual_operation(f: &Frame, b: &mut PathBuilder) {
    let (w, h) = (f.w, f.h);
    b.polygon(&[(0.0, 0.0), (w, 0.0), (4.0 * w / 5.0, h), (w / 5.0, h)]);
}

fn flow_offpage_connector(f: &Frame, b: &mut PathBuilder) {
    let (w, h) = (f.w, f.h);
    b.polygon(&[
        (0.0, 0.0),
        (w, 0.0),
        (w, 4.0 * h / 5.0),
        (f.hc(), h),
        (0.0, 4.0 * h / 5.0),
    ]);
}

fn flow_punched_card(f: &Frame, b: &mut PathBuilder) {
    let (w, h) = (f.w, f.h);
    b.polygon(&[(w / 5.0, 0.0), (w, 0.0), (w, h), (0.0, h), (0.0, h / 5.0)]);
}

fn flow_punched_tape(f: &Frame, b: &mut PathBuilder) {
    let (w, h) = (f.w, f.h);
    let a = h / 10.0;
    b.move_to(0.0, a)
        .quad_to(w / 4.0, 3.0 * a, w / 2.0, a)
        .quad_to(3.0 * w / 4.0, -a, w, a)
        .line_to(w, h - a)
        .quad_to(3.0 * w / 4.0, h - 3.0 * a, w / 2.0, h - a)
        .quad_to(w / 4.0, h + a, 0.0, h - a)
        .close();
}

fn flow_summing_junction(f: &Frame, b: &mut PathBuilder) {
    let (hc, vc) = (f.hc(), f.vc());
    let (dx, dy) = (hc * FRAC_1_SQRT_2, vc * FRAC_1_SQRT_2);
    b.ellipse(hc, vc, hc, vc)
        .polyline(&[(hc - dx, vc - dy), (hc + dx, vc + dy)])
        .polyline(&[(hc + dx, vc - dy), (hc - dx, vc + dy)]);
}

fn flow_or(f: &Frame, b: &mut PathBuilder) {
    let (hc, vc) = (f.hc(), f.vc());
    b.ellipse(hc, vc, hc, vc)
        .polyline(&[(hc, 0.0), (hc, f.h)])
        .polyline(&[(0.0, vc), (f.w, vc)]);
}

fn flow_collate(f: &Frame, b: &mut PathBuilder) {
    b.polygon(&[(0.0, 0.0), (f.w, 0.0), (0.0, f.h), (f.w, f.h)]);
}

fn flow_sort(f: &Frame, b: &mut PathBuilder) {
    diamond(f, b);
    b.polyline(&[(0.0, f.vc()), (f.w, f.vc())]);
}

fn flow_extract(f: &Frame, b: &mut PathBuilder) {
    b.polygon(&[(f.hc(), 0.0), (f.w, f.h), (0.0, f.h)]);
}

fn flow_merge(f: &Frame, b: &mut PathBuilder) {
    b.polygon(&[(0.0, 0.0), (f.w, 0.0), (f.hc(), f.h)]);
}

fn flow_online_storage(f: &Frame, b: &mut PathBuilder) {
    let rx = f.w / 6.0;
    b.move_to(rx, 0.0)
        .line_to(f.w, 0.0)
        .arc_by_angle(rx, f.vc(), 270.0, -180.0)
        .line_to(rx, f.h)
        .arc_by_angle(rx, f.vc(), 90.0, 180.0)
        .close();
}

fn flow_delay(f: &Frame, b: &mut PathBuilder) {
    b.move_to(0.0, 0.0)
        .line_to(f.hc(), 0.0)
        .arc_by_angle(f.hc(), f.vc(), 270.0, 180.0)
        .line_to(0.0, f.h)
        .close();
}

fn flow_magnetic_disk(f: &Frame, b: &mut PathBuilder) {
    cylinder(b, f.w, f.h, f.h / 6.0);
}

fn flow_magnetic_drum(f: &Frame, b: &mut PathBuilder) {
    let rx = f.w / 6.0;
    let ry = f.vc();
    b.move_to(rx, 0.0)
        .line_to(f.w - rx, 0.0)
        .arc_by_angle(rx, ry, 270.0, 180.0)
        .line_to(rx, f.h)
        .arc_by_angle(rx, ry, 90.0, 180.0)
        .close()
        .move_to(f.w - rx, 0.0)
        .arc_by_angle(rx, ry, 270.0, -180.0);
}

fn flow_display(f: &Frame, b: &mut PathBuilder) {
    let rx = f.w / 6.0;
    b.move_to(0.0, f.vc())
        .line_to(rx, 0.0)
        .line_to(f.w - rx, 0.0)
        .arc_by_angle(rx, f.vc(), 270.0, 180.0)
        .line_to(rx, f.h)
        .close();
}

// ---------------------------------------------------------------------------
// callouts and math

fn wedge_rect_callout(f: &Frame, b: &mut PathBuilder) {
    let tip_x = f.hc() + f.w * f.adj("adj1", -0.20833);
    let tip_y = f.vc() + f.h * f.adj("adj2", 0.625);
    let (w, h) = (f.w, f.h);
    b.polygon(&[
        (0.0, 0.0),
        (w, 0.0),
        (w, h),
        (w * 5.0 / 12.0, h),
        (tip_x, tip_y),
        (w / 6.0, h),
        (0.0, h),
    ]);
}

fn math_plus(f: &Frame, b: &mut PathBuilder) {
    let t = clamp_len(f.adj("adj1", 0.2352) * f.ss() / 2.0, f.ss() / 2.0);
    let (mx, my) = (f.w * 0.1, f.h * 0.1);
    let (x1, x2, y1, y2) = (f.hc() - t, f.hc() + t, f.vc() - t, f.vc() + t);
    b.polygon(&[
        (x1, my),
        (x2, my),
        (x2, y1),
        (f.w - mx, y1),
        (f.w - mx, y2),
        (x2, y2),
        (x2, f.h - my),
        (x1, f.h - my),
        (x1, y2),
        (mx, y2),
        (mx, y1),
        (x1, y1),
    ]);
}

fn math_minus(f: &Frame, b: &mut PathBuilder) {
    let t = clamp_len(f.adj("adj1", 0.2352) * f.h / 2.0, f.h / 2.0);
    b.rect(f.w * 0.1, f.vc() - t, f.w * 0.8, 2.0 * t);
}

fn math_equal(f: &Frame, b: &mut PathBuilder) {
    let bar = clamp_len(f.adj("adj1", 0.2352) * f.h, f.h / 2.0);
    let gap = clamp_len(f.adj("adj2", 0.1176) * f.h, f.h / 2.0);
    b.rect(f.w * 0.1, f.vc() - gap / 2.0 - bar, f.w * 0.8, bar)
        .rect(f.w * 0.1, f.vc() + gap / 2.0, f.w * 0.8, bar);
}
