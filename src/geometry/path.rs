//! Path building and SVG path-data emission
//!
//! Output uses only `M L C Q A Z` with space-separated arguments, e.g.
//! `M 0 0 L 200 0 L 200 200 L 0 200 Z`.

use crate::number::format_decimal;

/// A point in path coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A segment in a built path
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        c1: Point,
        c2: Point,
        end: Point,
    },
    QuadTo {
        control: Point,
        end: Point,
    },
    /// Elliptical arc in SVG endpoint form
    ArcTo {
        rx: f64,
        ry: f64,
        large_arc: bool,
        sweep: bool, // true = clockwise on screen (y-down)
        end: Point,
    },
    Close,
}

/// A sequence of segments ready for serialization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

impl Path {
    /// Convert to SVG path data with at most `precision` decimals per number
    pub fn to_svg_d(&self, precision: u32) -> String {
        let n = |v: f64| format_decimal(v, precision);
        let p = |pt: &Point| format!("{} {}", n(pt.x), n(pt.y));

        self.segments
            .iter()
            .map(|seg| match seg {
                PathSegment::MoveTo(pt) => format!("M {}", p(pt)),
                PathSegment::LineTo(pt) => format!("L {}", p(pt)),
                PathSegment::CubicTo { c1, c2, end } => {
                    format!("C {} {} {}", p(c1), p(c2), p(end))
                }
                PathSegment::QuadTo { control, end } => format!("Q {} {}", p(control), p(end)),
                PathSegment::ArcTo {
                    rx,
                    ry,
                    large_arc,
                    sweep,
                    end,
                } => format!(
                    "A {} {} 0 {} {} {}",
                    n(*rx),
                    n(*ry),
                    u8::from(*large_arc),
                    u8::from(*sweep),
                    p(end)
                ),
                PathSegment::Close => "Z".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Incremental path builder that tracks the current point
#[derive(Debug, Default)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
    current: Point,
    start: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pen position
    pub fn current(&self) -> Point {
        self.current
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        let pt = Point::new(x, y);
        self.segments.push(PathSegment::MoveTo(pt));
        self.current = pt;
        self.start = pt;
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        let pt = Point::new(x, y);
        self.segments.push(PathSegment::LineTo(pt));
        self.current = pt;
        self
    }

    pub fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> &mut Self {
        let end = Point::new(x, y);
        self.segments.push(PathSegment::QuadTo {
            control: Point::new(cx, cy),
            end,
        });
        self.current = end;
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, end: Point) -> &mut Self {
        self.segments.push(PathSegment::CubicTo { c1, c2, end });
        self.current = end;
        self
    }

    /// SVG-style arc to an absolute endpoint
    pub fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> &mut Self {
        let end = Point::new(x, y);
        self.segments.push(PathSegment::ArcTo {
            rx,
            ry,
            large_arc,
            sweep,
            end,
        });
        self.current = end;
        self
    }

    /// DrawingML-style arc: the current point lies on the ellipse at
    /// `start_deg`, and the arc sweeps `sweep_deg` (positive = clockwise).
    ///
    /// Sweeps of a full turn or more are split in two so the SVG arc does not
    /// collapse onto its own start point.
    pub fn arc_by_angle(&mut self, wr: f64, hr: f64, start_deg: f64, sweep_deg: f64) -> &mut Self {
        if sweep_deg == 0.0 {
            return self;
        }
        let start = start_deg.to_radians();
        let center = Point::new(
            self.current.x - wr * start.cos(),
            self.current.y - hr * start.sin(),
        );
        let at = |deg: f64| {
            let a = deg.to_radians();
            Point::new(center.x + wr * a.cos(), center.y + hr * a.sin())
        };

        if sweep_deg.abs() >= 360.0 {
            let half = sweep_deg / 2.0;
            let mid = at(start_deg + half);
            self.arc_to(wr, hr, false, half > 0.0, mid.x, mid.y);
            let end = at(start_deg + sweep_deg);
            return self.arc_to(wr, hr, false, half > 0.0, end.x, end.y);
        }

        let end = at(start_deg + sweep_deg);
        self.arc_to(wr, hr, sweep_deg.abs() > 180.0, sweep_deg > 0.0, end.x, end.y)
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self.current = self.start;
        self
    }

    /// Closed polygon through `points`
    pub fn polygon(&mut self, points: &[(f64, f64)]) -> &mut Self {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return self;
        };
        self.move_to(x0, y0);
        for &(x, y) in rest {
            self.line_to(x, y);
        }
        self.close()
    }

    /// Open polyline through `points`
    pub fn polyline(&mut self, points: &[(f64, f64)]) -> &mut Self {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return self;
        };
        self.move_to(x0, y0);
        for &(x, y) in rest {
            self.line_to(x, y);
        }
        self
    }

    /// Closed ellipse as two half arcs starting from the top
    pub fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) -> &mut Self {
        self.move_to(cx, cy - ry)
            .arc_to(rx, ry, true, true, cx, cy + ry)
            .arc_to(rx, ry, true, true, cx, cy - ry)
            .close()
    }

    /// Axis-aligned closed rectangle
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> &mut Self {
        self.polygon(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h)])
    }

    pub fn build(self) -> Path {
        Path {
            segments: self.segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_d() {
        let mut b = PathBuilder::new();
        b.rect(0.0, 0.0, 200.0, 200.0);
        assert_eq!(b.build().to_svg_d(3), "M 0 0 L 200 0 L 200 200 L 0 200 Z");
    }

    #[test]
    fn test_ellipse_d() {
        let mut b = PathBuilder::new();
        b.ellipse(150.0, 75.0, 150.0, 75.0);
        assert_eq!(
            b.build().to_svg_d(3),
            "M 150 0 A 150 75 0 1 1 150 150 A 150 75 0 1 1 150 0 Z"
        );
    }

    #[test]
    fn test_curves_d() {
        let mut b = PathBuilder::new();
        b.move_to(0.0, 0.0)
            .quad_to(5.0, 0.0, 5.0, 5.0)
            .cubic_to(Point::new(5.0, 7.5), Point::new(2.5, 10.0), Point::new(0.0, 10.0));
        assert_eq!(b.build().to_svg_d(3), "M 0 0 Q 5 0 5 5 C 5 7.5 2.5 10 0 10");
    }

    #[test]
    fn test_precision() {
        let mut b = PathBuilder::new();
        b.move_to(1.0 / 3.0, 2.0 / 3.0);
        assert_eq!(b.build().to_svg_d(2), "M 0.33 0.67");
    }

    #[test]
    fn test_arc_by_angle_quarter() {
        // Start at the rightmost point of a circle centered at (0, 0), sweep 90 degrees clockwise
        let mut b = PathBuilder::new();
        b.move_to(10.0, 0.0).arc_by_angle(10.0, 10.0, 0.0, 90.0);
        assert_eq!(b.build().to_svg_d(3), "M 10 0 A 10 10 0 0 1 0 10");
    }

    #[test]
    fn test_arc_by_angle_counter_clockwise_large() {
        let mut b = PathBuilder::new();
        b.move_to(10.0, 0.0).arc_by_angle(10.0, 10.0, 0.0, -270.0);
        assert_eq!(b.build().to_svg_d(3), "M 10 0 A 10 10 0 1 0 0 10");
    }

    #[test]
    fn test_arc_by_angle_full_circle_splits() {
        let mut b = PathBuilder::new();
        b.move_to(10.0, 0.0).arc_by_angle(10.0, 10.0, 0.0, 360.0);
        let path = b.build();
        assert_eq!(path.segments.len(), 3);
        assert_eq!(path.to_svg_d(3), "M 10 0 A 10 10 0 0 1 -10 0 A 10 10 0 0 1 10 0");
    }

    #[test]
    fn test_zero_sweep_is_noop() {
        let mut b = PathBuilder::new();
        b.move_to(1.0, 1.0).arc_by_angle(5.0, 5.0, 0.0, 0.0);
        assert_eq!(b.build().segments.len(), 1);
    }

    #[test]
    fn test_close_returns_to_start() {
        let mut b = PathBuilder::new();
        b.move_to(1.0, 2.0).line_to(5.0, 5.0).close();
        assert_eq!(b.current(), Point::new(1.0, 2.0));
    }
}
