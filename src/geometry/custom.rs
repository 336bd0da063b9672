//! Custom geometry interpreter and shape classification

use crate::context::ProcessingContext;

use super::path::{PathBuilder, Point};
use super::spec::{CustomPath, PathCommand};
use super::{ResolvedPath, ShapeClassification};

/// Render one custom path scaled from its local box into the target box
pub fn custom_path(
    commands: &[PathCommand],
    local_width: f64,
    local_height: f64,
    target_width: f64,
    target_height: f64,
    ctx: &ProcessingContext,
) -> ResolvedPath {
    let path = CustomPath::new(commands.to_vec(), local_width, local_height);
    custom_geometry(std::slice::from_ref(&path), target_width, target_height, ctx)
}

/// Render every sub-path of a custom geometry into one path string.
///
/// Only a single-path geometry can classify as an ellipse.
pub fn custom_geometry(
    paths: &[CustomPath],
    target_width: f64,
    target_height: f64,
    ctx: &ProcessingContext,
) -> ResolvedPath {
    let mut builder = PathBuilder::new();
    for path in paths {
        let (lw, lh) = local_box(path, target_width, target_height);
        let sx = if lw > 0.0 { target_width / lw } else { 1.0 };
        let sy = if lh > 0.0 { target_height / lh } else { 1.0 };
        emit(&mut builder, &path.commands, sx, sy);
    }

    let classification = match paths {
        [only] => {
            let (lw, lh) = local_box(only, target_width, target_height);
            classify(&only.commands, lw, lh, ctx.config.ellipse_tolerance)
        }
        _ => ShapeClassification::Custom,
    };

    ResolvedPath::new(
        builder.build().to_svg_d(ctx.config.coordinate_precision),
        classification,
    )
}

fn local_box(path: &CustomPath, target_width: f64, target_height: f64) -> (f64, f64) {
    let w = if path.local_width > 0.0 {
        path.local_width
    } else {
        target_width
    };
    let h = if path.local_height > 0.0 {
        path.local_height
    } else {
        target_height
    };
    (w, h)
}

fn emit(b: &mut PathBuilder, commands: &[PathCommand], sx: f64, sy: f64) {
    let scale = |p: &Point| Point::new(p.x * sx, p.y * sy);
    for command in commands {
        match command {
            PathCommand::MoveTo(p) => {
                let p = scale(p);
                b.move_to(p.x, p.y);
            }
            PathCommand::LineTo(p) => {
                let p = scale(p);
                b.line_to(p.x, p.y);
            }
            PathCommand::CubicBezierTo(c1, c2, end) => {
                b.cubic_to(scale(c1), scale(c2), scale(end));
            }
            PathCommand::QuadBezierTo(c, end) => {
                let (c, end) = (scale(c), scale(end));
                b.quad_to(c.x, c.y, end.x, end.y);
            }
            PathCommand::ArcTo {
                wr,
                hr,
                start_angle,
                sweep_angle,
            } => {
                b.arc_by_angle(wr * sx, hr * sy, *start_angle, *sweep_angle);
            }
            PathCommand::Close => {
                b.close();
            }
        }
    }
}

/// Detect the circle encoding used for custom geometry: a square local box,
/// `MoveTo` at top-center, exactly four cubic segments ending back at the start
/// (an optional trailing `Close` is allowed).
///
/// `tolerance` is a fraction of the local width.
pub fn classify(
    commands: &[PathCommand],
    local_width: f64,
    local_height: f64,
    tolerance: f64,
) -> ShapeClassification {
    let eps = tolerance * local_width.abs();
    let body = match commands {
        [rest @ .., PathCommand::Close] => rest,
        all => all,
    };

    let [PathCommand::MoveTo(start), PathCommand::CubicBezierTo(..), PathCommand::CubicBezierTo(..), PathCommand::CubicBezierTo(..), PathCommand::CubicBezierTo(_, _, end)] =
        body
    else {
        return ShapeClassification::Custom;
    };

    let square = local_width > 0.0 && (local_width - local_height).abs() <= eps;
    let top_center = start.distance(Point::new(local_width / 2.0, 0.0)) <= eps;
    let closed = end.distance(*start) <= eps;

    if square && top_center && closed {
        ShapeClassification::Ellipse
    } else {
        ShapeClassification::Custom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::spec::GeometrySpec;
    use crate::geometry::resolve_geometry;

    fn circle_commands(size: f64) -> Vec<PathCommand> {
        let r = size / 2.0;
        let k = 0.5523 * r;
        let p = Point::new;
        vec![
            PathCommand::MoveTo(p(r, 0.0)),
            PathCommand::CubicBezierTo(p(r + k, 0.0), p(size, r - k), p(size, r)),
            PathCommand::CubicBezierTo(p(size, r + k), p(r + k, size), p(r, size)),
            PathCommand::CubicBezierTo(p(r - k, size), p(0.0, r + k), p(0.0, r)),
            PathCommand::CubicBezierTo(p(0.0, r - k), p(r - k, 0.0), p(r, 0.0)),
            PathCommand::Close,
        ]
    }

    #[test]
    fn test_circle_in_square_box_is_ellipse() {
        let commands = circle_commands(100.0);
        assert_eq!(classify(&commands, 100.0, 100.0, 0.01), ShapeClassification::Ellipse);
    }

    #[test]
    fn test_circle_in_wide_box_is_custom() {
        let commands = circle_commands(100.0);
        assert_eq!(classify(&commands, 200.0, 100.0, 0.01), ShapeClassification::Custom);
    }

    #[test]
    fn test_without_close_still_ellipse() {
        let mut commands = circle_commands(100.0);
        commands.pop();
        assert_eq!(classify(&commands, 100.0, 100.0, 0.01), ShapeClassification::Ellipse);
    }

    #[test]
    fn test_open_curve_is_custom() {
        let mut commands = circle_commands(100.0);
        commands[4] = PathCommand::CubicBezierTo(
            Point::new(0.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
        );
        assert_eq!(classify(&commands, 100.0, 100.0, 0.01), ShapeClassification::Custom);
    }

    #[test]
    fn test_three_curves_is_custom() {
        let mut commands = circle_commands(100.0);
        commands.remove(2);
        assert_eq!(classify(&commands, 100.0, 100.0, 0.01), ShapeClassification::Custom);
    }

    #[test]
    fn test_scaling_to_target_box() {
        let commands = vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(10.0, 0.0)),
            PathCommand::LineTo(Point::new(10.0, 10.0)),
            PathCommand::Close,
        ];
        let ctx = ProcessingContext::default();
        let resolved = custom_path(&commands, 10.0, 10.0, 200.0, 50.0, &ctx);
        assert_eq!(resolved.path, "M 0 0 L 200 0 L 200 50 Z");
        assert_eq!(resolved.classification, ShapeClassification::Custom);
    }

    #[test]
    fn test_arc_radii_are_scaled() {
        let commands = vec![
            PathCommand::MoveTo(Point::new(10.0, 5.0)),
            PathCommand::ArcTo {
                wr: 5.0,
                hr: 5.0,
                start_angle: 0.0,
                sweep_angle: 90.0,
            },
        ];
        let ctx = ProcessingContext::default();
        let resolved = custom_path(&commands, 10.0, 10.0, 20.0, 40.0, &ctx);
        assert_eq!(resolved.path, "M 20 20 A 10 20 0 0 1 10 40");
    }

    #[test]
    fn test_zero_local_box_means_unscaled() {
        let commands = vec![
            PathCommand::MoveTo(Point::new(1.0, 2.0)),
            PathCommand::LineTo(Point::new(3.0, 4.0)),
        ];
        let ctx = ProcessingContext::default();
        let resolved = custom_path(&commands, 0.0, 0.0, 500.0, 500.0, &ctx);
        assert_eq!(resolved.path, "M 1 2 L 3 4");
    }

    #[test]
    fn test_multiple_subpaths_concatenate() {
        let spec = GeometrySpec::Custom {
            paths: vec![
                CustomPath::new(circle_commands(100.0), 100.0, 100.0),
                CustomPath::new(
                    vec![
                        PathCommand::MoveTo(Point::new(0.0, 0.0)),
                        PathCommand::LineTo(Point::new(1.0, 1.0)),
                    ],
                    1.0,
                    1.0,
                ),
            ],
        };
        let ctx = ProcessingContext::default().with_size(100.0, 100.0);
        let resolved = resolve_geometry(&spec, &ctx);
        assert!(resolved.path.ends_with("Z M 0 0 L 100 100"));
        assert_eq!(resolved.classification, ShapeClassification::Custom);
    }
}
