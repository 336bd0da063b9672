//! Integration tests for preset and custom geometry

use pretty_assertions::assert_eq;

use slide_primitives::geometry::{preset_names, Adjustments, CustomPath, Point};
use slide_primitives::{
    custom_path, preset_path, resolve_geometry, Diagnostics, GeometrySpec, PathCommand,
    ProcessingContext, ResolveConfig, ShapeClassification, WarningCategory, XmlNode,
};

fn preset(name: &str, w: f64, h: f64) -> String {
    preset_path(name, w, h, &Adjustments::new(), &ProcessingContext::default()).path
}

fn circle(size: f64) -> Vec<PathCommand> {
    let r = size / 2.0;
    let k = r * 0.552;
    vec![
        PathCommand::MoveTo(Point::new(r, 0.0)),
        PathCommand::CubicBezierTo(
            Point::new(r + k, 0.0),
            Point::new(size, r - k),
            Point::new(size, r),
        ),
        PathCommand::CubicBezierTo(
            Point::new(size, r + k),
            Point::new(r + k, size),
            Point::new(r, size),
        ),
        PathCommand::CubicBezierTo(
            Point::new(r - k, size),
            Point::new(0.0, r + k),
            Point::new(0.0, r),
        ),
        PathCommand::CubicBezierTo(
            Point::new(0.0, r - k),
            Point::new(r - k, 0.0),
            Point::new(r, 0.0),
        ),
        PathCommand::Close,
    ]
}

#[test]
fn test_rect_preset() {
    assert_eq!(preset("rect", 200.0, 200.0), "M 0 0 L 200 0 L 200 200 L 0 200 Z");
}

#[test]
fn test_ellipse_preset() {
    insta::assert_snapshot!(
        preset("ellipse", 300.0, 150.0),
        @"M 150 0 A 150 75 0 1 1 150 150 A 150 75 0 1 1 150 0 Z"
    );
}

#[test]
fn test_round_rect_preset() {
    let mut adjustments = Adjustments::new();
    adjustments.insert("adj".to_string(), 0.25);
    let resolved = preset_path(
        "roundRect",
        200.0,
        100.0,
        &adjustments,
        &ProcessingContext::default(),
    );
    assert_eq!(
        resolved.classification,
        ShapeClassification::Preset("roundRect".to_string())
    );
    insta::assert_snapshot!(
        resolved.path,
        @"M 12.5 0 L 187.5 0 Q 200 0 200 12.5 L 200 87.5 Q 200 100 187.5 100 L 12.5 100 Q 0 100 0 87.5 L 0 12.5 Q 0 0 12.5 0 Z"
    );
}

#[test]
fn test_custom_circle_in_square_box() {
    let ctx = ProcessingContext::default();
    let resolved = custom_path(&circle(100.0), 100.0, 100.0, 100.0, 100.0, &ctx);
    assert_eq!(resolved.classification, ShapeClassification::Ellipse);
}

#[test]
fn test_custom_circle_in_wide_box() {
    let ctx = ProcessingContext::default();
    let resolved = custom_path(&circle(100.0), 200.0, 100.0, 200.0, 100.0, &ctx);
    assert_eq!(resolved.classification, ShapeClassification::Custom);
}

#[test]
fn test_tolerance_is_configurable() {
    let mut commands = circle(100.0);
    // end 3 units short of the start
    commands[4] = PathCommand::CubicBezierTo(
        Point::new(0.0, 22.4),
        Point::new(22.4, 0.0),
        Point::new(47.0, 0.0),
    );
    let strict = ProcessingContext::default();
    let loose =
        ProcessingContext::default().with_config(ResolveConfig::new().with_ellipse_tolerance(0.05));
    assert_eq!(
        custom_path(&commands, 100.0, 100.0, 100.0, 100.0, &strict).classification,
        ShapeClassification::Custom
    );
    assert_eq!(
        custom_path(&commands, 100.0, 100.0, 100.0, 100.0, &loose).classification,
        ShapeClassification::Ellipse
    );
}

#[test]
fn test_custom_geometry_from_markup() {
    let sink = Diagnostics::new();
    let node = XmlNode::parse(
        r#"<custGeom>
  <avLst><gd name="adj" fmla="val 20000"/></avLst>
  <gdLst>
    <gd name="dx" fmla="*/ w adj 100000"/>
    <gd name="x2" fmla="+- r 0 dx"/>
  </gdLst>
  <pathLst>
    <path>
      <moveTo><pt x="dx" y="t"/></moveTo>
      <lnTo><pt x="x2" y="t"/></lnTo>
      <lnTo><pt x="r" y="b"/></lnTo>
      <lnTo><pt x="l" y="b"/></lnTo>
      <close/>
    </path>
  </pathLst>
</custGeom>"#,
    )
    .unwrap();
    let spec = GeometrySpec::from_node(&node, 100.0, 50.0, &sink).unwrap();
    let ctx = ProcessingContext::new(&sink).with_size(100.0, 50.0);
    let resolved = resolve_geometry(&spec, &ctx);
    assert_eq!(resolved.path, "M 20 0 L 80 0 L 100 50 L 0 50 Z");
    assert_eq!(resolved.classification, ShapeClassification::Custom);
    assert!(sink.is_empty());
}

#[test]
fn test_guide_points_scale_like_literal_points() {
    let sink = Diagnostics::new();
    let node = XmlNode::parse(
        r#"<custGeom>
  <gdLst><gd name="x1" fmla="*/ w 1 4"/></gdLst>
  <pathLst>
    <path w="1000" h="1000">
      <moveTo><pt x="0" y="0"/></moveTo>
      <lnTo><pt x="1000" y="1000"/></lnTo>
      <moveTo><pt x="l" y="t"/></moveTo>
      <lnTo><pt x="r" y="b"/></lnTo>
      <lnTo><pt x="x1" y="vc"/></lnTo>
    </path>
  </pathLst>
</custGeom>"#,
    )
    .unwrap();
    let spec = GeometrySpec::from_node(&node, 100.0, 100.0, &sink).unwrap();
    let ctx = ProcessingContext::new(&sink).with_size(100.0, 100.0);
    assert_eq!(
        resolve_geometry(&spec, &ctx).path,
        "M 0 0 L 100 100 M 0 0 L 100 100 L 25 50"
    );
    assert!(sink.is_empty());
}

#[test]
fn test_multiple_paths_in_own_boxes() {
    let spec = GeometrySpec::Custom {
        paths: vec![
            CustomPath::new(
                vec![
                    PathCommand::MoveTo(Point::new(0.0, 0.0)),
                    PathCommand::LineTo(Point::new(10.0, 10.0)),
                ],
                10.0,
                10.0,
            ),
            CustomPath::new(
                vec![
                    PathCommand::MoveTo(Point::new(0.0, 1.0)),
                    PathCommand::LineTo(Point::new(1.0, 0.0)),
                ],
                1.0,
                1.0,
            ),
        ],
    };
    let ctx = ProcessingContext::default().with_size(40.0, 20.0);
    assert_eq!(
        resolve_geometry(&spec, &ctx).path,
        "M 0 0 L 40 20 M 0 20 L 40 0"
    );
}

#[test]
fn test_unknown_preset_warns() {
    let sink = Diagnostics::new();
    let ctx = ProcessingContext::new(&sink);
    let resolved = preset_path("wibble", 5.0, 5.0, &Adjustments::new(), &ctx);
    assert_eq!(resolved.path, "M 0 0 L 5 0 L 5 5 L 0 5 Z");
    assert!(sink.has(WarningCategory::UnknownPreset));
}

#[test]
fn test_coordinate_precision() {
    let ctx = ProcessingContext::default().with_config(ResolveConfig::new().with_coordinate_precision(1));
    let resolved = preset_path("triangle", 10.0, 3.0, &Adjustments::new(), &ctx);
    assert_eq!(resolved.path, "M 5 0 L 10 3 L 0 3 Z");
    let hexagon = preset_path("hexagon", 10.0, 10.0, &Adjustments::new(), &ctx);
    assert!(hexagon.path.starts_with("M 10 5 L 7.5 9.3 "));
}

#[test]
fn test_presets_only_use_supported_tokens() {
    for name in preset_names() {
        let path = preset(name, 160.0, 90.0);
        for token in path.split(' ') {
            let is_command = matches!(token, "M" | "L" | "C" | "Q" | "A" | "Z");
            let is_number = token.parse::<f64>().is_ok();
            assert!(is_command || is_number, "{}: unexpected token '{}'", name, token);
        }
    }
}
