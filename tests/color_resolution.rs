//! Integration tests for color resolution against themes and color maps

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use slide_primitives::color::apply_modifiers;
use slide_primitives::{
    resolve_color, ColorMapOverride, ColorSpec, Diagnostics, Modifier, ProcessingContext, Rgb,
    Rgba, ThemeStore, WarningCategory, XmlNode,
};

fn resolve_with(spec: &ColorSpec, theme: &ThemeStore) -> String {
    let ctx = ProcessingContext::default().with_theme(theme);
    resolve_color(spec, &ctx).unwrap().to_string()
}

#[test]
fn test_direct_rgb() {
    let theme = ThemeStore::default();
    assert_eq!(resolve_with(&ColorSpec::rgb(255, 0, 0), &theme), "rgba(255,0,0,1)");
}

#[test]
fn test_shade_halves_channels() {
    let theme = ThemeStore::default();
    let spec = ColorSpec::rgb(255, 0, 0).with(Modifier::Shade(0.5));
    assert_eq!(resolve_with(&spec, &theme), "rgba(128,0,0,1)");
}

#[test]
fn test_scheme_reference_with_alpha() {
    let theme = ThemeStore::from_toml_str(
        r#"
[colors]
accent1 = "FF0000"
"#,
    )
    .unwrap();
    let spec = ColorSpec::scheme("accent1").with(Modifier::Alpha(0.5));
    assert_eq!(resolve_with(&spec, &theme), "rgba(255,0,0,0.5)");
}

#[test]
fn test_modifier_document_order_does_not_matter() {
    let theme = ThemeStore::default();
    let a = ColorSpec::rgb(100, 100, 100)
        .with(Modifier::Tint(0.4))
        .with(Modifier::Shade(0.4));
    let b = ColorSpec::rgb(100, 100, 100)
        .with(Modifier::Shade(0.4))
        .with(Modifier::Tint(0.4));
    assert_eq!(resolve_with(&a, &theme), resolve_with(&b, &theme));
}

#[test]
fn test_tint_and_shade_do_not_commute() {
    let start = Rgb::new(100.0, 100.0, 100.0);
    let (tint_then_shade, _) =
        apply_modifiers(start, 1.0, &[Modifier::Tint(0.5), Modifier::Shade(0.5)]);
    let (shade_then_tint, _) =
        apply_modifiers(start, 1.0, &[Modifier::Shade(0.5), Modifier::Tint(0.5)]);
    assert_ne!(tint_then_shade, shade_then_tint);
}

#[test]
fn test_slide_color_map_override() {
    let master = ThemeStore::default();
    let slide = master.with_color_map(ColorMapOverride::default().with("bg1", "dk1"));
    let spec = ColorSpec::scheme("bg1");
    assert_eq!(resolve_with(&spec, &master), "rgba(255,255,255,1)");
    assert_eq!(resolve_with(&spec, &slide), "rgba(0,0,0,1)");
}

#[test]
fn test_circular_color_map_falls_back() {
    let sink = Diagnostics::new();
    let theme = ThemeStore::default().with_color_map(
        ColorMapOverride::empty()
            .with("bg1", "tx1")
            .with("tx1", "bg1"),
    );
    let ctx = ProcessingContext::new(&sink).with_theme(&theme);
    let resolved = resolve_color(&ColorSpec::scheme("bg1"), &ctx).unwrap();
    assert_eq!(resolved, Rgba::opaque(0, 0, 0));
    assert!(sink.has(WarningCategory::CircularColorMap));
}

#[test]
fn test_color_from_markup() {
    let sink = Diagnostics::new();
    let theme = ThemeStore::default();
    let ctx = ProcessingContext::new(&sink).with_theme(&theme);
    let node = XmlNode::parse(
        r#"<schemeClr val="tx2"><lumMod val="60000"/><lumOff val="40000"/></schemeClr>"#,
    )
    .unwrap();
    let spec = ColorSpec::from_node(&node, &sink).unwrap();
    assert_eq!(resolve_color(&spec, &ctx).unwrap().to_string(), "rgba(132,151,176,1)");
    assert!(sink.is_empty());
}

#[test]
fn test_malformed_percentage_is_identity() {
    let sink = Diagnostics::new();
    let ctx = ProcessingContext::new(&sink);
    let node = XmlNode::parse(r#"<srgbClr val="336699"><lumMod val="abc"/></srgbClr>"#).unwrap();
    let spec = ColorSpec::from_node(&node, &sink).unwrap();
    assert_eq!(resolve_color(&spec, &ctx).unwrap().to_string(), "rgba(51,102,153,1)");
    assert!(sink.has(WarningCategory::MalformedNumber));
}

#[test]
fn test_resolution_is_idempotent() {
    let theme = ThemeStore::default();
    let spec = ColorSpec::scheme("accent2")
        .with(Modifier::LumMod(0.75))
        .with(Modifier::Alpha(0.33333));
    let first = resolve_with(&spec, &theme);
    let second = resolve_with(&spec, &theme);
    assert_eq!(first, second);
}

#[test]
fn test_theme_shared_across_threads() {
    let theme = ThemeStore::default();
    let sink = Diagnostics::new();
    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = ["accent1", "accent2", "accent3", "accent4"]
            .into_iter()
            .map(|name| {
                let (theme, sink) = (&theme, &sink);
                scope.spawn(move || {
                    let ctx = ProcessingContext::new(sink).with_theme(theme);
                    resolve_color(&ColorSpec::scheme(name), &ctx)
                        .unwrap()
                        .to_string()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(
        results,
        vec![
            "rgba(68,114,196,1)",
            "rgba(237,125,49,1)",
            "rgba(165,165,165,1)",
            "rgba(255,192,0,1)",
        ]
    );
    assert!(sink.is_empty());
}

proptest! {
    #[test]
    fn prop_rgba_string_round_trips(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255, a in 0u32..=1000) {
        let color = Rgba::new(r, g, b, a as f64 / 1000.0);
        let parsed: Rgba = color.to_string().parse().unwrap();
        prop_assert_eq!(parsed, color);
    }

    #[test]
    fn prop_modifiers_keep_channels_in_range(
        r in 0u8..=255,
        g in 0u8..=255,
        b in 0u8..=255,
        lum_mod in 0.0f64..2.0,
        tint in 0.0f64..1.0,
        alpha in 0.0f64..1.0,
    ) {
        let theme = ThemeStore::default();
        let ctx = ProcessingContext::default().with_theme(&theme);
        let spec = ColorSpec::rgb(r, g, b)
            .with(Modifier::LumMod(lum_mod))
            .with(Modifier::Tint(tint))
            .with(Modifier::Alpha(alpha));
        let resolved = resolve_color(&spec, &ctx).unwrap();
        prop_assert!((0.0..=1.0).contains(&resolved.a));
        let reparsed: Rgba = resolved.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, resolved);
    }
}
