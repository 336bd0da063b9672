//! Color resolution: base color lookup plus the modifier chain

use crate::config::OnMissingTheme;
use crate::context::ProcessingContext;
use crate::diagnostics::{DiagnosticSink, Warning, WarningCategory};
use crate::error::ResolveError;
use crate::number::round_to;
use crate::theme::SchemeSlot;

use super::model::{Hsl, Rgb, Rgba};
use super::presets::{preset_color, system_color};
use super::spec::{ColorBase, ColorSpec, Modifier};

/// Scheme name that stands for the color of the referencing style
pub const PLACEHOLDER_COLOR: &str = "phClr";

/// Resolve a color specification to its final RGBA value
pub fn resolve_color(spec: &ColorSpec, ctx: &ProcessingContext) -> Result<Rgba, ResolveError> {
    resolve_color_with_placeholder(spec, None, ctx)
}

/// Resolve a color, substituting `placeholder` for `phClr` references.
///
/// Modifiers are applied in the fixed order given by [`Modifier::rank`],
/// regardless of their order in `spec`.
pub fn resolve_color_with_placeholder(
    spec: &ColorSpec,
    placeholder: Option<Rgba>,
    ctx: &ProcessingContext,
) -> Result<Rgba, ResolveError> {
    let sink = ctx.diagnostics;

    let (rgb, alpha) = match (&spec.base, placeholder) {
        (ColorBase::SchemeReference(name), Some(ph)) if name == PLACEHOLDER_COLOR => {
            (ph.to_rgb(), ph.a)
        }
        (ColorBase::SchemeReference(name), _) => {
            let Some(theme) = ctx.theme else {
                return missing_theme(name, ctx);
            };
            let slot_name =
                theme.resolve_semantic_bounded(name, ctx.config.max_color_map_depth, sink);
            match SchemeSlot::from_name(&slot_name) {
                Some(slot) => (theme.resolve_slot(slot), 1.0),
                None => {
                    sink.warn(Warning::new(
                        WarningCategory::UnknownColor,
                        format!("scheme color '{}' is not a theme slot, using black", slot_name),
                    ));
                    (Rgb::BLACK, 1.0)
                }
            }
        }
        (base, _) => (literal_rgb(base, sink).unwrap_or(Rgb::BLACK), 1.0),
    };

    let mut ordered = spec.modifiers.clone();
    ordered.sort_by_key(Modifier::rank);
    let (rgb, alpha) = apply_modifiers(rgb, alpha, &ordered);

    let alpha = round_to(alpha.clamp(0.0, 1.0), ctx.config.alpha_precision);
    Ok(rgb.with_alpha(alpha))
}

fn missing_theme(name: &str, ctx: &ProcessingContext) -> Result<Rgba, ResolveError> {
    let err = ResolveError::missing_theme(name);
    match ctx.config.on_missing_theme {
        OnMissingTheme::Fail => Err(err),
        OnMissingTheme::DefaultTransparent => {
            ctx.diagnostics
                .warn(Warning::new(WarningCategory::MissingTheme, err.to_string()));
            Ok(Rgba::TRANSPARENT)
        }
    }
}

/// Compute the base RGB of any non-scheme color.
///
/// Returns `None` for scheme references and for names missing from the
/// preset/system tables (the latter with an `UnknownColor` warning).
pub fn literal_rgb(base: &ColorBase, sink: &dyn DiagnosticSink) -> Option<Rgb> {
    match base {
        ColorBase::DirectRgb(rgb) => Some(*rgb),
        ColorBase::DirectHsl { hue, sat, lum } => Some(Hsl::new(*hue, *sat, *lum).to_rgb()),
        ColorBase::PercentRgb { r, g, b } => Some(Rgb::new(
            (r * 255.0).round(),
            (g * 255.0).round(),
            (b * 255.0).round(),
        )),
        ColorBase::PresetName(name) => {
            let rgb = preset_color(name);
            if rgb.is_none() {
                sink.warn(Warning::new(
                    WarningCategory::UnknownColor,
                    format!("unknown preset color '{}'", name),
                ));
            }
            rgb
        }
        ColorBase::SystemColor { role, fallback } => {
            let rgb = system_color(role).or(*fallback);
            if rgb.is_none() {
                sink.warn(Warning::new(
                    WarningCategory::UnknownColor,
                    format!("unknown system color '{}' without fallback", role),
                ));
            }
            rgb
        }
        ColorBase::SchemeReference(_) => None,
    }
}

/// Apply modifiers in the order given.
///
/// HSL-space modifiers share one HSL working value; it is converted back to
/// RGB before any RGB-space modifier (shade, tint) and at the end. `NaN`
/// values leave the color unchanged.
pub fn apply_modifiers(rgb: Rgb, alpha: f64, modifiers: &[Modifier]) -> (Rgb, f64) {
    let mut rgb = rgb;
    let mut alpha = alpha;
    let mut hsl: Option<Hsl> = None;

    for modifier in modifiers {
        let v = modifier.value();
        if v.is_nan() {
            continue;
        }

        if modifier.is_hsl() {
            let working = hsl.get_or_insert_with(|| rgb.to_hsl());
            apply_hsl(working, modifier);
            continue;
        }

        if let Some(working) = hsl.take() {
            rgb = working.to_rgb();
        }
        match modifier {
            Modifier::Alpha(_) => alpha = v,
            Modifier::AlphaMod(_) => alpha *= v,
            Modifier::AlphaOff(_) => alpha += v,
            Modifier::Shade(_) => rgb = shade(rgb, v),
            Modifier::Tint(_) => rgb = tint(rgb, v),
            _ => {}
        }
    }

    if let Some(working) = hsl {
        rgb = working.to_rgb();
    }
    (rgb, alpha.clamp(0.0, 1.0))
}

fn apply_hsl(hsl: &mut Hsl, modifier: &Modifier) {
    match *modifier {
        Modifier::HueMod(v) => hsl.h = (hsl.h * v).rem_euclid(360.0),
        Modifier::HueOff(deg) => hsl.h = (hsl.h + deg).rem_euclid(360.0),
        Modifier::LumMod(v) => hsl.l = (hsl.l * v).clamp(0.0, 1.0),
        Modifier::LumOff(v) => hsl.l = (hsl.l + v).clamp(0.0, 1.0),
        Modifier::SatMod(v) => hsl.s = (hsl.s * v).clamp(0.0, 1.0),
        Modifier::SatOff(v) => hsl.s = (hsl.s + v).clamp(0.0, 1.0),
        _ => {}
    }
}

/// Blend toward black: `c * (1 - pct)`
fn shade(rgb: Rgb, pct: f64) -> Rgb {
    let k = 1.0 - pct;
    Rgb::new(rgb.r * k, rgb.g * k, rgb.b * k)
}

/// Blend toward white: `c + (255 - c) * pct`
fn tint(rgb: Rgb, pct: f64) -> Rgb {
    let t = |c: f64| c + (255.0 - c) * pct;
    Rgb::new(t(rgb.r), t(rgb.g), t(rgb.b))
}
