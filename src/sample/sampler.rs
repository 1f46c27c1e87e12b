//! Random parameter sampler.
//!
//! Every stochastic choice of a render is drawn here, in a fixed order, from a caller-provided
//! random source. Seeding that source replays a render exactly.

use std::f64::consts::PI;

use rand::Rng;

use crate::{
    foundation::error::{ArcBannerError, ArcBannerResult},
    foundation::math::wrap_degrees,
    style::color::ColorSample,
    style::contrast::{Palette, derive_palette},
    style::fonts::{FONT_CATALOG, FontChoice},
};

/// Lower clamp for any arc span, in radians.
pub const MIN_ARC_SPAN: f64 = 0.3 * PI;
/// Upper clamp for any arc span, in radians.
pub const MAX_ARC_SPAN: f64 = 1.5 * PI;
/// Probability of picking the curved layout.
pub const ARC_PROBABILITY: f64 = 0.65;
/// Maximum absolute rotation jitter, in radians.
pub const MAX_ROTATION_JITTER: f64 = 0.35;
/// Spacing factor used for inputs longer than [`LONG_TEXT_CHARS`].
pub const LONG_TEXT_SPACING: f64 = 1.14;
/// Character count above which spacing stops being randomized.
pub const LONG_TEXT_CHARS: usize = 20;

/// Text layout family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Glyphs follow a circular arc.
    Arc,
    /// Word-wrapped, rotated lines.
    Straight,
}

/// Font and geometry choices for one render.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayoutSpec {
    /// Catalog font.
    pub font: FontChoice,
    /// Font size in pixels.
    pub font_size_px: f64,
    /// Arc or straight.
    pub mode: LayoutMode,
    /// Rigid rotation applied to the whole text block, in radians.
    pub rotation_radians: f64,
    /// Target arc sweep in radians (arc mode only), already clamped.
    pub arc_span_radians: f64,
    /// Multiplier (>= 1) applied to measured glyph widths in arc mode.
    pub spacing_factor: f64,
}

impl LayoutSpec {
    /// Check the numeric invariants downstream layout relies on.
    pub fn validate(&self) -> ArcBannerResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ArcBannerError::validation(
                "font_size_px must be finite and > 0",
            ));
        }
        if !self.rotation_radians.is_finite() {
            return Err(ArcBannerError::validation("rotation must be finite"));
        }
        if !self.arc_span_radians.is_finite()
            || self.arc_span_radians < MIN_ARC_SPAN - 1e-12
            || self.arc_span_radians > MAX_ARC_SPAN + 1e-12
        {
            return Err(ArcBannerError::validation(format!(
                "arc span {} outside [0.3pi, 1.5pi]",
                self.arc_span_radians
            )));
        }
        if !self.spacing_factor.is_finite() || self.spacing_factor < 1.0 {
            return Err(ArcBannerError::validation("spacing_factor must be >= 1"));
        }
        Ok(())
    }
}

/// Everything sampled for one render.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderParams {
    /// Background, text, outline and shadow colors.
    pub palette: Palette,
    /// Font and geometry.
    pub layout: LayoutSpec,
}

/// Draw a full parameter set for `text`.
///
/// `forced_mode` overrides the arc/straight draw; the draw still happens so the remaining sample
/// stream does not shift.
pub fn sample_params<R: Rng + ?Sized>(
    rng: &mut R,
    text: &str,
    forced_mode: Option<LayoutMode>,
) -> RenderParams {
    let background = sample_background(rng);
    let palette = derive_palette(rng, background);
    let layout = sample_layout(rng, text, forced_mode);
    RenderParams { palette, layout }
}

/// Two background stops hued 20°–140° apart.
pub fn sample_background<R: Rng + ?Sized>(rng: &mut R) -> [ColorSample; 2] {
    let h1 = rng.random_range(0.0..360.0);
    let h2 = wrap_degrees(h1 + rng.random_range(20.0..140.0));
    let mut stop = |hue: f64| {
        let saturation = rng.random_range(55.0..=95.0);
        let lightness = rng.random_range(25.0..=60.0);
        ColorSample::new(hue, saturation, lightness)
    };
    let a = stop(h1);
    let b = stop(h2);
    [a, b]
}

/// Font, size, mode, rotation, arc span and spacing for `text`.
pub fn sample_layout<R: Rng + ?Sized>(
    rng: &mut R,
    text: &str,
    forced_mode: Option<LayoutMode>,
) -> LayoutSpec {
    let font = FONT_CATALOG[rng.random_range(0..FONT_CATALOG.len())];
    let font_size_px = sample_font_size(rng);

    let drawn_mode = if rng.random_bool(ARC_PROBABILITY) {
        LayoutMode::Arc
    } else {
        LayoutMode::Straight
    };
    let mode = forced_mode.unwrap_or(drawn_mode);

    let rotation_radians = rng.random_range(-MAX_ROTATION_JITTER..=MAX_ROTATION_JITTER);
    let arc_span_radians = clamp_arc_span(rng.random_range(0.55 * PI..=0.95 * PI));
    let spacing_factor = if text.chars().count() > LONG_TEXT_CHARS {
        LONG_TEXT_SPACING
    } else {
        rng.random_range(1.06..=1.18)
    };

    LayoutSpec {
        font,
        font_size_px,
        mode,
        rotation_radians,
        arc_span_radians,
        spacing_factor,
    }
}

/// Integer size in `[70, 140]`, scaled by 1.2 and rounded.
pub fn sample_font_size<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let base: u32 = rng.random_range(70..=140);
    (f64::from(base) * 1.2).round()
}

/// Clamp an arc span to `[0.3pi, 1.5pi]`; non-finite input maps to the lower bound.
pub fn clamp_arc_span(span: f64) -> f64 {
    if !span.is_finite() {
        return MIN_ARC_SPAN;
    }
    span.clamp(MIN_ARC_SPAN, MAX_ARC_SPAN)
}

#[cfg(test)]
#[path = "../../tests/unit/sample/sampler.rs"]
mod tests;
