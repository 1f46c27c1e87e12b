//! Glyph-by-glyph arc layout.
//!
//! Each character is measured on its own, widened by the spacing factor, and given an angular
//! slice proportional to its width. Angles are measured from the upward vertical, positive to the
//! right, and the occupied span is centered on zero.

use crate::{
    foundation::error::{ArcBannerError, ArcBannerResult},
    sample::sampler::LayoutSpec,
    text::metrics::GlyphMetrics,
};

/// Radius floor as a multiple of the font size.
pub const MIN_RADIUS_PER_FONT_PX: f64 = 1.1;

/// Resolved position of one character on the arc.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GlyphPlacement {
    /// The character, as sliced from the input.
    pub character: char,
    /// Center angle of the glyph's slice, in radians.
    pub angle_radians: f64,
    /// Distance from the circle center to the glyph origin.
    pub radius_px: f64,
    /// Angular width of the glyph's slice.
    pub slice_radians: f64,
    /// Measured width after the spacing factor.
    pub width_px: f64,
}

/// A complete arc layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ArcLayout {
    /// Circle radius shared by every glyph.
    pub radius_px: f64,
    /// Angle actually covered by the glyphs (`sum / radius`).
    pub span_radians: f64,
    /// Span requested by the sampler.
    pub target_span_radians: f64,
    /// One entry per input character, in reading order.
    pub placements: Vec<GlyphPlacement>,
}

impl ArcLayout {
    /// Angle at which the last slice ends.
    pub fn end_angle(&self) -> f64 {
        self.placements
            .last()
            .map(|p| p.angle_radians + p.slice_radians * 0.5)
            .unwrap_or(0.0)
    }

    /// Angle at which the first slice starts.
    pub fn start_angle(&self) -> f64 {
        self.placements
            .first()
            .map(|p| p.angle_radians - p.slice_radians * 0.5)
            .unwrap_or(0.0)
    }
}

/// Outcome of arc layout.
#[derive(Clone, Debug, PartialEq)]
pub enum ArcOutcome {
    /// Glyphs placed on a circle.
    Arc(ArcLayout),
    /// Measurements were degenerate; draw the text as a single centered run.
    Fallback,
}

/// Lay out `text` along an arc.
///
/// The arc span comes from `spec.arc_span_radians`. A total width that is zero, negative or not
/// finite yields [`ArcOutcome::Fallback`] rather than an error; metric failures propagate.
pub fn layout_arc<M: GlyphMetrics + ?Sized>(
    text: &str,
    spec: &LayoutSpec,
    metrics: &mut M,
) -> ArcBannerResult<ArcOutcome> {
    let span = spec.arc_span_radians;
    if !span.is_finite() || span <= 0.0 {
        return Err(ArcBannerError::validation("arc span must be finite and > 0"));
    }

    let mut chars = Vec::<(char, f64)>::new();
    let mut buf = [0u8; 4];
    for c in text.chars() {
        let w = metrics.text_width(c.encode_utf8(&mut buf), &spec.font, spec.font_size_px)?;
        let w = if w.is_finite() { w.max(0.0) } else { f64::NAN };
        chars.push((c, w * spec.spacing_factor));
    }

    let sum: f64 = chars.iter().map(|(_, w)| *w).sum();
    if !sum.is_finite() || sum <= 0.0 {
        tracing::debug!(sum, "degenerate arc measurement, falling back to a single run");
        return Ok(ArcOutcome::Fallback);
    }

    let radius = (sum / span).max(spec.font_size_px * MIN_RADIUS_PER_FONT_PX);
    let consumed = sum / radius;
    let start = -consumed * 0.5;

    let mut cursor = 0.0f64;
    let placements = chars
        .into_iter()
        .map(|(character, width_px)| {
            let slice = width_px / radius;
            let p = GlyphPlacement {
                character,
                angle_radians: start + cursor + slice * 0.5,
                radius_px: radius,
                slice_radians: slice,
                width_px,
            };
            cursor += slice;
            p
        })
        .collect();

    Ok(ArcOutcome::Arc(ArcLayout {
        radius_px: radius,
        span_radians: consumed,
        target_span_radians: span,
        placements,
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/arc.rs"]
mod tests;
