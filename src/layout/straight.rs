use crate::{
    foundation::core::Canvas,
    foundation::error::{ArcBannerError, ArcBannerResult},
    sample::sampler::LayoutSpec,
    style::fonts::FontChoice,
    text::metrics::GlyphMetrics,
};

/// Line pitch as a multiple of the font size.
pub const LINE_HEIGHT_PER_FONT_PX: f64 = 1.12;
/// Wrap width as a fraction of the canvas width.
pub const MAX_WIDTH_FRACTION: f64 = 0.8;

/// One committed line and its vertical offset from the block center.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LineBlock {
    /// Words joined by single spaces.
    pub text: String,
    /// Offset of the line center from the block center (positive is down).
    pub y_offset_px: f64,
    /// Measured width of `text`.
    pub width_px: f64,
}

/// Word-wrapped lines stacked around the canvas center.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StraightLayout {
    /// Lines in reading order.
    pub lines: Vec<LineBlock>,
    /// Distance between consecutive line centers.
    pub line_height_px: f64,
    /// Wrap width used.
    pub max_width_px: f64,
}

/// Lay out `text` as wrapped lines no wider than 80% of the canvas.
pub fn layout_straight<M: GlyphMetrics + ?Sized>(
    text: &str,
    spec: &LayoutSpec,
    canvas: Canvas,
    metrics: &mut M,
) -> ArcBannerResult<StraightLayout> {
    let max_width_px = f64::from(canvas.width) * MAX_WIDTH_FRACTION;
    let line_height_px = spec.font_size_px * LINE_HEIGHT_PER_FONT_PX;

    let wrapped = wrap_words(text, max_width_px, &spec.font, spec.font_size_px, metrics)?;
    let n = wrapped.len();
    let first = -((n.saturating_sub(1)) as f64 / 2.0) * line_height_px;
    let lines = wrapped
        .into_iter()
        .enumerate()
        .map(|(i, (text, width_px))| LineBlock {
            text,
            y_offset_px: first + i as f64 * line_height_px,
            width_px,
        })
        .collect();

    Ok(StraightLayout {
        lines,
        line_height_px,
        max_width_px,
    })
}

/// Greedy word wrap. Returns each committed line with its measured width.
///
/// A word wider than `max_width_px` on its own still gets its own line.
pub fn wrap_words<M: GlyphMetrics + ?Sized>(
    text: &str,
    max_width_px: f64,
    font: &FontChoice,
    size_px: f64,
    metrics: &mut M,
) -> ArcBannerResult<Vec<(String, f64)>> {
    if !max_width_px.is_finite() || max_width_px <= 0.0 {
        return Err(ArcBannerError::validation("max width must be finite and > 0"));
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0.0f64;

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_owned()
        } else {
            format!("{line} {word}")
        };
        let candidate_width = metrics.text_width(&candidate, font, size_px)?;
        if candidate_width > max_width_px && !line.is_empty() {
            lines.push((std::mem::take(&mut line), line_width));
            line = word.to_owned();
            line_width = metrics.text_width(&line, font, size_px)?;
        } else {
            line = candidate;
            line_width = candidate_width;
        }
    }
    if !line.is_empty() {
        lines.push((line, line_width));
    }
    Ok(lines)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/straight.rs"]
mod tests;
