use crate::{foundation::error::ArcBannerResult, style::fonts::FontChoice};

/// Pixel width of text under a font and size.
///
/// Implementations must be deterministic: the same string, font and size always measure the
/// same. Widths may be zero (combining marks, empty strings) but never negative.
pub trait GlyphMetrics {
    /// Advance width of `text` in pixels.
    fn text_width(&mut self, text: &str, font: &FontChoice, size_px: f64) -> ArcBannerResult<f64>;
}

impl<M: GlyphMetrics + ?Sized> GlyphMetrics for &mut M {
    fn text_width(&mut self, text: &str, font: &FontChoice, size_px: f64) -> ArcBannerResult<f64> {
        (**self).text_width(text, font, size_px)
    }
}

/// Font-free metrics with fixed per-character advances, in ems.
///
/// Used to lay out banners without any installed font (plan dumps, tests).
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedAdvanceMetrics;

impl FixedAdvanceMetrics {
    /// Advance of one character in ems.
    pub fn advance_em(c: char) -> f64 {
        match c {
            '\u{0300}'..='\u{036F}' | '\u{200B}'..='\u{200D}' => 0.0,
            ' ' => 0.3,
            'M' | 'W' | 'm' | 'w' => 0.9,
            'i' | 'j' | 'l' | 'I' | '.' | ',' | '\'' | '!' | ':' | ';' | '|' => 0.35,
            _ => 0.6,
        }
    }
}

impl GlyphMetrics for FixedAdvanceMetrics {
    fn text_width(&mut self, text: &str, _font: &FontChoice, size_px: f64) -> ArcBannerResult<f64> {
        Ok(text.chars().map(Self::advance_em).sum::<f64>() * size_px)
    }
}
