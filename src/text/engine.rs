use std::collections::HashMap;

use crate::{
    assets::fonts::FontStore,
    foundation::error::{ArcBannerError, ArcBannerResult},
    style::fonts::FontChoice,
    text::metrics::GlyphMetrics,
};

/// One shaped glyph, in pixels relative to the layout origin (y is the baseline).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapedGlyph {
    /// Glyph id within the face.
    pub id: u32,
    /// Horizontal pen position.
    pub x: f32,
    /// Baseline position.
    pub y: f32,
}

/// Result of shaping one run of text on a single line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapedText {
    /// Positioned glyphs in visual order.
    pub glyphs: Vec<ShapedGlyph>,
    /// Advance width including trailing whitespace.
    pub width: f64,
    /// Distance from the top of the line box to the baseline.
    pub baseline: f64,
    /// Line ascent.
    pub ascent: f64,
    /// Line descent (positive, below the baseline).
    pub descent: f64,
}

impl ShapedText {
    /// Glyphs shifted so the run's ink box is centered on the origin.
    pub fn centered_glyphs(&self) -> impl Iterator<Item = ShapedGlyph> + '_ {
        let dx = (-self.width * 0.5) as f32;
        let dy = (-self.baseline + (self.ascent - self.descent) * 0.5) as f32;
        self.glyphs.iter().map(move |g| ShapedGlyph {
            id: g.id,
            x: g.x + dx,
            y: g.y + dy,
        })
    }
}

/// Font bytes registered with the shaper, ready for painting.
#[derive(Clone, Debug)]
pub struct RegisteredFont {
    /// Family name the shaper knows the face by.
    pub family_name: String,
    /// Paintable font handle for the rasterizer.
    pub data: vello_cpu::peniko::FontData,
    /// `true` when the requested catalog family was installed.
    pub exact: bool,
    /// Weight of the registered face; shaping selects it by this weight.
    pub weight: u16,
    /// `true` for italic and oblique faces.
    pub italic: bool,
}

/// Upper bound on memoized widths before the cache starts over.
pub const MAX_CACHED_WIDTHS: usize = 4096;

/// Memoized run widths keyed by text, font and size.
#[derive(Debug, Default)]
struct WidthCache {
    entries: HashMap<(String, FontChoice, u64), f64>,
}

impl WidthCache {
    fn get(&self, text: &str, font: &FontChoice, size_px: f64) -> Option<f64> {
        self.entries
            .get(&(text.to_owned(), *font, size_px.to_bits()))
            .copied()
    }

    fn insert(&mut self, text: &str, font: &FontChoice, size_px: f64, width: f64) {
        if self.entries.len() >= MAX_CACHED_WIDTHS {
            self.entries.clear();
        }
        self.entries
            .insert((text.to_owned(), *font, size_px.to_bits()), width);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Stateful helper that shapes text with Parley using faces resolved from a [`FontStore`].
///
/// Each catalog font is registered with the shaper once. Measured widths are memoized up to
/// [`MAX_CACHED_WIDTHS`] entries.
pub struct TextLayoutEngine {
    fonts: FontStore,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    registered: HashMap<FontChoice, RegisteredFont>,
    widths: WidthCache,
}

impl std::fmt::Debug for TextLayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayoutEngine")
            .field("fonts", &self.fonts)
            .field("registered", &self.registered.len())
            .finish()
    }
}

impl TextLayoutEngine {
    /// Construct an engine over `fonts` with fresh Parley contexts.
    pub fn new(fonts: FontStore) -> Self {
        Self {
            fonts,
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: HashMap::new(),
            widths: WidthCache::default(),
        }
    }

    /// Font database backing this engine.
    pub fn fonts(&self) -> &FontStore {
        &self.fonts
    }

    /// Number of memoized widths.
    pub fn cached_widths(&self) -> usize {
        self.widths.len()
    }

    /// Drop memoized widths. Registered fonts are kept.
    pub fn clear_width_cache(&mut self) {
        self.widths.clear();
    }

    /// Resolve and register `choice`, returning its paintable handle.
    pub fn font(&mut self, choice: &FontChoice) -> ArcBannerResult<RegisteredFont> {
        if let Some(f) = self.registered.get(choice) {
            return Ok(f.clone());
        }

        let resolved = self.fonts.resolve(choice)?;
        if !resolved.exact {
            tracing::debug!(
                requested = choice.family,
                using = %resolved.family_name,
                "catalog font not installed, using fallback face"
            );
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(resolved.bytes.to_vec()),
            None,
        );
        let mut names = Vec::<String>::with_capacity(families.len());
        for (id, _) in &families {
            if let Some(name) = self.font_ctx.collection.family_name(*id) {
                names.push(name.to_string());
            }
        }
        // A collection file registers every family it contains; prefer the resolved face's.
        let family_name = names
            .iter()
            .find(|name| name.eq_ignore_ascii_case(&resolved.family_name))
            .or_else(|| names.first())
            .cloned()
            .ok_or_else(|| ArcBannerError::font("no font families registered from font bytes"))?;

        let data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(resolved.bytes.to_vec()),
            resolved.index,
        );
        let out = RegisteredFont {
            family_name,
            data,
            exact: resolved.exact,
            weight: resolved.weight,
            italic: resolved.italic,
        };
        self.registered.insert(*choice, out.clone());
        Ok(out)
    }

    /// Shape `text` on a single unbroken line.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn shape(
        &mut self,
        text: &str,
        choice: &FontChoice,
        size_px: f64,
    ) -> ArcBannerResult<ShapedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ArcBannerError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let font = self.font(choice)?;
        // Faces of one family share a shaper family; weight and style pick the registered face.
        let style = if font.italic {
            parley::style::FontStyle::Italic
        } else {
            parley::style::FontStyle::Normal
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(font.family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(font.weight)),
        ));
        builder.push_default(parley::style::StyleProperty::FontStyle(style));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px as f32));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let mut out = ShapedText {
            width: f64::from(layout.full_width()),
            ..ShapedText::default()
        };
        for (i, line) in layout.lines().enumerate() {
            if i == 0 {
                let m = line.metrics();
                out.baseline = f64::from(m.baseline);
                out.ascent = f64::from(m.ascent);
                out.descent = f64::from(m.descent);
            }
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                out.glyphs.extend(run.positioned_glyphs().map(|g| ShapedGlyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                }));
            }
        }
        Ok(out)
    }
}

impl GlyphMetrics for TextLayoutEngine {
    fn text_width(&mut self, text: &str, font: &FontChoice, size_px: f64) -> ArcBannerResult<f64> {
        if text.is_empty() {
            return Ok(0.0);
        }
        if let Some(w) = self.widths.get(text, font, size_px) {
            return Ok(w);
        }
        let w = self.shape(text, font, size_px)?.width.max(0.0);
        self.widths.insert(text, font, size_px, w);
        Ok(w)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
