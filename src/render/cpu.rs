//! CPU compositor built on `vello_cpu`.
//!
//! A banner is painted as three premultiplied layers: the background gradient, the blurred text
//! shadow and the text itself. `vello_cpu` renders each text layer into a fresh pixmap; the
//! layers are then combined with source-over.

use std::ops::{Deref, DerefMut};

use crate::{
    compile::plan::BannerPlan,
    foundation::core::{Affine, Rgba8},
    foundation::error::{ArcBannerError, ArcBannerResult},
    render::backend::FrameRGBA,
    render::blur::blur_in_place,
    render::composite::over_in_place,
    render::paint::{diagonal_gradient_premul, horizontal_gradient_image},
    text::engine::{RegisteredFont, ShapedGlyph, ShapedText, TextLayoutEngine},
};

/// Upper bound on the text gradient image width.
const MAX_GRADIENT_WIDTH_PX: f64 = 4096.0;

/// Renders [`BannerPlan`]s to pixels. Reuses its `vello_cpu` context across renders of the
/// same size.
#[derive(Default)]
pub struct Compositor {
    ctx: Option<vello_cpu::RenderContext>,
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor")
            .field("has_ctx", &self.ctx.is_some())
            .finish()
    }
}

struct ShapedRun {
    shaped: ShapedText,
    transform: Affine,
}

impl Compositor {
    /// Construct a compositor with no cached render context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint `plan`, shaping text with `engine`.
    #[tracing::instrument(level = "debug", skip_all, fields(runs = plan.runs.len()))]
    pub fn render(
        &mut self,
        plan: &BannerPlan,
        engine: &mut TextLayoutEngine,
    ) -> ArcBannerResult<FrameRGBA> {
        plan.canvas.validate()?;
        let canvas = plan.canvas;
        let [bg0, bg1] = plan.palette.background;
        let mut frame = diagonal_gradient_premul(canvas, bg0.to_rgba8(), bg1.to_rgba8());

        let font = engine.font(&plan.layout.font)?;
        let size = plan.layout.font_size_px;
        let mut runs = Vec::with_capacity(plan.runs.len());
        for run in &plan.runs {
            runs.push(ShapedRun {
                shaped: engine.shape(&run.text, &plan.layout.font, size)?,
                transform: run.transform,
            });
        }

        let shadow_shift = Affine::translate(plan.shadow.offset);
        let mut shadow = self.paint_layer(plan, |painter| {
            painter.set_paint(plan.shadow.color);
            for run in &runs {
                let mut scope = painter.scoped(shadow_shift * plan.block_transform * run.transform);
                scope.fill(&font, size, &run.shaped);
            }
            Ok(())
        })?;
        blur_in_place(
            &mut shadow,
            canvas.width,
            canvas.height,
            plan.shadow.blur_radius_px,
        )?;

        let (gradient, gradient_from_block) = text_gradient(plan, &runs)?;
        let text = self.paint_layer(plan, |painter| {
            for run in &runs {
                let mut scope = painter.scoped(plan.block_transform * run.transform);
                // The gradient lives in block space; undo the run transform so it spans the
                // whole text instead of restarting on every glyph.
                scope.set_image_paint(&gradient, run.transform.inverse() * gradient_from_block);
                scope.fill(&font, size, &run.shaped);
                scope.stroke(&font, size, &run.shaped, plan.palette.outline, plan.stroke_width_px);
            }
            Ok(())
        })?;

        over_in_place(&mut frame, &shadow)?;
        over_in_place(&mut frame, &text)?;

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: frame,
            premultiplied: true,
        })
    }

    fn paint_layer(
        &mut self,
        plan: &BannerPlan,
        f: impl FnOnce(&mut Painter<'_>) -> ArcBannerResult<()>,
    ) -> ArcBannerResult<Vec<u8>> {
        let w: u16 = plan
            .canvas
            .width
            .try_into()
            .map_err(|_| ArcBannerError::render("canvas width exceeds u16"))?;
        let h: u16 = plan
            .canvas
            .height
            .try_into()
            .map_err(|_| ArcBannerError::render("canvas height exceeds u16"))?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            _ => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();

        let result = {
            let mut painter = Painter::new(&mut ctx);
            f(&mut painter)
        };
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        if result.is_ok() {
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
        }
        self.ctx = Some(ctx);
        result?;
        Ok(pixmap.data_as_u8_slice().to_vec())
    }
}

/// Gradient paint spanning the text block horizontally, plus the image-to-block transform.
fn text_gradient(
    plan: &BannerPlan,
    runs: &[ShapedRun],
) -> ArcBannerResult<(vello_cpu::Image, Affine)> {
    let mut x0 = f64::INFINITY;
    let mut x1 = f64::NEG_INFINITY;
    for run in runs {
        let origin = run.transform.translation();
        let half = run.shaped.width * 0.5;
        x0 = x0.min(origin.x - half);
        x1 = x1.max(origin.x + half);
    }
    if !x0.is_finite() || !x1.is_finite() || x1 <= x0 {
        x0 = 0.0;
        x1 = f64::from(plan.canvas.width);
    }
    let extent = x1 - x0;
    let image_w = extent.ceil().clamp(2.0, MAX_GRADIENT_WIDTH_PX);
    let image = horizontal_gradient_image(&plan.palette.text_stops(), image_w as u32)?;
    let to_block = Affine::translate((x0, 0.0)) * Affine::scale_non_uniform(extent / image_w, 1.0);
    Ok((image, to_block))
}

/// Drawing surface wrapper that tracks the current transform.
struct Painter<'a> {
    ctx: &'a mut vello_cpu::RenderContext,
    transform: Affine,
}

impl<'a> Painter<'a> {
    fn new(ctx: &'a mut vello_cpu::RenderContext) -> Self {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Self {
            ctx,
            transform: Affine::IDENTITY,
        }
    }

    /// Append `local` to the current transform until the returned scope is dropped.
    fn scoped(&mut self, local: Affine) -> TransformScope<'_, 'a> {
        let saved = self.transform;
        self.transform = saved * local;
        self.ctx.set_transform(affine_to_cpu(self.transform));
        TransformScope {
            painter: self,
            saved,
        }
    }

    fn set_paint(&mut self, color: Rgba8) {
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
    }

    fn set_image_paint(&mut self, image: &vello_cpu::Image, paint_transform: Affine) {
        self.ctx.set_paint_transform(affine_to_cpu(paint_transform));
        self.ctx.set_paint(image.clone());
    }

    fn fill(&mut self, font: &RegisteredFont, size_px: f64, shaped: &ShapedText) {
        self.ctx
            .glyph_run(&font.data)
            .font_size(size_px as f32)
            .fill_glyphs(shaped.centered_glyphs().map(to_cpu_glyph));
    }

    /// Outline `shaped`. Invalid strokes are skipped with a warning.
    fn stroke(
        &mut self,
        font: &RegisteredFont,
        size_px: f64,
        shaped: &ShapedText,
        color: Rgba8,
        width_px: f64,
    ) {
        if let Err(err) = validate_stroke(shaped, width_px) {
            tracing::warn!(%err, "skipping outline stroke");
            return;
        }
        self.set_paint(color);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width_px));
        self.ctx
            .glyph_run(&font.data)
            .font_size(size_px as f32)
            .stroke_glyphs(shaped.centered_glyphs().map(to_cpu_glyph));
    }
}

/// Restores the painter's previous transform on drop.
struct TransformScope<'p, 'a> {
    painter: &'p mut Painter<'a>,
    saved: Affine,
}

impl<'a> Deref for TransformScope<'_, 'a> {
    type Target = Painter<'a>;

    fn deref(&self) -> &Self::Target {
        self.painter
    }
}

impl DerefMut for TransformScope<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.painter
    }
}

impl Drop for TransformScope<'_, '_> {
    fn drop(&mut self) {
        self.painter.transform = self.saved;
        self.painter
            .ctx
            .set_transform(affine_to_cpu(self.painter.transform));
    }
}

fn validate_stroke(shaped: &ShapedText, width_px: f64) -> ArcBannerResult<()> {
    if !width_px.is_finite() || width_px <= 0.0 {
        return Err(ArcBannerError::render(format!(
            "stroke width {width_px} must be finite and > 0"
        )));
    }
    if shaped
        .glyphs
        .iter()
        .any(|g| !g.x.is_finite() || !g.y.is_finite())
    {
        return Err(ArcBannerError::render("glyph position is not finite"));
    }
    Ok(())
}

fn to_cpu_glyph(g: ShapedGlyph) -> vello_cpu::Glyph {
    vello_cpu::Glyph {
        id: g.id,
        x: g.x,
        y: g.y,
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
