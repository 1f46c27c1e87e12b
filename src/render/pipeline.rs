use crate::{
    compile::compiler::compile_banner,
    compile::plan::BannerPlan,
    foundation::core::Canvas,
    foundation::error::ArcBannerResult,
    render::backend::FrameRGBA,
    render::cpu::Compositor,
    sample::sampler::RenderParams,
    text::engine::TextLayoutEngine,
};

/// A rendered banner together with the plan that produced it.
#[derive(Clone, Debug)]
pub struct RenderedBanner {
    /// Resolved layout and colors.
    pub plan: BannerPlan,
    /// Premultiplied pixels.
    pub frame: FrameRGBA,
}

/// Compile + render a single banner.
///
/// This is the primary one-shot API for producing pixels from sampled parameters.
///
/// Pipeline:
/// 1. [`compile_banner`](crate::compile_banner), measuring glyphs with `engine`
/// 2. [`Compositor::render`](crate::Compositor::render)
pub fn render_banner(
    text: &str,
    params: &RenderParams,
    canvas: Canvas,
    engine: &mut TextLayoutEngine,
    compositor: &mut Compositor,
) -> ArcBannerResult<RenderedBanner> {
    let plan = compile_banner(text, params, canvas, engine)?;
    let frame = compositor.render(&plan, engine)?;
    Ok(RenderedBanner { plan, frame })
}
