//! Prompt-to-banner session.
//!
//! [`Generator`] owns everything that outlives one render: the seeded random source, the font
//! store and shaper, and the most recent result. Each [`Generator::generate`] call samples fresh
//! parameters, so calling it again with the same prompt regenerates.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    assets::fonts::FontStore,
    compile::plan::BannerPlan,
    encode::png::{ExportedImage, encode_png},
    foundation::error::{ArcBannerError, ArcBannerResult},
    render::cpu::Compositor,
    render::pipeline::render_banner,
    sample::sampler::sample_params,
    session::opts::BannerOpts,
    text::engine::TextLayoutEngine,
};

/// A banner-generation session.
pub struct Generator {
    opts: BannerOpts,
    seed: u64,
    rng: StdRng,
    engine: TextLayoutEngine,
    compositor: Compositor,
    image: Option<ExportedImage>,
    last_plan: Option<BannerPlan>,
    last_error: Option<ArcBannerError>,
    loading: bool,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("opts", &self.opts)
            .field("seed", &self.seed)
            .field("has_image", &self.image.is_some())
            .field("loading", &self.loading)
            .finish()
    }
}

impl Generator {
    /// Start a session, loading fonts as `opts` describes.
    pub fn new(opts: BannerOpts) -> ArcBannerResult<Self> {
        let fonts = FontStore::new(opts.system_fonts, opts.fonts_dir.as_deref());
        Self::with_fonts(opts, fonts)
    }

    /// Start a session over an already populated font store.
    pub fn with_fonts(opts: BannerOpts, fonts: FontStore) -> ArcBannerResult<Self> {
        opts.canvas.validate()?;
        if fonts.face_count() == 0 {
            tracing::warn!("no fonts loaded; every render will fail");
        }
        let seed = opts.seed.unwrap_or_else(|| rand::rng().random());
        tracing::info!(seed, "banner session seeded");
        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            engine: TextLayoutEngine::new(fonts),
            compositor: Compositor::new(),
            image: None,
            last_plan: None,
            last_error: None,
            loading: false,
            opts,
        })
    }

    /// Seed the sampler was started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Session options.
    pub fn opts(&self) -> &BannerOpts {
        &self.opts
    }

    /// Most recent successfully exported image.
    pub fn image(&self) -> Option<&ExportedImage> {
        self.image.as_ref()
    }

    /// Plan of the most recent successful render.
    pub fn last_plan(&self) -> Option<&BannerPlan> {
        self.last_plan.as_ref()
    }

    /// Error of the most recent failed render, cleared by the next attempt.
    pub fn last_error(&self) -> Option<&ArcBannerError> {
        self.last_error.as_ref()
    }

    /// `true` while a render is in progress.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Render `prompt` with freshly sampled parameters.
    ///
    /// Blank prompts are ignored without touching any state. A failed render is logged, clears
    /// the image and is recorded in [`last_error`](Self::last_error); it is never retried.
    pub fn generate(&mut self, prompt: &str) -> Option<&ExportedImage> {
        let text = prompt.trim();
        if text.is_empty() {
            tracing::debug!("ignoring blank prompt");
            return self.image.as_ref();
        }

        self.loading = true;
        self.last_error = None;
        let result = self.render(text);
        self.loading = false;

        match result {
            Ok((plan, image)) => {
                tracing::info!(
                    mode = ?plan.layout.mode,
                    font = plan.layout.font.family,
                    size_px = plan.layout.font_size_px,
                    bytes = image.png.len(),
                    "banner rendered"
                );
                self.last_plan = Some(plan);
                self.image = Some(image);
            }
            Err(err) => {
                tracing::error!(%err, "banner render failed");
                self.image = None;
                self.last_plan = None;
                self.last_error = Some(err);
            }
        }
        self.image.as_ref()
    }

    fn render(&mut self, text: &str) -> ArcBannerResult<(BannerPlan, ExportedImage)> {
        let params = sample_params(&mut self.rng, text, self.opts.mode);
        let rendered = render_banner(
            text,
            &params,
            self.opts.canvas,
            &mut self.engine,
            &mut self.compositor,
        )?;
        let image = encode_png(&rendered.frame)?;
        Ok((rendered.plan, image))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/generator.rs"]
mod tests;
