use std::path::PathBuf;

use crate::{foundation::core::Canvas, sample::sampler::LayoutMode};

/// Environment variable holding a fixed `u64` seed.
pub const SEED_ENV: &str = "ARCBANNER_SEED";
/// Environment variable naming an extra fonts directory.
pub const FONTS_DIR_ENV: &str = "ARCBANNER_FONTS_DIR";

/// Options for a [`Generator`](crate::Generator) session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerOpts {
    /// Output surface size.
    pub canvas: Canvas,
    /// Seed for the parameter sampler; a fresh random seed when `None`.
    pub seed: Option<u64>,
    /// Force arc or straight layout instead of sampling it.
    pub mode: Option<LayoutMode>,
    /// Extra directory scanned for `.ttf`/`.otf`/`.ttc` files.
    pub fonts_dir: Option<PathBuf>,
    /// Whether to load the system font directories.
    pub system_fonts: bool,
}

impl Default for BannerOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            seed: None,
            mode: None,
            fonts_dir: None,
            system_fonts: true,
        }
    }
}

impl BannerOpts {
    /// Defaults overridden by `ARCBANNER_SEED` and `ARCBANNER_FONTS_DIR`.
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_ENV).and_then(|v| match v.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!(value = %v, "ignoring unparseable {SEED_ENV}");
                None
            }
        });
        let fonts_dir = lookup(FONTS_DIR_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Self {
            seed,
            fonts_dir,
            ..Self::default()
        }
    }

    /// Return options with a different canvas size.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Return options with a fixed sampler seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Return options with a forced layout mode.
    pub fn with_mode(mut self, mode: Option<LayoutMode>) -> Self {
        self.mode = mode;
        self
    }

    /// Return options with an extra fonts directory.
    pub fn with_fonts_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.fonts_dir = dir;
        self
    }

    /// Return options with system font loading switched on or off.
    pub fn with_system_fonts(mut self, on: bool) -> Self {
        self.system_fonts = on;
        self
    }
}
