//! arcbanner renders a line of text as a stylized raster banner.
//!
//! Every render samples a two-tone background, derives a legible text palette from its
//! lightness, picks a font and lays the text out either glyph by glyph along a circular arc or
//! as rotated, word-wrapped lines. The result is composited on the CPU and exported as PNG.
//!
//! The session-oriented entry point is [`Generator`]:
//!
//! - Configure a session with [`BannerOpts`]
//! - Call [`Generator::generate`] with a prompt
//! - Read the [`ExportedImage`] back, or the [`BannerPlan`] that produced it
//!
//! The individual stages ([`sample_params`], [`layout_arc`], [`layout_straight`],
//! [`compile_banner`], [`Compositor`], [`encode_png`]) are public for callers that want to drive
//! them directly or swap the [`GlyphMetrics`] provider.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub(crate) mod compile;
pub(crate) mod encode;
pub(crate) mod layout;
pub(crate) mod render;
pub(crate) mod sample;
pub(crate) mod session;
pub(crate) mod style;
pub(crate) mod text;

pub use crate::foundation::core::{Affine, Canvas, Point, Rgba8, Rgba8Premul, Vec2};
pub use crate::foundation::error::{ArcBannerError, ArcBannerResult};

pub use crate::assets::fonts::{FontStore, ResolvedFont};
pub use crate::compile::compiler::{compile_banner, stroke_width_px};
pub use crate::compile::plan::{BannerPlan, PlacedRun, ShadowStyle, TextLayout};
pub use crate::encode::png::{EXPORT_FILE_NAME, ExportedImage, encode_png};
pub use crate::layout::arc::{ArcLayout, ArcOutcome, GlyphPlacement, layout_arc};
pub use crate::layout::straight::{LineBlock, StraightLayout, layout_straight, wrap_words};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::Compositor;
pub use crate::render::pipeline::{RenderedBanner, render_banner};
pub use crate::sample::sampler::{
    LayoutMode, LayoutSpec, RenderParams, clamp_arc_span, sample_background, sample_layout,
    sample_params,
};
pub use crate::session::generator::Generator;
pub use crate::session::opts::BannerOpts;
pub use crate::style::color::ColorSample;
pub use crate::style::contrast::{
    LIGHT_BACKGROUND_THRESHOLD, Palette, Polarity, average_lightness, derive_palette,
};
pub use crate::style::fonts::{FONT_CATALOG, FontChoice, GenericFamily};
pub use crate::text::engine::{RegisteredFont, ShapedGlyph, ShapedText, TextLayoutEngine};
pub use crate::text::metrics::{FixedAdvanceMetrics, GlyphMetrics};
