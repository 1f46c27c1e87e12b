use crate::{
    foundation::core::{Affine, Canvas, Point, Rgba8, Vec2},
    layout::arc::ArcLayout,
    layout::straight::StraightLayout,
    sample::sampler::LayoutSpec,
    style::contrast::Palette,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Fully resolved description of one banner render.
///
/// A plan carries everything the compositor needs and nothing it has to decide:
/// - sampled colors and font (`palette`, `layout`)
/// - the resolved text geometry (`text_layout`), for inspection and dumps
/// - a flat list of positioned text runs (`runs`), each painted at its local origin
/// - the single rigid transform applied to the whole text block (`block_transform`)
pub struct BannerPlan {
    /// Text being rendered, trimmed.
    pub text: String,
    /// Output surface size.
    pub canvas: Canvas,
    /// Sampled colors.
    pub palette: Palette,
    /// Sampled font and geometry.
    pub layout: LayoutSpec,
    /// Resolved layout geometry.
    pub text_layout: TextLayout,
    /// Runs to paint, in paint order.
    pub runs: Vec<PlacedRun>,
    /// Outline stroke width in pixels.
    pub stroke_width_px: f64,
    /// Drop shadow parameters.
    pub shadow: ShadowStyle,
    /// Point the block rotation pivots around.
    pub anchor: Point,
    /// Rotation about `anchor`, applied on top of every run transform.
    pub block_transform: Affine,
}

impl BannerPlan {
    /// Canvas-space transform of one run.
    pub fn run_transform(&self, run: &PlacedRun) -> Affine {
        self.block_transform * run.transform
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Layout geometry chosen for the text.
pub enum TextLayout {
    /// Glyphs placed around a circle centered at `center`.
    Arc {
        /// Placements and radius.
        arc: ArcLayout,
        /// Circle center before the block transform.
        center: Point,
    },
    /// Wrapped lines.
    Straight(StraightLayout),
    /// Arc measurement was degenerate; the whole text is one centered run.
    SingleRun,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A piece of text painted centered on its local origin.
pub struct PlacedRun {
    /// Text of the run (one character in arc mode, one line in straight mode).
    pub text: String,
    /// Local-to-canvas transform, before the block transform.
    pub transform: Affine,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Blurred text shadow.
pub struct ShadowStyle {
    /// Straight-alpha shadow color.
    pub color: Rgba8,
    /// Gaussian blur radius in pixels.
    pub blur_radius_px: f64,
    /// Canvas-space offset of the shadow silhouette.
    pub offset: Vec2,
}
