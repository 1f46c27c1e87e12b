use crate::{
    compile::plan::{BannerPlan, PlacedRun, ShadowStyle, TextLayout},
    foundation::core::{Affine, Canvas, Point, Vec2},
    foundation::error::{ArcBannerError, ArcBannerResult},
    layout::arc::{ArcLayout, ArcOutcome, layout_arc},
    layout::straight::layout_straight,
    sample::sampler::{LayoutMode, RenderParams},
    text::metrics::GlyphMetrics,
};

/// Minimum outline stroke width in pixels.
pub const MIN_STROKE_WIDTH_PX: f64 = 2.0;
/// Outline stroke width as a fraction of the font size.
pub const STROKE_WIDTH_PER_FONT_PX: f64 = 0.05;
/// Shadow offset along each axis, as a fraction of the font size.
pub const SHADOW_OFFSET_PER_FONT_PX: f64 = 0.04;
/// Vertical position of the arc's midpoint, as a fraction of canvas height.
pub const ARC_ANCHOR_Y_FRACTION: f64 = 0.55;

/// Outline stroke width for a font size.
pub fn stroke_width_px(font_size_px: f64) -> f64 {
    (font_size_px * STROKE_WIDTH_PER_FONT_PX).max(MIN_STROKE_WIDTH_PX)
}

/// Compile sampled parameters for `text` into a render plan.
///
/// `text` is trimmed; empty text is a validation error (callers filter it out first).
#[tracing::instrument(level = "debug", skip(params, metrics), fields(mode = ?params.layout.mode))]
pub fn compile_banner<M: GlyphMetrics + ?Sized>(
    text: &str,
    params: &RenderParams,
    canvas: Canvas,
    metrics: &mut M,
) -> ArcBannerResult<BannerPlan> {
    canvas.validate()?;
    params.layout.validate()?;
    let text = text.trim();
    if text.is_empty() {
        return Err(ArcBannerError::validation("banner text must be non-empty"));
    }

    let spec = &params.layout;
    let center = canvas.center();

    let (text_layout, runs, anchor) = match spec.mode {
        LayoutMode::Arc => match layout_arc(text, spec, metrics)? {
            ArcOutcome::Arc(arc) => {
                let anchor = Point::new(
                    center.x,
                    f64::from(canvas.height) * ARC_ANCHOR_Y_FRACTION,
                );
                let circle = arc_circle_center(&arc, anchor);
                let runs = arc_runs(&arc, circle);
                (TextLayout::Arc { arc, center: circle }, runs, anchor)
            }
            ArcOutcome::Fallback => (TextLayout::SingleRun, single_run(text, center), center),
        },
        LayoutMode::Straight => {
            let straight = layout_straight(text, spec, canvas, metrics)?;
            let runs = straight
                .lines
                .iter()
                .map(|line| PlacedRun {
                    text: line.text.clone(),
                    transform: Affine::translate((center.x, center.y + line.y_offset_px)),
                })
                .collect();
            (TextLayout::Straight(straight), runs, center)
        }
    };

    let block_transform = Affine::translate(anchor.to_vec2())
        * Affine::rotate(spec.rotation_radians)
        * Affine::translate(-anchor.to_vec2());

    let offset = spec.font_size_px * SHADOW_OFFSET_PER_FONT_PX;
    let shadow = ShadowStyle {
        color: params.palette.shadow,
        blur_radius_px: params.palette.shadow_blur_radius(spec.font_size_px),
        offset: Vec2::new(offset, offset),
    };

    tracing::debug!(runs = runs.len(), "compiled banner plan");
    Ok(BannerPlan {
        text: text.to_owned(),
        canvas,
        palette: params.palette.clone(),
        layout: *spec,
        text_layout,
        runs,
        stroke_width_px: stroke_width_px(spec.font_size_px),
        shadow,
        anchor,
        block_transform,
    })
}

/// Circle center that puts the arc's vertical midpoint on `anchor`.
fn arc_circle_center(arc: &ArcLayout, anchor: Point) -> Point {
    let half = arc.span_radians * 0.5;
    // Glyph centers run from y = c - r (top) down to y = c - r cos(half) (ends).
    let sag = arc.radius_px * (1.0 + half.cos()) * 0.5;
    Point::new(anchor.x, anchor.y + sag)
}

fn arc_runs(arc: &ArcLayout, circle: Point) -> Vec<PlacedRun> {
    arc.placements
        .iter()
        .map(|p| PlacedRun {
            text: p.character.to_string(),
            transform: Affine::translate(circle.to_vec2())
                * Affine::rotate(p.angle_radians)
                * Affine::translate((0.0, -p.radius_px)),
        })
        .collect()
}

fn single_run(text: &str, center: Point) -> Vec<PlacedRun> {
    vec![PlacedRun {
        text: text.to_owned(),
        transform: Affine::translate(center.to_vec2()),
    }]
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
