use std::f64::consts::PI;

use super::*;
use crate::{
    sample::sampler::LayoutMode, style::fonts::FONT_CATALOG, style::fonts::FontChoice,
    text::metrics::FixedAdvanceMetrics,
};

fn spec(span: f64, font_size_px: f64, spacing_factor: f64) -> LayoutSpec {
    LayoutSpec {
        font: FONT_CATALOG[0],
        font_size_px,
        mode: LayoutMode::Arc,
        rotation_radians: 0.0,
        arc_span_radians: span,
        spacing_factor,
    }
}

struct ConstMetrics(f64);

impl GlyphMetrics for ConstMetrics {
    fn text_width(&mut self, _: &str, _: &FontChoice, _: f64) -> ArcBannerResult<f64> {
        Ok(self.0)
    }
}

struct FailingMetrics;

impl GlyphMetrics for FailingMetrics {
    fn text_width(&mut self, _: &str, _: &FontChoice, _: f64) -> ArcBannerResult<f64> {
        Err(ArcBannerError::font("no face"))
    }
}

fn arc(outcome: ArcOutcome) -> ArcLayout {
    match outcome {
        ArcOutcome::Arc(a) => a,
        ArcOutcome::Fallback => panic!("expected arc layout"),
    }
}

#[test]
fn hello_on_a_quarter_turn() {
    // Long enough that the radius floor does not bind.
    let s = spec(PI / 2.0, 120.0, 1.1);
    let layout = arc(layout_arc("HELLO", &s, &mut FixedAdvanceMetrics).unwrap());

    assert_eq!(layout.placements.len(), 5);
    let chars: String = layout.placements.iter().map(|p| p.character).collect();
    assert_eq!(chars, "HELLO");

    for w in layout.placements.windows(2) {
        assert!(w[1].angle_radians > w[0].angle_radians);
    }
    let first = &layout.placements[0];
    assert!((first.angle_radians - (-PI / 4.0 + first.slice_radians / 2.0)).abs() < 1e-9);
    assert!((layout.end_angle() - PI / 4.0).abs() < 1e-9);
    assert!((layout.span_radians - PI / 2.0).abs() < 1e-9);
}

#[test]
fn radius_floor_centers_the_consumed_span() {
    // "Hi" at 100px: sum = (0.6 + 0.35) * 100 = 95px, far below floor * span.
    let s = spec(PI, 100.0, 1.0);
    let layout = arc(layout_arc("Hi", &s, &mut FixedAdvanceMetrics).unwrap());

    assert!((layout.radius_px - 110.0).abs() < 1e-9);
    assert!(layout.span_radians < layout.target_span_radians);
    let half = layout.span_radians / 2.0;
    assert!((layout.start_angle() + half).abs() < 1e-9);
    assert!((layout.end_angle() - half).abs() < 1e-9);
}

#[test]
fn slices_sum_to_consumed_span() {
    let s = spec(0.8 * PI, 130.0, 1.14);
    let text = "The quick brown fox jumps over the lazy dog";
    let layout = arc(layout_arc(text, &s, &mut FixedAdvanceMetrics).unwrap());
    let total: f64 = layout.placements.iter().map(|p| p.slice_radians).sum();
    assert!((total - layout.span_radians).abs() < 1e-9);
    assert_eq!(layout.placements.len(), text.chars().count());
    for w in layout.placements.windows(2) {
        assert!(w[1].angle_radians >= w[0].angle_radians);
    }
    for p in &layout.placements {
        assert!(p.angle_radians.is_finite());
        assert_eq!(p.radius_px, layout.radius_px);
    }
}

#[test]
fn combining_marks_get_zero_slices() {
    let s = spec(PI / 2.0, 120.0, 1.1);
    let layout = arc(layout_arc("e\u{0301}MM", &s, &mut FixedAdvanceMetrics).unwrap());
    assert_eq!(layout.placements.len(), 4);
    assert_eq!(layout.placements[1].slice_radians, 0.0);
    let expected = layout.placements[0].angle_radians + layout.placements[0].slice_radians / 2.0;
    assert!((layout.placements[1].angle_radians - expected).abs() < 1e-12);
}

#[test]
fn zero_total_width_falls_back() {
    let s = spec(PI / 2.0, 120.0, 1.1);
    assert_eq!(
        layout_arc("abc", &s, &mut ConstMetrics(0.0)).unwrap(),
        ArcOutcome::Fallback
    );
    assert_eq!(
        layout_arc("", &s, &mut FixedAdvanceMetrics).unwrap(),
        ArcOutcome::Fallback
    );
}

#[test]
fn non_finite_widths_fall_back() {
    let s = spec(PI / 2.0, 120.0, 1.1);
    assert_eq!(
        layout_arc("abc", &s, &mut ConstMetrics(f64::NAN)).unwrap(),
        ArcOutcome::Fallback
    );
    assert_eq!(
        layout_arc("abc", &s, &mut ConstMetrics(f64::INFINITY)).unwrap(),
        ArcOutcome::Fallback
    );
}

#[test]
fn metric_errors_propagate() {
    let s = spec(PI / 2.0, 120.0, 1.1);
    let err = layout_arc("abc", &s, &mut FailingMetrics).unwrap_err();
    assert!(err.to_string().starts_with("font error:"));
}

#[test]
fn zero_span_is_rejected() {
    let s = spec(0.0, 120.0, 1.1);
    assert!(layout_arc("abc", &s, &mut FixedAdvanceMetrics).is_err());
}
