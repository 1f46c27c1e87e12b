use rand::{SeedableRng, rngs::StdRng};

use super::*;

#[test]
fn background_stops_are_hued_apart_within_bounds() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..1_000 {
        let [a, b] = sample_background(&mut rng);
        let delta = (b.hue - a.hue).rem_euclid(360.0);
        assert!((20.0..140.0).contains(&delta), "hue delta {delta}");
        for c in [a, b] {
            assert!((0.0..360.0).contains(&c.hue));
            assert!((55.0..=95.0).contains(&c.saturation));
            assert!((25.0..=60.0).contains(&c.lightness));
        }
    }
}

#[test]
fn font_size_is_scaled_integer_range() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..1_000 {
        let size = sample_font_size(&mut rng);
        assert!((84.0..=168.0).contains(&size), "size {size}");
        assert_eq!(size, size.round());
    }
}

#[test]
fn layout_draws_stay_in_their_ranges() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut arcs = 0usize;
    let n = 4_000usize;
    for _ in 0..n {
        let spec = sample_layout(&mut rng, "short", None);
        spec.validate().unwrap();
        assert!(spec.rotation_radians.abs() <= MAX_ROTATION_JITTER);
        assert!(spec.arc_span_radians >= 0.55 * PI - 1e-12);
        assert!(spec.arc_span_radians <= 0.95 * PI + 1e-12);
        assert!((1.06..=1.18).contains(&spec.spacing_factor));
        assert!(FONT_CATALOG.contains(&spec.font));
        if spec.mode == LayoutMode::Arc {
            arcs += 1;
        }
    }
    let ratio = arcs as f64 / n as f64;
    assert!((0.60..0.70).contains(&ratio), "arc ratio {ratio}");
}

#[test]
fn long_text_uses_fixed_spacing() {
    let mut rng = StdRng::seed_from_u64(14);
    let long = "a".repeat(LONG_TEXT_CHARS + 1);
    let exactly = "a".repeat(LONG_TEXT_CHARS);
    assert_eq!(sample_layout(&mut rng, &long, None).spacing_factor, 1.14);
    let s = sample_layout(&mut rng, &exactly, None).spacing_factor;
    assert!((1.06..=1.18).contains(&s));
}

#[test]
fn forced_mode_does_not_shift_the_sample_stream() {
    let mut a = StdRng::seed_from_u64(15);
    let mut b = StdRng::seed_from_u64(15);
    let free = sample_params(&mut a, "HELLO", None);
    let forced = sample_params(&mut b, "HELLO", Some(LayoutMode::Straight));

    assert_eq!(forced.layout.mode, LayoutMode::Straight);
    assert_eq!(free.palette, forced.palette);
    assert_eq!(free.layout.font, forced.layout.font);
    assert_eq!(free.layout.rotation_radians, forced.layout.rotation_radians);
    assert_eq!(free.layout.arc_span_radians, forced.layout.arc_span_radians);
}

#[test]
fn same_seed_replays_the_same_params() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    assert_eq!(
        sample_params(&mut a, "replay me", None),
        sample_params(&mut b, "replay me", None)
    );
}

#[test]
fn arc_span_clamp_handles_extremes() {
    assert_eq!(clamp_arc_span(0.0), MIN_ARC_SPAN);
    assert_eq!(clamp_arc_span(10.0), MAX_ARC_SPAN);
    assert_eq!(clamp_arc_span(f64::NAN), MIN_ARC_SPAN);
    assert_eq!(clamp_arc_span(PI), PI);
}

#[test]
fn validate_rejects_bad_specs() {
    let mut rng = StdRng::seed_from_u64(16);
    let good = sample_layout(&mut rng, "x", Some(LayoutMode::Arc));
    assert!(good.validate().is_ok());

    let bad_size = LayoutSpec {
        font_size_px: 0.0,
        ..good
    };
    assert!(bad_size.validate().is_err());

    let bad_spacing = LayoutSpec {
        spacing_factor: 0.9,
        ..good
    };
    assert!(bad_spacing.validate().is_err());

    let bad_span = LayoutSpec {
        arc_span_radians: 2.0 * PI,
        ..good
    };
    assert!(bad_span.validate().is_err());
}
