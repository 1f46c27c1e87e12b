use rand::{Rng, SeedableRng, rngs::StdRng};

use super::*;

fn bg(h1: f64, l1: f64, h2: f64, l2: f64) -> [ColorSample; 2] {
    [ColorSample::new(h1, 70.0, l1), ColorSample::new(h2, 70.0, l2)]
}

#[test]
fn text_lightness_never_enters_the_mid_band() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2_000 {
        let background = bg(
            rng.random_range(0.0..360.0),
            rng.random_range(0.0..=100.0),
            rng.random_range(0.0..360.0),
            rng.random_range(0.0..=100.0),
        );
        let light = average_lightness(&background) > LIGHT_BACKGROUND_THRESHOLD;
        let palette = derive_palette(&mut rng, background);

        assert!((2..=3).contains(&palette.text.len()));
        for stop in &palette.text {
            if light {
                assert!(stop.lightness <= 35.0, "dark text expected, got {stop:?}");
            } else {
                assert!(stop.lightness >= 68.0, "light text expected, got {stop:?}");
            }
            assert!((0.0..360.0).contains(&stop.hue));
        }
    }
}

#[test]
fn light_background_gets_dark_text_and_dark_outline() {
    let mut rng = StdRng::seed_from_u64(1);
    let palette = derive_palette(&mut rng, bg(40.0, 80.0, 90.0, 80.0));

    assert_eq!(palette.background_polarity, Polarity::Light);
    assert!(palette.text.iter().all(|c| c.lightness <= 35.0));
    assert!(palette.text.iter().all(|c| (40.0..=85.0).contains(&c.saturation)));
    assert_eq!((palette.outline.r, palette.outline.g, palette.outline.b), (0, 0, 0));
    assert_eq!(palette.outline.a, 115);
    assert_eq!((palette.shadow.r, palette.shadow.g, palette.shadow.b), (255, 255, 255));
}

#[test]
fn dark_background_gets_light_text_and_light_outline() {
    let mut rng = StdRng::seed_from_u64(2);
    let palette = derive_palette(&mut rng, bg(200.0, 30.0, 260.0, 40.0));

    assert_eq!(palette.background_polarity, Polarity::Dark);
    assert!(palette.text.iter().all(|c| c.lightness >= 68.0));
    assert!(palette.text.iter().all(|c| (45.0..=95.0).contains(&c.saturation)));
    assert_eq!((palette.outline.r, palette.outline.g, palette.outline.b), (255, 255, 255));
    assert_eq!((palette.shadow.r, palette.shadow.g, palette.shadow.b), (0, 0, 0));
    assert!(palette.shadow.alpha_f32() >= 0.25 && palette.shadow.alpha_f32() <= 0.36);
}

#[test]
fn threshold_itself_counts_as_dark() {
    assert_eq!(Polarity::of_background(&bg(0.0, 55.0, 0.0, 55.0)), Polarity::Dark);
    assert_eq!(Polarity::of_background(&bg(0.0, 55.0, 0.0, 56.0)), Polarity::Light);
}

#[test]
fn text_hue_stays_within_jitter_of_background_mean() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let palette = derive_palette(&mut rng, bg(350.0, 30.0, 10.0, 30.0));
        for stop in &palette.text {
            let d = stop.hue.rem_euclid(360.0);
            let dist = d.min(360.0 - d);
            assert!(dist <= 60.0 + 1e-9, "hue {} too far from 0", stop.hue);
        }
    }
}

#[test]
fn gradient_stops_are_evenly_spaced() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut palette = derive_palette(&mut rng, bg(0.0, 30.0, 60.0, 30.0));

    palette.text = vec![
        ColorSample::new(0.0, 50.0, 80.0),
        ColorSample::new(10.0, 50.0, 80.0),
        ColorSample::new(20.0, 50.0, 80.0),
    ];
    let stops: Vec<f32> = palette.text_stops().iter().map(|(p, _)| *p).collect();
    assert_eq!(stops, vec![0.0, 0.5, 1.0]);

    palette.text.truncate(1);
    let stops = palette.text_stops();
    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].0, 0.0);
}

#[test]
fn shadow_blur_scales_with_font_size() {
    let mut rng = StdRng::seed_from_u64(5);
    let palette = derive_palette(&mut rng, bg(0.0, 30.0, 60.0, 30.0));
    assert!((palette.shadow_blur_radius(100.0) - 12.0).abs() < 1e-9);
}
