use super::*;

const RED: Rgba8 = Rgba8::opaque(255, 0, 0);
const BLUE: Rgba8 = Rgba8::opaque(0, 0, 255);
const GREEN: Rgba8 = Rgba8::opaque(0, 255, 0);

#[test]
fn diagonal_gradient_runs_corner_to_corner() {
    let canvas = Canvas::new(64, 32).unwrap();
    let bytes = diagonal_gradient_premul(canvas, RED, BLUE);
    assert_eq!(bytes.len(), canvas.rgba8_len());

    let px = |x: usize, y: usize| {
        let i = (y * 64 + x) * 4;
        [bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]
    };
    let tl = px(0, 0);
    let br = px(63, 31);
    assert!(tl[0] > 240 && tl[2] < 15);
    assert!(br[2] > 240 && br[0] < 15);
    assert!(bytes.chunks_exact(4).all(|p| p[3] == 255));

    // Pixels along the anti-diagonal direction share roughly the same mix.
    let a = px(32, 0);
    let b = px(24, 16);
    assert!((i32::from(a[0]) - i32::from(b[0])).abs() <= 12);
}

#[test]
fn stops_interpolate_and_clamp() {
    let stops = [(0.0, RED), (0.5, GREEN), (1.0, BLUE)];
    assert_eq!(sample_stops(&stops, -1.0), RED);
    assert_eq!(sample_stops(&stops, 0.5), GREEN);
    assert_eq!(sample_stops(&stops, 2.0), BLUE);
    let q = sample_stops(&stops, 0.25);
    assert_eq!(q.r, 128);
    assert_eq!(q.g, 128);
}

#[test]
fn single_stop_is_constant() {
    let stops = [(0.0, GREEN)];
    assert_eq!(sample_stops(&stops, 0.0), GREEN);
    assert_eq!(sample_stops(&stops, 0.7), GREEN);
}

#[test]
fn empty_stops_are_transparent() {
    assert_eq!(sample_stops(&[], 0.3).a, 0);
}

#[test]
fn gradient_image_rejects_oversized_width() {
    assert!(horizontal_gradient_image(&[(0.0, RED)], 70_000).is_err());
    assert!(horizontal_gradient_image(&[(0.0, RED), (1.0, BLUE)], 256).is_ok());
}
