use super::*;

#[test]
fn default_canvas_matches_reference_render() {
    let c = Canvas::default();
    assert_eq!((c.width, c.height), (1400, 900));
    assert_eq!(c.center(), Point::new(700.0, 450.0));
    assert_eq!(c.rgba8_len(), 1400 * 900 * 4);
}

#[test]
fn canvas_rejects_zero_and_oversized_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    assert!(Canvas::new(64, 32).is_ok());
}

#[test]
fn premultiply_scales_color_channels_by_alpha() {
    let p = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(p.to_array(), [128, 64, 0, 128]);
    assert_eq!(Rgba8::opaque(9, 8, 7).premultiplied().to_array(), [9, 8, 7, 255]);
}

#[test]
fn alpha_fraction_roundtrips_through_u8() {
    let c = Rgba8::opaque(0, 0, 0).with_alpha_f32(0.45);
    assert_eq!(c.a, 115);
    assert!((c.alpha_f32() - 0.45).abs() < 0.01);
    assert_eq!(Rgba8::opaque(1, 2, 3).with_alpha_f32(7.0).a, 255);
}
