use super::*;

fn frame(w: u32, h: u32, px: [u8; 4], premultiplied: bool) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: px.repeat((w * h) as usize),
        premultiplied,
    }
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = [64u8, 32, 0, 128];
    unpremultiply_in_place(&mut px);
    assert_eq!(px, [128, 64, 0, 128]);

    let mut clear = [9u8, 9, 9, 0];
    unpremultiply_in_place(&mut clear);
    assert_eq!(clear, [0, 0, 0, 0]);
}

#[test]
fn encoded_png_decodes_to_the_same_pixels() {
    let f = frame(5, 3, [10, 20, 30, 255], true);
    let out = encode_png(&f).unwrap();
    assert_eq!(out.file_name, "banner.png");
    assert_eq!((out.width, out.height), (5, 3));
    assert_eq!(&out.png[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&out.png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (5, 3));
    assert_eq!(decoded.get_pixel(4, 2).0, [10, 20, 30, 255]);
}

#[test]
fn mismatched_frame_is_an_encode_error() {
    let mut f = frame(2, 2, [0, 0, 0, 255], false);
    f.data.pop();
    let err = encode_png(&f).unwrap_err();
    assert!(err.to_string().starts_with("encode error:"));
}

#[test]
fn save_writes_banner_png() {
    let dir = std::env::temp_dir().join(format!("arcbanner-png-{}", std::process::id()));
    let out = encode_png(&frame(2, 2, [1, 2, 3, 255], false)).unwrap();
    let path = out.save_to_dir(&dir).unwrap();
    assert_eq!(path.file_name().unwrap(), "banner.png");
    assert_eq!(std::fs::read(&path).unwrap(), out.png);
    std::fs::remove_dir_all(&dir).unwrap();
}
