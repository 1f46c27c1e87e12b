use super::*;
use crate::{foundation::core::Canvas, sample::sampler::LayoutMode};

fn fontless() -> Generator {
    let opts = BannerOpts::default().with_seed(Some(3)).with_system_fonts(false);
    Generator::with_fonts(opts, FontStore::empty()).unwrap()
}

#[test]
fn blank_prompt_changes_nothing() {
    let mut g = fontless();
    assert!(g.generate("").is_none());
    assert!(g.generate(" \n\t ").is_none());
    assert!(g.image().is_none());
    assert!(g.last_error().is_none());
    assert!(!g.is_loading());
}

#[test]
fn render_failure_clears_image_and_records_error() {
    let mut g = fontless();
    assert!(g.generate("HELLO").is_none());
    assert!(!g.is_loading());
    assert!(g.image().is_none());
    assert!(g.last_plan().is_none());
    let err = g.last_error().unwrap();
    assert!(err.to_string().starts_with("font error:"));
}

#[test]
fn explicit_seed_is_kept() {
    let g = fontless();
    assert_eq!(g.seed(), 3);
}

#[test]
fn invalid_canvas_is_rejected() {
    let opts = BannerOpts::default().with_canvas(Canvas {
        width: 0,
        height: 10,
    });
    assert!(Generator::with_fonts(opts, FontStore::empty()).is_err());
}

#[test]
fn generates_and_regenerates_with_system_fonts() {
    let fonts = FontStore::new(true, None);
    if fonts.face_count() == 0 {
        return;
    }
    let opts = BannerOpts::default()
        .with_seed(Some(11))
        .with_canvas(Canvas::new(400, 260).unwrap())
        .with_mode(Some(LayoutMode::Arc));
    let mut g = Generator::with_fonts(opts, fonts).unwrap();

    let first = g.generate("Regenerate me").cloned().unwrap();
    assert_eq!(first.file_name, "banner.png");
    assert_eq!((first.width, first.height), (400, 260));
    assert_eq!(g.last_plan().unwrap().layout.mode, LayoutMode::Arc);

    let second = g.generate("Regenerate me").cloned().unwrap();
    assert_ne!(first.png, second.png);

    // A blank prompt keeps the last image.
    assert_eq!(g.generate("   ").cloned(), Some(second));
}
