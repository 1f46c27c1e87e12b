use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ArcBannerError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ArcBannerError::font("x").to_string().contains("font error:"));
    assert!(
        ArcBannerError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        ArcBannerError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ArcBannerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
