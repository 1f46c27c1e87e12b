use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    foundation::error::{ArcBannerError, ArcBannerResult},
    render::backend::FrameRGBA,
};

/// File name every exported banner is saved under.
pub const EXPORT_FILE_NAME: &str = "banner.png";

/// An encoded banner ready to hand to a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Suggested file name.
    pub file_name: &'static str,
    /// Lossless PNG bytes.
    pub png: Vec<u8>,
}

impl ExportedImage {
    /// Write the PNG into `dir` (created if missing) and return the file path.
    pub fn save_to_dir(&self, dir: &Path) -> ArcBannerResult<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
        let path = dir.join(self.file_name);
        std::fs::write(&path, &self.png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(path)
    }
}

/// Encode a rendered frame as PNG.
#[tracing::instrument(level = "debug", skip(frame), fields(width = frame.width, height = frame.height))]
pub fn encode_png(frame: &FrameRGBA) -> ArcBannerResult<ExportedImage> {
    let mut rgba = frame.data.clone();
    if frame.premultiplied {
        for px in rgba.chunks_exact_mut(4) {
            unpremultiply_in_place(px);
        }
    }
    let img = image::RgbaImage::from_raw(frame.width, frame.height, rgba)
        .ok_or_else(|| ArcBannerError::encode("frame byte length does not match dimensions"))?;

    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| ArcBannerError::encode(format!("png encoding failed: {e}")))?;

    Ok(ExportedImage {
        width: frame.width,
        height: frame.height,
        file_name: EXPORT_FILE_NAME,
        png,
    })
}

/// Convert one premultiplied RGBA8 pixel (`px[..4]`) to straight alpha.
pub(crate) fn unpremultiply_in_place(px: &mut [u8]) {
    let a = u16::from(px[3]);
    if a == 0 {
        px[0] = 0;
        px[1] = 0;
        px[2] = 0;
        return;
    }
    for c in &mut px[..3] {
        *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
