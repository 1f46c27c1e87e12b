use std::sync::Arc;

use crate::{
    foundation::core::{Canvas, Rgba8},
    foundation::error::{ArcBannerError, ArcBannerResult},
    foundation::math::lerp_u8,
};

/// Premultiplied RGBA8 bytes of a top-left to bottom-right two-stop gradient.
pub fn diagonal_gradient_premul(canvas: Canvas, start: Rgba8, end: Rgba8) -> Vec<u8> {
    let (w, h) = (canvas.width as usize, canvas.height as usize);
    let mut bytes = vec![0u8; canvas.rgba8_len()];
    let (fw, fh) = (f64::from(canvas.width), f64::from(canvas.height));
    let denom = fw * fw + fh * fh;
    for y in 0..h {
        for x in 0..w {
            // Projection of the pixel center onto the (0,0)->(w,h) diagonal.
            let px = x as f64 + 0.5;
            let py = y as f64 + 0.5;
            let t = ((px * fw + py * fh) / denom).clamp(0.0, 1.0) as f32;
            let c = mix(start, end, t).premultiplied();
            let idx = (y * w + x) * 4;
            bytes[idx..idx + 4].copy_from_slice(&c.to_array());
        }
    }
    bytes
}

/// Color of a multi-stop gradient at `t` in `[0, 1]`.
///
/// Stops must be sorted by position. Before the first stop and after the last, the end colors
/// are held.
pub fn sample_stops(stops: &[(f32, Rgba8)], t: f32) -> Rgba8 {
    let Some(&(first_pos, first)) = stops.first() else {
        return Rgba8::opaque(0, 0, 0).with_alpha_f32(0.0);
    };
    if t <= first_pos {
        return first;
    }
    for pair in stops.windows(2) {
        let (p0, c0) = pair[0];
        let (p1, c1) = pair[1];
        if t <= p1 {
            let span = p1 - p0;
            let local = if span <= 0.0 { 1.0 } else { (t - p0) / span };
            return mix(c0, c1, local);
        }
    }
    stops[stops.len() - 1].1
}

/// A `width`×1 image paint holding a horizontal gradient across `stops`.
///
/// Drawn with pad extend, so a paint transform mapping `[0, width]` onto the text extent colors
/// everything left of the text with the first stop and everything right with the last.
pub fn horizontal_gradient_image(
    stops: &[(f32, Rgba8)],
    width: u32,
) -> ArcBannerResult<vello_cpu::Image> {
    let w: u16 = width
        .max(1)
        .try_into()
        .map_err(|_| ArcBannerError::render("gradient width exceeds u16"))?;
    let denom = (f32::from(w) - 1.0).max(1.0);
    let pixels: Vec<vello_cpu::peniko::color::PremulRgba8> = (0..w)
        .map(|x| {
            let c = sample_stops(stops, f32::from(x) / denom).premultiplied();
            vello_cpu::peniko::color::PremulRgba8::from_u8_array(c.to_array())
        })
        .collect();
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, 1, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn mix(a: Rgba8, b: Rgba8, t: f32) -> Rgba8 {
    Rgba8 {
        r: lerp_u8(a.r, b.r, t),
        g: lerp_u8(a.g, b.g, t),
        b: lerp_u8(a.b, b.b, t),
        a: lerp_u8(a.a, b.a, t),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
