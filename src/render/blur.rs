//! Separable Gaussian blur over premultiplied RGBA8, in 16.16 fixed point.

use crate::foundation::error::{ArcBannerError, ArcBannerResult};

/// Kernel radius in taps for a blur radius in pixels.
///
/// The blur radius is treated as twice the standard deviation; the kernel extends three
/// standard deviations each way.
pub fn kernel_taps(blur_radius_px: f64) -> (u32, f32) {
    if !blur_radius_px.is_finite() || blur_radius_px <= 0.0 {
        return (0, 0.0);
    }
    let sigma = blur_radius_px * 0.5;
    ((sigma * 3.0).ceil() as u32, sigma as f32)
}

/// Blur `buf` (width×height premultiplied RGBA8) in place.
///
/// Only the bounding box of non-transparent pixels, grown by the kernel radius, is processed;
/// everything outside it stays transparent either way.
pub fn blur_in_place(
    buf: &mut [u8],
    width: u32,
    height: u32,
    blur_radius_px: f64,
) -> ArcBannerResult<()> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| ArcBannerError::render("blur buffer size overflow"))?;
    if buf.len() != expected {
        return Err(ArcBannerError::render(
            "blur expects a buffer matching width*height*4",
        ));
    }

    let (taps, sigma) = kernel_taps(blur_radius_px);
    if taps == 0 {
        return Ok(());
    }
    let Some(bounds) = alpha_bounds(buf, width, height) else {
        return Ok(());
    };
    let region = bounds.grow(taps, width, height);
    let kernel = gaussian_kernel_q16(taps, sigma)?;

    let (rw, rh) = (region.width(), region.height());
    let mut src = vec![0u8; (rw as usize) * (rh as usize) * 4];
    for (row, y) in (region.y0..region.y1).enumerate() {
        let from = ((y as usize) * (width as usize) + region.x0 as usize) * 4;
        let to = row * (rw as usize) * 4;
        src[to..to + (rw as usize) * 4].copy_from_slice(&buf[from..from + (rw as usize) * 4]);
    }

    let mut tmp = vec![0u8; src.len()];
    horizontal_pass(&src, &mut tmp, rw, rh, &kernel);
    vertical_pass(&tmp, &mut src, rw, rh, &kernel);

    for (row, y) in (region.y0..region.y1).enumerate() {
        let to = ((y as usize) * (width as usize) + region.x0 as usize) * 4;
        let from = row * (rw as usize) * 4;
        buf[to..to + (rw as usize) * 4].copy_from_slice(&src[from..from + (rw as usize) * 4]);
    }
    Ok(())
}

/// Half-open pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Region {
    pub(crate) x0: u32,
    pub(crate) y0: u32,
    pub(crate) x1: u32,
    pub(crate) y1: u32,
}

impl Region {
    fn width(self) -> u32 {
        self.x1 - self.x0
    }

    fn height(self) -> u32 {
        self.y1 - self.y0
    }

    fn grow(self, by: u32, width: u32, height: u32) -> Self {
        Self {
            x0: self.x0.saturating_sub(by),
            y0: self.y0.saturating_sub(by),
            x1: self.x1.saturating_add(by).min(width),
            y1: self.y1.saturating_add(by).min(height),
        }
    }
}

/// Bounding box of pixels with non-zero alpha, or `None` for a fully transparent buffer.
pub(crate) fn alpha_bounds(buf: &[u8], width: u32, height: u32) -> Option<Region> {
    let mut r: Option<Region> = None;
    for y in 0..height {
        let row = &buf[(y as usize) * (width as usize) * 4..][..(width as usize) * 4];
        for (x, px) in row.chunks_exact(4).enumerate() {
            if px[3] == 0 {
                continue;
            }
            let x = x as u32;
            r = Some(match r {
                None => Region {
                    x0: x,
                    y0: y,
                    x1: x + 1,
                    y1: y + 1,
                },
                Some(r) => Region {
                    x0: r.x0.min(x),
                    y0: r.y0,
                    x1: r.x1.max(x + 1),
                    y1: y + 1,
                },
            });
        }
    }
    r
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> ArcBannerResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ArcBannerError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = f64::from(i);
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights_f.iter().sum();
    if sum <= 0.0 {
        return Err(ArcBannerError::render("gaussian kernel sum is zero"));
    }

    let mut weights: Vec<u32> = weights_f
        .iter()
        .map(|wf| ((wf / sum) * 65536.0).round().clamp(0.0, 65536.0) as u32)
        .collect();
    // Put the rounding error on the center tap so the kernel sums to exactly 1.0.
    let acc: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let mid = weights.len() / 2;
    weights[mid] = (i64::from(weights[mid]) + (65536 - acc)).clamp(0, 65536) as u32;

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                let idx = ((y * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let (w, h) = (width as i32, height as i32);
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    ((acc + 32768) >> 16).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
