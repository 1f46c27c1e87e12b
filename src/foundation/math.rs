pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Wrap an angle in degrees into `[0, 360)`.
pub(crate) fn wrap_degrees(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if w >= 360.0 { 0.0 } else { w }
}

/// Circular mean of two hues in degrees, wrapped into `[0, 360)`.
pub(crate) fn mean_hue_degrees(a: f64, b: f64) -> f64 {
    let (sa, ca) = a.to_radians().sin_cos();
    let (sb, cb) = b.to_radians().sin_cos();
    let (s, c) = (sa + sb, ca + cb);
    if s.abs() < 1e-12 && c.abs() < 1e-12 {
        // Exactly opposite hues have no circular mean; fall back to the arithmetic one.
        return wrap_degrees((a + b) * 0.5);
    }
    wrap_degrees(s.atan2(c).to_degrees())
}

pub(crate) fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let af = f32::from(a);
    let bf = f32::from(b);
    (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
