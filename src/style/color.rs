use crate::foundation::core::Rgba8;

/// One sampled color in HSL space.
///
/// `hue` is in degrees `[0, 360)`; `saturation` and `lightness` are percentages `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorSample {
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation percentage.
    pub saturation: f64,
    /// Lightness percentage.
    pub lightness: f64,
}

impl ColorSample {
    /// Construct a sample from raw HSL components.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Opaque straight-alpha sRGB color for this sample.
    pub fn to_rgba8(self) -> Rgba8 {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c * 0.5;

        let (r1, g1, b1) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgba8::opaque(to_u8(r1), to_u8(g1), to_u8(b1))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
