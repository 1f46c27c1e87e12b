//! Contrast policy: derives a legible text palette from the sampled background.
//!
//! The policy bands lightness by role instead of computing a contrast ratio. Backgrounds whose
//! average lightness is above [`LIGHT_BACKGROUND_THRESHOLD`] get dark text and a dark outline;
//! everything else gets light text and a light outline. The bands never overlap, so text never
//! lands in the ambiguous mid range.

use rand::Rng;

use crate::{
    foundation::core::Rgba8,
    foundation::math::{mean_hue_degrees, wrap_degrees},
    style::color::ColorSample,
};

/// Average background lightness above which the background counts as light.
pub const LIGHT_BACKGROUND_THRESHOLD: f64 = 55.0;

const DARK_TEXT_LIGHTNESS: (f64, f64) = (8.0, 35.0);
const DARK_TEXT_SATURATION: (f64, f64) = (40.0, 85.0);
const LIGHT_TEXT_LIGHTNESS: (f64, f64) = (68.0, 98.0);
const LIGHT_TEXT_SATURATION: (f64, f64) = (45.0, 95.0);
const TEXT_HUE_JITTER_DEG: f64 = 60.0;

const OUTLINE_ALPHA: f32 = 0.45;
const GLOW_SHADOW_ALPHA: f32 = 0.25;
const DARK_SHADOW_ALPHA: f32 = 0.35;
const SHADOW_BLUR_PER_PX: f64 = 0.12;

/// Whether a background reads as light or dark overall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Average lightness above the threshold.
    Light,
    /// Average lightness at or below the threshold.
    Dark,
}

impl Polarity {
    /// Classify a background pair by its average lightness.
    pub fn of_background(background: &[ColorSample; 2]) -> Self {
        if average_lightness(background) > LIGHT_BACKGROUND_THRESHOLD {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// The opposite polarity.
    pub fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Full set of colors chosen for one render.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Palette {
    /// Two background gradient stops, top-left to bottom-right.
    pub background: [ColorSample; 2],
    /// Text gradient stops, left to right (2 or 3 entries from the policy).
    pub text: Vec<ColorSample>,
    /// Outline stroke color (black or white at fixed alpha).
    pub outline: Rgba8,
    /// Shadow color (black or white at fixed alpha).
    pub shadow: Rgba8,
    /// Polarity of the background the palette was derived from.
    pub background_polarity: Polarity,
}

impl Palette {
    /// Evenly spaced gradient stops for the text fill.
    ///
    /// A single color yields one stop at position 0.
    pub fn text_stops(&self) -> Vec<(f32, Rgba8)> {
        gradient_stops(&self.text)
    }

    /// Shadow blur radius for a given font size.
    pub fn shadow_blur_radius(&self, font_size_px: f64) -> f64 {
        SHADOW_BLUR_PER_PX * font_size_px
    }
}

/// Mean lightness of a background pair.
pub fn average_lightness(background: &[ColorSample; 2]) -> f64 {
    (background[0].lightness + background[1].lightness) * 0.5
}

/// Derive the text palette for a background pair.
pub fn derive_palette<R: Rng + ?Sized>(rng: &mut R, background: [ColorSample; 2]) -> Palette {
    let polarity = Polarity::of_background(&background);
    let base_hue = mean_hue_degrees(background[0].hue, background[1].hue);

    let (l_band, s_band) = match polarity {
        Polarity::Light => (DARK_TEXT_LIGHTNESS, DARK_TEXT_SATURATION),
        Polarity::Dark => (LIGHT_TEXT_LIGHTNESS, LIGHT_TEXT_SATURATION),
    };

    let n = rng.random_range(2..=3usize);
    let text = (0..n)
        .map(|_| {
            let hue = wrap_degrees(
                base_hue + rng.random_range(-TEXT_HUE_JITTER_DEG..=TEXT_HUE_JITTER_DEG),
            );
            let saturation = rng.random_range(s_band.0..=s_band.1);
            let lightness = rng.random_range(l_band.0..=l_band.1);
            ColorSample::new(hue, saturation, lightness)
        })
        .collect();

    Palette {
        background,
        text,
        outline: polarity_color(polarity.inverse()).with_alpha_f32(OUTLINE_ALPHA),
        shadow: shadow_color(polarity),
        background_polarity: polarity,
    }
}

/// Black for dark polarity, white for light polarity.
fn polarity_color(p: Polarity) -> Rgba8 {
    match p {
        Polarity::Light => Rgba8::opaque(255, 255, 255),
        Polarity::Dark => Rgba8::opaque(0, 0, 0),
    }
}

// The shadow takes the polarity opposite the outline: a soft white glow on light backgrounds and
// a darker drop shadow on dark ones.
fn shadow_color(background: Polarity) -> Rgba8 {
    match background {
        Polarity::Light => polarity_color(Polarity::Light).with_alpha_f32(GLOW_SHADOW_ALPHA),
        Polarity::Dark => polarity_color(Polarity::Dark).with_alpha_f32(DARK_SHADOW_ALPHA),
    }
}

fn gradient_stops(colors: &[ColorSample]) -> Vec<(f32, Rgba8)> {
    let last = colors.len().saturating_sub(1);
    colors
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let pos = if last == 0 {
                0.0
            } else {
                i as f32 / last as f32
            };
            (pos, c.to_rgba8())
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/style/contrast.rs"]
mod tests;
