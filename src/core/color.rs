use crate::core::constants::ORANGE_PROBABILITY;
use rand::Rng;
use std::fmt;

/// 8-bit RGB color with a floating alpha, matching the CSS `rgba()` form the
/// canvas accepts as a fill style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Which half of the bimodal ember palette this color came from.
    pub fn tone(&self) -> Tone {
        if self.b == 0 && self.r >= 200 {
            Tone::Orange
        } else {
            Tone::Dark
        }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Orange,
    Dark,
}

/// Sample a particle color from the ember palette.
///
/// - 60%: orange, R in [200, 255), G in [69, 139), B = 0, alpha in [0.3, 0.8)
/// - 40%: dark gray, one level in [0, 30) on all channels, alpha in [0.1, 0.5)
pub fn sample_ember<R: Rng + ?Sized>(rng: &mut R) -> Rgba {
    if rng.gen::<f32>() < ORANGE_PROBABILITY {
        let r = rng.gen_range(200..255u8);
        let g = rng.gen_range(69..139u8);
        let a = 0.3 + rng.gen::<f32>() * 0.5;
        Rgba::rgba(r, g, 0, a)
    } else {
        let shade = rng.gen_range(0..30u8);
        let a = 0.1 + rng.gen::<f32>() * 0.4;
        Rgba::rgba(shade, shade, shade, a)
    }
}
