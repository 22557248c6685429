//! RGB color with alpha

use serde::{Deserialize, Serialize};

use super::{round2, Hsla, Hsva};
use crate::convert::{self, channel_to_byte, clamp_to, clamp_unit};

/// A color as red, green and blue channels plus alpha.
///
/// Channels are in the range `0.0..=255.0`; alpha is in `0.0..=1.0`.
/// Constructors do not bound their input; call [`bounded`](Self::bounded)
/// when the values come from outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel (0.0..=255.0)
    pub r: f64,
    /// Green channel (0.0..=255.0)
    pub g: f64,
    /// Blue channel (0.0..=255.0)
    pub b: f64,
    /// Alpha (0.0..=1.0)
    #[serde(default = "opaque")]
    pub a: f64,
}

pub(crate) fn opaque() -> f64 {
    1.0
}

impl Rgba {
    /// Create a new color from raw channel values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    ///
    /// # Example
    /// ```
    /// use talwin_color::Rgba;
    /// let red = Rgba::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 255.0);
    /// assert_eq!(red.a, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(f64::from(r), f64::from(g), f64::from(b), 1.0)
    }

    /// Round channels to bytes `[R, G, B]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
        ]
    }

    /// Clamp every channel into its declared range.
    pub fn bounded(self) -> Self {
        Self {
            r: clamp_to(self.r, 255.0),
            g: clamp_to(self.g, 255.0),
            b: clamp_to(self.b, 255.0),
            a: clamp_unit(self.a),
        }
    }

    /// Bound and round to integer channels. Alpha keeps two decimals.
    pub(crate) fn quantized(self) -> Self {
        let [r, g, b] = self.to_bytes();
        Self::new(f64::from(r), f64::from(g), f64::from(b), round2(clamp_unit(self.a)))
    }

    /// Like [`quantized`](Self::quantized), but alpha snaps to the 1/255
    /// steps a hex string can carry.
    pub(crate) fn quantized_for_hex(self) -> Self {
        let alpha = f64::from(convert::alpha_to_byte(self.a)) / 255.0;
        Self { a: alpha, ..self.quantized() }
    }
}

impl From<Hsva> for Rgba {
    /// Convert from HSV using the six-sector chroma algorithm.
    fn from(hsv: Hsva) -> Self {
        let [r, g, b] = convert::hsv_to_rgb(hsv.h, hsv.s / 100.0, hsv.v / 100.0);
        Self::new(r, g, b, clamp_unit(hsv.a))
    }
}

impl From<Hsla> for Rgba {
    fn from(hsl: Hsla) -> Self {
        let [r, g, b] = convert::hsl_to_rgb(hsl.h, hsl.s / 100.0, hsl.l / 100.0);
        Self::new(r, g, b, clamp_unit(hsl.a))
    }
}
