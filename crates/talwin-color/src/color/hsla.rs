//! HSL color with alpha

use serde::{Deserialize, Serialize};

use super::rgba::opaque;
use super::{round2, Hsva, Rgba};
use crate::convert::{self, clamp_to, clamp_unit, normalize_hue};

/// A color as hue, saturation and lightness plus alpha.
///
/// Hue is in degrees (`0.0..360.0`), saturation and lightness are percentages
/// (`0.0..=100.0`), alpha is in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    /// Hue in degrees
    pub h: f64,
    /// Saturation in percent
    pub s: f64,
    /// Lightness in percent
    pub l: f64,
    /// Alpha (0.0..=1.0)
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Hsla {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Wrap the hue and clamp the remaining channels.
    pub fn bounded(self) -> Self {
        Self {
            h: normalize_hue(self.h),
            s: clamp_to(self.s, 100.0),
            l: clamp_to(self.l, 100.0),
            a: clamp_unit(self.a),
        }
    }

    /// Bound and round every channel to two decimals.
    pub(crate) fn quantized(self) -> Self {
        let bounded = self.bounded();
        Self {
            // rounding 359.999 lands on 360
            h: normalize_hue(round2(bounded.h)),
            s: round2(bounded.s),
            l: round2(bounded.l),
            a: round2(bounded.a),
        }
    }
}

impl From<Rgba> for Hsla {
    fn from(rgb: Rgba) -> Self {
        let [h, s, l] = convert::rgb_to_hsl(rgb.r, rgb.g, rgb.b);
        Self::new(h, s * 100.0, l * 100.0, clamp_unit(rgb.a))
    }
}

impl From<Hsva> for Hsla {
    fn from(hsv: Hsva) -> Self {
        let [h, s, l] = convert::hsv_to_hsl(hsv.h, hsv.s / 100.0, hsv.v / 100.0);
        Self::new(h, s * 100.0, l * 100.0, clamp_unit(hsv.a))
    }
}
