//! HSV color with alpha (input only)

use serde::{Deserialize, Serialize};

use super::rgba::opaque;
use super::{Hsla, Rgba};
use crate::convert::{self, clamp_to, clamp_unit, normalize_hue};

/// A color as hue, saturation and value plus alpha.
///
/// HSV is what a saturation/value palette produces, so it is accepted as an
/// input and converted straight away; it is never a stored representation.
/// Saturation and value are percentages (`0.0..=100.0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsva {
    /// Hue in degrees
    pub h: f64,
    /// Saturation in percent
    pub s: f64,
    /// Value in percent
    pub v: f64,
    /// Alpha (0.0..=1.0)
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Hsva {
    #[inline]
    pub fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self { h, s, v, a }
    }

    /// Wrap the hue with `((h % 360) + 360) % 360` and clamp the rest.
    pub fn bounded(self) -> Self {
        Self {
            h: normalize_hue(self.h),
            s: clamp_to(self.s, 100.0),
            v: clamp_to(self.v, 100.0),
            a: clamp_unit(self.a),
        }
    }
}

impl From<Rgba> for Hsva {
    fn from(rgb: Rgba) -> Self {
        let [h, s, v] = convert::rgb_to_hsv(rgb.r, rgb.g, rgb.b);
        Self::new(h, s * 100.0, v * 100.0, clamp_unit(rgb.a))
    }
}

impl From<Hsla> for Hsva {
    fn from(hsl: Hsla) -> Self {
        let [h, s, v] = convert::hsl_to_hsv(hsl.h, hsl.s / 100.0, hsl.l / 100.0);
        Self::new(h, s * 100.0, v * 100.0, clamp_unit(hsl.a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded() {
        let color = Hsva::new(400.0, 150.0, -10.0, 1.0).bounded();
        assert_eq!(color, Hsva::new(40.0, 100.0, 0.0, 1.0));
    }

    #[test]
    fn test_rgb_round_trip_through_hsv() {
        let original = Rgba::new(12.0, 200.0, 99.0, 0.75);
        let back = Rgba::from(Hsva::from(original));
        assert!((original.r - back.r).abs() < 1e-6);
        assert!((original.g - back.g).abs() < 1e-6);
        assert!((original.b - back.b).abs() < 1e-6);
        assert_eq!(original.a, back.a);
    }

    #[test]
    fn test_hsl_round_trip_through_hsv() {
        let original = Hsla::new(275.0, 40.0, 35.0, 1.0);
        let back = Hsla::from(Hsva::from(original));
        assert!((original.h - back.h).abs() < 1e-6);
        assert!((original.s - back.s).abs() < 1e-6);
        assert!((original.l - back.l).abs() < 1e-6);
    }
}
