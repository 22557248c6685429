//! Numeric color-space conversions.
//!
//! Every function here is total: inputs are bounded before use (hue wrapped
//! into `[0, 360)`, unit channels clamped into `[0, 1]`), so callers never
//! see a failure and never get a channel outside its declared range.
//!
//! Scales used throughout this module:
//!
//! | Channel | Scale |
//! |---------|-------|
//! | hue | degrees, `[0, 360)` |
//! | saturation / value / lightness | unit, `[0, 1]` |
//! | red / green / blue | `[0, 255]` (not rounded) |
//! | alpha | unit, `[0, 1]` |
//!
//! The percent scale (`0..=100`) used by [`Hsla`](crate::Hsla) and
//! [`Hsva`](crate::Hsva) is handled by the color types, not here.

/// Wrap an angle in degrees into `[0, 360)`.
///
/// Negative angles wrap around (`-30` becomes `330`). NaN maps to `0`.
///
/// # Example
/// ```
/// use talwin_color::convert::normalize_hue;
/// assert_eq!(normalize_hue(400.0), 40.0);
/// assert_eq!(normalize_hue(-30.0), 330.0);
/// ```
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = ((h % 360.0) + 360.0) % 360.0;
    // (-tiny + 360) rounds to 360.0 in floating point
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Clamp a value into `[0, 1]`. NaN maps to `0`.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Clamp a value into `[0, max]`. NaN maps to `0`.
#[inline]
pub(crate) fn clamp_to(x: f64, max: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, max)
    }
}

/// HSV to RGB using the six-sector chroma algorithm.
///
/// `h` in degrees, `s` and `v` in `[0, 1]`. Returns `[r, g, b]` in `[0, 255]`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    let h = normalize_hue(h);
    let s = clamp_unit(s);
    let v = clamp_unit(v);

    let chroma = v * s;
    let sector = h / 60.0;
    let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());
    let m = v - chroma;

    let (r, g, b) = match sector.floor() as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    [
        clamp_to((r + m) * 255.0, 255.0),
        clamp_to((g + m) * 255.0, 255.0),
        clamp_to((b + m) * 255.0, 255.0),
    ]
}

/// HSV to HSL. Hue passes through (wrapped); saturation and lightness are unit.
pub fn hsv_to_hsl(h: f64, s: f64, v: f64) -> [f64; 3] {
    let h = normalize_hue(h);
    let s = clamp_unit(s);
    let v = clamp_unit(v);

    let l = v * (1.0 - s / 2.0);
    let sl = if l <= 0.0 || l >= 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };

    [h, clamp_unit(sl), clamp_unit(l)]
}

/// HSL to HSV, the inverse of [`hsv_to_hsl`].
pub fn hsl_to_hsv(h: f64, s: f64, l: f64) -> [f64; 3] {
    let h = normalize_hue(h);
    let s = clamp_unit(s);
    let l = clamp_unit(l);

    let v = l + s * l.min(1.0 - l);
    let sv = if v <= 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };

    [h, clamp_unit(sv), clamp_unit(v)]
}

/// RGB (`[0, 255]`) to HSV. Achromatic colors get hue `0`.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> [f64; 3] {
    let r = clamp_to(r, 255.0) / 255.0;
    let g = clamp_to(g, 255.0) / 255.0;
    let b = clamp_to(b, 255.0) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    [normalize_hue(h), clamp_unit(s), max]
}

/// RGB (`[0, 255]`) to HSL, routed through HSV.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> [f64; 3] {
    let [h, s, v] = rgb_to_hsv(r, g, b);
    hsv_to_hsl(h, s, v)
}

/// HSL to RGB (`[0, 255]`), routed through HSV.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    let [h, s, v] = hsl_to_hsv(h, s, l);
    hsv_to_rgb(h, s, v)
}

/// Round a `[0, 255]` channel to a byte.
#[inline]
pub fn channel_to_byte(c: f64) -> u8 {
    clamp_to(c, 255.0).round() as u8
}

/// Scale a unit alpha to a byte.
#[inline]
pub fn alpha_to_byte(a: f64) -> u8 {
    (clamp_unit(a) * 255.0).round() as u8
}

/// RGB to a lowercase `#rrggbb` string, or `#rrggbbaa` when alpha is not 1.
///
/// # Example
/// ```
/// use talwin_color::convert::rgb_to_hex;
/// assert_eq!(rgb_to_hex(255.0, 128.0, 0.0, 1.0), "#ff8000");
/// assert_eq!(rgb_to_hex(255.0, 128.0, 0.0, 0.5), "#ff800080");
/// ```
pub fn rgb_to_hex(r: f64, g: f64, b: f64, a: f64) -> String {
    let (r, g, b) = (channel_to_byte(r), channel_to_byte(g), channel_to_byte(b));
    let alpha = alpha_to_byte(a);
    if alpha == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{alpha:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn approx(a: [f64; 3], b: [f64; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < TOLERANCE)
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(400.0), 40.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(-720.0), 0.0);
        assert_eq!(normalize_hue(f64::NAN), 0.0);
        assert!(normalize_hue(-1e-20) < 360.0);
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }

    #[test]
    fn test_hsv_to_rgb_primaries() {
        assert!(approx(hsv_to_rgb(0.0, 1.0, 1.0), [255.0, 0.0, 0.0]));
        assert!(approx(hsv_to_rgb(60.0, 1.0, 1.0), [255.0, 255.0, 0.0]));
        assert!(approx(hsv_to_rgb(120.0, 1.0, 1.0), [0.0, 255.0, 0.0]));
        assert!(approx(hsv_to_rgb(180.0, 1.0, 1.0), [0.0, 255.0, 255.0]));
        assert!(approx(hsv_to_rgb(240.0, 1.0, 1.0), [0.0, 0.0, 255.0]));
        assert!(approx(hsv_to_rgb(300.0, 1.0, 1.0), [255.0, 0.0, 255.0]));
    }

    #[test]
    fn test_hsv_to_rgb_greys() {
        assert!(approx(hsv_to_rgb(123.0, 0.0, 0.0), [0.0, 0.0, 0.0]));
        assert!(approx(hsv_to_rgb(123.0, 0.0, 1.0), [255.0, 255.0, 255.0]));
        assert!(approx(hsv_to_rgb(0.0, 0.0, 0.5), [127.5, 127.5, 127.5]));
    }

    #[test]
    fn test_hsv_to_rgb_bounds_inputs() {
        // 400 degrees wraps to 40, s and v clamp to 1
        assert!(approx(hsv_to_rgb(400.0, 1.5, 2.0), hsv_to_rgb(40.0, 1.0, 1.0)));
        // negative value clamps to black
        assert!(approx(hsv_to_rgb(40.0, 1.0, -0.1), [0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_hsv_to_hsl_known_values() {
        // pure red
        assert!(approx(hsv_to_hsl(0.0, 1.0, 1.0), [0.0, 1.0, 0.5]));
        // white and black have zero saturation
        assert!(approx(hsv_to_hsl(0.0, 0.0, 1.0), [0.0, 0.0, 1.0]));
        assert!(approx(hsv_to_hsl(0.0, 0.0, 0.0), [0.0, 0.0, 0.0]));
        // hsv(210, 50%, 80%) == hsl(210, 50%, 60%)
        assert!(approx(hsv_to_hsl(210.0, 0.5, 0.8), [210.0, 0.5, 0.6]));
    }

    #[test]
    fn test_rgb_hsv_round_trip() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(51) {
                    let rgb = [r as f64, g as f64, b as f64];
                    let [h, s, v] = rgb_to_hsv(rgb[0], rgb[1], rgb[2]);
                    let back = hsv_to_rgb(h, s, v);
                    assert!(approx(rgb, back), "rgb {rgb:?} came back as {back:?}");
                }
            }
        }
    }

    #[test]
    fn test_hsl_hsv_round_trip() {
        for h in (0..360).step_by(30) {
            for s in 1..10 {
                for l in 1..10 {
                    let hsl = [h as f64, s as f64 / 10.0, l as f64 / 10.0];
                    let [hv, sv, vv] = hsl_to_hsv(hsl[0], hsl[1], hsl[2]);
                    let back = hsv_to_hsl(hv, sv, vv);
                    assert!(approx(hsl, back), "hsl {hsl:?} came back as {back:?}");
                }
            }
        }
    }

    #[test]
    fn test_rgb_to_hsl_known_values() {
        assert!(approx(rgb_to_hsl(255.0, 0.0, 0.0), [0.0, 1.0, 0.5]));
        assert!(approx(rgb_to_hsl(0.0, 0.0, 255.0), [240.0, 1.0, 0.5]));
        assert!(approx(rgb_to_hsl(255.0, 255.0, 255.0), [0.0, 0.0, 1.0]));
        assert!(approx(hsl_to_rgb(120.0, 1.0, 0.25), [0.0, 127.5, 0.0]));
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(0.0, 0.0, 0.0, 1.0), "#000000");
        assert_eq!(rgb_to_hex(255.0, 255.0, 255.0, 1.0), "#ffffff");
        assert_eq!(rgb_to_hex(254.6, 0.4, 16.0, 1.0), "#ff0010");
        assert_eq!(rgb_to_hex(18.0, 52.0, 86.0, 0.0), "#12345600");
        assert_eq!(rgb_to_hex(18.0, 52.0, 86.0, 0.5), "#12345680");
    }

    #[test]
    fn test_rgb_to_hex_clamps_channels() {
        assert_eq!(rgb_to_hex(300.0, -5.0, 255.0, 2.0), "#ff00ff");
    }
}
