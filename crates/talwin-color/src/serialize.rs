//! Color string serialization
//!
//! The inverse of [`parse`](crate::parse()): any string produced here parses
//! back to the same normalized value.

use crate::color::ColorValue;
use crate::convert::rgb_to_hex;
use crate::format::OutputFormat;

/// Print a number with at most two decimals, trailing zeros trimmed.
fn number(x: f64) -> String {
    let fixed = format!("{x:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        // -0.001 prints as "-0.00"
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Format a value in `format`.
///
/// The value is normalized to `format` first, so an HSL value can be printed
/// as HEX and vice versa. The alpha token is omitted when alpha is 1.
///
/// | Format | Opaque | Translucent |
/// |--------|--------|-------------|
/// | HEX | `#rrggbb` | `#rrggbbaa` |
/// | RGB | `rgb(r, g, b)` | `rgba(r, g, b, a)` |
/// | HSL | `hsl(h, s%, l%)` | `hsla(h, s%, l%, a)` |
///
/// # Example
/// ```
/// use talwin_color::{serialize, ColorValue, OutputFormat, Rgba};
///
/// let orange = ColorValue::Rgb(Rgba::new(255.0, 128.0, 0.0, 0.5));
/// assert_eq!(serialize(&orange, OutputFormat::Rgb), "rgba(255, 128, 0, 0.5)");
/// assert_eq!(serialize(&orange, OutputFormat::Hex), "#ff800080");
/// ```
pub fn serialize(value: &ColorValue, format: OutputFormat) -> String {
    match value.normalized(format) {
        ColorValue::Rgb(c) if format == OutputFormat::Hex => rgb_to_hex(c.r, c.g, c.b, c.a),
        ColorValue::Rgb(c) if c.a < 1.0 => format!(
            "rgba({}, {}, {}, {})",
            number(c.r),
            number(c.g),
            number(c.b),
            number(c.a)
        ),
        ColorValue::Rgb(c) => format!("rgb({}, {}, {})", number(c.r), number(c.g), number(c.b)),
        ColorValue::Hsl(c) if c.a < 1.0 => format!(
            "hsla({}, {}%, {}%, {})",
            number(c.h),
            number(c.s),
            number(c.l),
            number(c.a)
        ),
        ColorValue::Hsl(c) => format!("hsl({}, {}%, {}%)", number(c.h), number(c.s), number(c.l)),
    }
}
