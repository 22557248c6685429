//! Color formats and format detection for structured input.
//!
//! Host code may hand the picker a plain object instead of a string, e.g.
//! `{"h": 200, "s": 50, "v": 80}` from a palette drag. [`detect`] figures out
//! which format such an object is in by checking its keys against a fixed,
//! ordered table of channel signatures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::{ColorValue, Hsla, Hsva, Rgba};

/// Every format the picker understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Hex,
    Rgb,
    Hsl,
    /// Input only
    Hsv,
}

impl Format {
    /// Ordered channel names for this format.
    ///
    /// HEX shares the RGB channels; it differs only in its string template.
    pub fn channels(self) -> &'static [&'static str; 3] {
        match self {
            Format::Hex | Format::Rgb => &["r", "g", "b"],
            Format::Hsl => &["h", "s", "l"],
            Format::Hsv => &["h", "s", "v"],
        }
    }

    /// The output format with the same name, if there is one.
    pub fn output(self) -> Option<OutputFormat> {
        match self {
            Format::Hex => Some(OutputFormat::Hex),
            Format::Rgb => Some(OutputFormat::Rgb),
            Format::Hsl => Some(OutputFormat::Hsl),
            Format::Hsv => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Hsl => "hsl",
            Format::Hsv => "hsv",
        })
    }
}

/// Formats a color can be stored and printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Hex => Format::Hex,
            OutputFormat::Rgb => Format::Rgb,
            OutputFormat::Hsl => Format::Hsl,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Format::from(*self).fmt(f)
    }
}

/// Error for an unknown output format name.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown color format '{0}' (expected hex, rgb or hsl)")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    /// Case-insensitive: `hex`, `rgb` or `hsl`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(OutputFormat::Hex),
            "rgb" => Ok(OutputFormat::Rgb),
            "hsl" => Ok(OutputFormat::Hsl),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Detection order. First match wins, so an object carrying both `l` and `v`
/// is read as HSL.
const SIGNATURES: [Format; 3] = [Format::Rgb, Format::Hsl, Format::Hsv];

/// A structured color read from an object, channels bounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectedColor {
    Rgb(Rgba),
    Hsl(Hsla),
    Hsv(Hsva),
}

impl DetectedColor {
    pub fn format(&self) -> Format {
        match self {
            DetectedColor::Rgb(_) => Format::Rgb,
            DetectedColor::Hsl(_) => Format::Hsl,
            DetectedColor::Hsv(_) => Format::Hsv,
        }
    }

    /// Convert into a storable value (not yet quantized).
    pub fn into_value(self, format: OutputFormat) -> ColorValue {
        match (self, format) {
            (DetectedColor::Rgb(c), OutputFormat::Hsl) => ColorValue::Hsl(Hsla::from(c)),
            (DetectedColor::Rgb(c), _) => ColorValue::Rgb(c),
            (DetectedColor::Hsl(c), OutputFormat::Hsl) => ColorValue::Hsl(c),
            (DetectedColor::Hsl(c), _) => ColorValue::Rgb(Rgba::from(c)),
            (DetectedColor::Hsv(c), OutputFormat::Hsl) => ColorValue::Hsl(Hsla::from(c)),
            (DetectedColor::Hsv(c), _) => ColorValue::Rgb(Rgba::from(c)),
        }
    }
}

/// Read a numeric, non-NaN field.
fn number(object: &Value, key: &str) -> Option<f64> {
    object.get(key)?.as_f64().filter(|v| !v.is_nan())
}

fn channels(object: &Value, format: Format) -> Option<[f64; 3]> {
    let [a, b, c] = format.channels();
    Some([number(object, a)?, number(object, b)?, number(object, c)?])
}

/// Detect which format an object is in.
///
/// A format matches when every channel in its signature is present and is a
/// number. Candidates are tried in the order RGB, HSL, HSV. Returns `None`
/// for non-objects and objects that match nothing.
///
/// # Example
/// ```
/// use serde_json::json;
/// use talwin_color::{detect, Format};
///
/// assert_eq!(detect(&json!({"h": 10, "s": 20, "v": 30})), Some(Format::Hsv));
/// assert_eq!(detect(&json!({"r": 1, "g": "2", "b": 3})), None);
/// ```
pub fn detect(object: &Value) -> Option<Format> {
    if !object.is_object() {
        return None;
    }
    SIGNATURES
        .into_iter()
        .find(|&format| channels(object, format).is_some())
}

/// Detect the format of an object and read its channels, bounded.
///
/// Alpha comes from an optional numeric `a` key and defaults to 1. HSV hue is
/// wrapped into `[0, 360)` and saturation/value clamped to `0..=100`; RGB and
/// HSL channels are clamped to their declared ranges.
pub fn read_object(object: &Value) -> Option<DetectedColor> {
    let format = detect(object)?;
    let [x, y, z] = channels(object, format)?;
    let a = number(object, "a").unwrap_or(1.0);

    let detected = match format {
        Format::Hsl => DetectedColor::Hsl(Hsla::new(x, y, z, a).bounded()),
        Format::Hsv => DetectedColor::Hsv(Hsva::new(x, y, z, a).bounded()),
        Format::Rgb | Format::Hex => DetectedColor::Rgb(Rgba::new(x, y, z, a).bounded()),
    };
    Some(detected)
}
