//! The canonical stored color value

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Hsla, Hsva, Rgba};
use crate::format::OutputFormat;
use crate::parse::{parse, ParseColorError};
use crate::serialize::serialize;

/// A color in one of the two storable shapes.
///
/// The HEX and RGB output formats store [`Rgba`]; the HSL output format
/// stores [`Hsla`]. Serializes to a plain object (`{"r", "g", "b", "a"}` or
/// `{"h", "s", "l", "a"}`), which is also what host code reads back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Rgb(Rgba),
    Hsl(Hsla),
}

impl ColorValue {
    /// Alpha channel (0.0..=1.0).
    pub fn alpha(&self) -> f64 {
        match self {
            ColorValue::Rgb(c) => c.a,
            ColorValue::Hsl(c) => c.a,
        }
    }

    pub fn to_rgba(&self) -> Rgba {
        match *self {
            ColorValue::Rgb(c) => c,
            ColorValue::Hsl(c) => Rgba::from(c),
        }
    }

    pub fn to_hsla(&self) -> Hsla {
        match *self {
            ColorValue::Rgb(c) => Hsla::from(c),
            ColorValue::Hsl(c) => c,
        }
    }

    pub fn to_hsva(&self) -> Hsva {
        match *self {
            ColorValue::Rgb(c) => Hsva::from(c),
            ColorValue::Hsl(c) => Hsva::from(c),
        }
    }

    /// Convert into the storage shape of `format` and round every channel
    /// to the precision that format's string carries.
    ///
    /// Two values that print the same in `format` are equal after
    /// normalization, and normalizing twice changes nothing.
    pub fn normalized(&self, format: OutputFormat) -> Self {
        match format {
            OutputFormat::Hex => ColorValue::Rgb(self.to_rgba().quantized_for_hex()),
            OutputFormat::Rgb => ColorValue::Rgb(self.to_rgba().quantized()),
            OutputFormat::Hsl => ColorValue::Hsl(self.to_hsla().quantized()),
        }
    }

    /// The output format whose storage shape this value has. HEX values
    /// report [`OutputFormat::Rgb`] since the two share a shape.
    pub fn shape(&self) -> OutputFormat {
        match self {
            ColorValue::Rgb(_) => OutputFormat::Rgb,
            ColorValue::Hsl(_) => OutputFormat::Hsl,
        }
    }

    /// Format as a string in `format`.
    pub fn to_string_in(&self, format: OutputFormat) -> String {
        serialize(self, format)
    }

    /// The value as a plain JSON object.
    pub fn to_object(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<Rgba> for ColorValue {
    fn from(color: Rgba) -> Self {
        ColorValue::Rgb(color)
    }
}

impl From<Hsla> for ColorValue {
    fn from(color: Hsla) -> Self {
        ColorValue::Hsl(color)
    }
}

impl fmt::Display for ColorValue {
    /// Prints in the value's own shape: `rgb(...)` or `hsl(...)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self, self.shape()))
    }
}

impl FromStr for ColorValue {
    type Err = ParseColorError;

    /// Parse any supported color string. See [`parse`](crate::parse()).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
