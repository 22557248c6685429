//! talwin-color: color values, conversions and string formats for the Talwin
//! color picker
//!
//! This crate is the pure half of the picker: no state, no I/O, no logging.
//! It converts between HSV, HSL, RGB and HEX, parses and prints color
//! strings, and works out which format a structured input object is in.
//!
//! # Quick Start
//!
//! ```
//! use talwin_color::{parse, serialize, OutputFormat};
//!
//! let value = parse("hsl(30, 100%, 50%)").unwrap();
//! assert_eq!(serialize(&value, OutputFormat::Hex), "#ff8000");
//! assert_eq!(serialize(&value, OutputFormat::Rgb), "rgb(255, 128, 0)");
//! ```
//!
//! # Structured Input
//!
//! Objects are matched against channel signatures in the order RGB, HSL, HSV:
//!
//! ```
//! use serde_json::json;
//! use talwin_color::{read_object, serialize, OutputFormat};
//!
//! let detected = read_object(&json!({"h": 400, "s": 100, "v": 100})).unwrap();
//! let value = detected.into_value(OutputFormat::Rgb);
//! assert_eq!(serialize(&value, OutputFormat::Rgb), "rgb(255, 170, 0)");
//! ```
//!
//! # Scales
//!
//! | Type | Channels |
//! |------|----------|
//! | [`Rgba`] | r, g, b in `0..=255`, a in `0..=1` |
//! | [`Hsla`] | h in `[0, 360)`, s, l in `0..=100`, a in `0..=1` |
//! | [`Hsva`] | h in `[0, 360)`, s, v in `0..=100`, a in `0..=1` |
//!
//! The functions in [`convert`] work on unit scales instead (s, v, l in
//! `0..=1`) and are what the `From` conversions between the types call.
//!
//! # Precision
//!
//! A stored [`ColorValue`] is rounded to what its output format can print:
//! integer RGB channels, two decimals for HSL channels and for RGB/HSL alpha,
//! and 1/255 steps for HEX alpha. See [`ColorValue::normalized`].

pub mod color;
pub mod convert;
pub mod format;
pub mod parse;
pub mod serialize;

pub use color::{ColorValue, Hsla, Hsva, Rgba};
pub use format::{detect, read_object, DetectedColor, Format, OutputFormat, UnknownFormat};
pub use parse::{parse, ParseColorError};
pub use serialize::serialize;
