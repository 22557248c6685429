//! Color types and the canonical color value
//!
//! Three channel models, one struct each, with `From` conversions between
//! them:
//!
//! - [`Rgba`]: red/green/blue in `0..=255`, the storage shape for the HEX and
//!   RGB output formats
//! - [`Hsla`]: hue in degrees, saturation/lightness in percent, the storage
//!   shape for the HSL output format
//! - [`Hsva`]: hue in degrees, saturation/value in percent, accepted as input
//!   only and never stored
//!
//! [`ColorValue`] is the stored value: either an `Rgba` or an `Hsla`,
//! quantized to the precision of its output format.
//!
//! # Example
//!
//! ```
//! use talwin_color::{Hsva, Rgba};
//!
//! let orange = Rgba::from(Hsva::new(30.0, 100.0, 100.0, 1.0));
//! assert_eq!(orange.to_bytes(), [255, 128, 0]);
//! ```

mod hsla;
mod hsva;
mod rgba;
mod value;

pub use hsla::Hsla;
pub use hsva::Hsva;
pub use rgba::Rgba;
pub use value::ColorValue;

/// Round to two decimal places.
#[inline]
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
