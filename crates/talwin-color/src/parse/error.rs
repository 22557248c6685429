//! Error type for color string parsing

use thiserror::Error;

/// Returned when a string is not a color the picker can read.
///
/// Lexically valid numbers that fall outside a channel's range are not
/// errors; they are clamped. Only strings that do not fit a known template
/// end up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Nothing but whitespace
    #[error("empty color string")]
    Empty,
    /// Not a hex, `rgb()` or `hsl()` string
    #[error("unrecognized color syntax: {0}")]
    Syntax(String),
    /// Hex string with a digit count other than 3, 4, 6 or 8
    #[error("invalid hex color length {0} (expected 3, 4, 6 or 8 digits)")]
    InvalidLength(usize),
    /// Non-hexadecimal character after the `#`
    #[error("invalid hex digits: {0}")]
    InvalidHex(String),
    /// Numeric token that does not parse as a number
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}
