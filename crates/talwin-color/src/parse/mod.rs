//! Color string parsing
//!
//! Accepted templates (case-insensitive, whitespace around tokens allowed):
//!
//! | Template | Example |
//! |----------|---------|
//! | `#RGB`, `#RGBA` | `#f80`, `#f808` |
//! | `#RRGGBB`, `#RRGGBBAA` | `#ff8800`, `#ff880080` |
//! | `rgb(r, g, b)`, `rgba(r, g, b, a)` | `rgba(255, 136, 0, 0.5)` |
//! | `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)` | `hsl(32, 100%, 50%)` |
//!
//! Numbers may be signed decimals. Out-of-range values are clamped (hue is
//! wrapped), never rejected.

mod error;

pub use error::ParseColorError;

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::color::{ColorValue, Hsla, Rgba};

const NUMBER: &str = r"[+-]?(?:\d+(?:\.\d*)?|\.\d+)";

fn rgb_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let n = NUMBER;
        Regex::new(&format!(
            r"(?i)^rgba?\(\s*({n})\s*,\s*({n})\s*,\s*({n})\s*(?:,\s*({n})\s*)?\)$"
        ))
        .expect("rgb pattern is a valid regex")
    })
}

fn hsl_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let n = NUMBER;
        Regex::new(&format!(
            r"(?i)^hsla?\(\s*({n})\s*,\s*({n})%\s*,\s*({n})%\s*(?:,\s*({n})\s*)?\)$"
        ))
        .expect("hsl pattern is a valid regex")
    })
}

/// Parse a color string into a bounded (not yet quantized) value.
///
/// Hex and `rgb()` strings produce [`ColorValue::Rgb`]; `hsl()` strings
/// produce [`ColorValue::Hsl`]. Leading and trailing whitespace is trimmed.
///
/// # Examples
///
/// ```
/// use talwin_color::{parse, ColorValue, Hsla, Rgba};
///
/// assert_eq!(parse("#f00").unwrap(), ColorValue::Rgb(Rgba::from_u8(255, 0, 0)));
/// assert_eq!(
///     parse("hsl(400, 50%, 120%)").unwrap(),
///     ColorValue::Hsl(Hsla::new(40.0, 50.0, 100.0, 1.0))
/// );
/// assert!(parse("not-a-color").is_err());
/// ```
pub fn parse(input: &str) -> Result<ColorValue, ParseColorError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }

    if let Some(digits) = s.strip_prefix('#') {
        return parse_hex(digits).map(ColorValue::Rgb);
    }

    if let Some(caps) = rgb_pattern().captures(s) {
        let [r, g, b, a] = numbers(&caps)?;
        return Ok(ColorValue::Rgb(Rgba::new(r, g, b, a).bounded()));
    }

    if let Some(caps) = hsl_pattern().captures(s) {
        let [h, sat, l, a] = numbers(&caps)?;
        return Ok(ColorValue::Hsl(Hsla::new(h, sat, l, a).bounded()));
    }

    Err(ParseColorError::Syntax(s.to_string()))
}

/// Pull three channels and an optional alpha (default 1) out of a match.
fn numbers(caps: &Captures<'_>) -> Result<[f64; 4], ParseColorError> {
    let mut out = [0.0, 0.0, 0.0, 1.0];
    for (i, slot) in out.iter_mut().enumerate() {
        if let Some(token) = caps.get(i + 1) {
            *slot = token
                .as_str()
                .parse()
                .map_err(|_| ParseColorError::InvalidNumber(token.as_str().to_string()))?;
        }
    }
    Ok(out)
}

fn hex_byte(pair: &str) -> Result<u8, ParseColorError> {
    u8::from_str_radix(pair, 16).map_err(|_| ParseColorError::InvalidHex(pair.to_string()))
}

/// Parse the digits after `#`.
fn parse_hex(digits: &str) -> Result<Rgba, ParseColorError> {
    // from_str_radix alone would accept a leading '+'
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidHex(digits.to_string()));
    }

    let bytes: Vec<u8> = match digits.len() {
        // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
        3 | 4 => (0..digits.len())
            .map(|i| hex_byte(&digits[i..i + 1]).map(|v| v * 17))
            .collect::<Result<_, _>>()?,
        6 | 8 => (0..digits.len())
            .step_by(2)
            .map(|i| hex_byte(&digits[i..i + 2]))
            .collect::<Result<_, _>>()?,
        n => return Err(ParseColorError::InvalidLength(n)),
    };

    let alpha = bytes.get(3).map_or(1.0, |&a| f64::from(a) / 255.0);
    Ok(Rgba::new(
        f64::from(bytes[0]),
        f64::from(bytes[1]),
        f64::from(bytes[2]),
        alpha,
    ))
}
