//! Test fixtures and constants.

use serde_json::{json, Value};

/// Reference element every test picker attaches to
pub const REFERENCE: &str = "#picker";

/// Color strings in each output format
pub mod colors {
    pub const RED_HEX: &str = "#ff0000";
    pub const RED_RGB: &str = "rgb(255, 0, 0)";
    pub const RED_HSL: &str = "hsl(0, 100%, 50%)";
    pub const ORANGE_HEX: &str = "#ff8000";
    pub const HALF_BLUE_HEX: &str = "#0000ff80";
    pub const HALF_BLUE_RGB: &str = "rgba(0, 0, 255, 0.5)";
}

/// HSV object with every channel out of range
pub fn wild_hsv() -> Value {
    json!({"h": 400, "s": 150, "v": -10})
}

/// The bounded counterpart of [`wild_hsv`]
pub fn tame_hsv() -> Value {
    json!({"h": 40, "s": 100, "v": 0})
}

/// A full options file
pub const OPTIONS_YAML: &str = r##"
format: rgb
default: "#336699"
swatches:
  - "#ffffff"
  - "hsl(120, 100%, 25%)"
  - "not-a-color"
preset: false
toggle: true
position: bottom-middle
theme: dark
"##;
