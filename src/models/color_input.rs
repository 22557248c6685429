use serde::{Deserialize, Serialize};
use talwin_color::ColorValue;

/// A color as handed to the picker: a string in any supported template, or
/// a structured object such as `{"h": 200, "s": 50, "v": 80}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Text(String),
    Object(serde_json::Value),
}

impl ColorInput {
    /// Short form for log fields and error messages.
    pub fn describe(&self) -> String {
        match self {
            ColorInput::Text(text) => text.clone(),
            ColorInput::Object(object) => object.to_string(),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        ColorInput::Text(text.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> Self {
        ColorInput::Text(text)
    }
}

impl From<serde_json::Value> for ColorInput {
    /// JSON strings become [`ColorInput::Text`]; anything else is treated as
    /// an object.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => ColorInput::Text(text),
            other => ColorInput::Object(other),
        }
    }
}

impl From<ColorValue> for ColorInput {
    fn from(value: ColorValue) -> Self {
        ColorInput::Object(value.to_object())
    }
}
