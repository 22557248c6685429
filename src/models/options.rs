use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use talwin_color::OutputFormat;

use super::ColorInput;
use crate::error::TalwinError;

/// Picker configuration, the result of merging user options over defaults.
///
/// Only `format`, `default` and `color` matter to the color core; the remaining keys
/// are handed to the UI builder. Unknown keys are kept in `ui` and forwarded
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Output and storage format
    pub format: OutputFormat,

    /// Initial color, also used by `reset`
    pub default: ColorInput,

    /// Color to start from instead of `default`. If it cannot be read the
    /// picker falls back to `default`. Only consulted on construction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorInput>,

    /// Swatches shown under the palette. Repeated entries are kept once.

    pub swatches: Vec<String>,

    /// Paint the reference element with the current color
    pub preset: bool,

    /// Open/close the popover when the reference element is clicked
    pub toggle: bool,

    /// Start disabled
    pub disabled: bool,

    /// Anything else, forwarded to the UI as-is
    #[serde(flatten)]
    pub ui: BTreeMap<String, serde_yaml::Value>,
}

fn default_color() -> ColorInput {
    ColorInput::Text("#000000".to_string())
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format: OutputFormat::Hex,
            default: default_color(),
            color: None,
            swatches: Vec::new(),
            preset: true,
            toggle: true,
            disabled: false,
            ui: BTreeMap::new(),
        }
    }
}

impl Options {
    /// Parse a YAML options document. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TalwinError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load options from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TalwinError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            format = %options.format,
            swatches = options.swatches.len(),
            "Loaded options"
        );
        Ok(options)
    }

    /// Return a copy with every field set in `patch` replaced.
    ///
    /// The opaque `ui` map is merged key by key. Swatches are deduplicated,
    /// first occurrence wins.
    pub fn merged(&self, patch: PartialOptions) -> Self {
        let mut ui = self.ui.clone();
        ui.extend(patch.ui);

        let mut swatches = patch.swatches.unwrap_or_else(|| self.swatches.clone());
        dedup_in_order(&mut swatches);

        Self {
            format: patch.format.unwrap_or(self.format),
            default: patch.default.unwrap_or_else(|| self.default.clone()),
            color: patch.color.or_else(|| self.color.clone()),
            swatches,
            preset: patch.preset.unwrap_or(self.preset),
            toggle: patch.toggle.unwrap_or(self.toggle),
            disabled: patch.disabled.unwrap_or(self.disabled),
            ui,
        }
    }
}

fn dedup_in_order(colors: &mut Vec<String>) {
    let mut seen = Vec::with_capacity(colors.len());
    colors.retain(|color| {
        if seen.contains(color) {
            false
        } else {
            seen.push(color.clone());
            true
        }
    });
}

/// User-supplied options; unset fields fall through to the base options.
///
/// # Example
///
/// ```
/// use talwin::models::{Options, PartialOptions};
/// use talwin_color::OutputFormat;
///
/// let options = Options::default().merged(
///     PartialOptions::new().format(OutputFormat::Hsl).default_color("#ff0000"),
/// );
/// assert_eq!(options.format, OutputFormat::Hsl);
/// assert!(options.toggle);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PartialOptions {
    pub format: Option<OutputFormat>,
    pub default: Option<ColorInput>,
    pub color: Option<ColorInput>,
    pub swatches: Option<Vec<String>>,
    pub preset: Option<bool>,
    pub toggle: Option<bool>,
    pub disabled: Option<bool>,
    #[serde(flatten)]
    pub ui: BTreeMap<String, serde_yaml::Value>,
}

impl PartialOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, TalwinError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn default_color(mut self, color: impl Into<ColorInput>) -> Self {
        self.default = Some(color.into());
        self
    }

    /// Start from `color` rather than the default.
    pub fn color(mut self, color: impl Into<ColorInput>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn swatches<I, S>(mut self, swatches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.swatches = Some(swatches.into_iter().map(Into::into).collect());
        self
    }

    pub fn preset(mut self, preset: bool) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn toggle(mut self, toggle: bool) -> Self {
        self.toggle = Some(toggle);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Set an opaque UI option.
    pub fn ui(mut self, key: impl Into<String>, value: impl Into<serde_yaml::Value>) -> Self {
        self.ui.insert(key.into(), value.into());
        self
    }
}

impl From<Options> for PartialOptions {
    fn from(options: Options) -> Self {
        Self {
            format: Some(options.format),
            default: Some(options.default),
            color: options.color,
            swatches: Some(options.swatches),
            preset: Some(options.preset),
            toggle: Some(options.toggle),
            disabled: Some(options.disabled),
            ui: options.ui,
        }
    }
}
