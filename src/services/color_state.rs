//! The picker's current color.
//!
//! [`ColorState`] holds exactly one [`ColorValue`], always in the storage
//! shape of the configured output format and always within bounds. Updates
//! that fail to parse leave it untouched; updates that normalize to the
//! stored value are reported as [`Update::Unchanged`] so the caller can skip
//! notification.

use std::fmt;

use talwin_color::{parse, read_object, serialize, ColorValue, OutputFormat};

use crate::error::{RejectReason, TalwinError};
use crate::models::ColorInput;

/// Outcome of [`ColorState::update_by_string`].
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Stored value replaced; listeners should be told
    Changed,
    /// Stored value replaced without notification
    Silent,
    /// New value equals the stored one
    Unchanged,
    /// Input could not be read; stored value kept
    Rejected(RejectReason),
}

impl Update {
    /// Whether the caller should emit `color`/`change`.
    pub fn should_notify(&self) -> bool {
        matches!(self, Update::Changed)
    }

    /// Whether the stored value was replaced.
    pub fn is_changed(&self) -> bool {
        matches!(self, Update::Changed | Update::Silent)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Update::Rejected(_))
    }
}

/// Single source of truth for the picker's color.
#[derive(Debug, Clone)]
pub struct ColorState {
    format: OutputFormat,
    value: ColorValue,
}

impl ColorState {
    /// Create a state from the configured default color.
    ///
    /// Fails with [`TalwinError::InvalidDefault`] if `default` cannot be read.
    pub fn new(default: &ColorInput, format: OutputFormat) -> Result<Self, TalwinError> {
        let value = resolve(default, format).map_err(|source| TalwinError::InvalidDefault {
            input: default.describe(),
            source,
        })?;
        Ok(Self { format, value })
    }

    /// Create a state from `initial`, falling back to `default` when
    /// `initial` cannot be read.
    ///
    /// `default` is always checked first: a bad `default` is an error even
    /// when `initial` is fine, since `reset` relies on it later.
    pub fn with_fallback(
        initial: &ColorInput,
        default: &ColorInput,
        format: OutputFormat,
    ) -> Result<Self, TalwinError> {
        let fallback = Self::new(default, format)?;
        match resolve(initial, format) {
            Ok(value) => Ok(Self { format, value }),
            Err(reason) => {
                tracing::debug!(
                    input = %initial.describe(),
                    %reason,
                    "Initial color rejected, using default"
                );
                Ok(fallback)
            }
        }
    }

    /// Current value, as an owned snapshot.
    pub fn value(&self) -> ColorValue {
        self.value
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Read `input` and store it if it differs from the current value.
    ///
    /// Objects are detected (RGB, HSL, HSV in that order), bounded,
    /// converted to the configured format and printed before being parsed
    /// like any string. With `silent` set a real change is reported as
    /// [`Update::Silent`] instead of [`Update::Changed`].
    pub fn update_by_string(&mut self, input: &ColorInput, silent: bool) -> Update {
        let next = match resolve(input, self.format) {
            Ok(value) => value,
            Err(reason) => {
                tracing::debug!(input = %input.describe(), %reason, "Rejected color update");
                return Update::Rejected(reason);
            }
        };

        if next == self.value {
            return Update::Unchanged;
        }

        tracing::trace!(from = %self, to = %serialize(&next, self.format), silent, "Color updated");
        self.value = next;

        if silent {
            Update::Silent
        } else {
            Update::Changed
        }
    }

    /// Switch the output format, re-expressing the stored value in the new
    /// storage shape. Never notifies.
    pub fn set_format(&mut self, format: OutputFormat) {
        if format != self.format {
            self.format = format;
            self.value = self.value.normalized(format);
        }
    }
}

impl fmt::Display for ColorState {
    /// The current value printed in the configured format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(&self.value, self.format))
    }
}

/// Turn any input into a normalized value for `format`.
pub(crate) fn resolve(input: &ColorInput, format: OutputFormat) -> Result<ColorValue, RejectReason> {
    let text = match input {
        ColorInput::Text(text) => text.clone(),
        ColorInput::Object(object) => {
            let detected = read_object(object).ok_or(RejectReason::UnknownShape)?;
            serialize(&detected.into_value(format), format)
        }
    };
    Ok(parse(&text)?.normalized(format))
}
