use talwin_color::ParseColorError;
use thiserror::Error;

/// Errors that reach the caller of the picker's constructor or
/// `set_options`. Everything else (unparsable colors, unknown shapes) is
/// handled inside the color state.
#[derive(Debug, Error)]
pub enum TalwinError {
    #[error("Invalid default color '{input}': {source}")]
    InvalidDefault {
        input: String,
        #[source]
        source: RejectReason,
    },

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UI error: {0}")]
    Ui(#[from] UiError),
}

/// Why a color update was turned away.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectReason {
    #[error("unparsable color: {0}")]
    Unparsable(#[from] ParseColorError),

    #[error("object matches no known color format")]
    UnknownShape,
}

/// Failures reported by a UI builder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    #[error("Reference element not found: {0}")]
    ReferenceNotFound(String),

    #[error("UI build failed: {0}")]
    Build(String),
}
