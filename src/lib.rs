//! Talwin - embeddable color picker core
//!
//! The picker's state, event registry and lifecycle. Color math and string
//! formats live in the `talwin-color` crate; drawing is left to a
//! [`ui::UiBuilder`] supplied by the host.

pub mod error;
pub mod models;
pub mod picker;
pub mod services;
pub mod ui;

pub use error::{RejectReason, TalwinError, UiError};
pub use picker::{Talwin, Teardown};
