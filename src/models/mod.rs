pub mod color_input;
pub mod options;

pub use color_input::ColorInput;
pub use options::{Options, PartialOptions};
