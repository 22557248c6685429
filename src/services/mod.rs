pub mod color_state;
pub mod event_bus;

pub use color_state::{ColorState, Update};
pub use event_bus::{EventArgs, EventBus, Handler, CHANGE, COLOR};
