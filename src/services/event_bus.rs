//! Per-picker publish/subscribe registry.
//!
//! Handlers are kept per event type in registration order. Dispatch runs
//! over a snapshot of the handler list, so a handler may call [`EventBus::on`],
//! [`EventBus::off`] or [`EventBus::emit`] while it is being dispatched; the
//! changes apply from the next emit on.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use talwin_color::ColorValue;

use crate::picker::Talwin;

/// Emitted when the color changes through a user gesture.
pub const COLOR: &str = "color";

/// Emitted after [`COLOR`] for the same change.
pub const CHANGE: &str = "change";

/// Arguments passed to a handler.
pub enum EventArgs<'a> {
    /// UI-originated and custom events
    None,
    /// `color` and `change`: the current value and the picker it belongs to
    Color {
        value: ColorValue,
        picker: &'a Talwin,
    },
}

impl<'a> EventArgs<'a> {
    pub fn value(&self) -> Option<ColorValue> {
        match self {
            EventArgs::Color { value, .. } => Some(*value),
            EventArgs::None => None,
        }
    }

    pub fn picker(&self) -> Option<&'a Talwin> {
        match self {
            EventArgs::Color { picker, .. } => Some(*picker),
            EventArgs::None => None,
        }
    }
}

impl fmt::Debug for EventArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventArgs::None => f.write_str("None"),
            EventArgs::Color { value, .. } => f
                .debug_struct("Color")
                .field("value", value)
                .finish_non_exhaustive(),
        }
    }
}

/// A registered callback.
///
/// Cloning is cheap and keeps identity: `off` removes every registration
/// that points at the same closure.
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn(&EventArgs<'_>)>);

impl Handler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&EventArgs<'_>) + 'static,
    {
        Self(Rc::new(f))
    }

    fn call(&self, args: &EventArgs<'_>) {
        (self.0)(args)
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Rc::as_ptr(&self.0))
    }
}

/// Event registry owned by one picker.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<HashMap<String, Vec<Handler>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to the list for `event`. Registering the same handler
    /// twice makes it run twice.
    pub fn on(&self, event: &str, handler: Handler) {
        self.handlers
            .borrow_mut()
            .entry(event.to_string())
            .or_default()
            .push(handler);
        tracing::trace!(event, "Handler registered");
    }

    /// Remove registrations.
    ///
    /// | `event` | `handler` | Removes |
    /// |---------|-----------|---------|
    /// | `Some` | `Some` | every registration of `handler` under `event` |
    /// | `Some` | `None` | all handlers for `event` |
    /// | `None` | `Some` | every registration of `handler` under any event |
    /// | `None` | `None` | everything |
    ///
    /// Unknown events are ignored.
    pub fn off(&self, event: Option<&str>, handler: Option<&Handler>) {
        let mut handlers = self.handlers.borrow_mut();
        match (event, handler) {
            (Some(event), Some(handler)) => {
                if let Some(list) = handlers.get_mut(event) {
                    list.retain(|h| h != handler);
                    if list.is_empty() {
                        handlers.remove(event);
                    }
                }
            }
            (Some(event), None) => {
                handlers.remove(event);
            }
            (None, Some(handler)) => {
                handlers.retain(|_, list| {
                    list.retain(|h| h != handler);
                    !list.is_empty()
                });
            }
            (None, None) => handlers.clear(),
        }
        tracing::trace!(event = event.unwrap_or("*"), "Handlers removed");
    }

    /// Call every handler registered for `event`, in order.
    pub fn emit(&self, event: &str, args: &EventArgs<'_>) {
        let snapshot = match self.handlers.borrow().get(event) {
            Some(list) => list.clone(),
            None => return,
        };

        tracing::trace!(event, handlers = snapshot.len(), "Dispatching event");
        for handler in &snapshot {
            handler.call(args);
        }
    }

    /// Number of registrations for `event`.
    pub fn handler_count(&self, event: &str) -> usize {
        self.handlers.borrow().get(event).map_or(0, Vec::len)
    }

    /// Number of registrations across all events.
    pub fn registration_count(&self) -> usize {
        self.handlers.borrow().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.handlers.borrow_mut().clear();
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers.borrow();
        let mut events: Vec<(&str, usize)> =
            handlers.iter().map(|(k, v)| (k.as_str(), v.len())).collect();
        events.sort_unstable();
        f.debug_struct("EventBus").field("handlers", &events).finish()
    }
}
