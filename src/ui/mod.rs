//! Boundary to the widget's user interface.
//!
//! The picker core never draws anything. A [`UiBuilder`] turns a reference
//! element into a [`UiTree`] of three components, and the picker drives them
//! through the traits below. [`headless`] is an in-memory implementation.

pub mod headless;

use std::fmt;
use std::rc::Rc;

use crate::error::UiError;
use crate::models::Options;
use crate::services::EventBus;

pub use headless::{HeadlessInspector, HeadlessUi};

/// Identifies one listener bound by a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Listener bookkeeping shared by every component.
///
/// Components record each listener they bind on the host so that teardown
/// can undo the subscriptions one by one.
pub trait Component {
    /// Listeners currently bound by this component.
    fn bound_listeners(&self) -> Vec<ListenerId>;

    /// Unbind one listener. Returns false if it was not bound.
    fn unbind(&mut self, id: ListenerId) -> bool;
}

/// The popover holding palette, sliders and swatches.
pub trait App: Component {
    fn is_open(&self) -> bool;
    fn open(&mut self);
    fn close(&mut self);
    fn toggle(&mut self);
    fn disable(&mut self, disabled: bool);
    fn reposition(&mut self);
}

/// Options passed to [`Reference::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefInit {
    /// Paint the reference element with the current color
    pub preset: bool,
    /// Clicking the reference element toggles the popover
    pub toggle: bool,
}

/// The host element the picker is attached to.
pub trait Reference: Component {
    fn init(&mut self, init: RefInit);

    /// Put the host element back the way it was before the picker attached.
    fn restore(&mut self);
}

/// Which swatch to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwatchKey {
    Index(usize),
    Color(String),
}

impl From<usize> for SwatchKey {
    fn from(index: usize) -> Self {
        SwatchKey::Index(index)
    }
}

impl From<&str> for SwatchKey {
    fn from(color: &str) -> Self {
        SwatchKey::Color(color.to_string())
    }
}

impl From<String> for SwatchKey {
    fn from(color: String) -> Self {
        SwatchKey::Color(color)
    }
}

/// The swatch list under the palette.
pub trait Swatches: Component {
    /// Add a swatch. Returns false if `color` was not accepted.
    fn add(&mut self, color: &str) -> bool;

    /// Remove a swatch. Returns false if nothing matched.
    fn remove(&mut self, key: SwatchKey) -> bool;

    /// Colors currently shown, in order.
    fn colors(&self) -> Vec<String>;
}

/// The components built for one picker.
pub struct UiTree {
    pub app: Box<dyn App>,
    pub reference: Box<dyn Reference>,
    pub swatches: Box<dyn Swatches>,
}

impl UiTree {
    /// Total listeners bound across all components.
    pub fn bound_listener_count(&self) -> usize {
        self.app.bound_listeners().len()
            + self.reference.bound_listeners().len()
            + self.swatches.bound_listeners().len()
    }
}

impl fmt::Debug for UiTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiTree")
            .field("open", &self.app.is_open())
            .field("swatches", &self.swatches.colors())
            .field("listeners", &self.bound_listener_count())
            .finish()
    }
}

/// What a builder gets to work with.
pub struct BuildContext<'a> {
    /// Merged configuration, including the opaque `ui` keys
    pub options: &'a Options,
    /// The picker's event bus, for UI-originated events such as `open`
    pub events: Rc<EventBus>,
}

/// Creates the UI for a picker.
pub trait UiBuilder {
    /// Resolve `reference` and build the component tree.
    fn build(&self, reference: &str, ctx: &BuildContext<'_>) -> Result<UiTree, UiError>;
}

/// Unbind every listener a component tracks. Returns how many were unbound.
pub(crate) fn unbind_all<C: Component + ?Sized>(component: &mut C) -> usize {
    component
        .bound_listeners()
        .into_iter()
        .filter(|id| component.unbind(*id))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fake {
        listeners: Vec<ListenerId>,
    }

    impl Component for Fake {
        fn bound_listeners(&self) -> Vec<ListenerId> {
            self.listeners.clone()
        }

        fn unbind(&mut self, id: ListenerId) -> bool {
            let before = self.listeners.len();
            self.listeners.retain(|l| *l != id);
            self.listeners.len() != before
        }
    }

    #[test]
    fn test_unbind_all() {
        let mut fake = Fake {
            listeners: vec![ListenerId(1), ListenerId(2), ListenerId(3)],
        };
        assert_eq!(unbind_all(&mut fake), 3);
        assert!(fake.bound_listeners().is_empty());
        assert_eq!(unbind_all(&mut fake), 0);
    }

    #[test]
    fn test_swatch_key_from() {
        assert_eq!(SwatchKey::from(2usize), SwatchKey::Index(2));
        assert_eq!(SwatchKey::from("#fff"), SwatchKey::Color("#fff".to_string()));
    }

    #[test]
    fn test_listener_id_display() {
        assert_eq!(ListenerId(7).to_string(), "#7");
    }
}
