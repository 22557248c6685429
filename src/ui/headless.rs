//! In-memory UI.
//!
//! Keeps everything a real widget would put on screen (open state, swatches,
//! bound listeners) in a shared record that a [`HeadlessInspector`] can read.
//! Used by the CLI and by tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{
    App, BuildContext, Component, ListenerId, RefInit, Reference, SwatchKey, Swatches, UiBuilder,
    UiTree,
};
use crate::error::UiError;
use crate::services::{EventArgs, EventBus};

/// A listener bound on the (imaginary) host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub component: &'static str,
    pub event: &'static str,
}

#[derive(Debug, Default)]
struct HeadlessState {
    reference: String,
    next_listener: u64,
    listeners: BTreeMap<ListenerId, Binding>,
    open: bool,
    disabled: bool,
    swatches: Vec<String>,
    init: Option<RefInit>,
    restored: bool,
    repositions: usize,
    ui_options: BTreeMap<String, serde_yaml::Value>,
}

impl HeadlessState {
    fn bind(&mut self, component: &'static str, event: &'static str) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.insert(id, Binding { component, event });
        id
    }

    fn unbind(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }
}

type Shared = Rc<RefCell<HeadlessState>>;

/// Read-only view of a headless UI.
#[derive(Debug, Clone)]
pub struct HeadlessInspector(Shared);

impl HeadlessInspector {
    /// Reference the UI was built for.
    pub fn reference(&self) -> String {
        self.0.borrow().reference.clone()
    }

    /// Listeners still bound, across all components.
    pub fn live_listeners(&self) -> usize {
        self.0.borrow().listeners.len()
    }

    pub fn bindings(&self) -> Vec<Binding> {
        self.0.borrow().listeners.values().cloned().collect()
    }

    pub fn is_open(&self) -> bool {
        self.0.borrow().open
    }

    pub fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    pub fn swatches(&self) -> Vec<String> {
        self.0.borrow().swatches.clone()
    }

    /// Options passed to the last `init` of the reference component.
    pub fn last_init(&self) -> Option<RefInit> {
        self.0.borrow().init
    }

    /// Whether the host element was restored.
    pub fn restored(&self) -> bool {
        self.0.borrow().restored
    }

    pub fn reposition_count(&self) -> usize {
        self.0.borrow().repositions
    }

    /// An opaque UI option as received at build time.
    pub fn ui_option(&self, key: &str) -> Option<serde_yaml::Value> {
        self.0.borrow().ui_options.get(key).cloned()
    }
}

/// Builder for the in-memory UI.
///
/// # Example
///
/// ```
/// use talwin::models::PartialOptions;
/// use talwin::ui::HeadlessUi;
/// use talwin::Talwin;
///
/// let ui = HeadlessUi::new();
/// let inspector = ui.inspector();
/// let mut picker = Talwin::new("#picker", PartialOptions::new(), &ui).unwrap();
///
/// picker.open();
/// assert!(inspector.is_open());
///
/// picker.destroy();
/// assert_eq!(inspector.live_listeners(), 0);
/// ```
#[derive(Debug, Default)]
pub struct HeadlessUi {
    shared: Shared,
}

impl HeadlessUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inspector(&self) -> HeadlessInspector {
        HeadlessInspector(Rc::clone(&self.shared))
    }
}

impl UiBuilder for HeadlessUi {
    fn build(&self, reference: &str, ctx: &BuildContext<'_>) -> Result<UiTree, UiError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(UiError::ReferenceNotFound("<empty>".to_string()));
        }

        {
            let mut state = self.shared.borrow_mut();
            state.reference = reference.to_string();
            state.ui_options = ctx.options.ui.clone();
        }

        tracing::debug!(reference, "Building headless UI");

        Ok(UiTree {
            app: Box::new(HeadlessApp::new(
                Rc::clone(&self.shared),
                Rc::clone(&ctx.events),
            )),
            reference: Box::new(HeadlessReference::new(Rc::clone(&self.shared))),
            swatches: Box::new(HeadlessSwatches::new(Rc::clone(&self.shared))),
        })
    }
}

/// Forget `id` locally and on the host.
fn release(shared: &Shared, ids: &mut Vec<ListenerId>, id: ListenerId) -> bool {
    let before = ids.len();
    ids.retain(|l| *l != id);
    ids.len() != before && shared.borrow_mut().unbind(id)
}

struct HeadlessApp {
    shared: Shared,
    events: Rc<EventBus>,
    listeners: Vec<ListenerId>,
}

impl HeadlessApp {
    fn new(shared: Shared, events: Rc<EventBus>) -> Self {
        let listeners = {
            let mut state = shared.borrow_mut();
            vec![
                state.bind("app", "keydown"),
                state.bind("app", "click-outside"),
                state.bind("app", "resize"),
            ]
        };
        Self {
            shared,
            events,
            listeners,
        }
    }

    /// Set the open flag, emitting `event` if it changed.
    fn set_open(&mut self, open: bool, event: &str) {
        {
            let mut state = self.shared.borrow_mut();
            if state.open == open || (open && state.disabled) {
                return;
            }
            state.open = open;
        }
        self.events.emit(event, &EventArgs::None);
    }
}

impl Component for HeadlessApp {
    fn bound_listeners(&self) -> Vec<ListenerId> {
        self.listeners.clone()
    }

    fn unbind(&mut self, id: ListenerId) -> bool {
        release(&self.shared, &mut self.listeners, id)
    }
}

impl App for HeadlessApp {
    fn is_open(&self) -> bool {
        self.shared.borrow().open
    }

    fn open(&mut self) {
        self.set_open(true, "open");
    }

    fn close(&mut self) {
        self.set_open(false, "close");
    }

    fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    fn disable(&mut self, disabled: bool) {
        self.shared.borrow_mut().disabled = disabled;
    }

    fn reposition(&mut self) {
        self.shared.borrow_mut().repositions += 1;
    }
}

struct HeadlessReference {
    shared: Shared,
    listeners: Vec<ListenerId>,
    toggle_listener: Option<ListenerId>,
}

impl HeadlessReference {
    fn new(shared: Shared) -> Self {
        Self {
            shared,
            listeners: Vec::new(),
            toggle_listener: None,
        }
    }
}

impl Component for HeadlessReference {
    fn bound_listeners(&self) -> Vec<ListenerId> {
        self.listeners.clone()
    }

    fn unbind(&mut self, id: ListenerId) -> bool {
        if self.toggle_listener == Some(id) {
            self.toggle_listener = None;
        }
        release(&self.shared, &mut self.listeners, id)
    }
}

impl Reference for HeadlessReference {
    fn init(&mut self, init: RefInit) {
        match (init.toggle, self.toggle_listener) {
            (true, None) => {
                let id = self.shared.borrow_mut().bind("reference", "click");
                self.listeners.push(id);
                self.toggle_listener = Some(id);
            }
            (false, Some(id)) => {
                self.unbind(id);
            }
            _ => {}
        }

        let mut state = self.shared.borrow_mut();
        state.init = Some(init);
        state.restored = false;
    }

    fn restore(&mut self) {
        self.shared.borrow_mut().restored = true;
    }
}

struct HeadlessSwatches {
    shared: Shared,
    /// One click listener per swatch, parallel to the shared swatch list
    listeners: Vec<ListenerId>,
}

impl HeadlessSwatches {
    fn new(shared: Shared) -> Self {
        Self {
            shared,
            listeners: Vec::new(),
        }
    }
}

impl Component for HeadlessSwatches {
    fn bound_listeners(&self) -> Vec<ListenerId> {
        self.listeners.clone()
    }

    fn unbind(&mut self, id: ListenerId) -> bool {
        release(&self.shared, &mut self.listeners, id)
    }
}

impl Swatches for HeadlessSwatches {
    fn add(&mut self, color: &str) -> bool {
        if talwin_color::parse(color).is_err() {
            tracing::debug!(color, "Ignoring invalid swatch");
            return false;
        }

        let mut state = self.shared.borrow_mut();
        let id = state.bind("swatch", "click");
        state.swatches.push(color.to_string());
        self.listeners.push(id);
        true
    }

    fn remove(&mut self, key: SwatchKey) -> bool {
        let index = {
            let state = self.shared.borrow();
            match key {
                SwatchKey::Index(index) => (index < state.swatches.len()).then_some(index),
                SwatchKey::Color(color) => state.swatches.iter().position(|s| *s == color),
            }
        };
        let Some(index) = index else {
            return false;
        };

        let mut state = self.shared.borrow_mut();
        state.swatches.remove(index);
        if index < self.listeners.len() {
            let id = self.listeners.remove(index);
            state.unbind(id);
        }
        true
    }

    fn colors(&self) -> Vec<String> {
        self.shared.borrow().swatches.clone()
    }
}
