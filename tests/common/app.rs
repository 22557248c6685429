//! Test picker factory for integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use talwin::models::PartialOptions;
use talwin::services::Handler;
use talwin::ui::{HeadlessInspector, HeadlessUi};
use talwin::Talwin;

use super::fixtures::REFERENCE;

/// A picker on a headless UI, with the inspector kept for assertions
pub struct TestPicker {
    pub picker: Talwin,
    pub inspector: HeadlessInspector,
}

impl TestPicker {
    /// Create a picker with default options
    pub fn new() -> Self {
        Self::with_options(PartialOptions::new())
    }

    /// Create a picker with the given options
    pub fn with_options(options: PartialOptions) -> Self {
        let ui = HeadlessUi::new();
        let inspector = ui.inspector();
        let picker =
            Talwin::new(REFERENCE, options, &ui).expect("Failed to create test picker");
        Self { picker, inspector }
    }

    /// Register a recording handler for `event`
    pub fn record(&self, event: &'static str) -> EventLog {
        let log = EventLog::default();
        self.picker.on(event, log.handler(event));
        log
    }
}

/// Records every dispatch it sees as `event` or `event:color`
#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<String>>>);

impl EventLog {
    /// A handler that appends to this log
    pub fn handler(&self, event: &'static str) -> Handler {
        let entries = Rc::clone(&self.0);
        Handler::new(move |args| {
            let entry = match args.picker() {
                Some(picker) => format!("{event}:{}", picker.color_string()),
                None => event.to_string(),
            };
            entries.borrow_mut().push(entry);
        })
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}
