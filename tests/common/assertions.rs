//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use talwin::services::Update;
use talwin::Talwin;

use super::app::EventLog;

/// Assert the picker prints `expected` in its configured format
pub fn assert_color(picker: &Talwin, expected: &str) {
    assert_eq!(
        picker.color_string(),
        expected,
        "Unexpected color, stored value is {:?}",
        picker.get_color()
    );
}

/// Assert the update was turned away
pub fn assert_rejected(update: &Update) {
    assert!(
        update.is_rejected(),
        "Expected update to be rejected, got {update:?}"
    );
}

/// Assert the log holds exactly `expected`
pub fn assert_events(log: &EventLog, expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    assert_eq!(log.entries(), expected);
}

/// Assert nothing was dispatched to the log
pub fn assert_no_events(log: &EventLog) {
    assert!(
        log.is_empty(),
        "Expected no events, got {:?}",
        log.entries()
    );
}
