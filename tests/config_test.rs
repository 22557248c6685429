//! Loading options from YAML and building pickers from them.

mod common;

use pretty_assertions::assert_eq;
use std::io::Write;

use talwin::models::{ColorInput, Options, PartialOptions};
use talwin::services::ColorState;
use talwin::TalwinError;
use talwin_color::OutputFormat;

use common::{fixtures, TestPicker};

#[test]
fn test_load_full_options_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(fixtures::OPTIONS_YAML.as_bytes()).unwrap();

    let options = Options::load(file.path()).unwrap();

    assert_eq!(options.format, OutputFormat::Rgb);
    assert_eq!(options.default, ColorInput::from("#336699"));
    assert_eq!(options.swatches.len(), 3);
    assert!(!options.preset);
    assert!(options.toggle);
    assert_eq!(options.ui.len(), 2);
}

#[test]
fn test_picker_from_options_file() {
    let options = Options::from_yaml_str(fixtures::OPTIONS_YAML).unwrap();

    let test = TestPicker::with_options(PartialOptions::from(options));

    common::assert_color(&test.picker, "rgb(51, 102, 153)");
    // the unreadable swatch is dropped by the UI
    assert_eq!(
        test.inspector.swatches(),
        vec!["#ffffff", "hsl(120, 100%, 25%)"]
    );
    assert_eq!(
        test.inspector.ui_option("theme"),
        Some(serde_yaml::Value::from("dark"))
    );
}

#[test]
fn test_options_file_with_bad_default() {
    let options = Options::from_yaml_str("default: 'hsl(10, 20, 30)'").unwrap();

    let err = ColorState::new(&options.default, options.format).unwrap_err();

    assert!(matches!(err, TalwinError::InvalidDefault { .. }));
}

#[test]
fn test_options_file_with_object_default() {
    let options = Options::from_yaml_str("format: hsl\ndefault: {r: 255, g: 255, b: 0}").unwrap();

    let state = ColorState::new(&options.default, options.format).unwrap();

    assert_eq!(state.to_string(), "hsl(60, 100%, 50%)");
}

#[test]
fn test_partial_options_yaml_over_file() {
    let base = Options::from_yaml_str(fixtures::OPTIONS_YAML).unwrap();
    let patch = PartialOptions::from_yaml_str("format: hex\ntheme: light").unwrap();

    let merged = base.merged(patch);

    assert_eq!(merged.format, OutputFormat::Hex);
    assert_eq!(merged.default, base.default);
    assert_eq!(merged.ui["theme"], serde_yaml::Value::from("light"));
    assert_eq!(merged.ui["position"], serde_yaml::Value::from("bottom-middle"));
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"format: [unclosed").unwrap();

    let err = Options::load(file.path()).unwrap_err();

    assert!(matches!(err, TalwinError::Config(_)));
}

#[test]
fn test_options_serialize_round_trip() {
    let options = Options::from_yaml_str(fixtures::OPTIONS_YAML).unwrap();

    let yaml = serde_yaml::to_string(&options).unwrap();
    let again = Options::from_yaml_str(&yaml).unwrap();

    assert_eq!(again, options);
}
