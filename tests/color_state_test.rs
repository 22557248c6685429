//! Color behavior seen through the picker: normalization, bounding,
//! rejection and the notify-on-real-change rule.

mod common;

use pretty_assertions::assert_eq;
use serde_json::json;

use talwin::models::PartialOptions;
use talwin::services::{Update, CHANGE, COLOR};
use talwin_color::{ColorValue, OutputFormat, Rgba};

use common::fixtures::{self, colors};
use common::TestPicker;

fn picker_in(format: OutputFormat) -> TestPicker {
    TestPicker::with_options(PartialOptions::new().format(format))
}

#[test]
fn test_out_of_range_hsv_is_bounded() {
    let mut wild = picker_in(OutputFormat::Rgb);
    let mut tame = picker_in(OutputFormat::Rgb);

    wild.picker.set_color(fixtures::wild_hsv());
    tame.picker.set_color(fixtures::tame_hsv());

    assert_eq!(wild.picker.get_color(), tame.picker.get_color());
    common::assert_color(&wild.picker, "rgb(0, 0, 0)");
}

#[test]
fn test_bounded_hsv_with_value() {
    let mut wrapped = picker_in(OutputFormat::Hex);
    let mut plain = picker_in(OutputFormat::Hex);

    wrapped.picker.set_color(json!({"h": 390, "s": 250, "v": 100}));
    plain.picker.set_color(json!({"h": 30, "s": 100, "v": 100}));

    assert_eq!(wrapped.picker.get_color(), plain.picker.get_color());
    common::assert_color(&wrapped.picker, colors::ORANGE_HEX);
}

#[test]
fn test_same_color_notifies_once() {
    let mut test = picker_in(OutputFormat::Hex);
    let color = test.record(COLOR);
    let change = test.record(CHANGE);

    assert_eq!(test.picker.update(colors::RED_HEX), Update::Changed);
    assert_eq!(test.picker.update(colors::RED_RGB), Update::Unchanged);
    assert_eq!(test.picker.update(colors::RED_HSL), Update::Unchanged);
    assert_eq!(test.picker.update("#F00"), Update::Unchanged);

    common::assert_events(&color, &["color:#ff0000"]);
    common::assert_events(&change, &["change:#ff0000"]);
}

#[test]
fn test_same_object_notifies_once() {
    let mut test = picker_in(OutputFormat::Hsl);
    let log = test.record(COLOR);

    test.picker.update(json!({"r": 255, "g": 0, "b": 0}));
    test.picker.update(json!({"h": 0, "s": 100, "l": 50}));
    test.picker.update(json!({"h": 360, "s": 100, "v": 100}));

    common::assert_events(&log, &["color:hsl(0, 100%, 50%)"]);
}

#[test]
fn test_silent_update_never_notifies() {
    let mut test = TestPicker::new();
    let color = test.record(COLOR);
    let change = test.record(CHANGE);

    for input in ["#112233", "#445566", "#445566", "rgb(1, 2, 3)"] {
        let update = test.picker.set_color(input);
        assert!(!update.should_notify());
    }

    common::assert_no_events(&color);
    common::assert_no_events(&change);
    common::assert_color(&test.picker, "#010203");
}

#[test]
fn test_unparsable_string_leaves_state() {
    let mut test = TestPicker::with_options(PartialOptions::new().default_color("#abcdef"));
    let log = test.record(COLOR);
    let before = test.picker.get_color();

    for input in ["", "   ", "#12", "#ggg", "rgb(1, 2)", "hsl(1, 2, 3)", "blue", "rgb(a, b, c)"] {
        common::assert_rejected(&test.picker.update(input));
    }

    assert_eq!(test.picker.get_color(), before);
    common::assert_no_events(&log);
}

#[test]
fn test_unknown_object_leaves_state() {
    let mut test = TestPicker::new();
    let before = test.picker.get_color();

    common::assert_rejected(&test.picker.set_color(json!({"r": 1, "g": 2})));
    common::assert_rejected(&test.picker.set_color(json!({"c": 0, "m": 0, "y": 0, "k": 0})));
    common::assert_rejected(&test.picker.set_color(json!({"r": "1", "g": "2", "b": "3"})));
    common::assert_rejected(&test.picker.set_color(json!([255, 0, 0])));

    assert_eq!(test.picker.get_color(), before);
}

#[test]
fn test_format_printing() {
    let cases = [
        (OutputFormat::Hex, colors::HALF_BLUE_RGB, colors::HALF_BLUE_HEX),
        (OutputFormat::Rgb, colors::HALF_BLUE_HEX, colors::HALF_BLUE_RGB),
        (OutputFormat::Hsl, colors::RED_HEX, colors::RED_HSL),
        (OutputFormat::Rgb, "hsla(240, 100%, 50%, 0.25)", "rgba(0, 0, 255, 0.25)"),
        (OutputFormat::Hsl, "rgb(255, 128, 0)", "hsl(30.12, 100%, 50%)"),
    ];

    for (format, input, expected) in cases {
        let mut test = picker_in(format);
        test.picker.set_color(input);
        common::assert_color(&test.picker, expected);
    }
}

#[test]
fn test_printed_color_reads_back_unchanged() {
    for format in [OutputFormat::Hex, OutputFormat::Rgb, OutputFormat::Hsl] {
        let mut test = picker_in(format);
        test.picker.set_color("rgba(17, 99, 201, 0.37)");
        let printed = test.picker.color_string();

        assert_eq!(test.picker.set_color(printed.as_str()), Update::Unchanged);
        assert_eq!(test.picker.color_string(), printed);
    }
}

#[test]
fn test_get_color_shape_follows_format() {
    let hex = picker_in(OutputFormat::Hex);
    assert_eq!(hex.picker.get_color(), ColorValue::Rgb(Rgba::from_u8(0, 0, 0)));

    let hsl = picker_in(OutputFormat::Hsl);
    assert!(matches!(hsl.picker.get_color(), ColorValue::Hsl(_)));
}
