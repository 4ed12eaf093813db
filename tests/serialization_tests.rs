//! Writer tests: tagging, round trips and misuse.

mod common;

use common::*;
use netabase_migrate::prelude::*;
use serde_json::{Value, json};

#[test]
fn test_widget_v2_is_written_with_tags() {
    let registry = fixture_registry();
    let writer = registry.serialize::<WidgetV2>().unwrap();

    let text = writer
        .write(&WidgetV2 {
            shape: "circle".into(),
            color: "blue".into(),
        })
        .unwrap();

    // Key order is immaterial, so compare parsed values.
    let written: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        written,
        json!({
            "shape": "circle",
            "color": "blue",
            "__migratable_type": "Widget",
            "__migratable_version": 2,
        })
    );
}

#[test]
fn test_round_trip_reproduces_instance() {
    let registry = fixture_registry();
    let writer = registry.serialize::<AccountV3>().unwrap();
    let reader = registry.reader::<AccountV3>();

    let original = AccountV3 {
        display_name: "Grace".into(),
        email: Some("grace@example.com".into()),
        tags: vec!["admin".into(), "ops".into()],
    };

    let text = writer.write(&original).unwrap();
    assert_eq!(reader.read(&text).unwrap(), original);

    let value = writer.write_value(&original).unwrap();
    assert_eq!(reader.read(value).unwrap(), original);
}

#[test]
fn test_upgraded_record_is_rewritten_at_latest_version() {
    let registry = fixture_registry();
    let reader = registry.reader::<WidgetV2>();
    let writer = registry.serialize::<WidgetV2>().unwrap();

    let old = r#"{"__migratable_type":"Widget","__migratable_version":1,"shape":"circle"}"#;
    let rewritten = writer.write_value(&reader.read(old).unwrap()).unwrap();

    assert_eq!(rewritten["__migratable_version"], json!(2));
    assert_eq!(rewritten["color"], json!(DEFAULT_COLOR));
}

#[test]
fn test_older_version_can_still_be_written() {
    let registry = fixture_registry();

    // Caller discipline: nothing stops writing through an older type.
    let writer = registry.serialize::<WidgetV1>().unwrap();
    assert_eq!(writer.registration().version, 1);

    let value = writer
        .write_value(&WidgetV1 {
            shape: "circle".into(),
        })
        .unwrap();
    assert_eq!(value["__migratable_version"], json!(1));

    // And reading it back upgrades as usual.
    let widget = registry.reader::<WidgetV2>().read(value).unwrap();
    assert_eq!(widget.color, DEFAULT_COLOR);
}

#[test]
fn test_writer_for_unregistered_type_is_invariant_violation() {
    let mut registry = Registry::new();
    registry.register_versioned::<WidgetV1>().unwrap();

    let err = registry.serialize::<WidgetV2>().err().unwrap();
    assert_eq!(err.kind(), ErrorKind::InvariantViolation);
    assert!(err.to_string().contains("WidgetV2"));
}

#[test]
fn test_writer_as_function() {
    let registry = fixture_registry();
    let write = registry.serialize::<WidgetV2>().unwrap().into_fn();
    let read = registry.reader::<WidgetV2>().into_fn();

    let widget = WidgetV2 {
        shape: "triangle".into(),
        color: "yellow".into(),
    };
    let text = write(&widget).unwrap();
    assert_eq!(read(RecordInput::from(&text)).unwrap(), widget);
}
