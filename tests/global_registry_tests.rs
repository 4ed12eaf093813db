//! The process-wide convenience registry.
//!
//! Kept in its own test binary so no other test shares the global state.

mod common;

use common::*;
use netabase_migrate::prelude::*;
use netabase_migrate::registry::global;

#[test]
fn test_global_registry_round_trip() {
    init_logging();
    global::register_declared().unwrap();
    // A second bootstrap is harmless.
    global::register_declared().unwrap();

    let widget: WidgetV2 = global::read(
        r#"{"__migratable_type":"Widget","__migratable_version":1,"shape":"circle"}"#,
        WidgetV2::default,
    )
    .unwrap();
    assert_eq!(widget.color, DEFAULT_COLOR);

    let text = global::write(&widget).unwrap();
    let again: WidgetV2 = global::read(&text, WidgetV2::default).unwrap();
    assert_eq!(again, widget);

    let fresh: AccountV3 = global::read(None::<&str>, AccountV3::default).unwrap();
    assert_eq!(fresh, AccountV3::default());

    let registry = global::registry().read().unwrap();
    assert!(registry.contains(ACCOUNT, 3));
}
