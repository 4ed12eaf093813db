// Common test fixtures: two record families and helpers

#![allow(dead_code)]

use netabase_migrate::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Color given to widgets written before colors existed.
pub const DEFAULT_COLOR: &str = "red";

#[derive(Migratable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[migratable(family = "Widget", version = 1, upgrade = WidgetV2)]
pub struct WidgetV1 {
    pub shape: String,
}

#[derive(Migratable, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[migratable(family = "Widget", version = 2)]
pub struct WidgetV2 {
    pub shape: String,
    pub color: String,
}

impl MigrateFrom<WidgetV1> for WidgetV2 {
    fn migrate_from(old: WidgetV1) -> Self {
        WidgetV2 {
            shape: old.shape,
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

pub const ACCOUNT: TypeToken = TypeToken::new("Account");

#[derive(Migratable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[migratable(family = ACCOUNT, version = 1, upgrade = AccountV2)]
pub struct AccountV1 {
    pub name: String,
}

#[derive(Migratable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[migratable(family = ACCOUNT, version = 2, upgrade = AccountV3)]
pub struct AccountV2 {
    pub name: String,
    pub email: Option<String>,
}

#[derive(Migratable, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[migratable(family = ACCOUNT, version = 3)]
pub struct AccountV3 {
    pub display_name: String,
    pub email: Option<String>,
    pub tags: Vec<String>,
}

impl MigrateFrom<AccountV1> for AccountV2 {
    fn migrate_from(old: AccountV1) -> Self {
        AccountV2 {
            name: old.name,
            email: None,
        }
    }
}

impl MigrateFrom<AccountV2> for AccountV3 {
    fn migrate_from(old: AccountV2) -> Self {
        AccountV3 {
            display_name: old.name,
            email: old.email,
            tags: Vec::new(),
        }
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A registry with every fixture version, built from the bootstrap list.
pub fn fixture_registry() -> Registry {
    init_logging();
    let mut registry = Registry::new();
    register_all!(registry; WidgetV1, WidgetV2, AccountV1, AccountV2, AccountV3)
        .expect("fixture registration");
    registry
}

/// A record tagged as `family` at `version`, with `fields` merged in.
pub fn tagged(family: &str, version: u32, fields: Value) -> Value {
    let mut record = json!({
        "__migratable_type": family,
        "__migratable_version": version,
    });
    if let (Some(record), Value::Object(fields)) = (record.as_object_mut(), fields) {
        record.extend(fields);
    }
    record
}
