//! # Netabase Migrate
//!
//! Versioned JSON records that upgrade themselves on read.
//!
//! ## Features
//!
//! - **Forward Migration**: old records are walked version by version into the
//!   latest shape when they are read
//! - **Tagged Records**: every written record carries its family and version
//! - **Explicit Registry**: registrations live in a [`Registry`] value you own
//! - **Declarative Versions**: `#[derive(Migratable)]` declares a version and
//!   its upgrade step in one place
//!
//! ## Quick Start
//!
//! ```rust
//! use netabase_migrate::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Migratable, Debug, Clone, PartialEq, Serialize, Deserialize)]
//! #[migratable(family = "Widget", version = 1, upgrade = WidgetV2)]
//! pub struct WidgetV1 {
//!     pub shape: String,
//! }
//!
//! #[derive(Migratable, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
//! #[migratable(family = "Widget", version = 2)]
//! pub struct WidgetV2 {
//!     pub shape: String,
//!     pub color: String,
//! }
//!
//! impl MigrateFrom<WidgetV1> for WidgetV2 {
//!     fn migrate_from(old: WidgetV1) -> Self {
//!         WidgetV2 { shape: old.shape, color: "red".into() }
//!     }
//! }
//!
//! # fn main() -> RegistryResult<()> {
//! let registry = Registry::declared()?;
//!
//! // Read an old record
//! let widget: WidgetV2 = registry
//!     .reader::<WidgetV2>()
//!     .read(r#"{"__migratable_type":"Widget","__migratable_version":1,"shape":"circle"}"#)?;
//! assert_eq!(widget.color, "red");
//!
//! // Write it back in the current shape
//! let text = registry.serialize::<WidgetV2>()?.write(&widget)?;
//! assert!(text.contains(r#""__migratable_version":2"#));
//! # Ok(())
//! # }
//! ```

extern crate self as netabase_migrate;

pub mod codec;
pub mod config;
pub mod errors;
pub mod prelude;
pub mod registry;
pub mod token;
pub mod traits;

pub use codec::{RecordInput, RecordReader, RecordWriter};
pub use errors::{ErrorKind, RegistryError, RegistryResult};
pub use netabase_migrate_macros::Migratable;
pub use registry::{Declaration, Factory, Registry};
pub use token::{Registration, TypeToken};
pub use traits::migration::{MigrateFrom, Migratable, Upgrade, VersionedModel};

#[doc(hidden)]
pub mod __private {
    //! Re-exports used by generated code. Do not use directly.

    pub use inventory;
}
