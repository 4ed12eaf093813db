//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use netabase_migrate::prelude::*;
//! ```
//!
//! Brings in the registry, the reader and writer, the migration traits, the
//! `Migratable` derive and the `register_all!` bootstrap macro. The global
//! registry and the wire envelope helpers are left out; import them from
//! [`registry::global`](crate::registry::global) and
//! [`codec::envelope`](crate::codec::envelope) when needed.

pub use crate::codec::{RecordInput, RecordReader, RecordWriter};
pub use crate::config::WireConfig;
pub use crate::errors::{ErrorKind, RegistryError, RegistryResult};
pub use crate::register_all;
pub use crate::registry::{Factory, Registry};
pub use crate::token::{Registration, TypeToken};
pub use crate::traits::migration::{
    MigrateFrom, Migratable, Migrated, MigrationPath, Upgrade, VersionedModel,
};

pub use netabase_migrate_macros::Migratable;
