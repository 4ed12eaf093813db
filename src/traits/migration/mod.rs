//! Migration traits for versioned record evolution.
//!
//! Records are grouped by family (a [`TypeToken`](crate::TypeToken)) and tagged
//! with version numbers. Each version either upgrades itself into the next
//! one or reports that it is the latest; the reader walks that chain forward
//! until it ends.
//!
//! # Example
//!
//! ```rust
//! use netabase_migrate::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Migratable, Debug, Clone, Serialize, Deserialize, PartialEq)]
//! #[migratable(family = "User", version = 1, upgrade = UserV2)]
//! pub struct UserV1 {
//!     pub name: String,
//! }
//!
//! #[derive(Migratable, Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
//! #[migratable(family = "User", version = 2)]
//! pub struct UserV2 {
//!     pub first_name: String,
//!     pub last_name: String,
//! }
//!
//! impl MigrateFrom<UserV1> for UserV2 {
//!     fn migrate_from(old: UserV1) -> Self {
//!         let mut parts = old.name.split_whitespace();
//!         UserV2 {
//!             first_name: parts.next().unwrap_or_default().to_string(),
//!             last_name: parts.next().unwrap_or_default().to_string(),
//!         }
//!     }
//! }
//!
//! # fn main() {
//! let mut registry = Registry::new();
//! register_all!(registry; UserV1, UserV2).unwrap();
//!
//! let user: UserV2 = registry
//!     .reader::<UserV2>()
//!     .read(r#"{"__migratable_type":"User","__migratable_version":1,"name":"Ada Lovelace"}"#)
//!     .unwrap();
//! assert_eq!(user.first_name, "Ada");
//! assert_eq!(user.last_name, "Lovelace");
//! # }
//! ```

mod context;
mod traits;

pub use context::*;
pub use traits::*;
