pub mod migration;

pub use migration::{MigrateFrom, Migratable, Upgrade, VersionedModel};
