//! Wire configuration shared by the reader and the writer.
//!
//! Built with `typed-builder`, like the rest of the crate's option structs.

use typed_builder::TypedBuilder;

/// Reserved key carrying the type tag.
pub const TYPE_KEY: &str = "__migratable_type";

/// Reserved key carrying the version tag.
pub const VERSION_KEY: &str = "__migratable_version";

/// How records are tagged on the wire.
///
/// # Examples
///
/// ```
/// use netabase_migrate::config::WireConfig;
///
/// // Defaults use the standard reserved keys
/// let config = WireConfig::default();
/// assert_eq!(config.type_key, "__migratable_type");
/// assert_eq!(config.version_key, "__migratable_version");
///
/// // Customize options
/// let config = WireConfig::builder()
///     .type_key("_kind")
///     .pretty(true)
///     .build();
/// assert_eq!(config.type_key, "_kind");
/// assert!(config.pretty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
#[builder(doc)]
pub struct WireConfig {
    /// Key holding the family display name
    #[builder(default = String::from(TYPE_KEY), setter(into))]
    pub type_key: String,

    /// Key holding the version number
    #[builder(default = String::from(VERSION_KEY), setter(into))]
    pub version_key: String,

    /// Emit indented JSON from writers
    #[builder(default = false)]
    pub pretty: bool,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            type_key: TYPE_KEY.to_string(),
            version_key: VERSION_KEY.to_string(),
            pretty: false,
        }
    }
}
