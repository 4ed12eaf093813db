//! Core migration traits for record version conversion.

use std::any::Any;

use crate::token::TypeToken;

/// Trait for upgrading from an older version to a newer version.
///
/// Implement this to define how a record moves forward one step. The
/// `Migratable` derive wires it into the upgrade chain through the
/// `upgrade = Next` attribute.
///
/// # Example
///
/// ```
/// use netabase_migrate::traits::migration::MigrateFrom;
///
/// struct WidgetV1 {
///     shape: String,
/// }
///
/// struct WidgetV2 {
///     shape: String,
///     color: String,
/// }
///
/// impl MigrateFrom<WidgetV1> for WidgetV2 {
///     fn migrate_from(old: WidgetV1) -> Self {
///         WidgetV2 {
///             shape: old.shape,
///             color: String::from("red"),
///         }
///     }
/// }
///
/// let v2 = WidgetV2::migrate_from(WidgetV1 { shape: "circle".into() });
/// assert_eq!(v2.shape, "circle");
/// assert_eq!(v2.color, "red");
/// ```
pub trait MigrateFrom<OldVersion>: Sized {
    /// Convert from an older version to this version.
    fn migrate_from(old: OldVersion) -> Self;
}

/// Outcome of asking an instance for its next version.
pub enum Upgrade {
    /// The instance converted itself into the next version.
    Next(Box<dyn Migratable>),
    /// The instance is the latest version of its family and is handed back.
    Latest(Box<dyn Migratable>),
}

impl Upgrade {
    pub fn is_latest(&self) -> bool {
        matches!(self, Upgrade::Latest(_))
    }
}

/// A value built by a version-specific factory.
///
/// The upgrade chain calls [`upgrade`](Migratable::upgrade) until it returns
/// [`Upgrade::Latest`]. Each step must move forward through the family; a
/// step that leads back to an earlier version never terminates.
///
/// Usually derived:
///
/// ```ignore
/// #[derive(Migratable, Serialize, Deserialize)]
/// #[migratable(family = "Widget", version = 1, upgrade = WidgetV2)]
/// struct WidgetV1 { shape: String }
/// ```
///
/// A manual implementation for the latest version hands itself back:
///
/// ```
/// use netabase_migrate::traits::migration::{Migratable, Upgrade};
///
/// struct Note {
///     text: String,
/// }
///
/// impl Migratable for Note {
///     fn upgrade(self: Box<Self>) -> Upgrade {
///         Upgrade::Latest(self)
///     }
/// }
///
/// let step = Box::new(Note { text: "hi".into() }).upgrade();
/// assert!(step.is_latest());
/// ```
pub trait Migratable: Any + Send {
    /// Produce the next version, or return `self` as the latest one.
    fn upgrade(self: Box<Self>) -> Upgrade;

    /// Name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Static identity of a versioned record type.
///
/// Implemented by the `Migratable` derive. [`Registry::register_versioned`]
/// reads these constants so a type can be registered without repeating its
/// family and version at the call site.
///
/// [`Registry::register_versioned`]: crate::registry::Registry::register_versioned
pub trait VersionedModel: Sized {
    /// The family this version belongs to.
    const FAMILY: TypeToken;

    /// The version number within the family.
    const VERSION: u32;

    /// Whether this version has no further upgrade step.
    const IS_LATEST: bool;
}
