use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attributes;
mod errors;
mod generators;

/// Declares a type as one version of a migratable record family.
///
/// This macro generates:
/// - `VersionedModel` with the family token, version number and whether the
///   version is the latest
/// - `Migratable`, whose upgrade step calls `MigrateFrom` on the next version
/// - an `inventory` declaration so `Registry::register_declared` picks the
///   version up without further wiring
///
/// # Attributes
///
/// - `family` - **Required**. A string literal (`"Widget"`) or a `TypeToken`
///   constant (`WIDGET`)
/// - `version` - **Required**. The version number, unique within the family
/// - `upgrade` - **Optional**. The next version's type. It must implement
///   `MigrateFrom<Self>`. Omit it on the latest version
/// - `declare` - **Optional**, default `true`. Set to `false` to skip the
///   `inventory` declaration and register the type by hand
///
/// # Required Derives
///
/// Your struct must also implement `serde::Deserialize` (to be read) and
/// `serde::Serialize` (to be written).
///
/// # Example
///
/// ```ignore
/// use netabase_migrate::prelude::*;
///
/// #[derive(Migratable, serde::Serialize, serde::Deserialize)]
/// #[migratable(family = "Widget", version = 1, upgrade = WidgetV2)]
/// pub struct WidgetV1 {
///     pub shape: String,
/// }
///
/// #[derive(Migratable, serde::Serialize, serde::Deserialize)]
/// #[migratable(family = "Widget", version = 2)]
/// pub struct WidgetV2 {
///     pub shape: String,
///     pub color: String,
/// }
/// ```
#[proc_macro_derive(Migratable, attributes(migratable))]
pub fn migratable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    generators::generate(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
