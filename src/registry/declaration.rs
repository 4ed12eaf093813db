//! Declaration-time registration via `inventory`.
//!
//! Each `#[derive(Migratable)]` submits a [`Declaration`] with
//! `inventory::submit!`. Linking collects them, and
//! [`Registry::register_declared`] replays them into an explicit registry.

use log::debug;

use super::Registry;
use crate::errors::RegistryResult;

/// Static registration entry collected via `inventory`.
pub struct Declaration {
    /// Name of the declaring type.
    pub type_name: &'static str,
    /// Registers the declaring type under its own family and version.
    pub register: fn(&mut Registry) -> RegistryResult<()>,
}

inventory::collect!(Declaration);

impl Registry {
    /// A fresh registry holding every declared version.
    pub fn declared() -> RegistryResult<Self> {
        let mut registry = Self::new();
        registry.register_declared()?;
        Ok(registry)
    }

    /// Register every declaration linked into the binary.
    ///
    /// Stops at the first conflict. Returns how many declarations were applied.
    pub fn register_declared(&mut self) -> RegistryResult<usize> {
        let mut applied = 0;
        for declaration in inventory::iter::<Declaration> {
            (declaration.register)(self)?;
            debug!("applied declaration for {}", declaration.type_name);
            applied += 1;
        }
        Ok(applied)
    }
}

/// Register a list of versioned types with a registry.
///
/// The explicit bootstrap alternative to [`Registry::register_declared`].
/// Stops at the first error and returns it.
///
/// ```ignore
/// let mut registry = Registry::new();
/// register_all!(registry; WidgetV1, WidgetV2)?;
/// ```
#[macro_export]
macro_rules! register_all {
    ($registry:expr; $($ty:ty),+ $(,)?) => {{
        let registry: &mut $crate::registry::Registry = &mut $registry;
        let mut result: $crate::errors::RegistryResult<()> = Ok(());
        $(
            if result.is_ok() {
                result = registry.register_versioned::<$ty>();
            }
        )+
        result
    }};
}
