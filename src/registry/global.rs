//! Process-wide convenience registry.
//!
//! Everything here wraps an ordinary [`Registry`] behind a `RwLock`. It starts
//! empty; call [`register_declared`] (or [`register`]) during startup. Code
//! that can pass a registry around should prefer an explicit one.

use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use super::{Factory, Registry};
use crate::codec::RecordInput;
use crate::errors::RegistryResult;
use crate::token::TypeToken;
use crate::traits::migration::Migratable;

static GLOBAL: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

/// The global registry lock.
pub fn registry() -> &'static RwLock<Registry> {
    &GLOBAL
}

fn read_guard() -> RwLockReadGuard<'static, Registry> {
    GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_guard() -> RwLockWriteGuard<'static, Registry> {
    GLOBAL.write().unwrap_or_else(PoisonError::into_inner)
}

pub fn register(token: TypeToken, version: u32, factory: Factory) -> RegistryResult<()> {
    write_guard().register(token, version, factory)
}

/// Register every linked declaration with the global registry.
pub fn register_declared() -> RegistryResult<usize> {
    write_guard().register_declared()
}

/// Read one record through the global registry.
pub fn read<'a, T, D>(input: impl Into<RecordInput<'a>>, default: D) -> RegistryResult<T>
where
    T: 'static,
    D: Fn() -> T,
{
    read_guard().deserialize(default).read(input)
}

/// Write one record through the global registry.
pub fn write<T>(instance: &T) -> RegistryResult<String>
where
    T: Migratable + Serialize,
{
    read_guard().serialize::<T>()?.write(instance)
}
