//! The versioned-type registry.
//!
//! A [`Registry`] maps `(type token, version)` to the [`Factory`] that builds
//! that version, and keeps a side table from constructing type to its
//! [`Registration`] so writers can recover "what was this type registered
//! as" from the type alone.
//!
//! Registration is expected to finish during startup. After that the
//! registry is read through `&Registry` by any number of readers and
//! writers; it carries no internal locking.

mod declaration;
mod factory;
pub mod global;

pub use declaration::*;
pub use factory::*;

use std::any::{TypeId, type_name};
use std::collections::{BTreeMap, HashMap};

use log::{debug, warn};

use crate::config::WireConfig;
use crate::errors::{RegistryError, RegistryResult};
use crate::token::{Registration, TypeToken};
use crate::traits::migration::VersionedModel;

/// Every registered version of one type token.
#[derive(Debug, Clone)]
pub struct Family {
    token: TypeToken,
    versions: BTreeMap<u32, Factory>,
}

impl Family {
    fn new(token: TypeToken) -> Self {
        Self {
            token,
            versions: BTreeMap::new(),
        }
    }

    pub fn token(&self) -> TypeToken {
        self.token
    }

    pub fn get(&self, version: u32) -> Option<&Factory> {
        self.versions.get(&version)
    }

    /// Registered version numbers in ascending order.
    pub fn versions(&self) -> impl Iterator<Item = u32> + '_ {
        self.versions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

/// Owner of every version registration.
#[derive(Debug, Default)]
pub struct Registry {
    families: HashMap<TypeToken, Family>,
    stamps: HashMap<TypeId, Registration>,
    config: WireConfig,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WireConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &WireConfig {
        &self.config
    }

    /// Record `factory` as version `version` of `token`.
    ///
    /// Registering an identical factory for the same pair again is a no-op.
    /// A different factory for an occupied pair, whether another type or
    /// another constructor for the same type, is a
    /// [`RegistrationConflict`](RegistryError::RegistrationConflict).
    pub fn register(
        &mut self,
        token: TypeToken,
        version: u32,
        factory: Factory,
    ) -> RegistryResult<()> {
        let family = self
            .families
            .entry(token)
            .or_insert_with(|| Family::new(token));

        if let Some(existing) = family.versions.get(&version) {
            if *existing == factory {
                debug!(
                    "{} v{} already registered to {}",
                    token,
                    version,
                    factory.type_name()
                );
                return Ok(());
            }
            return Err(RegistryError::RegistrationConflict {
                family: token.to_string(),
                version,
                existing: existing.type_name(),
                attempted: factory.type_name(),
            });
        }

        family.versions.insert(version, factory);
        debug!("registered {} v{} -> {}", token, version, factory.type_name());
        self.stamp(factory, Registration::new(token, version));
        Ok(())
    }

    /// Register `T` with its serde-backed factory.
    pub fn register_type<T>(&mut self, token: TypeToken, version: u32) -> RegistryResult<()>
    where
        T: crate::traits::migration::Migratable + serde::de::DeserializeOwned,
    {
        self.register(token, version, Factory::of::<T>())
    }

    /// Register `T` under the family and version it declares.
    pub fn register_versioned<T>(&mut self) -> RegistryResult<()>
    where
        T: VersionedModel + crate::traits::migration::Migratable + serde::de::DeserializeOwned,
    {
        self.register(T::FAMILY, T::VERSION, Factory::of::<T>())
    }

    fn stamp(&mut self, factory: Factory, registration: Registration) {
        if let Some(previous) = self.stamps.insert(factory.type_id(), registration) {
            if previous != registration {
                warn!(
                    "{} restamped from {} to {}",
                    factory.type_name(),
                    previous,
                    registration
                );
            }
        }
    }

    /// The registration `T` was stamped with.
    pub fn registration_of<T: 'static>(&self) -> RegistryResult<Registration> {
        self.registration_of_id(TypeId::of::<T>(), type_name::<T>())
    }

    /// Same as [`registration_of`](Self::registration_of) for a type known only
    /// by its `TypeId`. `name` is used in the error message.
    pub fn registration_of_id(&self, type_id: TypeId, name: &str) -> RegistryResult<Registration> {
        let registration = self.stamps.get(&type_id).copied().ok_or_else(|| {
            RegistryError::InvariantViolation(format!("{name} was never registered"))
        })?;

        let stored = self
            .families
            .get(&registration.token)
            .and_then(|family| family.get(registration.version));
        match stored {
            Some(factory) if factory.type_id() == type_id => Ok(registration),
            _ => Err(RegistryError::InvariantViolation(format!(
                "{name} is stamped as {registration} but that registration is missing"
            ))),
        }
    }

    /// Find the factory for a record tagged `tag` at `version`.
    pub fn resolve(&self, tag: &str, version: u64) -> RegistryResult<(TypeToken, &Factory)> {
        let family = self
            .families
            .get(tag)
            .ok_or_else(|| RegistryError::UnregisteredType {
                tag: tag.to_string(),
            })?;

        u32::try_from(version)
            .ok()
            .and_then(|version| family.get(version))
            .map(|factory| (family.token, factory))
            .ok_or_else(|| RegistryError::UnregisteredVersion {
                tag: tag.to_string(),
                version,
            })
    }

    /// Family registered under the display name `tag`.
    pub fn family(&self, tag: &str) -> Option<&Family> {
        self.families.get(tag)
    }

    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.families.values()
    }

    /// Registered versions of `token`, ascending. Empty if the family is unknown.
    pub fn versions(&self, token: TypeToken) -> Vec<u32> {
        self.families
            .get(&token)
            .map(|family| family.versions().collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, token: TypeToken, version: u32) -> bool {
        self.families
            .get(&token)
            .is_some_and(|family| family.get(version).is_some())
    }

    /// Total number of `(token, version)` registrations.
    pub fn len(&self) -> usize {
        self.families.values().map(Family::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
