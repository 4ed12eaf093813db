//! Deserialization and the upgrade chain.

use std::any::{Any, type_name};

use log::{debug, trace};
use serde_json::{Map, Value};

use super::envelope;
use crate::errors::{RegistryError, RegistryResult};
use crate::registry::Registry;
use crate::token::TypeToken;
use crate::traits::migration::{
    BatchReport, Migratable, Migrated, MigrationPath, RecordFailure, Upgrade,
};

/// Anything a reader accepts: JSON text, an already parsed value, or nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordInput<'a> {
    /// No record at all. The reader returns its default value.
    Absent,
    Text(&'a str),
    Value(Value),
}

impl<'a> From<&'a str> for RecordInput<'a> {
    fn from(text: &'a str) -> Self {
        RecordInput::Text(text)
    }
}

impl<'a> From<&'a String> for RecordInput<'a> {
    fn from(text: &'a String) -> Self {
        RecordInput::Text(text.as_str())
    }
}

impl From<Value> for RecordInput<'_> {
    fn from(value: Value) -> Self {
        RecordInput::Value(value)
    }
}

impl From<Map<String, Value>> for RecordInput<'_> {
    fn from(fields: Map<String, Value>) -> Self {
        RecordInput::Value(Value::Object(fields))
    }
}

impl<'a, I> From<Option<I>> for RecordInput<'a>
where
    I: Into<RecordInput<'a>>,
{
    fn from(input: Option<I>) -> Self {
        input.map_or(RecordInput::Absent, Into::into)
    }
}

/// Reads records of any registered version and returns them as `T`, the
/// latest version of their family.
///
/// Created by [`Registry::deserialize`] or [`Registry::reader`].
pub struct RecordReader<'r, T> {
    registry: &'r Registry,
    default: Box<dyn Fn() -> T + 'r>,
}

impl Registry {
    /// Bind a reader to this registry and a default-value provider.
    ///
    /// The provider supplies the value for absent or `null` records; the
    /// registry is not consulted for those.
    pub fn deserialize<'r, T, D>(&'r self, default: D) -> RecordReader<'r, T>
    where
        T: 'static,
        D: Fn() -> T + 'r,
    {
        RecordReader {
            registry: self,
            default: Box::new(default),
        }
    }

    /// Reader whose default value is `T::default()`.
    pub fn reader<T>(&self) -> RecordReader<'_, T>
    where
        T: Default + 'static,
    {
        self.deserialize(T::default)
    }
}

impl<'r, T: 'static> RecordReader<'r, T> {
    /// Read one record, upgrading it to `T`.
    pub fn read<'a>(&self, input: impl Into<RecordInput<'a>>) -> RegistryResult<T> {
        self.read_traced(input).map(Migrated::into_inner)
    }

    /// Like [`read`](Self::read), also reporting the upgrade path taken.
    pub fn read_traced<'a>(&self, input: impl Into<RecordInput<'a>>) -> RegistryResult<Migrated<T>> {
        let value = match input.into() {
            RecordInput::Absent => return Ok(self.default_value()),
            RecordInput::Text(text) => serde_json::from_str(text)?,
            RecordInput::Value(value) => value,
        };
        if value.is_null() {
            return Ok(self.default_value());
        }

        let (header, fields) = envelope::split(value, self.registry.config())?;
        let (token, factory) = self.registry.resolve(&header.tag, header.version)?;
        trace!(
            "reading {} v{} with {}",
            token,
            header.version,
            factory.type_name()
        );

        let instance = factory.construct(fields)?;
        let (latest, steps) = walk_upgrades(instance, token);
        let value = downcast::<T>(latest, token)?;

        Ok(Migrated {
            value,
            path: Some(MigrationPath {
                family: token,
                // `resolve` only succeeds for versions that fit in u32.
                from_version: header.version as u32,
                steps,
            }),
        })
    }

    /// Read every input, collecting failures instead of stopping at them.
    pub fn read_batch<'a, I>(&self, inputs: I) -> BatchReport<T>
    where
        I: IntoIterator,
        I::Item: Into<RecordInput<'a>>,
    {
        let mut report = BatchReport::default();
        for (index, input) in inputs.into_iter().enumerate() {
            match self.read_traced(input) {
                Ok(migrated) => {
                    if migrated.path.as_ref().is_some_and(MigrationPath::migrated) {
                        report.records_migrated += 1;
                    }
                    report.records.push(migrated.value);
                }
                Err(error) => {
                    debug!("record {index} failed: {error}");
                    report.errors.push(RecordFailure { index, error });
                }
            }
        }
        report
    }

    /// Turn the reader into a plain function.
    pub fn into_fn(self) -> impl for<'a> Fn(RecordInput<'a>) -> RegistryResult<T> + 'r {
        move |input: RecordInput<'_>| self.read(input)
    }

    fn default_value(&self) -> Migrated<T> {
        Migrated {
            value: (self.default)(),
            path: None,
        }
    }
}

/// Replace `instance` with its next version until it reports itself latest.
///
/// Returns the latest instance and how many steps were taken.
pub(crate) fn walk_upgrades(
    mut instance: Box<dyn Migratable>,
    family: TypeToken,
) -> (Box<dyn Migratable>, usize) {
    let mut steps = 0;
    loop {
        let from = instance.type_name();
        match instance.upgrade() {
            Upgrade::Next(next) => {
                steps += 1;
                debug!("{family}: upgraded {from} -> {}", next.type_name());
                instance = next;
            }
            Upgrade::Latest(latest) => return (latest, steps),
        }
    }
}

fn downcast<T: 'static>(instance: Box<dyn Migratable>, family: TypeToken) -> RegistryResult<T> {
    let found = instance.type_name();
    let instance: Box<dyn Any> = instance;
    instance.downcast::<T>().map(|value| *value).map_err(|_| {
        RegistryError::InvariantViolation(format!(
            "upgrade chain for {family} ended at {found}, expected {}",
            type_name::<T>()
        ))
    })
}
