//! Serialization with type and version tags.

use std::marker::PhantomData;

use log::trace;
use serde::Serialize;
use serde_json::Value;

use super::envelope;
use crate::errors::{RegistryError, RegistryResult};
use crate::registry::Registry;
use crate::token::Registration;
use crate::traits::migration::Migratable;

/// Writes instances of `T` tagged with the registration `T` was stamped with.
///
/// Created by [`Registry::serialize`]. The registration is resolved once, when
/// the writer is bound, so every record it emits carries the same tags.
pub struct RecordWriter<'r, T> {
    registry: &'r Registry,
    registration: Registration,
    _marker: PhantomData<fn(&T)>,
}

impl Registry {
    /// Bind a writer for `T`, which should be the latest version of its family.
    ///
    /// Fails with an [`InvariantViolation`](RegistryError::InvariantViolation)
    /// if `T` was never registered. Writing an older version is allowed; the
    /// record is simply tagged with that older version.
    pub fn serialize<T>(&self) -> RegistryResult<RecordWriter<'_, T>>
    where
        T: Migratable + Serialize,
    {
        let registration = self.registration_of::<T>()?;
        Ok(RecordWriter {
            registry: self,
            registration,
            _marker: PhantomData,
        })
    }
}

impl<'r, T> RecordWriter<'r, T>
where
    T: Migratable + Serialize,
{
    pub fn registration(&self) -> Registration {
        self.registration
    }

    /// The tagged record as a JSON value.
    pub fn write_value(&self, instance: &T) -> RegistryResult<Value> {
        let fields = match serde_json::to_value(instance)? {
            Value::Object(fields) => fields,
            other => {
                return Err(RegistryError::MalformedRecord(format!(
                    "{} serialized to {}, expected an object",
                    self.registration,
                    envelope::kind_of(&other)
                )));
            }
        };
        trace!("writing {}", self.registration);
        Ok(Value::Object(envelope::attach(
            fields,
            self.registration,
            self.registry.config(),
        )))
    }

    /// The tagged record as JSON text.
    pub fn write(&self, instance: &T) -> RegistryResult<String> {
        let value = self.write_value(instance)?;
        let text = if self.registry.config().pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    /// Turn the writer into a plain function.
    pub fn into_fn(self) -> impl Fn(&T) -> RegistryResult<String> + 'r
    where
        T: 'r,
    {
        move |instance: &T| self.write(instance)
    }
}
