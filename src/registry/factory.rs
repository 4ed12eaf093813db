use std::any::{TypeId, type_name};
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::traits::migration::Migratable;

/// Builds an instance of one version from its non-metadata fields.
pub type ConstructFn = fn(Map<String, Value>) -> Result<Box<dyn Migratable>, serde_json::Error>;

#[derive(Clone, Copy)]
enum Constructor {
    Serde(ConstructFn),
    Custom(ConstructFn),
}

impl Constructor {
    fn function(self) -> ConstructFn {
        match self {
            Constructor::Serde(construct) | Constructor::Custom(construct) => construct,
        }
    }
}

/// A constructing factory bound to the type it produces.
///
/// Two factories are the same factory when they construct the same type the
/// same way: both serde-backed, or both using the same hand-written
/// function. Anything else registered for an occupied slot is a conflict.
#[derive(Clone, Copy)]
pub struct Factory {
    type_id: TypeId,
    type_name: &'static str,
    construct: Constructor,
}

impl Factory {
    /// Factory that deserializes the field map into `T`.
    pub fn of<T>() -> Self
    where
        T: Migratable + DeserializeOwned,
    {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            construct: Constructor::Serde(construct_with_serde::<T>),
        }
    }

    /// Factory with a hand-written constructor for `T`.
    ///
    /// The constructor must return instances of `T`; the registry stamps `T`
    /// with the registration.
    pub fn with_constructor<T: Migratable>(construct: ConstructFn) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            construct: Constructor::Custom(construct),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether this factory uses a hand-written constructor.
    pub fn is_custom(&self) -> bool {
        matches!(self.construct, Constructor::Custom(_))
    }

    pub fn construct(
        &self,
        fields: Map<String, Value>,
    ) -> Result<Box<dyn Migratable>, serde_json::Error> {
        (self.construct.function())(fields)
    }
}

impl PartialEq for Factory {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
            && match (self.construct, other.construct) {
                (Constructor::Serde(_), Constructor::Serde(_)) => true,
                (Constructor::Custom(a), Constructor::Custom(b)) => std::ptr::fn_addr_eq(a, b),
                _ => false,
            }
    }
}

impl Eq for Factory {}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("type_name", &self.type_name)
            .field("custom", &self.is_custom())
            .finish_non_exhaustive()
    }
}

fn construct_with_serde<T>(fields: Map<String, Value>) -> Result<Box<dyn Migratable>, serde_json::Error>
where
    T: Migratable + DeserializeOwned,
{
    let value: T = serde_json::from_value(Value::Object(fields))?;
    Ok(Box::new(value))
}
