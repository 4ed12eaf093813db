use thiserror::Error;

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Every failure the registry, reader and writer can surface.
///
/// Nothing is retried or downgraded internally. The only non-error fallback
/// is the absent-record path of [`RecordReader`](crate::codec::RecordReader),
/// which returns the bound default value.
///
/// Record checks run in a fixed order: the record must be a JSON object
/// carrying both reserved keys ([`MalformedRecord`](Self::MalformedRecord)),
/// then the type tag is resolved ([`UnregisteredType`](Self::UnregisteredType)),
/// then the version tag ([`UnregisteredVersion`](Self::UnregisteredVersion)).
/// A missing version tag is therefore `MalformedRecord` even for a known type.
#[derive(Error, Debug, strum::EnumDiscriminants)]
#[strum_discriminants(name(ErrorKind), derive(strum::Display, strum::AsRefStr, Hash))]
pub enum RegistryError {
    #[error("Unregistered Type: no family is registered under '{tag}'")]
    UnregisteredType { tag: String },

    #[error("Unregistered Version: '{tag}' has no version {version} registered")]
    UnregisteredVersion { tag: String, version: u64 },

    #[error(
        "Registration Conflict: {family} v{version} is already bound to {existing}, refusing {attempted}"
    )]
    RegistrationConflict {
        family: String,
        version: u32,
        existing: &'static str,
        attempted: &'static str,
    },

    #[error("Invariant Violation: {0}")]
    InvariantViolation(String),

    #[error("Malformed Record: {0}")]
    MalformedRecord(String),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RegistryError {
    /// The discriminant of this error, for matching without destructuring.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from(self)
    }
}
