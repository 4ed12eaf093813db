//! Bookkeeping produced while walking an upgrade chain.

use crate::errors::RegistryError;
use crate::token::TypeToken;

/// Metadata about the upgrade path a single record took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationPath {
    /// The family the record was tagged with.
    pub family: TypeToken,
    /// The version tag found in the record.
    pub from_version: u32,
    /// Number of upgrade steps applied.
    pub steps: usize,
}

impl MigrationPath {
    /// Whether any upgrade step ran.
    pub fn migrated(&self) -> bool {
        self.steps > 0
    }
}

/// A value read through the upgrade chain, together with how it got there.
///
/// `path` is `None` when the value came from the default provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Migrated<T> {
    pub value: T,
    pub path: Option<MigrationPath>,
}

impl<T> Migrated<T> {
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// A record that failed to read as part of a batch.
#[derive(Debug)]
pub struct RecordFailure {
    /// Position of the record in the input batch.
    pub index: usize,
    pub error: RegistryError,
}

/// Result of reading a batch of records.
#[derive(Debug)]
pub struct BatchReport<T> {
    /// Successfully read values, in input order.
    pub records: Vec<T>,
    /// Number of records that needed at least one upgrade step.
    pub records_migrated: usize,
    /// Failures, in input order. Failed records are absent from `records`.
    pub errors: Vec<RecordFailure>,
}

impl<T> Default for BatchReport<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            records_migrated: 0,
            errors: Vec::new(),
        }
    }
}

impl<T> BatchReport<T> {
    pub fn records_failed(&self) -> usize {
        self.errors.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
