//! Seeding error types.

use ids_model::EntityKind;
use ids_storage::StorageError;
use thiserror::Error;

/// Errors that abort a seeding run.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Listing existing keys failed.
    #[error("failed to read existing {kind} keys: {source}")]
    ReadFailed {
        /// Kind being seeded.
        kind: EntityKind,
        /// Underlying storage error.
        #[source]
        source: StorageError,
    },

    /// Inserting missing entities failed. Nothing of this kind was written.
    #[error("failed to insert {kind} records: {source}")]
    WriteFailed {
        /// Kind being seeded.
        kind: EntityKind,
        /// Underlying storage error.
        #[source]
        source: StorageError,
    },

    /// An entity could not be converted to its stored form.
    #[error("failed to convert {kind} entity: {source}")]
    Conversion {
        /// Kind being seeded.
        kind: EntityKind,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The catalog file could not be loaded.
    #[error("failed to load catalog: {0}")]
    Catalog(String),
}

impl SeedError {
    /// Returns the kind being seeded when the error occurred.
    #[must_use]
    pub const fn kind(&self) -> Option<EntityKind> {
        match self {
            Self::ReadFailed { kind, .. }
            | Self::WriteFailed { kind, .. }
            | Self::Conversion { kind, .. } => Some(*kind),
            Self::Catalog(_) => None,
        }
    }

    /// Process exit code for a failed run.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn exit_code(&self) -> i32 {
        1
    }
}
