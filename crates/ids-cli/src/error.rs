//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ids_core::Error),

    /// Storage error outside a workflow (connecting, migrating).
    #[error(transparent)]
    Storage(#[from] ids_storage::StorageError),

    /// Seeding failed.
    #[error(transparent)]
    Seed(#[from] ids_seed::SeedError),

    /// Registration aborted.
    #[error(transparent)]
    Registration(#[from] ids_account::RegistrationError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Seed(err) => err.exit_code(),
            _ => 1,
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
