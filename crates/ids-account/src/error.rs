//! Registration error types.

use ids_storage::StorageError;
use thiserror::Error;

/// Faults that abort a registration.
///
/// Rejections the user can fix (unknown username, weak password) are not
/// errors; they are reported through [`crate::RegistrationResult`].
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The credential store could not be reached or returned corrupt data.
    #[error("credential store unavailable: {0}")]
    StoreUnavailable(#[from] StorageError),
}
