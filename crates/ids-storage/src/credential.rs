//! Credential store capability.

use async_trait::async_trait;
use ids_model::Account;

use crate::error::StorageResult;

/// Description returned when a password is attached to an account that
/// already has one.
pub const ALREADY_HAS_PASSWORD: &str = "User already has a password set.";

/// Description returned when finalizing an account that changed or vanished
/// since it was read.
pub const CONCURRENCY_FAILURE: &str = "Optimistic concurrency failure, object has been modified.";

/// Result of a store mutation that the store itself may reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The mutation was applied.
    Succeeded,
    /// The store rejected the mutation, with one description per reason.
    Failed(Vec<String>),
}

impl StoreOutcome {
    /// Creates a failed outcome with a single description.
    #[must_use]
    pub fn failed(description: impl Into<String>) -> Self {
        Self::Failed(vec![description.into()])
    }

    /// Returns true if the mutation was applied.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Returns the failure descriptions (empty on success).
    #[must_use]
    pub fn descriptions(&self) -> &[String] {
        match self {
            Self::Succeeded => &[],
            Self::Failed(descriptions) => descriptions,
        }
    }
}

/// External identity/credential store.
///
/// Implementations must be thread-safe. The store owns password hashing and
/// any per-username serialization of concurrent mutations.
///
/// ## Security Note
///
/// Implementations must never log the plaintext password passed to
/// [`CredentialStore::attach_password`].
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Looks up an account by username.
    async fn find_by_username(&self, username: &str) -> StorageResult<Option<Account>>;

    /// Attaches a password credential to the account.
    ///
    /// On success the credential is set on `account` in memory; it is only
    /// durable after [`CredentialStore::finalize_account`].
    async fn attach_password(
        &self,
        account: &mut Account,
        password: &str,
    ) -> StorageResult<StoreOutcome>;

    /// Persists the account record, completing activation.
    async fn finalize_account(&self, account: &Account) -> StorageResult<StoreOutcome>;
}
