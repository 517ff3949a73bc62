//! Password credential model.
//!
//! The core never sees plaintext once a credential exists; `secret_data`
//! holds a PHC-formatted hash produced by the credential store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hash algorithm identifier for Argon2id credentials.
pub const ARGON2ID: &str = "argon2id";

/// A password credential attached to an account.
#[derive(Clone, Serialize, Deserialize)]
pub struct PasswordCredential {
    /// PHC-formatted password hash.
    pub secret_data: String,
    /// Hash algorithm used.
    pub algorithm: String,
    /// When the credential was created.
    pub created_at: DateTime<Utc>,
}

impl PasswordCredential {
    /// Creates a credential from an Argon2id PHC hash.
    #[must_use]
    pub fn argon2id(hash: impl Into<String>) -> Self {
        Self {
            secret_data: hash.into(),
            algorithm: ARGON2ID.to_string(),
            created_at: Utc::now(),
        }
    }
}

// The hash stays out of debug output.
impl std::fmt::Debug for PasswordCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCredential")
            .field("algorithm", &self.algorithm)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}
