//! Account domain model.
//!
//! Accounts are provisioned externally (by the admin UI) without a password.
//! Activation attaches a password credential and marks the account activated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::credential::PasswordCredential;

/// A pre-provisioned user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: Uuid,
    /// Unique username.
    pub username: String,
    /// Whether the account has completed registration.
    pub activated: bool,
    /// Attached password credential, if any.
    pub password: Option<PasswordCredential>,
    /// When the account was provisioned.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new, not yet activated account.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            username: username.into(),
            activated: false,
            password: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches an existing password credential.
    #[must_use]
    pub fn with_password(mut self, credential: PasswordCredential) -> Self {
        self.password = Some(credential);
        self
    }

    /// Checks if a password credential is attached.
    #[must_use]
    pub const fn has_password(&self) -> bool {
        self.password.is_some()
    }

    /// Marks the account activated and bumps `updated_at`.
    pub fn mark_activated(&mut self) {
        self.activated = true;
        self.touch();
    }

    /// Bumps `updated_at` to now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
