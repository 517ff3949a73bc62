//! Registration form input.

use serde::Deserialize;

use crate::validation::ValidationErrors;

/// Field name of the username input.
pub const USERNAME_FIELD: &str = "Username";
/// Field name of the password input.
pub const PASSWORD_FIELD: &str = "Password";

/// Submitted registration form.
#[derive(Clone, Default, Deserialize)]
pub struct RegisterForm {
    /// Username of the pre-provisioned account.
    pub username: String,
    /// Plaintext password. Never logged.
    pub password: String,
    /// Where the caller wants to go afterwards. Carried through, not
    /// interpreted.
    #[serde(default)]
    pub return_url: Option<String>,
}

impl RegisterForm {
    /// Creates a form.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            return_url: None,
        }
    }

    /// Sets the return URL.
    #[must_use]
    pub fn with_return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = Some(url.into());
        self
    }

    /// Checks required fields, returning per-field messages.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.username.trim().is_empty() {
            errors.add(USERNAME_FIELD, "The Username field is required.");
        }
        if self.password.trim().is_empty() {
            errors.add(PASSWORD_FIELD, "The Password field is required.");
        }
        errors
    }
}

impl std::fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterForm")
            .field("username", &self.username)
            .field("password", &"***")
            .field("return_url", &self.return_url)
            .finish()
    }
}
