//! The registration decision tree.
//!
//! A registration ends in exactly one [`RegistrationOutcome`]. The branches
//! are checked in order and the first match wins:
//!
//! 1. the upstream form validation failed ([`RegistrationOutcome::FormInvalid`])
//! 2. no account has the username ([`RegistrationOutcome::UnknownUsername`])
//! 3. the store rejected the password ([`RegistrationOutcome::CredentialAttachFailed`])
//! 4. the password was attached and the account finalized
//!    ([`RegistrationOutcome::Created`], or [`RegistrationOutcome::FinalizeFailed`]
//!    when the store rejects the final write)
//!
//! Store calls are awaited one after another and never retried.

use std::sync::Arc;

use ids_core::{Event, EventType};
use ids_model::Account;
use ids_storage::{CredentialStore, StorageError, StoreOutcome};
use serde::Serialize;

use crate::error::RegistrationError;
use crate::form::RegisterForm;
use crate::validation::ValidationErrors;

/// Form-level message reported when no account has the submitted username.
pub const UNKNOWN_USERNAME: &str = "Username does not exist";

/// Form-level message reported when the store rejects a step without saying why.
pub const STORE_REJECTED: &str = "The account could not be activated.";

/// Terminal state of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationOutcome {
    /// The account was activated.
    Created,
    /// Upstream form validation failed; the store was not consulted.
    FormInvalid,
    /// No account has the submitted username.
    UnknownUsername,
    /// The store refused to attach the password.
    CredentialAttachFailed,
    /// The password was attached but the store refused the final write.
    FinalizeFailed,
}

impl RegistrationOutcome {
    /// Returns the outcome name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::FormInvalid => "form_invalid",
            Self::UnknownUsername => "unknown_username",
            Self::CredentialAttachFailed => "credential_attach_failed",
            Self::FinalizeFailed => "finalize_failed",
        }
    }
}

impl std::fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the caller renders after a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationResult {
    /// Messages to show, keyed by field.
    pub errors: ValidationErrors,
    /// True only when the account was activated.
    pub account_created: bool,
    /// Which branch of the decision tree produced this result.
    pub outcome: RegistrationOutcome,
}

impl RegistrationResult {
    fn created() -> Self {
        Self {
            errors: ValidationErrors::new(),
            account_created: true,
            outcome: RegistrationOutcome::Created,
        }
    }

    fn rejected(outcome: RegistrationOutcome, errors: ValidationErrors) -> Self {
        Self {
            errors,
            account_created: false,
            outcome,
        }
    }
}

/// Activates pre-provisioned accounts against a [`CredentialStore`].
#[derive(Clone)]
pub struct RegistrationWorkflow {
    store: Arc<dyn CredentialStore>,
}

impl RegistrationWorkflow {
    /// Creates a workflow over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Validates the form and registers it.
    pub async fn register_form(
        &self,
        form: &RegisterForm,
    ) -> Result<RegistrationResult, RegistrationError> {
        let errors = form.validate();
        self.register(form, errors.is_empty(), errors).await
    }

    /// Runs the registration decision tree.
    ///
    /// `form_valid` and `upstream_errors` come from validation done by the
    /// caller. When the form is invalid they are returned unchanged and the
    /// store is not touched.
    pub async fn register(
        &self,
        request: &RegisterForm,
        form_valid: bool,
        upstream_errors: ValidationErrors,
    ) -> Result<RegistrationResult, RegistrationError> {
        let username = request.username.as_str();

        if !form_valid {
            tracing::debug!(username, "registration form invalid");
            return Ok(reject(username, RegistrationOutcome::FormInvalid, upstream_errors));
        }

        let Some(mut account) = self
            .store
            .find_by_username(username)
            .await
            .map_err(|e| store_fault(username, "find_by_username", e))?
        else {
            tracing::debug!(username, "no provisioned account");
            return Ok(reject(
                username,
                RegistrationOutcome::UnknownUsername,
                ValidationErrors::root([UNKNOWN_USERNAME]),
            ));
        };

        let attached = self
            .store
            .attach_password(&mut account, &request.password)
            .await
            .map_err(|e| store_fault(username, "attach_password", e))?;

        if let StoreOutcome::Failed(descriptions) = attached {
            tracing::warn!(username, count = descriptions.len(), "password rejected by store");
            return Ok(reject(
                username,
                RegistrationOutcome::CredentialAttachFailed,
                store_rejection(descriptions),
            ));
        }

        let finalized = self
            .store
            .finalize_account(&account)
            .await
            .map_err(|e| store_fault(username, "finalize_account", e))?;

        match finalized {
            StoreOutcome::Succeeded => {
                tracing::info!(username, account_id = %account.id, "account activated");
                audit_created(&account);
                Ok(RegistrationResult::created())
            }
            StoreOutcome::Failed(descriptions) => {
                tracing::warn!(username, "store rejected account finalize");
                Ok(reject(
                    username,
                    RegistrationOutcome::FinalizeFailed,
                    store_rejection(descriptions),
                ))
            }
        }
    }
}

fn reject(
    username: &str,
    outcome: RegistrationOutcome,
    errors: ValidationErrors,
) -> RegistrationResult {
    Event::builder(EventType::RegisterError)
        .failure(outcome.as_str())
        .username(username)
        .detail("messages", errors.len().to_string())
        .build()
        .emit();

    RegistrationResult::rejected(outcome, errors)
}

fn store_rejection(descriptions: Vec<String>) -> ValidationErrors {
    if descriptions.is_empty() {
        ValidationErrors::root([STORE_REJECTED])
    } else {
        ValidationErrors::root(descriptions)
    }
}

fn audit_created(account: &Account) {
    Event::builder(EventType::Register)
        .success()
        .username(&account.username)
        .account(account.id)
        .build()
        .emit();
}

fn store_fault(username: &str, operation: &'static str, err: StorageError) -> RegistrationError {
    tracing::error!(
        username,
        operation,
        connection = err.is_connection(),
        error = %err,
        "credential store fault"
    );
    Event::builder(EventType::RegisterError)
        .failure(err.to_string())
        .username(username)
        .detail("operation", operation)
        .build()
        .emit();
    RegistrationError::StoreUnavailable(err)
}
