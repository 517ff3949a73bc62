//! # ids-account
//!
//! Account registration for pre-provisioned identities.
//!
//! Accounts are created by the admin UI without a password. Registration
//! activates one: it looks the username up in the [`CredentialStore`],
//! attaches the submitted password and finalizes the record.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ids_account::{RegisterForm, RegistrationWorkflow};
//! use ids_storage::InMemoryCredentialStore;
//!
//! let workflow = RegistrationWorkflow::new(Arc::new(InMemoryCredentialStore::default()));
//! let result = workflow.register_form(&RegisterForm::new("alice", "Pa$$w0rd")).await?;
//! if !result.account_created {
//!     for message in result.errors.form_level() { /* render */ }
//! }
//! ```
//!
//! [`CredentialStore`]: ids_storage::CredentialStore

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod form;
pub mod registration;
pub mod validation;

pub use error::RegistrationError;
pub use form::RegisterForm;
pub use registration::{
    RegistrationOutcome, RegistrationResult, RegistrationWorkflow, STORE_REJECTED,
    UNKNOWN_USERNAME,
};
pub use validation::{ROOT_KEY, ValidationErrors};
