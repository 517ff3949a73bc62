//! # ids-storage
//!
//! Storage capabilities consumed by account activation and config seeding.
//!
//! ## Capability Traits
//!
//! - [`CredentialStore`] - look up accounts, attach passwords, finalize records
//! - [`ConfigRepository`] - list natural keys and bulk-insert config records
//!
//! Store-level rejections (password policy, already has a password) are
//! reported as [`StoreOutcome::Failed`] values. Infrastructure faults are
//! reported as [`StorageError`].
//!
//! The [`memory`] module provides in-process implementations of both traits;
//! `ids-storage-sql` provides PostgreSQL ones.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod credential;
pub mod error;
pub mod memory;
pub mod password;

pub use config::ConfigRepository;
pub use credential::{CredentialStore, StoreOutcome};
pub use error::{StorageError, StorageResult};
pub use memory::{InMemoryConfigRepository, InMemoryCredentialStore};
pub use password::{HashParams, PasswordHasherService, PasswordPolicy, attach_with_policy};
