//! # ids-storage-sql
//!
//! `SQLx`-based `PostgreSQL` implementations of the storage capabilities.
//!
//! - [`PgCredentialStore`] - accounts and their password credentials
//! - [`PgConfigRepository`] - one table per configuration entity kind
//!
//! Use [`create_pool`] and [`run_migrations`] to prepare a database.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod entities;

pub mod config;
pub mod credential;
pub mod error;
pub mod pool;

pub use config::PgConfigRepository;
pub use credential::PgCredentialStore;
pub use pool::{PoolConfig, create_pool, run_migrations};
pub use sqlx::PgPool;
