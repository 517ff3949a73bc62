//! # ids-seed
//!
//! One-time bootstrap of OAuth/OIDC configuration.
//!
//! [`seed`] compares a desired [`Catalog`] with what a
//! [`ConfigRepository`](ids_storage::ConfigRepository) already holds and
//! inserts only the missing entities. Existing records are never updated, so
//! running it again is a no-op.
//!
//! ```ignore
//! use ids_seed::{Catalog, seed};
//! use ids_storage::InMemoryConfigRepository;
//!
//! let repo = InMemoryConfigRepository::new();
//! let summary = seed(&Catalog::quickstart(), &repo).await?;
//! std::process::exit(summary.exit_code());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod catalog;
pub mod error;
pub mod seeder;
pub mod summary;

pub use catalog::Catalog;
pub use error::SeedError;
pub use seeder::{ConfigSeeder, missing_entities, seed};
pub use summary::{KindSummary, SeedSummary};
