//! # ids-model
//!
//! Domain models for the identity server integration sample.
//!
//! - [`Account`] - a pre-provisioned identity owned by the credential store
//! - [`PasswordCredential`] - the opaque password hash attached on activation
//! - [`Client`], [`IdentityResource`], [`ApiResource`], [`ApiScope`] -
//!   the OAuth/OIDC configuration entities seeded at startup
//!
//! Every configuration entity implements [`ConfigEntity`], which exposes its
//! natural key and converts it into the persisted [`EntityRecord`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod account;
pub mod client;
pub mod credential;
pub mod entity;
pub mod resource;
pub mod secret;

pub use account::Account;
pub use client::{Client, GrantType};
pub use credential::PasswordCredential;
pub use entity::{ConfigEntity, EntityKind, EntityRecord};
pub use resource::{ApiResource, ApiScope, IdentityResource};
pub use secret::Secret;
