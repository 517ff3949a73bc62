//! Configuration entity abstraction.
//!
//! Clients, identity resources, API resources and API scopes are stored
//! per [`EntityKind`] and keyed by a natural key (`client_id` for clients,
//! `name` for everything else). A store never holds two records of the same
//! kind with the same key.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four configuration entity variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// OAuth/OIDC client.
    Client,
    /// Identity resource (group of user claims).
    IdentityResource,
    /// Protected API resource.
    ApiResource,
    /// API scope.
    ApiScope,
}

impl EntityKind {
    /// All kinds, in seeding order.
    pub const ALL: [Self; 4] = [
        Self::Client,
        Self::IdentityResource,
        Self::ApiResource,
        Self::ApiScope,
    ];

    /// Returns the string representation used in storage and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::IdentityResource => "identity_resource",
            Self::ApiResource => "api_resource",
            Self::ApiScope => "api_scope",
        }
    }

    /// Returns the name of the natural key field.
    #[must_use]
    pub const fn key_field(&self) -> &'static str {
        match self {
            Self::Client => "client_id",
            Self::IdentityResource | Self::ApiResource | Self::ApiScope => "name",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) const fn default_true() -> bool {
    true
}

/// Persisted representation of a configuration entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Entity variant.
    pub kind: EntityKind,
    /// Natural key.
    pub key: String,
    /// Serialized entity body.
    pub body: serde_json::Value,
}

/// A configuration entity that can be seeded into a repository.
pub trait ConfigEntity: Serialize {
    /// The variant this entity belongs to.
    const KIND: EntityKind;

    /// Returns the natural key.
    fn key(&self) -> &str;

    /// Converts the entity into its persisted representation.
    fn to_record(&self) -> Result<EntityRecord, serde_json::Error> {
        Ok(EntityRecord {
            kind: Self::KIND,
            key: self.key().to_string(),
            body: serde_json::to_value(self)?,
        })
    }
}
