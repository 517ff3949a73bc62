//! The desired configuration.

use std::path::Path;

use ids_model::{
    ApiResource, ApiScope, Client, ConfigEntity, EntityKind, GrantType, IdentityResource, Secret,
};
use serde::{Deserialize, Serialize};

use crate::error::SeedError;

/// Quickstart API name.
pub const QUICKSTART_API: &str = "api1";

/// Quickstart web client base URL.
pub const QUICKSTART_MVC_URL: &str = "https://localhost:5002";

/// Configuration entities that should exist after seeding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Clients.
    #[serde(default)]
    pub clients: Vec<Client>,
    /// Identity resources.
    #[serde(default)]
    pub identity_resources: Vec<IdentityResource>,
    /// API resources.
    #[serde(default)]
    pub api_resources: Vec<ApiResource>,
    /// API scopes.
    #[serde(default)]
    pub api_scopes: Vec<ApiScope>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The quickstart configuration: a machine client, an interactive web
    /// client, the standard identity resources and one API.
    #[must_use]
    pub fn quickstart() -> Self {
        let machine = Client::new("client")
            .with_grant_type(GrantType::ClientCredentials)
            .with_secret(Secret::sha256("secret"))
            .with_scope(QUICKSTART_API);

        let mvc = Client::new("mvc")
            .with_grant_type(GrantType::AuthorizationCode)
            .with_secret(Secret::sha256("secret"))
            .with_redirect_uri(format!("{QUICKSTART_MVC_URL}/signin-oidc"))
            .with_post_logout_redirect_uri(format!("{QUICKSTART_MVC_URL}/signout-callback-oidc"))
            .with_scope("openid")
            .with_scope("profile")
            .with_scope(QUICKSTART_API);

        Self {
            clients: vec![machine, mvc],
            identity_resources: vec![IdentityResource::openid(), IdentityResource::profile()],
            api_resources: vec![ApiResource::new(QUICKSTART_API, "My API").with_scope(QUICKSTART_API)],
            api_scopes: vec![ApiScope::new(QUICKSTART_API, "My API")],
        }
    }

    /// Parses a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        serde_json::from_str(json).map_err(|e| SeedError::Catalog(e.to_string()))
    }

    /// Loads a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SeedError::Catalog(format!("{}: {e}", path.display())))?;
        Self::from_json(&content)
    }

    /// Renders the catalog as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Returns the natural keys of `kind`, in catalog order.
    #[must_use]
    pub fn keys(&self, kind: EntityKind) -> Vec<&str> {
        match kind {
            EntityKind::Client => self.clients.iter().map(ConfigEntity::key).collect(),
            EntityKind::IdentityResource => {
                self.identity_resources.iter().map(ConfigEntity::key).collect()
            }
            EntityKind::ApiResource => self.api_resources.iter().map(ConfigEntity::key).collect(),
            EntityKind::ApiScope => self.api_scopes.iter().map(ConfigEntity::key).collect(),
        }
    }

    /// Returns the total number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
            + self.identity_resources.len()
            + self.api_resources.len()
            + self.api_scopes.len()
    }

    /// Returns true if the catalog holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
