//! Client domain model.
//!
//! Clients are applications that request tokens from the identity server
//! (OAuth 2.0 / OIDC clients).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entity::{ConfigEntity, EntityKind, default_true};
use crate::secret::Secret;

/// OAuth 2.0 grant type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Authorization Code flow.
    AuthorizationCode,
    /// Client Credentials flow (machine to machine).
    ClientCredentials,
}

impl GrantType {
    /// Returns the protocol name of the grant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization_code",
            Self::ClientCredentials => "client_credentials",
        }
    }
}

/// An OAuth 2.0 / OIDC client.
///
/// Only `client_id` is required when deserializing; everything else falls
/// back to the values [`Client::new`] uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique client identifier (OAuth `client_id`).
    pub client_id: String,
    /// Display name.
    #[serde(default)]
    pub client_name: Option<String>,
    /// Whether the client is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Hashed client secrets.
    #[serde(default)]
    pub secrets: Vec<Secret>,
    /// Grant types this client may use.
    #[serde(default)]
    pub allowed_grant_types: Vec<GrantType>,
    /// Allowed redirect URIs.
    #[serde(default)]
    pub redirect_uris: BTreeSet<String>,
    /// Allowed post-logout redirect URIs.
    #[serde(default)]
    pub post_logout_redirect_uris: BTreeSet<String>,
    /// Scopes this client may request.
    #[serde(default)]
    pub allowed_scopes: Vec<String>,
    /// Require user consent for scopes.
    #[serde(default)]
    pub require_consent: bool,
}

impl Client {
    /// Creates a new enabled client with no secrets, grants or scopes.
    #[must_use]
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_name: None,
            enabled: true,
            secrets: Vec::new(),
            allowed_grant_types: Vec::new(),
            redirect_uris: BTreeSet::new(),
            post_logout_redirect_uris: BTreeSet::new(),
            allowed_scopes: Vec::new(),
            require_consent: false,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    /// Adds a hashed secret.
    #[must_use]
    pub fn with_secret(mut self, secret: Secret) -> Self {
        self.secrets.push(secret);
        self
    }

    /// Adds an allowed grant type.
    #[must_use]
    pub fn with_grant_type(mut self, grant: GrantType) -> Self {
        if !self.allowed_grant_types.contains(&grant) {
            self.allowed_grant_types.push(grant);
        }
        self
    }

    /// Adds a redirect URI.
    #[must_use]
    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uris.insert(uri.into());
        self
    }

    /// Adds a post-logout redirect URI.
    #[must_use]
    pub fn with_post_logout_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.post_logout_redirect_uris.insert(uri.into());
        self
    }

    /// Adds an allowed scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        if !self.allowed_scopes.contains(&scope) {
            self.allowed_scopes.push(scope);
        }
        self
    }

    /// Checks if the client may use the given grant.
    #[must_use]
    pub fn allows_grant(&self, grant: GrantType) -> bool {
        self.allowed_grant_types.contains(&grant)
    }

    /// Checks if the client may request the given scope.
    #[must_use]
    pub fn allows_scope(&self, scope: &str) -> bool {
        self.allowed_scopes.iter().any(|s| s == scope)
    }
}

impl ConfigEntity for Client {
    const KIND: EntityKind = EntityKind::Client;

    fn key(&self) -> &str {
        &self.client_id
    }
}
