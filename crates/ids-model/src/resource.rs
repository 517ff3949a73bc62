//! Identity resources, API resources and API scopes.

use serde::{Deserialize, Serialize};

use crate::entity::{ConfigEntity, EntityKind, default_true};

/// Standard OIDC scope names.
pub mod standard_scopes {
    /// The `openid` scope.
    pub const OPENID: &str = "openid";
    /// The `profile` scope.
    pub const PROFILE: &str = "profile";
}

/// Claims released by the standard `profile` identity resource.
pub const PROFILE_CLAIMS: [&str; 14] = [
    "name",
    "family_name",
    "given_name",
    "middle_name",
    "nickname",
    "preferred_username",
    "profile",
    "picture",
    "website",
    "gender",
    "birthdate",
    "zoneinfo",
    "locale",
    "updated_at",
];

/// A named group of user claims that a client can request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResource {
    /// Unique name (the scope value).
    pub name: String,
    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the resource is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Whether the user may deselect this scope on consent.
    #[serde(default)]
    pub required: bool,
    /// Whether the consent screen emphasizes this scope.
    #[serde(default)]
    pub emphasize: bool,
    /// Whether the scope is listed in the discovery document.
    #[serde(default = "default_true")]
    pub show_in_discovery_document: bool,
    /// User claims released for this scope.
    #[serde(default)]
    pub user_claims: Vec<String>,
}

impl IdentityResource {
    /// Creates an identity resource releasing the given claims.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, claims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            display_name: None,
            description: None,
            enabled: true,
            required: false,
            emphasize: false,
            show_in_discovery_document: true,
            user_claims: claims.into_iter().map(Into::into).collect(),
        }
    }

    /// The standard `openid` resource (subject identifier).
    #[must_use]
    pub fn openid() -> Self {
        let mut resource = Self::new(standard_scopes::OPENID, ["sub"]);
        resource.display_name = Some("Your user identifier".to_string());
        resource.required = true;
        resource
    }

    /// The standard `profile` resource.
    #[must_use]
    pub fn profile() -> Self {
        let mut resource = Self::new(standard_scopes::PROFILE, PROFILE_CLAIMS);
        resource.display_name = Some("User profile".to_string());
        resource.description =
            Some("Your user profile information (first name, last name, etc.)".to_string());
        resource.emphasize = true;
        resource
    }
}

impl ConfigEntity for IdentityResource {
    const KIND: EntityKind = EntityKind::IdentityResource;

    fn key(&self) -> &str {
        &self.name
    }
}

/// A protected API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    /// Unique name (also used as token audience).
    pub name: String,
    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Whether the resource is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Scopes that grant access to this API.
    #[serde(default)]
    pub scopes: Vec<String>,
    /// User claims included in access tokens for this API.
    #[serde(default)]
    pub user_claims: Vec<String>,
}

impl ApiResource {
    /// Creates an API resource.
    #[must_use]
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: Some(display_name.into()),
            enabled: true,
            scopes: Vec::new(),
            user_claims: Vec::new(),
        }
    }

    /// Adds a scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }
}

impl ConfigEntity for ApiResource {
    const KIND: EntityKind = EntityKind::ApiResource;

    fn key(&self) -> &str {
        &self.name
    }
}

/// A scope a client can request for API access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiScope {
    /// Unique scope name.
    pub name: String,
    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Whether the scope is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Whether the user may deselect this scope on consent.
    #[serde(default)]
    pub required: bool,
    /// Whether the consent screen emphasizes this scope.
    #[serde(default)]
    pub emphasize: bool,
    /// User claims included when this scope is granted.
    #[serde(default)]
    pub user_claims: Vec<String>,
}

impl ApiScope {
    /// Creates an API scope.
    #[must_use]
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: Some(display_name.into()),
            enabled: true,
            required: false,
            emphasize: false,
            user_claims: Vec::new(),
        }
    }
}

impl ConfigEntity for ApiScope {
    const KIND: EntityKind = EntityKind::ApiScope;

    fn key(&self) -> &str {
        &self.name
    }
}
