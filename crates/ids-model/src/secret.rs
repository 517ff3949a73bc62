//! Client secrets.
//!
//! Secrets are stored as base64-encoded SHA-256 digests of the shared secret,
//! so the seeded catalog never persists plaintext.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Secret type for shared secrets.
pub const SHARED_SECRET: &str = "SharedSecret";

/// A hashed client secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    /// Base64 SHA-256 digest of the shared secret.
    pub value: String,
    /// Secret type.
    #[serde(rename = "type", default = "shared_secret")]
    pub secret_type: String,
}

impl Secret {
    /// Hashes a plaintext shared secret.
    #[must_use]
    pub fn sha256(plain: &str) -> Self {
        Self {
            value: digest(plain),
            secret_type: SHARED_SECRET.to_string(),
        }
    }

    /// Checks a presented plaintext secret against the stored digest.
    #[must_use]
    pub fn matches(&self, plain: &str) -> bool {
        self.value == digest(plain)
    }
}

fn shared_secret() -> String {
    SHARED_SECRET.to_string()
}

fn digest(plain: &str) -> String {
    STANDARD.encode(Sha256::digest(plain.as_bytes()))
}
