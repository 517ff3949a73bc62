//! Password policy and Argon2id hashing used by credential store
//! implementations.
//!
//! The policy mirrors the common identity-framework defaults: each violated
//! rule yields one human-readable description, in a fixed order.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use ids_model::{Account, PasswordCredential};

use crate::credential::{ALREADY_HAS_PASSWORD, StoreOutcome};
use crate::error::{StorageError, StorageResult};

/// Password composition rules enforced before a credential is attached.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    pub required_length: usize,
    /// Require a character that is neither a letter nor a digit.
    pub require_non_alphanumeric: bool,
    /// Require an ASCII digit.
    pub require_digit: bool,
    /// Require an ASCII lowercase letter.
    pub require_lowercase: bool,
    /// Require an ASCII uppercase letter.
    pub require_uppercase: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            required_length: 6,
            require_non_alphanumeric: true,
            require_digit: true,
            require_lowercase: true,
            require_uppercase: true,
        }
    }
}

impl PasswordPolicy {
    /// Creates a policy with default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum length.
    #[must_use]
    pub const fn required_length(mut self, length: usize) -> Self {
        self.required_length = length;
        self
    }

    /// Validates a password, returning one description per violated rule.
    #[must_use]
    pub fn validate(&self, password: &str) -> Vec<String> {
        let mut errors = Vec::new();

        if password.chars().count() < self.required_length {
            errors.push(format!(
                "Passwords must be at least {} characters.",
                self.required_length
            ));
        }
        if self.require_non_alphanumeric && password.chars().all(char::is_alphanumeric) {
            errors.push("Passwords must have at least one non alphanumeric character.".to_string());
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            errors.push("Passwords must have at least one digit ('0'-'9').".to_string());
        }
        if self.require_lowercase && !password.chars().any(|c| c.is_ascii_lowercase()) {
            errors.push("Passwords must have at least one lowercase ('a'-'z').".to_string());
        }
        if self.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
            errors.push("Passwords must have at least one uppercase ('A'-'Z').".to_string());
        }

        errors
    }
}

/// Argon2id cost parameters.
#[derive(Debug, Clone)]
pub struct HashParams {
    /// Memory cost in KiB.
    pub memory_cost: u32,
    /// Time cost (iterations).
    pub time_cost: u32,
    /// Parallelism factor.
    pub parallelism: u32,
    /// Output hash length.
    pub hash_length: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        // OWASP recommended settings for Argon2id
        Self {
            memory_cost: 19 * 1024, // 19 MiB
            time_cost: 2,
            parallelism: 1,
            hash_length: 32,
        }
    }
}

impl HashParams {
    /// Minimal cost parameters for tests.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            memory_cost: 8,
            time_cost: 1,
            parallelism: 1,
            hash_length: 32,
        }
    }

    fn build(&self) -> Result<Params, argon2::Error> {
        Params::new(
            self.memory_cost,
            self.time_cost,
            self.parallelism,
            Some(self.hash_length as usize),
        )
    }
}

/// Password hasher using Argon2id.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasherService {
    params: HashParams,
}

impl PasswordHasherService {
    /// Creates a new password hasher with the given parameters.
    #[must_use]
    pub const fn new(params: HashParams) -> Self {
        Self { params }
    }

    /// Hashes a password, returning the PHC-formatted hash string.
    pub fn hash(&self, password: &str) -> StorageResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let params = self
            .params
            .build()
            .map_err(|e| StorageError::Internal(e.to_string()))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| StorageError::Internal(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Verifies a password against a PHC hash.
    ///
    /// Returns `Ok(false)` on mismatch and an error only for malformed hashes.
    pub fn verify(&self, password: &str, hash: &str) -> StorageResult<bool> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| StorageError::InvalidData(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

/// Attaches a password to `account` after checking it against `policy`.
///
/// Rejections come back as [`StoreOutcome::Failed`]; the account is left
/// untouched in that case. Only hashing faults are errors.
pub fn attach_with_policy(
    policy: &PasswordPolicy,
    hasher: &PasswordHasherService,
    account: &mut Account,
    password: &str,
) -> StorageResult<StoreOutcome> {
    if account.has_password() {
        return Ok(StoreOutcome::failed(ALREADY_HAS_PASSWORD));
    }

    let violations = policy.validate(password);
    if !violations.is_empty() {
        return Ok(StoreOutcome::Failed(violations));
    }

    let hash = hasher.hash(password)?;
    account.password = Some(PasswordCredential::argon2id(hash));
    account.touch();

    Ok(StoreOutcome::Succeeded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_passes_default_policy() {
        assert!(PasswordPolicy::default().validate("Pa$$w0rd").is_empty());
    }

    #[test]
    fn weak_password_reports_every_rule_in_order() {
        let errors = PasswordPolicy::default().validate("abc");

        assert_eq!(
            errors,
            vec![
                "Passwords must be at least 6 characters.",
                "Passwords must have at least one non alphanumeric character.",
                "Passwords must have at least one digit ('0'-'9').",
                "Passwords must have at least one uppercase ('A'-'Z').",
            ]
        );
    }

    #[test]
    fn required_length_overrides_default() {
        let policy = PasswordPolicy::new().required_length(10);

        assert_eq!(
            policy.validate("Pa$$w0rd"),
            vec!["Passwords must be at least 10 characters."]
        );
    }

    #[test]
    fn hash_and_verify() {
        let hasher = PasswordHasherService::new(HashParams::for_testing());

        let hash = hasher.hash("correct horse battery staple").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("correct horse battery staple", &hash).unwrap());
        assert!(!hasher.verify("wrong password", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_different_salts() {
        let hasher = PasswordHasherService::new(HashParams::for_testing());

        let a = hasher.hash("password1").unwrap();
        let b = hasher.hash("password1").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let hasher = PasswordHasherService::new(HashParams::for_testing());
        assert!(hasher.verify("anything", "not-a-phc-string").is_err());
    }
}
