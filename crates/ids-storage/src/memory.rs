//! In-memory implementations of the storage capabilities.
//!
//! Used by the CLI's `--in-memory` mode and by tests. Each store guards its
//! state with a single `tokio` `RwLock`, so a bulk insert is atomic.

use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use ids_model::{Account, EntityKind, EntityRecord};
use tokio::sync::RwLock;

use crate::config::ConfigRepository;
use crate::credential::{CONCURRENCY_FAILURE, CredentialStore, StoreOutcome};
use crate::error::{StorageError, StorageResult};
use crate::password::{HashParams, PasswordHasherService, PasswordPolicy, attach_with_policy};

/// In-memory credential store keyed by username.
pub struct InMemoryCredentialStore {
    accounts: RwLock<HashMap<String, Account>>,
    policy: PasswordPolicy,
    hasher: PasswordHasherService,
}

impl InMemoryCredentialStore {
    /// Creates an empty store with the given policy and hasher.
    #[must_use]
    pub fn new(policy: PasswordPolicy, hasher: PasswordHasherService) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            policy,
            hasher,
        }
    }

    /// Creates an empty store with default policy and cheap hashing, for tests.
    #[must_use]
    pub fn for_testing() -> Self {
        Self::new(
            PasswordPolicy::default(),
            PasswordHasherService::new(HashParams::for_testing()),
        )
    }

    /// Provisions an account, replacing any account with the same username.
    pub async fn provision(&self, account: Account) {
        self.accounts
            .write()
            .await
            .insert(account.username.clone(), account);
    }

    /// Returns the stored copy of an account.
    pub async fn get(&self, username: &str) -> Option<Account> {
        self.accounts.read().await.get(username).cloned()
    }

    /// Verifies a password against the stored credential of `username`.
    pub async fn check_password(&self, username: &str, password: &str) -> StorageResult<bool> {
        let Some(credential) = self.get(username).await.and_then(|a| a.password) else {
            return Ok(false);
        };
        self.hasher.verify(password, &credential.secret_data)
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new(PasswordPolicy::default(), PasswordHasherService::default())
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> StorageResult<Option<Account>> {
        Ok(self.get(username).await)
    }

    async fn attach_password(
        &self,
        account: &mut Account,
        password: &str,
    ) -> StorageResult<StoreOutcome> {
        attach_with_policy(&self.policy, &self.hasher, account, password)
    }

    async fn finalize_account(&self, account: &Account) -> StorageResult<StoreOutcome> {
        let mut accounts = self.accounts.write().await;

        let Some(stored) = accounts.get_mut(&account.username) else {
            return Ok(StoreOutcome::failed(CONCURRENCY_FAILURE));
        };
        // A concurrent activation already won.
        if stored.id != account.id || stored.has_password() {
            return Ok(StoreOutcome::failed(CONCURRENCY_FAILURE));
        }

        let mut updated = account.clone();
        updated.mark_activated();
        *stored = updated;

        tracing::debug!(username = %account.username, "account finalized");
        Ok(StoreOutcome::Succeeded)
    }
}

/// In-memory configuration repository.
#[derive(Default)]
pub struct InMemoryConfigRepository {
    records: RwLock<HashMap<EntityKind, BTreeMap<String, EntityRecord>>>,
}

impl InMemoryConfigRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored keys of `kind`, sorted.
    pub async fn keys(&self, kind: EntityKind) -> Vec<String> {
        self.records
            .read()
            .await
            .get(&kind)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns a stored record.
    pub async fn get(&self, kind: EntityKind, key: &str) -> Option<EntityRecord> {
        self.records
            .read()
            .await
            .get(&kind)
            .and_then(|m| m.get(key))
            .cloned()
    }

    /// Returns the total number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.values().map(BTreeMap::len).sum()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ConfigRepository for InMemoryConfigRepository {
    async fn list_keys(&self, kind: EntityKind) -> StorageResult<HashSet<String>> {
        Ok(self
            .records
            .read()
            .await
            .get(&kind)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default())
    }

    async fn insert_all(
        &self,
        kind: EntityKind,
        records: Vec<EntityRecord>,
    ) -> StorageResult<()> {
        let mut all = self.records.write().await;
        let existing = all.entry(kind).or_default();

        // Validate the whole batch before touching the map.
        let mut batch_keys = HashSet::with_capacity(records.len());
        for record in &records {
            if record.kind != kind {
                return Err(StorageError::InvalidData(format!(
                    "record '{}' is a {} but was inserted as {kind}",
                    record.key, record.kind
                )));
            }
            if existing.contains_key(&record.key) || !batch_keys.insert(record.key.as_str()) {
                return Err(StorageError::duplicate(
                    kind.as_str(),
                    kind.key_field(),
                    record.key.clone(),
                ));
            }
        }

        for record in records {
            existing.insert(record.key.clone(), record);
        }
        Ok(())
    }
}
