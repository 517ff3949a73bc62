//! `PostgreSQL` implementation of the credential store.

use async_trait::async_trait;
use chrono::Utc;
use ids_model::Account;
use ids_storage::credential::CONCURRENCY_FAILURE;
use ids_storage::{
    CredentialStore, PasswordHasherService, PasswordPolicy, StorageResult, StoreOutcome,
    attach_with_policy,
};
use sqlx::PgPool;

use crate::entities::AccountRow;
use crate::error::from_sqlx_error;

/// `PostgreSQL` credential store over the `accounts` table.
pub struct PgCredentialStore {
    pool: PgPool,
    policy: PasswordPolicy,
    hasher: PasswordHasherService,
}

impl PgCredentialStore {
    /// Creates a new store.
    #[must_use]
    pub const fn new(pool: PgPool, policy: PasswordPolicy, hasher: PasswordHasherService) -> Self {
        Self {
            pool,
            policy,
            hasher,
        }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_username(&self, username: &str) -> StorageResult<Option<Account>> {
        let row: Option<AccountRow> = sqlx::query_as("SELECT * FROM accounts WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        Ok(row.map(Account::from))
    }

    async fn attach_password(
        &self,
        account: &mut Account,
        password: &str,
    ) -> StorageResult<StoreOutcome> {
        attach_with_policy(&self.policy, &self.hasher, account, password)
    }

    async fn finalize_account(&self, account: &Account) -> StorageResult<StoreOutcome> {
        let (hash, algorithm, created_at) = match &account.password {
            Some(p) => (
                Some(p.secret_data.as_str()),
                Some(p.algorithm.as_str()),
                Some(p.created_at),
            ),
            None => (None, None, None),
        };

        // Only the first activation of a row may set its password.
        let result = sqlx::query(
            r"UPDATE accounts SET
                password_hash = $3, password_algorithm = $4, password_created_at = $5,
                activated = TRUE, updated_at = $6
            WHERE id = $1 AND username = $2 AND password_hash IS NULL",
        )
        .bind(account.id)
        .bind(&account.username)
        .bind(hash)
        .bind(algorithm)
        .bind(created_at)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(from_sqlx_error)?;

        if result.rows_affected() == 0 {
            tracing::warn!(username = %account.username, "account changed before finalize");
            return Ok(StoreOutcome::failed(CONCURRENCY_FAILURE));
        }

        Ok(StoreOutcome::Succeeded)
    }
}
