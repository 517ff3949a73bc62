//! Database row types for `SQLx`.

use chrono::{DateTime, Utc};
use ids_model::{Account, PasswordCredential};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for accounts.
#[derive(Debug, Clone, FromRow)]
pub struct AccountRow {
    pub id: Uuid,
    pub username: String,
    pub activated: bool,
    pub password_hash: Option<String>,
    pub password_algorithm: Option<String>,
    pub password_created_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        let password = match (row.password_hash, row.password_algorithm) {
            (Some(secret_data), Some(algorithm)) => Some(PasswordCredential {
                secret_data,
                algorithm,
                created_at: row.password_created_at.unwrap_or(row.updated_at),
            }),
            _ => None,
        };

        Self {
            id: row.id,
            username: row.username,
            activated: row.activated,
            password,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
