//! `PostgreSQL` implementation of the configuration repository.
//!
//! Each [`EntityKind`] has its own table holding the natural key as primary
//! key and the serialized entity as a `JSONB` body.

use std::collections::HashSet;

use async_trait::async_trait;
use ids_model::{EntityKind, EntityRecord};
use ids_storage::{ConfigRepository, StorageError, StorageResult};
use sqlx::PgPool;

use crate::error::{from_insert_error, from_sqlx_error};

/// Table name for an entity kind.
#[must_use]
pub const fn table_name(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Client => "clients",
        EntityKind::IdentityResource => "identity_resources",
        EntityKind::ApiResource => "api_resources",
        EntityKind::ApiScope => "api_scopes",
    }
}

fn select_keys_sql(kind: EntityKind) -> String {
    format!("SELECT {} FROM {}", kind.key_field(), table_name(kind))
}

fn insert_sql(kind: EntityKind) -> String {
    format!(
        "INSERT INTO {} ({}, body) VALUES ($1, $2)",
        table_name(kind),
        kind.key_field()
    )
}

/// `PostgreSQL` configuration repository.
pub struct PgConfigRepository {
    pool: PgPool,
}

impl PgConfigRepository {
    /// Creates a new repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConfigRepository for PgConfigRepository {
    async fn list_keys(&self, kind: EntityKind) -> StorageResult<HashSet<String>> {
        let sql = select_keys_sql(kind);
        let keys: Vec<String> = sqlx::query_scalar(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        Ok(keys.into_iter().collect())
    }

    async fn insert_all(
        &self,
        kind: EntityKind,
        records: Vec<EntityRecord>,
    ) -> StorageResult<()> {
        if let Some(record) = records.iter().find(|r| r.kind != kind) {
            return Err(StorageError::InvalidData(format!(
                "record '{}' is a {} but was inserted as {kind}",
                record.key, record.kind
            )));
        }

        let sql = insert_sql(kind);
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::Transaction(e.to_string()))?;

        for record in &records {
            sqlx::query(&sql)
                .bind(&record.key)
                .bind(sqlx::types::Json(&record.body))
                .execute(&mut *tx)
                .await
                .map_err(|e| from_insert_error(e, kind, &record.key))?;
        }

        tx.commit()
            .await
            .map_err(|e| StorageError::Transaction(e.to_string()))?;

        tracing::debug!(kind = %kind, count = records.len(), "config records inserted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_its_own_table() {
        let tables: HashSet<_> = EntityKind::ALL.iter().map(|k| table_name(*k)).collect();
        assert_eq!(tables.len(), EntityKind::ALL.len());
    }

    #[test]
    fn statements_use_natural_key_column() {
        assert_eq!(
            select_keys_sql(EntityKind::Client),
            "SELECT client_id FROM clients"
        );
        assert_eq!(
            insert_sql(EntityKind::ApiScope),
            "INSERT INTO api_scopes (name, body) VALUES ($1, $2)"
        );
    }
}
