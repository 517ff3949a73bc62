//! SQL storage error mapping.

use ids_model::EntityKind;
use ids_storage::StorageError;
use sqlx::Error as SqlxError;

/// `PostgreSQL` error code for a unique constraint violation.
pub const UNIQUE_VIOLATION: &str = "23505";

/// Converts a `SQLx` error to a storage error.
#[allow(clippy::needless_pass_by_value)]
pub fn from_sqlx_error(err: SqlxError) -> StorageError {
    match err {
        SqlxError::RowNotFound => StorageError::Internal("Row not found".to_string()),
        SqlxError::Database(db_err) => {
            if db_err.code().is_some_and(|c| c == UNIQUE_VIOLATION) {
                StorageError::Internal(format!("Duplicate entry: {}", db_err.message()))
            } else {
                StorageError::Query(db_err.to_string())
            }
        }
        SqlxError::PoolTimedOut => StorageError::Connection("Connection pool timeout".to_string()),
        SqlxError::PoolClosed => StorageError::Connection("Connection pool closed".to_string()),
        SqlxError::Io(io) => StorageError::Connection(io.to_string()),
        _ => StorageError::Internal(err.to_string()),
    }
}

/// Converts an insert error for a config record, reporting unique
/// violations as [`StorageError::Duplicate`] on the record's natural key.
pub fn from_insert_error(err: SqlxError, kind: EntityKind, key: &str) -> StorageError {
    let is_unique = err
        .as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|c| c == UNIQUE_VIOLATION);

    if is_unique {
        StorageError::duplicate(kind.as_str(), kind.key_field(), key)
    } else {
        from_sqlx_error(err)
    }
}
