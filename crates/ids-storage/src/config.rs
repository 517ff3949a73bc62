//! Configuration repository capability.

use std::collections::HashSet;

use async_trait::async_trait;
use ids_model::{EntityKind, EntityRecord};

use crate::error::StorageResult;

/// Persistent store of configuration entities, partitioned by [`EntityKind`].
///
/// Implementations must reject an insert that would create a second record
/// with an existing `(kind, key)`.
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Lists the natural keys currently stored for `kind`.
    async fn list_keys(&self, kind: EntityKind) -> StorageResult<HashSet<String>>;

    /// Inserts all records for `kind` as one unit.
    ///
    /// Either every record is stored or none is.
    async fn insert_all(&self, kind: EntityKind, records: Vec<EntityRecord>)
    -> StorageResult<()>;
}
