//! Insert-only configuration seeding.
//!
//! Each kind is seeded in two phases: one read of the existing keys, then
//! at most one bulk insert of the entities whose key is missing. Kinds are
//! compared only against their own existing keys.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use ids_core::{Event, EventType};
use ids_model::ConfigEntity;
use ids_storage::ConfigRepository;

use crate::catalog::Catalog;
use crate::error::SeedError;
use crate::summary::{KindSummary, SeedSummary};

/// Returns the desired entities whose key is not in `existing`.
///
/// Repeated keys in `desired` are collapsed; the first one wins.
#[must_use]
pub fn missing_entities<'a, E: ConfigEntity>(
    desired: &'a [E],
    existing: &HashSet<String>,
) -> Vec<&'a E> {
    let mut seen = HashSet::new();
    let mut missing = Vec::new();
    for entity in desired {
        let key = entity.key();
        if !existing.contains(key) && seen.insert(key) {
            missing.push(entity);
        }
    }
    missing
}

/// Seeds `desired` into `store`, inserting only what is missing.
///
/// Kinds are processed in order: clients, identity resources, API resources,
/// API scopes. A failure stops the run; kinds already seeded stay seeded.
pub async fn seed(
    desired: &Catalog,
    store: &dyn ConfigRepository,
) -> Result<SeedSummary, SeedError> {
    let mut summary = SeedSummary::new(Utc::now());

    let result = async {
        summary.record(seed_kind(&desired.clients, store).await?);
        summary.record(seed_kind(&desired.identity_resources, store).await?);
        summary.record(seed_kind(&desired.api_resources, store).await?);
        summary.record(seed_kind(&desired.api_scopes, store).await?);
        Ok::<(), SeedError>(())
    }
    .await;

    if let Err(err) = result {
        tracing::error!(error = %err, "configuration seeding failed");
        Event::builder(EventType::ConfigSeedError)
            .failure(err.to_string())
            .detail("kind", err.kind().map_or("", |k| k.as_str()))
            .build()
            .emit();
        return Err(err);
    }

    let summary = summary.complete();
    tracing::info!(
        inserted = summary.total_inserted(),
        skipped = summary.total_skipped(),
        "configuration seeded"
    );

    let mut event = Event::builder(EventType::ConfigSeeded).success();
    for kind in &summary.kinds {
        event = event.detail(kind.kind.as_str(), kind.inserted.len().to_string());
    }
    event.build().emit();

    Ok(summary)
}

async fn seed_kind<E: ConfigEntity + Sync>(
    desired: &[E],
    store: &dyn ConfigRepository,
) -> Result<KindSummary, SeedError> {
    let kind = E::KIND;

    let existing = store
        .list_keys(kind)
        .await
        .map_err(|source| SeedError::ReadFailed { kind, source })?;

    let missing = missing_entities(desired, &existing);
    let skipped = desired.len() - missing.len();

    if missing.is_empty() {
        tracing::debug!(kind = %kind, skipped, "nothing to seed");
        return Ok(KindSummary {
            kind,
            inserted: Vec::new(),
            skipped,
        });
    }

    let records = missing
        .iter()
        .map(|e| e.to_record())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| SeedError::Conversion { kind, source })?;
    let inserted: Vec<String> = records.iter().map(|r| r.key.clone()).collect();

    store
        .insert_all(kind, records)
        .await
        .map_err(|source| SeedError::WriteFailed { kind, source })?;

    tracing::info!(kind = %kind, inserted = inserted.len(), skipped, "seeded missing entities");

    Ok(KindSummary {
        kind,
        inserted,
        skipped,
    })
}

/// Seeds a fixed repository.
#[derive(Clone)]
pub struct ConfigSeeder {
    store: Arc<dyn ConfigRepository>,
}

impl ConfigSeeder {
    /// Creates a seeder over the given repository.
    #[must_use]
    pub fn new(store: Arc<dyn ConfigRepository>) -> Self {
        Self { store }
    }

    /// Seeds `desired`. See [`seed`].
    pub async fn seed(&self, desired: &Catalog) -> Result<SeedSummary, SeedError> {
        seed(desired, self.store.as_ref()).await
    }
}
