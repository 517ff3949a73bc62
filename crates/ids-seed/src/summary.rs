//! Seeding run results.

use std::fmt;

use chrono::{DateTime, Utc};
use ids_model::EntityKind;
use serde::Serialize;

/// Result of seeding one entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindSummary {
    /// Kind seeded.
    pub kind: EntityKind,
    /// Keys inserted in this run, in catalog order.
    pub inserted: Vec<String>,
    /// Desired entities not inserted because the key already existed or
    /// appeared earlier in the catalog.
    pub skipped: usize,
}

/// Result of a complete seeding run.
#[derive(Debug, Clone, Serialize)]
pub struct SeedSummary {
    /// Per-kind results, in seeding order.
    pub kinds: Vec<KindSummary>,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run completed.
    pub completed_at: DateTime<Utc>,
}

impl SeedSummary {
    /// Creates an empty summary.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            kinds: Vec::new(),
            started_at,
            completed_at: started_at,
        }
    }

    /// Records the result for one kind.
    pub fn record(&mut self, kind: KindSummary) {
        self.kinds.push(kind);
    }

    /// Marks the run as complete.
    #[must_use]
    pub fn complete(mut self) -> Self {
        self.completed_at = Utc::now();
        self
    }

    /// Returns the keys inserted for `kind`.
    #[must_use]
    pub fn inserted(&self, kind: EntityKind) -> &[String] {
        self.find(kind).map_or(&[], |k| k.inserted.as_slice())
    }

    /// Returns the number of skipped entities for `kind`.
    #[must_use]
    pub fn skipped(&self, kind: EntityKind) -> usize {
        self.find(kind).map_or(0, |k| k.skipped)
    }

    /// Total number of inserted entities.
    #[must_use]
    pub fn total_inserted(&self) -> usize {
        self.kinds.iter().map(|k| k.inserted.len()).sum()
    }

    /// Total number of skipped entities.
    #[must_use]
    pub fn total_skipped(&self) -> usize {
        self.kinds.iter().map(|k| k.skipped).sum()
    }

    /// True when the run inserted nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.total_inserted() == 0
    }

    /// Process exit code for a completed run.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn exit_code(&self) -> i32 {
        0
    }

    fn find(&self, kind: EntityKind) -> Option<&KindSummary> {
        self.kinds.iter().find(|k| k.kind == kind)
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Seeding completed: {} inserted, {} skipped",
            self.total_inserted(),
            self.total_skipped()
        )
    }
}
