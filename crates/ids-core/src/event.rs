//! Audit events.
//!
//! Account activation and configuration seeding produce structured events.
//! Every event carries a timestamp, its type, the outcome, and the affected
//! identity or resources. Events are written to the `audit` tracing target.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event type categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// A pre-provisioned account was activated with a password.
    Register,
    /// Account activation was rejected.
    RegisterError,
    /// Configuration records were seeded.
    ConfigSeeded,
    /// Configuration seeding failed.
    ConfigSeedError,
}

impl EventType {
    /// Returns the wire name of the event type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Register => "REGISTER",
            Self::RegisterError => "REGISTER_ERROR",
            Self::ConfigSeeded => "CONFIG_SEEDED",
            Self::ConfigSeedError => "CONFIG_SEED_ERROR",
        }
    }
}

/// Outcome of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventOutcome {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Failure,
}

impl EventOutcome {
    /// Returns the wire name of the outcome.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

/// An audit event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// Timestamp of the event.
    pub timestamp: DateTime<Utc>,
    /// Type of event.
    pub event_type: EventType,
    /// Outcome of the event.
    pub outcome: EventOutcome,
    /// Username associated with the event.
    pub username: Option<String>,
    /// Account ID associated with the event.
    pub account_id: Option<Uuid>,
    /// Error message (for failure events).
    pub error: Option<String>,
    /// Additional details as key-value pairs.
    pub details: Vec<(String, String)>,
}

impl Event {
    /// Creates a new event builder.
    #[must_use]
    pub const fn builder(event_type: EventType) -> EventBuilder {
        EventBuilder::new(event_type)
    }

    /// Writes the event to the `audit` tracing target.
    pub fn emit(&self) {
        let details = self
            .details
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(",");
        let account_id = self
            .account_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());

        match self.outcome {
            EventOutcome::Success => tracing::info!(
                target: "audit",
                event_id = %self.id,
                timestamp = %self.timestamp.to_rfc3339(),
                event_type = self.event_type.as_str(),
                outcome = self.outcome.as_str(),
                username = self.username.as_deref().unwrap_or("-"),
                account_id = %account_id,
                details = %details,
                "audit event"
            ),
            EventOutcome::Failure => tracing::warn!(
                target: "audit",
                event_id = %self.id,
                timestamp = %self.timestamp.to_rfc3339(),
                event_type = self.event_type.as_str(),
                outcome = self.outcome.as_str(),
                username = self.username.as_deref().unwrap_or("-"),
                account_id = %account_id,
                error = self.error.as_deref().unwrap_or("-"),
                details = %details,
                "audit event"
            ),
        }
    }
}

/// Builder for creating events.
pub struct EventBuilder {
    event_type: EventType,
    outcome: EventOutcome,
    username: Option<String>,
    account_id: Option<Uuid>,
    error: Option<String>,
    details: Vec<(String, String)>,
}

impl EventBuilder {
    /// Creates a new event builder.
    #[must_use]
    pub const fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            outcome: EventOutcome::Success,
            username: None,
            account_id: None,
            error: None,
            details: Vec::new(),
        }
    }

    /// Sets the outcome to success.
    #[must_use]
    pub const fn success(mut self) -> Self {
        self.outcome = EventOutcome::Success;
        self
    }

    /// Sets the outcome to failure with an error message.
    #[must_use]
    pub fn failure(mut self, error: impl Into<String>) -> Self {
        self.outcome = EventOutcome::Failure;
        self.error = Some(error.into());
        self
    }

    /// Sets the username.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the account ID.
    #[must_use]
    pub const fn account(mut self, account_id: Uuid) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Adds a detail key-value pair.
    #[must_use]
    pub fn detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push((key.into(), value.into()));
        self
    }

    /// Builds the event.
    #[must_use]
    pub fn build(self) -> Event {
        Event {
            id: Uuid::now_v7(),
            timestamp: Utc::now(),
            event_type: self.event_type,
            outcome: self.outcome,
            username: self.username,
            account_id: self.account_id,
            error: self.error,
            details: self.details,
        }
    }
}
