//! # ids-core
//!
//! Core utilities, configuration, and error handling for the identity server
//! integration sample.
//!
//! This crate provides foundational types used across the other `ids-*`
//! crates: environment-driven configuration, the top-level error type, and
//! the audit event records emitted by account activation and config seeding.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod event;

pub use config::Config;
pub use error::{Error, Result};
pub use event::{Event, EventOutcome, EventType};
