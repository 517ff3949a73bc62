//! End-to-End Integration Tests
//!
//! Account activation and configuration seeding against the in-memory
//! stores, plus `PostgreSQL` runs using testcontainers.

mod common;
mod postgres;
mod registration;
mod seeding;
