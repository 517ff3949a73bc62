//! End-to-end tests for the `ids-*` crates.
//!
//! The tests live in `tests/`; run them with `cargo test -p ids-integration-tests`.
//! Tests against `PostgreSQL` need Docker and are ignored by default.
