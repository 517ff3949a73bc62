//! # ids-cli
//!
//! Operator tools for the identity server integration sample.
//!
//! - `ids seed` - insert the missing OAuth/OIDC configuration
//! - `ids activate` - activate a provisioned account from the command line
//! - `ids catalog` - print the quickstart catalog as JSON

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use error::{CliError, CliResult};
