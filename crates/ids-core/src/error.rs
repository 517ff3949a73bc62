//! Error handling shared by the `ids-*` crates.
//!
//! Error messages are informative for operators without echoing
//! user-supplied secrets.

use thiserror::Error;

/// Result type alias using the core error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration and bootstrap errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required environment variable is missing.
    #[error("missing required setting: {0}")]
    MissingSetting(&'static str),

    /// An environment variable could not be parsed.
    #[error("invalid value for {name}: '{value}'")]
    InvalidSetting {
        /// Variable name.
        name: &'static str,
        /// Raw value that failed to parse.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_setting_names_variable() {
        let err = Error::MissingSetting("DATABASE_URL");
        assert_eq!(err.to_string(), "missing required setting: DATABASE_URL");
    }

    #[test]
    fn invalid_setting_echoes_value() {
        let err = Error::InvalidSetting {
            name: "IDS_DB_MAX_CONNECTIONS",
            value: "many".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for IDS_DB_MAX_CONNECTIONS: 'many'"
        );
    }
}
