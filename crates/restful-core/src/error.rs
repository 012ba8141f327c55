//! Error types for the restful core library
//!
//! Validation failures are never reported through this type: a failed rule is
//! data, collected into [`crate::ValidationErrors`]. This enum covers the
//! operational failures around the engine (loading rule sets, building
//! responses, bad status codes).
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Main error type for restful operations
#[derive(Error, Debug)]
pub enum Error {
    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing and serialization errors
    #[error("YAML error: {message}")]
    Yaml {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP response building errors
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: http::Error,
    },

    /// A numeric code that is not a valid HTTP status
    #[error("Invalid HTTP status code: {code}")]
    InvalidStatus { code: u16 },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Malformed declarative rule sets
    #[error("Rule set error: {message}")]
    RuleSet {
        message: String,
        path: Option<String>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a rule set error, optionally tied to the file it came from
    pub fn rule_set(message: impl Into<String>, path: Option<String>) -> Self {
        Error::RuleSet {
            message: message.into(),
            path,
        }
    }
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Error::Http {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidStatus { code: 42 };
        assert_eq!(err.to_string(), "Invalid HTTP status code: 42");

        let err = Error::configuration("unknown locale");
        assert_eq!(err.to_string(), "Configuration error: unknown locale");
    }

    #[test]
    fn test_json_conversion_keeps_source() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Json { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_rule_set_error_carries_path() {
        let err = Error::rule_set("missing field", Some("rules.yaml".to_string()));
        match err {
            Error::RuleSet { path, .. } => assert_eq!(path.as_deref(), Some("rules.yaml")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
