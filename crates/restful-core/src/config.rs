//! Validator configuration
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::validation::types::{FieldLocation, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};

/// Knobs that change how a [`crate::Validator`] reports and evaluates fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Location reported for fields that are missing from every location
    pub fallback_location: FieldLocation,
    /// Locale filled into locale-aware rules that do not name one
    pub default_locale: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            fallback_location: FieldLocation::Path,
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback_location(mut self, location: FieldLocation) -> Self {
        self.fallback_location = location;
        self
    }

    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Reject settings the predicates cannot honour
    pub fn validate(&self) -> Result<()> {
        let locale = self.default_locale.trim();
        if locale.is_empty() {
            return Err(Error::configuration("default_locale must not be empty"));
        }
        if !crate::validation::predicates::is_supported_locale(locale) {
            return Err(Error::configuration(format!(
                "unsupported default_locale '{}'",
                locale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.fallback_location, FieldLocation::Path);
        assert_eq!(config.default_locale, "en-US");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: ValidatorConfig =
            serde_yaml::from_str("fallback_location: query\n").unwrap();
        assert_eq!(config.fallback_location, FieldLocation::Query);
        assert_eq!(config.default_locale, "en-US");
    }

    #[test]
    fn test_validate_rejects_unknown_locale() {
        let config = ValidatorConfig::new().with_default_locale("xx-XX");
        assert!(matches!(config.validate(), Err(Error::Configuration { .. })));
        assert!(ValidatorConfig::new().with_default_locale("de-DE").validate().is_ok());
    }
}
