//! Declarative rule sets
//!
//! A rule set is the data form of a chain of validator calls, loaded from
//! YAML or JSON:
//!
//! ```yaml
//! checks:
//!   - field: uid
//!     location: params
//!     rules:
//!       - rule: exists
//!       - rule: isUUID
//!         version: 4
//!     message: "A valid uid is required."
//! ```
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

use super::accumulator::ValidationErrors;
use super::request::RequestContext;
use super::session::Validator;
use super::types::{FieldLocation, Rule};
use crate::config::ValidatorConfig;
use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Supported rule set file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(Error::rule_set(
                "unsupported rule set format, expected .yaml, .yml or .json",
                Some(path.display().to_string()),
            )),
        }
    }
}

/// Rules applied to one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCheck {
    pub field: String,
    /// Omitted means body, then query, then params
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<FieldLocation>,
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// Replaces the failure message of this chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldCheck {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            location: None,
            rules: Vec::new(),
            message: None,
        }
    }

    pub fn at(mut self, location: FieldLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Run this check's chain on `validator`
    pub fn apply(&self, validator: &mut Validator, request: &RequestContext) {
        match self.location {
            Some(FieldLocation::Body) => validator.body(request, &self.field),
            Some(FieldLocation::Query) => validator.query(request, &self.field),
            Some(FieldLocation::Path) => validator.path(request, &self.field),
            None => validator.check(request, &self.field),
        };
        for rule in &self.rules {
            validator.rule(rule.clone());
        }
        if let Some(message) = &self.message {
            validator.with_message(message.clone());
        }
    }
}

/// An ordered list of field checks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub checks: Vec<FieldCheck>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check(mut self, check: FieldCheck) -> Self {
        self.checks.push(check);
        self
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let rule_set: RuleSet = serde_yaml::from_str(content)?;
        rule_set.verify(None)?;
        Ok(rule_set)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let rule_set: RuleSet = serde_json::from_str(content)?;
        rule_set.verify(None)?;
        Ok(rule_set)
    }

    /// Load a rule set file, detecting format from extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let rule_set: RuleSet = match format {
            Format::Yaml => serde_yaml::from_str(&content)?,
            Format::Json => serde_json::from_str(&content)?,
        };
        rule_set.verify(Some(path))?;
        debug!(path = %path.display(), checks = rule_set.checks.len(), "Loaded rule set");
        Ok(rule_set)
    }

    /// Reject definitions that could never run as intended
    fn verify(&self, path: Option<&Path>) -> Result<()> {
        let origin = || path.map(|p| p.display().to_string());
        for (index, check) in self.checks.iter().enumerate() {
            if check.field.trim().is_empty() {
                return Err(Error::rule_set(
                    format!("check #{} has an empty field name", index + 1),
                    origin(),
                ));
            }
            for rule in &check.rules {
                if let Rule::Matches { pattern, .. } = rule {
                    if let Err(err) = Regex::new(pattern) {
                        return Err(Error::rule_set(
                            format!("invalid pattern for field '{}': {}", check.field, err),
                            origin(),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check on `validator`, leaving the last selection uncommitted
    pub fn apply(&self, validator: &mut Validator, request: &RequestContext) {
        for check in &self.checks {
            check.apply(validator, request);
        }
    }

    /// Run every check in a fresh session and collect the errors
    pub fn validate(&self, request: &RequestContext) -> ValidationErrors {
        self.validate_with(request, ValidatorConfig::default())
    }

    pub fn validate_with(&self, request: &RequestContext, config: ValidatorConfig) -> ValidationErrors {
        let mut validator = Validator::with_config(config);
        self.apply(&mut validator, request);
        validator.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::types::{IntOptions, UuidVersion};
    use std::io::Write;

    const UID_RULES: &str = r#"
checks:
  - field: uid
    location: params
    rules:
      - rule: exists
      - rule: isUUID
        version: 4
  - field: limit
    rules:
      - rule: isInt
        min: 1
        max: 100
    message: "Bad limit."
"#;

    #[test]
    fn test_parse_yaml() {
        let rule_set = RuleSet::from_yaml_str(UID_RULES).unwrap();
        assert_eq!(rule_set.len(), 2);
        assert_eq!(rule_set.checks[0].location, Some(FieldLocation::Path));
        assert_eq!(
            rule_set.checks[0].rules,
            vec![Rule::Exists, Rule::IsUuid { version: Some(UuidVersion::V4) }]
        );
        assert_eq!(rule_set.checks[1].rules, vec![Rule::IsInt(IntOptions::between(1, 100))]);
        assert_eq!(rule_set.checks[1].message.as_deref(), Some("Bad limit."));
    }

    #[test]
    fn test_validate_applies_message_override() {
        let rule_set = RuleSet::from_yaml_str(UID_RULES).unwrap();
        let request = RequestContext::new()
            .with_path("uid", "a3bb189e-8bf9-4888-9912-ace4e6543002")
            .with_query("limit", "500");
        let errors = rule_set.validate(&request);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.as_slice()[0].location, FieldLocation::Query);
        assert_eq!(errors.describe(), "Bad limit.");
    }

    #[test]
    fn test_rejects_unknown_rule() {
        let err = RuleSet::from_json_str(r#"{"checks": [{"field": "a", "rules": [{"rule": "isNope"}]}]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_rejects_empty_field_and_bad_pattern() {
        let err = RuleSet::from_json_str(r#"{"checks": [{"field": " "}]}"#).unwrap_err();
        assert!(matches!(err, Error::RuleSet { .. }));

        let err = RuleSet::from_yaml_str(
            "checks:\n  - field: code\n    rules:\n      - rule: matches\n        pattern: \"(\"\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid pattern for field 'code'"));
    }

    #[test]
    fn test_from_path_detects_format() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"checks": [{{"field": "age", "rules": [{{"rule": "isInt"}}]}}]}}"#).unwrap();
        let rule_set = RuleSet::from_path(file.path()).unwrap();
        assert_eq!(rule_set.checks[0].rules, vec![Rule::IsInt(IntOptions::default())]);

        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let err = RuleSet::from_path(file.path()).unwrap_err();
        match err {
            Error::RuleSet { path, .. } => assert!(path.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_builder_round_trip() {
        let rule_set = RuleSet::new().with_check(
            FieldCheck::new("email")
                .at(FieldLocation::Body)
                .with_rule(Rule::IsEmail)
                .with_message("Bad email."),
        );
        let yaml = serde_yaml::to_string(&rule_set).unwrap();
        assert_eq!(RuleSet::from_yaml_str(&yaml).unwrap(), rule_set);
    }
}
