//! Validation session
//!
//! [`Validator`] ties a [`FieldCursor`] to a [`ValidationErrors`]
//! accumulator. Selecting a field commits whatever the previous selection
//! recorded, rule methods evaluate against the selected value, and a terminal
//! call hands back every collected error:
//!
//! ```
//! use restful_core::{RequestContext, Validator};
//!
//! let request = RequestContext::new().with_body("age", "abc");
//! let mut validator = Validator::new();
//! validator.body(&request, "age").exists().is_int(Default::default());
//! validator.path(&request, "uid").exists();
//!
//! let errors = validator.finish();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(
//!     errors.describe(),
//!     "The age field must be an integer. The uid field is required."
//! );
//! ```
//!
//! A session is a per-request value. Reusing one after abandoning a chain
//! half way requires [`Validator::reset`].
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

use super::accumulator::ValidationErrors;
use super::cursor::FieldCursor;
use super::messages;
use super::predicates::{self, value_as_text};
use super::request::RequestContext;
use super::types::{
    FieldLocation, FloatOptions, HashAlgorithm, IntOptions, IpVersion, IsbnVersion,
    LengthOptions, Rule, UuidVersion,
};
use crate::config::ValidatorConfig;
use serde_json::Value;
use tracing::{debug, trace};

/// Per-request validation session with a fluent rule API
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
    cursor: FieldCursor,
    errors: ValidationErrors,
}

impl Validator {
    /// Create a session with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a custom configuration
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The field currently under test
    pub fn cursor(&self) -> &FieldCursor {
        &self.cursor
    }

    /// Errors committed so far, not including the current selection
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    fn commit(&mut self) {
        if let Some(error) = self.cursor.to_field_error() {
            trace!(field = %error.field, location = %error.location, "Committing field error");
            self.errors.commit(Some(error));
        }
    }

    /// Commit, then select. An empty string is held as no value.
    fn select(&mut self, location: FieldLocation, field: &str, value: Option<Value>) -> &mut Self {
        self.commit();
        let value = value.filter(|value| value.as_str() != Some(""));
        self.cursor.select(location, field, value);
        self
    }

    /// Select `field` from the first location that holds it
    ///
    /// Lookup order is body, query, then path. A field present nowhere is
    /// still selected, with no value, under the configured fallback location.
    pub fn check(&mut self, request: &RequestContext, field: &str) -> &mut Self {
        match request.locate(field) {
            Some((location, value)) => {
                let value = value.clone();
                self.select(location, field, Some(value))
            }
            None => {
                let fallback = self.config.fallback_location;
                self.select(fallback, field, None)
            }
        }
    }

    /// Select `field` from the request body
    pub fn body(&mut self, request: &RequestContext, field: &str) -> &mut Self {
        let value = request.get(FieldLocation::Body, field).cloned();
        self.select(FieldLocation::Body, field, value)
    }

    /// Select `field` from the query string
    pub fn query(&mut self, request: &RequestContext, field: &str) -> &mut Self {
        let value = request.get(FieldLocation::Query, field).cloned();
        self.select(FieldLocation::Query, field, value)
    }

    /// Select `field` from the route parameters
    pub fn path(&mut self, request: &RequestContext, field: &str) -> &mut Self {
        let value = request.get(FieldLocation::Path, field).cloned();
        self.select(FieldLocation::Path, field, value)
    }

    /// Apply a catalog rule to the selected field
    ///
    /// Absent values satisfy every rule except [`Rule::Exists`]. Every rule
    /// is evaluated, but only the first failure of a selection is recorded.
    pub fn rule(&mut self, mut rule: Rule) -> &mut Self {
        rule.fill_default_locale(&self.config.default_locale);

        let message = match self.cursor.field() {
            Some(field) => {
                let failed = match (&rule, self.cursor.value()) {
                    (Rule::Exists, value) => value.is_none(),
                    (_, None) => false,
                    (_, Some(value)) => !predicates::evaluate(&rule, &value_as_text(value)),
                };
                if !failed || self.cursor.has_failure() {
                    return self;
                }
                messages::render(&rule, field)
            }
            None => {
                trace!(rule = rule.name(), "Rule applied with no field selected");
                return self;
            }
        };

        if self.cursor.record_failure(message) {
            debug!(
                field = self.cursor.field().unwrap_or_default(),
                rule = rule.name(),
                "Field check failed"
            );
        }
        self
    }

    /// Fail when the selected field is missing
    pub fn exists(&mut self) -> &mut Self {
        self.rule(Rule::Exists)
    }

    /// Fail when `predicate` rejects the selected value
    pub fn custom<F>(&mut self, predicate: F) -> &mut Self
    where
        F: FnOnce(&Value) -> bool,
    {
        let failed = match self.cursor.value() {
            Some(value) => !predicate(value),
            None => false,
        };
        if failed && !self.cursor.has_failure() {
            if let Some(field) = self.cursor.field() {
                let message = messages::valid(field, None);
                self.cursor.record_failure(message);
            }
        }
        self
    }

    /// End the field chain, replacing its failure message if it has one
    ///
    /// The current selection is committed and the cursor cleared. Errors
    /// already committed are kept. Rules chained after this call have no
    /// field selected and are ignored, so a message override must come last.
    pub fn with_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.cursor.override_message(message);
        self.commit();
        self.cursor.reset();
        self
    }

    /// Clear the cursor and every collected error
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.errors.reset();
    }

    /// Commit the selection, take every error and reset the session
    pub fn validation_result(&mut self) -> ValidationErrors {
        self.commit();
        let snapshot = self.errors.snapshot();
        self.reset();
        snapshot
    }

    /// Consume the session and return every error
    pub fn finish(mut self) -> ValidationErrors {
        self.commit();
        self.errors
    }

    /// No committed errors and no failure pending on the cursor
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && !self.cursor.has_failure()
    }

    pub fn contains(&mut self, seed: impl Into<String>) -> &mut Self {
        self.rule(Rule::Contains { seed: seed.into() })
    }

    pub fn equals(&mut self, comparison: impl Into<String>) -> &mut Self {
        self.rule(Rule::Equals {
            comparison: comparison.into(),
        })
    }

    /// Date after `date`, or after now
    pub fn is_after(&mut self, date: Option<&str>) -> &mut Self {
        self.rule(Rule::IsAfter {
            date: date.map(str::to_string),
        })
    }

    pub fn is_alpha(&mut self, locale: Option<&str>) -> &mut Self {
        self.rule(Rule::IsAlpha {
            locale: locale.map(str::to_string),
        })
    }

    pub fn is_alphanumeric(&mut self, locale: Option<&str>) -> &mut Self {
        self.rule(Rule::IsAlphanumeric {
            locale: locale.map(str::to_string),
        })
    }

    pub fn is_ascii(&mut self) -> &mut Self {
        self.rule(Rule::IsAscii)
    }

    pub fn is_base64(&mut self) -> &mut Self {
        self.rule(Rule::IsBase64)
    }

    /// Date before `date`, or before now
    pub fn is_before(&mut self, date: Option<&str>) -> &mut Self {
        self.rule(Rule::IsBefore {
            date: date.map(str::to_string),
        })
    }

    pub fn is_boolean(&mut self) -> &mut Self {
        self.rule(Rule::IsBoolean)
    }

    pub fn is_byte_length(&mut self, options: LengthOptions) -> &mut Self {
        self.rule(Rule::IsByteLength(options))
    }

    pub fn is_credit_card(&mut self) -> &mut Self {
        self.rule(Rule::IsCreditCard)
    }

    pub fn is_currency(&mut self) -> &mut Self {
        self.rule(Rule::IsCurrency)
    }

    pub fn is_data_uri(&mut self) -> &mut Self {
        self.rule(Rule::IsDataUri)
    }

    pub fn is_magnet_uri(&mut self) -> &mut Self {
        self.rule(Rule::IsMagnetUri)
    }

    pub fn is_decimal(&mut self, locale: Option<&str>) -> &mut Self {
        self.rule(Rule::IsDecimal {
            locale: locale.map(str::to_string),
        })
    }

    pub fn is_divisible_by(&mut self, number: i64) -> &mut Self {
        self.rule(Rule::IsDivisibleBy { number })
    }

    pub fn is_email(&mut self) -> &mut Self {
        self.rule(Rule::IsEmail)
    }

    pub fn is_empty(&mut self) -> &mut Self {
        self.rule(Rule::IsEmpty)
    }

    pub fn is_fqdn(&mut self) -> &mut Self {
        self.rule(Rule::IsFqdn)
    }

    pub fn is_float(&mut self, options: FloatOptions) -> &mut Self {
        self.rule(Rule::IsFloat(options))
    }

    pub fn is_full_width(&mut self) -> &mut Self {
        self.rule(Rule::IsFullWidth)
    }

    pub fn is_half_width(&mut self) -> &mut Self {
        self.rule(Rule::IsHalfWidth)
    }

    pub fn is_hash(&mut self, algorithm: HashAlgorithm) -> &mut Self {
        self.rule(Rule::IsHash { algorithm })
    }

    pub fn is_hex_color(&mut self) -> &mut Self {
        self.rule(Rule::IsHexColor)
    }

    pub fn is_hexadecimal(&mut self) -> &mut Self {
        self.rule(Rule::IsHexadecimal)
    }

    pub fn is_ip(&mut self, version: Option<IpVersion>) -> &mut Self {
        self.rule(Rule::IsIp { version })
    }

    pub fn is_ip_range(&mut self) -> &mut Self {
        self.rule(Rule::IsIpRange)
    }

    pub fn is_isbn(&mut self, version: Option<IsbnVersion>) -> &mut Self {
        self.rule(Rule::IsIsbn { version })
    }

    pub fn is_issn(&mut self) -> &mut Self {
        self.rule(Rule::IsIssn)
    }

    pub fn is_isin(&mut self) -> &mut Self {
        self.rule(Rule::IsIsin)
    }

    pub fn is_iso8601(&mut self) -> &mut Self {
        self.rule(Rule::IsIso8601)
    }

    pub fn is_rfc3339(&mut self) -> &mut Self {
        self.rule(Rule::IsRfc3339)
    }

    pub fn is_isrc(&mut self) -> &mut Self {
        self.rule(Rule::IsIsrc)
    }

    pub fn is_in<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule(Rule::IsIn {
            values: values.into_iter().map(Into::into).collect(),
        })
    }

    pub fn is_int(&mut self, options: IntOptions) -> &mut Self {
        self.rule(Rule::IsInt(options))
    }

    pub fn is_json(&mut self) -> &mut Self {
        self.rule(Rule::IsJson)
    }

    pub fn is_jwt(&mut self) -> &mut Self {
        self.rule(Rule::IsJwt)
    }

    pub fn is_lat_long(&mut self) -> &mut Self {
        self.rule(Rule::IsLatLong)
    }

    pub fn is_length(&mut self, options: LengthOptions) -> &mut Self {
        self.rule(Rule::IsLength(options))
    }

    pub fn is_lowercase(&mut self) -> &mut Self {
        self.rule(Rule::IsLowercase)
    }

    pub fn is_mac_address(&mut self) -> &mut Self {
        self.rule(Rule::IsMacAddress)
    }

    pub fn is_md5(&mut self) -> &mut Self {
        self.rule(Rule::IsMd5)
    }

    pub fn is_mime_type(&mut self) -> &mut Self {
        self.rule(Rule::IsMimeType)
    }

    pub fn is_mongo_id(&mut self) -> &mut Self {
        self.rule(Rule::IsMongoId)
    }

    pub fn is_multibyte(&mut self) -> &mut Self {
        self.rule(Rule::IsMultibyte)
    }

    pub fn is_numeric(&mut self) -> &mut Self {
        self.rule(Rule::IsNumeric)
    }

    pub fn is_port(&mut self) -> &mut Self {
        self.rule(Rule::IsPort)
    }

    pub fn is_surrogate_pair(&mut self) -> &mut Self {
        self.rule(Rule::IsSurrogatePair)
    }

    pub fn is_url(&mut self) -> &mut Self {
        self.rule(Rule::IsUrl)
    }

    pub fn is_uuid(&mut self, version: Option<UuidVersion>) -> &mut Self {
        self.rule(Rule::IsUuid { version })
    }

    pub fn is_uppercase(&mut self) -> &mut Self {
        self.rule(Rule::IsUppercase)
    }

    pub fn is_variable_width(&mut self) -> &mut Self {
        self.rule(Rule::IsVariableWidth)
    }

    pub fn is_whitelisted(&mut self, chars: impl Into<String>) -> &mut Self {
        self.rule(Rule::IsWhitelisted {
            chars: chars.into(),
        })
    }

    /// Search `pattern` in the value; `flags` takes `i`, `m`, `s`, `x`
    pub fn matches(&mut self, pattern: impl Into<String>, flags: Option<&str>) -> &mut Self {
        self.rule(Rule::Matches {
            pattern: pattern.into(),
            flags: flags.map(str::to_string),
        })
    }
}
