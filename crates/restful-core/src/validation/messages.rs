//! Message catalog
//!
//! Turns a failed rule into the sentence reported to API clients. Sentences
//! are assembled from a handful of shared fragments so that wording stays
//! consistent across the catalog.
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

use super::types::{
    FloatOptions, HashAlgorithm, IntOptions, LengthOptions, Rule, DEFAULT_LOCALE,
};
use chrono::{SecondsFormat, Utc};

fn the_field(field: &str) -> String {
    format!("The {} field", field)
}

fn must_be(field: &str) -> String {
    format!("{} must be", the_field(field))
}

fn must_be_a_valid(field: &str) -> String {
    format!("{} a valid", must_be(field))
}

fn must_contains(field: &str) -> String {
    format!("{} must contains", the_field(field))
}

/// A comparison date as rendered in messages; `now` when unset
fn date_or_now(date: Option<&str>) -> String {
    match date {
        Some(date) => date.to_string(),
        None => Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Render the failure message for `rule` on `field`
pub fn render(rule: &Rule, field: &str) -> String {
    match rule {
        Rule::Contains { seed } => contains(field, seed),
        Rule::Equals { comparison } => equals(field, comparison),
        Rule::IsAfter { date } => is_after(field, date.as_deref()),
        Rule::IsAlpha { locale } => is_alpha(field, locale.as_deref()),
        Rule::IsAlphanumeric { locale } => is_alphanumeric(field, locale.as_deref()),
        Rule::IsAscii => format!("{} an ascii string.", must_be(field)),
        Rule::IsBase64 => format!("{} a base64 encoded string.", must_be(field)),
        Rule::IsBefore { date } => is_before(field, date.as_deref()),
        Rule::IsBoolean => format!("{} a boolean.", must_be(field)),
        Rule::IsByteLength(options) => is_byte_length(field, options),
        Rule::IsCreditCard => format!("{} credit card.", must_be_a_valid(field)),
        Rule::IsCurrency => format!("{} currency amount.", must_be_a_valid(field)),
        Rule::IsDataUri => format!("{} must in valid data uri format.", the_field(field)),
        Rule::IsMagnetUri => format!("{} must in valid magnet uri format.", the_field(field)),
        Rule::IsDecimal { locale } => format!(
            "{} a decimal in {} locale.",
            must_be(field),
            locale.as_deref().unwrap_or(DEFAULT_LOCALE)
        ),
        Rule::IsDivisibleBy { number } => format!(
            "{} a number that is divisible by {}.",
            must_be(field),
            number
        ),
        Rule::IsEmail => format!("{} email address.", must_be_a_valid(field)),
        Rule::IsEmpty => format!("{} a string has zero length.", must_be(field)),
        Rule::IsFqdn => format!("{} a fully qualified domain name.", must_be(field)),
        Rule::IsFloat(options) => is_float(field, options),
        Rule::IsFullWidth => format!("{} a full-width character.", must_contains(field)),
        Rule::IsHalfWidth => format!("{} a half-width character.", must_contains(field)),
        Rule::IsHash { algorithm } => is_hash(field, *algorithm),
        Rule::IsHexColor => format!("{} a hexadecimal color.", must_be(field)),
        Rule::IsHexadecimal => format!("{} a hexadecimal number.", must_be(field)),
        Rule::IsIp { .. } => format!("{} an IP (version 4 or 6).", must_be(field)),
        Rule::IsIpRange => format!("{} an IP Range.", must_be(field)),
        Rule::IsIsbn { .. } => format!("{} ISBN.", must_be_a_valid(field)),
        Rule::IsIssn => format!("{} ISSN.", must_be_a_valid(field)),
        Rule::IsIsin => format!("{} ISIN.", must_be_a_valid(field)),
        Rule::IsIso8601 => format!("{} ISO 8601 date.", must_be_a_valid(field)),
        Rule::IsRfc3339 => format!("{} RFC 3339 date.", must_be_a_valid(field)),
        Rule::IsIsrc => format!("{} an ISRC.", must_be(field)),
        Rule::IsIn { values } => is_in(field, values),
        Rule::IsInt(options) => is_int(field, options),
        Rule::IsJson => format!("{} JSON.", must_be_a_valid(field)),
        Rule::IsJwt => format!("{} JWT token.", must_be_a_valid(field)),
        Rule::IsLatLong => format!(
            "{} latitude-longitude coordinate in the format lat,long or lat, long.",
            must_be_a_valid(field)
        ),
        Rule::IsLength(options) => is_length(field, options),
        Rule::IsLowercase => format!("{} a lowercase string.", must_be(field)),
        Rule::IsMacAddress => format!("{} a MAC address.", must_be(field)),
        Rule::IsMd5 => is_hash(field, HashAlgorithm::Md5),
        Rule::IsMimeType => format!("{} MIME type format.", must_be_a_valid(field)),
        Rule::IsMongoId => format!(
            "{} hex-encoded representation of a MongoDB ObjectId.",
            must_be_a_valid(field)
        ),
        Rule::IsMultibyte => format!("{} one or more multibyte chars.", must_contains(field)),
        Rule::IsNumeric => format!("{} only numbers.", must_contains(field)),
        Rule::IsPort => format!("{} port number.", must_be_a_valid(field)),
        Rule::IsSurrogatePair => format!("{} any surrogate pairs chars.", must_contains(field)),
        Rule::IsUrl => format!("{} URL.", must_be_a_valid(field)),
        Rule::IsUuid { .. } => format!("{} an UUID.", must_be(field)),
        Rule::IsUppercase => format!("{} an uppercase string.", must_be(field)),
        Rule::IsVariableWidth => format!(
            "{} a mixture of full and half-width chars.",
            must_contains(field)
        ),
        Rule::IsWhitelisted { chars } => format!(
            "All characters in the {} field must be appeared in the whitelist [{}].",
            field, chars
        ),
        Rule::Matches { pattern, .. } => {
            format!("{} must matches the pattern '{}'.", the_field(field), pattern)
        }
        Rule::Exists => exists(field),
    }
}

pub fn contains(field: &str, seed: &str) -> String {
    format!("{} {}.", must_contains(field), seed)
}

pub fn equals(field: &str, comparison: &str) -> String {
    format!("{} must equal to {}.", the_field(field), comparison)
}

pub fn is_after(field: &str, date: Option<&str>) -> String {
    format!("{} a date after {}.", must_be(field), date_or_now(date))
}

pub fn is_before(field: &str, date: Option<&str>) -> String {
    format!("{} a date before {}.", must_be(field), date_or_now(date))
}

pub fn is_alpha(field: &str, locale: Option<&str>) -> String {
    format!(
        "{} an alpha string in '{}' locale.",
        must_be(field),
        locale.unwrap_or(DEFAULT_LOCALE)
    )
}

pub fn is_alphanumeric(field: &str, locale: Option<&str>) -> String {
    format!(
        "{} an alphanumeric string in '{}' locale.",
        must_be(field),
        locale.unwrap_or(DEFAULT_LOCALE)
    )
}

pub fn is_byte_length(field: &str, options: &LengthOptions) -> String {
    let prefix = format!("The length (in UTF-8 bytes) of {} field", field);
    match (options.min, options.max) {
        (Some(min), Some(max)) => format!("{} must between {} and {}.", prefix, min, max),
        (Some(min), None) => format!("{} must be at least {}.", prefix, min),
        (None, Some(max)) => format!("{} cannot exceed {}.", prefix, max),
        (None, None) => format!("{} must be larger than 0.", prefix),
    }
}

pub fn is_float(field: &str, options: &FloatOptions) -> String {
    match (options.min, options.max) {
        (Some(min), Some(max)) => format!(
            "{} a float with value between {} and {}.",
            must_be(field),
            min,
            max
        ),
        (Some(min), None) => format!("{} a float with value at least {}.", must_be(field), min),
        (None, Some(max)) => {
            format!("{} a float with value cannot exceed {}.", must_be(field), max)
        }
        (None, None) => format!(
            "{} a float in {} locale.",
            must_be(field),
            options.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
        ),
    }
}

pub fn is_hash(field: &str, algorithm: HashAlgorithm) -> String {
    format!(
        "{} a {} hash.",
        must_be(field),
        algorithm.as_str().to_uppercase()
    )
}

/// Note the catalog sentence has no trailing period
pub fn is_in(field: &str, values: &[String]) -> String {
    format!("{} must be one of [{}]", the_field(field), values.join(", "))
}

pub fn is_int(field: &str, options: &IntOptions) -> String {
    match (options.min, options.max) {
        (Some(min), Some(max)) => format!(
            "{} an integer with value between {} and {}.",
            must_be(field),
            min,
            max
        ),
        (Some(min), None) => {
            format!("{} an integer with value at least {}.", must_be(field), min)
        }
        (None, Some(max)) => {
            format!("{} an integer with value cannot exceed {}.", must_be(field), max)
        }
        (None, None) => format!("{} an integer.", must_be(field)),
    }
}

/// Bounds win over an exact length when both are given
pub fn is_length(field: &str, options: &LengthOptions) -> String {
    match (options.min, options.max, options.exact) {
        (Some(min), Some(max), _) => format!(
            "The {} field must be between {} and {} characters in length.",
            field, min, max
        ),
        (Some(min), None, _) => format!(
            "The {} field must be at least {} characters in length.",
            field, min
        ),
        (None, Some(max), _) => format!(
            "The {} field cannot exceed {} characters in length.",
            field, max
        ),
        (None, None, Some(exact)) => format!(
            "The {} field must be {} characters in length.",
            field, exact
        ),
        (None, None, None) => format!("The {} field has invalid length.", field),
    }
}

pub fn exists(field: &str) -> String {
    format!("{} is required.", the_field(field))
}

/// `Either the a field or the b field is required.`
pub fn either_exists<S: AsRef<str>>(fields: &[S]) -> String {
    let joined = fields
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" field or the ");
    format!("Either the {} field is required.", joined)
}

/// Generic message for custom predicates
pub fn valid(field: &str, what: Option<&str>) -> String {
    format!("{} a valid {}.", must_contains(field), what.unwrap_or("value"))
}

fn qualifier(column: Option<&str>, value: Option<&str>) -> String {
    match (column, value) {
        (Some(column), Some(value)) => format!(" ({}={})", column, value),
        _ => String::new(),
    }
}

/// `The user (email=a@b.c) has already existed.`
pub fn conflict(field: &str, column: Option<&str>, value: Option<&str>) -> String {
    format!("The {}{} has already existed.", field, qualifier(column, value))
}

/// `The user (uid=42) is not found.`
pub fn not_found(field: &str, column: Option<&str>, value: Option<&str>) -> String {
    format!("The {}{} is not found.", field, qualifier(column, value))
}
