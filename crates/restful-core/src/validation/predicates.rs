//! Predicate library
//!
//! Pure boolean checks over a field's textual value, one per catalog rule.
//! The session never calls these directly; it goes through [`evaluate`],
//! which dispatches on the [`Rule`] variant.
//!
//! Values reach the predicates as text: strings verbatim, numbers and
//! booleans in their JSON spelling, arrays and objects as compact JSON
//! (see [`value_as_text`]).
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

use super::types::{
    FloatOptions, HashAlgorithm, IntOptions, IpVersion, IsbnVersion, LengthOptions, Rule,
    UuidVersion, DEFAULT_LOCALE,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;

/// Compile a pattern once and hand out the shared instance
macro_rules! static_regex {
    ($pattern:expr) => {{
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new($pattern).expect("static validation pattern must compile"))
    }};
}

/// Textual form of a raw request value, as seen by predicates
pub fn value_as_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Null => Cow::Borrowed(""),
        Value::Number(n) => Cow::Owned(n.to_string()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Evaluate `rule` against `value`
///
/// `Rule::Exists` is about absence, which the session decides before a value
/// ever reaches a predicate, so it is vacuously true here.
pub fn evaluate(rule: &Rule, value: &str) -> bool {
    match rule {
        Rule::Contains { seed } => contains(value, seed),
        Rule::Equals { comparison } => equals(value, comparison),
        Rule::IsAfter { date } => is_after(value, date.as_deref()),
        Rule::IsAlpha { locale } => is_alpha(value, locale.as_deref().unwrap_or(DEFAULT_LOCALE)),
        Rule::IsAlphanumeric { locale } => {
            is_alphanumeric(value, locale.as_deref().unwrap_or(DEFAULT_LOCALE))
        }
        Rule::IsAscii => is_ascii(value),
        Rule::IsBase64 => is_base64(value),
        Rule::IsBefore { date } => is_before(value, date.as_deref()),
        Rule::IsBoolean => is_boolean(value),
        Rule::IsByteLength(options) => is_byte_length(value, options),
        Rule::IsCreditCard => is_credit_card(value),
        Rule::IsCurrency => is_currency(value),
        Rule::IsDataUri => is_data_uri(value),
        Rule::IsMagnetUri => is_magnet_uri(value),
        Rule::IsDecimal { locale } => {
            is_decimal(value, locale.as_deref().unwrap_or(DEFAULT_LOCALE))
        }
        Rule::IsDivisibleBy { number } => is_divisible_by(value, *number),
        Rule::IsEmail => is_email(value),
        Rule::IsEmpty => is_empty(value),
        Rule::IsFqdn => is_fqdn(value),
        Rule::IsFloat(options) => is_float(value, options),
        Rule::IsFullWidth => is_full_width(value),
        Rule::IsHalfWidth => is_half_width(value),
        Rule::IsHash { algorithm } => is_hash(value, *algorithm),
        Rule::IsHexColor => is_hex_color(value),
        Rule::IsHexadecimal => is_hexadecimal(value),
        Rule::IsIp { version } => is_ip(value, *version),
        Rule::IsIpRange => is_ip_range(value),
        Rule::IsIsbn { version } => is_isbn(value, *version),
        Rule::IsIssn => is_issn(value),
        Rule::IsIsin => is_isin(value),
        Rule::IsIso8601 => is_iso8601(value),
        Rule::IsRfc3339 => is_rfc3339(value),
        Rule::IsIsrc => is_isrc(value),
        Rule::IsIn { values } => is_in(value, values),
        Rule::IsInt(options) => is_int(value, options),
        Rule::IsJson => is_json(value),
        Rule::IsJwt => is_jwt(value),
        Rule::IsLatLong => is_lat_long(value),
        Rule::IsLength(options) => is_length(value, options),
        Rule::IsLowercase => is_lowercase(value),
        Rule::IsMacAddress => is_mac_address(value),
        Rule::IsMd5 => is_hash(value, HashAlgorithm::Md5),
        Rule::IsMimeType => is_mime_type(value),
        Rule::IsMongoId => is_mongo_id(value),
        Rule::IsMultibyte => is_multibyte(value),
        Rule::IsNumeric => is_numeric(value),
        Rule::IsPort => is_port(value),
        Rule::IsSurrogatePair => is_surrogate_pair(value),
        Rule::IsUrl => is_url(value),
        Rule::IsUuid { version } => is_uuid(value, *version),
        Rule::IsUppercase => is_uppercase(value),
        Rule::IsVariableWidth => is_variable_width(value),
        Rule::IsWhitelisted { chars } => is_whitelisted(value, chars),
        Rule::Matches { pattern, flags } => matches(value, pattern, flags.as_deref()),
        Rule::Exists => true,
    }
}

pub fn contains(value: &str, seed: &str) -> bool {
    value.contains(seed)
}

pub fn equals(value: &str, comparison: &str) -> bool {
    value == comparison
}

/// Parse the date spellings handlers commonly receive
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn comparison_date(date: Option<&str>) -> Option<DateTime<Utc>> {
    match date {
        Some(date) => parse_date(date),
        None => Some(Utc::now()),
    }
}

pub fn is_after(value: &str, date: Option<&str>) -> bool {
    match (parse_date(value), comparison_date(date)) {
        (Some(value), Some(comparison)) => value > comparison,
        _ => false,
    }
}

pub fn is_before(value: &str, date: Option<&str>) -> bool {
    match (parse_date(value), comparison_date(date)) {
        (Some(value), Some(comparison)) => value < comparison,
        _ => false,
    }
}

/// Whether `c` is a letter of `locale`'s alphabet; `None` for unknown locales
fn locale_letter(locale: &str, c: char) -> Option<bool> {
    let extra: &str = match locale {
        l if l == "en" || l.starts_with("en-") => "",
        "de-DE" => "äöüßÄÖÜ",
        "es-ES" => "áéíñóúüÁÉÍÑÓÚÜ",
        "fr-FR" => "àâæçéèêëïîôœùûüÿÀÂÆÇÉÈÊËÏÎÔŒÙÛÜŸ",
        "it-IT" => "àéèìîóòùÀÉÈÌÎÓÒÙ",
        "nl-NL" => "áéëïóöüúÁÉËÏÓÖÜÚ",
        "pt-BR" | "pt-PT" => "ãáàâäçéêëíïõóôöúüÃÁÀÂÄÇÉÊËÍÏÕÓÔÖÚÜ",
        "sv-SE" => "åäöÅÄÖ",
        "ru-RU" => {
            return Some(matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё'));
        }
        _ => return None,
    };
    Some(c.is_ascii_alphabetic() || extra.contains(c))
}

/// Whether the locale-aware checks know `locale`
pub fn is_supported_locale(locale: &str) -> bool {
    locale_letter(locale, 'a').is_some()
}

fn all_chars_in_locale(value: &str, locale: &str, digits: bool) -> bool {
    !value.is_empty()
        && value.chars().all(|c| {
            (digits && c.is_ascii_digit()) || locale_letter(locale, c).unwrap_or(false)
        })
}

pub fn is_alpha(value: &str, locale: &str) -> bool {
    all_chars_in_locale(value, locale, false)
}

pub fn is_alphanumeric(value: &str, locale: &str) -> bool {
    all_chars_in_locale(value, locale, true)
}

pub fn is_ascii(value: &str) -> bool {
    !value.is_empty() && value.is_ascii()
}

pub fn is_base64(value: &str) -> bool {
    let re = static_regex!(
        r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$"
    );
    !value.is_empty() && value.len() % 4 == 0 && re.is_match(value)
}

pub fn is_boolean(value: &str) -> bool {
    matches!(value, "true" | "false" | "1" | "0")
}

pub fn is_byte_length(value: &str, options: &LengthOptions) -> bool {
    options.accepts(value.len())
}

/// Luhn checksum over a string of ASCII digits
fn luhn(digits: &str) -> bool {
    let mut sum = 0u32;
    for (i, c) in digits.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    !digits.is_empty() && sum % 10 == 0
}

pub fn is_credit_card(value: &str) -> bool {
    let re = static_regex!(
        r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|(?:222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}|6(?:011|5[0-9][0-9])[0-9]{12}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|(?:2131|1800|35[0-9]{3})[0-9]{11}|6[27][0-9]{14})$"
    );
    let sanitized: String = value.chars().filter(|c| *c != ' ' && *c != '-').collect();
    re.is_match(&sanitized) && luhn(&sanitized)
}

pub fn is_currency(value: &str) -> bool {
    let re = static_regex!(
        r"^(?:-?\$?|\$-?)(?:0|[1-9][0-9]{0,2}(?:,[0-9]{3})*|[1-9][0-9]*)(?:\.[0-9]{1,2})?$"
    );
    !value.is_empty() && re.is_match(value)
}

pub fn is_data_uri(value: &str) -> bool {
    let re = static_regex!(
        r"(?i)^\s*data:(?:[a-z]+/[a-z0-9\-+.]+(?:;[a-z\-]+=[a-z0-9\-]+)*)?(?:;base64)?,[a-z0-9!$&',()*+;=\-._~:@/?%\s]*\s*$"
    );
    re.is_match(value)
}

pub fn is_magnet_uri(value: &str) -> bool {
    let re = static_regex!(
        r"(?i)^magnet:\?xt(?:\.1)?=urn:(?:aich|bitprint|btih|ed2k|ed2khash|kzhash|md5|sha1|tree:tiger):[a-z0-9]{32}(?:[a-z0-9]{8})?(?:$|&)"
    );
    re.is_match(value.trim())
}

/// Decimal separator for a locale; `None` for unknown locales
fn decimal_separator(locale: &str) -> Option<char> {
    match locale {
        l if l == "en" || l.starts_with("en-") => Some('.'),
        "de-DE" | "es-ES" | "fr-FR" | "it-IT" | "nl-NL" | "pt-BR" | "pt-PT" | "ru-RU"
        | "sv-SE" => Some(','),
        _ => None,
    }
}

pub fn is_decimal(value: &str, locale: &str) -> bool {
    let re = match decimal_separator(locale) {
        Some('.') => static_regex!(r"^[-+]?(?:[0-9]+)?(?:\.[0-9]+)?$"),
        Some(_) => static_regex!(r"^[-+]?(?:[0-9]+)?(?:,[0-9]+)?$"),
        None => return false,
    };
    !matches!(value, "" | "-" | "+") && re.is_match(value)
}

pub fn is_divisible_by(value: &str, number: i64) -> bool {
    if number == 0 || !is_float(value, &FloatOptions::default()) {
        return false;
    }
    value
        .parse::<f64>()
        .map(|v| v % number as f64 == 0.0)
        .unwrap_or(false)
}

pub fn is_email(value: &str) -> bool {
    let re = static_regex!(
        r#"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$"#
    );
    let Some((local, _)) = value.rsplit_once('@') else {
        return false;
    };
    local.len() <= 64 && value.len() <= 254 && re.is_match(value)
}

pub fn is_empty(value: &str) -> bool {
    value.is_empty()
}

pub fn is_fqdn(value: &str) -> bool {
    let label_re = static_regex!(r"(?i)^[a-z\x{00a1}-\x{ffff}0-9-]+$");
    let tld_re = static_regex!(r"(?i)^(?:[a-z\x{00a1}-\x{ffff}]{2,}|xn[a-z0-9-]{2,})$");

    let labels: Vec<&str> = value.split('.').collect();
    if labels.len() < 2 || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(tld) = labels.last() else {
        return false;
    };
    if !tld_re.is_match(tld) {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label_re.is_match(label)
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

pub fn is_float(value: &str, options: &FloatOptions) -> bool {
    let separator = match decimal_separator(options.locale.as_deref().unwrap_or(DEFAULT_LOCALE)) {
        Some(separator) => separator,
        None => return false,
    };
    let re = if separator == '.' {
        static_regex!(r"^[-+]?(?:[0-9]+)?(?:\.[0-9]*)?(?:[eE][-+]?[0-9]+)?$")
    } else {
        static_regex!(r"^[-+]?(?:[0-9]+)?(?:,[0-9]*)?(?:[eE][-+]?[0-9]+)?$")
    };
    if matches!(value, "" | "." | "," | "-" | "+") || !re.is_match(value) {
        return false;
    }
    let Ok(number) = value.replace(',', ".").parse::<f64>() else {
        return false;
    };
    options.min.map_or(true, |min| number >= min) && options.max.map_or(true, |max| number <= max)
}

fn is_half_width_char(c: char) -> bool {
    matches!(
        c,
        '\u{0020}'..='\u{007E}'
            | '\u{FF61}'..='\u{FF9F}'
            | '\u{FFA0}'..='\u{FFDC}'
            | '\u{FFE8}'..='\u{FFEE}'
    )
}

/// Contains at least one full-width character
pub fn is_full_width(value: &str) -> bool {
    value.chars().any(|c| !is_half_width_char(c))
}

/// Contains at least one half-width character
pub fn is_half_width(value: &str) -> bool {
    value.chars().any(is_half_width_char)
}

pub fn is_variable_width(value: &str) -> bool {
    is_full_width(value) && is_half_width(value)
}

pub fn is_multibyte(value: &str) -> bool {
    value.chars().any(|c| !c.is_ascii())
}

/// Contains a character outside the basic multilingual plane
pub fn is_surrogate_pair(value: &str) -> bool {
    value.chars().any(|c| c as u32 > 0xFFFF)
}

pub fn is_hash(value: &str, algorithm: HashAlgorithm) -> bool {
    value.len() == algorithm.digest_len() && value.chars().all(|c| c.is_ascii_hexdigit())
}

pub fn is_hex_color(value: &str) -> bool {
    let re = static_regex!(r"(?i)^#?(?:[0-9a-f]{3}|[0-9a-f]{4}|[0-9a-f]{6}|[0-9a-f]{8})$");
    re.is_match(value)
}

pub fn is_hexadecimal(value: &str) -> bool {
    let re = static_regex!(r"(?i)^(?:0x|0h)?[0-9a-f]+$");
    re.is_match(value)
}

pub fn is_ip(value: &str, version: Option<IpVersion>) -> bool {
    match version {
        Some(IpVersion::V4) => value.parse::<Ipv4Addr>().is_ok(),
        Some(IpVersion::V6) => value.parse::<Ipv6Addr>().is_ok(),
        None => value.parse::<IpAddr>().is_ok(),
    }
}

/// CIDR notation, IPv4 or IPv6
pub fn is_ip_range(value: &str) -> bool {
    let Some((address, prefix)) = value.split_once('/') else {
        return false;
    };
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) || prefix.len() > 3 {
        return false;
    }
    let Ok(prefix) = prefix.parse::<u8>() else {
        return false;
    };
    match address.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => prefix <= 32,
        Ok(IpAddr::V6(_)) => prefix <= 128,
        Err(_) => false,
    }
}

fn is_isbn10(digits: &str) -> bool {
    let re = static_regex!(r"^[0-9]{9}[0-9X]$");
    if !re.is_match(digits) {
        return false;
    }
    let sum: u32 = digits
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let digit = if c == 'X' { 10 } else { c.to_digit(10).unwrap_or(0) };
            (10 - i as u32) * digit
        })
        .sum();
    sum % 11 == 0
}

fn is_isbn13(digits: &str) -> bool {
    if digits.len() != 13 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let sum: u32 = digits
        .chars()
        .enumerate()
        .map(|(i, c)| c.to_digit(10).unwrap_or(0) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    sum % 10 == 0
}

pub fn is_isbn(value: &str, version: Option<IsbnVersion>) -> bool {
    let digits: String = value.chars().filter(|c| *c != ' ' && *c != '-').collect();
    match version {
        Some(IsbnVersion::Isbn10) => is_isbn10(&digits),
        Some(IsbnVersion::Isbn13) => is_isbn13(&digits),
        None => is_isbn10(&digits) || is_isbn13(&digits),
    }
}

pub fn is_issn(value: &str) -> bool {
    let re = static_regex!(r"(?i)^[0-9]{4}-?[0-9]{3}[0-9X]$");
    if !re.is_match(value) {
        return false;
    }
    let digits: Vec<u32> = value
        .chars()
        .filter(|c| *c != '-')
        .map(|c| if c.eq_ignore_ascii_case(&'x') { 10 } else { c.to_digit(10).unwrap_or(0) })
        .collect();
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, digit)| (8 - i as u32) * digit)
        .sum();
    sum % 11 == 0
}

pub fn is_isin(value: &str) -> bool {
    let re = static_regex!(r"^[A-Z]{2}[0-9A-Z]{9}[0-9]$");
    if !re.is_match(value) {
        return false;
    }
    let expanded: String = value
        .chars()
        .map(|c| c.to_digit(36).map(|d| d.to_string()).unwrap_or_default())
        .collect();
    luhn(&expanded)
}

pub fn is_iso8601(value: &str) -> bool {
    let re = static_regex!(
        r"^([0-9]{4})(?:-([0-9]{2})(?:-([0-9]{2})(?:[T ]([0-9]{2}):([0-9]{2})(?::([0-9]{2})(?:[.,][0-9]+)?)?(?:Z|[-+][0-9]{2}(?::?[0-9]{2})?)?)?)?)?$"
    );
    let Some(caps) = re.captures(value) else {
        return false;
    };
    let part = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    if let Some(month) = part(2) {
        if !(1..=12).contains(&month) {
            return false;
        }
        let year = caps.get(1).and_then(|m| m.as_str().parse::<i32>().ok());
        if let (Some(year), Some(day)) = (year, part(3)) {
            if NaiveDate::from_ymd_opt(year, month, day).is_none() {
                return false;
            }
        }
    }
    let hour_ok = part(4).map_or(true, |h| h < 24);
    let minute_ok = part(5).map_or(true, |m| m < 60);
    let second_ok = part(6).map_or(true, |s| s < 61);
    hour_ok && minute_ok && second_ok
}

pub fn is_rfc3339(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
}

pub fn is_isrc(value: &str) -> bool {
    let re = static_regex!(r"^[A-Z]{2}[0-9A-Z]{3}[0-9]{2}[0-9]{5}$");
    re.is_match(value)
}

pub fn is_in(value: &str, values: &[String]) -> bool {
    values.iter().any(|candidate| candidate == value)
}

pub fn is_int(value: &str, options: &IntOptions) -> bool {
    let re = if options.allow_leading_zeroes {
        static_regex!(r"^[-+]?[0-9]+$")
    } else {
        static_regex!(r"^[-+]?(?:0|[1-9][0-9]*)$")
    };
    if !re.is_match(value) {
        return false;
    }
    let Ok(number) = value.parse::<i128>() else {
        return false;
    };
    options.min.map_or(true, |min| number >= i128::from(min))
        && options.max.map_or(true, |max| number <= i128::from(max))
}

/// A JSON object or array
pub fn is_json(value: &str) -> bool {
    matches!(
        serde_json::from_str::<Value>(value),
        Ok(Value::Object(_)) | Ok(Value::Array(_))
    )
}

pub fn is_jwt(value: &str) -> bool {
    let segment = static_regex!(r"^[A-Za-z0-9_-]+$");
    let parts: Vec<&str> = value.split('.').collect();
    match parts.as_slice() {
        [header, payload] => segment.is_match(header) && segment.is_match(payload),
        [header, payload, signature] => {
            segment.is_match(header)
                && segment.is_match(payload)
                && (signature.is_empty() || segment.is_match(signature))
        }
        _ => false,
    }
}

pub fn is_lat_long(value: &str) -> bool {
    let lat = static_regex!(r"^\(?[-+]?(?:90(?:\.0+)?|[1-8]?[0-9](?:\.[0-9]+)?)$");
    let long = static_regex!(
        r"^\s?[-+]?(?:180(?:\.0+)?|1[0-7][0-9](?:\.[0-9]+)?|[0-9]{1,2}(?:\.[0-9]+)?)\)?$"
    );
    let Some((latitude, longitude)) = value.split_once(',') else {
        return false;
    };
    if value.starts_with('(') != value.ends_with(')') {
        return false;
    }
    lat.is_match(latitude) && long.is_match(longitude)
}

/// Character (not byte) length within bounds
pub fn is_length(value: &str, options: &LengthOptions) -> bool {
    options.accepts(value.chars().count())
}

pub fn is_lowercase(value: &str) -> bool {
    value == value.to_lowercase()
}

pub fn is_uppercase(value: &str) -> bool {
    value == value.to_uppercase()
}

pub fn is_mac_address(value: &str) -> bool {
    let re = static_regex!(
        r"^(?:(?:[0-9a-fA-F]{2}:){5}[0-9a-fA-F]{2}|(?:[0-9a-fA-F]{2}-){5}[0-9a-fA-F]{2}|[0-9a-fA-F]{12})$"
    );
    re.is_match(value)
}

pub fn is_mime_type(value: &str) -> bool {
    let re = static_regex!(
        r#"(?i)^(?:application|audio|font|image|message|model|multipart|text|video)/[a-z0-9.\-+]{1,100}(?:;\s?[a-z0-9\-]+=(?:"[a-z0-9.\-+\s]{0,70}"|[a-z0-9.\-+]{0,70}))*$"#
    );
    re.is_match(value)
}

pub fn is_mongo_id(value: &str) -> bool {
    value.len() == 24 && value.chars().all(|c| c.is_ascii_hexdigit())
}

pub fn is_numeric(value: &str) -> bool {
    let re = static_regex!(r"^[-+]?(?:[0-9]*\.)?[0-9]+$");
    re.is_match(value)
}

pub fn is_port(value: &str) -> bool {
    is_int(value, &IntOptions::between(0, 65535).strict_zeroes())
}

/// http, https or ftp URL with a fully qualified host or an IP address
///
/// A missing protocol is tolerated and read as http. A `scheme:` prefix
/// without `//`, as in `mailto:` or `javascript:`, is rejected.
pub fn is_url(value: &str) -> bool {
    if value.is_empty() || value.len() > 2083 || value.chars().any(char::is_whitespace) {
        return false;
    }
    let candidate: Cow<'_, str> = if value.contains("://") {
        Cow::Borrowed(value)
    } else {
        // without a protocol, a colon may only introduce a port
        let opaque = static_regex!(r"^[A-Za-z][A-Za-z0-9+.\-]*:(?:[^0-9]|$)");
        if opaque.is_match(value) {
            return false;
        }
        Cow::Owned(format!("http://{}", value))
    };
    let Ok(url) = url::Url::parse(&candidate) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https" | "ftp") {
        return false;
    }
    match url.host() {
        Some(url::Host::Domain(domain)) => is_fqdn(domain),
        Some(url::Host::Ipv4(_)) | Some(url::Host::Ipv6(_)) => true,
        None => false,
    }
}

pub fn is_uuid(value: &str, version: Option<UuidVersion>) -> bool {
    let re = match version {
        Some(UuidVersion::V3) => static_regex!(
            r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-3[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$"
        ),
        Some(UuidVersion::V4) => static_regex!(
            r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"
        ),
        Some(UuidVersion::V5) => static_regex!(
            r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-5[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"
        ),
        None => static_regex!(
            r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$"
        ),
    };
    re.is_match(value)
}

pub fn is_whitelisted(value: &str, chars: &str) -> bool {
    value.chars().all(|c| chars.contains(c))
}

/// Unanchored pattern search; `flags` uses the `i`, `m`, `s`, `x` letters
///
/// Flags with no meaning for a single test (`g`, `u`, `y`) are ignored. A
/// pattern that does not compile fails the check.
pub fn matches(value: &str, pattern: &str, flags: Option<&str>) -> bool {
    let inline: String = flags
        .unwrap_or("")
        .chars()
        .filter(|c| matches!(c, 'i' | 'm' | 's' | 'x'))
        .collect();
    let source = if inline.is_empty() {
        pattern.to_string()
    } else {
        format!("(?{}){}", inline, pattern)
    };
    match Regex::new(&source) {
        Ok(re) => re.is_match(value),
        Err(err) => {
            tracing::warn!(pattern = %pattern, error = %err, "Invalid validation pattern");
            false
        }
    }
}
