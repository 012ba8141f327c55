//! Core validation types
//!
//! Field locations, finalized field errors, the typed arguments rules take,
//! and the [`Rule`] catalog itself. Rules serialize with the catalog name as
//! the `rule` tag so that rule sets can be written by hand:
//!
//! ```yaml
//! - rule: isInt
//!   min: 1
//!   max: 100
//! ```
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Locale used when a locale-aware rule does not name one
pub const DEFAULT_LOCALE: &str = "en-US";

/// Where in the request a field's value was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldLocation {
    /// Parsed request body
    #[serde(rename = "body")]
    Body,
    /// URL query string
    #[serde(rename = "query")]
    Query,
    /// Route parameters
    #[serde(rename = "params", alias = "path")]
    Path,
}

impl FieldLocation {
    /// Lookup order used when a field is checked without naming a location
    pub const LOOKUP_ORDER: [FieldLocation; 3] =
        [FieldLocation::Body, FieldLocation::Query, FieldLocation::Path];

    /// Name of the location as reported in field errors
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldLocation::Body => "body",
            FieldLocation::Query => "query",
            FieldLocation::Path => "params",
        }
    }
}

impl fmt::Display for FieldLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "body" => Ok(FieldLocation::Body),
            "query" => Ok(FieldLocation::Query),
            "params" | "path" => Ok(FieldLocation::Path),
            other => Err(Error::configuration(format!(
                "unknown field location '{}', expected one of: body, query, params",
                other
            ))),
        }
    }
}

/// A finalized validation failure for one field selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Where the value was read from
    pub location: FieldLocation,
    /// Name of the field under test
    pub field: String,
    /// Raw value at selection time, `None` when the field was missing
    pub value: Option<Value>,
    /// Human-readable failure message
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {}", self.location, self.field, self.message)
    }
}

/// Bounds for integer checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntOptions {
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// Accept values such as `007`
    pub allow_leading_zeroes: bool,
}

impl Default for IntOptions {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            allow_leading_zeroes: true,
        }
    }
}

impl IntOptions {
    pub fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    pub fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            ..Self::default()
        }
    }

    pub fn at_most(max: i64) -> Self {
        Self {
            max: Some(max),
            ..Self::default()
        }
    }

    /// Reject values with leading zeroes
    pub fn strict_zeroes(mut self) -> Self {
        self.allow_leading_zeroes = false;
        self
    }
}

/// Bounds and locale for float checks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub locale: Option<String>,
}

impl FloatOptions {
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            locale: None,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// Length bounds, shared by character-length and byte-length checks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthOptions {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub exact: Option<usize>,
}

impl LengthOptions {
    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            exact: None,
        }
    }

    pub fn at_least(min: usize) -> Self {
        Self {
            min: Some(min),
            ..Self::default()
        }
    }

    pub fn at_most(max: usize) -> Self {
        Self {
            max: Some(max),
            ..Self::default()
        }
    }

    pub fn exactly(len: usize) -> Self {
        Self {
            exact: Some(len),
            ..Self::default()
        }
    }

    /// Whether `len` satisfies every bound that is set
    pub fn accepts(&self, len: usize) -> bool {
        self.min.map_or(true, |min| len >= min)
            && self.max.map_or(true, |max| len <= max)
            && self.exact.map_or(true, |exact| len == exact)
    }
}

/// Digest algorithms recognised by the hash check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Md5,
    Md4,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Ripemd128,
    Ripemd160,
    Tiger128,
    Tiger160,
    Tiger192,
    Crc32,
    Crc32b,
}

impl HashAlgorithm {
    /// Hex digest length
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Crc32 | HashAlgorithm::Crc32b => 8,
            HashAlgorithm::Md5
            | HashAlgorithm::Md4
            | HashAlgorithm::Ripemd128
            | HashAlgorithm::Tiger128 => 32,
            HashAlgorithm::Sha1 | HashAlgorithm::Ripemd160 | HashAlgorithm::Tiger160 => 40,
            HashAlgorithm::Tiger192 => 48,
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha384 => 96,
            HashAlgorithm::Sha512 => 128,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Md4 => "md4",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Ripemd128 => "ripemd128",
            HashAlgorithm::Ripemd160 => "ripemd160",
            HashAlgorithm::Tiger128 => "tiger128",
            HashAlgorithm::Tiger160 => "tiger160",
            HashAlgorithm::Tiger192 => "tiger192",
            HashAlgorithm::Crc32 => "crc32",
            HashAlgorithm::Crc32b => "crc32b",
        }
    }
}

/// Implements the numeric serde representation used by version selectors
macro_rules! numeric_version {
    ($name:ident { $($variant:ident = $num:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        pub enum $name {
            $($variant),+
        }

        impl TryFrom<u8> for $name {
            type Error = String;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($num => Ok($name::$variant),)+
                    other => Err(format!(
                        "unsupported {} {}",
                        stringify!($name),
                        other
                    )),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => $num,)+
                }
            }
        }
    };
}

numeric_version!(IpVersion { V4 = 4, V6 = 6 });
numeric_version!(IsbnVersion { Isbn10 = 10, Isbn13 = 13 });
numeric_version!(UuidVersion { V3 = 3, V4 = 4, V5 = 5 });

/// The fixed catalog of validation rules, each with its typed arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule")]
pub enum Rule {
    #[serde(rename = "contains")]
    Contains { seed: String },
    #[serde(rename = "equals")]
    Equals { comparison: String },
    /// Date strictly after `date`, or after now when unset
    #[serde(rename = "isAfter")]
    IsAfter { date: Option<String> },
    #[serde(rename = "isAlpha")]
    IsAlpha { locale: Option<String> },
    #[serde(rename = "isAlphanumeric")]
    IsAlphanumeric { locale: Option<String> },
    #[serde(rename = "isAscii")]
    IsAscii,
    #[serde(rename = "isBase64")]
    IsBase64,
    /// Date strictly before `date`, or before now when unset
    #[serde(rename = "isBefore")]
    IsBefore { date: Option<String> },
    #[serde(rename = "isBoolean")]
    IsBoolean,
    #[serde(rename = "isByteLength")]
    IsByteLength(LengthOptions),
    #[serde(rename = "isCreditCard")]
    IsCreditCard,
    #[serde(rename = "isCurrency")]
    IsCurrency,
    #[serde(rename = "isDataURI")]
    IsDataUri,
    #[serde(rename = "isMagnetURI")]
    IsMagnetUri,
    #[serde(rename = "isDecimal")]
    IsDecimal { locale: Option<String> },
    #[serde(rename = "isDivisibleBy")]
    IsDivisibleBy { number: i64 },
    #[serde(rename = "isEmail")]
    IsEmail,
    #[serde(rename = "isEmpty")]
    IsEmpty,
    #[serde(rename = "isFQDN")]
    IsFqdn,
    #[serde(rename = "isFloat")]
    IsFloat(FloatOptions),
    #[serde(rename = "isFullWidth")]
    IsFullWidth,
    #[serde(rename = "isHalfWidth")]
    IsHalfWidth,
    #[serde(rename = "isHash")]
    IsHash {
        #[serde(default)]
        algorithm: HashAlgorithm,
    },
    #[serde(rename = "isHexColor")]
    IsHexColor,
    #[serde(rename = "isHexadecimal")]
    IsHexadecimal,
    #[serde(rename = "isIP")]
    IsIp { version: Option<IpVersion> },
    #[serde(rename = "isIPRange")]
    IsIpRange,
    #[serde(rename = "isISBN")]
    IsIsbn { version: Option<IsbnVersion> },
    #[serde(rename = "isISSN")]
    IsIssn,
    #[serde(rename = "isISIN")]
    IsIsin,
    #[serde(rename = "isISO8601")]
    IsIso8601,
    #[serde(rename = "isRFC3339")]
    IsRfc3339,
    #[serde(rename = "isISRC")]
    IsIsrc,
    #[serde(rename = "isIn")]
    IsIn { values: Vec<String> },
    #[serde(rename = "isInt")]
    IsInt(IntOptions),
    #[serde(rename = "isJSON")]
    IsJson,
    #[serde(rename = "isJWT")]
    IsJwt,
    #[serde(rename = "isLatLong")]
    IsLatLong,
    #[serde(rename = "isLength")]
    IsLength(LengthOptions),
    #[serde(rename = "isLowercase")]
    IsLowercase,
    #[serde(rename = "isMACAddress")]
    IsMacAddress,
    #[serde(rename = "isMD5")]
    IsMd5,
    #[serde(rename = "isMimeType")]
    IsMimeType,
    #[serde(rename = "isMongoId")]
    IsMongoId,
    #[serde(rename = "isMultibyte")]
    IsMultibyte,
    #[serde(rename = "isNumeric")]
    IsNumeric,
    #[serde(rename = "isPort")]
    IsPort,
    #[serde(rename = "isSurrogatePair")]
    IsSurrogatePair,
    #[serde(rename = "isURL")]
    IsUrl,
    #[serde(rename = "isUUID")]
    IsUuid { version: Option<UuidVersion> },
    #[serde(rename = "isUppercase")]
    IsUppercase,
    #[serde(rename = "isVariableWidth")]
    IsVariableWidth,
    #[serde(rename = "isWhitelisted")]
    IsWhitelisted { chars: String },
    #[serde(rename = "matches")]
    Matches {
        pattern: String,
        flags: Option<String>,
    },
    /// Fails when the field is missing; the only rule that looks at absence
    #[serde(rename = "exists")]
    Exists,
}

impl Rule {
    /// Catalog name of the rule
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Contains { .. } => "contains",
            Rule::Equals { .. } => "equals",
            Rule::IsAfter { .. } => "isAfter",
            Rule::IsAlpha { .. } => "isAlpha",
            Rule::IsAlphanumeric { .. } => "isAlphanumeric",
            Rule::IsAscii => "isAscii",
            Rule::IsBase64 => "isBase64",
            Rule::IsBefore { .. } => "isBefore",
            Rule::IsBoolean => "isBoolean",
            Rule::IsByteLength(_) => "isByteLength",
            Rule::IsCreditCard => "isCreditCard",
            Rule::IsCurrency => "isCurrency",
            Rule::IsDataUri => "isDataURI",
            Rule::IsMagnetUri => "isMagnetURI",
            Rule::IsDecimal { .. } => "isDecimal",
            Rule::IsDivisibleBy { .. } => "isDivisibleBy",
            Rule::IsEmail => "isEmail",
            Rule::IsEmpty => "isEmpty",
            Rule::IsFqdn => "isFQDN",
            Rule::IsFloat(_) => "isFloat",
            Rule::IsFullWidth => "isFullWidth",
            Rule::IsHalfWidth => "isHalfWidth",
            Rule::IsHash { .. } => "isHash",
            Rule::IsHexColor => "isHexColor",
            Rule::IsHexadecimal => "isHexadecimal",
            Rule::IsIp { .. } => "isIP",
            Rule::IsIpRange => "isIPRange",
            Rule::IsIsbn { .. } => "isISBN",
            Rule::IsIssn => "isISSN",
            Rule::IsIsin => "isISIN",
            Rule::IsIso8601 => "isISO8601",
            Rule::IsRfc3339 => "isRFC3339",
            Rule::IsIsrc => "isISRC",
            Rule::IsIn { .. } => "isIn",
            Rule::IsInt(_) => "isInt",
            Rule::IsJson => "isJSON",
            Rule::IsJwt => "isJWT",
            Rule::IsLatLong => "isLatLong",
            Rule::IsLength(_) => "isLength",
            Rule::IsLowercase => "isLowercase",
            Rule::IsMacAddress => "isMACAddress",
            Rule::IsMd5 => "isMD5",
            Rule::IsMimeType => "isMimeType",
            Rule::IsMongoId => "isMongoId",
            Rule::IsMultibyte => "isMultibyte",
            Rule::IsNumeric => "isNumeric",
            Rule::IsPort => "isPort",
            Rule::IsSurrogatePair => "isSurrogatePair",
            Rule::IsUrl => "isURL",
            Rule::IsUuid { .. } => "isUUID",
            Rule::IsUppercase => "isUppercase",
            Rule::IsVariableWidth => "isVariableWidth",
            Rule::IsWhitelisted { .. } => "isWhitelisted",
            Rule::Matches { .. } => "matches",
            Rule::Exists => "exists",
        }
    }

    /// Fill an unset locale argument with `locale`
    pub fn fill_default_locale(&mut self, default: &str) {
        let slot = match self {
            Rule::IsAlpha { locale } | Rule::IsAlphanumeric { locale } | Rule::IsDecimal { locale } => {
                locale
            }
            Rule::IsFloat(options) => &mut options.locale,
            _ => return,
        };
        if slot.is_none() {
            *slot = Some(default.to_string());
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
