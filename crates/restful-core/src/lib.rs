//! Restful Core - request validation and uniform error envelopes
//!
//! This crate helps HTTP request handlers reject bad input consistently. It
//! checks fields of a request's body, query string and route parameters
//! against a catalog of rules, collects human-readable failures, and renders
//! application errors as one JSON envelope shape.
//!
//! # Main Components
//!
//! - **Validation**: the [`Validator`] session and its rule catalog
//! - **Rule Sets**: the same checks loaded from YAML or JSON
//! - **Application Errors**: [`RestfulError`] tagged with an HTTP status
//! - **Error Handling**: crate errors using `thiserror`
//!
//! # Example
//!
//! ```
//! use restful_core::{RequestContext, RestfulError, Validator};
//!
//! let request = RequestContext::new().with_body("name", "John");
//! let mut validator = Validator::new();
//! validator.body(&request, "name").equals("John Doe");
//!
//! let err = RestfulError::from(validator.finish());
//! assert_eq!(err.code(), 400);
//! assert_eq!(err.message(), "The name field must equal to John Doe.");
//! ```
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

pub mod config;
pub mod error;
pub mod http;
pub mod validation;

// Re-export main types for convenience
pub use crate::config::ValidatorConfig;
pub use crate::error::{Error, Result};
pub use crate::http::{handle_error, recognize, ErrorEnvelope, ErrorMessage, RestfulError};
pub use crate::validation::{
    presets, FieldCheck, FieldError, FieldLocation, FloatOptions, HashAlgorithm, IntOptions,
    IpVersion, IsbnVersion, LengthOptions, RequestContext, Rule, RuleSet, UuidVersion,
    ValidationErrors, Validator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
