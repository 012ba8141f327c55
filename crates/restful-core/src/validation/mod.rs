//! Request validation
//!
//! The engine behind [`Validator`]: a fixed catalog of rules, the sentences
//! reported when they fail, and the cursor/accumulator pair that turns a
//! chain of checks into an ordered list of field errors.
//!
//! - **Predicates**: pure checks over a field's textual value
//! - **Messages**: the sentence reported for each failed rule
//! - **Session**: per-request cursor and accumulator with a fluent API
//! - **Rule sets and presets**: checks expressed as data, and the checks
//!   common resource handlers need
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

pub mod accumulator;
pub mod cursor;
pub mod messages;
pub mod predicates;
pub mod presets;
pub mod request;
pub mod rule_set;
pub mod session;
pub mod types;


// Re-export commonly used types
pub use accumulator::ValidationErrors;
pub use cursor::FieldCursor;
pub use request::RequestContext;
pub use rule_set::{FieldCheck, Format, RuleSet};
pub use session::Validator;
pub use types::{
    FieldError, FieldLocation, FloatOptions, HashAlgorithm, IntOptions, IpVersion, IsbnVersion,
    LengthOptions, Rule, UuidVersion, DEFAULT_LOCALE,
};
