//! Application errors, envelopes and the error handler
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod handler;

pub use error::{slug, ErrorEnvelope, ErrorMessage, RestfulError};
pub use handler::{handle_error, recognize, respond};
