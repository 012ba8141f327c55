//! Application errors and the JSON error envelope
//!
//! Handlers return a [`RestfulError`] to short-circuit with a status code and
//! a message. Every such error renders to the same body shape:
//!
//! ```json
//! { "code": 400, "error": "bad_request", "error_description": "The uid field is required." }
//! ```
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::validation::{FieldError, ValidationErrors};
use http::header::CONTENT_TYPE;
use http::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason phrase used for codes the registry does not name
const UNKNOWN_REASON: &str = "Unknown Status";

/// What a [`RestfulError`] reports: a literal message or a list of field errors
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorMessage {
    Text(String),
    Fields(ValidationErrors),
}

impl From<String> for ErrorMessage {
    fn from(message: String) -> Self {
        ErrorMessage::Text(message)
    }
}

impl From<&str> for ErrorMessage {
    fn from(message: &str) -> Self {
        ErrorMessage::Text(message.to_string())
    }
}

impl From<ValidationErrors> for ErrorMessage {
    fn from(errors: ValidationErrors) -> Self {
        ErrorMessage::Fields(errors)
    }
}

impl From<Vec<FieldError>> for ErrorMessage {
    fn from(errors: Vec<FieldError>) -> Self {
        ErrorMessage::Fields(errors.into())
    }
}

/// Serialized body of an error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub code: u16,
    pub error: String,
    pub error_description: String,
}

/// Lowercase the words of a reason phrase and join them with `_`
pub fn slug(reason: &str) -> String {
    reason
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or(UNKNOWN_REASON)
}

/// An application error tagged with an HTTP status
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct RestfulError {
    status: StatusCode,
    kind: String,
    message: String,
    field_errors: ValidationErrors,
}

impl RestfulError {
    /// Create an error with the default `<Reason Phrase>.` message
    pub fn new(status: StatusCode) -> Self {
        let reason = reason_phrase(status);
        Self {
            status,
            kind: slug(reason),
            message: format!("{}.", reason),
            field_errors: ValidationErrors::new(),
        }
    }

    /// Create an error from a numeric status code
    pub fn from_code(code: u16) -> Result<Self> {
        StatusCode::from_u16(code)
            .map(Self::new)
            .map_err(|_| Error::InvalidStatus { code })
    }

    /// Set the reported message
    ///
    /// Field errors are described one message per field, space-joined. An
    /// empty list keeps the default message.
    pub fn with_message(mut self, message: impl Into<ErrorMessage>) -> Self {
        match message.into() {
            ErrorMessage::Text(text) => self.message = text,
            ErrorMessage::Fields(errors) => {
                let description = errors.describe();
                if !description.is_empty() {
                    self.message = description;
                }
                self.field_errors = errors;
            }
        }
        self
    }

    /// Override the `error` slug
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST)
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED)
    }

    pub fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED)
    }

    pub fn conflict() -> Self {
        Self::new(StatusCode::CONFLICT)
    }

    pub fn gone() -> Self {
        Self::new(StatusCode::GONE)
    }

    pub fn payload_too_large() -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE)
    }

    pub fn unsupported_media_type() -> Self {
        Self::new(StatusCode::UNSUPPORTED_MEDIA_TYPE)
    }

    pub fn unprocessable_entity() -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY)
    }

    pub fn too_many_requests() -> Self {
        Self::new(StatusCode::TOO_MANY_REQUESTS)
    }

    pub fn internal_server() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn service_unavailable() -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> u16 {
        self.status.as_u16()
    }

    /// The `error` slug, e.g. `bad_request`
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Field errors this error was built from, empty for text messages
    pub fn field_errors(&self) -> &ValidationErrors {
        &self.field_errors
    }

    /// `Restful` followed by the reason phrase without spaces
    pub fn name(&self) -> String {
        let compact: String = reason_phrase(self.status)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("Restful{}", compact)
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            code: self.code(),
            error: self.kind.clone(),
            error_description: self.message.clone(),
        }
    }

    /// Render the envelope as a JSON response carrying the error's status
    pub fn into_response(self) -> Result<Response<String>> {
        let body = serde_json::to_string(&self.envelope())?;
        let response = Response::builder()
            .status(self.status)
            .header(CONTENT_TYPE, "application/json")
            .body(body)?;
        Ok(response)
    }
}

impl From<ValidationErrors> for RestfulError {
    fn from(errors: ValidationErrors) -> Self {
        RestfulError::bad_request().with_message(errors)
    }
}

impl From<StatusCode> for RestfulError {
    fn from(status: StatusCode) -> Self {
        RestfulError::new(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldLocation;
    use serde_json::json;

    fn field_error(field: &str, message: &str) -> FieldError {
        FieldError {
            location: FieldLocation::Body,
            field: field.to_string(),
            value: None,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_defaults_from_status() {
        let err = RestfulError::bad_request();
        assert_eq!(err.code(), 400);
        assert_eq!(err.kind(), "bad_request");
        assert_eq!(err.message(), "Bad Request.");
        assert_eq!(err.name(), "RestfulBadRequest");

        let err = RestfulError::unprocessable_entity();
        assert_eq!(err.kind(), "unprocessable_entity");
        assert_eq!(err.name(), "RestfulUnprocessableEntity");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(RestfulError::from_code(404).unwrap().kind(), "not_found");
        assert!(matches!(
            RestfulError::from_code(42),
            Err(Error::InvalidStatus { code: 42 })
        ));
    }

    #[test]
    fn test_field_errors_are_deduplicated() {
        let err = RestfulError::from(ValidationErrors::from(vec![
            field_error("name", "Name one."),
            field_error("age", "Age."),
            field_error("name", "Name two."),
        ]));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Name one. Age.");
        assert_eq!(err.field_errors().len(), 3);
    }

    #[test]
    fn test_empty_field_list_keeps_default() {
        let err = RestfulError::conflict().with_message(ValidationErrors::new());
        assert_eq!(err.message(), "Conflict.");
    }

    #[test]
    fn test_envelope_shape() {
        let err = RestfulError::forbidden()
            .with_message("Nope.")
            .with_kind("access_denied");
        assert_eq!(
            serde_json::to_value(err.envelope()).unwrap(),
            json!({"code": 403, "error": "access_denied", "error_description": "Nope."})
        );
    }

    #[test]
    fn test_into_response() {
        let response = RestfulError::not_found().into_response().unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        let body: ErrorEnvelope = serde_json::from_str(response.body()).unwrap();
        assert_eq!(body.error_description, "Not Found.");
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Payload Too Large"), "payload_too_large");
        assert_eq!(slug("OK"), "ok");
    }
}
