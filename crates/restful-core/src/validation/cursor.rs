//! Field cursor
//!
//! The field currently under test. A cursor holds the value extracted at
//! selection time (never re-read from the request) and at most one pending
//! failure message.
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

use super::types::{FieldError, FieldLocation};
use serde_json::Value;

/// The currently selected field and its pending failure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldCursor {
    location: Option<FieldLocation>,
    field: Option<String>,
    value: Option<Value>,
    pending_message: Option<String>,
}

impl FieldCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear location, field, value and pending message
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Reset, then point the cursor at a new field
    pub fn select(&mut self, location: FieldLocation, field: impl Into<String>, value: Option<Value>) {
        self.reset();
        self.location = Some(location);
        self.field = Some(field.into());
        self.value = value;
    }

    /// Record a failure unless one is already pending
    ///
    /// Returns whether `message` was taken.
    pub fn record_failure(&mut self, message: impl Into<String>) -> bool {
        if self.pending_message.is_some() {
            return false;
        }
        self.pending_message = Some(message.into());
        true
    }

    /// Replace the pending message, if there is one
    pub fn override_message(&mut self, message: impl Into<String>) -> bool {
        match self.pending_message.as_mut() {
            Some(pending) => {
                *pending = message.into();
                true
            }
            None => false,
        }
    }

    /// The finalized error for this cursor, if a field failed
    pub fn to_field_error(&self) -> Option<FieldError> {
        let (field, message) = (self.field.as_ref()?, self.pending_message.as_ref()?);
        Some(FieldError {
            location: self.location.unwrap_or(FieldLocation::Path),
            field: field.clone(),
            value: self.value.clone(),
            message: message.clone(),
        })
    }

    pub fn location(&self) -> Option<FieldLocation> {
        self.location
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn pending_message(&self) -> Option<&str> {
        self.pending_message.as_deref()
    }

    /// No field selected
    pub fn is_empty(&self) -> bool {
        self.field.is_none()
    }

    pub fn has_failure(&self) -> bool {
        self.field.is_some() && self.pending_message.is_some()
    }
}
