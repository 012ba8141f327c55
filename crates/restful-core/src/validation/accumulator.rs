//! Error accumulator
//!
//! Ordered, append-only list of finalized field errors. Repeated failures on
//! the same field are all kept; de-duplication only happens when the list is
//! rendered as a description.
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

use super::types::FieldError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Field errors collected during a validation session
#[derive(Debug, Clone, Default, PartialEq, Error, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "No validation errors");
        }
        write!(f, "Validation failed:")?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every collected error
    pub fn reset(&mut self) {
        self.errors.clear();
    }

    /// Append `error` when there is one
    pub fn commit(&mut self, error: Option<FieldError>) {
        if let Some(error) = error {
            self.errors.push(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// An independent copy of the collected errors
    pub fn snapshot(&self) -> ValidationErrors {
        self.clone()
    }

    pub fn as_slice(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }

    /// Messages joined by a space, keeping only the first error per field
    pub fn describe(&self) -> String {
        let mut seen = HashSet::new();
        self.errors
            .iter()
            .filter(|error| seen.insert(error.field.as_str()))
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::types::FieldLocation;
    use serde_json::json;

    fn field_error(field: &str, message: &str) -> FieldError {
        FieldError {
            location: FieldLocation::Body,
            field: field.to_string(),
            value: Some(json!("x")),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_commit_ignores_none() {
        let mut errors = ValidationErrors::new();
        errors.commit(None);
        assert!(errors.is_empty());
        errors.commit(Some(field_error("a", "A.")));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_describe_dedups_by_field() {
        let errors = ValidationErrors::from(vec![
            field_error("name", "First name."),
            field_error("age", "Age."),
            field_error("name", "Second name."),
        ]);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.describe(), "First name. Age.");
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut errors = ValidationErrors::from(field_error("a", "A."));
        let snapshot = errors.snapshot();
        errors.reset();
        assert!(errors.is_empty());
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_serializes_as_list() {
        let errors = ValidationErrors::from(field_error("a", "A."));
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value,
            json!([{"location": "body", "field": "a", "value": "x", "message": "A."}])
        );
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());
        let err = ValidationErrors::from(field_error("a", "A.")).into_result().unwrap_err();
        assert!(err.to_string().contains("body.a: A."));
    }
}
