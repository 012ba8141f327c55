//! Ready-made validations for common resource handlers
//!
//! The `*_validation` functions only queue checks on a session so handlers
//! can add their own before finishing. The guards run a complete session and
//! turn a failure into a 400 [`RestfulError`].
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

use super::request::RequestContext;
use super::session::Validator;
use super::types::IntOptions;
use crate::http::error::RestfulError;

/// Pagination parameters accepted by list endpoints
pub const PAGINATION_FIELDS: [&str; 4] = ["before", "after", "limit", "offset"];

/// Query `before`, `after`, `limit` and `offset` must be integers
pub fn retrieve_validation(validator: &mut Validator, request: &RequestContext) {
    for field in PAGINATION_FIELDS {
        validator.query(request, field).is_int(IntOptions::default());
    }
}

/// Route parameter `uid` must be present
pub fn update_validation(validator: &mut Validator, request: &RequestContext) {
    validator.path(request, "uid").exists();
}

/// Route parameter `uid` must be present
pub fn delete_validation(validator: &mut Validator, request: &RequestContext) {
    validator.path(request, "uid").exists();
}

fn uid_guard(request: &RequestContext) -> Result<(), RestfulError> {
    let mut validator = Validator::new();
    validator.path(request, "uid").exists().is_uuid(None);
    validator.finish().into_result().map_err(RestfulError::from)
}

/// Guard for list endpoints
pub fn find_all(request: &RequestContext) -> Result<(), RestfulError> {
    let mut validator = Validator::new();
    retrieve_validation(&mut validator, request);
    validator.finish().into_result().map_err(RestfulError::from)
}

/// Guard for single-resource reads
pub fn find_one(request: &RequestContext) -> Result<(), RestfulError> {
    uid_guard(request)
}

pub fn update(request: &RequestContext) -> Result<(), RestfulError> {
    uid_guard(request)
}

pub fn delete(request: &RequestContext) -> Result<(), RestfulError> {
    uid_guard(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_find_all_accepts_integers_and_missing() {
        let request = RequestContext::new().with_query_string("limit=10&offset=0");
        assert!(find_all(&request).is_ok());
        assert!(find_all(&RequestContext::new()).is_ok());
    }

    #[test]
    fn test_find_all_reports_each_bad_field() {
        let request = RequestContext::new().with_query_string("limit=ten&before=x");
        let err = find_all(&request).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message(),
            "The before field must be an integer. The limit field must be an integer."
        );
    }

    #[test]
    fn test_uid_guards() {
        let missing = RequestContext::new();
        let err = find_one(&missing).unwrap_err();
        assert_eq!(err.message(), "The uid field is required.");

        let bad = RequestContext::new().with_path("uid", "42");
        assert_eq!(update(&bad).unwrap_err().message(), "The uid field must be an UUID.");

        let good = RequestContext::new().with_path("uid", "a3bb189e-8bf9-4888-9912-ace4e6543002");
        assert!(delete(&good).is_ok());
    }

    #[test]
    fn test_queued_validations_share_session() {
        let request = RequestContext::new().with_query("limit", "x");
        let mut validator = Validator::new();
        retrieve_validation(&mut validator, &request);
        update_validation(&mut validator, &request);
        let errors = validator.finish();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.as_slice()[1].field, "uid");
    }
}
