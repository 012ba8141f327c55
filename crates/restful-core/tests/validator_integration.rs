//! Integration tests driving the validator the way a handler would
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

use restful_core::validation::messages;
use restful_core::{
    handle_error, presets, ErrorEnvelope, FloatOptions, RequestContext, RestfulError, RuleSet,
    Validator,
};
use serde_json::json;

const UID: &str = "a3bb189e-8bf9-4888-9912-ace4e6543002";

/// A create-resource handler with one check per field
fn create_handler(request: &RequestContext) -> Result<(), RestfulError> {
    let mut check = Validator::new();
    check.path(request, "uid").exists();
    check.body(request, "name").equals("John Doe");
    check.body(request, "after").is_after(None);
    check.body(request, "alpha").is_alpha(None);
    check.body(request, "alphanumeric").is_alphanumeric(None);
    check.body(request, "base64").is_base64();
    check.body(request, "before").is_before(None);
    check.body(request, "boolean").is_boolean();
    check.body(request, "email").is_email();
    check.body(request, "float").is_float(FloatOptions::default());
    check.finish().into_result().map_err(RestfulError::from)
}

fn description(result: Result<(), RestfulError>) -> String {
    let err = result.unwrap_err();
    assert_eq!(err.code(), 400);
    assert_eq!(err.kind(), "bad_request");
    err.message().to_string()
}

#[test]
fn test_missing_uid() {
    let request = RequestContext::new();
    assert_eq!(description(create_handler(&request)), messages::exists("uid"));
}

#[test]
fn test_equals_failure() {
    let request = RequestContext::new()
        .with_path("uid", UID)
        .with_body("name", "John");
    assert_eq!(
        description(create_handler(&request)),
        "The name field must equal to John Doe."
    );
}

#[test]
fn test_date_failures() {
    let request = RequestContext::new()
        .with_path("uid", UID)
        .with_body("after", "1999-12-31");
    let message = description(create_handler(&request));
    assert!(message.starts_with("The after field must be a date after "));

    let request = RequestContext::new()
        .with_path("uid", UID)
        .with_body("before", "2999-01-01T00:00:00Z");
    let message = description(create_handler(&request));
    assert!(message.starts_with("The before field must be a date before "));
}

#[test]
fn test_character_class_failures() {
    let request = RequestContext::new()
        .with_path("uid", UID)
        .with_body("alpha", "12345678");
    assert_eq!(
        description(create_handler(&request)),
        messages::is_alpha("alpha", None)
    );

    let request = RequestContext::new()
        .with_path("uid", UID)
        .with_body("alphanumeric", "!@#$%^&*");
    assert_eq!(
        description(create_handler(&request)),
        messages::is_alphanumeric("alphanumeric", None)
    );

    let request = RequestContext::new()
        .with_path("uid", UID)
        .with_body("base64", "!@#$%^&*");
    assert_eq!(
        description(create_handler(&request)),
        "The base64 field must be a base64 encoded string."
    );
}

#[test]
fn test_several_failures_join_in_order() {
    let request = RequestContext::from_body(json!({
        "boolean": "not a boolean",
        "email": "not an email",
        "float": "not a float"
    }))
    .with_path("uid", UID);
    assert_eq!(
        description(create_handler(&request)),
        "The boolean field must be a boolean. \
         The email field must be a valid email address. \
         The float field must be a float in en-US locale."
    );
}

#[test]
fn test_valid_request_passes() {
    let request = RequestContext::from_body(json!({
        "name": "John Doe",
        "after": "2999-01-01",
        "alpha": "abc",
        "alphanumeric": "abc123",
        "base64": "Zm9vYmFy",
        "before": "2000-01-01",
        "boolean": "true",
        "email": "john@example.com",
        "float": "1.5"
    }))
    .with_path("uid", UID);
    assert!(create_handler(&request).is_ok());
}

#[test]
fn test_preset_guards() {
    let request = RequestContext::new().with_query_string("limit=abc");
    let err = presets::find_all(&request).unwrap_err();
    assert_eq!(err.message(), "The limit field must be an integer.");

    for guard in [presets::find_one, presets::update, presets::delete] {
        let err = guard(&RequestContext::new()).unwrap_err();
        assert_eq!(err.message(), messages::exists("uid"));
        assert!(guard(&RequestContext::new().with_path("uid", UID)).is_ok());
    }
}

#[test]
fn test_queued_presets() {
    let mut check = Validator::new();
    presets::update_validation(&mut check, &RequestContext::new());
    assert_eq!(check.validation_result().describe(), messages::exists("uid"));

    presets::delete_validation(&mut check, &RequestContext::new().with_path("uid", "x"));
    presets::retrieve_validation(&mut check, &RequestContext::new().with_query("offset", "1"));
    assert!(check.validation_result().is_empty());
}

#[test]
fn test_handler_renders_validation_failure() {
    let request = RequestContext::new();
    let err = anyhow::Error::new(create_handler(&request).unwrap_err());
    let response = handle_error(err).unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let envelope: ErrorEnvelope = serde_json::from_str(response.body()).unwrap();
    assert_eq!(
        envelope,
        ErrorEnvelope {
            code: 400,
            error: "bad_request".to_string(),
            error_description: "The uid field is required.".to_string(),
        }
    );
}

#[test]
fn test_rule_set_matches_fluent_chain() {
    let rule_set = RuleSet::from_yaml_str(
        r#"
checks:
  - field: uid
    location: params
    rules:
      - rule: exists
  - field: name
    location: body
    rules:
      - rule: equals
        comparison: John Doe
"#,
    )
    .unwrap();
    let request = RequestContext::new().with_body("name", "John");

    let mut check = Validator::new();
    check.path(&request, "uid").exists();
    check.body(&request, "name").equals("John Doe");

    assert_eq!(rule_set.validate(&request), check.finish());
}
