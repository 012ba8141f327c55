//! Property-based tests for the validation session
//!
//! These tests verify ordering, first-failure-wins and reset behaviour over
//! generated requests.

use proptest::prelude::*;
use restful_core::validation::{messages, predicates};
use restful_core::{IntOptions, LengthOptions, RequestContext, RestfulError, Validator};
use std::collections::BTreeSet;

/// Strategy for distinct field names
fn field_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-z][a-z0-9_]{0,12}", 1..8)
        .prop_map(|names: BTreeSet<String>| names.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_failures_keep_selection_order(names in field_names()) {
        let mut request = RequestContext::new();
        for name in &names {
            request = request.with_body(name.clone(), "not-a-number");
        }
        let mut validator = Validator::new();
        for name in &names {
            validator.body(&request, name).is_int(IntOptions::default());
        }
        let errors = validator.finish();
        let fields: Vec<String> = errors.iter().map(|e| e.field.clone()).collect();
        prop_assert_eq!(fields, names.clone());

        let expected: Vec<String> = names.iter().map(|n| messages::is_int(n, &IntOptions::default())).collect();
        prop_assert_eq!(errors.describe(), expected.join(" "));
    }

    #[test]
    fn prop_never_selected_is_empty(names in field_names()) {
        let mut request = RequestContext::new();
        for name in &names {
            request = request.with_query(name.clone(), "x");
        }
        let mut validator = Validator::new();
        prop_assert!(validator.validation_result().is_empty());
    }

    #[test]
    fn prop_first_failure_wins(value in "[a-z]{1,20}") {
        let request = RequestContext::new().with_body("field", value.clone());
        let mut validator = Validator::new();
        validator
            .body(&request, "field")
            .is_int(IntOptions::default())
            .is_uppercase()
            .is_length(LengthOptions::at_least(100));
        let errors = validator.finish();
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(
            errors.as_slice()[0].message.clone(),
            messages::is_int("field", &IntOptions::default())
        );
    }

    #[test]
    fn prop_result_resets_session(values in proptest::collection::vec("[a-z]{1,5}", 1..6)) {
        let mut request = RequestContext::new();
        for (i, value) in values.iter().enumerate() {
            request = request.with_body(format!("f{}", i), value.clone());
        }
        let mut validator = Validator::new();
        for i in 0..values.len() {
            validator.body(&request, &format!("f{}", i)).is_int(IntOptions::default());
        }
        prop_assert_eq!(validator.validation_result().len(), values.len());
        prop_assert!(validator.validation_result().is_empty());
    }

    #[test]
    fn prop_integers_pass_bounds(n in -1000i64..1000) {
        let request = RequestContext::new().with_query("n", n.to_string());
        let mut validator = Validator::new();
        validator.query(&request, "n").is_int(IntOptions::between(-1000, 999));
        prop_assert!(validator.finish().is_empty());
    }

    #[test]
    fn prop_predicates_never_panic(value in "\\PC{0,40}") {
        for rule in [
            restful_core::Rule::IsEmail,
            restful_core::Rule::IsUrl,
            restful_core::Rule::IsIso8601,
            restful_core::Rule::IsCreditCard,
            restful_core::Rule::IsIsin,
            restful_core::Rule::IsLatLong,
        ] {
            let _ = predicates::evaluate(&rule, &value);
        }
    }

    #[test]
    fn prop_envelope_code_matches_status(code in 400u16..600) {
        let err = RestfulError::from_code(code).unwrap();
        prop_assert_eq!(err.envelope().code, code);
        prop_assert!(err.message().ends_with('.'));
    }
}
