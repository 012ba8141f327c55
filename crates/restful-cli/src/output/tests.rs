// Tests for output formatting
//
// These tests cover field error and envelope rendering in every output
// format, and the writer's quiet and color handling.

use super::*;
use restful_core::{FieldLocation, RestfulError};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct Captured(Rc<RefCell<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(format: OutputFormat, quiet: bool) -> (OutputWriter, Captured) {
    let captured = Captured::default();
    let writer = OutputWriter::with_writer(format, false, quiet, 0, Box::new(captured.clone()));
    (writer, captured)
}

fn sample_errors() -> ValidationErrors {
    ValidationErrors::from(vec![
        FieldError {
            location: FieldLocation::Body,
            field: "email".to_string(),
            value: Some(serde_json::json!("not an email")),
            message: "The email field must be a valid email address.".to_string(),
        },
        FieldError {
            location: FieldLocation::Path,
            field: "uid".to_string(),
            value: None,
            message: "The uid field is required.".to_string(),
        },
    ])
}

#[test]
fn test_validation_errors_human() {
    let formatted = OutputFormat::Human
        .format_validation_errors(&sample_errors())
        .unwrap();
    assert!(formatted.starts_with("❌ Validation Failed - 2 Error(s)"));
    assert!(formatted.contains("1. 📍 body.email"));
    assert!(formatted.contains("💬 The email field must be a valid email address."));
    assert!(formatted.contains("📥 \"not an email\""));
    assert!(formatted.contains("2. 📍 params.uid"));
}

#[test]
fn test_validation_errors_json() {
    let formatted = OutputFormat::Json
        .format_validation_errors(&sample_errors())
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&formatted).unwrap();
    assert_eq!(parsed[0]["location"], "body");
    assert_eq!(parsed[1]["value"], serde_json::Value::Null);
}

#[test]
fn test_empty_validation_errors_human() {
    let formatted = OutputFormat::Human
        .format_validation_errors(&ValidationErrors::new())
        .unwrap();
    assert_eq!(formatted, "✅ No validation errors\n");
}

#[test]
fn test_envelope_formats() {
    let envelope = RestfulError::not_found().envelope();
    assert_eq!(
        OutputFormat::Human.format_envelope(&envelope).unwrap(),
        "404 not_found\nNot Found."
    );
    assert_eq!(
        OutputFormat::Json.format_envelope(&envelope).unwrap(),
        r#"{"code":404,"error":"not_found","error_description":"Not Found."}"#
    );
    let yaml = OutputFormat::Yaml.format_envelope(&envelope).unwrap();
    assert!(yaml.contains("error: not_found"));
}

#[test]
fn test_quiet_writer_keeps_data() {
    let (mut writer, captured) = capture(OutputFormat::Human, true);
    writer.info("hidden").unwrap();
    writer.success("hidden").unwrap();
    writer.data(&serde_json::json!({"kept": true})).unwrap();
    assert!(!captured.text().contains("hidden"));
    assert!(captured.text().contains("\"kept\": true"));
}

#[test]
fn test_machine_formats_skip_messages() {
    let (mut writer, captured) = capture(OutputFormat::Json, false);
    writer.info("info").unwrap();
    writer.warning("warning").unwrap();
    writer.error("error").unwrap();
    writer.section("section").unwrap();
    assert!(captured.text().is_empty());
}

#[test]
fn test_plain_messages_are_prefixed() {
    let (mut writer, captured) = capture(OutputFormat::Human, false);
    writer.info("loading").unwrap();
    writer.warning("careful").unwrap();
    writer.error("failed").unwrap();
    assert_eq!(captured.text(), "INFO: loading\nWARNING: careful\nERROR: failed\n");
}

#[test]
fn test_field_error_table_masks_secrets() {
    let errors = ValidationErrors::from(vec![FieldError {
        location: FieldLocation::Body,
        field: "password".to_string(),
        value: Some(serde_json::json!("hunter22")),
        message: "The password field must be at least 12 characters long.".to_string(),
    }]);
    let rows = field_error_rows(&errors);
    assert_eq!(rows[0][0], "body");
    assert_eq!(rows[0][2], "***");

    let (mut writer, captured) = capture(OutputFormat::Human, false);
    writer.table(&["Location", "Field", "Value", "Message"], rows).unwrap();
    let text = captured.text();
    assert!(text.lines().next().unwrap().starts_with("Location │ Field"));
    assert!(!text.contains("hunter22"));
}

#[test]
fn test_value_compact() {
    assert_eq!(format_value_compact(&serde_json::json!([1, 2, 3, 4])), "[4 items]");
    assert_eq!(format_value_compact(&serde_json::json!({"a": 1})), "{a: 1}");
    assert_eq!(format_value_compact(&serde_json::json!(null)), "null");
}
