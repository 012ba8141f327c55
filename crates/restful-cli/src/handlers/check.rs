//! Check command handler

use super::{load_request, CheckReport};
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{Error, ErrorContext, Result};
use crate::logging::{redaction, timing::Timer};
use crate::output::{field_error_rows, OutputWriter};
use restful_core::{handle_error, ErrorEnvelope, RequestContext, RestfulError, RuleSet, ValidationErrors};
use tracing::{debug, info, instrument, warn};

/// Handle the check command
#[instrument(skip(config, output), fields(request = %args.request.display(), rules = %args.rules.display()))]
pub fn handle_check(args: CheckArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let timer = Timer::with_details("check_command", &args.request.display().to_string());
    let status = failure_status(args.status)?;

    if !args.rules.exists() {
        return Err(Error::FileNotFound {
            path: args.rules.clone(),
        });
    }
    let rule_set = RuleSet::from_path(&args.rules)?;
    let request = load_request(&args.request)?;

    output.info(&format!(
        "Checking {} against {} field check(s)",
        args.request.display(),
        rule_set.len()
    ))?;

    let errors = rule_set.validate_with(&request, config.validator.clone());
    debug!(
        errors = errors.len(),
        elapsed_us = timer.elapsed().as_micros() as u64,
        "Rule set applied"
    );

    if errors.is_empty() {
        info!("Request passed validation");
        output.success("✓ Request is valid")?;
        if !output.is_human() {
            output.data(&CheckReport::passed())?;
        }
        return Ok(());
    }

    warn!("Request failed validation with {} error(s)", errors.len());
    let count = errors.len();
    let envelope = render_failure(status, errors.clone(), &args.request.display().to_string())?;
    let detailed = args.detailed || config.output.detailed;

    if output.is_human() {
        output.error("✗ Request failed validation")?;
        output.envelope(&envelope)?;
        if detailed {
            show_details(output, &errors, &request)?;
        }
    } else {
        output.data(&CheckReport::failed(envelope, errors))?;
    }

    Err(Error::ValidationFailed { count })
}

/// Status codes a failed check may report
fn failure_status(code: u16) -> Result<RestfulError> {
    if !(400..=599).contains(&code) {
        return Err(Error::invalid_args(format!(
            "--status must be an error status between 400 and 599, got {}",
            code
        )));
    }
    Ok(RestfulError::from_code(code)?)
}

/// Send the failure through the error handler, as a route would
fn render_failure(
    status: RestfulError,
    errors: ValidationErrors,
    source: &str,
) -> Result<ErrorEnvelope> {
    let failure = anyhow::Error::new(status.with_message(errors))
        .context(format!("validating {}", source));
    let response = handle_error(failure).map_err(|e| Error::other(format!("{:#}", e)))?;
    serde_json::from_str::<ErrorEnvelope>(response.body()).context("decoding error envelope")
}

fn show_details(
    output: &mut OutputWriter,
    errors: &ValidationErrors,
    request: &RequestContext,
) -> Result<()> {
    output.section("Field Errors")?;
    output.table(&["Location", "Field", "Value", "Message"], field_error_rows(errors))?;

    output.section("Request")?;
    let mut redacted = serde_json::to_value(request)?;
    redaction::redact_json_value(&mut redacted);
    output.data(&redacted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::handlers::test_support::writer;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const RULES: &str = r#"
checks:
  - field: uid
    location: params
    rules:
      - rule: exists
      - rule: isUUID
  - field: email
    location: body
    rules:
      - rule: isEmail
  - field: limit
    location: query
    rules:
      - rule: isInt
        min: 1
        max: 100
"#;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn args(request: PathBuf, rules: PathBuf) -> CheckArgs {
        CheckArgs {
            request,
            rules,
            status: 400,
            detailed: false,
        }
    }

    #[test]
    fn test_valid_request() {
        let dir = TempDir::new().unwrap();
        let rules = write(dir.path(), "rules.yaml", RULES);
        let request = write(
            dir.path(),
            "request.json",
            r#"{"params": {"uid": "a3bb189e-8bf9-4888-9912-ace4e6543002"},
                "body": {"email": "john@example.com"},
                "query": {"limit": "5"}}"#,
        );

        let (mut output, buffer) = writer(OutputFormat::Human);
        handle_check(args(request, rules), &Config::default(), &mut output).unwrap();
        assert!(buffer.contents().contains("✓ Request is valid"));
    }

    #[test]
    fn test_failure_prints_envelope() {
        let dir = TempDir::new().unwrap();
        let rules = write(dir.path(), "rules.yaml", RULES);
        let request = write(
            dir.path(),
            "request.json",
            r#"{"body": {"email": "nope"}, "query": {"limit": "500"}}"#,
        );

        let (mut output, buffer) = writer(OutputFormat::Json);
        let err = handle_check(args(request, rules), &Config::default(), &mut output).unwrap_err();
        assert!(matches!(err, Error::ValidationFailed { count: 3 }));

        let report: serde_json::Value = serde_json::from_str(buffer.contents().trim()).unwrap();
        assert_eq!(report["valid"], false);
        assert_eq!(report["envelope"]["code"], 400);
        assert_eq!(report["envelope"]["error"], "bad_request");
        assert_eq!(
            report["envelope"]["error_description"],
            "The uid field is required. \
             The email field must be a valid email address. \
             The limit field must be an integer with value between 1 and 100."
        );
        assert_eq!(report["errors"][0]["location"], "params");
        assert_eq!(report["errors"][1]["value"], "nope");
    }

    #[test]
    fn test_custom_status_and_details() {
        let dir = TempDir::new().unwrap();
        let rules = write(dir.path(), "rules.json", r#"{"checks": [{"field": "password", "location": "body", "rules": [{"rule": "isLength", "min": 12}]}]}"#);
        let request = write(dir.path(), "request.yaml", "body:\n  password: short\n");

        let (mut output, buffer) = writer(OutputFormat::Human);
        let mut check = args(request, rules);
        check.status = 422;
        check.detailed = true;
        assert!(handle_check(check, &Config::default(), &mut output).is_err());

        let text = buffer.contents();
        assert!(text.contains("422 unprocessable_entity"));
        assert!(text.contains("=== Field Errors ==="));
        assert!(text.contains("***"));
        assert!(!text.contains("\"short\""));
    }

    #[test]
    fn test_rejects_non_error_status() {
        let dir = TempDir::new().unwrap();
        let rules = write(dir.path(), "rules.yaml", RULES);
        let request = write(dir.path(), "request.json", "{}");
        let mut check = args(request, rules);
        check.status = 200;

        let (mut output, _) = writer(OutputFormat::Human);
        let err = handle_check(check, &Config::default(), &mut output).unwrap_err();
        assert!(err.should_show_help());
    }

    #[test]
    fn test_missing_rules_file() {
        let dir = TempDir::new().unwrap();
        let request = write(dir.path(), "request.json", "{}");
        let (mut output, _) = writer(OutputFormat::Human);
        let err = handle_check(
            args(request, dir.path().join("absent.yaml")),
            &Config::default(),
            &mut output,
        )
        .unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
