//! Envelope command handler

use crate::cli::EnvelopeArgs;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use restful_core::RestfulError;
use tracing::debug;

/// Handle the envelope command
pub fn handle_envelope(args: EnvelopeArgs, output: &mut OutputWriter) -> Result<()> {
    if !(400..=599).contains(&args.code) {
        return Err(Error::invalid_args(format!(
            "envelopes describe error statuses between 400 and 599, got {}",
            args.code
        )));
    }

    let mut error = RestfulError::from_code(args.code)?;
    if let Some(message) = args.message {
        error = error.with_message(message);
    }
    if let Some(kind) = args.error {
        error = error.with_kind(kind);
    }

    debug!(name = %error.name(), "Rendering envelope");
    output.debug(&format!("{} ({})", error.name(), error.status()))?;
    output.envelope(&error.envelope())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::handlers::test_support::writer;
    use restful_core::ErrorEnvelope;

    fn args(code: u16) -> EnvelopeArgs {
        EnvelopeArgs {
            code,
            message: None,
            error: None,
        }
    }

    #[test]
    fn test_default_envelope() {
        let (mut output, buffer) = writer(OutputFormat::Json);
        handle_envelope(args(404), &mut output).unwrap();
        let envelope: ErrorEnvelope = serde_json::from_str(buffer.contents().trim()).unwrap();
        assert_eq!(
            envelope,
            ErrorEnvelope {
                code: 404,
                error: "not_found".to_string(),
                error_description: "Not Found.".to_string(),
            }
        );
    }

    #[test]
    fn test_overrides() {
        let (mut output, buffer) = writer(OutputFormat::Human);
        let mut request = args(409);
        request.message = Some("The user (email=a@b.co) already exists.".to_string());
        request.error = Some("duplicate_user".to_string());
        handle_envelope(request, &mut output).unwrap();
        assert_eq!(
            buffer.contents(),
            "409 duplicate_user\nThe user (email=a@b.co) already exists.\n"
        );
    }

    #[test]
    fn test_yaml_output() {
        let (mut output, buffer) = writer(OutputFormat::Yaml);
        handle_envelope(args(503), &mut output).unwrap();
        let envelope: ErrorEnvelope = serde_yaml::from_str(&buffer.contents()).unwrap();
        assert_eq!(envelope.error, "service_unavailable");
    }

    #[test]
    fn test_rejects_success_codes() {
        let (mut output, buffer) = writer(OutputFormat::Human);
        assert!(matches!(
            handle_envelope(args(200), &mut output),
            Err(Error::InvalidArgs(_))
        ));
        assert!(buffer.contents().is_empty());
    }
}
