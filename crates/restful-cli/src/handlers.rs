//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod check;
mod completions;
mod config;
mod envelope;
mod preset;

pub use check::handle_check;
pub use completions::handle_completions;
pub use config::handle_config;
pub use envelope::handle_envelope;
pub use preset::handle_preset;

use crate::config::is_yaml;
use crate::error::{Error, ErrorContext, Result};
use crate::logging::current_request_id;
use restful_core::{ErrorEnvelope, RequestContext, ValidationErrors};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Machine-readable outcome of a check
#[derive(Debug, Serialize)]
pub(crate) struct CheckReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope: Option<ErrorEnvelope>,
    #[serde(skip_serializing_if = "ValidationErrors::is_empty")]
    pub errors: ValidationErrors,
}

impl CheckReport {
    pub fn passed() -> Self {
        Self {
            request_id: current_request_id().map(str::to_string),
            valid: true,
            envelope: None,
            errors: ValidationErrors::new(),
        }
    }

    pub fn failed(envelope: ErrorEnvelope, errors: ValidationErrors) -> Self {
        Self {
            request_id: current_request_id().map(str::to_string),
            valid: false,
            envelope: Some(envelope),
            errors,
        }
    }
}

/// Load a request document
///
/// The document is a JSON or YAML object with optional `body`, `query` and
/// `params` maps.
pub(crate) fn load_request(path: &Path) -> Result<RequestContext> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    debug!("Request read successfully, {} bytes", content.len());

    let (parsed, expected) = if is_yaml(path) {
        (serde_yaml::from_str(&content).map_err(|e| e.to_string()), "YAML")
    } else {
        (serde_json::from_str(&content).map_err(|e| e.to_string()), "JSON")
    };

    parsed.map_err(|e| {
        debug!("Failed to parse request: {}", e);
        Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: format!("{} request document", expected),
        }
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::cli::OutputFormat;
    use crate::output::OutputWriter;
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;

    /// A writer whose contents stay readable after being boxed
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub fn writer(format: OutputFormat) -> (OutputWriter, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let output = OutputWriter::with_writer(format, false, false, 0, Box::new(buffer.clone()));
        (output, buffer)
    }
}
