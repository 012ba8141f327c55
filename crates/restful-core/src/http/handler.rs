//! Error handler
//!
//! The last stop for errors leaving a request handler. Application errors
//! become envelope responses; anything else is handed back untouched so the
//! surrounding framework can deal with it.
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

use super::error::RestfulError;
use http::Response;
use std::error::Error as StdError;
use tracing::{error, warn};

/// Find an application error in `err` or its source chain
pub fn recognize<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a RestfulError> {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(restful) = err.downcast_ref::<RestfulError>() {
            return Some(restful);
        }
        current = err.source();
    }
    None
}

/// Render an application error, logging by severity
pub fn respond(err: &RestfulError) -> crate::Result<Response<String>> {
    if err.is_server_error() {
        error!(code = err.code(), error = err.kind(), "{}", err.message());
    } else {
        warn!(code = err.code(), error = err.kind(), "{}", err.message());
    }
    err.clone().into_response()
}

/// Turn an application error into its envelope response
///
/// Context added with `anyhow` does not hide the application error. Any
/// other error is returned as is.
pub fn handle_error(err: anyhow::Error) -> Result<Response<String>, anyhow::Error> {
    let restful = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<RestfulError>())
        .cloned();
    match restful {
        Some(restful) => respond(&restful).map_err(anyhow::Error::from),
        None => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::error::ErrorEnvelope;
    use anyhow::Context;
    use http::StatusCode;

    fn load_user() -> anyhow::Result<()> {
        let lookup: Result<(), RestfulError> =
            Err(RestfulError::not_found().with_message("The user is not found."));
        lookup.context("loading user")
    }

    #[test]
    fn test_handles_wrapped_application_error() {
        let response = handle_error(load_user().unwrap_err()).unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let envelope: ErrorEnvelope = serde_json::from_str(response.body()).unwrap();
        assert_eq!(envelope.error, "not_found");
        assert_eq!(envelope.error_description, "The user is not found.");
    }

    #[test]
    fn test_passes_foreign_errors_through() {
        let err = anyhow::anyhow!("database offline");
        let passed = handle_error(err).unwrap_err();
        assert_eq!(passed.to_string(), "database offline");
    }

    #[derive(Debug, thiserror::Error)]
    #[error("handler failed")]
    struct HandlerFailure(#[source] RestfulError);

    #[test]
    fn test_recognize_walks_sources() {
        let wrapped = HandlerFailure(RestfulError::gone());
        assert_eq!(recognize(&wrapped).map(RestfulError::code), Some(410));

        let plain = std::io::Error::new(std::io::ErrorKind::Other, "plain");
        assert!(recognize(&plain).is_none());
    }
}
