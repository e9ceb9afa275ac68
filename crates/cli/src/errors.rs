//! Mapping command failures to exit codes and machine-readable reports

use babybet_application::ApplicationError;
use babybet_domain::{AppError, ErrorResponse};

/// Code reported for failures that carry no domain error
const UNKNOWN_ERROR: &str = "INTERNAL_ERROR";

/// Machine-readable code of a command failure
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(err) = err.downcast_ref::<ApplicationError>() {
        err.error_code()
    } else if let Some(err) = err.downcast_ref::<AppError>() {
        err.error_code()
    } else {
        UNKNOWN_ERROR
    }
}

/// Process exit code of a command failure; 1 when nothing more specific applies
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = if let Some(err) = err.downcast_ref::<ApplicationError>() {
        err.exit_code()
    } else if let Some(err) = err.downcast_ref::<AppError>() {
        err.exit_code()
    } else {
        1
    };
    u8::try_from(code).unwrap_or(1)
}

/// Error report printed to stderr when output is JSON.
///
/// The message carries the whole context chain.
pub fn error_response(err: &anyhow::Error) -> ErrorResponse {
    let mut response = match err.downcast_ref::<AppError>() {
        Some(app_error) => ErrorResponse::from(app_error),
        None => ErrorResponse::new(error_code(err), ""),
    };
    response.error.message = format!("{:#}", err);
    response
}
