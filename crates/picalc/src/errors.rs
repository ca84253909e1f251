//! Error handling and exit codes.

use picalc_core::constants::exit_codes;
use picalc_core::PiError;

/// Map a computation error to the process exit code.
pub fn handle_error(err: &PiError) -> i32 {
    match err {
        PiError::InvalidRequest(_) => exit_codes::ERROR_CONFIG,
        PiError::BackendUnavailable(_) => exit_codes::ERROR_BACKEND,
        PiError::WorkerFailure { .. } => exit_codes::ERROR_WORKER,
        PiError::Arithmetic(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error surfaced by the application.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<PiError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
