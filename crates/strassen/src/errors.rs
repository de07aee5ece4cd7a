//! Error handling and exit codes.

use strassen_core::constants::exit_codes;
use strassen_core::MatrixError;

/// Map a matrix error to a process exit code.
pub fn handle_error(err: &MatrixError) -> i32 {
    match err {
        MatrixError::Mismatch => exit_codes::ERROR_MISMATCH,
        MatrixError::InvalidConfig(_) => exit_codes::ERROR_CONFIG,
        MatrixError::DimensionMismatch { .. }
        | MatrixError::InvalidBlockLayout(_)
        | MatrixError::NonSquare { .. }
        | MatrixError::OddDimension(_)
        | MatrixError::RaggedRows { .. }
        | MatrixError::IndexOutOfBounds { .. } => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for an application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<MatrixError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
