//! Convention engine errors.

use super::error_code::{self, ErrorCode};

/// Errors raised by the convention engine itself.
///
/// None of these are recoverable; they indicate a broken catalog or a
/// driver that called the passes out of order.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("operation '{operation}' uses scope '{scope}', which is not implemented")]
    UnimplementedScope { operation: String, scope: String },

    #[error("operation '{operation}' declares no variants")]
    EmptyOperation { operation: String },

    #[error("operation '{operation}' is declared more than once")]
    DuplicateOperation { operation: String },

    #[error("operation '{operation}' has no elected convention")]
    ConventionNotElected { operation: String },

    #[error("engine is in state {actual}, expected {expected}")]
    OutOfOrder {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("failed to build inference thread pool: {0}")]
    ThreadPool(String),
}

impl ErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnimplementedScope { .. } => error_code::UNSUPPORTED_SCOPE,
            _ => error_code::ENGINE_ERROR,
        }
    }
}
