//! ErrorCode trait for stable, machine-readable failure codes.

/// Every error enum implements this so the CLI can report a stable code
/// alongside the human-readable message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const ENGINE_ERROR: &str = "ENGINE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const UNSUPPORTED_SCOPE: &str = "UNSUPPORTED_SCOPE";
