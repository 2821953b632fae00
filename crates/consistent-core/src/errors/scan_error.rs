//! Target resolution errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while turning CLI targets into a file list.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Walk error under {path}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("Invalid exclude pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },
}

impl ErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
