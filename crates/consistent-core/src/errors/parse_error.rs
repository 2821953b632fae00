//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while turning a Go source file into a syntax tree.
///
/// Every variant is fatal to the run: inference never proceeds on a partial
/// view of the batch.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Grammar not found for language: {language}")]
    GrammarNotFound { language: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Tree-sitter produced no tree for {path}")]
    NoTree { path: PathBuf },

    #[error("{path}:{line}:{column}: syntax error near `{near}`")]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
        near: String,
    },
}

impl ErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
