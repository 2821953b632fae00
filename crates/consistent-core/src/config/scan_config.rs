//! Target resolution configuration.

use serde::{Deserialize, Serialize};

/// Default maximum file size (1 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// Configuration for turning CLI targets into a file list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Glob patterns; matching files are dropped from the batch.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Analyze `_test.go` files. Default: true.
    pub include_tests: Option<bool>,
    /// Maximum file size in bytes. Default: 1 MiB.
    pub max_file_size: Option<u64>,
}

impl ScanConfig {
    /// Returns whether test files are analyzed, defaulting to true.
    pub fn effective_include_tests(&self) -> bool {
        self.include_tests.unwrap_or(true)
    }

    /// Returns the effective max file size, defaulting to 1 MiB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }
}
