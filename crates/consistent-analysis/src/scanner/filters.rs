//! File-level filters applied after target expansion.

use std::path::Path;

use consistent_core::config::ScanConfig;
use consistent_core::errors::ScanError;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Directories never descended into by recursive targets.
pub const SKIPPED_DIRS: &[&str] = &["vendor", "testdata"];

/// Exclusion rules derived from `ScanConfig`.
#[derive(Debug)]
pub struct FileFilter {
    exclude: GlobSet,
    include_tests: bool,
    max_file_size: u64,
}

impl FileFilter {
    pub fn new(config: &ScanConfig) -> Result<Self, ScanError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.exclude {
            let glob = Glob::new(pattern).map_err(|e| ScanError::InvalidGlob {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            builder.add(glob);
        }
        let exclude = builder.build().map_err(|e| ScanError::InvalidGlob {
            pattern: config.exclude.join(", "),
            message: e.to_string(),
        })?;

        Ok(Self {
            exclude,
            include_tests: config.effective_include_tests(),
            max_file_size: config.effective_max_file_size(),
        })
    }

    /// Whether `path` (already known to be a `.go` file) stays in the batch.
    pub fn accepts(&self, path: &Path) -> bool {
        if !self.include_tests && is_test_file(path) {
            tracing::debug!(path = %path.display(), "skipping test file");
            return false;
        }
        if self.exclude.is_match(path) {
            tracing::debug!(path = %path.display(), "excluded by pattern");
            return false;
        }
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > self.max_file_size => {
                tracing::warn!(
                    path = %path.display(),
                    size = meta.len(),
                    max = self.max_file_size,
                    "skipping oversized file"
                );
                false
            }
            _ => true,
        }
    }
}

pub fn is_go_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "go")
}

pub fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with("_test.go"))
}

/// Whether a directory name is excluded from recursive walks.
pub fn is_skipped_dir(name: &str) -> bool {
    SKIPPED_DIRS.contains(&name) || name.starts_with('.') || name.starts_with('_')
}
