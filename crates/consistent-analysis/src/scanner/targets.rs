//! Target resolution: Go-style CLI arguments to absolute file paths.

use std::path::{Path, PathBuf};

use consistent_core::config::ScanConfig;
use consistent_core::errors::ScanError;
use ignore::WalkBuilder;
use rustc_hash::FxHashSet;

use super::filters::{is_go_file, is_skipped_dir, FileFilter};

/// One classified CLI argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single `.go` file.
    File(PathBuf),
    /// The `.go` files directly inside a directory (one package).
    Package(PathBuf),
    /// `dir/...`: every package below `dir`.
    Recursive(PathBuf),
    /// Anything else; logged and dropped.
    Unsupported(String),
}

impl Target {
    pub fn classify(raw: &str) -> Self {
        if raw == "..." {
            return Self::Recursive(PathBuf::from("."));
        }
        if let Some(dir) = raw.strip_suffix("/...") {
            let dir = if dir.is_empty() { "/" } else { dir };
            return Self::Recursive(PathBuf::from(dir));
        }
        let path = Path::new(raw);
        if is_go_file(path) {
            return Self::File(path.to_path_buf());
        }
        if path.is_dir() {
            return Self::Package(path.to_path_buf());
        }
        Self::Unsupported(raw.to_string())
    }
}

/// Expand `targets` into the batch of files to analyze.
///
/// Files of each target are sorted; targets keep their CLI order; a file
/// named by several targets appears once, at its first position.
pub fn resolve_targets(targets: &[String], config: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    let filter = FileFilter::new(config)?;
    let mut seen = FxHashSet::default();
    let mut files = Vec::new();

    for raw in targets {
        let expanded = match Target::classify(raw) {
            Target::File(path) => vec![absolute(&path)?],
            Target::Package(dir) => package_files(&dir)?,
            Target::Recursive(dir) => recursive_files(&dir)?,
            Target::Unsupported(raw) => {
                tracing::warn!("skip target {:?}: not a Go file", raw);
                continue;
            }
        };

        for path in expanded {
            if filter.accepts(&path) && seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    tracing::debug!(files = files.len(), "resolved targets");
    Ok(files)
}

fn absolute(path: &Path) -> Result<PathBuf, ScanError> {
    std::path::absolute(path).map_err(|source| ScanError::IoError {
        path: path.to_path_buf(),
        source,
    })
}

fn package_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ScanError::IoError {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::IoError {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && is_go_file(&path) {
            files.push(absolute(&path)?);
        }
    }
    files.sort();
    Ok(files)
}

fn recursive_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let root = absolute(dir)?;
    let walker = WalkBuilder::new(&root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(|entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            let name = entry.file_name().to_str().unwrap_or("");
            entry.depth() == 0 || !is_dir || !is_skipped_dir(name)
        })
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| ScanError::Walk {
            path: root.clone(),
            message: e.to_string(),
        })?;
        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        if is_file && is_go_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Target::classify("a.go"), Target::File(PathBuf::from("a.go")));
        assert_eq!(Target::classify("./..."), Target::Recursive(PathBuf::from(".")));
        assert_eq!(Target::classify("..."), Target::Recursive(PathBuf::from(".")));
        assert_eq!(
            Target::classify("pkg/sub/..."),
            Target::Recursive(PathBuf::from("pkg/sub"))
        );
        assert_eq!(
            Target::classify("github.com/x/y"),
            Target::Unsupported("github.com/x/y".to_string())
        );
    }
}
