//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ScanConfig};
use crate::errors::ConfigError;

/// File name looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "consistent.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CONSISTENT_*`)
/// 3. Project config (`consistent.toml` in the project root, or an explicit path)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConsistentConfig {
    pub scan: ScanConfig,
    pub analysis: AnalysisConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub pedantic: Option<bool>,
    pub threads: Option<usize>,
    pub include_tests: Option<bool>,
    pub exclude: Vec<String>,
}

impl ConsistentConfig {
    /// Load configuration with layered resolution.
    ///
    /// `explicit_path` must exist when given; otherwise `consistent.toml`
    /// in `root` is used when present.
    pub fn load(
        root: &Path,
        explicit_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match explicit_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, path)?;
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ConsistentConfig) -> Result<(), ConfigError> {
        if config.analysis.threads == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.scan.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut ConsistentConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ConsistentConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), "loaded project config");
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` (or non-empty) value.
    fn merge(base: &mut ConsistentConfig, other: &ConsistentConfig) {
        // Scan
        if !other.scan.exclude.is_empty() {
            base.scan.exclude = other.scan.exclude.clone();
        }
        if other.scan.include_tests.is_some() {
            base.scan.include_tests = other.scan.include_tests;
        }
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }

        // Analysis
        if other.analysis.pedantic.is_some() {
            base.analysis.pedantic = other.analysis.pedantic;
        }
        if other.analysis.threads.is_some() {
            base.analysis.threads = other.analysis.threads;
        }
        if !other.analysis.disabled_operations.is_empty() {
            base.analysis.disabled_operations = other.analysis.disabled_operations.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CONSISTENT_THREADS`, `CONSISTENT_MAX_FILE_SIZE`, etc.
    fn apply_env_overrides(config: &mut ConsistentConfig) {
        if let Ok(val) = std::env::var("CONSISTENT_PEDANTIC") {
            if let Ok(v) = val.parse::<bool>() {
                config.analysis.pedantic = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CONSISTENT_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CONSISTENT_INCLUDE_TESTS") {
            if let Ok(v) = val.parse::<bool>() {
                config.scan.include_tests = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CONSISTENT_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.scan.max_file_size = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    /// CLI exclude patterns extend, rather than replace, the configured ones.
    fn apply_cli_overrides(config: &mut ConsistentConfig, cli: &CliOverrides) {
        if let Some(v) = cli.pedantic {
            config.analysis.pedantic = Some(v);
        }
        if let Some(v) = cli.threads {
            config.analysis.threads = Some(v);
        }
        if let Some(v) = cli.include_tests {
            config.scan.include_tests = Some(v);
        }
        config.scan.exclude.extend(cli.exclude.iter().cloned());
    }
}
