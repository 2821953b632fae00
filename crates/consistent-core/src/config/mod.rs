//! Configuration system for go-consistent.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod analysis_config;
pub mod consistent_config;
pub mod scan_config;

pub use analysis_config::AnalysisConfig;
pub use consistent_config::{CliOverrides, ConsistentConfig, PROJECT_CONFIG_FILE};
pub use scan_config::ScanConfig;
