//! consistent-core: shared plumbing for the go-consistent linter.
//!
//! - Errors: one `thiserror` enum per subsystem plus the aggregating `PipelineError`
//! - Config: TOML-based, layered resolution (CLI > env > project > defaults)
//! - Tracing: `tracing-subscriber` with `EnvFilter`, read from `CONSISTENT_LOG`

pub mod config;
pub mod errors;
pub mod tracing;

pub use config::{AnalysisConfig, CliOverrides, ConsistentConfig, ScanConfig};
pub use errors::{
    ConfigError, EngineError, ErrorCode, ParseError, PipelineError, ScanError,
};
