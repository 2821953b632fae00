//! go-consistent: infer a Go codebase's idioms and report deviations.
//!
//! ## Usage
//!
//! ```bash
//! go-consistent ./...                  # Every package below the current dir
//! go-consistent pkg/a.go pkg/b.go      # Explicit files
//! go-consistent --format json ./...    # Machine-readable report
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use consistent_analysis::reporters::{available_formats, create_reporter};
use consistent_analysis::{resolve_targets, ConventionEngine, Report};
use consistent_core::errors::ErrorCode;
use consistent_core::tracing::init_tracing;
use consistent_core::{CliOverrides, ConsistentConfig, PipelineError};

const EXIT_WARNINGS: u8 = 1;
const EXIT_FATAL: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "go-consistent", version, about)]
struct Cli {
    /// Files, package directories, or `dir/...` patterns.
    #[arg(default_value = ".")]
    targets: Vec<String>,

    /// Enable pedantic mode.
    #[arg(long)]
    pedantic: bool,

    /// Output format.
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Worker threads for the inference pass.
    #[arg(long)]
    threads: Option<usize>,

    /// Drop files matching this glob (repeatable).
    #[arg(long = "exclude", value_name = "GLOB")]
    exclude: Vec<String>,

    /// Skip `_test.go` files.
    #[arg(long)]
    no_tests: bool,

    /// Config file; defaults to `./consistent.toml` when present.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log the elected convention and counts of every operation.
    #[arg(long)]
    summary: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            pedantic: self.pedantic.then_some(true),
            threads: self.threads,
            include_tests: self.no_tests.then_some(false),
            exclude: self.exclude.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("unknown format '{format}', expected one of: {}", available_formats().join(", "))]
    UnknownFormat { format: String },

    #[error("report generation failed: {0}")]
    Report(String),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    fn render(&self) -> String {
        match self {
            Self::Pipeline(e) => e.coded_message(),
            other => other.to_string(),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(report) if report.has_warnings() => ExitCode::from(EXIT_WARNINGS),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("go-consistent: {}", e.render());
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(cli: Cli) -> Result<Report, CliError> {
    let reporter = create_reporter(&cli.format).ok_or_else(|| CliError::UnknownFormat {
        format: cli.format.clone(),
    })?;

    let config = ConsistentConfig::load(Path::new("."), cli.config.as_deref(), Some(&cli.overrides()))
        .map_err(PipelineError::from)?;

    let files = resolve_targets(&cli.targets, &config.scan).map_err(PipelineError::from)?;
    tracing::info!(files = files.len(), "analyzing");

    let engine = ConventionEngine::from_config(&config.analysis).map_err(PipelineError::from)?;
    let report = engine.run(&files)?;

    if cli.summary {
        log_summary(&report);
    }

    let output = reporter.generate(&report).map_err(CliError::Report)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(report)
}

fn log_summary(report: &Report) {
    for operation in &report.operations {
        let counts = operation
            .variants
            .iter()
            .map(|v| format!("{}={}", v.name, v.count))
            .collect::<Vec<_>>()
            .join(" ");
        tracing::info!(
            "{} ({}): {} [{}]",
            operation.name,
            operation.scope,
            operation.convention.as_deref().unwrap_or("-"),
            counts
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["go-consistent"]).unwrap();
        assert_eq!(cli.targets, vec!["."]);
        assert_eq!(cli.format, "text");
        let overrides = cli.overrides();
        assert_eq!(overrides.pedantic, None);
        assert_eq!(overrides.include_tests, None);
    }

    #[test]
    fn test_flags_map_to_overrides() {
        let cli = Cli::try_parse_from([
            "go-consistent",
            "--pedantic",
            "--no-tests",
            "--threads",
            "4",
            "--exclude",
            "**/gen_*.go",
            "--exclude",
            "**/mock_*.go",
            "./...",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.pedantic, Some(true));
        assert_eq!(overrides.include_tests, Some(false));
        assert_eq!(overrides.threads, Some(4));
        assert_eq!(overrides.exclude.len(), 2);
        assert_eq!(cli.targets, vec!["./..."]);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["go-consistent", "--format", "xml"]).is_err());
    }
}
