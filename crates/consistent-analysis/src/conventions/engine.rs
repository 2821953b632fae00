//! Two-pass convention engine: INFER tallies, election, then DETECT.

use std::fmt;
use std::path::{Path, PathBuf};

use consistent_core::config::AnalysisConfig;
use consistent_core::errors::{ConfigError, EngineError, PipelineError};
use rayon::prelude::*;

use crate::parsers::{with_go_parser, ParsedFile};

use super::catalog::Catalog;
use super::dispatch::{visit_operations, VisitDecision};
use super::report::Report;
use super::tally::Tally;
use super::types::{Ambiguity, Warning};

/// Where the engine is in its run. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Infer,
    Detect,
    Done,
}

impl EngineState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Infer => "INFER",
            Self::Detect => "DETECT",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Count every matched occurrence in one file.
pub fn infer_file(catalog: &Catalog, file: &ParsedFile) -> Result<Tally, EngineError> {
    let mut tally = Tally::for_catalog(catalog);
    visit_operations(catalog, file, |target, node| {
        let Some(node) = node else {
            return VisitDecision::Prune;
        };
        let matcher = target.variant.matcher();
        if !matcher.skip(node) && matcher.matches(node) {
            tally.record(target.id);
        }
        VisitDecision::Descend
    })?;
    Ok(tally)
}

/// Append a warning for every matched occurrence that is not its
/// operation's convention. Election must already have run.
pub fn detect_file(
    catalog: &Catalog,
    file: &ParsedFile,
    warnings: &mut Vec<Warning>,
) -> Result<(), EngineError> {
    if let Some(op) = catalog.operations().iter().find(|op| op.convention().is_none()) {
        return Err(EngineError::ConventionNotElected {
            operation: op.name().to_string(),
        });
    }

    visit_operations(catalog, file, |target, node| {
        let Some(node) = node else {
            return VisitDecision::Prune;
        };
        let matcher = target.variant.matcher();
        if matcher.skip(node) || !matcher.matches(node) {
            return VisitDecision::Descend;
        }
        if target.operation.convention_index() != Some(target.id.variant) {
            if let Some(convention) = target.operation.convention() {
                warnings.push(Warning::new(
                    file.position_of(node),
                    target.operation,
                    convention,
                    target.variant,
                ));
            }
        }
        VisitDecision::Descend
    })
}

fn parse(path: &Path) -> Result<ParsedFile, PipelineError> {
    Ok(with_go_parser(|parser| parser.parse_file(path))?)
}

fn infer_path(catalog: &Catalog, path: &Path) -> Result<Tally, PipelineError> {
    let file = parse(path)?;
    let tally = infer_file(catalog, &file)?;
    tracing::debug!(path = %path.display(), matches = tally.total(), "inferred");
    Ok(tally)
}

/// Drives INFER and DETECT over one batch of files.
///
/// Any parse failure aborts the pass it happens in; no warnings are kept
/// from a pass that did not finish.
#[derive(Debug)]
pub struct ConventionEngine {
    catalog: Catalog,
    state: EngineState,
    threads: usize,
    pedantic: bool,
    ambiguities: Vec<Ambiguity>,
    warnings: Vec<Warning>,
}

impl ConventionEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: EngineState::Infer,
            threads: 1,
            pedantic: false,
            ambiguities: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Standard catalog minus disabled operations, with config knobs applied.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, ConfigError> {
        let catalog = Catalog::standard().without(&config.disabled_operations)?;
        Ok(Self::new(catalog)
            .with_threads(config.effective_threads())
            .with_pedantic(config.effective_pedantic()))
    }

    /// Inference workers; 1 keeps the pass on the calling thread.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn with_pedantic(mut self, pedantic: bool) -> Self {
        self.pedantic = pedantic;
        self
    }

    pub fn is_pedantic(&self) -> bool {
        self.pedantic
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ambiguities(&self) -> &[Ambiguity] {
        &self.ambiguities
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    fn expect_state(&self, expected: EngineState) -> Result<(), EngineError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(EngineError::OutOfOrder {
                expected: expected.name(),
                actual: self.state.name(),
            })
        }
    }

    /// Pass 1: tally every file, then elect conventions.
    pub fn infer(&mut self, files: &[PathBuf]) -> Result<&[Ambiguity], PipelineError> {
        self.expect_state(EngineState::Infer)?;
        tracing::info!(files = files.len(), threads = self.threads, "inferring conventions");

        let total = if self.threads > 1 {
            self.infer_parallel(files)?
        } else {
            let mut total = Tally::for_catalog(&self.catalog);
            for path in files {
                total.merge(&infer_path(&self.catalog, path)?);
            }
            total
        };

        self.catalog.absorb(&total);
        self.ambiguities = self.catalog.elect_conventions();
        self.state = EngineState::Detect;
        Ok(&self.ambiguities)
    }

    fn infer_parallel(&self, files: &[PathBuf]) -> Result<Tally, PipelineError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        let catalog = &self.catalog;
        let tallies: Vec<Tally> = pool.install(|| {
            files
                .par_iter()
                .map(|path| infer_path(catalog, path))
                .collect::<Result<Vec<_>, _>>()
        })?;

        let mut total = Tally::for_catalog(catalog);
        for tally in &tallies {
            total.merge(tally);
        }
        Ok(total)
    }

    /// Pass 2: flag every occurrence that deviates from its convention.
    pub fn detect(&mut self, files: &[PathBuf]) -> Result<&[Warning], PipelineError> {
        self.expect_state(EngineState::Detect)?;
        tracing::info!(files = files.len(), "checking consistency");

        let mut warnings = Vec::new();
        for path in files {
            let file = parse(path)?;
            let before = warnings.len();
            detect_file(&self.catalog, &file, &mut warnings)?;
            tracing::debug!(
                path = %path.display(),
                warnings = warnings.len() - before,
                "checked"
            );
        }

        self.warnings = warnings;
        self.state = EngineState::Done;
        Ok(&self.warnings)
    }

    /// Run both passes over the same file list.
    pub fn run(mut self, files: &[PathBuf]) -> Result<Report, PipelineError> {
        self.infer(files)?;
        self.detect(files)?;
        Ok(self.into_report()?)
    }

    /// Final, read-only outcome. Only available after DETECT.
    pub fn into_report(self) -> Result<Report, EngineError> {
        self.expect_state(EngineState::Done)?;
        Ok(Report {
            operations: self.catalog.summary(),
            ambiguities: self.ambiguities,
            warnings: self.warnings,
        })
    }
}
