//! consistent-analysis: infer a Go codebase's idioms and flag deviations.
//!
//! - Scanner: CLI targets to an ordered, de-duplicated list of `.go` files
//! - Parsers: tree-sitter Go parsing with fatal syntax errors
//! - Conventions: operation/variant catalog, matchers, election,
//!   scope-aware dispatcher, and the two-pass engine
//! - Reporters: text and JSON renderings of a run's report

pub mod conventions;
pub mod parsers;
pub mod reporters;
pub mod scanner;

pub use conventions::{
    Ambiguity, Catalog, ConventionEngine, Matcher, Operation, Report, Scope, Variant, VariantId,
    Warning,
};
pub use parsers::{GoParser, NodeRef, ParsedFile, Position};
pub use scanner::resolve_targets;
