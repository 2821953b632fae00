//! Convention inference: catalog, matchers, election, dispatcher, engine.
//!
//! Pass 1 (INFER) counts how often each idiom variant appears across the
//! batch; election picks the majority per operation; pass 2 (DETECT) walks
//! the same files again and reports every occurrence of a losing variant.

pub mod catalog;
pub mod dispatch;
pub mod election;
pub mod engine;
pub mod matchers;
pub mod report;
pub mod tally;
pub mod types;

pub use catalog::{Catalog, OperationSummary, VariantSummary};
pub use dispatch::{visit_operations, VisitDecision, VisitTarget};
pub use engine::{detect_file, infer_file, ConventionEngine, EngineState};
pub use report::Report;
pub use tally::Tally;
pub use types::{Ambiguity, Matcher, Operation, Scope, Variant, VariantId, Warning};
