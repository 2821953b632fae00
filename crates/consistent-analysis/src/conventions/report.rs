//! The outcome of one run.

use serde::Serialize;

use super::catalog::OperationSummary;
use super::types::{Ambiguity, Warning};

/// Everything a reporter needs, in traversal order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub operations: Vec<OperationSummary>,
    pub ambiguities: Vec<Ambiguity>,
    pub warnings: Vec<Warning>,
}

impl Report {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
