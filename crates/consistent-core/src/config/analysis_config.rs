//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the convention engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Reserved for stricter matchers. Default: false.
    pub pedantic: Option<bool>,
    /// Worker threads for the inference pass (1 = sequential). Default: 1.
    pub threads: Option<usize>,
    /// Operation names removed from the catalog before inference.
    #[serde(default)]
    pub disabled_operations: Vec<String>,
}

impl AnalysisConfig {
    /// Returns whether pedantic mode is on, defaulting to false.
    pub fn effective_pedantic(&self) -> bool {
        self.pedantic.unwrap_or(false)
    }

    /// Returns the inference worker count, defaulting to 1.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(1)
    }
}
