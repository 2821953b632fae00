//! JSON reporter: the whole report as one document.

use super::Reporter;
use crate::conventions::Report;

#[derive(Default)]
pub struct JsonReporter {
    pub compact: bool,
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &Report) -> Result<String, String> {
        let rendered = if self.compact {
            serde_json::to_string(report)
        } else {
            serde_json::to_string_pretty(report)
        };
        rendered.map_err(|e| format!("JSON serialization failed: {e}"))
    }
}
