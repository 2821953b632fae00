//! Text reporter: `<file>:<line>:<col>: <message>`, one warning per line.

use super::Reporter;
use crate::conventions::Report;

pub struct TextReporter;

impl Reporter for TextReporter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn generate(&self, report: &Report) -> Result<String, String> {
        let mut output = String::new();
        for warning in &report.warnings {
            output.push_str(&warning.to_string());
            output.push('\n');
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::conventions::Warning;
    use crate::parsers::Position;

    fn warning(line: usize, column: usize) -> Warning {
        Warning {
            position: Position {
                file: PathBuf::from("/src/a.go"),
                line,
                column,
            },
            text: "empty map: use empty-map-make instead of empty-map-lit".to_string(),
            operation: "empty map".to_string(),
            convention: "empty-map-make".to_string(),
            variant: "empty-map-lit".to_string(),
        }
    }

    #[test]
    fn test_one_line_per_warning() {
        let report = Report {
            warnings: vec![warning(4, 10), warning(9, 2)],
            ..Default::default()
        };
        let output = TextReporter.generate(&report).unwrap();
        assert_eq!(
            output,
            "/src/a.go:4:10: empty map: use empty-map-make instead of empty-map-lit\n\
             /src/a.go:9:2: empty map: use empty-map-make instead of empty-map-lit\n"
        );
    }

    #[test]
    fn test_empty_report_prints_nothing() {
        let output = TextReporter.generate(&Report::default()).unwrap();
        assert!(output.is_empty());
    }
}
