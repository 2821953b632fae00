//! Go parser using native tree-sitter.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use consistent_core::errors::ParseError;
use tree_sitter::Parser;

use super::error_tolerant::{count_errors, excerpt, first_error};
use super::types::ParsedFile;

thread_local! {
    static GO_PARSER: RefCell<Option<GoParser>> = const { RefCell::new(None) };
}

/// Run `f` with this thread's Go parser, creating it on first use.
///
/// Tree-sitter parsers are not `Sync`; one instance per thread lets the
/// inference pass parse on rayon workers.
pub fn with_go_parser<R>(
    f: impl FnOnce(&mut GoParser) -> Result<R, ParseError>,
) -> Result<R, ParseError> {
    GO_PARSER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(GoParser::new()?);
        }
        match slot.as_mut() {
            Some(parser) => f(parser),
            None => Err(ParseError::GrammarNotFound {
                language: "go".to_string(),
            }),
        }
    })
}

/// Go parser.
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| ParseError::GrammarNotFound {
                language: format!("go ({e})"),
            })?;
        Ok(Self { parser })
    }

    /// Read and parse a file from disk.
    pub fn parse_file(&mut self, path: &Path) -> Result<ParsedFile, ParseError> {
        let source = std::fs::read(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_source(path, source)
    }

    /// Parse in-memory source attributed to `path`.
    ///
    /// A tree containing any ERROR or MISSING node is rejected with
    /// `ParseError::Syntax` pointing at the first one.
    pub fn parse_source(
        &mut self,
        path: impl Into<PathBuf>,
        source: Vec<u8>,
    ) -> Result<ParsedFile, ParseError> {
        let path = path.into();
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| ParseError::NoTree { path: path.clone() })?;

        if let Some(bad) = first_error(tree.root_node()) {
            let point = bad.start_position();
            tracing::debug!(
                path = %path.display(),
                errors = count_errors(tree.root_node()),
                "rejecting file with syntax errors"
            );
            return Err(ParseError::Syntax {
                near: excerpt(bad, &source),
                line: point.row + 1,
                column: point.column + 1,
                path,
            });
        }

        Ok(ParsedFile::new(path, source, tree))
    }
}
