//! Tree-sitter Go parsing: thread_local parser instances, fatal syntax errors.

pub mod error_tolerant;
pub mod go;
pub mod types;

pub use go::{with_go_parser, GoParser};
pub use types::{NodeRef, ParsedFile, Position};
