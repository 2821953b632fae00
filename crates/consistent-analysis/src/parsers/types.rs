//! Parsed files, node handles, and source positions.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tree_sitter::{Node, Tree};

/// A 1-based source position. Columns count bytes, like Go's `token.Position`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// A Go source file together with its syntax tree.
///
/// The source bytes are kept alongside the tree: node text and positions
/// are resolved against them.
pub struct ParsedFile {
    path: PathBuf,
    source: Vec<u8>,
    tree: Tree,
}

impl ParsedFile {
    pub(crate) fn new(path: PathBuf, source: Vec<u8>, tree: Tree) -> Self {
        Self { path, source, tree }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// The `source_file` node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self.tree.root_node(), &self.source)
    }

    /// Resolve a node of this file to a full position.
    pub fn position_of(&self, node: NodeRef<'_>) -> Position {
        let (line, column) = node.line_column();
        Position {
            file: self.path.clone(),
            line,
            column,
        }
    }
}

impl fmt::Debug for ParsedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedFile")
            .field("path", &self.path)
            .field("bytes", &self.source.len())
            .finish()
    }
}

/// Opaque handle to one syntax node, handed to matchers.
///
/// Carries the file's source so matchers can read identifier and literal
/// text without holding on to the tree.
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    node: Node<'t>,
    source: &'t [u8],
}

impl<'t> NodeRef<'t> {
    pub(crate) fn new(node: Node<'t>, source: &'t [u8]) -> Self {
        Self { node, source }
    }

    pub(crate) fn raw(&self) -> Node<'t> {
        self.node
    }

    /// Grammar kind, e.g. `call_expression`.
    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    /// Source text covered by this node; empty if not valid UTF-8.
    pub fn text(&self) -> &'t str {
        self.node.utf8_text(self.source).unwrap_or("")
    }

    /// Child stored under a grammar field name.
    pub fn field(&self, name: &str) -> Option<NodeRef<'t>> {
        self.node
            .child_by_field_name(name)
            .map(|child| NodeRef::new(child, self.source))
    }

    /// Named children in source order, comments excluded.
    pub fn named_children(&self) -> Vec<NodeRef<'t>> {
        let mut cursor = self.node.walk();
        self.node
            .named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .map(|child| NodeRef::new(child, self.source))
            .collect()
    }

    /// True for an identifier-like node spelling exactly `name`.
    pub fn is_ident(&self, name: &str) -> bool {
        matches!(self.kind(), "identifier" | "nil") && self.text() == name
    }

    /// 1-based (line, column).
    pub fn line_column(&self) -> (usize, usize) {
        let point = self.node.start_position();
        (point.row + 1, point.column + 1)
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, column) = self.line_column();
        write!(f, "{}@{}:{}", self.kind(), line, column)
    }
}
