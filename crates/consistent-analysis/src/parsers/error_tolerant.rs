//! Locating syntax errors in trees that tree-sitter recovered from.
//!
//! Tree-sitter always produces a tree; the linter still treats any ERROR or
//! MISSING node as a failed parse, the way `go/parser` would.

use tree_sitter::Node;

/// First ERROR or MISSING node in pre-order, if any.
pub fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }
    find_error(root)
}

fn find_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(find_error)
}

/// Count ERROR and MISSING nodes in a tree.
pub fn count_errors(root: Node<'_>) -> u32 {
    let mut count = u32::from(root.is_error() || root.is_missing());
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        count += count_errors(child);
    }
    count
}

/// Short excerpt of the offending source for error messages.
pub fn excerpt(node: Node<'_>, source: &[u8]) -> String {
    if node.is_missing() {
        return format!("missing {}", node.kind());
    }
    let text = node.utf8_text(source).unwrap_or("");
    let first_line = text.lines().next().unwrap_or("");
    first_line.chars().take(24).collect()
}
