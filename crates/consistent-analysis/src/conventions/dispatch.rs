//! Scope-aware traversal shared by both passes.
//!
//! The dispatcher decides *where* to walk (whole file or function bodies);
//! matchers decide *what* matches; the pass-specific visit function decides
//! what to do about it. Both passes see the same nodes in the same order.

use consistent_core::errors::EngineError;

use crate::parsers::{NodeRef, ParsedFile};

use super::catalog::Catalog;
use super::types::{Operation, Scope, Variant, VariantId};

/// Whether to walk into a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitDecision {
    Descend,
    Prune,
}

/// The (operation, variant) pair a traversal is running for.
#[derive(Debug, Clone, Copy)]
pub struct VisitTarget<'c> {
    pub id: VariantId,
    pub operation: &'c Operation,
    pub variant: &'c Variant,
}

/// Walk `file` once per (operation, variant) pair, honoring each
/// operation's scope.
///
/// `visit` is called pre-order with `Some(node)`; after a node's children
/// are done it is called once more with `None`, which must be treated as a
/// no-op returning `Prune`.
pub fn visit_operations<'c, 't, F>(
    catalog: &'c Catalog,
    file: &'t ParsedFile,
    mut visit: F,
) -> Result<(), EngineError>
where
    F: FnMut(VisitTarget<'c>, Option<NodeRef<'t>>) -> VisitDecision,
{
    let root = file.root();

    for (op_index, operation) in catalog.operations().iter().enumerate() {
        let starts = match operation.scope() {
            Scope::Any => vec![root],
            Scope::Local => function_bodies(root),
            Scope::Package => {
                return Err(EngineError::UnimplementedScope {
                    operation: operation.name().to_string(),
                    scope: operation.scope().to_string(),
                });
            }
        };

        for (variant_index, variant) in operation.variants().iter().enumerate() {
            let target = VisitTarget {
                id: VariantId {
                    operation: op_index,
                    variant: variant_index,
                },
                operation,
                variant,
            };
            for start in &starts {
                walk_preorder(*start, &mut |node| visit(target, node));
            }
        }
    }

    Ok(())
}

/// Depth-first, pre-order walk with return-value pruning.
pub fn walk_preorder<'t, F>(node: NodeRef<'t>, visit: &mut F)
where
    F: FnMut(Option<NodeRef<'t>>) -> VisitDecision,
{
    if visit(Some(node)) == VisitDecision::Prune {
        return;
    }
    for child in node.named_children() {
        walk_preorder(child, visit);
    }
    visit(None);
}

/// Bodies of top-level function and method declarations, in source order.
/// Declarations without a body (assembly stubs) are skipped.
pub fn function_bodies(root: NodeRef<'_>) -> Vec<NodeRef<'_>> {
    root.named_children()
        .into_iter()
        .filter(|decl| matches!(decl.kind(), "function_declaration" | "method_declaration"))
        .filter_map(|decl| decl.field("body"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::matchers::{EmptySliceLit, NilSliceVar};
    use crate::parsers::GoParser;

    fn parse(src: &str) -> ParsedFile {
        GoParser::new()
            .unwrap()
            .parse_source("d.go", src.as_bytes().to_vec())
            .unwrap()
    }

    const SRC: &str = "package d

var top []int

func f() {
\tvar inner []int
\t_ = inner
}

func (r recv) m() {
\tvar other []string
\t_ = other
}

func stub()
";

    #[test]
    fn test_function_bodies_skips_non_functions_and_stubs() {
        let file = parse(SRC);
        let bodies = function_bodies(file.root());
        assert_eq!(bodies.len(), 2);
        assert!(bodies.iter().all(|b| b.kind() == "block"));
    }

    #[test]
    fn test_local_scope_never_sees_top_level_nodes() {
        let file = parse(SRC);
        let catalog = Catalog::new(vec![
            Operation::new("local", Scope::Local, vec![Variant::new("v", NilSliceVar)]),
            Operation::new("any", Scope::Any, vec![Variant::new("v", NilSliceVar)]),
        ])
        .unwrap();

        let mut hits = [0usize; 2];
        visit_operations(&catalog, &file, |target, node| {
            let Some(node) = node else {
                return VisitDecision::Prune;
            };
            let m = target.variant.matcher();
            if !m.skip(node) && m.matches(node) {
                hits[target.id.operation] += 1;
            }
            VisitDecision::Descend
        })
        .unwrap();

        assert_eq!(hits, [2, 3]);
    }

    #[test]
    fn test_terminal_none_follows_each_descended_node() {
        let file = parse("package d\n\nvar x = []int{}\n");
        let mut opened = 0;
        let mut closed = 0;
        walk_preorder(file.root(), &mut |node| match node {
            Some(_) => {
                opened += 1;
                VisitDecision::Descend
            }
            None => {
                closed += 1;
                VisitDecision::Prune
            }
        });
        assert!(opened > 1);
        assert_eq!(opened, closed);
    }

    #[test]
    fn test_prune_skips_children() {
        let file = parse("package d\n\nvar x = []int{}\n");
        let mut seen = Vec::new();
        walk_preorder(file.root(), &mut |node| {
            let Some(node) = node else {
                return VisitDecision::Prune;
            };
            seen.push(node.kind());
            if node.kind() == "var_declaration" {
                VisitDecision::Prune
            } else {
                VisitDecision::Descend
            }
        });
        assert!(seen.contains(&"var_declaration"));
        assert!(!seen.contains(&"composite_literal"));
    }

    #[test]
    fn test_package_scope_is_fatal() {
        let file = parse("package d\n");
        let catalog = Catalog::new(vec![Operation::new(
            "whole package",
            Scope::Package,
            vec![Variant::new("v", EmptySliceLit)],
        )])
        .unwrap();
        let err = visit_operations(&catalog, &file, |_, _| VisitDecision::Descend).unwrap_err();
        assert!(matches!(err, EngineError::UnimplementedScope { .. }));
    }

    #[test]
    fn test_one_walk_per_variant() {
        let file = parse("package d\n");
        let mut catalog = Catalog::standard();
        let _ = catalog.elect_conventions();
        let mut roots = Vec::new();
        visit_operations(&catalog, &file, |target, node| {
            if node.is_some_and(|n| n.kind() == "source_file") {
                roots.push((target.operation.name().to_string(), target.variant.name().to_string()));
            }
            VisitDecision::Prune
        })
        .unwrap();
        // "nil slice" is local and the file has no functions.
        assert_eq!(roots.len(), 6);
        assert_eq!(roots[0], ("zero value pointer allocation".to_string(), "new".to_string()));
    }
}
