//! Matchers for the built-in Go idioms.
//!
//! Each matcher is a unit struct over tree-sitter-go node kinds. `skip` is a
//! kind pre-filter; `matches` checks the exact shape.

use crate::parsers::NodeRef;

use super::types::Matcher;

/// Arguments of a call to the builtin `name`, or `None` if `node` is not one.
fn builtin_call_args<'t>(node: NodeRef<'t>, name: &str) -> Option<Vec<NodeRef<'t>>> {
    if node.kind() != "call_expression" {
        return None;
    }
    let function = node.field("function")?;
    if !function.is_ident(name) {
        return None;
    }
    Some(node.field("arguments")?.named_children())
}

/// `T{}` whose type has the given kind and whose body has no elements.
fn is_empty_literal_of(node: NodeRef<'_>, type_kind: &str) -> bool {
    if node.kind() != "composite_literal" {
        return false;
    }
    let Some(ty) = node.field("type") else {
        return false;
    };
    let Some(body) = node.field("body") else {
        return false;
    };
    ty.kind() == type_kind && body.named_children().is_empty()
}

fn is_zero_literal(node: NodeRef<'_>) -> bool {
    node.kind() == "int_literal" && node.text() == "0"
}

/// `new(T)`
#[derive(Debug, Clone, Copy, Default)]
pub struct NewCall;

impl Matcher for NewCall {
    fn skip(&self, node: NodeRef<'_>) -> bool {
        node.kind() != "call_expression"
    }

    fn matches(&self, node: NodeRef<'_>) -> bool {
        builtin_call_args(node, "new").is_some_and(|args| args.len() == 1)
    }
}

/// `&T{}`
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressOfLit;

impl Matcher for AddressOfLit {
    fn skip(&self, node: NodeRef<'_>) -> bool {
        node.kind() != "unary_expression"
    }

    fn matches(&self, node: NodeRef<'_>) -> bool {
        let is_address_of = node.field("operator").is_some_and(|op| op.text() == "&");
        is_address_of
            && node.field("operand").is_some_and(|operand| {
                operand.kind() == "composite_literal"
                    && operand
                        .field("body")
                        .is_some_and(|body| body.named_children().is_empty())
            })
    }
}

/// `make([]T, 0)`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySliceMake;

impl Matcher for EmptySliceMake {
    fn skip(&self, node: NodeRef<'_>) -> bool {
        node.kind() != "call_expression"
    }

    fn matches(&self, node: NodeRef<'_>) -> bool {
        match builtin_call_args(node, "make").as_deref() {
            Some([ty, len]) => ty.kind() == "slice_type" && is_zero_literal(*len),
            _ => false,
        }
    }
}

/// `[]T{}`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySliceLit;

impl Matcher for EmptySliceLit {
    fn skip(&self, node: NodeRef<'_>) -> bool {
        node.kind() != "composite_literal"
    }

    fn matches(&self, node: NodeRef<'_>) -> bool {
        is_empty_literal_of(node, "slice_type")
    }
}

/// `var xs []T`
#[derive(Debug, Clone, Copy, Default)]
pub struct NilSliceVar;

impl Matcher for NilSliceVar {
    fn skip(&self, node: NodeRef<'_>) -> bool {
        node.kind() != "var_spec"
    }

    fn matches(&self, node: NodeRef<'_>) -> bool {
        node.field("value").is_none()
            && node.field("type").is_some_and(|ty| ty.kind() == "slice_type")
    }
}

/// `xs := []T(nil)`
#[derive(Debug, Clone, Copy, Default)]
pub struct NilSliceLit;

impl Matcher for NilSliceLit {
    fn skip(&self, node: NodeRef<'_>) -> bool {
        !matches!(node.kind(), "type_conversion_expression" | "call_expression")
    }

    fn matches(&self, node: NodeRef<'_>) -> bool {
        match node.kind() {
            "type_conversion_expression" => {
                node.field("type").is_some_and(|ty| ty.kind() == "slice_type")
                    && node.field("operand").is_some_and(|arg| arg.is_ident("nil"))
            }
            // Older grammars parse the conversion as a call on a type.
            "call_expression" => {
                let callee_is_slice = node
                    .field("function")
                    .is_some_and(|f| f.kind() == "slice_type");
                let args = node
                    .field("arguments")
                    .map(|a| a.named_children())
                    .unwrap_or_default();
                callee_is_slice && matches!(args.as_slice(), [arg] if arg.is_ident("nil"))
            }
            _ => false,
        }
    }
}

/// `make(map[K]V)`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyMapMake;

impl Matcher for EmptyMapMake {
    fn skip(&self, node: NodeRef<'_>) -> bool {
        node.kind() != "call_expression"
    }

    fn matches(&self, node: NodeRef<'_>) -> bool {
        match builtin_call_args(node, "make").as_deref() {
            Some([ty]) => ty.kind() == "map_type",
            _ => false,
        }
    }
}

/// `map[K]V{}`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyMapLit;

impl Matcher for EmptyMapLit {
    fn skip(&self, node: NodeRef<'_>) -> bool {
        node.kind() != "composite_literal"
    }

    fn matches(&self, node: NodeRef<'_>) -> bool {
        is_empty_literal_of(node, "map_type")
    }
}
