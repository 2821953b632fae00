//! The fixed operation catalog and its bookkeeping.

use consistent_core::errors::{ConfigError, EngineError};
use rustc_hash::FxHashSet;
use serde::Serialize;

use super::matchers::{
    AddressOfLit, EmptyMapLit, EmptyMapMake, EmptySliceLit, EmptySliceMake, NewCall, NilSliceLit,
    NilSliceVar,
};
use super::tally::Tally;
use super::types::{Operation, Scope, Variant};

/// Ordered set of operations analyzed in one run.
#[derive(Debug)]
pub struct Catalog {
    operations: Vec<Operation>,
}

impl Catalog {
    /// Build a catalog from custom operations.
    ///
    /// Every operation needs at least one variant and a unique name.
    pub fn new(operations: Vec<Operation>) -> Result<Self, EngineError> {
        let mut seen = FxHashSet::default();
        for op in &operations {
            if op.variants().is_empty() {
                return Err(EngineError::EmptyOperation {
                    operation: op.name().to_string(),
                });
            }
            if !seen.insert(op.name().to_string()) {
                return Err(EngineError::DuplicateOperation {
                    operation: op.name().to_string(),
                });
            }
        }
        Ok(Self { operations })
    }

    /// The built-in operations, in reporting order, all counts zero.
    pub fn standard() -> Self {
        let operations = vec![
            Operation::new(
                "zero value pointer allocation",
                Scope::Any,
                vec![
                    Variant::new("new", NewCall),
                    Variant::new("address-of-lit", AddressOfLit),
                ],
            ),
            Operation::new(
                "empty slice",
                Scope::Any,
                vec![
                    Variant::new("empty-slice-make", EmptySliceMake),
                    Variant::new("empty-slice-lit", EmptySliceLit),
                ],
            ),
            Operation::new(
                "nil slice",
                Scope::Local,
                vec![
                    Variant::new("nil-slice-var", NilSliceVar),
                    Variant::new("nil-slice-lit", NilSliceLit),
                ],
            ),
            Operation::new(
                "empty map",
                Scope::Any,
                vec![
                    Variant::new("empty-map-make", EmptyMapMake),
                    Variant::new("empty-map-lit", EmptyMapLit),
                ],
            ),
        ];
        Self { operations }
    }

    /// Drop operations by name. Unknown names are a configuration error.
    pub fn without(mut self, disabled: &[String]) -> Result<Self, ConfigError> {
        for name in disabled {
            if self.operation(name).is_none() {
                return Err(ConfigError::InvalidValue {
                    field: "analysis.disabled_operations".to_string(),
                    message: format!("unknown operation '{name}'"),
                });
            }
        }
        self.operations
            .retain(|op| !disabled.iter().any(|name| name == op.name()));
        Ok(self)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn operations_mut(&mut self) -> &mut [Operation] {
        &mut self.operations
    }

    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Add a tally's counts to the variants it was recorded against.
    pub fn absorb(&mut self, tally: &Tally) {
        for (op_index, op) in self.operations.iter_mut().enumerate() {
            for (variant_index, variant) in op.variants_mut().iter_mut().enumerate() {
                variant.add_occurrences(tally.get(op_index, variant_index));
            }
        }
    }

    /// Per-operation view of counts and elected conventions.
    pub fn summary(&self) -> Vec<OperationSummary> {
        self.operations
            .iter()
            .map(|op| OperationSummary {
                name: op.name().to_string(),
                scope: op.scope(),
                convention: op.convention().map(|v| v.name().to_string()),
                variants: op
                    .variants()
                    .iter()
                    .map(|v| VariantSummary {
                        name: v.name().to_string(),
                        count: v.count(),
                    })
                    .collect(),
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationSummary {
    pub name: String,
    pub scope: Scope,
    pub convention: Option<String>,
    pub variants: Vec<VariantSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantSummary {
    pub name: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = Catalog::standard();
        let names: Vec<&str> = catalog.operations().iter().map(|op| op.name()).collect();
        assert_eq!(
            names,
            vec!["zero value pointer allocation", "empty slice", "nil slice", "empty map"]
        );
        let nil_slice = catalog.operation("nil slice").unwrap();
        assert_eq!(nil_slice.scope(), Scope::Local);
        for op in catalog.operations() {
            assert!(op.convention().is_none());
            assert!(op.variants().iter().all(|v| v.count() == 0));
        }
    }

    #[test]
    fn test_without_drops_named_operations() {
        let catalog = Catalog::standard()
            .without(&["empty map".to_string()])
            .unwrap();
        assert_eq!(catalog.operations().len(), 3);
        assert!(catalog.operation("empty map").is_none());
    }

    #[test]
    fn test_without_rejects_unknown_names() {
        let err = Catalog::standard()
            .without(&["empty set".to_string()])
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_new_rejects_empty_and_duplicate_operations() {
        let empty = Catalog::new(vec![Operation::new("x", Scope::Any, Vec::new())]);
        assert!(matches!(empty, Err(EngineError::EmptyOperation { .. })));

        let dup = Catalog::new(vec![
            Operation::new("x", Scope::Any, vec![Variant::new("a", NewCall)]),
            Operation::new("x", Scope::Any, vec![Variant::new("b", NewCall)]),
        ]);
        assert!(matches!(dup, Err(EngineError::DuplicateOperation { .. })));
    }
}
