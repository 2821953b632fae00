//! Per-file occurrence counts, merged into the catalog after inference.

use super::catalog::Catalog;
use super::types::VariantId;

/// Counts shaped like a catalog: one slot per (operation, variant).
///
/// Summing tallies is commutative, so files can be tallied independently
/// and reduced in any order before election.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    counts: Vec<Vec<u64>>,
}

impl Tally {
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            counts: catalog
                .operations()
                .iter()
                .map(|op| vec![0; op.variants().len()])
                .collect(),
        }
    }

    pub fn record(&mut self, id: VariantId) {
        if let Some(slot) = self
            .counts
            .get_mut(id.operation)
            .and_then(|op| op.get_mut(id.variant))
        {
            *slot += 1;
        }
    }

    pub fn get(&self, operation: usize, variant: usize) -> u64 {
        self.counts
            .get(operation)
            .and_then(|op| op.get(variant))
            .copied()
            .unwrap_or(0)
    }

    pub fn merge(&mut self, other: &Tally) {
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a += b;
            }
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }
}
