//! Convention election: majority vote with first-declared tie-break.

use super::catalog::Catalog;
use super::types::{Ambiguity, Operation};

impl Operation {
    /// Elect the most frequent variant as this operation's convention.
    ///
    /// Starts from the first declared variant and only switches on a strictly
    /// greater count, so ties and all-zero counts go to the earliest variant.
    /// Returns one ambiguity per other variant sharing a non-zero winning
    /// count; these never change the outcome.
    pub fn elect(&mut self) -> Vec<Ambiguity> {
        if self.variants().is_empty() {
            return Vec::new();
        }

        let mut elected = 0;
        for (index, variant) in self.variants().iter().enumerate().skip(1) {
            if variant.count() > self.variants()[elected].count() {
                elected = index;
            }
        }
        self.set_convention(elected);

        let winner = &self.variants()[elected];
        if winner.count() == 0 {
            return Vec::new();
        }

        self.variants()
            .iter()
            .enumerate()
            .filter(|(index, variant)| *index != elected && variant.count() == winner.count())
            .map(|(_, variant)| Ambiguity {
                operation: self.name().to_string(),
                candidate: variant.name().to_string(),
                elected: winner.name().to_string(),
                count: winner.count(),
            })
            .collect()
    }
}

impl Catalog {
    /// Run election for every operation, logging each ambiguity.
    pub fn elect_conventions(&mut self) -> Vec<Ambiguity> {
        let mut ambiguities = Vec::new();
        for op in self.operations_mut() {
            let found = op.elect();
            if let Some(convention) = op.convention() {
                tracing::debug!(
                    operation = op.name(),
                    convention = convention.name(),
                    count = convention.count(),
                    "elected convention"
                );
            }
            for ambiguity in &found {
                tracing::warn!("{}", ambiguity);
            }
            ambiguities.extend(found);
        }
        ambiguities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::matchers::{EmptySliceLit, EmptySliceMake};
    use crate::conventions::types::{Scope, Variant};
    use proptest::prelude::*;

    fn empty_slice(make: u64, lit: u64) -> Operation {
        Operation::new(
            "empty slice",
            Scope::Any,
            vec![
                Variant::new("empty-slice-make", EmptySliceMake).with_count(make),
                Variant::new("empty-slice-lit", EmptySliceLit).with_count(lit),
            ],
        )
    }

    fn with_counts(counts: &[u64]) -> Operation {
        let variants = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| Variant::new(format!("v{i}"), EmptySliceLit).with_count(c))
            .collect();
        Operation::new("op", Scope::Any, variants)
    }

    #[test]
    fn test_majority_wins() {
        let mut op = empty_slice(5, 2);
        assert!(op.elect().is_empty());
        assert_eq!(op.convention().unwrap().name(), "empty-slice-make");
    }

    #[test]
    fn test_later_variant_can_win() {
        let mut op = empty_slice(1, 4);
        assert!(op.elect().is_empty());
        assert_eq!(op.convention().unwrap().name(), "empty-slice-lit");
    }

    #[test]
    fn test_zero_evidence_elects_first_without_diagnostic() {
        let mut op = empty_slice(0, 0);
        assert!(op.elect().is_empty());
        assert_eq!(op.convention_index(), Some(0));
    }

    #[test]
    fn test_tie_elects_first_and_reports_ambiguity() {
        let mut op = empty_slice(3, 3);
        let ambiguities = op.elect();
        assert_eq!(op.convention().unwrap().name(), "empty-slice-make");
        assert_eq!(ambiguities.len(), 1);
        assert_eq!(
            ambiguities[0].to_string(),
            "empty slice: can't decide between empty-slice-lit and empty-slice-make"
        );
    }

    #[test]
    fn test_single_variant_elects_itself() {
        let mut op = with_counts(&[7]);
        assert!(op.elect().is_empty());
        assert_eq!(op.convention_index(), Some(0));
    }

    #[test]
    fn test_three_way_tie_reports_each_loser() {
        let mut op = with_counts(&[1, 4, 4, 4]);
        let ambiguities = op.elect();
        assert_eq!(op.convention_index(), Some(1));
        let candidates: Vec<&str> = ambiguities.iter().map(|a| a.candidate.as_str()).collect();
        assert_eq!(candidates, vec!["v2", "v3"]);
    }

    #[test]
    fn test_catalog_elects_every_operation() {
        let mut catalog = Catalog::standard();
        let ambiguities = catalog.elect_conventions();
        assert!(ambiguities.is_empty());
        for op in catalog.operations() {
            assert_eq!(op.convention_index(), Some(0));
        }
    }

    proptest! {
        #[test]
        fn prop_elected_count_is_maximal(counts in prop::collection::vec(0u64..20, 1..6)) {
            let mut op = with_counts(&counts);
            op.elect();
            let elected = op.convention_index().unwrap();
            let max = *counts.iter().max().unwrap();
            prop_assert_eq!(counts[elected], max);
            // Earliest among the maximal variants.
            prop_assert!(counts[..elected].iter().all(|&c| c < max));
        }

        #[test]
        fn prop_ambiguities_match_ties(counts in prop::collection::vec(0u64..5, 1..6)) {
            let mut op = with_counts(&counts);
            let ambiguities = op.elect();
            let max = *counts.iter().max().unwrap();
            let expected = if max == 0 {
                0
            } else {
                counts.iter().filter(|&&c| c == max).count() - 1
            };
            prop_assert_eq!(ambiguities.len(), expected);
        }

        #[test]
        fn prop_doubling_counts_keeps_convention(counts in prop::collection::vec(0u64..50, 1..6)) {
            let mut once = with_counts(&counts);
            once.elect();
            let doubled: Vec<u64> = counts.iter().map(|c| c * 2).collect();
            let mut twice = with_counts(&doubled);
            twice.elect();
            prop_assert_eq!(once.convention_index(), twice.convention_index());
        }
    }
}
