//! The value object produced by the predictor: an ordered, non-crossing
//! list of base pairs plus total energy and an optional seed annotation.

use std::fmt;

use crate::BasePair;
use crate::EnergyValue;
use crate::IndexRange;
use crate::SequenceId;

/// Where a seed sits within a larger `Interaction`. Owned exclusively by
/// its parent `Interaction`; replaced, never accumulated, on update.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRange {
    pub s1: SequenceId,
    pub s2: SequenceId,
    pub r1: IndexRange,
    pub r2: IndexRange,
    /// Hybridization loop energy of the seed only.
    pub energy: EnergyValue,
}

/// A boundary-only description of an interaction: its two sequences, the
/// left/right index ranges the interaction spans, and its energy. Assigning
/// one of these into an `Interaction` produces the one- or two-base-pair
/// boundary interaction that `Hybridizer::trace_back` expects as input.
/// `r1` runs left-boundary-to-right-boundary ascending; `r2` runs
/// left-boundary-to-right-boundary descending (see `IndexRange`'s doc
/// comment) — `r2.from`/`r2.to` are never reordered to force ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionRange {
    pub s1: SequenceId,
    pub s2: SequenceId,
    pub r1: IndexRange,
    pub r2: IndexRange,
    pub energy: EnergyValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub s1: SequenceId,
    pub s2: SequenceId,
    /// Sorted strictly ascending on p1, strictly descending on p2.
    pub base_pairs: Vec<BasePair>,
    pub energy: EnergyValue,
    pub seed: Option<SeedRange>,
}

impl Interaction {
    pub fn new(s1: SequenceId, s2: SequenceId) -> Self {
        Interaction { s1, s2, base_pairs: Vec::new(), energy: 0.0, seed: None }
    }

    pub fn is_empty(&self) -> bool {
        self.base_pairs.is_empty()
    }

    /// Empty is invalid; a single pair is valid iff the list isn't empty;
    /// a multi-pair interaction is valid iff strictly monotone (p1
    /// ascending, p2 descending).
    pub fn is_valid(&self) -> bool {
        if self.base_pairs.len() < 2 {
            return !self.is_empty();
        }
        self.base_pairs.windows(2).all(|w| w[0].p1 < w[1].p1 && w[0].p2 > w[1].p2)
    }

    /// Stable sort on p1 ascending (p2 descending is implied for a valid
    /// interaction, since crossing pairs are never produced by the core).
    pub fn sort(&mut self) {
        self.base_pairs.sort_by_key(|bp| bp.p1);
    }

    /// Create or overwrite the seed annotation. `ij1`/`ij2` are the seed's
    /// left/right boundary base pairs.
    pub fn set_seed_range(&mut self, ij1: BasePair, ij2: BasePair, energy: EnergyValue) {
        self.seed = Some(SeedRange {
            s1: self.s1,
            s2: self.s2,
            r1: IndexRange::new(ij1.p1, ij2.p1),
            r2: IndexRange::new(ij1.p2, ij2.p2),
            energy,
        });
    }
}

impl From<&InteractionRange> for Interaction {
    /// Clears base pairs, copies sequence handles, pushes the left boundary
    /// base pair, and (unless the range is a singleton in both sequences)
    /// pushes the right boundary base pair too. Destroys any prior seed.
    fn from(range: &InteractionRange) -> Self {
        let mut base_pairs = vec![BasePair::new(range.r1.from, range.r2.from)];
        if range.r1.from != range.r1.to || range.r2.from != range.r2.to {
            base_pairs.push(BasePair::new(range.r1.to, range.r2.to));
        }
        Interaction {
            s1: range.s1,
            s2: range.s2,
            base_pairs,
            energy: range.energy,
            seed: None,
        }
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.base_pairs.iter().map(|bp| bp.to_string()).collect();
        write!(f, "Interaction(E={}, pairs=[{}])", self.energy, pairs.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(n: u32) -> SequenceId {
        SequenceId::new(n)
    }

    #[test]
    fn empty_interaction_is_invalid() {
        let it = Interaction::new(sid(0), sid(1));
        assert!(!it.is_valid());
    }

    #[test]
    fn single_pair_is_valid() {
        let mut it = Interaction::new(sid(0), sid(1));
        it.base_pairs.push(BasePair::new(3, 4));
        assert!(it.is_valid());
    }

    #[test]
    fn non_crossing_multi_pair_is_valid() {
        let mut it = Interaction::new(sid(0), sid(1));
        it.base_pairs = vec![BasePair::new(0, 3), BasePair::new(1, 2), BasePair::new(2, 1)];
        assert!(it.is_valid());
    }

    #[test]
    fn crossing_pairs_are_invalid() {
        let mut it = Interaction::new(sid(0), sid(1));
        it.base_pairs = vec![BasePair::new(0, 1), BasePair::new(1, 2)];
        assert!(!it.is_valid());
    }

    #[test]
    fn assignment_from_singleton_range_yields_one_pair() {
        let range = InteractionRange {
            s1: sid(0),
            s2: sid(1),
            r1: IndexRange::singleton(2),
            r2: IndexRange::singleton(5),
            energy: -1.0,
        };
        let it = Interaction::from(&range);
        assert_eq!(it.base_pairs, vec![BasePair::new(2, 5)]);
    }

    #[test]
    fn assignment_from_non_singleton_range_yields_two_pairs() {
        let range = InteractionRange {
            s1: sid(0),
            s2: sid(1),
            r1: IndexRange::new(2, 6),
            r2: IndexRange::new(1, 5),
            energy: -3.5,
        };
        let it = Interaction::from(&range);
        assert_eq!(it.base_pairs, vec![BasePair::new(2, 1), BasePair::new(6, 5)]);
        assert_eq!(it.energy, -3.5);
    }

    #[test]
    fn set_seed_range_writes_through_a_single_slot() {
        let mut it = Interaction::new(sid(0), sid(1));
        it.set_seed_range(BasePair::new(1, 8), BasePair::new(3, 6), -2.0);
        assert!(it.seed.is_some());
        it.set_seed_range(BasePair::new(2, 9), BasePair::new(4, 7), -4.0);
        let seed = it.seed.unwrap();
        assert_eq!(seed.r1, IndexRange::new(2, 4));
        assert_eq!(seed.energy, -4.0);
    }

    #[test]
    fn sort_orders_by_p1_ascending() {
        let mut it = Interaction::new(sid(0), sid(1));
        it.base_pairs = vec![BasePair::new(3, 0), BasePair::new(0, 3)];
        it.sort();
        assert_eq!(it.base_pairs, vec![BasePair::new(0, 3), BasePair::new(3, 0)]);
    }
}
