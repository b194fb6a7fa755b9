//! Seed constraints consumed (not produced) by the predictor core: an
//! immutable record of how big a seed must be, how much slack it tolerates,
//! and where it may sit. Filtering seeds against this record is the
//! caller's job; the core only reads the derived lengths.

use std::fmt;

use crate::CoreError;
use crate::EnergyValue;
use crate::IndexRangeList;

#[derive(Debug, Clone)]
pub struct SeedConstraint {
    bp: usize,
    max_unpaired_overall: usize,
    max_unpaired1: usize,
    max_unpaired2: usize,
    max_e: EnergyValue,
    ranges1: IndexRangeList,
    ranges2: IndexRangeList,
}

impl SeedConstraint {
    /// `ranges2` is expected to already be given in reversed coordinates,
    /// matching the caller-side convention documented in spec.md §3.
    pub fn new(
        bp: usize,
        max_unpaired_overall: usize,
        max_unpaired1: usize,
        max_unpaired2: usize,
        max_e: EnergyValue,
        ranges1: IndexRangeList,
        ranges2_reversed: IndexRangeList,
    ) -> Result<Self, CoreError> {
        if bp < 2 {
            return Err(CoreError::InvalidSeedConstraint(bp));
        }
        Ok(SeedConstraint {
            bp,
            max_unpaired_overall,
            // per-sequence bounds are capped by the overall bound
            max_unpaired1: max_unpaired1.min(max_unpaired_overall),
            max_unpaired2: max_unpaired2.min(max_unpaired_overall),
            max_e,
            ranges1,
            ranges2: ranges2_reversed,
        })
    }

    pub fn base_pairs(&self) -> usize {
        self.bp
    }

    pub fn max_unpaired_overall(&self) -> usize {
        self.max_unpaired_overall
    }

    pub fn max_unpaired1(&self) -> usize {
        self.max_unpaired1
    }

    pub fn max_unpaired2(&self) -> usize {
        self.max_unpaired2
    }

    pub fn max_e(&self) -> EnergyValue {
        self.max_e
    }

    pub fn ranges1(&self) -> &IndexRangeList {
        &self.ranges1
    }

    pub fn ranges2(&self) -> &IndexRangeList {
        &self.ranges2
    }

    pub fn max_length1(&self) -> usize {
        self.bp + self.max_unpaired1
    }

    pub fn max_length2(&self) -> usize {
        self.bp + self.max_unpaired2
    }
}

impl fmt::Display for SeedConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SeedConstraint(bp={}, up={}, up1={}, up2={}, E={})",
            self.bp, self.max_unpaired_overall, self.max_unpaired1, self.max_unpaired2, self.max_e
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IndexRange;

    #[test]
    fn rejects_fewer_than_two_base_pairs() {
        let err = SeedConstraint::new(1, 4, 4, 4, 0.0, IndexRangeList::default(), IndexRangeList::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidSeedConstraint(1)));
    }

    #[test]
    fn per_sequence_bounds_capped_by_overall() {
        let sc = SeedConstraint::new(2, 3, 10, 10, -5.0, IndexRangeList::default(), IndexRangeList::default())
            .unwrap();
        assert_eq!(sc.max_unpaired1(), 3);
        assert_eq!(sc.max_unpaired2(), 3);
    }

    #[test]
    fn max_length_derives_from_bp_and_unpaired() {
        let sc = SeedConstraint::new(3, 5, 2, 4, 0.0, IndexRangeList::default(), IndexRangeList::default())
            .unwrap();
        assert_eq!(sc.max_length1(), 5);
        assert_eq!(sc.max_length2(), 7);
    }

    #[test]
    fn ranges_are_preserved_as_given() {
        let r1 = IndexRangeList::new(vec![IndexRange::new(0, 10)]);
        let r2 = IndexRangeList::new(vec![IndexRange::new(5, 20)]);
        let sc = SeedConstraint::new(2, 2, 2, 2, 0.0, r1.clone(), r2.clone()).unwrap();
        assert_eq!(sc.ranges1().to_vec(), r1.0);
        assert_eq!(sc.ranges2().to_vec(), r2.0);
    }
}
