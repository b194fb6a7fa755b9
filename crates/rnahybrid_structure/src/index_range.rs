//! Position/range types shared by the oracle contract and the data model.

use std::ops::Deref;

use crate::CoreError;

/// Sentinel for `IndexRange::to`, meaning "to the end of the sequence".
pub const LAST_POS: usize = usize::MAX;

/// A position within a sequence. Sequences have size `N`; valid positions
/// lie in `[0, N)`.
pub type Pos = usize;

/// An `(from, to)` pair. As a scan-window range (`predict`'s `r1`/`r2`
/// arguments, `SeedConstraint`'s allowed-position lists) it is ascending
/// (`from <= to`) and `require_ascending` enforces that. `to == LAST_POS`
/// means "to end of sequence"; `effective_width` substitutes the sequence
/// size for it.
///
/// `InteractionRange.r2` and `SeedRange.r2` are the one exception: since
/// sequence 2 is addressed antiparallel to sequence 1, `r2` there runs from
/// the *left* interaction boundary's physical position to the *right*
/// boundary's, which descends (`from > to`). `from`/`to` track left/right
/// boundary in that case, not low/high, and `is_ascending`/
/// `require_ascending` are not meaningful for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub from: Pos,
    pub to: Pos,
}

impl IndexRange {
    pub fn new(from: Pos, to: Pos) -> Self {
        IndexRange { from, to }
    }

    /// A single-position range.
    pub fn singleton(at: Pos) -> Self {
        IndexRange { from: at, to: at }
    }

    pub fn is_ascending(&self) -> bool {
        self.from <= self.to
    }

    pub fn is_singleton(&self) -> bool {
        self.from == self.to
    }

    /// Width in positions, substituting `size - 1` for the `LAST_POS`
    /// sentinel, i.e. `min(size, effective_width) == usable window width`.
    pub fn effective_width(&self, size: usize) -> usize {
        let to = if self.to == LAST_POS { size.saturating_sub(1) } else { self.to };
        to.saturating_sub(self.from) + 1
    }

    pub fn require_ascending(&self) -> Result<(), CoreError> {
        if self.is_ascending() {
            Ok(())
        } else {
            Err(CoreError::BadRange(format!("({}, {})", self.from, self.to)))
        }
    }
}

/// A list of index ranges, e.g. the allowed seed positions within a
/// sequence. An empty list means "all indices relevant".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexRangeList(pub Vec<IndexRange>);

impl Deref for IndexRangeList {
    type Target = [IndexRange];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IndexRangeList {
    pub fn new(ranges: Vec<IndexRange>) -> Self {
        IndexRangeList(ranges)
    }

    pub fn covers(&self, pos: Pos) -> bool {
        self.0.is_empty() || self.0.iter().any(|r| pos >= r.from && pos <= r.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_range_is_sane() {
        assert!(IndexRange::new(1, 5).is_ascending());
        assert!(!IndexRange::new(5, 1).is_ascending());
    }

    #[test]
    fn effective_width_substitutes_last_pos() {
        let r = IndexRange::new(2, LAST_POS);
        assert_eq!(r.effective_width(10), 8); // positions 2..=9
        assert_eq!(IndexRange::new(2, 4).effective_width(10), 3);
    }

    #[test]
    fn singleton_detection() {
        assert!(IndexRange::singleton(3).is_singleton());
        assert!(!IndexRange::new(3, 4).is_singleton());
    }

    #[test]
    fn empty_range_list_covers_everything() {
        let empty = IndexRangeList::default();
        assert!(empty.covers(0));
        assert!(empty.covers(1_000));
    }

    #[test]
    fn nonempty_range_list_only_covers_listed_ranges() {
        let list = IndexRangeList::new(vec![IndexRange::new(2, 4), IndexRange::new(10, 12)]);
        assert!(list.covers(3));
        assert!(list.covers(11));
        assert!(!list.covers(5));
    }
}
