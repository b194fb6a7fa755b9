use std::fmt;

use crate::Pos;

/// An inter-molecular base pair: position `p1` in sequence 1 paired with
/// position `p2` in sequence 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BasePair {
    pub p1: Pos,
    pub p2: Pos,
}

impl BasePair {
    pub fn new(p1: Pos, p2: Pos) -> Self {
        BasePair { p1, p2 }
    }
}

impl From<(Pos, Pos)> for BasePair {
    fn from((p1, p2): (Pos, Pos)) -> Self {
        BasePair { p1, p2 }
    }
}

impl fmt::Display for BasePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.p1, self.p2)
    }
}
