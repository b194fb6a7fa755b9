//! Dense `W1 x W2` hybridization energy table, indexed by left-boundary
//! pair `(i1, i2)` for a currently-fixed right boundary. Reused across all
//! right boundaries within one `predict` call rather than reallocated per
//! boundary, the way `domainlevel::checks::dlfolding::nussinov` reuses a
//! single `ndarray::Array2` for its whole DP pass.

use ndarray::Array2;

use rnahybrid_structure::EnergyValue;
use rnahybrid_structure::E_INF;

#[derive(Debug, Clone)]
pub struct Matrix2D {
    cells: Array2<EnergyValue>,
}

impl Matrix2D {
    pub fn new() -> Self {
        Matrix2D { cells: Array2::from_elem((0, 0), E_INF) }
    }

    /// (Re)allocate to exactly `w1 x w2` cells. Contents are undefined
    /// (left at whatever `from_elem` fills them with) until written by a
    /// fill pass.
    pub fn resize(&mut self, w1: usize, w2: usize) {
        self.cells = Array2::from_elem((w1, w2), E_INF);
    }

    #[inline]
    pub fn get(&self, i1: usize, i2: usize) -> EnergyValue {
        self.cells[(i1, i2)]
    }

    #[inline]
    pub fn set(&mut self, i1: usize, i2: usize, v: EnergyValue) {
        self.cells[(i1, i2)] = v;
    }

    pub fn size1(&self) -> usize {
        self.cells.dim().0
    }

    pub fn size2(&self) -> usize {
        self.cells.dim().1
    }
}

impl Default for Matrix2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_reports_new_dimensions() {
        let mut m = Matrix2D::new();
        m.resize(4, 6);
        assert_eq!(m.size1(), 4);
        assert_eq!(m.size2(), 6);
    }

    #[test]
    fn freshly_resized_cells_are_infeasible() {
        let mut m = Matrix2D::new();
        m.resize(3, 3);
        assert_eq!(m.get(1, 2), E_INF);
    }

    #[test]
    fn get_set_round_trips() {
        let mut m = Matrix2D::new();
        m.resize(2, 2);
        m.set(1, 1, -3.5);
        assert_eq!(m.get(1, 1), -3.5);
    }
}
