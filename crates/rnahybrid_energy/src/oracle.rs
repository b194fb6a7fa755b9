//! The contract the predictor core issues queries against. Stateless aside
//! from the offset pair that shifts external (sequence-absolute) indices to
//! internal (matrix-relative) ones for the duration of one `predict` call.

use rnahybrid_structure::BasePair;
use rnahybrid_structure::EnergyValue;
use rnahybrid_structure::Pos;

pub trait EnergyOracle {
    /// Dimensions available from the current offsets.
    fn size1(&self) -> usize;
    fn size2(&self) -> usize;

    /// Whether position `i` (internal index) can participate in any
    /// interaction at all, e.g. not folded up in an inaccessible region.
    fn is_accessible1(&self, i: Pos) -> bool;
    fn is_accessible2(&self, i: Pos) -> bool;

    /// Whether `s1[i1]` and `s2[i2]` (internal indices) can form a base
    /// pair.
    fn are_complementary(&self, i1: Pos, i2: Pos) -> bool;

    /// Additive cost of starting an interaction.
    fn get_e_init(&self) -> EnergyValue;

    /// Energy of the internal loop/stack extending a left boundary from
    /// `(k1, k2)` to `(i1, i2)`. Returns `E_INF` if the loop exceeds the
    /// configured size limits.
    fn get_e_inter_left(&self, i1: Pos, k1: Pos, i2: Pos, k2: Pos) -> EnergyValue;

    /// Per-side bounds on unpaired bases inside one internal loop; the DP
    /// must not consider gaps wider than these.
    fn get_max_internal_loop_size1(&self) -> usize;
    fn get_max_internal_loop_size2(&self) -> usize;

    /// Per-sequence maximum interaction length.
    fn max_length1(&self) -> usize;
    fn max_length2(&self) -> usize;

    /// Converts internal (offset-relative) indices to an external
    /// (sequence-absolute) base pair.
    fn get_base_pair(&self, i1: Pos, i2: Pos) -> BasePair;

    /// Converts an external base pair back to internal indices.
    fn get_index1(&self, bp: BasePair) -> Pos;
    fn get_index2(&self, bp: BasePair) -> Pos;

    /// Mutates the offset for the duration of one `predict` call.
    fn set_offset1(&mut self, v: Pos);
    fn set_offset2(&mut self, v: Pos);
}
