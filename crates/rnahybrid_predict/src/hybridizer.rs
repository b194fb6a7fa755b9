//! The DP core: `predict` drives `fill_hybrid_e` over every candidate
//! right boundary, then `trace_back` recovers the base pairs of the
//! boundary the `OptimaTracker` settled on. Ported in spirit from
//! `PredictorMfe2d::{predict,fillHybridE,traceBack,getNextBest}`.

use log::debug;
use log::trace;

use rnahybrid_energy::EnergyOracle;
use rnahybrid_structure::e_add;
use rnahybrid_structure::e_equal;
use rnahybrid_structure::e_is_finite;
use rnahybrid_structure::CoreError;
use rnahybrid_structure::Interaction;
use rnahybrid_structure::SequenceId;
use rnahybrid_structure::{EnergyValue, IndexRange, Pos, E_INF};

use crate::Matrix2D;
use crate::OptimaTracker;
use crate::OutputConstraint;
use crate::OutputHandler;
use crate::PredictionTracker;

pub struct Hybridizer {
    matrix: Matrix2D,
    optima: OptimaTracker,
}

impl Hybridizer {
    pub fn new() -> Self {
        Hybridizer { matrix: Matrix2D::new(), optima: OptimaTracker::new() }
    }

    pub fn matrix(&self) -> &Matrix2D {
        &self.matrix
    }

    /// Allocates the backing matrix directly, bypassing `predict`'s range
    /// bookkeeping. Exposed for benchmarks that want to isolate
    /// `fill_hybrid_e`'s cost from `predict`'s setup.
    pub fn resize_matrix(&mut self, w1: usize, w2: usize) {
        self.matrix.resize(w1, w2);
    }

    /// Top-level entry point (spec.md §4.4.1). Configures the oracle's
    /// offsets, sizes the matrix, fills it for every accessible,
    /// complementary right boundary (enumerated in reverse, matching the
    /// documented order), and reports the best interaction found.
    pub fn predict(
        &mut self,
        oracle: &mut dyn EnergyOracle,
        s1: SequenceId,
        s2: SequenceId,
        r1: IndexRange,
        r2: IndexRange,
        out_constraint: &OutputConstraint,
        handler: &mut dyn OutputHandler,
        mut tracker: Option<&mut dyn PredictionTracker>,
    ) -> Result<Interaction, CoreError> {
        if !out_constraint.is_supported() {
            return Err(CoreError::UnsupportedConstraint(format!(
                "report_max={} with report_overlap={:?}",
                out_constraint.report_max, out_constraint.report_overlap
            )));
        }
        r1.require_ascending()?;
        r2.require_ascending()?;

        debug!("predicting mfe interactions in O(n*m) space...");

        oracle.set_offset1(r1.from);
        oracle.set_offset2(r2.from);

        let w1 = oracle.size1().min(r1.effective_width(oracle.size1() + r1.from));
        let w2 = oracle.size2().min(r2.effective_width(oracle.size2() + r2.from));
        self.matrix.resize(w1, w2);

        self.optima.init(s1, s2, out_constraint)?;

        for j1 in (0..self.matrix.size1()).rev() {
            if !oracle.is_accessible1(j1) {
                continue;
            }
            for j2 in (0..self.matrix.size2()).rev() {
                if !oracle.is_accessible2(j2) {
                    continue;
                }
                if !oracle.are_complementary(j1, j2) {
                    continue;
                }
                trace!("fill_hybrid_e(j1={}, j2={})", j1, j2);
                self.fill_hybrid_e(oracle, j1, j2, 0, 0, tracker.as_deref_mut());
            }
        }

        Ok(self.optima.report_optima(oracle, handler))
    }

    /// Computes `hybridE_pq(i1, i2)` for every `(i1, i2)` in the bounded
    /// window ending at `(j1, j2)`, per spec.md §4.4.2. Both loops must run
    /// high-to-low: the recurrence reads cells with `k >= i` that were
    /// written earlier in this same call.
    pub fn fill_hybrid_e(
        &mut self,
        oracle: &dyn EnergyOracle,
        j1: Pos,
        j2: Pos,
        i1init: Pos,
        i2init: Pos,
        mut tracker: Option<&mut dyn PredictionTracker>,
    ) {
        debug_assert!(i1init <= j1, "i1init > j1: {} > {}", i1init, j1);
        debug_assert!(i2init <= j2, "i2init > j2: {} > {}", i2init, j2);

        let i1start = i1init.max(j1 - j1.min(oracle.max_length1() + 1));
        let i2start = i2init.max(j2 - j2.min(oracle.max_length2() + 1));

        for i1 in (i1start..=j1).rev() {
            let w1 = j1 - i1 + 1;
            for i2 in (i2start..=j2).rev() {
                self.matrix.set(i1, i2, E_INF);

                if !(oracle.is_accessible1(i1) && oracle.is_accessible2(i2) && oracle.are_complementary(i1, i2)) {
                    continue;
                }

                let w2 = j2 - i2 + 1;
                let cur_min_e = if i1 == j1 && i2 == j2 {
                    oracle.get_e_init()
                } else {
                    let mut best = e_add(oracle.get_e_inter_left(i1, j1, i2, j2), self.matrix.get(j1, j2));

                    if w1 > 2 && w2 > 2 {
                        let k1_max = (j1 - 1).min(i1 + oracle.get_max_internal_loop_size1() + 1);
                        let k2_max = (j2 - 1).min(i2 + oracle.get_max_internal_loop_size2() + 1);
                        for k1 in ((i1 + 1)..=k1_max).rev() {
                            for k2 in ((i2 + 1)..=k2_max).rev() {
                                if e_is_finite(self.matrix.get(k1, k2)) {
                                    let candidate =
                                        e_add(oracle.get_e_inter_left(i1, k1, i2, k2), self.matrix.get(k1, k2));
                                    if candidate < best {
                                        best = candidate;
                                    }
                                }
                            }
                        }
                    }
                    best
                };
                self.matrix.set(i1, i2, cur_min_e);
                self.optima.update_optima(i1, j1, i2, j2, cur_min_e, true, tracker.as_deref_mut());
            }
        }
    }

    /// Reconstructs the base pairs of the MFE decomposition between the
    /// two boundary pairs already present in `interaction`, per spec.md
    /// §4.4.3. No-op if the interaction has fewer than 2 base pairs.
    pub fn trace_back(
        &mut self,
        oracle: &dyn EnergyOracle,
        interaction: &mut Interaction,
    ) -> Result<(), CoreError> {
        if interaction.base_pairs.len() < 2 {
            return Ok(());
        }
        if interaction.base_pairs.len() != 2 {
            return Err(CoreError::InvalidInteraction(
                "traceBack() : given interaction does not contain boundaries only".into(),
            ));
        }

        interaction.sort();

        if interaction.base_pairs[0].p1 == interaction.base_pairs[1].p1 {
            interaction.base_pairs.truncate(1);
            return Ok(());
        }

        if !interaction.is_valid() {
            return Err(CoreError::InvalidInteraction(
                "traceBack() : given interaction is not valid".into(),
            ));
        }

        let mut i1 = oracle.get_index1(interaction.base_pairs[0]);
        let j1 = oracle.get_index1(interaction.base_pairs[1]);
        let mut i2 = oracle.get_index2(interaction.base_pairs[0]);
        let j2 = oracle.get_index2(interaction.base_pairs[1]);

        self.fill_hybrid_e(oracle, j1, j2, i1, i2, None);

        let mut cur_e = self.matrix.get(i1, i2);

        while i1 != j1 {
            if e_equal(cur_e, e_add(oracle.get_e_inter_left(i1, j1, i2, j2), self.matrix.get(j1, j2))) {
                break;
            }

            let mut trace_found = false;
            if j1 - i1 > 1 && j2 - i2 > 1 {
                let k1_max = (j1 - 1).min(i1 + oracle.get_max_internal_loop_size1() + 1);
                let k2_max = (j2 - 1).min(i2 + oracle.get_max_internal_loop_size2() + 1);
                'search: for k1 in ((i1 + 1)..=k1_max).rev() {
                    for k2 in ((i2 + 1)..=k2_max).rev() {
                        let candidate_e = self.matrix.get(k1, k2);
                        if e_is_finite(candidate_e)
                            && e_equal(cur_e, e_add(oracle.get_e_inter_left(i1, k1, i2, k2), candidate_e))
                        {
                            interaction.base_pairs.push(oracle.get_base_pair(k1, k2));
                            i1 = k1;
                            i2 = k2;
                            cur_e = candidate_e;
                            trace_found = true;
                            break 'search;
                        }
                    }
                }
            }

            if !trace_found {
                return Err(CoreError::InvalidInteraction(format!(
                    "traceBack() : no decomposition matches cur_e={} at ({}, {})-({}, {})",
                    cur_e, i1, i2, j1, j2
                )));
            }
        }

        // Reshape: shift interior pairs one slot left, rewrite the last
        // slot with the right boundary. Interior pairs were appended in
        // traversal order (left-to-right), so the shift preserves order.
        if interaction.base_pairs.len() > 2 {
            let len = interaction.base_pairs.len();
            for i in 2..len {
                interaction.base_pairs[i - 1] = interaction.base_pairs[i];
            }
            let last = interaction.base_pairs.len() - 1;
            interaction.base_pairs[last] = oracle.get_base_pair(j1, j2);
        }

        Ok(())
    }

    /// Single-optimum mode only: always signals "no further solutions".
    pub fn get_next_best(&self, out: &mut Interaction) {
        self.optima.get_next_best(out);
    }
}

impl Default for Hybridizer {
    fn default() -> Self {
        Self::new()
    }
}
