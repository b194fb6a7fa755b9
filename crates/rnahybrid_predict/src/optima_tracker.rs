//! Accumulates the single best (minimum-energy) interaction boundary seen
//! across all right-boundary fills, then hands it off to the output sink.

use rnahybrid_energy::EnergyOracle;
use rnahybrid_structure::CoreError;
use rnahybrid_structure::Interaction;
use rnahybrid_structure::InteractionRange;
use rnahybrid_structure::SequenceId;
use rnahybrid_structure::E_INF;
use rnahybrid_structure::{EnergyValue, Pos};

use crate::OutputConstraint;
use crate::OutputHandler;
use crate::PredictionTracker;

#[derive(Debug, Clone, Copy)]
struct Boundary {
    i1: Pos,
    j1: Pos,
    i2: Pos,
    j2: Pos,
    energy: EnergyValue,
}

#[derive(Debug)]
pub struct OptimaTracker {
    s1: SequenceId,
    s2: SequenceId,
    best: Option<Boundary>,
}

impl OptimaTracker {
    pub fn new() -> Self {
        OptimaTracker { s1: SequenceId::new(0), s2: SequenceId::new(0), best: None }
    }

    /// Reset for a fresh `predict` call. Rejects any output constraint
    /// combination the core cannot enumerate.
    pub fn init(&mut self, s1: SequenceId, s2: SequenceId, out: &OutputConstraint) -> Result<(), CoreError> {
        if !out.is_supported() {
            return Err(CoreError::UnsupportedConstraint(format!(
                "report_max={} with report_overlap={:?}",
                out.report_max, out.report_overlap
            )));
        }
        self.s1 = s1;
        self.s2 = s2;
        self.best = None;
        Ok(())
    }

    /// Offer a candidate boundary; retained iff strictly lower than the
    /// current best.
    ///
    /// `is_hybrid_e` flags that `energy` is pure hybridization energy
    /// rather than total interaction energy. This oracle contract (§4.1)
    /// does not expose an accessibility-energy term to convert with, so
    /// the conversion is presently the identity — the flag and the
    /// `oracle`/`tracker` seam exist so a richer oracle can plug in an ED
    /// term later without changing this call site.
    pub fn update_optima(
        &mut self,
        i1: Pos,
        j1: Pos,
        i2: Pos,
        j2: Pos,
        energy: EnergyValue,
        is_hybrid_e: bool,
        tracker: Option<&mut dyn PredictionTracker>,
    ) {
        if let Some(t) = tracker {
            t.update_optima(i1, j1, i2, j2, energy, is_hybrid_e);
        }
        let better = match self.best {
            None => energy < E_INF,
            Some(b) => energy < b.energy,
        };
        if better {
            self.best = Some(Boundary { i1, j1, i2, j2, energy });
        }
    }

    /// Emits the best boundary-only interaction to `handler` and also
    /// returns it, so a caller running `trace_back` doesn't need to
    /// re-derive the boundary.
    pub fn report_optima(
        &self,
        oracle: &dyn EnergyOracle,
        handler: &mut dyn OutputHandler,
    ) -> Interaction {
        let interaction = match self.best {
            None => {
                let mut empty = Interaction::new(self.s1, self.s2);
                empty.energy = E_INF;
                empty
            }
            Some(b) => {
                let left = oracle.get_base_pair(b.i1, b.i2);
                let right = oracle.get_base_pair(b.j1, b.j2);
                // r1 ascends (left.p1 < right.p1); r2 descends (left.p2 >
                // right.p2), since sequence 2 is addressed antiparallel to
                // sequence 1. `from`/`to` here track left/right boundary,
                // not low/high — see `IndexRange`'s doc comment.
                let range = InteractionRange {
                    s1: self.s1,
                    s2: self.s2,
                    r1: rnahybrid_structure::IndexRange::new(left.p1, right.p1),
                    r2: rnahybrid_structure::IndexRange::new(left.p2, right.p2),
                    energy: b.energy,
                };
                Interaction::from(&range)
            }
        };
        handler.report(&interaction);
        interaction
    }

    /// Single-optimum mode only: always signals "no further solutions".
    pub fn get_next_best(&self, out: &mut Interaction) {
        out.energy = E_INF;
        out.base_pairs.clear();
    }
}

impl Default for OptimaTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReportOverlap;

    struct NullHandler;
    impl OutputHandler for NullHandler {
        fn report(&mut self, _interaction: &Interaction) {}
    }

    #[test]
    fn init_rejects_unsupported_combination() {
        let mut tracker = OptimaTracker::new();
        let out = OutputConstraint { report_max: 3, report_overlap: ReportOverlap::OverlapSeq2 };
        let err = tracker.init(SequenceId::new(0), SequenceId::new(1), &out).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedConstraint(_)));
    }

    #[test]
    fn init_accepts_single_best() {
        let mut tracker = OptimaTracker::new();
        assert!(tracker.init(SequenceId::new(0), SequenceId::new(1), &OutputConstraint::single_best()).is_ok());
    }

    #[test]
    fn update_optima_keeps_strictly_lower_candidate() {
        let mut tracker = OptimaTracker::new();
        tracker.init(SequenceId::new(0), SequenceId::new(1), &OutputConstraint::single_best()).unwrap();
        tracker.update_optima(0, 3, 0, 3, -2.0, true, None);
        tracker.update_optima(1, 3, 1, 3, -5.0, true, None);
        tracker.update_optima(2, 3, 2, 3, -4.0, true, None);
        assert_eq!(tracker.best.unwrap().energy, -5.0);
        assert_eq!(tracker.best.unwrap().i1, 1);
    }

    #[test]
    fn infeasible_candidates_are_never_retained() {
        let mut tracker = OptimaTracker::new();
        tracker.init(SequenceId::new(0), SequenceId::new(1), &OutputConstraint::single_best()).unwrap();
        tracker.update_optima(0, 3, 0, 3, E_INF, true, None);
        assert!(tracker.best.is_none());
    }

    #[test]
    fn get_next_best_always_signals_no_more() {
        let tracker = OptimaTracker::new();
        let mut out = Interaction::new(SequenceId::new(0), SequenceId::new(1));
        out.base_pairs.push(rnahybrid_structure::BasePair::new(0, 0));
        tracker.get_next_best(&mut out);
        assert_eq!(out.energy, E_INF);
        assert!(out.base_pairs.is_empty());
    }

    #[test]
    fn report_optima_without_any_candidate_yields_empty_interaction() {
        let mut tracker = OptimaTracker::new();
        tracker.init(SequenceId::new(0), SequenceId::new(1), &OutputConstraint::single_best()).unwrap();
        let oracle = rnahybrid_energy::SimpleOracle::new(
            rnahybrid_energy::Sequence::try_from("GCGC").unwrap(),
            rnahybrid_energy::Sequence::try_from("GCGC").unwrap(),
        );
        let mut handler = NullHandler;
        let interaction = tracker.report_optima(&oracle, &mut handler);
        assert!(interaction.is_empty());
        assert_eq!(interaction.energy, E_INF);
    }
}
