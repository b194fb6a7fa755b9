//! Output constraint, sink, and telemetry contracts the predictor core
//! consumes. `report_overlap`/`report_max` are the only fields the core
//! inspects — everything else about how results get turned into files or
//! wire formats belongs to external collaborators.

use rnahybrid_structure::Interaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOverlap {
    OverlapNone,
    OverlapSeq1,
    OverlapSeq2,
    OverlapBoth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConstraint {
    pub report_max: usize,
    pub report_overlap: ReportOverlap,
}

impl OutputConstraint {
    pub fn single_best() -> Self {
        OutputConstraint { report_max: 1, report_overlap: ReportOverlap::OverlapNone }
    }

    /// True iff this is a combination the core can actually implement:
    /// single-best mode, or any mode where overlapping suboptimals are
    /// allowed on both sequences.
    pub fn is_supported(&self) -> bool {
        self.report_max <= 1 || self.report_overlap == ReportOverlap::OverlapBoth
    }
}

/// Receives each reported `Interaction` from `OptimaTracker::report_optima`.
pub trait OutputHandler {
    fn report(&mut self, interaction: &Interaction);
}

/// Optional telemetry sink; receives every `update_optima` offer, not just
/// the ones that are retained.
pub trait PredictionTracker {
    fn update_optima(&mut self, i1: usize, j1: usize, i2: usize, j2: usize, energy: f64, is_hybrid_e: bool);
}
