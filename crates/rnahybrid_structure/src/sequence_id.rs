/// A stable, non-owning handle to a sequence held by some external store
/// (e.g. the caller's arena of `rnahybrid_energy::Sequence`s). `Interaction`
/// and `SeedRange` carry these instead of borrowing the sequence directly,
/// so neither needs a lifetime parameter threaded through the predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceId(pub u32);

impl SequenceId {
    pub fn new(id: u32) -> Self {
        SequenceId(id)
    }
}

impl From<u32> for SequenceId {
    fn from(id: u32) -> Self {
        SequenceId(id)
    }
}
