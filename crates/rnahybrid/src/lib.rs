//! # rnahybrid
//!
//! Minimum free energy prediction for RNA-RNA hybridization: given two
//! sequences, finds the lowest-energy set of non-crossing, antiparallel
//! base pairs between them under a nearest-neighbor-style energy model.
//!
//! This crate re-exports its submodules, which are organized as a
//! workspace: [`structure`] holds the data model, [`energy`] the energy
//! oracle contract and a reference implementation, and [`predict`] the
//! dynamic programming core.

/// Exposing rnahybrid::structure. Data types for interactions, base pairs,
/// index ranges, and seed constraints shared across the workspace.
pub mod structure {
    pub use ::rnahybrid_structure::*;
}

/// Exposing rnahybrid::energy. The `EnergyOracle` contract nucleotide
/// sequences and loop energies are evaluated through, plus `SimpleOracle`,
/// a reference implementation.
pub mod energy {
    pub use ::rnahybrid_energy::*;
}

/// Exposing rnahybrid::predict. The O(n*m)-space dynamic programming core:
/// `Hybridizer`, its backing `Matrix2D`, and the output/tracking contracts
/// it reports through.
pub mod predict {
    pub use ::rnahybrid_predict::*;
}

/// Installs an `env_logger` subscriber reading `RUST_LOG`, for binaries and
/// examples that embed this crate and want the `log::debug!`/`trace!`
/// output `predict` emits during a fill pass.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
