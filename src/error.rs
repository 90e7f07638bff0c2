//! Errors raised by the checked environment layer.
//!
//! The lattice core itself runs on caller contracts and never returns these;
//! `EnvConfig::validate` and `ToricEnv` check the contracts up front.

use crate::lattice::Sublattice;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToricError {
    #[error("lattice size must be positive")]
    ZeroSize,

    #[error("ground-state evaluation needs an odd lattice size, got {0}")]
    EvenSize(usize),

    #[error("qubit ({sublattice:?}, {row}, {col}) is outside a {size}x{size} lattice")]
    QubitOutOfRange {
        sublattice: Sublattice,
        row: usize,
        col: usize,
        size: usize,
    },

    #[error("error probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    #[error("cannot place {requested} errors on {capacity} qubits")]
    TooManyErrors { requested: usize, capacity: usize },

    #[error("center offset {offset} is outside a lattice of size {size}")]
    CenterOutOfRange { offset: usize, size: usize },

    #[error("actions must apply X, Y or Z, not the identity")]
    IdentityAction,

    #[error("invalid Pauli encoding {0} (must be in [0, 4))")]
    InvalidOperator(u8),
}

pub type Result<T> = std::result::Result<T, ToricError>;
