//! Single-qubit Pauli algebra, up to global phase.
//!
//! Applying two Paulis in sequence is another Pauli. Ignoring phase, the four
//! operators form the Klein four-group: I is the identity, every operator is
//! its own inverse, and any two distinct non-identity operators compose to the
//! third (X·Y ∝ Z).

use std::fmt;
use std::ops::Mul;

use rand::Rng;

use crate::error::ToricError;

/// Accumulated Pauli operator on a single qubit.
///
/// The discriminants match the numeric encoding handed to external tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Pauli {
    #[default]
    I = 0,
    X = 1,
    Y = 2,
    Z = 3,
}

// Row = operator already on the qubit, column = operator applied on top.
const RULE_TABLE: [[Pauli; 4]; 4] = [
    [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z],
    [Pauli::X, Pauli::I, Pauli::Z, Pauli::Y],
    [Pauli::Y, Pauli::Z, Pauli::I, Pauli::X],
    [Pauli::Z, Pauli::Y, Pauli::X, Pauli::I],
];

impl Pauli {
    /// All four operators in encoding order.
    pub const ALL: [Pauli; 4] = [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z];

    /// The three non-trivial operators an error (or a correction) can carry.
    pub const ERRORS: [Pauli; 3] = [Pauli::X, Pauli::Y, Pauli::Z];

    /// Net operator after applying `other` on top of `self`.
    pub fn compose(self, other: Pauli) -> Pauli {
        RULE_TABLE[self as usize][other as usize]
    }

    /// Numeric encoding: I=0, X=1, Y=2, Z=3.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Pauli> {
        Pauli::ALL.get(index as usize).copied()
    }

    pub fn is_identity(self) -> bool {
        self == Pauli::I
    }

    /// True for X and Y: the operator anticommutes with plaquette (flux) checks.
    pub fn has_x_component(self) -> bool {
        matches!(self, Pauli::X | Pauli::Y)
    }

    /// True for Y and Z: the operator anticommutes with vertex (charge) checks.
    pub fn has_z_component(self) -> bool {
        matches!(self, Pauli::Y | Pauli::Z)
    }

    /// Uniformly random non-identity operator.
    pub fn random_error<R: Rng>(rng: &mut R) -> Pauli {
        Pauli::ERRORS[rng.gen_range(0..Pauli::ERRORS.len())]
    }
}

impl Mul for Pauli {
    type Output = Pauli;

    fn mul(self, rhs: Pauli) -> Pauli {
        self.compose(rhs)
    }
}

impl TryFrom<u8> for Pauli {
    type Error = ToricError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Pauli::from_index(value).ok_or(ToricError::InvalidOperator(value))
    }
}

impl From<Pauli> for u8 {
    fn from(p: Pauli) -> u8 {
        p.index()
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Pauli::I => "I",
            Pauli::X => "X",
            Pauli::Y => "Y",
            Pauli::Z => "Z",
        };
        f.write_str(s)
    }
}
