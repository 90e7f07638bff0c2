//! Terminal detection and trivial/non-trivial loop classification.
//!
//! **Logical operators** are non-contractible loops of X (or Z) operators around a
//! cycle of the torus. They commute with every check, so they leave no syndrome,
//! but they act non-trivially on the encoded qubits.
//!
//! On an odd-sized lattice a wrapping string has odd weight on its layer, while
//! any contractible loop (a product of stabilizers) has even weight. Counting
//! X-type and Z-type weight per layer therefore separates the two cases. This
//! says nothing about *which* logical class a non-trivial loop belongs to, and
//! the test is meaningless for even L.

use crate::grid::Grid;
use crate::pauli::Pauli;
use crate::syndrome::Syndrome;

/// True iff neither grid of `state` has an excitation.
pub fn is_terminal(state: &Syndrome) -> bool {
    state.is_clean()
}

/// Continuation flag as consumed by learners: 0 = terminal, 1 = not terminal.
pub fn terminal_flag(state: &Syndrome) -> u8 {
    u8::from(!is_terminal(state))
}

/// X-type and Z-type operator weight of each qubit layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopParity {
    /// Qubits carrying X or Y, per sublattice.
    pub x: [usize; 2],
    /// Qubits carrying Y or Z, per sublattice.
    pub z: [usize; 2],
}

impl LoopParity {
    pub fn measure(qubits: &[Grid<Pauli>; 2]) -> Self {
        let weight = |layer: &Grid<Pauli>, pred: fn(Pauli) -> bool| {
            layer.iter().filter(|&&p| pred(p)).count()
        };
        Self {
            x: [
                weight(&qubits[0], Pauli::has_x_component),
                weight(&qubits[1], Pauli::has_x_component),
            ],
            z: [
                weight(&qubits[0], Pauli::has_z_component),
                weight(&qubits[1], Pauli::has_z_component),
            ],
        }
    }

    /// All four weights are even: only contractible loops (odd L only).
    pub fn is_trivial(&self) -> bool {
        self.x.iter().chain(self.z.iter()).all(|w| w % 2 == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers(n: usize) -> [Grid<Pauli>; 2] {
        [Grid::new(n), Grid::new(n)]
    }

    #[test]
    fn test_terminal_on_clean_syndrome() {
        let syn = Syndrome::empty(3);
        assert!(is_terminal(&syn));
        assert_eq!(terminal_flag(&syn), 0);
    }

    #[test]
    fn test_single_defect_not_terminal() {
        let mut syn = Syndrome::empty(3);
        syn.plaquette.set(2, 2, true);
        assert!(!is_terminal(&syn));
        assert_eq!(terminal_flag(&syn), 1);
    }

    #[test]
    fn test_no_errors_trivial() {
        assert!(LoopParity::measure(&layers(5)).is_trivial());
    }

    #[test]
    fn test_contractible_x_loop_trivial() {
        // X on the four edges whose flux pairs cancel around plaquettes
        // (0,0), (0,1), (1,0), (1,1).
        let mut q = layers(5);
        q[0].set(1, 1, Pauli::X);
        q[0].set(0, 1, Pauli::X);
        q[1].set(1, 1, Pauli::X);
        q[1].set(1, 0, Pauli::X);
        assert!(Syndrome::measure(&q).is_clean());
        assert!(LoopParity::measure(&q).is_trivial());
    }

    #[test]
    fn test_contractible_z_loop_trivial() {
        // Z on the four edges around the face with corners (0,0) and (1,1).
        let mut q = layers(5);
        q[0].set(0, 0, Pauli::Z);
        q[1].set(0, 0, Pauli::Z);
        q[0].set(0, 1, Pauli::Z);
        q[1].set(1, 0, Pauli::Z);
        assert!(Syndrome::measure(&q).is_clean());
        assert!(LoopParity::measure(&q).is_trivial());
    }

    #[test]
    fn test_wrapping_x_loop_nontrivial() {
        let mut q = layers(5);
        for c in 0..5 {
            q[0].set(3, c, Pauli::X);
        }
        assert!(Syndrome::measure(&q).is_clean());
        let parity = LoopParity::measure(&q);
        assert_eq!(parity.x, [5, 0]);
        assert!(!parity.is_trivial());
    }

    #[test]
    fn test_wrapping_z_loop_nontrivial() {
        let mut q = layers(3);
        for c in 0..3 {
            q[1].set(2, c, Pauli::Z);
        }
        assert!(Syndrome::measure(&q).is_clean());
        let parity = LoopParity::measure(&q);
        assert_eq!(parity.z, [0, 3]);
        assert!(!parity.is_trivial());
    }

    #[test]
    fn test_y_counts_in_both_sectors() {
        let mut q = layers(3);
        q[0].set(0, 0, Pauli::Y);
        let parity = LoopParity::measure(&q);
        assert_eq!(parity.x, [1, 0]);
        assert_eq!(parity.z, [1, 0]);
    }
}
