//! Read-only export of lattice state for plotting tools.
//!
//! A snapshot is plain numbers: qubit layers in the I=0, X=1, Y=2, Z=3 encoding
//! and 0/1 syndrome grids, plus a caller-chosen label. Layout, drawing and file
//! naming belong to whoever consumes it.

use crate::grid::Grid;
use crate::pauli::Pauli;
use crate::syndrome::Syndrome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticeSnapshot {
    pub label: String,
    pub size: usize,
    /// `[horizontal, vertical]` layers, row-major.
    pub qubits: [Vec<Vec<u8>>; 2],
    pub vertex: Vec<Vec<u8>>,
    pub plaquette: Vec<Vec<u8>>,
}

impl LatticeSnapshot {
    pub fn capture(qubits: &[Grid<Pauli>; 2], state: &Syndrome, label: impl Into<String>) -> Self {
        let [vertex, plaquette] = state.to_arrays();
        Self {
            label: label.into(),
            size: state.size(),
            qubits: [
                qubits[0].map(Pauli::index).to_rows(),
                qubits[1].map(Pauli::index).to_rows(),
            ],
            vertex,
            plaquette,
        }
    }

    /// (sublattice, row, col) of every qubit holding `op`.
    pub fn error_positions(&self, op: Pauli) -> Vec<(usize, usize, usize)> {
        let code = op.index();
        let mut out = Vec::new();
        for (s, layer) in self.qubits.iter().enumerate() {
            out.extend(cells_equal(layer, code).into_iter().map(|(r, c)| (s, r, c)));
        }
        out
    }

    /// Vertices holding a charge.
    pub fn charge_positions(&self) -> Vec<(usize, usize)> {
        cells_equal(&self.vertex, 1)
    }

    /// Plaquettes holding a flux.
    pub fn flux_positions(&self) -> Vec<(usize, usize)> {
        cells_equal(&self.plaquette, 1)
    }
}

fn cells_equal(rows: &[Vec<u8>], value: u8) -> Vec<(usize, usize)> {
    rows.iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(move |&(_, &v)| v == value)
                .map(move |(c, _)| (r, c))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_encodes_operators() {
        let mut qubits = [Grid::new(3), Grid::new(3)];
        qubits[0].set(0, 2, Pauli::Z);
        qubits[1].set(2, 1, Pauli::Y);
        qubits[1].set(1, 1, Pauli::Z);
        let state = Syndrome::measure(&qubits);
        let snap = LatticeSnapshot::capture(&qubits, &state, "t0");

        assert_eq!(snap.size, 3);
        assert_eq!(snap.qubits[0][0][2], 3);
        assert_eq!(snap.qubits[1][2][1], 2);
        assert_eq!(snap.error_positions(Pauli::Z), vec![(0, 0, 2), (1, 1, 1)]);
        assert_eq!(snap.error_positions(Pauli::Y), vec![(1, 2, 1)]);
        assert!(snap.error_positions(Pauli::X).is_empty());
        assert_eq!(snap.charge_positions(), state.e_particles());
        assert_eq!(snap.flux_positions(), state.m_particles());
    }
}
