//! Syndrome extraction for the toric code.
//!
//! **Vertex checks** flag odd Z-parity (Z or Y errors) on the edges meeting at a
//! vertex: an excitation here is a charge (e-particle).
//!
//! **Plaquette checks** flag odd X-parity (X or Y errors) on the edges bounding a
//! face: an excitation here is a flux (m-particle).
//!
//! Each check is computed as a discrete boundary: an indicator grid is compared
//! against a cyclically shifted copy of itself, and a cell is excited where exactly
//! one of the two is set. Error strings therefore light up only at their endpoints.
//!
//! | layer          | charge shift        | flux shift          |
//! |----------------|---------------------|---------------------|
//! | sublattice 0   | rows, +1            | columns, -1         |
//! | sublattice 1   | columns, +1         | rows, -1            |

use crate::grid::Grid;
use crate::pauli::Pauli;

/// One observable syndrome: vertex (charge) and plaquette (flux) grids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Syndrome {
    /// Vertex excitations: true = charge present at vertex (r, c).
    pub vertex: Grid<bool>,
    /// Plaquette excitations: true = flux present at plaquette (r, c).
    pub plaquette: Grid<bool>,
}

impl Syndrome {
    /// Syndrome with no excitations.
    pub fn empty(n: usize) -> Self {
        Self {
            vertex: Grid::new(n),
            plaquette: Grid::new(n),
        }
    }

    /// Measure all vertex and plaquette checks of a two-layer qubit grid.
    pub fn measure(qubits: &[Grid<Pauli>; 2]) -> Self {
        let [horizontal, vertical] = qubits;

        let z0 = horizontal.map(Pauli::has_z_component);
        let z1 = vertical.map(Pauli::has_z_component);
        let charge0 = z0.xor(&z0.roll_rows(1));
        let charge1 = z1.xor(&z1.roll_cols(1));

        let x0 = horizontal.map(Pauli::has_x_component);
        let x1 = vertical.map(Pauli::has_x_component);
        let flux0 = x0.xor(&x0.roll_cols(-1));
        let flux1 = x1.xor(&x1.roll_rows(-1));

        Self {
            vertex: charge0.xor(&charge1),
            plaquette: flux0.xor(&flux1),
        }
    }

    /// Lattice dimension.
    pub fn size(&self) -> usize {
        self.vertex.size()
    }

    /// Cyclic shift of both grids: `out[r][c] = self[r - dr][c - dc]`.
    pub fn roll(&self, dr: isize, dc: isize) -> Self {
        Self {
            vertex: self.vertex.roll(dr, dc),
            plaquette: self.plaquette.roll(dr, dc),
        }
    }

    /// Shift so that cell (row, col) lands on (center, center).
    pub fn recenter(&self, row: usize, col: usize, center: usize) -> Self {
        self.roll(
            center as isize - row as isize,
            center as isize - col as isize,
        )
    }

    /// Locations of charges (vertex violations).
    pub fn e_particles(&self) -> Vec<(usize, usize)> {
        self.vertex.positions(|v| v)
    }

    /// Locations of fluxes (plaquette violations).
    pub fn m_particles(&self) -> Vec<(usize, usize)> {
        self.plaquette.positions(|v| v)
    }

    /// Total number of charges. Always even on a torus.
    pub fn num_e_particles(&self) -> usize {
        self.vertex.count()
    }

    /// Total number of fluxes. Always even on a torus.
    pub fn num_m_particles(&self) -> usize {
        self.plaquette.count()
    }

    pub fn num_defects(&self) -> usize {
        self.num_e_particles() + self.num_m_particles()
    }

    /// No excitation anywhere.
    pub fn is_clean(&self) -> bool {
        !self.vertex.any() && !self.plaquette.any()
    }

    /// Stacked `[vertex, plaquette]` as 0/1 rows.
    pub fn to_arrays(&self) -> [Vec<Vec<u8>>; 2] {
        [
            self.vertex.map(u8::from).to_rows(),
            self.plaquette.map(u8::from).to_rows(),
        ]
    }

    /// Flat 2×L×L tensor, vertex layer first, row-major.
    pub fn to_tensor(&self) -> Vec<f32> {
        self.vertex
            .iter()
            .chain(self.plaquette.iter())
            .map(|&v| if v { 1.0 } else { 0.0 })
            .collect()
    }
}
