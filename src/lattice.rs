//! Toric lattice state: the qubit grid and its two observable syndromes.
//!
//! The toric code lives on an L×L square lattice with periodic boundary conditions.
//! Qubits sit on **edges**, stored as two L×L layers:
//! - sublattice 0: horizontal edges
//! - sublattice 1: vertical edges
//!
//! Each qubit holds the Pauli operator accumulated on it so far. Syndromes are
//! never edited directly; they are recomputed wholesale from the qubit grid into
//! one of two slots, `current_state` (before an action) and `next_state` (after).

use log::{debug, trace};
use rand::Rng;

use crate::grid::Grid;
use crate::noise;
use crate::pauli::Pauli;
use crate::perspective::{self, MemoryEntry, Perspective};
use crate::snapshot::LatticeSnapshot;
use crate::syndrome::Syndrome;
use crate::topology::LoopParity;

/// Which qubit layer an edge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sublattice {
    Horizontal = 0,
    Vertical = 1,
}

impl Sublattice {
    pub const ALL: [Sublattice; 2] = [Sublattice::Horizontal, Sublattice::Vertical];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Sublattice> {
        Sublattice::ALL.get(index).copied()
    }
}

/// A qubit on the lattice: (sublattice, row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QubitPos {
    pub sublattice: Sublattice,
    pub row: usize,
    pub col: usize,
}

impl QubitPos {
    pub fn new(sublattice: Sublattice, row: usize, col: usize) -> Self {
        Self { sublattice, row, col }
    }

    /// Numeric form handed to external tooling.
    pub fn as_tuple(&self) -> (usize, usize, usize) {
        (self.sublattice.index(), self.row, self.col)
    }
}

/// Apply `operator` to the qubit at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub position: QubitPos,
    pub operator: Pauli,
}

impl Action {
    pub fn new(position: QubitPos, operator: Pauli) -> Self {
        Self { position, operator }
    }
}

/// Selects one of the two syndrome slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// Syndrome before the pending action.
    Current,
    /// Syndrome after the most recent action.
    Next,
}

/// The toric code lattice with Pauli error tracking.
///
/// Every grid it owns has the side length fixed at construction.
/// Not synchronised: one instance per rollout.
#[derive(Debug, Clone)]
pub struct ToricCode {
    size: usize,
    qubits: [Grid<Pauli>; 2],
    current_state: Syndrome,
    next_state: Syndrome,
    /// True while only trivial loops have been seen.
    ground_state: bool,
}

impl ToricCode {
    /// Create a clean L×L lattice (all qubits identity, no excitations).
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Lattice size must be positive");
        Self {
            size,
            qubits: [Grid::new(size), Grid::new(size)],
            current_state: Syndrome::empty(size),
            next_state: Syndrome::empty(size),
            ground_state: true,
        }
    }

    /// Lattice dimension L.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of qubits, 2L².
    pub fn num_qubits(&self) -> usize {
        2 * self.size * self.size
    }

    pub fn qubit(&self, pos: QubitPos) -> Pauli {
        self.qubits[pos.sublattice.index()].get(pos.row, pos.col)
    }

    /// Overwrite one qubit. Syndromes are left untouched until the next
    /// `recompute_syndrome`.
    pub fn set_qubit(&mut self, pos: QubitPos, op: Pauli) {
        self.qubits[pos.sublattice.index()].set(pos.row, pos.col, op);
    }

    /// Both qubit layers, horizontal first.
    pub fn qubits(&self) -> &[Grid<Pauli>; 2] {
        &self.qubits
    }

    pub fn layer(&self, sublattice: Sublattice) -> &Grid<Pauli> {
        &self.qubits[sublattice.index()]
    }

    /// Number of qubits carrying a non-identity operator.
    pub fn num_errors(&self) -> usize {
        self.qubits
            .iter()
            .flat_map(|layer| layer.iter())
            .filter(|p| !p.is_identity())
            .count()
    }

    pub fn state(&self, kind: StateKind) -> &Syndrome {
        match kind {
            StateKind::Current => &self.current_state,
            StateKind::Next => &self.next_state,
        }
    }

    pub fn current_state(&self) -> &Syndrome {
        &self.current_state
    }

    pub fn next_state(&self) -> &Syndrome {
        &self.next_state
    }

    /// Re-derive the selected syndrome from the qubit grid.
    pub fn recompute_syndrome(&mut self, kind: StateKind) {
        let syndrome = Syndrome::measure(&self.qubits);
        match kind {
            StateKind::Current => self.current_state = syndrome,
            StateKind::Next => self.next_state = syndrome,
        }
    }

    /// Adopt the post-action syndrome as the new pre-action syndrome.
    pub fn promote_next_state(&mut self) {
        self.current_state = self.next_state.clone();
    }

    /// Reset all qubits to identity and clear both syndromes.
    pub fn clear(&mut self) {
        self.qubits = [Grid::new(self.size), Grid::new(self.size)];
        self.recompute_syndrome(StateKind::Current);
        self.recompute_syndrome(StateKind::Next);
    }

    /// Independent errors: each qubit becomes a uniform X, Y or Z with
    /// probability `p_error`, and identity otherwise.
    ///
    /// Overwrites every qubit and recomputes `current_state`.
    pub fn generate_random_error<R: Rng>(&mut self, p_error: f64, rng: &mut R) {
        self.qubits = noise::random_error_layers(self.size, p_error, rng);
        debug!(
            "injected {} random errors at p={} on {}x{} lattice",
            self.num_errors(),
            p_error,
            self.size,
            self.size
        );
        self.recompute_syndrome(StateKind::Current);
    }

    /// Exactly `n` errors at uniformly random qubits, each a uniform X, Y or Z.
    ///
    /// `n` must not exceed 2L²; that is not checked here.
    pub fn generate_n_random_errors<R: Rng>(&mut self, n: usize, rng: &mut R) {
        self.qubits = noise::n_random_error_layers(self.size, n, rng);
        debug!("injected {} errors on {}x{} lattice", n, self.size, self.size);
        self.recompute_syndrome(StateKind::Current);
    }

    /// Compose `action.operator` onto its qubit and recompute `next_state`.
    ///
    /// The position must lie inside the lattice.
    pub fn step(&mut self, action: Action) {
        let old = self.qubit(action.position);
        let new = old.compose(action.operator);
        self.set_qubit(action.position, new);
        trace!("step {:?}: {} * {} -> {}", action.position.as_tuple(), old, action.operator, new);
        self.recompute_syndrome(StateKind::Next);
    }

    /// Check the accumulated error for a non-trivial loop.
    ///
    /// Clears the ground-state flag if any X-type or Z-type layer parity is odd;
    /// never sets it back. Only meaningful for odd L; on even lattices the result
    /// is well defined but carries no physical meaning.
    pub fn eval_ground_state(&mut self) -> bool {
        let parity = LoopParity::measure(&self.qubits);
        if !parity.is_trivial() && self.ground_state {
            debug!("non-trivial loop detected: {:?}", parity);
            self.ground_state = false;
        }
        self.ground_state
    }

    /// True while no non-trivial loop has been detected.
    pub fn ground_state(&self) -> bool {
        self.ground_state
    }

    pub fn reset_ground_state(&mut self) {
        self.ground_state = true;
    }

    /// Perspectives for every defect-adjacent qubit of `state`.
    pub fn generate_perspectives(&self, center: usize, state: &Syndrome) -> Vec<Perspective> {
        perspective::generate_perspectives(state, center)
    }

    /// Re-centered (current, action, reward, next, terminal) tuple for `action`.
    pub fn generate_memory_entry(&self, action: Action, reward: f64, center: usize) -> MemoryEntry {
        perspective::memory_entry(&self.current_state, &self.next_state, action, reward, center)
    }

    /// Plain-array export of the qubit grid and one syndrome.
    pub fn snapshot(&self, kind: StateKind, label: impl Into<String>) -> LatticeSnapshot {
        LatticeSnapshot::capture(&self.qubits, self.state(kind), label)
    }
}
