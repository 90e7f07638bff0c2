//! Translation- and rotation-reduced observations for a decoding agent.
//!
//! On a torus every qubit is equivalent up to translation, and a vertical edge
//! becomes a horizontal one after a quarter turn. A perspective exploits both:
//! the syndrome is rolled so the candidate qubit sits at a fixed center cell, and
//! views of vertical-edge qubits are rotated so the agent only ever sees a
//! horizontal edge at the center. An agent scoring a perspective therefore only
//! has to learn one local action, (sublattice, center, center, operator).

use log::trace;

use crate::lattice::{Action, QubitPos, Sublattice};
use crate::pauli::Pauli;
use crate::syndrome::Syndrome;
use crate::topology::is_terminal;

/// A re-centered view of a syndrome, tagged with the qubit it is centered on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Perspective {
    pub state: Syndrome,
    pub origin: QubitPos,
}

impl Perspective {
    /// Flat 2×L×L tensor of the view, vertex layer first.
    pub fn to_tensor(&self) -> Vec<f32> {
        self.state.to_tensor()
    }

    /// Global action for applying `operator` to this perspective's origin qubit.
    pub fn action(&self, operator: Pauli) -> Action {
        Action::new(self.origin, operator)
    }
}

/// One transition in re-centered coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryEntry {
    /// `current_state` centered on the acted-on qubit.
    pub perspective: Syndrome,
    /// The action remapped to the center cell.
    pub action: Action,
    pub reward: f64,
    /// `next_state` centered on the acted-on qubit.
    pub next_perspective: Syndrome,
    /// No excitation left in `next_perspective`.
    pub terminal: bool,
}

impl MemoryEntry {
    /// Continuation mask: 0 = terminal, 1 = not terminal.
    pub fn terminal_flag(&self) -> u8 {
        u8::from(!self.terminal)
    }
}

/// Quarter turn of both grids, then a +1 row roll of the vertex grid.
///
/// The roll realigns primal vertices with the rotated edge layout, so a rotated
/// vertical-edge view matches a horizontal-edge view after centering. Four
/// applications give back the input.
pub fn rotate_state(state: &Syndrome) -> Syndrome {
    Syndrome {
        vertex: state.vertex.rot90().roll_rows(1),
        plaquette: state.plaquette.rot90(),
    }
}

/// Does horizontal edge (i, j) touch an excitation?
fn touches_horizontal(state: &Syndrome, i: isize, j: isize) -> bool {
    state.vertex.get_wrapped(i, j)
        || state.vertex.get_wrapped(i + 1, j)
        || state.plaquette.get_wrapped(i, j)
        || state.plaquette.get_wrapped(i, j - 1)
}

/// Does vertical edge (i, j) touch an excitation?
fn touches_vertical(state: &Syndrome, i: isize, j: isize) -> bool {
    state.vertex.get_wrapped(i, j)
        || state.vertex.get_wrapped(i, j + 1)
        || state.plaquette.get_wrapped(i, j)
        || state.plaquette.get_wrapped(i - 1, j)
}

/// Center `state` on a qubit, rotating when the qubit is a vertical edge.
fn view_from(state: &Syndrome, pos: QubitPos, center: usize) -> Syndrome {
    let shifted = state.recenter(pos.row, pos.col, center);
    match pos.sublattice {
        Sublattice::Horizontal => shifted,
        Sublattice::Vertical => rotate_state(&shifted),
    }
}

/// One perspective per qubit adjacent to an excitation of `state`.
///
/// Horizontal-edge perspectives come first, then vertical-edge ones, each in
/// row-major order. The result is rebuilt from scratch on every call.
pub fn generate_perspectives(state: &Syndrome, center: usize) -> Vec<Perspective> {
    let n = state.size();
    let mut perspectives = Vec::new();

    for sublattice in Sublattice::ALL {
        let touches: fn(&Syndrome, isize, isize) -> bool = match sublattice {
            Sublattice::Horizontal => touches_horizontal,
            Sublattice::Vertical => touches_vertical,
        };
        for i in 0..n {
            for j in 0..n {
                if !touches(state, i as isize, j as isize) {
                    continue;
                }
                let origin = QubitPos::new(sublattice, i, j);
                perspectives.push(Perspective {
                    state: view_from(state, origin, center),
                    origin,
                });
            }
        }
    }

    trace!(
        "{} perspectives for {} defects",
        perspectives.len(),
        state.num_defects()
    );
    perspectives
}

/// Build the transition for `action` taken between `current` and `next`.
pub fn memory_entry(
    current: &Syndrome,
    next: &Syndrome,
    action: Action,
    reward: f64,
    center: usize,
) -> MemoryEntry {
    let pos = action.position;
    let perspective = view_from(current, pos, center);
    let next_perspective = view_from(next, pos, center);
    let terminal = is_terminal(&next_perspective);

    MemoryEntry {
        perspective,
        action: Action::new(QubitPos::new(pos.sublattice, center, center), action.operator),
        reward,
        next_perspective,
        terminal,
    }
}
