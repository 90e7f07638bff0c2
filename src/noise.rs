//! Error models that fill the qubit layers.
//!
//! Both models are defined by the distribution they produce, not by the exact
//! sequence of RNG calls, so any `Rng` works and seeded generators reproduce.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::pauli::Pauli;

/// Independent noise: each qubit is non-identity with probability `p_error`,
/// and then X, Y or Z with equal probability.
///
/// Per layer, the uniform variates and the candidate operators are drawn as two
/// separate grids and the operators are masked by `variate < p_error`.
pub fn random_error_layers<R: Rng>(n: usize, p_error: f64, rng: &mut R) -> [Grid<Pauli>; 2] {
    let mut layer = || {
        let variates = Grid::from_fn(n, |_, _| rng.gen::<f64>());
        let operators = Grid::from_fn(n, |_, _| Pauli::random_error(rng));
        variates.zip_with(&operators, |u, op| if u < p_error { op } else { Pauli::I })
    };
    let horizontal = layer();
    let vertical = layer();
    [horizontal, vertical]
}

/// Exactly `count` errors placed uniformly over the 2n² qubits.
///
/// Panics if `count` exceeds 2n².
pub fn n_random_error_layers<R: Rng>(n: usize, count: usize, rng: &mut R) -> [Grid<Pauli>; 2] {
    let nn = n * n;
    assert!(count <= 2 * nn, "Cannot place {} errors on {} qubits", count, 2 * nn);

    let mut slots = vec![Pauli::I; 2 * nn];
    for slot in slots.iter_mut().take(count) {
        *slot = Pauli::random_error(rng);
    }
    slots.shuffle(rng);

    let vertical = slots.split_off(nn);
    [Grid::from_vec(n, slots), Grid::from_vec(n, vertical)]
}
