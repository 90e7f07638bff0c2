use rand::rngs::StdRng;
use rand::SeedableRng;
use toric_rl_env::prelude::*;

fn action(sub: Sublattice, row: usize, col: usize, op: Pauli) -> Action {
    Action::new(QubitPos::new(sub, row, col), op)
}

#[test]
fn test_x_on_center_of_3x3() {
    let mut code = ToricCode::new(3);
    code.step(action(Sublattice::Horizontal, 1, 1, Pauli::X));

    assert_eq!(code.qubit(QubitPos::new(Sublattice::Horizontal, 1, 1)), Pauli::X);
    let next = code.state(StateKind::Next);
    assert_eq!(next.m_particles(), vec![(1, 0), (1, 1)]);
    assert!(next.e_particles().is_empty());
    assert!(!is_terminal(next));
    assert_eq!(terminal_flag(next), 1);
}

#[test]
fn test_y_twice_round_trip() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut code = ToricCode::new(5);
    code.generate_n_random_errors(6, &mut rng);
    let before = code.current_state().clone();
    let pos = QubitPos::new(Sublattice::Vertical, 2, 3);
    let initial = code.qubit(pos);

    code.step(Action::new(pos, Pauli::Y));
    code.step(Action::new(pos, Pauli::Y));

    assert_eq!(code.qubit(pos), initial);
    assert_eq!(code.next_state(), &before);
}

#[test]
fn test_fixed_count_generation_is_exact() {
    let mut rng = StdRng::seed_from_u64(100);
    for size in [3, 5] {
        let mut code = ToricCode::new(size);
        for n in 0..=2 * size * size {
            code.generate_n_random_errors(n, &mut rng);
            assert_eq!(code.num_errors(), n, "size {} n {}", size, n);
        }
    }
}

#[test]
fn test_generation_recomputes_current_only() {
    let mut rng = StdRng::seed_from_u64(101);
    let mut code = ToricCode::new(5);
    code.generate_random_error(0.5, &mut rng);
    assert_eq!(code.current_state(), &Syndrome::measure(code.qubits()));
    assert!(code.next_state().is_clean());
}

#[test]
fn test_clean_lattice_is_terminal_and_trivial() {
    let mut code = ToricCode::new(7);
    assert!(is_terminal(code.current_state()));
    assert!(code.eval_ground_state());
}

#[test]
fn test_perspective_order_is_sublattice_then_row_major() {
    let mut rng = StdRng::seed_from_u64(102);
    let mut code = ToricCode::new(5);
    code.generate_random_error(0.2, &mut rng);
    let origins: Vec<_> = code
        .generate_perspectives(2, code.current_state())
        .iter()
        .map(|p| p.origin.as_tuple())
        .collect();
    let mut sorted = origins.clone();
    sorted.sort();
    assert_eq!(origins, sorted);
}

#[test]
fn test_greedy_episode_clears_single_error() {
    // Correcting the one faulty qubit through its own perspective ends the episode.
    let mut env = ToricEnv::new(EnvConfig::new(5).with_error_count(1)).unwrap();
    let mut rng = StdRng::seed_from_u64(103);
    env.reset(&mut rng);

    let faulty = Sublattice::ALL
        .iter()
        .flat_map(|&s| (0..5).flat_map(move |r| (0..5).map(move |c| QubitPos::new(s, r, c))))
        .find(|&pos| !env.code().qubit(pos).is_identity())
        .unwrap();
    let op = env.code().qubit(faulty);

    assert!(env.perspectives().iter().any(|p| p.origin == faulty));
    let correction = Action::new(faulty, op);
    assert!(env.step(correction).unwrap());

    let entry = env.memory_entry(correction, 100.0).unwrap();
    assert!(entry.terminal);
    assert_eq!(entry.action.position.as_tuple(), (faulty.sublattice.index(), 2, 2));
    assert!(!entry.perspective.is_clean());

    env.advance();
    assert!(env.perspectives().is_empty());
    assert!(env.evaluate());
}

#[test]
fn test_wrapping_correction_flags_logical_error() {
    // Closing a Z error the long way around the torus leaves no syndrome but
    // a non-trivial loop.
    let mut env = ToricEnv::new(EnvConfig::new(3).with_error_count(0)).unwrap();
    let mut rng = StdRng::seed_from_u64(104);
    env.reset(&mut rng);

    for c in 0..3 {
        env.step(action(Sublattice::Vertical, 1, c, Pauli::Z)).unwrap();
    }
    assert!(is_terminal(env.code().next_state()));
    assert!(!env.evaluate());
}

#[test]
fn test_snapshot_boundary() {
    let mut code = ToricCode::new(3);
    code.step(action(Sublattice::Vertical, 0, 2, Pauli::Z));
    let snap = code.snapshot(StateKind::Next, "step_1");
    assert_eq!(snap.label, "step_1");
    assert_eq!(snap.error_positions(Pauli::Z), vec![(1, 0, 2)]);
    assert_eq!(snap.charge_positions(), vec![(0, 0), (0, 2)]);
}
