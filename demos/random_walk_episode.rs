//! Random-policy decoding episodes on a small torus.
//!
//! Picks a uniformly random perspective and operator each step until the
//! syndrome is empty or the step budget runs out, then reports whether the
//! leftover error is a trivial loop.
//!
//! Run with `RUST_LOG=toric_rl_env=debug cargo run --example random_walk_episode`.

use log::info;
use rand::seq::SliceRandom;
use toric_rl_env::prelude::*;

const EPISODES: usize = 20;
const MAX_STEPS: usize = 200;

fn main() {
    env_logger::init();

    let config = EnvConfig::new(5).with_error_count(2);
    let mut env = match ToricEnv::new(config) {
        Ok(env) => env,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let mut rng = rand::thread_rng();

    let mut solved = 0;
    let mut trivial = 0;
    let mut replay: Vec<MemoryEntry> = Vec::new();

    for episode in 0..EPISODES {
        env.reset(&mut rng);
        let mut steps = 0;
        let mut done = is_terminal(env.code().current_state());

        while !done && steps < MAX_STEPS {
            let perspectives = env.perspectives();
            let Some(choice) = perspectives.choose(&mut rng) else {
                break;
            };
            let action = choice.action(Pauli::random_error(&mut rng));

            let before = env.code().current_state().num_defects();
            done = env.step(action).expect("perspective origins are in range");
            let after = env.code().next_state().num_defects();
            let reward = before as f64 - after as f64;

            replay.push(env.memory_entry(action, reward).expect("action already validated"));
            env.advance();
            steps += 1;
        }

        let ground = env.evaluate();
        if done {
            solved += 1;
        }
        if done && ground {
            trivial += 1;
        }
        info!("episode {}: {} steps, solved={}, ground_state={}", episode, steps, done, ground);
    }

    println!("Random-walk decoding on 5x5 torus, 2 initial errors");
    println!("  episodes:          {}", EPISODES);
    println!("  syndrome cleared:  {}", solved);
    println!("  trivial loops:     {}", trivial);
    println!("  replay entries:    {}", replay.len());

    let snap = env.code().snapshot(StateKind::Current, "final");
    for op in Pauli::ERRORS {
        println!("  {} {} errors:    {:?}", snap.label, op, snap.error_positions(op));
    }
}
