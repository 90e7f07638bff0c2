//! # toric-rl-env
//!
//! Toric code lattice environment for reinforcement-learning decoders.
//!
//! Qubits live on the 2L² edges of an L×L torus. Each holds the Pauli operator
//! accumulated on it, and the observable state is the syndrome those operators
//! leave behind. A decoding agent sees the syndrome through *perspectives*:
//! views translated and rotated so that one candidate qubit sits at a fixed cell.
//!
//! ## Physics
//!
//! - **Charges** (e-particles): vertex check violations from Z and Y errors
//! - **Fluxes** (m-particles): plaquette check violations from X and Y errors
//! - **Ground state**: the accumulated error contains only contractible loops
//!   (checked by layer parity, valid for odd L)
//!
//! ## Usage
//!
//! ```no_run
//! use toric_rl_env::prelude::*;
//!
//! let mut rng = rand::thread_rng();
//! let mut env = ToricEnv::new(EnvConfig::new(5).with_error_count(2)).unwrap();
//! env.reset(&mut rng);
//! if let Some(p) = env.perspectives().first() {
//!     let action = p.action(Pauli::X);
//!     env.step(action).unwrap();
//!     let entry = env.memory_entry(action, -1.0).unwrap();
//!     println!("terminal after step: {}", entry.terminal);
//! }
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod grid;
pub mod lattice;
pub mod noise;
pub mod pauli;
pub mod perspective;
pub mod snapshot;
pub mod syndrome;
pub mod topology;

pub mod prelude {
    pub use crate::config::*;
    pub use crate::env::*;
    pub use crate::error::ToricError;
    pub use crate::grid::*;
    pub use crate::lattice::*;
    pub use crate::pauli::*;
    pub use crate::perspective::*;
    pub use crate::snapshot::*;
    pub use crate::syndrome::*;
    pub use crate::topology::*;
}
