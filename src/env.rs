//! Checked episode wrapper around [`ToricCode`].
//!
//! The lattice core trusts its caller. `ToricEnv` validates the configuration once
//! and every incoming action, then forwards to the core, so a learner can drive
//! episodes without tracking the core's preconditions.

use log::{debug, info};
use rand::Rng;

use crate::config::{EnvConfig, ErrorModel};
use crate::error::{Result, ToricError};
use crate::lattice::{Action, StateKind, ToricCode};
use crate::perspective::{MemoryEntry, Perspective};
use crate::topology::is_terminal;

#[derive(Debug, Clone)]
pub struct ToricEnv {
    config: EnvConfig,
    code: ToricCode,
}

impl ToricEnv {
    /// Validate `config` and build a clean lattice.
    pub fn new(config: EnvConfig) -> Result<Self> {
        config.validate()?;
        info!(
            "toric environment: {}x{} lattice, {:?}, center {}",
            config.size, config.size, config.error_model, config.center_offset
        );
        let code = ToricCode::new(config.size);
        Ok(Self { config, code })
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn code(&self) -> &ToricCode {
        &self.code
    }

    /// Start a new episode: fresh lattice, fresh ground-state flag, new errors.
    ///
    /// Both syndrome slots hold the initial syndrome afterwards.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.code = ToricCode::new(self.config.size);
        match self.config.error_model {
            ErrorModel::Probability(p) => self.code.generate_random_error(p, rng),
            ErrorModel::Count(n) => self.code.generate_n_random_errors(n, rng),
        }
        self.code.recompute_syndrome(StateKind::Next);
        debug!(
            "episode reset with {} defects",
            self.code.current_state().num_defects()
        );
    }

    /// Perspectives of the current syndrome at the configured center.
    pub fn perspectives(&self) -> Vec<Perspective> {
        self.code
            .generate_perspectives(self.config.center_offset, self.code.current_state())
    }

    /// Apply `action`. Returns whether the post-action syndrome is empty.
    pub fn step(&mut self, action: Action) -> Result<bool> {
        self.check_action(&action)?;
        self.code.step(action);
        Ok(is_terminal(self.code.next_state()))
    }

    /// Transition record for the last `action` with an externally chosen reward.
    pub fn memory_entry(&self, action: Action, reward: f64) -> Result<MemoryEntry> {
        self.check_action(&action)?;
        Ok(self
            .code
            .generate_memory_entry(action, reward, self.config.center_offset))
    }

    /// Make the post-action syndrome the current observation.
    pub fn advance(&mut self) {
        self.code.promote_next_state();
    }

    /// Evaluate the accumulated error; true if only trivial loops remain.
    pub fn evaluate(&mut self) -> bool {
        self.code.eval_ground_state()
    }

    fn check_action(&self, action: &Action) -> Result<()> {
        let pos = action.position;
        if pos.row >= self.config.size || pos.col >= self.config.size {
            return Err(ToricError::QubitOutOfRange {
                sublattice: pos.sublattice,
                row: pos.row,
                col: pos.col,
                size: self.config.size,
            });
        }
        if action.operator.is_identity() {
            return Err(ToricError::IdentityAction);
        }
        Ok(())
    }
}
