//! Episode configuration for the checked environment.

use crate::error::{Result, ToricError};

/// How errors are injected at the start of an episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorModel {
    /// Each qubit independently fails with this probability.
    Probability(f64),
    /// Exactly this many qubits fail.
    Count(usize),
}

/// Configuration for a decoding episode.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    /// Lattice size L (L×L torus with 2L² qubits). Must be odd.
    pub size: usize,
    pub error_model: ErrorModel,
    /// Cell that perspectives are centered on.
    pub center_offset: usize,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(5)
    }
}

impl EnvConfig {
    /// Defaults for an L×L lattice: p = 0.1, perspectives centered at L/2.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            error_model: ErrorModel::Probability(0.1),
            center_offset: size / 2,
        }
    }

    pub fn with_error_probability(mut self, p: f64) -> Self {
        self.error_model = ErrorModel::Probability(p);
        self
    }

    pub fn with_error_count(mut self, n: usize) -> Self {
        self.error_model = ErrorModel::Count(n);
        self
    }

    pub fn with_center_offset(mut self, offset: usize) -> Self {
        self.center_offset = offset;
        self
    }

    /// Number of qubits on the lattice.
    pub fn num_qubits(&self) -> usize {
        2 * self.size * self.size
    }

    /// Check every precondition the lattice core leaves to its caller.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(ToricError::ZeroSize);
        }
        if self.size % 2 == 0 {
            return Err(ToricError::EvenSize(self.size));
        }
        match self.error_model {
            ErrorModel::Probability(p) if !(0.0..=1.0).contains(&p) => {
                return Err(ToricError::InvalidProbability(p));
            }
            ErrorModel::Count(n) if n > self.num_qubits() => {
                return Err(ToricError::TooManyErrors {
                    requested: n,
                    capacity: self.num_qubits(),
                });
            }
            _ => {}
        }
        if self.center_offset >= self.size {
            return Err(ToricError::CenterOutOfRange {
                offset: self.center_offset,
                size: self.size,
            });
        }
        Ok(())
    }
}
