//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{AcoError, AcoResult};

/// Parameters of the Ant System solver.
///
/// The defaults are the values suggested by Dorigo et al. for the classic
/// Ant System and work well on small and medium instances.
///
/// # Examples
///
/// ```
/// use u_antcolony::config::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_beta(3.0)
///     .with_max_iterations(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcoConfig {
    /// Initial trail intensity every cell is reset to at the start of a
    /// solve (default 1.0).
    pub initial_trail: f64,
    /// Trail preference exponent (default 1.0).
    pub alpha: f64,
    /// Inverse-distance (greedy) preference exponent (default 5.0).
    pub beta: f64,
    /// Fraction of trail *retained* per iteration (default 0.5).
    ///
    /// The trail matrix is multiplied by this value before deposits, so 1.0
    /// means no decay and 0.0 wipes the trails. Note that much of the ACO
    /// literature uses "evaporation rate" for the fraction *lost*; this field
    /// keeps the reference arithmetic `trail *= evaporation`.
    pub evaporation: f64,
    /// Deposit scale Q: each ant adds `Q / tour_length` to the edges of its
    /// tour (default 500.0).
    pub deposit_weight: f64,
    /// Number of ants as a fraction of the town count:
    /// `ants = floor(towns * ant_factor)` (default 0.8).
    pub ant_factor: f64,
    /// Probability of picking the next town uniformly at random among the
    /// unvisited ones, bypassing the trail-guided choice (default 0.01).
    pub exploration_rate: f64,
    /// Iterations per [`solve`](crate::solver::AntSystem::solve) call
    /// (default 2000).
    pub max_iterations: usize,
    /// Seed for the random number generator. `None` seeds from OS entropy;
    /// a fixed value makes runs reproducible.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            initial_trail: 1.0,
            alpha: 1.0,
            beta: 5.0,
            evaporation: 0.5,
            deposit_weight: 500.0,
            ant_factor: 0.8,
            exploration_rate: 0.01,
            max_iterations: 2000,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the initial trail intensity.
    #[must_use]
    pub fn with_initial_trail(mut self, initial_trail: f64) -> Self {
        self.initial_trail = initial_trail;
        self
    }

    /// Sets the trail preference exponent.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the greedy preference exponent.
    #[must_use]
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the retained trail fraction.
    #[must_use]
    pub fn with_evaporation(mut self, evaporation: f64) -> Self {
        self.evaporation = evaporation;
        self
    }

    /// Sets the deposit scale Q.
    #[must_use]
    pub fn with_deposit_weight(mut self, deposit_weight: f64) -> Self {
        self.deposit_weight = deposit_weight;
        self
    }

    /// Sets the ant count factor.
    #[must_use]
    pub fn with_ant_factor(mut self, ant_factor: f64) -> Self {
        self.ant_factor = ant_factor;
        self
    }

    /// Sets the probability of a purely random town choice.
    #[must_use]
    pub fn with_exploration_rate(mut self, exploration_rate: f64) -> Self {
        self.exploration_rate = exploration_rate;
        self
    }

    /// Sets the number of iterations per solve call.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the RNG seed for reproducible runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that every parameter is inside its documented domain.
    ///
    /// Called by the solver constructor; exposed so callers can validate
    /// deserialized configurations up front.
    pub fn validate(&self) -> AcoResult<()> {
        if !self.initial_trail.is_finite() || self.initial_trail <= 0.0 {
            return Err(AcoError::InvalidParameter {
                name: "initial_trail",
                value: self.initial_trail,
                expected: "a positive finite value",
            });
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::InvalidParameter {
                name: "alpha",
                value: self.alpha,
                expected: "a non-negative finite value",
            });
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::InvalidParameter {
                name: "beta",
                value: self.beta,
                expected: "a non-negative finite value",
            });
        }
        if !(0.0..=1.0).contains(&self.evaporation) {
            return Err(AcoError::InvalidParameter {
                name: "evaporation",
                value: self.evaporation,
                expected: "a value in [0, 1]",
            });
        }
        if !self.deposit_weight.is_finite() || self.deposit_weight < 0.0 {
            return Err(AcoError::InvalidParameter {
                name: "deposit_weight",
                value: self.deposit_weight,
                expected: "a non-negative finite value",
            });
        }
        if !self.ant_factor.is_finite() || self.ant_factor <= 0.0 {
            return Err(AcoError::InvalidParameter {
                name: "ant_factor",
                value: self.ant_factor,
                expected: "a positive finite value",
            });
        }
        if !(0.0..=1.0).contains(&self.exploration_rate) {
            return Err(AcoError::InvalidParameter {
                name: "exploration_rate",
                value: self.exploration_rate,
                expected: "a value in [0, 1]",
            });
        }
        Ok(())
    }
}
