//! # u-antcolony
//!
//! Ant colony optimization for the travelling salesman problem.
//!
//! Simulates a colony of artificial ants that construct candidate tours over
//! a complete weighted directed graph, guided by a shared pheromone trail
//! matrix that is evaporated and reinforced every iteration. The best tour
//! found is tracked for the lifetime of the solver, so repeated solves keep
//! refining the same answer.
//!
//! ## Modules
//!
//! - [`config`] — Solver parameters (trail/greedy exponents, evaporation, ant count)
//! - [`distance`] — Distance matrix over town indices
//! - [`trail`] — Pheromone trail matrix (evaporation, deposit, desirability)
//! - [`colony`] — Ants and the colony pool
//! - [`solver`] — Transition rule, iteration loop, and result type
//! - [`math`] — Approximate exponentiation for the probability hot path
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use u_antcolony::config::AcoConfig;
//! use u_antcolony::distance::DistanceMatrix;
//! use u_antcolony::solver::AntSystem;
//!
//! let distances = DistanceMatrix::from_rows(&[
//!     vec![0.0, 1.0, 4.0],
//!     vec![1.0, 0.0, 2.0],
//!     vec![4.0, 2.0, 0.0],
//! ]).expect("valid matrix");
//!
//! let config = AcoConfig::default().with_max_iterations(100).with_seed(42);
//! let mut solver = AntSystem::new(&distances, config).expect("valid config");
//!
//! let best = solver.solve();
//! assert_eq!(best.tour().len(), 3);
//! assert!((best.length() - 7.0).abs() < 1e-10);
//! ```

pub mod colony;
pub mod config;
pub mod distance;
pub mod error;
pub mod math;
pub mod solver;
pub mod trail;
