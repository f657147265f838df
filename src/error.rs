//! Error types for ant colony optimization.
//!
//! Everything here is a construction-time failure: once a solver has been
//! built, the simulation is a pure computation with no external resources and
//! nothing left to fail recoverably.

use thiserror::Error;

/// Result type alias for fallible construction in this crate.
pub type AcoResult<T> = Result<T, AcoError>;

/// Errors reported when building a distance matrix or a solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// The distance matrix has zero towns.
    #[error("distance matrix has no towns")]
    EmptyGraph,

    /// A row of the input matrix has the wrong number of columns.
    #[error("row {row} has {actual} values, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Expected column count (the number of rows).
        expected: usize,
        /// Actual column count.
        actual: usize,
    },

    /// Flat input data does not match the declared matrix size.
    #[error("matrix data has {actual} values, expected {expected}")]
    DataLength {
        /// Expected value count (`size * size`).
        expected: usize,
        /// Actual value count.
        actual: usize,
    },

    /// An edge weight is negative or not a number.
    #[error("weight {weight} on edge {from} -> {to} is not a non-negative number")]
    InvalidWeight {
        /// Source town index.
        from: usize,
        /// Destination town index.
        to: usize,
        /// The offending weight.
        weight: f64,
    },

    /// The configured ant factor rounds down to zero ants.
    #[error("ant factor {ant_factor} yields zero ants for {towns} towns")]
    NoAnts {
        /// Number of towns in the problem.
        towns: usize,
        /// The configured ant factor.
        ant_factor: f64,
    },

    /// A configuration parameter is outside its documented domain.
    #[error("invalid parameter {name} = {value}: expected {expected}")]
    InvalidParameter {
        /// Parameter name as it appears on [`AcoConfig`](crate::config::AcoConfig).
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Description of the accepted domain.
        expected: &'static str,
    },
}
