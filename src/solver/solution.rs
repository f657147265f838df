//! Best-tour result type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tour and its length, as reported to the caller.
///
/// The tour is a permutation of the town indices, interpreted as a closed
/// cycle. The length is measured over the caller's original weights; the
/// solver's internal +1-per-edge offset is already undone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TspSolution {
    tour: Vec<usize>,
    length: f64,
}

impl TspSolution {
    pub(crate) fn new(tour: Vec<usize>, length: f64) -> Self {
        Self { tour, length }
    }

    /// The towns in visiting order.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Total cycle length over the original weights.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns `true` if no tour has been found yet (zero-iteration solve on
    /// a fresh solver).
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }
}

impl fmt::Display for TspSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, town) in self.tour.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{town}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let solution = TspSolution::new(vec![2, 0, 1], 14.5);
        assert_eq!(solution.tour(), &[2, 0, 1]);
        assert_eq!(solution.length(), 14.5);
        assert!(!solution.is_empty());
    }

    #[test]
    fn test_display() {
        let solution = TspSolution::new(vec![0, 3, 1, 2], 9.0);
        assert_eq!(solution.to_string(), "0 -> 3 -> 1 -> 2");
    }

    #[test]
    fn test_empty() {
        let solution = TspSolution::new(Vec::new(), f64::INFINITY);
        assert!(solution.is_empty());
        assert_eq!(solution.to_string(), "");
    }
}
