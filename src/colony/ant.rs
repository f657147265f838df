//! Single ant state.

use crate::distance::DistanceMatrix;

/// An ant building one candidate tour.
///
/// Holds the tour constructed so far (a growing prefix of a permutation of
/// `0..n`) and a visited flag per town, kept in sync with the tour. The
/// visited flags make membership checks O(1) instead of scanning the tour.
///
/// Ants are passive: the solver drives construction one town choice at a
/// time and hands each ant the town it selected.
#[derive(Debug, Clone)]
pub struct Ant {
    tour: Vec<usize>,
    visited: Vec<bool>,
}

impl Ant {
    /// Creates an ant for a problem with `num_towns` towns.
    pub fn new(num_towns: usize) -> Self {
        Self {
            tour: Vec::with_capacity(num_towns),
            visited: vec![false; num_towns],
        }
    }

    /// Clears the tour and visited flags in place, reusing allocations.
    pub fn reset(&mut self) {
        self.tour.clear();
        self.visited.fill(false);
    }

    /// Appends `town` to the tour and marks it visited.
    ///
    /// # Panics
    ///
    /// Panics if `town` is out of bounds; visiting a town twice is a solver
    /// bug and is caught by a debug assertion.
    pub fn visit(&mut self, town: usize) {
        debug_assert!(!self.visited[town], "town {town} visited twice");
        self.visited[town] = true;
        self.tour.push(town);
    }

    /// Returns `true` if `town` is already part of the tour.
    pub fn has_visited(&self, town: usize) -> bool {
        self.visited[town]
    }

    /// The town the ant currently sits at (the last one visited).
    ///
    /// # Panics
    ///
    /// Panics if the ant has not been given a start town yet.
    pub fn current_town(&self) -> usize {
        *self.tour.last().expect("ant has no start town")
    }

    /// The tour constructed so far.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Number of towns in the problem.
    pub fn num_towns(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` once the tour contains every town.
    pub fn is_complete(&self) -> bool {
        self.tour.len() == self.visited.len()
    }

    /// Length of the tour as a closed cycle, including the wrap-around edge
    /// from the last town back to the first.
    ///
    /// Meaningful for completed tours; an empty tour has length zero and a
    /// single-town tour closes on its own self-loop edge.
    pub fn tour_length(&self, graph: &DistanceMatrix) -> f64 {
        if self.tour.is_empty() {
            return 0.0;
        }
        let mut length = graph.get(self.tour[self.tour.len() - 1], self.tour[0]);
        for edge in self.tour.windows(2) {
            length += graph.get(edge[0], edge[1]);
        }
        length
    }
}
