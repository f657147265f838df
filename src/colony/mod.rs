//! Ants and the colony pool.

mod ant;

pub use ant::Ant;

use rand::Rng;

/// A fixed-size pool of ants, reset and re-run every iteration.
///
/// The pool is created once per solver; resetting reuses each ant's
/// allocations and seeds it with a uniformly random start town.
#[derive(Debug, Clone)]
pub struct Colony {
    ants: Vec<Ant>,
}

impl Colony {
    /// Creates a colony of `num_ants` ants for `num_towns` towns.
    pub fn new(num_ants: usize, num_towns: usize) -> Self {
        Self {
            ants: (0..num_ants).map(|_| Ant::new(num_towns)).collect(),
        }
    }

    /// Clears every ant and places it on a random start town.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        for ant in &mut self.ants {
            let start = rng.random_range(0..ant.num_towns());
            ant.reset();
            ant.visit(start);
        }
    }

    /// Returns the ants in this colony.
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Returns mutable access to the ants.
    pub fn ants_mut(&mut self) -> &mut [Ant] {
        &mut self.ants
    }

    /// Number of ants in the pool.
    pub fn len(&self) -> usize {
        self.ants.len()
    }

    /// Returns `true` if the pool holds no ants.
    pub fn is_empty(&self) -> bool {
        self.ants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_creates_requested_ants() {
        let colony = Colony::new(4, 6);
        assert_eq!(colony.len(), 4);
        assert!(!colony.is_empty());
        for ant in colony.ants() {
            assert_eq!(ant.num_towns(), 6);
            assert!(ant.tour().is_empty());
        }
    }

    #[test]
    fn test_reset_seeds_every_ant_with_one_town() {
        let mut colony = Colony::new(5, 3);
        let mut rng = StdRng::seed_from_u64(42);
        colony.reset(&mut rng);
        for ant in colony.ants() {
            assert_eq!(ant.tour().len(), 1);
            let start = ant.tour()[0];
            assert!(start < 3);
            assert!(ant.has_visited(start));
        }
    }

    #[test]
    fn test_reset_discards_previous_iteration() {
        let mut colony = Colony::new(2, 3);
        let mut rng = StdRng::seed_from_u64(7);
        colony.reset(&mut rng);
        for ant in colony.ants_mut() {
            for town in 0..3 {
                if !ant.has_visited(town) {
                    ant.visit(town);
                }
            }
            assert!(ant.is_complete());
        }
        colony.reset(&mut rng);
        for ant in colony.ants() {
            assert_eq!(ant.tour().len(), 1);
        }
    }
}
