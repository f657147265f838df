//! Ant System solver loop.
//!
//! # Algorithm
//!
//! Each iteration: every ant is reset to a uniformly random start town, then
//! the whole colony is advanced synchronously, one town choice per ant per
//! step, until every tour is complete. The trail matrix is then evaporated
//! and each ant deposits `deposit_weight / tour_length` on the edges it
//! used, so shorter tours reinforce their edges more. The best tour ever
//! seen is kept for the lifetime of the solver.
//!
//! Construction and trail update never interleave: deposits read final
//! completed tours, and the next iteration's choices read the fully updated
//! trail matrix.
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant System: Optimization
//! by a colony of cooperating agents", *IEEE Transactions on Systems, Man,
//! and Cybernetics - Part B* 26(1), 29-41.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::colony::Colony;
use crate::config::AcoConfig;
use crate::distance::DistanceMatrix;
use crate::error::{AcoError, AcoResult};
use crate::trail::TrailMatrix;

use super::solution::TspSolution;
use super::transition::select_next_town;

/// Best tour in internal (offset) length units.
#[derive(Debug, Clone)]
struct Best {
    tour: Vec<usize>,
    length: f64,
}

/// Ant System solver for the travelling salesman problem.
///
/// Owns the pheromone state, the ant pool, and the best tour found so far.
/// The best tour persists across repeated [`solve`](AntSystem::solve) calls
/// on the same instance, so a caller may invoke `solve` in a loop and keep
/// refining the same answer; it is discarded only when the solver itself is
/// rebuilt.
///
/// # Examples
///
/// ```
/// use u_antcolony::config::AcoConfig;
/// use u_antcolony::distance::DistanceMatrix;
/// use u_antcolony::solver::AntSystem;
///
/// let distances = DistanceMatrix::from_rows(&[
///     vec![0.0, 5.0],
///     vec![5.0, 0.0],
/// ]).expect("valid matrix");
/// let config = AcoConfig::default().with_max_iterations(50).with_seed(42);
///
/// let mut solver = AntSystem::new(&distances, config).expect("valid config");
/// let best = solver.solve();
/// assert_eq!(best.length(), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct AntSystem {
    config: AcoConfig,
    /// Caller weights with +1 added to every edge; no edge has zero length.
    graph: DistanceMatrix,
    trails: TrailMatrix,
    colony: Colony,
    /// Scratch transition-probability buffer shared by all ants.
    probs: Vec<f64>,
    rng: StdRng,
    num_towns: usize,
    best: Option<Best>,
}

impl AntSystem {
    /// Builds a solver for the given distance matrix.
    ///
    /// The matrix is copied with 1.0 added to every weight so that the
    /// inverse-distance term is always finite; reported lengths undo this.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is empty, if any configuration
    /// parameter is outside its domain, or if the ant factor yields zero
    /// ants for this town count.
    pub fn new(distances: &DistanceMatrix, config: AcoConfig) -> AcoResult<Self> {
        config.validate()?;

        let num_towns = distances.size();
        if num_towns == 0 {
            return Err(AcoError::EmptyGraph);
        }

        let num_ants = (num_towns as f64 * config.ant_factor) as usize;
        if num_ants == 0 {
            return Err(AcoError::NoAnts {
                towns: num_towns,
                ant_factor: config.ant_factor,
            });
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            graph: distances.offset(1.0),
            trails: TrailMatrix::new(num_towns),
            colony: Colony::new(num_ants, num_towns),
            probs: vec![0.0; num_towns],
            rng,
            num_towns,
            best: None,
            config,
        })
    }

    /// Runs `max_iterations` iterations and returns a copy of the best tour
    /// found so far.
    ///
    /// The trail matrix is re-initialized at the start of every call; the
    /// best tour is not, so successive calls refine the same answer. On a
    /// fresh solver with `max_iterations == 0` the returned solution is
    /// empty with infinite length.
    pub fn solve(&mut self) -> TspSolution {
        self.trails.reset(self.config.initial_trail);

        for _ in 0..self.config.max_iterations {
            self.colony.reset(&mut self.rng);
            self.construct_tours();
            self.update_trails();
            self.update_best();
        }

        self.best_solution()
    }

    /// Returns a copy of the best tour found so far without running any
    /// iterations.
    pub fn best_solution(&self) -> TspSolution {
        match &self.best {
            Some(best) => {
                TspSolution::new(best.tour.clone(), best.length - self.num_towns as f64)
            }
            None => TspSolution::new(Vec::new(), f64::INFINITY),
        }
    }

    /// Length of the best tour over the original weights, if any iteration
    /// has completed.
    pub fn best_tour_length(&self) -> Option<f64> {
        self.best
            .as_ref()
            .map(|best| best.length - self.num_towns as f64)
    }

    /// Number of towns in the problem.
    pub fn num_towns(&self) -> usize {
        self.num_towns
    }

    /// Number of ants simulated per iteration.
    pub fn num_ants(&self) -> usize {
        self.colony.len()
    }

    /// Advances all ants synchronously until every tour is complete.
    ///
    /// Every ant already holds its start town, so n - 1 shared steps remain;
    /// within a step each ant makes exactly one town choice.
    fn construct_tours(&mut self) {
        for _step in 1..self.num_towns {
            for ant in self.colony.ants_mut() {
                let next = select_next_town(
                    ant,
                    &self.graph,
                    &self.trails,
                    &mut self.probs,
                    &self.config,
                    &mut self.rng,
                );
                ant.visit(next);
            }
        }
    }

    /// Evaporates the trail matrix, then deposits each ant's contribution.
    fn update_trails(&mut self) {
        self.trails.evaporate(self.config.evaporation);
        for ant in self.colony.ants() {
            let contribution = self.config.deposit_weight / ant.tour_length(&self.graph);
            self.trails.deposit(ant.tour(), contribution);
        }
    }

    /// Replaces the best tour if any ant improved on it.
    fn update_best(&mut self) {
        for ant in self.colony.ants() {
            let length = ant.tour_length(&self.graph);
            let improved = match &self.best {
                None => true,
                Some(best) => length < best.length,
            };
            if improved {
                self.best = Some(Best {
                    tour: ant.tour().to_vec(),
                    length,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_town_matrix() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[vec![0.0, 5.0], vec![5.0, 0.0]]).expect("valid")
    }

    fn config(iterations: usize) -> AcoConfig {
        AcoConfig::default()
            .with_max_iterations(iterations)
            .with_seed(42)
    }

    #[test]
    fn test_two_towns_exact_length() {
        let mut solver = AntSystem::new(&two_town_matrix(), config(1)).expect("valid");
        let best = solver.solve();
        // Only one cycle exists: 5 + 5, exactly, for any iteration count
        assert!((best.length() - 10.0).abs() < 1e-10);
        assert_eq!(best.tour().len(), 2);
    }

    #[test]
    fn test_best_tour_is_permutation() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 3.0, 8.0, 2.0, 6.0],
            vec![3.0, 0.0, 1.0, 9.0, 4.0],
            vec![8.0, 1.0, 0.0, 7.0, 2.0],
            vec![2.0, 9.0, 7.0, 0.0, 5.0],
            vec![6.0, 4.0, 2.0, 5.0, 0.0],
        ])
        .expect("valid");
        let mut solver = AntSystem::new(&dm, config(30)).expect("valid");
        let best = solver.solve();

        let mut sorted = best.tour().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reported_length_matches_original_weights() {
        let rows = vec![
            vec![0.0, 3.0, 8.0, 2.0],
            vec![3.0, 0.0, 1.0, 9.0],
            vec![8.0, 1.0, 0.0, 7.0],
            vec![2.0, 9.0, 7.0, 0.0],
        ];
        let dm = DistanceMatrix::from_rows(&rows).expect("valid");
        let mut solver = AntSystem::new(&dm, config(20)).expect("valid");
        let best = solver.solve();

        let tour = best.tour();
        let mut recomputed = rows[tour[tour.len() - 1]][tour[0]];
        for edge in tour.windows(2) {
            recomputed += rows[edge[0]][edge[1]];
        }
        assert!((best.length() - recomputed).abs() < 1e-9);
    }

    #[test]
    fn test_best_persists_and_never_worsens_across_solves() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 4.0, 7.0, 3.0],
            vec![4.0, 0.0, 2.0, 6.0],
            vec![7.0, 2.0, 0.0, 5.0],
            vec![3.0, 6.0, 5.0, 0.0],
        ])
        .expect("valid");
        let mut solver = AntSystem::new(&dm, config(10)).expect("valid");

        let first = solver.solve().length();
        let second = solver.solve().length();
        let third = solver.solve().length();
        assert!(second <= first);
        assert!(third <= second);
    }

    #[test]
    fn test_same_seed_same_result() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 3.0, 8.0, 2.0],
            vec![3.0, 0.0, 1.0, 9.0],
            vec![8.0, 1.0, 0.0, 7.0],
            vec![2.0, 9.0, 7.0, 0.0],
        ])
        .expect("valid");

        let mut a = AntSystem::new(&dm, config(25)).expect("valid");
        let mut b = AntSystem::new(&dm, config(25)).expect("valid");
        assert_eq!(a.solve(), b.solve());
    }

    #[test]
    fn test_zero_ants_rejected() {
        let dm = two_town_matrix();
        let result = AntSystem::new(&dm, AcoConfig::default().with_ant_factor(0.2));
        assert_eq!(
            result.err(),
            Some(AcoError::NoAnts {
                towns: 2,
                ant_factor: 0.2,
            })
        );
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let dm = DistanceMatrix::new(0);
        let result = AntSystem::new(&dm, AcoConfig::default());
        assert_eq!(result.err(), Some(AcoError::EmptyGraph));
    }

    #[test]
    fn test_invalid_config_rejected_before_any_work() {
        let dm = two_town_matrix();
        let result = AntSystem::new(&dm, AcoConfig::default().with_evaporation(2.0));
        assert!(matches!(
            result.err(),
            Some(AcoError::InvalidParameter {
                name: "evaporation",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_iterations_returns_empty_solution() {
        let mut solver = AntSystem::new(&two_town_matrix(), config(0)).expect("valid");
        let best = solver.solve();
        assert!(best.is_empty());
        assert!(best.length().is_infinite());
        assert_eq!(solver.best_tour_length(), None);
    }

    #[test]
    fn test_num_ants_uses_floor_of_factor() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 1.0, 2.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.0, 2.0, 1.0],
            vec![2.0, 1.0, 0.0, 1.0, 2.0],
            vec![1.0, 2.0, 1.0, 0.0, 1.0],
            vec![2.0, 1.0, 2.0, 1.0, 0.0],
        ])
        .expect("valid");
        let solver = AntSystem::new(&dm, AcoConfig::default()).expect("valid");
        // floor(5 * 0.8) = 4
        assert_eq!(solver.num_ants(), 4);
        assert_eq!(solver.num_towns(), 5);
    }
}
