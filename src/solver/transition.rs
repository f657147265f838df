//! Per-step town selection.
//!
//! Implements the Ant System transition rule. With a small exploration
//! probability the next town is drawn uniformly from the unvisited set;
//! otherwise the draw is a roulette wheel over normalized trail-and-distance
//! desirabilities, walked in fixed town-index order so that a given RNG
//! stream always reproduces the same choice.

use rand::Rng;

use crate::colony::Ant;
use crate::config::AcoConfig;
use crate::distance::DistanceMatrix;
use crate::trail::TrailMatrix;

/// Selects the next town for an ant mid-construction.
///
/// `probs` is a scratch buffer of length n shared across the colony; its
/// contents are overwritten on every weighted draw.
pub(crate) fn select_next_town<R: Rng>(
    ant: &Ant,
    graph: &DistanceMatrix,
    trails: &TrailMatrix,
    probs: &mut [f64],
    config: &AcoConfig,
    rng: &mut R,
) -> usize {
    if rng.random::<f64>() < config.exploration_rate {
        return random_unvisited(ant, rng);
    }

    fill_probabilities(ant, graph, trails, config.alpha, config.beta, probs);
    roulette(probs, rng.random::<f64>())
}

/// Picks a town uniformly among the unvisited ones.
fn random_unvisited<R: Rng>(ant: &Ant, rng: &mut R) -> usize {
    let remaining = ant.num_towns() - ant.tour().len();
    debug_assert!(remaining > 0, "no unvisited towns left");
    let rank = rng.random_range(0..remaining);
    (0..ant.num_towns())
        .filter(|&town| !ant.has_visited(town))
        .nth(rank)
        .expect("visited flags out of sync with tour")
}

/// Fills `probs` with the transition probability of every town.
///
/// Visited towns get probability zero; the rest are desirabilities
/// normalized by their sum over the unvisited set.
fn fill_probabilities(
    ant: &Ant,
    graph: &DistanceMatrix,
    trails: &TrailMatrix,
    alpha: f64,
    beta: f64,
    probs: &mut [f64],
) {
    let from = ant.current_town();

    let mut denom = 0.0;
    for to in 0..probs.len() {
        if !ant.has_visited(to) {
            denom += trails.desirability(from, to, graph, alpha, beta);
        }
    }
    debug_assert!(denom > 0.0, "desirability sum must be positive");

    for (to, prob) in probs.iter_mut().enumerate() {
        *prob = if ant.has_visited(to) {
            0.0
        } else {
            trails.desirability(from, to, graph, alpha, beta) / denom
        };
    }
}

/// Standard roulette-wheel draw: walks towns in index order accumulating
/// probabilities and returns the first town where the cumulative sum reaches
/// `r`.
///
/// # Panics
///
/// Panics if no town is reached, which means the probabilities were not
/// normalized: a programming error, not a recoverable condition.
fn roulette(probs: &[f64], r: f64) -> usize {
    let mut cumulative = 0.0;
    for (town, &prob) in probs.iter().enumerate() {
        cumulative += prob;
        if cumulative >= r {
            return town;
        }
    }
    unreachable!("roulette draw exhausted all towns without selecting one")
}
