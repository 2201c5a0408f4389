//! The demonstration ranker: a seeded random shuffle.

use rand::prelude::*;

/// Randomly shuffle feature names with a seeded RNG.
///
/// This is a dumb placeholder ranker: its only purpose is to demonstrate the
/// ranking contract an experimentation harness expects. The seed makes the
/// shuffle reproducible, so a fixed seed and input always produce the same
/// ordering.
pub fn shuffle_ranking(mut names: Vec<String>, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    names.shuffle(&mut rng);
    names
}
