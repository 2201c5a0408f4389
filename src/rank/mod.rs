//! Feature ranking.
//!
//! Two kinds of rankers live here:
//!
//! - [`shuffle_ranking`]: the demonstration ranker, a seeded random shuffle
//!   of the feature names. It exists to show the plug-in contract, not to
//!   rank anything meaningfully.
//! - [`Measure`] implementations ([`InfoGain`], [`GainRatio`], [`Relief`]):
//!   real feature-scoring measures used by the toolkit dispatcher.
//!
//! Rankings are written as a newline-delimited name list, best first.

mod measures;
mod relief;
mod shuffle;

use std::fs;
use std::io;
use std::path::Path;

pub use measures::{GainRatio, InfoGain};
pub use relief::{Relief, ReliefParams};
pub use shuffle::shuffle_ranking;

use crate::data::Dataset;

/// A feature-scoring measure. Higher scores mean more relevant features.
pub trait Measure {
    /// Score every feature of the dataset, in feature order.
    fn scores(&self, data: &Dataset) -> Vec<f64>;

    /// Short identifier used by the toolkit registry and in logs.
    fn name(&self) -> &'static str;
}

/// Rank the dataset's features by a measure, best first.
///
/// Ties keep the original feature order, so rankings are deterministic.
pub fn rank_by_measure(data: &Dataset, measure: &dyn Measure) -> Vec<String> {
    let scores = measure.scores(data);
    let mut order: Vec<usize> = (0..data.n_features()).collect();
    // Stable sort keeps original order on ties
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
        .into_iter()
        .map(|i| data.schema().name(i).to_string())
        .collect()
}

/// Write a ranking file: one feature name per line, best first.
pub fn write_ranking(path: &Path, ranked: &[String]) -> io::Result<()> {
    let mut out = String::new();
    for name in ranked {
        out.push_str(name);
        out.push('\n');
    }
    fs::write(path, out)
}
