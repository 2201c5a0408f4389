//! Relief feature scoring.
//!
//! Classic Relief: for a number of reference samples, find the nearest
//! neighbor of the same class (hit) and the nearest neighbor of any other
//! class (miss), and move each feature's weight towards features that
//! separate the miss and agree with the hit. Distances and per-feature
//! differences are computed on range-normalized values, so features on
//! different scales are comparable.

use bon::Builder;
use rand::prelude::*;

use super::Measure;
use crate::data::Dataset;

/// Parameters for the [`Relief`] measure.
#[derive(Debug, Clone, Builder)]
pub struct ReliefParams {
    /// Number of reference samples to evaluate. Capped at the dataset size.
    #[builder(default = 200)]
    pub n_references: usize,

    /// Seed for reference sampling. Relief is deterministic for a fixed seed.
    #[builder(default = 0)]
    pub seed: u64,
}

impl Default for ReliefParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Relief feature relevance. Higher is better.
#[derive(Debug, Clone, Default)]
pub struct Relief {
    pub params: ReliefParams,
}

impl Relief {
    pub fn new(params: ReliefParams) -> Self {
        Self { params }
    }
}

impl Measure for Relief {
    fn scores(&self, data: &Dataset) -> Vec<f64> {
        let n_samples = data.n_samples();
        let n_features = data.n_features();
        if n_samples < 2 {
            return vec![0.0; n_features];
        }

        // Per-feature value ranges for normalization. Constant features get
        // range 1 so their diffs are exactly 0.
        let ranges: Vec<f64> = (0..n_features)
            .map(|f| {
                let feature = data.feature(f);
                let mut min = f32::INFINITY;
                let mut max = f32::NEG_INFINITY;
                for &v in feature {
                    min = min.min(v);
                    max = max.max(v);
                }
                let range = (max - min) as f64;
                if range > 0.0 { range } else { 1.0 }
            })
            .collect();

        let diff = |f: usize, a: usize, b: usize| -> f64 {
            let fa = data.features()[[f, a]] as f64;
            let fb = data.features()[[f, b]] as f64;
            (fa - fb).abs() / ranges[f]
        };

        let distance = |a: usize, b: usize| -> f64 {
            (0..n_features).map(|f| diff(f, a, b)).sum()
        };

        let mut rng = StdRng::seed_from_u64(self.params.seed);
        let n_references = self.params.n_references.min(n_samples);
        let mut references: Vec<usize> = (0..n_samples).collect();
        references.shuffle(&mut rng);
        references.truncate(n_references);

        let mut weights = vec![0.0f64; n_features];
        let mut evaluated = 0usize;

        for &r in &references {
            let mut hit: Option<(usize, f64)> = None;
            let mut miss: Option<(usize, f64)> = None;
            for other in 0..n_samples {
                if other == r {
                    continue;
                }
                let d = distance(r, other);
                let slot = if data.label(other) == data.label(r) {
                    &mut hit
                } else {
                    &mut miss
                };
                match slot {
                    Some((_, best)) if d >= *best => {}
                    _ => *slot = Some((other, d)),
                }
            }

            // A reference with no hit or no miss (single-class data, or a
            // class of size one) contributes nothing
            let (Some((hit, _)), Some((miss, _))) = (hit, miss) else {
                continue;
            };
            evaluated += 1;
            for (f, w) in weights.iter_mut().enumerate() {
                *w += diff(f, r, miss) - diff(f, r, hit);
            }
        }

        if evaluated > 0 {
            for w in &mut weights {
                *w /= evaluated as f64;
            }
        }
        weights
    }

    fn name(&self) -> &'static str {
        "relief"
    }
}
