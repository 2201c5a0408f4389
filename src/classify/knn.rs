//! k-nearest-neighbors classification.

use bon::Builder;
use ndarray::{Array2, ArrayView1};

use super::{check_training_set, Classifier, FitError, Learner};
use crate::data::Dataset;

/// Configuration for [`KnnLearner`].
#[derive(Debug, Clone, Builder)]
pub struct KnnConfig {
    /// Neighborhood size. Capped at the training set size when fitting.
    #[builder(default = 5)]
    pub k: usize,
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// k-nearest-neighbors with Euclidean distance.
///
/// The predicted distribution is the label frequency among the k nearest
/// training samples. Brute-force distance computation: the datasets this
/// crate handles are small.
#[derive(Debug, Clone, Default)]
pub struct KnnLearner {
    pub config: KnnConfig,
}

impl KnnLearner {
    pub fn new(config: KnnConfig) -> Self {
        Self { config }
    }
}

impl Learner for KnnLearner {
    fn fit(&self, data: &Dataset) -> Result<Box<dyn Classifier>, FitError> {
        check_training_set(data)?;
        Ok(Box::new(KnnClassifier {
            k: self.config.k.clamp(1, data.n_samples()),
            features: data.features().to_owned(),
            labels: data.labels().to_vec(),
            n_classes: data.n_classes(),
        }))
    }

    fn name(&self) -> &'static str {
        "knn"
    }
}

struct KnnClassifier {
    k: usize,
    /// Training features, `[n_features, n_samples]`.
    features: Array2<f32>,
    labels: Vec<usize>,
    n_classes: usize,
}

impl Classifier for KnnClassifier {
    fn predict_proba(&self, sample: ArrayView1<f32>) -> Vec<f64> {
        let n_train = self.features.ncols();

        let mut distances: Vec<(f64, usize)> = (0..n_train)
            .map(|i| {
                let d: f64 = self
                    .features
                    .column(i)
                    .iter()
                    .zip(sample.iter())
                    .map(|(&a, &b)| {
                        let d = a as f64 - b as f64;
                        d * d
                    })
                    .sum();
                (d, i)
            })
            .collect();
        // Sample index breaks distance ties deterministically
        distances.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mut counts = vec![0usize; self.n_classes];
        for &(_, i) in distances.iter().take(self.k) {
            counts[self.labels[i]] += 1;
        }
        counts.iter().map(|&c| c as f64 / self.k as f64).collect()
    }
}
