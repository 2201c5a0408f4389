//! Gaussian naive Bayes.

use ndarray::ArrayView1;

use super::{check_training_set, Classifier, FitError, Learner};
use crate::data::Dataset;

/// Variance floor, keeps constant features from collapsing the likelihood.
const VAR_FLOOR: f64 = 1e-9;

/// Gaussian naive Bayes over numeric features.
///
/// Each feature is modeled per class as an independent normal distribution;
/// class priors are the empirical training frequencies. Posteriors are
/// computed in log space and normalized back to probabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveBayesLearner;

impl Learner for NaiveBayesLearner {
    fn fit(&self, data: &Dataset) -> Result<Box<dyn Classifier>, FitError> {
        check_training_set(data)?;

        let n_classes = data.n_classes();
        let n_features = data.n_features();
        let counts = data.class_counts();

        // Per-class, per-feature mean and variance
        let mut means = vec![vec![0.0f64; n_features]; n_classes];
        let mut variances = vec![vec![0.0f64; n_features]; n_classes];

        for f in 0..n_features {
            let feature = data.feature(f);
            for (sample, &v) in feature.iter().enumerate() {
                means[data.label(sample)][f] += v as f64;
            }
            for (k, count) in counts.iter().enumerate() {
                if *count > 0 {
                    means[k][f] /= *count as f64;
                }
            }
            for (sample, &v) in feature.iter().enumerate() {
                let k = data.label(sample);
                let d = v as f64 - means[k][f];
                variances[k][f] += d * d;
            }
            for (k, count) in counts.iter().enumerate() {
                if *count > 0 {
                    variances[k][f] /= *count as f64;
                }
                variances[k][f] = variances[k][f].max(VAR_FLOOR);
            }
        }

        let total = data.n_samples() as f64;
        let log_priors = counts
            .iter()
            .map(|&c| ((c as f64).max(f64::MIN_POSITIVE) / total).ln())
            .collect();

        Ok(Box::new(NaiveBayesClassifier {
            log_priors,
            means,
            variances,
        }))
    }

    fn name(&self) -> &'static str {
        "naive-bayes"
    }
}

struct NaiveBayesClassifier {
    log_priors: Vec<f64>,
    means: Vec<Vec<f64>>,
    variances: Vec<Vec<f64>>,
}

impl Classifier for NaiveBayesClassifier {
    fn predict_proba(&self, sample: ArrayView1<f32>) -> Vec<f64> {
        let n_classes = self.log_priors.len();

        let mut log_posteriors = Vec::with_capacity(n_classes);
        for k in 0..n_classes {
            let mut lp = self.log_priors[k];
            for (f, &v) in sample.iter().enumerate() {
                let mean = self.means[k][f];
                let var = self.variances[k][f];
                let d = v as f64 - mean;
                lp += -0.5 * ((2.0 * std::f64::consts::PI * var).ln() + d * d / var);
            }
            log_posteriors.push(lp);
        }

        // Log-sum-exp normalization
        let max = log_posteriors.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mut proba: Vec<f64> = log_posteriors.iter().map(|&lp| (lp - max).exp()).collect();
        let sum: f64 = proba.iter().sum();
        for p in &mut proba {
            *p /= sum;
        }
        proba
    }
}
