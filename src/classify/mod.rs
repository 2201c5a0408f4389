//! Classifiers and the fit/predict seam.
//!
//! A [`Learner`] fits on a [`Dataset`] and produces a [`Classifier`], which
//! scores one sample at a time with a probability distribution over the
//! training classes. The toolkit registry hands out learners as trait
//! objects, so every classifier reachable by name lives behind this seam.
//!
//! The demonstration classifier ([`shuffle::shuffled_one_hot`]) is not a
//! [`Learner`]: it never looks at the features, only scrambles the test
//! labels, so it plugs straight into the prediction-table writer.

pub mod knn;
pub mod majority;
pub mod naive_bayes;
pub mod shuffle;

pub use knn::{KnnConfig, KnnLearner};
pub use majority::MajorityLearner;
pub use naive_bayes::NaiveBayesLearner;

use ndarray::ArrayView1;

use crate::data::Dataset;

/// Errors from fitting a learner.
///
/// The dataset builder already rejects empty data, so the remaining fit
/// precondition is class diversity.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FitError {
    /// The training set has only one class value.
    ///
    /// A single-class problem is almost always an upstream data bug, and
    /// several learners degenerate on it, so fitting refuses it outright.
    #[error("training set has a single class value {class:?}")]
    SingleClass { class: String },
}

/// A learner: fits on training data, yields a classifier.
pub trait Learner {
    /// Fit on the training dataset.
    fn fit(&self, data: &Dataset) -> Result<Box<dyn Classifier>, FitError>;

    /// Short identifier used by the toolkit registry and in logs.
    fn name(&self) -> &'static str;
}

/// A fitted classifier scoring one sample at a time.
pub trait Classifier {
    /// Probability distribution over the training classes, in class order.
    ///
    /// The returned vector has one entry per training class and sums to 1.
    fn predict_proba(&self, sample: ArrayView1<f32>) -> Vec<f64>;

    /// Predicted class index: the argmax of [`Classifier::predict_proba`].
    ///
    /// Ties resolve to the lowest class index, so predictions are
    /// deterministic.
    fn predict(&self, sample: ArrayView1<f32>) -> usize {
        let proba = self.predict_proba(sample);
        let mut best = 0;
        for (i, &p) in proba.iter().enumerate() {
            if p > proba[best] {
                best = i;
            }
        }
        best
    }
}

/// Validate the shared fit preconditions.
pub(crate) fn check_training_set(data: &Dataset) -> Result<(), FitError> {
    if data.n_classes() < 2 {
        return Err(FitError::SingleClass {
            class: data.classes()[0].clone(),
        });
    }
    Ok(())
}
