//! Majority-class baseline.

use ndarray::ArrayView1;

use super::{check_training_set, Classifier, FitError, Learner};
use crate::data::Dataset;

/// Predicts the empirical training class distribution for every sample.
///
/// The baseline every real classifier should beat. The predicted label is
/// always the modal training class.
#[derive(Debug, Clone, Copy, Default)]
pub struct MajorityLearner;

impl Learner for MajorityLearner {
    fn fit(&self, data: &Dataset) -> Result<Box<dyn Classifier>, FitError> {
        check_training_set(data)?;
        let counts = data.class_counts();
        let total = data.n_samples() as f64;
        let distribution = counts.iter().map(|&c| c as f64 / total).collect();
        Ok(Box::new(MajorityClassifier { distribution }))
    }

    fn name(&self) -> &'static str {
        "majority"
    }
}

struct MajorityClassifier {
    distribution: Vec<f64>,
}

impl Classifier for MajorityClassifier {
    fn predict_proba(&self, _sample: ArrayView1<f32>) -> Vec<f64> {
        self.distribution.clone()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn predicts_the_modal_class() {
        let data = Dataset::builder()
            .add_feature("x", vec![1.0, 2.0, 3.0, 4.0])
            .labels(vec!["a".into(), "b".into(), "b".into(), "b".into()])
            .build()
            .unwrap();

        let model = MajorityLearner.fit(&data).unwrap();
        let proba = model.predict_proba(array![99.0].view());
        assert_abs_diff_eq!(proba[0], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(proba[1], 0.75, epsilon = 1e-12);
        // "b" sorts after "a"
        assert_eq!(model.predict(array![99.0].view()), 1);
    }

    #[test]
    fn single_class_training_set_is_rejected() {
        let data = Dataset::builder()
            .add_feature("x", vec![1.0, 2.0])
            .labels(vec!["a".into(), "a".into()])
            .build()
            .unwrap();
        assert!(matches!(
            MajorityLearner.fit(&data),
            Err(FitError::SingleClass { .. })
        ));
    }
}
