//! The by-name toolkit registry and its file-level operations.
//!
//! The dispatcher binary forwards to the two operations here. Names resolve
//! through an explicit match rather than any dynamic evaluation, so the set
//! of reachable learners and measures is the source code itself.
//!
//! Both operations consume the tab-delimited transposed matrix format (see
//! [`crate::data::delimited`]).

use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::classify::{FitError, KnnLearner, Learner, MajorityLearner, NaiveBayesLearner};
use crate::data::{DelimitedError, DelimitedMatrix};
use crate::predictions::{write_predictions, write_probabilities};
use crate::rank::{self, GainRatio, InfoGain, Measure, Relief};

/// Known classifier names, in registry order.
pub const LEARNER_NAMES: &[&str] = &["majority", "naive-bayes", "knn"];

/// Known measure names, in registry order.
pub const MEASURE_NAMES: &[&str] = &["info-gain", "gain-ratio", "relief"];

/// Errors from the toolkit operations.
#[derive(Debug, thiserror::Error)]
pub enum ToolkitError {
    /// No classifier is registered under the requested name.
    #[error("unknown learner {name:?}, expected one of {known:?}", known = LEARNER_NAMES)]
    UnknownLearner { name: String },

    /// No measure is registered under the requested name.
    #[error("unknown measure {name:?}, expected one of {known:?}", known = MEASURE_NAMES)]
    UnknownMeasure { name: String },

    /// Training and test matrices disagree on the feature rows.
    #[error("training matrix has {train} feature(s) but test matrix has {test}")]
    FeatureMismatch { train: usize, test: usize },

    /// An input matrix could not be parsed.
    #[error(transparent)]
    Data(#[from] DelimitedError),

    /// The learner could not be fitted.
    #[error(transparent)]
    Fit(#[from] FitError),

    /// An output file could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Look up a classifier by name.
pub fn learner_by_name(name: &str) -> Result<Box<dyn Learner>, ToolkitError> {
    match name {
        "majority" => Ok(Box::new(MajorityLearner)),
        "naive-bayes" => Ok(Box::new(NaiveBayesLearner)),
        "knn" => Ok(Box::new(KnnLearner::default())),
        _ => Err(ToolkitError::UnknownLearner {
            name: name.to_string(),
        }),
    }
}

/// Look up a feature-scoring measure by name.
///
/// `relief` uses its default (fixed) seed, so measure rankings are
/// deterministic for a given input.
pub fn measure_by_name(name: &str) -> Result<Box<dyn Measure>, ToolkitError> {
    match name {
        "info-gain" => Ok(Box::new(InfoGain::default())),
        "gain-ratio" => Ok(Box::new(GainRatio::default())),
        "relief" => Ok(Box::new(Relief::default())),
        _ => Err(ToolkitError::UnknownMeasure {
            name: name.to_string(),
        }),
    }
}

/// Score every feature of the data file and write the ranking, best first.
pub fn rank_features(
    measure_name: &str,
    data_path: &Path,
    out_path: &Path,
) -> Result<(), ToolkitError> {
    let measure = measure_by_name(measure_name)?;
    let dataset = DelimitedMatrix::read(data_path)?.to_dataset()?;
    info!(
        measure = measure.name(),
        n_features = dataset.n_features(),
        n_samples = dataset.n_samples(),
        "ranking features"
    );

    let ranked = rank::rank_by_measure(&dataset, measure.as_ref());
    rank::write_ranking(out_path, &ranked)?;
    debug!(path = %out_path.display(), "wrote ranking");
    Ok(())
}

/// Fit the named learner on the training matrix, score every test instance,
/// and write the predictions and probabilities files.
///
/// Class-value order in the probabilities header follows the training set's
/// sorted distinct class values.
pub fn train_test(
    learner_name: &str,
    train_path: &Path,
    test_path: &Path,
    predictions_path: &Path,
    probabilities_path: &Path,
) -> Result<(), ToolkitError> {
    let learner = learner_by_name(learner_name)?;
    let train = DelimitedMatrix::read(train_path)?.to_dataset()?;
    let test = DelimitedMatrix::read(test_path)?.to_dataset()?;
    if train.n_features() != test.n_features() {
        return Err(ToolkitError::FeatureMismatch {
            train: train.n_features(),
            test: test.n_features(),
        });
    }

    info!(
        learner = learner.name(),
        n_train = train.n_samples(),
        n_test = test.n_samples(),
        "training and scoring"
    );
    let model = learner.fit(&train)?;

    let mut labels = Vec::with_capacity(test.n_samples());
    let mut rows = Vec::with_capacity(test.n_samples());
    for i in 0..test.n_samples() {
        let sample = test.sample(i);
        let proba = model.predict_proba(sample);
        let predicted = model.predict(sample);
        labels.push(train.classes()[predicted].clone());
        rows.push(proba);
    }

    write_predictions(predictions_path, &labels)?;
    write_probabilities(probabilities_path, train.classes(), &rows)?;
    debug!(
        predictions = %predictions_path.display(),
        probabilities = %probabilities_path.display(),
        "wrote outputs"
    );
    Ok(())
}
