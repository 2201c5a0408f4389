//! Dataset container and builder.
//!
//! This module provides [`Dataset`] and [`DatasetBuilder`].

use ndarray::{Array2, ArrayView1, ArrayView2};

use super::schema::{DatasetSchema, FeatureMeta};

/// The numeric dataset container the toolkit operates on.
///
/// # Storage Layout
///
/// Features are stored in **feature-major** layout: `[n_features, n_samples]`.
/// Each feature's values across all samples are contiguous in memory, and a
/// sample is one column of the matrix.
///
/// Class labels are stored as indices into a sorted list of the distinct
/// class values observed when the dataset was built.
///
/// # Construction
///
/// Use [`Dataset::builder`], or [`DelimitedMatrix::to_dataset`] when the data
/// comes from a delimited matrix file.
///
/// [`DelimitedMatrix::to_dataset`]: super::DelimitedMatrix::to_dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature data: `[n_features, n_samples]` (feature-major).
    features: Array2<f32>,

    /// Feature metadata.
    schema: DatasetSchema,

    /// Class index per sample, indexing into `classes`.
    labels: Vec<usize>,

    /// Sorted distinct class values.
    classes: Vec<String>,
}

impl Dataset {
    /// Create a builder.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    /// Number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.ncols()
    }

    /// Number of features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.nrows()
    }

    /// Number of distinct class values.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Get the schema.
    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    /// Sorted distinct class values.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Class index per sample.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Class index of one sample.
    ///
    /// # Panics
    ///
    /// Panics if `sample` is out of bounds.
    pub fn label(&self, sample: usize) -> usize {
        self.labels[sample]
    }

    /// View of the full feature matrix, shape `[n_features, n_samples]`.
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// Values of one feature across all samples.
    pub fn feature(&self, index: usize) -> ArrayView1<'_, f32> {
        self.features.row(index)
    }

    /// Feature values of one sample (a column of the matrix).
    pub fn sample(&self, index: usize) -> ArrayView1<'_, f32> {
        self.features.column(index)
    }

    /// Count samples per class.
    pub fn class_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.classes.len()];
        for &label in &self.labels {
            counts[label] += 1;
        }
        counts
    }
}

/// Errors that can occur while building a [`Dataset`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatasetError {
    /// No feature columns were provided.
    #[error("dataset has no features")]
    EmptyFeatures,

    /// No samples were provided.
    #[error("dataset has no samples")]
    EmptySamples,

    /// A field's sample count does not match the rest of the dataset.
    #[error("{field} must have {expected} values, got {got}")]
    ShapeMismatch {
        expected: usize,
        got: usize,
        field: &'static str,
    },

    /// No class labels were provided.
    #[error("dataset has no class labels")]
    MissingLabels,
}

/// Builder for [`Dataset`] construction with validation.
///
/// # Example
///
/// ```
/// use tablearn::Dataset;
///
/// let ds = Dataset::builder()
///     .add_feature("age", vec![25.0, 30.0, 35.0])
///     .add_feature("size", vec![1.0, 2.0, 3.0])
///     .labels(vec!["no".into(), "yes".into(), "yes".into()])
///     .build()
///     .unwrap();
///
/// assert_eq!(ds.n_features(), 2);
/// assert_eq!(ds.classes(), &["no".to_string(), "yes".to_string()]);
/// assert_eq!(ds.labels(), &[0, 1, 1]);
/// ```
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    columns: Vec<Vec<f32>>,
    metas: Vec<FeatureMeta>,
    labels: Option<Vec<String>>,
}

impl DatasetBuilder {
    /// Add a feature column.
    pub fn add_feature(mut self, name: &str, values: Vec<f32>) -> Self {
        self.columns.push(values);
        self.metas.push(FeatureMeta::named(name));
        self
    }

    /// Set the class label of every sample, in sample order.
    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Build the dataset.
    ///
    /// The distinct label values are collected, sorted, and stored as the
    /// class list; per-sample labels become indices into it.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if no features or labels were provided, if a
    /// feature has zero samples, or if any sample count disagrees.
    pub fn build(self) -> Result<Dataset, DatasetError> {
        if self.columns.is_empty() {
            return Err(DatasetError::EmptyFeatures);
        }

        let n_samples = self.columns[0].len();
        if n_samples == 0 {
            return Err(DatasetError::EmptySamples);
        }
        for col in &self.columns {
            if col.len() != n_samples {
                return Err(DatasetError::ShapeMismatch {
                    expected: n_samples,
                    got: col.len(),
                    field: "features",
                });
            }
        }

        let raw_labels = self.labels.ok_or(DatasetError::MissingLabels)?;
        if raw_labels.len() != n_samples {
            return Err(DatasetError::ShapeMismatch {
                expected: n_samples,
                got: raw_labels.len(),
                field: "labels",
            });
        }

        let mut classes: Vec<String> = raw_labels.clone();
        classes.sort();
        classes.dedup();

        let labels = raw_labels
            .iter()
            .map(|l| classes.binary_search(l).expect("label is in class list"))
            .collect();

        let n_features = self.columns.len();
        let mut features = Array2::zeros((n_features, n_samples));
        for (i, col) in self.columns.into_iter().enumerate() {
            for (j, v) in col.into_iter().enumerate() {
                features[[i, j]] = v;
            }
        }

        Ok(Dataset {
            features,
            schema: DatasetSchema::from_features(self.metas),
            labels,
            classes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_class_dataset() -> Dataset {
        Dataset::builder()
            .add_feature("x", vec![1.0, 2.0, 3.0, 4.0])
            .add_feature("y", vec![0.5, 0.5, 1.5, 1.5])
            .labels(vec!["b".into(), "a".into(), "a".into(), "b".into()])
            .build()
            .unwrap()
    }

    #[test]
    fn builder_basic() {
        let ds = two_class_dataset();
        assert_eq!(ds.n_samples(), 4);
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.n_classes(), 2);
    }

    #[test]
    fn classes_are_sorted_and_labels_indexed() {
        let ds = two_class_dataset();
        assert_eq!(ds.classes(), &["a".to_string(), "b".to_string()]);
        assert_eq!(ds.labels(), &[1, 0, 0, 1]);
    }

    #[test]
    fn feature_and_sample_views() {
        let ds = two_class_dataset();
        assert_eq!(ds.feature(0).to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
        // A sample is one column
        assert_eq!(ds.sample(2).to_vec(), vec![3.0, 1.5]);
    }

    #[test]
    fn class_counts() {
        let ds = two_class_dataset();
        assert_eq!(ds.class_counts(), vec![2, 2]);
    }

    #[test]
    fn builder_empty_features_error() {
        let result = Dataset::builder().labels(vec!["a".into()]).build();
        assert!(matches!(result, Err(DatasetError::EmptyFeatures)));
    }

    #[test]
    fn builder_shape_mismatch_error() {
        let result = Dataset::builder()
            .add_feature("x", vec![1.0, 2.0, 3.0])
            .add_feature("y", vec![1.0, 2.0]) // wrong length
            .labels(vec!["a".into(), "a".into(), "b".into()])
            .build();
        assert!(matches!(result, Err(DatasetError::ShapeMismatch { .. })));
    }

    #[test]
    fn builder_labels_mismatch_error() {
        let result = Dataset::builder()
            .add_feature("x", vec![1.0, 2.0, 3.0])
            .labels(vec!["a".into(), "b".into()]) // wrong length
            .build();
        assert!(matches!(
            result,
            Err(DatasetError::ShapeMismatch { field: "labels", .. })
        ));
    }

    #[test]
    fn builder_missing_labels_error() {
        let result = Dataset::builder().add_feature("x", vec![1.0]).build();
        assert!(matches!(result, Err(DatasetError::MissingLabels)));
    }
}
