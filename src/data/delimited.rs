//! Tab-delimited transposed matrix parsing.
//!
//! The matrix layout is transposed relative to the usual samples-on-rows
//! convention:
//!
//! ```text
//! ID      inst1   inst2   inst3
//! featA   1.0     2.0     3.0
//! featB   0.5     0.5     1.5
//! Class   yes     no      yes
//! ```
//!
//! The first row is the header (corner cell plus one instance ID per
//! column), each middle row is one feature, and the last row carries the
//! class label of each instance. Every row must have the same column count.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::dataset::{Dataset, DatasetError};

/// Errors from delimited matrix parsing and conversion.
#[derive(Debug, thiserror::Error)]
pub enum DelimitedError {
    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file needs at least a header row and a class row.
    #[error("matrix has {got} row(s), need at least a header row and a class row")]
    TooFewRows { got: usize },

    /// A row's column count disagrees with the header.
    #[error("row {line} has {got} column(s), expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        got: usize,
    },

    /// A feature cell that should be numeric is not.
    #[error("feature {feature:?} has non-numeric value {value:?} for instance {instance:?}")]
    NonNumericValue {
        feature: String,
        instance: String,
        value: String,
    },

    /// The parsed matrix could not be turned into a dataset.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// A parsed tab-delimited transposed matrix.
///
/// Cells are kept as raw strings; [`DelimitedMatrix::to_dataset`] performs
/// the numeric conversion when the toolkit needs one.
#[derive(Debug, Clone)]
pub struct DelimitedMatrix {
    instance_ids: Vec<String>,
    features: Vec<(String, Vec<String>)>,
    class_labels: Vec<String>,
}

impl DelimitedMatrix {
    /// Read and parse a matrix file.
    ///
    /// # Errors
    ///
    /// Returns [`DelimitedError::Io`] if the file cannot be read,
    /// [`DelimitedError::TooFewRows`] if it has fewer than two rows, or
    /// [`DelimitedError::RaggedRow`] on an inconsistent column count.
    pub fn read(path: &Path) -> Result<Self, DelimitedError> {
        let text = fs::read_to_string(path).map_err(|source| DelimitedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse a matrix from text. See [`DelimitedMatrix::read`].
    pub fn parse(text: &str) -> Result<Self, DelimitedError> {
        let rows: Vec<Vec<String>> = text
            .lines()
            .map(|line| line.trim_end().split('\t').map(str::to_string).collect())
            .collect();

        if rows.len() < 2 {
            return Err(DelimitedError::TooFewRows { got: rows.len() });
        }

        let n_columns = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_columns {
                return Err(DelimitedError::RaggedRow {
                    line: i + 1,
                    expected: n_columns,
                    got: row.len(),
                });
            }
        }

        let mut rows = rows.into_iter();
        let mut header = rows.next().expect("row count checked above");
        header.remove(0); // corner cell
        let instance_ids = header;

        let mut features: Vec<(String, Vec<String>)> = rows
            .map(|mut row| {
                let name = row.remove(0);
                (name, row)
            })
            .collect();
        let (_, class_labels) = features.pop().expect("row count checked above");

        Ok(Self {
            instance_ids,
            features,
            class_labels,
        })
    }

    /// Number of instances (data columns).
    pub fn n_instances(&self) -> usize {
        self.instance_ids.len()
    }

    /// Number of feature rows (header and class rows excluded).
    pub fn n_features(&self) -> usize {
        self.features.len()
    }

    /// Instance IDs from the header row.
    pub fn instance_ids(&self) -> &[String] {
        &self.instance_ids
    }

    /// Feature names in row order.
    pub fn feature_names(&self) -> Vec<String> {
        self.features.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Class label of each instance, from the trailing class row.
    pub fn class_labels(&self) -> &[String] {
        &self.class_labels
    }

    /// Convert to a numeric [`Dataset`].
    ///
    /// # Errors
    ///
    /// Returns [`DelimitedError::NonNumericValue`] if a feature cell does not
    /// parse as a float, or a [`DatasetError`] if the matrix has no feature
    /// rows or no instances.
    pub fn to_dataset(&self) -> Result<Dataset, DelimitedError> {
        let mut builder = Dataset::builder();
        for (name, cells) in &self.features {
            let mut values = Vec::with_capacity(cells.len());
            for (i, cell) in cells.iter().enumerate() {
                let value: f32 =
                    cell.parse()
                        .map_err(|_| DelimitedError::NonNumericValue {
                            feature: name.clone(),
                            instance: self
                                .instance_ids
                                .get(i)
                                .cloned()
                                .unwrap_or_default(),
                            value: cell.clone(),
                        })?;
                values.push(value);
            }
            builder = builder.add_feature(name, values);
        }
        let dataset = builder.labels(self.class_labels.to_vec()).build()?;
        Ok(dataset)
    }
}
