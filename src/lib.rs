//! tablearn: plug-in learners for tabular experimentation harnesses.
//!
//! This crate demonstrates the input/output contract that an external ML
//! experimentation framework expects from a pluggable "learner" or "feature
//! ranker", and ships a small native toolkit of real classifiers and
//! feature-scoring measures behind a by-name registry.
//!
//! # Key Types
//!
//! - [`Dataset`] / [`DatasetBuilder`] - Numeric dataset container
//! - [`DelimitedMatrix`] - Tab-delimited transposed matrix parser
//! - [`Learner`] / [`Classifier`] - Fit/predict seam for toolkit classifiers
//! - [`Measure`] - Feature-scoring seam for toolkit rankers
//! - [`PredictionTable`] - The tab-delimited prediction/probability output
//!
//! # Binaries
//!
//! Four command-line utilities wrap the library, one per contract:
//! `arff_rank`, `delim_rank`, `delim_classify`, and `toolkit_exec`.
//! Each reads positional arguments, parses its input file(s), and writes a
//! plain-text output file. Errors are fatal: the process exits non-zero with
//! a diagnostic.
//!
//! # Determinism
//!
//! Every seeded operation uses [`rand::rngs::StdRng`] seeded from the
//! command-line seed, so a fixed seed and input always produce byte-identical
//! output.

pub mod classify;
pub mod data;
pub mod logging;
pub mod predictions;
pub mod rank;
pub mod testing;
pub mod toolkit;

// High-level data types
pub use data::{Dataset, DatasetBuilder, DatasetError, DelimitedMatrix, FeatureMeta};

// Learner and measure seams
pub use classify::{Classifier, FitError, Learner};
pub use rank::Measure;

// Output tables
pub use predictions::{PredictionTable, TableError};
