//! Input parsing and the in-memory dataset container.
//!
//! Two text formats are consumed:
//!
//! - An ARFF-style attribute-declaration format ([`arff`]): one declaration
//!   per line, `%` comment lines, `@ATTRIBUTE <name> <type>` declarations.
//! - A tab-delimited transposed matrix ([`delimited`]): header row of
//!   instance IDs, one row per feature, and a trailing class row.
//!
//! Parsed matrices convert into [`Dataset`], a feature-major numeric
//! container the toolkit classifiers and measures operate on. All structures
//! are transient: built from a file, used for one invocation, discarded.

pub mod arff;
mod dataset;
pub mod delimited;
mod schema;

pub use arff::{read_feature_list, ArffError};
pub use dataset::{Dataset, DatasetBuilder, DatasetError};
pub use delimited::{DelimitedError, DelimitedMatrix};
pub use schema::{DatasetSchema, FeatureMeta};
