//! Test fixtures and synthetic data generators.
//!
//! Used by the unit and integration tests; kept in the library so both can
//! share them.

use rand::prelude::*;

use crate::data::Dataset;

/// A small ARFF-style fixture with two features and a class attribute.
pub const SAMPLE_ARFF: &str = "\
% demo attribute declarations
@RELATION demo

@ATTRIBUTE sepal_length NUMERIC
@ATTRIBUTE sepal_width NUMERIC
@ATTRIBUTE Class {setosa, versicolor}

@DATA
5.1,3.5,setosa
7.0,3.2,versicolor
";

/// Render a delimited transposed matrix with the given feature rows and
/// class labels.
///
/// `features` supplies `(name, values)` pairs; every values slice must be as
/// long as `labels`. Instance IDs are generated as `i1, i2, ...`.
pub fn delimited_matrix_text(features: &[(&str, &[f32])], labels: &[&str]) -> String {
    let n = labels.len();
    let mut out = String::from("ID");
    for i in 1..=n {
        out.push_str(&format!("\ti{i}"));
    }
    out.push('\n');

    for (name, values) in features {
        assert_eq!(values.len(), n, "fixture feature {name} has wrong length");
        out.push_str(name);
        for v in *values {
            out.push_str(&format!("\t{v}"));
        }
        out.push('\n');
    }

    out.push_str("Class");
    for label in labels {
        out.push_str(&format!("\t{label}"));
    }
    out.push('\n');
    out
}

/// Generate a dataset where feature 0 tracks the class and the rest are
/// uniform noise.
///
/// Class `k` samples center feature 0 at `10 * k` with unit spread, so any
/// reasonable measure ranks feature 0 first and any reasonable classifier
/// separates the classes.
pub fn synthetic_dataset(
    n_features: usize,
    n_samples: usize,
    n_classes: usize,
    seed: u64,
) -> Dataset {
    assert!(n_features >= 1 && n_classes >= 1);
    let mut rng = StdRng::seed_from_u64(seed);

    let labels: Vec<String> = (0..n_samples)
        .map(|i| format!("class{}", i % n_classes))
        .collect();

    let mut builder = Dataset::builder();
    for f in 0..n_features {
        let values: Vec<f32> = (0..n_samples)
            .map(|i| {
                if f == 0 {
                    (i % n_classes) as f32 * 10.0 + rng.gen_range(-1.0..1.0)
                } else {
                    rng.gen_range(0.0..100.0)
                }
            })
            .collect();
        builder = builder.add_feature(&format!("feat{f}"), values);
    }

    builder.labels(labels).build().expect("fixture is well-formed")
}
