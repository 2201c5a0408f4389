//! End-to-end toolkit dispatcher tests over real files.

use std::fs;
use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use rstest::rstest;
use tempfile::{tempdir, TempDir};

use tablearn::testing::delimited_matrix_text;
use tablearn::toolkit::{self, ToolkitError};

/// Two separable classes: `signal` tracks the class, `noise` does not.
fn write_train_test(dir: &TempDir) -> (PathBuf, PathBuf) {
    let train = delimited_matrix_text(
        &[
            ("signal", &[0.0, 0.4, 0.8, 9.2, 9.6, 10.0]),
            ("noise", &[3.0, 8.0, 1.0, 6.0, 2.0, 7.0]),
        ],
        &["low", "low", "low", "high", "high", "high"],
    );
    let test = delimited_matrix_text(
        &[("signal", &[0.2, 9.8]), ("noise", &[5.0, 5.0])],
        &["low", "high"],
    );

    let train_path = dir.path().join("train.txt");
    let test_path = dir.path().join("test.txt");
    fs::write(&train_path, train).unwrap();
    fs::write(&test_path, test).unwrap();
    (train_path, test_path)
}

#[rstest]
#[case("info-gain")]
#[case("gain-ratio")]
#[case("relief")]
fn rank_features_puts_the_signal_first(#[case] measure: &str) {
    let dir = tempdir().unwrap();
    let (train_path, _) = write_train_test(&dir);
    let out_path = dir.path().join("ranked.txt");

    toolkit::rank_features(measure, &train_path, &out_path).unwrap();

    let text = fs::read_to_string(&out_path).unwrap();
    assert_eq!(text, "signal\nnoise\n");
}

#[rstest]
#[case("majority")]
#[case("naive-bayes")]
#[case("knn")]
fn train_test_writes_both_output_files(#[case] learner: &str) {
    let dir = tempdir().unwrap();
    let (train_path, test_path) = write_train_test(&dir);
    let pred_path = dir.path().join("predictions.txt");
    let prob_path = dir.path().join("probabilities.txt");

    toolkit::train_test(learner, &train_path, &test_path, &pred_path, &prob_path).unwrap();

    let predictions = fs::read_to_string(&pred_path).unwrap();
    assert_eq!(predictions.lines().count(), 2);

    let probabilities = fs::read_to_string(&prob_path).unwrap();
    let mut lines = probabilities.lines();
    // Header: the training set's sorted class values
    assert_eq!(lines.next().unwrap(), "high\tlow");
    for line in lines {
        let row: Vec<f64> = line
            .split('\t')
            .map(|cell| cell.parse().unwrap())
            .collect();
        assert_eq!(row.len(), 2);
        assert_abs_diff_eq!(row.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn naive_bayes_recovers_the_true_labels() {
    let dir = tempdir().unwrap();
    let (train_path, test_path) = write_train_test(&dir);
    let pred_path = dir.path().join("predictions.txt");
    let prob_path = dir.path().join("probabilities.txt");

    toolkit::train_test("naive-bayes", &train_path, &test_path, &pred_path, &prob_path).unwrap();

    let predictions = fs::read_to_string(&pred_path).unwrap();
    assert_eq!(predictions, "low\nhigh\n");
}

#[test]
fn unknown_learner_name_is_fatal() {
    let dir = tempdir().unwrap();
    let (train_path, test_path) = write_train_test(&dir);

    let err = toolkit::train_test(
        "orngSVM.SVMLearner()",
        &train_path,
        &test_path,
        &dir.path().join("p.txt"),
        &dir.path().join("q.txt"),
    )
    .unwrap_err();
    assert!(matches!(err, ToolkitError::UnknownLearner { .. }));
    assert!(err.to_string().contains("naive-bayes"));
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = tempdir().unwrap();
    let err = toolkit::rank_features(
        "info-gain",
        &dir.path().join("absent.txt"),
        &dir.path().join("out.txt"),
    )
    .unwrap_err();
    assert!(matches!(err, ToolkitError::Data(_)));
}

#[test]
fn feature_count_mismatch_is_fatal() {
    let dir = tempdir().unwrap();
    let (train_path, _) = write_train_test(&dir);

    let test = delimited_matrix_text(&[("signal", &[0.2, 9.8])], &["low", "high"]);
    let test_path = dir.path().join("narrow_test.txt");
    fs::write(&test_path, test).unwrap();

    let err = toolkit::train_test(
        "knn",
        &train_path,
        &test_path,
        &dir.path().join("p.txt"),
        &dir.path().join("q.txt"),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ToolkitError::FeatureMismatch { train: 2, test: 1 }
    ));
}
