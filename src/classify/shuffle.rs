//! The demonstration classifier: a seeded shuffle of the test labels.

use rand::prelude::*;

use crate::predictions::PredictionTable;

/// Build a prediction table by shuffling the true test labels.
///
/// This is a dumb placeholder classifier: the test set's class labels are
/// shuffled in place with a seeded RNG and each shuffled label becomes a
/// one-hot "prediction". The class columns are the sorted distinct labels
/// observed in the test set. Its only purpose is to demonstrate the
/// prediction-table contract a real classifier must produce.
pub fn shuffled_one_hot(test_labels: &[String], seed: u64) -> PredictionTable {
    let mut classes: Vec<String> = test_labels.to_vec();
    classes.sort();
    classes.dedup();

    let mut shuffled: Vec<String> = test_labels.to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);

    let mut table = PredictionTable::new(classes);
    for label in &shuffled {
        table
            .push_one_hot(label)
            .expect("shuffled labels are drawn from the class list");
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        ["yes", "no", "yes", "maybe", "no", "yes"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn classes_are_sorted_distinct_test_labels() {
        let table = shuffled_one_hot(&labels(), 1);
        assert_eq!(table.classes(), &["maybe", "no", "yes"]);
    }

    #[test]
    fn one_row_per_test_instance() {
        let table = shuffled_one_hot(&labels(), 1);
        assert_eq!(table.n_rows(), 6);
    }

    #[test]
    fn same_seed_same_table() {
        let a = shuffled_one_hot(&labels(), 42).to_tab_delimited();
        let b = shuffled_one_hot(&labels(), 42).to_tab_delimited();
        assert_eq!(a, b);
    }

    #[test]
    fn rows_are_a_permutation_of_the_labels() {
        let table = shuffled_one_hot(&labels(), 9);
        let mut row_labels: Vec<String> =
            table.rows().iter().map(|r| r.label.clone()).collect();
        row_labels.sort();
        let mut expected = labels();
        expected.sort();
        assert_eq!(row_labels, expected);
    }
}
