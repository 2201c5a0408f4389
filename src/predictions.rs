//! Prediction output tables.
//!
//! Two output shapes are produced by this crate:
//!
//! - The **prediction table** ([`PredictionTable`]): a `Prediction` header
//!   followed by one column per class value, then one row per test instance
//!   with the predicted label and a probability vector.
//! - The **dispatcher pair** ([`write_predictions`] / [`write_probabilities`]):
//!   a newline-delimited label file plus a probabilities file whose header is
//!   the tab-joined class values.
//!
//! Probabilities print the way a dynamic-language `str(float)` would: whole
//! values keep one decimal (`1.0`, `0.0`), fractional values print in full.
//! The harness consuming these files parses them as text, so the formatting
//! is part of the contract.

use std::fs;
use std::io;
use std::path::Path;

/// Errors from assembling a prediction table.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TableError {
    /// A row's label is not one of the table's class values.
    #[error("label {label:?} is not among the class values {classes:?}")]
    UnknownLabel {
        label: String,
        classes: Vec<String>,
    },

    /// A probability row has the wrong number of entries.
    #[error("probability row has {got} entries, expected {expected}")]
    WrongRowWidth { expected: usize, got: usize },
}

/// One prediction: a label and its probability vector, in class order.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRow {
    pub label: String,
    pub probabilities: Vec<f64>,
}

/// The tab-delimited prediction/probability table.
#[derive(Debug, Clone)]
pub struct PredictionTable {
    classes: Vec<String>,
    rows: Vec<PredictionRow>,
}

impl PredictionTable {
    /// Create an empty table with the given class columns.
    pub fn new(classes: Vec<String>) -> Self {
        Self {
            classes,
            rows: Vec::new(),
        }
    }

    /// The class values, one per probability column.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The rows pushed so far.
    pub fn rows(&self) -> &[PredictionRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Append a one-hot row: probability 1 at the label's class, 0 elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownLabel`] if the label is not a class value.
    pub fn push_one_hot(&mut self, label: &str) -> Result<(), TableError> {
        let index = self
            .classes
            .iter()
            .position(|c| c == label)
            .ok_or_else(|| TableError::UnknownLabel {
                label: label.to_string(),
                classes: self.classes.clone(),
            })?;
        let mut probabilities = vec![0.0; self.classes.len()];
        probabilities[index] = 1.0;
        self.rows.push(PredictionRow {
            label: label.to_string(),
            probabilities,
        });
        Ok(())
    }

    /// Append a row with an explicit probability vector.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownLabel`] if the label is not a class
    /// value, or [`TableError::WrongRowWidth`] on a vector length mismatch.
    pub fn push_row(&mut self, label: &str, probabilities: Vec<f64>) -> Result<(), TableError> {
        if !self.classes.iter().any(|c| c == label) {
            return Err(TableError::UnknownLabel {
                label: label.to_string(),
                classes: self.classes.clone(),
            });
        }
        if probabilities.len() != self.classes.len() {
            return Err(TableError::WrongRowWidth {
                expected: self.classes.len(),
                got: probabilities.len(),
            });
        }
        self.rows.push(PredictionRow {
            label: label.to_string(),
            probabilities,
        });
        Ok(())
    }

    /// Render the table as tab-delimited text.
    pub fn to_tab_delimited(&self) -> String {
        let mut out = String::from("Prediction");
        for class in &self.classes {
            out.push('\t');
            out.push_str(class);
        }
        out.push('\n');

        for row in &self.rows {
            out.push_str(&row.label);
            for &p in &row.probabilities {
                out.push('\t');
                out.push_str(&format_probability(p));
            }
            out.push('\n');
        }
        out
    }

    /// Write the table to a file.
    pub fn write(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_tab_delimited())
    }
}

/// Write the dispatcher's predictions file: one label per line.
pub fn write_predictions(path: &Path, labels: &[String]) -> io::Result<()> {
    let mut out = String::new();
    for label in labels {
        out.push_str(label);
        out.push('\n');
    }
    fs::write(path, out)
}

/// Write the dispatcher's probabilities file.
///
/// The header is the tab-joined class values; each following line is one
/// test instance's tab-joined probability vector.
pub fn write_probabilities(
    path: &Path,
    classes: &[String],
    rows: &[Vec<f64>],
) -> io::Result<()> {
    let mut out = classes.join("\t");
    out.push('\n');
    for row in rows {
        let cells: Vec<String> = row.iter().map(|&p| format_probability(p)).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    fs::write(path, out)
}

/// Format a probability the way `str(float)` would: `0.0` and `1.0` keep a
/// decimal, fractional values use the shortest exact representation.
fn format_probability(p: f64) -> String {
    if p == p.trunc() {
        format!("{p:.1}")
    } else {
        format!("{p}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes() -> Vec<String> {
        vec!["no".to_string(), "yes".to_string()]
    }

    #[test]
    fn one_hot_rows_render_exactly() {
        let mut table = PredictionTable::new(classes());
        table.push_one_hot("yes").unwrap();
        table.push_one_hot("no").unwrap();
        assert_eq!(
            table.to_tab_delimited(),
            "Prediction\tno\tyes\nyes\t0.0\t1.0\nno\t1.0\t0.0\n"
        );
    }

    #[test]
    fn fractional_probabilities_print_in_full() {
        let mut table = PredictionTable::new(classes());
        table.push_row("yes", vec![0.25, 0.75]).unwrap();
        assert_eq!(
            table.to_tab_delimited(),
            "Prediction\tno\tyes\nyes\t0.25\t0.75\n"
        );
    }

    #[test]
    fn unknown_label_is_an_error() {
        let mut table = PredictionTable::new(classes());
        assert!(matches!(
            table.push_one_hot("maybe"),
            Err(TableError::UnknownLabel { .. })
        ));
    }

    #[test]
    fn wrong_row_width_is_an_error() {
        let mut table = PredictionTable::new(classes());
        assert!(matches!(
            table.push_row("yes", vec![1.0]),
            Err(TableError::WrongRowWidth { expected: 2, got: 1 })
        ));
    }

    #[test]
    fn format_whole_and_fractional_values() {
        assert_eq!(format_probability(1.0), "1.0");
        assert_eq!(format_probability(0.0), "0.0");
        assert_eq!(format_probability(0.5), "0.5");
    }
}
