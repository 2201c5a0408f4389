//! ARFF-style attribute-declaration parsing.
//!
//! Only the attribute declarations are consumed; the data section, if any,
//! is ignored. A declaration line looks like:
//!
//! ```text
//! @ATTRIBUTE sepal_length NUMERIC
//! ```
//!
//! The `@ATTRIBUTE` keyword is matched case-insensitively and tabs are
//! normalized to spaces first. A declaration whose name starts with `class`
//! (case-insensitive) is the class attribute and is excluded from the
//! feature list.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from ARFF attribute parsing.
#[derive(Debug, thiserror::Error)]
pub enum ArffError {
    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An `@ATTRIBUTE` line with no name token.
    #[error("malformed attribute declaration on line {line}: {text:?}")]
    MalformedDeclaration { line: usize, text: String },
}

/// Read the feature list from an ARFF-style file.
///
/// Returns the attribute names in declaration order, excluding the class
/// attribute. Comment lines (starting with `%`) and blank lines are skipped.
///
/// # Errors
///
/// Returns [`ArffError::Io`] if the file cannot be read, or
/// [`ArffError::MalformedDeclaration`] if an attribute line carries no name.
pub fn read_feature_list(path: &Path) -> Result<Vec<String>, ArffError> {
    let text = fs::read_to_string(path).map_err(|source| ArffError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_feature_list(&text)
}

/// Parse the feature list from ARFF-style text.
///
/// See [`read_feature_list`] for the semantics.
pub fn parse_feature_list(text: &str) -> Result<Vec<String>, ArffError> {
    let mut features = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }

        // Declarations may separate tokens with tabs
        let line = line.replace('\t', " ");
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        if !keyword.eq_ignore_ascii_case("@ATTRIBUTE") {
            continue;
        }

        let name = tokens.next().ok_or_else(|| ArffError::MalformedDeclaration {
            line: i + 1,
            text: raw.to_string(),
        })?;

        // The class attribute is matched by name prefix, so "Class" and
        // "classification" are both excluded
        if name.get(..5).is_some_and(|p| p.eq_ignore_ascii_case("class")) {
            continue;
        }
        features.push(name.to_string());
    }

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
% A comment line
@RELATION demo

@ATTRIBUTE alpha NUMERIC
@attribute beta\t{low, high}
@ATTRIBUTE Class {yes, no}

@DATA
1.0,low,yes
";

    #[test]
    fn parses_attribute_names_in_order() {
        let features = parse_feature_list(SAMPLE).unwrap();
        assert_eq!(features, vec!["alpha", "beta"]);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let features = parse_feature_list("%@ATTRIBUTE ghost NUMERIC\n\n").unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn excludes_class_attribute_case_insensitively() {
        let features =
            parse_feature_list("@attribute CLASS {a,b}\n@attribute x NUMERIC\n").unwrap();
        assert_eq!(features, vec!["x"]);
    }

    #[test]
    fn class_prefixed_names_are_treated_as_class_attribute() {
        // Matches the historical contract: the check is a prefix match on the
        // whole declaration, so "classification" is excluded too.
        let features =
            parse_feature_list("@ATTRIBUTE classification NUMERIC\n@ATTRIBUTE x NUMERIC\n")
                .unwrap();
        assert_eq!(features, vec!["x"]);
    }

    #[test]
    fn malformed_declaration_is_an_error() {
        let err = parse_feature_list("@ATTRIBUTE\n").unwrap_err();
        assert!(matches!(err, ArffError::MalformedDeclaration { line: 1, .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_feature_list(Path::new("/no/such/file.arff")).unwrap_err();
        assert!(matches!(err, ArffError::Io { .. }));
    }
}
