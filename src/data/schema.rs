//! Feature metadata and name lookup.

use std::collections::HashMap;

/// Metadata for a single feature.
///
/// Every feature in this crate comes from a file row or attribute
/// declaration, so names are mandatory. Invariants: non-empty, no tab or
/// newline characters (enforced at parse time).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureMeta {
    /// Feature name as it appeared in the input file.
    pub name: String,
}

impl FeatureMeta {
    /// Create metadata for a named feature.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Schema describing the dataset structure.
///
/// Contains per-feature metadata and a name-to-index mapping built lazily on
/// first lookup.
#[derive(Clone, Debug, Default)]
pub struct DatasetSchema {
    features: Vec<FeatureMeta>,
    name_index: Option<HashMap<String, usize>>,
}

impl DatasetSchema {
    /// Create a schema with the given feature metadata.
    pub fn from_features(features: Vec<FeatureMeta>) -> Self {
        Self {
            features,
            name_index: None,
        }
    }

    /// Number of features in the schema.
    pub fn n_features(&self) -> usize {
        self.features.len()
    }

    /// Get metadata for a feature by index.
    pub fn get(&self, index: usize) -> Option<&FeatureMeta> {
        self.features.get(index)
    }

    /// Get the name of a feature by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn name(&self, index: usize) -> &str {
        &self.features[index].name
    }

    /// Get feature index by name.
    ///
    /// Builds the name index on first call. Returns `None` if no feature has
    /// the given name.
    pub fn feature_index(&mut self, name: &str) -> Option<usize> {
        if self.name_index.is_none() {
            self.build_name_index();
        }
        self.name_index.as_ref().and_then(|idx| idx.get(name).copied())
    }

    fn build_name_index(&mut self) {
        let mut index = HashMap::new();
        for (i, meta) in self.features.iter().enumerate() {
            index.insert(meta.name.clone(), i);
        }
        self.name_index = Some(index);
    }

    /// Get an iterator over feature metadata.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureMeta> {
        self.features.iter()
    }

    /// Collect all feature names in schema order.
    pub fn names(&self) -> Vec<String> {
        self.features.iter().map(|m| m.name.clone()).collect()
    }

    /// Add a feature to the schema.
    pub fn push(&mut self, meta: FeatureMeta) {
        self.features.push(meta);
        // Invalidate name index
        self.name_index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_from_features() {
        let schema = DatasetSchema::from_features(vec![
            FeatureMeta::named("a"),
            FeatureMeta::named("b"),
        ]);
        assert_eq!(schema.n_features(), 2);
        assert_eq!(schema.name(0), "a");
        assert_eq!(schema.names(), vec!["a", "b"]);
    }

    #[test]
    fn schema_feature_index() {
        let mut schema = DatasetSchema::from_features(vec![
            FeatureMeta::named("a"),
            FeatureMeta::named("b"),
        ]);
        assert_eq!(schema.feature_index("a"), Some(0));
        assert_eq!(schema.feature_index("b"), Some(1));
        assert_eq!(schema.feature_index("c"), None);
    }

    #[test]
    fn schema_push_invalidates_index() {
        let mut schema = DatasetSchema::from_features(vec![FeatureMeta::named("x")]);
        assert_eq!(schema.feature_index("x"), Some(0));
        schema.push(FeatureMeta::named("y"));
        assert_eq!(schema.feature_index("y"), Some(1));
    }
}
