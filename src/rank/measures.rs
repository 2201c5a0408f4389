//! Entropy-based feature-scoring measures.
//!
//! Numeric features are discretized by equal-frequency binning before the
//! class/feature entropies are computed. Scores are in bits.

use ndarray::ArrayView1;

use super::Measure;
use crate::data::Dataset;

/// Default bin count for equal-frequency discretization.
const DEFAULT_BINS: usize = 4;

// =============================================================================
// Discretization
// =============================================================================

/// Assign each value to an equal-frequency bin.
///
/// Bin edges are taken at quantile positions of the sorted values; each value
/// is assigned the number of edges strictly below it. Equal values always
/// land in the same bin. Returns one bin index per value, all `< n_bins`.
pub(crate) fn equal_frequency_bins(values: ArrayView1<f32>, n_bins: usize) -> Vec<usize> {
    let n = values.len();
    if n == 0 || n_bins <= 1 {
        return vec![0; n];
    }

    let mut sorted: Vec<f32> = values.iter().copied().collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut edges = Vec::with_capacity(n_bins - 1);
    for k in 1..n_bins {
        let pos = (k * n) / n_bins;
        let edge = sorted[pos.min(n - 1)];
        // Duplicate quantiles collapse into one edge
        if edges.last() != Some(&edge) {
            edges.push(edge);
        }
    }

    values
        .iter()
        .map(|&v| edges.iter().take_while(|&&e| v >= e).count())
        .collect()
}

fn entropy(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Joint statistics of one discretized feature against the class labels.
struct SplitStats {
    /// Class counts per bin.
    per_bin: Vec<Vec<usize>>,
    /// Samples per bin.
    bin_totals: Vec<usize>,
    n_samples: usize,
}

impl SplitStats {
    fn compute(data: &Dataset, feature: usize, n_bins: usize) -> Self {
        let bins = equal_frequency_bins(data.feature(feature), n_bins);
        let n_classes = data.n_classes();
        let mut per_bin = vec![vec![0usize; n_classes]; n_bins];
        let mut bin_totals = vec![0usize; n_bins];
        for (sample, &bin) in bins.iter().enumerate() {
            per_bin[bin][data.label(sample)] += 1;
            bin_totals[bin] += 1;
        }
        Self {
            per_bin,
            bin_totals,
            n_samples: data.n_samples(),
        }
    }

    /// H(class) - H(class | bin), in bits.
    fn information_gain(&self, class_entropy: f64) -> f64 {
        let mut conditional = 0.0;
        for (counts, &total) in self.per_bin.iter().zip(&self.bin_totals) {
            if total == 0 {
                continue;
            }
            let weight = total as f64 / self.n_samples as f64;
            conditional += weight * entropy(counts, total);
        }
        class_entropy - conditional
    }

    /// Entropy of the bin occupancy itself (the "split info").
    fn split_entropy(&self) -> f64 {
        entropy(&self.bin_totals, self.n_samples)
    }
}

// =============================================================================
// InfoGain
// =============================================================================

/// Information gain: reduction of class entropy given the discretized feature.
///
/// Higher is better. A feature carrying no class information scores 0.
#[derive(Debug, Clone, Copy)]
pub struct InfoGain {
    pub n_bins: usize,
}

impl Default for InfoGain {
    fn default() -> Self {
        Self { n_bins: DEFAULT_BINS }
    }
}

impl Measure for InfoGain {
    fn scores(&self, data: &Dataset) -> Vec<f64> {
        let class_entropy = entropy(&data.class_counts(), data.n_samples());
        (0..data.n_features())
            .map(|f| SplitStats::compute(data, f, self.n_bins).information_gain(class_entropy))
            .collect()
    }

    fn name(&self) -> &'static str {
        "info-gain"
    }
}

// =============================================================================
// GainRatio
// =============================================================================

/// Gain ratio: information gain normalized by the split entropy.
///
/// Penalizes features that only look informative because they split the data
/// into many small bins. Scores 0 when the split entropy is 0 (a feature
/// with a single bin cannot inform anything).
#[derive(Debug, Clone, Copy)]
pub struct GainRatio {
    pub n_bins: usize,
}

impl Default for GainRatio {
    fn default() -> Self {
        Self { n_bins: DEFAULT_BINS }
    }
}

impl Measure for GainRatio {
    fn scores(&self, data: &Dataset) -> Vec<f64> {
        let class_entropy = entropy(&data.class_counts(), data.n_samples());
        (0..data.n_features())
            .map(|f| {
                let stats = SplitStats::compute(data, f, self.n_bins);
                let split = stats.split_entropy();
                if split == 0.0 {
                    0.0
                } else {
                    stats.information_gain(class_entropy) / split
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "gain-ratio"
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    use super::*;

    /// Feature 0 separates the classes perfectly; feature 1 is constant.
    fn separable_dataset() -> Dataset {
        Dataset::builder()
            .add_feature("signal", vec![0.0, 0.1, 0.2, 10.0, 10.1, 10.2])
            .add_feature("noise", vec![5.0, 5.0, 5.0, 5.0, 5.0, 5.0])
            .labels(vec![
                "a".into(),
                "a".into(),
                "a".into(),
                "b".into(),
                "b".into(),
                "b".into(),
            ])
            .build()
            .unwrap()
    }

    #[test]
    fn equal_frequency_bins_split_evenly() {
        let bins = equal_frequency_bins(array![1.0, 2.0, 3.0, 4.0].view(), 2);
        assert_eq!(bins, vec![0, 0, 1, 1]);
    }

    #[test]
    fn equal_values_share_a_bin() {
        let bins = equal_frequency_bins(array![7.0, 7.0, 7.0, 7.0].view(), 4);
        let first = bins[0];
        assert!(bins.iter().all(|&b| b == first));
    }

    #[test]
    fn entropy_of_uniform_two_classes_is_one_bit() {
        assert_abs_diff_eq!(entropy(&[5, 5], 10), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn info_gain_prefers_the_signal_feature() {
        let data = separable_dataset();
        let scores = InfoGain::default().scores(&data);
        // A perfect separator recovers the full class entropy (1 bit)
        assert_abs_diff_eq!(scores[0], 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(scores[1], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn gain_ratio_is_zero_for_constant_feature() {
        let data = separable_dataset();
        let scores = GainRatio::default().scores(&data);
        assert!(scores[0] > 0.0);
        assert_abs_diff_eq!(scores[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn measure_names() {
        assert_eq!(InfoGain::default().name(), "info-gain");
        assert_eq!(GainRatio::default().name(), "gain-ratio");
    }
}
