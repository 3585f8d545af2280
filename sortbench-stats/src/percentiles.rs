//! Percentile Computation

use std::cmp::Ordering;

/// Compute a single percentile (0-100) from samples
///
/// Uses linear interpolation between nearest ranks, so the 50th percentile
/// of an even-length sample is the average of the two middle values.
/// Returns `None` for an empty sample.
///
/// # Examples
///
/// ```
/// # use sortbench_stats::compute_percentile;
/// let samples = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(compute_percentile(&samples, 50.0), Some(2.5));
/// assert_eq!(compute_percentile(&[], 50.0), None);
/// ```
pub fn compute_percentile(samples: &[f64], percentile: f64) -> Option<f64> {
    match samples {
        [] => None,
        [only] => Some(*only),
        _ => {
            let mut sorted = samples.to_vec();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

            let n = sorted.len();
            let p = percentile.clamp(0.0, 100.0) / 100.0;

            let rank = p * (n - 1) as f64;
            let lower_idx = rank.floor() as usize;
            let upper_idx = (lower_idx + 1).min(n - 1);
            let fraction = rank - lower_idx as f64;

            Some(sorted[lower_idx] + fraction * (sorted[upper_idx] - sorted[lower_idx]))
        }
    }
}

/// Median of the samples, `None` when empty
pub fn median(samples: &[f64]) -> Option<f64> {
    compute_percentile(samples, 50.0)
}
