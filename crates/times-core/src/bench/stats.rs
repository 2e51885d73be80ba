//! Summary statistics over per-call timings.

use super::BenchStats;

/// Summarise duration samples (in nanoseconds) as min, p50, p95 and max.
///
/// Input order does not matter; a sorted copy is taken.
///
/// # Panics
/// Panics if `samples` is empty.
#[must_use]
pub fn compute_stats(samples: &[u64]) -> BenchStats {
    assert!(!samples.is_empty(), "samples must not be empty");

    let mut sorted: Vec<u64> = samples.to_vec();
    sorted.sort_unstable();

    BenchStats {
        min_ns: sorted[0],
        median_ns: percentile(&sorted, 50),
        p95_ns: percentile(&sorted, 95),
        max_ns: sorted[sorted.len() - 1],
    }
}

/// Nearest-rank percentile of a sorted slice: element `ceil(p/100 * n) - 1`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn percentile(sorted: &[u64], p: u32) -> u64 {
    assert!(!sorted.is_empty());
    assert!(p <= 100);

    let n = sorted.len();
    if p == 0 {
        return sorted[0];
    }
    if p == 100 {
        return sorted[n - 1];
    }

    let rank = ((f64::from(p) / 100.0) * n as f64).ceil() as usize;
    sorted[rank.saturating_sub(1).min(n - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_stats_single_sample() {
        let stats = compute_stats(&[1000]);

        assert_eq!(stats.min_ns, 1000);
        assert_eq!(stats.median_ns, 1000);
        assert_eq!(stats.p95_ns, 1000);
        assert_eq!(stats.max_ns, 1000);
    }

    #[test]
    fn test_compute_stats_two_samples() {
        let stats = compute_stats(&[200, 100]);

        assert_eq!(stats.min_ns, 100);
        assert_eq!(stats.max_ns, 200);
        // p50: ceil(0.5 * 2) = 1 -> index 0
        assert_eq!(stats.median_ns, 100);
        // p95: ceil(0.95 * 2) = 2 -> index 1
        assert_eq!(stats.p95_ns, 200);
    }

    #[test]
    fn test_compute_stats_hundred_samples_reversed() {
        let samples: Vec<u64> = (1..=100).rev().collect();
        let stats = compute_stats(&samples);

        assert_eq!(stats.min_ns, 1);
        assert_eq!(stats.median_ns, 50);
        assert_eq!(stats.p95_ns, 95);
        assert_eq!(stats.max_ns, 100);
    }

    #[test]
    fn test_percentile_edge_cases() {
        let sorted = [10, 20, 30, 40, 50];

        assert_eq!(percentile(&sorted, 0), 10);
        assert_eq!(percentile(&sorted, 50), 30);
        assert_eq!(percentile(&sorted, 100), 50);
    }

    #[test]
    #[should_panic(expected = "samples must not be empty")]
    fn test_compute_stats_empty_panics() {
        let _ = compute_stats(&[]);
    }
}
