//! Metric-manipulation heuristics.
//!
//! These are smell detectors over an unlabeled set of metric values, not
//! statistical tests; false positives and negatives are expected and the
//! thresholds are fixed by convention.

use crate::core::MetricFlag;

/// Population variance below this is treated as suspiciously clustered.
const VARIANCE_FLOOR: f64 = 0.01;

/// Coefficient of variation above this is treated as suspiciously clean
/// separation.
const SEPARATION_CV: f64 = 2.0;

/// Keeps the coefficient of variation defined when the mean is zero.
const CV_EPSILON: f64 = 0.01;

/// Fraction of round values above which the set looks fabricated.
const ROUND_FRACTION: f64 = 0.7;

/// The spread checks need at least this many values to say anything.
const MIN_VALUES: usize = 3;

/// Run every manipulation heuristic over the value set.
pub fn metric_flags(values: &[f64]) -> Vec<MetricFlag> {
    let mut flags = Vec::new();
    if values.len() >= MIN_VALUES && population_variance(values) < VARIANCE_FLOOR {
        flags.push(MetricFlag::LowVariance);
    }
    if is_perfect_separation(values) {
        flags.push(MetricFlag::PerfectSep);
    }
    if too_many_round_numbers(values) {
        flags.push(MetricFlag::RoundNumbers);
    }
    flags
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_variance(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Proxy for "cases perfectly split by the narrative": a coefficient of
/// variation over 2.0. It never consults good/bad case labels, so it
/// only sees unusually wide, clean spread; for a handful of nonnegative
/// values the ratio is bounded well below the threshold and the flag
/// cannot fire.
fn is_perfect_separation(values: &[f64]) -> bool {
    if values.len() < MIN_VALUES {
        return false;
    }
    let std_dev = population_variance(values).sqrt();
    std_dev / (mean(values) + CV_EPSILON) > SEPARATION_CV
}

/// More than 70% of the values exactly equal to their own one-decimal
/// rounding suggests figures chosen rather than measured. Applies at any
/// count; below three values the signal is weak.
fn too_many_round_numbers(values: &[f64]) -> bool {
    let round_count = values.iter().filter(|v| is_round(**v)).count();
    round_count as f64 > values.len() as f64 * ROUND_FRACTION
}

fn is_round(value: f64) -> bool {
    (value * 10.0).round() / 10.0 == value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clustered_values_flag_low_variance() {
        let flags = metric_flags(&[0.90, 0.91, 0.89]);
        assert!(flags.contains(&MetricFlag::LowVariance));
        assert!(!flags.contains(&MetricFlag::RoundNumbers));
    }

    #[test]
    fn two_values_are_too_few_for_spread_checks() {
        let flags = metric_flags(&[0.91, 0.92]);
        assert!(!flags.contains(&MetricFlag::LowVariance));
        assert!(!flags.contains(&MetricFlag::PerfectSep));
    }

    #[test]
    fn near_zero_mean_with_wide_spread_flags_perfect_separation() {
        // mean ~0.03, std ~3.8: the variation coefficient is far past 2.0
        let flags = metric_flags(&[5.03, -4.02, -0.93]);
        assert_eq!(flags, vec![MetricFlag::PerfectSep]);
    }

    #[test]
    fn moderate_spread_does_not_flag_separation() {
        assert!(!is_perfect_separation(&[0.90, 0.01, 0.02]));
    }

    #[test]
    fn mostly_round_values_flag_round_numbers() {
        let flags = metric_flags(&[0.5, 0.7, 0.9, 1.0]);
        assert_eq!(flags, vec![MetricFlag::RoundNumbers]);
    }

    #[test]
    fn measured_looking_values_pass_all_checks() {
        let flags = metric_flags(&[0.913, 0.004, 0.011]);
        assert!(flags.is_empty(), "unexpected flags: {flags:?}");
    }

    #[test]
    fn population_variance_matches_hand_computation() {
        let variance = population_variance(&[0.90, 0.91, 0.89]);
        assert!((variance - 6.666e-5).abs() < 1e-6, "variance was {variance}");
    }
}
