// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Precision, recall and F-score over plane detection statistics.
//!
//! These take already computed [`DetectionStatistics`]; a zero denominator
//! yields 0. Input checks live in [`Benchmark`](crate::Benchmark).

use crate::statistics::DetectionStatistics;

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// `tp / (tp + fp)`
pub fn precision(stats: &DetectionStatistics) -> f64 {
    ratio(
        stats.true_positive,
        stats.true_positive + stats.false_positive,
    )
}

/// `tp / (tp + fn)`
pub fn recall(stats: &DetectionStatistics) -> f64 {
    ratio(
        stats.true_positive,
        stats.true_positive + stats.false_negative,
    )
}

/// Harmonic mean of precision and recall, 0 when both are 0.
pub fn f_score(stats: &DetectionStatistics) -> f64 {
    let p = precision(stats);
    let r = recall(stats);
    if p + r == 0.0 {
        return 0.0;
    }
    2.0 * p * r / (p + r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn stats(tp: usize, fp: usize, fn_count: usize) -> DetectionStatistics {
        DetectionStatistics {
            true_positive: tp,
            false_positive: fp,
            false_negative: fn_count,
        }
    }

    #[test]
    fn precision_and_recall() {
        let s = stats(2, 1, 2);
        assert_relative_eq!(precision(&s), 2.0 / 3.0);
        assert_relative_eq!(recall(&s), 0.5);
    }

    #[test]
    fn f_score_is_harmonic_mean() {
        assert_relative_eq!(f_score(&stats(2, 1, 2)), 4.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(f_score(&stats(4, 0, 0)), 1.0);
    }

    #[test]
    fn zero_denominators() {
        let empty = DetectionStatistics::default();
        assert_relative_eq!(precision(&empty), 0.0);
        assert_relative_eq!(recall(&empty), 0.0);
        assert_relative_eq!(f_score(&empty), 0.0);
        assert_relative_eq!(f_score(&stats(0, 3, 3)), 0.0);
    }
}
