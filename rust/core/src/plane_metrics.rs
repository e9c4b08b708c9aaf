// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point-level metrics for one predicted plane against one ground truth plane.
//!
//! Every function here treats the predicted index set as the positives of a
//! binary classifier and the ground truth index set as the true class. A zero
//! denominator yields 0.

use crate::labels::IndexSet;

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Share of predicted points that lie on the ground truth plane.
pub fn precision(predicted: &IndexSet, truth: &IndexSet) -> f64 {
    ratio(predicted.intersection_len(truth), predicted.len())
}

/// Share of ground truth points covered by the predicted plane.
pub fn recall(predicted: &IndexSet, truth: &IndexSet) -> f64 {
    ratio(predicted.intersection_len(truth), truth.len())
}

/// Harmonic mean of [`precision`] and [`recall`], 0 when both are 0.
pub fn f_score(predicted: &IndexSet, truth: &IndexSet) -> f64 {
    let p = precision(predicted, truth);
    let r = recall(predicted, truth);
    if p + r == 0.0 {
        return 0.0;
    }
    2.0 * p * r / (p + r)
}

/// Share of all `point_count` cloud points classified the same way by both sets.
///
/// True negatives are the points in neither set, so the cloud size has to be
/// known.
pub fn accuracy(point_count: usize, predicted: &IndexSet, truth: &IndexSet) -> f64 {
    let true_positive = predicted.intersection_len(truth);
    let true_negative = point_count.saturating_sub(predicted.union_len(truth));
    ratio(true_positive + true_negative, point_count)
}
