// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mean of a per-plane metric over the ground truth planes.

use planeseg_core::{group_by_label, IndexSet, Label};

/// Average, over ground truth planes, of the best metric value any predicted plane reaches.
///
/// A ground truth plane with no predicted planes to compare against scores 0;
/// with no ground truth planes the mean is 0.
///
/// # Arguments
/// * `pred_labels` - Predicted labels, one per point
/// * `gt_labels` - Reference labels, one per point
/// * `unsegmented_label` - Label of points that belong to no plane
/// * `metric` - Per-plane metric, called as `metric(predicted, ground_truth)`
pub fn mean<F>(
    pred_labels: &[Label],
    gt_labels: &[Label],
    unsegmented_label: Label,
    metric: F,
) -> f64
where
    F: Fn(&IndexSet, &IndexSet) -> f64,
{
    let predicted = group_by_label(pred_labels, unsegmented_label);
    let truth = group_by_label(gt_labels, unsegmented_label);
    if truth.is_empty() {
        return 0.0;
    }

    let total: f64 = truth
        .iter()
        .map(|(_, gt_plane)| {
            predicted
                .iter()
                .map(|(_, pred_plane)| metric(pred_plane, gt_plane))
                .fold(0.0, f64::max)
        })
        .sum();

    total / truth.len() as f64
}
