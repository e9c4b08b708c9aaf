// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point-level metrics for every label that names a plane on both sides.

use std::collections::BTreeMap;

use planeseg_core::plane_metrics::{accuracy, f_score, precision, recall};
use planeseg_core::{group_by_label, Label};

/// Point-level scores of the predicted plane against the ground truth plane with the same label.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneMetrics {
    pub precision: f64,
    pub accuracy: f64,
    pub recall: f64,
    pub f_score: f64,
}

/// Score each label present in both segmentations, keyed and ordered by label.
///
/// Labels are compared directly, so this only makes sense when the prediction
/// already uses the ground truth's label ids. Accuracy is taken over the whole
/// cloud, `pred_labels.len()` points. The unsegmented label is skipped.
pub fn per_plane_metrics(
    pred_labels: &[Label],
    gt_labels: &[Label],
    unsegmented_label: Label,
) -> BTreeMap<Label, PlaneMetrics> {
    let predicted = group_by_label(pred_labels, unsegmented_label);
    let truth = group_by_label(gt_labels, unsegmented_label);
    let point_count = pred_labels.len();

    let scores: BTreeMap<Label, PlaneMetrics> = predicted
        .iter()
        .filter_map(|(label, pred_plane)| {
            let gt_plane = truth.get(label)?;
            Some((
                label,
                PlaneMetrics {
                    precision: precision(pred_plane, gt_plane),
                    accuracy: accuracy(point_count, pred_plane, gt_plane),
                    recall: recall(pred_plane, gt_plane),
                    f_score: f_score(pred_plane, gt_plane),
                },
            ))
        })
        .collect();

    tracing::debug!(
        predicted_planes = predicted.len(),
        ground_truth_planes = truth.len(),
        shared_labels = scores.len(),
        "per-plane metrics"
    );
    scores
}
