// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plane-level detection statistics (true/false positives, false negatives).

use std::str::FromStr;

use planeseg_core::{group_by_label, iou_overlapped, Error, Label};

/// Rule deciding when a predicted plane and a ground truth plane are a true positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TpCondition {
    /// The planes share points and their IoU reaches the configured IoU threshold.
    #[default]
    Iou,
}

impl FromStr for TpCondition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iou" => Ok(TpCondition::Iou),
            other => Err(Error::UnknownTpCondition(other.to_string())),
        }
    }
}

/// Plane counts behind precision and recall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectionStatistics {
    /// Matching (predicted, ground truth) plane pairs.
    pub true_positive: usize,
    /// Predicted planes matching no ground truth plane.
    pub false_positive: usize,
    /// Ground truth planes matching no predicted plane.
    pub false_negative: usize,
}

/// Count plane matches between two label arrays.
///
/// # Arguments
/// * `pred_labels` - Predicted labels, one per point
/// * `gt_labels` - Reference labels, one per point
/// * `condition` - True positive rule
/// * `iou_threshold` - Minimum IoU for [`TpCondition::Iou`]
/// * `unsegmented_label` - Label of points that belong to no plane
pub fn detection_statistics(
    pred_labels: &[Label],
    gt_labels: &[Label],
    condition: TpCondition,
    iou_threshold: f64,
    unsegmented_label: Label,
) -> DetectionStatistics {
    let predicted_grouping = group_by_label(pred_labels, unsegmented_label);
    let truth_grouping = group_by_label(gt_labels, unsegmented_label);
    let predicted = predicted_grouping.sorted();
    let truth = truth_grouping.sorted();

    let mut stats = DetectionStatistics::default();
    let mut truth_matched = vec![false; truth.len()];

    for (_, pred_plane) in &predicted {
        let mut matched = false;
        for (gt_idx, (_, gt_plane)) in truth.iter().enumerate() {
            let is_match = match condition {
                TpCondition::Iou => iou_overlapped(pred_plane, gt_plane, iou_threshold),
            };
            if is_match {
                stats.true_positive += 1;
                truth_matched[gt_idx] = true;
                matched = true;
            }
        }
        if !matched {
            stats.false_positive += 1;
        }
    }

    stats.false_negative = truth_matched.iter().filter(|&&m| !m).count();

    tracing::debug!(
        predicted_planes = predicted.len(),
        gt_planes = truth.len(),
        true_positive = stats.true_positive,
        false_positive = stats.false_positive,
        false_negative = stats.false_negative,
        "Computed detection statistics"
    );

    stats
}
