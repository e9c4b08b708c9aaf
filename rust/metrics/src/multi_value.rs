// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Multi-Value Benchmark
//!
//! Matches every predicted plane against every ground truth plane and sorts
//! the outcome into five failure modes plus correct detections:
//!
//! - a predicted plane well overlapping at least one ground truth plane is
//!   **correctly segmented**, otherwise it is **noise**
//! - a predicted plane partially overlapping more than one ground truth plane
//!   is **under-segmented** (it merges several real planes)
//! - a ground truth plane with no well overlapping predicted plane is
//!   **missed**
//! - a ground truth plane partially overlapped by more than one predicted
//!   plane is **over-segmented** (it was split)
//!
//! Plane counts per cloud are small, so the all-pairs pass is `O(P·G)`
//! overlap tests, each linear in the two segment sizes.

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;
use smallvec::SmallVec;

use planeseg_core::{group_by_label, overlap_kind, IndexSet, Label};

/// Aggregate rates of the multi-value benchmark.
///
/// Every field is a ratio in `[0, 1]`; a rate whose denominator is zero
/// (no predicted or no ground truth planes) is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiValueReport {
    /// Correctly segmented planes over predicted planes.
    pub precision: f64,
    /// Correctly segmented planes over ground truth planes.
    pub recall: f64,
    /// Under-segmented planes over predicted planes.
    pub under_segmented: f64,
    /// Over-segmented planes over ground truth planes.
    pub over_segmented: f64,
    /// Missed planes over ground truth planes.
    pub missed: f64,
    /// Noise planes over predicted planes.
    pub noise: f64,
}

/// Ground truth planes matched by one predicted plane.
#[derive(Debug, Default)]
struct PlaneMatch {
    well: SmallVec<[usize; 4]>,
    partial: SmallVec<[usize; 4]>,
}

fn match_plane(predicted: &IndexSet, truth: &[(Label, &IndexSet)], threshold: f64) -> PlaneMatch {
    let mut plane_match = PlaneMatch::default();

    for (gt_idx, (_, gt_plane)) in truth.iter().enumerate() {
        let kind = overlap_kind(predicted, gt_plane, threshold);
        if kind.well {
            plane_match.well.push(gt_idx);
        }
        if kind.partial {
            plane_match.partial.push(gt_idx);
        }
    }

    plane_match
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Run the multi-value benchmark on two label arrays.
///
/// # Arguments
/// * `pred_labels` - Labels produced by the segmentation algorithm, one per point
/// * `gt_labels` - Reference labels, one per point
/// * `overlap_threshold` - Minimum ratio for two planes to count as overlapping (0.8 is customary)
/// * `unsegmented_label` - Label of points that belong to no plane
///
/// Never fails: inputs are not validated here, see
/// [`Benchmark::multi_value`](crate::Benchmark::multi_value) for the checked entry point.
pub fn multi_value(
    pred_labels: &[Label],
    gt_labels: &[Label],
    overlap_threshold: f64,
    unsegmented_label: Label,
) -> MultiValueReport {
    let predicted_grouping = group_by_label(pred_labels, unsegmented_label);
    let truth_grouping = group_by_label(gt_labels, unsegmented_label);
    let predicted = predicted_grouping.sorted();
    let truth = truth_grouping.sorted();

    #[cfg(not(target_arch = "wasm32"))]
    let matches: Vec<PlaneMatch> = predicted
        .par_iter()
        .map(|(_, plane)| match_plane(plane, &truth, overlap_threshold))
        .collect();

    #[cfg(target_arch = "wasm32")]
    let matches: Vec<PlaneMatch> = predicted
        .iter()
        .map(|(_, plane)| match_plane(plane, &truth, overlap_threshold))
        .collect();

    let mut correct = 0;
    let mut noise = 0;
    let mut under_segmented = 0;
    let mut well_by_truth = vec![0usize; truth.len()];
    let mut partial_by_truth = vec![0usize; truth.len()];

    for ((label, _), plane_match) in predicted.iter().zip(&matches) {
        tracing::trace!(
            label,
            well = plane_match.well.len(),
            partial = plane_match.partial.len(),
            "Matched predicted plane"
        );

        if plane_match.well.is_empty() {
            noise += 1;
        } else {
            correct += 1;
        }
        if plane_match.partial.len() > 1 {
            under_segmented += 1;
        }

        for &gt_idx in &plane_match.well {
            well_by_truth[gt_idx] += 1;
        }
        for &gt_idx in &plane_match.partial {
            partial_by_truth[gt_idx] += 1;
        }
    }

    let missed = well_by_truth.iter().filter(|&&count| count == 0).count();
    let over_segmented = partial_by_truth.iter().filter(|&&count| count > 1).count();

    let (p, g) = (predicted.len(), truth.len());
    tracing::debug!(
        predicted_planes = p,
        gt_planes = g,
        correct,
        under_segmented,
        over_segmented,
        missed,
        noise,
        "Multi-value benchmark complete"
    );

    MultiValueReport {
        precision: rate(correct, p),
        recall: rate(correct, g),
        under_segmented: rate(under_segmented, p),
        over_segmented: rate(over_segmented, g),
        missed: rate(missed, g),
        noise: rate(noise, p),
    }
}
