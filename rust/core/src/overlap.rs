// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Overlap tests between a predicted and a ground truth segment.
//!
//! Two ratios share the same numerator `|P ∩ G|`:
//!
//! - **overlap ratio** (IoU): divided by `|P ∪ G|`. A pair whose overlap
//!   ratio reaches the threshold is *well overlapped*, i.e. a real match.
//! - **containment ratio**: divided by `min(|P|, |G|)`. A pair whose
//!   containment ratio reaches the threshold is *partially overlapped*: the
//!   smaller segment lies mostly inside the larger one.
//!
//! `min(|P|, |G|) <= |P ∪ G|`, so the containment ratio is never below the
//! overlap ratio and well overlap always implies partial overlap.

use crate::labels::IndexSet;

/// Outcome of comparing one predicted segment with one ground truth segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlapKind {
    /// Overlap ratio reaches the threshold.
    pub well: bool,
    /// Containment ratio reaches the threshold.
    pub partial: bool,
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Intersection over union of two index sets, 0 if both are empty.
pub fn iou(predicted: &IndexSet, truth: &IndexSet) -> f64 {
    let intersection = predicted.intersection_len(truth);
    ratio(intersection, predicted.len() + truth.len() - intersection)
}

/// Dice coefficient `2|A ∩ B| / (|A| + |B|)`, 0 if both are empty.
pub fn dice(predicted: &IndexSet, truth: &IndexSet) -> f64 {
    ratio(
        2 * predicted.intersection_len(truth),
        predicted.len() + truth.len(),
    )
}

/// Share of the smaller set covered by the other one, 0 if either is empty.
pub fn containment(predicted: &IndexSet, truth: &IndexSet) -> f64 {
    ratio(
        predicted.intersection_len(truth),
        predicted.len().min(truth.len()),
    )
}

/// Check whether two segments share points and their IoU reaches `threshold`.
///
/// Disjoint segments never match, even at a threshold of 0, which keeps this
/// in line with [`overlap_kind`].
pub fn iou_overlapped(predicted: &IndexSet, truth: &IndexSet, threshold: f64) -> bool {
    predicted.intersection_len(truth) > 0 && iou(predicted, truth) >= threshold
}

/// Classify how a predicted segment overlaps a ground truth segment.
///
/// # Arguments
/// * `predicted` - Point indices of the predicted segment
/// * `truth` - Point indices of the ground truth segment
/// * `threshold` - Minimum ratio for either flag, conventionally in `(0, 1]`
pub fn overlap_kind(predicted: &IndexSet, truth: &IndexSet, threshold: f64) -> OverlapKind {
    let intersection = predicted.intersection_len(truth);
    if intersection == 0 {
        return OverlapKind::default();
    }

    let union = predicted.len() + truth.len() - intersection;
    let smaller = predicted.len().min(truth.len());

    OverlapKind {
        well: ratio(intersection, union) >= threshold,
        partial: ratio(intersection, smaller) >= threshold,
    }
}
