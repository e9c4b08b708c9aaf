// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated metric entry points bound to one [`BenchmarkConfig`].
//!
//! Every method checks its inputs before computing anything. Malformed input
//! is an [`Error`]; legitimately empty groupings inside
//! [`Benchmark::multi_value`] give zero rates instead.

use planeseg_core::validate::{check_has_segments, check_same_length, check_threshold};
use planeseg_core::{BenchmarkConfig, IndexSet, Label, LabelSide, Result};
use std::collections::BTreeMap;

use crate::default;
use crate::mean::mean;
use crate::multi_value::{multi_value, MultiValueReport};
use crate::per_plane::{per_plane_metrics, PlaneMetrics};
use crate::statistics::{detection_statistics, DetectionStatistics, TpCondition};

/// Plane segmentation benchmark with a fixed configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Benchmark {
    config: BenchmarkConfig,
}

impl Benchmark {
    /// Create a benchmark, rejecting thresholds outside `[0, 1]`.
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration every method runs with.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Plane-level TP/FP/FN counts under `condition`.
    pub fn statistics(
        &self,
        pred_labels: &[Label],
        gt_labels: &[Label],
        condition: TpCondition,
    ) -> Result<DetectionStatistics> {
        check_same_length(pred_labels, gt_labels)?;
        Ok(detection_statistics(
            pred_labels,
            gt_labels,
            condition,
            self.config.iou_threshold,
            self.config.unsegmented_label,
        ))
    }

    /// Share of predicted planes that match a ground truth plane.
    ///
    /// Fails when the predicted array is empty or holds only the unsegmented label.
    pub fn precision(
        &self,
        pred_labels: &[Label],
        gt_labels: &[Label],
        condition: TpCondition,
    ) -> Result<f64> {
        check_has_segments(pred_labels, LabelSide::Predicted, self.config.unsegmented_label)?;
        let stats = self.statistics(pred_labels, gt_labels, condition)?;
        Ok(default::precision(&stats))
    }

    /// Share of ground truth planes matched by a predicted plane.
    ///
    /// Fails when the ground truth array is empty or holds only the unsegmented label.
    pub fn recall(
        &self,
        pred_labels: &[Label],
        gt_labels: &[Label],
        condition: TpCondition,
    ) -> Result<f64> {
        check_has_segments(gt_labels, LabelSide::GroundTruth, self.config.unsegmented_label)?;
        let stats = self.statistics(pred_labels, gt_labels, condition)?;
        Ok(default::recall(&stats))
    }

    /// Harmonic mean of [`precision`](Self::precision) and [`recall`](Self::recall).
    pub fn f_score(
        &self,
        pred_labels: &[Label],
        gt_labels: &[Label],
        condition: TpCondition,
    ) -> Result<f64> {
        check_has_segments(pred_labels, LabelSide::Predicted, self.config.unsegmented_label)?;
        check_has_segments(gt_labels, LabelSide::GroundTruth, self.config.unsegmented_label)?;
        let stats = self.statistics(pred_labels, gt_labels, condition)?;
        Ok(default::f_score(&stats))
    }

    /// Mean over ground truth planes of the best `metric` value, see [`mean`].
    pub fn mean<F>(&self, pred_labels: &[Label], gt_labels: &[Label], metric: F) -> Result<f64>
    where
        F: Fn(&IndexSet, &IndexSet) -> f64,
    {
        check_same_length(pred_labels, gt_labels)?;
        Ok(mean(
            pred_labels,
            gt_labels,
            self.config.unsegmented_label,
            metric,
        ))
    }

    /// Point-level metrics for each label present in both segmentations.
    pub fn per_plane(
        &self,
        pred_labels: &[Label],
        gt_labels: &[Label],
    ) -> Result<BTreeMap<Label, PlaneMetrics>> {
        check_same_length(pred_labels, gt_labels)?;
        Ok(per_plane_metrics(
            pred_labels,
            gt_labels,
            self.config.unsegmented_label,
        ))
    }

    /// Multi-value benchmark at the configured overlap threshold.
    pub fn multi_value(
        &self,
        pred_labels: &[Label],
        gt_labels: &[Label],
    ) -> Result<MultiValueReport> {
        self.multi_value_with_threshold(pred_labels, gt_labels, self.config.overlap_threshold)
    }

    /// Multi-value benchmark at an explicit overlap threshold.
    pub fn multi_value_with_threshold(
        &self,
        pred_labels: &[Label],
        gt_labels: &[Label],
        overlap_threshold: f64,
    ) -> Result<MultiValueReport> {
        check_threshold("overlap_threshold", overlap_threshold)?;
        check_same_length(pred_labels, gt_labels)?;
        Ok(multi_value(
            pred_labels,
            gt_labels,
            overlap_threshold,
            self.config.unsegmented_label,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use planeseg_core::plane_metrics::recall;
    use planeseg_core::{iou, Error};

    fn benchmark(iou_threshold: f64) -> Benchmark {
        Benchmark::new(BenchmarkConfig::default().with_iou_threshold(iou_threshold)).unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = BenchmarkConfig::default().with_overlap_threshold(2.0);
        assert!(matches!(
            Benchmark::new(config),
            Err(Error::InvalidThreshold {
                name: "overlap_threshold",
                ..
            })
        ));
    }

    #[test]
    fn statistics_require_equal_lengths() {
        let err = benchmark(0.75)
            .statistics(&[1, 2], &[1, 2, 3], TpCondition::Iou)
            .unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch {
                predicted: 2,
                ground_truth: 3
            }
        );
    }

    #[test]
    fn precision_rejects_empty_prediction() {
        let err = benchmark(0.75)
            .precision(&[], &[], TpCondition::Iou)
            .unwrap_err();
        assert_eq!(err, Error::EmptyInput(LabelSide::Predicted));
    }

    #[test]
    fn f_score_checks_both_sides() {
        let b = benchmark(0.75);
        assert_eq!(
            b.f_score(&[0, 0], &[1, 1], TpCondition::Iou),
            Err(Error::AllUnsegmented(LabelSide::Predicted))
        );
        assert_eq!(
            b.f_score(&[1, 1], &[0, 0], TpCondition::Iou),
            Err(Error::AllUnsegmented(LabelSide::GroundTruth))
        );
    }

    #[test]
    fn multi_value_uses_configured_threshold() {
        // predicted plane covers 4 of 5 ground truth points: IoU 0.8
        let pred = [1, 1, 1, 1, 0];
        let gt = [1, 1, 1, 1, 1];

        let strict =
            Benchmark::new(BenchmarkConfig::default().with_overlap_threshold(0.9)).unwrap();
        assert_relative_eq!(strict.multi_value(&pred, &gt).unwrap().precision, 0.0);
        assert_relative_eq!(Benchmark::default().multi_value(&pred, &gt).unwrap().precision, 1.0);
        assert_relative_eq!(
            strict
                .multi_value_with_threshold(&pred, &gt, 0.5)
                .unwrap()
                .precision,
            1.0
        );
    }

    #[test]
    fn multi_value_rejects_bad_input() {
        let b = Benchmark::default();
        assert!(b.multi_value(&[1], &[1, 1]).is_err());
        assert!(b.multi_value_with_threshold(&[1], &[1], 1.2).is_err());
    }

    #[test]
    fn mean_with_index_set_metric() {
        let b = Benchmark::default();
        assert_relative_eq!(b.mean(&[1, 1, 2, 2], &[1, 1, 2, 2], iou).unwrap(), 1.0);
        assert!(b.mean(&[1], &[], iou).is_err());
    }

    #[test]
    fn disjoint_planes_score_zero_at_zero_iou_threshold() {
        let b = benchmark(0.0);
        let (pred, gt) = ([1, 1, 0, 0], [0, 0, 2, 2]);
        assert_relative_eq!(b.precision(&pred, &gt, TpCondition::Iou).unwrap(), 0.0);
        assert_relative_eq!(b.recall(&pred, &gt, TpCondition::Iou).unwrap(), 0.0);
    }

    #[test]
    fn mean_with_plane_recall() {
        // gt 1 = {0,1,2,3} is best covered by pred 1 = {0,1} (recall 0.5)
        let b = Benchmark::default();
        assert_relative_eq!(
            b.mean(&[1, 1, 2, 0, 3, 3], &[1, 1, 1, 1, 2, 2], recall).unwrap(),
            (0.5 + 1.0) / 2.0
        );
    }

    #[test]
    fn per_plane_validates_lengths() {
        let b = Benchmark::default();
        assert!(b.per_plane(&[1, 1], &[1]).is_err());
        let scores = b.per_plane(&[1, 1, 0], &[1, 1, 1]).unwrap();
        assert_relative_eq!(scores[&1].recall, 2.0 / 3.0);
        assert_relative_eq!(scores[&1].precision, 1.0);
    }
}
