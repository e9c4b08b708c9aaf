// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Reference scenarios for the validated benchmark entry points
use approx::assert_relative_eq;
use planeseg_metrics::{Benchmark, BenchmarkConfig, Error, LabelSide, TpCondition};

fn benchmark(iou_threshold: f64) -> Benchmark {
    Benchmark::new(
        BenchmarkConfig::default()
            .with_iou_threshold(iou_threshold)
            .with_unsegmented_label(0),
    )
    .unwrap()
}

#[test]
fn test_full_precision() {
    let b = benchmark(0.75);
    assert_relative_eq!(b.precision(&[1, 2, 3, 4], &[1, 2, 3, 4], TpCondition::Iou).unwrap(), 1.0);
}

#[test]
fn test_null_precision() {
    let b = benchmark(0.75);
    assert_relative_eq!(b.precision(&[1, 1, 1, 1], &[0, 0, 0, 0], TpCondition::Iou).unwrap(), 0.0);
}

#[test]
fn test_half_precision() {
    let b = benchmark(0.75);
    assert_relative_eq!(b.precision(&[1, 1, 3, 3], &[2, 2, 0, 3], TpCondition::Iou).unwrap(), 0.5);
}

#[test]
fn test_precision_only_unsegmented_prediction() {
    let b = benchmark(0.75);
    let err = b.precision(&[0, 0, 0, 0], &[1, 1, 1, 1], TpCondition::Iou).unwrap_err();
    assert_eq!(err, Error::AllUnsegmented(LabelSide::Predicted));
    assert_eq!(
        err.to_string(),
        "incorrect predicted label array values, most likely no labels other than the unsegmented label"
    );
}

#[test]
fn test_null_recall() {
    let b = benchmark(0.75);
    assert_relative_eq!(b.recall(&[1, 1, 1, 1], &[1, 2, 3, 4], TpCondition::Iou).unwrap(), 0.0);
}

#[test]
fn test_full_recall() {
    let b = benchmark(0.75);
    assert_relative_eq!(b.recall(&[1, 2, 3, 4], &[5, 6, 7, 8], TpCondition::Iou).unwrap(), 1.0);
}

#[test]
fn test_full_recall_with_two_planes() {
    let b = benchmark(0.75);
    assert_relative_eq!(b.recall(&[1, 1, 2, 2], &[2, 2, 3, 3], TpCondition::Iou).unwrap(), 1.0);
}

#[test]
fn test_half_recall() {
    let b = benchmark(0.75);
    assert_relative_eq!(b.recall(&[2, 2, 0, 3], &[1, 1, 3, 3], TpCondition::Iou).unwrap(), 0.5);
}

#[test]
fn test_recall_only_unsegmented_ground_truth() {
    let b = benchmark(0.75);
    assert_eq!(
        b.recall(&[1, 1, 1, 1], &[0, 0, 0, 0], TpCondition::Iou),
        Err(Error::AllUnsegmented(LabelSide::GroundTruth))
    );
}

#[test]
fn test_full_f_score() {
    let b = benchmark(0.75);
    assert_relative_eq!(b.f_score(&[1, 2, 3, 4], &[5, 6, 7, 8], TpCondition::Iou).unwrap(), 1.0);
}

#[test]
fn test_almost_half_f_score() {
    let b = benchmark(0.75);
    let f = b.f_score(&[1, 1, 2, 3], &[4, 5, 6, 7], TpCondition::Iou).unwrap();
    assert_relative_eq!(f, 0.57, epsilon = 0.01);
}

#[test]
fn test_condition_from_string() {
    let b = benchmark(0.75);
    let condition = "iou".parse().unwrap();
    assert_relative_eq!(b.precision(&[1, 2], &[1, 2], condition).unwrap(), 1.0);
    assert!("area".parse::<TpCondition>().is_err());
}

#[test]
fn test_multi_value_perfect_and_total_miss() {
    let b = Benchmark::default();

    let perfect = b.multi_value(&[1, 2, 3, 4], &[1, 2, 3, 4]).unwrap();
    assert_relative_eq!(perfect.precision, 1.0);
    assert_relative_eq!(perfect.recall, 1.0);
    assert_relative_eq!(perfect.under_segmented + perfect.over_segmented, 0.0);
    assert_relative_eq!(perfect.missed + perfect.noise, 0.0);

    let miss = b.multi_value(&[1, 1, 0, 0], &[0, 0, 2, 2]).unwrap();
    assert_relative_eq!(miss.precision, 0.0);
    assert_relative_eq!(miss.recall, 0.0);
    assert_relative_eq!(miss.missed, 1.0);
    assert_relative_eq!(miss.noise, 1.0);
}

#[test]
fn test_multi_value_degenerate_groupings_are_zero() {
    let b = Benchmark::default();
    let report = b.multi_value(&[0, 0, 0], &[0, 0, 0]).unwrap();

    for value in [
        report.precision,
        report.recall,
        report.under_segmented,
        report.over_segmented,
        report.missed,
        report.noise,
    ] {
        assert!(!value.is_nan());
        assert_relative_eq!(value, 0.0);
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_report_serializes_six_rates() {
    let report = Benchmark::default().multi_value(&[1, 1], &[1, 1]).unwrap();
    let json = serde_json::to_value(report).unwrap();
    let object = json.as_object().unwrap();

    assert_eq!(object.len(), 6);
    assert_eq!(object["precision"], 1.0);
    assert_eq!(object["noise"], 0.0);
}
