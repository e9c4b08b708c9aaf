// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # PlaneSeg Metrics
//!
//! Benchmarks comparing a predicted plane segmentation of a point cloud
//! against ground truth labels.
//!
//! - [`multi_value`]: overlap matching of every predicted plane against every
//!   ground truth plane, reported as precision, recall, under-segmentation,
//!   over-segmentation, missed and noise rates
//! - [`detection_statistics`] with [`default::precision`],
//!   [`default::recall`] and [`default::f_score`]: plane-level detection
//!   scores under a true positive rule
//! - [`mean`]: average of any per-plane metric over the ground truth planes
//! - [`per_plane_metrics`]: point-level precision, accuracy, recall and
//!   F-score for each label shared by both segmentations
//! - [`Benchmark`]: the same operations with input validation and one shared
//!   [`BenchmarkConfig`]
//!
//! ```rust
//! use planeseg_metrics::{Benchmark, BenchmarkConfig};
//!
//! let benchmark = Benchmark::new(BenchmarkConfig::default()).unwrap();
//! let report = benchmark.multi_value(&[1, 1, 2, 2], &[3, 3, 4, 4]).unwrap();
//!
//! assert_eq!(report.precision, 1.0);
//! assert_eq!(report.noise, 0.0);
//! ```

pub mod benchmark;
pub mod default;
pub mod mean;
pub mod multi_value;
pub mod per_plane;
pub mod statistics;

pub use benchmark::Benchmark;
pub use mean::mean;
pub use multi_value::{multi_value, MultiValueReport};
pub use per_plane::{per_plane_metrics, PlaneMetrics};
pub use statistics::{detection_statistics, DetectionStatistics, TpCondition};

pub use planeseg_core::{
    dice, group_by_label, iou, BenchmarkConfig, Error, IndexSet, Label, LabelSide, Result,
};
