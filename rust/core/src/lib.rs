// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # PlaneSeg Core
//!
//! Building blocks for evaluating point-cloud plane segmentation.
//!
//! ## Overview
//!
//! - **Label grouping**: per-point label arrays become plane segments, one
//!   sorted index set per label, with unsegmented points dropped
//! - **Overlap tests**: IoU, Dice and the well/partial overlap classification
//!   used to match predicted planes against ground truth planes
//! - **Plane metrics**: point-level precision, recall, F-score and accuracy
//!   of one predicted plane against one ground truth plane
//! - **Configuration**: thresholds and the unsegmented label, passed
//!   explicitly instead of living in global state
//! - **Validation**: precondition checks for the validated metric entry points
//!
//! ## Quick Start
//!
//! ```rust
//! use planeseg_core::{group_by_label, overlap_kind};
//!
//! let predicted = group_by_label(&[1, 1, 2, 2, 0], 0);
//! let truth = group_by_label(&[5, 5, 5, 6, 6], 0);
//!
//! let kind = overlap_kind(
//!     predicted.get(1).unwrap(),
//!     truth.get(5).unwrap(),
//!     0.6,
//! );
//! assert!(kind.well && kind.partial);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for configuration and error sides

pub mod config;
pub mod error;
pub mod labels;
pub mod overlap;
pub mod plane_metrics;
pub mod validate;

pub use config::{
    BenchmarkConfig, DEFAULT_IOU_THRESHOLD, DEFAULT_OVERLAP_THRESHOLD, DEFAULT_UNSEGMENTED_LABEL,
};
pub use error::{Error, LabelSide, Result};
pub use labels::{group_by_label, has_segments, IndexSet, Label, SegmentGrouping};
pub use overlap::{containment, dice, iou, iou_overlapped, overlap_kind, OverlapKind};
