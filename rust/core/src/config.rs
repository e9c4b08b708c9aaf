// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Benchmark configuration.

use crate::error::Result;
use crate::labels::Label;
use crate::validate::check_threshold;

/// Default IoU threshold for single-pair true positive tests.
pub const DEFAULT_IOU_THRESHOLD: f64 = 0.5;

/// Default threshold for the multi-value overlap matching.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.8;

/// Default label for points not assigned to any plane.
pub const DEFAULT_UNSEGMENTED_LABEL: Label = 0;

/// Thresholds and sentinel shared by every metric in one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkConfig {
    /// Minimum IoU for a predicted/ground truth plane pair to count as a true positive.
    pub iou_threshold: f64,
    /// Minimum ratio used by the multi-value benchmark overlap test.
    pub overlap_threshold: f64,
    /// Label marking points that belong to no plane.
    pub unsegmented_label: Label,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iou_threshold: DEFAULT_IOU_THRESHOLD,
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
            unsegmented_label: DEFAULT_UNSEGMENTED_LABEL,
        }
    }
}

impl BenchmarkConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `PLANESEG_IOU_THRESHOLD`, `PLANESEG_OVERLAP_THRESHOLD` and
    /// `PLANESEG_UNSEGMENTED_LABEL`; unset or unparsable values fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key/value source, see [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            iou_threshold: parse_or(&lookup, "PLANESEG_IOU_THRESHOLD", defaults.iou_threshold),
            overlap_threshold: parse_or(
                &lookup,
                "PLANESEG_OVERLAP_THRESHOLD",
                defaults.overlap_threshold,
            ),
            unsegmented_label: parse_or(
                &lookup,
                "PLANESEG_UNSEGMENTED_LABEL",
                defaults.unsegmented_label,
            ),
        }
    }

    pub fn with_iou_threshold(mut self, threshold: f64) -> Self {
        self.iou_threshold = threshold;
        self
    }

    pub fn with_overlap_threshold(mut self, threshold: f64) -> Self {
        self.overlap_threshold = threshold;
        self
    }

    pub fn with_unsegmented_label(mut self, label: Label) -> Self {
        self.unsegmented_label = label;
        self
    }

    /// Check that both thresholds lie in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_threshold("iou_threshold", self.iou_threshold)?;
        check_threshold("overlap_threshold", self.overlap_threshold)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key).map(|value| value.trim().parse()) {
        Some(Ok(parsed)) => parsed,
        Some(Err(_)) => {
            tracing::warn!(key, "Unparsable configuration value, using default");
            default
        }
        None => default,
    }
}
