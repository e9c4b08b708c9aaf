// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for input validation.
//!
//! Only the validation layer produces these. The matching and metric
//! functions themselves are total: degenerate ratios evaluate to zero.

use std::fmt;

/// Result type alias for validated benchmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two label arrays an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelSide {
    Predicted,
    GroundTruth,
}

impl LabelSide {
    /// Returns the side name as used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelSide::Predicted => "predicted",
            LabelSide::GroundTruth => "ground truth",
        }
    }
}

impl fmt::Display for LabelSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised when benchmark inputs violate their preconditions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Predicted and ground truth label arrays describe different clouds.
    #[error("label arrays differ in length: {predicted} predicted vs {ground_truth} ground truth")]
    LengthMismatch { predicted: usize, ground_truth: usize },

    /// A label array that must be non-empty is empty.
    #[error("{0} label array size must not be zero")]
    EmptyInput(LabelSide),

    /// A label array holds nothing but the unsegmented label.
    #[error("incorrect {0} label array values, most likely no labels other than the unsegmented label")]
    AllUnsegmented(LabelSide),

    /// A configured threshold is NaN or outside `[0, 1]`.
    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// A true-positive condition selector names no known condition.
    #[error("unknown true positive condition: {0:?}")]
    UnknownTpCondition(String),
}
