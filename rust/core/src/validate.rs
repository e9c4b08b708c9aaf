// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input checks run before a metric is computed.

use crate::error::{Error, LabelSide, Result};
use crate::labels::{has_segments, Label};

/// A threshold must be a number in `[0, 1]`.
pub fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidThreshold { name, value })
    }
}

/// Both label arrays must describe the same points.
pub fn check_same_length(predicted: &[Label], ground_truth: &[Label]) -> Result<()> {
    if predicted.len() != ground_truth.len() {
        tracing::debug!(
            predicted = predicted.len(),
            ground_truth = ground_truth.len(),
            "Rejected label arrays of different length"
        );
        return Err(Error::LengthMismatch {
            predicted: predicted.len(),
            ground_truth: ground_truth.len(),
        });
    }
    Ok(())
}

/// The array must be non-empty and hold at least one real plane label.
pub fn check_has_segments(
    labels: &[Label],
    side: LabelSide,
    unsegmented_label: Label,
) -> Result<()> {
    if labels.is_empty() {
        return Err(Error::EmptyInput(side));
    }
    if !has_segments(labels, unsegmented_label) {
        tracing::debug!(%side, unsegmented_label, "Label array holds only the unsegmented label");
        return Err(Error::AllUnsegmented(side));
    }
    Ok(())
}
