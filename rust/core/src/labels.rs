// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Label Grouping Module
//!
//! Turns a flat per-point label array into plane segments: one index set per
//! label, with points carrying the unsegmented label left out.
//!
//! Index sets are kept sorted and duplicate-free so that intersection and
//! union sizes are a single linear merge.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

/// Plane label assigned to a point.
pub type Label = i32;

/// Sorted, duplicate-free set of point indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IndexSet(Vec<usize>);

impl IndexSet {
    /// Create an empty index set
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an index strictly greater than every index already present.
    ///
    /// Grouping visits points in ascending order, so it can build sets
    /// without sorting afterwards.
    fn push_ascending(&mut self, index: usize) {
        debug_assert!(self.0.last().map_or(true, |&last| last < index));
        self.0.push(index);
    }

    /// Number of indices in the set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set holds no indices
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Indices in ascending order
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Check whether `index` is in the set
    pub fn contains(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }

    /// Size of the intersection with `other`.
    pub fn intersection_len(&self, other: &IndexSet) -> usize {
        let (a, b) = (self.as_slice(), other.as_slice());
        let (mut i, mut j, mut count) = (0, 0, 0);

        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    count += 1;
                    i += 1;
                    j += 1;
                }
            }
        }

        count
    }

    /// Size of the union with `other`.
    pub fn union_len(&self, other: &IndexSet) -> usize {
        self.len() + other.len() - self.intersection_len(other)
    }
}

impl From<Vec<usize>> for IndexSet {
    fn from(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self(indices)
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Plane segments keyed by label.
///
/// Sets for distinct labels are disjoint since every point carries exactly
/// one label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentGrouping {
    segments: FxHashMap<Label, IndexSet>,
}

impl SegmentGrouping {
    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if there are no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the index set for a label
    pub fn get(&self, label: Label) -> Option<&IndexSet> {
        self.segments.get(&label)
    }

    /// Check if a segment exists for `label`
    pub fn contains_label(&self, label: Label) -> bool {
        self.segments.contains_key(&label)
    }

    /// Iterate segments in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (Label, &IndexSet)> {
        self.segments.iter().map(|(&label, set)| (label, set))
    }

    /// Segments ordered by label
    pub fn sorted(&self) -> Vec<(Label, &IndexSet)> {
        let mut segments: Vec<_> = self.iter().collect();
        segments.sort_unstable_by_key(|&(label, _)| label);
        segments
    }
}

/// Group point indices by label, dropping points labelled `unsegmented_label`.
///
/// # Arguments
/// * `labels` - One label per point
/// * `unsegmented_label` - Sentinel meaning "not assigned to any plane"
///
/// # Returns
/// A grouping with one segment per distinct non-sentinel label
pub fn group_by_label(labels: &[Label], unsegmented_label: Label) -> SegmentGrouping {
    let mut segments: FxHashMap<Label, IndexSet> = FxHashMap::default();

    for (index, &label) in labels.iter().enumerate() {
        if label == unsegmented_label {
            continue;
        }
        segments.entry(label).or_default().push_ascending(index);
    }

    SegmentGrouping { segments }
}

/// Check whether any label other than `unsegmented_label` occurs.
pub fn has_segments(labels: &[Label], unsegmented_label: Label) -> bool {
    labels.iter().any(|&label| label != unsegmented_label)
}
