//! Classified difference between two cuts.
//!
//! Reductions shrink a cut in place, and callers often need to know
//! which edges a pass dropped or introduced. The diff works on sorted
//! copies, so cuts compare as sets regardless of production order.

use std::cmp::Ordering;

use crate::cut::Cut;
use crate::mesh::EdgeId;

/// Edges by which a new cut differs from an old one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CutDiff {
    added: Vec<EdgeId>,
    removed: Vec<EdgeId>,
}

impl CutDiff {
    /// Classify the symmetric difference of two cuts.
    ///
    /// Edges present only in `new` are added, edges present only in
    /// `old` are removed. Both outputs are sorted.
    pub fn between(old: &Cut, new: &Cut) -> Self {
        let mut old_sorted: Vec<EdgeId> = old.edges().to_vec();
        let mut new_sorted: Vec<EdgeId> = new.edges().to_vec();
        old_sorted.sort_unstable();
        new_sorted.sort_unstable();

        let mut difference = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < old_sorted.len() && j < new_sorted.len() {
            match old_sorted[i].cmp(&new_sorted[j]) {
                Ordering::Less => {
                    difference.push(old_sorted[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    difference.push(new_sorted[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        }
        difference.extend_from_slice(&old_sorted[i..]);
        difference.extend_from_slice(&new_sorted[j..]);

        let mut added = Vec::new();
        let mut removed = Vec::new();
        for e in difference {
            if new_sorted.binary_search(&e).is_ok() {
                added.push(e);
            } else {
                removed.push(e);
            }
        }
        Self { added, removed }
    }

    /// Edges present only in the new cut.
    pub fn added(&self) -> &[EdgeId] {
        &self.added
    }

    /// Edges present only in the old cut.
    pub fn removed(&self) -> &[EdgeId] {
        &self.removed
    }

    /// Total number of differing edges.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len()
    }

    /// Check whether the cuts are equal as sets.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
