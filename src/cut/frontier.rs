//! Lazy-invalidation priority queue over dual-graph arcs.
//!
//! The frontier search pushes one entry per directed edge and never
//! updates priorities in place. Instead a validity bitmap marks entries
//! dead when their target triangle is claimed through another edge;
//! dead entries are skipped on pop. On closed meshes each directed edge
//! is offered at most once, so the heap stays linear in the edge count.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::mesh::EdgeId;

/// A prioritized dual arc: crossing `edge` enters the triangle on the
/// far side of it.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry<P> {
    /// Directed edge owned by the already-reached triangle.
    pub edge: EdgeId,
    /// Accumulated priority of the owning triangle.
    pub priority: P,
}

impl<P: PartialOrd> PartialEq for FrontierEntry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<P: PartialOrd> Eq for FrontierEntry<P> {}

impl<P: PartialOrd> PartialOrd for FrontierEntry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: PartialOrd> Ord for FrontierEntry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
    }
}

/// Min-heap of [`FrontierEntry`] values with lazy invalidation.
#[derive(Debug)]
pub struct DualFrontierQueue<P> {
    heap: BinaryHeap<FrontierEntry<P>>,
    live: Vec<bool>,
}

impl<P: PartialOrd> DualFrontierQueue<P> {
    /// Create a queue for a mesh with `edge_count` directed edges.
    pub fn new(edge_count: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: vec![false; edge_count],
        }
    }

    /// Push an edge with the priority of its owning triangle.
    pub fn push(&mut self, edge: EdgeId, priority: P) {
        self.live[edge.index()] = true;
        self.heap.push(FrontierEntry { edge, priority });
    }

    /// Pop the lowest-priority live entry, skipping invalidated ones.
    ///
    /// The popped edge is marked dead so a later stale duplicate cannot
    /// resurface.
    pub fn pop_valid(&mut self) -> Option<(EdgeId, P)> {
        while let Some(entry) = self.heap.pop() {
            let slot = entry.edge.index();
            if self.live[slot] {
                self.live[slot] = false;
                return Some((entry.edge, entry.priority));
            }
        }
        None
    }

    /// Mark a pending entry dead without removing it from the heap.
    pub fn invalidate(&mut self, edge: EdgeId) {
        self.live[edge.index()] = false;
    }

    /// Check whether the heap holds no entries, live or dead.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of heap entries, including dead ones.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
