//! Generic frontier-growth search over the dual graph.
//!
//! Starting from a seed triangle, the search repeatedly claims the
//! unreached triangle behind the cheapest pending dual arc. Crossed
//! arcs form a spanning tree of the reached region; every interior
//! edge between two already-reached triangles is recorded as a cut
//! edge. On a closed mesh with `T` reachable triangles the raw cut
//! therefore has exactly `3T/2 - (T - 1)` edges.
//!
//! Priorities belong to the triangle that owns the pending arc, not to
//! a tentative distance of the triangle behind it. A policy derives the
//! claimed triangle's priority from the crossed arc once, then offers
//! both of its remaining sides at that priority.

use log::debug;

use crate::cut::frontier::DualFrontierQueue;
use crate::cut::policy::{EdgeWeightPolicy, HopDistance};
use crate::cut::Cut;
use crate::error::{CutError, Result};
use crate::mesh::{EdgeId, FaceId, TriangleMesh};

// ==================== Options ====================

/// Options controlling a cut search.
#[derive(Debug, Clone)]
pub struct CutOptions {
    /// Triangle the search grows from.
    pub seed: FaceId,
}

impl Default for CutOptions {
    fn default() -> Self {
        Self {
            seed: FaceId::new(0),
        }
    }
}

impl CutOptions {
    /// Set the seed triangle.
    pub fn with_seed(mut self, seed: FaceId) -> Self {
        self.seed = seed;
        self
    }
}

// ==================== Search state ====================

/// Mutable state of one search, handed to the active policy.
///
/// Policies read the mesh and seed from here; claiming triangles and
/// recording cut edges happens through [`advance`], which keeps the
/// reached set and the cut consistent with each other.
pub struct FrontierState<'a> {
    mesh: &'a TriangleMesh,
    seed: FaceId,
    reached: Vec<bool>,
    cut: Vec<EdgeId>,
    reached_count: usize,
}

impl<'a> FrontierState<'a> {
    fn new(mesh: &'a TriangleMesh, seed: FaceId) -> Self {
        let mut reached = vec![false; mesh.num_faces()];
        reached[seed.index()] = true;
        Self {
            mesh,
            seed,
            reached,
            cut: Vec::new(),
            reached_count: 1,
        }
    }

    /// The mesh being searched.
    #[inline]
    pub fn mesh(&self) -> &'a TriangleMesh {
        self.mesh
    }

    /// The seed triangle.
    #[inline]
    pub fn seed(&self) -> FaceId {
        self.seed
    }

    /// Check whether a triangle has been claimed.
    #[inline]
    pub fn is_reached(&self, f: FaceId) -> bool {
        self.reached[f.index()]
    }

    /// Number of triangles claimed so far, including the seed.
    #[inline]
    pub fn reached_count(&self) -> usize {
        self.reached_count
    }

    /// Cut edges recorded so far, in discovery order.
    pub fn cut_so_far(&self) -> &[EdgeId] {
        &self.cut
    }

    fn mark_reached(&mut self, f: FaceId) {
        self.reached[f.index()] = true;
        self.reached_count += 1;
    }

    fn record_cut(&mut self, e: EdgeId) {
        self.cut.push(e);
    }

    fn into_cut(self) -> Cut {
        Cut::new(self.cut)
    }
}

// ==================== Frontier step ====================

/// Claim the next triangle off the queue and update the frontier.
///
/// Pops live entries until one targets an unreached triangle, marks
/// that triangle reached, and derives its priority from the crossed
/// arc via `weight`. The claimed triangle's two remaining sides are
/// then either offered to the queue (unreached neighbor) or recorded
/// as cut edges with the stale mirror entry invalidated (reached
/// neighbor). Self-glued sides have no far triangle and are skipped.
///
/// Returns the crossed edge, or `None` once the queue is exhausted.
pub(crate) fn advance<P, W>(
    queue: &mut DualFrontierQueue<P>,
    state: &mut FrontierState<'_>,
    mut weight: W,
) -> Option<EdgeId>
where
    P: Copy + PartialOrd,
    W: FnMut(&FrontierState<'_>, EdgeId, P) -> P,
{
    let mesh = state.mesh();
    loop {
        let (edge, priority) = queue.pop_valid()?;
        let mirror = mesh.twin(edge);
        let entered = mirror.face();
        if state.is_reached(entered) {
            continue;
        }
        state.mark_reached(entered);
        let entered_priority = weight(state, edge, priority);

        for side in [mesh.prev(mirror), mesh.next(mirror)] {
            let across = mesh.twin(side);
            if across == side {
                // self-glued edge, no far triangle to claim
                continue;
            }
            if state.is_reached(across.face()) {
                state.record_cut(side.min(across));
                queue.invalidate(across);
            } else {
                queue.push(side, entered_priority);
            }
        }
        return Some(edge);
    }
}

// ==================== Entry points ====================

/// Run a cut search over a closed mesh with the given policy.
///
/// Returns the raw cut: every interior edge not crossed by the dual
/// spanning tree grown from `options.seed`. On meshes with several
/// connected components only the seed's component is searched and cut.
///
/// # Errors
/// [`CutError::UnsupportedTopology`] if the mesh has boundary edges,
/// [`CutError::InvalidSeed`] if the seed is out of range (including
/// the empty mesh), plus any error raised by the policy's `begin`.
pub fn cut_search<P: EdgeWeightPolicy>(
    mesh: &TriangleMesh,
    policy: &mut P,
    options: &CutOptions,
) -> Result<Cut> {
    let boundary_edges = mesh.boundary_edge_count();
    if boundary_edges > 0 {
        return Err(CutError::UnsupportedTopology { boundary_edges });
    }
    if options.seed.index() >= mesh.num_faces() {
        return Err(CutError::InvalidSeed {
            seed: options.seed.index(),
            faces: mesh.num_faces(),
        });
    }

    let mut state = FrontierState::new(mesh, options.seed);
    policy.begin(&mut state)?;
    while policy.select_next(&mut state).is_some() {}

    debug!(
        "cut search reached {} of {} triangles, raw cut size {}",
        state.reached_count(),
        mesh.num_faces(),
        state.cut_so_far().len()
    );
    Ok(state.into_cut())
}

/// Compute a raw cut with the hop policy and default options.
pub fn basic_cut(mesh: &TriangleMesh) -> Result<Cut> {
    cut_search(mesh, &mut HopDistance::new(), &CutOptions::default())
}
