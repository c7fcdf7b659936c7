//! Cut-locus computation on closed triangle meshes.
//!
//! A *cut* is a set of mesh edges whose removal opens a closed surface
//! into a topological disk. The pipeline runs strictly downward:
//!
//! 1. [`cut_search`](search::cut_search) grows a spanning tree of the
//!    dual graph from a seed triangle, driven by a pluggable
//!    [`EdgeWeightPolicy`](policy::EdgeWeightPolicy); the dual edges left
//!    out of the tree form the raw cut
//! 2. [`trim`](trim::trim) removes dangling spurs from the raw cut
//! 3. [`CutGraph`](graph::CutGraph) builds an explicit graph over the cut
//!    and [`remove_chords`](graph::CutGraph::remove_chords) deletes
//!    redundant edges while validating that the complement stays a disk
//! 4. [`CutDiff`](diff::CutDiff) classifies the difference between two
//!    cuts for diagnostics
//!
//! # Organization
//!
//! - [`frontier`] - Lazy-invalidation priority queue over dual arcs
//! - [`policy`] - Hop, geodesic, and curvature edge priorities
//! - [`search`] - The generic frontier-growth search
//! - [`curvature`] - Per-vertex angular deficit densities
//! - [`trim`] - Spur removal
//! - [`graph`] - Cut graph construction and chord removal
//! - [`diff`] - Symmetric-difference classification

pub mod curvature;
pub mod diff;
pub mod frontier;
pub mod graph;
pub mod policy;
pub mod search;
pub mod trim;

pub use curvature::{vertex_deficits, vertex_deficits_sequential};
pub use diff::CutDiff;
pub use frontier::{DualFrontierQueue, FrontierEntry};
pub use graph::CutGraph;
pub use policy::{CurvatureWeighted, EdgeWeightPolicy, GeodesicDistance, HopDistance};
pub use search::{basic_cut, cut_search, CutOptions, FrontierState};
pub use trim::trim;

use crate::mesh::{EdgeId, TriangleMesh};

/// Resolve a directed edge to its canonical representative.
///
/// Every undirected mesh edge has up to two directed slots; the canonical
/// one is the smaller index. Boundary edges (no twin) are their own
/// representative.
pub fn canonical_edge(mesh: &TriangleMesh, e: EdgeId) -> EdgeId {
    let twin = mesh.twin(e);
    if twin.is_valid() && twin < e {
        twin
    } else {
        e
    }
}

/// A set of mesh edges cutting a surface open.
///
/// Every stored edge is canonical (see [`canonical_edge`]); the mirror
/// directed slot is derived on demand. The order of edges reflects the
/// pass that produced them: search output lists cut edges in discovery
/// order, trimming and chord removal preserve relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cut {
    edges: Vec<EdgeId>,
}

impl Cut {
    pub(crate) fn new(edges: Vec<EdgeId>) -> Self {
        Self { edges }
    }

    /// The cut edges, canonical and in production order.
    #[inline]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Number of cut edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check whether the cut has no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Check whether a canonical edge is part of the cut.
    pub fn contains(&self, e: EdgeId) -> bool {
        self.edges.contains(&e)
    }

    /// Iterate over the cut edges.
    pub fn iter(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().copied()
    }

    /// The cut as raw edge indices, the persisted round-trip form.
    pub fn indices(&self) -> Vec<u32> {
        self.edges.iter().map(|e| e.raw()).collect()
    }

    /// Rebuild a cut from raw edge indices.
    ///
    /// Indices may name either directed slot of an edge; they are
    /// canonicalized, sorted, and deduplicated.
    ///
    /// # Panics
    /// Panics if an index is not a valid directed-edge slot of `mesh`.
    pub fn from_indices(mesh: &TriangleMesh, indices: &[u32]) -> Self {
        let mut edges: Vec<EdgeId> = indices
            .iter()
            .map(|&i| {
                assert!(
                    (i as usize) < mesh.num_edges(),
                    "edge index {} out of range ({} directed edges)",
                    i,
                    mesh.num_edges()
                );
                canonical_edge(mesh, EdgeId::new(i as usize))
            })
            .collect();
        edges.sort_unstable();
        edges.dedup();
        Self { edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::build_from_triangles;
    use nalgebra::Point3;

    fn octahedron() -> TriangleMesh {
        let vertices = vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, -1.0),
        ];
        let faces = vec![
            [0, 2, 4],
            [2, 1, 4],
            [1, 3, 4],
            [3, 0, 4],
            [2, 0, 5],
            [1, 2, 5],
            [3, 1, 5],
            [0, 3, 5],
        ];
        build_from_triangles(&vertices, &faces).unwrap()
    }

    #[test]
    fn test_canonical_edge() {
        let mesh = octahedron();
        let e = EdgeId::new(0);
        let twin = mesh.twin(e);
        assert!(twin.index() > 0);
        assert_eq!(canonical_edge(&mesh, e), e);
        assert_eq!(canonical_edge(&mesh, twin), e);
    }

    #[test]
    fn test_from_indices_canonicalizes() {
        let mesh = octahedron();
        let twin = mesh.twin(EdgeId::new(0));
        // both slots of the same edge collapse to one canonical entry
        let cut = Cut::from_indices(&mesh, &[twin.raw(), 0]);
        assert_eq!(cut.edges(), &[EdgeId::new(0)]);
    }

    #[test]
    fn test_indices_round_trip() {
        let mesh = octahedron();
        let cut = Cut::from_indices(&mesh, &[4, 2, 9]);
        let rebuilt = Cut::from_indices(&mesh, &cut.indices());
        assert_eq!(rebuilt, cut);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_from_indices_out_of_range() {
        let mesh = octahedron();
        Cut::from_indices(&mesh, &[24]);
    }
}
