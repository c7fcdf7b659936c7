//! Edge-priority policies for the frontier search.
//!
//! A policy owns the frontier queue and decides in which order pending
//! dual arcs are taken. All policies share the claim/record logic in
//! [`advance`](super::search); they differ only in how a claimed
//! triangle's priority is derived from the crossed arc:
//!
//! - [`HopDistance`] counts dual hops from the seed
//! - [`GeodesicDistance`] accumulates centroid-to-centroid lengths
//! - [`CurvatureWeighted`] ranks triangles by absolute mean vertex
//!   deficit, so flat regions are claimed first and the cut settles
//!   into curved ones

use crate::cut::curvature::vertex_deficits;
use crate::cut::frontier::DualFrontierQueue;
use crate::cut::search::{advance, FrontierState};
use crate::error::{CutError, Result};
use crate::mesh::EdgeId;

// ==================== Policy trait ====================

/// Priority strategy plugged into [`cut_search`](super::cut_search).
///
/// `begin` runs once after the seed triangle is marked reached; it
/// sizes the queue and offers the seed's three sides. `select_next`
/// claims one triangle per call and returns the crossed edge, or
/// `None` when the frontier is exhausted.
pub trait EdgeWeightPolicy {
    /// Prepare per-search state and offer the seed's sides.
    fn begin(&mut self, state: &mut FrontierState<'_>) -> Result<()>;

    /// Claim the next triangle, returning the crossed edge.
    fn select_next(&mut self, state: &mut FrontierState<'_>) -> Option<EdgeId>;
}

// ==================== Hop distance ====================

/// Breadth-first policy: a triangle's priority is its dual hop count
/// from the seed.
#[derive(Debug)]
pub struct HopDistance {
    queue: DualFrontierQueue<u32>,
}

impl HopDistance {
    /// Create a hop policy.
    pub fn new() -> Self {
        Self {
            queue: DualFrontierQueue::new(0),
        }
    }
}

impl Default for HopDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeWeightPolicy for HopDistance {
    fn begin(&mut self, state: &mut FrontierState<'_>) -> Result<()> {
        self.queue = DualFrontierQueue::new(state.mesh().num_edges());
        for edge in state.seed().edges() {
            self.queue.push(edge, 0);
        }
        Ok(())
    }

    fn select_next(&mut self, state: &mut FrontierState<'_>) -> Option<EdgeId> {
        advance(&mut self.queue, state, |_state, _edge, priority| {
            priority + 1
        })
    }
}

// ==================== Geodesic distance ====================

/// Metric policy: a triangle's priority is the accumulated length of
/// the centroid path from the seed.
#[derive(Debug)]
pub struct GeodesicDistance {
    queue: DualFrontierQueue<f64>,
}

impl GeodesicDistance {
    /// Create a geodesic policy.
    pub fn new() -> Self {
        Self {
            queue: DualFrontierQueue::new(0),
        }
    }
}

impl Default for GeodesicDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeWeightPolicy for GeodesicDistance {
    fn begin(&mut self, state: &mut FrontierState<'_>) -> Result<()> {
        self.queue = DualFrontierQueue::new(state.mesh().num_edges());
        for edge in state.seed().edges() {
            self.queue.push(edge, 0.0);
        }
        Ok(())
    }

    fn select_next(&mut self, state: &mut FrontierState<'_>) -> Option<EdgeId> {
        advance(&mut self.queue, state, |state, edge, priority| {
            let mesh = state.mesh();
            let from = mesh.face_centroid(edge.face());
            let to = mesh.face_centroid(mesh.twin(edge).face());
            priority + (to - from).norm()
        })
    }
}

// ==================== Curvature weighted ====================

/// Curvature policy: a triangle's priority is the absolute mean
/// angular deficit of its three vertices.
///
/// Unlike the other policies the priority is not accumulated along the
/// path, so the frontier always claims the flattest pending triangle
/// and the cut is pushed toward high-curvature regions.
#[derive(Debug)]
pub struct CurvatureWeighted {
    queue: DualFrontierQueue<f64>,
    provided: Option<Vec<f64>>,
    computed: Vec<f64>,
}

impl CurvatureWeighted {
    /// Create a curvature policy that computes deficits itself.
    pub fn new() -> Self {
        Self {
            queue: DualFrontierQueue::new(0),
            provided: None,
            computed: Vec::new(),
        }
    }

    /// Use precomputed per-vertex deficits instead of computing them.
    ///
    /// The slice length is validated against the mesh when the search
    /// begins.
    pub fn with_deficits(mut self, deficits: Vec<f64>) -> Self {
        self.provided = Some(deficits);
        self
    }
}

impl Default for CurvatureWeighted {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeWeightPolicy for CurvatureWeighted {
    fn begin(&mut self, state: &mut FrontierState<'_>) -> Result<()> {
        let mesh = state.mesh();
        match &self.provided {
            Some(deficits) if deficits.len() != mesh.num_vertices() => {
                return Err(CutError::InconsistentVertexCount {
                    expected: mesh.num_vertices(),
                    actual: deficits.len(),
                });
            }
            Some(_) => {}
            None => self.computed = vertex_deficits(mesh),
        }
        self.queue = DualFrontierQueue::new(mesh.num_edges());
        for edge in state.seed().edges() {
            self.queue.push(edge, 0.0);
        }
        Ok(())
    }

    fn select_next(&mut self, state: &mut FrontierState<'_>) -> Option<EdgeId> {
        let deficits = self.provided.as_deref().unwrap_or(self.computed.as_slice());
        advance(&mut self.queue, state, |state, edge, _priority| {
            let mesh = state.mesh();
            let entered = mesh.twin(edge).face();
            let [a, b, c] = mesh.face_vertices(entered);
            let mean =
                (deficits[a.index()] + deficits[b.index()] + deficits[c.index()]) / 3.0;
            mean.abs()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cut::graph::CutGraph;
    use crate::cut::search::{cut_search, CutOptions};
    use crate::cut::trim::trim;
    use crate::cut::Cut;
    use crate::mesh::{build_from_triangles, FaceId, TriangleMesh};
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

    /// Octahedron stretched along x with three off-center vertices
    /// splitting four of its faces. The skewed metric separates every
    /// pair of frontier priorities, so the geodesic claim order (and
    /// with it the cut) is the same for every heap tie-break, while no
    /// breadth-first claim order can reproduce it.
    fn stretched_fixture() -> TriangleMesh {
        let vertices = vec![
            Point3::new(2.200, 0.0, 0.0),
            Point3::new(-2.200, 0.0, 0.0),
            Point3::new(0.0, 1.000, 0.0),
            Point3::new(0.0, -1.000, 0.0),
            Point3::new(0.0, 0.0, 0.700),
            Point3::new(0.0, 0.0, -0.700),
            Point3::new(-0.133, 0.665, -0.488),
            Point3::new(-0.074, 0.250, -0.633),
            Point3::new(-0.082, 0.531, 0.381),
        ];
        let faces = vec![
            [1, 3, 4],
            [3, 0, 4],
            [3, 1, 5],
            [0, 3, 5],
            [6, 2, 0],
            [2, 6, 1],
            [6, 7, 1],
            [7, 5, 1],
            [5, 7, 0],
            [7, 6, 0],
            [4, 8, 1],
            [8, 2, 1],
            [2, 8, 0],
            [8, 4, 0],
        ];
        build_from_triangles(&vertices, &faces).unwrap()
    }

    fn sorted_indices(cut: &Cut) -> Vec<u32> {
        let mut indices = cut.indices();
        indices.sort_unstable();
        indices
    }

    #[test]
    fn test_hop_raw_cut_on_octahedron() {
        let mesh = octahedron();
        let cut = cut_search(&mesh, &mut HopDistance::new(), &CutOptions::default()).unwrap();
        assert_eq!(cut.len(), 5);
    }

    #[test]
    fn test_geodesic_raw_cut_on_octahedron() {
        let mesh = octahedron();
        let cut =
            cut_search(&mesh, &mut GeodesicDistance::new(), &CutOptions::default()).unwrap();
        assert_eq!(cut.len(), 5);
    }

    #[test]
    fn test_curvature_raw_cut_on_octahedron() {
        let mesh = octahedron();
        let cut =
            cut_search(&mesh, &mut CurvatureWeighted::new(), &CutOptions::default()).unwrap();
        assert_eq!(cut.len(), 5);
    }

    #[test]
    fn test_curvature_accepts_precomputed_deficits() {
        let mesh = octahedron();
        let deficits = vertex_deficits(&mesh);
        let mut policy = CurvatureWeighted::new().with_deficits(deficits);
        let cut = cut_search(&mesh, &mut policy, &CutOptions::default()).unwrap();
        assert_eq!(cut.len(), 5);
    }

    #[test]
    fn test_curvature_rejects_wrong_deficit_count() {
        let mesh = octahedron();
        let mut policy = CurvatureWeighted::new().with_deficits(vec![0.0; 3]);
        let result = cut_search(&mesh, &mut policy, &CutOptions::default());
        assert!(matches!(
            result,
            Err(CutError::InconsistentVertexCount {
                expected: 6,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_cube_hop_and_geodesic_cuts_differ_and_reduce_to_disks() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ];
        let faces = vec![
            [0, 3, 2],
            [0, 2, 1],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [1, 2, 6],
            [1, 6, 5],
            [2, 3, 7],
            [2, 7, 6],
            [3, 0, 4],
            [3, 4, 7],
        ];
        let mesh = build_from_triangles(&vertices, &faces).unwrap();

        // 12 triangles, 18 undirected edges, 11 tree arcs
        let options = CutOptions::default();
        let hop = cut_search(&mesh, &mut HopDistance::new(), &options).unwrap();
        let geodesic = cut_search(&mesh, &mut GeodesicDistance::new(), &options).unwrap();
        assert_eq!(hop.len(), 7);
        assert_eq!(geodesic.len(), 7);
        // the diagonal face split mixes centroid steps of sqrt(2)/3 and
        // sqrt(3)/3, pulling the geodesic claim order off the hop order
        assert_ne!(sorted_indices(&hop), sorted_indices(&geodesic));

        for cut in [&hop, &geodesic] {
            let mut graph = CutGraph::from_cut(&mesh, cut);
            graph.remove_chords().unwrap();
            assert_eq!(graph.complement_characteristic(), 1);
        }
    }

    #[test]
    fn test_geodesic_cut_is_deterministic_on_stretched_fixture() {
        let mesh = stretched_fixture();
        let options = CutOptions::default().with_seed(FaceId::new(7));
        let cut = cut_search(&mesh, &mut GeodesicDistance::new(), &options).unwrap();
        assert_eq!(sorted_indices(&cut), vec![2, 3, 4, 11, 13, 14, 25, 37]);
    }

    #[test]
    fn test_hop_and_geodesic_disagree_on_stretched_fixture() {
        let mesh = stretched_fixture();
        let options = CutOptions::default().with_seed(FaceId::new(7));
        let hop = cut_search(&mesh, &mut HopDistance::new(), &options).unwrap();
        let geodesic = cut_search(&mesh, &mut GeodesicDistance::new(), &options).unwrap();
        // 14 triangles, 21 undirected edges, 13 tree arcs
        assert_eq!(hop.len(), 8);
        assert_eq!(geodesic.len(), 8);
        assert_ne!(sorted_indices(&hop), sorted_indices(&geodesic));
    }

    #[test]
    fn test_stretched_fixture_geodesic_cut_trims_to_one_edge() {
        let mesh = stretched_fixture();
        let options = CutOptions::default().with_seed(FaceId::new(7));
        let cut = cut_search(&mesh, &mut GeodesicDistance::new(), &options).unwrap();
        let trimmed = trim(&mesh, &cut);
        assert_eq!(trimmed.indices(), vec![37]);
    }
}
