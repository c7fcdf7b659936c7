//! Spur removal from raw cuts.
//!
//! A raw cut is the complement of a dual spanning tree and usually
//! carries long dangling chains that end at a degree-1 vertex. Those
//! chains slit the surface without changing which regions it falls
//! into, so they are peeled off before the cut is inspected further.

use log::debug;

use crate::cut::Cut;
use crate::mesh::{EdgeId, TriangleMesh};

/// Remove dangling spurs from a cut.
///
/// An edge is a spur when exactly one of its endpoints has degree 1
/// within the cut. Degrees are updated as edges are dropped, so chains
/// peel inward until a fixed point is reached; isolated edges, whose
/// endpoints both have degree 1, survive. The result preserves input
/// order and trimming an already trimmed cut returns it unchanged.
///
/// # Panics
/// Panics if the cut names an edge outside `mesh`. Cuts are only
/// meaningful for the mesh they were computed on.
pub fn trim(mesh: &TriangleMesh, cut: &Cut) -> Cut {
    let mut degree = vec![0u32; mesh.num_vertices()];
    for e in cut.iter() {
        let (a, b) = mesh.endpoints(e);
        degree[a.index()] += 1;
        degree[b.index()] += 1;
    }

    let mut alive = vec![true; cut.len()];
    let mut changed = true;
    while changed {
        changed = false;
        for (slot, e) in cut.iter().enumerate() {
            if !alive[slot] {
                continue;
            }
            let (a, b) = mesh.endpoints(e);
            if (degree[a.index()] == 1) != (degree[b.index()] == 1) {
                alive[slot] = false;
                degree[a.index()] -= 1;
                degree[b.index()] -= 1;
                changed = true;
            }
        }
    }

    let kept: Vec<EdgeId> = cut
        .iter()
        .zip(alive)
        .filter_map(|(e, keep)| keep.then_some(e))
        .collect();
    debug!(
        "trim removed {} of {} cut edges",
        cut.len() - kept.len(),
        cut.len()
    );
    Cut::new(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cut::search::basic_cut;
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
    fn test_tree_cut_trims_to_one_edge() {
        let mesh = octahedron();
        let raw = basic_cut(&mesh).unwrap();
        // the raw cut of a sphere is a tree; peeling leaves one edge
        let trimmed = trim(&mesh, &raw);
        assert_eq!(trimmed.len(), 1);
    }

    #[test]
    fn test_trim_is_idempotent() {
        let mesh = octahedron();
        let raw = basic_cut(&mesh).unwrap();
        let once = trim(&mesh, &raw);
        let twice = trim(&mesh, &once);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_trim_output_is_subset_in_order() {
        let mesh = octahedron();
        let raw = basic_cut(&mesh).unwrap();
        let trimmed = trim(&mesh, &raw);
        let mut walk = raw.iter();
        for e in trimmed.iter() {
            assert!(walk.any(|r| r == e), "{:?} out of order or missing", e);
        }
    }

    #[test]
    fn test_two_edge_path_keeps_second_edge() {
        let mesh = octahedron();
        // path over vertices 0-2-4; slot 0 is swept first and removed
        let path = Cut::from_indices(&mesh, &[0, 1]);
        let trimmed = trim(&mesh, &path);
        assert_eq!(trimmed.indices(), vec![1]);
    }

    #[test]
    fn test_star_collapses_to_last_spoke() {
        let mesh = octahedron();
        // four spokes around the apex vertex 4
        let star = Cut::from_indices(&mesh, &[1, 2, 4, 7]);
        let trimmed = trim(&mesh, &star);
        assert_eq!(trimmed.indices(), vec![7]);
    }

    #[test]
    fn test_isolated_edge_survives() {
        let mesh = octahedron();
        let single = Cut::from_indices(&mesh, &[3]);
        assert_eq!(trim(&mesh, &single), single);
    }

    #[test]
    fn test_empty_cut_is_noop() {
        let mesh = octahedron();
        let empty = Cut::default();
        assert!(trim(&mesh, &empty).is_empty());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_trim_panics_on_cut_from_another_mesh() {
        let sphere = octahedron();
        let raw = basic_cut(&sphere).unwrap();
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        // a lone triangle has 3 directed edges, the sphere cut has more
        let small = build_from_triangles(&vertices, &[[0, 1, 2]]).unwrap();
        trim(&small, &raw);
    }
}
