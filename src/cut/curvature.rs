//! Discrete curvature density at mesh vertices.
//!
//! The measure is the angular deficit of the incident triangle fan,
//! normalized by the fan area: `3 * (2*pi - sum of corner angles) /
//! (sum of corner areas)`. Flat fans score zero, convex corners
//! positive, saddles negative.

use std::f64::consts::PI;

use rayon::prelude::*;

use crate::mesh::{TriangleMesh, VertexId};

/// Compute the angular deficit density at every vertex, in parallel.
pub fn vertex_deficits(mesh: &TriangleMesh) -> Vec<f64> {
    vertex_deficits_impl(mesh, true)
}

/// Sequential version of [`vertex_deficits`].
pub fn vertex_deficits_sequential(mesh: &TriangleMesh) -> Vec<f64> {
    vertex_deficits_impl(mesh, false)
}

fn vertex_deficits_impl(mesh: &TriangleMesh, parallel: bool) -> Vec<f64> {
    let vertex_indices: Vec<usize> = (0..mesh.num_vertices()).collect();
    let compute = |&vi: &usize| deficit_at(mesh, VertexId::new(vi));

    if parallel {
        vertex_indices.par_iter().map(compute).collect()
    } else {
        vertex_indices.iter().map(compute).collect()
    }
}

/// Angular deficit density at a single vertex.
///
/// Corner angles are clamped into the valid acos domain; degenerate
/// spokes contribute nothing, and a vanishing fan area yields zero.
pub fn deficit_at(mesh: &TriangleMesh, v: VertexId) -> f64 {
    let p = *mesh.position(v);
    let mut angle_sum = 0.0;
    let mut area_sum = 0.0;

    for e in mesh.vertex_edges(v) {
        let a = *mesh.position(mesh.target(e));
        let b = *mesh.position(mesh.target(mesh.next(e)));
        let u = a - p;
        let w = b - p;
        let len_u = u.norm();
        let len_w = w.norm();
        if len_u < 1e-12 || len_w < 1e-12 {
            continue;
        }
        let cos = (u.dot(&w) / (len_u * len_w)).clamp(-1.0, 1.0);
        angle_sum += cos.acos();
        area_sum += u.cross(&w).norm() * 0.5;
    }

    if area_sum < 1e-10 {
        return 0.0;
    }
    3.0 * (2.0 * PI - angle_sum) / area_sum
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

    /// 3x3 planar grid, 8 triangles, vertex 4 interior.
    fn flat_grid() -> TriangleMesh {
        let mut vertices = Vec::new();
        for j in 0..3 {
            for i in 0..3 {
                vertices.push(Point3::new(i as f64, j as f64, 0.0));
            }
        }
        let mut faces = Vec::new();
        for j in 0..2_usize {
            for i in 0..2_usize {
                let a = j * 3 + i;
                let b = a + 1;
                let c = a + 4;
                let d = a + 3;
                faces.push([a, b, c]);
                faces.push([a, c, d]);
            }
        }
        build_from_triangles(&vertices, &faces).unwrap()
    }

    #[test]
    fn test_octahedron_uniform_positive() {
        let mesh = octahedron();
        let deficits = vertex_deficits(&mesh);
        assert_eq!(deficits.len(), 6);
        // each fan: four equilateral corners of pi/3, total area 2*sqrt(3)
        let expected = PI / 3.0_f64.sqrt();
        for &d in &deficits {
            assert!((d - expected).abs() < 1e-9, "deficit {} != {}", d, expected);
        }
    }

    #[test]
    fn test_flat_interior_vertex_is_zero() {
        let mesh = flat_grid();
        let deficits = vertex_deficits(&mesh);
        assert!(deficits[4].abs() < 1e-9);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mesh = octahedron();
        let parallel = vertex_deficits(&mesh);
        let sequential = vertex_deficits_sequential(&mesh);
        assert_eq!(parallel, sequential);
    }
}
