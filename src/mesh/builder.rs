//! Mesh construction from face-vertex data.
//!
//! This module builds the directed-edge structure from a plain vertex list
//! and triangle list. Construction validates the input eagerly: empty
//! meshes, out-of-range vertex indices, degenerate faces, and non-manifold
//! edges are all rejected before any topology is linked.

use std::collections::HashMap;

use nalgebra::Point3;

use crate::error::MeshError;

use super::halfedge::{Edge, TriangleMesh, Vertex};
use super::index::{EdgeId, VertexId};

/// Build a [`TriangleMesh`] from vertex positions and triangle indices.
///
/// Triangles must be consistently oriented: each undirected edge may be
/// traversed at most once in each direction. The directed edges of
/// triangle `t` are assigned slots `3t..3t + 3`, with edge `3t + i`
/// running from `faces[t][i]` to `faces[t][(i + 1) % 3]`.
///
/// # Example
///
/// ```
/// use seamcut::prelude::*;
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
///     Point3::new(0.5, 0.5, 1.0),
/// ];
/// let faces = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
///
/// let mesh = build_from_triangles(&vertices, &faces).unwrap();
/// assert_eq!(mesh.num_faces(), 4);
/// assert!(mesh.is_closed());
/// ```
pub fn build_from_triangles(
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
) -> Result<TriangleMesh, MeshError> {
    if faces.is_empty() {
        return Err(MeshError::EmptyMesh);
    }
    for (fi, face) in faces.iter().enumerate() {
        for &v in face {
            if v >= vertices.len() {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex: v });
            }
        }
        if face[0] == face[1] || face[1] == face[2] || face[2] == face[0] {
            return Err(MeshError::DegenerateFace { face: fi });
        }
    }

    let mut mesh_vertices: Vec<Vertex> = vertices.iter().map(|p| Vertex::new(*p)).collect();
    let mut edges = vec![Edge::new(); faces.len() * 3];

    // first pass: per-face links and the directed-pair map
    let mut directed: HashMap<(usize, usize), EdgeId> = HashMap::with_capacity(edges.len());
    for (fi, face) in faces.iter().enumerate() {
        for i in 0..3 {
            let id = EdgeId::new(3 * fi + i);
            let from = face[i];
            let to = face[(i + 1) % 3];
            let edge = &mut edges[id.index()];
            edge.target = VertexId::new(to);
            edge.next = EdgeId::new(3 * fi + (i + 1) % 3);
            edge.prev = EdgeId::new(3 * fi + (i + 2) % 3);
            if directed.insert((from, to), id).is_some() {
                return Err(MeshError::NonManifoldEdge { v0: from, v1: to });
            }
        }
    }

    // second pass: pair twins through the reversed directed pair
    for (&(from, to), &id) in &directed {
        if let Some(&twin) = directed.get(&(to, from)) {
            edges[id.index()].twin = twin;
        }
    }

    // outgoing edges; a vertex whose fan is interrupted by the boundary
    // starts at the spoke following the incoming boundary edge, so the
    // rotation next(twin(..)) covers every outgoing spoke before it stops
    for (fi, face) in faces.iter().enumerate() {
        for i in 0..3 {
            mesh_vertices[face[i]].edge = EdgeId::new(3 * fi + i);
        }
    }
    for edge in &edges {
        if edge.is_boundary() {
            mesh_vertices[edge.target.index()].edge = edge.next;
        }
    }

    Ok(TriangleMesh {
        vertices: mesh_vertices,
        edges,
    })
}
