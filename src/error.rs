//! Error types for seamcut.
//!
//! This module defines all error types used throughout the library. Mesh
//! construction and cut computation have separate taxonomies: building a
//! mesh can fail on malformed input triangles, while a cut computation can
//! fail on topology the algorithms do not support.

use thiserror::Error;

/// Result type alias using [`CutError`].
pub type Result<T, E = CutError> = std::result::Result<T, E>;

/// Errors that can occur while building a [`TriangleMesh`](crate::mesh::TriangleMesh).
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has duplicate vertex indices (degenerate triangle).
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// An edge has more than two incident faces.
    #[error("edge ({v0}, {v1}) has more than two incident faces")]
    NonManifoldEdge {
        /// First vertex of the edge.
        v0: usize,
        /// Second vertex of the edge.
        v1: usize,
    },
}

/// Errors that can occur during cut computation.
#[derive(Error, Debug)]
pub enum CutError {
    /// The mesh has boundary edges; cut search requires a closed surface.
    #[error("mesh has {boundary_edges} boundary edges; cut search requires a closed surface")]
    UnsupportedTopology {
        /// Number of directed edges without a twin.
        boundary_edges: usize,
    },

    /// The seed triangle index is out of range.
    #[error("seed triangle {seed} is out of range (mesh has {faces} faces)")]
    InvalidSeed {
        /// The requested seed triangle.
        seed: usize,
        /// Number of faces in the mesh.
        faces: usize,
    },

    /// Auxiliary per-vertex data does not match the mesh's vertex count.
    #[error("expected {expected} per-vertex values, got {actual}")]
    InconsistentVertexCount {
        /// Number of vertices in the mesh.
        expected: usize,
        /// Number of values provided.
        actual: usize,
    },

    /// Chord removal produced a cut whose complement is not a disk.
    #[error("cut graph reduction left a non-disk complement (Euler characteristic {characteristic})")]
    MalformedCutGraph {
        /// Euler characteristic of the cut-open surface.
        characteristic: i64,
    },
}
