//! Triangle mesh data structures.
//!
//! This module provides the directed-edge mesh representation consumed by
//! the cut algorithms, together with type-safe element indices and a
//! validating builder.
//!
//! # Organization
//!
//! - [`index`] - Type-safe index wrappers with the `3t + i` edge layout
//! - [`halfedge`] - The [`TriangleMesh`] structure and traversal queries
//! - [`builder`] - Validating construction from face-vertex lists

pub mod builder;
pub mod halfedge;
pub mod index;

pub use builder::build_from_triangles;
pub use halfedge::{Edge, TriangleMesh, Vertex, VertexEdgeIter};
pub use index::{EdgeId, FaceId, VertexId, INVALID_INDEX};
