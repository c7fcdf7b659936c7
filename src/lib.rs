//! # Seamcut
//!
//! Cut-locus computation on closed triangle meshes.
//!
//! Seamcut finds a small set of edges whose removal opens a closed
//! surface into a single topological disk. Such cuts are the starting
//! point for seam placement, surface parameterization, and texture
//! unwrapping.
//!
//! ## Features
//!
//! - **Directed-edge meshes**: compact triangle connectivity with O(1)
//!   adjacency queries and type-safe indices
//! - **Pluggable search policies**: hop, geodesic, and curvature-guided
//!   frontier priorities over the dual graph
//! - **Cut reduction**: spur trimming and chord removal down to a
//!   minimal cut, certified through the Euler characteristic
//! - **Cut diffing**: classified comparison of reduction stages
//!
//! ## Quick Start
//!
//! ```
//! use seamcut::prelude::*;
//! use nalgebra::Point3;
//!
//! // Octahedron: the smallest sphere with a non-trivial cut
//! let vertices = vec![
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(-1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, -1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//!     Point3::new(0.0, 0.0, -1.0),
//! ];
//! let faces = vec![
//!     [0, 2, 4], [2, 1, 4], [1, 3, 4], [3, 0, 4],
//!     [2, 0, 5], [1, 2, 5], [3, 1, 5], [0, 3, 5],
//! ];
//! let mesh = build_from_triangles(&vertices, &faces).unwrap();
//!
//! // Raw cut: every edge the dual spanning tree does not cross
//! let raw = basic_cut(&mesh).unwrap();
//! assert_eq!(raw.len(), 5);
//!
//! // Peel spurs, then reduce to a minimal disk cut
//! let trimmed = trim(&mesh, &raw);
//! let mut graph = CutGraph::from_cut(&mesh, &trimmed);
//! graph.remove_chords().unwrap();
//! assert_eq!(graph.cut_edges().len(), 1);
//! ```
//!
//! ## Choosing a Policy
//!
//! The search order, and with it the cut, is controlled by an
//! [`EdgeWeightPolicy`](cut::EdgeWeightPolicy):
//!
//! ```
//! use seamcut::prelude::*;
//! use nalgebra::Point3;
//!
//! # let vertices = vec![
//! #     Point3::new(1.0, 0.0, 0.0),
//! #     Point3::new(-1.0, 0.0, 0.0),
//! #     Point3::new(0.0, 1.0, 0.0),
//! #     Point3::new(0.0, -1.0, 0.0),
//! #     Point3::new(0.0, 0.0, 1.0),
//! #     Point3::new(0.0, 0.0, -1.0),
//! # ];
//! # let faces = vec![
//! #     [0, 2, 4], [2, 1, 4], [1, 3, 4], [3, 0, 4],
//! #     [2, 0, 5], [1, 2, 5], [3, 1, 5], [0, 3, 5],
//! # ];
//! # let mesh = build_from_triangles(&vertices, &faces).unwrap();
//! let mut policy = GeodesicDistance::new();
//! let options = CutOptions::default().with_seed(FaceId::new(2));
//! let cut = cut_search(&mesh, &mut policy, &options).unwrap();
//! assert_eq!(cut.len(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cut;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use seamcut::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cut::{
        basic_cut, cut_search, trim, vertex_deficits, Cut, CutDiff, CutGraph, CutOptions,
        CurvatureWeighted, EdgeWeightPolicy, GeodesicDistance, HopDistance,
    };
    pub use crate::error::{CutError, MeshError, Result};
    pub use crate::mesh::{
        build_from_triangles, Edge, EdgeId, FaceId, TriangleMesh, Vertex, VertexId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
