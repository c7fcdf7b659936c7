//! Directed-edge mesh data structure.
//!
//! This module provides a compact half-edge representation specialized for
//! triangle meshes. Because every face is a triangle, faces are not stored
//! at all: the three directed edges of triangle `t` live at slots `3t`,
//! `3t + 1`, `3t + 2` of a flat edge array, and the owning triangle of any
//! edge is `edge / 3`.
//!
//! # Structure
//!
//! - Each undirected mesh edge is split into two **directed edges** with
//!   opposite orientations, linked through their `twin` field
//! - Each directed edge knows its **target vertex** and its **next** and
//!   **prev** edges around the owning triangle
//! - Each vertex stores one outgoing directed edge
//!
//! # Boundary Handling
//!
//! A directed edge on the mesh boundary has an invalid `twin`. The cut
//! algorithms in [`crate::cut`] reject meshes with boundary; the structure
//! itself supports them for construction and inspection.

use nalgebra::Point3;

use super::index::{EdgeId, FaceId, VertexId};

/// A vertex in the mesh.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// The 3D position of this vertex.
    pub position: Point3<f64>,

    /// One outgoing directed edge from this vertex.
    pub edge: EdgeId,
}

impl Vertex {
    /// Create a new vertex at the given position.
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            edge: EdgeId::invalid(),
        }
    }

    /// Create a new vertex from coordinates.
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }
}

/// A directed edge in the mesh.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// The vertex this edge points to.
    pub target: VertexId,

    /// The oppositely oriented edge in the adjacent triangle.
    /// Invalid for boundary edges.
    pub twin: EdgeId,

    /// The next edge around the owning triangle (counter-clockwise).
    pub next: EdgeId,

    /// The previous edge around the owning triangle.
    pub prev: EdgeId,
}

impl Edge {
    /// Create a new uninitialized edge.
    pub fn new() -> Self {
        Self {
            target: VertexId::invalid(),
            twin: EdgeId::invalid(),
            next: EdgeId::invalid(),
            prev: EdgeId::invalid(),
        }
    }

    /// Check if this edge is on the boundary.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        !self.twin.is_valid()
    }
}

impl Default for Edge {
    fn default() -> Self {
        Self::new()
    }
}

/// A triangle mesh in directed-edge representation.
///
/// The mesh is immutable for the duration of any cut computation; all
/// algorithms in [`crate::cut`] take it by shared reference.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    /// All vertices in the mesh.
    pub(crate) vertices: Vec<Vertex>,

    /// All directed edges, three consecutive entries per triangle.
    pub(crate) edges: Vec<Edge>,
}

impl TriangleMesh {
    /// Assemble a mesh directly from vertex and edge arrays.
    ///
    /// This bypasses [`build_from_triangles`](super::build_from_triangles)
    /// and performs no validation beyond the slot-count check; it exists
    /// for constructing self-glued meshes that cannot be expressed as a
    /// plain face list.
    ///
    /// # Panics
    /// Panics if `edges.len()` is not a multiple of 3.
    pub fn from_parts(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        assert!(
            edges.len() % 3 == 0,
            "edge array length {} is not a multiple of 3",
            edges.len()
        );
        Self { vertices, edges }
    }

    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of directed edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of triangles.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.edges.len() / 3
    }

    /// Get a vertex by ID.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Get a directed edge by ID.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> &Point3<f64> {
        &self.vertex(v).position
    }

    /// Get one outgoing directed edge of a vertex.
    #[inline]
    pub fn outgoing_edge(&self, v: VertexId) -> EdgeId {
        self.vertex(v).edge
    }

    // ==================== Topology Queries ====================

    /// Get the twin (opposite) edge.
    #[inline]
    pub fn twin(&self, e: EdgeId) -> EdgeId {
        self.edge(e).twin
    }

    /// Get the next edge around the owning triangle.
    #[inline]
    pub fn next(&self, e: EdgeId) -> EdgeId {
        self.edge(e).next
    }

    /// Get the previous edge around the owning triangle.
    #[inline]
    pub fn prev(&self, e: EdgeId) -> EdgeId {
        self.edge(e).prev
    }

    /// Get the vertex a directed edge points to.
    #[inline]
    pub fn target(&self, e: EdgeId) -> VertexId {
        self.edge(e).target
    }

    /// Get the vertex a directed edge originates from.
    #[inline]
    pub fn origin(&self, e: EdgeId) -> VertexId {
        self.target(self.prev(e))
    }

    /// Get the (origin, target) vertex pair of a directed edge.
    #[inline]
    pub fn endpoints(&self, e: EdgeId) -> (VertexId, VertexId) {
        (self.origin(e), self.target(e))
    }

    /// Get the three vertices of a triangle, in construction order.
    #[inline]
    pub fn face_vertices(&self, f: FaceId) -> [VertexId; 3] {
        let [e0, e1, e2] = f.edges();
        [self.target(e2), self.target(e0), self.target(e1)]
    }

    // ==================== Geometry ====================

    /// Get the three vertex positions of a triangle.
    #[inline]
    pub fn face_positions(&self, f: FaceId) -> [Point3<f64>; 3] {
        let [v0, v1, v2] = self.face_vertices(f);
        [*self.position(v0), *self.position(v1), *self.position(v2)]
    }

    /// Get the centroid of a triangle (mean of its vertex positions).
    pub fn face_centroid(&self, f: FaceId) -> Point3<f64> {
        let [p0, p1, p2] = self.face_positions(f);
        Point3::from((p0.coords + p1.coords + p2.coords) / 3.0)
    }

    // ==================== Iterators ====================

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.num_vertices()).map(VertexId::new)
    }

    /// Iterate over all vertices with their IDs.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::new(i), v))
    }

    /// Iterate over all directed-edge IDs.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.num_edges()).map(EdgeId::new)
    }

    /// Iterate over all directed edges with their IDs.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::new(i), e))
    }

    /// Iterate over all triangle IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> {
        (0..self.num_faces()).map(FaceId::new)
    }

    /// Iterate over the outgoing edges of a vertex.
    ///
    /// The walk circles the vertex through `next(twin(e))` and is complete
    /// for interior vertices and all vertices of closed meshes.
    pub fn vertex_edges(&self, v: VertexId) -> VertexEdgeIter<'_> {
        let start = self.outgoing_edge(v);
        VertexEdgeIter {
            mesh: self,
            start,
            current: start,
            done: false,
        }
    }

    /// Iterate over the neighboring vertices of a vertex.
    pub fn vertex_neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex_edges(v).map(move |e| self.target(e))
    }

    /// Get the number of outgoing edges of a vertex.
    ///
    /// On closed meshes this equals the vertex valence. On boundary
    /// vertices the fan is missing its closing spoke, so the count is one
    /// less than the number of neighboring vertices.
    pub fn valence(&self, v: VertexId) -> usize {
        self.vertex_edges(v).count()
    }

    // ==================== Global Properties ====================

    /// Count the directed edges without a twin.
    pub fn boundary_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_boundary()).count()
    }

    /// Check whether the mesh is closed (every edge has a twin).
    pub fn is_closed(&self) -> bool {
        self.boundary_edge_count() == 0
    }

    /// Compute the Euler characteristic V - E + F.
    ///
    /// Undirected edges are counted from the directed representation:
    /// a self-glued edge (its own twin) and a boundary edge each count
    /// once, every other undirected edge owns two directed slots.
    pub fn euler_characteristic(&self) -> i64 {
        let directed = self.edges.len();
        let mut self_glued = 0usize;
        let mut boundary = 0usize;
        for (i, e) in self.edges.iter().enumerate() {
            if !e.twin.is_valid() {
                boundary += 1;
            } else if e.twin.index() == i {
                self_glued += 1;
            }
        }
        let undirected = self_glued + boundary + (directed - self_glued - boundary) / 2;
        self.vertices.len() as i64 - undirected as i64 + (directed / 3) as i64
    }

    /// Compute the genus of a closed orientable mesh, `(2 - chi) / 2`.
    pub fn genus(&self) -> i64 {
        (2 - self.euler_characteristic()) / 2
    }
}

/// Iterator over the outgoing edges of a vertex.
pub struct VertexEdgeIter<'a> {
    mesh: &'a TriangleMesh,
    start: EdgeId,
    current: EdgeId,
    done: bool,
}

impl<'a> Iterator for VertexEdgeIter<'a> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        if self.done || !self.current.is_valid() {
            return None;
        }
        let result = self.current;
        let twin = self.mesh.twin(self.current);
        self.current = if twin.is_valid() {
            self.mesh.next(twin)
        } else {
            EdgeId::invalid()
        };
        if self.current == self.start {
            self.done = true;
        }
        Some(result)
    }
}
