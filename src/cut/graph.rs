//! Explicit graph over a cut's edges, chord removal, and disk
//! validation.
//!
//! Cutting a surface of Euler characteristic `chi` along a subgraph
//! with `E` edges touching `V` vertices yields a complement of
//! characteristic `chi + E - V`. The complement is a single disk
//! exactly when that value is 1, which is the certificate
//! [`CutGraph::remove_chords`] enforces after reduction.

use std::collections::HashMap;

use log::debug;

use crate::cut::Cut;
use crate::error::{CutError, Result};
use crate::mesh::{EdgeId, TriangleMesh, VertexId};

/// A cut graph node: one mesh vertex touched by the cut.
#[derive(Debug, Clone)]
struct GraphNode {
    vertex: VertexId,
    degree: u32,
}

/// A cut graph edge, kept alive until chord removal drops it.
#[derive(Debug, Clone)]
struct GraphEdge {
    edge: EdgeId,
    a: usize,
    b: usize,
    alive: bool,
}

/// Graph induced by a cut, used to reduce it to a minimal disk cut.
#[derive(Debug, Clone)]
pub struct CutGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    surface_characteristic: i64,
}

impl CutGraph {
    /// Build the graph over a cut's edges.
    ///
    /// Nodes are created in first-touch order; edge order follows the
    /// cut. The surface characteristic is captured here so the later
    /// disk check needs no mesh access.
    ///
    /// # Panics
    /// Panics if the cut names an edge outside `mesh`. Cuts are only
    /// meaningful for the mesh they were computed on.
    pub fn from_cut(mesh: &TriangleMesh, cut: &Cut) -> Self {
        let mut node_of: HashMap<VertexId, usize> = HashMap::new();
        let mut nodes: Vec<GraphNode> = Vec::new();
        let mut edges = Vec::with_capacity(cut.len());

        for e in cut.iter() {
            let (va, vb) = mesh.endpoints(e);
            let a = *node_of.entry(va).or_insert_with(|| {
                nodes.push(GraphNode {
                    vertex: va,
                    degree: 0,
                });
                nodes.len() - 1
            });
            let b = *node_of.entry(vb).or_insert_with(|| {
                nodes.push(GraphNode {
                    vertex: vb,
                    degree: 0,
                });
                nodes.len() - 1
            });
            nodes[a].degree += 1;
            nodes[b].degree += 1;
            edges.push(GraphEdge {
                edge: e,
                a,
                b,
                alive: true,
            });
        }

        Self {
            nodes,
            edges,
            surface_characteristic: mesh.euler_characteristic(),
        }
    }

    /// Number of nodes, counting those isolated by chord removal.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Current cut degree of a mesh vertex, 0 if the cut never touched
    /// it.
    pub fn degree(&self, v: VertexId) -> u32 {
        self.nodes
            .iter()
            .find(|n| n.vertex == v)
            .map_or(0, |n| n.degree)
    }

    /// Euler characteristic of the surface cut open along the edges
    /// still alive.
    pub fn complement_characteristic(&self) -> i64 {
        let alive = self.edges.iter().filter(|e| e.alive).count() as i64;
        let touched = self.nodes.iter().filter(|n| n.degree > 0).count() as i64;
        self.surface_characteristic + alive - touched
    }

    /// Drop chord edges until the cut is minimal, then validate that
    /// the complement is a single disk.
    ///
    /// A chord is an edge with exactly one degree-1 endpoint; dropping
    /// it re-glues a slit that separated nothing. Each drop removes one
    /// edge and isolates one node, so the complement characteristic is
    /// invariant under reduction.
    ///
    /// # Errors
    /// [`CutError::MalformedCutGraph`] when the complement is not a
    /// disk; the graph keeps its reduced state for inspection.
    pub fn remove_chords(&mut self) -> Result<()> {
        let before = self.edges.iter().filter(|e| e.alive).count();
        let mut changed = true;
        while changed {
            changed = false;
            for slot in 0..self.edges.len() {
                if !self.edges[slot].alive {
                    continue;
                }
                let (a, b) = (self.edges[slot].a, self.edges[slot].b);
                if (self.nodes[a].degree == 1) != (self.nodes[b].degree == 1) {
                    self.edges[slot].alive = false;
                    self.nodes[a].degree -= 1;
                    self.nodes[b].degree -= 1;
                    changed = true;
                }
            }
        }

        let after = self.edges.iter().filter(|e| e.alive).count();
        debug!("chord removal dropped {} of {} cut edges", before - after, before);

        let characteristic = self.complement_characteristic();
        if characteristic != 1 {
            return Err(CutError::MalformedCutGraph { characteristic });
        }
        Ok(())
    }

    /// The edges still alive, as a cut in the original order.
    pub fn cut_edges(&self) -> Cut {
        Cut::new(
            self.edges
                .iter()
                .filter(|e| e.alive)
                .map(|e| e.edge)
                .collect(),
        )
    }
}
