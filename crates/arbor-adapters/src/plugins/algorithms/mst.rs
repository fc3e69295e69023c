//! Minimum spanning trees over undirected graphs.
//!
//! - [`prim`] grows a single tree from vertex 1.
//! - [`kruskal`] merges components with a [`DisjointSets`] forest and so
//!   yields a minimum spanning forest when the graph is disconnected.
//!
//! Both report the vertices outside vertex 1's component in
//! [`SpanningTree::unreached`], so a partial tree is never mistaken for a
//! complete one.
//!
//! The reported total weight saturates at the `Weight` bounds instead of
//! overflowing, matching Dijkstra's distance sums.

use arbor_common::types::{Edge, VertexId, Weight};
use arbor_common::utils::error::Result;
use arbor_core::{DisjointSets, EdgeSet, Graph};
use serde::Serialize;

use super::config::AlgorithmConfig;
use super::selection::grow_tree;

/// Root of every Prim tree.
const PRIM_ROOT: VertexId = VertexId::new(1);

/// Edges selected by a spanning-tree algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    /// Selected edges. For Prim, `head` is the tree parent and `tail` the
    /// attached vertex, ordered by `tail`; for Kruskal, edges appear in the
    /// order they were accepted.
    pub edges: Vec<Edge>,
    /// Sum of the selected edge weights, saturating at the `Weight` bounds.
    pub total_weight: Weight,
    /// Vertices not connected to vertex 1, in ascending order.
    pub unreached: Vec<VertexId>,
}

impl SpanningTree {
    /// Returns true if the tree spans every vertex.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.unreached.is_empty()
    }

    /// Returns the number of selected edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no edge was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    fn from_edges(edges: Vec<Edge>, unreached: Vec<VertexId>) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).fold(0, Weight::saturating_add);
        Self {
            edges,
            total_weight,
            unreached,
        }
    }
}

/// Computes minimum spanning trees of an undirected graph.
pub struct MinimumSpanningTreeEngine<'g> {
    graph: &'g Graph,
    config: AlgorithmConfig,
}

impl<'g> MinimumSpanningTreeEngine<'g> {
    /// Creates an engine with the default configuration.
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_config(graph, AlgorithmConfig::default())
    }

    /// Creates an engine with the given configuration.
    pub fn with_config(graph: &'g Graph, config: AlgorithmConfig) -> Self {
        Self { graph, config }
    }

    /// Prim's algorithm rooted at vertex 1.
    ///
    /// Same selection loop as Dijkstra, keyed on the weight of the cheapest
    /// edge connecting each vertex to the tree.
    pub fn prim(&self) -> Result<SpanningTree> {
        self.graph.check_vertex(PRIM_ROOT)?;

        let grown = grow_tree(self.graph, PRIM_ROOT, self.config.selection, |_, weight| {
            weight
        });

        let mut edges = Vec::with_capacity(grown.finalized - 1);
        let mut unreached = Vec::new();
        for v in self.graph.vertices() {
            match (grown.parents[v.index()], grown.keys[v.index()]) {
                (Some(parent), Some(weight)) => edges.push(Edge::new(parent, v, weight)),
                (None, None) => unreached.push(v),
                _ => {}
            }
        }

        let tree = SpanningTree::from_edges(edges, unreached);
        self.report("prim", &tree);
        Ok(tree)
    }

    /// Kruskal's algorithm.
    ///
    /// Every stored entry is considered, both directions of each edge
    /// included, in ascending weight order with ties kept in storage order.
    /// An entry is accepted when its endpoints lie in different components;
    /// the second direction of an accepted edge is always rejected, as are
    /// self-loops.
    pub fn kruskal(&self) -> Result<SpanningTree> {
        let mut candidates: Vec<Edge> = self.graph.entries().copied().collect();
        candidates.sort_by_key(|e| e.weight);

        let mut sets = DisjointSets::new(self.graph.vertex_count());
        let mut edges = Vec::new();
        for edge in candidates {
            let r = sets.find(edge.head)?;
            let s = sets.find(edge.tail)?;
            if r != s {
                sets.union(r, s)?;
                edges.push(edge);
            }
        }

        let root = sets.find(PRIM_ROOT)?;
        let mut unreached = Vec::new();
        for v in self.graph.vertices() {
            if sets.find(v)? != root {
                unreached.push(v);
            }
        }

        let tree = SpanningTree::from_edges(edges, unreached);
        self.report("kruskal", &tree);
        Ok(tree)
    }

    fn report(&self, algorithm: &str, tree: &SpanningTree) {
        tracing::debug!(
            algorithm,
            edges = tree.len(),
            total_weight = tree.total_weight,
            "spanning tree computed"
        );
        if !tree.is_spanning() {
            tracing::warn!(
                algorithm,
                unreached = tree.unreached.len(),
                vertices = self.graph.vertex_count(),
                "graph is disconnected; tree does not span every vertex"
            );
        }
    }
}

/// Prim's minimum spanning tree with linear-scan selection. See
/// [`MinimumSpanningTreeEngine::prim`].
pub fn prim(graph: &Graph) -> Result<SpanningTree> {
    MinimumSpanningTreeEngine::new(graph).prim()
}

/// Kruskal's minimum spanning tree. See [`MinimumSpanningTreeEngine::kruskal`].
pub fn kruskal(graph: &Graph) -> Result<SpanningTree> {
    MinimumSpanningTreeEngine::new(graph).kruskal()
}
