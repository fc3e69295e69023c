//! Single-source shortest-path trees.
//!
//! - [`bfs`] - hop counts over unweighted edges
//! - [`dijkstra`] - weighted distances, non-negative weights only
//!
//! Both return a [`ShortestPathTree`]: a distance and a predecessor per
//! vertex. Unreachable vertices have neither, which is valid output rather
//! than an error.
//!
//! Dijkstra's result is unspecified when a negative weight is reachable from
//! the source. Negative weights are not detected.

use std::collections::VecDeque;

use arbor_common::types::{VertexId, Weight};
use arbor_common::utils::error::{Error, Result};
use arbor_core::EdgeSet;

use super::config::AlgorithmConfig;
use super::selection::grow_tree;

/// Distances and predecessors from a single source vertex.
///
/// Per-vertex arrays are indexed by vertex id; slot 0 is unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: VertexId,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    /// Returns the source vertex.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the number of vertices covered.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.distances.len() - 1
    }

    /// Returns the distance to `v`, or `None` if `v` is unreached or not a
    /// vertex.
    #[must_use]
    pub fn distance(&self, v: VertexId) -> Option<Weight> {
        self.slot(v).and_then(|i| self.distances[i])
    }

    /// Returns the predecessor of `v` in the tree. `None` for the source,
    /// for unreached vertices, and for ids that are not vertices.
    #[must_use]
    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.slot(v).and_then(|i| self.predecessors[i])
    }

    /// Returns true if `v` is reachable from the source.
    #[must_use]
    pub fn is_reached(&self, v: VertexId) -> bool {
        self.distance(v).is_some()
    }

    /// Returns the number of reached vertices, source included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Iterates over `(vertex, distance, predecessor)` in vertex order.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (VertexId, Option<Weight>, Option<VertexId>)> + '_ {
        VertexId::range(self.vertex_count()).map(|v| (v, self.distance(v), self.predecessor(v)))
    }

    /// Returns the vertices on the tree path from the source to `target`,
    /// both ends included, or `None` if `target` is unreached.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `target` is not a vertex.
    pub fn path_to(&self, target: VertexId) -> Result<Option<Vec<VertexId>>> {
        Error::check_vertex(target, self.vertex_count())?;
        if !self.is_reached(target) {
            return Ok(None);
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            let Some(prev) = self.predecessor(current) else {
                return Err(Error::InvariantViolation(format!(
                    "reached vertex {current} has no predecessor"
                )));
            };
            if path.len() > self.vertex_count() {
                return Err(Error::InvariantViolation(format!(
                    "predecessor chain from {target} does not reach {}",
                    self.source
                )));
            }
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Ok(Some(path))
    }

    fn slot(&self, v: VertexId) -> Option<usize> {
        v.is_within(self.vertex_count()).then_some(v.index())
    }
}

/// Computes shortest-path trees over a graph.
///
/// The engine borrows the graph immutably, so the graph cannot change while
/// the engine exists.
pub struct ShortestPathEngine<'g, G: EdgeSet + ?Sized> {
    graph: &'g G,
    config: AlgorithmConfig,
}

impl<'g, G: EdgeSet + ?Sized> ShortestPathEngine<'g, G> {
    /// Creates an engine with the default configuration.
    pub fn new(graph: &'g G) -> Self {
        Self::with_config(graph, AlgorithmConfig::default())
    }

    /// Creates an engine with the given configuration.
    pub fn with_config(graph: &'g G, config: AlgorithmConfig) -> Self {
        Self { graph, config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &AlgorithmConfig {
        &self.config
    }

    /// Breadth-first shortest paths by edge count.
    ///
    /// Vertices are discovered in FIFO order, scanning each vertex's edges in
    /// insertion order; the first discovery of a vertex fixes its distance
    /// and predecessor.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `source` is not a vertex.
    pub fn unweighted(&self, source: VertexId) -> Result<ShortestPathTree> {
        self.graph.check_vertex(source)?;

        let n = self.graph.vertex_count();
        let mut distances: Vec<Option<Weight>> = vec![None; n + 1];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; n + 1];
        let mut queue = VecDeque::new();

        distances[source.index()] = Some(0);
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            let next = distances[v.index()].unwrap_or(0) + 1;
            for edge in self.graph.edges_from(v) {
                let u = edge.tail.index();
                if distances[u].is_none() {
                    distances[u] = Some(next);
                    predecessors[u] = Some(v);
                    queue.push_back(edge.tail);
                }
            }
        }

        let tree = ShortestPathTree {
            source,
            distances,
            predecessors,
        };
        tracing::debug!(
            source = %source,
            reached = tree.reached_count(),
            vertices = n,
            "unweighted shortest paths computed"
        );
        Ok(tree)
    }

    /// Dijkstra's shortest paths for non-negative weights.
    ///
    /// Among unfinalized vertices with equal distance the smallest id is
    /// finalized first, whichever [`Selection`](super::Selection) is
    /// configured. Distance sums saturate at `Weight::MAX`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `source` is not a vertex.
    pub fn weighted(&self, source: VertexId) -> Result<ShortestPathTree> {
        self.graph.check_vertex(source)?;

        let grown = grow_tree(
            self.graph,
            source,
            self.config.selection,
            |dist, weight| dist.saturating_add(weight),
        );

        let tree = ShortestPathTree {
            source,
            distances: grown.keys,
            predecessors: grown.parents,
        };
        tracing::debug!(
            source = %source,
            reached = grown.finalized,
            vertices = self.graph.vertex_count(),
            selection = ?self.config.selection,
            "weighted shortest paths computed"
        );
        Ok(tree)
    }
}

/// Breadth-first shortest paths from `source`. See
/// [`ShortestPathEngine::unweighted`].
pub fn bfs<G: EdgeSet + ?Sized>(graph: &G, source: VertexId) -> Result<ShortestPathTree> {
    ShortestPathEngine::new(graph).unweighted(source)
}

/// Dijkstra's shortest paths from `source` with linear-scan selection. See
/// [`ShortestPathEngine::weighted`].
pub fn dijkstra<G: EdgeSet + ?Sized>(graph: &G, source: VertexId) -> Result<ShortestPathTree> {
    ShortestPathEngine::new(graph).weighted(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::algorithms::Selection;
    use arbor_common::types::Edge;
    use arbor_core::{Digraph, Graph};

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    fn digraph(n: usize, edges: &[(u32, u32, Weight)]) -> Digraph {
        Digraph::from_edges(n, edges.iter().map(|&(h, t, w)| Edge::from_raw(h, t, w))).unwrap()
    }

    #[test]
    fn test_dijkstra_prefers_lighter_detour() {
        let g = digraph(3, &[(1, 2, 4), (2, 3, 1), (1, 3, 10)]);
        let tree = dijkstra(&g, v(1)).unwrap();

        assert_eq!(tree.distance(v(1)), Some(0));
        assert_eq!(tree.distance(v(2)), Some(4));
        assert_eq!(tree.distance(v(3)), Some(5));
        assert_eq!(tree.predecessor(v(3)), Some(v(2)));
        assert_eq!(tree.predecessor(v(1)), None);
    }

    #[test]
    fn test_bfs_counts_hops() {
        let g = digraph(3, &[(1, 2, 4), (2, 3, 1), (1, 3, 10)]);
        let tree = bfs(&g, v(1)).unwrap();

        assert_eq!(tree.distance(v(2)), Some(1));
        assert_eq!(tree.distance(v(3)), Some(1));
        assert_eq!(tree.predecessor(v(3)), Some(v(1)));
    }

    #[test]
    fn test_bfs_ties_follow_insertion_order() {
        // 4 is two hops away through either 2 or 3; 3's edge list is scanned
        // first because 3 was inserted before 2 in 1's list.
        let g = digraph(4, &[(1, 3, 1), (1, 2, 1), (2, 4, 1), (3, 4, 1)]);
        let tree = bfs(&g, v(1)).unwrap();

        assert_eq!(tree.distance(v(4)), Some(2));
        assert_eq!(tree.predecessor(v(4)), Some(v(3)));
    }

    #[test]
    fn test_dijkstra_ties_pick_smallest_id() {
        // 2 and 3 both sit at distance 1; 2 is finalized first and claims 4.
        let g = digraph(4, &[(1, 3, 1), (1, 2, 1), (3, 4, 1), (2, 4, 1)]);
        for selection in [Selection::LinearScan, Selection::BinaryHeap] {
            let config = AlgorithmConfig::new().with_selection(selection);
            let tree = ShortestPathEngine::with_config(&g, config)
                .weighted(v(1))
                .unwrap();
            assert_eq!(tree.distance(v(4)), Some(2));
            assert_eq!(tree.predecessor(v(4)), Some(v(2)), "{selection:?}");
        }
    }

    #[test]
    fn test_unreachable_vertices() {
        let g = digraph(4, &[(1, 2, 3), (3, 4, 1)]);
        for tree in [bfs(&g, v(1)).unwrap(), dijkstra(&g, v(1)).unwrap()] {
            assert!(tree.is_reached(v(2)));
            assert_eq!(tree.distance(v(3)), None);
            assert_eq!(tree.predecessor(v(4)), None);
            assert_eq!(tree.reached_count(), 2);
            assert_eq!(tree.path_to(v(4)).unwrap(), None);
        }
    }

    #[test]
    fn test_source_out_of_range() {
        let g = digraph(2, &[(1, 2, 1)]);
        assert!(matches!(bfs(&g, v(0)), Err(Error::OutOfRange { .. })));
        assert!(matches!(dijkstra(&g, v(3)), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_path_to() {
        let g = digraph(4, &[(1, 2, 1), (2, 3, 1), (3, 4, 1), (1, 4, 9)]);
        let tree = dijkstra(&g, v(1)).unwrap();

        assert_eq!(
            tree.path_to(v(4)).unwrap(),
            Some(vec![v(1), v(2), v(3), v(4)])
        );
        assert_eq!(tree.path_to(v(1)).unwrap(), Some(vec![v(1)]));
        assert!(matches!(tree.path_to(v(5)), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_iter_and_queries_are_independent() {
        let g = digraph(3, &[(1, 2, 2), (2, 3, 2), (3, 1, 2)]);
        let engine = ShortestPathEngine::new(&g);

        let from_one = engine.weighted(v(1)).unwrap();
        let from_three = engine.weighted(v(3)).unwrap();

        let rows: Vec<_> = from_one.iter().collect();
        assert_eq!(
            rows,
            vec![
                (v(1), Some(0), None),
                (v(2), Some(2), Some(v(1))),
                (v(3), Some(4), Some(v(2))),
            ]
        );
        assert_eq!(from_three.distance(v(2)), Some(4));
        assert_eq!(from_three.source(), v(3));
    }

    #[test]
    fn test_weights_saturate() {
        let g = digraph(3, &[(1, 2, Weight::MAX), (2, 3, 5)]);
        let tree = dijkstra(&g, v(1)).unwrap();
        assert_eq!(tree.distance(v(3)), Some(Weight::MAX));
    }

    #[test]
    fn test_runs_on_undirected_graphs() {
        let g = Graph::from_edges(3, [Edge::from_raw(2, 1, 3), Edge::from_raw(3, 2, 4)]).unwrap();
        let tree = dijkstra(&g, v(3)).unwrap();
        assert_eq!(tree.distance(v(1)), Some(7));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::plugins::algorithms::Selection;
    use arbor_common::types::Edge;
    use arbor_core::Digraph;
    use proptest::prelude::*;

    fn graphs() -> impl Strategy<Value = (usize, Vec<(u32, u32, Weight)>)> {
        (1_usize..9).prop_flat_map(|n| {
            let edge = (1..=n as u32, 1..=n as u32, 0_i64..20);
            (Just(n), proptest::collection::vec(edge, 0..24))
        })
    }

    fn build(n: usize, edges: &[(u32, u32, Weight)]) -> Digraph {
        Digraph::from_edges(n, edges.iter().map(|&(h, t, w)| Edge::from_raw(h, t, w))).unwrap()
    }

    /// All-pairs shortest paths by Floyd-Warshall; `unit` ignores weights.
    fn all_pairs(g: &Digraph, unit: bool) -> Vec<Vec<Option<Weight>>> {
        let n = g.vertex_count();
        let mut d = vec![vec![None; n + 1]; n + 1];
        for i in 1..=n {
            d[i][i] = Some(0);
        }
        for e in g.edges() {
            let w = if unit { 1 } else { e.weight };
            let (h, t) = (e.head.index(), e.tail.index());
            if d[h][t].is_none_or(|cur| w < cur) {
                d[h][t] = Some(w);
            }
        }
        for k in 1..=n {
            for i in 1..=n {
                for j in 1..=n {
                    if let (Some(a), Some(b)) = (d[i][k], d[k][j]) {
                        if d[i][j].is_none_or(|cur| a + b < cur) {
                            d[i][j] = Some(a + b);
                        }
                    }
                }
            }
        }
        d
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(150))]

        #[test]
        fn bfs_matches_brute_force((n, edges) in graphs()) {
            let g = build(n, &edges);
            let expected = all_pairs(&g, true);
            for s in VertexId::range(n) {
                let tree = bfs(&g, s).unwrap();
                for t in VertexId::range(n) {
                    prop_assert_eq!(tree.distance(t), expected[s.index()][t.index()]);
                }
            }
        }

        #[test]
        fn dijkstra_matches_brute_force((n, edges) in graphs()) {
            let g = build(n, &edges);
            let expected = all_pairs(&g, false);
            for s in VertexId::range(n) {
                let tree = dijkstra(&g, s).unwrap();
                for t in VertexId::range(n) {
                    prop_assert_eq!(tree.distance(t), expected[s.index()][t.index()]);

                    // The predecessor chain is a real path of the reported length.
                    if let Some(path) = tree.path_to(t).unwrap() {
                        let total: Weight = path
                            .windows(2)
                            .map(|pair| g.edge_weight(pair[0], pair[1]).unwrap())
                            .sum();
                        prop_assert_eq!(Some(total), tree.distance(t));
                    }
                }
            }
        }

        #[test]
        fn heap_selection_matches_linear_scan((n, edges) in graphs()) {
            let g = build(n, &edges);
            let heap = AlgorithmConfig::new().with_selection(Selection::BinaryHeap);
            for s in VertexId::range(n) {
                let scan = ShortestPathEngine::new(&g).weighted(s).unwrap();
                let heaped = ShortestPathEngine::with_config(&g, heap.clone())
                    .weighted(s)
                    .unwrap();
                prop_assert_eq!(scan, heaped);
            }
        }
    }
}
