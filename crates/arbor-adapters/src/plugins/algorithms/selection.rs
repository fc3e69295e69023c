//! The finalize-relax-select loop shared by Dijkstra and Prim.

use std::collections::BinaryHeap;

use arbor_common::types::{VertexId, Weight};
use arbor_core::EdgeSet;

use super::config::Selection;
use super::traits::{Frontier, MinScored};

/// Linear scan over all vertices.
pub(crate) struct LinearScan;

impl Frontier for LinearScan {
    fn decreased(&mut self, _v: VertexId, _key: Weight) {}

    fn next_min(&mut self, keys: &[Option<Weight>], done: &[bool]) -> Option<VertexId> {
        let mut best: Option<(Weight, usize)> = None;
        for v in 1..keys.len() {
            if done[v] {
                continue;
            }
            if let Some(key) = keys[v] {
                // Strict comparison keeps the smallest id among equal keys.
                if best.is_none_or(|(smallest, _)| key < smallest) {
                    best = Some((key, v));
                }
            }
        }
        best.map(|(_, v)| VertexId::new(v as u32))
    }
}

/// Binary heap with lazy deletion of stale entries.
#[derive(Default)]
pub(crate) struct HeapFrontier {
    heap: BinaryHeap<MinScored<Weight, VertexId>>,
}

impl Frontier for HeapFrontier {
    fn decreased(&mut self, v: VertexId, key: Weight) {
        self.heap.push(MinScored(key, v));
    }

    fn next_min(&mut self, keys: &[Option<Weight>], done: &[bool]) -> Option<VertexId> {
        while let Some(MinScored(key, v)) = self.heap.pop() {
            if !done[v.index()] && keys[v.index()] == Some(key) {
                return Some(v);
            }
        }
        None
    }
}

/// Per-vertex output of a selection loop.
pub(crate) struct GrownTree {
    /// Final key per vertex, `None` if never reached.
    pub keys: Vec<Option<Weight>>,
    /// Tree parent per vertex, `None` for the root and unreached vertices.
    pub parents: Vec<Option<VertexId>>,
    /// Number of finalized vertices, root included.
    pub finalized: usize,
}

/// Grows a tree from `root`.
///
/// Each round relaxes every edge `(v, u, w)` of the vertex `v` finalized last:
/// if `u` is not finalized and `candidate(keys[v], w)` beats `keys[u]`, the
/// key and parent of `u` are replaced. The round ends by finalizing the
/// minimum-key candidate. The loop stops when no reached vertex is left
/// unfinalized.
pub(crate) fn grow_tree<G, F>(
    graph: &G,
    root: VertexId,
    selection: Selection,
    candidate: F,
) -> GrownTree
where
    G: EdgeSet + ?Sized,
    F: Fn(Weight, Weight) -> Weight,
{
    match selection {
        Selection::LinearScan => grow_with(graph, root, &mut LinearScan, candidate),
        Selection::BinaryHeap => grow_with(graph, root, &mut HeapFrontier::default(), candidate),
    }
}

fn grow_with<G, Q, F>(graph: &G, root: VertexId, frontier: &mut Q, candidate: F) -> GrownTree
where
    G: EdgeSet + ?Sized,
    Q: Frontier,
    F: Fn(Weight, Weight) -> Weight,
{
    let n = graph.vertex_count();
    let mut keys: Vec<Option<Weight>> = vec![None; n + 1];
    let mut parents: Vec<Option<VertexId>> = vec![None; n + 1];
    let mut done = vec![false; n + 1];

    keys[root.index()] = Some(0);
    done[root.index()] = true;
    let mut finalized = 1;
    let mut v = root;

    loop {
        let base = keys[v.index()].unwrap_or(0);
        for edge in graph.edges_from(v) {
            let u = edge.tail.index();
            if done[u] {
                continue;
            }
            let key = candidate(base, edge.weight);
            if keys[u].is_none_or(|current| key < current) {
                keys[u] = Some(key);
                parents[u] = Some(v);
                frontier.decreased(edge.tail, key);
            }
        }

        match frontier.next_min(&keys, &done) {
            Some(next) => {
                tracing::trace!(vertex = %next, key = ?keys[next.index()], "finalized");
                done[next.index()] = true;
                finalized += 1;
                v = next;
            }
            None => break,
        }
    }

    GrownTree {
        keys,
        parents,
        finalized,
    }
}
