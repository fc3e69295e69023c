//! End-to-end checks through the public facade: parse, build, query.

use arbor::{
    AlgorithmConfig, Digraph, DisjointSets, Edge, EdgeSet, Error, Graph, MinimumSpanningTreeEngine,
    Selection, ShortestPathEngine, VertexId, bfs, dijkstra, kruskal, parse_edge_list, prim,
};

fn v(id: u32) -> VertexId {
    VertexId::new(id)
}

const ROAD_MAP: &str = "\
# six towns, weighted roads
6
1 2 7
1 3 9
1 6 14
2 3 10
2 4 15
3 4 11
3 6 2
4 5 6
5 6 9
";

#[test]
fn test_directed_example() {
    let g = Digraph::from_edges(
        3,
        [
            Edge::from_raw(1, 2, 4),
            Edge::from_raw(2, 3, 1),
            Edge::from_raw(1, 3, 10),
        ],
    )
    .unwrap();

    let tree = dijkstra(&g, v(1)).unwrap();
    assert_eq!(tree.distance(v(2)), Some(4));
    assert_eq!(tree.distance(v(3)), Some(5));
    assert_eq!(tree.predecessor(v(3)), Some(v(2)));
}

#[test]
fn test_disconnected_prim_example() {
    let g = Graph::from_edges(3, [Edge::from_raw(1, 2, 5)]).unwrap();
    let tree = prim(&g).unwrap();

    assert_eq!(tree.total_weight, 5);
    assert_eq!(tree.unreached, vec![v(3)]);
}

#[test]
fn test_disjoint_sets_example() {
    let mut sets = DisjointSets::new(4);
    sets.union(v(1), v(2)).unwrap();
    sets.union(v(3), v(4)).unwrap();
    sets.union(v(1), v(3)).unwrap();

    assert_eq!(sets.find(v(2)).unwrap(), sets.find(v(4)).unwrap());
}

#[test]
fn test_road_map_as_digraph() {
    let list = parse_edge_list(ROAD_MAP).unwrap();
    let g = list.to_digraph().unwrap();

    let tree = dijkstra(&g, v(1)).unwrap();
    assert_eq!(tree.distance(v(6)), Some(11));
    assert_eq!(tree.path_to(v(6)).unwrap(), Some(vec![v(1), v(3), v(6)]));
    assert_eq!(tree.distance(v(5)), Some(26));

    let hops = bfs(&g, v(1)).unwrap();
    assert_eq!(hops.distance(v(5)), Some(3));
    assert_eq!(hops.path_to(v(5)).unwrap(), Some(vec![v(1), v(2), v(4), v(5)]));
}

#[test]
fn test_road_map_as_graph() {
    let list = parse_edge_list(ROAD_MAP).unwrap();
    let g = list.to_graph().unwrap();
    assert_eq!(g.edge_count(), 9);

    let undirected = dijkstra(&g, v(1)).unwrap();
    assert_eq!(undirected.distance(v(5)), Some(20));

    let p = prim(&g).unwrap();
    let k = kruskal(&g).unwrap();
    assert_eq!(p.total_weight, 33);
    assert_eq!(k.total_weight, 33);
    assert!(p.is_spanning());
}

#[test]
fn test_queries_see_mutations_between_runs() {
    let mut g = Digraph::from_edges(3, [Edge::from_raw(1, 2, 1), Edge::from_raw(2, 3, 1)]).unwrap();
    assert_eq!(dijkstra(&g, v(1)).unwrap().distance(v(3)), Some(2));

    g.remove(Edge::from_raw(2, 3, 0)).unwrap();
    assert_eq!(dijkstra(&g, v(1)).unwrap().distance(v(3)), None);

    g.insert(Edge::from_raw(1, 3, 8)).unwrap();
    g.insert(Edge::from_raw(1, 3, 6)).unwrap();
    assert_eq!(g.edge_count(), 2);
    assert_eq!(dijkstra(&g, v(1)).unwrap().distance(v(3)), Some(6));
}

#[test]
fn test_engines_share_one_graph() {
    let g = parse_edge_list(ROAD_MAP).unwrap().to_graph().unwrap();
    let config = AlgorithmConfig::new().with_selection(Selection::BinaryHeap);

    let paths = ShortestPathEngine::with_config(&g, config.clone());
    let trees = MinimumSpanningTreeEngine::with_config(&g, config);

    let all: Vec<_> = g.vertices().map(|s| paths.weighted(s).unwrap()).collect();
    assert_eq!(all.len(), 6);
    assert!(all.iter().all(|t| t.reached_count() == 6));
    assert_eq!(trees.prim().unwrap(), prim(&g).unwrap());
}

#[test]
fn test_errors_are_precise() {
    let mut g = Graph::new(2).unwrap();
    assert!(matches!(
        g.insert(Edge::from_raw(1, 3, 1)),
        Err(Error::OutOfRange { size: 2, .. })
    ));
    assert!(matches!(
        g.remove(Edge::from_raw(1, 2, 1)),
        Err(Error::NotFound { .. })
    ));
    assert!(matches!(bfs(&g, v(0)), Err(Error::OutOfRange { .. })));
}
