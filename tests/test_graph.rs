use graphgen::graph::basic_types::{Graph, Vertex};
use graphgen::graph::checks::{is_bipartite, is_connected, is_tree};
use graphgen::random::{random_index_unequal_to, random_permutation};
use rand::{SeedableRng, rngs::StdRng};

fn path(n: usize) -> Graph {
    let mut g = Graph::new(n, false);
    for v in 1..n {
        g.add_edge(v - 1, v);
    }
    g
}

fn cycle(n: usize) -> Graph {
    let mut g = path(n);
    g.add_edge(n - 1, 0);
    g
}

#[test]
fn test_add_edge_normalizes_undirected() {
    let mut g = Graph::new(4, false);
    g.add_edge(3, 1);
    g.add_edge(0, 2);
    assert_eq!(g.edges[0].start, 1);
    assert_eq!(g.edges[0].target, 3);
    assert_eq!(g.edges[1].start, 0);
    assert_eq!(g.edges[1].target, 2);
    assert!(g.is_valid());
}

#[test]
fn test_directed_keeps_orientation() {
    let mut g = Graph::new(3, true);
    g.add_edge(2, 0);
    assert_eq!(g.edges[0].start, 2);
    assert_eq!(g.edges[0].target, 0);
}

#[test]
fn test_adjacency_and_degree() {
    let g = path(5);
    assert_eq!(g.edge_count(), 4);
    assert_eq!(g.degree(0), 1);
    assert_eq!(g.degree(2), 2);
    assert!(g.has_edge(1, 2));
    assert!(g.has_edge(2, 1));
    assert!(!g.has_edge(0, 4));
    assert_eq!(g.neighbors(2), vec![1, 3]);
}

#[test]
fn test_density() {
    let g = cycle(4);
    assert_eq!(g.density(), 4.0 / 6.0);
}

#[test]
fn test_loops_and_multi_edges_are_invalid() {
    let mut g = Graph::new(3, false);
    g.add_edge(0, 1);
    assert!(g.is_valid());
    g.add_edge(1, 0);
    assert!(!g.is_valid());

    let mut h = Graph::new(2, true);
    h.add_edge(1, 1);
    assert!(!h.is_valid());
}

#[test]
fn test_connectivity() {
    assert!(is_connected(&path(6)));
    assert!(is_connected(&Graph::new(0, false)));
    assert!(is_connected(&Graph::new(1, false)));
    assert!(!is_connected(&Graph::new(2, false)));

    let mut split = path(4);
    split.vertices.push(Vertex::new(4));
    assert!(!is_connected(&split));
}

#[test]
fn test_tree_check() {
    assert!(is_tree(&path(7)));
    assert!(!is_tree(&cycle(7)));
    assert!(!is_tree(&Graph::new(3, false))); // a forest is not a tree
    assert!(!is_tree(&Graph::new(0, false)));

    // star
    let mut star = Graph::new(5, false);
    for leaf in 1..5 {
        star.add_edge(0, leaf);
    }
    assert!(is_tree(&star));
}

#[test]
fn test_bipartiteness() {
    assert!(is_bipartite(&path(8)));
    assert!(is_bipartite(&cycle(6)));
    assert!(!is_bipartite(&cycle(5)));
    assert!(is_bipartite(&Graph::new(0, false)));

    // triangle hiding in a second component
    let mut g = path(3);
    g.vertices.extend((3..6).map(Vertex::new));
    g.add_edge(3, 4);
    g.add_edge(4, 5);
    g.add_edge(3, 5);
    assert!(!is_bipartite(&g));
}

#[test]
fn test_random_permutation_is_permutation() {
    let mut rng = StdRng::seed_from_u64(123);
    for k in [0, 1, 2, 10, 100] {
        let mut perm = random_permutation(k, &mut rng);
        perm.sort_unstable();
        assert_eq!(perm, (0..k).collect::<Vec<_>>());
    }
}

#[test]
fn test_random_permutation_reproducible() {
    let mut a = StdRng::seed_from_u64(9);
    let mut b = StdRng::seed_from_u64(9);
    assert_eq!(random_permutation(50, &mut a), random_permutation(50, &mut b));
}

#[test]
fn test_random_index_unequal_to() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..1000 {
        let value = random_index_unequal_to(2, 10, 6, &mut rng);
        assert!((2..10).contains(&value));
        assert_ne!(value, 6);
    }
    // excluded value outside the range leaves the draw unrestricted
    for _ in 0..100 {
        let value = random_index_unequal_to(0, 3, 7, &mut rng);
        assert!(value < 3);
    }
    // two candidates, one excluded
    assert_eq!(random_index_unequal_to(0, 2, 0, &mut rng), 1);
}
