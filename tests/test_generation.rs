use graphgen::generation::apollonian::apollonian_network;
use graphgen::generation::convert::planar_to_graph;
use graphgen::generation::dual::dual_graph;
use graphgen::generation::edge_flip::{flip_edges, max_planar_graph, try_flip};
use graphgen::generation::one_planar::{augment_one_planar, one_planar_graph};
use graphgen::graph::checks::{is_bipartite, is_connected};
use graphgen::planar::basic_types::PlanarGraph;

/// Undirected edge set as normalized, sorted endpoint pairs.
fn edge_set(g: &PlanarGraph) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = g
        .edges
        .iter()
        .map(|&rep| {
            let a = g.half_edges[rep].start;
            let b = g.target(rep);
            (a.min(b), a.max(b))
        })
        .collect();
    pairs.sort_unstable();
    pairs
}

#[test]
fn test_apollonian_counts() {
    for n in [3, 4, 5, 6, 10, 17, 25, 40] {
        let g = apollonian_network(n, 42);
        assert_eq!(g.vertex_count(), n);
        assert_eq!(g.edge_count(), 3 * n - 6);
        assert_eq!(g.face_count(), 2 * n - 4);
        assert!(g.is_valid());
        assert!(g.is_triangulated());
    }
}

#[test]
fn test_apollonian_reproducible() {
    let a = apollonian_network(20, 7);
    let b = apollonian_network(20, 7);
    assert_eq!(edge_set(&a), edge_set(&b));
}

#[test]
#[should_panic(expected = "at least 3 vertices")]
fn test_apollonian_rejects_tiny_n() {
    apollonian_network(2, 0);
}

#[test]
fn test_flips_preserve_structure() {
    let mut g = apollonian_network(20, 1);
    let (n, m, f) = (g.vertex_count(), g.edge_count(), g.face_count());
    flip_edges(&mut g, 50, 2);
    assert_eq!(g.vertex_count(), n);
    assert_eq!(g.edge_count(), m);
    assert_eq!(g.face_count(), f);
    assert!(g.is_valid());
    assert!(g.is_triangulated());
}

#[test]
fn test_single_flip_swaps_one_edge() {
    // n = 5 triangulation: 9 edges before and after
    let g0 = apollonian_network(5, 3);
    assert_eq!(g0.edge_count(), 9);

    // first edge whose opposite corners are not yet adjacent
    let (mut g, mut flipped) = (g0.clone(), None);
    for edge in 0..g0.edge_count() {
        if try_flip(&mut g, g0.edges[edge]).is_ok() {
            flipped = Some(edge);
            break;
        }
        g = g0.clone();
    }
    let edge = flipped.expect("an n = 5 triangulation has a flippable edge");

    let before = edge_set(&g0);
    let after = edge_set(&g);
    assert_eq!(g.edge_count(), 9);
    assert!(g.is_valid());
    assert!(g.is_triangulated());

    let removed: Vec<_> = before.iter().filter(|p| !after.contains(p)).collect();
    let added: Vec<_> = after.iter().filter(|p| !before.contains(p)).collect();
    assert_eq!(removed.len(), 1);
    assert_eq!(added.len(), 1);

    // flipping the new diagonal back restores the original adjacency
    try_flip(&mut g, g0.edges[edge]).expect("the back flip cannot be rejected");
    assert_eq!(edge_set(&g), before);
    assert!(g.is_valid());
}

#[test]
fn test_flip_sequence_reproducible() {
    // identical seeds give identical flip sequences, rejections included
    let mut a = apollonian_network(12, 5);
    let mut b = apollonian_network(12, 5);
    flip_edges(&mut a, 25, 6);
    flip_edges(&mut b, 25, 6);
    assert_eq!(edge_set(&a), edge_set(&b));
}

#[test]
#[should_panic(expected = "at least 5 vertices")]
fn test_flips_reject_tiny_graphs() {
    // K4 has no flippable edge at all
    let mut g = apollonian_network(4, 0);
    flip_edges(&mut g, 1, 0);
}

#[test]
fn test_max_planar_graph_counts() {
    let g = max_planar_graph(30, 100, 9);
    assert_eq!(g.edge_count(), 3 * 30 - 6);
    assert_eq!(g.face_count(), 2 * 30 - 4);
    assert!(g.is_valid());
    assert!(g.is_triangulated());
}

#[test]
fn test_augmentation_adds_marked_edges_only() {
    let mut g = max_planar_graph(20, 30, 13);
    let m = g.edge_count();
    let added = augment_one_planar(&mut g, 14);

    assert_eq!(g.edge_count(), m + added);
    // a 1-planar graph has at most 4n - 8 edges
    assert!(g.edge_count() <= 4 * 20 - 8);
    // edge indices stay in lockstep with the collection, so every
    // augmentation edge sits at or above the original edge count
    for (index, &rep) in g.edges.iter().enumerate() {
        assert_eq!(g.half_edges[rep].edge, index);
    }
}

#[test]
fn test_augmentation_keeps_graph_simple() {
    let g = one_planar_graph(25, 40, 99);
    let flat = planar_to_graph(&g);
    // no loops, no duplicate edges between newly connected endpoints
    assert!(flat.is_valid());
    assert!(is_connected(&flat));
}

#[test]
fn test_augmentation_keeps_rotation_orders() {
    let mut g = max_planar_graph(18, 20, 21);
    augment_one_planar(&mut g, 22);

    let mut degree_sum = 0;
    for vertex in &g.vertices {
        degree_sum += vertex.degree();
        for &he in &vertex.edges {
            assert_eq!(g.half_edges[he].start, vertex.id);
        }
    }
    assert_eq!(degree_sum, 2 * g.edge_count());
}

#[test]
fn test_one_planar_pipeline_reproducible() {
    let a = one_planar_graph(25, 40, 99);
    let b = one_planar_graph(25, 40, 99);
    assert_eq!(edge_set(&a), edge_set(&b));
}

#[test]
fn test_dual_of_triangulation() {
    let primal = apollonian_network(8, 4);
    let dual = dual_graph(&primal);
    assert_eq!(dual.vertex_count(), primal.face_count());
    assert_eq!(dual.edge_count(), primal.edge_count());
    assert_eq!(dual.face_count(), primal.vertex_count());
    assert!(dual.is_valid());
    assert!(dual.is_three_regular());
}

#[test]
fn test_dual_of_dual_of_tetrahedron() {
    // K4 is the one Apollonian network whose dual is again triangulated
    let primal = apollonian_network(4, 0);
    let dual = dual_graph(&primal);
    assert!(dual.is_triangulated());
    let dual2 = dual_graph(&dual);
    assert_eq!(dual2.vertex_count(), primal.face_count());
    assert_eq!(dual2.face_count(), primal.vertex_count());
    assert!(dual2.is_valid());
}

#[test]
#[should_panic(expected = "requires a triangulated graph")]
fn test_dual_rejects_non_triangulation() {
    let mut g = apollonian_network(3, 0);
    g.add_face();
    dual_graph(&g);
}

#[test]
fn test_conversion_bridge() {
    let g = apollonian_network(6, 8);
    let flat = planar_to_graph(&g);
    assert_eq!(flat.vertex_count(), 6);
    assert_eq!(flat.edge_count(), 12);
    assert!(flat.is_valid());
    assert!(is_connected(&flat));
    // triangulations contain triangles
    assert!(!is_bipartite(&flat));
    for edge in &flat.edges {
        assert!(edge.start < edge.target);
        assert!(edge.target < 6);
    }
}
