use graphgen::generation::apollonian::apollonian_network;
use graphgen::planar::basic_types::{GraphDefect, PlanarGraph};
use graphgen::planar::face::PlanarFace;
use graphgen::planar::half_edge::{HalfEdge, NO_TWIN};
use graphgen::planar::vertex::PlanarVertex;

/// The smallest valid structure: a triangle with an inner and an outer face.
fn triangle() -> PlanarGraph {
    apollonian_network(3, 0)
}

#[test]
fn test_triangle_counts() {
    let g = triangle();
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.face_count(), 2);
    assert_eq!(g.half_edges.len(), 6);
}

#[test]
fn test_triangle_is_valid_and_triangulated() {
    let g = triangle();
    assert!(g.is_valid());
    assert!(g.is_triangulated());
    // K3 vertices have degree 2
    assert!(!g.is_three_regular());
}

#[test]
fn test_twin_relation_is_symmetric() {
    let g = triangle();
    for he in 0..g.half_edges.len() {
        assert_eq!(g.twin(g.twin(he)), he);
        assert_eq!(g.target(he), g.half_edges[g.twin(he)].start);
        assert_eq!(g.right_face(he), g.left_face(g.twin(he)));
    }
}

#[test]
fn test_navigation_identities() {
    let g = apollonian_network(12, 3);
    for he in 0..g.half_edges.len() {
        assert_eq!(g.left_face(he), g.left_face(g.next_along_face(he)));
        assert_eq!(g.left_face(he), g.left_face(g.prev_along_face(he)));
        assert_eq!(g.twin(he), g.prev_along_face(g.next_at_start(he)));
        assert_eq!(g.prev_along_face(g.next_along_face(he)), he);
        assert_eq!(g.prev_at_start(g.next_at_start(he)), he);
    }
}

#[test]
fn test_face_vertices_of_triangle() {
    let g = triangle();
    for face in 0..g.face_count() {
        let mut corners = g.face_vertices(face);
        corners.sort_unstable();
        assert_eq!(corners, vec![0, 1, 2]);
    }
}

#[test]
fn test_adjacency_queries() {
    let g = triangle();
    assert!(g.are_adjacent(0, 1));
    assert!(g.are_adjacent(1, 0));
    assert!(g.are_adjacent(2, 0));
    assert!(!g.are_adjacent(0, 0));

    let he = g.half_edge_between(0, 2).unwrap();
    assert_eq!(g.half_edges[he].start, 0);
    assert_eq!(g.target(he), 2);
    assert_eq!(g.half_edge_between(0, 0), None);
}

#[test]
fn test_neighbors_cw_matches_degree() {
    let g = apollonian_network(9, 11);
    for v in 0..g.vertex_count() {
        let neighbors = g.neighbors_cw(v);
        assert_eq!(neighbors.len(), g.vertices[v].degree());
        for u in neighbors {
            assert!(g.are_adjacent(u, v));
        }
    }
}

#[test]
fn test_rotation_order_splicing() {
    let mut vertex = PlanarVertex::new(0);
    vertex.add_edge_at_end(10);
    vertex.add_edge_at_end(20);
    vertex.add_edge_at_end(30);

    vertex.add_edge_after(15, 10);
    assert_eq!(vertex.edges.as_slice(), &[10, 15, 20, 30]);

    assert_eq!(vertex.next_edge(30), 10);
    assert_eq!(vertex.prev_edge(10), 30);
    assert_eq!(vertex.next_edge(15), 20);

    vertex.remove_edge(15);
    assert_eq!(vertex.edges.as_slice(), &[10, 20, 30]);
}

#[test]
fn test_face_boundary_splicing() {
    let mut face = PlanarFace::new(4);
    face.add_edge_at_end(1);
    face.add_edge_at_end(2);
    face.add_edge_after(7, 2);
    assert_eq!(face.edges.as_slice(), &[1, 2, 7]);
    assert_eq!(face.size(), 3);
    face.remove_edge(2);
    assert_eq!(face.edges.as_slice(), &[1, 7]);
}

#[test]
#[should_panic(expected = "already has twin")]
fn test_twin_cannot_be_reassigned() {
    let mut he = HalfEdge::new(0, 0, 0);
    assert_eq!(he.twin, NO_TWIN);
    he.set_twin(1);
    he.set_twin(2);
}

#[test]
fn test_validate_reports_corrupt_left_face() {
    let mut g = apollonian_network(6, 5);
    let wrong = (g.half_edges[0].left_face + 1) % g.face_count();
    g.half_edges[0].left_face = wrong;
    assert!(g.validate().is_err());
    assert!(!g.is_valid());
}

#[test]
fn test_validate_reports_euler_violation() {
    let mut g = triangle();
    // an extra face passes the local checks vacuously but breaks the count
    g.add_face();
    assert!(matches!(
        g.validate(),
        Err(GraphDefect::EulerFormula { n: 3, m: 3, f: 3 })
    ));
}

#[test]
fn test_validate_reports_broken_rotation() {
    let mut g = apollonian_network(6, 5);
    // swapping two rotation entries keeps the edge set but breaks wedges
    g.vertices[0].edges.swap(0, 1);
    assert!(g.validate().is_err());
}

#[test]
fn test_edge_pair_wires_twins_only() {
    let mut g = PlanarGraph::new();
    let v0 = g.add_vertex();
    let v1 = g.add_vertex();
    let f0 = g.add_face();
    let f1 = g.add_face();
    let he = g.edge_pair(0, v0, v1, f0, f1);

    assert_eq!(g.half_edges.len(), 2);
    assert_eq!(g.twin(he), he + 1);
    assert_eq!(g.twin(he + 1), he);
    assert_eq!(g.half_edges[he].start, v0);
    assert_eq!(g.target(he), v1);
    assert_eq!(g.left_face(he), f0);
    assert_eq!(g.right_face(he), f1);
    // nothing registered or spliced yet
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.vertices[v0].degree(), 0);
    assert_eq!(g.faces[f0].size(), 0);

    g.add_edge(he);
    assert_eq!(g.edge_count(), 1);
}
