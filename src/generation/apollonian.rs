// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::planar::basic_types::PlanarGraph;

/// Creates an Apollonian network: starting from a triangle, repeatedly
/// places a new vertex inside a uniformly chosen face and connects it to
/// the face's three corners. The result is a triangulation with `3n - 6`
/// edges and `2n - 4` faces.
///
/// The same seed reproduces the same structure. Panics for
/// `num_vertices < 3`.
pub fn apollonian_network(num_vertices: usize, seed: u64) -> PlanarGraph {
    if num_vertices < 3 {
        panic!("Apollonian network needs at least 3 vertices");
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = PlanarGraph::new();

    // 1. base triangle
    let v0 = g.add_vertex();
    let v1 = g.add_vertex();
    let v2 = g.add_vertex();
    let f0 = g.add_face(); // outer
    let f1 = g.add_face(); // inner
    let e0 = g.edge_pair(0, v0, v1, f1, f0);
    let e1 = g.edge_pair(1, v1, v2, f1, f0);
    let e2 = g.edge_pair(2, v2, v0, f1, f0);
    g.add_edge(e0);
    g.add_edge(e1);
    g.add_edge(e2);

    let (e0r, e1r, e2r) = (g.twin(e0), g.twin(e1), g.twin(e2));
    g.vertices[v0].add_edge_at_end(e2r);
    g.vertices[v0].add_edge_at_end(e0);
    g.vertices[v1].add_edge_at_end(e0r);
    g.vertices[v1].add_edge_at_end(e1);
    g.vertices[v2].add_edge_at_end(e1r);
    g.vertices[v2].add_edge_at_end(e2);

    // the outer face is bounded by the reversed halves, listed in reverse
    g.faces[f0].add_edge_at_end(e0r);
    g.faces[f0].add_edge_at_end(e2r);
    g.faces[f0].add_edge_at_end(e1r);
    g.faces[f1].add_edge_at_end(e0);
    g.faces[f1].add_edge_at_end(e1);
    g.faces[f1].add_edge_at_end(e2);

    // 2. subdivide randomly chosen faces until the vertex target is reached
    while g.vertex_count() != num_vertices {
        let f1 = rng.random_range(0..g.face_count());
        let e0 = g.faces[f1].edges[0];
        let e1 = g.faces[f1].edges[1];
        let e2 = g.faces[f1].edges[2];
        let v0 = g.half_edges[e0].start;
        let v1 = g.half_edges[e1].start;
        let v2 = g.half_edges[e2].start;

        let x = g.add_vertex();
        let f2 = g.add_face();
        let f3 = g.add_face();

        // the chosen face is reused as the sub-face next to e0
        let m = g.edge_count();
        let e3 = g.edge_pair(m, v0, x, f3, f1);
        g.add_edge(e3);
        let e4 = g.edge_pair(m + 1, v1, x, f1, f2);
        g.add_edge(e4);
        let e5 = g.edge_pair(m + 2, v2, x, f2, f3);
        g.add_edge(e5);

        g.half_edges[e1].left_face = f2;
        g.half_edges[e2].left_face = f3;

        // rotation orders: each corner gets its spoke right after the edge
        // towards the previous corner, keeping clockwise order
        let (e0r, e1r, e2r) = (g.twin(e0), g.twin(e1), g.twin(e2));
        let (e3r, e4r, e5r) = (g.twin(e3), g.twin(e4), g.twin(e5));
        g.vertices[v0].add_edge_after(e3, e2r);
        g.vertices[v1].add_edge_after(e4, e0r);
        g.vertices[v2].add_edge_after(e5, e1r);
        g.vertices[x].add_edge_at_end(e3r); // clockwise
        g.vertices[x].add_edge_at_end(e5r);
        g.vertices[x].add_edge_at_end(e4r);

        g.faces[f1].remove_edge(e2);
        g.faces[f1].remove_edge(e1);
        g.faces[f1].add_edge_at_end(e4);
        g.faces[f1].add_edge_at_end(e3r);
        g.faces[f2].add_edge_at_end(e1);
        g.faces[f2].add_edge_at_end(e5);
        g.faces[f2].add_edge_at_end(e4r);
        g.faces[f3].add_edge_at_end(e2);
        g.faces[f3].add_edge_at_end(e3);
        g.faces[f3].add_edge_at_end(e5r);
    }

    g
}
