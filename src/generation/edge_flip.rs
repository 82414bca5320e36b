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

use crate::generation::apollonian::apollonian_network;
use crate::planar::basic_types::{FlipReject, PlanarGraph};

/// Flips the edge the given half-edge belongs to: the shared edge `v0-v2`
/// of the two incident triangles `{v0,v1,v2}` and `{v0,v2,v3}` is replaced
/// by the other diagonal `v1-v3` of the quadrilateral they form. Rotation
/// orders and both face boundaries are respliced in place; `n`, `m`, `f`
/// and the triangulation property are preserved.
///
/// Rejected without touching the graph when `v1` and `v3` are already
/// adjacent, since the flip would create a double edge.
pub fn try_flip(g: &mut PlanarGraph, half_edge: usize) -> Result<(), FlipReject> {
    let flip = half_edge;
    let flip_r = g.twin(flip);

    // the surrounding quadrilateral v0-v1-v2-v3, cycle edges e0-e1-e2-e3
    let v0 = g.half_edges[flip].start;
    let e0 = g.next_at_start(flip);
    let v1 = g.target(e0);
    let v2 = g.target(flip);
    let e2 = g.next_along_face(flip);
    let v3 = g.target(e2);

    if g.are_adjacent(v1, v3) {
        return Err(FlipReject::DiagonalExists);
    }

    let f1 = g.left_face(flip);
    let f2 = g.right_face(flip);
    let e1 = g.next_along_face(e0);
    let e3 = g.next_along_face(e2);

    // re-point the diagonal from v0-v2 to v1-v3
    g.half_edges[flip].start = v1;
    g.half_edges[flip_r].start = v3;

    let (e0r, e2r) = (g.twin(e0), g.twin(e2));
    g.vertices[v0].remove_edge(flip);
    g.vertices[v2].remove_edge(flip_r);
    g.vertices[v1].add_edge_after(flip, e0r);
    g.vertices[v3].add_edge_after(flip_r, e2r);

    // the faces become {v0,v1,v3} and {v1,v2,v3}; the diagonal keeps both
    g.half_edges[e0].left_face = f1;
    g.half_edges[e2].left_face = f2;

    g.faces[f1].remove_edge(e2);
    g.faces[f1].add_edge_after(e0, e3);
    g.faces[f2].remove_edge(e0);
    g.faces[f2].add_edge_after(e2, e1);

    Ok(())
}

/// Performs `num_flips` random edge flips on a triangulation. Candidates
/// are drawn uniformly from the edge collection; a rejected candidate does
/// not count against `num_flips`, a fresh edge is drawn instead. Only the
/// combinatorial embedding changes.
///
/// Panics for graphs with fewer than 5 vertices, where no edge is
/// flippable.
pub fn flip_edges(g: &mut PlanarGraph, num_flips: u64, seed: u64) {
    if g.vertex_count() < 5 {
        panic!("edge flips need at least 5 vertices");
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut flipped = 0;
    while flipped < num_flips {
        let candidate = g.edges[rng.random_range(0..g.edge_count())];
        if try_flip(g, candidate).is_ok() {
            flipped += 1;
        }
    }
}

/// Creates a maximal planar graph: an Apollonian network perturbed by the
/// given number of random edge flips.
pub fn max_planar_graph(num_vertices: usize, num_flips: u64, seed: u64) -> PlanarGraph {
    let mut g = apollonian_network(num_vertices, seed);
    flip_edges(&mut g, num_flips, seed.wrapping_add(1));
    g
}
