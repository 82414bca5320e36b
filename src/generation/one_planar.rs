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

use rand::{SeedableRng, rngs::StdRng};

use crate::generation::edge_flip::max_planar_graph;
use crate::planar::basic_types::PlanarGraph;
use crate::random::random_permutation;

/// Augments a triangulation into a 1-planar graph: for each vertex `x`, in
/// a one-time random order, each pair of clockwise-consecutive neighbors
/// `(u, v)` is examined. With `y` the far vertex of the triangle on the
/// other side of `u-v`, the crossing edge `x-y` is added when `xu`, `xv`,
/// `uv`, `uy` and `vy` are all original edges and `x` and `y` are not yet
/// adjacent. Each crossing edge crosses exactly one original edge (`u-v`),
/// and no original edge hosts more than one crossing.
///
/// Crossing edges get undirected indices at or above the pre-augmentation
/// edge count, which excludes them from later candidate checks. Rotation
/// orders stay consistent; face boundaries are left stale and no repair is
/// attempted, so `validate` and `is_triangulated` are meaningless on the
/// augmented structure. Returns the number of edges added.
pub fn augment_one_planar(g: &mut PlanarGraph, seed: u64) -> usize {
    let m = g.edge_count();
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(m as u64));
    let mut added = 0;

    // process vertices in random order, each exactly once; with all other
    // vertices done, the final two have no pair left to offer
    let order = random_permutation(g.vertex_count(), &mut rng);
    let to_consider = g.vertex_count().saturating_sub(2);

    for &x in order.iter().rev().take(to_consider) {
        // walk the live rotation order; insertions shift it, and the skip
        // distances below keep the scan aligned with it
        let mut i = 0;
        while i < g.vertices[x].degree() {
            let degree = g.vertices[x].degree();
            let j = if i == 0 { degree - 1 } else { i - 1 };
            let xu = g.vertices[x].edges[j];
            if g.half_edges[xu].edge >= m {
                i += 1;
                continue;
            }
            let xv = g.vertices[x].edges[i];
            if g.half_edges[xv].edge >= m {
                // v cannot serve as the next pair's u either
                i += 2;
                continue;
            }
            let u = g.target(xu);
            let v = g.target(xv);

            // the bridge u-v closing the triangle {x,u,v}
            let uv = g.prev_at_start(g.twin(xu));
            if g.half_edges[uv].edge >= m {
                i += 2;
                continue;
            }
            assert_eq!(g.target(uv), v, "rotation order at vertex {} broken", u);
            let uy = g.prev_at_start(uv);
            if g.half_edges[uy].edge >= m {
                i += 1;
                continue;
            }
            let y = g.target(uy);

            let vu = g.next_at_start(g.twin(xv));
            if g.half_edges[vu].edge >= m {
                i += 1;
                continue;
            }
            assert!(
                g.target(vu) == u && g.twin(vu) == uv,
                "rotation order at vertex {} broken",
                v
            );
            let vy = g.next_at_start(vu);
            if g.half_edges[vy].edge >= m {
                i += 1;
                continue;
            }
            assert_eq!(g.target(vy), y, "far vertex of edge {} ambiguous", uv);

            if g.are_adjacent(x, y) {
                // y would again be the far vertex of the next pair
                i += 2;
                continue;
            }

            // crossing edge found: splice x-y over u-v
            let left = g.half_edges[xv].left_face;
            let right = g.half_edges[vy].left_face;
            let xy = g.edge_pair(m + added, x, y, left, right);
            added += 1;
            let (xy_r, vy_r) = (g.twin(xy), g.twin(vy));
            g.vertices[x].add_edge_after(xy, xu);
            g.vertices[y].add_edge_after(xy_r, vy_r);
            // faces are stale from here on - nothing to update
            g.add_edge(xy);
            i += 1;
        }
    }

    added
}

/// Creates a 1-planar graph: a maximal planar graph (Apollonian network
/// plus edge flips) augmented with crossing edges.
pub fn one_planar_graph(num_vertices: usize, num_flips: u64, seed: u64) -> PlanarGraph {
    let mut g = max_planar_graph(num_vertices, num_flips, seed);
    augment_one_planar(&mut g, seed.wrapping_add(1));
    g
}
