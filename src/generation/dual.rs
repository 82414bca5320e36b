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

use crate::planar::basic_types::PlanarGraph;

/// Constructs the planar dual of a triangulation: one dual vertex per
/// primal face, one dual face per primal vertex, one dual edge per primal
/// edge connecting the faces on its two sides. The dual of a triangulation
/// is 3-regular. The result satisfies the full embedding invariants.
///
/// Panics when the input is not triangulated.
pub fn dual_graph(primal: &PlanarGraph) -> PlanarGraph {
    if !primal.is_triangulated() {
        panic!("dual construction requires a triangulated graph");
    }

    let mut dual = PlanarGraph::new();
    for _ in 0..primal.face_count() {
        dual.add_vertex();
    }
    for _ in 0..primal.vertex_count() {
        dual.add_face();
    }

    // dual edges keep the primal edge index; left/right dual faces come
    // from the primal endpoints with their roles swapped
    for &rep in &primal.edges {
        let edge = primal.half_edges[rep].edge;
        debug_assert_eq!(edge, dual.edge_count());
        let start = primal.half_edges[rep].left_face;
        let target = primal.right_face(rep);
        let left = primal.target(rep);
        let right = primal.half_edges[rep].start;
        let he = dual.edge_pair(edge, start, target, left, right);
        dual.add_edge(he);
    }

    // rotation order of a dual vertex: walk the primal face boundary,
    // then reverse - faces run counter-clockwise, rotations clockwise
    for face in &primal.faces {
        let dv = face.id;
        for &pe in &face.edges {
            let mut de = dual.edges[primal.half_edges[pe].edge];
            if dual.half_edges[de].start != dv {
                de = dual.twin(de);
            }
            assert_eq!(
                dual.half_edges[de].start, dv,
                "dual edge of primal edge {} does not touch face {}",
                primal.half_edges[pe].edge, dv
            );
            dual.vertices[dv].add_edge_at_end(de);
        }
        dual.vertices[dv].edges.reverse();
    }

    // boundary of a dual face: walk the primal vertex rotation, reversed
    // for the same reason
    for vertex in &primal.vertices {
        let df = vertex.id;
        for &pe in &vertex.edges {
            let mut de = dual.edges[primal.half_edges[pe].edge];
            if dual.half_edges[de].left_face != df {
                de = dual.twin(de);
            }
            assert_eq!(
                dual.half_edges[de].left_face, df,
                "dual edge of primal edge {} does not bound face {}",
                primal.half_edges[pe].edge, df
            );
            dual.faces[df].add_edge_at_end(de);
        }
        dual.faces[df].edges.reverse();
    }

    dual
}
