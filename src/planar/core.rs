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

use crate::planar::{
    basic_types::PlanarGraph, face::PlanarFace, half_edge::HalfEdge, vertex::PlanarVertex,
};

impl PlanarGraph {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            half_edges: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn add_vertex(&mut self) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(PlanarVertex::new(idx));
        idx
    }

    pub fn add_face(&mut self) -> usize {
        let idx = self.faces.len();
        self.faces.push(PlanarFace::new(idx));
        idx
    }

    /// Creates the two half-edges of a new undirected edge from `start` to
    /// `target` with `left_face`/`right_face` on its sides, twins linked
    /// once at creation. Returns the forward half; its twin sits at the
    /// next arena index. Wires neither rotation orders nor boundaries, and
    /// does not register the edge; callers do both atomically with
    /// construction.
    pub fn edge_pair(
        &mut self,
        edge: usize,
        start: usize,
        target: usize,
        left_face: usize,
        right_face: usize,
    ) -> usize {
        let fwd = self.half_edges.len();
        let rev = fwd + 1;
        self.half_edges.push(HalfEdge::new(edge, start, left_face));
        self.half_edges.push(HalfEdge::new(edge, target, right_face));
        self.half_edges[fwd].set_twin(rev);
        self.half_edges[rev].set_twin(fwd);
        fwd
    }

    /// Appends a representative half-edge to the edge collection.
    pub fn add_edge(&mut self, half_edge: usize) {
        self.edges.push(half_edge);
    }

    // - - - NAVIGATION - - -

    #[inline]
    pub fn twin(&self, half_edge: usize) -> usize {
        self.half_edges[half_edge].twin
    }

    /// End vertex: the start of the twin.
    #[inline]
    pub fn target(&self, half_edge: usize) -> usize {
        self.half_edges[self.twin(half_edge)].start
    }

    #[inline]
    pub fn left_face(&self, half_edge: usize) -> usize {
        self.half_edges[half_edge].left_face
    }

    #[inline]
    pub fn right_face(&self, half_edge: usize) -> usize {
        self.left_face(self.twin(half_edge))
    }

    /// The half-edge clockwise-next at the start vertex.
    pub fn next_at_start(&self, half_edge: usize) -> usize {
        self.vertices[self.half_edges[half_edge].start].next_edge(half_edge)
    }

    /// The half-edge clockwise-previous at the start vertex.
    pub fn prev_at_start(&self, half_edge: usize) -> usize {
        self.vertices[self.half_edges[half_edge].start].prev_edge(half_edge)
    }

    /// The next half-edge counter-clockwise along the left face.
    pub fn next_along_face(&self, half_edge: usize) -> usize {
        self.next_at_start(self.twin(half_edge))
    }

    /// The previous half-edge counter-clockwise along the left face.
    pub fn prev_along_face(&self, half_edge: usize) -> usize {
        self.twin(self.prev_at_start(half_edge))
    }

    // - - - ADJACENCY QUERIES - - -

    /// Neighbors of `vertex` in clockwise order.
    pub fn neighbors_cw(&self, vertex: usize) -> Vec<usize> {
        self.vertices[vertex]
            .edges
            .iter()
            .map(|&he| self.target(he))
            .collect()
    }

    pub fn are_adjacent(&self, vertex: usize, other: usize) -> bool {
        self.vertices[vertex]
            .edges
            .iter()
            .any(|&he| self.target(he) == other)
    }

    /// The outgoing half-edge from `vertex` to `target`, if adjacent.
    pub fn half_edge_between(&self, vertex: usize, target: usize) -> Option<usize> {
        self.vertices[vertex]
            .edges
            .iter()
            .copied()
            .find(|&he| self.target(he) == target)
    }

    /// Vertices around `face` in counter-clockwise order.
    pub fn face_vertices(&self, face: usize) -> Vec<usize> {
        self.faces[face]
            .edges
            .iter()
            .map(|&he| self.half_edges[he].start)
            .collect()
    }

    // - - - GLOBAL QUERIES - - -

    /// Whether every face has exactly 3 bounding edges.
    pub fn is_triangulated(&self) -> bool {
        self.faces.iter().all(|face| face.size() == 3)
    }

    /// Whether every vertex has degree 3.
    pub fn is_three_regular(&self) -> bool {
        self.vertices.iter().all(|vertex| vertex.degree() == 3)
    }
}
