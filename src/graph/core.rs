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

use ahash::AHashSet;

use crate::graph::basic_types::{Edge, Graph, Vertex};

impl Graph {
    /// An edgeless graph on `n` vertices with ids `0..n`.
    pub fn new(n: usize, directed: bool) -> Self {
        Self {
            vertices: (0..n).map(Vertex::new).collect(),
            edges: Vec::new(),
            directed,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds an edge between the two vertices and registers it on both.
    /// Undirected edges are stored with the smaller endpoint first.
    pub fn add_edge(&mut self, a: usize, b: usize) -> usize {
        let (start, target) = if !self.directed && a > b { (b, a) } else { (a, b) };
        let id = self.edges.len();
        self.edges.push(Edge { id, start, target });
        self.vertices[start].edges.push(id);
        self.vertices[target].edges.push(id);
        id
    }

    pub fn degree(&self, vertex: usize) -> usize {
        self.vertices[vertex].degree()
    }

    /// The endpoint of `edge` opposite to `vertex`.
    pub fn other_end(&self, edge: usize, vertex: usize) -> usize {
        let e = &self.edges[edge];
        if e.start == vertex {
            e.target
        } else if e.target == vertex {
            e.start
        } else {
            panic!("vertex {} is not an endpoint of edge {}", vertex, edge);
        }
    }

    pub fn neighbors(&self, vertex: usize) -> Vec<usize> {
        self.vertices[vertex]
            .edges
            .iter()
            .map(|&e| self.other_end(e, vertex))
            .collect()
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.vertices[a].edges.iter().any(|&e| self.other_end(e, a) == b)
    }

    /// Edge count over the maximum possible edge count.
    pub fn density(&self) -> f64 {
        let n = self.vertex_count();
        let max_m = n * n.saturating_sub(1) / 2;
        self.edge_count() as f64 / max_m as f64
    }

    /// Whether ids line up with positions, incidence lists match the edge
    /// list, and the graph is simple: no loops, no multi-edges, and the
    /// degree sum equals `2m`.
    pub fn is_valid(&self) -> bool {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if vertex.id != i {
                return false;
            }
        }
        for (i, edge) in self.edges.iter().enumerate() {
            if edge.id != i {
                return false;
            }
            if !self.directed && edge.start >= edge.target {
                return false;
            }
            if !self.vertices[edge.start].edges.contains(&edge.id)
                || !self.vertices[edge.target].edges.contains(&edge.id)
            {
                return false;
            }
        }

        for vertex in &self.vertices {
            let mut seen = AHashSet::with_capacity(vertex.degree());
            for &e in &vertex.edges {
                let other = self.other_end(e, vertex.id);
                if other == vertex.id {
                    return false;
                }
                if !seen.insert(other) {
                    return false;
                }
            }
        }

        let degree_sum: usize = self.vertices.iter().map(Vertex::degree).sum();
        degree_sum == 2 * self.edge_count()
    }
}
