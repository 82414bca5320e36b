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

use smallvec::SmallVec;

/// A face of a planar graph, bounded by half-edges in counter-clockwise
/// order. Every boundary half-edge has this face as its left face.
#[derive(Clone, Debug)]
pub struct PlanarFace {
    pub id: usize,
    /// Boundary half-edges in counter-clockwise order.
    pub edges: SmallVec<[usize; 6]>,
}

impl PlanarFace {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            edges: SmallVec::new(),
        }
    }

    /// Number of edges around this face.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    fn position_of(&self, half_edge: usize) -> usize {
        self.edges
            .iter()
            .position(|&he| he == half_edge)
            .unwrap_or_else(|| {
                panic!(
                    "half-edge {} not on boundary of face {}",
                    half_edge, self.id
                )
            })
    }

    /// Inserts `to_add` directly after `after` in the boundary order.
    pub fn add_edge_after(&mut self, to_add: usize, after: usize) {
        let at = self.position_of(after) + 1;
        self.edges.insert(at, to_add);
    }

    pub fn add_edge_at_end(&mut self, to_add: usize) {
        self.edges.push(to_add);
    }

    pub fn remove_edge(&mut self, to_remove: usize) {
        let at = self.position_of(to_remove);
        self.edges.remove(at);
    }
}
