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

/// A vertex of a planar graph. Outgoing half-edges are kept in clockwise
/// rotation order; that order is what carries the embedding.
#[derive(Clone, Debug)]
pub struct PlanarVertex {
    pub id: usize,
    /// Outgoing half-edges in clockwise order.
    pub edges: SmallVec<[usize; 8]>,
}

impl PlanarVertex {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            edges: SmallVec::new(),
        }
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    fn position_of(&self, half_edge: usize) -> usize {
        self.edges
            .iter()
            .position(|&he| he == half_edge)
            .unwrap_or_else(|| {
                panic!(
                    "half-edge {} not in rotation order of vertex {}",
                    half_edge, self.id
                )
            })
    }

    /// Inserts `to_add` directly after `after` in the rotation order.
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

    /// The half-edge clockwise-next after the given one, wrapping.
    pub fn next_edge(&self, half_edge: usize) -> usize {
        let at = self.position_of(half_edge);
        self.edges[(at + 1) % self.edges.len()]
    }

    /// The half-edge clockwise-previous to the given one, wrapping.
    pub fn prev_edge(&self, half_edge: usize) -> usize {
        let at = self.position_of(half_edge);
        self.edges[(at + self.edges.len() - 1) % self.edges.len()]
    }
}
