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

/// Sentinel for a half-edge whose reversed partner has not been linked yet.
pub const NO_TWIN: usize = usize::MAX;

/// A directed arc of a planar graph. Two half-edges linked as mutual twins
/// form one undirected edge; `edge` is that edge's stable index. Edges go
/// counter-clockwise along their left face.
#[derive(Clone, Debug)]
pub struct HalfEdge {
    /// Undirected edge index. An index at or above the original edge count
    /// marks a crossing edge added by 1-planar augmentation.
    pub edge: usize,
    /// Start vertex; the twin starts at the other endpoint.
    pub start: usize,
    /// The face left of this half-edge.
    pub left_face: usize,
    /// Arena index of the reversed partner half-edge.
    pub twin: usize,
}

impl HalfEdge {
    pub fn new(edge: usize, start: usize, left_face: usize) -> Self {
        Self {
            edge,
            start,
            left_face,
            twin: NO_TWIN,
        }
    }

    /// Links the reversed partner. The twin relation is an identity fixed at
    /// pair creation; linking an already twinned half-edge panics.
    pub fn set_twin(&mut self, twin: usize) {
        if self.twin != NO_TWIN {
            panic!("half-edge already has twin {}", self.twin);
        }
        self.twin = twin;
    }
}
