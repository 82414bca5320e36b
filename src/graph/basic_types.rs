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

/// A vertex of a flat [`Graph`], carrying the ids of its incident edges.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub id: usize,
    /// Incident edge ids, in insertion order.
    pub edges: Vec<usize>,
}

impl Vertex {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            edges: Vec::new(),
        }
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// An edge of a flat [`Graph`]. For undirected graphs the start vertex has
/// the smaller id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub id: usize,
    pub start: usize,
    pub target: usize,
}

/// A flat adjacency model: a fixed vertex set plus an edge list, with no
/// embedding or face information. This is the projection target for the
/// planar engine and the substrate for the basic property checks.
#[derive(Clone, Debug)]
pub struct Graph {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub directed: bool,
}
