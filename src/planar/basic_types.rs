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

use crate::planar::{face::PlanarFace, half_edge::HalfEdge, vertex::PlanarVertex};

/// A planar graph with an explicit combinatorial embedding: vertices carry
/// their outgoing half-edges in clockwise rotation order, faces carry their
/// boundary in counter-clockwise order, and every undirected edge is a pair
/// of mutually twinned half-edges.
///
/// All entities live in append-only arenas and are referenced by `usize`
/// handles; nothing is ever freed. Mutation happens in whole construction
/// phases (build, flip, augment); callers must not hold iteration state
/// across a mutating call.
#[derive(Clone, Debug)]
pub struct PlanarGraph {
    pub vertices: Vec<PlanarVertex>,
    pub half_edges: Vec<HalfEdge>,
    /// One representative half-edge per undirected edge, in creation order.
    pub edges: Vec<usize>,
    pub faces: Vec<PlanarFace>,
}

/// A structural defect found by [`PlanarGraph::validate`], carrying the ids
/// needed to diagnose it. The first defect encountered is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphDefect {
    /// A rotation-order entry does not start at its vertex.
    ForeignRotationEdge { vertex: usize, half_edge: usize },
    /// Two consecutive edges in a rotation order disagree on the face
    /// between them: `right_face(current) != left_face(next)`.
    WedgeFaceMismatch {
        vertex: usize,
        current: usize,
        next: usize,
    },
    /// `left_face(e) != left_face(next_along_face(e))`.
    NextFaceMismatch { half_edge: usize },
    /// `left_face(e) != left_face(prev_along_face(e))`.
    PrevFaceMismatch { half_edge: usize },
    /// `twin(e) != prev_along_face(next_at_start(e))`.
    TwinChainBroken { half_edge: usize },
    /// A boundary entry does not have its face as left face.
    ForeignBoundaryEdge { face: usize, half_edge: usize },
    /// The boundary list is not the cyclic face-traversal chain.
    BoundaryChainBroken { face: usize, half_edge: usize },
    /// `n - m + f != 2`.
    EulerFormula { n: usize, m: usize, f: usize },
}

/// Why a single edge flip was not performed. Rejection leaves the graph
/// untouched; randomized flipping retries with a fresh candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipReject {
    /// The opposite corners of the two incident triangles are already
    /// adjacent; flipping would create a double edge.
    DiagonalExists,
}
