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

use crate::planar::basic_types::{GraphDefect, PlanarGraph};

impl PlanarGraph {
    /// Walks the whole structure and checks the embedding invariants:
    /// rotation orders, the half-edge navigation identities, face boundary
    /// chains and Euler's formula. Returns the first defect found with the
    /// offending ids. O(n + m + f); intended as the oracle after a
    /// construction phase, not as a per-mutation check.
    ///
    /// Not meaningful after 1-planar augmentation: crossing edges leave
    /// face boundaries stale.
    pub fn validate(&self) -> Result<(), GraphDefect> {
        // vertices: all entries start here, consecutive wedges share a face
        for vertex in &self.vertices {
            for &he in &vertex.edges {
                if self.half_edges[he].start != vertex.id {
                    return Err(GraphDefect::ForeignRotationEdge {
                        vertex: vertex.id,
                        half_edge: he,
                    });
                }
            }
            if let Some(&last) = vertex.edges.last() {
                let mut current = last;
                for &next in &vertex.edges {
                    if self.right_face(current) != self.left_face(next) {
                        return Err(GraphDefect::WedgeFaceMismatch {
                            vertex: vertex.id,
                            current,
                            next,
                        });
                    }
                    current = next;
                }
            }
        }

        // half-edges: the derived-navigation identities
        for he in 0..self.half_edges.len() {
            if self.left_face(he) != self.left_face(self.next_along_face(he)) {
                return Err(GraphDefect::NextFaceMismatch { half_edge: he });
            }
            if self.left_face(he) != self.left_face(self.prev_along_face(he)) {
                return Err(GraphDefect::PrevFaceMismatch { half_edge: he });
            }
            if self.twin(he) != self.prev_along_face(self.next_at_start(he)) {
                return Err(GraphDefect::TwinChainBroken { half_edge: he });
            }
        }

        // faces: boundary entries belong here and chain up cyclically
        for face in &self.faces {
            for &he in &face.edges {
                if self.half_edges[he].left_face != face.id {
                    return Err(GraphDefect::ForeignBoundaryEdge {
                        face: face.id,
                        half_edge: he,
                    });
                }
            }
            if let Some(&last) = face.edges.last() {
                let mut current = last;
                for &next in &face.edges {
                    if self.next_along_face(current) != next
                        || self.prev_along_face(next) != current
                    {
                        return Err(GraphDefect::BoundaryChainBroken {
                            face: face.id,
                            half_edge: next,
                        });
                    }
                    current = next;
                }
            }
        }

        let (n, m, f) = (self.vertex_count(), self.edge_count(), self.face_count());
        if n + f != m + 2 {
            return Err(GraphDefect::EulerFormula { n, m, f });
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
