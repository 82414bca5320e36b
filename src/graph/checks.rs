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

use crate::graph::basic_types::Graph;

/// Whether the graph is connected. The empty graph counts as connected.
pub fn is_connected(graph: &Graph) -> bool {
    let n = graph.vertex_count();
    if n == 0 {
        return true;
    }

    let mut visited = vec![false; n];
    let mut stack = vec![0];
    visited[0] = true;
    let mut num_visited = 1;
    while let Some(u) = stack.pop() {
        for v in graph.neighbors(u) {
            if !visited[v] {
                visited[v] = true;
                num_visited += 1;
                stack.push(v);
            }
        }
    }

    num_visited == n
}

/// Whether the graph is bipartite.
pub fn is_bipartite(graph: &Graph) -> bool {
    let n = graph.vertex_count();
    if n == 0 {
        return true;
    }

    let mut partition: Vec<Option<bool>> = vec![None; n];
    for root in 0..n {
        if partition[root].is_some() {
            continue;
        }
        partition[root] = Some(false);
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            for v in graph.neighbors(u) {
                if partition[v] == partition[u] {
                    return false;
                }
                if partition[v].is_none() {
                    partition[v] = Some(partition[u] == Some(false));
                    stack.push(v);
                }
            }
        }
    }

    true
}

/// Whether the graph is a tree. A forest with more than one component is
/// not a tree.
pub fn is_tree(graph: &Graph) -> bool {
    graph.vertex_count() >= 1
        && graph.edge_count() == graph.vertex_count() - 1
        && is_connected(graph)
}
