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

//! Randomness utilities. Every function takes the generator it draws from;
//! callers seed one generator at the top of a pipeline so that a seed
//! reproduces the whole run.

use rand::Rng;

/// Returns a permutation of `[0, k)` drawn with the Fisher-Yates shuffle.
pub fn random_permutation<R: Rng>(k: usize, rng: &mut R) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..k).collect();
    for j in (0..k).rev() {
        let target = rng.random_range(0..=j);
        permutation.swap(j, target);
    }
    permutation
}

/// Returns a uniform value in `[least, bound)` that is not equal to `not`.
/// Drawn with a single sample: when `not` lies in the range, the draw is
/// taken from a range one shorter and shifted past `not`.
pub fn random_index_unequal_to<R: Rng>(
    least: usize,
    bound: usize,
    not: usize,
    rng: &mut R,
) -> usize {
    if least > not || bound <= not {
        rng.random_range(least..bound)
    } else {
        let value = rng.random_range(least..bound - 1);
        if value >= not { value + 1 } else { value }
    }
}
