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

/// Number of axes of the culling bounding volume. `K3` degenerates to an
/// axis-aligned box; the larger sets add the canonical diagonal axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KdopK {
    #[default]
    K3,
    K8,
    K9,
    K12,
}

#[derive(Clone, Debug)]
pub struct KernelOptions {
    /// Deduplicate cutting planes through a hash set of gcd-canonicalized
    /// planes instead of the coplanar-region flood fill.
    pub use_hash_set_for_planes: bool,
    /// Skip cutting planes that cannot intersect the bounding volume of the
    /// candidate polyhedron.
    pub use_bounding_volume: bool,
    pub kdop_k: KdopK,
    /// Run the exact feasibility solver concurrently and abort cutting as
    /// soon as it proves the kernel empty.
    pub parallel_feasibility: bool,
    /// Fan-triangulate the kernel faces before returning.
    pub triangulate_output: bool,
    /// Face count above which preprocessing is dispatched to the worker pool.
    pub min_faces_for_parallel_setup: usize,
}

impl Default for KernelOptions {
    fn default() -> Self {
        Self {
            use_hash_set_for_planes: false,
            use_bounding_volume: true,
            kdop_k: KdopK::K3,
            parallel_feasibility: true,
            triangulate_output: false,
            min_faces_for_parallel_setup: 100_000,
        }
    }
}
