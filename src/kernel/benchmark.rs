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

/// Counters describing one kernel computation.
///
/// The contribution split attributes each kernel face to the input face that
/// generated its cutting plane: faces whose source touches a concave,
/// boundary or degenerate edge count as concave contribution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BenchmarkData {
    pub input_faces: usize,
    pub total_planes: usize,
    pub num_concave_planes: usize,
    pub kernel_faces: usize,
    pub convex_contribution: usize,
    pub concave_contribution: usize,
    pub is_convex: bool,
    /// The concurrent feasibility check proved emptiness before cutting
    /// finished.
    pub lp_early_out: bool,
}
