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

//! Exact computation of the kernel of a closed polyhedral surface.
//!
//! The kernel of a polyhedron is the set of points from which every boundary
//! point is visible — equivalently the intersection of the closed negative
//! halfspaces of its oriented face planes. This crate computes it exactly for
//! meshes with integer vertex positions: all decisions on the cutting path go
//! through fixed-width big-integer predicates, never floating point.
//!
//! Entry point: build an [`InputMesh`] from integer positions and polygonal
//! faces, then run [`MeshKernel::compute`].

pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod numeric;

pub use kernel::analysis::EdgeState;
pub use kernel::benchmark::BenchmarkData;
pub use kernel::feasibility::is_feasible;
pub use kernel::options::{KdopK, KernelOptions};
pub use kernel::plane_cut::MeshKernel;
pub use kernel::{InputMesh, KernelError};
