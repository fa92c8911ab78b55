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

//! Exact integer plane geometry: planes `ax+by+cz+d=0`, homogeneous points,
//! plane-pair lines, and the sign predicates built on them.
//!
//! Bit widths are fixed for the whole crate: positions use at most
//! [`BITS_POSITION`] bits, normals at most [`BITS_NORMAL`], and every derived
//! width below follows by construction. The widths are what a triple-plane
//! intersection actually produces, so the homogeneous coordinates of any
//! vertex the cutter can create are representable without overflow.

pub mod aabb;
pub mod any_point;
pub mod are_parallel;
pub mod classify;
pub mod intersect;
pub mod line;
pub mod plane;
pub mod point;
pub mod point4;

pub use aabb::IAabb;
pub use any_point::{any_point_on_line, any_point_on_plane};
pub use are_parallel::{are_parallel_plane_line, are_parallel_planes};
pub use classify::{classify_aabb, classify_point4, classify_pos, signed_distance};
pub use intersect::{intersect_line_plane, intersect_plane_pair, intersect_planes};
pub use line::Line;
pub use plane::Plane;
pub use point::IVec3;
pub use point4::Point4;

/// Bits of a position component; positions live in [-2^26, 2^26].
pub const BITS_POSITION: u32 = 26;
/// Bits of a plane normal component.
pub const BITS_NORMAL: u32 = 55;
/// Bits of a plane d coefficient: position + normal + 2.
pub const BITS_PLANE_D: u32 = BITS_POSITION + BITS_NORMAL + 2;
/// Bits of the (a,b,c) 3x3 determinant: the W of a triple-plane intersection.
pub const BITS_DET_ABC: u32 = 3 * BITS_NORMAL + 3;
/// Bits of the mixed determinants: the X/Y/Z of a triple-plane intersection.
pub const BITS_DET_XXD: u32 = 2 * BITS_NORMAL + BITS_PLANE_D + 3;

/// Largest admissible position component magnitude.
pub const MAX_POSITION: i32 = 1 << BITS_POSITION;
/// Largest admissible normal component magnitude.
pub const MAX_NORMAL: i64 = 1 << BITS_NORMAL;
