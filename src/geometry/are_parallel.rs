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

use crate::geometry::line::Line;
use crate::geometry::plane::Plane;
use crate::numeric::{mul128, mul192, I192};

/// True if the two planes have parallel normals (not necessarily the same
/// offset): their cross product vanishes.
pub fn are_parallel_planes(p0: &Plane, p1: &Plane) -> bool {
    let cx = mul128(p0.b, p1.c) - mul128(p0.c, p1.b);
    let cy = mul128(p0.c, p1.a) - mul128(p0.a, p1.c);
    let cz = mul128(p0.a, p1.b) - mul128(p0.b, p1.a);
    cx == 0 && cy == 0 && cz == 0
}

/// True if the line direction is perpendicular to the plane normal.
pub fn are_parallel_plane_line(plane: &Plane, line: &Line) -> bool {
    let dot = mul192(plane.a, line.bc_cb)
        + mul192(plane.b, line.ca_ac)
        + mul192(plane.c, line.ab_ba);
    dot == I192::ZERO
}
