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

//! Exact intersections of planes and lines by cofactor expansion.

use crate::geometry::line::Line;
use crate::geometry::plane::Plane;
use crate::geometry::point4::Point4;
use crate::numeric::{mul128, mul192, mul256};

/// Homogeneous intersection point of three planes. `W` is the determinant of
/// the normal sub-matrix; `W == 0` means the planes are not in general
/// position and the point is invalid.
pub fn intersect_planes(p: &Plane, q: &Plane, r: &Plane) -> Point4 {
    let det_ab = mul128(p.a, q.b) - mul128(p.b, q.a);
    let det_ac = mul128(p.a, q.c) - mul128(p.c, q.a);
    let det_bc = mul128(p.b, q.c) - mul128(p.c, q.b);
    let det_ad = mul192(p.a, q.d) - mul192(q.a, p.d);
    let det_bd = mul192(p.b, q.d) - mul192(q.b, p.d);
    let det_cd = mul192(p.c, q.d) - mul192(q.c, p.d);

    let det_abc = mul192(det_ab, r.c) - mul192(det_ac, r.b) + mul192(det_bc, r.a);

    let det_abd = mul256(det_ad, r.b) - mul256(det_ab, r.d) - mul256(det_bd, r.a);
    let det_acd = mul256(det_ac, r.d) - mul256(det_ad, r.c) + mul256(det_cd, r.a);
    let det_bcd = mul256(det_bd, r.c) - mul256(det_cd, r.b) - mul256(det_bc, r.d);

    Point4::new(det_bcd, det_acd, det_abd, det_abc)
}

/// Line of intersection of two planes. Invalid (zero normal part) iff the
/// planes are parallel.
pub fn intersect_plane_pair(p0: &Plane, p1: &Plane) -> Line {
    Line {
        bc_cb: mul128(p0.b, p1.c) - mul128(p0.c, p1.b), // cross product x
        ca_ac: mul128(p0.c, p1.a) - mul128(p0.a, p1.c), // cross product y
        ab_ba: mul128(p0.a, p1.b) - mul128(p0.b, p1.a), // cross product z

        ad_da: mul192(p0.a, p1.d) - mul192(p1.a, p0.d),
        bd_db: mul192(p0.b, p1.d) - mul192(p1.b, p0.d),
        cd_dc: mul192(p0.c, p1.d) - mul192(p1.c, p0.d),
    }
}

/// Homogeneous intersection of a line with a plane; `W == 0` iff the line is
/// parallel to the plane.
pub fn intersect_line_plane(l: &Line, p: &Plane) -> Point4 {
    let x = mul256(p.c, l.bd_db) - mul256(p.b, l.cd_dc) - mul256(p.d, l.bc_cb);
    let y = mul256(p.a, l.cd_dc) - mul256(p.c, l.ad_da) - mul256(p.d, l.ca_ac);
    let z = mul256(p.b, l.ad_da) - mul256(p.a, l.bd_db) - mul256(p.d, l.ab_ba);
    let w = mul192(p.a, l.bc_cb) + mul192(p.b, l.ca_ac) + mul192(p.c, l.ab_ba);
    Point4::new(x, y, z, w)
}
