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

//! Exact side-of-plane predicates. Returning 0 means exactly on the plane.

use crate::geometry::aabb::IAabb;
use crate::geometry::plane::Plane;
use crate::geometry::point::IVec3;
use crate::geometry::point4::Point4;
use crate::numeric::{mul128, mul256};

/// Sign of the signed distance of a homogeneous point to a plane:
/// `sign(a*X + b*Y + c*Z + d*W) * sign(W)`.
pub fn classify_point4(pt: &Point4, pl: &Plane) -> i8 {
    let s = mul256(pt.x, pl.a) + mul256(pt.y, pl.b) + (mul256(pt.z, pl.c) + mul256(pt.w, pl.d));
    s.signum() * pt.w.signum()
}

/// Signed distance of an integer position to a plane, scaled by the normal
/// length. Positive in normal direction.
pub fn signed_distance(pl: &Plane, p: IVec3) -> i128 {
    mul128(pl.a, p.x as i64) + mul128(pl.b, p.y as i64) + mul128(pl.c, p.z as i64) + pl.d
}

/// Sign of the signed distance of an integer position.
pub fn classify_pos(p: IVec3, pl: &Plane) -> i8 {
    sign_i128(signed_distance(pl, p))
}

/// Classifies a bounding box against a plane:
/// `+1` completely on the positive side, `-1` completely on the negative
/// side, `0` possibly crossed. All coordinates are doubled so the center
/// stays integral.
pub fn classify_aabb(bb: &IAabb, pl: &Plane) -> i8 {
    let c = bb.min + bb.max;
    let s = bb.max - bb.min;

    let mut d = pl.d << 1;
    d += mul128(pl.a, c.x as i64);
    d += mul128(pl.b, c.y as i64);
    d += mul128(pl.c, c.z as i64);

    let hn = mul128(pl.a.abs(), s.x as i64)
        + mul128(pl.b.abs(), s.y as i64)
        + mul128(pl.c.abs(), s.z as i64);

    if hn + d < 0 {
        return -1;
    }
    if hn - d < 0 {
        return 1;
    }
    0
}

#[inline]
fn sign_i128(v: i128) -> i8 {
    match v {
        0 => 0,
        v if v < 0 => -1,
        _ => 1,
    }
}
