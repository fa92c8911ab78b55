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

use crate::geometry::point::IVec3;
use crate::geometry::{MAX_NORMAL, MAX_POSITION};
use crate::numeric::mul128;

/// Oriented plane `a*x + b*y + c*z + d = 0`.
///
/// The normal `(a,b,c)` points out of the solid it bounds; a point is strictly
/// inside the bounded halfspace iff its signed distance is negative. Normals
/// are not normalized. The zero plane (all of a,b,c zero) is the explicit
/// invalid value produced for collinear input triangles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Plane {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i128,
}

impl Plane {
    pub const INVALID: Plane = Plane { a: 0, b: 0, c: 0, d: 0 };

    pub const fn new(a: i64, b: i64, c: i64, d: i128) -> Self {
        Self { a, b, c, d }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.a != 0 || self.b != 0 || self.c != 0
    }

    /// Plane through three ordered points, normal `(p1-p0) x (p2-p0)`,
    /// gcd-reduced so coplanar faces with different triangulations compare
    /// equal. Collinear points yield [`Plane::INVALID`].
    pub fn from_points(p0: IVec3, p1: IVec3, p2: IVec3) -> Self {
        let n = IVec3::cross64(IVec3::diff64(p1, p0), IVec3::diff64(p2, p0));
        if n == [0, 0, 0] {
            return Plane::INVALID;
        }
        let f = gcd3(n[0].unsigned_abs(), n[1].unsigned_abs(), n[2].unsigned_abs()) as i64;
        let n = if f > 1 { [n[0] / f, n[1] / f, n[2] / f] } else { n };
        Self::with_normal_through(n, p0)
    }

    /// As [`Plane::from_points`] but without the gcd reduction; used where the
    /// raw cross product is wanted (cuboid faces, flood-fill plane lists).
    pub fn from_points_no_gcd(p0: IVec3, p1: IVec3, p2: IVec3) -> Self {
        let n = IVec3::cross64(IVec3::diff64(p1, p0), IVec3::diff64(p2, p0));
        if n == [0, 0, 0] {
            return Plane::INVALID;
        }
        Self::with_normal_through(n, p0)
    }

    /// Plane with the given normal passing through `p`.
    pub fn from_pos_normal(p: IVec3, n: [i64; 3]) -> Self {
        Self::with_normal_through(n, p)
    }

    fn with_normal_through(n: [i64; 3], p: IVec3) -> Self {
        debug_assert!(n[0].abs() <= MAX_NORMAL && n[1].abs() <= MAX_NORMAL && n[2].abs() <= MAX_NORMAL);
        debug_assert!(
            p.x.abs() <= MAX_POSITION && p.y.abs() <= MAX_POSITION && p.z.abs() <= MAX_POSITION
        );
        let d = mul128(-n[0], p.x as i64) + mul128(-n[1], p.y as i64) + mul128(-n[2], p.z as i64);
        Plane::new(n[0], n[1], n[2], d)
    }

    /// Unit-length normal and scaled offset for the floating-point descent
    /// heuristic; never consulted for an exact decision.
    pub fn signed_distance_f64(&self, p: [f64; 3]) -> f64 {
        let n = [self.a as f64, self.b as f64, self.c as f64];
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        (n[0] * p[0] + n[1] * p[1] + n[2] * p[2] + self.d as f64) / len
    }

    pub fn normal_f64(&self) -> [f64; 3] {
        [self.a as f64, self.b as f64, self.c as f64]
    }
}

fn gcd2(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn gcd3(a: u64, b: u64, c: u64) -> u64 {
    gcd2(gcd2(a, b), c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_reduction() {
        // doubled triangle in the z=0 plane: raw normal (0,0,8), reduced (0,0,1)
        let p = Plane::from_points(
            IVec3::new(0, 0, 0),
            IVec3::new(4, 0, 0),
            IVec3::new(0, 4, 0),
        );
        assert_eq!((p.a, p.b, p.c, p.d), (0, 0, 1, 0));

        let raw = Plane::from_points_no_gcd(
            IVec3::new(0, 0, 0),
            IVec3::new(4, 0, 0),
            IVec3::new(0, 4, 0),
        );
        assert_eq!((raw.a, raw.b, raw.c, raw.d), (0, 0, 16, 0));
    }

    #[test]
    fn collinear_is_invalid() {
        let p = Plane::from_points(
            IVec3::new(0, 0, 0),
            IVec3::new(1, 1, 1),
            IVec3::new(3, 3, 3),
        );
        assert!(!p.is_valid());
    }
}
