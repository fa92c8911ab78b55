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
use crate::numeric::{I192, I256};

/// Homogeneous point `(X/W, Y/W, Z/W)`.
///
/// The component widths are exactly what a triple-plane intersection
/// produces: X/Y/Z are mixed 3x3 determinants, W is the determinant of the
/// normal sub-matrix. `W == 0` marks the invalid point of three planes not in
/// general position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point4 {
    pub x: I256,
    pub y: I256,
    pub z: I256,
    pub w: I192,
}

impl Point4 {
    pub fn new(x: I256, y: I256, z: I256, w: I192) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.w.is_zero()
    }

    /// Rounded Euclidean coordinates. Finite whenever `W != 0`.
    pub fn to_f64(&self) -> [f64; 3] {
        debug_assert!(self.is_valid());
        let iw = 1.0 / self.w.to_f64();
        [
            self.x.to_f64() * iw,
            self.y.to_f64() * iw,
            self.z.to_f64() * iw,
        ]
    }
}

impl From<IVec3> for Point4 {
    /// Promotes an integer position with `W = 1`.
    fn from(p: IVec3) -> Self {
        Point4 {
            x: I256::from(p.x as i64),
            y: I256::from(p.y as i64),
            z: I256::from(p.z as i64),
            w: I192::from(1i64),
        }
    }
}
