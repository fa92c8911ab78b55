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

use crate::numeric::I192;

/// Line as the intersection of two planes, stored as the six 2x2 determinants
/// of the stacked plane equations: the cross product of the two normals plus
/// the cross terms against the two d coefficients.
///
/// Valid iff the normal part `(ab_ba, bc_cb, ca_ac)` is not all zero, i.e. the
/// generating planes were not parallel. The direction of the line is
/// `(bc_cb, ca_ac, ab_ba)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Line {
    pub ab_ba: i128,
    pub bc_cb: i128,
    pub ca_ac: i128,

    pub ad_da: I192,
    pub bd_db: I192,
    pub cd_dc: I192,
}

impl Line {
    pub const INVALID: Line = Line {
        ab_ba: 0,
        bc_cb: 0,
        ca_ac: 0,
        ad_da: I192::ZERO,
        bd_db: I192::ZERO,
        cd_dc: I192::ZERO,
    };

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.ab_ba != 0 || self.bc_cb != 0 || self.ca_ac != 0
    }

    #[inline]
    pub fn direction(&self) -> [i128; 3] {
        [self.bc_cb, self.ca_ac, self.ab_ba]
    }
}
