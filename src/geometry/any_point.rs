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

//! Witness points on planes and lines, used by the feasibility solver when it
//! needs some representative of its current solution set.

use crate::geometry::line::Line;
use crate::geometry::plane::Plane;
use crate::geometry::point4::Point4;
use crate::numeric::{I192, I256};

/// A valid homogeneous point on the plane: its intersection with the first
/// coordinate axis that the normal does not vanish on.
pub fn any_point_on_plane(plane: &Plane) -> Point4 {
    debug_assert!(plane.is_valid());
    if plane.a != 0 {
        Point4::new(
            I256::from(-plane.d),
            I256::ZERO,
            I256::ZERO,
            I192::from(plane.a),
        )
    } else if plane.b != 0 {
        Point4::new(
            I256::ZERO,
            I256::from(-plane.d),
            I256::ZERO,
            I192::from(plane.b),
        )
    } else {
        Point4::new(
            I256::ZERO,
            I256::ZERO,
            I256::from(-plane.d),
            I192::from(plane.c),
        )
    }
}

/// A valid homogeneous point on the line: its intersection with the first
/// coordinate plane its direction does not lie in.
pub fn any_point_on_line(line: &Line) -> Point4 {
    debug_assert!(line.is_valid());
    if line.ab_ba != 0 {
        // z = 0
        Point4::new(
            I256::from(line.bd_db),
            I256::from(-line.ad_da),
            I256::ZERO,
            I192::from(line.ab_ba),
        )
    } else if line.ca_ac != 0 {
        // y = 0
        Point4::new(
            I256::from(-line.cd_dc),
            I256::ZERO,
            I256::from(line.ad_da),
            I192::from(line.ca_ac),
        )
    } else {
        // x = 0
        Point4::new(
            I256::ZERO,
            I256::from(line.cd_dc),
            I256::from(-line.bd_db),
            I192::from(line.bc_cb),
        )
    }
}
