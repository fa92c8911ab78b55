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

use polykern::geometry::{
    any_point_on_line, any_point_on_plane, are_parallel_plane_line, are_parallel_planes,
    classify_aabb, classify_point4, classify_pos, intersect_line_plane, intersect_plane_pair,
    intersect_planes, IAabb, IVec3, Plane, Point4,
};

#[test]
fn triple_plane_intersection_recovers_corner() {
    // x = 2, y = 3, z = 5 with outward-ish normals
    let px = Plane::new(1, 0, 0, -2);
    let py = Plane::new(0, 1, 0, -3);
    let pz = Plane::new(0, 0, 1, -5);

    let p = intersect_planes(&px, &py, &pz);
    assert!(p.is_valid());
    let [x, y, z] = p.to_f64();
    assert_eq!([x, y, z], [2.0, 3.0, 5.0]);

    // the point lies exactly on all three planes
    assert_eq!(classify_point4(&p, &px), 0);
    assert_eq!(classify_point4(&p, &py), 0);
    assert_eq!(classify_point4(&p, &pz), 0);
}

#[test]
fn degenerate_triple_intersection_is_invalid() {
    let p0 = Plane::new(1, 0, 0, -2);
    let p1 = Plane::new(1, 0, 0, 7);
    let p2 = Plane::new(0, 1, 0, 0);
    assert!(!intersect_planes(&p0, &p1, &p2).is_valid());
}

#[test]
fn line_plane_intersection_agrees_with_triple() {
    let p0 = Plane::from_points(
        IVec3::new(0, 0, 0),
        IVec3::new(5, 1, 0),
        IVec3::new(0, 3, 4),
    );
    let p1 = Plane::from_points(
        IVec3::new(1, 0, 0),
        IVec3::new(0, 2, 0),
        IVec3::new(0, 0, 3),
    );
    let p2 = Plane::new(0, 0, 1, -6);

    let line = intersect_plane_pair(&p0, &p1);
    assert!(line.is_valid());

    let via_line = intersect_line_plane(&line, &p2);
    let via_triple = intersect_planes(&p0, &p1, &p2);
    assert!(via_line.is_valid() && via_triple.is_valid());

    // the two constructions may differ by a scale factor; both must lie on
    // all three planes, and their Euclidean coordinates must agree
    for pl in [&p0, &p1, &p2] {
        assert_eq!(classify_point4(&via_line, pl), 0);
        assert_eq!(classify_point4(&via_triple, pl), 0);
    }
    let a = via_line.to_f64();
    let b = via_triple.to_f64();
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() < 1e-9);
    }
}

#[test]
fn classify_integer_positions() {
    let pl = Plane::from_points(
        IVec3::new(0, 0, 1),
        IVec3::new(1, 0, 1),
        IVec3::new(0, 1, 1),
    );
    // normal (0,0,1), plane z = 1
    assert_eq!(classify_pos(IVec3::new(9, -4, 2), &pl), 1);
    assert_eq!(classify_pos(IVec3::new(9, -4, 1), &pl), 0);
    assert_eq!(classify_pos(IVec3::new(9, -4, 0), &pl), -1);
}

#[test]
fn homogeneous_classification_respects_negative_w() {
    let pl = Plane::new(0, 0, 1, -1);
    // the point (0,0,2) written with w = -3
    let p = intersect_planes(
        &Plane::new(-3, 0, 0, 0),
        &Plane::new(0, -3, 0, 0),
        &Plane::new(0, 0, -3, 6),
    );
    assert!(p.is_valid());
    assert_eq!(p.to_f64(), [0.0, 0.0, 2.0]);
    assert_eq!(classify_point4(&p, &pl), 1);
}

#[test]
fn aabb_classification() {
    let bb = IAabb::new(IVec3::new(-1, -1, -1), IVec3::new(1, 1, 1));
    assert_eq!(classify_aabb(&bb, &Plane::new(0, 0, 1, -4)), -1); // z = 4 above
    assert_eq!(classify_aabb(&bb, &Plane::new(0, 0, 1, 4)), 1); // z = -4 below
    assert_eq!(classify_aabb(&bb, &Plane::new(0, 0, 1, 0)), 0); // through center
    assert_eq!(classify_aabb(&bb, &Plane::new(1, 1, 1, -2)), 0); // corner graze
}

#[test]
fn parallelism_predicates() {
    let p0 = Plane::new(2, -4, 6, 1);
    let p1 = Plane::new(-1, 2, -3, 12);
    let p2 = Plane::new(0, 1, 0, 0);
    assert!(are_parallel_planes(&p0, &p1));
    assert!(!are_parallel_planes(&p0, &p2));

    let line = intersect_plane_pair(&p0, &p2);
    // the line lies in both planes, so it is parallel to each
    assert!(are_parallel_plane_line(&p0, &line));
    assert!(are_parallel_plane_line(&p2, &line));
    assert!(!are_parallel_plane_line(&Plane::new(3, 1, 1, 5), &line));
}

#[test]
fn witness_points_lie_on_their_carrier() {
    let pl = Plane::new(3, -5, 7, 11);
    assert_eq!(classify_point4(&any_point_on_plane(&pl), &pl), 0);

    let p2 = Plane::new(1, 1, 0, -4);
    let line = intersect_plane_pair(&pl, &p2);
    let w = any_point_on_line(&line);
    assert_eq!(classify_point4(&w, &pl), 0);
    assert_eq!(classify_point4(&w, &p2), 0);
}

#[test]
fn integer_promotion_round_trips() {
    let p = Point4::from(IVec3::new(-7, 3, 12));
    assert!(p.is_valid());
    assert_eq!(p.to_f64(), [-7.0, 3.0, 12.0]);
}
