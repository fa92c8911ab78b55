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

//! Feasibility of synthetic halfspace systems, invariant under input order.

use polykern::geometry::Plane;
use polykern::kernel::seidel::{Feasibility, SeidelSolver};

fn solve(planes: &[Plane]) -> Feasibility {
    let mut solver = SeidelSolver::new();
    solver.set_planes(planes);
    solver.solve()
}

/// Every rotation of the input must give the same outcome.
fn solve_all_rotations(planes: &[Plane]) -> Feasibility {
    let first = solve(planes);
    let mut rotated = planes.to_vec();
    for _ in 1..planes.len() {
        rotated.rotate_left(1);
        assert_eq!(solve(&rotated), first, "outcome depends on input order");
    }
    first
}

#[test]
fn three_coordinate_halfspaces_feasible() {
    let octant = [
        Plane::new(-1, 0, 0, 0),
        Plane::new(0, -1, 0, 0),
        Plane::new(0, 0, -1, 0),
    ];
    assert_eq!(solve_all_rotations(&octant), Feasibility::HasSolution);
}

#[test]
fn closed_tetrahedron_feasible() {
    let tetra = [
        Plane::new(-1, 0, 0, 0),
        Plane::new(0, -1, 0, 0),
        Plane::new(0, 0, -1, 0),
        Plane::new(1, 1, 1, -9),
    ];
    assert_eq!(solve_all_rotations(&tetra), Feasibility::HasSolution);
}

#[test]
fn cube_complement_infeasible() {
    // the six inverted faces of the cube [-1,1]^3: x <= -1 and x >= 1, etc.
    let complement = [
        Plane::new(1, 0, 0, 1),
        Plane::new(-1, 0, 0, 1),
        Plane::new(0, 1, 0, 1),
        Plane::new(0, -1, 0, 1),
        Plane::new(0, 0, 1, 1),
        Plane::new(0, 0, -1, 1),
    ];
    assert_eq!(solve_all_rotations(&complement), Feasibility::Infeasible);
}

#[test]
fn single_plane_and_empty_inputs() {
    assert_eq!(solve(&[]), Feasibility::HasSolution);
    assert_eq!(solve(&[Plane::new(1, 2, 3, -4)]), Feasibility::HasSolution);
}

#[test]
fn touching_halfspaces_are_feasible() {
    // x <= 0 and x >= 0 share the plane x = 0; closed halfspaces meet there
    let touching = [Plane::new(1, 0, 0, 0), Plane::new(-1, 0, 0, 0)];
    assert_eq!(solve_all_rotations(&touching), Feasibility::HasSolution);
}

fn bipyramid_planes() -> Vec<Plane> {
    // square bipyramid: equator (+-4,0,0), (0,+-4,0), apexes (0,0,+-4)
    vec![
        Plane::new(16, 16, 16, -64),
        Plane::new(-16, 16, 16, -64),
        Plane::new(-16, -16, 16, -64),
        Plane::new(16, -16, 16, -64),
        Plane::new(16, 16, -16, -64),
        Plane::new(-16, 16, -16, -64),
        Plane::new(-16, -16, -16, -64),
        Plane::new(16, -16, -16, -64),
    ]
}

#[test]
fn bipyramid_feasible() {
    assert_eq!(solve_all_rotations(&bipyramid_planes()), Feasibility::HasSolution);
}

#[test]
fn flipping_a_redundant_plane_changes_nothing() {
    // a plane far outside the bipyramid contributes no constraint; flipped or
    // not, the outcome stays feasible
    let mut planes = bipyramid_planes();
    planes.push(Plane::new(0, 0, 1, -1000));
    assert_eq!(solve_all_rotations(&planes), Feasibility::HasSolution);
}

#[test]
fn flipped_facet_leaves_closed_sliver() {
    // inverting one facet of the bipyramid leaves the region beyond that
    // facet, clipped by its neighbors: still nonempty for closed halfspaces
    let mut planes = bipyramid_planes();
    planes[0] = Plane::new(-16, -16, -16, 64);
    assert_eq!(solve_all_rotations(&planes), Feasibility::HasSolution);
}

#[test]
fn cancellation_reports_infeasible_sentinel() {
    let mut solver = SeidelSolver::new();
    solver.set_planes(&bipyramid_planes());
    solver.stop();
    // a pre-cancelled solve returns the sentinel immediately; callers treat
    // it as inconclusive
    assert_eq!(solver.solve(), Feasibility::Infeasible);
}
