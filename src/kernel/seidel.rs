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

//! Exact randomized Seidel feasibility: decides whether the intersection of
//! closed halfspaces `a*x + b*y + c*z + d <= 0` is nonempty.
//!
//! The solution set is tracked as one of whole space, a plane, a line or a
//! point, demoted as violated planes arrive; violations recurse into a 2D and
//! a 1D sub-problem over the already-processed prefix. Every branch goes
//! through the exact predicates — the random shuffle only drives the expected
//! runtime, never the answer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::geometry::{
    any_point_on_line, any_point_on_plane, are_parallel_plane_line, are_parallel_planes,
    classify_point4, intersect_line_plane, intersect_plane_pair, Line, Plane, Point4,
};
use crate::numeric::mul192;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feasibility {
    HasSolution,
    Infeasible,
}

/// Current solution set plus the (shuffled) indices of its supporting planes.
#[derive(Clone, Debug, Default)]
pub struct Solution {
    idx: [Option<usize>; 3],
    plane: Plane,
    line: Line,
    position: Point4,
}

impl Solution {
    fn reset(&mut self) {
        self.idx = [None; 3];
    }

    fn append(&mut self, index: usize, new_plane: &Plane) {
        if self.idx[0].is_none() {
            self.idx[0] = Some(index);
            self.plane = *new_plane;
            debug_assert!(self.plane.is_valid());
        } else if self.idx[1].is_none() {
            self.idx[1] = Some(index);
            self.line = intersect_plane_pair(&self.plane, new_plane);
            debug_assert!(self.line.is_valid());
        } else {
            debug_assert!(self.idx[2].is_none(), "solution already a point");
            self.idx[2] = Some(index);
            self.position = intersect_line_plane(&self.line, new_plane);
            debug_assert!(self.position.is_valid());
        }
    }

    pub fn is_space(&self) -> bool {
        self.idx[0].is_none()
    }

    pub fn is_plane(&self) -> bool {
        self.idx[0].is_some() && self.idx[1].is_none()
    }

    pub fn is_line(&self) -> bool {
        self.idx[1].is_some() && self.idx[2].is_none()
    }

    pub fn is_point(&self) -> bool {
        self.idx[2].is_some()
    }

    /// A witness of the current solution set; must not be the whole space.
    pub fn any_point(&self) -> Point4 {
        if self.is_point() {
            self.position
        } else if self.is_line() {
            any_point_on_line(&self.line)
        } else {
            debug_assert!(self.is_plane());
            any_point_on_plane(&self.plane)
        }
    }
}

/// Sign of the dot product of the line direction and the plane normal:
/// 0 when the line is parallel to the plane.
fn orientation(line: &Line, plane: &Plane) -> i8 {
    let dir = line.direction();
    let dot =
        mul192(dir[0], plane.a) + mul192(dir[1], plane.b) + mul192(dir[2], plane.c);
    dot.signum()
}

pub struct SeidelSolver {
    rng: SmallRng,
    mapping: Vec<usize>,
    planes: Vec<Plane>,
    should_stop: Arc<AtomicBool>,
    solution: Solution,
}

impl Default for SeidelSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SeidelSolver {
    pub fn new() -> Self {
        Self::with_stop(Arc::new(AtomicBool::new(false)))
    }

    /// A solver observing an external stop flag. A raised flag makes
    /// [`SeidelSolver::solve`] bail with `Infeasible`; callers that may
    /// cancel must treat such a result as inconclusive.
    pub fn with_stop(should_stop: Arc<AtomicBool>) -> Self {
        Self {
            // fixed seed: the shuffle affects runtime only
            rng: SmallRng::seed_from_u64(0x5eed_1e55_0b57_ac1e),
            mapping: Vec::new(),
            planes: Vec::new(),
            should_stop,
            solution: Solution::default(),
        }
    }

    /// Copies the problem, shuffled. The randomness is what makes Seidel's
    /// incremental construction expected-linear.
    pub fn set_planes(&mut self, planes: &[Plane]) {
        self.solution = Solution::default();
        self.mapping = (0..planes.len()).collect();
        self.mapping.shuffle(&mut self.rng);
        self.planes = self.mapping.iter().map(|&i| planes[i]).collect();
    }

    pub fn solve(&mut self) -> Feasibility {
        self.solve_3d()
    }

    /// Indices into the original plane set supporting the solution.
    pub fn solution_planes(&self) -> [Option<usize>; 3] {
        let map = |o: Option<usize>| o.map(|i| self.mapping[i]);
        [
            map(self.solution.idx[0]),
            map(self.solution.idx[1]),
            map(self.solution.idx[2]),
        ]
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn stop(&self) {
        self.should_stop.store(true, Ordering::Relaxed);
    }

    fn solve_3d(&mut self) -> Feasibility {
        self.solution.reset();
        for pi in 0..self.planes.len() {
            if self.should_stop.load(Ordering::Relaxed) {
                // not necessarily infeasible; the caller promised not to look
                return Feasibility::Infeasible;
            }

            let plane = self.planes[pi];

            if self.solution.is_point() {
                if classify_point4(&self.solution.position, &plane) <= 0 {
                    continue;
                }
            } else if self.solution.is_line() {
                if are_parallel_plane_line(&plane, &self.solution.line) {
                    if classify_point4(&any_point_on_line(&self.solution.line), &plane) <= 0 {
                        continue;
                    }
                } else {
                    self.solution.append(pi, &plane);
                    continue;
                }
            } else if self.solution.is_plane() {
                if are_parallel_planes(&self.solution.plane, &plane) {
                    if classify_point4(&any_point_on_plane(&self.solution.plane), &plane) <= 0 {
                        continue;
                    }
                } else {
                    self.solution.append(pi, &plane);
                    continue;
                }
            } else {
                debug_assert!(self.solution.is_space());
                self.solution.append(pi, &plane);
                continue;
            }

            // current solution violates the plane: restrict to it
            if self.solve_2d(pi) == Feasibility::Infeasible {
                return Feasibility::Infeasible;
            }
        }
        Feasibility::HasSolution
    }

    /// Feasibility over `planes[..n]` restricted to `planes[fixed_3d]`.
    fn solve_2d(&mut self, fixed_3d: usize) -> Feasibility {
        self.solution.reset();
        let fixed_plane = self.planes[fixed_3d];
        self.solution.append(fixed_3d, &fixed_plane);

        for pi in 0..fixed_3d {
            if (pi + 1) % 1000 == 0 && self.should_stop.load(Ordering::Relaxed) {
                return Feasibility::Infeasible;
            }

            let plane = self.planes[pi];

            if self.solution.is_point() {
                if classify_point4(&self.solution.position, &plane) <= 0 {
                    continue;
                }
            } else if self.solution.is_line() {
                if are_parallel_plane_line(&plane, &self.solution.line) {
                    if classify_point4(&any_point_on_line(&self.solution.line), &plane) <= 0 {
                        continue;
                    }
                } else {
                    self.solution.append(pi, &plane);
                    continue;
                }
            } else {
                debug_assert!(self.solution.is_plane());
                if are_parallel_planes(&self.solution.plane, &plane) {
                    if classify_point4(&any_point_on_plane(&self.solution.plane), &plane) <= 0 {
                        continue;
                    }
                } else {
                    self.solution.append(pi, &plane);
                    continue;
                }
            }

            if are_parallel_planes(&plane, &fixed_plane)
                && classify_point4(&any_point_on_plane(&fixed_plane), &plane) == 1
            {
                return Feasibility::Infeasible;
            }

            if self.solve_1d(fixed_3d, pi) == Feasibility::Infeasible {
                return Feasibility::Infeasible;
            }
        }
        Feasibility::HasSolution
    }

    /// Feasibility over `planes[..fixed_2d]` restricted to the line of the
    /// two fixed planes: a closed-interval sweep along the line.
    fn solve_1d(&mut self, fixed_3d: usize, fixed_2d: usize) -> Feasibility {
        self.solution.reset();
        let p3 = self.planes[fixed_3d];
        let p2 = self.planes[fixed_2d];
        self.solution.append(fixed_3d, &p3);
        self.solution.append(fixed_2d, &p2);

        #[derive(Default)]
        struct Interval {
            left_idx: Option<usize>,
            right_idx: Option<usize>,
            left_point: Point4,
            right_point: Point4,
            left_orientation: i8,
        }

        impl Interval {
            fn is_one_sided(&self) -> bool {
                self.left_idx.is_some() && self.right_idx.is_none()
            }
            fn is_closed(&self) -> bool {
                self.left_idx.is_some() && self.right_idx.is_some()
            }
        }

        let mut interval = Interval::default();

        for pi in 0..fixed_2d {
            let plane = self.planes[pi];

            if interval.is_closed() {
                let c_left = classify_point4(&interval.left_point, &plane);
                let c_right = classify_point4(&interval.right_point, &plane);

                if c_left == 1 {
                    if c_right == 1 {
                        return Feasibility::Infeasible;
                    }
                    interval.left_idx = Some(pi);
                    interval.left_point = intersect_line_plane(&self.solution.line, &plane);
                } else if c_right == 1 {
                    interval.right_idx = Some(pi);
                    interval.right_point = intersect_line_plane(&self.solution.line, &plane);
                }
                // both satisfied: the interval stands
            } else if interval.is_one_sided() {
                let c = classify_point4(&interval.left_point, &plane);
                let o = orientation(&self.solution.line, &plane);

                if o == 0 {
                    // parallel to the line
                    if c > 0 {
                        return Feasibility::Infeasible;
                    }
                } else if c == 1 {
                    if o == interval.left_orientation {
                        // tighter bound on the same side
                        interval.left_idx = Some(pi);
                        interval.left_orientation = o;
                        interval.left_point = intersect_line_plane(&self.solution.line, &plane);
                    } else {
                        return Feasibility::Infeasible;
                    }
                } else if o != interval.left_orientation {
                    interval.right_idx = Some(pi);
                    interval.right_point = intersect_line_plane(&self.solution.line, &plane);
                }
                // same side and satisfied: existing bound is tighter
            } else {
                let o = orientation(&self.solution.line, &plane);
                if o == 0 {
                    let c = classify_point4(&any_point_on_line(&self.solution.line), &plane);
                    if c == 1 {
                        return Feasibility::Infeasible;
                    }
                } else {
                    interval.left_idx = Some(pi);
                    interval.left_orientation = o;
                    interval.left_point = intersect_line_plane(&self.solution.line, &plane);
                }
            }
        }

        if let Some(left) = interval.left_idx {
            let p = self.planes[left];
            self.solution.append(left, &p);
        }

        Feasibility::HasSolution
    }
}
