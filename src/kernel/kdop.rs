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

//! Conservative k-DOP bounding volume of the candidate polyhedron.
//!
//! Per axis a `[min,max]` projection interval padded outward by at least one
//! integer unit, plus the witness vertex of each bound. The cull test may
//! answer "may cut" spuriously but answers "cannot cut" only when every
//! corner of the volume lies strictly behind the plane — the exact corner
//! classification guarantees that direction.

use smallvec::SmallVec;

use crate::geometry::{
    classify_aabb, classify_point4, intersect_planes, IAabb, IVec3, Plane,
};
use crate::kernel::options::KdopK;
use crate::mesh::Mesh;

/// Axis table; the K = 3 prefix is the coordinate frame, the rest are the
/// canonical diagonals.
const AXES: [[i64; 3]; 12] = [
    [1, 0, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 1, 0],
    [1, 0, 1],
    [0, 1, 1],
    [1, -1, 0],
    [1, 0, -1],
    [0, 1, -1],
    [1, 1, -1],
    [1, -1, 1],
    [-1, 1, 1],
];

/// Tagged over the closed axis-count set; `K3` specializes to an integer
/// axis-aligned box tested with the exact box classifier.
pub enum BoundingVolume {
    Aabb(AabbVolume),
    Dop8(Dop<8>),
    Dop9(Dop<9>),
    Dop12(Dop<12>),
}

impl BoundingVolume {
    pub fn initialize(k: KdopK, mesh: &Mesh, int_positions: &[IVec3], dpos: &[[f64; 3]]) -> Self {
        match k {
            KdopK::K3 => BoundingVolume::Aabb(AabbVolume::initialize(mesh, int_positions)),
            KdopK::K8 => BoundingVolume::Dop8(Dop::initialize(mesh, dpos)),
            KdopK::K9 => BoundingVolume::Dop9(Dop::initialize(mesh, dpos)),
            KdopK::K12 => BoundingVolume::Dop12(Dop::initialize(mesh, dpos)),
        }
    }

    /// Refreshes bounds whose witness vertex was cut away, rescanning only
    /// the cut vertices (on a convex candidate the new extremum along any
    /// axis lies on the cut ring whenever the old one was removed).
    pub fn update(&mut self, mesh: &Mesh, cut_vertices: &[usize], dpos: &[[f64; 3]]) {
        match self {
            BoundingVolume::Aabb(v) => v.update(mesh, cut_vertices, dpos),
            BoundingVolume::Dop8(v) => v.update(mesh, cut_vertices, dpos),
            BoundingVolume::Dop9(v) => v.update(mesh, cut_vertices, dpos),
            BoundingVolume::Dop12(v) => v.update(mesh, cut_vertices, dpos),
        }
    }

    /// False only when the plane provably cannot cut the volume.
    pub fn intersects(&self, plane: &Plane) -> bool {
        match self {
            BoundingVolume::Aabb(v) => classify_aabb(&v.aabb, plane) >= 0,
            BoundingVolume::Dop8(v) => v.intersects(plane),
            BoundingVolume::Dop9(v) => v.intersects(plane),
            BoundingVolume::Dop12(v) => v.intersects(plane),
        }
    }
}

/// The K = 3 case: an integer box with witness vertices.
pub struct AabbVolume {
    pub aabb: IAabb,
    vmin: [usize; 3],
    vmax: [usize; 3],
}

impl AabbVolume {
    fn initialize(mesh: &Mesh, positions: &[IVec3]) -> Self {
        let any_v = mesh.vertex_ids().next().expect("empty mesh");
        let mut vol = AabbVolume {
            aabb: IAabb::new(positions[any_v], positions[any_v]),
            vmin: [any_v; 3],
            vmax: [any_v; 3],
        };
        for v in mesh.vertex_ids() {
            let p = positions[v];
            for d in 0..3 {
                if p.comp(d) < vol.aabb.min.comp(d) {
                    set_comp(&mut vol.aabb.min, d, p.comp(d));
                    vol.vmin[d] = v;
                }
                if p.comp(d) > vol.aabb.max.comp(d) {
                    set_comp(&mut vol.aabb.max, d, p.comp(d));
                    vol.vmax[d] = v;
                }
            }
        }
        vol.aabb.min = vol.aabb.min - IVec3::new(3, 3, 3);
        vol.aabb.max = vol.aabb.max + IVec3::new(3, 3, 3);
        vol
    }

    fn update(&mut self, mesh: &Mesh, cut_vertices: &[usize], dpos: &[[f64; 3]]) {
        if cut_vertices.is_empty() {
            return;
        }

        let mut fmin = [0f64; 3];
        let mut fmax = [0f64; 3];
        let mut min_stale = [false; 3];
        let mut max_stale = [false; 3];
        let mut any = false;
        for d in 0..3 {
            min_stale[d] = mesh.vertices[self.vmin[d]].removed;
            if min_stale[d] {
                any = true;
                fmin[d] = dpos[cut_vertices[0]][d];
            }
            max_stale[d] = mesh.vertices[self.vmax[d]].removed;
            if max_stale[d] {
                any = true;
                fmax[d] = dpos[cut_vertices[0]][d];
            }
        }
        if !any {
            return;
        }

        for &v in cut_vertices {
            if mesh.vertices[v].removed {
                continue;
            }
            for d in 0..3 {
                if min_stale[d] && dpos[v][d] <= fmin[d] {
                    fmin[d] = dpos[v][d];
                    self.vmin[d] = v;
                }
                if max_stale[d] && dpos[v][d] >= fmax[d] {
                    fmax[d] = dpos[v][d];
                    self.vmax[d] = v;
                }
            }
        }

        // round outward by a full unit, but never grow the old box
        for d in 0..3 {
            if min_stale[d] {
                let nv = (fmin[d] - 1.0).floor() as i32;
                let nv = nv.max(self.aabb.min.comp(d));
                set_comp(&mut self.aabb.min, d, nv);
            }
            if max_stale[d] {
                let nv = (fmax[d] + 1.0).ceil() as i32;
                let nv = nv.min(self.aabb.max.comp(d));
                set_comp(&mut self.aabb.max, d, nv);
            }
        }
    }
}

fn set_comp(p: &mut IVec3, axis: usize, v: i32) {
    match axis {
        0 => p.x = v,
        1 => p.y = v,
        _ => p.z = v,
    }
}

/// General k-DOP over the first `K` axes of the table. Distances are kept in
/// doubles; the cull decision goes through exact corner classification, the
/// doubles only get rounded outward.
pub struct Dop<const K: usize> {
    min: [f64; K],
    max: [f64; K],
    vmin: [usize; K],
    vmax: [usize; K],
}

impl<const K: usize> Dop<K> {
    #[inline]
    fn axis(i: usize) -> [i64; 3] {
        AXES[i]
    }

    #[inline]
    fn distance(i: usize, p: [f64; 3]) -> f64 {
        let a = Self::axis(i);
        a[0] as f64 * p[0] + a[1] as f64 * p[1] + a[2] as f64 * p[2]
    }

    fn initialize(mesh: &Mesh, dpos: &[[f64; 3]]) -> Self {
        let any_v = mesh.vertex_ids().next().expect("empty mesh");
        let mut dop = Dop {
            min: [f64::MAX; K],
            max: [f64::MIN; K],
            vmin: [any_v; K],
            vmax: [any_v; K],
        };
        for v in mesh.vertex_ids() {
            for i in 0..K {
                let d = Self::distance(i, dpos[v]);
                if d < dop.min[i] {
                    dop.min[i] = d;
                    dop.vmin[i] = v;
                }
                if d > dop.max[i] {
                    dop.max[i] = d;
                    dop.vmax[i] = v;
                }
            }
        }
        for i in 0..K {
            dop.min[i] -= 1.0;
            dop.max[i] += 1.0;
        }
        dop
    }

    fn update(&mut self, mesh: &Mesh, cut_vertices: &[usize], dpos: &[[f64; 3]]) {
        if cut_vertices.is_empty() {
            return;
        }
        for i in 0..K {
            if mesh.vertices[self.vmin[i]].removed {
                let mut best = f64::MAX;
                let mut witness = None;
                for &v in cut_vertices {
                    if mesh.vertices[v].removed {
                        continue;
                    }
                    let d = Self::distance(i, dpos[v]);
                    if d < best {
                        best = d;
                        witness = Some(v);
                    }
                }
                if let Some(w) = witness {
                    // pad outward, clamped so the volume never grows
                    self.min[i] = (best - 1.0).max(self.min[i]);
                    self.vmin[i] = w;
                }
            }
            if mesh.vertices[self.vmax[i]].removed {
                let mut best = f64::MIN;
                let mut witness = None;
                for &v in cut_vertices {
                    if mesh.vertices[v].removed {
                        continue;
                    }
                    let d = Self::distance(i, dpos[v]);
                    if d > best {
                        best = d;
                        witness = Some(v);
                    }
                }
                if let Some(w) = witness {
                    self.max[i] = (best + 1.0).min(self.max[i]);
                    self.vmax[i] = w;
                }
            }
        }
    }

    /// Support plane of axis `i`: the max side has the axis as outward
    /// normal, the min side its negation; offsets are rounded outward.
    fn side_plane(&self, i: usize, max_side: bool) -> Plane {
        let a = Self::axis(i);
        if max_side {
            Plane::new(a[0], a[1], a[2], -(self.max[i].ceil() as i128))
        } else {
            Plane::new(-a[0], -a[1], -a[2], self.min[i].floor() as i128)
        }
    }

    fn intersects(&self, cutting: &Plane) -> bool {
        let n = cutting.normal_f64();
        let dot = |i: usize| {
            let a = Self::axis(i);
            a[0] as f64 * n[0] + a[1] as f64 * n[1] + a[2] as f64 * n[2]
        };

        // the volume face most aligned with the cutting normal
        let mut max_idx = 0;
        let mut max_dot = dot(0).abs();
        for i in 1..K {
            let d = dot(i).abs();
            if d > max_dot {
                max_dot = d;
                max_idx = i;
            }
        }
        let face_plane = self.side_plane(max_idx, dot(max_idx) >= 0.0);

        let mut sides: SmallVec<[Plane; 24]> = SmallVec::new();
        for i in 0..K {
            if i == max_idx {
                continue;
            }
            sides.push(self.side_plane(i, false));
            sides.push(self.side_plane(i, true));
        }

        // corners of that face: pairwise side intersections, kept when they
        // satisfy every side constraint
        let mut found_corner = false;
        for a in 0..sides.len() {
            for b in (a + 1)..sides.len() {
                let corner = intersect_planes(&sides[a], &sides[b], &face_plane);
                if !corner.is_valid() {
                    continue;
                }
                if sides.iter().any(|s| classify_point4(&corner, s) > 0) {
                    continue;
                }
                found_corner = true;
                if classify_point4(&corner, cutting) >= 0 {
                    return true;
                }
            }
        }

        // nothing enumerable: stay conservative
        !found_corner
    }
}
