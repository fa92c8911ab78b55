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

//! The plane-cutting kernel constructor.
//!
//! The candidate polyhedron starts as the cuboid of the input's bounding box
//! and is intersected with one cutting plane at a time: descend to a
//! straddling halfedge, march the intersection loop splitting edges and
//! faces, flood-delete the strictly positive side, fill the cut with a face
//! supported by the cutting plane. A concurrent exact feasibility check can
//! abort the whole loop early, and a bounding-volume oracle skips planes that
//! cannot cut. Every decision that shapes the result goes through the exact
//! predicates; doubles appear only in the descent heuristic, which always
//! hands over to exact classification before anything is committed.

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::geometry::{
    classify_point4, intersect_line_plane, intersect_plane_pair, IAabb, IVec3, Line, Plane,
    Point4,
};
use crate::kernel::analysis::{analyze, InputAnalysis};
use crate::kernel::benchmark::BenchmarkData;
use crate::kernel::feasibility::FeasibilityWorker;
use crate::kernel::kdop::BoundingVolume;
use crate::kernel::options::KernelOptions;
use crate::kernel::{InputMesh, KernelError};
use crate::mesh::Mesh;

/// Cuboid faces over corners indexed by bit 0 = x, bit 1 = y, bit 2 = z,
/// wound so every normal points outward.
const CUBOID_FACES: [[usize; 4]; 6] = [
    [0, 2, 3, 1], // z min
    [4, 5, 7, 6], // z max
    [0, 1, 5, 4], // y min
    [3, 2, 6, 7], // y max
    [0, 4, 6, 2], // x min
    [1, 3, 7, 5], // x max
];

/// Per-plane cutting state: the plane, its generating input face, and the
/// vertices found to lie exactly on the plane, in visit order.
struct CutContext {
    plane: Plane,
    source: Option<usize>,
    c0_vertices: Vec<usize>,
    /// Flag per vertex: lies exactly on the current cutting plane.
    is_c0: Vec<bool>,
    /// Flag per vertex: seen by the positive-side flood fill.
    visited: Vec<bool>,
    /// Last vertex found on the plane; anchor for deletion.
    c0_vertex: Option<usize>,
}

impl CutContext {
    fn new(plane: Plane, source: Option<usize>, n_vertices: usize) -> Self {
        Self {
            plane,
            source,
            c0_vertices: Vec::new(),
            is_c0: vec![false; n_vertices],
            visited: vec![false; n_vertices],
            c0_vertex: None,
        }
    }
}

/// Result of a kernel computation; also the computation itself.
pub struct MeshKernel {
    options: KernelOptions,
    mesh: Mesh,
    position_point4: Vec<Point4>,
    position_dpos: Vec<[f64; 3]>,
    edge_lines: Vec<Line>,
    supporting_plane: Vec<Plane>,
    input_face: Vec<Option<usize>>,
    has_kernel: bool,
    input_is_convex: bool,
    scale: f64,
    stats: BenchmarkData,
}

impl MeshKernel {
    /// Computes the kernel of `input`. An empty kernel is a regular result
    /// reported through [`MeshKernel::has_kernel`]; errors are reserved for
    /// input-contract violations.
    pub fn compute(input: &InputMesh, options: KernelOptions) -> Result<Self, KernelError> {
        input.validate()?;

        let mut k = MeshKernel {
            options,
            mesh: Mesh::new(),
            position_point4: Vec::new(),
            position_dpos: Vec::new(),
            edge_lines: Vec::new(),
            supporting_plane: Vec::new(),
            input_face: Vec::new(),
            has_kernel: false,
            input_is_convex: false,
            scale: input.scale,
            stats: BenchmarkData::default(),
        };
        k.stats.input_faces = input.mesh.n_faces();

        let analysis = analyze(&input.mesh, &input.positions, &k.options);

        if analysis.is_convex {
            info!("input mesh is convex, it is its own kernel");
            k.stats.is_convex = true;
            k.stats.total_planes = k.stats.input_faces;
            k.stats.kernel_faces = k.stats.input_faces;
            k.stats.convex_contribution = k.stats.input_faces;
            k.has_kernel = true;
            k.input_is_convex = true;
            return Ok(k);
        }

        k.stats.total_planes = analysis.cutting_planes.len();
        k.stats.num_concave_planes = analysis.num_concave;
        info!("number of cutting planes: {}", analysis.cutting_planes.len());

        let mut worker = k
            .options
            .parallel_feasibility
            .then(|| FeasibilityWorker::spawn(analysis.cutting_planes.clone()));

        k.init_supporting_structure(input);

        let mut volume = k.options.use_bounding_volume.then(|| {
            BoundingVolume::initialize(
                k.options.kdop_k,
                &k.mesh,
                &cuboid_corners(&IAabb::of_points(input.positions.iter().copied())),
                &k.position_dpos,
            )
        });

        k.has_kernel = k.cut_all_planes(&analysis, &mut worker, &mut volume);

        if let Some(w) = &worker {
            w.cancel();
        }

        if !k.has_kernel {
            info!("kernel is empty");
            k.clear();
            return Ok(k);
        }

        k.compact();
        if k.options.triangulate_output {
            k.triangulate();
        }
        if !k.mesh.is_closed() {
            warn!("kernel mesh is not closed");
        }
        k.fill_stats(input, &analysis);

        Ok(k)
    }

    // --- output ------------------------------------------------------------

    pub fn has_kernel(&self) -> bool {
        self.has_kernel
    }

    /// Every edge of the input was convex or planar; the input surface is
    /// its own kernel and no cutting was performed.
    pub fn input_is_convex(&self) -> bool {
        self.input_is_convex
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Exact homogeneous position of a kernel vertex.
    pub fn position(&self, v: usize) -> &Point4 {
        &self.position_point4[v]
    }

    /// Rounded position, de-quantized by the recorded input scale. Finite
    /// whenever the vertex is valid (`W != 0`).
    pub fn position_f64(&self, v: usize) -> [f64; 3] {
        let p = self.position_point4[v].to_f64();
        let inv = 1.0 / self.scale;
        [p[0] * inv, p[1] * inv, p[2] * inv]
    }

    /// Supporting plane of a kernel face.
    pub fn face_plane(&self, f: usize) -> &Plane {
        &self.supporting_plane[f]
    }

    /// Input face whose plane generated this kernel face, if any (the
    /// initial cuboid faces have none).
    pub fn face_source(&self, f: usize) -> Option<usize> {
        self.input_face[f]
    }

    pub fn stats(&self) -> &BenchmarkData {
        &self.stats
    }

    // --- setup -------------------------------------------------------------

    /// Builds the candidate polyhedron: the cuboid of the input's bounding
    /// box with exact homogeneous corners, per-edge supporting lines and
    /// per-face supporting planes.
    fn init_supporting_structure(&mut self, input: &InputMesh) {
        let aabb = IAabb::of_points(input.positions.iter().copied());
        let corners = cuboid_corners(&aabb);

        let polys: Vec<Vec<usize>> = CUBOID_FACES.iter().map(|f| f.to_vec()).collect();
        self.mesh = Mesh::from_polygons(8, &polys).expect("cuboid topology is manifold");

        self.position_point4 = corners.iter().map(|&p| Point4::from(p)).collect();
        self.position_dpos = corners.iter().map(|p| p.to_f64()).collect();

        self.set_edge_lines(&corners);

        self.supporting_plane = (0..self.mesh.faces.len())
            .map(|f| {
                let vs = self.mesh.face_vertices(f);
                Plane::from_points_no_gcd(corners[vs[0]], corners[vs[1]], corners[vs[2]])
            })
            .collect();
        self.input_face = vec![None; self.mesh.faces.len()];
    }

    /// The supporting line of each cuboid edge, as the intersection of two
    /// planes through the edge whose normals are taken against coordinate
    /// axes not parallel to the edge direction.
    fn set_edge_lines(&mut self, corners: &[IVec3; 8]) {
        let n_edges = self.mesh.half_edges.len() / 2;
        self.edge_lines = (0..n_edges)
            .map(|e| {
                let h = 2 * e;
                let p0 = corners[self.mesh.source(h)];
                let p1 = corners[self.mesh.target(h)];
                let d = IVec3::diff64(p1, p0);

                let (u, v) = if d[0] != 0 {
                    ([0, 1, 0], [0, 0, 1])
                } else if d[1] != 0 {
                    ([0, 0, 1], [1, 0, 0])
                } else {
                    ([1, 0, 0], [0, 1, 0])
                };
                let plane_a = Plane::from_pos_normal(p0, IVec3::cross64(d, u));
                let plane_b = Plane::from_pos_normal(p0, IVec3::cross64(d, v));
                intersect_plane_pair(&plane_a, &plane_b)
            })
            .collect();
    }

    // --- cutting loop ------------------------------------------------------

    /// Cuts every plane in order; returns whether a nonempty kernel remains.
    fn cut_all_planes(
        &mut self,
        analysis: &InputAnalysis,
        worker: &mut Option<FeasibilityWorker>,
        volume: &mut Option<BoundingVolume>,
    ) -> bool {
        let n = analysis.cutting_planes.len();
        for i in 0..n {
            if let Some(w) = worker.as_mut() {
                if w.is_infeasible() {
                    self.stats.lp_early_out = true;
                    return false;
                }
            }

            let plane = analysis.cutting_planes[i];
            let source = Some(analysis.plane_faces[i]);

            if let Some(bv) = volume.as_ref() {
                if !bv.intersects(&plane) {
                    continue;
                }
            }

            debug!("cutting plane {}/{}", i, n);

            let mut ctx = CutContext::new(plane, source, self.mesh.vertices.len());
            let Some(start_vertex) = self.mesh.last_live_vertex() else {
                return false;
            };

            match self.edge_descent(&mut ctx, start_vertex) {
                Some(h) => self.marching(&mut ctx, h),
                None => {
                    if self.classify_vertex(start_vertex, &ctx.plane) < 0 {
                        // the whole candidate lies behind the plane
                        continue;
                    }
                    if ctx.c0_vertex.is_none() {
                        // strictly in front without touching: nothing is left
                        return false;
                    }
                    // grazing contact: fall through to deletion
                }
            }

            let proper_cut = self.delete_positive_side(&mut ctx);
            if proper_cut {
                self.fill_cut_hole(&ctx);
                if let Some(bv) = volume.as_mut() {
                    bv.update(&self.mesh, &ctx.c0_vertices, &self.position_dpos);
                }
            }
        }

        self.mesh.n_vertices() != 0
    }

    #[inline]
    fn classify_vertex(&self, v: usize, plane: &Plane) -> i8 {
        classify_point4(&self.position_point4[v], plane)
    }

    /// Greedy walk toward the cutting plane in double precision, switching to
    /// exact classification as soon as a distance falls below the local
    /// floating-point resolution. Returns a halfedge whose endpoints straddle
    /// the plane (or whose target lies exactly on it), or `None` when no such
    /// halfedge is reachable.
    fn edge_descent(&mut self, ctx: &mut CutContext, start_vertex: usize) -> Option<usize> {
        if self.classify_vertex(start_vertex, &ctx.plane) == 0 {
            ctx.c0_vertex = Some(start_vertex);
            ctx.is_c0[start_vertex] = true;
        }

        let mut closest = start_vertex;
        let mut min_distance = ctx.plane.signed_distance_f64(self.position_dpos[closest]);
        let mut epsilon = ulp(min_distance);

        loop {
            let mut found_closer = false;
            let ring: SmallVec<[usize; 8]> = self.mesh.outgoing_halfedges(closest).collect();
            for h in ring {
                let neighbor = self.mesh.target(h);
                let distance = ctx.plane.signed_distance_f64(self.position_dpos[neighbor]);
                let eps = ulp(distance);
                if eps > epsilon {
                    epsilon = eps;
                }

                if distance.abs() < epsilon {
                    return self.edge_descent_exact(ctx, neighbor);
                }
                if sign_f64(distance) != sign_f64(min_distance) {
                    return Some(h);
                }
                if distance.abs() >= min_distance.abs() {
                    continue;
                }

                closest = neighbor;
                min_distance = distance;
                found_closer = true;
            }
            if !found_closer {
                break;
            }
        }

        // the heuristic found no crossing; re-check the final vertex exactly
        self.edge_descent_exact(ctx, closest)
    }

    /// Exact variant: scans the one-ring of `vertex` for a halfedge whose
    /// endpoints straddle the plane, or a vertex exactly on it.
    fn edge_descent_exact(&mut self, ctx: &mut CutContext, vertex: usize) -> Option<usize> {
        let ring: SmallVec<[usize; 8]> = self.mesh.outgoing_halfedges(vertex).collect();
        for h in ring {
            let c0 = self.classify_vertex(self.mesh.source(h), &ctx.plane);
            let c1 = self.classify_vertex(self.mesh.target(h), &ctx.plane);

            if c0 == 0 {
                let v = self.mesh.source(h);
                ctx.c0_vertex = Some(v);
                ctx.is_c0[v] = true;
                return Some(self.mesh.twin(h));
            }
            if c1 == 0 {
                let v = self.mesh.target(h);
                ctx.c0_vertex = Some(v);
                ctx.is_c0[v] = true;
                return Some(h);
            }
            if c0 != c1 {
                return Some(h);
            }
        }
        None
    }

    /// Walks the intersection of the cutting plane with the candidate
    /// surface, splitting straddling halfedges, connecting consecutive
    /// on-plane vertices by face cuts, and skipping fans of faces the plane
    /// misses. Stops after closing the loop or when a full fan makes no
    /// progress.
    fn marching(&mut self, ctx: &mut CutContext, start_halfedge: usize) {
        debug_assert!(
            self.classify_vertex(self.mesh.target(start_halfedge), &ctx.plane) == 0
                || self.classify_vertex(self.mesh.source(start_halfedge), &ctx.plane)
                    != self.classify_vertex(self.mesh.target(start_halfedge), &ctx.plane)
        );

        let mut current = start_halfedge;
        let mut current_c0 = usize::MAX;

        loop {
            let mut c_a = self.classify_vertex(self.mesh.source(current), &ctx.plane);
            let mut c_b = self.classify_vertex(self.mesh.target(current), &ctx.plane);

            // advance within the face until a usable sign change
            let first_he = current;
            while c_a == c_b || c_a == 0 {
                current = self.mesh.next(current);
                c_a = self.classify_vertex(self.mesh.source(current), &ctx.plane);
                c_b = self.classify_vertex(self.mesh.target(current), &ctx.plane);

                if c_a == 0 {
                    let v = self.mesh.source(current);
                    ctx.is_c0[v] = true;
                    ctx.c0_vertices.push(v);
                }

                if current == first_he {
                    // a full loop: the whole face lies on the plane
                    return;
                }
            }

            if (c_a as i32) * (c_b as i32) == -1 {
                self.split_halfedge(ctx, current);
            }

            let prev_c0 = current_c0;
            current_c0 = self.mesh.target(current);
            if prev_c0 == current_c0 {
                break;
            }

            ctx.c0_vertices.push(current_c0);
            ctx.c0_vertex = Some(current_c0);
            ctx.is_c0[current_c0] = true;

            if prev_c0 != usize::MAX && !self.mesh.are_adjacent(current_c0, prev_c0) {
                self.split_face(ctx, current_c0, prev_c0, self.mesh.face(current));
            }

            match self.skip_non_intersecting_faces(ctx, current) {
                Some(h) => current = h,
                None => break,
            }

            if ctx.c0_vertices.len() >= 2 && current_c0 == ctx.c0_vertices[0] {
                break;
            }
        }

        // the loop closes on its first vertex, which was recorded twice
        ctx.c0_vertices.pop();
    }

    /// Rotates around the current on-plane vertex past faces the plane does
    /// not cross; `None` after a full fan without progress.
    fn skip_non_intersecting_faces(&self, ctx: &CutContext, current: usize) -> Option<usize> {
        let c0_vertex = self.mesh.target(current);
        let fan = self.mesh.degree(c0_vertex);

        let mut prev = current;
        for _ in 0..fan {
            let cand = self.mesh.twin(prev);
            prev = self.mesh.prev(cand);

            let ca = self.classify_vertex(self.mesh.target(cand), &ctx.plane);
            let cb = self.classify_vertex(self.mesh.source(prev), &ctx.plane);
            if ca != cb {
                return Some(cand);
            }
        }
        None
    }

    /// Splits a straddling halfedge at its exact intersection with the
    /// cutting plane; the new vertex and both halves inherit the edge line.
    fn split_halfedge(&mut self, ctx: &mut CutContext, h: usize) {
        let line = self.edge_lines[self.mesh.edge(h)];
        let point = intersect_line_plane(&line, &ctx.plane);
        debug_assert!(point.is_valid());

        let (w, h2) = self.mesh.split_edge(h);

        debug_assert_eq!(w, self.position_point4.len());
        self.position_dpos.push(point.to_f64());
        self.position_point4.push(point);
        ctx.is_c0.push(false);
        ctx.visited.push(false);

        debug_assert_eq!(self.mesh.edge(h2), self.edge_lines.len());
        self.edge_lines.push(line);
    }

    /// Connects two on-plane vertices across a face; the new edge carries the
    /// intersection line of the cutting plane with the face's plane, and the
    /// new face inherits plane and provenance.
    fn split_face(
        &mut self,
        ctx: &mut CutContext,
        from_v: usize,
        to_v: usize,
        face: Option<usize>,
    ) {
        // a degenerate 2D cut can leave no face here
        let Some(f) = face else {
            return;
        };
        let Some((hn, f_new)) = self.mesh.cut_face(f, from_v, to_v) else {
            return;
        };

        debug_assert_eq!(self.mesh.edge(hn), self.edge_lines.len());
        self.edge_lines
            .push(intersect_plane_pair(&ctx.plane, &self.supporting_plane[f]));

        debug_assert_eq!(f_new, self.supporting_plane.len());
        self.supporting_plane.push(self.supporting_plane[f]);
        self.input_face.push(self.input_face[f]);
    }

    /// Flood-deletes every strictly-positive vertex reachable from the last
    /// on-plane vertex without crossing the on-plane ring. Returns whether
    /// anything was deleted.
    fn delete_positive_side(&mut self, ctx: &mut CutContext) -> bool {
        let Some(c0) = ctx.c0_vertex else {
            return false;
        };

        let mut seed = None;
        let ring: SmallVec<[usize; 8]> = self.mesh.outgoing_halfedges(c0).collect();
        for h in ring {
            let neighbor = self.mesh.target(h);
            if self.classify_vertex(neighbor, &ctx.plane) == 1 {
                seed = Some(neighbor);
                break;
            }
        }
        let Some(seed) = seed else {
            return false;
        };

        let mut stack = vec![seed];
        ctx.visited[seed] = true;
        let mut doomed = Vec::new();
        while let Some(v) = stack.pop() {
            debug_assert_eq!(self.classify_vertex(v, &ctx.plane), 1);
            doomed.push(v);
            let ring: SmallVec<[usize; 8]> = self.mesh.outgoing_halfedges(v).collect();
            for h in ring {
                let n = self.mesh.target(h);
                if ctx.is_c0[n] || ctx.visited[n] {
                    continue;
                }
                ctx.visited[n] = true;
                stack.push(n);
            }
        }

        self.mesh.remove_vertices(&doomed);
        self.mesh.rebuild_boundary_links();
        true
    }

    /// Closes the boundary loop the deletion left behind with one face
    /// supported by the cutting plane.
    fn fill_cut_hole(&mut self, ctx: &CutContext) {
        if self.mesh.n_vertices() < 3 || ctx.c0_vertices.len() < 3 {
            return;
        }

        let Some(h) = self.mesh.find_halfedge(ctx.c0_vertices[0], ctx.c0_vertices[1]) else {
            return;
        };
        let h = if self.mesh.face(h).is_none() {
            h
        } else {
            let t = self.mesh.twin(h);
            if self.mesh.face(t).is_some() {
                return;
            }
            t
        };

        let f = self.mesh.fill_boundary_loop(h);
        debug_assert_eq!(f, self.supporting_plane.len());
        self.supporting_plane.push(ctx.plane);
        self.input_face.push(ctx.source);
    }

    // --- post-processing ---------------------------------------------------

    fn clear(&mut self) {
        self.mesh = Mesh::new();
        self.position_point4.clear();
        self.position_dpos.clear();
        self.edge_lines.clear();
        self.supporting_plane.clear();
        self.input_face.clear();
    }

    /// Drops tombstones from the arena and remaps all attribute vectors.
    fn compact(&mut self) {
        let maps = self.mesh.compact();

        let old_p4 = std::mem::take(&mut self.position_point4);
        let old_dpos = std::mem::take(&mut self.position_dpos);
        let old_lines = std::mem::take(&mut self.edge_lines);
        let old_planes = std::mem::take(&mut self.supporting_plane);
        let old_sources = std::mem::take(&mut self.input_face);

        self.position_point4 = maps.vertices.iter().map(|&o| old_p4[o]).collect();
        self.position_dpos = maps.vertices.iter().map(|&o| old_dpos[o]).collect();
        self.edge_lines = (0..maps.half_edges.len() / 2)
            .map(|e| old_lines[maps.half_edges[2 * e] >> 1])
            .collect();
        self.supporting_plane = maps.faces.iter().map(|&o| old_planes[o]).collect();
        self.input_face = maps.faces.iter().map(|&o| old_sources[o]).collect();
    }

    /// Naive fan triangulation of every face with more than three sides.
    /// Runs after cutting: diagonal edges no longer need supporting lines.
    fn triangulate(&mut self) {
        let n_faces = self.mesh.faces.len();
        for f in 0..n_faces {
            if self.mesh.faces[f].removed {
                continue;
            }
            loop {
                let vs = self.mesh.face_vertices(f);
                if vs.len() <= 3 {
                    break;
                }
                let Some((_, f_new)) = self.mesh.cut_face(f, vs[0], vs[2]) else {
                    break;
                };
                self.edge_lines.push(Line::INVALID);
                self.supporting_plane.push(self.supporting_plane[f]);
                self.input_face.push(self.input_face[f]);
                debug_assert_eq!(f_new + 1, self.supporting_plane.len());
            }
        }
    }

    fn fill_stats(&mut self, input: &InputMesh, analysis: &InputAnalysis) {
        self.stats.kernel_faces = self.mesh.n_faces();
        for f in self.mesh.face_ids() {
            let Some(src) = self.input_face[f] else {
                continue;
            };
            let touches_non_convex = input
                .mesh
                .face_halfedges(src)
                .any(|h| analysis.edge_states[h >> 1].is_non_convex());
            if touches_non_convex {
                self.stats.concave_contribution += 1;
            } else {
                self.stats.convex_contribution += 1;
            }
        }
    }
}

/// Corners of the box, indexed by bit 0 = x, bit 1 = y, bit 2 = z.
fn cuboid_corners(aabb: &IAabb) -> [IVec3; 8] {
    let (lo, hi) = (aabb.min, aabb.max);
    std::array::from_fn(|i| {
        IVec3::new(
            if i & 1 != 0 { hi.x } else { lo.x },
            if i & 2 != 0 { hi.y } else { lo.y },
            if i & 4 != 0 { hi.z } else { lo.z },
        )
    })
}

#[inline]
fn sign_f64(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Distance to the next representable double, the local resolution of `x`.
#[inline]
fn ulp(x: f64) -> f64 {
    let a = x.abs();
    if a == 0.0 {
        return f64::MIN_POSITIVE;
    }
    f64::from_bits(a.to_bits() + 1) - a
}
