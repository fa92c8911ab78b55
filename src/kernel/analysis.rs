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

//! Input analysis: face planes, per-edge convexity classification, and the
//! ordered cutting-plane list.
//!
//! A pure function of the input mesh and positions. Face planes and edge
//! states are computed in parallel above the configured face threshold; the
//! work writes disjoint slots, so correctness does not depend on it.

use ahash::AHashSet;
use rayon::prelude::*;
use smallvec::SmallVec;

use crate::geometry::{classify_pos, IVec3, Plane};
use crate::kernel::options::KernelOptions;
use crate::mesh::Mesh;
use crate::numeric::mul128;

/// Convexity state of an input edge, from the signed distance of the
/// opposite vertex against one incident face plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeState {
    Convex,
    Planar,
    Concave,
    /// An incident face is missing; the input is not closed there.
    Boundary,
    /// An incident face has a zero normal.
    Degenerate,
}

impl EdgeState {
    /// States that force the incident planes into the priority prefix of the
    /// cutting list.
    #[inline]
    pub fn is_non_convex(self) -> bool {
        matches!(
            self,
            EdgeState::Concave | EdgeState::Boundary | EdgeState::Degenerate
        )
    }
}

/// Everything the cutting loop needs to know about the input.
#[derive(Clone, Debug)]
pub struct InputAnalysis {
    /// Supporting plane per input face; invalid for degenerate faces.
    pub face_planes: Vec<Plane>,
    /// State per input edge (edge index = halfedge >> 1).
    pub edge_states: Vec<EdgeState>,
    /// Unique cutting planes; the first `num_concave` are adjacent to a
    /// non-convex edge.
    pub cutting_planes: Vec<Plane>,
    /// Input face that generated each cutting plane.
    pub plane_faces: Vec<usize>,
    pub num_concave: usize,
    /// Every edge is convex or planar: the input is its own kernel.
    pub is_convex: bool,
}

/// Analyzes the input mesh. Positions must satisfy the input contract.
pub fn analyze(mesh: &Mesh, positions: &[IVec3], options: &KernelOptions) -> InputAnalysis {
    let face_planes = input_face_planes(mesh, positions, options);
    let edge_states = input_edge_states(mesh, positions, &face_planes, options);

    let is_convex = edge_states
        .iter()
        .all(|s| matches!(s, EdgeState::Convex | EdgeState::Planar));

    let (cutting_planes, plane_faces, num_concave) = if is_convex {
        (Vec::new(), Vec::new(), 0)
    } else if options.use_hash_set_for_planes {
        cutting_planes_hash_set(mesh, &face_planes, &edge_states)
    } else {
        cutting_planes_flood_fill(mesh, &face_planes, &edge_states)
    };

    InputAnalysis {
        face_planes,
        edge_states,
        cutting_planes,
        plane_faces,
        num_concave,
        is_convex,
    }
}

fn face_plane(mesh: &Mesh, positions: &[IVec3], f: usize, gcd_reduce: bool) -> Plane {
    let vs: SmallVec<[usize; 8]> = mesh.face_vertices(f);
    if vs.len() < 3 {
        return Plane::INVALID;
    }
    let (p0, p1, p2) = (positions[vs[0]], positions[vs[1]], positions[vs[2]]);
    if gcd_reduce {
        Plane::from_points(p0, p1, p2)
    } else {
        Plane::from_points_no_gcd(p0, p1, p2)
    }
}

fn input_face_planes(mesh: &Mesh, positions: &[IVec3], options: &KernelOptions) -> Vec<Plane> {
    let n_faces = mesh.faces.len();
    // canonicalize only when planes are deduplicated by value
    let gcd_reduce = options.use_hash_set_for_planes;
    if n_faces > options.min_faces_for_parallel_setup {
        (0..n_faces)
            .into_par_iter()
            .map(|f| face_plane(mesh, positions, f, gcd_reduce))
            .collect()
    } else {
        (0..n_faces)
            .map(|f| face_plane(mesh, positions, f, gcd_reduce))
            .collect()
    }
}

fn edge_state(mesh: &Mesh, positions: &[IVec3], face_planes: &[Plane], e: usize) -> EdgeState {
    let ha = 2 * e;
    let hb = 2 * e + 1;
    let (fa, fb) = (mesh.face(ha), mesh.face(hb));
    let (Some(fa), Some(fb)) = (fa, fb) else {
        return EdgeState::Boundary;
    };

    let pa = &face_planes[fa];
    let pb = &face_planes[fb];
    if !pa.is_valid() || !pb.is_valid() {
        return EdgeState::Degenerate;
    }

    // vertex of face B past the shared edge
    let v_opp = mesh.target(mesh.next(hb));
    match classify_pos(positions[v_opp], pa) {
        -1 => EdgeState::Convex,
        1 => EdgeState::Concave,
        _ => {
            // coplanar: planar only if the normals agree in direction
            let dot = mul128(pa.a, pb.a) + mul128(pa.b, pb.b) + mul128(pa.c, pb.c);
            if dot > 0 {
                EdgeState::Planar
            } else {
                EdgeState::Concave
            }
        }
    }
}

fn input_edge_states(
    mesh: &Mesh,
    positions: &[IVec3],
    face_planes: &[Plane],
    options: &KernelOptions,
) -> Vec<EdgeState> {
    let n_edges = mesh.half_edges.len() / 2;
    if n_edges > options.min_faces_for_parallel_setup {
        (0..n_edges)
            .into_par_iter()
            .map(|e| edge_state(mesh, positions, face_planes, e))
            .collect()
    } else {
        (0..n_edges)
            .map(|e| edge_state(mesh, positions, face_planes, e))
            .collect()
    }
}

/// Merges coplanar neighbor faces with a disjoint set over planar edges and
/// emits one representative plane per region, non-convex-adjacent regions
/// first.
fn cutting_planes_flood_fill(
    mesh: &Mesh,
    face_planes: &[Plane],
    edge_states: &[EdgeState],
) -> (Vec<Plane>, Vec<usize>, usize) {
    let n_faces = mesh.faces.len();
    let mut regions = DisjointSet::new(n_faces);
    for e in 0..edge_states.len() {
        if edge_states[e] != EdgeState::Planar {
            continue;
        }
        if let (Some(fa), Some(fb)) = (mesh.face(2 * e), mesh.face(2 * e + 1)) {
            regions.union(fa, fb);
        }
    }

    let mut out = PlaneList {
        planes: Vec::new(),
        plane_faces: Vec::new(),
        visited: vec![false; n_faces],
    };

    for e in 0..edge_states.len() {
        if !edge_states[e].is_non_convex() {
            continue;
        }
        if let Some(fa) = mesh.face(2 * e) {
            let rep = regions.find(fa);
            out.push_representative(rep, face_planes);
        }
        if let Some(fb) = mesh.face(2 * e + 1) {
            let rep = regions.find(fb);
            out.push_representative(rep, face_planes);
        }
    }
    let num_concave = out.planes.len();

    for f in 0..n_faces {
        let rep = regions.find(f);
        out.push_representative(rep, face_planes);
    }

    (out.planes, out.plane_faces, num_concave)
}

struct PlaneList {
    planes: Vec<Plane>,
    plane_faces: Vec<usize>,
    visited: Vec<bool>,
}

impl PlaneList {
    fn push_representative(&mut self, rep: usize, face_planes: &[Plane]) {
        if !self.visited[rep] {
            self.visited[rep] = true;
            if face_planes[rep].is_valid() {
                self.planes.push(face_planes[rep]);
                self.plane_faces.push(rep);
            }
        }
    }
}

/// Walks all valid face planes through a set keyed by the canonicalized
/// plane, partitioning into non-convex-adjacent faces and the rest.
fn cutting_planes_hash_set(
    mesh: &Mesh,
    face_planes: &[Plane],
    edge_states: &[EdgeState],
) -> (Vec<Plane>, Vec<usize>, usize) {
    let mut seen: AHashSet<Plane> = AHashSet::new();
    let mut concave_faces = Vec::new();
    let mut convex_faces = Vec::new();

    for f in 0..mesh.faces.len() {
        let p = face_planes[f];
        if !p.is_valid() || !seen.insert(p) {
            continue;
        }
        let touches_non_convex = mesh
            .face_halfedges(f)
            .any(|h| edge_states[h >> 1].is_non_convex());
        if touches_non_convex {
            concave_faces.push(f);
        } else {
            convex_faces.push(f);
        }
    }

    let num_concave = concave_faces.len();
    let mut planes = Vec::new();
    let mut plane_faces = Vec::new();
    for f in concave_faces.into_iter().chain(convex_faces) {
        planes.push(face_planes[f]);
        plane_faces.push(f);
    }

    (planes, plane_faces, num_concave)
}

struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            // path halving
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[rb] = ra;
        }
    }
}
