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

//! Mutating topology operations: edge split, face cut, cascading vertex
//! removal with boundary relinking, boundary-loop fill, compaction.
//!
//! Operations return the indices of created elements so the owner of the
//! attribute vectors can grow them in lock step. Removal only marks
//! tombstones; [`Mesh::compact`] rebuilds dense arrays.

use smallvec::SmallVec;

use crate::mesh::core::Mesh;
use crate::mesh::half_edge::{Face, HalfEdge, Vertex};

/// New-index -> old-index maps produced by [`Mesh::compact`].
pub struct CompactMaps {
    pub vertices: Vec<usize>,
    pub half_edges: Vec<usize>,
    pub faces: Vec<usize>,
}

impl Mesh {
    /// Splits the edge of `h` by a new vertex `w`.
    ///
    /// `h: u -> v` becomes `u -> w`; a fresh pair `w -> v` / `v -> w` is
    /// appended. Returns `(w, h2)` with `h2: w -> v` following `h` in its
    /// face, carrying the same supporting line as the original edge.
    pub fn split_edge(&mut self, h: usize) -> (usize, usize) {
        let t = self.twin(h);
        let v = self.half_edges[h].vertex;
        let h_next = self.half_edges[h].next;
        let t_prev = self.half_edges[t].prev;
        let f1 = self.half_edges[h].face;
        let f2 = self.half_edges[t].face;

        let w = self.vertices.len();
        self.vertices.push(Vertex::new());

        let h2 = self.half_edges.len();
        let t2 = h2 + 1;
        self.half_edges.push(HalfEdge {
            vertex: v,
            face: f1,
            next: h_next,
            prev: h,
            removed: false,
        });
        self.half_edges.push(HalfEdge {
            vertex: w,
            face: f2,
            next: t,
            prev: t_prev,
            removed: false,
        });

        self.half_edges[h].vertex = w;
        self.half_edges[h].next = h2;
        self.half_edges[h_next].prev = h2;
        self.half_edges[t].prev = t2;
        self.half_edges[t_prev].next = t2;

        self.vertices[w].half_edge = h2;
        // t's origin moved from v to w; rehome v's outgoing handle if needed
        if self.vertices[v].half_edge == t {
            self.vertices[v].half_edge = t2;
        }

        (w, h2)
    }

    /// Cuts face `f` by a new edge from `from_v` to `to_v`, both on the face
    /// loop. The sub-loop containing the new halfedge `from_v -> to_v` keeps
    /// `f`; the other sub-loop becomes a new face. Returns
    /// `(new_halfedge, new_face)` or `None` if the vertices are not on `f`.
    pub fn cut_face(&mut self, f: usize, from_v: usize, to_v: usize) -> Option<(usize, usize)> {
        let h_from = self.face_halfedges(f).find(|&h| self.target(h) == from_v)?;
        let h_to = self.face_halfedges(f).find(|&h| self.target(h) == to_v)?;
        if h_from == h_to {
            return None;
        }

        let a1 = self.half_edges[h_from].next;
        let b1 = self.half_edges[h_to].next;

        let hn = self.half_edges.len();
        let tn = hn + 1;
        self.half_edges.push(HalfEdge {
            vertex: to_v,
            face: Some(f),
            next: b1,
            prev: h_from,
            removed: false,
        });
        self.half_edges.push(HalfEdge {
            vertex: from_v,
            face: None,
            next: a1,
            prev: h_to,
            removed: false,
        });

        self.half_edges[h_from].next = hn;
        self.half_edges[b1].prev = hn;
        self.half_edges[h_to].next = tn;
        self.half_edges[a1].prev = tn;

        let f_new = self.faces.len();
        self.faces.push(Face::new(tn));
        self.faces[f].half_edge = hn;

        // assign the new face to its sub-loop
        let cap = self.half_edges.len();
        let mut h = tn;
        for _ in 0..cap {
            self.half_edges[h].face = Some(f_new);
            h = self.half_edges[h].next;
            if h == tn {
                break;
            }
        }

        Some((hn, f_new))
    }

    /// Removes the given vertices together with every incident edge and face.
    ///
    /// Incidence is collected before any tombstone is written, so the rings
    /// of the doomed vertices are still intact while they are walked.
    /// Surviving halfedges of removed faces become boundary (`face: None`);
    /// call [`Mesh::rebuild_boundary_links`] afterwards to restore their
    /// `next`/`prev` chains.
    pub fn remove_vertices(&mut self, doomed: &[usize]) {
        let mut dead_edges: Vec<usize> = Vec::new();
        let mut dead_faces: Vec<usize> = Vec::new();

        for &v in doomed {
            let ring: SmallVec<[usize; 8]> = self.outgoing_halfedges(v).collect();
            for h in ring {
                dead_edges.push(self.edge(h));
                if let Some(f) = self.face(h) {
                    dead_faces.push(f);
                }
                if let Some(f) = self.face(self.twin(h)) {
                    dead_faces.push(f);
                }
            }
        }

        for f in dead_faces {
            if self.faces[f].removed {
                continue;
            }
            let loop_hes: SmallVec<[usize; 8]> = self.face_halfedges(f).collect();
            self.faces[f].removed = true;
            for h in loop_hes {
                self.half_edges[h].face = None;
            }
        }

        for e in dead_edges {
            self.half_edges[2 * e].removed = true;
            self.half_edges[2 * e + 1].removed = true;
        }

        for &v in doomed {
            self.vertices[v].removed = true;
        }
    }

    /// Restores `next`/`prev` chains along the boundary left by
    /// [`Mesh::remove_vertices`] and rehomes the outgoing handles of boundary
    /// vertices. For each boundary halfedge the successor is found by
    /// rotating around its head through interior faces, whose loops are
    /// intact.
    pub fn rebuild_boundary_links(&mut self) {
        let n = self.half_edges.len();
        for b in 0..n {
            if self.half_edges[b].removed || self.half_edges[b].face.is_some() {
                continue;
            }
            let head = self.target(b);
            let mut cand = self.twin(b);
            let mut steps = 0usize;
            while self.half_edges[cand].face.is_some() {
                cand = self.twin(self.prev(cand));
                steps += 1;
                if steps > n {
                    // isolated or non-manifold remnant; fall back to the twin
                    cand = self.twin(b);
                    break;
                }
            }
            self.half_edges[b].next = cand;
            self.half_edges[cand].prev = b;
            self.vertices[head].half_edge = cand;
        }
    }

    /// Fills the boundary loop through `h0` (which must have `face: None`)
    /// with a single new face; returns its index.
    pub fn fill_boundary_loop(&mut self, h0: usize) -> usize {
        debug_assert!(self.half_edges[h0].face.is_none());
        let f = self.faces.len();
        self.faces.push(Face::new(h0));
        let cap = self.half_edges.len();
        let mut h = h0;
        for _ in 0..cap {
            self.half_edges[h].face = Some(f);
            h = self.half_edges[h].next;
            if h == h0 {
                break;
            }
        }
        f
    }

    /// Drops all tombstones, renumbering every element. Halfedges are kept in
    /// twin pairs so edge indexing survives. Returns new -> old maps for
    /// remapping attribute vectors.
    pub fn compact(&mut self) -> CompactMaps {
        let mut vmap_old = Vec::new(); // new -> old
        let mut v_new = vec![usize::MAX; self.vertices.len()]; // old -> new
        for (old, v) in self.vertices.iter().enumerate() {
            if !v.removed {
                v_new[old] = vmap_old.len();
                vmap_old.push(old);
            }
        }

        let mut hmap_old = Vec::new();
        let mut h_new = vec![usize::MAX; self.half_edges.len()];
        for e in 0..self.half_edges.len() / 2 {
            let h = 2 * e;
            if !self.half_edges[h].removed {
                debug_assert!(!self.half_edges[h + 1].removed);
                h_new[h] = hmap_old.len();
                hmap_old.push(h);
                h_new[h + 1] = hmap_old.len();
                hmap_old.push(h + 1);
            }
        }

        let mut fmap_old = Vec::new();
        let mut f_new = vec![usize::MAX; self.faces.len()];
        for (old, f) in self.faces.iter().enumerate() {
            if !f.removed {
                f_new[old] = fmap_old.len();
                fmap_old.push(old);
            }
        }

        let map_h = |h: usize| if h == usize::MAX { usize::MAX } else { h_new[h] };

        let new_vertices: Vec<Vertex> = vmap_old
            .iter()
            .map(|&old| Vertex {
                half_edge: map_h(self.vertices[old].half_edge),
                removed: false,
            })
            .collect();
        let new_half_edges: Vec<HalfEdge> = hmap_old
            .iter()
            .map(|&old| {
                let he = &self.half_edges[old];
                HalfEdge {
                    vertex: v_new[he.vertex],
                    face: he.face.map(|f| f_new[f]),
                    next: map_h(he.next),
                    prev: map_h(he.prev),
                    removed: false,
                }
            })
            .collect();
        let new_faces: Vec<Face> = fmap_old
            .iter()
            .map(|&old| Face {
                half_edge: map_h(self.faces[old].half_edge),
                removed: false,
            })
            .collect();
        self.vertices = new_vertices;
        self.half_edges = new_half_edges;
        self.faces = new_faces;

        CompactMaps {
            vertices: vmap_old,
            half_edges: hmap_old,
            faces: fmap_old,
        }
    }
}
