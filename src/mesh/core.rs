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

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::mesh::half_edge::{Face, HalfEdge, Vertex};
use crate::mesh::MeshError;

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds connectivity from polygon faces over `n_vertices` vertices.
    ///
    /// Twin halfedges are paired through a directed-edge map; a directed edge
    /// seen twice is a non-manifold error. Unmatched twins keep `face: None`,
    /// which [`Mesh::is_closed`] reports.
    pub fn from_polygons(n_vertices: usize, polys: &[Vec<usize>]) -> Result<Mesh, MeshError> {
        let mut mesh = Mesh::new();
        mesh.vertices = vec![Vertex::new(); n_vertices];

        let mut edge_map: AHashMap<(usize, usize), usize> = AHashMap::new();

        for (fi, poly) in polys.iter().enumerate() {
            if poly.len() < 3 {
                return Err(MeshError::FaceTooSmall { face: fi });
            }
            for &v in poly {
                if v >= n_vertices {
                    return Err(MeshError::VertexOutOfRange { face: fi, vertex: v });
                }
            }

            let mut loop_hes: SmallVec<[usize; 8]> = SmallVec::new();
            for i in 0..poly.len() {
                let u = poly[i];
                let v = poly[(i + 1) % poly.len()];
                if edge_map.contains_key(&(u, v)) {
                    return Err(MeshError::NonManifoldEdge { from: u, to: v });
                }
                let h = if let Some(&t) = edge_map.get(&(v, u)) {
                    t ^ 1
                } else {
                    let h = mesh.half_edges.len();
                    mesh.half_edges.push(HalfEdge::new(v)); // h:   u -> v
                    mesh.half_edges.push(HalfEdge::new(u)); // h^1: v -> u
                    h
                };
                if mesh.half_edges[h].face.is_some() {
                    return Err(MeshError::NonManifoldEdge { from: u, to: v });
                }
                edge_map.insert((u, v), h);
                mesh.half_edges[h].face = Some(fi);
                mesh.vertices[u].half_edge = h;
                loop_hes.push(h);
            }

            let n = loop_hes.len();
            for i in 0..n {
                let h = loop_hes[i];
                mesh.half_edges[h].next = loop_hes[(i + 1) % n];
                mesh.half_edges[h].prev = loop_hes[(i + n - 1) % n];
            }
            mesh.faces.push(Face::new(loop_hes[0]));
        }

        Ok(mesh)
    }

    // --- handle arithmetic -------------------------------------------------

    #[inline]
    pub fn twin(&self, h: usize) -> usize {
        h ^ 1
    }

    /// Edge index of a halfedge.
    #[inline]
    pub fn edge(&self, h: usize) -> usize {
        h >> 1
    }

    #[inline]
    pub fn next(&self, h: usize) -> usize {
        self.half_edges[h].next
    }

    #[inline]
    pub fn prev(&self, h: usize) -> usize {
        self.half_edges[h].prev
    }

    /// Vertex the halfedge points at.
    #[inline]
    pub fn target(&self, h: usize) -> usize {
        self.half_edges[h].vertex
    }

    /// Vertex the halfedge starts at.
    #[inline]
    pub fn source(&self, h: usize) -> usize {
        self.half_edges[h ^ 1].vertex
    }

    #[inline]
    pub fn face(&self, h: usize) -> Option<usize> {
        self.half_edges[h].face
    }

    // --- iteration ---------------------------------------------------------

    pub fn vertex_ids(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertices.len()).filter(move |&v| !self.vertices[v].removed)
    }

    pub fn face_ids(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.faces.len()).filter(move |&f| !self.faces[f].removed)
    }

    pub fn halfedge_ids(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.half_edges.len()).filter(move |&h| !self.half_edges[h].removed)
    }

    pub fn n_vertices(&self) -> usize {
        self.vertex_ids().count()
    }

    pub fn n_faces(&self) -> usize {
        self.face_ids().count()
    }

    /// Outgoing halfedges of a vertex, starting at its stored handle.
    /// Rotation is `next(twin(h))`; a defensive cap stops runaway loops on a
    /// corrupted mesh.
    pub fn outgoing_halfedges(&self, v: usize) -> OutgoingHalfedges<'_> {
        let start = self.vertices[v].half_edge;
        OutgoingHalfedges {
            mesh: self,
            start,
            current: start,
            remaining: self.half_edges.len() + 1,
            done: start == usize::MAX,
        }
    }

    /// Halfedges of a face loop in order.
    pub fn face_halfedges(&self, f: usize) -> FaceHalfedges<'_> {
        let start = self.faces[f].half_edge;
        FaceHalfedges {
            mesh: self,
            start,
            current: start,
            remaining: self.half_edges.len() + 1,
            done: false,
        }
    }

    pub fn face_vertices(&self, f: usize) -> SmallVec<[usize; 8]> {
        self.face_halfedges(f).map(|h| self.target(h)).collect()
    }

    pub fn degree(&self, v: usize) -> usize {
        self.outgoing_halfedges(v).count()
    }

    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.outgoing_halfedges(a).any(|h| self.target(h) == b)
    }

    /// The halfedge from `a` to `b`, if the vertices are connected.
    pub fn find_halfedge(&self, a: usize, b: usize) -> Option<usize> {
        self.outgoing_halfedges(a).find(|&h| self.target(h) == b)
    }

    /// Live vertex with the highest index. Cut vertices are appended at the
    /// arena end, so this lands on or near the most recent cut.
    pub fn last_live_vertex(&self) -> Option<usize> {
        (0..self.vertices.len()).rev().find(|&v| !self.vertices[v].removed)
    }

    /// Every live halfedge has a face.
    pub fn is_closed(&self) -> bool {
        self.halfedge_ids().all(|h| self.half_edges[h].face.is_some())
    }
}

pub struct OutgoingHalfedges<'a> {
    mesh: &'a Mesh,
    start: usize,
    current: usize,
    remaining: usize,
    done: bool,
}

impl<'a> Iterator for OutgoingHalfedges<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let h = self.current;
        let t = self.mesh.twin(h);
        self.current = self.mesh.next(t);
        if self.current == self.start || self.current == usize::MAX {
            self.done = true;
        }
        Some(h)
    }
}

pub struct FaceHalfedges<'a> {
    mesh: &'a Mesh,
    start: usize,
    current: usize,
    remaining: usize,
    done: bool,
}

impl<'a> Iterator for FaceHalfedges<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let h = self.current;
        self.current = self.mesh.next(h);
        if self.current == self.start || self.current == usize::MAX {
            self.done = true;
        }
        Some(h)
    }
}
