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

use polykern::mesh::{Mesh, MeshError};

/// Cube over corners indexed by bit 0 = x, bit 1 = y, bit 2 = z.
fn cube() -> Mesh {
    let faces: Vec<Vec<usize>> = vec![
        vec![0, 2, 3, 1],
        vec![4, 5, 7, 6],
        vec![0, 1, 5, 4],
        vec![3, 2, 6, 7],
        vec![0, 4, 6, 2],
        vec![1, 3, 7, 5],
    ];
    Mesh::from_polygons(8, &faces).unwrap()
}

#[test]
fn cube_connectivity() {
    let m = cube();
    assert_eq!(m.n_vertices(), 8);
    assert_eq!(m.n_faces(), 6);
    assert_eq!(m.half_edges.len(), 24);
    assert!(m.is_closed());

    for v in m.vertex_ids() {
        assert_eq!(m.degree(v), 3);
    }
    for f in m.face_ids() {
        assert_eq!(m.face_vertices(f).len(), 4);
    }
    for h in m.halfedge_ids() {
        assert_eq!(m.twin(m.twin(h)), h);
        assert_eq!(m.source(h), m.target(m.twin(h)));
        assert_eq!(m.next(m.prev(h)), h);
        assert_eq!(m.prev(m.next(h)), h);
    }
}

#[test]
fn duplicate_directed_edge_is_rejected() {
    // second face repeats the directed edge 0 -> 1
    let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2], vec![0, 1, 3]];
    match Mesh::from_polygons(4, &faces) {
        Err(MeshError::NonManifoldEdge { from: 0, to: 1 }) => {}
        other => panic!("expected non-manifold error, got {other:?}"),
    }
}

#[test]
fn open_mesh_is_not_closed() {
    let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2]];
    let m = Mesh::from_polygons(3, &faces).unwrap();
    assert!(!m.is_closed());
}

#[test]
fn split_edge_preserves_connectivity() {
    let mut m = cube();
    let h = m.find_halfedge(0, 2).unwrap();
    let f1 = m.face(h);
    let f2 = m.face(m.twin(h));

    let (w, h2) = m.split_edge(h);
    assert_eq!(w, 8);
    assert_eq!(m.target(h), w);
    assert_eq!(m.source(h2), w);
    assert_eq!(m.target(h2), 2);
    assert_eq!(m.face(h2), f1);
    assert_eq!(m.face(m.twin(h2)), f2);
    assert_eq!(m.degree(w), 2);
    assert!(m.is_closed());

    // both incident faces gained a vertex
    assert_eq!(m.face_vertices(f1.unwrap()).len(), 5);
    assert_eq!(m.face_vertices(f2.unwrap()).len(), 5);

    for h in m.halfedge_ids() {
        assert_eq!(m.next(m.prev(h)), h);
        assert_eq!(m.prev(m.next(h)), h);
    }
}

#[test]
fn cut_face_splits_a_quad() {
    let mut m = cube();
    // face 0 has vertex loop targets {0, 2, 3, 1}
    let vs = m.face_vertices(0);
    assert_eq!(vs.len(), 4);
    let (a, b) = (vs[0], vs[2]);

    let (hn, f_new) = m.cut_face(0, a, b).unwrap();
    assert_eq!(m.source(hn), a);
    assert_eq!(m.target(hn), b);
    assert_eq!(m.face(hn), Some(0));
    assert_eq!(m.face(m.twin(hn)), Some(f_new));

    assert_eq!(m.face_vertices(0).len(), 3);
    assert_eq!(m.face_vertices(f_new).len(), 3);
    assert_eq!(m.n_faces(), 7);
    assert!(m.is_closed());
    assert!(m.are_adjacent(a, b));
}

#[test]
fn remove_corner_and_fill_hole() {
    let mut m = cube();
    m.remove_vertices(&[7]);
    m.rebuild_boundary_links();

    assert_eq!(m.n_vertices(), 7);
    assert_eq!(m.n_faces(), 3);
    assert!(!m.is_closed());

    // the hole is a hexagon through the six vertices adjacent to the corner
    let boundary: Vec<usize> = m
        .halfedge_ids()
        .filter(|&h| m.face(h).is_none())
        .collect();
    assert_eq!(boundary.len(), 6);

    let f = m.fill_boundary_loop(boundary[0]);
    assert!(m.is_closed());
    assert_eq!(m.n_faces(), 4);
    assert_eq!(m.face_vertices(f).len(), 6);
}

#[test]
fn compact_renumbers_densely() {
    let mut m = cube();
    m.remove_vertices(&[7]);
    m.rebuild_boundary_links();
    let boundary = m.halfedge_ids().find(|&h| m.face(h).is_none()).unwrap();
    m.fill_boundary_loop(boundary);

    let maps = m.compact();
    assert_eq!(m.vertices.len(), 7);
    assert_eq!(m.faces.len(), 4);
    assert_eq!(maps.vertices.len(), 7);
    assert_eq!(maps.half_edges.len(), m.half_edges.len());
    assert!(m.is_closed());

    for h in 0..m.half_edges.len() {
        assert_eq!(m.next(m.prev(h)), h);
        assert_eq!(m.twin(m.twin(h)), h);
    }
    for v in 0..m.vertices.len() {
        assert!(m.degree(v) >= 2);
    }
}
