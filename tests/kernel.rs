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

use polykern::geometry::{classify_point4, IVec3, Plane};
use polykern::{is_feasible, InputMesh, KdopK, KernelOptions, MeshKernel};

// --- fixtures --------------------------------------------------------------

/// Triangulated cube over `[0,4]^3`, 8 vertices / 12 triangles.
fn cube_tris() -> InputMesh {
    let positions: Vec<IVec3> = (0..8)
        .map(|i| {
            IVec3::new(
                if i & 1 != 0 { 4 } else { 0 },
                if i & 2 != 0 { 4 } else { 0 },
                if i & 4 != 0 { 4 } else { 0 },
            )
        })
        .collect();
    let faces: Vec<Vec<usize>> = vec![
        vec![0, 2, 3],
        vec![0, 3, 1],
        vec![4, 5, 7],
        vec![4, 7, 6],
        vec![0, 1, 5],
        vec![0, 5, 4],
        vec![3, 2, 6],
        vec![3, 6, 7],
        vec![0, 4, 6],
        vec![0, 6, 2],
        vec![1, 3, 7],
        vec![1, 7, 5],
    ];
    InputMesh::new(positions, &faces).unwrap()
}

fn tetrahedron() -> InputMesh {
    let positions = vec![
        IVec3::new(0, 0, 0),
        IVec3::new(4, 0, 0),
        IVec3::new(0, 4, 0),
        IVec3::new(0, 0, 4),
    ];
    let faces: Vec<Vec<usize>> = vec![
        vec![0, 2, 1],
        vec![0, 1, 3],
        vec![1, 2, 3],
        vec![0, 3, 2],
    ];
    InputMesh::new(positions, &faces).unwrap()
}

/// Cube `[0,8]^3` whose top face is replaced by four triangles meeting at an
/// interior apex: a pyramidal indentation.
fn notched_cube() -> InputMesh {
    notched_cube_translated(IVec3::new(0, 0, 0))
}

fn notched_cube_translated(t: IVec3) -> InputMesh {
    let mut positions: Vec<IVec3> = (0..8)
        .map(|i| {
            IVec3::new(
                if i & 1 != 0 { 8 } else { 0 },
                if i & 2 != 0 { 8 } else { 0 },
                if i & 4 != 0 { 8 } else { 0 },
            )
        })
        .collect();
    positions.push(IVec3::new(4, 4, 4)); // apex of the indentation
    for p in &mut positions {
        *p = *p + t;
    }
    let faces: Vec<Vec<usize>> = vec![
        vec![0, 2, 3, 1],
        vec![0, 1, 5, 4],
        vec![3, 2, 6, 7],
        vec![0, 4, 6, 2],
        vec![1, 3, 7, 5],
        vec![4, 5, 8],
        vec![5, 7, 8],
        vec![7, 6, 8],
        vec![6, 4, 8],
    ];
    InputMesh::new(positions, &faces).unwrap()
}

/// Extrudes a counter-clockwise cross-section polygon along z.
fn prism(cross: &[(i32, i32)], z0: i32, z1: i32) -> InputMesh {
    let n = cross.len();
    let mut positions = Vec::with_capacity(2 * n);
    for &(x, y) in cross {
        positions.push(IVec3::new(x, y, z0));
    }
    for &(x, y) in cross {
        positions.push(IVec3::new(x, y, z1));
    }

    let mut faces: Vec<Vec<usize>> = Vec::new();
    faces.push((0..n).rev().collect()); // bottom
    faces.push((n..2 * n).collect()); // top
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![i, j, j + n, i + n]);
    }
    InputMesh::new(positions, &faces).unwrap()
}

/// L-shaped prism. Star-shaped: its kernel is the column over the inner
/// corner square.
fn l_prism() -> InputMesh {
    prism(&[(0, 0), (4, 0), (4, 2), (2, 2), (2, 4), (0, 4)], 0, 2)
}

/// Staircase prism whose two inner walls face each other with a gap; no
/// point sees both far ends, the kernel is empty.
fn staircase_prism() -> InputMesh {
    prism(
        &[
            (0, 0),
            (2, 0),
            (2, 2),
            (3, 2),
            (3, 3),
            (1, 3),
            (1, 1),
            (0, 1),
        ],
        0,
        2,
    )
}

/// Triangular prism carrying an exactly-degenerate (collinear) face on its
/// bottom edge.
fn prism_with_degenerate_face() -> InputMesh {
    let positions = vec![
        IVec3::new(0, 0, 0), // A
        IVec3::new(4, 0, 0), // B
        IVec3::new(0, 4, 0), // C
        IVec3::new(0, 0, 4), // A'
        IVec3::new(4, 0, 4), // B'
        IVec3::new(0, 4, 4), // C'
        IVec3::new(2, 0, 0), // M, midpoint of AB
    ];
    let faces: Vec<Vec<usize>> = vec![
        vec![0, 2, 1, 6],    // bottom, with M spliced into edge B->A
        vec![0, 6, 1],       // zero-area triangle A, M, B
        vec![3, 4, 5],       // top
        vec![0, 1, 4, 3],    // side y = 0
        vec![1, 2, 5, 4],    // slanted side
        vec![2, 0, 3, 5],    // side x = 0
    ];
    InputMesh::new(positions, &faces).unwrap()
}

// --- helpers ---------------------------------------------------------------

/// Invariant: every kernel vertex lies on or behind the supporting plane of
/// every kernel face.
fn assert_vertices_behind_all_faces(k: &MeshKernel) {
    for f in k.mesh().face_ids() {
        let plane = k.face_plane(f);
        for v in k.mesh().vertex_ids() {
            assert!(
                classify_point4(k.position(v), plane) <= 0,
                "vertex {v} in front of face {f}"
            );
        }
    }
}

fn assert_valid_kernel(k: &MeshKernel) {
    assert!(k.has_kernel());
    assert!(k.mesh().is_closed(), "kernel mesh must be closed");
    for v in k.mesh().vertex_ids() {
        assert!(k.position(v).is_valid(), "vertex {v} has w == 0");
        let p = k.position_f64(v);
        assert!(p.iter().all(|c| c.is_finite()));
    }
    assert_vertices_behind_all_faces(k);
}

fn sorted_positions(k: &MeshKernel) -> Vec<[f64; 3]> {
    let mut out: Vec<[f64; 3]> = k
        .mesh()
        .vertex_ids()
        .map(|v| k.position_f64(v))
        .collect();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap());
    out
}

// --- convex short-circuit --------------------------------------------------

#[test]
fn cube_is_its_own_kernel() {
    let input = cube_tris();
    let k = MeshKernel::compute(&input, KernelOptions::default()).unwrap();
    assert!(k.has_kernel());
    assert!(k.input_is_convex());
    let stats = k.stats();
    assert!(stats.is_convex);
    assert_eq!(stats.input_faces, 12);
    assert_eq!(stats.kernel_faces, 12);
    assert_eq!(stats.convex_contribution, 12);
    assert!(!stats.lp_early_out);
}

#[test]
fn tetrahedron_is_its_own_kernel() {
    let k = MeshKernel::compute(&tetrahedron(), KernelOptions::default()).unwrap();
    assert!(k.has_kernel());
    assert!(k.input_is_convex());
    assert_eq!(k.stats().kernel_faces, 4);
}

// --- non-convex scenarios --------------------------------------------------

#[test]
fn notched_cube_kernel_is_a_pyramid() {
    let input = notched_cube();
    let k = MeshKernel::compute(&input, KernelOptions::default()).unwrap();
    assert!(!k.input_is_convex());
    assert_valid_kernel(&k);

    // z <= min(x, y, 8-x, 8-y): four base corners plus the apex
    assert_eq!(k.mesh().n_vertices(), 5);
    assert_eq!(k.mesh().n_faces(), 5);
    assert_eq!(k.stats().total_planes, 9);
    assert_eq!(k.stats().num_concave_planes, 4);
    assert_eq!(k.stats().kernel_faces, 5);

    let positions = sorted_positions(&k);
    let expected: Vec<[f64; 3]> = {
        let mut e = vec![
            [0.0, 0.0, 0.0],
            [0.0, 8.0, 0.0],
            [4.0, 4.0, 4.0],
            [8.0, 0.0, 0.0],
            [8.0, 8.0, 0.0],
        ];
        e.sort_by(|a, b| a.partial_cmp(b).unwrap());
        e
    };
    for (got, want) in positions.iter().zip(&expected) {
        for i in 0..3 {
            assert!((got[i] - want[i]).abs() < 1e-9, "{got:?} vs {want:?}");
        }
    }
}

#[test]
fn l_prism_kernel_is_the_inner_column() {
    let input = l_prism();
    let k = MeshKernel::compute(&input, KernelOptions::default()).unwrap();
    assert!(!k.input_is_convex());
    assert_valid_kernel(&k);
    // the box [0,2]^3 over the reflex corner
    assert_eq!(k.mesh().n_vertices(), 8);
    assert_eq!(k.mesh().n_faces(), 6);
}

#[test]
fn staircase_prism_kernel_is_empty() {
    let input = staircase_prism();
    let k = MeshKernel::compute(&input, KernelOptions::default()).unwrap();
    assert!(!k.input_is_convex());
    assert!(!k.has_kernel());
    assert_eq!(k.mesh().n_vertices(), 0);
    assert_eq!(k.stats().kernel_faces, 0);
}

#[test]
fn degenerate_face_is_tolerated() {
    let input = prism_with_degenerate_face();
    let k = MeshKernel::compute(&input, KernelOptions::default()).unwrap();
    // the zero-area face contributes no cutting plane; the kernel is the
    // prism itself
    assert_valid_kernel(&k);
    assert_eq!(k.mesh().n_vertices(), 6);
    assert_eq!(k.mesh().n_faces(), 5);
}

// --- agreement with the exact feasibility solver ---------------------------

#[test]
fn kernel_agrees_with_feasibility() {
    for (input, expected) in [
        (notched_cube(), true),
        (l_prism(), true),
        (staircase_prism(), false),
        (prism_with_degenerate_face(), true),
    ] {
        assert_eq!(is_feasible(&input), expected);
        let k = MeshKernel::compute(&input, KernelOptions::default()).unwrap();
        assert_eq!(k.has_kernel(), expected);
    }
}

// --- configuration axes must not change results ----------------------------

#[test]
fn options_do_not_change_the_kernel() {
    let input = notched_cube();
    let reference = MeshKernel::compute(&input, KernelOptions::default()).unwrap();
    let reference_positions = sorted_positions(&reference);

    let variants = [
        KernelOptions {
            use_bounding_volume: false,
            ..KernelOptions::default()
        },
        KernelOptions {
            kdop_k: KdopK::K8,
            ..KernelOptions::default()
        },
        KernelOptions {
            kdop_k: KdopK::K9,
            ..KernelOptions::default()
        },
        KernelOptions {
            kdop_k: KdopK::K12,
            ..KernelOptions::default()
        },
        KernelOptions {
            use_hash_set_for_planes: true,
            ..KernelOptions::default()
        },
        KernelOptions {
            parallel_feasibility: false,
            ..KernelOptions::default()
        },
        KernelOptions {
            min_faces_for_parallel_setup: 0,
            ..KernelOptions::default()
        },
    ];

    for options in variants {
        let k = MeshKernel::compute(&input, options.clone()).unwrap();
        assert_valid_kernel(&k);
        assert_eq!(k.mesh().n_vertices(), reference.mesh().n_vertices());
        assert_eq!(k.mesh().n_faces(), reference.mesh().n_faces());
        let positions = sorted_positions(&k);
        for (got, want) in positions.iter().zip(&reference_positions) {
            for i in 0..3 {
                assert!((got[i] - want[i]).abs() < 1e-9, "options {options:?}");
            }
        }
    }
}

#[test]
fn empty_kernel_detected_with_and_without_culling() {
    for use_bv in [false, true] {
        let options = KernelOptions {
            use_bounding_volume: use_bv,
            parallel_feasibility: false,
            ..KernelOptions::default()
        };
        let k = MeshKernel::compute(&staircase_prism(), options).unwrap();
        assert!(!k.has_kernel());
    }
}

#[test]
fn triangulated_output_is_triangles() {
    let options = KernelOptions {
        triangulate_output: true,
        ..KernelOptions::default()
    };
    let k = MeshKernel::compute(&notched_cube(), options).unwrap();
    assert!(k.has_kernel());
    assert!(k.mesh().is_closed());
    for f in k.mesh().face_ids() {
        assert_eq!(k.mesh().face_vertices(f).len(), 3);
    }
    assert_vertices_behind_all_faces(&k);
}

// --- invariances -----------------------------------------------------------

#[test]
fn integer_translation_translates_the_kernel() {
    let t = IVec3::new(3, -5, 7);
    let base = MeshKernel::compute(&notched_cube(), KernelOptions::default()).unwrap();
    let moved =
        MeshKernel::compute(&notched_cube_translated(t), KernelOptions::default()).unwrap();
    assert_valid_kernel(&moved);

    let a = sorted_positions(&base);
    let b = sorted_positions(&moved);
    assert_eq!(a.len(), b.len());
    for (p, q) in a.iter().zip(&b) {
        assert!((p[0] + t.x as f64 - q[0]).abs() < 1e-9);
        assert!((p[1] + t.y as f64 - q[1]).abs() < 1e-9);
        assert!((p[2] + t.z as f64 - q[2]).abs() < 1e-9);
    }
}

#[test]
fn kernel_vertices_satisfy_all_input_planes() {
    // stronger than the per-face invariant: the kernel lies behind every
    // valid input face plane
    let input = notched_cube();
    let k = MeshKernel::compute(&input, KernelOptions::default()).unwrap();
    for f in input.mesh.face_ids() {
        let vs = input.mesh.face_vertices(f);
        let plane = Plane::from_points_no_gcd(
            input.positions[vs[0]],
            input.positions[vs[1]],
            input.positions[vs[2]],
        );
        if !plane.is_valid() {
            continue;
        }
        for v in k.mesh().vertex_ids() {
            assert!(classify_point4(k.position(v), &plane) <= 0);
        }
    }
}

#[test]
fn dequantization_scales_output_positions() {
    let input = cube_tris().with_scale(4.0);
    let k = MeshKernel::compute(&input, KernelOptions::default()).unwrap();
    assert!(k.input_is_convex());

    let input = notched_cube().with_scale(2.0);
    let k = MeshKernel::compute(&input, KernelOptions::default()).unwrap();
    assert!(k.has_kernel());
    // quantized apex (4,4,4) maps back to (2,2,2)
    let found = k
        .mesh()
        .vertex_ids()
        .map(|v| k.position_f64(v))
        .any(|p| (p[0] - 2.0).abs() < 1e-9 && (p[1] - 2.0).abs() < 1e-9 && (p[2] - 2.0).abs() < 1e-9);
    assert!(found);
}

// --- input contract --------------------------------------------------------

#[test]
fn out_of_bounds_positions_are_rejected() {
    let mut input = tetrahedron();
    input.positions[0] = IVec3::new(1 << 27, 0, 0);
    assert!(MeshKernel::compute(&input, KernelOptions::default()).is_err());
}

#[test]
fn open_meshes_are_rejected() {
    let positions = vec![
        IVec3::new(0, 0, 0),
        IVec3::new(4, 0, 0),
        IVec3::new(0, 4, 0),
    ];
    let input = InputMesh::new(positions, &[vec![0, 1, 2]]).unwrap();
    assert!(MeshKernel::compute(&input, KernelOptions::default()).is_err());
}
