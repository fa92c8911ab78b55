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

//! Halfedge mesh arena.
//!
//! Vertices, halfedges and faces live in parallel vectors indexed by plain
//! `usize` handles; removal marks a tombstone, compaction is explicit. Twin
//! halfedges are allocated adjacently, so `h ^ 1` is the twin and `h >> 1`
//! the edge index — per-edge attributes index by the latter.

pub mod core;
pub mod half_edge;
pub mod topology;

pub use self::core::Mesh;
pub use half_edge::{Face, HalfEdge, Vertex};

use thiserror::Error;

/// Construction errors for polygon-soup input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// The same directed edge occurs in two faces.
    #[error("non-manifold directed edge {from} -> {to}")]
    NonManifoldEdge { from: usize, to: usize },

    /// A face with fewer than three vertices.
    #[error("face {face} has fewer than three vertices")]
    FaceTooSmall { face: usize },

    /// A face references a vertex index past the end of the vertex array.
    #[error("face {face} references vertex {vertex} out of range")]
    VertexOutOfRange { face: usize, vertex: usize },
}
