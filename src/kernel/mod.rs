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

//! Mesh-kernel computation: input analysis, the exact Seidel feasibility
//! solver, k-DOP culling, and the plane-cutting constructor.

pub mod analysis;
pub mod benchmark;
pub mod feasibility;
pub mod kdop;
pub mod options;
pub mod plane_cut;
pub mod seidel;

use thiserror::Error;

use crate::geometry::{IVec3, MAX_POSITION};
use crate::mesh::{Mesh, MeshError};

/// Violations of the input contract. Degenerate faces and empty kernels are
/// not errors; these are the conditions under which the constructor refuses
/// to run at all.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("vertex {vertex} lies outside the configured position bound")]
    PositionOutOfBounds { vertex: usize },

    #[error("input mesh is not closed")]
    NotClosed,

    #[error("position count {positions} does not match vertex count {vertices}")]
    PositionCountMismatch { positions: usize, vertices: usize },

    #[error(transparent)]
    Topology(#[from] MeshError),
}

/// A closed polygonal mesh with integer positions, the unit the kernel
/// constructor consumes.
///
/// Callers owning floating-point meshes quantize to Z^3 themselves; `scale`
/// records the factor they applied so output positions can be mapped back.
#[derive(Clone, Debug)]
pub struct InputMesh {
    pub mesh: Mesh,
    pub positions: Vec<IVec3>,
    pub scale: f64,
}

impl InputMesh {
    /// Builds connectivity from polygon faces; `scale` defaults to 1.
    pub fn new(positions: Vec<IVec3>, polys: &[Vec<usize>]) -> Result<Self, KernelError> {
        let mesh = Mesh::from_polygons(positions.len(), polys)?;
        Ok(Self {
            mesh,
            positions,
            scale: 1.0,
        })
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Checks the constructor preconditions: matching position count, bounded
    /// coordinates, closed topology.
    pub fn validate(&self) -> Result<(), KernelError> {
        if self.positions.len() != self.mesh.vertices.len() {
            return Err(KernelError::PositionCountMismatch {
                positions: self.positions.len(),
                vertices: self.mesh.vertices.len(),
            });
        }
        for (v, p) in self.positions.iter().enumerate() {
            if p.x.abs() > MAX_POSITION || p.y.abs() > MAX_POSITION || p.z.abs() > MAX_POSITION {
                return Err(KernelError::PositionOutOfBounds { vertex: v });
            }
        }
        if !self.mesh.is_closed() {
            return Err(KernelError::NotClosed);
        }
        Ok(())
    }
}
