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

//! Background feasibility worker: one thread running the exact Seidel solver
//! on its own copy of the cutting planes, reporting through a channel probed
//! without blocking.
//!
//! The only shared state with the cutting loop is the atomic stop flag and
//! the one-shot result. The result is read at most once, and never after a
//! cancellation has been requested — a cancelled solve reports `Infeasible`
//! without meaning it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::{mpsc, Arc};
use std::thread;

use tracing::debug;

use crate::geometry::Plane;
use crate::kernel::seidel::{Feasibility, SeidelSolver};
use crate::kernel::InputMesh;

pub struct FeasibilityWorker {
    should_stop: Arc<AtomicBool>,
    result: Receiver<Feasibility>,
    queried: bool,
    infeasible: bool,
}

impl FeasibilityWorker {
    /// Starts the solver on its own thread with its own shuffled plane copy.
    pub fn spawn(planes: Vec<Plane>) -> Self {
        let should_stop = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel();
        let flag = Arc::clone(&should_stop);
        thread::spawn(move || {
            let mut solver = SeidelSolver::with_stop(flag);
            solver.set_planes(&planes);
            // the receiver may be gone if the cutting loop finished first
            let _ = tx.send(solver.solve());
        });
        Self {
            should_stop,
            result: rx,
            queried: false,
            infeasible: false,
        }
    }

    /// Non-blocking probe: true once the worker has proven the problem
    /// infeasible. The channel is consumed at most once; repeated calls
    /// return the cached answer. Must not be called after
    /// [`FeasibilityWorker::cancel`].
    pub fn is_infeasible(&mut self) -> bool {
        if self.queried {
            return self.infeasible;
        }
        match self.result.try_recv() {
            Ok(state) => {
                self.queried = true;
                self.infeasible = state == Feasibility::Infeasible;
                if self.infeasible {
                    debug!("feasibility worker finished before cutting did: infeasible");
                }
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // worker died without an answer; inconclusive
                self.queried = true;
            }
        }
        self.infeasible
    }

    /// Requests cooperative cancellation and detaches the worker. Idempotent;
    /// a no-op for a worker that already finished.
    pub fn cancel(&self) {
        self.should_stop.store(true, Ordering::Relaxed);
    }
}

/// Synchronous feasibility of a whole mesh: builds the face planes (skipping
/// degenerate faces) and runs the exact solver on the calling thread.
pub fn is_feasible(input: &InputMesh) -> bool {
    let mut planes = Vec::with_capacity(input.mesh.faces.len());
    for f in input.mesh.face_ids() {
        let vs = input.mesh.face_vertices(f);
        let p = Plane::from_points_no_gcd(
            input.positions[vs[0]],
            input.positions[vs[1]],
            input.positions[vs[2]],
        );
        if p.is_valid() {
            planes.push(p);
        }
    }
    let mut solver = SeidelSolver::new();
    solver.set_planes(&planes);
    solver.solve() != Feasibility::Infeasible
}
