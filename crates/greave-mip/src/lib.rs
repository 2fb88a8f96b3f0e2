// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Greave MIP
//!
//! **The generic mixed-integer modeling facility for the Greave loadout solver.**
//!
//! This crate knows nothing about armor, charms, or jewels. It provides the
//! machinery to declare a Mixed-Integer Program — typed variables, named linear
//! constraints, an additive objective — render it in the plain-text format
//! consumed by external LP/MIP engines, and carry the engine's answer back in
//! one uniform result shape.
//!
//! ## Architecture
//!
//! * **`variable`**: Variable domains (continuous, integer, binary) and the
//!   handles returned by the builder.
//! * **`linear`**: Insertion-ordered linear combinations with additive merge.
//! * **`constraint`**: Relational operators and named constraint rows.
//! * **`model`**: The `ModelBuilder` — declaration, serialization, and the
//!   `solve` adapter — plus `ModelStats`.
//! * **`status`**: The fixed search/primal status enumerations and their
//!   human-readable texts.
//! * **`result`**: The uniform `SolveResult` handed to callers.
//! * **`engine`**: The `SolverEngine` seam behind which the actual solving
//!   (simplex relaxation, branch-and-bound) lives.
//! * **`exhaustive`**: A bounded enumeration engine for tests and tiny models.
//!
//! ## Design Philosophy
//!
//! 1. **Single-use models**: a `ModelBuilder` is created for one solve and
//!    discarded; nothing survives across solves.
//! 2. **Report, never throw**: solving returns a structured result with a
//!    `solved` flag and a status text. Pathological models (empty, infeasible)
//!    are still well-formed models.
//! 3. **Deterministic text**: serialization preserves declaration and
//!    insertion order, so the same model always renders the same bytes.

pub mod constraint;
pub mod engine;
pub mod exhaustive;
pub mod linear;
pub mod model;
pub mod result;
pub mod status;
pub mod variable;
