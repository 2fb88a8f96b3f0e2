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

//! # Greave Solver
//!
//! **Loadout search over the equipment catalog, phrased as a MIP.**
//!
//! Given a list of minimum skill-level requirements, this crate builds a
//! mixed-integer model over the relevant slice of the catalog — which armor
//! pieces to wear, which charm, which jewels in which sockets — hands it to a
//! solving engine, and decodes the raw variable assignment back into a
//! human-meaningful loadout report.
//!
//! ## Architecture
//!
//! * **`config`**: Objective weights, big-M constant, and the
//!   socket-capacity toggle.
//! * **`kind`**: Skill requirements and the tagged variable kinds that make
//!   decoding a lookup instead of a string parse.
//! * **`generator`**: Relevance filtering and model emission — the one place
//!   the loadout problem is actually encoded.
//! * **`decoder`**: From a raw variable assignment back to worn items, jewel
//!   placements, recomputed skill totals, and socket usage.
//! * **`report`**: The structured, presentation-independent loadout report.
//! * **`solve`**: The `LoadoutSolver` facade running generate → solve →
//!   decode for one request.
//!
//! ## Concurrency
//!
//! Everything here is synchronous and request/response shaped. A wrapper
//! adding concurrency must give each request its own generated model; the
//! `CatalogIndex` is shared and read-only.

pub mod config;
pub mod decoder;
pub mod generator;
pub mod kind;
pub mod report;
pub mod solve;
