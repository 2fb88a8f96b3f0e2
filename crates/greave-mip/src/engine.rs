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

use crate::model::ModelBuilder;
use crate::status::{PrimalStatus, SearchStatus};
use rustc_hash::FxHashMap;

/// What an engine hands back after attempting one model.
///
/// Engines report, they never throw: every failure mode is a `SearchStatus`
/// variant, and a completed search carries a `PrimalStatus` describing the
/// best integer solution found.
#[derive(Debug, Clone)]
pub struct EngineReport {
    /// Outcome of the relaxation/search phase.
    pub search: SearchStatus,
    /// Primal-solution status; expected whenever `search` is `Success`.
    pub primal: Option<PrimalStatus>,
    /// Best objective value found.
    pub objective: f64,
    /// Resulting value per variable name.
    pub variables: FxHashMap<String, f64>,
    /// Resulting left-hand-side value per constraint name.
    pub constraints: FxHashMap<String, f64>,
}

impl EngineReport {
    /// A report for a search that failed before producing any solution data.
    pub fn search_failed(search: SearchStatus) -> Self {
        debug_assert!(
            !search.is_success(),
            "called `EngineReport::search_failed` with a success status"
        );

        Self {
            search,
            primal: None,
            objective: 0.0,
            variables: FxHashMap::default(),
            constraints: FxHashMap::default(),
        }
    }
}

/// The seam behind which the actual solving lives.
///
/// This crate only builds models and interprets results; the continuous
/// relaxation (simplex) and the integer search (branch-and-bound) are the
/// engine's business. An engine wrapping an external text-based solver would
/// feed it `ModelBuilder::serialize` output; in-process engines can walk the
/// structured model directly.
pub trait SolverEngine {
    /// A short human-readable engine name for diagnostics.
    fn name(&self) -> &str;

    /// Attempts to solve the model, reporting the outcome. Must not panic on
    /// pathological models (empty, infeasible, unbounded); those are statuses.
    fn solve(&self, model: &ModelBuilder) -> EngineReport;
}
