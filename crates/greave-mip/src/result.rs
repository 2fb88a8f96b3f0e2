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

use crate::engine::EngineReport;
use rustc_hash::FxHashMap;

/// The uniform result of one solve, regardless of which engine ran it.
///
/// Callers must check `solved` before trusting `objective` or the variable
/// values: a result with `solved == false` still carries the status text and
/// whatever partial values the engine reported, but no feasibility promise.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// `true` only when the search phase succeeded and the primal status is
    /// feasible or optimal.
    pub solved: bool,
    /// Human-readable status drawn from the fixed enumerations in `status`.
    pub status_text: String,
    /// Best objective value found (meaningful only when `solved`).
    pub objective: f64,
    /// Resulting value per variable name.
    pub variables: FxHashMap<String, f64>,
    /// Resulting left-hand-side value per constraint name.
    pub constraints: FxHashMap<String, f64>,
}

impl SolveResult {
    /// Adapts an engine's report into the uniform result shape.
    ///
    /// The status text is the primal-solution text when the search phase
    /// succeeded (falling back to a fixed text when the engine omitted a
    /// primal status), and the search text otherwise.
    pub fn from_report(report: EngineReport) -> Self {
        let solved = report.search.is_success()
            && report.primal.map(|p| p.is_usable()).unwrap_or(false);

        let status_text = if report.search.is_success() {
            match report.primal {
                Some(primal) => primal.status_text().to_string(),
                None => "success with undefined status".to_string(),
            }
        } else {
            report.search.status_text().to_string()
        };

        Self {
            solved,
            status_text,
            objective: report.objective,
            variables: report.variables,
            constraints: report.constraints,
        }
    }

    /// Returns the resulting value of a variable, 0 if the engine did not
    /// report one.
    #[inline]
    pub fn variable(&self, name: &str) -> f64 {
        self.variables.get(name).copied().unwrap_or(0.0)
    }
}

impl std::fmt::Display for SolveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolveResult(solved: {}, status: {}, objective: {})",
            self.solved, self.status_text, self.objective
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{PrimalStatus, SearchStatus};

    fn report(search: SearchStatus, primal: Option<PrimalStatus>) -> EngineReport {
        EngineReport {
            search,
            primal,
            objective: 7.0,
            variables: FxHashMap::default(),
            constraints: FxHashMap::default(),
        }
    }

    #[test]
    fn test_solved_requires_success_and_usable_primal() {
        let r = SolveResult::from_report(report(SearchStatus::Success, Some(PrimalStatus::Optimal)));
        assert!(r.solved);
        assert_eq!(r.status_text, "optimal solution found");

        let r =
            SolveResult::from_report(report(SearchStatus::Success, Some(PrimalStatus::Feasible)));
        assert!(r.solved);

        let r = SolveResult::from_report(report(
            SearchStatus::Success,
            Some(PrimalStatus::NoFeasibleExists),
        ));
        assert!(!r.solved);
        assert_eq!(r.status_text, "no primal feasible solution exists");
    }

    #[test]
    fn test_failed_search_reports_search_text() {
        let r = SolveResult::from_report(report(SearchStatus::TimeLimit, None));
        assert!(!r.solved);
        assert_eq!(r.status_text, "time limit exceeded");

        // A primal status reported alongside a failed search must not flip `solved`.
        let r =
            SolveResult::from_report(report(SearchStatus::Failure, Some(PrimalStatus::Optimal)));
        assert!(!r.solved);
        assert_eq!(r.status_text, "solver failure");
    }

    #[test]
    fn test_success_without_primal_status() {
        let r = SolveResult::from_report(report(SearchStatus::Success, None));
        assert!(!r.solved);
        assert_eq!(r.status_text, "success with undefined status");
    }

    #[test]
    fn test_missing_variable_reads_as_zero() {
        let mut rep = report(SearchStatus::Success, Some(PrimalStatus::Optimal));
        rep.variables.insert("a1".to_string(), 1.0);
        let r = SolveResult::from_report(rep);

        assert_eq!(r.variable("a1"), 1.0);
        assert_eq!(r.variable("a2"), 0.0);
    }
}
