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

//! The two fixed status enumerations reported by solving engines.
//!
//! A solve has two phases: the relaxation/search phase (simplex on the
//! continuous relaxation followed by the integer search) and, when that phase
//! succeeds, a primal-solution status describing what the search actually
//! found. Both enumerations carry fixed human-readable texts; callers are
//! expected to branch on the variants, not on the strings.

/// Outcome of the relaxation/search phase as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// Both phases ran to completion; see the primal status for what was found.
    Success,
    /// A variable carries inconsistent bounds (e.g. lower > upper).
    InvalidBounds,
    /// No basis could be constructed for the continuous relaxation.
    NoBasis,
    /// The LP relaxation has no primal feasible solution.
    NoPrimalFeasible,
    /// The LP relaxation has no dual feasible solution.
    NoDualFeasible,
    /// The engine failed for an unspecified internal reason.
    Failure,
    /// The engine hit its time limit before finishing.
    TimeLimit,
    /// The search was stopped by the application.
    Stopped,
    /// The engine reported a status outside this enumeration.
    Undefined,
}

impl SearchStatus {
    /// Returns `true` only for `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, SearchStatus::Success)
    }

    /// The fixed human-readable text for this status.
    pub fn status_text(&self) -> &'static str {
        match self {
            SearchStatus::Success => "search succeeded",
            SearchStatus::InvalidBounds => "invalid bounds",
            SearchStatus::NoBasis => "no basis for relaxation",
            SearchStatus::NoPrimalFeasible => "LP relaxation has no primal feasible solution",
            SearchStatus::NoDualFeasible => "LP relaxation has no dual feasible solution",
            SearchStatus::Failure => "solver failure",
            SearchStatus::TimeLimit => "time limit exceeded",
            SearchStatus::Stopped => "stopped by application",
            SearchStatus::Undefined => "undefined",
        }
    }
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status_text())
    }
}

/// Status of the best primal (integer) solution, reported only when the
/// search phase signals success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimalStatus {
    /// The solution status is undefined.
    Undefined,
    /// A feasible solution was found, optimality not proven.
    Feasible,
    /// The recorded solution violates a constraint.
    Infeasible,
    /// It was proven that no feasible solution exists.
    NoFeasibleExists,
    /// An optimal solution was found and proven.
    Optimal,
}

impl PrimalStatus {
    /// Returns `true` when the status carries a usable solution.
    #[inline]
    pub fn is_usable(&self) -> bool {
        matches!(self, PrimalStatus::Feasible | PrimalStatus::Optimal)
    }

    /// The fixed human-readable text for this status.
    pub fn status_text(&self) -> &'static str {
        match self {
            PrimalStatus::Undefined => "primal solution is undefined",
            PrimalStatus::Feasible => "primal solution is feasible",
            PrimalStatus::Infeasible => "primal solution is infeasible",
            PrimalStatus::NoFeasibleExists => "no primal feasible solution exists",
            PrimalStatus::Optimal => "optimal solution found",
        }
    }
}

impl std::fmt::Display for PrimalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_success_is_success() {
        assert!(SearchStatus::Success.is_success());
        for status in [
            SearchStatus::InvalidBounds,
            SearchStatus::NoBasis,
            SearchStatus::NoPrimalFeasible,
            SearchStatus::NoDualFeasible,
            SearchStatus::Failure,
            SearchStatus::TimeLimit,
            SearchStatus::Stopped,
            SearchStatus::Undefined,
        ] {
            assert!(!status.is_success(), "{status:?} must not be success");
        }
    }

    #[test]
    fn test_usable_primal_statuses() {
        assert!(PrimalStatus::Feasible.is_usable());
        assert!(PrimalStatus::Optimal.is_usable());
        assert!(!PrimalStatus::Undefined.is_usable());
        assert!(!PrimalStatus::Infeasible.is_usable());
        assert!(!PrimalStatus::NoFeasibleExists.is_usable());
    }

    #[test]
    fn test_status_texts_are_fixed() {
        assert_eq!(SearchStatus::TimeLimit.status_text(), "time limit exceeded");
        assert_eq!(
            PrimalStatus::NoFeasibleExists.status_text(),
            "no primal feasible solution exists"
        );
        assert_eq!(format!("{}", SearchStatus::InvalidBounds), "invalid bounds");
    }
}
