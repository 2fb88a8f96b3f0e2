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

//! A bounded enumeration engine for tests and tiny models.
//!
//! This is **not** a production solver: it walks every assignment of the
//! discrete variables (binaries over {0, 1}, integers over `0..=cap`) and
//! keeps the best feasible one. It exists so the modeling and decoding layers
//! can be exercised end-to-end without an external engine; real workloads go
//! through a `SolverEngine` wrapping an actual LP/MIP implementation.
//!
//! Conventions:
//! * Strict `<`/`>` rows are evaluated as `<=`/`>=`, the way the LP text
//!   format's consumers treat them.
//! * Models containing continuous variables are reported as a solver failure
//!   (out of this engine's scope); inconsistent continuous bounds are still
//!   diagnosed as `InvalidBounds` first.
//! * Models whose assignment space exceeds an internal limit are reported as
//!   a solver failure rather than ground through.

use crate::constraint::CmpOp;
use crate::engine::{EngineReport, SolverEngine};
use crate::model::ModelBuilder;
use crate::status::{PrimalStatus, SearchStatus};
use rustc_hash::FxHashMap;

const EPS: f64 = 1e-6;
const MAX_ASSIGNMENTS: u128 = 1 << 24;

/// Deterministic exhaustive search over bounded discrete assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustiveEngine {
    integer_cap: u64,
}

impl Default for ExhaustiveEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExhaustiveEngine {
    /// Creates an engine with the default integer cap of 8.
    #[inline]
    pub fn new() -> Self {
        Self { integer_cap: 8 }
    }

    /// Sets the inclusive upper value enumerated for integer variables.
    /// Integer variables are unbounded in the model; the cap is this
    /// engine's enumeration limit, so it must dominate any value a feasible
    /// optimum could take in the model under test.
    #[inline]
    pub fn with_integer_cap(mut self, cap: u64) -> Self {
        self.integer_cap = cap;
        self
    }

    /// Returns the inclusive integer enumeration cap.
    #[inline]
    pub fn integer_cap(&self) -> u64 {
        self.integer_cap
    }
}

fn satisfied(op: CmpOp, lhs: f64, threshold: f64) -> bool {
    match op {
        CmpOp::Le | CmpOp::Lt => lhs <= threshold + EPS,
        CmpOp::Ge | CmpOp::Gt => lhs >= threshold - EPS,
        CmpOp::Eq => (lhs - threshold).abs() <= EPS,
    }
}

fn evaluate(
    terms: &crate::linear::LinearCombination,
    positions: &FxHashMap<&str, usize>,
    digits: &[u64],
) -> f64 {
    terms
        .iter()
        .map(|(name, coefficient)| coefficient * digits[positions[name]] as f64)
        .sum()
}

impl SolverEngine for ExhaustiveEngine {
    fn name(&self) -> &str {
        "exhaustive"
    }

    fn solve(&self, model: &ModelBuilder) -> EngineReport {
        use crate::variable::VarDomain;

        for v in model.variables() {
            if let VarDomain::Continuous { lower, upper } = v.domain() {
                if lower > upper {
                    return EngineReport::search_failed(SearchStatus::InvalidBounds);
                }
            }
        }
        if model
            .variables()
            .iter()
            .any(|v| v.domain().is_continuous())
        {
            return EngineReport::search_failed(SearchStatus::Failure);
        }

        let positions: FxHashMap<&str, usize> = model
            .variables()
            .iter()
            .enumerate()
            .map(|(slot, v)| (v.name(), slot))
            .collect();
        let radices: Vec<u64> = model
            .variables()
            .iter()
            .map(|v| match v.domain() {
                VarDomain::Binary => 2,
                VarDomain::Integer => self.integer_cap + 1,
                VarDomain::Continuous { .. } => unreachable!(),
            })
            .collect();

        let mut total: u128 = 1;
        for &radix in &radices {
            total = total.saturating_mul(radix as u128);
            if total > MAX_ASSIGNMENTS {
                return EngineReport::search_failed(SearchStatus::Failure);
            }
        }

        let mut digits = vec![0u64; radices.len()];
        let mut best: Option<(f64, Vec<u64>)> = None;

        'assignments: loop {
            let feasible = model.constraints().iter().all(|c| {
                satisfied(c.op(), evaluate(c.terms(), &positions, &digits), c.threshold())
            });
            if feasible {
                let objective = evaluate(model.objective(), &positions, &digits);
                let improves = match &best {
                    Some((incumbent, _)) => objective > incumbent + EPS,
                    None => true,
                };
                if improves {
                    best = Some((objective, digits.clone()));
                }
            }

            let mut slot = 0;
            loop {
                if slot == radices.len() {
                    break 'assignments;
                }
                digits[slot] += 1;
                if digits[slot] < radices[slot] {
                    break;
                }
                digits[slot] = 0;
                slot += 1;
            }
        }

        let (primal, objective, winning) = match best {
            Some((objective, winning)) => (PrimalStatus::Optimal, objective, winning),
            None => (
                PrimalStatus::NoFeasibleExists,
                0.0,
                vec![0u64; radices.len()],
            ),
        };

        let variables: FxHashMap<String, f64> = model
            .variables()
            .iter()
            .enumerate()
            .map(|(slot, v)| (v.name().to_string(), winning[slot] as f64))
            .collect();
        let constraints: FxHashMap<String, f64> = model
            .constraints()
            .iter()
            .map(|c| (c.name().to_string(), evaluate(c.terms(), &positions, &winning)))
            .collect();

        EngineReport {
            search: SearchStatus::Success,
            primal: Some(primal),
            objective,
            variables,
            constraints,
        }
    }
}
