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

//! The `ModelBuilder`: declaration, serialization, and the solve adapter.
//!
//! A builder is single-use. It is created empty at the start of one solve,
//! filled with variables, constraints, and an objective, rendered (or handed
//! to an engine), and discarded once the result is decoded. Nothing is shared
//! between solves.
//!
//! The serialized form follows the classic LP text grammar, with a fixed
//! section order and one leading space per body line:
//!
//! ```text
//! Maximize
//!  +1 s1 -10 a1
//! Subject to
//!  singlehead: +1 a1 +1 a2 <= 1
//! Bounds
//!  0 <= x1 <= 3
//! General
//!  j2s1
//! Binary
//!  a1
//! End
//! ```
//!
//! Coefficients carry an explicit `+` when non-negative and `-` when
//! negative; a variable absent from a row has implicit coefficient 0.

use crate::constraint::{CmpOp, Constraint, ConstraintHandle};
use crate::engine::SolverEngine;
use crate::linear::LinearCombination;
use crate::result::SolveResult;
use crate::variable::{VarDomain, VarHandle, Variable};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A mutable, single-use MIP instance: typed variables, named linear
/// constraints, and an additive `Maximize` objective.
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    variables: Vec<Variable>,
    name_index: FxHashMap<String, usize>,
    constraints: Vec<Constraint>,
    objective: LinearCombination,
}

impl ModelBuilder {
    /// Creates an empty model.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    fn declare(&mut self, name: String, domain: VarDomain) -> VarHandle {
        debug_assert!(
            !self.name_index.contains_key(&name),
            "called `ModelBuilder::declare` with duplicate variable name: {}",
            name
        );

        self.name_index.insert(name.clone(), self.variables.len());
        self.variables.push(Variable::new(name.clone(), domain));
        VarHandle::new(name)
    }

    /// Declares a continuous variable with explicit `lower`/`upper` bounds
    /// and returns its handle.
    pub fn add_continuous_variable(
        &mut self,
        name: impl Into<String>,
        lower: f64,
        upper: f64,
    ) -> VarHandle {
        self.declare(name.into(), VarDomain::Continuous { lower, upper })
    }

    /// Declares a non-negative integer variable (no declared upper bound)
    /// and returns its handle.
    pub fn add_integer_variable(&mut self, name: impl Into<String>) -> VarHandle {
        self.declare(name.into(), VarDomain::Integer)
    }

    /// Declares a 0/1 variable and returns its handle.
    pub fn add_binary_variable(&mut self, name: impl Into<String>) -> VarHandle {
        self.declare(name.into(), VarDomain::Binary)
    }

    /// Appends one constraint row, or — when `op` is `Eq` — the equivalent
    /// `{name}_upper` (`<=`) / `{name}_lower` (`>=`) pair, and returns the
    /// handles of everything appended.
    ///
    /// Every variable referenced by `terms` must already be declared.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        terms: LinearCombination,
        op: CmpOp,
        threshold: f64,
    ) -> SmallVec<[ConstraintHandle; 2]> {
        let name = name.into();

        if op == CmpOp::Eq {
            let mut handles = self.add_constraint(
                format!("{}_upper", name),
                terms.clone(),
                CmpOp::Le,
                threshold,
            );
            handles.extend(self.add_constraint(
                format!("{}_lower", name),
                terms,
                CmpOp::Ge,
                threshold,
            ));
            return handles;
        }

        #[cfg(debug_assertions)]
        for (var_name, _) in terms.iter() {
            debug_assert!(
                self.name_index.contains_key(var_name),
                "called `ModelBuilder::add_constraint` with undeclared variable: {} (constraint {})",
                var_name,
                name
            );
        }

        self.constraints
            .push(Constraint::new(name.clone(), terms, op, threshold));

        let mut handles = SmallVec::new();
        handles.push(ConstraintHandle::new(name));
        handles
    }

    /// Merges `terms` additively into the running objective: a variable
    /// touched twice accumulates both contributions.
    ///
    /// Every variable referenced by `terms` must already be declared.
    pub fn add_to_objective(&mut self, terms: &LinearCombination) {
        #[cfg(debug_assertions)]
        for (var_name, _) in terms.iter() {
            debug_assert!(
                self.name_index.contains_key(var_name),
                "called `ModelBuilder::add_to_objective` with undeclared variable: {}",
                var_name
            );
        }

        self.objective.merge(terms);
    }

    /// Returns the declared variables in declaration order.
    #[inline]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Returns the appended constraints in append order (equality pairs
    /// appear as their expanded rows).
    #[inline]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Returns the running objective.
    #[inline]
    pub fn objective(&self) -> &LinearCombination {
        &self.objective
    }

    /// Looks up a declared variable by name.
    #[inline]
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.name_index.get(name).map(|&slot| &self.variables[slot])
    }

    /// Counts of variables by domain plus the constraint count.
    pub fn stats(&self) -> ModelStats {
        let mut stats = ModelStats {
            num_continuous: 0,
            num_integer: 0,
            num_binary: 0,
            num_constraints: self.constraints.len(),
        };
        for v in &self.variables {
            match v.domain() {
                VarDomain::Continuous { .. } => stats.num_continuous += 1,
                VarDomain::Integer => stats.num_integer += 1,
                VarDomain::Binary => stats.num_binary += 1,
            }
        }
        stats
    }

    /// Renders the model in the fixed plain-text grammar consumed by
    /// external engines. Section order: `Maximize`, `Subject to`, `Bounds`
    /// (continuous variables), `General` (integer variables), `Binary`
    /// (binary variables), `End`.
    pub fn serialize(&self) -> String {
        let mut out = String::new();

        out.push_str("Maximize\n");
        out.push_str(&render_terms(&self.objective));
        out.push('\n');

        out.push_str("Subject to\n");
        for c in &self.constraints {
            out.push(' ');
            out.push_str(c.name());
            out.push(':');
            let row = render_terms(c.terms());
            out.push_str(&row);
            out.push(' ');
            out.push_str(c.op().as_str());
            out.push(' ');
            out.push_str(&fmt_num(c.threshold()));
            out.push('\n');
        }

        out.push_str("Bounds\n");
        for v in &self.variables {
            if let VarDomain::Continuous { lower, upper } = v.domain() {
                out.push_str(&format!(
                    " {} <= {} <= {}\n",
                    fmt_num(lower),
                    v.name(),
                    fmt_num(upper)
                ));
            }
        }

        out.push_str("General\n");
        for v in &self.variables {
            if v.domain().is_integer() {
                out.push_str(&format!(" {}\n", v.name()));
            }
        }

        out.push_str("Binary\n");
        for v in &self.variables {
            if v.domain().is_binary() {
                out.push_str(&format!(" {}\n", v.name()));
            }
        }

        out.push_str("End");
        out
    }

    /// Hands the model to `engine` and adapts its report into the uniform
    /// `SolveResult`. Never returns an error: every failure mode arrives as
    /// `solved == false` plus a status text.
    pub fn solve<E>(&self, engine: &E) -> SolveResult
    where
        E: SolverEngine + ?Sized,
    {
        SolveResult::from_report(engine.solve(self))
    }
}

/// Variable/constraint counts of one model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelStats {
    /// Number of continuous variables.
    pub num_continuous: usize,
    /// Number of integer variables.
    pub num_integer: usize,
    /// Number of binary variables.
    pub num_binary: usize,
    /// Number of constraint rows (after equality expansion).
    pub num_constraints: usize,
}

impl ModelStats {
    /// Total number of declared variables.
    #[inline]
    pub fn num_variables(&self) -> usize {
        self.num_continuous + self.num_integer + self.num_binary
    }
}

impl std::fmt::Display for ModelStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Model Statistics:")?;
        writeln!(f, "  Continuous Variables: {}", self.num_continuous)?;
        writeln!(f, "  Integer Variables: {}", self.num_integer)?;
        writeln!(f, "  Binary Variables: {}", self.num_binary)?;
        writeln!(f, "  Constraints: {}", self.num_constraints)
    }
}

/// Renders a coefficient row as ` +c v +c v ...`, or an empty string for an
/// empty row.
fn render_terms(terms: &LinearCombination) -> String {
    let mut out = String::new();
    for (name, coefficient) in terms.iter() {
        out.push(' ');
        out.push_str(&fmt_signed(coefficient));
        out.push(' ');
        out.push_str(name);
    }
    out
}

/// Formats a number the way the text format expects: integral values render
/// without a fractional part, anything else with six decimals.
fn fmt_num(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.6}", v)
    }
}

/// Formats a coefficient with its explicit sign: `+` when non-negative,
/// `-` when negative.
fn fmt_signed(v: f64) -> String {
    if v >= 0.0 {
        format!("+{}", fmt_num(v))
    } else {
        format!("-{}", fmt_num(-v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineReport;
    use crate::status::{PrimalStatus, SearchStatus};

    #[test]
    fn test_serialize_empty_model() {
        let model = ModelBuilder::new();
        assert_eq!(
            model.serialize(),
            "Maximize\n\nSubject to\nBounds\nGeneral\nBinary\nEnd"
        );
    }

    #[test]
    fn test_serialize_full_grammar() {
        let mut model = ModelBuilder::new();
        let a = model.add_binary_variable("a1");
        let q = model.add_integer_variable("j2s1");
        let x = model.add_continuous_variable("x1", 0.0, 3.0);

        let row: LinearCombination = [(a.name(), 1.0), (q.name(), 2.0)].into_iter().collect();
        model.add_constraint("need", row, CmpOp::Ge, 2.0);

        let objective: LinearCombination = [(a.name(), -10.0), (x.name(), 1.0)]
            .into_iter()
            .collect();
        model.add_to_objective(&objective);

        assert_eq!(
            model.serialize(),
            "Maximize\n \
             -10 a1 +1 x1\n\
             Subject to\n \
             need: +1 a1 +2 j2s1 >= 2\n\
             Bounds\n \
             0 <= x1 <= 3\n\
             General\n \
             j2s1\n\
             Binary\n \
             a1\n\
             End"
        );
    }

    #[test]
    fn test_strict_operators_serialize_literally() {
        let mut model = ModelBuilder::new();
        let a = model.add_binary_variable("a1");

        let lt: LinearCombination = [(a.name(), 1.0)].into_iter().collect();
        model.add_constraint("below", lt.clone(), CmpOp::Lt, 1.0);
        model.add_constraint("above", lt, CmpOp::Gt, 0.0);

        let text = model.serialize();
        assert!(text.contains(" below: +1 a1 < 1\n"));
        assert!(text.contains(" above: +1 a1 > 0\n"));
    }

    #[test]
    fn test_equality_expands_into_pair() {
        let mut model = ModelBuilder::new();
        let a = model.add_binary_variable("a1");

        let row: LinearCombination = [(a.name(), 1.0)].into_iter().collect();
        let handles = model.add_constraint("pin", row, CmpOp::Eq, 1.0);

        assert_eq!(handles.len(), 2);
        assert_eq!(handles[0].name(), "pin_upper");
        assert_eq!(handles[1].name(), "pin_lower");

        assert_eq!(model.constraints().len(), 2);
        assert_eq!(model.constraints()[0].op(), CmpOp::Le);
        assert_eq!(model.constraints()[1].op(), CmpOp::Ge);
        assert_eq!(model.constraints()[0].threshold(), 1.0);
        assert_eq!(model.constraints()[1].threshold(), 1.0);
    }

    #[test]
    fn test_objective_accumulates_across_calls() {
        let mut model = ModelBuilder::new();
        let a = model.add_binary_variable("a1");

        let first: LinearCombination = [(a.name(), 3.0)].into_iter().collect();
        let second: LinearCombination = [(a.name(), -10.0)].into_iter().collect();
        model.add_to_objective(&first);
        model.add_to_objective(&second);

        assert_eq!(model.objective().coefficient("a1"), Some(-7.0));
    }

    #[test]
    fn test_termless_constraint_still_renders() {
        // A requirement nothing can contribute to: a well-formed, provably
        // infeasible row.
        let mut model = ModelBuilder::new();
        model.add_constraint("skill9", LinearCombination::new(), CmpOp::Ge, 2.0);

        assert!(model.serialize().contains(" skill9: >= 2\n"));
    }

    #[test]
    #[should_panic(expected = "duplicate variable name")]
    fn test_duplicate_variable_name_panics_in_debug() {
        let mut model = ModelBuilder::new();
        model.add_binary_variable("a1");
        model.add_binary_variable("a1");
    }

    #[test]
    #[should_panic(expected = "undeclared variable")]
    fn test_undeclared_constraint_variable_panics_in_debug() {
        let mut model = ModelBuilder::new();
        let row: LinearCombination = [("ghost", 1.0)].into_iter().collect();
        model.add_constraint("row", row, CmpOp::Le, 1.0);
    }

    #[test]
    fn test_stats_counts_by_domain() {
        let mut model = ModelBuilder::new();
        model.add_binary_variable("a");
        model.add_binary_variable("b");
        model.add_integer_variable("q");
        model.add_continuous_variable("x", 0.0, 1.0);
        model.add_constraint("row", LinearCombination::new(), CmpOp::Le, 0.0);

        let stats = model.stats();
        assert_eq!(stats.num_binary, 2);
        assert_eq!(stats.num_integer, 1);
        assert_eq!(stats.num_continuous, 1);
        assert_eq!(stats.num_constraints, 1);
        assert_eq!(stats.num_variables(), 4);

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Binary Variables: 2"));
        assert!(rendered.contains("Constraints: 1"));
    }

    struct CannedEngine;

    impl SolverEngine for CannedEngine {
        fn name(&self) -> &str {
            "canned"
        }

        fn solve(&self, _model: &ModelBuilder) -> EngineReport {
            let mut variables = FxHashMap::default();
            variables.insert("a1".to_string(), 1.0);
            EngineReport {
                search: SearchStatus::Success,
                primal: Some(PrimalStatus::Optimal),
                objective: -10.0,
                variables,
                constraints: FxHashMap::default(),
            }
        }
    }

    #[test]
    fn test_solve_adapts_engine_report() {
        let mut model = ModelBuilder::new();
        model.add_binary_variable("a1");

        let result = model.solve(&CannedEngine);
        assert!(result.solved);
        assert_eq!(result.objective, -10.0);
        assert_eq!(result.variable("a1"), 1.0);
        assert_eq!(result.status_text, "optimal solution found");
    }
}
