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

//! The one-call facade: generate, solve, decode.
//!
//! One `LoadoutSolver` can serve any number of queries. Every call builds a
//! fresh model (no state survives between solves); the catalog index it
//! reads from is shared and read-only. A service wrapper running requests
//! concurrently needs nothing beyond one solver value per thread — or one
//! shared solver, since solving takes `&self`.

use crate::config::GeneratorConfig;
use crate::decoder::{DecodeError, SolutionDecoder};
use crate::generator::LoadoutModelGenerator;
use crate::kind::SkillRequirement;
use crate::report::LoadoutReport;
use greave_catalog::index::CatalogIndex;
use greave_mip::engine::SolverEngine;
use greave_mip::result::SolveResult;

/// The outcome of one loadout query: the raw solve result plus, when the
/// model was solved, the decoded report.
#[derive(Debug, Clone)]
pub struct LoadoutOutcome {
    /// The uniform solve result; check `result.solved` (or `solved()`)
    /// before trusting the objective.
    pub result: SolveResult,
    /// The decoded loadout, present iff the model was solved.
    pub report: Option<LoadoutReport>,
}

impl LoadoutOutcome {
    /// Returns `true` when the engine found a usable solution.
    #[inline]
    pub fn solved(&self) -> bool {
        self.result.solved
    }
}

/// Runs loadout queries end to end against one catalog index.
#[derive(Debug, Clone, Copy)]
pub struct LoadoutSolver<'a> {
    index: &'a CatalogIndex<'a>,
    config: GeneratorConfig,
}

impl<'a> LoadoutSolver<'a> {
    /// Creates a solver with the default configuration.
    #[inline]
    pub fn new(index: &'a CatalogIndex<'a>) -> Self {
        Self {
            index,
            config: GeneratorConfig::default(),
        }
    }

    /// Replaces the generator configuration.
    #[inline]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the generator configuration.
    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Encodes `requirements`, hands the model to `engine`, and decodes the
    /// answer. Infeasibility and engine failures are not errors: they arrive
    /// as `solved == false` with no report. `Err` is reserved for decoding
    /// against a catalog that no longer contains a chosen item.
    pub fn solve<E>(
        &self,
        requirements: &[SkillRequirement],
        engine: &E,
    ) -> Result<LoadoutOutcome, DecodeError>
    where
        E: SolverEngine + ?Sized,
    {
        let loadout =
            LoadoutModelGenerator::new(self.index, self.config).generate(requirements);
        let result = loadout.solve(engine);

        let report = if result.solved {
            Some(SolutionDecoder::new(self.index).decode(&loadout, &result)?)
        } else {
            None
        };

        Ok(LoadoutOutcome { result, report })
    }
}
