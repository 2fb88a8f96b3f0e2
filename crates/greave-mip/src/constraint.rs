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

use crate::linear::LinearCombination;

/// The relational operator of a constraint row.
///
/// `Lt` and `Gt` serialize literally as `<` and `>`, distinct from `Le`/`Ge`;
/// what a strict operator means is up to the consuming engine (the LP text
/// format traditionally treats them as synonyms of their non-strict forms).
/// `Eq` never reaches the serialized model: the builder expands it into a
/// `Le`/`Ge` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Le,
    Ge,
    Lt,
    Gt,
    Eq,
}

impl CmpOp {
    /// The operator's spelling in the serialized model.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            CmpOp::Le => "<=",
            CmpOp::Ge => ">=",
            CmpOp::Lt => "<",
            CmpOp::Gt => ">",
            CmpOp::Eq => "=",
        }
    }
}

impl std::fmt::Display for CmpOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One named constraint row: `terms op threshold`.
#[derive(Debug, Clone)]
pub struct Constraint {
    name: String,
    terms: LinearCombination,
    op: CmpOp,
    threshold: f64,
}

impl Constraint {
    #[inline]
    pub(crate) fn new(name: String, terms: LinearCombination, op: CmpOp, threshold: f64) -> Self {
        Self {
            name,
            terms,
            op,
            threshold,
        }
    }

    /// Returns the constraint's name as rendered in the serialized model.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the coefficient row.
    #[inline]
    pub fn terms(&self) -> &LinearCombination {
        &self.terms
    }

    /// Returns the relational operator.
    #[inline]
    pub fn op(&self) -> CmpOp {
        self.op
    }

    /// Returns the right-hand-side threshold.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// A lightweight handle to an appended constraint, carrying its final name
/// (including any `_upper`/`_lower` suffix from equality expansion).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintHandle {
    name: String,
}

impl ConstraintHandle {
    #[inline]
    pub(crate) fn new(name: String) -> Self {
        Self { name }
    }

    /// Returns the name of the constraint this handle refers to.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}
