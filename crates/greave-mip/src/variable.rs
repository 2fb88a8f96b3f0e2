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

/// The domain of a model variable.
///
/// * `Continuous` variables carry explicit lower and upper bounds and are
///   rendered in the `Bounds` section of the serialized model.
/// * `Integer` variables are non-negative with no declared upper bound, by
///   convention of the text format (`General` section).
/// * `Binary` variables take values in {0, 1} (`Binary` section).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VarDomain {
    Continuous { lower: f64, upper: f64 },
    Integer,
    Binary,
}

impl VarDomain {
    /// Returns `true` for the `Continuous` domain.
    #[inline]
    pub fn is_continuous(&self) -> bool {
        matches!(self, VarDomain::Continuous { .. })
    }

    /// Returns `true` for the `Integer` domain.
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, VarDomain::Integer)
    }

    /// Returns `true` for the `Binary` domain.
    #[inline]
    pub fn is_binary(&self) -> bool {
        matches!(self, VarDomain::Binary)
    }
}

/// A declared model variable: a globally-unique name plus its domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    domain: VarDomain,
}

impl Variable {
    /// Creates a new variable. Name uniqueness is enforced by the
    /// `ModelBuilder`, not here.
    #[inline]
    pub(crate) fn new(name: String, domain: VarDomain) -> Self {
        Self { name, domain }
    }

    /// Returns the variable's name as it appears in the serialized model.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the variable's domain.
    #[inline]
    pub fn domain(&self) -> VarDomain {
        self.domain
    }
}

/// A lightweight handle to a declared variable, carrying its name.
///
/// Handles are what the `ModelBuilder`'s `add_*_variable` methods return;
/// callers use them to spell coefficient rows without re-deriving name
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VarHandle {
    name: String,
}

impl VarHandle {
    #[inline]
    pub(crate) fn new(name: String) -> Self {
        Self { name }
    }

    /// Returns the name of the variable this handle refers to.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for VarHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
