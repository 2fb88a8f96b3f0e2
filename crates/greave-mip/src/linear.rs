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

use rustc_hash::FxHashMap;

/// A linear combination of model variables: an ordered list of
/// `(variable name, coefficient)` terms.
///
/// Terms keep their **insertion order** — the serialized model renders rows
/// exactly in the order the coefficients were spelled, which keeps output
/// reproducible run-to-run. Adding a term for a name that is already present
/// merges **additively** into the existing coefficient instead of
/// overwriting; a variable absent from the combination has an implicit
/// coefficient of 0.
#[derive(Debug, Clone, Default)]
pub struct LinearCombination {
    terms: Vec<(String, f64)>,
    index: FxHashMap<String, usize>,
}

impl LinearCombination {
    /// Creates an empty linear combination.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no terms have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Adds `coefficient` for `name`, merging additively with any existing
    /// coefficient for the same name.
    pub fn add_term(&mut self, name: impl Into<String>, coefficient: f64) -> &mut Self {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => self.terms[slot].1 += coefficient,
            None => {
                self.index.insert(name.clone(), self.terms.len());
                self.terms.push((name, coefficient));
            }
        }
        self
    }

    /// Merges every term of `other` into `self`, additively.
    pub fn merge(&mut self, other: &LinearCombination) -> &mut Self {
        for (name, coefficient) in &other.terms {
            self.add_term(name.clone(), *coefficient);
        }
        self
    }

    /// Returns the coefficient for `name`, or `None` if absent
    /// (absent ≡ coefficient 0).
    #[inline]
    pub fn coefficient(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&slot| self.terms[slot].1)
    }

    /// Returns the terms in insertion order.
    #[inline]
    pub fn terms(&self) -> &[(String, f64)] {
        &self.terms
    }

    /// Iterates `(name, coefficient)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.terms.iter().map(|(n, c)| (n.as_str(), *c))
    }

    /// Evaluates the combination against an assignment of variable values.
    /// Variables missing from `values` contribute 0.
    pub fn evaluate(&self, values: &FxHashMap<String, f64>) -> f64 {
        self.terms
            .iter()
            .map(|(name, coefficient)| coefficient * values.get(name).copied().unwrap_or(0.0))
            .sum()
    }
}

impl<N: Into<String>> FromIterator<(N, f64)> for LinearCombination {
    fn from_iter<I: IntoIterator<Item = (N, f64)>>(iter: I) -> Self {
        let mut lc = LinearCombination::new();
        for (name, coefficient) in iter {
            lc.add_term(name, coefficient);
        }
        lc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut lc = LinearCombination::new();
        lc.add_term("z", 1.0).add_term("a", 2.0).add_term("m", 3.0);

        let names: Vec<&str> = lc.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_repeated_names_merge_additively() {
        let mut lc = LinearCombination::new();
        lc.add_term("x", 2.0);
        lc.add_term("x", 3.0);

        assert_eq!(lc.len(), 1);
        assert_eq!(lc.coefficient("x"), Some(5.0));
    }

    #[test]
    fn test_merge_combines_two_combinations() {
        let a: LinearCombination = [("x", 1.0), ("y", 2.0)].into_iter().collect();
        let b: LinearCombination = [("y", -2.0), ("z", 4.0)].into_iter().collect();

        let mut merged = a.clone();
        merged.merge(&b);

        assert_eq!(merged.coefficient("x"), Some(1.0));
        assert_eq!(merged.coefficient("y"), Some(0.0));
        assert_eq!(merged.coefficient("z"), Some(4.0));
        // y keeps its original slot even after cancelling to zero
        let names: Vec<&str> = merged.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_evaluate_treats_missing_values_as_zero() {
        let lc: LinearCombination = [("x", 2.0), ("y", 10.0)].into_iter().collect();

        let mut values = FxHashMap::default();
        values.insert("x".to_string(), 3.0);

        assert_eq!(lc.evaluate(&values), 6.0);
    }
}
