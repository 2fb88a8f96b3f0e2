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

/// Objective weights for the loadout model.
///
/// The objective rewards spare sockets and penalizes item count and jewel
/// usage. The defaults are chosen so that item-count minimization dominates
/// socket maximization, which dominates jewel minimization:
///
/// | Weight | Default | Applies to |
/// | :--- | :--- | :--- |
/// | `slot_weight` | 1 | × socket count, per worn armor piece |
/// | `equipment_weight` | 10 | penalty per worn armor piece or charm |
/// | `jewel_weight` | 5 | × socket rank, penalty per placed jewel |
///
/// These are tunable constants, not structural constraints: changing them
/// reshapes tie-breaking, never feasibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveWeights {
    pub slot_weight: f64,
    pub equipment_weight: f64,
    pub jewel_weight: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            slot_weight: 1.0,
            equipment_weight: 10.0,
            jewel_weight: 5.0,
        }
    }
}

/// Configuration of the loadout model generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Objective weights (see `ObjectiveWeights`).
    pub weights: ObjectiveWeights,
    /// The big-M constant of the set-bonus activation linearization. Must
    /// dominate any set's piece count; piece counts are single digits, so the
    /// default leaves generous headroom.
    pub big_m: f64,
    /// When `true`, jewels placed at a socket rank may not exceed the sockets
    /// of that rank offered by worn armor. When `false` (the default), the
    /// model does not enforce socket capacity and jewel quantities are
    /// bounded only by skill-requirement pressure and the objective penalty.
    pub enforce_socket_capacity: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            weights: ObjectiveWeights::default(),
            big_m: 10_000.0,
            enforce_socket_capacity: false,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the objective weights.
    #[inline]
    pub fn with_weights(mut self, weights: ObjectiveWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replaces the big-M constant.
    #[inline]
    pub fn with_big_m(mut self, big_m: f64) -> Self {
        self.big_m = big_m;
        self
    }

    /// Toggles socket-capacity enforcement.
    #[inline]
    pub fn with_socket_capacity(mut self, enforce: bool) -> Self {
        self.enforce_socket_capacity = enforce;
        self
    }
}
