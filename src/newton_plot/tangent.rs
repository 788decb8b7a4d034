//! # Tangent Lines
//!
//! Linear approximation of a function at a point, as drawn for each Newton step.
//!
// BSD 3-Clause License
//
// Copyright (c) 2026, Dar Dahlen
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use serde::{Deserialize, Serialize};

/// Tangent line of a function at a single point.
///
/// `y(x) = slope * (x - point) + value`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentLine<T> {
    /// Point at which the tangent touches the function.
    pub point: T,

    /// Function evaluated at the point.
    pub value: T,

    /// Derivative evaluated at the point.
    pub slope: T,
}

impl<T> TangentLine<T>
where
    T: num_traits::Float,
{
    /// Construct the tangent line of `func` at `x`.
    ///
    /// ```
    ///     use newton_plot::TangentLine;
    ///     let line = TangentLine::at(|x: f64| x * x, |x| 2.0 * x, 3.0);
    ///     assert_eq!(line.eval(4.0), 15.0);
    ///     assert_eq!(line.x_intercept(), Some(1.5));
    /// ```
    pub fn at(func: impl Fn(T) -> T, der: impl Fn(T) -> T, x: T) -> Self {
        Self {
            point: x,
            value: func(x),
            slope: der(x),
        }
    }

    /// Evaluate the line at `x`.
    #[must_use]
    pub fn eval(&self, x: T) -> T {
        self.slope * (x - self.point) + self.value
    }

    /// Where the line crosses zero, this is the next Newton estimate.
    ///
    /// A horizontal line has no intercept.
    #[must_use]
    pub fn x_intercept(&self) -> Option<T> {
        if self.slope.is_zero() {
            None
        } else {
            Some(self.point - self.value / self.slope)
        }
    }

    /// Sample `n` evenly spaced points of the line between `lower` and `upper`
    /// inclusive, as `[x, y]` pairs.
    #[must_use]
    pub fn sample(&self, lower: T, upper: T, n: usize) -> Vec<[T; 2]> {
        crate::linspace(lower, upper, n)
            .into_iter()
            .map(|x| [x, self.eval(x)])
            .collect()
    }
}
