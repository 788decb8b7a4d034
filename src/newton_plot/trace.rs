//! # Convergence Trace
//!
//! Everything needed to draw a Newton-Raphson run: one tangent line per step, and
//! the window the estimates live in.
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

use itertools::Itertools;
use newton_core::{NewtonConfig, NewtonResult, iterate_with};
use serde::{Deserialize, Serialize};

use crate::tangent::TangentLine;

/// A single Newton step as drawn on a plot.
///
/// The tangent is taken at `from`, and crosses zero at `next`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame<T> {
    /// Step which produced `next`, starting at 1.
    pub step: usize,

    /// Estimate the tangent was taken at.
    pub from: T,

    /// Tangent line at `from`.
    pub tangent: TangentLine<T>,

    /// Estimate produced by this step.
    pub next: T,
}

/// Full record of a Newton-Raphson run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceTrace<T> {
    /// Initial guess.
    pub start: T,

    /// One frame per step.
    pub frames: Vec<Frame<T>>,
}

impl<T> ConvergenceTrace<T>
where
    T: num_traits::Float,
{
    /// Run Newton-Raphson and record every step.
    ///
    /// ```
    ///     use newton_core::NewtonConfig;
    ///     use newton_plot::ConvergenceTrace;
    ///     let f = |x: f64| x.powi(3) - 100.0;
    ///     let d = |x: f64| 3.0 * x.powi(2);
    ///     let trace = ConvergenceTrace::record(f, d, &NewtonConfig::new(-6.0)).unwrap();
    ///     assert_eq!(trace.frames.len(), 10);
    ///     assert_eq!(trace.frames[0].from, -6.0);
    ///     assert!((trace.final_estimate().unwrap() - 4.6416).abs() < 1e-3);
    /// ```
    ///
    /// # Errors
    ///
    /// Any [`newton_core::NewtonError`] raised while validating or stepping, no
    /// partial trace is returned.
    pub fn record(
        func: impl Fn(T) -> T,
        der: impl Fn(T) -> T,
        config: &NewtonConfig<T>,
    ) -> NewtonResult<Self> {
        let estimates = iterate_with(&func, &der, config)?.collect::<NewtonResult<Vec<T>>>()?;
        let start = config.initial_guess;

        let frames = std::iter::once(start)
            .chain(estimates)
            .tuple_windows()
            .enumerate()
            .map(|(idx, (from, next))| Frame {
                step: idx + 1,
                from,
                tangent: TangentLine::at(&func, &der, from),
                next,
            })
            .collect();

        Ok(Self { start, frames })
    }

    /// Estimates in the order they were produced, excluding the initial guess.
    #[must_use]
    pub fn estimates(&self) -> Vec<T> {
        self.frames.iter().map(|frame| frame.next).collect()
    }

    /// Last estimate, if any step was taken.
    #[must_use]
    pub fn final_estimate(&self) -> Option<T> {
        self.frames.last().map(|frame| frame.next)
    }

    /// Plot window `(lower, upper)` containing the initial guess and every finite
    /// estimate.
    ///
    /// The window is widened on both sides by `padding` times its width, a window of
    /// zero width is widened by `padding` instead.
    /// Returns `None` if there are no finite points.
    #[must_use]
    pub fn bounds(&self, padding: T) -> Option<(T, T)> {
        let (lower, upper) = std::iter::once(self.start)
            .chain(self.frames.iter().map(|frame| frame.next))
            .filter(|x| x.is_finite())
            .minmax()
            .into_option()?;

        let width = upper - lower;
        let pad = if width.is_zero() {
            padding
        } else {
            width * padding
        };
        Some((lower - pad, upper + pad))
    }

    /// Sample `n` points of `func` over [`ConvergenceTrace::bounds`], as `[x, y]`
    /// pairs.
    #[must_use]
    pub fn curve(&self, func: impl Fn(T) -> T, padding: T, n: usize) -> Vec<[T; 2]> {
        let Some((lower, upper)) = self.bounds(padding) else {
            return Vec::new();
        };
        crate::linspace(lower, upper, n)
            .into_iter()
            .map(|x| [x, func(x)])
            .collect()
    }
}
