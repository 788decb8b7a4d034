//! # Configuration
//!
//! Data half of a root search: where to start and how many steps to take.
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

use crate::errors::{NewtonError, NewtonResult};

/// Number of steps taken when none is specified.
pub const DEFAULT_MAX_STEPS: usize = 10;

fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}

/// Starting point and step budget of a Newton-Raphson search.
///
/// The function and its derivative are not part of the configuration, they are
/// passed alongside it so that any closure may be used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewtonConfig<T> {
    /// Initial guess for the root, this is never emitted as an estimate.
    pub initial_guess: T,

    /// Exact number of update steps to perform.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

impl<T> NewtonConfig<T>
where
    T: num_traits::Float,
{
    /// New configuration using [`DEFAULT_MAX_STEPS`].
    #[must_use]
    pub fn new(initial_guess: T) -> Self {
        Self {
            initial_guess,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Replace the number of steps.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Check that the initial guess lies inside the domain of the function and its
    /// derivative.
    ///
    /// A configuration with zero steps never evaluates anything, so it is always
    /// valid.
    ///
    /// # Errors
    ///
    /// [`NewtonError::InvalidConfiguration`] if the initial guess is not finite, or
    /// if either the function or the derivative is not finite at the initial guess.
    pub fn validate(&self, func: impl Fn(T) -> T, der: impl Fn(T) -> T) -> NewtonResult<()> {
        if self.max_steps == 0 {
            return Ok(());
        }
        let x = self.initial_guess;
        if !x.is_finite() {
            return Err(NewtonError::InvalidConfiguration(format!(
                "Initial guess must be finite, found {}.",
                x.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if !func(x).is_finite() {
            return Err(NewtonError::InvalidConfiguration(
                "Function is not finite at the initial guess.".into(),
            ));
        }
        if !der(x).is_finite() {
            return Err(NewtonError::InvalidConfiguration(
                "Derivative is not finite at the initial guess.".into(),
            ));
        }
        Ok(())
    }
}
