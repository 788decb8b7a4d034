//! # Newton Step
//!
//! The single update rule every sequence is built from.
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

use crate::errors::{NewtonError, NewtonResult};

/// Take one Newton-Raphson step from `x`.
///
/// The next estimate is the x-intercept of the tangent line of `func` at `x`,
/// `x - func(x) / der(x)`.
///
/// ```
///     use newton_core::newton_step;
///     let f = |x: f64| x * x * x - 100.0;
///     let d = |x: f64| 3.0 * x * x;
///     let next = newton_step(f, d, -6.0).unwrap();
///     assert!((next + 3.074_074_074_074_074).abs() < 1e-12);
/// ```
///
/// Non-finite evaluations are not checked here, they flow into the returned
/// estimate.
///
/// # Errors
///
/// [`NewtonError::DivisionByZero`] if the derivative is exactly zero at `x`.
#[inline(always)]
pub fn newton_step<T>(func: impl Fn(T) -> T, der: impl Fn(T) -> T, x: T) -> NewtonResult<T>
where
    T: num_traits::Float,
{
    let y = func(x);
    let m = der(x);
    if m.is_zero() {
        return Err(NewtonError::DivisionByZero {
            x: x.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(x - y / m)
}
