//! # Stopping
//!
//! Optional early termination layered on top of a fixed step sequence.
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

use crate::errors::NewtonResult;
use crate::sequence::{Estimate, Evaluated};

impl<T, F, D> Evaluated<T, F, D>
where
    T: num_traits::Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    /// Stop after the first estimate where `|func(x)| < atol`.
    ///
    /// The converged estimate is still yielded. If no estimate satisfies the
    /// tolerance the full sequence is produced, so the last item must be checked
    /// by the caller to know whether convergence was reached.
    ///
    /// ```
    ///     use newton_core::iterate;
    ///     let f = |x: f64| x * x - 2.0;
    ///     let d = |x: f64| 2.0 * x;
    ///     let items: Vec<_> = iterate(f, d, 1.0, 50)
    ///         .unwrap()
    ///         .with_values()
    ///         .until_converged(1e-12)
    ///         .collect::<Result<_, _>>()
    ///         .unwrap();
    ///     assert!(items.len() < 50);
    ///     let last = items.last().unwrap();
    ///     assert!((last.estimate - 2_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn until_converged(self, atol: T) -> impl Iterator<Item = NewtonResult<Estimate<T>>> {
        self.take_while_inclusive(move |item| {
            !matches!(item, Ok(Estimate { value, .. }) if value.abs() < atol)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::NewtonError;
    use crate::sequence::iterate;

    #[test]
    fn test_stops_at_root() {
        let items: Vec<_> = iterate(|x: f64| x - 5.0, |_| 1.0, -6.0, 10)
            .unwrap()
            .with_values()
            .until_converged(1e-12)
            .collect();
        assert_eq!(items.len(), 1);
        let item = items[0].clone().unwrap();
        assert_eq!(item.step, 1);
        assert_eq!(item.estimate, 5.0);
    }

    #[test]
    fn test_never_converges() {
        // x^2 + 2 has no real root, the full budget is used.
        let items: Vec<_> = iterate(|x: f64| x * x + 2.0, |x| 2.0 * x, 3.0, 8)
            .unwrap()
            .with_values()
            .until_converged(1e-6)
            .collect();
        assert_eq!(items.len(), 8);
        assert!(items.iter().all(Result::is_ok));
    }

    #[test]
    fn test_error_passes_through() {
        let items: Vec<_> = iterate(|x: f64| x.powi(3) - 100.0, |x| 3.0 * x * x, 0.0, 8)
            .unwrap()
            .with_values()
            .until_converged(1e-6)
            .collect();
        assert_eq!(items, vec![Err(NewtonError::DivisionByZero { x: 0.0 })]);
    }

    #[test]
    fn test_cubic_converges_early() {
        let f = |x: f64| x.powi(3) - 100.0;
        let d = |x: f64| 3.0 * x * x;
        let items: Vec<_> = iterate(f, d, -6.0, 100)
            .unwrap()
            .with_values()
            .until_converged(1e-9)
            .collect::<Result<_, _>>()
            .unwrap();
        assert!(items.len() < 100);
        assert!(items.last().unwrap().value.abs() < 1e-9);
    }
}
