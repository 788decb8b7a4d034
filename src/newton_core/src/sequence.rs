//! # Newton-Raphson Sequence
//!
//! Lazy, finite and restartable sequence of root estimates.
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

use std::fmt::Debug;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::config::NewtonConfig;
use crate::errors::NewtonResult;
use crate::step::newton_step;

/// Start a Newton-Raphson sequence.
///
/// Returns an iterator which yields exactly `max_steps` estimates, the initial guess
/// itself is never yielded. No convergence check is performed, see
/// [`Evaluated::until_converged`] for early termination.
///
/// ```
///     use newton_core::iterate;
///     let f = |x: f64| x * x * x - 100.0;
///     let d = |x: f64| 3.0 * x * x;
///     let estimates: Vec<f64> = iterate(f, d, -6.0, 10)
///         .unwrap()
///         .collect::<Result<_, _>>()
///         .unwrap();
///     assert_eq!(estimates.len(), 10);
///     assert!((estimates[9] - 100_f64.cbrt()).abs() < 1e-3);
/// ```
///
/// # Arguments
/// * `func` - Function for which the root is desired.
/// * `der` - Derivative of the function.
/// * `start` - Initial guess for the root.
/// * `max_steps` - Number of steps to take.
///
/// # Errors
///
/// [`crate::NewtonError::InvalidConfiguration`] if `max_steps` is non-zero and the
/// start is not finite, or the function or derivative is not finite at the start.
pub fn iterate<T, F, D>(
    func: F,
    der: D,
    start: T,
    max_steps: usize,
) -> NewtonResult<NewtonIter<T, F, D>>
where
    T: num_traits::Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    iterate_with(func, der, &NewtonConfig::new(start).with_max_steps(max_steps))
}

/// Start a Newton-Raphson sequence from a [`NewtonConfig`].
///
/// # Errors
///
/// See [`NewtonConfig::validate`].
pub fn iterate_with<T, F, D>(
    func: F,
    der: D,
    config: &NewtonConfig<T>,
) -> NewtonResult<NewtonIter<T, F, D>>
where
    T: num_traits::Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    config.validate(&func, &der)?;
    Ok(NewtonIter {
        func,
        der,
        start: config.initial_guess,
        x: config.initial_guess,
        max_steps: config.max_steps,
        taken: 0,
        failed: false,
    })
}

/// Collect a full Newton-Raphson sequence.
///
/// # Errors
///
/// Any error from [`iterate`], or the first failed step.
pub fn newton_sequence<T, F, D>(func: F, der: D, start: T, max_steps: usize) -> NewtonResult<Vec<T>>
where
    T: num_traits::Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    iterate(func, der, start, max_steps)?.collect()
}

/// Iterator over successive Newton-Raphson estimates.
///
/// Each item is the next estimate, or the error which stopped the sequence. After
/// an error has been yielded the iterator is exhausted.
#[derive(Clone)]
pub struct NewtonIter<T, F, D> {
    func: F,
    der: D,
    start: T,
    x: T,
    max_steps: usize,
    taken: usize,
    failed: bool,
}

impl<T, F, D> NewtonIter<T, F, D>
where
    T: num_traits::Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    /// Current estimate, this is the initial guess before any step is taken.
    #[must_use]
    pub fn estimate(&self) -> T {
        self.x
    }

    /// Number of successful steps taken so far.
    #[must_use]
    pub fn steps_taken(&self) -> usize {
        self.taken
    }

    /// Number of steps left before the sequence ends.
    #[must_use]
    pub fn remaining(&self) -> usize {
        if self.failed {
            0
        } else {
            self.max_steps - self.taken
        }
    }

    /// Rewind to the initial guess, the same sequence is produced again.
    pub fn restart(&mut self) {
        self.x = self.start;
        self.taken = 0;
        self.failed = false;
    }

    /// Pair every estimate with the function evaluated at that estimate.
    #[must_use]
    pub fn with_values(self) -> Evaluated<T, F, D> {
        Evaluated { inner: self }
    }
}

impl<T, F, D> Iterator for NewtonIter<T, F, D>
where
    T: num_traits::Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    type Item = NewtonResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        match newton_step(&self.func, &self.der, self.x) {
            Ok(next) => {
                self.x = next;
                self.taken += 1;
                Some(Ok(next))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

impl<T, F, D> FusedIterator for NewtonIter<T, F, D>
where
    T: num_traits::Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
}

impl<T: Debug, F, D> Debug for NewtonIter<T, F, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewtonIter")
            .field("start", &self.start)
            .field("x", &self.x)
            .field("max_steps", &self.max_steps)
            .field("taken", &self.taken)
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}

/// A single estimate along with the function evaluated there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate<T> {
    /// Step which produced this estimate, starting at 1.
    pub step: usize,

    /// The estimate.
    pub estimate: T,

    /// Function evaluated at the estimate.
    pub value: T,
}

/// Iterator over [`Estimate`], see [`NewtonIter::with_values`].
#[derive(Clone)]
pub struct Evaluated<T, F, D> {
    inner: NewtonIter<T, F, D>,
}

impl<T, F, D> Iterator for Evaluated<T, F, D>
where
    T: num_traits::Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    type Item = NewtonResult<Estimate<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let estimate = match self.inner.next()? {
            Ok(x) => x,
            Err(err) => return Some(Err(err)),
        };
        Some(Ok(Estimate {
            step: self.inner.taken,
            estimate,
            value: (self.inner.func)(estimate),
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, F, D> FusedIterator for Evaluated<T, F, D>
where
    T: num_traits::Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
}

impl<T: Debug, F, D> Debug for Evaluated<T, F, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluated")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NewtonError;
    use itertools::Itertools;
    use test_case::test_case;

    fn cubic(x: f64) -> f64 {
        x.powi(3) - 100.0
    }

    fn cubic_der(x: f64) -> f64 {
        3.0 * x.powi(2)
    }

    #[test]
    fn test_convergence() {
        let estimates = newton_sequence(cubic, cubic_der, -6.0, 10).unwrap();
        assert_eq!(estimates.len(), 10);
        let last = estimates[9];
        assert!((last - 4.6416).abs() < 1e-3);
        assert!(cubic(last).abs() < 1e-2);
    }

    #[test]
    fn test_single_step() {
        let estimates = newton_sequence(cubic, cubic_der, -6.0, 1).unwrap();
        assert_eq!(estimates.len(), 1);
        assert!((estimates[0] - -3.074_074_074_074_074).abs() < 1e-9);
    }

    #[test_case(-6.0)]
    #[test_case(0.0)]
    #[test_case(5.0)]
    #[test_case(1e8)]
    fn test_linear_one_step(start: f64) {
        let estimates = newton_sequence(|x| x - 5.0, |_| 1.0, start, 1).unwrap();
        assert_eq!(estimates, vec![5.0]);
    }

    #[test_case(-6.0)]
    #[test_case(0.0)]
    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    fn test_zero_steps(start: f64) {
        let mut iter = iterate(cubic, cubic_der, start, 0).unwrap();
        assert!(iter.next().is_none());
    }

    #[test_case(1)]
    #[test_case(4)]
    #[test_case(25)]
    fn test_length(max_steps: usize) {
        let iter = iterate(cubic, cubic_der, -6.0, max_steps).unwrap();
        assert_eq!(iter.size_hint(), (0, Some(max_steps)));
        assert_eq!(iter.count(), max_steps);
    }

    #[test]
    fn test_zero_derivative_first_step() {
        let mut iter = iterate(cubic, cubic_der, 0.0, 10).unwrap();
        assert_eq!(iter.next(), Some(Err(NewtonError::DivisionByZero { x: 0.0 })));
        assert!(iter.next().is_none());
        assert_eq!(iter.remaining(), 0);
        assert_eq!(iter.steps_taken(), 0);

        assert!(matches!(
            newton_sequence(cubic, cubic_der, 0.0, 10),
            Err(NewtonError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_zero_derivative_later_step() {
        // x^2 + 1 has no real root, starting from 1 lands exactly on 0.
        let f = |x: f64| x * x + 1.0;
        let d = |x: f64| 2.0 * x;
        let items: Vec<_> = iterate(f, d, 1.0, 5).unwrap().collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Ok(0.0));
        assert!(items[1].is_err());
    }

    #[test]
    fn test_invalid_configuration() {
        let f = |x: f64| x.sqrt() - 2.0;
        let d = |x: f64| 0.5 / x.sqrt();
        assert!(matches!(
            iterate(f, d, -1.0, 5),
            Err(NewtonError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            iterate(cubic, cubic_der, f64::NAN, 5),
            Err(NewtonError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_determinism() {
        let a = newton_sequence(cubic, cubic_der, -6.0, 10).unwrap();
        let b = newton_sequence(cubic, cubic_der, -6.0, 10).unwrap();
        assert_eq!(a, b);

        let mut iter = iterate(cubic, cubic_der, -6.0, 10).unwrap();
        let fresh = iter.clone();
        let first: Vec<_> = iter.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(iter.estimate(), first[9]);
        iter.restart();
        assert_eq!(iter.estimate(), -6.0);
        let second: Vec<_> = iter.collect::<Result<_, _>>().unwrap();
        let third: Vec<_> = fresh.collect::<Result<_, _>>().unwrap();
        assert_eq!(first, a);
        assert_eq!(second, a);
        assert_eq!(third, a);
    }

    #[test]
    fn test_recurrence() {
        let estimates = newton_sequence(cubic, cubic_der, -6.0, 10).unwrap();
        let first = -6.0 - cubic(-6.0) / cubic_der(-6.0);
        assert_eq!(estimates[0], first);
        for (a, b) in estimates.iter().tuple_windows() {
            assert_eq!(*b, a - cubic(*a) / cubic_der(*a));
        }
    }

    #[test]
    fn test_divergence_propagates() {
        // Tiny slope near the flat point throws the estimate to a huge value, which
        // overflows on the following step.
        let estimates = newton_sequence(cubic, cubic_der, 1e-100, 3).unwrap();
        assert_eq!(estimates.len(), 3);
        assert!(estimates.iter().any(|x| !x.is_finite()));
    }

    #[test]
    fn test_with_values() {
        let items: Vec<_> = iterate(cubic, cubic_der, -6.0, 3)
            .unwrap()
            .with_values()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(items.len(), 3);
        for (idx, item) in items.iter().enumerate() {
            assert_eq!(item.step, idx + 1);
            assert_eq!(item.value, cubic(item.estimate));
        }
    }

    #[test]
    fn test_debug() {
        let mut iter = iterate(cubic, cubic_der, -6.0, 3).unwrap();
        let _ = iter.next();
        let text = format!("{iter:?}");
        assert!(text.starts_with("NewtonIter {"));
        assert!(text.contains("start: -6.0"));
        assert!(text.contains("taken: 1"));

        let text = format!("{:?}", iter.with_values());
        assert!(text.starts_with("Evaluated { inner: NewtonIter {"));
        assert!(text.contains("max_steps: 3"));
    }

    #[test]
    fn test_estimate_serde() {
        let item = Estimate {
            step: 2,
            estimate: 1.5_f64,
            value: -96.625,
        };
        let text = serde_json::to_string(&item).unwrap();
        assert_eq!(text, r#"{"step":2,"estimate":1.5,"value":-96.625}"#);
        let back: Estimate<f64> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, item);
    }
}
