//! # Batch
//!
//! Independent root searches from many starting points, run in parallel.
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

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::errors::NewtonResult;
use crate::sequence::newton_sequence;

/// Run one Newton-Raphson sequence per starting point.
///
/// Every search owns its own estimate, the function and derivative are shared
/// between threads. Results are returned in the same order as `starts`, and a
/// failure in one search does not affect the others.
///
/// ```
///     use newton_core::iterate_many;
///     let f = |x: f64| x * x - 4.0;
///     let d = |x: f64| 2.0 * x;
///     let results = iterate_many(f, d, &[-3.0, 0.0, 3.0], 20);
///     assert!((results[0].as_ref().unwrap()[19] + 2.0).abs() < 1e-12);
///     assert!(results[1].is_err());
///     assert!((results[2].as_ref().unwrap()[19] - 2.0).abs() < 1e-12);
/// ```
pub fn iterate_many<T, F, D>(
    func: F,
    der: D,
    starts: &[T],
    max_steps: usize,
) -> Vec<NewtonResult<Vec<T>>>
where
    T: num_traits::Float + Send + Sync,
    F: Fn(T) -> T + Sync,
    D: Fn(T) -> T + Sync,
{
    starts
        .par_iter()
        .map(|&start| newton_sequence(&func, &der, start, max_steps))
        .collect()
}
