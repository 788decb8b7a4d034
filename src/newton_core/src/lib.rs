//! # Newton Core
//! Newton-Raphson root finding for a single real variable.
//!
//! Given a function, its derivative, and an initial guess, each step replaces the
//! current estimate with the x-intercept of the tangent line at that estimate:
//!
//! `x_next = x - f(x) / f'(x)`
//!
//! The estimates are produced as a lazy iterator which takes a fixed number of
//! steps. Nothing is plotted or stored here, consumers collect the estimates they
//! need.
//!
//! ```
//!     use newton_core::prelude::*;
//!     let f = |x: f64| x.powi(3) - 100.0;
//!     let d = |x: f64| 3.0 * x.powi(2);
//!     let estimates = newton_sequence(f, d, -6.0, 10).unwrap();
//!     assert!((estimates[9] - 4.6416).abs() < 1e-3);
//! ```
//!

mod batch;
mod config;
mod errors;
mod sequence;
mod step;
mod stopping;

pub use self::batch::iterate_many;
pub use self::config::{DEFAULT_MAX_STEPS, NewtonConfig};
pub use self::errors::{NewtonError, NewtonResult};
pub use self::sequence::{Estimate, Evaluated, NewtonIter, iterate, iterate_with, newton_sequence};
pub use self::step::newton_step;

/// Common useful imports
pub mod prelude {
    pub use crate::{
        Estimate, NewtonConfig, NewtonError, NewtonResult, iterate, iterate_many, iterate_with,
        newton_sequence, newton_step,
    };
}
