//! # Newton Plot
//! Plot data for Newton-Raphson runs.
//!
//! This crate only reads the estimates produced by [`newton_core`], and packages
//! them as plain data which any renderer may draw: the tangent line taken at every
//! step, the estimate each tangent lands on, and the window the run lives in.
//! There is no drawing state here, all types are serializable values.
//!

mod tangent;
mod trace;

pub use self::tangent::TangentLine;
pub use self::trace::{ConvergenceTrace, Frame};

/// `n` evenly spaced values from `lower` to `upper` inclusive.
pub(crate) fn linspace<T>(lower: T, upper: T, n: usize) -> Vec<T>
where
    T: num_traits::Float,
{
    match n {
        0 => Vec::new(),
        1 => vec![lower],
        _ => {
            let last = T::from(n - 1).unwrap();
            let width = upper - lower;
            (0..n)
                .map(|idx| lower + width * T::from(idx).unwrap() / last)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn test_linspace() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(-6.0_f32, 6.0, 3), vec![-6.0, 0.0, 6.0]);
    }
}
