use num::Complex;

use crate::RealScalar;

mod laguerre;
pub use laguerre::laguerre;

mod sealed {
    pub trait Sealed {}
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error<T> {
    /// The iteration cap ran out before the step size dropped below
    /// tolerance. Carries the last iterate so the caller can retry from
    /// it, or accept it as-is.
    #[error("root finder did not converge within the given constraints")]
    NoConverge(T),

    /// The update could not be computed: the denominator vanished in both
    /// branches, or the next iterate came out NaN or infinite. Carries
    /// the last finite iterate.
    #[error("root finder produced non-finite values and cannot continue")]
    Degenerate(T),

    /// The update formula divides by `n - 1` terms and is undefined for
    /// orders below 1.
    #[error("order must be at least 1")]
    InvalidOrder,

    #[error("tolerance must be a finite positive number")]
    InvalidTolerance,

    #[error("unexpected error while running root finder")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<Solution<T>, Error<Solution<T>>>;

/// Outcome of a finished search: the accepted iterate and the number of
/// update steps that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution<T: RealScalar> {
    pub root: Complex<T>,
    pub iterations: usize,
}

impl<T: RealScalar> Solution<T> {
    /// Narrow the root to a real number, checking that the imaginary part
    /// actually is negligible first.
    ///
    /// The iteration is free to wander off the real axis even when the
    /// function and the initial guess are real, so narrowing is only
    /// meaningful when the imaginary part came back below `im_epsilon`.
    pub fn into_real(self, im_epsilon: T) -> Option<T> {
        (self.root.im.abs() <= im_epsilon).then_some(self.root.re)
    }
}

/// Extension trait for [`Result`]
pub trait ResultExt<T: RealScalar>: sealed::Sealed {
    /// Get the last iterate even if an error was raised. Returns [`None`]
    /// if the search failed before producing one.
    ///
    /// This is what batch drivers want: a guess that did not converge
    /// must not take the rest of the sweep down with it.
    fn ignore_errors(self) -> Option<Solution<T>>;
}

impl<T: RealScalar> sealed::Sealed for Result<T> {}

impl<T: RealScalar> ResultExt<T> for Result<T> {
    fn ignore_errors(self) -> Option<Solution<T>> {
        match self {
            Ok(sol) | Err(Error::NoConverge(sol) | Error::Degenerate(sol)) => Some(sol),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Error, ResultExt, Solution};

    #[test]
    fn into_real_accepts_negligible_imaginary_part() {
        let sol = Solution {
            root: complex!(2.0, 1E-12),
            iterations: 4,
        };
        assert_eq!(sol.into_real(1E-9), Some(2.0));
    }

    #[test]
    fn into_real_rejects_genuinely_complex_roots() {
        let sol = Solution {
            root: complex!(0.0, 1.0),
            iterations: 4,
        };
        assert_eq!(sol.into_real(1E-9), None);
    }

    #[test]
    fn ignore_errors_recovers_the_last_iterate() {
        let sol = Solution {
            root: complex!(1.5),
            iterations: 100,
        };
        let res: super::Result<f64> = Err(Error::NoConverge(sol));
        assert_eq!(res.ignore_errors(), Some(sol));
    }

    #[test]
    fn ignore_errors_drops_argument_errors() {
        let res: super::Result<f64> = Err(Error::InvalidOrder);
        assert_eq!(res.ignore_errors(), None);
    }
}
