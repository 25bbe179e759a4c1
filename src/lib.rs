#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

//! Laguerre's method for locating a single root of a polynomial, or of
//! any analytic function with a known effective order, from an initial
//! guess.
//!
//! The iteration is cubically convergent and, for polynomials, converges
//! from almost any starting point: at each step the denominator branch
//! with the larger complex modulus is selected, which keeps the step
//! small and stable. All arithmetic is complex internally, so real
//! guesses happily converge to complex roots.
//!
//! The target function is supplied through the [`Differentiable`] trait,
//! which decouples the solver from how derivatives are produced; for
//! simple polynomials [`ClosedForm`] wraps three hand-written closures.
//!
//! ```
//! use laguerre::{complex, laguerre, ClosedForm};
//! use laguerre::num::Complex;
//!
//! // f(z) = z^2 - 1
//! let f = ClosedForm::new(
//!     |z: Complex<f64>| z * z - complex!(1.0),
//!     |z: Complex<f64>| z * complex!(2.0),
//!     |_: Complex<f64>| complex!(2.0),
//! );
//! let sol = laguerre(&f, 2, complex!(50.0), 1E-5, 10).unwrap();
//! assert!((sol.root - complex!(1.0)).norm() < 1E-4);
//! ```

pub use num;

/// Shorthand for creating complex scalars
#[macro_export]
macro_rules! complex {
    () => {
        $crate::num::Complex::new(0.0, 0.0)
    };
    ($re:expr) => {
        $crate::num::Complex::new($re, 0.0)
    };
    ($re:expr, $im:expr) => {
        $crate::num::Complex::new($re, $im)
    };
}

mod scalar;
pub use scalar::RealScalar;

pub mod func;
pub use func::{ClosedForm, Differentiable};

pub mod roots;
pub use roots::laguerre;

mod util;
#[doc(hidden)]
pub use util::__testing;
