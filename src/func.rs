//! The seam between the solver and whatever produces derivatives.

use num::Complex;

use crate::RealScalar;

/// A scalar function together with its first two derivatives, evaluable
/// at arbitrary complex points.
///
/// The solver consumes the target function exclusively through this
/// trait, so any provider satisfies the contract: hand-derived closed
/// forms (see [`ClosedForm`]), automatic differentiation, or Horner
/// evaluation of stored coefficients. The logarithmic derivative driving
/// the update formula is computed by the solver from these three
/// evaluations.
pub trait Differentiable<T: RealScalar> {
    /// Evaluate `f(x)`.
    fn eval(&self, x: Complex<T>) -> Complex<T>;

    /// Evaluate `f'(x)`.
    fn derivative(&self, x: Complex<T>) -> Complex<T>;

    /// Evaluate `f''(x)`.
    fn second_derivative(&self, x: Complex<T>) -> Complex<T>;
}

/// A function and its derivatives as three closures.
///
/// For low-degree polynomials the closed forms are quickest to write by
/// hand:
///
/// ```
/// use laguerre::{complex, ClosedForm, Differentiable};
/// use laguerre::num::Complex;
///
/// // f(z) = z^2 - 1
/// let f = ClosedForm::new(
///     |z: Complex<f64>| z * z - complex!(1.0),
///     |z: Complex<f64>| z * complex!(2.0),
///     |_: Complex<f64>| complex!(2.0),
/// );
/// assert_eq!(f.eval(complex!(3.0)), complex!(8.0));
/// assert_eq!(f.derivative(complex!(3.0)), complex!(6.0));
/// ```
#[derive(Clone, Copy)]
pub struct ClosedForm<F0, F1, F2> {
    f: F0,
    df: F1,
    ddf: F2,
}

impl<F0, F1, F2> ClosedForm<F0, F1, F2> {
    pub const fn new(f: F0, df: F1, ddf: F2) -> Self {
        Self { f, df, ddf }
    }
}

impl<T, F0, F1, F2> Differentiable<T> for ClosedForm<F0, F1, F2>
where
    T: RealScalar,
    F0: Fn(Complex<T>) -> Complex<T>,
    F1: Fn(Complex<T>) -> Complex<T>,
    F2: Fn(Complex<T>) -> Complex<T>,
{
    fn eval(&self, x: Complex<T>) -> Complex<T> {
        (self.f)(x)
    }

    fn derivative(&self, x: Complex<T>) -> Complex<T> {
        (self.df)(x)
    }

    fn second_derivative(&self, x: Complex<T>) -> Complex<T> {
        (self.ddf)(x)
    }
}
