use num::{Complex, One, Zero};

use super::{Error, Solution};
use crate::{
    func::Differentiable,
    util::complex::{c_is_finite, c_max},
    RealScalar,
};

/// Refine `initial_guess` into a root of `f` using Laguerre's method.
///
/// `order` is the degree of the polynomial, or an assumed effective order
/// when `f` is not a polynomial. The iteration stops as soon as the step
/// modulus drops below `epsilon`, or after `max_iter` update steps. On
/// success the returned [`Solution`] holds the just-accepted iterate and
/// the number of steps performed. Landing exactly on a root is a success,
/// not a division-by-zero fault.
///
/// Every step is computed in complex arithmetic, even for real functions
/// and guesses: the discriminant of a real iterate is often negative, and
/// that is precisely how the method escapes the real axis towards complex
/// roots.
///
/// # Errors
/// - [`Error::NoConverge`]: the cap ran out; carries the last iterate.
/// - [`Error::Degenerate`]: the denominator vanished in both branches, a
///   derivative overflowed, or the next iterate is not finite.
/// - [`Error::InvalidOrder`], [`Error::InvalidTolerance`]: rejected
///   before any evaluation of `f`.
///
/// # Panics
/// If `T` cannot represent `order`. This does not happen for `f32` and
/// `f64`.
#[allow(clippy::similar_names)]
pub fn laguerre<T: RealScalar, F: Differentiable<T>>(
    f: &F,
    order: usize,
    initial_guess: Complex<T>,
    epsilon: T,
    max_iter: usize,
) -> super::Result<T> {
    log::trace!("starting with arguments: {{order: {order}, initial_guess: \"{initial_guess}\", epsilon: {epsilon}, max_iter: {max_iter}}}");

    if order < 1 {
        return Err(Error::InvalidOrder);
    }
    if !epsilon.is_finite() || epsilon <= T::zero() {
        return Err(Error::InvalidTolerance);
    }

    let n = Complex::new(T::from_usize(order).expect("overflow"), T::zero());
    let n_minus_one = n - Complex::one();
    let mut guess = initial_guess;

    for i in 0..max_iter {
        let fx = f.eval(guess);

        // landing on a root makes the logarithmic derivative blow up, so
        // it has to be caught before the division, as a success
        if fx.is_zero() || fx.norm_sqr().is_tiny() {
            log::trace!("stopping on an exact root {{guess: {guess}}}");
            return Ok(Solution {
                root: guess,
                iterations: i,
            });
        }

        let mu = f.derivative(guess) / fx;
        let mu_prime = f.second_derivative(guess) / fx - mu * mu;
        if !c_is_finite(mu) || !c_is_finite(mu_prime) {
            return Err(Error::Degenerate(Solution {
                root: guess,
                iterations: i,
            }));
        }

        let disc_sqrt = (n_minus_one * (-(n * mu_prime) - mu * mu)).sqrt();

        // the larger of the two denominators gives the smaller, stabler
        // step; ties go to the positive branch
        let denom = c_max(disc_sqrt - mu, -disc_sqrt - mu);
        if denom.norm_sqr().is_tiny() {
            return Err(Error::Degenerate(Solution {
                root: guess,
                iterations: i,
            }));
        }

        let delta = n / denom;
        let next = guess + delta;
        if !c_is_finite(next) {
            return Err(Error::Degenerate(Solution {
                root: guess,
                iterations: i,
            }));
        }

        log::trace!("{{current_guess: {next}, step: {}}}", delta.norm());

        if delta.norm() < epsilon {
            return Ok(Solution {
                root: next,
                iterations: i + 1,
            });
        }
        guess = next;
    }

    Err(Error::NoConverge(Solution {
        root: guess,
        iterations: max_iter,
    }))
}
