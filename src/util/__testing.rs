//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;
use num::{complex::Complex64, Complex};

use super::casting::usize_to_f64;

/// Seeded stream of real initial guesses in `[min, max]`.
pub struct RandStreamR64 {
    state: Rng,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            state: Rng::with_seed(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = self.state.f64().mul_add(self.max - self.min, self.min);
        Some(Complex::new(re, 0.0))
    }
}

/// Seeded stream of complex initial guesses in a cartesian box.
pub struct RandStreamC64Cartesian {
    state: Rng,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        Self {
            state: Rng::with_seed(seed),
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = self.state.f64().mul_add(self.max_re - self.min_re, self.min_re);
        let im = self.state.f64().mul_add(self.max_im - self.min_im, self.min_im);
        Some(Complex::new(re, im))
    }
}

/// Evenly spaced real guesses over `[min, max]`, endpoints included. This
/// is what sweep-style drivers feed the solver.
#[must_use]
pub fn guess_line(min: f64, max: f64, count: usize) -> Vec<Complex64> {
    assert!(count >= 2, "a sweep needs at least its two endpoints");
    let step = (max - min) / usize_to_f64(count - 1);
    (0..count)
        .map(|i| Complex::new(usize_to_f64(i).mul_add(step, min), 0.0))
        .collect_vec()
}
