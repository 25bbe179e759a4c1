// internal utilities for dealing with Complex annoyiances

use num::Complex;

use crate::RealScalar;

// Complex has no is_finite of its own for generic component types
pub(crate) fn c_is_finite<T: RealScalar>(x: Complex<T>) -> bool {
    x.re.is_finite() && x.im.is_finite()
}

// max based on norm, breaking ties towards the first argument
pub(crate) fn c_max<T: RealScalar>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    if a.norm_sqr() >= b.norm_sqr() {
        a
    } else {
        b
    }
}
