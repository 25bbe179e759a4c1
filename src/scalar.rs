use std::fmt::{Debug, Display};

use num::{Float, FromPrimitive};

/// A real scalar that can back the complex arithmetic of the solver.
///
/// The iteration itself is always carried out over `Complex<T>`, this
/// trait only constrains the component type.
pub trait RealScalar: Float + FromPrimitive + Debug + Display {
    /// Smallest number that can be safely used in reciprocals without
    /// causing a division by zero error, NaN, infinite or similar.
    const TINY: Self;

    /// Is smaller than or equal to [`Self::TINY`]
    fn is_tiny(&self) -> bool {
        self <= &Self::TINY
    }
}

impl RealScalar for f32 {
    const TINY: Self = Self::MIN_POSITIVE;
}

impl RealScalar for f64 {
    const TINY: Self = Self::MIN_POSITIVE;
}
