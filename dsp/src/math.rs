pub type Real = f64;

#[doc(inline)]
pub use std::f64::consts::*;

/// Wrapper around `Real::sin`.
///
/// This allows the sine function to be imported and written as `sin(PI)`
/// instead of `Real::sin(PI)` or `PI.sin()`, which is the syntax I prefer.
pub fn sin(x: Real) -> Real {
    x.sin()
}

/// Wrapper around `Real::cos`.
///
/// This allows the cosine function to be imported and written as `cos(PI)`
/// instead of `Real::cos(PI)` or `PI.cos()`, which is the syntax I prefer.
pub fn cos(x: Real) -> Real {
    x.cos()
}

/// `sin(x) / x` but continuous.
///
/// Note the argument is in radians, not multiples of `PI`.
pub fn sinc(x: Real) -> Real {
    if x == 0.0 {
        1.0
    } else {
        sin(x) / x
    }
}
