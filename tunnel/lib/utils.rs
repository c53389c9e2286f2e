//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;

/// Generate `n` evenly spaced points from `start` to `end`, inclusive.
///
/// Unlike [`Array1::linspace`][nd::Array1::linspace], the last element is set
/// to exactly `end` rather than accumulating rounding error from the step.
///
/// *Panics if `n` is less than 2*.
pub fn linspace(start: f64, end: f64, n: usize) -> nd::Array1<f64> {
    assert!(n >= 2, "linspace requires at least 2 points; got {n}");
    let mut x: nd::Array1<f64> = nd::Array1::linspace(start, end, n);
    x[n - 1] = end;
    x
}

/// Return the maximum of an array, ignoring NaNs.
///
/// Returns `None` if the array is empty or contains only NaNs.
pub fn fmax<S, A>(a: &nd::ArrayBase<S, Ix1>) -> Option<A>
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    a.iter().copied()
        .filter(|ak| !ak.is_nan())
        .fold(None, |acc, ak| Some(acc.map_or(ak, |m: A| m.max(ak))))
}
