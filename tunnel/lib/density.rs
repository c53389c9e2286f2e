//! Evaluation of the piecewise illustrative wavefunction and its probability
//! density.
//!
//! See [`docs`][crate::docs#the-piecewise-model] for the form of the model.
//!
//! ```
//! use tunnel::{ density::DensityCurve, params::Params };
//!
//! let curve = DensityCurve::compute(&Params::default()).unwrap();
//! assert_eq!(curve.x.len(), 1000);
//! assert_eq!(curve.rho.len(), curve.x.len());
//! assert!(curve.rho.iter().all(|rk| *rk >= 0.0));
//! ```

use log::debug;
use ndarray as nd;
use num_complex::ComplexFloat;
use crate::{
    Arr1,
    error::CurveError,
    params::{ Params, Wavenumbers },
    utils,
};

pub type CurveResult<T> = Result<T, CurveError>;

/// Phase offset of the incident cosine, `cos(k (x + X_LEFT))`.
pub const X_LEFT: f64 = 1.5;

/// Phase offset of the transmitted cosine, `cos(k (x - X_RIGHT))`.
pub const X_RIGHT: f64 = 1.5;

/// Fixed amplitude of the transmitted cosine.
pub const TRANSMITTED_AMPLITUDE: f64 = 0.3;

/// One of the three regions of the spatial domain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Region {
    /// `x < -a/2`
    Left,
    /// `-a/2 ≤ x ≤ a/2`
    Barrier,
    /// `x > a/2`
    Right,
}

impl Region {
    /// Classify a position for a barrier of width `width` centered on the
    /// origin. Both barrier edges belong to [`Region::Barrier`].
    pub fn of(x: f64, width: f64) -> Self {
        let half = width / 2.0;
        if x < -half {
            Self::Left
        } else if x > half {
            Self::Right
        } else {
            Self::Barrier
        }
    }
}

/// Evaluate the illustrative wavefunction at a single point.
///
/// Each region uses its own closed form; nothing is matched across `±a/2`, so
/// the result is generally discontinuous there.
pub fn psi(x: f64, wn: &Wavenumbers, width: f64) -> f64 {
    match Region::of(x, width) {
        Region::Left => (wn.k * (x + X_LEFT)).cos(),
        Region::Barrier => (-wn.kappa * (x + width / 2.0)).exp(),
        Region::Right => TRANSMITTED_AMPLITUDE * (wn.k * (x - X_RIGHT)).cos(),
    }
}

/// Evaluate the illustrative wavefunction over an array of positions.
pub fn wavefunction<S>(x: &Arr1<S>, wn: &Wavenumbers, width: f64)
    -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| psi(xk, wn, width))
}

/// Compute the probability density `|ψ|²` of a sampled wavefunction.
///
/// Works for both real- and complex-valued samples.
/// ```
/// use ndarray as nd;
/// use num_complex::Complex64 as C64;
/// use tunnel::density::density;
///
/// let q: nd::Array1<C64> = nd::array![C64::new(0.6, 0.8), C64::new(0.0, -2.0)];
/// let rho = density(&q);
/// assert!((rho[0] - 1.0).abs() < 1e-12);
/// assert!((rho[1] - 4.0).abs() < 1e-12);
/// ```
pub fn density<S, A>(q: &Arr1<S>) -> nd::Array1<A::Real>
where
    S: nd::Data<Elem = A>,
    A: ComplexFloat,
{
    q.mapv(|qk| qk.abs().powi(2))
}

/// A sampled density curve together with everything used to produce it.
///
/// This is usually only returned by [`DensityCurve::compute`]; you probably
/// won't ever instantiate it yourself.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityCurve {
    /// Parameters the curve was computed from.
    pub params: Params,
    /// Derived wavenumbers.
    pub wavenumbers: Wavenumbers,
    /// Sample positions.
    pub x: nd::Array1<f64>,
    /// Wavefunction at each sample.
    pub psi: nd::Array1<f64>,
    /// Probability density at each sample.
    pub rho: nd::Array1<f64>,
}

impl DensityCurve {
    /// Check `params`, derive the wavenumbers, and sample the density over
    /// the grid.
    ///
    /// No sampling is done if either wavenumber would be imaginary.
    pub fn compute(params: &Params) -> CurveResult<Self> {
        params.check()?;
        let wavenumbers = Wavenumbers::from_params(params)?;
        let x = params.grid.positions();
        let psi = wavefunction(&x, &wavenumbers, params.width);
        let rho = density(&psi);
        debug!(
            "sampled density over {} points in [{}, {}]",
            x.len(), params.grid.xmin, params.grid.xmax,
        );
        Ok(Self { params: *params, wavenumbers, x, psi, rho })
    }

    /// Return a mask selecting the samples lying in `region`.
    pub fn mask(&self, region: Region) -> nd::Array1<bool> {
        let width = self.params.width;
        self.x.mapv(|xk| Region::of(xk, width) == region)
    }

    /// Part of the barrier that lies within the sampled domain, or `None` if
    /// the barrier is entirely outside it.
    ///
    /// *Panics if `self.x` is empty*.
    pub fn visible_barrier(&self) -> Option<(f64, f64)> {
        let (xmin, xmax) = (self.x[0], self.x[self.x.len() - 1]);
        let (b0, b1) = self.params.barrier_edges();
        (b1 >= xmin && b0 <= xmax).then(|| (b0.max(xmin), b1.min(xmax)))
    }

    /// Largest value of the density, or 0 if every sample is NaN.
    pub fn rho_max(&self) -> f64 {
        utils::fmax(&self.rho).unwrap_or(0.0)
    }
}
