//! Provides the construction and rendering of an illustrative probability
//! density for a particle tunneling through a rectangular potential barrier.
//!
//! The "wavefunction" here is a hand-assembled piecewise function chosen to
//! look qualitatively right, not a solution of the Schrödinger equation:
//! - [`params`]: model parameters, sampling grid, and derived wavenumbers
//! - [`density`]: piecewise evaluation of *ψ*(*x*) and |*ψ*(*x*)|²
//! - [`plot`]: rendering to PNG and a best-effort image viewer
//!
//! ```no_run
//! use tunnel::{ density::DensityCurve, params::Params, plot };
//!
//! let curve = DensityCurve::compute(&Params::default()).unwrap();
//! plot::render(&curve, "fig.png", &plot::PlotStyle::default()).unwrap();
//! ```
//!
//! See [`docs`] for background on the model.

pub mod error;
pub mod params;
pub mod density;
pub mod plot;
pub mod utils;

pub mod docs;

pub(crate) const DEF_XMIN: f64 = -3.0;
pub(crate) const DEF_XMAX: f64 = 3.0;
pub(crate) const DEF_SAMPLES: usize = 1000;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
