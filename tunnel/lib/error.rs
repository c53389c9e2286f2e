//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use std::path::PathBuf;
use plotters::drawing::DrawingAreaErrorKind;
use plotters_backend::DrawingErrorKind;
use thiserror::Error;

/// Returned when a model parameter or the sampling grid is unusable.
#[derive(Debug, Error)]
pub enum ParamError {
    /// Returned when a parameter required to be strictly positive is not.
    #[error("{name} must be a finite number greater than 0; got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// Returned when a parameter is NaN or infinite.
    #[error("{name} must be finite; got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Returned when the grid has too few samples to be evenly spaced.
    #[error("grid must have at least 2 samples; got {0}")]
    GridSamples(usize),

    /// Returned when the grid bounds are not finite and increasing.
    #[error("grid bounds must be finite with xmin < xmax; got [{0}, {1}]")]
    GridBounds(f64, f64),
}

impl ParamError {
    pub(crate) fn check_positive(name: &'static str, value: f64)
        -> Result<(), Self>
    {
        (value.is_finite() && value > 0.0).then_some(())
            .ok_or(Self::NonPositive { name, value })
    }

    pub(crate) fn check_finite(name: &'static str, value: f64)
        -> Result<(), Self>
    {
        value.is_finite().then_some(())
            .ok_or(Self::NonFinite { name, value })
    }

    pub(crate) fn check_grid(xmin: f64, xmax: f64, n: usize)
        -> Result<(), Self>
    {
        (n >= 2).then_some(()).ok_or(Self::GridSamples(n))?;
        (xmin.is_finite() && xmax.is_finite() && xmin < xmax).then_some(())
            .ok_or(Self::GridBounds(xmin, xmax))
    }
}

/// Returned when a derived wavenumber would be imaginary.
#[derive(Debug, Error)]
pub enum DomainError {
    /// `k = √(2mE)/ħ` requires `E ≥ 0`.
    #[error("wavenumber k = √(2mE)/ħ is imaginary: energy E = {0} is negative")]
    NegativeEnergy(f64),

    /// `κ = √(2m(V0 - E))/ħ` requires `E ≤ V0`.
    #[error(
        "decay constant κ = √(2m(V0 - E))/ħ is imaginary: \
        energy E = {energy} exceeds barrier height V0 = {v0}"
    )]
    EnergyAboveBarrier { energy: f64, v0: f64 },
}

impl DomainError {
    pub(crate) fn check_energy(energy: f64, v0: f64) -> Result<(), Self> {
        (energy >= 0.0).then_some(()).ok_or(Self::NegativeEnergy(energy))?;
        (energy <= v0).then_some(())
            .ok_or(Self::EnergyAboveBarrier { energy, v0 })
    }
}

/// Returned from [`DensityCurve::compute`][crate::density::DensityCurve::compute].
#[derive(Debug, Error)]
pub enum CurveError {
    /// [`ParamError`]
    #[error("parameter error: {0}")]
    Param(#[from] ParamError),

    /// [`DomainError`]
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Returned when loading [`Params`][crate::params::Params] from TOML.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read {path}: {source}")]
    Read { path: PathBuf, #[source] source: std::io::Error },

    #[error("unable to parse toml: {0}")]
    Parse(#[from] toml::de::Error),

    /// [`ParamError`]
    #[error("invalid parameters: {0}")]
    Param(#[from] ParamError),
}

/// Returned from functions in [`plot`][crate::plot].
#[derive(Debug, Error)]
pub enum PlotError {
    /// Returned when the output file cannot be created or written.
    #[error("cannot write plot to {path}: {source}")]
    Io { path: PathBuf, #[source] source: std::io::Error },

    /// Returned when no usable font could be loaded for text.
    #[error("font error: {0}")]
    Font(String),

    /// Any other failure reported by the drawing backend.
    #[error("drawing error: {0}")]
    Drawing(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for PlotError
where E: std::error::Error + Send + Sync
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        match err {
            DrawingAreaErrorKind::BackendError(
                DrawingErrorKind::FontError(font_err)
            ) => Self::Font(font_err.to_string()),
            DrawingAreaErrorKind::BackendError(
                DrawingErrorKind::DrawingError(draw_err)
            ) => Self::Drawing(draw_err.to_string()),
            other => Self::Drawing(other.to_string()),
        }
    }
}
