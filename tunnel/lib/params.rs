//! Model parameters, sampling grid, and the wavenumbers derived from them.
//!
//! Everything is expressed in natural units where ħ and *m* default to 1.
//! Parameters can be built in code or read from a TOML table in which any
//! subset of fields may appear:
//! ```
//! use tunnel::params::Params;
//!
//! let params = Params::from_toml_str(
//!     r#"
//!     v0 = 1.2
//!     energy = 0.5
//!
//!     [grid]
//!     n = 500
//!     "#,
//! ).unwrap();
//! assert_eq!(params.v0, 1.2);
//! assert_eq!(params.width, 1.0);
//! assert_eq!(params.grid.n, 500);
//! assert_eq!(params.grid.xmax, 3.0);
//! ```

use std::{ fs, path::Path };
use log::debug;
use ndarray as nd;
use serde::{ Deserialize, Serialize };
use crate::{
    error::{ ConfigError, DomainError, ParamError },
    utils,
    DEF_SAMPLES,
    DEF_XMAX,
    DEF_XMIN,
};

/// A uniform, endpoint-inclusive sampling of the spatial domain.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Grid {
    /// Left edge of the domain.
    pub xmin: f64,
    /// Right edge of the domain.
    pub xmax: f64,
    /// Number of samples.
    pub n: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self { xmin: DEF_XMIN, xmax: DEF_XMAX, n: DEF_SAMPLES }
    }
}

impl Grid {
    /// Check that the grid can be evenly sampled.
    pub fn check(&self) -> Result<(), ParamError> {
        ParamError::check_grid(self.xmin, self.xmax, self.n)
    }

    /// Generate the sample positions.
    ///
    /// The first and last elements are exactly `xmin` and `xmax`.
    ///
    /// *Panics if `n` is less than 2*.
    pub fn positions(&self) -> nd::Array1<f64> {
        utils::linspace(self.xmin, self.xmax, self.n)
    }

    /// Distance between adjacent samples.
    ///
    /// *Panics if `n` is less than 2*.
    pub fn spacing(&self) -> f64 {
        assert!(self.n >= 2, "grid must have at least 2 samples; got {}", self.n);
        (self.xmax - self.xmin) / (self.n - 1) as f64
    }
}

/// Physical inputs to the illustrative barrier model.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    /// Reduced Planck constant.
    pub hbar: f64,
    /// Particle mass.
    pub mass: f64,
    /// Barrier height.
    pub v0: f64,
    /// Barrier width; the barrier occupies `[-width/2, width/2]`.
    pub width: f64,
    /// Particle energy.
    pub energy: f64,
    /// Sampling of the spatial domain.
    pub grid: Grid,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            hbar: 1.0,
            mass: 1.0,
            v0: 0.6,
            width: 1.0,
            energy: 0.4,
            grid: Grid::default(),
        }
    }
}

impl Params {
    /// Check that all parameters are individually sensible.
    ///
    /// This does not check the relation between `energy` and `v0`; that is
    /// left to [`Wavenumbers::from_params`].
    pub fn check(&self) -> Result<(), ParamError> {
        ParamError::check_positive("hbar", self.hbar)?;
        ParamError::check_positive("mass", self.mass)?;
        ParamError::check_positive("v0", self.v0)?;
        ParamError::check_positive("width", self.width)?;
        ParamError::check_finite("energy", self.energy)?;
        self.grid.check()
    }

    /// Left and right edges of the barrier.
    pub fn barrier_edges(&self) -> (f64, f64) {
        (-self.width / 2.0, self.width / 2.0)
    }

    /// Parse and check parameters from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let params: Self = toml::from_str(s)?;
        params.check()?;
        Ok(params)
    }

    /// Read, parse, and check parameters from a TOML file.
    pub fn load<P>(path: P) -> Result<Self, ConfigError>
    where P: AsRef<Path>
    {
        let path = path.as_ref();
        let s = fs::read_to_string(path)
            .map_err(|source| {
                ConfigError::Read { path: path.to_path_buf(), source }
            })?;
        debug!("loaded parameters from {}", path.display());
        Self::from_toml_str(&s)
    }
}

/// Wavenumbers for the regions inside and outside the barrier.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Wavenumbers {
    /// Propagation wavenumber outside the barrier, `√(2mE)/ħ`.
    pub k: f64,
    /// Decay constant inside the barrier, `√(2m(V0 - E))/ħ`.
    pub kappa: f64,
}

impl Wavenumbers {
    /// Compute both wavenumbers.
    ///
    /// Fails if either would be imaginary, i.e. if `E < 0` or `E > V0`.
    /// `E = 0` and `E = V0` are allowed and give `k = 0` and `κ = 0`
    /// respectively.
    pub fn from_params(params: &Params) -> Result<Self, DomainError> {
        let Params { hbar, mass, v0, energy, .. } = *params;
        DomainError::check_energy(energy, v0)?;
        let k = (2.0 * mass * energy).sqrt() / hbar;
        let kappa = (2.0 * mass * (v0 - energy)).sqrt() / hbar;
        debug!("k = {k:.6}, kappa = {kappa:.6}");
        Ok(Self { k, kappa })
    }
}
