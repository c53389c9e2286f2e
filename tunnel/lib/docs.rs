//! Background on the model.
//!
//! # Contents
//! - [Background](#background)
//! - [The piecewise model](#the-piecewise-model)
//! - [Units](#units)
//!
//! # Background
//! A particle of mass *m* and energy *E* incident on a rectangular barrier of
//! height *V*<sub>0</sub> > *E* is classically reflected, but in quantum
//! mechanics its wavefunction leaks through the barrier and continues on the
//! far side with reduced amplitude. Outside the barrier the time-independent
//! Schrödinger equation admits oscillatory solutions with wavenumber
//! ```text
//!     √(2 m E)
//! k = --------
//!        ħ
//! ```
//! while inside the barrier the solutions grow or decay exponentially with
//! decay constant
//! ```text
//!     √(2 m (V₀ - E))
//! κ = ---------------
//!            ħ
//! ```
//! Both are real only for 0 ≤ *E* ≤ *V*<sub>0</sub>; outside this range
//! [`Wavenumbers::from_params`][crate::params::Wavenumbers::from_params]
//! returns a [`DomainError`][crate::error::DomainError] instead of producing a
//! NaN.
//!
//! # The piecewise model
//! This crate does **not** solve the Schrödinger equation. The curve it draws
//! is a caricature assembled region by region, with the barrier occupying
//! [-*a*/2, *a*/2]:
//! ```text
//!          ⎧ cos(k (x + 1.5))            x < -a/2
//! ψ(x) =   ⎨ exp(-κ (x + a/2))    -a/2 ≤ x ≤ a/2
//!          ⎩ 0.3 cos(k (x - 1.5))        x > a/2
//! ```
//! and the plotted quantity is |*ψ*(*x*)|². The decaying exponential starts at
//! exactly 1 on the left edge of the barrier. The amplitude 0.3 of the
//! transmitted wave is fixed and does not depend on *κ*, *a*, or *E*.
//!
//! No continuity of *ψ* or its derivative is imposed at ±*a*/2, so the density
//! generally jumps at the barrier edges. This is part of the picture, not an
//! error to be fixed; matching boundary conditions would produce a different
//! (physical) curve.
//!
//! # Units
//! Parameters are dimensionless, with ħ = *m* = 1 by default. For the default
//! values *V*<sub>0</sub> = 0.6 and *E* = 0.4 this gives *k* = √0.8 ≈ 0.894427
//! and *κ* = √0.4 ≈ 0.632456. Both ħ and *m* may be changed through
//! [`Params`][crate::params::Params], but must stay strictly positive.
