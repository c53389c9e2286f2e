use std::fs;
use approx::assert_abs_diff_eq;
use tunnel::{
    error::{ ConfigError, CurveError, DomainError, ParamError },
    density::DensityCurve,
    params::{ Grid, Params, Wavenumbers },
};

#[test]
fn default_wavenumbers() {
    let wn = Wavenumbers::from_params(&Params::default()).unwrap();
    assert_abs_diff_eq!(wn.k, 0.8_f64.sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(wn.kappa, 0.4_f64.sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(wn.k, 0.894427, epsilon = 1e-6);
    assert_abs_diff_eq!(wn.kappa, 0.632456, epsilon = 1e-6);
}

#[test]
fn wavenumbers_scale_with_hbar_and_mass() {
    let params = Params { hbar: 2.0, mass: 4.0, ..Params::default() };
    let wn = Wavenumbers::from_params(&params).unwrap();
    assert_abs_diff_eq!(wn.k, (2.0 * 4.0 * 0.4_f64).sqrt() / 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(wn.kappa, (2.0 * 4.0 * 0.2_f64).sqrt() / 2.0, epsilon = 1e-12);
}

#[test]
fn energy_above_barrier_is_a_domain_error() {
    let params = Params { energy: 0.8, v0: 0.6, ..Params::default() };
    match Wavenumbers::from_params(&params) {
        Err(DomainError::EnergyAboveBarrier { energy, v0 }) => {
            assert_eq!(energy, 0.8);
            assert_eq!(v0, 0.6);
        },
        other => panic!("expected EnergyAboveBarrier, got {other:?}"),
    }
    assert!(matches!(
        DensityCurve::compute(&params),
        Err(CurveError::Domain(DomainError::EnergyAboveBarrier { .. })),
    ));
}

#[test]
fn negative_energy_is_a_domain_error() {
    let params = Params { energy: -0.1, ..Params::default() };
    assert!(matches!(
        Wavenumbers::from_params(&params),
        Err(DomainError::NegativeEnergy(e)) if e == -0.1,
    ));
    assert!(matches!(
        DensityCurve::compute(&params),
        Err(CurveError::Domain(DomainError::NegativeEnergy(_))),
    ));
}

#[test]
fn domain_error_messages_name_the_quantity() {
    let above = DomainError::EnergyAboveBarrier { energy: 0.8, v0: 0.6 };
    let msg = above.to_string();
    assert!(msg.contains("κ"));
    assert!(msg.contains("0.8"));
    assert!(msg.contains("0.6"));

    let negative = DomainError::NegativeEnergy(-1.0).to_string();
    assert!(negative.contains("wavenumber k"));
    assert!(negative.contains("-1"));
}

#[test]
fn energy_at_limits_is_allowed() {
    let at_barrier = Params { energy: 0.6, ..Params::default() };
    let wn = Wavenumbers::from_params(&at_barrier).unwrap();
    assert_eq!(wn.kappa, 0.0);

    let at_rest = Params { energy: 0.0, ..Params::default() };
    let wn = Wavenumbers::from_params(&at_rest).unwrap();
    assert_eq!(wn.k, 0.0);
}

#[test]
fn non_positive_parameters_are_rejected() {
    let cases = [
        ("hbar", Params { hbar: 0.0, ..Params::default() }),
        ("mass", Params { mass: -1.0, ..Params::default() }),
        ("v0", Params { v0: 0.0, ..Params::default() }),
        ("width", Params { width: f64::INFINITY, ..Params::default() }),
    ];
    for (expected, params) in cases {
        match params.check() {
            Err(ParamError::NonPositive { name, .. }) => assert_eq!(name, expected),
            other => panic!("{expected}: expected NonPositive, got {other:?}"),
        }
    }
    let nan_energy = Params { energy: f64::NAN, ..Params::default() };
    assert!(matches!(
        nan_energy.check(),
        Err(ParamError::NonFinite { name: "energy", .. }),
    ));
}

#[test]
fn bad_grids_are_rejected() {
    let one = Grid { n: 1, ..Grid::default() };
    assert!(matches!(one.check(), Err(ParamError::GridSamples(1))));

    let reversed = Grid { xmin: 3.0, xmax: -3.0, ..Grid::default() };
    assert!(matches!(reversed.check(), Err(ParamError::GridBounds(..))));

    let params = Params { grid: one, ..Params::default() };
    assert!(matches!(
        DensityCurve::compute(&params),
        Err(CurveError::Param(ParamError::GridSamples(1))),
    ));
}

#[test]
fn default_grid_is_endpoint_exact() {
    let grid = Grid::default();
    let x = grid.positions();
    assert_eq!(x.len(), 1000);
    assert_eq!(x[0], -3.0);
    assert_eq!(x[999], 3.0);
    let dx = grid.spacing();
    assert_abs_diff_eq!(dx, 6.0 / 999.0, epsilon = 1e-15);
    for (xk, xkp1) in x.iter().zip(x.iter().skip(1)) {
        assert_abs_diff_eq!(xkp1 - xk, dx, epsilon = 1e-12);
    }
}

#[test]
fn toml_fills_in_missing_fields() {
    let params = Params::from_toml_str("energy = 0.25").unwrap();
    assert_eq!(params, Params { energy: 0.25, ..Params::default() });

    let empty = Params::from_toml_str("").unwrap();
    assert_eq!(empty, Params::default());
}

#[test]
fn toml_rejects_unknown_and_invalid_fields() {
    assert!(matches!(
        Params::from_toml_str("barrier_height = 1.0"),
        Err(ConfigError::Parse(_)),
    ));
    assert!(matches!(
        Params::from_toml_str("width = -1.0"),
        Err(ConfigError::Param(ParamError::NonPositive { name: "width", .. })),
    ));
}

#[test]
fn load_from_file() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("tunnel-params-{}.toml", std::process::id()));
    fs::write(&path, "v0 = 2.0\nenergy = 1.0\n[grid]\nn = 11\n").unwrap();
    let params = Params::load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(params.v0, 2.0);
    assert_eq!(params.energy, 1.0);
    assert_eq!(params.grid.n, 11);

    let missing = dir.join(format!("tunnel-missing-{}.toml", std::process::id()));
    assert!(matches!(Params::load(&missing), Err(ConfigError::Read { .. })));
}

#[test]
#[should_panic(expected = "at least 2 samples")]
fn spacing_of_empty_grid_panics() {
    Grid { n: 0, ..Grid::default() }.spacing();
}

#[test]
#[should_panic(expected = "at least 2 points")]
fn positions_of_single_sample_grid_panic() {
    Grid { n: 1, ..Grid::default() }.positions();
}

#[test]
fn zero_sample_grid_deserializes_but_fails_check() {
    let grid = toml_grid("n = 0");
    assert_eq!(grid.n, 0);
    assert!(matches!(grid.check(), Err(ParamError::GridSamples(0))));
}

fn toml_grid(body: &str) -> Grid {
    toml::from_str(body).unwrap()
}
