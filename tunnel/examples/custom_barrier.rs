use std::path::PathBuf;
use tunnel::{
    density::{ DensityCurve, Region },
    params::Params,
    plot::{ self, PlotStyle },
};

// draw the density for a taller, narrower barrier read from a TOML table

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = Params::from_toml_str(
        r#"
        v0 = 1.5
        width = 0.6
        energy = 0.4

        [grid]
        xmin = -4.0
        xmax = 4.0
        n = 2000
        "#,
    )?;
    let curve = DensityCurve::compute(&params)?;
    println!("k     = {:.6}", curve.wavenumbers.k);
    println!("kappa = {:.6}", curve.wavenumbers.kappa);

    // samples under the barrier
    let inside = curve.mask(Region::Barrier).iter().filter(|b| **b).count();
    println!("{inside} of {} samples lie inside the barrier", curve.x.len());

    let outfile = PathBuf::from("custom_barrier.png");
    plot::render(&curve, &outfile, &PlotStyle::default())?;
    println!("saved {}", outfile.display());
    Ok(())
}
