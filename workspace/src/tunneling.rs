use std::path::PathBuf;
use log::{ info, LevelFilter };
use tunnel::{
    density::DensityCurve,
    params::Params,
    plot::{ self, PlotStyle },
};

const OUTFILE: &str = "fig.png";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    let params = Params::default();
    let curve = DensityCurve::compute(&params)?;
    info!(
        "E = {}, V0 = {}: k = {:.6}, kappa = {:.6}",
        params.energy, params.v0, curve.wavenumbers.k, curve.wavenumbers.kappa,
    );

    let outfile = PathBuf::from(OUTFILE);
    plot::save_and_display(
        &curve, &outfile, &PlotStyle::default(), |path| plot::show(path))?;
    info!("saved {}", outfile.display());
    Ok(())
}
