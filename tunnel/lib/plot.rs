//! Rendering of a [`DensityCurve`] to a PNG file, and a best-effort viewer.
//!
//! Text is drawn with a bundled copy of DejaVu Sans, so rendering does not
//! depend on fonts installed on the host.

use std::{
    fs::{ self, File },
    io,
    path::{ Path, PathBuf },
    process::{ Command, Stdio },
};
use log::{ debug, warn };
use plotters::{ prelude::*, style::register_font };
use crate::{
    density::DensityCurve,
    error::PlotError,
    params::Params,
};

pub type PlotResult<T> = Result<T, PlotError>;

const FONT_FAMILY: &str = "sans-serif";
static FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Look of the rendered figure.
#[derive(Copy, Clone, Debug)]
pub struct PlotStyle {
    /// Image size in pixels.
    pub size: (u32, u32),
    /// Font size of the title.
    pub caption_size: u32,
    /// Color of the density curve.
    pub curve: RGBColor,
    /// Color of the barrier shading.
    pub barrier: RGBColor,
    /// Opacity of the barrier shading.
    pub barrier_alpha: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            size: (800, 500),
            caption_size: 20,
            curve: BLUE,
            barrier: RED,
            barrier_alpha: 0.2,
        }
    }
}

/// Title reporting the energy and barrier height.
pub fn title(params: &Params) -> String {
    let rel = if params.energy < params.v0 { "<" } else { "=" };
    format!("Tunneling for E = {} {} V0 = {}", params.energy, rel, params.v0)
}

// hidden sibling of `path` with the same extension, so the encoder is chosen
// the same way
fn staging_path(path: &Path) -> PathBuf {
    let stem = path.file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let mut name = format!(".{stem}.partial");
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(name)
}

/// Draw `curve` and write it to `path` as a PNG, replacing any existing file.
///
/// The image is drawn into a temporary file next to `path` and moved into
/// place only once drawing has succeeded; on failure the temporary file is
/// removed and any existing file at `path` is left untouched. An unwritable
/// location is reported as [`PlotError::Io`].
///
/// *Panics if `curve.x` is empty*.
pub fn render<P>(curve: &DensityCurve, path: P, style: &PlotStyle)
    -> PlotResult<()>
where P: AsRef<Path>
{
    let path = path.as_ref();
    let io_err = |source| PlotError::Io { path: path.to_path_buf(), source };
    let staging = staging_path(path);
    File::create(&staging).map_err(io_err)?;
    match draw(curve, &staging, style) {
        Ok(()) => {
            fs::rename(&staging, path)
                .map_err(|err| {
                    fs::remove_file(&staging).ok();
                    io_err(err)
                })?;
            debug!("wrote {}", path.display());
            Ok(())
        },
        Err(err) => {
            fs::remove_file(&staging).ok();
            Err(err)
        },
    }
}

fn draw(curve: &DensityCurve, path: &Path, style: &PlotStyle)
    -> PlotResult<()>
{
    register_font(FONT_FAMILY, FontStyle::Normal, FONT_DATA)
        .map_err(|_| PlotError::Font("bundled font could not be parsed".into()))?;

    let n = curve.x.len();
    let (xmin, xmax) = (curve.x[0], curve.x[n - 1]);
    let rho_max = match curve.rho_max() {
        r if r > 0.0 => r,
        _ => 1.0,
    };
    let (ylo, yhi) = (-0.05 * rho_max, 1.1 * rho_max);
    let shade = style.barrier.mix(style.barrier_alpha).filled();

    let root = BitMapBackend::new(path, style.size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title(&curve.params), (FONT_FAMILY, style.caption_size))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(xmin..xmax, ylo..yhi)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("|ψ(x)|²")
        .draw()?;

    if let Some((b0, b1)) = curve.visible_barrier() {
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(b0, ylo), (b1, yhi)],
                shade,
            )))?
            .label("potential barrier")
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], shade));
    }

    chart.draw_series(LineSeries::new([(xmin, 0.0), (xmax, 0.0)], &BLACK))?;

    let curve_color = style.curve;
    chart
        .draw_series(LineSeries::new(
            curve.x.iter().copied().zip(curve.rho.iter().copied()),
            &curve_color,
        ))?
        .label("|ψ(x)|²")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], curve_color));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Try to open `path` in the platform's default image viewer.
///
/// The viewer is spawned and left running; this does not wait for it. An error
/// is returned only if the viewer process could not be started.
pub fn show<P>(path: P) -> io::Result<()>
where P: AsRef<Path>
{
    #[cfg(target_os = "macos")]
    let mut cmd = Command::new("open");
    #[cfg(target_os = "windows")]
    let mut cmd = {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut cmd = Command::new("xdg-open");

    cmd.arg(path.as_ref())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

/// Render `curve` to `path`, then hand the saved file to `display`.
///
/// Saving always happens first and its failure is returned. A failure of
/// `display` is only logged, so the saved file is never affected by it. Pass
/// `|path| plot::show(path)` to use the platform viewer.
pub fn save_and_display<P, F>(
    curve: &DensityCurve,
    path: P,
    style: &PlotStyle,
    display: F,
) -> PlotResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&Path) -> io::Result<()>,
{
    let path = path.as_ref();
    render(curve, path, style)?;
    if let Err(err) = display(path) {
        warn!("could not display {}: {err}", path.display());
    }
    Ok(())
}
