//! Standard statistical plots: scatter, histograms, boxplots, errorbars,
//! grouped bars, bubble scatter, pie, and 3-D surfaces.
//!
//! Every demo computes its own data and renders one figure.  The
//! [`Style`] is passed explicitly; [`simple_plots`] carries it from one
//! demo to the next.

use std::path::PathBuf;
use log::debug;

use crate::{
    mesh::Surface,
    output::{display, printout, Labels, OutputConfig, Presenter, ZERO_LINE},
    plt,
    sample::{self, Frame, PIE_EXPLODE, PIE_FRACTIONS, PIE_LABELS, SEED},
    stats::Histogram,
    style::Style,
    Error,
};

/// Number of normal samples of the univariate demos.
pub const SAMPLE_SIZE: usize = 500;
/// Bins of the density histogram.
pub const DENSITY_BINS: usize = 25;
pub const BAR_COLUMNS: [&str; 4] = ["a", "b", "c", "d"];
pub const BAR_ROWS: usize = 10;
pub const BIVARIATE_COLUMNS: [&str; 3] = ["a", "b", "c"];
pub const BIVARIATE_ROWS: usize = 50;
/// Marker area (points²) of a bubble whose `c` value is 1.
pub const BUBBLE_SCALE: f64 = 500.;
/// Total width of a group of bars, in units of the group spacing.
const BAR_GROUP_WIDTH: f64 = 0.5;

/// Offset of each of the `n` bars of a group from the group centre,
/// for bars sharing `group_width`.
pub fn grouped_bar_offsets(n: usize, group_width: f64) -> Vec<f64> {
    let w = group_width / n as f64;
    (0 .. n).map(|i| -group_width / 2. + (i as f64 + 0.5) * w).collect()
}

/// All the statistical demos, in order.  Fonts are 16 points up to the
/// errorbars and 20 points from the bar chart on, when `presenter`
/// scales fonts.
pub fn simple_plots(presenter: &dyn Presenter, config: &OutputConfig)
                    -> Result<(), Error> {
    let x = sample::normal_samples(&mut sample::seeded_rng(SEED), SAMPLE_SIZE);
    let mut style = Style::default();
    presenter.set_fonts(&mut style, 16.);

    scatter_plot(&x, &style, config)?;
    histogram_plain(&x, &style, config)?;
    density_histogram(&x, &style, config)?;
    boxplots(&x, &style, config)?;
    errorbars(&style, config)?;

    let mut rng = sample::seeded_rng(SEED);
    presenter.set_fonts(&mut style, 20.);
    let bars = Frame::uniform(&mut rng, BAR_ROWS, &BAR_COLUMNS)?;
    barplot(&bars, &style, presenter)?;
    let bubbles = Frame::uniform(&mut rng, BIVARIATE_ROWS, &BIVARIATE_COLUMNS)?;
    bivariate(&bubbles, &style, config)?;
    pie_plot(&style, config)?;
    Ok(())
}

/// Values of `x` against their index.
pub fn scatter_plot(x: &[f64], style: &Style, config: &OutputConfig)
                    -> Result<PathBuf, Error> {
    let index: Vec<f64> = (0 .. x.len()).map(|i| i as f64).collect();
    let (fig, [[mut ax]]) = plt::subplots()?;
    ax.scatter(&index[..], x).color(style.color(0)).plot()?;
    ax.set_xlim(0., x.len() as f64)?;
    printout(fig, &mut ax, "scatterPlot.png",
             Labels::new("Datapoints", "Values", "Scatter"), style, config)
}

pub fn histogram_plain(x: &[f64], style: &Style, config: &OutputConfig)
                       -> Result<PathBuf, Error> {
    let h = Histogram::new(x, Histogram::DEFAULT_BINS)?;
    let (fig, [[mut ax]]) = plt::subplots()?;
    draw_histogram(&mut ax, &h, style)?;
    printout(fig, &mut ax, "histogram_plain.png",
             Labels::new("Data Values", "Frequency",
                         "Histogram, default settings"),
             style, config)
}

/// Histogram of unit area, 25 bins.
pub fn density_histogram(x: &[f64], style: &Style, config: &OutputConfig)
                         -> Result<PathBuf, Error> {
    let h = Histogram::density(x, DENSITY_BINS)?;
    debug!("density histogram area {}", h.area());
    let (fig, [[mut ax]]) = plt::subplots()?;
    draw_histogram(&mut ax, &h, style)?;
    printout(fig, &mut ax, "density_histogram.png",
             Labels::new("Data Values", "Probability",
                         "Density Histogram, 25 bins"),
             style, config)
}

fn draw_histogram(ax: &mut plt::Axes, h: &Histogram, style: &Style)
                  -> Result<(), Error> {
    ax.bar(h.left_edges(), h.heights())
        .width(h.bin_width())
        .align("edge")
        .color(style.color(0))
        .plot()
}

/// A vertical boxplot, saved, then a horizontal one, only displayed.
pub fn boxplots(x: &[f64], style: &Style, config: &OutputConfig)
                -> Result<PathBuf, Error> {
    let (fig, [[mut ax]]) = plt::subplots()?;
    ax.boxplot(x).sym("*").plot()?;
    let path = printout(fig, &mut ax, "boxplot.png",
                        Labels::new("Values", "", "Boxplot"), style, config)?;

    let (fig, [[mut ax]]) = plt::subplots()?;
    ax.boxplot(x).sym("*").horizontal().plot()?;
    ax.set_title("Boxplot, horizontal")?.set_xlabel("Values")?;
    style.apply(&mut ax)?;
    display(fig, config.show)?;
    Ok(path)
}

/// y = x² with error bars x/2.
pub fn errorbars(style: &Style, config: &OutputConfig)
                 -> Result<PathBuf, Error> {
    let (x, y, err) = sample::errorbar_data();
    let (fig, [[mut ax]]) = plt::subplots()?;
    ax.errorbar(&x, &y, &err)
        .fmt("o")
        .capsize(5.)
        .capthick(3.)
        .color(style.color(0))
        .plot()?;
    ax.set_xlim(-0.2, 4.2)?.set_ylim(-0.2, 19.)?;
    printout(fig, &mut ax, "Errorbars.png",
             Labels::new("Data Values", "Measurements", "Errorbars"),
             style, config)
}

/// One group of bars per row of `df`, one bar per column.
pub fn barplot(df: &Frame, style: &Style, presenter: &dyn Presenter)
               -> Result<Option<PathBuf>, Error> {
    let names = df.column_names();
    let offsets = grouped_bar_offsets(names.len(), BAR_GROUP_WIDTH);
    let width = BAR_GROUP_WIDTH / names.len() as f64;
    let ticks: Vec<f64> = (0 .. df.height()).map(|i| i as f64).collect();
    let (fig, [[mut ax]]) = plt::subplots()?;
    for (i, (name, offset)) in names.iter().zip(offsets).enumerate() {
        let heights = df.column(name)?;
        let x: Vec<f64> = ticks.iter().map(|t| t + offset).collect();
        ax.bar(&x, &heights)
            .width(width)
            .color(style.color(i))
            .label(name)
            .plot()?;
    }
    let tick_labels: Vec<String> =
        (0 .. df.height()).map(|i| i.to_string()).collect();
    ax.set_xticks(&ticks, &tick_labels, 90.)?
        .grid(false)?
        .legend()?;
    presenter.show_data(fig, "barplot.png", style)
}

/// `b` against `a`, marker areas proportional to `c`.
pub fn bivariate(df: &Frame, style: &Style, config: &OutputConfig)
                 -> Result<PathBuf, Error> {
    let a = df.column("a")?;
    let b = df.column("b")?;
    let sizes: Vec<f64> = df.column("c")?.iter()
        .map(|c| c * BUBBLE_SCALE).collect();
    let (fig, [[mut ax]]) = plt::subplots()?;
    ax.scatter(&a, &b).sizes(&sizes).color(style.color(0)).plot()?;
    ax.axhline(0., ZERO_LINE)?.axvline(0., ZERO_LINE)?;
    printout(fig, &mut ax, "bivariate.png", Labels::default(), style, config)
}

pub fn pie_plot(style: &Style, config: &OutputConfig)
                -> Result<PathBuf, Error> {
    let (fig, [[mut ax]]) = plt::subplots()?;
    ax.pie(&PIE_FRACTIONS)
        .explode(&PIE_EXPLODE)
        .labels(&PIE_LABELS)
        .autopct("%1.1f%%")
        .shadow()
        .startangle(90.)
        .colors(&style.palette)
        .plot()?;
    ax.axis("equal")?;
    printout(fig, &mut ax, "piePlot.png", Labels::new("", "", " "),
             style, config)
}

/// A ripple surface with its colour bar next to a wireframe, on a
/// figure twice as wide as tall.
pub fn show_3d(presenter: &dyn Presenter) -> Result<Option<PathBuf>, Error> {
    let (width, height) = plt::figaspect(0.5);
    let fig = plt::figure_sized(width, height)?;
    let mut style = Style::default();
    presenter.set_fonts(&mut style, 16.);

    let ripple = Surface::ripple();
    let mut ax = fig.add_subplot_3d(1, 2, 1)?;
    let surf = ax.plot_surface(&ripple.x, &ripple.y, &ripple.z)
        .rstride(1)
        .cstride(1)
        .cmap("GnBu")
        .linewidth(0.)
        .antialiased(false)
        .plot()?;
    ax.set_zlim(-1.01, 1.01)?;
    fig.colorbar(&surf, &ax, 0.5, 10.)?;

    let test = Surface::axes3d_test_data(0.05);
    debug!("wireframe on a {:?} grid", test.dim());
    let mut ax = fig.add_subplot_3d(1, 2, 2)?;
    ax.plot_wireframe(&test.x, &test.y, &test.z)
        .rstride(10)
        .cstride(10)
        .plot()?;

    presenter.show_data(fig, "3dGraph.png", &style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::SaveAndShow;

    #[test]
    fn bar_offsets_are_centred() {
        let o = grouped_bar_offsets(4, 0.5);
        assert_eq!(o, [-0.1875, -0.0625, 0.0625, 0.1875]);
        assert_eq!(grouped_bar_offsets(1, 0.5), [0.]);
    }

    #[test]
    fn gallery_writes_every_figure() -> Result<(), Error> {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig::default().out_dir(dir.path())
            .without_display();
        let presenter = SaveAndShow::new(config.clone());
        simple_plots(&presenter, &config)?;
        for f in ["scatterPlot.png", "histogram_plain.png",
                  "density_histogram.png", "boxplot.png", "Errorbars.png",
                  "barplot.png", "bivariate.png", "piePlot.png"] {
            assert!(dir.path().join(f).is_file(), "{f} missing");
        }
        Ok(())
    }

    #[test]
    fn surfaces_are_saved() -> Result<(), Error> {
        let dir = tempfile::tempdir().unwrap();
        let presenter = SaveAndShow::new(
            OutputConfig::default().out_dir(dir.path()).without_display());
        let path = show_3d(&presenter)?;
        assert_eq!(path, Some(dir.path().join("3dGraph.png")));
        Ok(())
    }
}
