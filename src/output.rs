//! Saving and displaying finished figures.
//!
//! [`printout`] finalizes the statistical figures of the gallery.  The
//! [`Presenter`] trait is the optional styling collaborator: it scales
//! fonts and persists named figures; [`PlainDisplay`] is its fallback,
//! which leaves the fonts alone and only displays.

use std::{env, path::{Path, PathBuf}};
use log::{debug, info};

use crate::{
    plt::{self, Axes, Figure, LineStyle},
    style::Style,
    Error,
};

/// Dashed grey reference line.
pub const ZERO_LINE: LineStyle<'static> =
    LineStyle { linestyle: "--", color: "#999999" };

/// Where and how figures are written.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Directory receiving the files.  It is not created.
    pub out_dir: PathBuf,
    pub dpi: f64,
    /// Whether to open a window after saving.
    pub show: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig { out_dir: PathBuf::from("."), dpi: Self::DPI, show: true }
    }
}

impl OutputConfig {
    pub const DPI: f64 = 200.;
    /// Environment variable overriding [`OutputConfig::out_dir`].
    pub const OUT_DIR_VAR: &'static str = "GALLERY_OUT_DIR";
    /// Environment variable disabling the display when set to anything
    /// but "" or "0".
    pub const NO_SHOW_VAR: &'static str = "GALLERY_NO_SHOW";

    /// Default configuration amended by the environment.
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = OutputConfig::default();
        if let Some(dir) = var(Self::OUT_DIR_VAR).filter(|d| !d.is_empty()) {
            config.out_dir = PathBuf::from(dir);
        }
        if let Some(v) = var(Self::NO_SHOW_VAR) {
            config.show = v.is_empty() || v == "0";
        }
        config
    }

    #[must_use]
    pub fn out_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.out_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Save only, never open a window.
    #[must_use]
    pub fn without_display(mut self) -> Self {
        self.show = false;
        self
    }

    /// Path of `out_file` inside the output directory.
    pub fn path(&self, out_file: &str) -> PathBuf {
        self.out_dir.join(out_file)
    }
}

/// Texts of a figure; empty strings clear them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Labels<'a> {
    pub xlabel: &'a str,
    pub ylabel: &'a str,
    pub title: &'a str,
}

impl<'a> Labels<'a> {
    pub fn new(xlabel: &'a str, ylabel: &'a str, title: &'a str) -> Self {
        Labels { xlabel, ylabel, title }
    }
}

/// Write `fig` to `<out_dir>/<out_file>` and report both names.
pub fn save(fig: &Figure, out_file: &str, config: &OutputConfig)
            -> Result<PathBuf, Error> {
    let path = config.path(out_file);
    fig.save().dpi(config.dpi).to_file(&path)?;
    println!("OutDir: {}", config.out_dir.display());
    println!("Figure saved to {}", out_file);
    info!("wrote {} at {} dpi", path.display(), config.dpi);
    Ok(path)
}

/// Display `fig` if the configuration asks for it, then release it.
pub fn display(fig: Figure, show: bool) -> Result<(), Error> {
    if show {
        plt::show()?;
    } else {
        debug!("display disabled");
    }
    fig.close()
}

/// Label `ax`, draw a dashed line at y = 0 across the current x-range,
/// save the figure, display it and close it.
pub fn printout(
    fig: Figure, ax: &mut Axes, out_file: &str, labels: Labels,
    style: &Style, config: &OutputConfig,
) -> Result<PathBuf, Error> {
    ax.set_xlabel(labels.xlabel)?
        .set_ylabel(labels.ylabel)?
        .set_title(labels.title)?;
    let (left, right) = ax.get_xlim()?;
    ax.hlines(0., left, right, ZERO_LINE)?
        .set_xlim(left, right)?;
    style.apply(ax)?;
    let path = save(&fig, out_file, config)?;
    display(fig, config.show)?;
    Ok(path)
}

/// Styling collaborator of the demos.
pub trait Presenter {
    /// Scale the fonts of `style` to `size` points.
    fn set_fonts(&self, style: &mut Style, size: f64);

    /// Show `fig`, known as `out_file`, and close it.  Return the
    /// path if the figure was also written to disk.
    fn show_data(&self, fig: Figure, out_file: &str, style: &Style)
                 -> Result<Option<PathBuf>, Error>;
}

/// Display-only presenter, used when no collaborator is supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainDisplay {
    pub show: bool,
}

impl Default for PlainDisplay {
    fn default() -> Self {
        PlainDisplay { show: true }
    }
}

static PLAIN: PlainDisplay = PlainDisplay { show: true };

impl Presenter for PlainDisplay {
    fn set_fonts(&self, _style: &mut Style, _size: f64) {}

    fn show_data(&self, fig: Figure, out_file: &str, _style: &Style)
                 -> Result<Option<PathBuf>, Error> {
        debug!("{} is displayed but not saved", out_file);
        display(fig, self.show)?;
        Ok(None)
    }
}

/// Presenter scaling the fonts, saving, then displaying.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SaveAndShow {
    pub config: OutputConfig,
}

impl SaveAndShow {
    pub fn new(config: OutputConfig) -> Self {
        SaveAndShow { config }
    }
}

impl Presenter for SaveAndShow {
    fn set_fonts(&self, style: &mut Style, size: f64) {
        style.font_size = size;
    }

    fn show_data(&self, fig: Figure, out_file: &str, style: &Style)
                 -> Result<Option<PathBuf>, Error> {
        style.apply_figure(&fig)?;
        let path = save(&fig, out_file, &self.config)?;
        display(fig, self.config.show)?;
        Ok(Some(path))
    }
}

/// The supplied presenter, or the display-only fallback.
pub fn presenter_or_plain(p: Option<&dyn Presenter>) -> &dyn Presenter {
    p.unwrap_or(&PLAIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_vars() {
        let c = OutputConfig::from_vars(|_| None);
        assert_eq!(c, OutputConfig::default());
        assert_eq!(c.dpi, 200.);
        assert!(c.show);
        let c = OutputConfig::from_vars(|name| match name {
            OutputConfig::OUT_DIR_VAR => Some("figs".into()),
            OutputConfig::NO_SHOW_VAR => Some("1".into()),
            _ => None,
        });
        assert_eq!(c.path("a.png"), Path::new("figs").join("a.png"));
        assert!(!c.show);
        let c = OutputConfig::from_vars(|name| {
            (name == OutputConfig::NO_SHOW_VAR).then(|| "0".to_string())
        });
        assert!(c.show);
    }

    #[test]
    fn fallback_ignores_fonts() {
        let mut style = Style::default();
        presenter_or_plain(None).set_fonts(&mut style, 30.);
        assert_eq!(style.font_size, 12.);
        let saver = SaveAndShow::default();
        presenter_or_plain(Some(&saver)).set_fonts(&mut style, 30.);
        assert_eq!(style.font_size, 30.);
    }

    #[test]
    fn printout_writes_the_file() -> Result<(), Error> {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig::default().out_dir(dir.path())
            .without_display();
        let (fig, [[mut ax]]) = plt::subplots()?;
        ax.scatter(&[0., 1., 2.], &[-1., 0., 1.]).plot()?;
        let path = printout(fig, &mut ax, "test.png",
                            Labels::new("x", "y", "title"),
                            &Style::default(), &config)?;
        assert_eq!(path, dir.path().join("test.png"));
        assert!(path.is_file());
        Ok(())
    }

    #[test]
    fn printout_into_missing_dir_fails() -> Result<(), Error> {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig::default()
            .out_dir(dir.path().join("missing")).without_display();
        let (fig, [[mut ax]]) = plt::subplots()?;
        let r = printout(fig, &mut ax, "test.png", Labels::default(),
                         &Style::default(), &config);
        assert!(matches!(r, Err(Error::FileNotFoundError)));
        Ok(())
    }

    #[test]
    fn save_and_show_persists() -> Result<(), Error> {
        let dir = tempfile::tempdir().unwrap();
        let saver = SaveAndShow::new(
            OutputConfig::default().out_dir(dir.path()).without_display());
        let (fig, [[mut ax]]) = plt::subplots()?;
        ax.bar(&[0., 1.], &[2., 3.]).plot()?;
        let path = saver.show_data(fig, "bars.png", &Style::default())?;
        assert_eq!(path, Some(dir.path().join("bars.png")));
        assert!(dir.path().join("bars.png").is_file());

        let (fig, _) = plt::subplots::<1, 1>()?;
        let plain = PlainDisplay { show: false };
        assert_eq!(plain.show_data(fig, "none.png", &Style::default())?, None);
        assert!(!dir.path().join("none.png").exists());
        Ok(())
    }
}
