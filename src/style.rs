//! Cosmetic settings handed explicitly to every rendering call.

use crate::{plt::{Axes, Figure}, Error};

/// Seaborn's "muted" colour palette.
pub const MUTED: [&str; 10] = [
    "#4878D0", "#EE854A", "#6ACC64", "#D65F5F", "#956CB4",
    "#8C613C", "#DC7EC0", "#797979", "#D5BB67", "#82C6E2",
];

/// Font size and colours of a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Size in points of titles, axis labels and tick labels.
    pub font_size: f64,
    pub palette: Vec<String>,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            font_size: 12.,
            palette: MUTED.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Style {
    #[must_use]
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// The `i`-th colour of the palette, cycling.  Matplotlib's first
    /// cycle colour for an empty palette.
    pub fn color(&self, i: usize) -> &str {
        self.palette.get(i % self.palette.len().max(1))
            .map_or("C0", |c| c.as_str())
    }

    /// Apply the fonts to `ax`.  Call it once the texts are set.
    pub fn apply(&self, ax: &mut Axes) -> Result<(), Error> {
        ax.set_font_size(self.font_size)?;
        Ok(())
    }

    /// Apply the fonts to every axes of `fig`.
    pub fn apply_figure(&self, fig: &Figure) -> Result<(), Error> {
        for mut ax in fig.axes()? {
            self.apply(&mut ax)?;
        }
        Ok(())
    }
}
