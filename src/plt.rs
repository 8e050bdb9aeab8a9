//! Handles over the explicit interface of the [Matplotlib][] Python
//! visualization library.
//!
//! The handles stay close to Matplotlib's object oriented API while
//! keeping a Rust flavor: a plot is described by a builder started on an
//! [`Axes`] and drawn by the final `.plot()`.
//!
//! ```no_run
//! use statplot_gallery::plt;
//! let (fig, [[mut ax]]) = plt::subplots()?;
//! ax.scatter(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).plot()?;
//! fig.save().dpi(200.).to_file("target/scatter.png")?;
//! # Ok::<(), statplot_gallery::Error>(())
//! ```
//!
//! [Matplotlib]: https://matplotlib.org/

use std::path::Path;
use lazy_static::lazy_static;
use ndarray::Array2;
use numpy::{Element, PyArray1, ToPyArray};
use pyo3::{
    prelude::*,
    intern,
    exceptions::{PyFileNotFoundError, PyPermissionError},
    types::PyDict,
};

use crate::Error;

macro_rules! getattr {
    ($py: ident, $lib: expr, $f: literal) => {
        $lib.getattr($py, intern!($py, $f))
    };
}

macro_rules! meth {
    ($obj: expr, $m: ident, $py: ident -> $args: expr) => {
        Python::with_gil(|py| {
            let $py = py;
            $obj.call_method1(py, intern!(py, stringify!($m)), $args)
        })
    };
    ($obj: expr, $m: ident, $args: expr) => {
        Python::with_gil(|py| {
            $obj.call_method1(py, intern!(py, stringify!($m)), $args)
        })
    };
}

/// Build a keyword dictionary.  Must be used where `?` converts a `PyErr`.
macro_rules! kwargs {
    ($py: ident; $($k: literal => $v: expr),* $(,)?) => {{
        let kwargs = PyDict::new($py);
        $( kwargs.set_item($k, $v)?; )*
        kwargs
    }};
}

/// Import and return a handle to the module `$m`.
macro_rules! pyimport { ($m: literal) => {
    Python::with_gil(|py|
        PyModule::import(py, intern!(py, $m)).map(|m| m.into()))
}}

lazy_static! {
    static ref PYPLOT: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.pyplot")
    };
    // Importing registers the "3d" projection on older Matplotlib.
    static ref MPLOT3D: Result<Py<PyModule>, PyErr> = {
        pyimport!("mpl_toolkits.mplot3d")
    };
}

/// Return a handle to the module `$m`.
/// ⚠ This may try to lock Python's GIL.  Make sure it is executed
/// outside a call to `Python::with_gil`.
macro_rules! pymod { ($m: ident) => {
    $m.as_ref().map_err(|_| Error::NoMatplotlib)
}}

/// Insert `key` only when a value was chosen, leaving Matplotlib's
/// default otherwise.
fn set_opt<V: ToPyObject>(
    kwargs: &PyDict, key: &str, v: Option<V>) -> PyResult<()> {
    match v {
        Some(v) => kwargs.set_item(key, v),
        None => Ok(()),
    }
}

/// Trait expressing that `Self` can be converted to a 1-D numpy.ndarray.
pub trait Data {
    fn to_numpy(&self, py: Python) -> PyObject;
}

impl<T: AsRef<[f64]> + ?Sized> Data for T {
    fn to_numpy(&self, py: Python) -> PyObject {
        PyArray1::from_slice_bound(py, self.as_ref()).into_any().unbind()
    }
}

/// Trait expressing that `Self` can be converted to a 2-D numpy.ndarray
/// (images, meshgrids).
pub trait Grid {
    fn to_numpy(&self, py: Python) -> PyObject;
}

impl<A: Element> Grid for Array2<A> {
    fn to_numpy(&self, py: Python) -> PyObject {
        self.to_pyarray_bound(py).into_any().unbind()
    }
}

#[derive(Debug, Clone)]
pub struct Axes {
    ax: PyObject,
}

/// The top level container for all the plot elements.
#[derive(Debug)]
pub struct Figure {
    fig: PyObject, // instance of matplotlib.figure.Figure
}

/// Something drawn with a colormap, usable by [`Figure::colorbar`].
#[derive(Debug)]
pub struct Mappable {
    obj: PyObject,
}

#[inline(always)]
fn grid<const R: usize, const C: usize, U>(
    f: impl Fn(usize, usize) -> U) -> [[U; C]; R] {
    let mut r = 0;
    [(); R].map(|_| {
        let mut c = 0;
        let row = [(); C].map(|_| {
            let y = f(r, c);
            c += 1;
            y });
        r += 1;
        row })
}

/// Size `(width, height)` in inches of a figure with the aspect ratio
/// `ratio` = height / width, based on Matplotlib's default height of
/// 4.8 inches.
pub fn figaspect(ratio: f64) -> (f64, f64) {
    const DEFAULT_HEIGHT: f64 = 4.8;
    const MIN_SIZE: f64 = 4.0;
    const MAX_SIZE: f64 = 16.0;
    let mut h = DEFAULT_HEIGHT;
    let mut w = h / ratio;
    // Shrink or grow uniformly so that both sides fit the bounds.
    let grow = (MIN_SIZE / w).max(MIN_SIZE / h).max(1.);
    w *= grow;
    h *= grow;
    let shrink = (w / MAX_SIZE).max(h / MAX_SIZE).max(1.);
    ((w / shrink).clamp(MIN_SIZE, MAX_SIZE),
     (h / shrink).clamp(MIN_SIZE, MAX_SIZE))
}

impl Figure {
    /// Create `R`×`C` axes on the figure.
    ///
    /// Return an error if Matplotlib is not present on the system.
    pub fn subplots<const R: usize, const C: usize>(
        &self) -> Result<[[Axes; C]; R], Error> {
        Python::with_gil(|py| {
            let kwargs = kwargs!(py; "squeeze" => false);
            let axs = self.fig
                .call_method(py, intern!(py, "subplots"), (R, C), Some(kwargs))?;
            let flat: Vec<PyObject> = axs
                .call_method0(py, intern!(py, "ravel"))?
                .call_method0(py, intern!(py, "tolist"))?
                .extract(py)?;
            if flat.len() != R * C {
                return Err(Error::Shape(format!(
                    "expected {}×{} axes, got {}", R, C, flat.len())));
            }
            Ok(grid(|r, c| Axes { ax: flat[r * C + c].clone_ref(py) }))
        })
    }

    /// Add a 3-D axes at position `index` (1-based) of a
    /// `nrows`×`ncols` layout.
    pub fn add_subplot_3d(
        &self, nrows: usize, ncols: usize, index: usize
    ) -> Result<Axes, Error> {
        pymod!(MPLOT3D)?;
        Python::with_gil(|py| {
            let kwargs = kwargs!(py; "projection" => "3d");
            let ax = self.fig.call_method(
                py, intern!(py, "add_subplot"), (nrows, ncols, index),
                Some(kwargs))?;
            Ok(Axes { ax })
        })
    }

    /// All the axes of the figure, in creation order.
    pub fn axes(&self) -> Result<Vec<Axes>, Error> {
        Python::with_gil(|py| {
            let axs: Vec<PyObject> = getattr!(py, self.fig, "axes")?
                .extract(py)?;
            Ok(axs.into_iter().map(|ax| Axes { ax }).collect())
        })
    }

    /// Attach a colour bar describing `mappable`, drawn next to `ax`.
    pub fn colorbar(
        &self, mappable: &Mappable, ax: &Axes, shrink: f64, aspect: f64
    ) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = kwargs!(py;
                "ax" => ax.ax.clone_ref(py),
                "shrink" => shrink,
                "aspect" => aspect);
            self.fig.call_method(py, intern!(py, "colorbar"),
                                 (mappable.obj.clone_ref(py),), Some(kwargs))?;
            Ok(())
        })
    }

    /// Reduce the padding between and around the subplots.
    pub fn tight_layout(&self) -> Result<(), Error> {
        meth!(self.fig, tight_layout, ())?;
        Ok(())
    }

    /// Release the figure held by pyplot.
    pub fn close(self) -> Result<(), Error> {
        let pyplot = pymod!(PYPLOT)?;
        Python::with_gil(|py| {
            getattr!(py, pyplot, "close")?.call1(py, (self.fig,))?;
            Ok(())
        })
    }

    pub fn save(&self) -> Savefig {
        Savefig { fig: self.fig.clone(), dpi: None }
    }
}

pub struct Savefig {
    fig: PyObject,
    dpi: Option<f64>,
}

impl Savefig {
    pub fn dpi(&mut self, dpi: f64) -> &mut Self {
        if dpi > 0. {
            self.dpi = Some(dpi);
        } else {
            self.dpi = None;
        }
        self
    }

    /// Write the figure to `path`; the format follows the extension.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new(py);
            set_opt(kwargs, "dpi", self.dpi)?;
            self.fig.call_method(
                py, intern!(py, "savefig"),
                (path.as_ref(),), Some(kwargs)
            ).map_err(|e| {
                    if e.is_instance_of::<PyFileNotFoundError>(py) {
                        Error::FileNotFoundError
                    } else if e.is_instance_of::<PyPermissionError>(py) {
                        Error::PermissionError
                    } else {
                        Error::Python(e)
                    }
                })
        })?;
        Ok(())
    }
}


/// Create a new pyplot figure with Matplotlib's default size.
pub fn figure() -> Result<Figure, Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let fig = getattr!(py, pyplot, "figure")?.call0(py)?;
        Ok(Figure { fig })
    })
}

/// Create a new pyplot figure of `width`×`height` inches.
pub fn figure_sized(width: f64, height: f64) -> Result<Figure, Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let kwargs = kwargs!(py; "figsize" => (width, height));
        let fig = getattr!(py, pyplot, "figure")?
            .call(py, (), Some(kwargs))?;
        Ok(Figure { fig })
    })
}

pub fn subplots<const R: usize, const C: usize>(
) -> Result<(Figure, [[Axes; C]; R]), Error> {
    let fig = figure()?;
    let ax = fig.subplots()?;
    Ok((fig, ax))
}

/// Display all open figures.
pub fn show() -> Result<(), Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        getattr!(py, pyplot, "show")?.call0(py)?;
        Ok(())
    })
}


/// Style of a straight reference line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle<'a> {
    pub linestyle: &'a str,
    pub color: &'a str,
}

impl Axes {
    /// Scatter plot of `y` versus `x`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use statplot_gallery::plt;
    /// let (fig, [[mut ax]]) = plt::subplots()?;
    /// ax.scatter(&[1., 2., 3.], &[3., 1., 2.]).sizes(&[10., 40., 90.]).plot()?;
    /// fig.save().to_file("target/Scatter_plot.pdf")?;
    /// # Ok::<(), statplot_gallery::Error>(())
    /// ```
    // FIXME: Do we want to check that `x` and `y` have the same
    // dimension?  Better error message?
    #[must_use]
    pub fn scatter<'a, D>(&'a mut self, x: &'a D, y: &'a D) -> Scatter<'a, D>
    where D: Data + ?Sized {
        Scatter { axes: self, options: PlotOptions::new(),
                  x, y, sizes: None }
    }

    /// Bars of the given `heights` whose position is `x`.
    #[must_use]
    pub fn bar<'a, D>(&'a mut self, x: &'a D, heights: &'a D) -> Bar<'a, D>
    where D: Data + ?Sized {
        Bar { axes: self, options: PlotOptions::new(),
              x, heights, width: None, align: None, edgecolor: None }
    }

    /// Box-and-whisker plot of `data`.
    #[must_use]
    pub fn boxplot<'a, D>(&'a mut self, data: &'a D) -> BoxPlot<'a, D>
    where D: Data + ?Sized {
        BoxPlot { axes: self, data, sym: None, vert: true }
    }

    /// `y` versus `x` with vertical error bars of half-length `yerr`.
    #[must_use]
    pub fn errorbar<'a, D>(
        &'a mut self, x: &'a D, y: &'a D, yerr: &'a D) -> ErrorBar<'a, D>
    where D: Data + ?Sized {
        ErrorBar { axes: self, options: PlotOptions::new(),
                   x, y, yerr, capsize: None, capthick: None }
    }

    /// Pie chart of the wedge sizes `x`.
    #[must_use]
    pub fn pie<'a>(&'a mut self, x: &'a [f64]) -> Pie<'a> {
        Pie { axes: self, x, explode: None, labels: None, colors: None,
              autopct: None, shadow: false, startangle: None }
    }

    /// 3-D surface through the grid points (`x`, `y`, `z`).  The axes
    /// must have been created with [`Figure::add_subplot_3d`].
    #[must_use]
    pub fn plot_surface<'a>(
        &'a mut self, x: &'a Array2<f64>, y: &'a Array2<f64>,
        z: &'a Array2<f64>) -> SurfacePlot<'a> {
        SurfacePlot { axes: self, options: PlotOptions::new(),
                      x, y, z, rstride: None, cstride: None, cmap: None }
    }

    /// 3-D wireframe through the grid points (`x`, `y`, `z`).
    #[must_use]
    pub fn plot_wireframe<'a>(
        &'a mut self, x: &'a Array2<f64>, y: &'a Array2<f64>,
        z: &'a Array2<f64>) -> Wireframe<'a> {
        Wireframe { axes: self, options: PlotOptions::new(),
                    x, y, z, rstride: None, cstride: None }
    }

    /// Display `img` as an image (one value per pixel).
    #[must_use]
    pub fn imshow<'a, G>(&'a mut self, img: &'a G) -> ImShow<'a, G>
    where G: Grid {
        ImShow { axes: self, img, cmap: None }
    }

    pub fn set_title(&mut self, v: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_title, (v,))?;
        Ok(self)
    }

    pub fn set_xlabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_xlabel, (label,))?;
        Ok(self)
    }

    pub fn set_ylabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_ylabel, (label,))?;
        Ok(self)
    }

    pub fn set_xlim(&mut self, left: f64, right: f64)
                    -> Result<&mut Self, Error> {
        meth!(self.ax, set_xlim, (left, right))?;
        Ok(self)
    }

    pub fn set_ylim(&mut self, bottom: f64, top: f64)
                    -> Result<&mut Self, Error> {
        meth!(self.ax, set_ylim, (bottom, top))?;
        Ok(self)
    }

    /// Limits of the z-axis (3-D axes only).
    pub fn set_zlim(&mut self, bottom: f64, top: f64)
                    -> Result<&mut Self, Error> {
        meth!(self.ax, set_zlim, (bottom, top))?;
        Ok(self)
    }

    /// Current `(left, right)` limits of the x-axis.
    pub fn get_xlim(&self) -> Result<(f64, f64), Error> {
        Python::with_gil(|py| {
            let lim = self.ax.call_method0(py, intern!(py, "get_xlim"))?;
            Ok(lim.extract(py)?)
        })
    }

    /// Tick positions of the x-axis and their labels.
    pub fn set_xticks<D>(&mut self, ticks: &D, labels: &[String],
                         rotation: f64) -> Result<&mut Self, Error>
    where D: Data + ?Sized {
        Python::with_gil(|py| {
            let kwargs = kwargs!(py; "rotation" => rotation);
            self.ax.call_method(py, intern!(py, "set_xticks"),
                                (ticks.to_numpy(py), labels.to_vec()),
                                Some(kwargs))?;
            Ok::<_, PyErr>(())
        })?;
        Ok(self)
    }

    /// Horizontal line at `y` from `xmin` to `xmax` (data coordinates).
    pub fn hlines(&mut self, y: f64, xmin: f64, xmax: f64,
                  style: LineStyle) -> Result<&mut Self, Error> {
        Python::with_gil(|py| {
            let kwargs = kwargs!(py;
                "linestyles" => style.linestyle,
                "colors" => style.color);
            self.ax.call_method(py, intern!(py, "hlines"), (y, xmin, xmax),
                                Some(kwargs))?;
            Ok::<_, PyErr>(())
        })?;
        Ok(self)
    }

    /// Horizontal line at `y` spanning the whole axes.
    pub fn axhline(&mut self, y: f64, style: LineStyle)
                   -> Result<&mut Self, Error> {
        Python::with_gil(|py| {
            let kwargs = kwargs!(py;
                "ls" => style.linestyle,
                "color" => style.color);
            self.ax.call_method(py, intern!(py, "axhline"), (y,),
                                Some(kwargs))?;
            Ok::<_, PyErr>(())
        })?;
        Ok(self)
    }

    /// Vertical line at `x` spanning the whole axes.
    pub fn axvline(&mut self, x: f64, style: LineStyle)
                   -> Result<&mut Self, Error> {
        Python::with_gil(|py| {
            let kwargs = kwargs!(py;
                "ls" => style.linestyle,
                "color" => style.color);
            self.ax.call_method(py, intern!(py, "axvline"), (x,),
                                Some(kwargs))?;
            Ok::<_, PyErr>(())
        })?;
        Ok(self)
    }

    /// Convenience for Matplotlib's `axis` with an option string such
    /// as "equal", "off" or "tight".
    pub fn axis(&mut self, option: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, axis, (option,))?;
        Ok(self)
    }

    /// Hide both axes: ticks, tick labels and axis labels.
    pub fn hide_axes(&mut self) -> Result<&mut Self, Error> {
        Python::with_gil(|py| {
            for axis in [intern!(py, "xaxis"), intern!(py, "yaxis")] {
                self.ax.getattr(py, axis)?
                    .call_method1(py, intern!(py, "set_visible"), (false,))?;
            }
            Ok::<_, PyErr>(())
        })?;
        Ok(self)
    }

    pub fn grid(&mut self, visible: bool) -> Result<&mut Self, Error> {
        meth!(self.ax, grid, (visible,))?;
        Ok(self)
    }

    pub fn legend(&mut self) -> Result<&mut Self, Error> {
        meth!(self.ax, legend, ())?;
        Ok(self)
    }

    /// Font size of the title, the axis labels and the tick labels.
    /// Titles set afterwards get Matplotlib's default size again.
    pub fn set_font_size(&mut self, size: f64) -> Result<&mut Self, Error> {
        Python::with_gil(|py| {
            getattr!(py, self.ax, "title")?
                .call_method1(py, intern!(py, "set_fontsize"), (size,))?;
            for axis in [intern!(py, "xaxis"), intern!(py, "yaxis")] {
                getattr!(py, self.ax.getattr(py, axis)?, "label")?
                    .call_method1(py, intern!(py, "set_fontsize"), (size,))?;
            }
            let kwargs = kwargs!(py; "labelsize" => size);
            self.ax.call_method(py, intern!(py, "tick_params"), (),
                                Some(kwargs))?;
            Ok::<_, PyErr>(())
        })?;
        Ok(self)
    }
}

#[derive(Clone)]
struct PlotOptions<'a> {
    fmt: &'a str,
    antialiased: Option<bool>,
    label: &'a str,
    linewidth: Option<f64>,
    color: Option<&'a str>,
}

impl<'a> PlotOptions<'a> {
    fn new() -> PlotOptions<'static> {
        PlotOptions { fmt: "", antialiased: None, label: "",
                      linewidth: None, color: None }
    }

    fn kwargs<'py>(&self, py: Python<'py>) -> PyResult<&'py PyDict> {
        let kwargs = PyDict::new(py);
        set_opt(kwargs, "antialiased", self.antialiased)?;
        if !self.label.is_empty() {
            kwargs.set_item("label", self.label)?
        }
        set_opt(kwargs, "linewidth", self.linewidth)?;
        set_opt(kwargs, "color", self.color)?;
        Ok(kwargs)
    }
}

/// Declare methods to set the options assuming `self.options` exists.
macro_rules! set_plotoptions { () => {
    #[must_use]
    pub fn antialiased(mut self, b: bool) -> Self {
        self.options.antialiased = Some(b);
        self
    }

    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.options.label = label;
        self
    }

    #[must_use]
    pub fn linewidth(mut self, w: f64) -> Self {
        self.options.linewidth = Some(w);
        self
    }

    /// One colour for all the elements.
    #[must_use]
    pub fn color(mut self, color: &'a str) -> Self {
        self.options.color = Some(color);
        self
    }
}}

pub struct Scatter<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    options: PlotOptions<'a>,
    x: &'a D,
    y: &'a D,
    sizes: Option<&'a D>,
}

impl<'a, D> Scatter<'a, D>
where D: Data + ?Sized {
    set_plotoptions!();

    /// Marker areas (points²), one per data point.
    #[must_use]
    pub fn sizes(mut self, s: &'a D) -> Self {
        self.sizes = Some(s);
        self
    }

    pub fn plot(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = self.options.kwargs(py)?;
            set_opt(kwargs, "s", self.sizes.map(|s| s.to_numpy(py)))?;
            self.axes.ax.call_method(
                py, intern!(py, "scatter"),
                (self.x.to_numpy(py), self.y.to_numpy(py)), Some(kwargs))?;
            Ok(())
        })
    }
}

pub struct Bar<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    options: PlotOptions<'a>,
    x: &'a D,
    heights: &'a D,
    width: Option<f64>,
    align: Option<&'a str>,
    edgecolor: Option<&'a str>,
}

impl<'a, D> Bar<'a, D>
where D: Data + ?Sized {
    set_plotoptions!();

    #[must_use]
    pub fn width(mut self, w: f64) -> Self {
        self.width = Some(w);
        self
    }

    /// Place `x` at the "center" (default) or the left "edge" of bars.
    #[must_use]
    pub fn align(mut self, align: &'a str) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn edgecolor(mut self, color: &'a str) -> Self {
        self.edgecolor = Some(color);
        self
    }

    pub fn plot(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = self.options.kwargs(py)?;
            set_opt(kwargs, "width", self.width)?;
            set_opt(kwargs, "align", self.align)?;
            set_opt(kwargs, "edgecolor", self.edgecolor)?;
            self.axes.ax.call_method(
                py, intern!(py, "bar"),
                (self.x.to_numpy(py), self.heights.to_numpy(py)),
                Some(kwargs))?;
            Ok(())
        })
    }
}

pub struct BoxPlot<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    data: &'a D,
    sym: Option<&'a str>,
    vert: bool,
}

impl<'a, D> BoxPlot<'a, D>
where D: Data + ?Sized {
    /// Marker of the outliers ("fliers").
    #[must_use]
    pub fn sym(mut self, sym: &'a str) -> Self {
        self.sym = Some(sym);
        self
    }

    /// Draw the box along the x-axis.
    #[must_use]
    pub fn horizontal(mut self) -> Self {
        self.vert = false;
        self
    }

    pub fn plot(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = kwargs!(py; "vert" => self.vert);
            set_opt(kwargs, "sym", self.sym)?;
            self.axes.ax.call_method(
                py, intern!(py, "boxplot"), (self.data.to_numpy(py),),
                Some(kwargs))?;
            Ok(())
        })
    }
}

pub struct ErrorBar<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    options: PlotOptions<'a>,
    x: &'a D,
    y: &'a D,
    yerr: &'a D,
    capsize: Option<f64>,
    capthick: Option<f64>,
}

impl<'a, D> ErrorBar<'a, D>
where D: Data + ?Sized {
    set_plotoptions!();

    /// Marker and line format, e.g. "o" for circles without lines.
    #[must_use]
    pub fn fmt(mut self, fmt: &'a str) -> Self {
        self.options.fmt = fmt;
        self
    }

    /// Length of the error bar caps in points.
    #[must_use]
    pub fn capsize(mut self, size: f64) -> Self {
        self.capsize = Some(size);
        self
    }

    #[must_use]
    pub fn capthick(mut self, thickness: f64) -> Self {
        self.capthick = Some(thickness);
        self
    }

    pub fn plot(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = self.options.kwargs(py)?;
            kwargs.set_item("yerr", self.yerr.to_numpy(py))?;
            kwargs.set_item("fmt", self.options.fmt)?;
            set_opt(kwargs, "capsize", self.capsize)?;
            set_opt(kwargs, "capthick", self.capthick)?;
            self.axes.ax.call_method(
                py, intern!(py, "errorbar"),
                (self.x.to_numpy(py), self.y.to_numpy(py)), Some(kwargs))?;
            Ok(())
        })
    }
}

pub struct Pie<'a> {
    axes: &'a Axes,
    x: &'a [f64],
    explode: Option<&'a [f64]>,
    labels: Option<&'a [&'a str]>,
    colors: Option<&'a [String]>,
    autopct: Option<&'a str>,
    shadow: bool,
    startangle: Option<f64>,
}

impl<'a> Pie<'a> {
    /// Radial offset of each wedge, as a fraction of the radius.
    #[must_use]
    pub fn explode(mut self, offsets: &'a [f64]) -> Self {
        self.explode = Some(offsets);
        self
    }

    #[must_use]
    pub fn labels(mut self, labels: &'a [&'a str]) -> Self {
        self.labels = Some(labels);
        self
    }

    #[must_use]
    pub fn colors(mut self, colors: &'a [String]) -> Self {
        self.colors = Some(colors);
        self
    }

    /// printf-style format of the percentage written in each wedge.
    #[must_use]
    pub fn autopct(mut self, fmt: &'a str) -> Self {
        self.autopct = Some(fmt);
        self
    }

    #[must_use]
    pub fn shadow(mut self) -> Self {
        self.shadow = true;
        self
    }

    /// Counter-clockwise rotation (degrees) of the first wedge start.
    #[must_use]
    pub fn startangle(mut self, angle: f64) -> Self {
        self.startangle = Some(angle);
        self
    }

    pub fn plot(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = kwargs!(py; "shadow" => self.shadow);
            set_opt(kwargs, "explode", self.explode.map(|e| e.to_vec()))?;
            set_opt(kwargs, "labels", self.labels.map(|l| l.to_vec()))?;
            set_opt(kwargs, "colors", self.colors.map(|c| c.to_vec()))?;
            set_opt(kwargs, "autopct", self.autopct)?;
            set_opt(kwargs, "startangle", self.startangle)?;
            self.axes.ax.call_method(
                py, intern!(py, "pie"), (self.x.to_vec(),), Some(kwargs))?;
            Ok(())
        })
    }
}

/// Declare the row and column stride setters of 3-D plots.
macro_rules! set_strides { () => {
    /// Downsampling stride along the rows.
    #[must_use]
    pub fn rstride(mut self, stride: usize) -> Self {
        self.rstride = Some(stride);
        self
    }

    /// Downsampling stride along the columns.
    #[must_use]
    pub fn cstride(mut self, stride: usize) -> Self {
        self.cstride = Some(stride);
        self
    }
}}

pub struct SurfacePlot<'a> {
    axes: &'a Axes,
    options: PlotOptions<'a>,
    x: &'a Array2<f64>,
    y: &'a Array2<f64>,
    z: &'a Array2<f64>,
    rstride: Option<usize>,
    cstride: Option<usize>,
    cmap: Option<&'a str>,
}

impl<'a> SurfacePlot<'a> {
    set_plotoptions!();
    set_strides!();

    /// Name of a Matplotlib colormap, e.g. "GnBu" or "viridis".
    #[must_use]
    pub fn cmap(mut self, cmap: &'a str) -> Self {
        self.cmap = Some(cmap);
        self
    }

    /// Draw the surface and return it for [`Figure::colorbar`].
    pub fn plot(self) -> Result<Mappable, Error> {
        Python::with_gil(|py| {
            let kwargs = self.options.kwargs(py)?;
            set_opt(kwargs, "rstride", self.rstride)?;
            set_opt(kwargs, "cstride", self.cstride)?;
            set_opt(kwargs, "cmap", self.cmap)?;
            let obj = self.axes.ax.call_method(
                py, intern!(py, "plot_surface"),
                (self.x.to_numpy(py), self.y.to_numpy(py),
                 self.z.to_numpy(py)),
                Some(kwargs))?;
            Ok(Mappable { obj })
        })
    }
}

pub struct Wireframe<'a> {
    axes: &'a Axes,
    options: PlotOptions<'a>,
    x: &'a Array2<f64>,
    y: &'a Array2<f64>,
    z: &'a Array2<f64>,
    rstride: Option<usize>,
    cstride: Option<usize>,
}

impl<'a> Wireframe<'a> {
    set_plotoptions!();
    set_strides!();

    pub fn plot(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = self.options.kwargs(py)?;
            set_opt(kwargs, "rstride", self.rstride)?;
            set_opt(kwargs, "cstride", self.cstride)?;
            self.axes.ax.call_method(
                py, intern!(py, "plot_wireframe"),
                (self.x.to_numpy(py), self.y.to_numpy(py),
                 self.z.to_numpy(py)),
                Some(kwargs))?;
            Ok(())
        })
    }
}

pub struct ImShow<'a, G> {
    axes: &'a Axes,
    img: &'a G,
    cmap: Option<&'a str>,
}

impl<'a, G> ImShow<'a, G>
where G: Grid {
    #[must_use]
    pub fn cmap(mut self, cmap: &'a str) -> Self {
        self.cmap = Some(cmap);
        self
    }

    pub fn plot(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new(py);
            set_opt(kwargs, "cmap", self.cmap)?;
            self.axes.ax.call_method(
                py, intern!(py, "imshow"), (self.img.to_numpy(py),),
                Some(kwargs))?;
            Ok(())
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figaspect_twice_as_wide() {
        assert_eq!(figaspect(0.5), (9.6, 4.8));
        let (w, h) = figaspect(2.);
        assert!((w - 4.).abs() < 1e-12 && (h - 8.).abs() < 1e-12);
    }

    #[test]
    fn figaspect_is_clamped() {
        assert_eq!(figaspect(0.1), (16., 4.));
    }

    #[test]
    fn a_scatter_pdf() -> Result<(), Error> {
        let (fig, [[mut ax]]) = subplots()?;
        ax.scatter(&[1., 2., 3., 4.], &[1., 4., 2., 3.])
            .sizes(&[5., 10., 20., 40.]).plot()?;
        fig.save().to_file("target/a_scatter.pdf")?;
        fig.close()
    }

    #[test]
    fn a_basic_grid() -> Result<(), Error> {
        let (fig, [[mut ax0, mut ax1],
                   [mut ax2, mut ax3]]) = subplots()?;
        ax0.bar(&[1., 2., 3.], &[1., 4., 2.]).width(0.5).plot()?;
        ax1.boxplot(&[1., 4., 2., 3., 10.]).sym("*").plot()?;
        ax2.errorbar(&[0., 1.], &[0., 1.], &[0., 0.5]).fmt("o").plot()?;
        ax3.pie(&[1., 2.]).startangle(90.).plot()?;
        fig.save().to_file("target/a_basic_grid.pdf")?;
        fig.close()
    }

    #[test]
    fn xlim_round_trip() -> Result<(), Error> {
        let (fig, [[mut ax]]) = subplots()?;
        ax.set_xlim(-1., 3.)?;
        assert_eq!(ax.get_xlim()?, (-1., 3.));
        fig.close()
    }

    #[test]
    fn saving_into_a_missing_directory_fails() -> Result<(), Error> {
        let (fig, [[mut ax]]) = subplots()?;
        ax.scatter(&[1.], &[1.]).plot()?;
        let r = fig.save().to_file("target/no/such/dir/fig.png");
        assert!(matches!(r, Err(Error::FileNotFoundError)));
        fig.close()
    }
}
