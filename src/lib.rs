//! Standard statistical plots and an image-filter comparison, rendered
//! through the [Matplotlib][] Python visualization library.
//!
//! Usage
//! -----
//!
//! Each demo is a function taking its collaborators explicitly: an
//! [`output::Presenter`] that scales fonts and persists figures, an
//! [`output::OutputConfig`] for the figures saved by
//! [`output::printout`], and for the filter demo an
//! [`filter_demo::ImageSource`].
//!
//! ```no_run
//! use statplot_gallery::{gallery, output::{OutputConfig, SaveAndShow}};
//! let config = OutputConfig::default().out_dir("target");
//! gallery::simple_plots(&SaveAndShow::new(config.clone()), &config)?;
//! # Ok::<(), statplot_gallery::Error>(())
//! ```
//!
//! The numerics (samples, histograms, grids, image filters) are plain
//! Rust; only drawing goes through Python.
//!
//! [Matplotlib]: https://matplotlib.org/

mod error;
pub mod filter;
pub mod filter_demo;
pub mod gallery;
pub mod mesh;
pub mod output;
pub mod plt;
pub mod sample;
pub mod stats;
pub mod style;

pub use error::Error;
