//! Comparison of an image with its averaged and edge-filtered versions.

use std::path::PathBuf;
use ndarray::Array2;
use numpy::PyReadonlyArray2;
use pyo3::{prelude::*, intern};

use crate::{
    filter::{BoundaryMode, FilterBank},
    output::Presenter,
    plt,
    style::Style,
    Error,
};

/// Supplier of a grayscale image.
pub trait ImageSource {
    fn load(&self) -> Result<Array2<f64>, Error>;
}

/// The "camera" test image of scikit-image (512×512, 8 bits).
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera;

impl ImageSource for Camera {
    fn load(&self) -> Result<Array2<f64>, Error> {
        Python::with_gil(|py| {
            let img = PyModule::import_bound(py, intern!(py, "skimage.data"))?
                .call_method0(intern!(py, "camera"))?
                .call_method1(intern!(py, "astype"), ("float64",))?;
            let img: PyReadonlyArray2<f64> = img.extract()?;
            Ok(img.as_array().to_owned())
        })
    }
}

/// Synthetic image: a bright square on a dark, slightly graded
/// background.  All pixels are integers in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestPattern {
    pub rows: usize,
    pub cols: usize,
}

impl ImageSource for TestPattern {
    fn load(&self) -> Result<Array2<f64>, Error> {
        let (rows, cols) = (self.rows, self.cols);
        Ok(Array2::from_shape_fn((rows, cols), |(r, c)| {
            let inside = (rows / 4 .. 3 * rows / 4).contains(&r)
                && (cols / 4 .. 3 * cols / 4).contains(&c);
            if inside { 200. } else { 30. + (c % 16) as f64 }
        }))
    }
}

/// Filter the image of `source` and show the original, the averaged and
/// the edge images with their thresholded masks on a 3×2 grid.
pub fn filter_demo(source: &dyn ImageSource, presenter: &dyn Presenter)
                   -> Result<(FilterBank, Option<PathBuf>), Error> {
    let bank = FilterBank::apply(source.load()?, BoundaryMode::Reflect)?;

    let fig = plt::figure_sized(6., 8.)?;
    let [[mut ax0, mut ax1],
         [mut ax2, mut ax3],
         [mut ax4, mut ax5]] = fig.subplots()?;
    ax0.imshow(&bank.original).cmap("gray").plot()?;
    ax1.imshow(&bank.average).cmap("gray").plot()?;
    ax2.imshow(&bank.horizontal).cmap("gray").plot()?;
    ax3.imshow(&bank.vertical).cmap("gray").plot()?;
    ax4.imshow(&bank.horizontal_mask).cmap("gray").plot()?;
    ax5.imshow(&bank.vertical_mask).cmap("gray").plot()?;
    for ax in [&mut ax0, &mut ax1, &mut ax2, &mut ax3, &mut ax4, &mut ax5] {
        ax.hide_axes()?;
    }
    fig.tight_layout()?;

    let path = presenter.show_data(fig, "filter_demo.jpg", &Style::default())?;
    Ok((bank, path))
}
