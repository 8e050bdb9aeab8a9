use polars_core::error::PolarsError;
use pyo3::PyErr;

/// Possible errors of the gallery and of its Matplotlib handles.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The Python library "matplotlib" was not found.
    #[error("The matplotlib library has not been found.\n\
             Please install it.  See https://matplotlib.org/\n\
             If you use Anaconda, see https://github.com/PyO3/pyo3/issues/1554")]
    NoMatplotlib,
    /// The path contains an element that is not a directory or does
    /// not exist.
    #[error("A path contains an element that is not a directory or does not exist")]
    FileNotFoundError,
    /// Permission denied to access or create the filesystem path.
    #[error("Permission denied to access or create the filesystem path")]
    PermissionError,
    /// Other Python errors.
    #[error("Python error: {0}")]
    Python(#[from] PyErr),
    /// Building or reading a data frame failed.
    #[error("Data frame error: {0}")]
    Frame(#[from] PolarsError),
    /// Arrays whose shapes cannot be combined.
    #[error("Shape mismatch: {0}")]
    Shape(String),
}
