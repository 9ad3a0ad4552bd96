//! Python bindings for window generation

use pyo3::prelude::*;
use numpy::PyArray1;
use crate::filters::WindowType;

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Hamming,
    Hann,
    Blackman,
    BlackmanHarris,
    Rectangular,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Hann => WindowType::Hann,
            PyWindowType::Blackman => WindowType::Blackman,
            PyWindowType::BlackmanHarris => WindowType::BlackmanHarris,
            PyWindowType::Rectangular => WindowType::Rectangular,
        }
    }
}

/// Generate window coefficients
///
/// Args:
///     window_type: Window family
///     length: Number of coefficients (at least 2)
///
/// Returns:
///     Coefficients as numpy array
#[pyfunction]
pub fn generate_window<'py>(
    py: Python<'py>,
    window_type: PyWindowType,
    length: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let window = crate::filters::generate_window(window_type.into(), length)?;
    Ok(PyArray1::from_vec(py, window))
}
