//! PyO3 bindings for Python integration

use pyo3::prelude::*;
use crate::error::DtmfError;

mod window_bindings;
mod decoder_bindings;

impl From<DtmfError> for PyErr {
    fn from(err: DtmfError) -> Self {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn dtmf_decoder(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<decoder_bindings::PyDtmfDecoder>()?;
    m.add_class::<window_bindings::PyWindowType>()?;

    m.add_function(wrap_pyfunction!(decoder_bindings::decode, m)?)?;
    m.add_function(wrap_pyfunction!(decoder_bindings::decode_wav, m)?)?;
    m.add_function(wrap_pyfunction!(window_bindings::generate_window, m)?)?;

    Ok(())
}
