use pyo3::prelude::*;

pub mod core;
mod python;
mod utils;

pub use crate::core::{Matrix, MatrixError};

/// Module init: registers the matrix class (and with it the deallocator
/// that frees native buffers) with the interpreter. Run once per process,
/// on first import.
#[pymodule]
fn densemat(_py: Python, m: &PyModule) -> PyResult<()> {
    log::debug!("registering densemat module");
    python::register(m)?;
    Ok(())
}
