pub mod matrix;

use pyo3::prelude::*;

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<matrix::Matrix>()?;
    Ok(())
}
