use pyo3::exceptions::{PyIndexError, PyMemoryError, PyValueError};
use pyo3::prelude::*;
use numpy::{PyArray2, PyReadonlyArray2};

use crate::core::{Matrix as CoreMatrix, MatrixError};

// Dimension and shape problems surface as ValueError, out-of-range element
// access as IndexError, allocation failure as MemoryError. The message text
// passes through unchanged.
fn to_py_err(err: MatrixError) -> PyErr {
    match err {
        MatrixError::InvalidRowIndex | MatrixError::InvalidColIndex => {
            PyIndexError::new_err(err.to_string())
        }
        MatrixError::InsufficientMemory => PyMemoryError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Dense f64 matrix handle exposed to Python.
///
/// The wrapped buffer is owned by this object; CPython's deallocator drops
/// it when the object becomes unreachable, freeing the native memory
/// exactly once.
#[pyclass]
pub struct Matrix {
    inner: CoreMatrix,
}

#[pymethods]
impl Matrix {
    #[new]
    #[pyo3(signature = (n_rows, n_cols, value = 0.0))]
    fn new(n_rows: usize, n_cols: usize, value: f64) -> PyResult<Self> {
        Ok(Self {
            inner: CoreMatrix::filled(n_rows, n_cols, value).map_err(to_py_err)?,
        })
    }

    #[staticmethod]
    fn zeros(n_rows: usize, n_cols: usize) -> PyResult<Self> {
        Ok(Self {
            inner: CoreMatrix::zeros(n_rows, n_cols).map_err(to_py_err)?,
        })
    }

    #[staticmethod]
    fn identity(n: usize) -> PyResult<Self> {
        Ok(Self {
            inner: CoreMatrix::identity(n).map_err(to_py_err)?,
        })
    }

    #[staticmethod]
    fn from_array<'py>(arr: PyReadonlyArray2<'py, f64>) -> PyResult<Self> {
        let view = arr.as_array();
        let (n_rows, n_cols) = (view.nrows(), view.ncols());
        // iteration is in logical order, so the copy is row-major
        let data: Vec<f64> = view.iter().copied().collect();
        Ok(Self {
            inner: CoreMatrix::from_slice(&data, n_rows, n_cols).map_err(to_py_err)?,
        })
    }

    #[getter]
    fn n_rows(&self) -> usize {
        self.inner.n_rows()
    }

    #[getter]
    fn n_cols(&self) -> usize {
        self.inner.n_cols()
    }

    fn get(&self, i: usize, j: usize) -> PyResult<f64> {
        self.inner.get(i, j).map_err(to_py_err)
    }

    /// New matrix with `f` added to every element; this one is unchanged.
    fn add_scalar(&self, f: f64) -> PyResult<Self> {
        Ok(Self {
            inner: self.inner.add_scalar(f).map_err(to_py_err)?,
        })
    }

    /// New matrix with every element multiplied by `f`; this one is unchanged.
    fn mul_scalar(&self, f: f64) -> PyResult<Self> {
        Ok(Self {
            inner: self.inner.mul_scalar(f).map_err(to_py_err)?,
        })
    }

    fn numpy<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray2<f64>> {
        let arr = ndarray::Array2::from_shape_vec(
            (self.inner.n_rows(), self.inner.n_cols()),
            self.inner.as_slice().to_vec(),
        )
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyArray2::from_owned_array(py, arr))
    }

    fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner
            .as_slice()
            .chunks(self.inner.n_cols())
            .map(|row| row.to_vec())
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Matrix(n_rows={}, n_cols={})",
            self.inner.n_rows(),
            self.inner.n_cols()
        )
    }

    fn __len__(&self) -> usize {
        self.inner.n_rows()
    }
}
