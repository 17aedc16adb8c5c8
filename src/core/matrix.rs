use crate::core::MatrixError;
use crate::utils::{validate_index, validate_matrix_dims, validate_square_dim};

/// Dense f64 matrix stored in row-major order.
///
/// The buffer is exclusively owned: every producing operation deep-copies,
/// so no two matrices ever alias the same storage. Dropping the matrix
/// frees the buffer exactly once.
pub struct Matrix {
    n_rows: usize,
    n_cols: usize,
    data: Vec<f64>,
}

/// Fallible buffer reservation so allocation failure surfaces as an error
/// value instead of an abort.
fn alloc_buffer(len: usize) -> Result<Vec<f64>, MatrixError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)?;
    data.resize(len, 0.0);
    Ok(data)
}

impl Matrix {
    /// Zero-initialized matrix with the given dimensions.
    pub fn zeros(n_rows: usize, n_cols: usize) -> Result<Self, MatrixError> {
        validate_matrix_dims(n_rows, n_cols)?;
        let len = n_rows
            .checked_mul(n_cols)
            .ok_or(MatrixError::InsufficientMemory)?;
        log::trace!("allocating {}x{} matrix ({} elements)", n_rows, n_cols, len);
        Ok(Self {
            n_rows,
            n_cols,
            data: alloc_buffer(len)?,
        })
    }

    /// Matrix with every element set to `value`.
    pub fn filled(n_rows: usize, n_cols: usize, value: f64) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(n_rows, n_cols)?;
        m.data.fill(value);
        Ok(m)
    }

    /// Identity matrix of side `n`: 1.0 on the diagonal, 0.0 elsewhere.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        validate_square_dim(n)?;
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i + i * n] = 1.0;
        }
        Ok(m)
    }

    /// Copy construction from a row-major slice.
    pub fn from_slice(data: &[f64], n_rows: usize, n_cols: usize) -> Result<Self, MatrixError> {
        validate_matrix_dims(n_rows, n_cols)?;
        let len = n_rows
            .checked_mul(n_cols)
            .ok_or(MatrixError::InsufficientMemory)?;
        if data.len() != len {
            return Err(MatrixError::ShapeMismatch {
                n_rows,
                n_cols,
                got: data.len(),
            });
        }
        let mut buf = Vec::new();
        buf.try_reserve_exact(len)?;
        buf.extend_from_slice(data);
        Ok(Self {
            n_rows,
            n_cols,
            data: buf,
        })
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        // invariant: n_rows >= 1 and n_cols >= 1, so this is always false
        self.data.is_empty()
    }

    /// Element at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Result<f64, MatrixError> {
        validate_index(i, j, self.n_rows, self.n_cols)?;
        Ok(self.data[j + i * self.n_cols])
    }

    /// Write `value` at row `i`, column `j`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), MatrixError> {
        validate_index(i, j, self.n_rows, self.n_cols)?;
        self.data[j + i * self.n_cols] = value;
        Ok(())
    }

    /// New matrix with `f` added to every element; `self` is untouched.
    pub fn add_scalar(&self, f: f64) -> Result<Self, MatrixError> {
        let mut out = self.try_clone()?;
        for v in &mut out.data {
            *v += f;
        }
        Ok(out)
    }

    /// New matrix with every element multiplied by `f`; `self` is untouched.
    pub fn mul_scalar(&self, f: f64) -> Result<Self, MatrixError> {
        let mut out = self.try_clone()?;
        for v in &mut out.data {
            *v *= f;
        }
        Ok(out)
    }

    /// Fallible deep copy of the whole matrix.
    pub fn try_clone(&self) -> Result<Self, MatrixError> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())?;
        data.extend_from_slice(&self.data);
        Ok(Self {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            data,
        })
    }

    /// Row-major view of the whole buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl std::fmt::Debug for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matrix")
            .field("n_rows", &self.n_rows)
            .field("n_cols", &self.n_cols)
            .finish()
    }
}
