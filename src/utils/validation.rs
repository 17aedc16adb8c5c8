use crate::core::MatrixError;

// validate that a matrix has at least one row and one column
pub fn validate_matrix_dims(n_rows: usize, n_cols: usize) -> Result<(), MatrixError> {
    if n_rows == 0 {
        return Err(MatrixError::InvalidRows);
    }
    if n_cols == 0 {
        return Err(MatrixError::InvalidCols);
    }
    Ok(())
}

// validate the side length of a square matrix
pub fn validate_square_dim(n: usize) -> Result<(), MatrixError> {
    if n == 0 {
        return Err(MatrixError::InvalidDimension);
    }
    Ok(())
}

// validate an element index; the row check runs before the column check
pub fn validate_index(
    i: usize,
    j: usize,
    n_rows: usize,
    n_cols: usize,
) -> Result<(), MatrixError> {
    if i >= n_rows {
        return Err(MatrixError::InvalidRowIndex);
    }
    if j >= n_cols {
        return Err(MatrixError::InvalidColIndex);
    }
    Ok(())
}
