use approx::assert_abs_diff_eq;
use densemat::{Matrix, MatrixError};

#[test]
fn fill_then_add_scalar_end_to_end() {
    let m = Matrix::filled(2, 3, 0.0).unwrap();
    let m = m.add_scalar(5.0).unwrap();

    assert_eq!(m.n_rows(), 2);
    assert_eq!(m.n_cols(), 3);
    for i in 0..2 {
        for j in 0..3 {
            assert_abs_diff_eq!(m.get(i, j).unwrap(), 5.0);
        }
    }
}

#[test]
fn identity_then_mul_scalar_end_to_end() {
    let m = Matrix::identity(3).unwrap();
    let m = m.mul_scalar(2.0).unwrap();

    assert_abs_diff_eq!(m.get(0, 0).unwrap(), 2.0);
    assert_abs_diff_eq!(m.get(0, 1).unwrap(), 0.0);
    assert_abs_diff_eq!(m.get(1, 1).unwrap(), 2.0);
}

#[test]
fn error_paths_never_yield_a_handle() {
    assert_eq!(Matrix::filled(0, 3, 1.0).unwrap_err(), MatrixError::InvalidRows);
    assert_eq!(Matrix::filled(3, 0, 1.0).unwrap_err(), MatrixError::InvalidCols);
    assert_eq!(Matrix::identity(0).unwrap_err(), MatrixError::InvalidDimension);

    let m = Matrix::zeros(2, 2).unwrap();
    assert_eq!(m.get(2, 1).unwrap_err(), MatrixError::InvalidRowIndex);
    assert_eq!(m.get(1, 2).unwrap_err(), MatrixError::InvalidColIndex);
}

#[test]
fn error_messages_match_the_module_surface() {
    assert_eq!(MatrixError::InvalidRows.to_string(), "invalid number of rows");
    assert_eq!(
        MatrixError::InvalidCols.to_string(),
        "invalid number of columns"
    );
    assert_eq!(MatrixError::InvalidDimension.to_string(), "invalid dimension");
    assert_eq!(MatrixError::InvalidRowIndex.to_string(), "invalid row index");
    assert_eq!(
        MatrixError::InvalidColIndex.to_string(),
        "invalid column index"
    );
    assert_eq!(
        MatrixError::InsufficientMemory.to_string(),
        "insufficient memory"
    );
}

#[test]
fn scalar_ops_compose() {
    let m = Matrix::from_slice(&[1.0, -2.0, 0.5, 4.0], 2, 2).unwrap();
    let n = m.add_scalar(1.5).unwrap().mul_scalar(2.0).unwrap();

    for i in 0..2 {
        for j in 0..2 {
            assert_abs_diff_eq!(
                n.get(i, j).unwrap(),
                (m.get(i, j).unwrap() + 1.5) * 2.0,
                epsilon = 1e-12
            );
        }
    }
}
