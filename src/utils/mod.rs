mod validation;

pub use validation::validate_index;
pub use validation::validate_matrix_dims;
pub use validation::validate_square_dim;
