//! Reshaping of 6x6 covariances between the flat row-major layout and nested rows.
//!
//! Layout only: values are copied as they are, symmetric or not.

/// `(i, j) ↦ flat[6·i + j]`.
pub fn covariance_row_major_to_nested(flat: &[f64; 36]) -> [[f64; 6]; 6] {
    std::array::from_fn(|i| std::array::from_fn(|j| flat[6 * i + j]))
}

pub fn covariance_nested_to_row_major(nested: &[[f64; 6]; 6]) -> [f64; 36] {
    std::array::from_fn(|k| nested[k / 6][k % 6])
}
