//! Common test utilities
#![allow(dead_code)]

use lazymat::dtype::Element;
use lazymat::matrix::Matrix;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two same-shape matrices are element-wise close within tolerance
pub fn assert_matrix_allclose<const M: usize, const N: usize>(
    a: &Matrix<f64, M, N>,
    b: &Matrix<f64, M, N>,
    rtol: f64,
    atol: f64,
    msg: &str,
) {
    assert_allclose_f64(a.as_slice(), b.as_slice(), rtol, atol, msg);
}

/// Collect a matrix's elements as f64 for comparison across element types
pub fn to_f64_vec<T: Element, const M: usize, const N: usize>(m: &Matrix<T, M, N>) -> Vec<f64> {
    m.as_slice().iter().map(|&v| v.to_f64()).collect()
}
