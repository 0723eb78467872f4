//! Least squares solver.
//!
//! The regression step solves
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! for a design matrix with an intercept column and one degree-day column.
//! We hand the problem to nalgebra's SVD rather than forming normal equations,
//! so a near-constant regressor degrades into a rejected solve instead of a
//! wildly wrong slope.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // A rank-deficient design (constant regressor) has a zero singular value;
    // treat that as unsolvable rather than returning the minimum-norm answer.
    let max_sv = svd.singular_values.max();
    if !(max_sv.is_finite() && max_sv > 0.0) {
        return None;
    }
    let min_sv = svd.singular_values.min();
    if min_sv / max_sv < 1e-12 {
        return None;
    }

    for &tol in &[1e-12, 1e-10, 1e-8] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Design matrix `[1, x_i]` for simple linear regression.
pub fn intercept_design(x: &[f64]) -> DMatrix<f64> {
    DMatrix::from_fn(x.len(), 2, |row, col| if col == 0 { 1.0 } else { x[row] })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = intercept_design(&[0.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn constant_regressor_is_rejected() {
        let x = intercept_design(&[4.0, 4.0, 4.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0]);
        assert!(solve_least_squares(&x, &y).is_none());
    }
}
