//! Simple linear regression `energy = intercept + slope × degree_days`.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::DegreeDayError;
use crate::math::{intercept_design, solve_least_squares};

/// A fitted single-regressor linear model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination on the training data.
    pub r_squared: f64,
    /// Root mean squared residual, in units of `y`.
    pub rmse: f64,
    /// Number of observations used in the fit.
    pub n: usize,
}

impl LinearModel {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    pub fn predict_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }
}

/// Fit `y = intercept + slope × x` by least squares.
///
/// A constant `x` (all-zero HDD over a cooling season, say) carries no slope
/// information; the fit degrades to `slope = 0`, `intercept = mean(y)`.
pub fn fit_linear(x: &[f64], y: &[f64]) -> Result<LinearModel, DegreeDayError> {
    if x.len() != y.len() {
        return Err(DegreeDayError::Regression(format!(
            "x and y must have equal length (got {} and {})",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(DegreeDayError::Regression(format!(
            "need at least 2 observations, got {}",
            x.len()
        )));
    }
    if !x.iter().chain(y.iter()).all(|v| v.is_finite()) {
        return Err(DegreeDayError::Regression("inputs contain non-finite values".to_string()));
    }

    let n = y.len() as f64;
    let y_mean = y.iter().sum::<f64>() / n;

    let (intercept, slope) = if x.iter().all(|&xi| xi == x[0]) {
        log::warn!(
            "Degree-day values are constant ({}) across {} days; fitting slope 0, intercept = mean usage",
            x[0],
            y.len()
        );
        (y_mean, 0.0)
    } else {
        let design = intercept_design(x);
        let target = DVector::from_column_slice(y);
        let beta = solve_least_squares(&design, &target).ok_or_else(|| {
            DegreeDayError::Regression("degree-day values are too ill-conditioned to fit".to_string())
        })?;
        (beta[0], beta[1])
    };
    let sse: f64 = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (yi - (intercept + slope * xi)).powi(2))
        .sum();
    let sst: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

    // Constant y: perfect if nothing is left over, otherwise no explanatory power.
    let r_squared = if sst > 0.0 {
        1.0 - sse / sst
    } else if sse < 1e-12 {
        1.0
    } else {
        0.0
    };

    Ok(LinearModel {
        slope,
        intercept,
        r_squared,
        rmse: (sse / n).sqrt(),
        n: y.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_line() {
        let x = [0.0, 5.0, 10.0, 15.0];
        let y: Vec<f64> = x.iter().map(|v| 120.0 + 4.5 * v).collect();
        let model = fit_linear(&x, &y).unwrap();
        assert!((model.slope - 4.5).abs() < 1e-9);
        assert!((model.intercept - 120.0).abs() < 1e-9);
        assert!((model.r_squared - 1.0).abs() < 1e-12);
        assert!(model.rmse < 1e-9);
        assert_eq!(model.n, 4);
        assert!((model.predict(20.0) - 210.0).abs() < 1e-9);
    }

    #[test]
    fn noisy_fit_has_partial_r_squared() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.1, 3.9, 6.2, 7.8, 10.1];
        let model = fit_linear(&x, &y).unwrap();
        assert!((model.slope - 1.99).abs() < 1e-9);
        assert!(model.r_squared > 0.99 && model.r_squared < 1.0);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(matches!(fit_linear(&[1.0], &[2.0]), Err(DegreeDayError::Regression(_))));
        assert!(matches!(
            fit_linear(&[1.0, 2.0], &[2.0]),
            Err(DegreeDayError::Regression(_))
        ));
        assert!(matches!(
            fit_linear(&[1.0, f64::NAN], &[2.0, 3.0]),
            Err(DegreeDayError::Regression(_))
        ));
    }

    #[test]
    fn constant_degree_days_fit_flat_line() {
        // Ten June days with no heating demand.
        let x = [0.0; 10];
        let y = [410.0, 395.0, 402.0, 420.0, 388.0, 405.0, 399.0, 415.0, 392.0, 404.0];
        let model = fit_linear(&x, &y).unwrap();

        let mean = y.iter().sum::<f64>() / y.len() as f64;
        assert_eq!(model.slope, 0.0);
        assert!((model.intercept - mean).abs() < 1e-9);
        assert_eq!(model.r_squared, 0.0);
        assert_eq!(model.n, 10);
        assert!((model.predict(12.0) - mean).abs() < 1e-9);
    }

    #[test]
    fn constant_degree_days_and_usage_is_a_perfect_fit() {
        let model = fit_linear(&[3.0, 3.0, 3.0], &[50.0, 50.0, 50.0]).unwrap();
        assert_eq!(model.slope, 0.0);
        assert_eq!(model.intercept, 50.0);
        assert_eq!(model.r_squared, 1.0);
        assert_eq!(model.rmse, 0.0);
    }
}
