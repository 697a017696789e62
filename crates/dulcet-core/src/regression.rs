//! Single-feature ordinary least-squares regression
//!
//! Both advisors fit tiny in-memory arrays, so this is the closed-form
//! solution rather than a linear-algebra crate: slope = cov(x, y) / var(x),
//! intercept = mean(y) - slope * mean(x).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A fitted line over one feature
///
/// Serializable so the goal engine can persist it per user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    /// Fit by ordinary least squares. No intercept constraint, no
    /// regularization.
    ///
    /// A constant feature (zero variance) has no unique OLS solution;
    /// the fit degenerates to the horizontal line through mean(y),
    /// which keeps predictions at the feature value equal to the
    /// target mean.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.is_empty() {
            return Err(Error::InvalidData(
                "cannot fit a regression on empty training data".to_string(),
            ));
        }
        if xs.len() != ys.len() {
            return Err(Error::InvalidData(format!(
                "feature/target length mismatch: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }

        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (x, y) in xs.iter().zip(ys.iter()) {
            let dx = x - mean_x;
            sxx += dx * dx;
            sxy += dx * (y - mean_y);
        }

        if sxx == 0.0 {
            return Ok(Self {
                slope: 0.0,
                intercept: mean_y,
            });
        }

        let slope = sxy / sxx;
        Ok(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// Evaluate the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_collinear_points_exactly() {
        // y = 50x + 100
        let xs = [0.0, 1.0, 2.0];
        let ys = [100.0, 150.0, 200.0];
        let model = LinearModel::fit(&xs, &ys).unwrap();
        assert!((model.slope - 50.0).abs() < 1e-9);
        assert!((model.intercept - 100.0).abs() < 1e-9);
        assert!((model.predict(5.0) - 350.0).abs() < 1e-9);
    }

    #[test]
    fn fits_noisy_points_through_means() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 2.0, 4.0];
        let model = LinearModel::fit(&xs, &ys).unwrap();
        // OLS line passes through (mean_x, mean_y)
        assert!((model.predict(1.5) - 2.5).abs() < 1e-9);
        assert!((model.slope - 0.8).abs() < 1e-9);
    }

    #[test]
    fn constant_feature_degenerates_to_target_mean() {
        let xs = [3000.0, 3000.0, 3000.0];
        let ys = [1000.0, 1200.0, 1100.0];
        let model = LinearModel::fit(&xs, &ys).unwrap();
        assert_eq!(model.slope, 0.0);
        assert!((model.predict(3000.0) - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_training_data_is_rejected() {
        assert!(LinearModel::fit(&[], &[]).is_err());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(LinearModel::fit(&[1.0, 2.0], &[1.0]).is_err());
    }
}
