//! Per-feature scaling fit on training data only

use ndarray::{Array1, Array2, Axis};

use crate::error::{Error, Result};

/// Standard-deviation scaler.
///
/// With `with_mean = false` (the pipeline's choice) features are divided by
/// their standard deviation but not centered, so zeros stay zeros.
#[derive(Debug, Clone, Copy)]
pub struct StandardScaler {
    with_mean: bool,
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self { with_mean: true }
    }
}

/// Scale factors learned by [`StandardScaler::fit`]
#[derive(Debug, Clone, PartialEq)]
pub struct FittedScaler {
    mean: Option<Array1<f64>>,
    scale: Array1<f64>,
}

impl StandardScaler {
    /// Scaler that skips centering
    pub fn without_mean() -> Self {
        Self { with_mean: false }
    }

    /// Learn per-feature mean and population standard deviation.
    ///
    /// Zero or non-finite deviations scale by 1.0.
    pub fn fit(&self, x: &Array2<f64>) -> FittedScaler {
        let n_features = x.ncols();
        if x.nrows() == 0 {
            return FittedScaler {
                mean: self.with_mean.then(|| Array1::zeros(n_features)),
                scale: Array1::ones(n_features),
            };
        }

        let mean = x
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(n_features));
        let scale = x.std_axis(Axis(0), 0.0).mapv(|s| {
            if s.is_finite() && s > f64::EPSILON {
                s
            } else {
                1.0
            }
        });

        FittedScaler {
            mean: self.with_mean.then_some(mean),
            scale,
        }
    }

    /// Fit then transform the same matrix
    pub fn fit_transform(&self, x: &Array2<f64>) -> Result<(FittedScaler, Array2<f64>)> {
        let fitted = self.fit(x);
        let scaled = fitted.transform(x)?;
        Ok((fitted, scaled))
    }
}

impl FittedScaler {
    pub fn n_features(&self) -> usize {
        self.scale.len()
    }

    pub fn scale(&self) -> &Array1<f64> {
        &self.scale
    }

    pub fn mean(&self) -> Option<&Array1<f64>> {
        self.mean.as_ref()
    }

    /// Apply the learned factors; never refits
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        if x.ncols() != self.scale.len() {
            return Err(Error::ShapeMismatch {
                expected: self.scale.len(),
                actual: x.ncols(),
            });
        }
        let centered = match &self.mean {
            Some(mean) => x - mean,
            None => x.clone(),
        };
        Ok(centered / &self.scale)
    }
}
