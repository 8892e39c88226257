//! Binary logistic regression fit with linfa's L-BFGS solver

use linfa::traits::Fit;
use linfa::DatasetBase;
use ndarray::{Array1, ArrayView2};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// L2-regularised logistic regression.
///
/// Minimises `sum(log_loss) + ‖w‖² / (2·C)`; the intercept is not penalised.
/// Fitting stops once the gradient falls below `tolerance` or after
/// `max_iter` L-BFGS iterations.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    max_iter: u64,
    tolerance: f64,
    c: f64,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tolerance: 1e-4,
            c: 1.0,
        }
    }
}

/// A fitted model; read-only after [`LogisticRegression::fit`]
#[derive(Debug, Clone, PartialEq)]
pub struct FittedLogistic {
    /// Oriented so that a positive decision value means the last class
    weights: Array1<f64>,
    intercept: f64,
    /// Sorted class labels; the last one is the positive class
    classes: Vec<i64>,
    converged: bool,
}

#[inline]
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter as u64;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Inverse regularisation strength
    pub fn with_c(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    pub fn max_iter(&self) -> usize {
        self.max_iter as usize
    }

    /// Fit on `x` (rows × features) and integer labels.
    ///
    /// A single class yields a constant predictor; more than two classes is an
    /// error.
    pub fn fit(&self, x: ArrayView2<'_, f64>, y: &[i64]) -> Result<FittedLogistic> {
        if x.nrows() != y.len() {
            return Err(Error::ShapeMismatch {
                expected: x.nrows(),
                actual: y.len(),
            });
        }

        let mut classes = y.to_vec();
        classes.sort_unstable();
        classes.dedup();
        if classes.len() > 2 {
            return Err(Error::TooManyClasses { classes });
        }

        let mut fitted = FittedLogistic {
            weights: Array1::zeros(x.ncols()),
            intercept: 0.0,
            classes: classes.clone(),
            converged: true,
        };
        if classes.len() < 2 {
            debug!(classes = ?classes, "fewer than two classes, constant predictor");
            return Ok(fitted);
        }

        let positive = classes[1];
        if x.ncols() == 0 {
            // Only the unpenalised intercept: its optimum is the log-odds
            let pos = y.iter().filter(|&&label| label == positive).count() as f64;
            fitted.intercept = (pos / (y.len() as f64 - pos)).ln();
            return Ok(fitted);
        }

        let dataset = DatasetBase::new(x.to_owned(), Array1::from(y.to_vec()));
        let model = linfa_logistic::LogisticRegression::default()
            .alpha(1.0 / self.c)
            .with_intercept(true)
            .max_iterations(self.max_iter)
            .gradient_tolerance(self.tolerance)
            .fit(&dataset)
            .map_err(|e| Error::Solver {
                message: e.to_string(),
            })?;

        // linfa picks its own positive class; flip to ours when they differ
        let sign = if model.labels().pos.class == positive {
            1.0
        } else {
            -1.0
        };
        fitted.weights = model.params().mapv(|w| sign * w);
        fitted.intercept = sign * model.intercept();

        let gradient = fitted.mean_gradient(x, y, self.c);
        fitted.converged = gradient < self.tolerance;
        if fitted.converged {
            debug!(gradient, "logistic regression converged");
        } else {
            warn!(
                max_iter = self.max_iter,
                gradient, "logistic regression did not converge; consider raising max_iter"
            );
        }
        Ok(fitted)
    }
}

impl FittedLogistic {
    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Largest absolute component of the gradient of
    /// `mean(log_loss) + ‖w‖² / (2·C·n)` at the fitted parameters
    pub fn mean_gradient(&self, x: ArrayView2<'_, f64>, y: &[i64], c: f64) -> f64 {
        let Some(&positive) = self.classes.last() else {
            return 0.0;
        };
        let n = x.nrows().max(1) as f64;
        let target: Array1<f64> = y
            .iter()
            .map(|&label| if label == positive { 1.0 } else { 0.0 })
            .collect();

        let residual = (x.dot(&self.weights) + self.intercept).mapv(sigmoid) - &target;
        let grad_w = x.t().dot(&residual) / n + &self.weights / (c * n);
        let grad_b = residual.sum() / n;
        grad_w.iter().fold(grad_b.abs(), |m, g| m.max(g.abs()))
    }

    fn check_width(&self, x: &ArrayView2<'_, f64>) -> Result<()> {
        if x.ncols() == self.weights.len() {
            Ok(())
        } else {
            Err(Error::ShapeMismatch {
                expected: self.weights.len(),
                actual: x.ncols(),
            })
        }
    }

    /// Signed distance to the decision boundary
    pub fn decision_function(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        self.check_width(&x)?;
        Ok(x.dot(&self.weights) + self.intercept)
    }

    /// Probability of the positive class
    pub fn predict_proba(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        if self.classes.len() < 2 {
            self.check_width(&x)?;
            return Ok(Array1::from_elem(x.nrows(), 1.0));
        }
        Ok(self.decision_function(x)?.mapv(sigmoid))
    }

    /// Positive class iff the decision function is > 0
    pub fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Vec<i64>> {
        let z = self.decision_function(x)?;
        let labels = match self.classes.as_slice() {
            [] => vec![0; z.len()],
            [only] => vec![*only; z.len()],
            [negative, positive, ..] => z
                .iter()
                .map(|&v| if v > 0.0 { *positive } else { *negative })
                .collect(),
        };
        Ok(labels)
    }

    /// Accuracy on `x` against `y`
    pub fn score(&self, x: ArrayView2<'_, f64>, y: &[i64]) -> Result<f64> {
        let predicted = self.predict(x)?;
        Ok(crate::eval::accuracy_score(y, &predicted))
    }
}
