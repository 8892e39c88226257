//! Confusion matrix over integer class labels

use std::fmt;

/// Confusion matrix
///
/// Element [i][j] counts samples with true label `labels[i]` predicted as
/// `labels[j]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix {
    matrix: Vec<Vec<usize>>,
    /// Sorted union of true and predicted labels
    labels: Vec<i64>,
}

impl ConfusionMatrix {
    /// Create from ground truth and predictions
    pub fn from_labels(y_true: &[i64], y_pred: &[i64]) -> Self {
        assert_eq!(
            y_true.len(),
            y_pred.len(),
            "Predictions and targets must have same length"
        );

        let mut labels: Vec<i64> = y_true.iter().chain(y_pred).copied().collect();
        labels.sort_unstable();
        labels.dedup();

        let index = |label: i64| labels.binary_search(&label).unwrap_or_default();
        let mut matrix = vec![vec![0; labels.len()]; labels.len()];
        for (&t, &p) in y_true.iter().zip(y_pred) {
            matrix[index(t)][index(p)] += 1;
        }

        Self { matrix, labels }
    }

    pub fn matrix(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    /// Count of samples with true label `t` predicted as `p`
    pub fn get(&self, t: i64, p: i64) -> usize {
        match (self.labels.binary_search(&t), self.labels.binary_search(&p)) {
            (Ok(i), Ok(j)) => self.matrix[i][j],
            _ => 0,
        }
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Number of exact matches
    pub fn correct(&self) -> usize {
        (0..self.labels.len()).map(|i| self.matrix[i][i]).sum()
    }

    /// Fraction of exact matches; 0.0 when empty
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.correct() as f64 / total as f64
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        write!(f, "{:>8}", "")?;
        for label in &self.labels {
            write!(f, "{:>6}", format!("P{label}"))?;
        }
        writeln!(f)?;

        for (i, label) in self.labels.iter().enumerate() {
            write!(f, "{:>8}", format!("T{label}"))?;
            for count in &self.matrix[i] {
                write!(f, "{count:>6}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Fraction of positions where `y_pred` equals `y_true`
pub fn accuracy_score(y_true: &[i64], y_pred: &[i64]) -> f64 {
    ConfusionMatrix::from_labels(y_true, y_pred).accuracy()
}
