//! Property tests for holdout evaluation and the stages feeding it
//!
//! Ensures the evaluation path satisfies its invariants:
//! - Accuracy bounded to [0, 1], never NaN
//! - Confusion matrix cells sum to the sample count
//! - Stratified split is a pure function of labels and seed
//! - Scaling without centering never changes a sign

use clasificador::eval::{accuracy_score, ConfusionMatrix};
use clasificador::train::{StandardScaler, StratifiedSplit};
use ndarray::Array2;
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// Strategy Helpers
// =============================================================================

/// Pair of prediction/true binary labels with the same length
fn label_pair(len: std::ops::Range<usize>) -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    len.prop_flat_map(|l| (vec(0i64..2, l), vec(0i64..2, l)))
}

/// Row-major matrix with the given column count
fn matrix(cols: usize) -> impl Strategy<Value = Array2<f64>> {
    (1usize..20).prop_flat_map(move |rows| {
        vec(-1.0e3f64..1.0e3, rows * cols)
            .prop_map(move |data| Array2::from_shape_vec((rows, cols), data).unwrap())
    })
}

// =============================================================================
// Accuracy Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_accuracy_bounded((y_true, y_pred) in label_pair(0..100)) {
        let acc = accuracy_score(&y_true, &y_pred);
        prop_assert!(acc.is_finite());
        prop_assert!((0.0..=1.0).contains(&acc));
    }

    #[test]
    fn prop_perfect_predictions((y_true, _) in label_pair(1..100)) {
        prop_assert_eq!(accuracy_score(&y_true, &y_true), 1.0);
    }

    #[test]
    fn prop_confusion_sums_to_total((y_true, y_pred) in label_pair(0..100)) {
        let cm = ConfusionMatrix::from_labels(&y_true, &y_pred);
        let sum: usize = cm.matrix().iter().flatten().sum();
        prop_assert_eq!(sum, y_true.len());
        prop_assert_eq!(cm.total(), y_true.len());
        prop_assert!(cm.correct() <= cm.total());
    }

    #[test]
    fn prop_confusion_row_sums_match_true_counts((y_true, y_pred) in label_pair(1..100)) {
        let cm = ConfusionMatrix::from_labels(&y_true, &y_pred);
        for (i, &label) in cm.labels().iter().enumerate() {
            let expected = y_true.iter().filter(|&&y| y == label).count();
            prop_assert_eq!(cm.matrix()[i].iter().sum::<usize>(), expected);
        }
    }
}

// =============================================================================
// Split Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_split_deterministic(labels in vec(0i64..2, 1..200), seed in any::<u64>()) {
        let a = StratifiedSplit::new(0.2).with_seed(seed).split(&labels);
        let b = StratifiedSplit::new(0.2).with_seed(seed).split(&labels);
        prop_assert_eq!(a, b);
    }
}

// =============================================================================
// Scaler Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_scaling_without_mean_preserves_sign(x in matrix(3)) {
        let (_, scaled) = StandardScaler::without_mean().fit_transform(&x).unwrap();
        for (orig, s) in x.iter().zip(scaled.iter()) {
            prop_assert!(s.is_finite());
            prop_assert!(*orig == 0.0 || orig.signum() == s.signum());
        }
    }

    #[test]
    fn prop_transform_matches_fit_transform(x in matrix(4)) {
        let (fitted, scaled) = StandardScaler::without_mean().fit_transform(&x).unwrap();
        prop_assert_eq!(fitted.transform(&x).unwrap(), scaled);
    }
}
