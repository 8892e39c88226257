//! Model fitting: holdout split, feature scaling and the linear classifier

mod logistic;
mod scaler;
mod split;


pub use logistic::{FittedLogistic, LogisticRegression};
pub use scaler::{FittedScaler, StandardScaler};
pub use split::{SplitIndices, StratifiedSplit};
