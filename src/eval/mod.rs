//! Holdout evaluation metrics

mod confusion;


pub use confusion::{accuracy_score, ConfusionMatrix};
