//! Feature transform: raw record table → fixed-width numeric table
//!
//! The same transform runs on the training table and on the inference table.
//! The training output fixes the canonical [`FeatureSchema`]; inference
//! output is reshaped to it with [`FeatureSchema::align`] before scoring.

mod config;
mod derive;
mod encode;
mod impute;
mod schema;
mod table;
mod transform;


pub use config::{ConstantFill, FamilySizeConfig, FeatureConfig};
pub use derive::add_family_size;
pub use encode::{encode, one_hot};
pub use impute::{ImputeOutcome, ImputeRule, ImputeStrategy};
pub use schema::{AlignReport, FeatureSchema};
pub use table::FeatureTable;
pub use transform::{FeatureTransform, TransformMode};
