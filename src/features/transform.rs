//! Raw record table → numeric feature table

use tracing::{debug, info};

use super::config::FeatureConfig;
use super::derive::add_family_size;
use super::encode::encode;
use super::impute::{ImputeOutcome, ImputeRule};
use super::table::FeatureTable;
use crate::table::{RecordTable, Value};

/// Which table is being transformed. Only changes what is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformMode {
    Training,
    Inference,
}

impl std::fmt::Display for TransformMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Training => write!(f, "training"),
            Self::Inference => write!(f, "inference"),
        }
    }
}

/// Deterministic feature engineering shared by training and inference.
///
/// Steps, each skipped when its input columns are absent:
/// 1. impute (medians recomputed from the table at hand)
/// 2. derive family size
/// 3. select candidates present, in candidate order
/// 4. one-hot encode categoricals
#[derive(Debug, Clone)]
pub struct FeatureTransform {
    config: FeatureConfig,
    rules: Vec<ImputeRule>,
}

impl Default for FeatureTransform {
    fn default() -> Self {
        Self::new(FeatureConfig::default())
    }
}

impl FeatureTransform {
    pub fn new(config: FeatureConfig) -> Self {
        let rules = config
            .median_fill
            .iter()
            .map(ImputeRule::median)
            .chain(
                config
                    .constant_fill
                    .iter()
                    .map(|c| ImputeRule::constant(&c.column, Value::Str(c.value.clone()))),
            )
            .collect();
        Self { config, rules }
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Run every imputation rule whose column is present
    pub fn impute(&self, table: &mut RecordTable) -> Vec<ImputeOutcome> {
        self.rules.iter().filter_map(|r| r.apply(table)).collect()
    }

    /// Candidate columns present in `table`, in candidate order
    pub fn select<'a>(&'a self, table: &RecordTable) -> Vec<&'a str> {
        self.config
            .candidates
            .iter()
            .map(String::as_str)
            .filter(|c| table.contains(c))
            .collect()
    }

    /// Transform `table` in place and return its encoded features.
    pub fn transform(&self, table: &mut RecordTable, mode: TransformMode) -> FeatureTable {
        debug!(%mode, cols = ?table.column_names(), "feature transform start");

        for outcome in self.impute(table) {
            info!(
                %mode,
                column = %outcome.column,
                strategy = %outcome.strategy,
                fill = %outcome.fill,
                filled = outcome.filled,
                "filled missing values"
            );
        }

        if let Some(family) = &self.config.family_size {
            if add_family_size(table, family) {
                info!(
                    %mode,
                    output = %family.output,
                    "created {} = {} + {} + 1",
                    family.output,
                    family.siblings_spouses,
                    family.parents_children
                );
            }
        }

        let selected = self.select(table);
        info!(%mode, features = ?selected, "selected base features");

        let mut subset = RecordTable::default();
        for name in &selected {
            if let Some(column) = table.column(name) {
                subset.insert_column(column.clone());
            }
        }
        let features = if subset.n_cols() == 0 {
            FeatureTable::empty(table.n_rows())
        } else {
            encode(&subset, self.config.drop_first)
        };

        info!(
            %mode,
            rows = features.n_rows(),
            cols = features.n_cols(),
            columns = ?features.columns(),
            "one-hot encoded"
        );
        features
    }
}
