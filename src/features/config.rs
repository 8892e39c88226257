//! Feature transform configuration

use serde::{Deserialize, Serialize};

/// Column names and rules driving the feature transform.
///
/// Defaults describe the passenger-survival layout (`Pclass`, `Sex`, `Age`,
/// `Fare`, `Embarked`, `SibSp`, `Parch`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureConfig {
    /// Priority-ordered candidate features
    pub candidates: Vec<String>,
    /// Numeric columns whose gaps take the column median
    pub median_fill: Vec<String>,
    /// Categorical columns whose gaps take a literal
    pub constant_fill: Vec<ConstantFill>,
    /// Derived family-size feature, if configured
    pub family_size: Option<FamilySizeConfig>,
    /// Drop the lexicographically-first level of every categorical column
    pub drop_first: bool,
}

/// Literal fill for one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantFill {
    pub column: String,
    pub value: String,
}

/// `output = siblings_spouses + parents_children + 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilySizeConfig {
    pub siblings_spouses: String,
    pub parents_children: String,
    pub output: String,
}

impl Default for FamilySizeConfig {
    fn default() -> Self {
        Self {
            siblings_spouses: "SibSp".to_string(),
            parents_children: "Parch".to_string(),
            output: "FamilySize".to_string(),
        }
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            candidates: ["Pclass", "Sex", "Age", "Fare", "Embarked", "FamilySize"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            median_fill: vec!["Age".to_string(), "Fare".to_string()],
            constant_fill: vec![ConstantFill {
                column: "Embarked".to_string(),
                value: "S".to_string(),
            }],
            family_size: Some(FamilySizeConfig::default()),
            drop_first: true,
        }
    }
}
