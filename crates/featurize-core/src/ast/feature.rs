//! Feature definitions

use super::expression::Expression;
use serde::{Deserialize, Serialize};

/// A derived column: the target name plus the expression that computes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDefinition {
    /// Name of the column the result is stored under
    pub target: String,

    /// Expression tree evaluated against the table
    pub expression: Expression,
}

impl FeatureDefinition {
    pub fn new(target: impl Into<String>, expression: Expression) -> Self {
        Self {
            target: target.into(),
            expression,
        }
    }
}

/// The `generate_features` configuration fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Input columns kept from the source table, in order
    pub feature_columns: Vec<String>,

    /// Label column carried through next to the features
    pub target_column: String,

    /// Derived columns, applied in order
    pub definitions: Vec<FeatureDefinition>,
}

impl FeatureConfig {
    /// Columns the projected table starts with: the features, then the target
    pub fn input_columns(&self) -> Vec<&str> {
        self.feature_columns
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.target_column.as_str()))
            .collect()
    }
}
