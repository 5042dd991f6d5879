//! Feature generator
//!
//! Projects the clean dataset onto the configured feature and target
//! columns, then evaluates each feature definition in order. Every result is
//! stored on the table before the next definition runs, so later
//! definitions may reference earlier targets.

use crate::engine::ExpressionEvaluator;
use crate::error::Result;
use featurize_core::ast::{FeatureConfig, FeatureDefinition};
use featurize_core::Table;
use featurize_parser::FeatureParser;
use serde_yaml::Value as YamlValue;

/// Sequential feature generator
pub struct FeatureGenerator;

impl FeatureGenerator {
    /// Generate the features table
    ///
    /// The result holds `feature_columns`, then `target_column`, then one
    /// column per definition target. The input table is left untouched.
    pub fn generate<S: AsRef<str>>(
        table: &Table,
        feature_columns: &[S],
        target_column: &str,
        definitions: &[FeatureDefinition],
    ) -> Result<Table> {
        let mut columns: Vec<&str> = feature_columns.iter().map(AsRef::as_ref).collect();
        columns.push(target_column);
        Self::project_and_apply(table, &columns, definitions)
    }

    /// Generate the features table from a parsed configuration
    pub fn generate_from_config(table: &Table, config: &FeatureConfig) -> Result<Table> {
        Self::project_and_apply(table, &config.input_columns(), &config.definitions)
    }

    /// Parse a `generate_features` YAML section and generate the features table
    ///
    /// Configuration errors are returned before any definition is evaluated.
    pub fn generate_from_yaml(table: &Table, yaml: &YamlValue) -> Result<Table> {
        let config = FeatureParser::parse_from_yaml(yaml)?;
        Self::generate_from_config(table, &config)
    }

    /// Evaluate definitions in order, storing each result on `table`
    ///
    /// An existing column with the same name as a target is overwritten. The
    /// first failure stops the run and is returned unchanged.
    pub fn apply_definitions(table: &mut Table, definitions: &[FeatureDefinition]) -> Result<()> {
        for definition in definitions {
            if let Err(e) = Self::apply_definition(table, definition) {
                tracing::error!(
                    "Feature {} ({}) could not be created due to {}. Please check the formatting of config.yaml",
                    definition.target,
                    definition
                        .expression
                        .kind()
                        .map(|k| k.as_str())
                        .unwrap_or("column"),
                    e
                );
                return Err(e);
            }
            tracing::info!("Feature {} created.", definition.target);
        }

        Ok(())
    }

    /// A column listed twice (e.g. the target among the features) is kept
    /// once, at its first position.
    fn project_and_apply(
        table: &Table,
        columns: &[&str],
        definitions: &[FeatureDefinition],
    ) -> Result<Table> {
        let mut features = table.select(columns)?;
        Self::apply_definitions(&mut features, definitions)?;
        Ok(features)
    }

    fn apply_definition(table: &mut Table, definition: &FeatureDefinition) -> Result<()> {
        let column = ExpressionEvaluator::evaluate(&definition.expression, table)?;
        table.insert_column(definition.target.as_str(), column)?;
        Ok(())
    }
}
