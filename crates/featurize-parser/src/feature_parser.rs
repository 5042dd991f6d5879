//! Feature configuration parser
//!
//! Parses the `generate_features` section of a pipeline configuration:
//!
//! ```yaml
//! feature_col:
//!   - visible_mean
//!   - IR_max
//! target_col: class
//! feature_eng:
//!   - target: log_entropy
//!     operation: apply
//!     source1: visible_entropy
//!     function: log
//!   - target: IR_range
//!     operation: subtract
//!     source1: IR_max
//!     source2: IR_min
//! ```

use crate::error::{ParseError, Result};
use crate::expression_parser::ExpressionParser;
use crate::yaml_parser::YamlParser;
use featurize_core::ast::{FeatureConfig, FeatureDefinition};
use serde_yaml::Value as YamlValue;

const CONFIG_FIELDS: &[&str] = &["feature_col", "target_col", "feature_eng"];

/// Feature configuration parser
pub struct FeatureParser;

impl FeatureParser {
    /// Parse a feature configuration from YAML string
    pub fn parse(yaml_str: &str) -> Result<FeatureConfig> {
        let yaml = YamlParser::parse(yaml_str)?;
        Self::parse_from_yaml(&yaml)
    }

    /// Parse a feature configuration from YAML value
    ///
    /// Shape errors on `feature_col` are reported before any definition is
    /// looked at.
    pub fn parse_from_yaml(yaml: &YamlValue) -> Result<FeatureConfig> {
        if !yaml.is_mapping() {
            return Err(YamlParser::type_error("generate_features", "mapping", yaml));
        }

        for warning in YamlParser::validate_fields(yaml, CONFIG_FIELDS, "generate_features") {
            tracing::warn!("{}", warning);
        }

        let feature_columns = YamlParser::get_string_list(yaml, "feature_col")?;
        let target_column = YamlParser::get_string(yaml, "target_col")?;
        let definitions = Self::parse_definitions(YamlParser::get_array(yaml, "feature_eng")?)?;

        Ok(FeatureConfig {
            feature_columns,
            target_column,
            definitions,
        })
    }

    /// Parse an ordered list of feature definitions
    pub fn parse_definitions(items: &[YamlValue]) -> Result<Vec<FeatureDefinition>> {
        items.iter().map(Self::parse_definition).collect()
    }

    /// Parse one `feature_eng` entry
    pub fn parse_definition(yaml: &YamlValue) -> Result<FeatureDefinition> {
        if !yaml.is_mapping() {
            return Err(YamlParser::type_error("feature_eng", "mapping", yaml));
        }

        let target = YamlParser::get_string(yaml, "target")?;
        if target.trim().is_empty() {
            return Err(ParseError::InvalidValue {
                field: "target".to_string(),
                message: "target column name cannot be empty".to_string(),
            });
        }

        let expression = ExpressionParser::parse_operation(yaml).map_err(|e| {
            tracing::error!("Feature {} could not be parsed: {}", target, e);
            e
        })?;

        Ok(FeatureDefinition { target, expression })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use featurize_core::ast::{Expression, OperatorKind};

    #[test]
    fn test_parse_basic_config() {
        let yaml = r#"
feature_col: [A, B]
target_col: C
feature_eng:
  - operation: multiply
    source1: A
    source2: B
    target: D
"#;

        let config = FeatureParser::parse(yaml).unwrap();
        assert_eq!(config.feature_columns, vec!["A", "B"]);
        assert_eq!(config.target_column, "C");
        assert_eq!(config.definitions.len(), 1);
        assert_eq!(config.definitions[0].target, "D");
        assert_eq!(
            config.definitions[0].expression,
            Expression::binary(
                OperatorKind::Multiply,
                Expression::column("A"),
                Expression::column("B"),
            )
        );
    }

    #[test]
    fn test_parse_empty_feature_eng() {
        let yaml = r#"
feature_col: [A]
target_col: C
feature_eng: []
"#;

        let config = FeatureParser::parse(yaml).unwrap();
        assert!(config.definitions.is_empty());
    }

    #[test]
    fn test_scalar_feature_col_rejected_first() {
        // The definition is invalid too; the shape error must win.
        let yaml = r#"
feature_col: A
target_col: C
feature_eng:
  - target: D
    operation: invalid_operation
    source1: A
"#;

        let result = FeatureParser::parse(yaml);
        assert!(matches!(
            result,
            Err(ParseError::ConfigType { field, .. }) if field == "feature_col"
        ));
    }

    #[test]
    fn test_missing_target() {
        let yaml = r#"
feature_col: [A, B]
target_col: C
feature_eng:
  - operation: add
    source1: A
    source2: B
"#;

        let result = FeatureParser::parse(yaml);
        assert!(matches!(result, Err(ParseError::MissingField { field }) if field == "target"));
    }

    #[test]
    fn test_empty_target_rejected() {
        let yaml = r#"
feature_col: [A, B]
target_col: C
feature_eng:
  - target: ""
    operation: add
    source1: A
    source2: B
"#;

        let result = FeatureParser::parse(yaml);
        assert!(matches!(result, Err(ParseError::InvalidValue { .. })));
    }

    #[test]
    fn test_feature_eng_must_be_list() {
        let yaml = r#"
feature_col: [A, B]
target_col: C
feature_eng:
  target: D
  operation: add
  source1: A
"#;

        let result = FeatureParser::parse(yaml);
        assert!(matches!(
            result,
            Err(ParseError::ConfigType { field, .. }) if field == "feature_eng"
        ));
    }

    #[test]
    fn test_config_must_be_mapping() {
        let result = FeatureParser::parse("- A\n- B");
        assert!(matches!(result, Err(ParseError::ConfigType { .. })));
    }
}
