//! Expression parser
//!
//! Parses YAML expression trees into Expression AST nodes.
//!
//! Supported shapes:
//! - Column reference: a bare string, e.g. `visible_mean`
//! - Operation: a mapping with `operation`, `source1`, optional `source2`
//!   and, for `apply`, `function`. Sources nest recursively.
//!
//! ```yaml
//! operation: multiply
//! source1:
//!   operation: subtract
//!   source1: IR_max
//!   source2: IR_min
//! source2: visible_contrast
//! ```

use crate::error::{ParseError, Result};
use crate::yaml_parser::YamlParser;
use featurize_core::ast::{Expression, OperatorKind, UnaryFunction};
use serde_yaml::Value as YamlValue;

/// Keys accepted on an operation mapping. `target` is allowed because a
/// feature entry is itself the root operation.
pub(crate) const OPERATION_FIELDS: &[&str] =
    &["operation", "source1", "source2", "function", "target"];

/// Expression parser
pub struct ExpressionParser;

impl ExpressionParser {
    /// Parse an expression from a YAML string
    pub fn parse(yaml_str: &str) -> Result<Expression> {
        let yaml = YamlParser::parse(yaml_str)?;
        Self::parse_from_yaml(&yaml)
    }

    /// Parse an expression from a YAML value
    pub fn parse_from_yaml(yaml: &YamlValue) -> Result<Expression> {
        Self::parse_node(yaml, "source1")
    }

    /// Parse one node; `field` names the slot it came from, for error messages
    fn parse_node(yaml: &YamlValue, field: &str) -> Result<Expression> {
        match yaml {
            YamlValue::String(name) => Ok(Expression::ColumnRef(name.clone())),
            YamlValue::Mapping(_) => Self::parse_operation(yaml),
            other => Err(YamlParser::type_error(
                field,
                "column name or operation mapping",
                other,
            )),
        }
    }

    /// Parse an operation mapping
    pub(crate) fn parse_operation(obj: &YamlValue) -> Result<Expression> {
        let name = YamlParser::get_string(obj, "operation")?;
        let kind = Self::parse_operator(&name)?;

        let context = format!("'{}' operation", name);
        for warning in YamlParser::validate_fields(obj, OPERATION_FIELDS, &context) {
            tracing::warn!("{}", warning);
        }

        let source1 = obj.get("source1").ok_or_else(|| ParseError::MissingField {
            field: "source1".to_string(),
        })?;
        let source1 = Self::parse_node(source1, "source1")?;

        let source2 = match obj.get("source2") {
            Some(node) => Some(Box::new(Self::parse_node(node, "source2")?)),
            None => None,
        };

        let function = match (kind, obj.get("function")) {
            (OperatorKind::Apply, Some(YamlValue::String(function))) => {
                Some(Self::parse_function(function)?)
            }
            (OperatorKind::Apply, Some(other)) => {
                return Err(YamlParser::type_error("function", "string", other));
            }
            (OperatorKind::Apply, None) => {
                return Err(ParseError::MissingField {
                    field: "function".to_string(),
                });
            }
            (_, Some(_)) => {
                tracing::warn!("Ignoring 'function' on '{}' operation", kind);
                None
            }
            (_, None) => None,
        };

        Ok(Expression::Operation {
            kind,
            source1: Box::new(source1),
            source2,
            function,
        })
    }

    /// Parse an operation name
    pub fn parse_operator(name: &str) -> Result<OperatorKind> {
        OperatorKind::from_name(name).ok_or_else(|| {
            tracing::error!("Invalid operation {} supplied.", name);
            ParseError::UnsupportedOperator(name.to_string())
        })
    }

    /// Parse an `apply` function name
    pub fn parse_function(name: &str) -> Result<UnaryFunction> {
        UnaryFunction::from_name(name).ok_or_else(|| ParseError::UnknownFunction(name.to_string()))
    }
}
