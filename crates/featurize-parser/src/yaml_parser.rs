//! YAML Parser
//!
//! Provides utilities for reading typed fields out of YAML configuration.

use crate::error::{ParseError, Result};
use serde_yaml::Value as YamlValue;

/// YAML parser utilities
pub struct YamlParser;

impl YamlParser {
    /// Parse YAML string into a YAML value
    pub fn parse(yaml_str: &str) -> Result<YamlValue> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Get a required string field from YAML object
    pub fn get_string(obj: &YamlValue, field: &str) -> Result<String> {
        match obj.get(field) {
            None => Err(ParseError::MissingField {
                field: field.to_string(),
            }),
            Some(YamlValue::String(s)) => Ok(s.clone()),
            Some(other) => Err(Self::type_error(field, "string", other)),
        }
    }

    /// Get a required sequence field from YAML object
    pub fn get_array<'a>(obj: &'a YamlValue, field: &str) -> Result<&'a Vec<YamlValue>> {
        match obj.get(field) {
            None => Err(ParseError::MissingField {
                field: field.to_string(),
            }),
            Some(YamlValue::Sequence(items)) => Ok(items),
            Some(other) => Err(Self::type_error(field, "list", other)),
        }
    }

    /// Get a required list of strings
    ///
    /// A scalar string is rejected rather than treated as a one-element list,
    /// so `feature_col: A` fails instead of silently selecting one column.
    pub fn get_string_list(obj: &YamlValue, field: &str) -> Result<Vec<String>> {
        let items = Self::get_array(obj, field)?;

        items
            .iter()
            .enumerate()
            .map(|(idx, item)| match item {
                YamlValue::String(s) => Ok(s.clone()),
                other => Err(Self::type_error(
                    &format!("{}[{}]", field, idx),
                    "string",
                    other,
                )),
            })
            .collect()
    }

    /// Human-readable name of a YAML value's type
    pub fn type_name(value: &YamlValue) -> &'static str {
        match value {
            YamlValue::Null => "null",
            YamlValue::Bool(_) => "boolean",
            YamlValue::Number(_) => "number",
            YamlValue::String(_) => "string",
            YamlValue::Sequence(_) => "list",
            YamlValue::Mapping(_) => "mapping",
            YamlValue::Tagged(_) => "tagged value",
        }
    }

    /// Build a `ConfigType` error for `field`
    pub fn type_error(field: &str, expected: &str, actual: &YamlValue) -> ParseError {
        ParseError::ConfigType {
            field: field.to_string(),
            expected: expected.to_string(),
            actual: Self::type_name(actual).to_string(),
        }
    }

    /// Validate fields in a YAML object against a list of known fields
    /// Returns warnings for unknown fields with suggestions
    pub fn validate_fields(obj: &YamlValue, known_fields: &[&str], context: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(mapping) = obj.as_mapping() {
            for (key, _) in mapping {
                if let Some(field_name) = key.as_str() {
                    if !known_fields.contains(&field_name) {
                        // Check if this is a common typo
                        let typo_correction = FIELD_CORRECTIONS
                            .iter()
                            .find(|(typo, _)| *typo == field_name)
                            .map(|(_, correct)| *correct);

                        // Try fuzzy matching if no exact typo match
                        let suggestion = if let Some(correct) = typo_correction {
                            format!(" Did you mean '{}'?", correct)
                        } else if let Some(similar) =
                            Self::find_similar_field(field_name, known_fields)
                        {
                            format!(" Did you mean '{}'?", similar)
                        } else {
                            String::new()
                        };

                        warnings.push(format!(
                            "Unknown field '{}' in {}.{}",
                            field_name, context, suggestion
                        ));
                    }
                }
            }
        }

        warnings
    }

    /// Find similar field names using Levenshtein distance
    fn find_similar_field(field: &str, known_fields: &[&str]) -> Option<String> {
        known_fields
            .iter()
            .filter(|known| levenshtein_distance(field, known) <= 2)
            .min_by_key(|known| levenshtein_distance(field, known))
            .map(|s| s.to_string())
    }
}

/// Common field name typos and their corrections
const FIELD_CORRECTIONS: &[(&str, &str)] = &[
    ("op", "operation"),
    ("operator", "operation"),
    ("source", "source1"),
    ("source_1", "source1"),
    ("source_2", "source2"),
    ("func", "function"),
    ("fn", "function"),
    ("name", "target"),
    ("feature_cols", "feature_col"),
    ("features", "feature_col"),
    ("target_column", "target_col"),
    ("feature_engineering", "feature_eng"),
];

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for (i, &c1) in s1_chars.iter().enumerate() {
        for (j, &c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            matrix[i + 1][j + 1] = std::cmp::min(
                std::cmp::min(
                    matrix[i][j + 1] + 1, // deletion
                    matrix[i + 1][j] + 1, // insertion
                ),
                matrix[i][j] + cost, // substitution
            );
        }
    }

    matrix[len1][len2]
}
