//! Parse results in the shape consumed by editor front ends.
//!
//! [`parse`] never fails: every decoder error is folded into a
//! [`ValidationResult`] with `is_valid == false`. The result serializes to
//! JSON as `{"isValid", "errors", "parsedData"}`.

use serde::Serialize;

use crate::parser::{ParseOptions, parse_document_with_options};
use crate::{Error, Mapping};

/// Path reported for errors that concern the whole document.
pub const ROOT_PATH: &str = "root";

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Dotted path of the offending value, or `"root"`.
    pub path: String,
    pub message: String,
    /// 1-based source line, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            line: None,
        }
    }

    pub fn with_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }
}

impl From<&Error> for ValidationError {
    fn from(err: &Error) -> Self {
        ValidationError::new(ROOT_PATH, err.to_string()).with_line(err.line())
    }
}

/// Outcome of a parse or validation attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_data: Option<Mapping>,
}

impl ValidationResult {
    /// A successful result carrying the parsed document.
    pub fn valid(data: Mapping) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            parsed_data: Some(data),
        }
    }

    /// A failed result. `is_valid` is false even if `errors` is empty.
    pub fn invalid(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: false,
            errors,
            parsed_data: None,
        }
    }

    /// A result built from collected errors: valid only if there are none.
    pub fn from_errors(errors: Vec<ValidationError>, data: Option<Mapping>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            parsed_data: data,
        }
    }

    /// The parsed document, if the result is valid.
    pub fn into_data(self) -> Option<Mapping> {
        if self.is_valid { self.parsed_data } else { None }
    }
}

impl From<Error> for ValidationResult {
    fn from(err: Error) -> Self {
        ValidationResult::invalid(vec![ValidationError::from(&err)])
    }
}

/// Parse YAML text into a validation result.
///
/// # Example
///
/// ```rust
/// use craftconf_yaml::parse;
///
/// let result = parse("key: [unclosed");
/// assert!(!result.is_valid);
/// assert_eq!(result.errors[0].path, "root");
/// ```
pub fn parse(source: &str) -> ValidationResult {
    parse_with_options(source, &ParseOptions::default())
}

/// Parse YAML text into a validation result with custom options.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> ValidationResult {
    match parse_document_with_options(source, options) {
        Ok(data) => ValidationResult::valid(data),
        Err(err) => {
            tracing::debug!(line = ?err.line(), error = %err, "YAML parse failed");
            ValidationResult::from(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let result = parse("debug: HIGHEST\ncheck_updates: true\n");
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        let data = result.parsed_data.unwrap();
        assert_eq!(data["debug"].as_str(), Some("HIGHEST"));
        assert_eq!(data["check_updates"].as_bool(), Some(true));
    }

    #[test]
    fn test_parse_malformed_never_panics() {
        let result = parse("key: [unclosed");
        assert!(!result.is_valid);
        assert!(result.parsed_data.is_none());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path, ROOT_PATH);
        assert!(!result.errors[0].message.is_empty());
        assert!(result.errors[0].line.is_some());
    }

    #[test]
    fn test_parse_rejects_sequence_root() {
        let result = parse("- one\n- two\n");
        assert!(!result.is_valid);
        assert_eq!(
            result.errors[0].message,
            "document root must be a mapping, found sequence"
        );
        assert_eq!(result.errors[0].line, None);
    }

    #[test]
    fn test_into_data() {
        assert!(parse("a: 1").into_data().is_some());
        assert!(parse("a: [").into_data().is_none());
    }

    #[test]
    fn test_from_errors() {
        assert!(ValidationResult::from_errors(Vec::new(), None).is_valid);
        let result =
            ValidationResult::from_errors(vec![ValidationError::new("a", "bad")], None);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_json_shape() {
        let result = parse("debug: HIGHEST\nsize: 27\n");
        let json = serde_json::to_string_pretty(&result).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "isValid": true,
          "errors": [],
          "parsedData": {
            "debug": "HIGHEST",
            "size": 27
          }
        }
        "#);
    }

    #[test]
    fn test_json_shape_of_error() {
        let result = ValidationResult::invalid(vec![
            ValidationError::new("entities.enabled", "Enabled must be a boolean"),
            ValidationError::new(ROOT_PATH, "broken").with_line(Some(4)),
        ]);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"isValid":false,"errors":[{"path":"entities.enabled","message":"Enabled must be a boolean"},{"path":"root","message":"broken","line":4}]}"#
        );
    }
}
