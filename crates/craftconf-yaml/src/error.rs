//! Error types for YAML transcoding.

use thiserror::Error;

/// Result type alias for craftconf-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or serializing a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// YAML syntax error reported by the scanner.
    #[error("{message}")]
    Syntax {
        message: String,
        /// 1-based line of the offending token, when known.
        line: Option<usize>,
    },

    /// The document decoded to something other than a mapping.
    #[error("document root must be a mapping, found {found}")]
    RootNotMapping { found: &'static str },

    /// The same key appears twice in one mapping.
    #[error("duplicated mapping key '{key}'")]
    DuplicateKey { key: String, line: usize },

    /// A sequence or mapping was used as a mapping key.
    #[error("mapping keys must be scalars")]
    ComplexKey { line: usize },

    /// Nesting exceeds the configured limit.
    #[error("nesting too deep (max depth: {max_depth})")]
    NestingTooDeep {
        max_depth: usize,
        line: Option<usize>,
    },

    /// The decoded tree, alias copies included, exceeds the node limit.
    #[error("document expands to more than {max_nodes} nodes")]
    TooManyNodes {
        max_nodes: usize,
        line: Option<usize>,
    },

    /// The emitter failed to write the document.
    #[error("failed to emit YAML: {0}")]
    Emit(String),
}

impl Error {
    /// Line associated with this error, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Syntax { line, .. }
            | Error::NestingTooDeep { line, .. }
            | Error::TooManyNodes { line, .. } => *line,
            Error::DuplicateKey { line, .. } | Error::ComplexKey { line } => Some(*line),
            Error::RootNotMapping { .. } | Error::Emit(_) => None,
        }
    }
}

impl From<yaml_rust2::ScanError> for Error {
    fn from(err: yaml_rust2::ScanError) -> Self {
        Error::Syntax {
            message: err.to_string(),
            line: Some(err.marker().line()),
        }
    }
}

impl From<yaml_rust2::EmitError> for Error {
    fn from(err: yaml_rust2::EmitError) -> Self {
        Error::Emit(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::RootNotMapping { found: "sequence" };
        assert_eq!(
            err.to_string(),
            "document root must be a mapping, found sequence"
        );

        let err = Error::DuplicateKey {
            key: "debug".into(),
            line: 3,
        };
        assert_eq!(err.to_string(), "duplicated mapping key 'debug'");
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_emit_error_has_no_line() {
        assert_eq!(Error::Emit("boom".into()).line(), None);
    }
}
