//! Error types for the editor layer.
//!
//! None of these leave a session or document modified: every operation that
//! can fail builds its result on a copy and only commits on success.

use craftconf_yaml::ValidationResult;
use thiserror::Error;

use crate::plugin::Plugin;

/// A field edit rejected by a section reducer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// The edit targets a path that no field of the section covers.
    #[error("'{path}' is not editable in section '{section}'")]
    OutOfSection { section: &'static str, path: String },

    /// The value has the wrong shape for the field.
    #[error("field '{field}' expects {expected}, found {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A select field was given a value outside its options.
    #[error("'{value}' is not a valid option for '{field}' (expected one of: {options})")]
    InvalidOption {
        field: &'static str,
        value: String,
        options: String,
    },

    /// The section belongs to another plugin than the session.
    #[error("section belongs to {found}, but this session edits {expected}")]
    PluginMismatch { expected: Plugin, found: Plugin },
}

/// A DeluxeMenus menu or item operation that could not be applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    #[error("menu name cannot be empty")]
    EmptyName,

    #[error("a menu named '{0}' already exists")]
    DuplicateMenu(String),

    #[error("no menu named '{0}'")]
    UnknownMenu(String),

    #[error("item id cannot be empty")]
    EmptyItemId,

    #[error("menu '{menu}' already has an item '{item}'")]
    DuplicateItem { menu: String, item: String },

    #[error("menu '{menu}' has no item '{item}'")]
    UnknownItem { menu: String, item: String },

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Serialize(#[from] craftconf_yaml::Error),
}

/// Errors raised by [`EditorSession`](crate::EditorSession).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// The source text could not be opened as a document.
    #[error("invalid configuration: {}", summarize(.0))]
    Invalid(Box<ValidationResult>),

    #[error(transparent)]
    Serialize(#[from] craftconf_yaml::Error),

    #[error(transparent)]
    Edit(#[from] EditError),
}

impl EditorError {
    /// The validation result behind an [`Invalid`](EditorError::Invalid)
    /// error.
    pub fn validation(&self) -> Option<&ValidationResult> {
        match self {
            EditorError::Invalid(result) => Some(result),
            _ => None,
        }
    }
}

fn summarize(result: &ValidationResult) -> String {
    match result.errors.first() {
        Some(first) => match first.line {
            Some(line) => format!("{} (line {})", first.message, line),
            None => first.message.clone(),
        },
        None => "unknown error".to_string(),
    }
}
