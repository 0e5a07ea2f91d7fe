//! # craftconf-yaml
//!
//! YAML transcoding for plugin configuration files.
//!
//! This crate converts YAML text into a generic, mapping-rooted [`Node`] tree
//! and back. It is domain-agnostic: keys are opaque strings.
//!
//! ## Design
//!
//! - **Parse** builds the tree from `yaml-rust2` parser events. Aliases are
//!   expanded, keys are normalized to strings, and a non-mapping root is
//!   rejected.
//! - **Header** extraction keeps the leading comment block of a file as an
//!   opaque string, since comments do not survive the tree.
//! - **Serialize** writes the tree with `yaml-rust2`'s emitter and prefixes
//!   the header verbatim.
//!
//! Parsing the serialized output of a parsed document yields a structurally
//! equal document.
//!
//! ## Example
//!
//! ```rust
//! use craftconf_yaml::{extract_header, parse, serialize};
//!
//! let source = "# Banner\n\ndebug: HIGHEST\ncheck_updates: true\n";
//! let header = extract_header(source);
//! let result = parse(source);
//! assert!(result.is_valid);
//!
//! let data = result.parsed_data.unwrap();
//! let text = serialize(&data, Some(header)).unwrap();
//! assert!(text.starts_with("# Banner\n\n"));
//! ```

mod emitter;
mod error;
mod header;
mod node;
mod parser;
mod validation;

pub use emitter::{SerializeOptions, serialize, serialize_with_options};
pub use error::{Error, Result};
pub use header::extract_header;
pub use node::{Mapping, Node, Scalar, mapping, mappings_identical};
pub use parser::{ParseOptions, parse_document, parse_document_with_options};
pub use validation::{
    ROOT_PATH, ValidationError, ValidationResult, parse, parse_with_options,
};
