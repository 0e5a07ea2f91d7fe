//! Serialization of [`Mapping`] trees back to YAML text.
//!
//! Output is produced by `yaml-rust2`'s emitter, which gives stable formatting:
//! 2-space indentation, no line wrapping, and no anchors or aliases. Every
//! repeated sub-structure is written out in full, so the text re-parses
//! without alias support.

use yaml_rust2::yaml::Hash;
use yaml_rust2::{Yaml, YamlEmitter};

use crate::parser::resolve_plain;
use crate::{Error, Mapping, Node, Result, Scalar};

/// Options for serialization.
#[derive(Debug, Clone)]
pub struct SerializeOptions {
    /// Maximum nesting depth (default: 256).
    ///
    /// Serialization fails with `Error::NestingTooDeep` beyond this depth.
    pub max_depth: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// Serialize a document, optionally prefixed with a header.
///
/// A non-empty `header` is written verbatim before the body; no blank lines
/// are added or removed. The body always ends with a newline.
///
/// # Example
///
/// ```rust
/// use craftconf_yaml::{parse_document, serialize};
///
/// let doc = parse_document("debug: HIGHEST").unwrap();
/// let text = serialize(&doc, Some("# DeluxeMenus\n\n")).unwrap();
/// assert_eq!(text, "# DeluxeMenus\n\ndebug: HIGHEST\n");
/// ```
///
/// # Errors
///
/// Returns an error if the document nests deeper than the default limit or
/// the emitter fails.
pub fn serialize(document: &Mapping, header: Option<&str>) -> Result<String> {
    serialize_with_options(document, header, &SerializeOptions::default())
}

/// Serialize a document with custom options.
pub fn serialize_with_options(
    document: &Mapping,
    header: Option<&str>,
    options: &SerializeOptions,
) -> Result<String> {
    let yaml = mapping_to_yaml(document, 1, options)?;

    let mut emitted = String::new();
    {
        let mut emitter = YamlEmitter::new(&mut emitted);
        emitter.dump(&yaml)?;
    }

    // The emitter always opens with a document start marker.
    let body = emitted
        .strip_prefix("---")
        .map_or(emitted.as_str(), |rest| rest.trim_start_matches('\n'));

    let mut out = String::with_capacity(header.map_or(0, str::len) + body.len() + 1);
    if let Some(header) = header {
        out.push_str(header);
    }
    out.push_str(body);
    out.push('\n');
    Ok(out)
}

fn mapping_to_yaml(map: &Mapping, depth: usize, options: &SerializeOptions) -> Result<Yaml> {
    check_depth(depth, options)?;
    let mut hash = Hash::new();
    for (key, value) in map {
        hash.insert(
            Yaml::String(key.clone()),
            node_to_yaml(value, depth + 1, options)?,
        );
    }
    Ok(Yaml::Hash(hash))
}

fn node_to_yaml(node: &Node, depth: usize, options: &SerializeOptions) -> Result<Yaml> {
    match node {
        Node::Scalar(scalar) => Ok(scalar_to_yaml(scalar)),
        Node::Sequence(items) => {
            check_depth(depth, options)?;
            let items = items
                .iter()
                .map(|item| node_to_yaml(item, depth + 1, options))
                .collect::<Result<Vec<_>>>()?;
            Ok(Yaml::Array(items))
        }
        Node::Mapping(map) => mapping_to_yaml(map, depth, options),
    }
}

fn check_depth(depth: usize, options: &SerializeOptions) -> Result<()> {
    if depth > options.max_depth {
        return Err(Error::NestingTooDeep {
            max_depth: options.max_depth,
            line: None,
        });
    }
    Ok(())
}

fn scalar_to_yaml(scalar: &Scalar) -> Yaml {
    match scalar {
        Scalar::Null => Yaml::Null,
        Scalar::Bool(b) => Yaml::Boolean(*b),
        Scalar::Integer(i) => Yaml::Integer(*i),
        Scalar::Float(f) => Yaml::Real(format_float(*f)),
        Scalar::String(s) if reads_back_as_string(s) => Yaml::String(s.clone()),
        // The emitter writes `Real` text verbatim, which lets us pick the quoting.
        Scalar::String(s) => Yaml::Real(single_quoted(s)),
    }
}

/// Whether `s`, written as a plain scalar, would parse back as the same
/// string. The emitter's own quoting check does not cover every core-schema
/// form (`+.inf`, for one), so the parser's resolution decides.
fn reads_back_as_string(s: &str) -> bool {
    matches!(resolve_plain(s), Scalar::String(ref plain) if plain == s)
}

fn single_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Format a float so that it re-parses as a float, never as an integer.
pub(crate) fn format_float(f: f64) -> String {
    if f.is_nan() {
        ".nan".to_string()
    } else if f.is_infinite() {
        let text = if f.is_sign_negative() { "-.inf" } else { ".inf" };
        text.to_string()
    } else {
        // Debug keeps a fractional part or exponent ("1.0", "1e21").
        format!("{f:?}")
    }
}
