//! YAML parser that builds [`Mapping`] trees.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser, Tag};
use yaml_rust2::scanner::{Marker, TScalarStyle};

use crate::{Error, Mapping, Node, Result, Scalar};

/// Options for parsing.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum nesting depth of collections (default: 256).
    pub max_depth: usize,

    /// Maximum number of nodes in the decoded tree, counting every copy made
    /// by alias expansion (default: 1,000,000).
    pub max_nodes: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: 256,
            max_nodes: 1_000_000,
        }
    }
}

/// Parse YAML text into a mapping-rooted tree.
///
/// Only the first document of a stream is read. An empty or comment-only
/// input, or an explicit null document, yields an empty mapping.
///
/// # Example
///
/// ```rust
/// use craftconf_yaml::parse_document;
///
/// let doc = parse_document("debug: HIGHEST\ncheck_updates: true").unwrap();
/// assert_eq!(doc["debug"].as_str(), Some("HIGHEST"));
/// ```
///
/// # Errors
///
/// Returns an error for malformed YAML, duplicate or complex keys, nesting
/// or alias expansion beyond the default limits, or a root that is not a
/// mapping.
pub fn parse_document(content: &str) -> Result<Mapping> {
    parse_document_with_options(content, &ParseOptions::default())
}

/// Parse YAML text with custom options.
pub fn parse_document_with_options(content: &str, options: &ParseOptions) -> Result<Mapping> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = TreeBuilder::new(options);

    parser.load(&mut builder, false)?;

    builder.result()
}

/// Builder that implements MarkedEventReceiver to construct a node tree.
struct TreeBuilder<'a> {
    options: &'a ParseOptions,

    /// Collections under construction, innermost last
    stack: Vec<BuildNode>,

    /// Completed anchored nodes with their node counts, by anchor id
    anchors: HashMap<usize, (Node, usize)>,

    /// Nodes produced so far, alias copies included
    nodes: usize,

    root: Option<Node>,

    /// First error seen; later events are ignored once set
    error: Option<Error>,
}

enum BuildNode {
    Sequence {
        anchor_id: usize,
        items: Vec<Node>,
    },
    Mapping {
        anchor_id: usize,
        entries: Mapping,
        /// Key waiting for its value
        pending_key: Option<Key>,
        /// Keys that came in through `<<` and may still be overridden
        inherited: HashSet<String>,
    },
}

/// A mapping key as read from the source.
enum Key {
    Named(String),
    /// The plain `<<` merge key.
    Merge,
}

impl<'a> TreeBuilder<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            stack: Vec::new(),
            anchors: HashMap::new(),
            nodes: 0,
            root: None,
            error: None,
        }
    }

    fn result(self) -> Result<Mapping> {
        if let Some(err) = self.error {
            return Err(err);
        }

        match self.root {
            None => Ok(Mapping::new()),
            Some(Node::Mapping(map)) => Ok(map),
            Some(node) if node.is_null() => Ok(Mapping::new()),
            Some(node) => Err(Error::RootNotMapping {
                found: node.kind_name(),
            }),
        }
    }

    fn fail(&mut self, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn open(&mut self, node: BuildNode, marker: &Marker) {
        if self.stack.len() >= self.options.max_depth {
            self.fail(Error::NestingTooDeep {
                max_depth: self.options.max_depth,
                line: Some(marker.line()),
            });
            return;
        }
        self.stack.push(node);
    }

    /// Count `count` more nodes against the budget.
    fn charge(&mut self, count: usize, marker: &Marker) -> bool {
        self.nodes = self.nodes.saturating_add(count);
        if self.nodes > self.options.max_nodes {
            self.fail(Error::TooManyNodes {
                max_nodes: self.options.max_nodes,
                line: Some(marker.line()),
            });
            return false;
        }
        true
    }

    /// Attach a finished node to its parent.
    ///
    /// `key` is the scalar's source key when the node is a scalar event; it
    /// is used verbatim when the node lands in key position.
    fn push_complete(&mut self, node: Node, key: Option<Key>, marker: &Marker) {
        let Some(parent) = self.stack.last_mut() else {
            self.root = Some(node);
            return;
        };

        match parent {
            BuildNode::Sequence { items, .. } => items.push(node),
            BuildNode::Mapping {
                entries,
                pending_key,
                inherited,
                ..
            } => match pending_key.take() {
                Some(Key::Named(key)) => {
                    inherited.remove(&key);
                    entries.insert(key, node);
                }
                Some(Key::Merge) => {
                    if let Err(err) = merge_into(entries, inherited, node, marker) {
                        self.fail(err);
                    }
                }
                None => {
                    let key = match key {
                        Some(key) => key,
                        None => match scalar_key(&node) {
                            Some(text) => Key::Named(text),
                            None => {
                                self.fail(Error::ComplexKey {
                                    line: marker.line(),
                                });
                                return;
                            }
                        },
                    };
                    if let Key::Named(text) = &key
                        && entries.contains_key(text)
                        && !inherited.contains(text)
                    {
                        self.fail(Error::DuplicateKey {
                            key: text.clone(),
                            line: marker.line(),
                        });
                        return;
                    }
                    *pending_key = Some(key);
                }
            },
        }
    }

    fn remember(&mut self, anchor_id: usize, node: &Node) {
        if anchor_id > 0 {
            self.anchors
                .insert(anchor_id, (node.clone(), node.node_count()));
        }
    }
}

/// Splice the entries of a `<<` value into `entries`.
///
/// The value is a mapping or a sequence of mappings. Keys already present
/// win, and among several sources the first one to define a key wins.
fn merge_into(
    entries: &mut Mapping,
    inherited: &mut HashSet<String>,
    source: Node,
    marker: &Marker,
) -> Result<()> {
    let sources = match source {
        Node::Mapping(map) => vec![map],
        Node::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                Node::Mapping(map) => Ok(map),
                other => Err(bad_merge(&other, marker)),
            })
            .collect::<Result<Vec<_>>>()?,
        other => return Err(bad_merge(&other, marker)),
    };

    for map in sources {
        for (key, value) in map {
            if !entries.contains_key(&key) {
                inherited.insert(key.clone());
                entries.insert(key, value);
            }
        }
    }
    Ok(())
}

fn bad_merge(node: &Node, marker: &Marker) -> Error {
    Error::Syntax {
        message: format!(
            "merge key expects a mapping or a sequence of mappings, found {}",
            node.kind_name()
        ),
        line: Some(marker.line()),
    }
}

impl MarkedEventReceiver for TreeBuilder<'_> {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        if self.error.is_some() {
            return;
        }

        match ev {
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}

            Event::Scalar(value, style, anchor_id, tag) => {
                if !self.charge(1, &marker) {
                    return;
                }
                let key = if value == "<<" && style == TScalarStyle::Plain && tag.is_none() {
                    Key::Merge
                } else {
                    Key::Named(value.clone())
                };
                let node = Node::Scalar(resolve_scalar(&value, style, tag.as_ref()));
                self.remember(anchor_id, &node);
                self.push_complete(node, Some(key), &marker);
            }

            Event::SequenceStart(anchor_id, _tag) => {
                if !self.charge(1, &marker) {
                    return;
                }
                self.open(
                    BuildNode::Sequence {
                        anchor_id,
                        items: Vec::new(),
                    },
                    &marker,
                );
            }

            Event::SequenceEnd => {
                let Some(BuildNode::Sequence { anchor_id, items }) = self.stack.pop() else {
                    self.fail(unbalanced(&marker));
                    return;
                };
                let node = Node::Sequence(items);
                self.remember(anchor_id, &node);
                self.push_complete(node, None, &marker);
            }

            Event::MappingStart(anchor_id, _tag) => {
                if !self.charge(1, &marker) {
                    return;
                }
                self.open(
                    BuildNode::Mapping {
                        anchor_id,
                        entries: Mapping::new(),
                        pending_key: None,
                        inherited: HashSet::new(),
                    },
                    &marker,
                );
            }

            Event::MappingEnd => {
                let Some(BuildNode::Mapping {
                    anchor_id, entries, ..
                }) = self.stack.pop()
                else {
                    self.fail(unbalanced(&marker));
                    return;
                };
                let node = Node::Mapping(entries);
                self.remember(anchor_id, &node);
                self.push_complete(node, None, &marker);
            }

            Event::Alias(anchor_id) => {
                let Some(&(_, count)) = self.anchors.get(&anchor_id) else {
                    self.fail(Error::Syntax {
                        message: "alias refers to an unknown anchor".into(),
                        line: Some(marker.line()),
                    });
                    return;
                };
                // Charge before copying so an oversized expansion is never built.
                if !self.charge(count, &marker) {
                    return;
                }
                if let Some((node, _)) = self.anchors.get(&anchor_id) {
                    let node = node.clone();
                    self.push_complete(node, None, &marker);
                }
            }
        }
    }
}

fn unbalanced(marker: &Marker) -> Error {
    Error::Syntax {
        message: "unbalanced collection events".into(),
        line: Some(marker.line()),
    }
}

/// Key text for a node that arrived through an alias.
fn scalar_key(node: &Node) -> Option<String> {
    match node {
        Node::Scalar(Scalar::Null) => Some(String::new()),
        Node::Scalar(Scalar::Bool(b)) => Some(b.to_string()),
        Node::Scalar(Scalar::Integer(i)) => Some(i.to_string()),
        Node::Scalar(Scalar::Float(f)) => Some(crate::emitter::format_float(*f)),
        Node::Scalar(Scalar::String(s)) => Some(s.clone()),
        Node::Sequence(_) | Node::Mapping(_) => None,
    }
}

static DECIMAL_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("valid integer pattern"));
static HEX_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]+$").expect("valid hex pattern"));
static FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?(\.[0-9]+|[0-9]+(\.[0-9]*)?)([eE][-+]?[0-9]+)?$")
        .expect("valid float pattern")
});
static INFINITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?\.(inf|Inf|INF)$").expect("valid infinity pattern"));
static NOT_A_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.(nan|NaN|NAN)$").expect("valid nan pattern"));

/// Resolve a scalar event into a typed value.
///
/// Quoted and block scalars, and anything tagged `!!str`, stay strings.
/// Plain scalars follow the YAML 1.2 core schema.
fn resolve_scalar(value: &str, style: TScalarStyle, tag: Option<&Tag>) -> Scalar {
    if tag.is_some_and(|t| t.suffix == "str") || style != TScalarStyle::Plain {
        return Scalar::String(value.to_string());
    }
    resolve_plain(value)
}

pub(crate) fn resolve_plain(value: &str) -> Scalar {
    match value {
        "" | "~" | "null" | "Null" | "NULL" => return Scalar::Null,
        "true" | "True" | "TRUE" => return Scalar::Bool(true),
        "false" | "False" | "FALSE" => return Scalar::Bool(false),
        _ => {}
    }

    if DECIMAL_INT.is_match(value) {
        if let Ok(i) = value.parse::<i64>() {
            return Scalar::Integer(i);
        }
        // Out of i64 range
        if let Ok(f) = value.parse::<f64>() {
            return Scalar::Float(f);
        }
    }

    if HEX_INT.is_match(value)
        && let Ok(i) = i64::from_str_radix(&value[2..], 16)
    {
        return Scalar::Integer(i);
    }

    if FLOAT.is_match(value) {
        if let Ok(f) = value.parse::<f64>() {
            return Scalar::Float(f);
        }
    }

    if INFINITY.is_match(value) {
        return Scalar::Float(if value.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    if NOT_A_NUMBER.is_match(value) {
        return Scalar::Float(f64::NAN);
    }

    Scalar::String(value.to_string())
}
