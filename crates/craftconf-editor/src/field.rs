//! Field tables, projections and the shared section reducer.
//!
//! A section is a static table of [`FieldSpec`]s. Projecting a section reads
//! every field from a [`Document`] with its default; reducing an edit checks
//! that the edit targets one of the fields and that its value has the
//! field's superficial type, then delegates to the document store.

use craftconf_document::{Document, Node, Scalar};
use serde::Serialize;

use crate::error::EditError;

/// The widget-level type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "options", rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Number,
    Toggle,
    /// One of a fixed set of strings.
    Select(&'static [&'static str]),
    StringList,
    /// An open-ended mapping of names to scalars, such as block limits.
    KeyValues,
}

impl FieldKind {
    /// Superficial check of a whole field value.
    pub fn accepts(&self, value: &Node) -> bool {
        match self {
            FieldKind::Text => value.as_str().is_some(),
            FieldKind::Number => value.as_f64().is_some(),
            FieldKind::Toggle => value.as_bool().is_some(),
            FieldKind::Select(options) => value.as_str().is_some_and(|v| options.contains(&v)),
            FieldKind::StringList => value
                .as_sequence()
                .is_some_and(|items| items.iter().all(|item| item.as_str().is_some())),
            FieldKind::KeyValues => value
                .as_mapping()
                .is_some_and(|map| map.values().all(is_entry_value)),
        }
    }

    /// Short description used in error messages.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::Text => "a string",
            FieldKind::Number => "a number",
            FieldKind::Toggle => "a boolean",
            FieldKind::Select(_) => "one of the listed options",
            FieldKind::StringList => "a list of strings",
            FieldKind::KeyValues => "a mapping of key-value entries",
        }
    }
}

/// Entries of a key-value field are non-null scalars.
fn is_entry_value(value: &Node) -> bool {
    value.is_scalar() && !value.is_null()
}

/// Default shown when a field is missing or has the wrong type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Text(&'static str),
    Integer(i64),
    Toggle(bool),
    List(&'static [&'static str]),
    Entries(&'static [(&'static str, i64)]),
}

impl DefaultValue {
    pub fn to_node(&self) -> Node {
        match *self {
            DefaultValue::Text(text) => Node::from(text),
            DefaultValue::Integer(n) => Node::from(n),
            DefaultValue::Toggle(b) => Node::from(b),
            DefaultValue::List(items) => Node::from(items.to_vec()),
            DefaultValue::Entries(entries) => Node::Mapping(craftconf_document::mapping(
                entries.iter().copied(),
            )),
        }
    }
}

/// One editable setting of a section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    /// Path relative to the section's base (the document root, or a menu).
    pub path: &'static [&'static str],
    pub kind: FieldKind,
    pub default: DefaultValue,
}

impl FieldSpec {
    pub const fn text(
        id: &'static str,
        label: &'static str,
        path: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            path,
            kind: FieldKind::Text,
            default: DefaultValue::Text(default),
        }
    }

    pub const fn number(
        id: &'static str,
        label: &'static str,
        path: &'static [&'static str],
        default: i64,
    ) -> Self {
        Self {
            id,
            label,
            path,
            kind: FieldKind::Number,
            default: DefaultValue::Integer(default),
        }
    }

    pub const fn toggle(
        id: &'static str,
        label: &'static str,
        path: &'static [&'static str],
        default: bool,
    ) -> Self {
        Self {
            id,
            label,
            path,
            kind: FieldKind::Toggle,
            default: DefaultValue::Toggle(default),
        }
    }

    pub const fn select(
        id: &'static str,
        label: &'static str,
        path: &'static [&'static str],
        options: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            path,
            kind: FieldKind::Select(options),
            default: DefaultValue::Text(default),
        }
    }

    pub const fn string_list(
        id: &'static str,
        label: &'static str,
        path: &'static [&'static str],
        default: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            label,
            path,
            kind: FieldKind::StringList,
            default: DefaultValue::List(default),
        }
    }

    pub const fn key_values(
        id: &'static str,
        label: &'static str,
        path: &'static [&'static str],
        default: &'static [(&'static str, i64)],
    ) -> Self {
        Self {
            id,
            label,
            path,
            kind: FieldKind::KeyValues,
            default: DefaultValue::Entries(default),
        }
    }
}

/// A field together with its current value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    #[serde(flatten)]
    pub spec: FieldSpec,
    pub value: Node,
}

/// A single change requested by an editor form.
///
/// Paths are relative to the section's base, like [`FieldSpec::path`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Set {
        path: Vec<String>,
        value: Node,
    },
    SetKey {
        path: Vec<String>,
        key: String,
        value: Node,
    },
    DeleteKey {
        path: Vec<String>,
        key: String,
    },
}

impl FieldEdit {
    pub fn set<S: AsRef<str>>(path: &[S], value: impl Into<Node>) -> Self {
        FieldEdit::Set {
            path: owned(path),
            value: value.into(),
        }
    }

    pub fn set_key<S: AsRef<str>>(path: &[S], key: &str, value: impl Into<Node>) -> Self {
        FieldEdit::SetKey {
            path: owned(path),
            key: key.to_string(),
            value: value.into(),
        }
    }

    pub fn delete_key<S: AsRef<str>>(path: &[S], key: &str) -> Self {
        FieldEdit::DeleteKey {
            path: owned(path),
            key: key.to_string(),
        }
    }

    /// The full path the edit writes to or removes.
    fn target(&self) -> Vec<&str> {
        let (path, key) = match self {
            FieldEdit::Set { path, .. } => (path, None),
            FieldEdit::SetKey { path, key, .. } | FieldEdit::DeleteKey { path, key } => {
                (path, Some(key.as_str()))
            }
        };
        path.iter().map(String::as_str).chain(key).collect()
    }

    fn value(&self) -> Option<&Node> {
        match self {
            FieldEdit::Set { value, .. } | FieldEdit::SetKey { value, .. } => Some(value),
            FieldEdit::DeleteKey { .. } => None,
        }
    }
}

fn owned<S: AsRef<str>>(path: &[S]) -> Vec<String> {
    path.iter().map(|s| s.as_ref().to_string()).collect()
}

/// Read every field of a table, relative to `base`.
///
/// A value with the wrong superficial type shows the field's default.
pub(crate) fn project(fields: &'static [FieldSpec], document: &Document, base: &[&str]) -> Vec<Field> {
    fields
        .iter()
        .map(|spec| {
            let path = join(base, spec.path);
            let default = spec.default.to_node();
            let value = document.get(&path, default.clone());
            let value = if spec.kind.accepts(&value) {
                value
            } else {
                default
            };
            Field { spec: *spec, value }
        })
        .collect()
}

/// Apply `edit` to `document` if it targets one of `fields`.
///
/// A target equal to a field path must carry a value the field accepts. A
/// target one level below a key-value field edits a single entry. Anything
/// else is out of section.
pub(crate) fn reduce(
    section: &'static str,
    fields: &'static [FieldSpec],
    document: &Document,
    base: &[&str],
    edit: &FieldEdit,
) -> Result<Document, EditError> {
    let target = edit.target();
    let spec = fields
        .iter()
        .find(|spec| covers(spec, &target))
        .ok_or_else(|| EditError::OutOfSection {
            section,
            path: target.join("."),
        })?;

    if let Some(value) = edit.value() {
        check_value(spec, target.len() > spec.path.len(), value)?;
    }

    let next = match edit {
        FieldEdit::Set { path, value } => document.set(&join(base, path), value.clone()),
        FieldEdit::SetKey { path, key, value } => {
            document.set_key(&join(base, path), key, value.clone())
        }
        FieldEdit::DeleteKey { path, key } => document.delete_key(&join(base, path), key),
    };
    tracing::debug!(section, field = spec.id, "applied field edit");
    Ok(next)
}

fn covers(spec: &FieldSpec, target: &[&str]) -> bool {
    if target == spec.path {
        return true;
    }
    spec.kind == FieldKind::KeyValues
        && target.len() == spec.path.len() + 1
        && target.starts_with(spec.path)
}

fn check_value(spec: &FieldSpec, is_entry: bool, value: &Node) -> Result<(), EditError> {
    if is_entry {
        if is_entry_value(value) {
            return Ok(());
        }
        return Err(EditError::TypeMismatch {
            field: spec.id,
            expected: "a scalar entry value",
            found: value.kind_name(),
        });
    }

    if spec.kind.accepts(value) {
        return Ok(());
    }
    match (spec.kind, value) {
        (FieldKind::Select(options), Node::Scalar(Scalar::String(text))) => {
            Err(EditError::InvalidOption {
                field: spec.id,
                value: text.clone(),
                options: options.join(", "),
            })
        }
        _ => Err(EditError::TypeMismatch {
            field: spec.id,
            expected: spec.kind.expected(),
            found: value.kind_name(),
        }),
    }
}

fn join<S: AsRef<str>>(base: &[&str], path: &[S]) -> Vec<String> {
    base.iter()
        .map(|s| s.to_string())
        .chain(path.iter().map(|s| s.as_ref().to_string()))
        .collect()
}
