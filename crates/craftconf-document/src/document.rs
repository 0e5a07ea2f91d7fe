//! Path-addressed configuration document.

use craftconf_yaml::{
    Mapping, Node, SerializeOptions, mappings_identical, parse_document, serialize,
    serialize_with_options,
};
use serde::Serialize;

use crate::from_node::FromNode;

/// A configuration document: a tree rooted at a [`Mapping`].
///
/// Documents have value semantics. [`set`](Document::set),
/// [`set_key`](Document::set_key) and [`delete_key`](Document::delete_key)
/// return a new document and leave the receiver untouched, so a caller
/// holding the previous value can always tell the two states apart.
///
/// None of the operations fail on missing paths: reads fall back to a
/// default, writes create intermediate mappings, and deletes of absent keys
/// are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    root: Mapping,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a parsed mapping.
    pub fn from_mapping(root: Mapping) -> Self {
        Self { root }
    }

    /// Parse YAML text into a document.
    pub fn parse(source: &str) -> craftconf_yaml::Result<Self> {
        parse_document(source).map(Self::from_mapping)
    }

    /// Serialize the document, prefixed with `header` if given.
    pub fn to_yaml(&self, header: Option<&str>) -> craftconf_yaml::Result<String> {
        serialize(&self.root, header)
    }

    /// Serialize with custom options.
    pub fn to_yaml_with_options(
        &self,
        header: Option<&str>,
        options: &SerializeOptions,
    ) -> craftconf_yaml::Result<String> {
        serialize_with_options(&self.root, header, options)
    }

    /// The root mapping.
    pub fn root(&self) -> &Mapping {
        &self.root
    }

    /// Whether both documents would serialize to the same text.
    ///
    /// Stricter than `==`: key order matters and NaN floats match themselves.
    pub fn identical(&self, other: &Document) -> bool {
        mappings_identical(&self.root, &other.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Find the node at `path`.
    ///
    /// Returns `None` if any segment is missing or an intermediate node is
    /// not a mapping. An empty path has no node (the root is a mapping, not
    /// a node); use [`root`](Document::root) or `get` for it.
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let mut current = self.root.get(first.as_ref())?;
        for segment in rest {
            current = current.as_mapping()?.get(segment.as_ref())?;
        }
        Some(current)
    }

    /// Find the mapping at `path`; the empty path resolves to the root.
    pub fn lookup_mapping<S: AsRef<str>>(&self, path: &[S]) -> Option<&Mapping> {
        if path.is_empty() {
            return Some(&self.root);
        }
        self.lookup(path)?.as_mapping()
    }

    /// Check whether `path` resolves to a node.
    pub fn contains<S: AsRef<str>>(&self, path: &[S]) -> bool {
        self.lookup(path).is_some()
    }

    /// Read the value at `path`, or `default` if it is missing or has the
    /// wrong shape for `T`.
    ///
    /// The empty path reads the whole root, which only mapping-shaped `T`
    /// accept.
    ///
    /// # Example
    ///
    /// ```rust
    /// use craftconf_document::Document;
    ///
    /// let doc = Document::parse("entities:\n  merge-radius:\n    all: 10\n").unwrap();
    /// assert_eq!(doc.get(&["entities", "merge-radius", "all"], 5_i64), 10);
    /// assert_eq!(doc.get(&["entities", "enabled"], true), true);
    /// assert_eq!(doc.get(&["entities", "merge-radius", "all", "deeper"], 0_i64), 0);
    /// ```
    pub fn get<T: FromNode, S: AsRef<str>>(&self, path: &[S], default: T) -> T {
        let value = if path.is_empty() {
            T::from_mapping(&self.root)
        } else {
            self.lookup(path).and_then(T::from_node)
        };
        value.unwrap_or(default)
    }

    /// Return a new document with `value` written at `path`.
    ///
    /// Intermediate segments that are missing or hold a non-mapping value
    /// are replaced with fresh mappings.
    ///
    /// With an empty path, a mapping value replaces the whole root; any
    /// other value leaves the document unchanged.
    pub fn set<S: AsRef<str>>(&self, path: &[S], value: impl Into<Node>) -> Document {
        let value = value.into();
        let mut next = self.clone();

        let Some((last, parents)) = path.split_last() else {
            match value {
                Node::Mapping(map) => next.root = map,
                other => tracing::warn!(
                    kind = other.kind_name(),
                    "ignoring write of a non-mapping value to the document root"
                ),
            }
            return next;
        };

        if let Some(parent) = ensure_mapping_path(&mut next.root, parents) {
            parent.insert(last.as_ref().to_string(), value);
        }
        next
    }

    /// Return a new document with `key` set inside the mapping at `path`.
    ///
    /// Same as `set` on the path extended by `key`; meant for keys that are
    /// only known at runtime, such as entries of a block-limit table.
    pub fn set_key<S: AsRef<str>>(
        &self,
        path: &[S],
        key: &str,
        value: impl Into<Node>,
    ) -> Document {
        let mut next = self.clone();
        if let Some(parent) = ensure_mapping_path(&mut next.root, path) {
            parent.insert(key.to_string(), value.into());
        }
        next
    }

    /// Return a new document without `key` in the mapping at `path`.
    ///
    /// If `path` does not resolve to a mapping, or the key is absent, the
    /// result equals the original. Remaining keys keep their order.
    pub fn delete_key<S: AsRef<str>>(&self, path: &[S], key: &str) -> Document {
        let present = self
            .lookup_mapping(path)
            .is_some_and(|map| map.contains_key(key));
        if !present {
            return self.clone();
        }

        let mut next = self.clone();
        if let Some(map) = lookup_mapping_mut(&mut next.root, path) {
            map.shift_remove(key);
        }
        next
    }
}

impl From<Mapping> for Document {
    fn from(root: Mapping) -> Self {
        Self::from_mapping(root)
    }
}

/// Walk `path` from `root`, replacing missing or non-mapping nodes with
/// empty mappings, and return the mapping at the end.
fn ensure_mapping_path<'m, S: AsRef<str>>(
    root: &'m mut Mapping,
    path: &[S],
) -> Option<&'m mut Mapping> {
    let mut current = root;
    for segment in path {
        let slot = current
            .entry(segment.as_ref().to_string())
            .or_insert_with(Node::empty_mapping);
        if !slot.is_mapping() {
            *slot = Node::empty_mapping();
        }
        current = slot.as_mapping_mut()?;
    }
    Some(current)
}

fn lookup_mapping_mut<'m, S: AsRef<str>>(
    root: &'m mut Mapping,
    path: &[S],
) -> Option<&'m mut Mapping> {
    let mut current = root;
    for segment in path {
        current = current.get_mut(segment.as_ref())?.as_mapping_mut()?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftconf_yaml::mapping;

    const DELUXEMENUS: &str =
        "debug: HIGHEST\ncheck_updates: true\ngui_menus:\n  menu_a:\n    file: menu_a.yml\n";

    fn sample() -> Document {
        Document::parse(DELUXEMENUS).unwrap()
    }

    #[test]
    fn test_get_resolves_paths() {
        let doc = sample();
        assert_eq!(doc.get(&["debug"], "x".to_string()), "HIGHEST");
        assert_eq!(
            doc.get(&["gui_menus", "menu_a", "file"], String::new()),
            "menu_a.yml"
        );
        assert!(doc.get(&["check_updates"], false));
    }

    #[test]
    fn test_get_falls_back_on_missing_or_blocked_paths() {
        let doc = sample();
        assert_eq!(doc.get(&["missing"], 7_i64), 7);
        assert_eq!(doc.get(&["debug", "below-a-scalar"], 7_i64), 7);
        assert_eq!(doc.get(&["gui_menus", "nope", "file"], "none".to_string()), "none");
    }

    #[test]
    fn test_get_falls_back_on_type_mismatch() {
        let doc = sample();
        assert_eq!(doc.get(&["debug"], 3_i64), 3);
        assert!(!doc.get(&["gui_menus"], false));
    }

    #[test]
    fn test_get_null_value() {
        let doc = Document::parse("prefix: ~\n").unwrap();
        assert_eq!(doc.get(&["prefix"], "dflt".to_string()), "dflt");
        assert_eq!(doc.get(&["prefix"], Some(1_i64)), None);
        assert!(doc.get(&["prefix"], Node::from(1)).is_null());
    }

    #[test]
    fn test_get_empty_path_returns_root() {
        let doc = sample();
        let root: Mapping = doc.get::<Mapping, &str>(&[], Mapping::new());
        assert_eq!(&root, doc.root());
        assert_eq!(doc.get::<i64, &str>(&[], 9), 9);
    }

    #[test]
    fn test_get_accepts_owned_segments() {
        let doc = sample();
        let menu = "menu_a".to_string();
        let path = vec!["gui_menus".to_string(), menu, "file".to_string()];
        assert_eq!(doc.get(&path, String::new()), "menu_a.yml");
    }

    #[test]
    fn test_set_creates_intermediates() {
        let doc = Document::new().set(&["entities", "merge-radius", "all"], 10);
        assert_eq!(doc.get(&["entities", "merge-radius", "all"], 0_i64), 10);
    }

    #[test]
    fn test_set_overwrites_scalar_intermediate() {
        let doc = sample().set(&["debug", "level"], "HIGH");
        assert_eq!(doc.get(&["debug", "level"], String::new()), "HIGH");
        assert!(doc.lookup(&["debug"]).unwrap().is_mapping());
    }

    #[test]
    fn test_set_keeps_siblings_and_order() {
        let doc = sample().set(&["gui_menus", "menu_b", "file"], "menu_b.yml");
        assert_eq!(doc.get(&["gui_menus", "menu_a", "file"], String::new()), "menu_a.yml");
        let keys: Vec<&String> = doc.lookup_mapping(&["gui_menus"]).unwrap().keys().collect();
        assert_eq!(keys, vec!["menu_a", "menu_b"]);

        let top: Vec<&String> = doc.root().keys().collect();
        assert_eq!(top, vec!["debug", "check_updates", "gui_menus"]);
    }

    #[test]
    fn test_set_replaces_existing_value_in_place() {
        let doc = sample().set(&["debug"], "LOWEST");
        let top: Vec<&String> = doc.root().keys().collect();
        assert_eq!(top, vec!["debug", "check_updates", "gui_menus"]);
        assert_eq!(doc.get(&["debug"], String::new()), "LOWEST");
    }

    #[test]
    fn test_set_does_not_touch_original() {
        let original = sample();
        let updated = original.set(&["debug"], "LOWEST");
        assert_eq!(original.get(&["debug"], String::new()), "HIGHEST");
        assert_ne!(original, updated);
    }

    #[test]
    fn test_set_empty_path() {
        let doc = sample();
        let replaced = doc.set::<&str>(&[], Node::Mapping(mapping([("fresh", true)])));
        assert_eq!(replaced.root().len(), 1);
        assert!(replaced.get(&["fresh"], false));

        let unchanged = doc.set::<&str>(&[], 5);
        assert_eq!(unchanged, doc);
    }

    #[test]
    fn test_set_key() {
        let doc = Document::new()
            .set_key(&["default-values", "block-limits"], "HOPPER", 8)
            .set_key(&["default-values", "block-limits"], "SPAWNER", 4);
        let limits = doc.lookup_mapping(&["default-values", "block-limits"]).unwrap();
        assert_eq!(limits.len(), 2);
        assert_eq!(doc.get(&["default-values", "block-limits", "HOPPER"], 0_i64), 8);
    }

    #[test]
    fn test_set_key_with_empty_path_writes_top_level() {
        let doc = Document::new().set_key::<&str>(&[], "debug", "HIGHEST");
        assert_eq!(doc.get(&["debug"], String::new()), "HIGHEST");
    }

    #[test]
    fn test_delete_key() {
        let doc = sample().delete_key(&["gui_menus"], "menu_a");
        assert_eq!(
            doc.get(&["gui_menus", "menu_a", "file"], "none".to_string()),
            "none"
        );
        assert!(doc.lookup_mapping(&["gui_menus"]).unwrap().is_empty());
    }

    #[test]
    fn test_delete_key_preserves_order() {
        let doc = Document::parse("a: 1\nb: 2\nc: 3\n").unwrap().delete_key::<&str>(&[], "b");
        let keys: Vec<&String> = doc.root().keys().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_delete_key_noops() {
        let doc = sample();
        assert_eq!(doc.delete_key(&["gui_menus"], "absent"), doc);
        assert_eq!(doc.delete_key(&["nowhere", "deeper"], "menu_a"), doc);
        assert_eq!(doc.delete_key(&["debug"], "anything"), doc);
    }

    #[test]
    fn test_serializes_as_root_mapping() {
        let doc = Document::new().set(&["a"], 1);
        assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_identical() {
        let doc = Document::parse("rate: .nan
debug: LOW
").unwrap();
        assert_ne!(doc, doc.clone());
        assert!(doc.identical(&doc.set(&["debug"], "LOW")));
        assert!(!doc.identical(&doc.set(&["debug"], "HIGH")));

        let reordered = Document::parse("debug: LOW
rate: .nan
").unwrap();
        assert!(!doc.identical(&reordered));
    }
}
