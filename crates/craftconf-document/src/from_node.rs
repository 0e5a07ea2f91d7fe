//! Typed extraction of node values.
//!
//! [`FromNode`] is the superficial type check behind `Document::get`: a node
//! that does not have the requested shape converts to `None`, and the caller's
//! default wins.

use craftconf_yaml::{Mapping, Node};
use indexmap::IndexMap;

/// Conversion from a borrowed [`Node`] into an owned typed value.
pub trait FromNode: Sized {
    /// Convert a node, or `None` if it has the wrong shape.
    fn from_node(node: &Node) -> Option<Self>;

    /// Convert a whole document root.
    ///
    /// Only mapping-shaped targets accept a root; everything else returns
    /// `None`.
    fn from_mapping(_map: &Mapping) -> Option<Self> {
        None
    }
}

impl FromNode for Node {
    fn from_node(node: &Node) -> Option<Self> {
        Some(node.clone())
    }

    fn from_mapping(map: &Mapping) -> Option<Self> {
        Some(Node::Mapping(map.clone()))
    }
}

impl FromNode for bool {
    fn from_node(node: &Node) -> Option<Self> {
        node.as_bool()
    }
}

impl FromNode for i64 {
    fn from_node(node: &Node) -> Option<Self> {
        node.as_i64()
    }
}

impl FromNode for f64 {
    /// Integers widen to floats.
    fn from_node(node: &Node) -> Option<Self> {
        node.as_f64()
    }
}

impl FromNode for String {
    fn from_node(node: &Node) -> Option<Self> {
        node.as_str().map(str::to_string)
    }
}

impl<T: FromNode> FromNode for Option<T> {
    /// Null converts to `Some(None)`; any other node must convert to `T`.
    fn from_node(node: &Node) -> Option<Self> {
        if node.is_null() {
            Some(None)
        } else {
            T::from_node(node).map(Some)
        }
    }

    fn from_mapping(map: &Mapping) -> Option<Self> {
        T::from_mapping(map).map(Some)
    }
}

impl<T: FromNode> FromNode for Vec<T> {
    /// Every item must convert; one bad item rejects the whole sequence.
    fn from_node(node: &Node) -> Option<Self> {
        node.as_sequence()?.iter().map(T::from_node).collect()
    }
}

impl<T: FromNode> FromNode for IndexMap<String, T> {
    /// Every value must convert; one bad value rejects the whole mapping.
    fn from_node(node: &Node) -> Option<Self> {
        Self::from_mapping(node.as_mapping()?)
    }

    fn from_mapping(map: &Mapping) -> Option<Self> {
        map.iter()
            .map(|(k, v)| T::from_node(v).map(|v| (k.clone(), v)))
            .collect()
    }
}
