//! Path-addressed configuration documents.
//!
//! This crate provides [`Document`], the in-memory form of one plugin
//! configuration file, with safe read/write/delete operations addressed by
//! string-segment paths.
//!
//! # Key Features
//!
//! - **Total reads**: [`Document::get`] never fails; a missing path or a
//!   value of the wrong shape yields the caller's default
//! - **Create-as-needed writes**: [`Document::set`] and
//!   [`Document::set_key`] create intermediate mappings
//! - **Value semantics**: every write returns a new `Document`
//! - **Open key sets**: keys are opaque strings, so tables such as block
//!   limits are ordinary mappings
//!
//! # Example
//!
//! ```rust
//! use craftconf_document::Document;
//!
//! let doc = Document::parse("debug: HIGHEST\ngui_menus:\n  menu_a:\n    file: menu_a.yml\n")
//!     .unwrap();
//!
//! let doc = doc.set_key(&["gui_menus", "menu_b"], "file", "menu_b.yml");
//! let doc = doc.delete_key(&["gui_menus"], "menu_a");
//!
//! assert_eq!(doc.get(&["gui_menus", "menu_a", "file"], "none".to_string()), "none");
//! assert_eq!(doc.get(&["gui_menus", "menu_b", "file"], String::new()), "menu_b.yml");
//! ```

mod document;
mod from_node;

pub use document::Document;
pub use from_node::FromNode;

// Re-export the node model for convenience
pub use craftconf_yaml::{Mapping, Node, Scalar, mapping};
