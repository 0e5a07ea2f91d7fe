//! Form-based editors for Minecraft plugin configuration files.
//!
//! Each supported [`Plugin`] ships its stock `config.yml` and a set of
//! [`Section`]s, each a static table of [`FieldSpec`]s. An
//! [`EditorSession`] holds the document being edited, projects sections into
//! [`Field`] values for display, and routes form edits through a section
//! reducer that rejects edits outside the section or of the wrong type.
//!
//! # Example
//!
//! ```rust
//! use craftconf_editor::{EditorSession, FieldEdit, Plugin, WildStackerSection};
//!
//! let mut session = EditorSession::with_defaults(Plugin::WildStacker).unwrap();
//! session
//!     .apply(
//!         WildStackerSection::Entities,
//!         &FieldEdit::set(&["entities", "merge-radius", "all"], 15),
//!     )
//!     .unwrap();
//!
//! assert_eq!(session.get(&["entities", "merge-radius", "all"], 0_i64), 15);
//! assert!(session.render().starts_with("###"));
//! assert!(session.validate().is_valid);
//! ```

pub mod deluxemenus;
mod error;
mod field;
mod plugin;
mod session;
pub mod superiorskyblock;
pub mod wildstacker;

pub use deluxemenus::DeluxeMenusSection;
pub use error::{EditError, EditorError, MenuError};
pub use field::{DefaultValue, Field, FieldEdit, FieldKind, FieldSpec};
pub use plugin::{Plugin, Section};
pub use session::{EditorSession, ExportFile};
pub use superiorskyblock::SuperiorSkyblockSection;
pub use wildstacker::{ConfigKind, WildStackerSection, validate_wildstacker};
