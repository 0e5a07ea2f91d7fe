//! Editor sessions.
//!
//! An [`EditorSession`] owns the document being edited for one plugin,
//! together with the header comments captured when the session was opened.
//! Every accepted change replaces the document and bumps the session's
//! revision, so callers can cheaply tell whether anything changed since they
//! last rendered.

use craftconf_document::{Document, FromNode, Node};
use craftconf_yaml::{
    ROOT_PATH, SerializeOptions, ValidationError, ValidationResult, extract_header, parse,
};
use serde::Serialize;

use crate::error::{EditError, EditorError};
use crate::field::{Field, FieldEdit, project, reduce};
use crate::plugin::{Plugin, Section};
use crate::wildstacker::{ConfigKind, validate_wildstacker};

/// A file produced for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

/// The editing state of one plugin configuration.
#[derive(Debug, Clone)]
pub struct EditorSession {
    plugin: Plugin,
    document: Document,
    header: String,
    revision: u64,
    options: SerializeOptions,
    /// Last successful serialization and the revision it was made from.
    rendered: Option<(u64, String)>,
}

impl EditorSession {
    /// Open a session on `source`.
    ///
    /// The header (everything before the first top-level key) is captured
    /// here and reused for every render and export of the session.
    pub fn open(plugin: Plugin, source: &str) -> Result<Self, EditorError> {
        let result = parse(source);
        let Some(root) = result.parsed_data.clone().filter(|_| result.is_valid) else {
            tracing::warn!(%plugin, errors = result.errors.len(), "cannot open configuration");
            return Err(EditorError::Invalid(Box::new(result)));
        };

        let header = extract_header(source).to_string();
        tracing::debug!(%plugin, header_len = header.len(), keys = root.len(), "opened configuration");
        Ok(Self {
            plugin,
            document: Document::from_mapping(root),
            header,
            revision: 0,
            options: SerializeOptions::default(),
            rendered: None,
        })
    }

    /// Open a session on the plugin's bundled default configuration.
    pub fn with_defaults(plugin: Plugin) -> Result<Self, EditorError> {
        Self::open(plugin, plugin.default_config())
    }

    /// Use custom serialization options for render and export.
    pub fn with_serialize_options(mut self, options: SerializeOptions) -> Self {
        self.options = options;
        self.rendered = None;
        self
    }

    pub fn plugin(&self) -> Plugin {
        self.plugin
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Number of accepted changes since the session was opened.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get<T: FromNode, S: AsRef<str>>(&self, path: &[S], default: T) -> T {
        self.document.get(path, default)
    }

    pub fn set<S: AsRef<str>>(&mut self, path: &[S], value: impl Into<Node>) {
        let next = self.document.set(path, value);
        self.commit(next);
    }

    pub fn set_key<S: AsRef<str>>(&mut self, path: &[S], key: &str, value: impl Into<Node>) {
        let next = self.document.set_key(path, key, value);
        self.commit(next);
    }

    pub fn delete_key<S: AsRef<str>>(&mut self, path: &[S], key: &str) {
        let next = self.document.delete_key(path, key);
        self.commit(next);
    }

    /// Run a fallible document transformation, committing only on success.
    ///
    /// Menu operations from [`deluxemenus`](crate::deluxemenus) plug in
    /// here:
    ///
    /// ```rust
    /// use craftconf_editor::{EditorSession, Plugin, deluxemenus};
    ///
    /// let mut session = EditorSession::with_defaults(Plugin::DeluxeMenus).unwrap();
    /// session.update(|doc| deluxemenus::create_menu(doc, "shop")).unwrap();
    /// assert!(deluxemenus::menu_names(session.document()).contains(&"shop".to_string()));
    /// ```
    pub fn update<E>(
        &mut self,
        change: impl FnOnce(&Document) -> Result<Document, E>,
    ) -> Result<(), E> {
        let next = change(&self.document)?;
        self.commit(next);
        Ok(())
    }

    /// Current values of every field in `section`.
    pub fn fields(&self, section: impl Into<Section>) -> Result<Vec<Field>, EditError> {
        let section = self.check_section(section.into())?;
        Ok(project(section.fields(), &self.document, &[]))
    }

    /// Apply a form edit through the section's reducer.
    pub fn apply(&mut self, section: impl Into<Section>, edit: &FieldEdit) -> Result<(), EditError> {
        let section = self.check_section(section.into())?;
        let next = reduce(section.id(), section.fields(), &self.document, &[], edit)?;
        self.commit(next);
        Ok(())
    }

    /// Replace the document with imported text.
    ///
    /// On failure the session is left untouched. The header captured at
    /// open time is kept either way.
    pub fn import(&mut self, text: &str) -> ValidationResult {
        let result = parse(text);
        match result.parsed_data.clone().filter(|_| result.is_valid) {
            Some(root) => {
                self.commit(Document::from_mapping(root));
                tracing::info!(plugin = %self.plugin, revision = self.revision, "imported configuration");
            }
            None => {
                tracing::warn!(plugin = %self.plugin, errors = result.errors.len(), "rejected import");
            }
        }
        result
    }

    /// Import raw file contents, which must be UTF-8.
    pub fn import_bytes(&mut self, bytes: &[u8]) -> ValidationResult {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.import(text),
            Err(err) => {
                tracing::warn!(plugin = %self.plugin, %err, "rejected import");
                ValidationResult::invalid(vec![ValidationError::new(
                    ROOT_PATH,
                    format!("file is not valid UTF-8: {err}"),
                )])
            }
        }
    }

    /// The YAML text of the current document, header included.
    ///
    /// If serialization fails, the error is logged and the last good output
    /// is returned instead.
    pub fn render(&mut self) -> &str {
        let stale = self
            .rendered
            .as_ref()
            .is_none_or(|(revision, _)| *revision != self.revision);
        if stale {
            match self
                .document
                .to_yaml_with_options(Some(&self.header), &self.options)
            {
                Ok(text) => self.rendered = Some((self.revision, text)),
                Err(err) => {
                    tracing::warn!(plugin = %self.plugin, revision = self.revision, %err, "failed to render configuration");
                }
            }
        }
        self.rendered.as_ref().map_or("", |(_, text)| text.as_str())
    }

    /// The main configuration file for download.
    pub fn export(&self) -> Result<ExportFile, EditorError> {
        let contents = self
            .document
            .to_yaml_with_options(Some(&self.header), &self.options)?;
        Ok(ExportFile {
            file_name: self.plugin.export_file_name().to_string(),
            contents,
        })
    }

    /// Plugin-specific structural validation of the current document.
    ///
    /// WildStacker ships a single file holding the general, entity,
    /// spawner and barrel settings, so all four checks run. Other plugins
    /// have no structural rules beyond being a mapping.
    pub fn validate(&self) -> ValidationResult {
        match self.plugin {
            Plugin::WildStacker => {
                let errors = [
                    ConfigKind::Config,
                    ConfigKind::Entities,
                    ConfigKind::Spawners,
                    ConfigKind::Barrels,
                ]
                .into_iter()
                .flat_map(|kind| validate_wildstacker(&self.document, kind).errors)
                .collect();
                ValidationResult::from_errors(errors, Some(self.document.root().clone()))
            }
            Plugin::SuperiorSkyblock | Plugin::DeluxeMenus => {
                ValidationResult::valid(self.document.root().clone())
            }
        }
    }

    fn check_section(&self, section: Section) -> Result<Section, EditError> {
        if section.plugin() != self.plugin {
            return Err(EditError::PluginMismatch {
                expected: self.plugin,
                found: section.plugin(),
            });
        }
        Ok(section)
    }

    /// Replace the document, bumping the revision if it changed.
    fn commit(&mut self, next: Document) {
        if !next.identical(&self.document) {
            self.document = next;
            self.revision += 1;
        }
    }
}
