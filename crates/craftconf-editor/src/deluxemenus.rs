//! DeluxeMenus: main settings and the `gui_menus` table.
//!
//! Menus live under `gui_menus.<name>`. A menu is either defined inline or
//! points at a separate file with `{file: <name>.yml}`. The menu and item
//! field tables below use paths relative to the menu or item.

use craftconf_document::{Document, Mapping, Node, mapping};
use serde::Serialize;

use crate::error::MenuError;
use crate::field::{Field, FieldEdit, FieldSpec, project, reduce};
use crate::session::ExportFile;

/// Key of the menu table in the main configuration.
pub const MENUS_KEY: &str = "gui_menus";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeluxeMenusSection {
    General,
}

impl DeluxeMenusSection {
    pub const ALL: [DeluxeMenusSection; 1] = [DeluxeMenusSection::General];

    pub fn id(&self) -> &'static str {
        match self {
            DeluxeMenusSection::General => "general",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DeluxeMenusSection::General => "General Settings",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            DeluxeMenusSection::General => GENERAL,
        }
    }
}

static GENERAL: &[FieldSpec] = &[
    FieldSpec::select(
        "debug",
        "Debug Level",
        &["debug"],
        &["OFF", "LOW", "MEDIUM", "HIGH", "HIGHEST"],
        "HIGHEST",
    ),
    FieldSpec::toggle("check-updates", "Check For Updates", &["check_updates"], true),
];

/// Fields of one menu, relative to `gui_menus.<menu>`.
pub static MENU_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("menu-title", "Menu Title", &["menu_title"], "&8New Menu"),
    FieldSpec::text("open-command", "Open Command", &["open_command"], ""),
    FieldSpec::string_list("open-commands", "Open Commands", &["open_commands"], &[]),
    FieldSpec::toggle("register-command", "Register Command", &["register_command"], false),
    FieldSpec::number("size", "Size", &["size"], 27),
    FieldSpec::number("update-interval", "Update Interval", &["update_interval"], 1),
];

/// Fields of one menu item, relative to `gui_menus.<menu>.items.<item>`.
pub static ITEM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("material", "Material", &["material"], "STONE"),
    FieldSpec::number("slot", "Slot", &["slot"], 0),
    FieldSpec::number("amount", "Amount", &["amount"], 1),
    FieldSpec::text("display-name", "Display Name", &["display_name"], ""),
    FieldSpec::string_list("lore", "Lore", &["lore"], &[]),
    FieldSpec::number("priority", "Priority", &["priority"], 0),
    FieldSpec::toggle("update", "Update", &["update"], false),
    FieldSpec::string_list("left-click-commands", "Left Click Commands", &["left_click_commands"], &[]),
    FieldSpec::string_list("right-click-commands", "Right Click Commands", &["right_click_commands"], &[]),
];

/// Names of all menus, in document order.
pub fn menu_names(document: &Document) -> Vec<String> {
    document
        .lookup_mapping(&[MENUS_KEY])
        .map(|menus| menus.keys().cloned().collect())
        .unwrap_or_default()
}

/// The definition of `name`, if it is a mapping.
pub fn menu<'d>(document: &'d Document, name: &str) -> Option<&'d Mapping> {
    document.lookup_mapping(&[MENUS_KEY, name])
}

/// Whether `name` only references an external file.
pub fn is_external(document: &Document, name: &str) -> bool {
    menu(document, name).is_some_and(|m| m.len() == 1 && m.contains_key("file"))
}

/// Add an inline menu with default title, command and size.
pub fn create_menu(document: &Document, name: &str) -> Result<Document, MenuError> {
    if name.trim().is_empty() {
        return Err(MenuError::EmptyName);
    }
    if document.contains(&[MENUS_KEY, name]) {
        return Err(MenuError::DuplicateMenu(name.to_string()));
    }

    let definition = mapping([
        ("menu_title", Node::from("&8New Menu")),
        ("open_command", Node::from(name.to_lowercase())),
        ("size", Node::from(27)),
        ("items", Node::empty_mapping()),
    ]);
    tracing::info!(menu = name, "created menu");
    Ok(document.set_key(&[MENUS_KEY], name, definition))
}

pub fn delete_menu(document: &Document, name: &str) -> Result<Document, MenuError> {
    if !document.contains(&[MENUS_KEY, name]) {
        return Err(MenuError::UnknownMenu(name.to_string()));
    }
    tracing::info!(menu = name, "deleted menu");
    Ok(document.delete_key(&[MENUS_KEY], name))
}

/// Add a stone placeholder item at `slot`.
pub fn add_menu_item(
    document: &Document,
    menu_name: &str,
    item_id: &str,
    slot: i64,
) -> Result<Document, MenuError> {
    require_menu(document, menu_name)?;
    if item_id.trim().is_empty() {
        return Err(MenuError::EmptyItemId);
    }
    if document.contains(&[MENUS_KEY, menu_name, "items", item_id]) {
        return Err(MenuError::DuplicateItem {
            menu: menu_name.to_string(),
            item: item_id.to_string(),
        });
    }

    let item = mapping([
        ("material", Node::from("STONE")),
        ("slot", Node::from(slot)),
        ("display_name", Node::from("&fNew Item")),
    ]);
    Ok(document.set_key(&[MENUS_KEY, menu_name, "items"], item_id, item))
}

pub fn remove_menu_item(
    document: &Document,
    menu_name: &str,
    item_id: &str,
) -> Result<Document, MenuError> {
    require_menu(document, menu_name)?;
    if !document.contains(&[MENUS_KEY, menu_name, "items", item_id]) {
        return Err(MenuError::UnknownItem {
            menu: menu_name.to_string(),
            item: item_id.to_string(),
        });
    }
    Ok(document.delete_key(&[MENUS_KEY, menu_name, "items"], item_id))
}

/// Item ids of a menu, in document order.
pub fn menu_items(document: &Document, menu_name: &str) -> Vec<String> {
    document
        .lookup_mapping(&[MENUS_KEY, menu_name, "items"])
        .map(|items| items.keys().cloned().collect())
        .unwrap_or_default()
}

pub fn menu_fields(document: &Document, menu_name: &str) -> Result<Vec<Field>, MenuError> {
    require_menu(document, menu_name)?;
    Ok(project(MENU_FIELDS, document, &[MENUS_KEY, menu_name]))
}

/// Apply an edit relative to `gui_menus.<menu>`.
pub fn apply_menu_edit(
    document: &Document,
    menu_name: &str,
    edit: &FieldEdit,
) -> Result<Document, MenuError> {
    require_menu(document, menu_name)?;
    Ok(reduce(
        "menu",
        MENU_FIELDS,
        document,
        &[MENUS_KEY, menu_name],
        edit,
    )?)
}

pub fn item_fields(
    document: &Document,
    menu_name: &str,
    item_id: &str,
) -> Result<Vec<Field>, MenuError> {
    require_item(document, menu_name, item_id)?;
    Ok(project(
        ITEM_FIELDS,
        document,
        &[MENUS_KEY, menu_name, "items", item_id],
    ))
}

/// Apply an edit relative to `gui_menus.<menu>.items.<item>`.
pub fn apply_item_edit(
    document: &Document,
    menu_name: &str,
    item_id: &str,
    edit: &FieldEdit,
) -> Result<Document, MenuError> {
    require_item(document, menu_name, item_id)?;
    Ok(reduce(
        "menu item",
        ITEM_FIELDS,
        document,
        &[MENUS_KEY, menu_name, "items", item_id],
        edit,
    )?)
}

/// Serialize one menu as a standalone `<name>.yml` file, without header.
pub fn export_menu(document: &Document, name: &str) -> Result<ExportFile, MenuError> {
    let definition = require_menu(document, name)?;
    let contents = craftconf_yaml::serialize(definition, None)?;
    Ok(ExportFile {
        file_name: format!("{name}.yml"),
        contents,
    })
}

/// Export a menu and replace its inline definition with a file reference.
///
/// Returns the exported file together with the updated document.
pub fn externalize_menu(
    document: &Document,
    name: &str,
) -> Result<(ExportFile, Document), MenuError> {
    let file = export_menu(document, name)?;
    let reference = mapping([("file", file.file_name.as_str())]);
    let next = document.set_key(&[MENUS_KEY], name, reference);
    tracing::info!(menu = name, file = %file.file_name, "moved menu to external file");
    Ok((file, next))
}

fn require_menu<'d>(document: &'d Document, name: &str) -> Result<&'d Mapping, MenuError> {
    menu(document, name).ok_or_else(|| MenuError::UnknownMenu(name.to_string()))
}

fn require_item(document: &Document, menu_name: &str, item_id: &str) -> Result<(), MenuError> {
    require_menu(document, menu_name)?;
    if document
        .lookup_mapping(&[MENUS_KEY, menu_name, "items", item_id])
        .is_none()
    {
        return Err(MenuError::UnknownItem {
            menu: menu_name.to_string(),
            item: item_id.to_string(),
        });
    }
    Ok(())
}
