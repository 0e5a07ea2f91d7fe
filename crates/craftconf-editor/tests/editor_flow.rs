//! End-to-end editing sessions on the bundled plugin configurations.

use craftconf_editor::{
    DeluxeMenusSection, EditError, EditorSession, FieldEdit, MenuError, Plugin,
    SuperiorSkyblockSection, WildStackerSection, deluxemenus,
};
use craftconf_yaml::{extract_header, parse_document};

#[test]
fn test_every_plugin_round_trips_unchanged_session() {
    for plugin in Plugin::ALL {
        let mut session = EditorSession::with_defaults(plugin).unwrap();
        let rendered = session.render().to_string();

        assert_eq!(extract_header(&rendered), session.header());
        let reparsed = parse_document(&rendered).unwrap();
        assert_eq!(&reparsed, session.document().root(), "{plugin}");

        let file = session.export().unwrap();
        assert_eq!(file.file_name, "config.yml");
        assert_eq!(file.contents, rendered);
    }
}

#[test]
fn test_deluxemenus_menu_lifecycle() {
    let mut session = EditorSession::with_defaults(Plugin::DeluxeMenus).unwrap();
    assert_eq!(
        session.get(&["gui_menus", "basics_menu", "file"], String::new()),
        "basics_menu.yml"
    );

    session
        .update(|doc| deluxemenus::create_menu(doc, "Shop"))
        .unwrap();
    session
        .update(|doc| deluxemenus::add_menu_item(doc, "Shop", "diamond", 13))
        .unwrap();
    session
        .update(|doc| {
            deluxemenus::apply_menu_edit(doc, "Shop", &FieldEdit::set(&["menu_title"], "&bShop"))
        })
        .unwrap();
    assert_eq!(session.revision(), 3);

    let duplicate = session.update(|doc| deluxemenus::create_menu(doc, "Shop"));
    assert_eq!(duplicate, Err(MenuError::DuplicateMenu("Shop".to_string())));
    assert_eq!(session.revision(), 3);

    let mut exported = None;
    session
        .update(|doc| {
            let (file, next) = deluxemenus::externalize_menu(doc, "Shop")?;
            exported = Some(file);
            Ok::<_, MenuError>(next)
        })
        .unwrap();

    let file = exported.unwrap();
    assert_eq!(file.file_name, "Shop.yml");
    let menu = parse_document(&file.contents).unwrap();
    assert_eq!(menu["menu_title"].as_str(), Some("&bShop"));
    assert_eq!(menu["open_command"].as_str(), Some("shop"));

    let rendered = session.render().to_string();
    assert!(rendered.starts_with("# DeluxeMenus 1.14.1-DEV-184 main configuration file\n"));
    assert!(rendered.ends_with("  Shop:\n    file: Shop.yml\n"));

    session.delete_key(&["gui_menus"], "basics_menu");
    assert_eq!(
        session.get(&["gui_menus", "basics_menu", "file"], "none".to_string()),
        "none"
    );
}

#[test]
fn test_general_fields_json() {
    let session = EditorSession::with_defaults(Plugin::DeluxeMenus).unwrap();
    let fields = session.fields(DeluxeMenusSection::General).unwrap();
    insta::assert_snapshot!(serde_json::to_string_pretty(&fields).unwrap(), @r#"
    [
      {
        "id": "debug",
        "label": "Debug Level",
        "path": [
          "debug"
        ],
        "kind": {
          "type": "select",
          "options": [
            "OFF",
            "LOW",
            "MEDIUM",
            "HIGH",
            "HIGHEST"
          ]
        },
        "default": "HIGHEST",
        "value": "HIGHEST"
      },
      {
        "id": "check-updates",
        "label": "Check For Updates",
        "path": [
          "check_updates"
        ],
        "kind": {
          "type": "toggle"
        },
        "default": true,
        "value": true
      }
    ]
    "#);
}

#[test]
fn test_section_reducers_guard_the_document() {
    let mut session = EditorSession::with_defaults(Plugin::WildStacker).unwrap();
    let before = session.document().clone();

    let err = session
        .apply(
            WildStackerSection::Items,
            &FieldEdit::set(&["entities", "enabled"], false),
        )
        .unwrap_err();
    assert!(matches!(err, EditError::OutOfSection { section: "items", .. }));

    let err = session
        .apply(
            WildStackerSection::Entities,
            &FieldEdit::set(&["entities", "merge-radius", "all"], "far"),
        )
        .unwrap_err();
    assert!(matches!(err, EditError::TypeMismatch { .. }));

    assert_eq!(session.document(), &before);
    assert_eq!(session.revision(), 0);

    session
        .apply(
            WildStackerSection::Entities,
            &FieldEdit::set(&["entities", "whitelist"], vec!["ZOMBIE", "HUSK"]),
        )
        .unwrap();
    assert_eq!(
        session.get(&["entities", "whitelist"], Vec::<String>::new()),
        vec!["ZOMBIE".to_string(), "HUSK".to_string()]
    );
    assert_eq!(session.revision(), 1);
}

#[test]
fn test_wildstacker_validation_after_edits() {
    let mut session = EditorSession::with_defaults(Plugin::WildStacker).unwrap();
    assert!(session.validate().is_valid);

    session.set(&["spawners", "merge-radius"], "everywhere");
    session.delete_key::<&str>(&[], "give-item-name");

    let result = session.validate();
    assert!(!result.is_valid);
    let paths: Vec<&str> = result.errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["give-item-name", "spawners.merge-radius"]);
}

#[test]
fn test_superiorskyblock_key_bags() {
    let mut session = EditorSession::with_defaults(Plugin::SuperiorSkyblock).unwrap();
    let section = SuperiorSkyblockSection::DefaultValues;

    session
        .apply(
            section,
            &FieldEdit::set_key(&["default-values", "block-limits"], "SPAWNER", 4),
        )
        .unwrap();
    session
        .apply(
            section,
            &FieldEdit::delete_key(&["default-values", "block-limits"], "HOPPER"),
        )
        .unwrap();

    let limits = session
        .document()
        .lookup_mapping(&["default-values", "block-limits"])
        .unwrap();
    assert_eq!(limits.keys().collect::<Vec<_>>(), vec!["SPAWNER"]);
    assert!(session.render().contains("  block-limits:\n    SPAWNER: 4\n"));
}

#[test]
fn test_import_then_export() {
    let mut session = EditorSession::with_defaults(Plugin::SuperiorSkyblock).unwrap();
    let header = session.header().to_string();

    let result = session.import("calc-interval: 60\nmax-island-size: 400\n");
    assert!(result.is_valid);

    let file = session.export().unwrap();
    assert_eq!(
        file.contents,
        format!("{header}calc-interval: 60\nmax-island-size: 400\n")
    );

    let result = session.import("calc-interval: [");
    assert!(!result.is_valid);
    assert_eq!(session.get(&["calc-interval"], 0_i64), 60);
}
