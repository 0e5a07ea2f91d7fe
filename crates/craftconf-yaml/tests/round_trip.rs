//! Round-trip and header-isolation tests over realistic plugin files.

use craftconf_yaml::{Mapping, Node, extract_header, mapping, parse, serialize};

const WILDSTACKER: &str = r#"###############################################
##                                           ##
##         WildStacker Configuration         ##
##                                           ##
###############################################

# How should the item that is given to players by the give command be called?
# {0} represents stack size
give-item-name: '&6x{0} &f&o{1} {2}'

# The inspect tool of the plugin.
inspect-tool:
  type: STICK
  name: '&6Inspect Tool'
  lore:
  - '&7Click on an object to get more details about it.'

kill-task:
  # How much time should be passed between auto-killing? (in seconds)
  interval: 0
  stacked-entities: true
  time-command: 'stacker timeleft'

entities:
  enabled: true
  merge-radius:
    all: 10
    ZOMBIE: 12
  disabled-worlds:
  - disabled_world
  linked-entities:
    max-distance: 10.5
"#;

const DELUXEMENUS: &str = "# DeluxeMenus 1.14.1-DEV-184 main configuration file
#
# A full wiki on how to use this plugin can be found at:
# https://wiki.helpch.at/clips-plugins/deluxemenus

debug: HIGHEST
check_updates: true
gui_menus:
  basics_menu:
    file: basics_menu.yml
  advanced_menu:
    file: advanced_menu.yml
  requirements_menu:
    file: requirements_menu.yml";

const SUPERIORSKYBLOCK: &str = r#"# SuperiorSkyblock2
database:
  type: SQLite
  port: 3306
  prefix: ''
default-values:
  block-limits:
    HOPPER: 8
    SPAWNER: 4
  generator:
    normal:
      COBBLESTONE: 75
      IRON_ORE: 12.5
spawn:
  location: SuperiorWorld, 0, 100, 0, 0, 0
  permissions: []
island-roles:
  ladder: {}
"#;

fn parsed(source: &str) -> Mapping {
    let result = parse(source);
    assert!(result.is_valid, "fixture failed to parse: {:?}", result.errors);
    result.parsed_data.unwrap()
}

#[test]
fn test_round_trip_is_structurally_idempotent() {
    for source in [WILDSTACKER, DELUXEMENUS, SUPERIORSKYBLOCK] {
        let first = parsed(source);
        let text = serialize(&first, None).unwrap();
        let second = parsed(&text);
        assert_eq!(first, second);

        // Key order survives too, not just key sets.
        let first_keys: Vec<&String> = first.keys().collect();
        let second_keys: Vec<&String> = second.keys().collect();
        assert_eq!(first_keys, second_keys);

        // A second trip produces identical text.
        assert_eq!(serialize(&second, None).unwrap(), text);
    }
}

#[test]
fn test_round_trip_with_header() {
    let header = extract_header(WILDSTACKER);
    assert!(header.ends_with("# {0} represents stack size\n"));

    let doc = parsed(WILDSTACKER);
    let text = serialize(&doc, Some(header)).unwrap();
    assert!(text.starts_with(header));
    assert_eq!(extract_header(&text), header);
    assert_eq!(parsed(&text), doc);
}

#[test]
fn test_header_is_isolated_from_body_changes() {
    let header = extract_header(DELUXEMENUS);
    let mut doc = parsed(DELUXEMENUS);

    let before = serialize(&doc, Some(header)).unwrap();
    doc.insert("debug".into(), Node::from("LOWEST"));
    doc.shift_remove("gui_menus");
    let after = serialize(&doc, Some(header)).unwrap();

    assert_eq!(&before[..header.len()], header);
    assert_eq!(&after[..header.len()], header);
    assert_ne!(before, after);

    let other_header = "# replaced\n";
    let replaced = serialize(&doc, Some(other_header)).unwrap();
    assert_eq!(&replaced[other_header.len()..], &after[header.len()..]);
}

#[test]
fn test_typed_values_survive() {
    let doc = parsed(SUPERIORSKYBLOCK);
    let generator = doc["default-values"]
        .get("generator")
        .and_then(|g| g.get("normal"))
        .unwrap();
    assert_eq!(generator.get("COBBLESTONE"), Some(&Node::from(75)));
    assert_eq!(generator.get("IRON_ORE"), Some(&Node::from(12.5)));
    assert_eq!(doc["database"].get("prefix").unwrap().as_str(), Some(""));
    assert_eq!(
        doc["spawn"].get("permissions"),
        Some(&Node::Sequence(Vec::new()))
    );
    assert_eq!(doc["island-roles"].get("ladder"), Some(&Node::empty_mapping()));
}

#[test]
fn test_built_documents_round_trip() {
    let doc = mapping([
        ("menu_title", Node::from("&8New Menu")),
        ("open_command", Node::from("shop")),
        ("size", Node::from(27)),
        ("items", Node::empty_mapping()),
        ("open_commands", Node::from(vec!["shop", "store"])),
        ("nothing", Node::null()),
    ]);
    let text = serialize(&doc, None).unwrap();
    assert_eq!(parsed(&text), doc);
}

#[test]
fn test_merge_keys_are_resolved_before_serializing() {
    let source = "\
menu_defaults: &defaults
  size: 27
  open_command: shop
gui_menus:
  shop:
    <<: *defaults
    menu_title: '&bShop'
";
    let doc = parsed(source);
    let shop = doc["gui_menus"].get("shop").unwrap();
    assert_eq!(shop.get("size"), Some(&Node::from(27)));
    assert_eq!(shop.get("menu_title").unwrap().as_str(), Some("&bShop"));

    let text = serialize(&doc, None).unwrap();
    assert!(!text.contains("<<"));
    assert_eq!(parsed(&text), doc);
}

#[test]
fn test_alias_bomb_is_rejected() {
    let mut source = String::from("a: &a [lol, lol, lol, lol, lol, lol, lol, lol, lol, lol]\n");
    for (prev, next) in ["a", "b", "c", "d", "e", "f", "g", "h"]
        .iter()
        .zip(["b", "c", "d", "e", "f", "g", "h", "i"])
    {
        let items = vec![format!("*{prev}"); 10].join(", ");
        source.push_str(&format!("{next}: &{next} [{items}]\n"));
    }

    let result = parse(&source);
    assert!(!result.is_valid);
    assert!(result.parsed_data.is_none());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("nodes"));
}
