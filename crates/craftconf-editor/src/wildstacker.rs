//! WildStacker: stacking of items, entities, spawners and barrels.

use craftconf_document::{Document, Node};
use craftconf_yaml::{ValidationError, ValidationResult};
use serde::Serialize;

use crate::field::FieldSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WildStackerSection {
    General,
    Items,
    Entities,
    Spawners,
    Barrels,
    Buckets,
    Stews,
}

impl WildStackerSection {
    pub const ALL: [WildStackerSection; 7] = [
        WildStackerSection::General,
        WildStackerSection::Items,
        WildStackerSection::Entities,
        WildStackerSection::Spawners,
        WildStackerSection::Barrels,
        WildStackerSection::Buckets,
        WildStackerSection::Stews,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            WildStackerSection::General => "general",
            WildStackerSection::Items => "items",
            WildStackerSection::Entities => "entities",
            WildStackerSection::Spawners => "spawners",
            WildStackerSection::Barrels => "barrels",
            WildStackerSection::Buckets => "buckets",
            WildStackerSection::Stews => "stews",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WildStackerSection::General => "General Settings",
            WildStackerSection::Items => "Items",
            WildStackerSection::Entities => "Entities",
            WildStackerSection::Spawners => "Spawners",
            WildStackerSection::Barrels => "Barrels",
            WildStackerSection::Buckets => "Buckets",
            WildStackerSection::Stews => "Stews",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            WildStackerSection::General => GENERAL,
            WildStackerSection::Items => ITEMS,
            WildStackerSection::Entities => ENTITIES,
            WildStackerSection::Spawners => SPAWNERS,
            WildStackerSection::Barrels => BARRELS,
            WildStackerSection::Buckets => BUCKETS,
            WildStackerSection::Stews => STEWS,
        }
    }
}

static GENERAL: &[FieldSpec] = &[
    FieldSpec::text("give-item-name", "Give Item Name", &["give-item-name"], "&6x{0} &f&o{1} {2}"),
    FieldSpec::text("inspect-tool-type", "Inspect Tool Type", &["inspect-tool", "type"], "STICK"),
    FieldSpec::text("inspect-tool-name", "Inspect Tool Name", &["inspect-tool", "name"], "&6Inspect Tool"),
    FieldSpec::string_list(
        "inspect-tool-lore",
        "Inspect Tool Lore",
        &["inspect-tool", "lore"],
        &["&7Click on an object to get more details about it."],
    ),
    FieldSpec::text("simulate-tool-type", "Simulate Tool Type", &["simulate-tool", "type"], "STICK"),
    FieldSpec::text("simulate-tool-name", "Simulate Tool Name", &["simulate-tool", "name"], "&6Simulate Tool"),
    FieldSpec::string_list(
        "simulate-tool-lore",
        "Simulate Tool Lore",
        &["simulate-tool", "lore"],
        &["&7Click on two objects to check if they can stack together."],
    ),
    FieldSpec::toggle(
        "database-delete-invalid-worlds",
        "Delete Invalid Worlds",
        &["database", "delete-invalid-worlds"],
        false,
    ),
    FieldSpec::number("kill-task-interval", "Kill Task Interval", &["kill-task", "interval"], 0),
    FieldSpec::toggle("kill-task-stacked-entities", "Kill Stacked Entities", &["kill-task", "stacked-entities"], true),
    FieldSpec::toggle(
        "kill-task-unstacked-entities",
        "Kill Unstacked Entities",
        &["kill-task", "unstacked-entities"],
        true,
    ),
    FieldSpec::toggle("kill-task-stacked-items", "Kill Stacked Items", &["kill-task", "stacked-items"], true),
    FieldSpec::toggle("kill-task-unstacked-items", "Kill Unstacked Items", &["kill-task", "unstacked-items"], true),
    FieldSpec::toggle("kill-task-sync-clear-lagg", "Sync With ClearLagg", &["kill-task", "sync-clear-lagg"], false),
    FieldSpec::text("kill-task-time-command", "Time Left Command", &["kill-task", "time-command"], "stacker timeleft"),
];

static ITEMS: &[FieldSpec] = &[
    FieldSpec::toggle("items-enabled", "Enabled", &["items", "enabled"], false),
    FieldSpec::number("items-merge-radius", "Merge Radius", &["items", "merge-radius", "all"], 5),
    FieldSpec::text("items-custom-name", "Custom Name", &["items", "custom-name"], "&6x{0} &f&o{1}"),
    FieldSpec::number("items-chunk-limit", "Chunk Limit", &["items", "chunk-limit"], 0),
    FieldSpec::toggle("items-particles", "Particles", &["items", "particles"], true),
    FieldSpec::number("items-stack-interval", "Stack Interval", &["items", "stack-interval"], 0),
    FieldSpec::string_list("items-blacklist", "Blacklisted Items", &["items", "blacklist"], &["EXAMPLE_ITEM"]),
    FieldSpec::string_list("items-whitelist", "Whitelisted Items", &["items", "whitelist"], &[]),
    FieldSpec::string_list("items-disabled-worlds", "Disabled Worlds", &["items", "disabled-worlds"], &["disabled_world"]),
    FieldSpec::toggle(
        "items-unstacked-custom-name",
        "Unstacked Custom Name",
        &["items", "unstacked-custom-name"],
        false,
    ),
    FieldSpec::toggle("items-fix-stack", "Fix Stack", &["items", "fix-stack"], false),
    FieldSpec::toggle("items-item-display", "Item Display", &["items", "item-display"], false),
    FieldSpec::toggle("items-pickup-sound", "Pickup Sound", &["items", "pickup-sound"], true),
    FieldSpec::toggle("items-max-pickup-delay", "Max Pickup Delay", &["items", "max-pickup-delay"], false),
    FieldSpec::toggle("items-store-items", "Store Items", &["items", "store-items"], true),
];

static ENTITIES: &[FieldSpec] = &[
    FieldSpec::toggle("entities-enabled", "Enabled", &["entities", "enabled"], true),
    FieldSpec::number("entities-merge-radius", "Merge Radius", &["entities", "merge-radius", "all"], 10),
    FieldSpec::text("entities-custom-name", "Custom Name", &["entities", "custom-name"], "&6x{0} &f&o{1}{3}"),
    FieldSpec::number("entities-chunk-limit", "Chunk Limit", &["entities", "chunk-limit"], 0),
    FieldSpec::toggle("entities-particles", "Particles", &["entities", "particles"], true),
    FieldSpec::number("entities-stack-interval", "Stack Interval", &["entities", "stack-interval"], 4),
    FieldSpec::string_list("entities-blacklist", "Blacklisted Entities", &["entities", "blacklist"], &[]),
    FieldSpec::string_list(
        "entities-disabled-worlds",
        "Disabled Worlds",
        &["entities", "disabled-worlds"],
        &["disabled_world"],
    ),
    FieldSpec::string_list(
        "entities-whitelist",
        "Whitelisted Entities",
        &["entities", "whitelist"],
        &["SPIDER", "CAVE_SPIDER", "CREEPER", "SKELETON", "ZOMBIE"],
    ),
    FieldSpec::string_list("entities-disabled-regions", "Disabled Regions", &["entities", "disabled-regions"], &[]),
    FieldSpec::string_list("entities-name-blacklist", "Name Blacklist", &["entities", "name-blacklist"], &[]),
    FieldSpec::toggle(
        "entities-linked-entities-enabled",
        "Linked Entities",
        &["entities", "linked-entities", "enabled"],
        false,
    ),
    FieldSpec::number(
        "entities-linked-entities-max-distance",
        "Linked Entities Max Distance",
        &["entities", "linked-entities", "max-distance"],
        10,
    ),
];

static SPAWNERS: &[FieldSpec] = &[
    FieldSpec::toggle("spawners-enabled", "Enabled", &["spawners", "enabled"], false),
    FieldSpec::number("spawners-merge-radius", "Merge Radius", &["spawners", "merge-radius", "all"], 1),
    FieldSpec::text("spawners-custom-name", "Custom Name", &["spawners", "custom-name"], "&6x{0} &f&o{1}{3}"),
    FieldSpec::number("spawners-chunk-limit", "Chunk Limit", &["spawners", "chunk-limit"], 0),
    FieldSpec::toggle("spawners-particles", "Particles", &["spawners", "particles"], true),
    FieldSpec::toggle("spawners-chunk-merge", "Chunk Merge", &["spawners", "chunk-merge"], false),
    FieldSpec::string_list("spawners-blacklist", "Blacklisted Spawners", &["spawners", "blacklist"], &[]),
    FieldSpec::string_list("spawners-whitelist", "Whitelisted Spawners", &["spawners", "whitelist"], &[]),
    FieldSpec::string_list(
        "spawners-disabled-worlds",
        "Disabled Worlds",
        &["spawners", "disabled-worlds"],
        &["disabled_world"],
    ),
];

static BARRELS: &[FieldSpec] = &[
    FieldSpec::toggle("barrels-enabled", "Enabled", &["barrels", "enabled"], false),
    FieldSpec::number("barrels-merge-radius", "Merge Radius", &["barrels", "merge-radius", "all"], 1),
    FieldSpec::text("barrels-custom-name", "Custom Name", &["barrels", "custom-name"], "&6x{0} &f&o{1}"),
    FieldSpec::number("barrels-chunk-limit", "Chunk Limit", &["barrels", "chunk-limit"], 0),
    FieldSpec::toggle("barrels-particles", "Particles", &["barrels", "particles"], true),
    FieldSpec::toggle("barrels-chunk-merge", "Chunk Merge", &["barrels", "chunk-merge"], false),
    FieldSpec::string_list("barrels-blacklist", "Blacklisted Blocks", &["barrels", "blacklist"], &[]),
    FieldSpec::string_list("barrels-whitelist", "Whitelisted Blocks", &["barrels", "whitelist"], &[]),
    FieldSpec::string_list(
        "barrels-disabled-worlds",
        "Disabled Worlds",
        &["barrels", "disabled-worlds"],
        &["disabled_world"],
    ),
];

static BUCKETS: &[FieldSpec] = &[
    FieldSpec::toggle("buckets-enabled", "Enabled", &["buckets", "enabled"], false),
    FieldSpec::number("buckets-max-stack", "Max Stack", &["buckets", "max-stack"], 16),
    FieldSpec::string_list("buckets-name-blacklist", "Name Blacklist", &["buckets", "name-blacklist"], &["&fGenbucket"]),
];

static STEWS: &[FieldSpec] = &[
    FieldSpec::toggle("stews-enabled", "Enabled", &["stews", "enabled"], false),
    FieldSpec::number("stews-max-stack", "Max Stack", &["stews", "max-stack"], 16),
];

/// The WildStacker file a document is checked as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Config,
    Entities,
    Spawners,
    Barrels,
    CustomNames,
}

/// Structural checks of a WildStacker document.
///
/// Errors carry dotted paths such as `entities.merge-radius.all`. The
/// result always carries the document, valid or not.
pub fn validate_wildstacker(document: &Document, kind: ConfigKind) -> ValidationResult {
    let mut errors = Vec::new();
    match kind {
        ConfigKind::Config => validate_general(document, &mut errors),
        ConfigKind::Entities => validate_stacked(document, "entities", "Entities", &mut errors),
        ConfigKind::Spawners => validate_stacked(document, "spawners", "Spawners", &mut errors),
        ConfigKind::Barrels => validate_stacked(document, "barrels", "Barrels", &mut errors),
        ConfigKind::CustomNames => validate_custom_names(document, &mut errors),
    }
    ValidationResult::from_errors(errors, Some(document.root().clone()))
}

fn validate_general(document: &Document, errors: &mut Vec<ValidationError>) {
    if !document.lookup(&["give-item-name"]).is_some_and(is_present) {
        errors.push(ValidationError::new(
            "give-item-name",
            "Give item name is required",
        ));
    }

    if let Some(database) = document.lookup(&["database"])
        && !database.is_null()
        && !database.is_mapping()
    {
        errors.push(ValidationError::new(
            "database",
            "Database configuration must be an object",
        ));
    }
}

fn validate_stacked(
    document: &Document,
    section: &str,
    title: &str,
    errors: &mut Vec<ValidationError>,
) {
    let Some(node) = document.lookup(&[section]).filter(|n| is_present(n)) else {
        errors.push(ValidationError::new(
            section,
            format!("{title} section is required"),
        ));
        return;
    };

    if node.get("enabled").and_then(Node::as_bool).is_none() {
        errors.push(ValidationError::new(
            format!("{section}.enabled"),
            "Enabled must be a boolean",
        ));
    }

    match node.get("merge-radius").filter(|n| n.is_mapping()) {
        None => errors.push(ValidationError::new(
            format!("{section}.merge-radius"),
            "Merge radius configuration is required",
        )),
        Some(radius) => {
            let all = radius.get("all").and_then(Node::as_f64);
            if !all.is_some_and(|r| r >= 0.0) {
                errors.push(ValidationError::new(
                    format!("{section}.merge-radius.all"),
                    "Merge radius must be a non-negative number",
                ));
            }
        }
    }
}

fn validate_custom_names(document: &Document, errors: &mut Vec<ValidationError>) {
    if document.get(&["enabled"], None::<bool>).is_none() {
        errors.push(ValidationError::new("enabled", "Enabled must be a boolean"));
    }

    for (key, value) in document.root() {
        if key != "enabled" && value.as_str().is_none() {
            errors.push(ValidationError::new(
                key.as_str(),
                format!("Value for {key} must be a string"),
            ));
        }
    }
}

/// Present in the loose sense: not null, not false, not an empty string.
fn is_present(node: &Node) -> bool {
    !(node.is_null() || node.as_bool() == Some(false) || node.as_str() == Some(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::Plugin;

    fn paths(result: &ValidationResult) -> Vec<&str> {
        result.errors.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_bundled_config_is_valid() {
        let doc = Document::parse(Plugin::WildStacker.default_config()).unwrap();
        for kind in [
            ConfigKind::Config,
            ConfigKind::Entities,
            ConfigKind::Spawners,
            ConfigKind::Barrels,
        ] {
            let result = validate_wildstacker(&doc, kind);
            assert!(result.is_valid, "{kind:?}: {:?}", result.errors);
            assert!(result.parsed_data.is_some());
        }
    }

    #[test]
    fn test_config_requires_give_item_name() {
        let doc = Document::parse("database:\n  delete-invalid-worlds: false\n").unwrap();
        let result = validate_wildstacker(&doc, ConfigKind::Config);
        assert!(!result.is_valid);
        assert_eq!(paths(&result), vec!["give-item-name"]);
        assert!(result.parsed_data.is_some());

        let doc = Document::parse("give-item-name: ''\n").unwrap();
        let result = validate_wildstacker(&doc, ConfigKind::Config);
        assert_eq!(paths(&result), vec!["give-item-name"]);
    }

    #[test]
    fn test_config_database_must_be_mapping() {
        let doc = Document::parse("give-item-name: x\ndatabase: sqlite\n").unwrap();
        let result = validate_wildstacker(&doc, ConfigKind::Config);
        assert_eq!(paths(&result), vec!["database"]);
        assert_eq!(
            result.errors[0].message,
            "Database configuration must be an object"
        );
    }

    #[test]
    fn test_stacked_section_required() {
        let result = validate_wildstacker(&Document::new(), ConfigKind::Spawners);
        assert_eq!(paths(&result), vec!["spawners"]);
        assert_eq!(result.errors[0].message, "Spawners section is required");
    }

    #[test]
    fn test_stacked_section_errors() {
        let doc = Document::parse("entities:\n  enabled: 'yes'\n  merge-radius:\n    all: -1\n")
            .unwrap();
        let result = validate_wildstacker(&doc, ConfigKind::Entities);
        assert_eq!(
            paths(&result),
            vec!["entities.enabled", "entities.merge-radius.all"]
        );

        let doc = Document::parse("barrels:\n  enabled: true\n  merge-radius: 5\n").unwrap();
        let result = validate_wildstacker(&doc, ConfigKind::Barrels);
        assert_eq!(paths(&result), vec!["barrels.merge-radius"]);
    }

    #[test]
    fn test_merge_radius_accepts_floats() {
        let doc = Document::parse("entities:\n  enabled: true\n  merge-radius:\n    all: 2.5\n")
            .unwrap();
        assert!(validate_wildstacker(&doc, ConfigKind::Entities).is_valid);
    }

    #[test]
    fn test_custom_names() {
        let doc = Document::parse("enabled: true\nZOMBIE: '&2Zombie'\nCREEPER: 3\n").unwrap();
        let result = validate_wildstacker(&doc, ConfigKind::CustomNames);
        assert_eq!(paths(&result), vec!["CREEPER"]);
        assert_eq!(result.errors[0].message, "Value for CREEPER must be a string");

        let doc = Document::parse("SKELETON: '&fSkeleton'\n").unwrap();
        let result = validate_wildstacker(&doc, ConfigKind::CustomNames);
        assert_eq!(paths(&result), vec!["enabled"]);
    }
}
