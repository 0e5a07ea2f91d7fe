//! SuperiorSkyblock 2: island settings, roles and worlds.
//!
//! The default-values section holds open key bags (block limits, entity
//! limits, generator rates) which are edited entry by entry through
//! [`FieldEdit::SetKey`](crate::FieldEdit::SetKey) and
//! [`FieldEdit::DeleteKey`](crate::FieldEdit::DeleteKey).

use serde::Serialize;

use crate::field::FieldSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuperiorSkyblockSection {
    General,
    Database,
    DefaultValues,
    IslandRoles,
    IslandWorlds,
    Spawn,
    Misc,
}

impl SuperiorSkyblockSection {
    pub const ALL: [SuperiorSkyblockSection; 7] = [
        SuperiorSkyblockSection::General,
        SuperiorSkyblockSection::Database,
        SuperiorSkyblockSection::DefaultValues,
        SuperiorSkyblockSection::IslandRoles,
        SuperiorSkyblockSection::IslandWorlds,
        SuperiorSkyblockSection::Spawn,
        SuperiorSkyblockSection::Misc,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SuperiorSkyblockSection::General => "general",
            SuperiorSkyblockSection::Database => "database",
            SuperiorSkyblockSection::DefaultValues => "default-values",
            SuperiorSkyblockSection::IslandRoles => "island-roles",
            SuperiorSkyblockSection::IslandWorlds => "island-worlds",
            SuperiorSkyblockSection::Spawn => "spawn",
            SuperiorSkyblockSection::Misc => "misc",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SuperiorSkyblockSection::General => "General Settings",
            SuperiorSkyblockSection::Database => "Database",
            SuperiorSkyblockSection::DefaultValues => "Default Island Values",
            SuperiorSkyblockSection::IslandRoles => "Island Roles",
            SuperiorSkyblockSection::IslandWorlds => "Island Worlds",
            SuperiorSkyblockSection::Spawn => "Spawn",
            SuperiorSkyblockSection::Misc => "Miscellaneous",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            SuperiorSkyblockSection::General => GENERAL,
            SuperiorSkyblockSection::Database => DATABASE,
            SuperiorSkyblockSection::DefaultValues => DEFAULT_VALUES,
            SuperiorSkyblockSection::IslandRoles => ISLAND_ROLES,
            SuperiorSkyblockSection::IslandWorlds => ISLAND_WORLDS,
            SuperiorSkyblockSection::Spawn => SPAWN,
            SuperiorSkyblockSection::Misc => MISC,
        }
    }
}

static GENERAL: &[FieldSpec] = &[
    FieldSpec::number("calc-interval", "Calculation Interval", &["calc-interval"], 0),
    FieldSpec::text("island-command", "Island Command", &["island-command"], "island,is,islands"),
    FieldSpec::number("max-island-size", "Max Island Size", &["max-island-size"], 200),
    FieldSpec::number("islands-height", "Islands Height", &["islands-height"], 100),
    FieldSpec::select(
        "island-top-order",
        "Island Top Order",
        &["island-top-order"],
        &["WORTH", "LEVEL", "RATING", "PLAYERS"],
        "WORTH",
    ),
    FieldSpec::toggle("island-top-include-leader", "Include Leader In Top", &["island-top-include-leader"], true),
    FieldSpec::select(
        "island-top-members-sorting",
        "Top Members Sorting",
        &["island-top-members-sorting"],
        &["NAMES", "ROLES"],
        "NAMES",
    ),
    FieldSpec::toggle("negative-worth", "Negative Worth", &["negative-worth"], true),
    FieldSpec::toggle("negative-level", "Negative Level", &["negative-level"], true),
    FieldSpec::toggle("rounded-island-level", "Rounded Island Level", &["rounded-island-level"], false),
    FieldSpec::text("island-level-formula", "Island Level Formula", &["island-level-formula"], "{} / 2"),
    FieldSpec::toggle("coop-members", "Coop Members", &["coop-members"], true),
    FieldSpec::text("default-language", "Default Language", &["default-language"], "en-US"),
    FieldSpec::toggle("auto-language-detection", "Auto Language Detection", &["auto-language-detection"], true),
    FieldSpec::text("number-format", "Number Format", &["number-format"], "en-US"),
    FieldSpec::text("date-format", "Date Format", &["date-format"], "dd/MM/yyyy HH:mm:ss"),
    FieldSpec::number("commands-per-page", "Commands Per Page", &["commands-per-page"], 7),
    FieldSpec::toggle("skip-one-item-menus", "Skip One-Item Menus", &["skip-one-item-menus"], false),
    FieldSpec::toggle("only-back-button", "Only Back Button", &["only-back-button"], false),
    FieldSpec::toggle("values-menu", "Values Menu", &["values-menu"], true),
    FieldSpec::toggle("tab-complete-hide-vanished", "Hide Vanished In Tab Complete", &["tab-complete-hide-vanished"], true),
];

static DATABASE: &[FieldSpec] = &[
    FieldSpec::select("database-type", "Type", &["database", "type"], &["SQLite", "MySQL", "MariaDB"], "SQLite"),
    FieldSpec::toggle("database-backup", "Backup On Startup", &["database", "backup"], true),
    FieldSpec::text("database-address", "Address", &["database", "address"], "localhost"),
    FieldSpec::number("database-port", "Port", &["database", "port"], 3306),
    FieldSpec::text("database-db-name", "Database Name", &["database", "db-name"], "SuperiorSkyblock"),
    FieldSpec::text("database-user-name", "User Name", &["database", "user-name"], "root"),
    FieldSpec::text("database-password", "Password", &["database", "password"], "root"),
    FieldSpec::text("database-prefix", "Table Prefix", &["database", "prefix"], ""),
    FieldSpec::toggle("database-use-ssl", "Use SSL", &["database", "useSSL"], false),
    FieldSpec::toggle(
        "database-allow-public-key-retrieval",
        "Allow Public Key Retrieval",
        &["database", "allowPublicKeyRetrieval"],
        true,
    ),
    FieldSpec::number("database-wait-timeout", "Wait Timeout", &["database", "waitTimeout"], 600_000),
    FieldSpec::number("database-max-lifetime", "Max Lifetime", &["database", "maxLifetime"], 1_800_000),
];

static DEFAULT_VALUES: &[FieldSpec] = &[
    FieldSpec::number("island-size", "Island Size", &["default-values", "island-size"], 20),
    FieldSpec::key_values("block-limits", "Block Limits", &["default-values", "block-limits"], &[]),
    FieldSpec::key_values("entity-limits", "Entity Limits", &["default-values", "entity-limits"], &[]),
    FieldSpec::number("warps-limit", "Warps Limit", &["default-values", "warps-limit"], 3),
    FieldSpec::number("team-limit", "Team Limit", &["default-values", "team-limit"], 4),
    FieldSpec::number("coop-limit", "Coop Limit", &["default-values", "coop-limit"], 8),
    FieldSpec::number("crop-growth", "Crop Growth", &["default-values", "crop-growth"], 1),
    FieldSpec::number("spawner-rates", "Spawner Rates", &["default-values", "spawner-rates"], 1),
    FieldSpec::number("mob-drops", "Mob Drops", &["default-values", "mob-drops"], 1),
    FieldSpec::number("bank-limit", "Bank Limit", &["default-values", "bank-limit"], -1),
    FieldSpec::key_values(
        "generator-normal",
        "Generator Rates (Normal)",
        &["default-values", "generator", "normal"],
        &[],
    ),
    FieldSpec::string_list("role-limits", "Role Limits", &["default-values", "role-limits"], &[]),
    FieldSpec::toggle("default-containers-enabled", "Default Containers", &["default-containers", "enabled"], false),
];

static ISLAND_ROLES: &[FieldSpec] = &[
    FieldSpec::text("guest-name", "Guest Name", &["island-roles", "guest", "name"], "Guest"),
    FieldSpec::string_list("guest-permissions", "Guest Permissions", &["island-roles", "guest", "permissions"], &[]),
    FieldSpec::text("coop-name", "Coop Name", &["island-roles", "coop", "name"], "Coop"),
    FieldSpec::string_list(
        "coop-permissions",
        "Coop Permissions",
        &["island-roles", "coop", "permissions"],
        &["BREAK", "BUILD", "CHEST_ACCESS", "INTERACT", "PICKUP_DROPS"],
    ),
    FieldSpec::number("member-id", "Member Id", &["island-roles", "ladder", "member", "id"], 0),
    FieldSpec::text("member-name", "Member Name", &["island-roles", "ladder", "member", "name"], "Member"),
    FieldSpec::number("member-weight", "Member Weight", &["island-roles", "ladder", "member", "weight"], 0),
    FieldSpec::string_list(
        "member-permissions",
        "Member Permissions",
        &["island-roles", "ladder", "member", "permissions"],
        &["ANIMAL_BREED", "BREAK", "BUILD", "CHEST_ACCESS", "INTERACT"],
    ),
    FieldSpec::number("mod-id", "Moderator Id", &["island-roles", "ladder", "mod", "id"], 1),
    FieldSpec::text("mod-name", "Moderator Name", &["island-roles", "ladder", "mod", "name"], "Moderator"),
    FieldSpec::number("mod-weight", "Moderator Weight", &["island-roles", "ladder", "mod", "weight"], 1),
    FieldSpec::string_list(
        "mod-permissions",
        "Moderator Permissions",
        &["island-roles", "ladder", "mod", "permissions"],
        &["BAN_MEMBER", "EXPEL_PLAYERS", "INVITE_MEMBER", "KICK_MEMBER"],
    ),
    FieldSpec::number("admin-id", "Admin Id", &["island-roles", "ladder", "admin", "id"], 2),
    FieldSpec::text("admin-name", "Admin Name", &["island-roles", "ladder", "admin", "name"], "Admin"),
    FieldSpec::number("admin-weight", "Admin Weight", &["island-roles", "ladder", "admin", "weight"], 2),
    FieldSpec::string_list(
        "admin-permissions",
        "Admin Permissions",
        &["island-roles", "ladder", "admin", "permissions"],
        &["DEMOTE_MEMBERS", "PROMOTE_MEMBERS", "SET_WARP", "DELETE_WARP"],
    ),
    FieldSpec::number("leader-id", "Leader Id", &["island-roles", "ladder", "leader", "id"], 3),
    FieldSpec::text("leader-name", "Leader Name", &["island-roles", "ladder", "leader", "name"], "Leader"),
    FieldSpec::number("leader-weight", "Leader Weight", &["island-roles", "ladder", "leader", "weight"], 3),
    FieldSpec::string_list(
        "leader-permissions",
        "Leader Permissions",
        &["island-roles", "ladder", "leader", "permissions"],
        &["ALL"],
    ),
];

static ISLAND_WORLDS: &[FieldSpec] = &[
    FieldSpec::text("world-name", "World Name", &["worlds", "world-name"], "SuperiorWorld"),
    FieldSpec::select(
        "default-world",
        "Default World",
        &["worlds", "default-world"],
        &["normal", "nether", "the_end"],
        "normal",
    ),
    FieldSpec::select(
        "difficulty",
        "Worlds Difficulty",
        &["worlds", "difficulty"],
        &["PEACEFUL", "EASY", "NORMAL", "HARD"],
        "EASY",
    ),
    FieldSpec::toggle("normal-enabled", "Normal World", &["worlds", "normal", "enabled"], true),
    FieldSpec::toggle("normal-unlock", "Normal Unlocked", &["worlds", "normal", "unlock"], true),
    FieldSpec::toggle("normal-schematic-offset", "Normal Schematic Offset", &["worlds", "normal", "schematic-offset"], true),
    FieldSpec::text("normal-biome", "Normal Biome", &["worlds", "normal", "biome"], "PLAINS"),
    FieldSpec::toggle("nether-enabled", "Nether World", &["worlds", "nether", "enabled"], false),
    FieldSpec::toggle("nether-unlock", "Nether Unlocked", &["worlds", "nether", "unlock"], true),
    FieldSpec::text("nether-name", "Nether Name", &["worlds", "nether", "name"], ""),
    FieldSpec::toggle("nether-schematic-offset", "Nether Schematic Offset", &["worlds", "nether", "schematic-offset"], true),
    FieldSpec::text("nether-biome", "Nether Biome", &["worlds", "nether", "biome"], "NETHER_WASTES"),
    FieldSpec::toggle("end-enabled", "End World", &["worlds", "end", "enabled"], false),
    FieldSpec::toggle("end-unlock", "End Unlocked", &["worlds", "end", "unlock"], false),
    FieldSpec::text("end-name", "End Name", &["worlds", "end", "name"], ""),
    FieldSpec::toggle("end-schematic-offset", "End Schematic Offset", &["worlds", "end", "schematic-offset"], true),
    FieldSpec::text("end-biome", "End Biome", &["worlds", "end", "biome"], "THE_END"),
    FieldSpec::toggle("end-dragon-fight", "Dragon Fight", &["worlds", "end", "dragon-fight", "enabled"], false),
    FieldSpec::text(
        "end-dragon-fight-portal-offset",
        "Dragon Portal Offset",
        &["worlds", "end", "dragon-fight", "portal-offset"],
        "0, 0, 0",
    ),
    FieldSpec::string_list("pvp-worlds", "PvP Worlds", &["pvp-worlds"], &["PvP"]),
    FieldSpec::toggle("visitors-damage", "Visitors Damage", &["visitors-damage"], false),
    FieldSpec::toggle("coop-damage", "Coop Damage", &["coop-damage"], true),
    FieldSpec::toggle("immune-to-pvp-when-teleport", "PvP Immunity On Teleport", &["immune-to-pvp-when-teleport"], true),
    FieldSpec::toggle("teleport-on-pvp-enable", "Teleport On PvP Enable", &["teleport-on-pvp-enable"], true),
    FieldSpec::toggle("void-teleport-members", "Void Teleport Members", &["void-teleport", "members"], true),
    FieldSpec::toggle("void-teleport-visitors", "Void Teleport Visitors", &["void-teleport", "visitors"], true),
    FieldSpec::string_list("blocked-visitors-commands", "Blocked Visitor Commands", &["blocked-visitors-commands"], &[]),
    FieldSpec::string_list("world-permissions", "World Permissions", &["world-permissions"], &[]),
];

static SPAWN: &[FieldSpec] = &[
    FieldSpec::text("spawn-location", "Location", &["spawn", "location"], "SuperiorWorld, 0, 100, 0, 0, 0"),
    FieldSpec::toggle("spawn-protection", "Protection", &["spawn", "protection"], true),
    FieldSpec::number("spawn-size", "Size", &["spawn", "size"], 200),
    FieldSpec::toggle("spawn-players-damage", "Players Damage", &["spawn", "players-damage"], false),
    FieldSpec::toggle("spawn-world-border", "World Border", &["spawn", "world-border"], false),
    FieldSpec::string_list("spawn-permissions", "Permissions", &["spawn", "permissions"], &[]),
    FieldSpec::string_list("spawn-settings", "Settings", &["spawn", "settings"], &["CROPS_GROWTH", "LAVA_FLOW", "NATURAL_ANIMALS_SPAWN"]),
    FieldSpec::string_list("default-settings", "Default Island Settings", &["default-settings"], &["CROPS_GROWTH", "LAVA_FLOW", "WATER_FLOW"]),
    FieldSpec::string_list("player-respawn", "Player Respawn", &["player-respawn"], &["LAST_LOCATION", "ISLAND_TELEPORT", "VANILLA"]),
];

static MISC: &[FieldSpec] = &[
    FieldSpec::number("crops-interval", "Crops Interval", &["crops-interval"], 5),
    FieldSpec::string_list("crops-to-grow", "Crops To Grow", &["crops-to-grow"], &["WHEAT", "CARROT", "POTATO"]),
    FieldSpec::text("spawners-provider", "Spawners Provider", &["spawners-provider"], "AUTO"),
    FieldSpec::text("stacked-blocks-provider", "Stacked Blocks Provider", &["stacked-blocks-provider"], "AUTO"),
    FieldSpec::toggle(
        "drops-upgrade-players-multiply",
        "Drops Upgrade Multiplies Players",
        &["drops-upgrade-players-multiply"],
        false,
    ),
    FieldSpec::text("island-chests-title", "Island Chest Title", &["island-chests", "chest-title"], "&4Island Chest"),
    FieldSpec::number("island-chests-default-pages", "Default Chest Pages", &["island-chests", "default-pages"], 0),
    FieldSpec::number("island-chests-default-size", "Default Chest Rows", &["island-chests", "default-size"], 3),
    FieldSpec::toggle("island-names-required", "Names Required", &["island-names", "required-for-creation"], true),
    FieldSpec::number("island-names-max-length", "Name Max Length", &["island-names", "max-length"], 16),
    FieldSpec::number("island-names-min-length", "Name Min Length", &["island-names", "min-length"], 3),
    FieldSpec::string_list(
        "island-names-filtered",
        "Filtered Names",
        &["island-names", "filtered-names"],
        &["fuck", "duck", "hypixel"],
    ),
    FieldSpec::toggle("island-names-color-support", "Color Support", &["island-names", "color-support"], true),
    FieldSpec::toggle("island-names-island-top", "Names In Island Top", &["island-names", "island-top"], true),
    FieldSpec::toggle(
        "island-names-prevent-player-names",
        "Prevent Player Names",
        &["island-names", "prevent-player-names"],
        false,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldEdit, project, reduce};
    use crate::plugin::Plugin;
    use craftconf_document::Document;

    fn bundled() -> Document {
        Document::parse(Plugin::SuperiorSkyblock.default_config()).unwrap()
    }

    #[test]
    fn test_default_values_projection() {
        let fields = project(SuperiorSkyblockSection::DefaultValues.fields(), &bundled(), &[]);
        let limits = fields.iter().find(|f| f.spec.id == "block-limits").unwrap();
        assert_eq!(limits.value.get("HOPPER").and_then(|n| n.as_i64()), Some(8));

        let generator = fields.iter().find(|f| f.spec.id == "generator-normal").unwrap();
        let rates = generator.value.as_mapping().unwrap();
        assert_eq!(rates.keys().collect::<Vec<_>>(), vec!["COBBLESTONE", "COAL_ORE"]);
    }

    #[test]
    fn test_key_bag_entries() {
        let section = SuperiorSkyblockSection::DefaultValues;
        let doc = reduce(
            section.id(),
            section.fields(),
            &bundled(),
            &[],
            &FieldEdit::set_key(&["default-values", "generator", "normal"], "DIAMOND_ORE", 1),
        )
        .unwrap();
        let doc = reduce(
            section.id(),
            section.fields(),
            &doc,
            &[],
            &FieldEdit::delete_key(&["default-values", "entity-limits"], "MINECART"),
        )
        .unwrap();

        assert_eq!(
            doc.get(&["default-values", "generator", "normal", "DIAMOND_ORE"], 0_i64),
            1
        );
        assert!(
            doc.lookup_mapping(&["default-values", "entity-limits"])
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_database_type_is_a_select() {
        let section = SuperiorSkyblockSection::Database;
        let result = reduce(
            section.id(),
            section.fields(),
            &bundled(),
            &[],
            &FieldEdit::set(&["database", "type"], "PostgreSQL"),
        );
        assert!(result.is_err());

        let doc = reduce(
            section.id(),
            section.fields(),
            &bundled(),
            &[],
            &FieldEdit::set(&["database", "type"], "MariaDB"),
        )
        .unwrap();
        assert_eq!(doc.get(&["database", "type"], String::new()), "MariaDB");
    }

    #[test]
    fn test_missing_sections_show_defaults() {
        let fields = project(SuperiorSkyblockSection::IslandRoles.fields(), &bundled(), &[]);
        let leader = fields.iter().find(|f| f.spec.id == "leader-name").unwrap();
        assert_eq!(leader.value.as_str(), Some("Leader"));
    }
}
