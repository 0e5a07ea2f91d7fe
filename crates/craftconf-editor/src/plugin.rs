//! Supported plugins and their editor sections.

use std::fmt;

use serde::Serialize;

use crate::deluxemenus::DeluxeMenusSection;
use crate::field::FieldSpec;
use crate::superiorskyblock::SuperiorSkyblockSection;
use crate::wildstacker::WildStackerSection;

/// A Minecraft server plugin whose configuration can be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Plugin {
    WildStacker,
    SuperiorSkyblock,
    DeluxeMenus,
}

impl Plugin {
    pub const ALL: [Plugin; 3] = [
        Plugin::WildStacker,
        Plugin::SuperiorSkyblock,
        Plugin::DeluxeMenus,
    ];

    /// Identifier used in URLs and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Plugin::WildStacker => "wildstacker",
            Plugin::SuperiorSkyblock => "superiorskyblock",
            Plugin::DeluxeMenus => "deluxemenus",
        }
    }

    /// Human-readable plugin name.
    pub fn name(&self) -> &'static str {
        match self {
            Plugin::WildStacker => "WildStacker",
            Plugin::SuperiorSkyblock => "SuperiorSkyblock",
            Plugin::DeluxeMenus => "DeluxeMenus",
        }
    }

    /// The plugin's stock `config.yml`, header comments included.
    pub fn default_config(&self) -> &'static str {
        match self {
            Plugin::WildStacker => include_str!("../resources/wildstacker.yml"),
            Plugin::SuperiorSkyblock => include_str!("../resources/superiorskyblock.yml"),
            Plugin::DeluxeMenus => include_str!("../resources/deluxemenus.yml"),
        }
    }

    /// Name of the exported main configuration file.
    pub fn export_file_name(&self) -> &'static str {
        "config.yml"
    }

    /// Editor sections in navigation order.
    pub fn sections(&self) -> Vec<Section> {
        match self {
            Plugin::WildStacker => WildStackerSection::ALL
                .iter()
                .copied()
                .map(Section::WildStacker)
                .collect(),
            Plugin::SuperiorSkyblock => SuperiorSkyblockSection::ALL
                .iter()
                .copied()
                .map(Section::SuperiorSkyblock)
                .collect(),
            Plugin::DeluxeMenus => DeluxeMenusSection::ALL
                .iter()
                .copied()
                .map(Section::DeluxeMenus)
                .collect(),
        }
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Plugin {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "wildstacker" => Ok(Plugin::WildStacker),
            "superiorskyblock" => Ok(Plugin::SuperiorSkyblock),
            "deluxemenus" => Ok(Plugin::DeluxeMenus),
            _ => Err(format!("Unknown plugin: {}", s)),
        }
    }
}

/// An editor section of any plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "plugin", content = "section", rename_all = "lowercase")]
pub enum Section {
    WildStacker(WildStackerSection),
    SuperiorSkyblock(SuperiorSkyblockSection),
    DeluxeMenus(DeluxeMenusSection),
}

impl Section {
    pub fn plugin(&self) -> Plugin {
        match self {
            Section::WildStacker(_) => Plugin::WildStacker,
            Section::SuperiorSkyblock(_) => Plugin::SuperiorSkyblock,
            Section::DeluxeMenus(_) => Plugin::DeluxeMenus,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Section::WildStacker(s) => s.id(),
            Section::SuperiorSkyblock(s) => s.id(),
            Section::DeluxeMenus(s) => s.id(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::WildStacker(s) => s.title(),
            Section::SuperiorSkyblock(s) => s.title(),
            Section::DeluxeMenus(s) => s.title(),
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Section::WildStacker(s) => s.fields(),
            Section::SuperiorSkyblock(s) => s.fields(),
            Section::DeluxeMenus(s) => s.fields(),
        }
    }

    /// Look up a section by plugin and id.
    pub fn find(plugin: Plugin, id: &str) -> Option<Section> {
        plugin.sections().into_iter().find(|s| s.id() == id)
    }
}

impl From<WildStackerSection> for Section {
    fn from(section: WildStackerSection) -> Self {
        Section::WildStacker(section)
    }
}

impl From<SuperiorSkyblockSection> for Section {
    fn from(section: SuperiorSkyblockSection) -> Self {
        Section::SuperiorSkyblock(section)
    }
}

impl From<DeluxeMenusSection> for Section {
    fn from(section: DeluxeMenusSection) -> Self {
        Section::DeluxeMenus(section)
    }
}
