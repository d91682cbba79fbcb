//! Block catalogue for the pre-flattening (1.12) numeric id space.
//!
//! The table is generated from `blocks.json` at build time. A block state is
//! addressed by its state id, `block_id << 4 | metadata`.

use schemtile_common::{Result, TileError};
use std::fmt;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/blocks.rs"));
}
use generated::BLOCKS;

/// Game version the generated table describes
pub const REGISTRY_VERSION: &str = "1.12";

const NAMESPACE: &str = "minecraft:";

#[derive(Debug)]
pub struct BlockEntry {
    pub id: u16,
    pub name: &'static str,
    pub display_name: &'static str,
    pub transparent: bool,
    pub variations: &'static [Variation],
}

#[derive(Debug)]
pub struct Variation {
    pub metadata: u8,
    pub display_name: &'static str,
}

impl BlockEntry {
    pub fn variation(&self, metadata: u8) -> Option<&'static Variation> {
        self.variations.iter().find(|v| v.metadata == metadata)
    }

    fn accepts(&self, metadata: u8) -> bool {
        if self.variations.is_empty() {
            metadata == 0
        } else {
            self.variation(metadata).is_some()
        }
    }
}

/// One concrete block state from the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Material {
    pub block_id: u16,
    pub metadata: u8,
    pub name: &'static str,
    pub display_name: &'static str,
    pub transparent: bool,
}

impl Material {
    pub fn state_id(&self) -> u32 {
        ((self.block_id as u32) << 4) | (self.metadata as u32 & 0xF)
    }

    fn from_entry(entry: &'static BlockEntry, metadata: u8) -> Material {
        let display_name = entry
            .variation(metadata)
            .map(|v| v.display_name)
            .unwrap_or(entry.display_name);
        Material {
            block_id: entry.id,
            metadata,
            name: entry.name,
            display_name,
            transparent: entry.transparent,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.metadata == 0 {
            write!(f, "{}{}", NAMESPACE, self.name)
        } else {
            write!(f, "{}{}:{}", NAMESPACE, self.name, self.metadata)
        }
    }
}

pub fn find_block(name: &str) -> Option<&'static BlockEntry> {
    let name = name.strip_prefix(NAMESPACE).unwrap_or(name);
    BLOCKS.iter().find(|block| block.name == name)
}

pub fn find_block_by_id(id: u16) -> Option<&'static BlockEntry> {
    BLOCKS.iter().find(|block| block.id == id)
}

pub fn material(name: &str, metadata: u8) -> Result<Material> {
    let entry =
        find_block(name).ok_or_else(|| TileError::UnknownMaterial(format!("no block named '{}'", name)))?;
    if !entry.accepts(metadata) {
        return Err(TileError::UnknownMaterial(format!(
            "{} has no metadata value {}",
            entry.name, metadata
        )));
    }
    Ok(Material::from_entry(entry, metadata))
}

/// Parses `name`, `name:metadata`, or either with a `minecraft:` prefix.
pub fn parse_material(text: &str) -> Result<Material> {
    let text = text.trim();
    let text = text.strip_prefix(NAMESPACE).unwrap_or(text);
    match text.split_once(':') {
        Some((name, metadata)) => {
            let metadata = metadata.parse::<u8>().map_err(|_| {
                TileError::UnknownMaterial(format!("invalid metadata '{}' in '{}'", metadata, text))
            })?;
            material(name, metadata)
        }
        None => material(text, 0),
    }
}

pub fn material_for_state(state_id: u32) -> Option<Material> {
    let block_id = u16::try_from(state_id >> 4).ok()?;
    let metadata = (state_id & 0xF) as u8;
    let entry = find_block_by_id(block_id)?;
    if entry.accepts(metadata) {
        Some(Material::from_entry(entry, metadata))
    } else {
        None
    }
}
