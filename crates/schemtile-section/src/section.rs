use crate::palette::{self, MaterialPair};
use crate::volume::VoxelVolume;
use schemtile_common::{Extent, Result, TileError};
use serde::{Deserialize, Serialize};

/// Serialized form of one section
///
/// Field names and layout follow the schematic JSON consumers expect:
/// `version`, `size`, `offset`, `palette`, `blocks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub version: String,
    pub size: Extent,
    pub offset: Extent,
    pub palette: Vec<u32>,
    pub blocks: Vec<u16>,
}

impl Section {
    pub fn from_volume(volume: &VoxelVolume, version: &str, materials: &MaterialPair) -> Self {
        let encoded = palette::encode(volume, materials);
        Section {
            version: version.to_owned(),
            size: Extent::flat(volume.edge()),
            offset: Extent::ZERO,
            palette: encoded.palette,
            blocks: encoded.blocks,
        }
    }

    pub fn edge(&self) -> u32 {
        self.size.x
    }

    pub fn to_volume(&self, materials: &MaterialPair) -> Result<VoxelVolume> {
        if self.size.y != 1 || self.size.x != self.size.z {
            return Err(TileError::malformed(format!(
                "expected a flat square section, got {}x{}x{}",
                self.size.x, self.size.y, self.size.z
            )));
        }
        palette::decode(&self.palette, &self.blocks, self.edge(), materials)
    }

    /// Number of voxels whose palette entry is the solid material
    pub fn solid_count(&self, materials: &MaterialPair) -> usize {
        let solid_id = materials.solid().state_id();
        match self.palette.iter().position(|&id| id == solid_id) {
            Some(index) => self.blocks.iter().filter(|&&b| b as usize == index).count(),
            None => 0,
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.palette.len() <= 1
    }

    /// Pretty output uses two-space indentation.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
