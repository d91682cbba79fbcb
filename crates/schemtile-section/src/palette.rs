use crate::volume::{MaterialState, VoxelVolume};
use schemtile_common::{Result, TileError};
use schemtile_registry::Material;

/// Registry materials standing in for the two voxel states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialPair {
    solid: Material,
    empty: Material,
}

impl MaterialPair {
    pub fn new(solid: Material, empty: Material) -> Result<Self> {
        if solid.state_id() == empty.state_id() {
            return Err(TileError::UnknownMaterial(format!(
                "solid and empty are both {}",
                solid
            )));
        }
        Ok(MaterialPair { solid, empty })
    }

    /// Obsidian for solid voxels, air for empty ones
    pub fn obsidian_and_air() -> Result<Self> {
        MaterialPair::new(
            schemtile_registry::material("obsidian", 0)?,
            schemtile_registry::material("air", 0)?,
        )
    }

    pub fn solid(&self) -> Material {
        self.solid
    }

    pub fn empty(&self) -> Material {
        self.empty
    }

    pub fn for_state(&self, state: MaterialState) -> Material {
        match state {
            MaterialState::Solid => self.solid,
            MaterialState::Empty => self.empty,
        }
    }

    pub fn state_for(&self, state_id: u32) -> Option<MaterialState> {
        if state_id == self.solid.state_id() {
            Some(MaterialState::Solid)
        } else if state_id == self.empty.state_id() {
            Some(MaterialState::Empty)
        } else {
            None
        }
    }
}

/// Palette of registry state ids plus one palette index per voxel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedVolume {
    pub palette: Vec<u32>,
    pub blocks: Vec<u16>,
}

/// Encodes `volume` in its scan order. Palette entries are appended the
/// first time a state is seen, so the first voxel always has index 0.
pub fn encode(volume: &VoxelVolume, materials: &MaterialPair) -> EncodedVolume {
    let mut seen: Vec<MaterialState> = Vec::with_capacity(2);
    let mut blocks = Vec::with_capacity(volume.len());

    for &state in volume.states() {
        let index = match seen.iter().position(|&s| s == state) {
            Some(index) => index,
            None => {
                seen.push(state);
                seen.len() - 1
            }
        };
        blocks.push(index as u16);
    }

    let palette = seen
        .into_iter()
        .map(|state| materials.for_state(state).state_id())
        .collect();

    EncodedVolume { palette, blocks }
}

/// Rebuilds the volume behind `palette` and `blocks`.
pub fn decode(
    palette: &[u32],
    blocks: &[u16],
    edge: u32,
    materials: &MaterialPair,
) -> Result<VoxelVolume> {
    let expected = edge as usize * edge as usize;
    if blocks.len() != expected {
        return Err(TileError::malformed(format!(
            "expected {} blocks for edge {}, got {}",
            expected,
            edge,
            blocks.len()
        )));
    }

    let mut states = Vec::with_capacity(palette.len());
    for (position, &state_id) in palette.iter().enumerate() {
        if palette[..position].contains(&state_id) {
            return Err(TileError::malformed(format!(
                "palette lists state {} twice",
                state_id
            )));
        }
        let state = materials.state_for(state_id).ok_or_else(|| {
            TileError::malformed(format!(
                "palette state {} is neither {} nor {}",
                state_id,
                materials.solid(),
                materials.empty()
            ))
        })?;
        states.push(state);
    }

    let voxels = blocks
        .iter()
        .map(|&index| {
            states.get(index as usize).copied().ok_or_else(|| {
                TileError::malformed(format!(
                    "block index {} outside palette of {}",
                    index,
                    states.len()
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    VoxelVolume::from_states(edge, voxels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SectionCoord;
    use crate::image::{Image, PixelSampler};
    use crate::volume::MaterialState::{Empty, Solid};
    use crate::volume::SectionBuilder;
    use assert_matches::assert_matches;

    fn pair() -> MaterialPair {
        MaterialPair::obsidian_and_air().unwrap()
    }

    fn checker(edge: u32) -> VoxelVolume {
        let image = Image::from_fn(edge, edge, |x, z| if (x + z) % 2 == 0 { 0 } else { 255 }).unwrap();
        SectionBuilder::new(edge, 200)
            .unwrap()
            .build(SectionCoord::new(0, 0), &PixelSampler::new(&image))
    }

    #[test]
    fn test_palette_follows_first_occurrence() {
        let volume = VoxelVolume::from_states(2, vec![Empty, Solid, Solid, Empty]).unwrap();
        let encoded = encode(&volume, &pair());
        assert_eq!(encoded.palette, vec![0, 784]);
        assert_eq!(encoded.blocks, vec![0, 1, 1, 0]);

        let volume = VoxelVolume::from_states(2, vec![Solid, Empty, Empty, Empty]).unwrap();
        let encoded = encode(&volume, &pair());
        assert_eq!(encoded.palette, vec![784, 0]);
        assert_eq!(encoded.blocks, vec![0, 1, 1, 1]);
    }

    #[test]
    fn test_uniform_volume_has_single_entry() {
        let volume = VoxelVolume::from_states(3, vec![Solid; 9]).unwrap();
        let encoded = encode(&volume, &pair());
        assert_eq!(encoded.palette, vec![784]);
        assert!(encoded.blocks.iter().all(|&index| index == 0));
        assert_eq!(decode(&encoded.palette, &encoded.blocks, 3, &pair()).unwrap(), volume);
    }

    #[test]
    fn test_round_trip() {
        let volume = checker(5);
        let encoded = encode(&volume, &pair());
        assert_eq!(encoded.palette.len(), 2);
        assert_eq!(encoded.blocks.len(), 25);
        assert!(encoded.blocks.iter().all(|&i| (i as usize) < encoded.palette.len()));
        assert_eq!(decode(&encoded.palette, &encoded.blocks, 5, &pair()).unwrap(), volume);
    }

    #[test]
    fn test_round_trip_with_other_materials() {
        let materials = MaterialPair::new(
            schemtile_registry::parse_material("wool:15").unwrap(),
            schemtile_registry::parse_material("wool:0").unwrap(),
        )
        .unwrap();
        let volume = checker(4);
        let encoded = encode(&volume, &materials);
        assert_eq!(encoded.palette, vec![35 << 4 | 15, 35 << 4]);
        assert_eq!(decode(&encoded.palette, &encoded.blocks, 4, &materials).unwrap(), volume);
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        let materials = pair();
        assert_matches!(
            decode(&[0], &[0, 0, 0], 2, &materials),
            Err(TileError::MalformedSection(_))
        );
        assert_matches!(
            decode(&[0], &[0, 0, 0, 1], 2, &materials),
            Err(TileError::MalformedSection(_))
        );
        assert_matches!(
            decode(&[16], &[0, 0, 0, 0], 2, &materials),
            Err(TileError::MalformedSection(_))
        );
        assert_matches!(
            decode(&[0, 0], &[0, 0, 0, 1], 2, &materials),
            Err(TileError::MalformedSection(_))
        );
    }

    #[test]
    fn test_pair_rejects_identical_materials() {
        let air = schemtile_registry::material("air", 0).unwrap();
        assert_matches!(MaterialPair::new(air, air), Err(TileError::UnknownMaterial(_)));
    }
}
