use crate::grid::SectionCoord;
use crate::image::{PixelSampler, Sample};
use schemtile_common::{Result, TileError};

pub const DEFAULT_THRESHOLD: u8 = 200;

/// Largest section edge; schematic `Width` and `Length` are shorts.
pub const MAX_SECTION_SIZE: u32 = i16::MAX as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialState {
    Solid,
    Empty,
}

/// One-layer `edge x 1 x edge` voxel volume
///
/// Voxels are stored in scan order: `dx` varies fastest, so local
/// `(dx, 0, dz)` lives at `dx + dz * edge`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelVolume {
    edge: u32,
    states: Vec<MaterialState>,
}

impl VoxelVolume {
    pub fn from_states(edge: u32, states: Vec<MaterialState>) -> Result<Self> {
        let expected = edge as usize * edge as usize;
        if edge == 0 || states.len() != expected {
            return Err(TileError::malformed(format!(
                "volume with edge {} needs {} voxels, got {}",
                edge,
                expected,
                states.len()
            )));
        }
        Ok(VoxelVolume { edge, states })
    }

    pub fn edge(&self) -> u32 {
        self.edge
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn index(&self, dx: u32, dz: u32) -> usize {
        dx as usize + dz as usize * self.edge as usize
    }

    pub fn get(&self, dx: u32, dz: u32) -> Option<MaterialState> {
        if dx >= self.edge || dz >= self.edge {
            return None;
        }
        Some(self.states[self.index(dx, dz)])
    }

    /// Voxels in scan order
    pub fn states(&self) -> &[MaterialState] {
        &self.states
    }

    pub fn count(&self, state: MaterialState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }
}

/// Classifies the pixels under one section into a [`VoxelVolume`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBuilder {
    section_size: u32,
    threshold: u8,
}

impl SectionBuilder {
    pub fn new(section_size: u32, threshold: u8) -> Result<Self> {
        if section_size == 0 {
            return Err(TileError::invalid_config("section size must be positive"));
        }
        if section_size > MAX_SECTION_SIZE {
            return Err(TileError::invalid_config(format!(
                "section size {} exceeds {}",
                section_size, MAX_SECTION_SIZE
            )));
        }
        Ok(SectionBuilder {
            section_size,
            threshold,
        })
    }

    pub fn section_size(&self) -> u32 {
        self.section_size
    }

    /// Pixels past the image edge are padded with `Empty`; darker pixels
    /// (strictly below the threshold) become `Solid`.
    pub fn classify(&self, sample: Sample) -> MaterialState {
        match sample {
            Sample::Intensity(value) if value < self.threshold => MaterialState::Solid,
            Sample::Intensity(_) | Sample::OutOfBounds => MaterialState::Empty,
        }
    }

    pub fn build(&self, coord: SectionCoord, sampler: &PixelSampler<'_>) -> VoxelVolume {
        let n = self.section_size as i64;
        let origin_x = coord.x as i64 * n;
        let origin_z = coord.z as i64 * n;

        let mut states = Vec::with_capacity(self.section_size as usize * self.section_size as usize);
        for dz in 0..n {
            for dx in 0..n {
                states.push(self.classify(sampler.sample(origin_x + dx, origin_z + dz)));
            }
        }

        VoxelVolume {
            edge: self.section_size,
            states,
        }
    }
}
