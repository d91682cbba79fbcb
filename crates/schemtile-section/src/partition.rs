use crate::grid::{Grid, SectionCoord};
use crate::image::{Image, PixelSampler};
use crate::palette::MaterialPair;
use crate::section::Section;
use crate::summary::PartitionSummary;
use crate::volume::{SectionBuilder, DEFAULT_THRESHOLD};
use rayon::prelude::*;
use schemtile_common::{Result, TileError};
use std::collections::BTreeMap;

pub const DEFAULT_SECTION_SIZE: u32 = 16;
pub const DEFAULT_VERSION: &str = "1.12";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionConfig {
    pub section_size: u32,
    /// Intensities strictly below this become solid; must fit 0..=255.
    pub threshold: u16,
    /// Passed through untouched into every section.
    pub version: String,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        PartitionConfig {
            section_size: DEFAULT_SECTION_SIZE,
            threshold: DEFAULT_THRESHOLD as u16,
            version: DEFAULT_VERSION.to_owned(),
        }
    }
}

impl PartitionConfig {
    pub fn validate(&self) -> Result<SectionBuilder> {
        let threshold = u8::try_from(self.threshold).map_err(|_| {
            TileError::invalid_config(format!("threshold {} is outside 0..=255", self.threshold))
        })?;
        if self.version.trim().is_empty() {
            return Err(TileError::invalid_config("version tag must not be empty"));
        }
        SectionBuilder::new(self.section_size, threshold)
    }
}

/// Every section of an image, keyed by coordinate, plus the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub sections: BTreeMap<SectionCoord, Section>,
    pub summary: PartitionSummary,
}

impl Partition {
    pub fn get(&self, coord: SectionCoord) -> Option<&Section> {
        self.sections.get(&coord)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in coordinate order
    pub fn iter(&self) -> impl Iterator<Item = (&SectionCoord, &Section)> {
        self.sections.iter()
    }
}

/// Splits images into sections using one validated configuration
#[derive(Debug, Clone)]
pub struct Partitioner {
    config: PartitionConfig,
    builder: SectionBuilder,
    materials: MaterialPair,
}

impl Partitioner {
    pub fn new(config: PartitionConfig, materials: MaterialPair) -> Result<Self> {
        let builder = config.validate()?;
        Ok(Partitioner {
            config,
            builder,
            materials,
        })
    }

    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    pub fn materials(&self) -> &MaterialPair {
        &self.materials
    }

    pub fn grid(&self, image: &Image) -> Result<Grid> {
        Grid::compute(image.width(), image.height(), self.builder.section_size())
    }

    pub fn build_section(&self, sampler: &PixelSampler<'_>, coord: SectionCoord) -> Section {
        let volume = self.builder.build(coord, sampler);
        Section::from_volume(&volume, &self.config.version, &self.materials)
    }

    /// Builds every section on the calling thread, in coordinate order.
    pub fn run(&self, image: &Image) -> Result<Partition> {
        let grid = self.grid(image)?;
        let summary = PartitionSummary::from_grid(&grid, image.width(), image.height())?;
        let sampler = PixelSampler::new(image);

        let sections = grid
            .coordinates()
            .map(|coord| (coord, self.build_section(&sampler, coord)))
            .collect();

        Ok(Partition { sections, summary })
    }

    /// Same result as [`Partitioner::run`], with sections built on the rayon
    /// pool. Each task returns its own section; the map is assembled after
    /// every task has finished.
    pub fn run_parallel(&self, image: &Image) -> Result<Partition> {
        let grid = self.grid(image)?;
        let summary = PartitionSummary::from_grid(&grid, image.width(), image.height())?;
        let sampler = PixelSampler::new(image);

        let built: Vec<(SectionCoord, Section)> = grid
            .coordinates()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|coord| (coord, self.build_section(&sampler, coord)))
            .collect();

        Ok(Partition {
            sections: built.into_iter().collect(),
            summary,
        })
    }
}
