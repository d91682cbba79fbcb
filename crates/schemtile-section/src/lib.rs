//! Tiling of a grayscale image into one-layer voxel sections.
//!
//! An [`Image`] is cut into `n x n` pixel tiles ([`Grid`]). Each tile becomes
//! a [`VoxelVolume`] whose voxels are solid where the pixel is darker than the
//! threshold and empty elsewhere, including padding past the image edge. The
//! volume is then palette-encoded into a serializable [`Section`].

pub mod grid;
pub mod image;
pub mod palette;
pub mod partition;
pub mod section;
pub mod summary;
pub mod volume;

pub use grid::{Grid, SectionCoord};
pub use image::{Image, PixelSampler, Sample};
pub use palette::{EncodedVolume, MaterialPair};
pub use partition::{Partition, PartitionConfig, Partitioner};
pub use section::Section;
pub use summary::PartitionSummary;
pub use volume::{MaterialState, SectionBuilder, VoxelVolume};
