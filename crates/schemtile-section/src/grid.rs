use schemtile_common::{Result, TileError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a section in the tiling grid
///
/// Ordering is by `x`, then `z`, which is also the enumeration order of
/// [`Grid::coordinates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionCoord {
    pub x: u32,
    pub z: u32,
}

impl SectionCoord {
    pub fn new(x: u32, z: u32) -> Self {
        SectionCoord { x, z }
    }

    /// File name stem used for this section's output, e.g. `1_0`
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.x, self.z)
    }
}

impl fmt::Display for SectionCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.z)
    }
}

/// Number of sections along each image axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub sections_x: u32,
    pub sections_z: u32,
}

impl Grid {
    pub fn compute(width: u32, height: u32, section_size: u32) -> Result<Grid> {
        if section_size == 0 {
            return Err(TileError::invalid_config("section size must be positive"));
        }
        if width == 0 || height == 0 {
            return Err(TileError::invalid_config(format!(
                "cannot tile a {}x{} image",
                width, height
            )));
        }
        Ok(Grid {
            sections_x: width.div_ceil(section_size),
            sections_z: height.div_ceil(section_size),
        })
    }

    pub fn section_count(&self) -> usize {
        self.sections_x as usize * self.sections_z as usize
    }

    /// Every coordinate once: all z for a given x before advancing x.
    pub fn coordinates(&self) -> impl Iterator<Item = SectionCoord> {
        let sections_z = self.sections_z;
        (0..self.sections_x).flat_map(move |x| (0..sections_z).map(move |z| SectionCoord::new(x, z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashSet;

    #[test]
    fn test_ceiling_division() {
        assert_eq!(
            Grid::compute(20, 20, 16).unwrap(),
            Grid { sections_x: 2, sections_z: 2 }
        );
        assert_eq!(
            Grid::compute(32, 16, 16).unwrap(),
            Grid { sections_x: 2, sections_z: 1 }
        );
        assert_eq!(
            Grid::compute(1, 33, 16).unwrap(),
            Grid { sections_x: 1, sections_z: 3 }
        );
        assert_eq!(
            Grid::compute(5, 7, 1).unwrap(),
            Grid { sections_x: 5, sections_z: 7 }
        );
    }

    #[test]
    fn test_zero_section_size_is_invalid() {
        assert_matches!(Grid::compute(20, 20, 0), Err(TileError::InvalidConfiguration(_)));
        assert_matches!(Grid::compute(0, 20, 16), Err(TileError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_enumeration_order() {
        let grid = Grid::compute(20, 40, 16).unwrap();
        let coords: Vec<_> = grid.coordinates().map(|c| (c.x, c.z)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_tiling_completeness() {
        for (width, height, n) in [(1, 1, 1), (20, 20, 16), (17, 3, 4), (64, 48, 16), (100, 7, 9)] {
            let grid = Grid::compute(width, height, n).unwrap();
            let coords: Vec<_> = grid.coordinates().collect();
            let unique: HashSet<_> = coords.iter().copied().collect();
            assert_eq!(coords.len(), grid.section_count());
            assert_eq!(unique.len(), grid.section_count());
            assert!(coords.iter().all(|c| c.x < grid.sections_x && c.z < grid.sections_z));
            // sorted order matches enumeration order
            let mut sorted = coords.clone();
            sorted.sort();
            assert_eq!(sorted, coords);
        }
    }

    #[test]
    fn test_coord_naming() {
        let coord = SectionCoord::new(3, 11);
        assert_eq!(coord.to_string(), "3,11");
        assert_eq!(coord.file_stem(), "3_11");
    }
}
