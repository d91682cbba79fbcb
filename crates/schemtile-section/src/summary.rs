use crate::grid::Grid;
use schemtile_common::{Result, TileError};
use serde::{Deserialize, Serialize};

/// Index record describing how the sections tile the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionSummary {
    pub sections_width: u32,
    pub sections_height: u32,
    pub width: u32,
    pub height: u32,
    pub count: u64,
}

impl PartitionSummary {
    pub fn summarize(sections_x: u32, sections_z: u32, width: u32, height: u32) -> Result<Self> {
        if sections_x == 0 || sections_z == 0 || width == 0 || height == 0 {
            return Err(TileError::invalid_config(format!(
                "cannot summarize {}x{} sections over a {}x{} image",
                sections_x, sections_z, width, height
            )));
        }
        Ok(PartitionSummary {
            sections_width: sections_x,
            sections_height: sections_z,
            width,
            height,
            count: sections_x as u64 * sections_z as u64,
        })
    }

    pub fn from_grid(grid: &Grid, width: u32, height: u32) -> Result<Self> {
        Self::summarize(grid.sections_x, grid.sections_z, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_summary_counts() {
        let summary = PartitionSummary::summarize(2, 3, 20, 40).unwrap();
        assert_eq!(summary.count, 6);
        assert_eq!(summary.sections_width, 2);
        assert_eq!(summary.sections_height, 3);
    }

    #[test]
    fn test_summary_json_field_names() {
        let grid = Grid::compute(20, 20, 16).unwrap();
        let summary = PartitionSummary::from_grid(&grid, 20, 20).unwrap();
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"sectionsWidth":2,"sectionsHeight":2,"width":20,"height":20,"count":4}"#
        );
    }

    #[test]
    fn test_zero_inputs_are_invalid() {
        assert_matches!(
            PartitionSummary::summarize(0, 1, 1, 1),
            Err(TileError::InvalidConfiguration(_))
        );
        assert_matches!(
            PartitionSummary::summarize(1, 1, 1, 0),
            Err(TileError::InvalidConfiguration(_))
        );
    }
}
