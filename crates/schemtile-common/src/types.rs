use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, crate::error::TileError>;

/// Integer x/y/z triple used for section sizes and offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Extent {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Extent {
    pub const ZERO: Extent = Extent { x: 0, y: 0, z: 0 };

    /// Size of a one-layer section with edge `n`.
    pub fn flat(n: u32) -> Self {
        Extent { x: n, y: 1, z: n }
    }
}
