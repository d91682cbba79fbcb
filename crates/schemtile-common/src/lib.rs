pub mod error;
pub mod types;

pub use error::TileError;
pub use types::{Extent, Result};
