pub mod cli;
pub mod convert;
pub mod decode;
pub mod output;
pub mod schematic;

// Re-export commonly used items
pub use cli::{Args, ConvertConfig};
pub use convert::{run, ConvertReport};
pub use output::OutputFormat;
pub use schemtile_common::{Result, TileError};
