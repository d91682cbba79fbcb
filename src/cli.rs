use crate::output::OutputFormat;
use clap::Parser;
use schemtile_common::Result;
use schemtile_section::partition::{DEFAULT_SECTION_SIZE, DEFAULT_VERSION};
use schemtile_section::{MaterialPair, PartitionConfig};
use std::path::PathBuf;

/// Converts a grayscale image into a grid of one-layer block schematics.
#[derive(Parser, Debug)]
#[command(name = "schemtile", version)]
pub struct Args {
    /// Image to convert (PNG, JPEG, GIF or BMP)
    pub input: PathBuf,

    /// Directory that receives `schematics/`
    #[arg(short, long, default_value = "out")]
    pub output: PathBuf,

    /// Edge length of a section in pixels
    #[arg(short = 'n', long, default_value_t = DEFAULT_SECTION_SIZE)]
    pub section_size: u32,

    /// Pixels darker than this become solid
    #[arg(short, long, default_value_t = 200)]
    pub threshold: u16,

    /// Version tag written into every section
    #[arg(long, default_value = DEFAULT_VERSION)]
    pub mc_version: String,

    /// Material for solid voxels, `name` or `name:metadata`
    #[arg(long, default_value = "obsidian")]
    pub solid: String,

    /// Material for empty voxels
    #[arg(long, default_value = "air")]
    pub empty: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Build sections on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything a conversion needs, independent of how it was supplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub partition: PartitionConfig,
    pub solid: String,
    pub empty: String,
    pub format: OutputFormat,
    pub parallel: bool,
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        ConvertConfig {
            input: input.into(),
            output: output.into(),
            partition: PartitionConfig::default(),
            solid: "obsidian".to_owned(),
            empty: "air".to_owned(),
            format: OutputFormat::Json,
            parallel: false,
        }
    }

    pub fn materials(&self) -> Result<MaterialPair> {
        MaterialPair::new(
            schemtile_registry::parse_material(&self.solid)?,
            schemtile_registry::parse_material(&self.empty)?,
        )
    }
}

impl From<Args> for ConvertConfig {
    fn from(args: Args) -> Self {
        ConvertConfig {
            input: args.input,
            output: args.output,
            partition: PartitionConfig {
                section_size: args.section_size,
                threshold: args.threshold,
                version: args.mc_version,
            },
            solid: args.solid,
            empty: args.empty,
            format: args.format,
            parallel: args.parallel,
        }
    }
}
