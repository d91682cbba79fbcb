use crate::cli::ConvertConfig;
use crate::{decode, output};
use schemtile_common::{Result, TileError};
use schemtile_logger::{
    log,
    LogSeverity::{Debug, Info, Warning},
};
use schemtile_registry::REGISTRY_VERSION;
use schemtile_section::{Image, MaterialPair, Partition, PartitionSummary, Partitioner, Section, SectionCoord};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// What a finished conversion produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub summary: PartitionSummary,
    pub written: Vec<PathBuf>,
}

fn join_error(e: tokio::task::JoinError) -> TileError {
    TileError::Io(io::Error::new(io::ErrorKind::Other, e))
}

/// Validates `config` and resolves its materials before any file is read.
pub fn prepare(config: &ConvertConfig) -> Result<Partitioner> {
    let materials = config.materials()?;
    if materials.solid().transparent {
        log(
            format!("Solid material {} is transparent", materials.solid()),
            Warning,
        );
    }
    if config.partition.version != REGISTRY_VERSION {
        log(
            format!(
                "Sections are tagged {} but block ids follow {}",
                config.partition.version, REGISTRY_VERSION
            ),
            Warning,
        );
    }
    Partitioner::new(config.partition.clone(), materials)
}

/// One debug line per section: solid voxel count, flagged when uniform.
pub fn describe_section(coord: SectionCoord, section: &Section, materials: &MaterialPair) -> String {
    let solid = section.solid_count(materials);
    let uniform = if section.is_uniform() { ", uniform" } else { "" };
    format!(
        "Section {}: {} of {} solid{}",
        coord,
        solid,
        section.blocks.len(),
        uniform
    )
}

/// Runs the partitioner over an already-decoded image on the blocking pool.
pub async fn partition_image(partitioner: Arc<Partitioner>, image: Arc<Image>, parallel: bool) -> Result<Partition> {
    tokio::task::spawn_blocking(move || {
        if parallel {
            partitioner.run_parallel(&image)
        } else {
            partitioner.run(&image)
        }
    })
    .await
    .map_err(join_error)?
}

pub async fn run(config: &ConvertConfig) -> Result<ConvertReport> {
    let partitioner = Arc::new(prepare(config)?);

    let input = config.input.clone();
    let image = tokio::task::spawn_blocking(move || decode::decode_file(&input))
        .await
        .map_err(join_error)??;
    log(
        format!(
            "Image {} is {}x{}",
            config.input.display(),
            image.width(),
            image.height()
        ),
        Info,
    );

    let grid = partitioner.grid(&image)?;
    log(
        format!(
            "Sections: {} wide, {} high ({} of {}x{})",
            grid.sections_x,
            grid.sections_z,
            grid.section_count(),
            config.partition.section_size,
            config.partition.section_size
        ),
        Info,
    );
    if config.parallel {
        log("Building sections in parallel".to_string(), Debug);
    }

    let materials = *partitioner.materials();
    let partition = partition_image(partitioner, Arc::new(image), config.parallel).await?;
    for (coord, section) in partition.iter() {
        log(describe_section(*coord, section, &materials), Debug);
    }
    let written = output::write_partition(&partition, &config.output, config.format).await?;
    log(
        format!(
            "Finished: {} files in {}",
            written.len(),
            output::schematics_dir(&config.output).display()
        ),
        Info,
    );

    Ok(ConvertReport {
        summary: partition.summary,
        written,
    })
}
