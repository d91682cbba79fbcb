use crate::schematic;
use clap::ValueEnum;
use futures::stream::{self, StreamExt, TryStreamExt};
use schemtile_common::Result;
use schemtile_logger::{log, LogSeverity::Debug};
use schemtile_section::{Partition, PartitionSummary};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const SCHEMATICS_DIR: &str = "schematics";
pub const INFO_FILE: &str = "info.json";

/// Upper bound on files being written at once
const MAX_CONCURRENT_WRITES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<x>_<z>.json` per section
    Json,
    /// gzip NBT `<x>_<z>.schematic` per section
    Schematic,
    Both,
}

impl OutputFormat {
    pub fn writes_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }

    pub fn writes_schematic(&self) -> bool {
        matches!(self, OutputFormat::Schematic | OutputFormat::Both)
    }
}

pub fn schematics_dir(out_dir: &Path) -> PathBuf {
    out_dir.join(SCHEMATICS_DIR)
}

pub fn summary_json(summary: &PartitionSummary) -> Result<String> {
    Ok(serde_json::to_string(summary)?)
}

/// Serializes every file for `partition` without touching the disk.
pub fn render_files(
    partition: &Partition,
    dir: &Path,
    format: OutputFormat,
) -> Result<Vec<(PathBuf, Vec<u8>)>> {
    let mut files = Vec::with_capacity(partition.len() * 2 + 1);
    files.push((dir.join(INFO_FILE), summary_json(&partition.summary)?.into_bytes()));

    for (coord, section) in partition.iter() {
        let stem = coord.file_stem();
        if format.writes_json() {
            let path = dir.join(format!("{}.json", stem));
            files.push((path, section.to_json(true)?.into_bytes()));
        }
        if format.writes_schematic() {
            let path = dir.join(format!("{}.{}", stem, schematic::FILE_EXTENSION));
            files.push((path, schematic::to_schematic_bytes(section)?));
        }
    }

    Ok(files)
}

/// Writes the summary and every section below `<out_dir>/schematics`.
/// Returns the written paths, sorted.
pub async fn write_partition(
    partition: &Partition,
    out_dir: &Path,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    let dir = schematics_dir(out_dir);
    fs::create_dir_all(&dir).await?;

    let files = render_files(partition, &dir, format)?;
    let mut written: Vec<PathBuf> = stream::iter(files)
        .map(|(path, contents)| async move {
            fs::write(&path, contents).await?;
            log(format!("Wrote {}", path.display()), Debug);
            Ok::<_, std::io::Error>(path)
        })
        .buffer_unordered(MAX_CONCURRENT_WRITES)
        .try_collect()
        .await?;

    written.sort();
    Ok(written)
}
