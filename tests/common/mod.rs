#![allow(dead_code)]

use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use schemtile::ConvertConfig;
use schemtile_section::{PartitionSummary, Section};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes a grayscale PNG built from `f(x, z)` into `dir`.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> PathBuf {
    let path = dir.join(name);
    let gray = GrayImage::from_fn(width, height, |x, z| Luma([f(x, z)]));
    DynamicImage::ImageLuma8(gray)
        .save_with_format(&path, ImageFormat::Png)
        .expect("failed to write test image");
    path
}

/// A temp workspace holding one input image and an output directory
pub fn setup(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> (TempDir, ConvertConfig) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let input = write_png(dir.path(), "input.png", width, height, f);
    let config = ConvertConfig::new(input, dir.path().join("out"));
    (dir, config)
}

pub fn schematics_dir(config: &ConvertConfig) -> PathBuf {
    config.output.join("schematics")
}

pub fn read_summary(config: &ConvertConfig) -> PartitionSummary {
    let text = std::fs::read_to_string(schematics_dir(config).join("info.json")).expect("missing info.json");
    serde_json::from_str(&text).expect("invalid info.json")
}

pub fn read_section(config: &ConvertConfig, x: u32, z: u32) -> Section {
    let path = schematics_dir(config).join(format!("{}_{}.json", x, z));
    let text = std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
    Section::from_json(&text).expect("invalid section json")
}

/// Expands a section into one state id per voxel
pub fn section_states(section: &Section) -> Vec<u32> {
    section
        .blocks
        .iter()
        .map(|&index| section.palette[index as usize])
        .collect()
}
