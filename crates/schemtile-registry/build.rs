use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Deserialize, Debug)]
struct Variation {
    metadata: u8,
    #[serde(rename = "displayName")]
    display_name: String,
}

#[derive(Deserialize, Debug)]
struct Block {
    id: u16,
    name: String,
    #[serde(rename = "displayName")]
    display_name: String,
    #[allow(dead_code)]
    #[serde(default)]
    hardness: Option<f32>,
    #[serde(default)]
    transparent: bool,
    #[serde(default)]
    variations: Vec<Variation>,
}

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let blocks_json_path = Path::new(&manifest_dir).join("blocks.json");
    let blocks_json = fs::read_to_string(&blocks_json_path).expect("Failed to read blocks.json");

    let blocks: Vec<Block> =
        serde_json::from_str(&blocks_json).expect("Failed to parse blocks.json");

    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();
    for block in &blocks {
        assert!(seen_ids.insert(block.id), "Duplicate block id {}", block.id);
        assert!(
            seen_names.insert(block.name.as_str()),
            "Duplicate block name {}",
            block.name
        );
        assert!(block.id < 4096, "Block id {} does not fit a state id", block.id);
        for variation in &block.variations {
            assert!(
                variation.metadata < 16,
                "Metadata {} of {} does not fit a nibble",
                variation.metadata,
                block.name
            );
        }
    }

    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR not set");
    let dest_path = Path::new(&out_dir).join("blocks.rs");
    let mut out_file =
        BufWriter::new(File::create(&dest_path).expect("Failed to create blocks.rs"));

    writeln!(&mut out_file, "use crate::{{BlockEntry, Variation}};").unwrap();
    writeln!(&mut out_file, "pub static BLOCKS: &[BlockEntry] = &[").unwrap();

    for block in &blocks {
        let variations = block
            .variations
            .iter()
            .map(|v| {
                format!(
                    "Variation {{ metadata: {}, display_name: {:?} }}",
                    v.metadata, v.display_name
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(
            &mut out_file,
            "    BlockEntry {{ id: {}, name: {:?}, display_name: {:?}, transparent: {}, variations: &[{}] }},",
            block.id, block.name, block.display_name, block.transparent, variations
        )
        .unwrap();
    }

    writeln!(&mut out_file, "];").unwrap();
    println!("cargo:rerun-if-changed=blocks.json");
}
