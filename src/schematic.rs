//! MCEdit `.schematic` encoding of a section.
//!
//! Blocks are stored as one id byte and one metadata byte per voxel, indexed
//! `(y * length + z) * width + x`, which for a one-layer section is the same
//! x-fastest order the section's `blocks` array uses.

use schemtile_common::{Result, TileError};
use schemtile_nbt::{NbtFile, Tag, TagType};
use schemtile_section::Section;

pub const ROOT_NAME: &str = "Schematic";
pub const FILE_EXTENSION: &str = "schematic";

fn dimension(value: u32, axis: &str) -> Result<i16> {
    i16::try_from(value).map_err(|_| {
        TileError::invalid_config(format!("{} of {} does not fit a schematic", axis, value))
    })
}

pub fn to_schematic(section: &Section) -> Result<NbtFile> {
    let mut ids = Vec::with_capacity(section.palette.len());
    let mut metadata = Vec::with_capacity(section.palette.len());
    for &state_id in &section.palette {
        let block_id = state_id >> 4;
        if block_id > u8::MAX as u32 {
            return Err(TileError::malformed(format!(
                "block id {} needs AddBlocks, which is not written",
                block_id
            )));
        }
        ids.push(block_id as u8);
        metadata.push((state_id & 0xF) as u8);
    }

    let mut blocks = Vec::with_capacity(section.blocks.len());
    let mut data = Vec::with_capacity(section.blocks.len());
    for &index in &section.blocks {
        let index = index as usize;
        if index >= ids.len() {
            return Err(TileError::malformed(format!(
                "block index {} outside palette of {}",
                index,
                ids.len()
            )));
        }
        blocks.push(ids[index]);
        data.push(metadata[index]);
    }

    let root = Tag::compound()
        .with("Width", Tag::Short(dimension(section.size.x, "width")?))
        .with("Height", Tag::Short(dimension(section.size.y, "height")?))
        .with("Length", Tag::Short(dimension(section.size.z, "length")?))
        .with("Materials", Tag::String("Alpha".to_owned()))
        .with("Blocks", Tag::ByteArray(blocks))
        .with("Data", Tag::ByteArray(data))
        .with("Entities", Tag::empty_list(TagType::Compound))
        .with("TileEntities", Tag::empty_list(TagType::Compound))
        .with("WEOffsetX", Tag::Int(section.offset.x as i32))
        .with("WEOffsetY", Tag::Int(section.offset.y as i32))
        .with("WEOffsetZ", Tag::Int(section.offset.z as i32))
        .build();

    Ok(NbtFile::new(ROOT_NAME, root))
}

pub fn to_schematic_bytes(section: &Section) -> Result<Vec<u8>> {
    Ok(to_schematic(section)?.to_gzip_bytes()?)
}

/// State id of every voxel in a schematic, in storage order
pub fn schematic_states(file: &NbtFile) -> Result<Vec<u32>> {
    let blocks = file
        .root
        .get("Blocks")
        .and_then(Tag::as_bytes)
        .ok_or_else(|| TileError::malformed("schematic has no Blocks array"))?;
    let data = file
        .root
        .get("Data")
        .and_then(Tag::as_bytes)
        .ok_or_else(|| TileError::malformed("schematic has no Data array"))?;
    if blocks.len() != data.len() {
        return Err(TileError::malformed(format!(
            "{} blocks but {} data values",
            blocks.len(),
            data.len()
        )));
    }
    Ok(blocks
        .iter()
        .zip(data)
        .map(|(&id, &meta)| (id as u32) << 4 | (meta as u32 & 0xF))
        .collect())
}
