use crate::tag::{Tag, TagType};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::collections::BTreeMap;
use std::io::{self, Read, Write};

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

fn read_len<R: Read>(reader: &mut R) -> io::Result<usize> {
    let length = reader.read_i32::<BigEndian>()?;
    usize::try_from(length).map_err(|_| invalid(format!("Negative array length: {}", length)))
}

fn write_len<W: Write>(writer: &mut W, len: usize) -> io::Result<()> {
    let length = i32::try_from(len).map_err(|_| invalid(format!("Array too long: {}", len)))?;
    writer.write_i32::<BigEndian>(length)
}

fn read_string<R: Read>(reader: &mut R) -> io::Result<String> {
    let length = reader.read_u16::<BigEndian>()?;
    let mut bytes = vec![0u8; length as usize];
    reader.read_exact(&mut bytes)?;
    String::from_utf8(bytes).map_err(|e| invalid(e.to_string()))
}

fn write_string<W: Write>(writer: &mut W, value: &str) -> io::Result<()> {
    let length =
        u16::try_from(value.len()).map_err(|_| invalid(format!("String too long: {}", value.len())))?;
    writer.write_u16::<BigEndian>(length)?;
    writer.write_all(value.as_bytes())
}

/// Writes `tag` with its type id and `name`.
pub fn write_named<W: Write>(writer: &mut W, name: &str, tag: &Tag) -> io::Result<()> {
    writer.write_u8(tag.tag_type().id())?;
    if matches!(tag, Tag::End) {
        return Ok(());
    }
    write_string(writer, name)?;
    write_payload(writer, tag)
}

fn write_payload<W: Write>(writer: &mut W, tag: &Tag) -> io::Result<()> {
    match tag {
        Tag::End => Ok(()),
        Tag::Byte(v) => writer.write_i8(*v),
        Tag::Short(v) => writer.write_i16::<BigEndian>(*v),
        Tag::Int(v) => writer.write_i32::<BigEndian>(*v),
        Tag::Long(v) => writer.write_i64::<BigEndian>(*v),
        Tag::ByteArray(bytes) => {
            write_len(writer, bytes.len())?;
            writer.write_all(bytes)
        }
        Tag::String(s) => write_string(writer, s),
        Tag::List(element, items) => {
            if let Some(bad) = items.iter().find(|item| item.tag_type() != *element) {
                return Err(invalid(format!(
                    "List of {:?} holds a {:?}",
                    element,
                    bad.tag_type()
                )));
            }
            writer.write_u8(element.id())?;
            write_len(writer, items.len())?;
            for item in items {
                write_payload(writer, item)?;
            }
            Ok(())
        }
        Tag::Compound(entries) => {
            for (name, entry) in entries {
                write_named(writer, name, entry)?;
            }
            writer.write_u8(TagType::End.id())
        }
        Tag::IntArray(ints) => {
            write_len(writer, ints.len())?;
            for &i in ints {
                writer.write_i32::<BigEndian>(i)?;
            }
            Ok(())
        }
    }
}

/// Reads one named tag. A bare TAG_End yields an empty name.
pub fn read_named<R: Read>(reader: &mut R) -> io::Result<(String, Tag)> {
    let tag_type = TagType::try_from(reader.read_u8()?)?;
    if tag_type == TagType::End {
        return Ok((String::new(), Tag::End));
    }
    let name = read_string(reader)?;
    let tag = read_payload(reader, tag_type)?;
    Ok((name, tag))
}

fn read_payload<R: Read>(reader: &mut R, tag_type: TagType) -> io::Result<Tag> {
    match tag_type {
        TagType::End => Ok(Tag::End),
        TagType::Byte => Ok(Tag::Byte(reader.read_i8()?)),
        TagType::Short => Ok(Tag::Short(reader.read_i16::<BigEndian>()?)),
        TagType::Int => Ok(Tag::Int(reader.read_i32::<BigEndian>()?)),
        TagType::Long => Ok(Tag::Long(reader.read_i64::<BigEndian>()?)),
        TagType::ByteArray => {
            let mut bytes = vec![0u8; read_len(reader)?];
            reader.read_exact(&mut bytes)?;
            Ok(Tag::ByteArray(bytes))
        }
        TagType::String => Ok(Tag::String(read_string(reader)?)),
        TagType::List => {
            let element = TagType::try_from(reader.read_u8()?)?;
            let length = read_len(reader)?;
            let mut items = Vec::with_capacity(length.min(4096));
            for _ in 0..length {
                items.push(read_payload(reader, element)?);
            }
            Ok(Tag::List(element, items))
        }
        TagType::Compound => {
            let mut entries = BTreeMap::new();
            loop {
                let (name, tag) = read_named(reader)?;
                if tag == Tag::End {
                    break;
                }
                entries.insert(name, tag);
            }
            Ok(Tag::Compound(entries))
        }
        TagType::IntArray => {
            let length = read_len(reader)?;
            let mut ints = Vec::with_capacity(length.min(4096));
            for _ in 0..length {
                ints.push(reader.read_i32::<BigEndian>()?);
            }
            Ok(Tag::IntArray(ints))
        }
    }
}
