pub mod codec;
pub mod tag;

pub use codec::{read_named, write_named};
pub use tag::{CompoundBuilder, Tag, TagType};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Read, Write};

/// A complete NBT document: one named root tag, usually gzip framed on disk
#[derive(Debug, Clone, PartialEq)]
pub struct NbtFile {
    pub name: String,
    pub root: Tag,
}

impl NbtFile {
    pub fn new(name: impl Into<String>, root: Tag) -> Self {
        NbtFile {
            name: name.into(),
            root,
        }
    }

    pub fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        let (name, root) = read_named(reader)?;
        Ok(NbtFile { name, root })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_named(writer, &self.name, &self.root)
    }

    pub fn read_gzip<R: Read>(reader: R) -> io::Result<Self> {
        Self::read(&mut GzDecoder::new(reader))
    }

    pub fn write_gzip<W: Write>(&self, writer: W) -> io::Result<W> {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        self.write(&mut encoder)?;
        encoder.finish()
    }

    pub fn to_gzip_bytes(&self) -> io::Result<Vec<u8>> {
        self.write_gzip(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_gzip_round_trip() {
        let original = NbtFile::new(
            "Schematic",
            Tag::compound()
                .with("Width", Tag::Short(2))
                .with("Blocks", Tag::ByteArray(vec![49, 0]))
                .build(),
        );

        let bytes = original.to_gzip_bytes().unwrap();
        // gzip magic
        assert_eq!(&bytes[..2], &[0x1f, 0x8b]);

        let read = NbtFile::read_gzip(Cursor::new(bytes)).unwrap();
        assert_eq!(read, original);
    }

    #[test]
    fn test_plain_round_trip() {
        let original = NbtFile::new("", Tag::compound().with("x", Tag::Int(-3)).build());
        let mut buffer = Vec::new();
        original.write(&mut buffer).unwrap();
        assert_eq!(NbtFile::read(&mut Cursor::new(buffer)).unwrap(), original);
    }
}
