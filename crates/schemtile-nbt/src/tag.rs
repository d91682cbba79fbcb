use std::collections::BTreeMap;
use std::io;

/// NBT payload kinds used by schematic files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagType {
    End,
    Byte,
    Short,
    Int,
    Long,
    ByteArray,
    String,
    List,
    Compound,
    IntArray,
}

impl TagType {
    pub fn id(self) -> u8 {
        match self {
            TagType::End => 0,
            TagType::Byte => 1,
            TagType::Short => 2,
            TagType::Int => 3,
            TagType::Long => 4,
            TagType::ByteArray => 7,
            TagType::String => 8,
            TagType::List => 9,
            TagType::Compound => 10,
            TagType::IntArray => 11,
        }
    }
}

impl TryFrom<u8> for TagType {
    type Error = io::Error;

    fn try_from(id: u8) -> io::Result<Self> {
        match id {
            0 => Ok(TagType::End),
            1 => Ok(TagType::Byte),
            2 => Ok(TagType::Short),
            3 => Ok(TagType::Int),
            4 => Ok(TagType::Long),
            7 => Ok(TagType::ByteArray),
            8 => Ok(TagType::String),
            9 => Ok(TagType::List),
            10 => Ok(TagType::Compound),
            11 => Ok(TagType::IntArray),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Unsupported tag type: {}", id),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    /// Unsigned view of TAG_Byte_Array; block ids and metadata fit a byte.
    ByteArray(Vec<u8>),
    String(String),
    /// Element type is stored so empty lists keep it on the wire.
    List(TagType, Vec<Tag>),
    /// Sorted so encoded files are deterministic.
    Compound(BTreeMap<String, Tag>),
    IntArray(Vec<i32>),
}

impl Tag {
    pub fn tag_type(&self) -> TagType {
        match self {
            Tag::End => TagType::End,
            Tag::Byte(_) => TagType::Byte,
            Tag::Short(_) => TagType::Short,
            Tag::Int(_) => TagType::Int,
            Tag::Long(_) => TagType::Long,
            Tag::ByteArray(_) => TagType::ByteArray,
            Tag::String(_) => TagType::String,
            Tag::List(..) => TagType::List,
            Tag::Compound(_) => TagType::Compound,
            Tag::IntArray(_) => TagType::IntArray,
        }
    }

    pub fn compound() -> CompoundBuilder {
        CompoundBuilder::default()
    }

    pub fn empty_list(element: TagType) -> Tag {
        Tag::List(element, Vec::new())
    }

    pub fn as_compound(&self) -> Option<&BTreeMap<String, Tag>> {
        match self {
            Tag::Compound(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Tag::Short(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Tag::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Tag::ByteArray(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up `key` when this tag is a compound.
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.as_compound()?.get(key)
    }
}

/// Fluent construction of `Tag::Compound` values
#[derive(Debug, Default)]
pub struct CompoundBuilder {
    entries: BTreeMap<String, Tag>,
}

impl CompoundBuilder {
    pub fn with(mut self, name: &str, tag: Tag) -> Self {
        self.entries.insert(name.to_owned(), tag);
        self
    }

    pub fn build(self) -> Tag {
        Tag::Compound(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_tag_type_ids_round_trip() {
        for tag_type in [
            TagType::End,
            TagType::Byte,
            TagType::Short,
            TagType::Int,
            TagType::Long,
            TagType::ByteArray,
            TagType::String,
            TagType::List,
            TagType::Compound,
            TagType::IntArray,
        ] {
            assert_eq!(TagType::try_from(tag_type.id()).unwrap(), tag_type);
        }
        assert_matches!(TagType::try_from(12u8), Err(_));
    }

    #[test]
    fn test_compound_builder_and_accessors() {
        let tag = Tag::compound()
            .with("Width", Tag::Short(16))
            .with("Materials", Tag::String("Alpha".to_owned()))
            .with("Blocks", Tag::ByteArray(vec![49, 0]))
            .build();

        assert_eq!(tag.tag_type(), TagType::Compound);
        assert_eq!(tag.get("Width").and_then(Tag::as_i16), Some(16));
        assert_eq!(tag.get("Materials").and_then(Tag::as_str), Some("Alpha"));
        assert_eq!(tag.get("Blocks").and_then(Tag::as_bytes), Some(&[49u8, 0][..]));
        assert!(tag.get("Length").is_none());
        assert!(Tag::Int(1).get("Width").is_none());
    }
}
