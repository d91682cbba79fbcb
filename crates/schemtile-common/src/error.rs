use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum TileError {
    /// Section size, threshold, version tag or image shape is unusable.
    InvalidConfiguration(String),
    UnknownMaterial(String),
    MalformedSection(String),
    /// The source image could not be opened or decoded.
    Decode(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl TileError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        TileError::InvalidConfiguration(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        TileError::MalformedSection(msg.into())
    }
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            TileError::UnknownMaterial(msg) => write!(f, "Unknown material: {}", msg),
            TileError::MalformedSection(msg) => write!(f, "Malformed section: {}", msg),
            TileError::Decode(msg) => write!(f, "Image decode error: {}", msg),
            TileError::Io(err) => write!(f, "IO error: {}", err),
            TileError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl Error for TileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TileError::Io(err) => Some(err),
            TileError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TileError {
    fn from(err: std::io::Error) -> Self {
        TileError::Io(err)
    }
}

impl From<serde_json::Error> for TileError {
    fn from(err: serde_json::Error) -> Self {
        TileError::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            TileError::invalid_config("section size must be positive").to_string(),
            "Invalid configuration: section size must be positive"
        );
        assert_eq!(
            TileError::malformed("palette is empty").to_string(),
            "Malformed section: palette is empty"
        );
        assert_eq!(
            TileError::UnknownMaterial("glowing_obsidian".to_owned()).to_string(),
            "Unknown material: glowing_obsidian"
        );
    }

    #[test]
    fn test_io_error_conversion_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TileError = io_err.into();
        assert_matches!(err, TileError::Io(_));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = TileError::from(json_err);
        assert_matches!(err, TileError::Json(_));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
