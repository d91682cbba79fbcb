use image::DynamicImage;
use schemtile_common::{Result, TileError};
use schemtile_section::Image;
use std::fs;
use std::path::Path;

/// Opens and decodes an image file, converting it to 8-bit grayscale.
/// The format is detected from the file contents.
pub fn decode_file(path: &Path) -> Result<Image> {
    let bytes = fs::read(path).map_err(|e| TileError::Decode(format!("{}: {}", path.display(), e)))?;
    decode_bytes(&bytes).map_err(|e| match e {
        TileError::Decode(msg) => TileError::Decode(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Decodes an in-memory encoded image (PNG, JPEG, ...)
pub fn decode_bytes(bytes: &[u8]) -> Result<Image> {
    let dynamic = image::load_from_memory(bytes).map_err(|e| TileError::Decode(e.to_string()))?;
    from_dynamic(dynamic)
}

pub fn from_dynamic(dynamic: DynamicImage) -> Result<Image> {
    let luma = dynamic.to_luma8();
    let (width, height) = luma.dimensions();
    Image::new(width, height, luma.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes(dynamic: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        dynamic
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_grayscale_png_keeps_layout() {
        let gray = GrayImage::from_fn(3, 2, |x, y| Luma([(x + 10 * y) as u8]));
        let image = decode_bytes(&png_bytes(DynamicImage::ImageLuma8(gray))).unwrap();
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.intensities(), &[0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_color_is_converted_to_luma() {
        let rgb = RgbImage::from_fn(2, 1, |x, _| if x == 0 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) });
        let image = from_dynamic(DynamicImage::ImageRgb8(rgb)).unwrap();
        assert_eq!(image.intensities(), &[0, 255]);
    }

    #[test]
    fn test_garbage_is_a_decode_error() {
        assert_matches!(decode_bytes(b"definitely not a png"), Err(TileError::Decode(_)));
    }

    #[test]
    fn test_file_errors_name_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"not an image").unwrap();
        let err = decode_file(&path).unwrap_err();
        assert_matches!(err, TileError::Decode(ref msg) if msg.contains("broken.png"));
    }

    #[test]
    fn test_missing_file_is_a_decode_error() {
        let err = decode_file(Path::new("does/not/exist.png")).unwrap_err();
        assert_matches!(err, TileError::Decode(ref msg) if msg.contains("exist.png"));
    }
}
