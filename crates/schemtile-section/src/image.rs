use schemtile_common::{Result, TileError};

/// Decoded single-channel image, row-major: pixel `(x, z)` lives at `x + z * width`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    intensities: Vec<u8>,
}

impl Image {
    pub fn new(width: u32, height: u32, intensities: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TileError::invalid_config(format!(
                "image dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        let expected = width as usize * height as usize;
        if intensities.len() != expected {
            return Err(TileError::invalid_config(format!(
                "{}x{} image needs {} samples, got {}",
                width,
                height,
                expected,
                intensities.len()
            )));
        }
        Ok(Image {
            width,
            height,
            intensities,
        })
    }

    /// Image where every pixel has the same intensity
    pub fn filled(width: u32, height: u32, intensity: u8) -> Result<Self> {
        Image::new(width, height, vec![intensity; width as usize * height as usize])
    }

    /// Builds an image by evaluating `f(x, z)` for every pixel
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> Result<Self> {
        let mut intensities = Vec::with_capacity(width as usize * height as usize);
        for z in 0..height {
            for x in 0..width {
                intensities.push(f(x, z));
            }
        }
        Image::new(width, height, intensities)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn intensities(&self) -> &[u8] {
        &self.intensities
    }
}

/// Result of sampling a pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Intensity(u8),
    OutOfBounds,
}

/// Bounds-aware read access to an [`Image`]
#[derive(Debug, Clone, Copy)]
pub struct PixelSampler<'a> {
    image: &'a Image,
}

impl<'a> PixelSampler<'a> {
    pub fn new(image: &'a Image) -> Self {
        PixelSampler { image }
    }

    pub fn sample(&self, x: i64, z: i64) -> Sample {
        if x < 0 || z < 0 || x >= self.image.width as i64 || z >= self.image.height as i64 {
            return Sample::OutOfBounds;
        }
        let index = x as usize + z as usize * self.image.width as usize;
        Sample::Intensity(self.image.intensities[index])
    }
}
