//! Image decoding for diffuse textures
//!
//! Decoding goes through the `image` crate. Any channel layout is normalised
//! to RGBA8 so the GPU side only deals with one texture format.

use std::path::Path;

use image::{imageops::FilterType, RgbaImage};

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// A decoded RGBA8 image ready for upload
#[derive(Debug, Clone)]
pub struct TextureImage {
    pub pixels: RgbaImage,
    /// True when decoding failed and a 1x1 stand-in was produced
    pub is_placeholder: bool,
}

impl TextureImage {
    /// Decodes an image file, falling back to a 1x1 placeholder on failure
    ///
    /// Rendering continues with the placeholder bound in place of the
    /// missing texture.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(image) => {
                log::info!(
                    "Loaded texture {:?} ({}x{})",
                    path,
                    image.width(),
                    image.height()
                );
                image
            }
            Err(e) => {
                log::error!("Failed to load texture {:?}: {}", path, e);
                Self::placeholder()
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TextureError> {
        let pixels = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self {
            pixels,
            is_placeholder: false,
        })
    }

    /// Single opaque black texel
    pub fn placeholder() -> Self {
        Self {
            pixels: RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 255])),
            is_placeholder: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn mip_level_count(&self) -> u32 {
        self.width().max(self.height()).max(1).ilog2() + 1
    }

    /// Full mip chain from the base image down to 1x1
    ///
    /// Each level halves both dimensions (never below 1) and is resampled
    /// from the previous level with a triangle filter.
    pub fn mip_chain(&self) -> Vec<RgbaImage> {
        let count = self.mip_level_count() as usize;
        let mut levels = Vec::with_capacity(count);
        levels.push(self.pixels.clone());

        while levels.len() < count {
            let prev = &levels[levels.len() - 1];
            let width = (prev.width() / 2).max(1);
            let height = (prev.height() / 2).max(1);
            let next = image::imageops::resize(prev, width, height, FilterType::Triangle);
            levels.push(next);
        }

        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x * 40) as u8, (y * 40) as u8, 128, 255])
        });
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_png() {
        let image = TextureImage::from_bytes(&png_bytes(4, 2)).unwrap();
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 2);
        assert!(!image.is_placeholder);
        assert_eq!(image.pixels.get_pixel(1, 1).0, [40, 40, 128, 255]);
    }

    #[test]
    fn test_rgb_is_expanded_to_rgba() {
        let rgb = image::RgbImage::from_pixel(2, 2, image::Rgb([10, 20, 30]));
        let mut bytes = Vec::new();
        rgb.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let image = TextureImage::from_bytes(&bytes).unwrap();
        assert_eq!(image.pixels.get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_missing_file_yields_placeholder() {
        let path = std::env::temp_dir().join("turntable-missing-texture.png");
        let _ = std::fs::remove_file(&path);

        assert!(matches!(
            TextureImage::from_file(&path),
            Err(TextureError::Io(_))
        ));

        let image = TextureImage::load(&path);
        assert!(image.is_placeholder);
        assert_eq!((image.width(), image.height()), (1, 1));
        assert_eq!(image.mip_chain().len(), 1);
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        assert!(TextureImage::from_bytes(b"not an image").is_err());
    }

    #[test]
    fn test_mip_chain_sizes() {
        let image = TextureImage::from_bytes(&png_bytes(8, 4)).unwrap();
        assert_eq!(image.mip_level_count(), 4);

        let sizes: Vec<(u32, u32)> = image
            .mip_chain()
            .iter()
            .map(|level| level.dimensions())
            .collect();
        assert_eq!(sizes, vec![(8, 4), (4, 2), (2, 1), (1, 1)]);
    }

    #[test]
    fn test_mip_chain_odd_size() {
        let image = TextureImage::from_bytes(&png_bytes(5, 3)).unwrap();
        let sizes: Vec<(u32, u32)> = image
            .mip_chain()
            .iter()
            .map(|level| level.dimensions())
            .collect();
        assert_eq!(sizes, vec![(5, 3), (2, 1), (1, 1)]);
    }
}
