//! Decoded source images, normalized to RGBA.

use image::DynamicImage;

/// A decoded source image. Pixels are always 4 bytes per pixel (RGBA),
/// regardless of how many channels the source file carried: a 3-channel
/// source gets a synthesized fully opaque alpha, a 4-channel source keeps
/// its own alpha bytes. Immutable once stored.
#[derive(Debug, Clone)]
pub struct Texture {
    /// Source path or filename as the user gave it.
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Channel count the decoder reported for the source file.
    pub source_channels: u8,
    /// RGBA bytes, row-major, length `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl Texture {
    /// Normalize a decoded image to RGBA. `to_rgba8` fills alpha with 255
    /// when the source has no alpha channel and copies it verbatim when it
    /// does.
    pub fn from_dynamic(name: impl Into<String>, image: DynamicImage) -> Self {
        let source_channels = image.color().channel_count();
        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            name: name.into(),
            width,
            height,
            source_channels,
            pixels: rgba.into_raw(),
        }
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_rgb_source_gets_opaque_alpha() {
        let img = RgbImage::from_pixel(3, 3, Rgb([10, 20, 30]));
        let tex = Texture::from_dynamic("rgb.png", DynamicImage::ImageRgb8(img));
        assert_eq!(tex.source_channels, 3);
        assert_eq!(tex.pixels.len(), 3 * 3 * 4);
        for px in tex.pixels.chunks_exact(4) {
            assert_eq!(px, &[10, 20, 30, 255]);
        }
    }

    #[test]
    fn test_rgba_source_keeps_alpha() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 40]));
        let tex = Texture::from_dynamic("rgba.png", DynamicImage::ImageRgba8(img));
        assert_eq!(tex.source_channels, 4);
        assert_eq!(tex.pixels.len(), 2 * 2 * 4);
        for px in tex.pixels.chunks_exact(4) {
            assert_eq!(px[3], 40);
        }
    }

    #[test]
    fn test_is_square() {
        let img = RgbaImage::new(4, 2);
        let tex = Texture::from_dynamic("wide.png", DynamicImage::ImageRgba8(img));
        assert!(!tex.is_square());
        assert_eq!((tex.width, tex.height), (4, 2));
    }
}
