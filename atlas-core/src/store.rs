//! The texture store: an insertion-ordered collection of equally-sized
//! square textures.

use std::path::Path;

use thiserror::Error;

use crate::texture::Texture;

/// Why a candidate image was not added. A rejected candidate never mutates
/// the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("image failed to load: {0}")]
    Decode(#[from] image::ImageError),
    #[error("width {width} and height {height} do not match; only square textures can be used")]
    NotSquare { width: u32, height: u32 },
    #[error("texture edge is {actual} but previously loaded textures are {expected}; only textures of equal size can be used")]
    EdgeMismatch { expected: u32, actual: u32 },
}

/// Holds every accepted texture in insertion order. The first accepted
/// texture fixes the common edge length; every later candidate must match it.
#[derive(Debug, Default)]
pub struct TextureStore {
    textures: Vec<Texture>,
    edge: Option<u32>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the image at `path` and add it. The decoder accepts any format
    /// the `image` crate was built with (PNG, JPEG, BMP).
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&Texture, StoreError> {
        let path = path.as_ref();
        let image = image::open(path)?;
        self.add(Texture::from_dynamic(path.to_string_lossy(), image))
    }

    /// Add an already-decoded texture. Shape checks run before any state
    /// changes: a non-square texture, or one whose edge disagrees with the
    /// fixed common edge, is rejected without touching the store.
    pub fn add(&mut self, texture: Texture) -> Result<&Texture, StoreError> {
        if !texture.is_square() {
            return Err(StoreError::NotSquare {
                width: texture.width,
                height: texture.height,
            });
        }
        if let Some(expected) = self.edge {
            if texture.width != expected {
                return Err(StoreError::EdgeMismatch {
                    expected,
                    actual: texture.width,
                });
            }
        }
        self.edge.get_or_insert(texture.width);
        let index = self.textures.len();
        self.textures.push(texture);
        Ok(&self.textures[index])
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Common edge length in pixels, `None` until the first texture lands.
    pub fn edge(&self) -> Option<u32> {
        self.edge
    }

    /// Texture names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.textures.iter().map(|t| t.name.as_str())
    }

    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }
}
