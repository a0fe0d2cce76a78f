//! Atlas generation: grid layout over the store plus the pixel copy into a
//! single RGBA buffer, and PNG output.

use std::path::Path;

use thiserror::Error;

use crate::store::TextureStore;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("no textures loaded; add at least one image before generating an atlas")]
    EmptyStore,
    #[error("failed to write atlas: {0}")]
    Encode(#[from] image::ImageError),
}

/// A generated atlas. `dim` is the pixel edge of the whole image,
/// `grid` the number of cells per row/column, `tile` the pixel edge of one
/// cell. `dim == grid * tile` always holds.
#[derive(Debug, Clone)]
pub struct Atlas {
    pub pixels: Vec<u8>,
    pub dim: u32,
    pub grid: u32,
    pub tile: u32,
}

impl Atlas {
    /// Write the atlas as an 8-bit RGBA PNG, whatever the filename extension.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), AtlasError> {
        image::save_buffer_with_format(
            path,
            &self.pixels,
            self.dim,
            self.dim,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )?;
        Ok(())
    }
}

/// Smallest grid edge whose square holds `count` tiles (integer ceiling
/// square root). Returns 0 for an empty count.
pub fn grid_edge(count: usize) -> u32 {
    let mut g: u32 = 0;
    while (g as usize) * (g as usize) < count {
        g += 1;
    }
    g
}

/// Tile every stored texture into the smallest square grid that fits them,
/// row-major in insertion order. Cells past the last texture stay zeroed,
/// i.e. fully transparent black. Pure function of the store's contents and
/// order.
pub fn build(store: &TextureStore) -> Result<Atlas, AtlasError> {
    let tile = store.edge().ok_or(AtlasError::EmptyStore)?;
    let grid = grid_edge(store.len());
    let dim = grid * tile;

    let tile_sz = tile as usize;
    let row_bytes = dim as usize * 4;
    let tile_row_bytes = tile_sz * 4;
    let mut pixels = vec![0u8; dim as usize * dim as usize * 4];

    for (index, texture) in store.textures().iter().enumerate() {
        let cell_row = index / grid as usize;
        let cell_col = index % grid as usize;
        let top = cell_row * tile_sz;
        let left_bytes = cell_col * tile_row_bytes;
        for y in 0..tile_sz {
            let src = &texture.pixels[y * tile_row_bytes..(y + 1) * tile_row_bytes];
            let dst = (top + y) * row_bytes + left_bytes;
            pixels[dst..dst + tile_row_bytes].copy_from_slice(src);
        }
    }

    Ok(Atlas { pixels, dim, grid, tile })
}
