//! Pixel-block sample loading and PNG rendering
//!
//! An image sample is split into square `tile_size` × `tile_size` pixel
//! blocks, each distinct block becoming one tile identity in order of first
//! appearance (row-major scan). With `tile_size` 1 every pixel is its own
//! tile. Rendering paints each generated cell's block back into a fresh
//! image.

use crate::analysis::weights::Histogram;
use crate::io::error::GenerationError;
use crate::spatial::Grid;
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// A parsed image sample: tile grid, block pixel table, frequency histogram
#[derive(Debug, Clone)]
pub struct PixelSample {
    grid: Grid<usize>,
    blocks: Vec<Vec<[u8; 4]>>,
    tile_size: usize,
    histogram: Histogram,
}

impl PixelSample {
    /// Load an image file and split it into tile blocks
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or is not a valid image
    /// - Either pixel dimension is zero or not a multiple of `tile_size`
    pub fn from_path<P: AsRef<Path>>(path: P, tile_size: usize) -> crate::io::error::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        if tile_size == 0 {
            return Err(crate::io::error::invalid_parameter(
                "tile_size",
                &tile_size,
                &"must be at least 1",
            ));
        }

        let img = image::open(&path_buf).map_err(|e| GenerationError::ImageLoad {
            path: path_buf,
            source: e,
        })?;
        let rgba_img = img.to_rgba8();

        let (width, height) = (rgba_img.width() as usize, rgba_img.height() as usize);
        if width == 0 || height == 0 {
            return Err(GenerationError::InvalidSourceData {
                reason: "sample image has no pixels".to_string(),
            });
        }
        if width % tile_size != 0 || height % tile_size != 0 {
            return Err(GenerationError::InvalidSourceData {
                reason: format!(
                    "image dimensions {width}x{height} are not multiples of tile size {tile_size}"
                ),
            });
        }

        let rows = height / tile_size;
        let cols = width / tile_size;
        let mut blocks: Vec<Vec<[u8; 4]>> = Vec::new();
        let mut grid = Grid::new(rows, cols, 0usize);

        for position in grid.positions() {
            let block = read_block(&rgba_img, position, tile_size);
            let tile = match blocks.iter().position(|known| *known == block) {
                Some(existing) => existing,
                None => {
                    blocks.push(block);
                    blocks.len() - 1
                }
            };
            grid.set(position, tile);
        }

        let histogram = Histogram::from_sample(&grid, blocks.len());
        Ok(Self {
            grid,
            blocks,
            tile_size,
            histogram,
        })
    }

    /// The sample as a grid of tile identities
    pub const fn grid(&self) -> &Grid<usize> {
        &self.grid
    }

    /// Number of distinct pixel blocks discovered
    pub const fn tile_count(&self) -> usize {
        self.blocks.len()
    }

    /// Edge length in pixels of one tile block
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Tile frequency histogram over the sample
    pub const fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Render a generated grid and write it as an image file
    ///
    /// The output image is `cols * tile_size` by `rows * tile_size` pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid holds a tile identity with no block
    /// - The parent directory cannot be created
    /// - The image cannot be saved
    pub fn export<P: AsRef<Path>>(
        &self,
        generated: &Grid<usize>,
        path: P,
    ) -> crate::io::error::Result<()> {
        let width = (generated.cols() * self.tile_size) as u32;
        let height = (generated.rows() * self.tile_size) as u32;
        let mut img = ImageBuffer::new(width, height);

        for position in generated.positions() {
            let tile = generated.get(position).copied().unwrap_or(0);
            let block =
                self.blocks
                    .get(tile)
                    .ok_or(GenerationError::InvalidTileIndex {
                        index: tile,
                        max_tiles: self.blocks.len(),
                    })?;
            paint_block(&mut img, position, self.tile_size, block);
        }

        let path_buf = path.as_ref().to_path_buf();
        if let Some(parent) = path_buf.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        img.save(&path_buf).map_err(|e| GenerationError::ImageExport {
            path: path_buf,
            source: e,
        })
    }
}

// Block pixels in row-major order within the block
fn read_block(
    img: &ImageBuffer<Rgba<u8>, Vec<u8>>,
    position: [i32; 2],
    tile_size: usize,
) -> Vec<[u8; 4]> {
    let base_x = position[1] as usize * tile_size;
    let base_y = position[0] as usize * tile_size;
    let mut block = Vec::with_capacity(tile_size * tile_size);
    for dy in 0..tile_size {
        for dx in 0..tile_size {
            let pixel = img
                .get_pixel_checked((base_x + dx) as u32, (base_y + dy) as u32)
                .map_or([0, 0, 0, 0], |p| p.0);
            block.push(pixel);
        }
    }
    block
}

fn paint_block(
    img: &mut ImageBuffer<Rgba<u8>, Vec<u8>>,
    position: [i32; 2],
    tile_size: usize,
    block: &[[u8; 4]],
) {
    let base_x = position[1] as usize * tile_size;
    let base_y = position[0] as usize * tile_size;
    for dy in 0..tile_size {
        for dx in 0..tile_size {
            let rgba = block.get(dy * tile_size + dx).copied().unwrap_or([0; 4]);
            if let Some(pixel) = img.get_pixel_mut_checked((base_x + dx) as u32, (base_y + dy) as u32)
            {
                *pixel = Rgba(rgba);
            }
        }
    }
}
