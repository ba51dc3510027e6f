//! ASCII sample loading and text rendering
//!
//! The text format is a `rows cols` header followed by one non-whitespace
//! glyph per cell in row-major order, with arbitrary whitespace between
//! cells. Tile identities are assigned to glyphs in order of first
//! appearance, so the first distinct glyph becomes tile 0.

use crate::analysis::weights::Histogram;
use crate::io::error::GenerationError;
use crate::spatial::Grid;
use std::path::{Path, PathBuf};

/// A parsed text sample: tile grid, glyph table, and frequency histogram
#[derive(Debug, Clone)]
pub struct TextSample {
    grid: Grid<usize>,
    glyphs: Vec<char>,
    histogram: Histogram,
}

impl TextSample {
    /// Read and parse a text sample file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not match the
    /// sample format.
    pub fn from_path<P: AsRef<Path>>(path: P) -> crate::io::error::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let content =
            std::fs::read_to_string(&path_buf).map_err(|e| GenerationError::FileSystem {
                path: path_buf.clone(),
                operation: "read sample",
                source: e,
            })?;
        Self::parse(&content).map_err(|reason| GenerationError::SampleParse {
            path: path_buf,
            reason,
        })
    }

    /// Parse a text sample from an in-memory string
    ///
    /// # Errors
    ///
    /// Returns an error if the content does not match the sample format.
    pub fn from_content(content: &str) -> crate::io::error::Result<Self> {
        Self::parse(content).map_err(|reason| GenerationError::SampleParse {
            path: PathBuf::from("<string>"),
            reason,
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let mut tokens = content.split_whitespace();

        let rows = parse_dimension(tokens.next(), "row count")?;
        let cols = parse_dimension(tokens.next(), "column count")?;

        let mut glyphs: Vec<char> = Vec::new();
        let mut grid = Grid::new(rows, cols, 0usize);

        let mut cells = tokens.flat_map(str::chars);
        for position in grid.positions() {
            let glyph = cells.next().ok_or_else(|| {
                format!("expected {} cells, found fewer", rows * cols)
            })?;
            let tile = match glyphs.iter().position(|&known| known == glyph) {
                Some(existing) => existing,
                None => {
                    glyphs.push(glyph);
                    glyphs.len() - 1
                }
            };
            grid.set(position, tile);
        }

        if cells.next().is_some() {
            return Err(format!("expected {} cells, found more", rows * cols));
        }

        let histogram = Histogram::from_sample(&grid, glyphs.len());
        Ok(Self {
            grid,
            glyphs,
            histogram,
        })
    }

    /// The sample as a grid of tile identities
    pub const fn grid(&self) -> &Grid<usize> {
        &self.grid
    }

    /// Number of distinct glyphs discovered
    pub const fn tile_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Glyph for each tile identity, in first-appearance order
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Tile frequency histogram over the sample
    pub const fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Render a generated grid back to glyph text, one line per row
    ///
    /// # Errors
    ///
    /// Returns an error if the grid holds a tile identity with no glyph.
    pub fn render(&self, generated: &Grid<usize>) -> crate::io::error::Result<String> {
        let mut out = String::with_capacity(generated.len() + generated.rows());
        for position in generated.positions() {
            let tile = generated.get(position).copied().unwrap_or(0);
            let glyph =
                self.glyphs
                    .get(tile)
                    .copied()
                    .ok_or(GenerationError::InvalidTileIndex {
                        index: tile,
                        max_tiles: self.glyphs.len(),
                    })?;
            out.push(glyph);
            if position[1] + 1 == generated.cols() as i32 {
                out.push('\n');
            }
        }
        Ok(out)
    }

    /// Render a generated grid and write it to a file
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the file cannot be written.
    pub fn export<P: AsRef<Path>>(
        &self,
        generated: &Grid<usize>,
        path: P,
    ) -> crate::io::error::Result<()> {
        let rendered = self.render(generated)?;
        std::fs::write(path.as_ref(), rendered).map_err(|e| GenerationError::FileSystem {
            path: path.as_ref().to_path_buf(),
            operation: "write output",
            source: e,
        })
    }
}

fn parse_dimension(token: Option<&str>, name: &str) -> std::result::Result<usize, String> {
    let token = token.ok_or_else(|| format!("missing {name} in header"))?;
    let value: usize = token
        .parse()
        .map_err(|error| format!("invalid {name} '{token}' in header: {error}"))?;
    if value == 0 {
        return Err(format!("{name} must be at least 1"));
    }
    Ok(value)
}
