//! Adjacency compatibility model learned from the sample grid

use crate::algorithm::bitset::TileDomain;
use crate::spatial::Grid;
use crate::spatial::direction::{DIRECTION_COUNT, STEP_RIGHT, rotate_quarter, translate};

/// Per-direction adjacency constraints observed in the sample
///
/// For each of the four cardinal directions and each tile identity, records
/// the set of tiles seen adjacent to it in that direction anywhere in the
/// sample. Built once per generation and immutable afterwards.
///
/// A single-cell sample has no adjacent pairs at all, so every compatibility
/// set comes out empty. That is the correct model for it, not an error: the
/// empty sets only constrain cells that actually have neighbours to satisfy.
#[derive(Debug, Clone)]
pub struct CompatibilityModel {
    allowed: Vec<TileDomain>,
    empty: TileDomain,
    tile_count: usize,
}

impl CompatibilityModel {
    /// Learn adjacency constraints from a sample grid
    ///
    /// Walks every sample cell, rotates a unit step through the four
    /// directions, and records each in-bounds neighbour's tile as compatible
    /// with the cell's tile in that direction.
    pub fn from_sample(sample: &Grid<usize>, tile_count: usize) -> Self {
        let mut allowed = vec![TileDomain::new(tile_count); DIRECTION_COUNT * tile_count];

        for position in sample.positions() {
            let Some(&tile) = sample.get(position) else {
                continue;
            };
            let mut step = STEP_RIGHT;
            for direction in 0..DIRECTION_COUNT {
                let neighbour = translate(position, step);
                step = rotate_quarter(step);
                let Some(&neighbour_tile) = sample.get(neighbour) else {
                    continue;
                };
                if let Some(domain) = allowed.get_mut(direction * tile_count + tile) {
                    domain.insert(neighbour_tile);
                }
            }
        }

        Self {
            allowed,
            empty: TileDomain::new(tile_count),
            tile_count,
        }
    }

    /// Tiles observed adjacent to `tile` in the given direction
    ///
    /// Out-of-range queries yield the empty set.
    pub fn compatible(&self, direction: usize, tile: usize) -> &TileDomain {
        self.allowed
            .get(direction * self.tile_count + tile)
            .unwrap_or(&self.empty)
    }

    /// Union of `compatible(direction, tile)` over every tile in a domain
    ///
    /// This is the mask a neighbour's domain is intersected with during
    /// propagation: everything some still-possible tile would tolerate there.
    pub fn support_mask(&self, direction: usize, domain: &TileDomain) -> TileDomain {
        let mut mask = TileDomain::new(self.tile_count);
        for tile in domain.iter_tiles() {
            mask.union_with(self.compatible(direction, tile));
        }
        mask
    }

    /// Number of distinct tiles the model covers
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }
}
