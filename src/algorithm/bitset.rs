use bitvec::prelude::*;
use std::fmt;

/// Fixed-capacity set of tile identities, one bit per tile
///
/// Represents the domain of a wave cell: the tiles still admissible there.
/// Tile identities are zero-based indices below the capacity fixed at
/// construction. During solving domains only ever shrink, so the only
/// mutating operations are intersection and collapse to a single tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDomain {
    bits: BitVec,
    tile_count: usize,
}

impl TileDomain {
    /// Create a domain with no tiles present
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
            tile_count,
        }
    }

    /// Create a domain containing every tile
    pub fn all(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
            tile_count,
        }
    }

    /// Insert a tile identity, ignoring identities beyond capacity
    pub fn insert(&mut self, tile: usize) {
        if tile < self.tile_count {
            self.bits.set(tile, true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Intersect this domain with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new domain containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Merge another domain into this one in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Reduce the domain to exactly one tile
    pub fn collapse_to(&mut self, tile: usize) {
        self.bits.fill(false);
        self.insert(tile);
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the domain
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Capacity fixed at construction
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Iterate over the tile identities present
    pub fn iter_tiles(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all tile identities as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for TileDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileDomain({} tiles: {:?})", self.count(), self.to_vec())
    }
}
