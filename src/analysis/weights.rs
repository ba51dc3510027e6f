//! Tile frequency histogram and domain entropy
//!
//! The histogram assigns every tile its global frequency in the sample.
//! Cell entropy sums `-p ln p` over the tiles remaining in the cell's
//! domain, with `p` taken straight from the global histogram rather than
//! renormalized to a conditional distribution. The resulting values are
//! slightly biased as entropies go, but they preserve the ordering the
//! scheduler cares about: fewer remaining tiles means less uncertainty.

use crate::algorithm::bitset::TileDomain;
use crate::spatial::Grid;

/// Global tile frequencies learned from the sample, normalized to sum to 1
#[derive(Debug, Clone)]
pub struct Histogram {
    probabilities: Vec<f64>,
}

impl Histogram {
    /// Count tile occurrences in a sample grid and normalize
    ///
    /// Tiles that never occur (possible only if `tile_count` overshoots the
    /// sample contents) get probability zero and never contribute entropy.
    pub fn from_sample(sample: &Grid<usize>, tile_count: usize) -> Self {
        let mut counts = vec![0usize; tile_count];
        for &tile in sample.values() {
            if let Some(count) = counts.get_mut(tile) {
                *count += 1;
            }
        }

        let total = sample.len().max(1) as f64;
        let probabilities = counts.iter().map(|&count| count as f64 / total).collect();

        Self { probabilities }
    }

    /// Build directly from precomputed probabilities
    pub const fn from_probabilities(probabilities: Vec<f64>) -> Self {
        Self { probabilities }
    }

    /// Frequency of a tile, zero for out-of-range identities
    pub fn probability(&self, tile: usize) -> f64 {
        self.probabilities.get(tile).copied().unwrap_or(0.0)
    }

    /// Number of tile identities covered
    pub const fn tile_count(&self) -> usize {
        self.probabilities.len()
    }

    /// All probabilities, indexed by tile identity
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }
}

/// Shannon entropy of a domain under the global histogram
///
/// Must not be called on an empty domain: the empty sum is numerically zero,
/// which is indistinguishable from a maximally certain cell. Propagation and
/// sampling detect empty domains and raise a contradiction before entropy is
/// ever computed, so callers here always hold a non-empty domain.
pub fn entropy(histogram: &Histogram, domain: &TileDomain) -> f64 {
    let mut h = 0.0;
    for tile in domain.iter_tiles() {
        let p = histogram.probability(tile);
        if p > 0.0 {
            h -= p * p.ln();
        }
    }
    h
}
