//! Statistical analysis of the sample grid

/// Tile frequency histogram and entropy calculation
pub mod weights;

pub use weights::Histogram;
