//! Spatial data structures and coordinate arithmetic
//!
//! This module contains spatial-related functionality including:
//! - Fixed-size grid container with bounds testing
//! - Cardinal direction enumeration by quarter rotation

/// Direction vectors and rotation utilities
pub mod direction;
/// Fixed-size 2D grid container
pub mod grid;

pub use grid::Grid;
