//! Wave function collapse tile generation from small example grids
//!
//! The system learns adjacency constraints and tile frequencies from a small
//! sample grid, then collapses an initially unconstrained output grid cell by
//! cell, always choosing the most certain (lowest entropy) cell next and
//! propagating the consequences of each choice to its neighbours.

#![forbid(unsafe_code)]

/// Core solver: domains, compatibility model, scheduler, propagation, executor
pub mod algorithm;
/// Tile frequency analysis and entropy calculation
pub mod analysis;
/// Input/output operations, sample formats, and error handling
pub mod io;
/// Spatial grid container and direction arithmetic
pub mod spatial;

pub use io::error::{GenerationError, Result};
