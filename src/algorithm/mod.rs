/// Fixed-capacity domain set tracking which tiles remain possible for a cell
pub mod bitset;
/// Main solver executor with attempt restart handling
pub mod executor;
/// Adjacency compatibility model learned from the sample grid
pub mod model;
/// Worklist-driven constraint propagation across the wave
pub mod propagation;
/// Minimum-entropy cell scheduler with lazy invalidation
pub mod scheduler;
