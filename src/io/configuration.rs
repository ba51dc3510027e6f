//! Generation constants and runtime configuration defaults

// Output settings
/// Default generated grid width in cells
pub const DEFAULT_OUTPUT_WIDTH: usize = 32;
/// Default generated grid height in cells
pub const DEFAULT_OUTPUT_HEIGHT: usize = 32;
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Retry behaviour
/// Default number of attempts before giving up on a bounded run
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default edge length in pixels of one tile in image samples
pub const DEFAULT_TILE_SIZE: usize = 1;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
