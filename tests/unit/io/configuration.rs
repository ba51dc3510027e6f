//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use wavetile::io::configuration::{
        DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_TILE_SIZE,
        MAX_GRID_DIMENSION, OUTPUT_SUFFIX,
    };

    // Tests the default output is square and within the dimension cap
    // Verified against the safety limit
    #[test]
    fn test_default_output_within_limits() {
        assert_eq!(DEFAULT_OUTPUT_WIDTH, DEFAULT_OUTPUT_HEIGHT);
        assert!(DEFAULT_OUTPUT_WIDTH <= MAX_GRID_DIMENSION);
    }

    // Tests the output suffix keeps generated files distinguishable
    // Verified by appending it to a sample stem
    #[test]
    fn test_output_suffix_is_nonempty() {
        assert!(!OUTPUT_SUFFIX.is_empty());
        assert_ne!(format!("maze{OUTPUT_SUFFIX}"), "maze");
    }

    // Tests retry and tile-size defaults are usable as-is
    // Verified against the minimum sensible values
    #[test]
    fn test_defaults_are_positive() {
        assert!(DEFAULT_MAX_ATTEMPTS >= 1);
        assert!(DEFAULT_TILE_SIZE >= 1);
    }
}
