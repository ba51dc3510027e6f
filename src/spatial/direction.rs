//! Cardinal direction arithmetic for neighbour traversal
//!
//! Directions are plain `[row, col]` step vectors. The four cardinal
//! directions are enumerated by starting from the rightward step and rotating
//! a quarter turn three times, so a direction index is defined by how many
//! rotations produced it: 0 = right, 1 = down, 2 = left, 3 = up.

/// Number of cardinal directions
pub const DIRECTION_COUNT: usize = 4;

/// The rightward unit step, origin of the rotation cycle
pub const STEP_RIGHT: [i32; 2] = [0, 1];

/// Rotate a step vector a quarter turn
///
/// Applying this four times to any vector returns the original vector.
pub const fn rotate_quarter(step: [i32; 2]) -> [i32; 2] {
    [step[1], -step[0]]
}

/// Componentwise addition of a position and a step vector
pub const fn translate(position: [i32; 2], step: [i32; 2]) -> [i32; 2] {
    [position[0] + step[0], position[1] + step[1]]
}

/// All cardinal steps in rotation order, indexed by direction
pub const fn cardinal_steps() -> [[i32; 2]; DIRECTION_COUNT] {
    let right = STEP_RIGHT;
    let down = rotate_quarter(right);
    let left = rotate_quarter(down);
    let up = rotate_quarter(left);
    [right, down, left, up]
}
