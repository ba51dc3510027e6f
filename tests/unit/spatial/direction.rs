//! Tests for direction rotation and translation arithmetic

#[cfg(test)]
mod tests {
    use wavetile::spatial::direction::{
        DIRECTION_COUNT, STEP_RIGHT, cardinal_steps, rotate_quarter, translate,
    };

    // Tests the fixed rotation cycle right -> down -> left -> up
    // Verified by transposing the components in rotate_quarter
    #[test]
    fn test_rotation_order() {
        let down = rotate_quarter(STEP_RIGHT);
        let left = rotate_quarter(down);
        let up = rotate_quarter(left);
        assert_eq!(down, [1, 0]);
        assert_eq!(left, [0, -1]);
        assert_eq!(up, [-1, 0]);
    }

    // Tests that four quarter turns return any starting vector
    // Verified by dropping the negation from rotate_quarter
    #[test]
    fn test_four_rotations_are_identity() {
        for start in [[0, 1], [3, -2], [-7, 0]] {
            let mut step = start;
            for _ in 0..DIRECTION_COUNT {
                step = rotate_quarter(step);
            }
            assert_eq!(step, start);
        }
    }

    // Tests componentwise addition of position and step
    // Verified by swapping the components in translate
    #[test]
    fn test_translate_adds_components() {
        assert_eq!(translate([2, 3], [0, 1]), [2, 4]);
        assert_eq!(translate([0, 0], [-1, 0]), [-1, 0]);
    }

    // Tests that cardinal_steps enumerates the rotation cycle in order
    // Verified by reordering the returned array
    #[test]
    fn test_cardinal_steps_match_rotation() {
        let steps = cardinal_steps();
        assert_eq!(steps.len(), DIRECTION_COUNT);
        let mut step = STEP_RIGHT;
        for expected in steps {
            assert_eq!(expected, step);
            step = rotate_quarter(step);
        }
    }
}
