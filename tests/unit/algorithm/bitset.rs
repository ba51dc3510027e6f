//! Tests for `TileDomain` set operations

#[cfg(test)]
mod tests {
    use wavetile::algorithm::bitset::TileDomain;

    // Verifies new TileDomain is empty with count 0
    // Verified by initializing the domain with all bits set to 1
    #[test]
    fn test_new_domain_is_empty() {
        let domain = TileDomain::new(10);
        assert_eq!(domain.count(), 0);
        assert!(domain.is_empty());
        assert_eq!(domain.tile_count(), 10);
    }

    // Tests creation of a domain with every tile present
    // Verified by initializing all bits to 0 instead of 1
    #[test]
    fn test_all_tiles_present() {
        let domain = TileDomain::all(5);
        for tile in 0..5 {
            assert!(domain.contains(tile));
        }
        assert_eq!(domain.count(), 5);
    }

    // Tests insertion and containment checking
    // Verified by removing the bit-setting logic from insert
    #[test]
    fn test_insert_and_contains() {
        let mut domain = TileDomain::new(10);
        domain.insert(0);
        domain.insert(7);
        assert!(domain.contains(0));
        assert!(domain.contains(7));
        assert!(!domain.contains(3));
        assert_eq!(domain.count(), 2);

        // Out-of-capacity identities are dropped
        domain.insert(10);
        assert_eq!(domain.count(), 2);
        assert!(!domain.contains(10));
    }

    // Tests intersection of two domains returns the common tiles
    // Verified by changing the intersection to a union
    #[test]
    fn test_intersection() {
        let mut set1 = TileDomain::new(10);
        set1.insert(1);
        set1.insert(3);
        set1.insert(5);

        let mut set2 = TileDomain::new(10);
        set2.insert(3);
        set2.insert(5);
        set2.insert(7);

        let intersection = set1.intersection(&set2);
        assert_eq!(intersection.to_vec(), vec![3, 5]);
        assert!(!intersection.is_empty());
    }

    // Tests disjoint domains intersect to the empty set
    // Verified by seeding the result with set1 instead of the intersection
    #[test]
    fn test_empty_intersection() {
        let mut set1 = TileDomain::new(10);
        set1.insert(1);
        let mut set2 = TileDomain::new(10);
        set2.insert(2);

        let intersection = set1.intersection(&set2);
        assert!(intersection.is_empty());
        assert_eq!(intersection.to_vec(), Vec::<usize>::new());
    }

    // Tests in-place union accumulates tiles from both domains
    // Verified by replacing the bitwise or with an and
    #[test]
    fn test_union_with() {
        let mut target = TileDomain::new(6);
        target.insert(0);
        let mut other = TileDomain::new(6);
        other.insert(4);

        target.union_with(&other);
        assert_eq!(target.to_vec(), vec![0, 4]);
    }

    // Tests collapse reduces any domain to exactly one tile
    // Verified by removing the fill(false) before the insert
    #[test]
    fn test_collapse_to_singleton() {
        let mut domain = TileDomain::all(8);
        domain.collapse_to(3);
        assert_eq!(domain.count(), 1);
        assert!(domain.contains(3));
        assert_eq!(domain.to_vec(), vec![3]);
    }

    // Tests iteration yields tile identities in ascending order
    // Verified by collecting from a domain with known members
    #[test]
    fn test_iter_tiles() {
        let mut domain = TileDomain::new(10);
        domain.insert(9);
        domain.insert(2);
        let tiles: Vec<usize> = domain.iter_tiles().collect();
        assert_eq!(tiles, vec![2, 9]);
    }
}
