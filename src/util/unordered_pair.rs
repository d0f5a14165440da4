
/// Unordered pair representation strucutre.
/// (a, b) and (b, a) construct equal pairs, so the pair can key a map of undirected edges.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct UnorderedPair<T> {
    first: T,
    second: T,
} // struct UnorderedPair

impl<T: PartialOrd> UnorderedPair<T> {
    /// Pair construction function
    /// * `first`, `second` - pair elements in any order
    /// * Returns pair with elements sorted
    pub fn new(first: T, second: T) -> Self {
        if first <= second {
            Self { first, second }
        } else {
            Self { first: second, second: first }
        }
    } // fn new
} // impl UnorderedPair

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn order_independent() {
        assert_eq!(UnorderedPair::new([1u32, 2, 3], [0, 5, 5]), UnorderedPair::new([0u32, 5, 5], [1, 2, 3]));
        assert_eq!(UnorderedPair::new(4, 2), UnorderedPair::new(2, 4));
        assert_ne!(UnorderedPair::new(4, 2), UnorderedPair::new(4, 4));
    }

    #[test]
    fn keys_hash_map() {
        let mut map = HashMap::new();
        *map.entry(UnorderedPair::new(1, 2)).or_insert(0) += 1;
        *map.entry(UnorderedPair::new(2, 1)).or_insert(0) += 1;

        assert_eq!(map.len(), 1);
        assert_eq!(map[&UnorderedPair::new(1, 2)], 2);
    }
}

// file unordered_pair.rs
