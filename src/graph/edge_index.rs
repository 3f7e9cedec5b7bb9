use std::collections::hash_map::Entry;
use std::collections::{HashMap, TryReserveError};

/// Lookup from an ordered `(source, target)` pair to the edge's position in
/// the edge list
#[derive(Debug, Clone, Default)]
pub(crate) struct EdgeIndex {
    positions: HashMap<(usize, usize), usize>,
}

impl EdgeIndex {
    pub fn try_with_capacity(edges: usize) -> Result<Self, TryReserveError> {
        let mut positions = HashMap::new();
        positions.try_reserve(edges)?;
        Ok(EdgeIndex { positions })
    }

    /// Records an edge position; returns false if the ordered pair was already present
    pub fn insert(&mut self, source: usize, target: usize, position: usize) -> bool {
        match self.positions.entry((source, target)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(position);
                true
            }
        }
    }

    pub fn contains(&self, source: usize, target: usize) -> bool {
        self.positions.contains_key(&(source, target))
    }

    /// True if `a` and `b` are joined in either orientation
    pub fn links(&self, a: usize, b: usize) -> bool {
        self.contains(a, b) || self.contains(b, a)
    }

    /// Moves the key `(source, from)` to `(source, to)`, keeping the position.
    ///
    /// Returns the position, or `None` when `(source, from)` is absent or
    /// `(source, to)` is taken; the index is left untouched in both cases.
    pub fn retarget(&mut self, source: usize, from: usize, to: usize) -> Option<usize> {
        if self.contains(source, to) {
            return None;
        }
        let position = self.positions.remove(&(source, from))?;
        self.positions.insert((source, to), position);
        Some(position)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_same_ordered_pair() {
        let mut index = EdgeIndex::default();
        assert!(index.insert(0, 1, 0));
        assert!(!index.insert(0, 1, 5));
        assert!(index.contains(0, 1));
        // The reverse orientation is a distinct key
        assert!(index.insert(1, 0, 1));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_links_checks_both_orientations() {
        let mut index = EdgeIndex::default();
        index.insert(3, 1, 0);
        assert!(index.links(3, 1));
        assert!(index.links(1, 3));
        assert!(!index.contains(1, 3));
        assert!(!index.links(1, 2));
    }

    #[test]
    fn test_retarget_moves_key() {
        let mut index = EdgeIndex::try_with_capacity(2).unwrap();
        index.insert(0, 1, 0);
        index.insert(0, 2, 1);

        assert_eq!(index.retarget(0, 1, 4), Some(0));
        assert!(!index.contains(0, 1));
        assert!(index.contains(0, 4));

        // Occupied destination and missing source both leave the index alone
        assert_eq!(index.retarget(0, 4, 2), None);
        assert_eq!(index.retarget(0, 9, 7), None);
        assert_eq!(index.len(), 2);
    }
}
