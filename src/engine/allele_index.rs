use rand::Rng;

/// Ordered collection of items pinned to positions on a continuous axis.
///
/// Positions are recombination coordinates in `[0, 1)` by default, not
/// biological loci: slicing by a position range selects whatever happens to
/// fall inside it, which lets crossover cut through allele space instead of
/// gene identity. Positions need not be unique, and range queries are
/// inclusive on both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct AlleleIndex<T> {
    entries: Vec<(T, f64)>,
}

impl<T> Default for AlleleIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AlleleIndex<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an item at an explicit position.
    pub fn add(&mut self, item: T, position: f64) {
        self.entries.push((item, position));
    }

    /// Append an item at a position drawn uniformly from `[0, 1)`.
    pub fn add_uniform<R: Rng>(&mut self, item: T, rng: &mut R) {
        let position = rng.gen::<f64>();
        self.entries.push((item, position));
    }

    /// Drop every entry with `start <= position <= stop`. Survivors keep
    /// their positions.
    pub fn remove(&mut self, start: f64, stop: f64) {
        self.entries.retain(|(_, p)| *p < start || *p > stop);
    }

    /// Append all of `other`'s entries after this index's own.
    pub fn extend(&mut self, other: AlleleIndex<T>) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> {
        self.entries.iter().map(|(item, p)| (item, *p))
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(item, _)| item)
    }

    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, p)| *p)
    }
}

impl<T: Clone> AlleleIndex<T> {
    /// Entries with `start <= position <= stop`, in their original relative
    /// order. An empty result is valid; inverted endpoints match nothing.
    pub fn range(&self, start: f64, stop: f64) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(_, p)| *p >= start && *p <= stop)
                .cloned()
                .collect(),
        }
    }

    /// Entries with position outside `[start, stop]`, in their original
    /// relative order.
    pub fn complement(&self, start: f64, stop: f64) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(_, p)| *p < start || *p > stop)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_preserves_insertion_order() {
        let mut index = AlleleIndex::new();
        index.add("x", 0.9);
        index.add("y", 0.1);
        index.add("z", 0.5);
        let items: Vec<&str> = index.items().copied().collect();
        assert_eq!(items, vec!["x", "y", "z"]);
    }

    #[test]
    fn extend_appends_after_existing_entries() {
        let mut left = AlleleIndex::new();
        left.add(1, 0.2);
        let mut right = AlleleIndex::new();
        right.add(2, 0.8);
        right.add(3, 0.4);
        left.extend(right);
        let items: Vec<i32> = left.items().copied().collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn remove_is_inclusive_on_both_ends() {
        let mut index = AlleleIndex::new();
        index.add("a", 0.2);
        index.add("b", 0.5);
        index.add("c", 0.8);
        index.remove(0.2, 0.5);
        let items: Vec<&str> = index.items().copied().collect();
        assert_eq!(items, vec!["c"]);
    }

    #[test]
    fn duplicate_positions_are_allowed() {
        let mut index = AlleleIndex::new();
        index.add("a", 0.5);
        index.add("b", 0.5);
        assert_eq!(index.range(0.5, 0.5).len(), 2);
    }
}
