use tracing::trace;

/// Ordered storage whose indices stay stable across removals.
///
/// Removing an item leaves a vacant slot behind instead of shifting the
/// items after it, so an index handed out by [`Slots::push`] keeps pointing
/// at the same item until that item is removed or replaced. New items always
/// go after the highest slot ever used; only [`Slots::clear`] restarts the
/// numbering at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Slots<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> Slots<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` and returns the index it was stored at.
    pub fn push(&mut self, item: T) -> usize {
        self.slots.push(Some(item));
        self.slots.len() - 1
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Vacates `index`, returning whatever occupied it.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let removed = self.slots.get_mut(index).and_then(Option::take);
        if removed.is_none() {
            trace!(index, "no item to remove");
        }
        removed
    }

    pub fn remove_first(&mut self) -> Option<T> {
        self.first_index().and_then(|index| self.remove(index))
    }

    pub fn remove_last(&mut self) -> Option<T> {
        self.last_index().and_then(|index| self.remove(index))
    }

    /// Puts `item` in place of the current occupant of `index`.
    ///
    /// Vacant or out of range indices are left alone and `item` is handed
    /// back.
    pub fn replace(&mut self, index: usize, item: T) -> Result<T, T> {
        match self.get_mut(index) {
            Some(occupant) => Ok(std::mem::replace(occupant, item)),
            None => {
                trace!(index, "no item to replace");
                Err(item)
            }
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn first_index(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_some)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.slots.iter().rposition(Option::is_some)
    }

    /// Occupied items in index order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    pub fn indexed(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|item| (index, item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Slots<&'static str> {
        let mut slots = Slots::new();
        slots.push("a");
        slots.push("b");
        slots.push("c");
        slots
    }

    #[test]
    fn test_push_returns_sequential_indices() {
        let mut slots = Slots::new();
        assert_eq!(slots.push('x'), 0);
        assert_eq!(slots.push('y'), 1);
        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn test_remove_leaves_gap() {
        let mut slots = abc();
        assert_eq!(slots.remove(1), Some("b"));
        assert_eq!(slots.len(), 2);
        assert_eq!(slots.get(0), Some(&"a"));
        assert_eq!(slots.get(1), None);
        assert_eq!(slots.get(2), Some(&"c"));
        assert_eq!(slots.remove(1), None);
    }

    #[test]
    fn test_push_after_removing_last_does_not_reuse_index() {
        let mut slots = abc();
        assert_eq!(slots.remove_last(), Some("c"));
        assert_eq!(slots.push("d"), 3);
        assert_eq!(slots.get(2), None);
        assert_eq!(slots.iter().copied().collect::<Vec<_>>(), ["a", "b", "d"]);
    }

    #[test]
    fn test_remove_first_and_last_skip_gaps() {
        let mut slots = abc();
        slots.remove(0);
        slots.remove(2);
        assert_eq!(slots.first_index(), Some(1));
        assert_eq!(slots.last_index(), Some(1));
        assert_eq!(slots.remove_first(), Some("b"));
        assert!(slots.is_empty());
        assert_eq!(slots.remove_first(), None);
        assert_eq!(slots.remove_last(), None);
    }

    #[test]
    fn test_replace_only_occupied() {
        let mut slots = abc();
        assert_eq!(slots.replace(1, "B"), Ok("b"));
        slots.remove(2);
        assert_eq!(slots.replace(2, "C"), Err("C"));
        assert_eq!(slots.replace(7, "Z"), Err("Z"));
        assert_eq!(slots.iter().copied().collect::<Vec<_>>(), ["a", "B"]);
    }

    #[test]
    fn test_clear_restarts_numbering() {
        let mut slots = abc();
        slots.clear();
        assert!(slots.is_empty());
        assert_eq!(slots.push("z"), 0);
    }

    #[test]
    fn test_indexed_reports_original_positions() {
        let mut slots = abc();
        slots.remove(0);
        let indexed: Vec<_> = slots.indexed().collect();
        assert_eq!(indexed, [(1, &"b"), (2, &"c")]);
    }
}
