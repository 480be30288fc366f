use std::collections::HashMap;
use std::hash::Hash;

/// Array-backed binary min-heap keyed by an external weight mapping.
///
/// The heap never computes weights itself: the owner mutates the mapping
/// through [`MinHeap::change_weight`] and then restores the ordering with
/// [`MinHeap::update_elem`], which is how Dijkstra's relaxation realises
/// decrease-key. A slot map from item to index lets `update_elem` callers
/// locate an element in O(1) instead of scanning.
///
/// Items without an entry in the weight mapping sort as `+inf`.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elems: Vec<T>,
    weights: HashMap<T, f64>,
    slots: HashMap<T, usize>,
}

impl<T> Default for MinHeap<T>
where
    T: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T>
where
    T: Clone + Eq + Hash,
{
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            elems: Vec::new(),
            weights: HashMap::new(),
            slots: HashMap::new(),
        }
    }

    /// Build a heap from a sequence of items and their weight mapping.
    ///
    /// Runs the O(n) build-heap pass: sift every non-leaf downward starting
    /// from the last parent.
    pub fn from_elems(elems: Vec<T>, weights: HashMap<T, f64>) -> Self {
        let mut heap = Self {
            elems,
            weights,
            slots: HashMap::new(),
        };
        for (index, item) in heap.elems.iter().enumerate() {
            heap.slots.insert(item.clone(), index);
        }
        if heap.elems.len() > 1 {
            let last_parent = Self::parent(heap.elems.len() - 1);
            for index in (0..=last_parent).rev() {
                heap.sift_down(index);
            }
        }
        heap
    }

    /// Append an item and sift it upward into position.
    pub fn push(&mut self, item: T) {
        self.slots.insert(item.clone(), self.elems.len());
        self.elems.push(item);
        self.sift_up(self.elems.len() - 1);
    }

    /// Remove and return the minimum-weight item.
    pub fn pop(&mut self) -> Option<T> {
        if self.elems.is_empty() {
            return None;
        }

        let last = self.elems.len() - 1;
        self.elems.swap(0, last);
        let item = self.elems.pop()?;
        self.slots.remove(&item);
        if let Some(root) = self.elems.first() {
            self.slots.insert(root.clone(), 0);
            self.sift_down(0);
        }
        Some(item)
    }

    /// Minimum-weight item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elems.first()
    }

    /// Overwrite the slot at `index` and sift in both directions.
    ///
    /// Call after mutating the weight mapping; sifting both ways restores
    /// the invariant whether the weight decreased or increased.
    pub fn update_elem(&mut self, index: usize, item: T) {
        if index >= self.elems.len() {
            return;
        }

        let previous = self.elems[index].clone();
        if previous != item {
            self.slots.remove(&previous);
        }
        self.slots.insert(item.clone(), index);
        self.elems[index] = item;

        let settled = self.sift_up(index);
        self.sift_down(settled);
    }

    /// Update the external weight mapping only.
    ///
    /// The caller is responsible for re-heapifying afterwards via
    /// [`MinHeap::update_elem`] or [`MinHeap::push`].
    pub fn change_weight(&mut self, item: T, weight: f64) {
        self.weights.insert(item, weight);
    }

    /// Current slot of an item, if it is still in the heap.
    pub fn position_of(&self, item: &T) -> Option<usize> {
        self.slots.get(item).copied()
    }

    /// True when no elements remain.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Number of elements in the heap.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    fn parent(index: usize) -> usize {
        (index - 1) / 2
    }

    fn left_child(index: usize) -> usize {
        2 * index + 1
    }

    fn right_child(index: usize) -> usize {
        2 * index + 2
    }

    fn weight_at(&self, index: usize) -> f64 {
        self.weights
            .get(&self.elems[index])
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Child with the smaller weight; the right child wins an exact tie.
    fn min_child(&self, index: usize) -> Option<usize> {
        let left = Self::left_child(index);
        if left >= self.elems.len() {
            return None;
        }
        let right = Self::right_child(index);
        if right < self.elems.len() && !(self.weight_at(left) < self.weight_at(right)) {
            Some(right)
        } else {
            Some(left)
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.elems.swap(a, b);
        self.slots.insert(self.elems[a].clone(), a);
        self.slots.insert(self.elems[b].clone(), b);
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = Self::parent(index);
            if self.weight_at(index) < self.weight_at(parent) {
                self.swap_slots(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.min_child(index) {
            if self.weight_at(child) < self.weight_at(index) {
                self.swap_slots(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights_of(pairs: &[(&'static str, f64)]) -> HashMap<&'static str, f64> {
        pairs.iter().copied().collect()
    }

    fn assert_heap_invariant(heap: &MinHeap<&'static str>) {
        for index in 1..heap.elems.len() {
            let parent = MinHeap::<&'static str>::parent(index);
            assert!(
                heap.weight_at(index) >= heap.weight_at(parent),
                "slot {index} violates the heap order"
            );
        }
    }

    #[test]
    fn build_heap_orders_by_external_weight() {
        let weights = weights_of(&[("a", 5.0), ("b", 1.0), ("c", 3.0), ("d", 2.0)]);
        let heap = MinHeap::from_elems(vec!["a", "b", "c", "d"], weights);

        assert_heap_invariant(&heap);
        assert_eq!(heap.peek(), Some(&"b"));
    }

    #[test]
    fn pop_drains_in_weight_order() {
        let weights = weights_of(&[("a", 4.0), ("b", 2.0), ("c", 9.0), ("d", 1.0), ("e", 7.0)]);
        let mut heap = MinHeap::from_elems(vec!["a", "b", "c", "d", "e"], weights);

        let mut drained = Vec::new();
        while let Some(item) = heap.pop() {
            drained.push(item);
        }
        assert_eq!(drained, vec!["d", "b", "a", "e", "c"]);
        assert!(heap.is_empty());
    }

    #[test]
    fn push_maintains_the_invariant() {
        let mut heap = MinHeap::new();
        for (item, weight) in [("a", 6.0), ("b", 2.0), ("c", 8.0), ("d", 1.0)] {
            heap.change_weight(item, weight);
            heap.push(item);
            assert_heap_invariant(&heap);
        }
        assert_eq!(heap.peek(), Some(&"d"));
        assert_eq!(heap.len(), 4);
    }

    #[test]
    fn decrease_key_moves_an_element_to_the_root() {
        let weights = weights_of(&[("a", 1.0), ("b", 5.0), ("c", 6.0), ("d", 7.0)]);
        let mut heap = MinHeap::from_elems(vec!["a", "b", "c", "d"], weights);

        heap.change_weight("d", 0.5);
        let slot = heap.position_of(&"d").expect("d still queued");
        heap.update_elem(slot, "d");

        assert_heap_invariant(&heap);
        assert_eq!(heap.pop(), Some("d"));
        assert_eq!(heap.pop(), Some("a"));
    }

    #[test]
    fn increase_key_sinks_the_root() {
        let weights = weights_of(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
        let mut heap = MinHeap::from_elems(vec!["a", "b", "c"], weights);

        heap.change_weight("a", 10.0);
        let slot = heap.position_of(&"a").expect("a still queued");
        heap.update_elem(slot, "a");

        assert_heap_invariant(&heap);
        assert_eq!(heap.pop(), Some("b"));
        assert_eq!(heap.pop(), Some("c"));
        assert_eq!(heap.pop(), Some("a"));
    }

    #[test]
    fn popped_items_leave_the_slot_map() {
        let weights = weights_of(&[("a", 1.0), ("b", 2.0)]);
        let mut heap = MinHeap::from_elems(vec!["a", "b"], weights);

        assert_eq!(heap.pop(), Some("a"));
        assert_eq!(heap.position_of(&"a"), None);
        assert_eq!(heap.position_of(&"b"), Some(0));
    }

    #[test]
    fn missing_weights_sort_last() {
        let weights = weights_of(&[("a", 3.0)]);
        let mut heap = MinHeap::from_elems(vec!["unweighted", "a"], weights);

        assert_eq!(heap.pop(), Some("a"));
        assert_eq!(heap.pop(), Some("unweighted"));
    }

    #[test]
    fn exact_tie_prefers_the_right_child() {
        // popping the root swaps "x" up and sifts it down past the tied
        // children; the right child must be the one promoted.
        let weights = weights_of(&[("a", 0.0), ("left", 1.0), ("right", 1.0), ("x", 5.0)]);
        let mut heap = MinHeap::from_elems(vec!["a", "left", "right", "x"], weights);

        assert_eq!(heap.pop(), Some("a"));
        assert_eq!(heap.peek(), Some(&"right"));
        assert_heap_invariant(&heap);
    }
}
