//! Locating a value inside the heap
//!
//! Two strategies answer "where, if anywhere, is an element equal to `value`"
//! for [`contains`](crate::HeapPriorityQueue::contains) and
//! [`remove`](crate::HeapPriorityQueue::remove). Equality means the active
//! comparator returns `Equal`.
//!
//! - [`SearchStrategy::Linear`] scans the live slots in array order. Always
//!   O(n), no assumptions about the layout.
//! - [`SearchStrategy::Pruning`] walks the tree and skips every subtree whose
//!   root already sorts after `value`: heap order guarantees nothing below
//!   it can be equal. Still O(n) in the worst case, but cheap when `value` is
//!   absent and ranks early.
//!
//! Both report the same found/not-found answer on any valid heap. With
//! duplicates they may point at different, equal, slots.

use std::cmp::Ordering;

use crate::comparator::Comparator;
use crate::storage::{left, right};

/// How the queue looks up arbitrary values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchStrategy {
    /// Scan every live slot in array order
    #[default]
    Linear,
    /// Descend the tree, pruning subtrees that cannot hold the value
    Pruning,
}

impl SearchStrategy {
    /// Runs this strategy over the whole heap
    pub(crate) fn find<T>(self, data: &[T], cmp: &Comparator<T>, value: &T) -> Option<usize> {
        match self {
            SearchStrategy::Linear => linear_search(data, cmp, value, 0),
            SearchStrategy::Pruning => pruning_search(data, cmp, value, 0),
        }
    }
}

/// First index in `start..data.len()` holding an element equal to `value`
pub(crate) fn linear_search<T>(
    data: &[T],
    cmp: &Comparator<T>,
    value: &T,
    start: usize,
) -> Option<usize> {
    (start..data.len()).find(|&i| cmp.compare(value, &data[i]) == Ordering::Equal)
}

/// Index of an element equal to `value` in the subtree rooted at `start`
///
/// `data` must be heap-ordered under `cmp`. When both children exist and the
/// left one ranks strictly before the right, the right subtree is searched
/// first; otherwise the left one is. The first subtree is searched by
/// recursion and the second by continuing the loop, so the recursion depth
/// stays within the tree height.
pub(crate) fn pruning_search<T>(
    data: &[T],
    cmp: &Comparator<T>,
    value: &T,
    mut start: usize,
) -> Option<usize> {
    let len = data.len();
    if start >= len {
        return None;
    }
    loop {
        match cmp.compare(value, &data[start]) {
            Ordering::Less => return None,
            Ordering::Equal => return Some(start),
            Ordering::Greater => {}
        }

        let l = left(start);
        if l >= len {
            return None;
        }
        let r = right(start);
        if r >= len {
            start = l;
            continue;
        }

        let (first, second) = if cmp.before(&data[l], &data[r]) {
            (r, l)
        } else {
            (l, r)
        };
        if let Some(found) = pruning_search(data, cmp, value, first) {
            return Some(found);
        }
        start = second;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sift::rebuild;
    use proptest::prelude::*;

    fn heapify(mut data: Vec<i32>, cmp: &Comparator<i32>) -> Vec<i32> {
        rebuild(&mut data, cmp);
        data
    }

    #[test]
    fn test_linear_search_from_offset() {
        let cmp = Comparator::standard();
        let data = vec![1, 4, 2, 4, 3];
        assert_eq!(linear_search(&data, &cmp, &4, 0), Some(1));
        assert_eq!(linear_search(&data, &cmp, &4, 2), Some(3));
        assert_eq!(linear_search(&data, &cmp, &4, 4), None);
        assert_eq!(linear_search(&data, &cmp, &9, 0), None);
        assert_eq!(linear_search(&data, &cmp, &1, 10), None);
    }

    #[test]
    fn test_pruning_search_finds_every_element() {
        let cmp = Comparator::standard();
        let data = heapify((0..31).rev().collect(), &cmp);
        for v in 0..31 {
            let found = pruning_search(&data, &cmp, &v, 0);
            assert_eq!(found.map(|i| data[i]), Some(v));
        }
    }

    #[test]
    fn test_pruning_search_rejects_absent() {
        let cmp = Comparator::standard();
        let data = heapify(vec![10, 20, 30, 40, 50], &cmp);
        assert_eq!(pruning_search(&data, &cmp, &5, 0), None);
        assert_eq!(pruning_search(&data, &cmp, &25, 0), None);
        assert_eq!(pruning_search(&data, &cmp, &99, 0), None);
        assert_eq!(pruning_search(&[], &cmp, &1, 0), None);
    }

    #[test]
    fn test_pruning_search_within_subtree() {
        let cmp = Comparator::standard();
        // 1 at root, 2 roots the left subtree, 3 roots the right one
        let data = vec![1, 2, 3, 4, 5, 6, 7];
        assert_eq!(pruning_search(&data, &cmp, &6, 2), Some(5));
        assert_eq!(pruning_search(&data, &cmp, &4, 2), None);
        assert_eq!(pruning_search(&data, &cmp, &1, 1), None);
    }

    #[test]
    fn test_pruning_search_reversed_order() {
        let cmp = Comparator::reversed_standard();
        let data = heapify((0..20).collect(), &cmp);
        assert_eq!(data[0], 19);
        for v in 0..20 {
            assert!(pruning_search(&data, &cmp, &v, 0).is_some());
        }
        assert_eq!(pruning_search(&data, &cmp, &20, 0), None);
        assert_eq!(pruning_search(&data, &cmp, &-1, 0), None);
    }

    #[test]
    fn test_strategy_dispatch() {
        let cmp = Comparator::standard();
        let data = heapify(vec![3, 1, 2], &cmp);
        assert_eq!(SearchStrategy::default(), SearchStrategy::Linear);
        assert!(SearchStrategy::Linear.find(&data, &cmp, &2).is_some());
        assert!(SearchStrategy::Pruning.find(&data, &cmp, &2).is_some());
        assert!(SearchStrategy::Linear.find(&data, &cmp, &7).is_none());
        assert!(SearchStrategy::Pruning.find(&data, &cmp, &7).is_none());
    }

    proptest! {
        #[test]
        fn test_strategies_agree(
            values in prop::collection::vec(-50i32..50, 0..80),
            needle in -60i32..60,
            reversed in any::<bool>(),
        ) {
            let cmp = Comparator::from_reversed(reversed);
            let data = heapify(values, &cmp);

            let linear = linear_search(&data, &cmp, &needle, 0);
            let pruning = pruning_search(&data, &cmp, &needle, 0);

            prop_assert_eq!(linear.is_some(), pruning.is_some());
            if let (Some(a), Some(b)) = (linear, pruning) {
                prop_assert_eq!(data[a], needle);
                prop_assert_eq!(data[b], needle);
            }
        }
    }
}
