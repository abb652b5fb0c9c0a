//! Heap invariant engine
//!
//! Free functions over a slice that hold the heap-order invariant: for every
//! index `i > 0`, `compare(data[i], data[parent(i)])` is not `Less`. The
//! queue calls these after each mutation; they are kept separate so they can
//! be tested on plain slices.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `sift_up` | O(log n) |
//! | `sift_down` | O(log n) |
//! | `rebuild` | O(n log n) |
//! | `check_heap_order` | O(n) |

use crate::comparator::Comparator;
use crate::error::HeapError;
use crate::storage::{left, parent, right};

/// Moves the element at `index` toward the root until its parent does not
/// sort after it
///
/// Returns the index the element came to rest at.
pub(crate) fn sift_up<T>(data: &mut [T], cmp: &Comparator<T>, mut index: usize) -> usize {
    debug_assert!(index < data.len(), "sift_up index {} out of bounds", index);
    while index > 0 {
        let p = parent(index);
        if !cmp.before(&data[index], &data[p]) {
            break;
        }
        data.swap(index, p);
        index = p;
    }
    index
}

/// Moves the element at `index` toward the leaves until neither child sorts
/// before it
///
/// Of two children the better one is chosen, and the left one on a tie.
/// Returns the index the element came to rest at.
pub(crate) fn sift_down<T>(data: &mut [T], cmp: &Comparator<T>, mut index: usize) -> usize {
    let len = data.len();
    loop {
        let l = left(index);
        if l >= len {
            break;
        }
        let r = right(index);
        let child = if r < len && cmp.before(&data[r], &data[l]) {
            r
        } else {
            l
        };

        if !cmp.before(&data[child], &data[index]) {
            break;
        }
        data.swap(index, child);
        index = child;
    }
    index
}

/// Restores heap order over the whole slice
///
/// Walks from the last index to the root, sifting each position up and then
/// down. Slower than bottom-up heapify but reaches the same fixed point.
pub(crate) fn rebuild<T>(data: &mut [T], cmp: &Comparator<T>) {
    for i in (0..data.len()).rev() {
        sift_up(data, cmp, i);
        sift_down(data, cmp, i);
    }
}

/// Returns the first index that sorts strictly before its parent
pub(crate) fn check_heap_order<T>(data: &[T], cmp: &Comparator<T>) -> Result<(), HeapError> {
    for index in 1..data.len() {
        let p = parent(index);
        if cmp.before(&data[index], &data[p]) {
            return Err(HeapError::HeapOrderViolated { index, parent: p });
        }
    }
    Ok(())
}
