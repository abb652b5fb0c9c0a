//! Dense slot storage for the binary heap
//!
//! The heap is a complete binary tree laid out in a single vector. The live
//! prefix of the vector holds the elements; the allocation behind it may be
//! larger and is grown ahead of need with a doubling policy, so `add` stays
//! O(1) amortized.
//!
//! # Index arithmetic
//!
//! | Relation | Index |
//! |----------|-------|
//! | left child of `i` | `2i + 1` |
//! | right child of `i` | `2i + 2` |
//! | parent of `i` | `(i - 1) / 2`, root is its own parent |

use log::trace;

/// Smallest allocation made on first growth
const MIN_CAPACITY: usize = 4;

/// Index of the left child of `i`
#[inline]
pub(crate) const fn left(i: usize) -> usize {
    2 * i + 1
}

/// Index of the right child of `i`
#[inline]
pub(crate) const fn right(i: usize) -> usize {
    2 * i + 2
}

/// Index of the parent of `i`; the root is its own parent
#[inline]
pub(crate) const fn parent(i: usize) -> usize {
    i.saturating_sub(1) / 2
}

/// Backing store for heap slots
///
/// `len()` is the number of live elements and the only authority on whether
/// an index is live. `capacity()` is the allocated slot count and never drops
/// below `len()`.
#[derive(Clone)]
pub(crate) struct HeapStorage<T> {
    slots: Vec<T>,
}

impl<T> HeapStorage<T> {
    pub(crate) fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn from_vec(slots: Vec<T>) -> Self {
        Self { slots }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Grows the allocation so at least `needed` slots fit
    ///
    /// The new allocation is at least twice the old one, which bounds
    /// reallocation to once per doubling.
    pub(crate) fn ensure_capacity(&mut self, needed: usize) {
        let capacity = self.slots.capacity();
        if needed <= capacity {
            return;
        }
        let target = needed.max(capacity * 2).max(MIN_CAPACITY);
        trace!("growing heap storage from {} to {} slots", capacity, target);
        self.slots.reserve_exact(target - self.slots.len());
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.ensure_capacity(self.slots.len() + additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.slots.shrink_to_fit();
    }

    /// Appends `value` as the new last live slot and returns its index
    pub(crate) fn push_last(&mut self, value: T) -> usize {
        self.ensure_capacity(self.slots.len() + 1);
        self.slots.push(value);
        self.slots.len() - 1
    }

    /// Moves the last live slot into `index` and returns what was there
    ///
    /// Panics if `index` is not live.
    pub(crate) fn swap_remove(&mut self, index: usize) -> T {
        self.slots.swap_remove(index)
    }

    /// Drops every live element, keeping the allocation
    pub(crate) fn truncate_all(&mut self) {
        self.slots.clear();
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.slots
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.slots
    }
}
