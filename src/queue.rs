//! Binary heap priority queue with a swappable comparator
//!
//! [`HeapPriorityQueue`] keeps its elements in a complete binary tree stored
//! in one vector. The element that ranks first under the active
//! [`Comparator`] sits at the root and is what [`peek`](HeapPriorityQueue::peek)
//! and [`poll`](HeapPriorityQueue::poll) return.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `add`     | O(1) amortized, O(log n) worst |
//! | `peek`    | O(1)       |
//! | `poll`    | O(log n)   |
//! | `contains`| O(n)       |
//! | `remove`  | O(n)       |
//! | `clear`   | O(1) amortized |
//! | `set_comparator` | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use heap_priority_queue::HeapPriorityQueue;
//!
//! let mut queue = HeapPriorityQueue::new();
//! for v in [5, 1, 4, 2, 8] {
//!     queue.add(v);
//! }
//! assert_eq!(queue.peek(), Some(&1));
//!
//! queue.set_reversed_standard();
//! assert_eq!(queue.poll(), Some(8));
//! assert_eq!(queue.poll(), Some(5));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::slice;
use std::vec;

use log::{debug, trace};

use crate::comparator::Comparator;
use crate::config::{QueueBuilder, QueueConfig};
use crate::error::HeapError;
use crate::search::SearchStrategy;
use crate::sift::{check_heap_order, rebuild, sift_down, sift_up};
use crate::storage::HeapStorage;

/// An array-backed binary heap ordered by a run-time [`Comparator`]
///
/// Polling yields elements in non-decreasing order under the active
/// comparator. Equal elements leave in no particular relative order.
///
/// The queue is single-threaded: it does no locking of its own. It is `Send`
/// and `Sync` whenever `T` is, so an instance can be moved to another thread
/// or shared behind a lock.
#[derive(Clone)]
pub struct HeapPriorityQueue<T> {
    storage: HeapStorage<T>,
    comparator: Comparator<T>,
    search: SearchStrategy,
}

impl<T: Ord> HeapPriorityQueue<T> {
    /// Creates an empty queue in standard (ascending) order
    pub fn new() -> Self {
        Self::with_comparator(Comparator::standard())
    }

    /// Creates an empty queue in reversed standard (descending) order
    pub fn new_reversed() -> Self {
        Self::with_comparator(Comparator::reversed_standard())
    }

    /// Creates an empty queue in descending order if `reversed`, else ascending
    pub fn with_order(reversed: bool) -> Self {
        Self::with_comparator(Comparator::from_reversed(reversed))
    }

    /// Creates an empty standard-order queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(
            Comparator::standard(),
            QueueConfig {
                initial_capacity: capacity,
                ..QueueConfig::default()
            },
        )
    }

    /// Takes ownership of `data` and arranges it as a standard-order heap
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut storage = HeapStorage::from_vec(data);
        let comparator = Comparator::standard();
        rebuild(storage.as_mut_slice(), &comparator);
        Self {
            storage,
            comparator,
            search: SearchStrategy::default(),
        }
    }

    /// Starts a builder in standard order
    pub fn builder() -> QueueBuilder<T> {
        QueueBuilder::new(Comparator::standard())
    }

    /// Switches to ascending order, rebuilding if the order changes
    pub fn set_standard(&mut self) {
        self.set_comparator(Comparator::standard());
    }

    /// Switches to descending order, rebuilding if the order changes
    pub fn set_reversed_standard(&mut self) {
        self.set_comparator(Comparator::reversed_standard());
    }
}

impl<T> HeapPriorityQueue<T> {
    /// Creates an empty queue ordered by `comparator`
    pub fn with_comparator(comparator: Comparator<T>) -> Self {
        Self::from_parts(comparator, QueueConfig::default())
    }

    /// Creates an empty queue ordered by the closure `f`
    ///
    /// `f(a, b) == Ordering::Less` means `a` is polled before `b`.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> std::cmp::Ordering + Send + Sync + 'static,
    {
        Self::with_comparator(Comparator::custom(f))
    }

    /// Starts a builder with an arbitrary comparator
    pub fn builder_with(comparator: Comparator<T>) -> QueueBuilder<T> {
        QueueBuilder::new(comparator)
    }

    pub(crate) fn from_parts(comparator: Comparator<T>, config: QueueConfig) -> Self {
        Self {
            storage: HeapStorage::with_capacity(config.initial_capacity),
            comparator,
            search: config.search,
        }
    }

    // ------------------------------------------------------------------
    // Size and capacity
    // ------------------------------------------------------------------

    /// Number of elements in the queue
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    pub fn not_empty(&self) -> bool {
        !self.storage.is_empty()
    }

    /// Number of elements the queue can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Makes room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit();
    }

    // ------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------

    /// The active ordering
    pub fn comparator(&self) -> &Comparator<T> {
        &self.comparator
    }

    /// Replaces the ordering and rebuilds the heap under it
    ///
    /// Installing the comparator that is already active is a no-op. A
    /// different but equivalent comparator still triggers a rebuild.
    ///
    /// # Time Complexity
    /// O(n log n)
    pub fn set_comparator(&mut self, comparator: Comparator<T>) {
        if self.comparator.is_same(&comparator) {
            return;
        }
        debug!(
            "switching comparator {:?} -> {:?} over {} elements",
            self.comparator.kind(),
            comparator.kind(),
            self.len()
        );
        self.comparator = comparator;
        self.rebuild();
    }

    /// Restores heap order over every element
    fn rebuild(&mut self) {
        trace!("rebuilding heap of {} elements", self.len());
        rebuild(self.storage.as_mut_slice(), &self.comparator);
    }

    pub fn search_strategy(&self) -> SearchStrategy {
        self.search
    }

    /// Selects the lookup used by [`contains`](Self::contains) and
    /// [`remove`](Self::remove); results are the same either way
    pub fn set_search_strategy(&mut self, search: SearchStrategy) {
        if self.search != search {
            debug!("search strategy {:?} -> {:?}", self.search, search);
            self.search = search;
        }
    }

    // ------------------------------------------------------------------
    // Queue operations
    // ------------------------------------------------------------------

    /// Inserts `value`
    ///
    /// # Time Complexity
    /// O(1) amortized, O(log n) worst case
    pub fn add(&mut self, value: T) {
        let index = self.storage.push_last(value);
        sift_up(self.storage.as_mut_slice(), &self.comparator, index);
    }

    /// The highest-priority element, or `None` if the queue is empty
    pub fn peek(&self) -> Option<&T> {
        self.storage.as_slice().first()
    }

    /// Removes and returns the highest-priority element, or `None` if the
    /// queue is empty
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn poll(&mut self) -> Option<T> {
        if self.storage.is_empty() {
            return None;
        }
        let root = self.storage.swap_remove(0);
        sift_down(self.storage.as_mut_slice(), &self.comparator, 0);
        Some(root)
    }

    /// Removes every element, keeping the allocation
    pub fn clear(&mut self) {
        trace!("clearing {} elements", self.len());
        self.storage.truncate_all();
    }

    /// True if an element equal to `value` under the active comparator is
    /// in the queue
    ///
    /// # Time Complexity
    /// O(n)
    pub fn contains(&self, value: &T) -> bool {
        self.contains_with(value, self.search)
    }

    /// [`contains`](Self::contains) with an explicit search strategy
    pub fn contains_with(&self, value: &T, search: SearchStrategy) -> bool {
        self.find(value, search).is_some()
    }

    /// Removes one element equal to `value`
    ///
    /// Returns `false`, leaving the queue untouched, if there is none.
    ///
    /// # Time Complexity
    /// O(n)
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes one element equal to `value` and returns it
    pub fn take(&mut self, value: &T) -> Option<T> {
        let index = self.find(value, self.search)?;
        Some(self.remove_at(index))
    }

    fn find(&self, value: &T, search: SearchStrategy) -> Option<usize> {
        search.find(self.storage.as_slice(), &self.comparator, value)
    }

    /// Removes the element at a live `index`
    ///
    /// The last element fills the hole and is sifted whichever way it needs
    /// to go; at most one of the two sifts moves it.
    fn remove_at(&mut self, index: usize) -> T {
        debug_assert!(index < self.len(), "remove_at index {} not live", index);
        let removed = self.storage.swap_remove(index);
        if index < self.storage.len() {
            let data = self.storage.as_mut_slice();
            sift_up(data, &self.comparator, index);
            sift_down(data, &self.comparator, index);
        }
        removed
    }

    // ------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------

    /// Iterates over the elements in internal array order
    ///
    /// The order is **not** priority order; only the first element is
    /// guaranteed to be the one [`peek`](Self::peek) returns. The iterator
    /// borrows the queue, so the queue cannot change while it is alive, and
    /// calling `iter` again starts a fresh pass.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.storage.as_slice().iter(),
        }
    }

    /// Polls every element in priority order
    ///
    /// Elements not consumed before the iterator is dropped are discarded.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { queue: self }
    }

    /// Consumes the queue, returning its elements in priority order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.poll() {
            sorted.push(value);
        }
        sorted
    }

    /// Consumes the queue, returning its elements in internal array order
    pub fn into_vec(self) -> Vec<T> {
        self.storage.into_vec()
    }

    /// Verifies that no element sorts strictly before its parent
    ///
    /// Always holds for a total, stable comparator. A comparator whose
    /// answers change after insertion can leave the heap out of order, and
    /// this reports the first offending slot.
    pub fn check_invariants(&self) -> Result<(), HeapError> {
        check_heap_order(self.storage.as_slice(), &self.comparator)
    }
}

impl<T: Ord> Default for HeapPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for HeapPriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapPriorityQueue")
            .field("comparator", &self.comparator.kind())
            .field("search", &self.search)
            .field("data", &self.storage.as_slice())
            .finish()
    }
}

impl<T> Extend<T> for HeapPriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for HeapPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Ord> From<Vec<T>> for HeapPriorityQueue<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<'a, T> IntoIterator for &'a HeapPriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for HeapPriorityQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the queue in internal array order
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.storage.into_vec().into_iter(),
        }
    }
}

/// Borrowing iterator in array order, from [`HeapPriorityQueue::iter`]
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator in array order
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

/// Priority-order draining iterator, from [`HeapPriorityQueue::drain_sorted`]
pub struct DrainSorted<'a, T> {
    queue: &'a mut HeapPriorityQueue<T>,
}

impl<T> Iterator for DrainSorted<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.queue.poll()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for DrainSorted<'_, T> {}
impl<T> FusedIterator for DrainSorted<'_, T> {}

impl<T> Drop for DrainSorted<'_, T> {
    fn drop(&mut self) {
        self.queue.clear();
    }
}
