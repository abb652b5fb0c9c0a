//! Construction-time configuration
//!
//! ```rust
//! use heap_priority_queue::{HeapPriorityQueue, SearchStrategy};
//!
//! let mut queue = HeapPriorityQueue::builder()
//!     .capacity(64)
//!     .search(SearchStrategy::Pruning)
//!     .reversed()
//!     .build();
//!
//! queue.extend([2, 9, 4]);
//! assert_eq!(queue.poll(), Some(9));
//! assert!(queue.capacity() >= 64);
//! ```

use crate::comparator::Comparator;
use crate::queue::HeapPriorityQueue;
use crate::search::SearchStrategy;

/// Tunables that do not affect ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueConfig {
    /// Slots allocated up front
    pub initial_capacity: usize,
    /// Lookup used by `contains` and `remove`
    pub search: SearchStrategy,
}

/// Builder for [`HeapPriorityQueue`]
///
/// Obtained from [`HeapPriorityQueue::builder`] (standard order) or
/// [`HeapPriorityQueue::builder_with`] (any comparator).
#[derive(Debug, Clone)]
pub struct QueueBuilder<T> {
    config: QueueConfig,
    comparator: Comparator<T>,
}

impl<T> QueueBuilder<T> {
    pub(crate) fn new(comparator: Comparator<T>) -> Self {
        Self {
            config: QueueConfig::default(),
            comparator,
        }
    }

    /// Pre-allocates room for `capacity` elements
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    pub fn search(mut self, search: SearchStrategy) -> Self {
        self.config.search = search;
        self
    }

    /// Replaces every tunable at once
    pub fn config(mut self, config: QueueConfig) -> Self {
        self.config = config;
        self
    }

    pub fn comparator(mut self, comparator: Comparator<T>) -> Self {
        self.comparator = comparator;
        self
    }

    pub fn build(self) -> HeapPriorityQueue<T> {
        HeapPriorityQueue::from_parts(self.comparator, self.config)
    }
}

impl<T: Ord> QueueBuilder<T> {
    /// Switches to the reversed standard (descending) order
    pub fn reversed(self) -> Self {
        self.comparator(Comparator::reversed_standard())
    }

    /// Switches to the standard (ascending) order
    pub fn standard(self) -> Self {
        self.comparator(Comparator::standard())
    }
}
