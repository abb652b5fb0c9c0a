//! Error type for heap invariant checks
//!
//! None of the queue operations fail: empty reads return `None` and lookups
//! return `bool`. [`HeapError`] is only produced by
//! [`HeapPriorityQueue::check_invariants`](crate::HeapPriorityQueue::check_invariants),
//! which tests use to confirm the structure is sound.

use thiserror::Error;

/// Invariant breach found while checking a heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// A live element sorts strictly before its parent under the active comparator
    #[error("element at index {index} sorts before its parent at index {parent}")]
    HeapOrderViolated {
        /// Index of the offending child
        index: usize,
        /// Index of its parent
        parent: usize,
    },
}
