//! Binary Heap Priority Queue with a Swappable Comparator
//!
//! This crate provides [`HeapPriorityQueue`], an array-backed binary heap whose
//! ordering is an injected [`Comparator`] that can be replaced at run time.
//!
//! # Features
//!
//! - **Run-time ordering**: switch between ascending, descending, or any custom
//!   total order; the heap is rebuilt in O(n log n) on each switch
//! - **Arbitrary removal**: `contains` and `remove` locate values by a linear
//!   scan or by a heap-aware search that prunes subtrees ([`SearchStrategy`])
//! - **Explicit null ordering**: [`Nullable<T>`] gives elements an absent value
//!   that sorts after every present one, separate from "queue is empty"
//! - **Amortized O(1) insertion**: storage grows by doubling
//!
//! # Example
//!
//! ```rust
//! use heap_priority_queue::HeapPriorityQueue;
//!
//! let mut queue = HeapPriorityQueue::new();
//! queue.extend([5, 1, 4, 2, 8]);
//! assert!(queue.remove(&4));
//!
//! let drained: Vec<_> = queue.drain_sorted().collect();
//! assert_eq!(drained, vec![1, 2, 5, 8]);
//!
//! queue.set_reversed_standard();
//! queue.extend([3, 9, 0]);
//! assert_eq!(queue.poll(), Some(9));
//! ```

pub mod comparator;
pub mod config;
pub mod error;
pub mod nullable;
pub mod queue;
pub mod search;

mod sift;
mod storage;

pub use comparator::{CompareFn, Comparator, ComparatorKind};
pub use config::{QueueBuilder, QueueConfig};
pub use error::HeapError;
pub use nullable::Nullable;
pub use queue::{DrainSorted, HeapPriorityQueue, IntoIter, Iter};
pub use search::SearchStrategy;
