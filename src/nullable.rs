//! Element type with an explicit absent/null member
//!
//! Queue emptiness is always reported through `Option` from
//! [`peek`](crate::HeapPriorityQueue::peek) and
//! [`poll`](crate::HeapPriorityQueue::poll). When the *elements themselves*
//! may be absent, store them as [`Nullable<T>`]: `Null` takes part in the
//! total order as a value larger than every present value.
//!
//! - Under the standard order `Null` is polled last
//! - Under the reversed standard order `Null` is polled first
//!
//! This differs from `Option<T>`, whose `Ord` puts `None` *before* every
//! `Some`.
//!
//! # Example
//!
//! ```rust
//! use heap_priority_queue::{HeapPriorityQueue, Nullable};
//!
//! let mut queue = HeapPriorityQueue::new();
//! queue.add(Nullable::Null);
//! queue.add(Nullable::Value(3));
//! queue.add(Nullable::Value(1));
//!
//! assert_eq!(queue.poll(), Some(Nullable::Value(1)));
//! assert_eq!(queue.poll(), Some(Nullable::Value(3)));
//! assert_eq!(queue.poll(), Some(Nullable::Null));
//! assert_eq!(queue.poll(), None);
//! ```

/// A value or the null sentinel, with null ordered after every value
///
/// The derived ordering follows variant order, so every `Value` sorts before
/// `Null` and two `Value`s compare by their contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nullable<T> {
    /// A present value
    Value(T),
    /// The absent value
    Null,
}

impl<T> Nullable<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Nullable::Value(v) => Nullable::Value(v),
            Nullable::Null => Nullable::Null,
        }
    }

    /// Converts into `Option`, mapping `Null` to `None`
    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(v) => Some(v),
            Nullable::Null => None,
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Null
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::Value(v),
            None => Nullable::Null,
        }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}
