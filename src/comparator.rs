//! Ordering policies for the priority queue
//!
//! A [`Comparator`] is the injected total order the heap is arranged by. The
//! queue stores one and calls it for every comparison, and it can be replaced
//! at run time through
//! [`HeapPriorityQueue::set_comparator`](crate::HeapPriorityQueue::set_comparator),
//! which rebuilds the heap under the new order.
//!
//! Two orders are built in:
//!
//! - **Standard**: ascending, the smallest element has the highest priority
//! - **Reversed standard**: descending, the largest element has the highest priority
//!
//! Any other order is supplied as a closure via [`Comparator::custom`].
//!
//! # Example
//!
//! ```rust
//! use heap_priority_queue::{Comparator, ComparatorKind};
//! use std::cmp::Ordering;
//!
//! let by_len = Comparator::custom(|a: &String, b: &String| a.len().cmp(&b.len()));
//! assert_eq!(by_len.compare(&"ab".to_string(), &"abc".to_string()), Ordering::Less);
//! assert_eq!(by_len.kind(), ComparatorKind::Custom);
//!
//! let desc = Comparator::<i32>::reversed_standard();
//! assert_eq!(desc.compare(&1, &2), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Shared custom comparison function
pub type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// Which family an active comparator belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparatorKind {
    /// Ascending natural order
    Standard,
    /// Descending natural order
    ReversedStandard,
    /// Caller supplied
    Custom,
}

enum Func<T> {
    Builtin(fn(&T, &T) -> Ordering),
    Shared(Arc<CompareFn<T>>),
}

/// A total order over `T`
///
/// `compare(a, b)` returning [`Ordering::Less`] means `a` has higher priority
/// than `b` and leaves the queue first. Custom orders must be total and
/// consistent across calls; the queue does not detect violations, it just
/// stops producing sorted output.
pub struct Comparator<T> {
    kind: ComparatorKind,
    func: Func<T>,
}

fn standard_order<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

fn reversed_order<T: Ord>(a: &T, b: &T) -> Ordering {
    standard_order(a, b).reverse()
}

impl<T: Ord> Comparator<T> {
    /// Ascending order: smaller elements are polled first
    pub fn standard() -> Self {
        Self {
            kind: ComparatorKind::Standard,
            func: Func::Builtin(standard_order::<T>),
        }
    }

    /// Descending order: larger elements are polled first
    pub fn reversed_standard() -> Self {
        Self {
            kind: ComparatorKind::ReversedStandard,
            func: Func::Builtin(reversed_order::<T>),
        }
    }

    /// Picks one of the two built-in orders
    pub fn from_reversed(reversed: bool) -> Self {
        if reversed {
            Self::reversed_standard()
        } else {
            Self::standard()
        }
    }
}

impl<T> Comparator<T> {
    /// Wraps a caller supplied order
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(f))
    }

    /// Wraps an already shared order
    ///
    /// Comparators built from clones of the same `Arc` are identical for
    /// [`is_same`](Self::is_same), so re-installing one skips the rebuild.
    pub fn from_shared(f: Arc<CompareFn<T>>) -> Self {
        Self {
            kind: ComparatorKind::Custom,
            func: Func::Shared(f),
        }
    }

    /// Compares two elements
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match &self.func {
            Func::Builtin(f) => f(a, b),
            Func::Shared(f) => f(a, b),
        }
    }

    /// True when `a` strictly outranks `b`
    #[inline]
    pub(crate) fn before(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    pub fn kind(&self) -> ComparatorKind {
        self.kind
    }

    /// Identity check used as a fast path before rebuilding
    ///
    /// Two built-ins are the same when they are the same kind. Two custom
    /// comparators are the same only when they share one function object.
    /// Equivalent but distinct closures compare as different, which costs a
    /// redundant rebuild and nothing else.
    pub fn is_same(&self, other: &Self) -> bool {
        match (&self.func, &other.func) {
            (Func::Builtin(_), Func::Builtin(_)) => self.kind == other.kind,
            (Func::Shared(a), Func::Shared(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        let func = match &self.func {
            Func::Builtin(f) => Func::Builtin(*f),
            Func::Shared(f) => Func::Shared(Arc::clone(f)),
        };
        Self {
            kind: self.kind,
            func,
        }
    }
}

impl<T: Ord> Default for Comparator<T> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").field("kind", &self.kind).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_orders() {
        let asc = Comparator::<i32>::standard();
        let rev = Comparator::<i32>::reversed_standard();

        assert_eq!(asc.compare(&1, &2), Ordering::Less);
        assert_eq!(asc.compare(&2, &2), Ordering::Equal);
        assert_eq!(rev.compare(&1, &2), Ordering::Greater);
        assert_eq!(rev.compare(&2, &2), Ordering::Equal);

        assert_eq!(Comparator::<i32>::from_reversed(false).kind(), ComparatorKind::Standard);
        assert_eq!(
            Comparator::<i32>::from_reversed(true).kind(),
            ComparatorKind::ReversedStandard
        );
    }

    #[test]
    fn test_identity_of_builtins() {
        let a = Comparator::<i32>::standard();
        let b = Comparator::<i32>::standard();
        let c = Comparator::<i32>::reversed_standard();

        assert!(a.is_same(&b));
        assert!(!a.is_same(&c));
        assert!(a.is_same(&a.clone()));
    }

    #[test]
    fn test_identity_of_custom() {
        let a = Comparator::custom(|x: &i32, y: &i32| x.cmp(y));
        let b = Comparator::custom(|x: &i32, y: &i32| x.cmp(y));

        // Same behaviour, different function objects
        assert!(!a.is_same(&b));
        assert!(a.is_same(&a.clone()));
        assert!(!a.is_same(&Comparator::standard()));

        let shared: Arc<CompareFn<i32>> = Arc::new(|x: &i32, y: &i32| y.cmp(x));
        let c = Comparator::from_shared(Arc::clone(&shared));
        let d = Comparator::from_shared(shared);
        assert!(c.is_same(&d));
    }

    #[test]
    fn test_before() {
        let cmp = Comparator::<u8>::standard();
        assert!(cmp.before(&1, &2));
        assert!(!cmp.before(&2, &2));
        assert!(!cmp.before(&3, &2));
    }

    #[test]
    fn test_debug_shows_kind() {
        let cmp = Comparator::<i32>::reversed_standard();
        assert_eq!(format!("{:?}", cmp), "Comparator { kind: ReversedStandard }");
    }
}
