//! Bounded model-checking harnesses for the queue
//!
//! Each harness feeds symbolic values through a short sequence of queue calls
//! and asserts what `peek`, `poll` and `len` must report for all of them.
//! Compiled only under `cfg(kani)`; run with `cargo kani --tests`.

#[cfg(kani)]
use heap_priority_queue::HeapPriorityQueue;

/// Proof that add always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_add_increments_len() {
    let mut queue: HeapPriorityQueue<u32> = HeapPriorityQueue::new();
    let initial_len = queue.len();

    queue.add(kani::any());

    assert!(queue.len() == initial_len + 1);
    assert!(queue.not_empty());
}

/// Proof that poll returns the smaller of any three values first
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_poll_returns_minimum() {
    let mut queue: HeapPriorityQueue<u32> = HeapPriorityQueue::new();
    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();

    queue.add(a);
    queue.add(b);
    queue.add(c);

    let min = a.min(b).min(c);
    assert!(queue.peek() == Some(&min));
    assert!(queue.poll() == Some(min));
    assert!(queue.len() == 2);
}

/// Proof that switching to reversed order puts the maximum on top
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_reversed_switch_exposes_maximum() {
    let mut queue: HeapPriorityQueue<u8> = HeapPriorityQueue::new();
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();

    queue.add(a);
    queue.add(b);
    queue.add(c);
    queue.set_reversed_standard();

    assert!(queue.peek() == Some(&a.max(b).max(c)));
    assert!(queue.check_invariants().is_ok());
}

/// Proof that removing a present value shrinks the queue by one
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_remove_present_value() {
    let mut queue: HeapPriorityQueue<u8> = HeapPriorityQueue::new();
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    kani::assume(a != b);

    queue.add(a);
    queue.add(b);

    assert!(queue.remove(&a));
    assert!(queue.len() == 1);
    assert!(!queue.contains(&a));
    assert!(queue.peek() == Some(&b));
}

/// Proof that polling an empty queue yields None
#[cfg(kani)]
#[kani::proof]
fn verify_empty_poll_is_none() {
    let mut queue: HeapPriorityQueue<u32> = HeapPriorityQueue::new();
    assert!(queue.poll().is_none());
    assert!(queue.peek().is_none());
    assert!(queue.is_empty());
}
