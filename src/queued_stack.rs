//! A stack composed purely of two queues.
//!
//! A queue can only give up its oldest element, so to reach the most recent
//! push the whole of `primary` is rotated: every element but the last is
//! dequeued and re-enqueued into `secondary`, which preserves their relative
//! order and leaves the logical top exposed as the sole survivor. After the
//! survivor is taken the two queues swap roles.
//!
//! Both `pop` and `peek` therefore cost O(n), strictly worse than the
//! amortized transfer of the stacked queue. That is the price of building
//! LIFO from FIFO primitives; the structure exists for symmetry with
//! [StackedQueue](crate::StackedQueue), not for performance.

use std::mem;

use crate::queue::Queue;
use crate::traits::Lifo;

/// A LIFO built from two [Queue] instances with rotate-to-expose-last.
///
/// Invariant: between operations `primary` holds all current elements in
/// insertion order and `secondary` is empty; the top of the stack is the
/// element most recently enqueued into `primary`.
#[derive(Debug, Clone)]
pub struct QueuedStack<T> {
    primary: Queue<T>,
    secondary: Queue<T>,
}

impl<T> QueuedStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            primary: Queue::new(),
            secondary: Queue::new(),
        }
    }

    /// Places `value` on top. O(1).
    pub fn push(&mut self, value: T) {
        self.primary.enqueue(value);
    }

    /// Dequeues all but the last element of `primary` into `secondary`,
    /// leaving only the most recent push behind.
    fn rotate(&mut self) {
        while self.primary.len() > 1 {
            if let Some(value) = self.primary.dequeue() {
                self.secondary.enqueue(value);
            }
        }
    }

    /// Removes and returns the top element, or `None` if the stack is
    /// empty. O(n).
    pub fn pop(&mut self) -> Option<T> {
        self.rotate();
        let top = self.primary.dequeue();
        mem::swap(&mut self.primary, &mut self.secondary);
        top
    }

    /// Borrows the top element, or `None` if the stack is empty. O(n).
    ///
    /// Takes `&mut self`: the rotation must run to expose the top. The
    /// exposed element is re-enqueued behind the others before the roles
    /// swap, so the structure is observationally unchanged afterwards.
    pub fn peek(&mut self) -> Option<&T> {
        self.rotate();
        if let Some(top) = self.primary.dequeue() {
            self.secondary.enqueue(top);
        }
        mem::swap(&mut self.primary, &mut self.secondary);
        self.primary.back()
    }

    /// The number of stored elements.
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }
}

impl<T> Default for QueuedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Lifo for QueuedStack<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        QueuedStack::push(self, value);
    }

    fn pop(&mut self) -> Option<T> {
        QueuedStack::pop(self)
    }

    fn peek(&mut self) -> Option<&T> {
        QueuedStack::peek(self)
    }

    fn len(&self) -> usize {
        QueuedStack::len(self)
    }

    fn is_empty(&self) -> bool {
        QueuedStack::is_empty(self)
    }
}
