use std::collections::VecDeque;

use quack::{Conformance, FifoSubject, Queue, StackedQueue};

#[test]
fn dequeues_in_enqueue_order() {
    let mut queue = StackedQueue::new();
    for value in [8, 6, 3, 9] {
        queue.enqueue(value);
    }

    assert_eq!(queue.dequeue(), Some(8));
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.dequeue(), Some(6));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.dequeue(), Some(9));
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn survives_a_long_run_of_enqueues_before_the_first_dequeue() {
    let mut queue = StackedQueue::new();
    for value in 0..100 {
        queue.enqueue(value);
    }

    for expected in 0..100 {
        assert_eq!(queue.dequeue(), Some(expected));
    }
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn peek_is_idempotent_and_keeps_order() {
    let mut queue = StackedQueue::new();
    queue.enqueue(1);
    queue.enqueue(2);

    for _ in 0..3 {
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.len(), 2);
    }

    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.dequeue(), Some(2));
}

#[test]
fn empty_queue_answers_without_panicking() {
    let mut queue: StackedQueue<i32> = StackedQueue::new();

    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.peek(), None);
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
}

#[test]
fn models_vec_deque() {
    Conformance::default()
        .verify_or_panic::<FifoSubject<StackedQueue<u8>>, FifoSubject<VecDeque<u8>>>();
}

#[test]
fn models_the_two_buffer_queue() {
    Conformance::default()
        .verify_or_panic::<FifoSubject<StackedQueue<u8>>, FifoSubject<Queue<u8>>>();
}
