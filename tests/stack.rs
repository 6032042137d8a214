use quack::{Conformance, LifoSubject, Stack};

#[test]
fn pops_in_reverse_push_order() {
    let mut stack = Stack::new();
    for value in [8, 6, 3] {
        stack.push(value);
    }

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(6));
    assert_eq!(stack.pop(), Some(8));
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn peek_is_idempotent() {
    let mut stack = Stack::new();
    stack.push(8);
    stack.push(6);

    for _ in 0..3 {
        assert_eq!(stack.peek(), Some(&6));
        assert_eq!(stack.len(), 2);
    }
}

#[test]
fn empty_stack_answers_without_panicking() {
    let mut stack: Stack<i32> = Stack::new();

    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);
    assert_eq!(stack.len(), 0);
    assert!(stack.is_empty());
}

#[test]
fn is_empty_agrees_with_len() {
    let mut stack = Stack::new();
    assert_eq!(stack.is_empty(), stack.len() == 0);

    stack.push(1);
    assert_eq!(stack.is_empty(), stack.len() == 0);

    stack.pop();
    assert_eq!(stack.is_empty(), stack.len() == 0);
}

#[test]
fn clear_empties_the_stack() {
    let mut stack = Stack::with_capacity(4);
    for value in 0..4 {
        stack.push(value);
    }

    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);
}

#[test]
fn models_vec() {
    Conformance::default().verify_or_panic::<LifoSubject<Stack<u8>>, LifoSubject<Vec<u8>>>();
}
