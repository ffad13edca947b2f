use listkit::{Error, Stack};

#[test]
fn push_pop_peek_at_the_top() {
    let mut stack = Stack::new();
    stack.push("x").unwrap();
    stack.push("y").unwrap();
    assert_eq!(stack.peek(), Ok(&"y"));
    assert_eq!(stack.pop(), Ok("y"));
    assert_eq!(stack.pop(), Ok("x"));

    // unlike the lists, an empty stack treats pop and peek as errors
    assert_eq!(stack.pop(), Err(Error::Empty));
    assert_eq!(stack.peek(), Err(Error::Empty));
}

#[test]
fn bounded_stack_contract() {
    assert_eq!(Stack::<u8>::bounded(0).unwrap_err(), Error::InvalidCapacity);

    let mut stack = Stack::bounded_from(2, ["a"]).unwrap();
    assert!(!stack.is_full());
    stack.push("b").unwrap();
    assert!(stack.is_full());
    assert_eq!(
        stack.push("c").err(),
        Some(Error::CapacityExceeded { capacity: 2 })
    );

    assert_eq!(
        Stack::bounded_from(1, ["a", "b"]).unwrap_err(),
        Error::CapacityExceeded { capacity: 1 }
    );
}

#[test]
fn seeded_stack_pops_in_reverse_seed_order() {
    let mut stack: Stack<i32> = (1..=3).collect();
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.pop(), Ok(1));
    assert!(stack.is_empty());
}
