use listkit::{CircularQueue, DoublyList, Error, ListQueue, Queue};

#[test]
fn growable_queue_contract() {
    let mut queue = Queue::new();
    queue.enqueue("a").unwrap();
    queue.enqueue("b").unwrap();
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.peek(), Ok(&"a"));
    assert_eq!(queue.dequeue(), Ok("a"));
    assert_eq!(queue.dequeue(), Ok("b"));
    assert_eq!(queue.dequeue(), Err(Error::Empty));
}

#[test]
fn bounded_queue_rejects_overflow_and_bad_capacity() {
    assert_eq!(Queue::<u8>::bounded(0).unwrap_err(), Error::InvalidCapacity);

    let mut queue = Queue::bounded_from(2, [1, 2]).unwrap();
    assert!(queue.is_full());
    assert_eq!(queue.capacity(), Some(2));
    assert_eq!(
        queue.enqueue(3).err(),
        Some(Error::CapacityExceeded { capacity: 2 })
    );

    // seeding beyond the bound fails the same way
    assert_eq!(
        Queue::bounded_from(2, [1, 2, 3]).unwrap_err(),
        Error::CapacityExceeded { capacity: 2 }
    );
}

#[test]
fn list_queue_matches_the_growable_queue_behaviour() {
    let mut growable = Queue::bounded(3).unwrap();
    let mut linked: ListQueue<i32> = ListQueue::bounded(3).unwrap();

    for value in [1, 2, 3] {
        growable.enqueue(value).unwrap();
        linked.enqueue(value).unwrap();
    }
    assert_eq!(growable.is_full(), linked.is_full());
    assert_eq!(
        growable.enqueue(4).unwrap_err(),
        linked.enqueue(4).unwrap_err()
    );

    while !growable.is_empty() {
        assert_eq!(growable.peek().copied(), linked.peek().copied());
        assert_eq!(growable.dequeue(), linked.dequeue());
    }
    assert_eq!(growable.dequeue(), Err(Error::Empty));
    assert_eq!(linked.dequeue(), Err(Error::Empty));
}

#[test]
fn list_queue_accepts_any_linked_list_backend() {
    let mut queue: ListQueue<i32, DoublyList<i32>> = ListQueue::new();
    queue.enqueue(10).unwrap();
    queue.enqueue(20).unwrap();
    assert!(queue.contains(&20));
    assert_eq!(queue.dequeue(), Ok(10));
    queue.clear();
    assert_eq!(queue.peek(), Err(Error::Empty));
}

#[test]
fn circular_buffer_wraps_at_capacity_three() {
    let mut queue = CircularQueue::new(3).unwrap();
    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();
    queue.enqueue(3).unwrap();
    assert!(queue.is_full());

    assert_eq!(queue.dequeue(), Ok(1));
    queue.enqueue(4).unwrap(); // wraps into the freed slot
    assert_eq!(queue.peek(), Ok(&2));

    assert_eq!(queue.dequeue(), Ok(2));
    assert_eq!(queue.dequeue(), Ok(3));
    assert_eq!(queue.dequeue(), Ok(4));
    assert!(queue.is_empty());
}

#[test]
fn circular_buffer_survives_many_laps() {
    let mut queue = CircularQueue::new(4).unwrap();
    let mut expected = 0;
    for value in 0..32 {
        queue.enqueue(value).unwrap();
        if queue.is_full() {
            while queue.len() > 1 {
                assert_eq!(queue.dequeue(), Ok(expected));
                expected += 1;
            }
        }
    }
    while let Ok(value) = queue.dequeue() {
        assert_eq!(value, expected);
        expected += 1;
    }
    assert_eq!(expected, 32);
}
