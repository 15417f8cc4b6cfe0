use std::collections::VecDeque;
use next_pieces::core::generator::PieceGenerator;
use next_pieces::core::queue::{CircularQueue, PieceQueue, QueueError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_zero_capacity_rejected() {
    let result = CircularQueue::<u8>::new(0);
    assert_eq!(result.err(), Some(QueueError::ZeroCapacity));
}

#[test]
fn test_new_queue_is_empty() {
    let queue = CircularQueue::<u8>::new(4).unwrap();
    assert!(queue.is_empty());
    assert!(!queue.is_full());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.capacity(), 4);
    assert_eq!(queue.free(), 4);
    assert_eq!(queue.head_index(), 0);
    assert_eq!(queue.tail_index(), None);
    assert!(queue.snapshot().is_empty());
}

#[test]
fn test_capacity_round_trip() {
    let mut generator = PieceGenerator::seeded(7);
    let mut queue = PieceQueue::new(5).unwrap();
    let pieces: Vec<_> = (0..5).map(|_| generator.generate()).collect();
    for piece in &pieces {
        assert!(queue.enqueue(*piece).is_ok());
    }
    assert_eq!(queue.len(), 5);
    assert!(queue.is_full());

    // Sixth enqueue is rejected and nothing moves
    let extra = generator.generate();
    assert_eq!(queue.enqueue(extra), Err(QueueError::Full { capacity: 5 }));
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.snapshot(), pieces);

    assert_eq!(queue.dequeue(), Some(pieces[0]));
    assert_eq!(queue.len(), 4);

    let refill = generator.generate();
    assert!(queue.enqueue(refill).is_ok());
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.snapshot()[4], refill);
}

#[test]
fn test_wrap_around() {
    let mut queue = CircularQueue::new(3).unwrap();
    for item in ['A', 'B', 'C'] {
        queue.enqueue(item).unwrap();
    }
    assert_eq!(queue.dequeue(), Some('A'));
    assert_eq!(queue.len(), 2);

    queue.enqueue('D').unwrap();
    // D lands in slot 0 after wrapping
    assert_eq!(queue.tail_index(), Some(0));
    assert_eq!(queue.head_index(), 1);
    assert_eq!(queue.snapshot(), vec!['B', 'C', 'D']);
    assert_eq!(queue.peek(), Some(&'B'));
}

#[test]
fn test_empty_dequeue_leaves_state() {
    let mut queue = CircularQueue::new(2).unwrap();
    queue.enqueue(1).unwrap();
    assert_eq!(queue.dequeue(), Some(1));
    let head = queue.head_index();

    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.head_index(), head);
    assert_eq!(queue.peek(), None);
}

#[test]
fn test_capacity_one() {
    let mut queue = CircularQueue::new(1).unwrap();
    for i in 0..10 {
        queue.enqueue(i).unwrap();
        assert_eq!(queue.enqueue(i + 100), Err(QueueError::Full { capacity: 1 }));
        assert_eq!(queue.tail_index(), Some(0));
        assert_eq!(queue.dequeue(), Some(i));
    }
    assert!(queue.is_empty());
}

#[test]
fn test_random_operations_match_model() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for capacity in 1..=8 {
        let mut queue = CircularQueue::new(capacity).unwrap();
        let mut model = VecDeque::new();
        let mut next = 0u32;

        for _ in 0..500 {
            if rng.random_bool(0.55) {
                let result = queue.enqueue(next);
                if model.len() < capacity {
                    assert!(result.is_ok());
                    model.push_back(next);
                } else {
                    assert_eq!(result, Err(QueueError::Full { capacity }));
                }
                next += 1;
            } else {
                assert_eq!(queue.dequeue(), model.pop_front());
            }

            assert!(queue.len() <= capacity);
            assert!(queue.head_index() < capacity);
            assert_eq!(queue.len(), model.len());
            assert_eq!(queue.is_full(), model.len() == capacity);
            assert_eq!(queue.snapshot(), model.iter().copied().collect::<Vec<_>>());
        }
    }
}
