use crate::core::piece::Piece;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue full: all {capacity} slots are occupied")]
    Full { capacity: usize },
    #[error("queue capacity must be greater than zero")]
    ZeroCapacity,
}

/// core queue structure: fixed-capacity circular buffer
///
/// Occupied slots are exactly `(head + i) % capacity` for `i < count`,
/// oldest element at `head`.
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    count: usize,
}

/// The upcoming-pieces preview queue
pub type PieceQueue = CircularQueue<Piece>;

impl<T> CircularQueue<T> {
    /// Create an empty queue with exactly `capacity` slots
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self { slots, head: 0, count: 0 })
    }

    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }

    /// Enqueue an item at the tail
    ///
    /// A full queue rejects the item and is left untouched.
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full { capacity: self.capacity() });
        }
        let len_before = self.count;
        let index = self.slot(self.count);
        self.slots[index] = Some(item);
        self.count += 1;
        // --post operation assertion
        assert_eq!(self.count, len_before + 1, "Queue length should increase by 1");
        Ok(())
    }

    /// Dequeue the item at the head
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let len_before = self.count;
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.count -= 1;
        // -- post op assertion: queue size decreases if dequeue succeeded
        assert_eq!(self.count, len_before - 1, "Queue length should decrease by 1");
        item
    }

    /// Item at the head, without removing it
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Items from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count).filter_map(move |i| self.slots[self.slot(i)].as_ref())
    }

    /// Get the current queue length
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of free slots
    pub fn free(&self) -> usize {
        self.capacity() - self.count
    }

    /// Physical slot of the oldest element
    pub fn head_index(&self) -> usize {
        self.head
    }

    /// Physical slot of the newest element, if any
    pub fn tail_index(&self) -> Option<usize> {
        self.count.checked_sub(1).map(|last| self.slot(last))
    }
}

impl<T: Clone> CircularQueue<T> {
    /// Ordered copy of the occupied slots, head to tail
    pub fn snapshot(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
