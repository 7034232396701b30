use radix_heap::RadixHeapMap;

use super::{FrontierQueue, QueueEntry, QueueError};
use crate::graphs::{Distance, Vertex};

/// Monotone frontier backed by a radix heap.
///
/// `RadixHeapMap` is a max-heap, so distances are stored negated. A pushed
/// distance must not be smaller than the last popped one, which always holds
/// for Dijkstra with non-negative weights. Like the lazy heap, `decrease`
/// leaves a stale entry behind.
#[derive(Clone)]
pub struct RadixQueue {
    heap: RadixHeapMap<i64, Vertex>,
}

impl Default for RadixQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixQueue {
    pub fn new() -> RadixQueue {
        RadixQueue {
            heap: RadixHeapMap::new(),
        }
    }
}

impl FrontierQueue for RadixQueue {
    fn insert(&mut self, vertex: Vertex, distance: Distance) -> Result<(), QueueError> {
        let key = -(distance as i64);
        if let Some(top) = self.heap.top() {
            if key > top {
                return Err(QueueError::NonMonotone {
                    distance,
                    last: -top as Distance,
                });
            }
        }
        self.heap.push(key, vertex);
        Ok(())
    }

    fn decrease(&mut self, vertex: Vertex, distance: Distance) -> Result<(), QueueError> {
        self.insert(vertex, distance)
    }

    fn pop(&mut self) -> Option<QueueEntry> {
        let (negative_distance, vertex) = self.heap.pop()?;
        Some(QueueEntry::new(vertex, -negative_distance as Distance))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_distances_below_last_pop() {
        let mut queue = RadixQueue::new();
        queue.insert(0, 10).unwrap();
        assert_eq!(queue.pop(), Some(QueueEntry::new(0, 10)));

        assert_eq!(
            queue.insert(1, 4),
            Err(QueueError::NonMonotone {
                distance: 4,
                last: 10
            })
        );
        queue.insert(1, 10).unwrap();
        queue.insert(2, 12).unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(QueueEntry::new(1, 10)));
    }

    #[test]
    fn handles_infinite_distance() {
        let mut queue = RadixQueue::new();
        queue.insert(3, Distance::MAX).unwrap();

        assert_eq!(queue.pop(), Some(QueueEntry::new(3, Distance::MAX)));
    }
}
