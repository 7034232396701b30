use std::collections::BTreeSet;

use ahash::{HashMap, HashMapExt};

use super::{FrontierQueue, QueueEntry, QueueError};
use crate::graphs::{Distance, Vertex};

/// Frontier backed by an ordered set.
///
/// Since entries can be removed by value, `decrease` deletes the old entry
/// and reinserts the vertex with its new distance. The queue never holds
/// stale entries.
#[derive(Clone, Default)]
pub struct OrderedSetQueue {
    set: BTreeSet<QueueEntry>,
    distances: HashMap<Vertex, Distance>,
}

impl OrderedSetQueue {
    pub fn new() -> OrderedSetQueue {
        OrderedSetQueue {
            set: BTreeSet::new(),
            distances: HashMap::new(),
        }
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.distances.contains_key(&vertex)
    }
}

impl FrontierQueue for OrderedSetQueue {
    fn insert(&mut self, vertex: Vertex, distance: Distance) -> Result<(), QueueError> {
        if self.distances.contains_key(&vertex) {
            return Err(QueueError::AlreadyQueued(vertex));
        }
        self.distances.insert(vertex, distance);
        self.set.insert(QueueEntry::new(vertex, distance));
        Ok(())
    }

    fn decrease(&mut self, vertex: Vertex, distance: Distance) -> Result<(), QueueError> {
        let queued_distance = self
            .distances
            .get_mut(&vertex)
            .ok_or(QueueError::NotQueued(vertex))?;
        let old_distance = std::mem::replace(queued_distance, distance);
        self.set.remove(&QueueEntry::new(vertex, old_distance));
        self.set.insert(QueueEntry::new(vertex, distance));
        Ok(())
    }

    fn pop(&mut self) -> Option<QueueEntry> {
        let entry = self.set.pop_first()?;
        self.distances.remove(&entry.vertex);
        Some(entry)
    }

    fn len(&self) -> usize {
        self.set.len()
    }

    fn clear(&mut self) {
        self.set.clear();
        self.distances.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrease_replaces_entry() {
        let mut queue = OrderedSetQueue::new();
        queue.insert(1, 9).unwrap();
        queue.insert(2, 5).unwrap();
        queue.decrease(1, 2).unwrap();

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(QueueEntry::new(1, 2)));
        assert_eq!(queue.pop(), Some(QueueEntry::new(2, 5)));
        assert!(queue.is_empty());
    }

    #[test]
    fn decrease_of_unknown_vertex_fails() {
        let mut queue = OrderedSetQueue::new();

        assert_eq!(queue.decrease(4, 1), Err(QueueError::NotQueued(4)));
        assert!(!queue.contains(4));
        assert!(queue.is_empty());
    }

    #[test]
    fn insert_twice_fails() {
        let mut queue = OrderedSetQueue::new();
        queue.insert(4, 1).unwrap();

        assert_eq!(queue.insert(4, 0), Err(QueueError::AlreadyQueued(4)));
        assert_eq!(queue.len(), 1);
    }
}
