use std::{cmp::Reverse, collections::BinaryHeap};

use super::{FrontierQueue, QueueEntry, QueueError};
use crate::graphs::{Distance, Vertex};

/// Frontier backed by the standard library `BinaryHeap`.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse` to pop
/// the smallest distance first. There is no way to find an entry inside the
/// heap, therefore `decrease` pushes a second entry and the old one stays
/// behind as a stale entry.
#[derive(Clone, Default)]
pub struct LazyHeapQueue {
    heap: BinaryHeap<Reverse<QueueEntry>>,
}

impl LazyHeapQueue {
    pub fn new() -> LazyHeapQueue {
        LazyHeapQueue {
            heap: BinaryHeap::new(),
        }
    }
}

impl FrontierQueue for LazyHeapQueue {
    fn insert(&mut self, vertex: Vertex, distance: Distance) -> Result<(), QueueError> {
        self.heap.push(Reverse(QueueEntry::new(vertex, distance)));
        Ok(())
    }

    fn decrease(&mut self, vertex: Vertex, distance: Distance) -> Result<(), QueueError> {
        self.insert(vertex, distance)
    }

    fn pop(&mut self) -> Option<QueueEntry> {
        let Reverse(entry) = self.heap.pop()?;
        Some(entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}
