use ahash::{HashMap, HashMapExt};

use super::{FrontierQueue, QueueEntry, QueueError};
use crate::graphs::{Distance, Vertex};

/// Binary min-heap of fixed capacity that supports updating the distance of
/// a queued vertex in O(log n).
///
/// Entries live in `slots[1..=len]`; slot 0 is a placeholder so that the
/// parent of slot `i` is `i / 2` and its children are `2i` and `2i + 1`.
/// `positions` maps every queued vertex to its slot.
#[derive(Clone, Debug)]
pub struct IndexedMinHeap {
    slots: Vec<QueueEntry>,
    positions: HashMap<Vertex, usize>,
    capacity: usize,
}

impl IndexedMinHeap {
    /// Creates an empty heap that holds at most `capacity` entries at a time.
    /// Vertices may be any `Vertex`, independent of the capacity.
    pub fn with_capacity(capacity: usize) -> IndexedMinHeap {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.push(QueueEntry::new(Vertex::MAX, Distance::MAX));
        IndexedMinHeap {
            slots,
            positions: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.positions.contains_key(&vertex)
    }

    /// The queued distance of `vertex`, if it is queued.
    pub fn distance(&self, vertex: Vertex) -> Option<Distance> {
        let &slot = self.positions.get(&vertex)?;
        Some(self.slots[slot].distance)
    }

    pub fn peek(&self) -> Option<&QueueEntry> {
        self.slots.get(1)
    }

    /// Inserts a new entry and floats it up to its place.
    ///
    /// A full heap is left untouched and reports `CapacityExceeded`.
    pub fn add(&mut self, entry: QueueEntry) -> Result<(), QueueError> {
        if self.len() >= self.capacity {
            return Err(QueueError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if self.contains(entry.vertex) {
            return Err(QueueError::AlreadyQueued(entry.vertex));
        }

        self.slots.push(entry);
        let slot = self.len();
        self.positions.insert(entry.vertex, slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the entry with the smallest distance.
    pub fn poll(&mut self) -> Option<QueueEntry> {
        if self.is_empty() {
            return None;
        }

        let last = self.len();
        self.swap(1, last);
        let top = self.slots.pop()?;
        self.positions.remove(&top.vertex);
        if !self.is_empty() {
            self.sift_down(1);
        }

        Some(top)
    }

    /// Replaces the distance of a queued vertex.
    ///
    /// A smaller distance floats the entry up, anything else sinks it.
    pub fn update(&mut self, entry: QueueEntry) -> Result<(), QueueError> {
        let &slot = self
            .positions
            .get(&entry.vertex)
            .ok_or(QueueError::NotQueued(entry.vertex))?;

        let old = std::mem::replace(&mut self.slots[slot], entry);
        if entry < old {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.slots.truncate(1);
        self.positions.clear();
    }

    /// Checks the heap property of every slot and the consistency of the
    /// vertex to slot map.
    pub fn is_valid_heap(&self) -> bool {
        let ordered = (2..self.slots.len()).all(|slot| self.slots[slot / 2] <= self.slots[slot]);
        let indexed = (1..self.slots.len())
            .all(|slot| self.positions.get(&self.slots[slot].vertex) == Some(&slot));

        ordered && indexed && self.positions.len() == self.len()
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 1 && self.slots[slot] < self.slots[slot / 2] {
            self.swap(slot, slot / 2);
            slot /= 2;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.len();
        loop {
            let mut smallest = slot;
            for child in [2 * slot, 2 * slot + 1] {
                if child <= len && self.slots[child] < self.slots[smallest] {
                    smallest = child;
                }
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.positions.insert(self.slots[a].vertex, a);
        self.positions.insert(self.slots[b].vertex, b);
    }
}

impl FrontierQueue for IndexedMinHeap {
    fn insert(&mut self, vertex: Vertex, distance: Distance) -> Result<(), QueueError> {
        self.add(QueueEntry::new(vertex, distance))
    }

    fn decrease(&mut self, vertex: Vertex, distance: Distance) -> Result<(), QueueError> {
        self.update(QueueEntry::new(vertex, distance))
    }

    fn pop(&mut self) -> Option<QueueEntry> {
        self.poll()
    }

    fn len(&self) -> usize {
        IndexedMinHeap::len(self)
    }

    fn clear(&mut self) {
        IndexedMinHeap::clear(self)
    }
}
