use std::cmp::Ordering;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

pub mod indexed_heap;
pub mod lazy_heap_queue;
pub mod ordered_set_queue;
pub mod radix_queue;

use indexed_heap::IndexedMinHeap;
use lazy_heap_queue::LazyHeapQueue;
use ordered_set_queue::OrderedSetQueue;
use radix_queue::RadixQueue;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct QueueEntry {
    pub vertex: Vertex,
    pub distance: Distance,
}

impl QueueEntry {
    pub fn new(vertex: Vertex, distance: Distance) -> QueueEntry {
        QueueEntry { vertex, distance }
    }
}

// Smaller distances come first. In case of a tie we compare vertices - this
// step is necessary to make implementations of `PartialEq` and `Ord`
// consistent.
impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("vertex {0} is already queued")]
    AlreadyQueued(Vertex),

    #[error("vertex {0} is not queued")]
    NotQueued(Vertex),

    #[error("distance {distance} is smaller than the last popped distance {last}")]
    NonMonotone { distance: Distance, last: Distance },
}

/// The frontier of a Dijkstra search: discovered vertices ordered by their
/// tentative distance.
///
/// Implementations without a real decrease key operation may hand out stale
/// entries from `pop`, i.e. entries whose distance is larger than the one
/// most recently passed to `decrease` for that vertex. Callers have to skip
/// those.
pub trait FrontierQueue {
    /// Adds a vertex that is not part of the queue yet.
    fn insert(&mut self, vertex: Vertex, distance: Distance) -> Result<(), QueueError>;

    /// Lowers the distance of a vertex that was inserted before.
    fn decrease(&mut self, vertex: Vertex, distance: Distance) -> Result<(), QueueError>;

    /// Removes and returns the entry with the smallest distance, or `None`
    /// if the queue is empty.
    fn pop(&mut self) -> Option<QueueEntry>;

    /// Number of entries currently held, stale entries included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// Selects one of the interchangeable frontier implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum FrontierKind {
    /// Binary heap with a vertex to slot map and in-place decrease key.
    IndexedHeap,
    /// `BinaryHeap` that pushes duplicates instead of updating.
    LazyHeap,
    /// Ordered set that deletes and reinserts on update.
    OrderedSet,
    /// Monotone radix heap, pushes duplicates instead of updating.
    Radix,
}

impl FrontierKind {
    pub const ALL: [FrontierKind; 4] = [
        FrontierKind::IndexedHeap,
        FrontierKind::LazyHeap,
        FrontierKind::OrderedSet,
        FrontierKind::Radix,
    ];

    /// Creates an empty frontier able to hold the vertices `0..number_of_vertices`.
    pub fn new_queue(&self, number_of_vertices: u32) -> Box<dyn FrontierQueue + Send> {
        match self {
            FrontierKind::IndexedHeap => {
                Box::new(IndexedMinHeap::with_capacity(number_of_vertices as usize))
            }
            FrontierKind::LazyHeap => Box::new(LazyHeapQueue::new()),
            FrontierKind::OrderedSet => Box::new(OrderedSetQueue::new()),
            FrontierKind::Radix => Box::new(RadixQueue::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FrontierKind::IndexedHeap => "indexed heap",
            FrontierKind::LazyHeap => "lazy heap",
            FrontierKind::OrderedSet => "ordered set",
            FrontierKind::Radix => "radix heap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_order_by_distance_then_vertex() {
        let mut entries = vec![
            QueueEntry::new(3, 7),
            QueueEntry::new(1, 7),
            QueueEntry::new(9, 2),
        ];
        entries.sort();

        assert_eq!(
            entries,
            vec![
                QueueEntry::new(9, 2),
                QueueEntry::new(1, 7),
                QueueEntry::new(3, 7)
            ]
        );
    }

    #[test]
    fn every_frontier_pops_in_order() {
        for kind in FrontierKind::ALL {
            let mut queue = kind.new_queue(10);
            queue.insert(4, 8).unwrap();
            queue.insert(2, 3).unwrap();
            queue.insert(7, 5).unwrap();
            queue.decrease(4, 4).unwrap();

            let mut popped = Vec::new();
            while let Some(entry) = queue.pop() {
                popped.push(entry);
            }
            // lazy frontiers still hand out the stale (4, 8)
            popped.retain(|entry| entry.vertex != 4 || entry.distance == 4);

            assert_eq!(
                popped,
                vec![
                    QueueEntry::new(2, 3),
                    QueueEntry::new(4, 4),
                    QueueEntry::new(7, 5)
                ],
                "{}",
                kind.name()
            );
            assert!(queue.is_empty());
        }
    }
}
