//! Dijkstra shortest paths over interchangeable frontier queues, the main
//! one being an indexed binary min-heap with decrease key.

pub mod graphs;
pub mod queue;
pub mod search;
pub mod utility;
