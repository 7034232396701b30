use serde::{Deserialize, Serialize};

use crate::{
    graphs::{Distance, Vertex},
    queue::QueueError,
};

pub mod dijkstra;
pub mod dijkstra_data;

/// A path in a graph, listed from source to target, together with the sum
/// of its edge weights.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

/// Represents a request for finding a shortest path in a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub source: Vertex,
    pub target: Vertex,
}

/// A shortest path request along with the distance of a shortest path, if
/// there exists one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTestCase {
    pub request: ShortestPathRequest,
    pub distance: Option<Distance>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("vertex {vertex} is out of range for a graph with {number_of_vertices} vertices")]
    VertexOutOfRange {
        vertex: Vertex,
        number_of_vertices: u32,
    },

    #[error("there is no path from {from} to {to}")]
    Unreachable { from: Vertex, to: Vertex },

    #[error("frontier rejected an operation: {0}")]
    Queue(#[from] QueueError),
}

pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Result<Path, SearchError>;

    fn shortest_path_distance(
        &self,
        source: Vertex,
        target: Vertex,
    ) -> Result<Distance, SearchError> {
        self.shortest_path(source, target).map(|path| path.distance)
    }
}
