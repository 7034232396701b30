use super::Path;
use crate::graphs::{Distance, Vertex, INFINITY};

/// Where a search currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    /// Distances are reset and the source is the only discovered vertex.
    Initialized,
    /// Vertices are being popped from the frontier and their edges relaxed.
    Relaxing,
    /// The target was popped or the frontier ran empty.
    Terminated,
}

/// Distances and predecessors of a single search.
///
/// Distances only ever decrease while a search is running. A vertex counts
/// as discovered as soon as its distance is finite.
#[derive(Clone, Debug)]
pub struct DijkstraData {
    source: Vertex,
    distances: Vec<Distance>,
    predecessors: Vec<Vertex>,
    phase: SearchPhase,
    number_of_expanded: u32,
}

impl DijkstraData {
    const NO_PREDECESSOR: Vertex = Vertex::MAX;

    pub fn new(number_of_vertices: u32, source: Vertex) -> DijkstraData {
        let mut data = DijkstraData {
            source,
            distances: vec![INFINITY; number_of_vertices as usize],
            predecessors: vec![Self::NO_PREDECESSOR; number_of_vertices as usize],
            phase: SearchPhase::Initialized,
            number_of_expanded: 0,
        };
        if let Some(distance) = data.distances.get_mut(source as usize) {
            *distance = 0;
        }
        data
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: SearchPhase) {
        self.phase = phase;
    }

    /// Number of vertices popped from the frontier and expanded.
    pub fn number_of_expanded(&self) -> u32 {
        self.number_of_expanded
    }

    pub(crate) fn mark_expanded(&mut self) {
        self.number_of_expanded += 1;
    }

    /// `INFINITY` for vertices that were not reached or are not in the graph.
    pub fn get_distance(&self, vertex: Vertex) -> Distance {
        self.distances
            .get(vertex as usize)
            .copied()
            .unwrap_or(INFINITY)
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub(crate) fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances[vertex as usize] = distance;
    }

    pub fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        let &predecessor = self.predecessors.get(vertex as usize)?;

        if predecessor == Self::NO_PREDECESSOR {
            return None;
        }

        Some(predecessor)
    }

    pub(crate) fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors[vertex as usize] = predecessor;
    }

    /// Constructs the path from the source to `target`, or `None` if the
    /// target was not reached.
    pub fn get_path(&self, target: Vertex) -> Option<Path> {
        let distance = *self.distances.get(target as usize)?;
        if distance == INFINITY {
            return None;
        }

        // Trace back from the target and reverse, so the path starts at the source.
        let mut vertices = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.get_predecessor(current) {
            current = predecessor;
            vertices.push(current);
        }
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}
