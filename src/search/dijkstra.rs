use log::{debug, trace};

use super::{
    dijkstra_data::{DijkstraData, SearchPhase},
    Path, PathFinding, SearchError,
};
use crate::{
    graphs::{Distance, Graph, Vertex, INFINITY},
    queue::{FrontierKind, FrontierQueue, QueueEntry},
};

/// Dijkstra search on a borrowed graph, using a fresh frontier of the
/// configured kind for every query.
#[derive(Clone, Copy)]
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
    frontier: FrontierKind,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Dijkstra<'a> {
        Dijkstra::with_frontier(graph, FrontierKind::IndexedHeap)
    }

    pub fn with_frontier(graph: &'a dyn Graph, frontier: FrontierKind) -> Dijkstra<'a> {
        Dijkstra { graph, frontier }
    }

    pub fn frontier(&self) -> FrontierKind {
        self.frontier
    }

    /// Runs a search from `source` that stops once `target` is popped.
    pub fn one_to_one(&self, source: Vertex, target: Vertex) -> Result<DijkstraData, SearchError> {
        let mut queue = self.frontier.new_queue(self.graph.number_of_vertices());
        dijkstra_one_to_one(self.graph, queue.as_mut(), source, target)
    }

    /// Runs a search from `source` until every reachable vertex is settled.
    pub fn single_source(&self, source: Vertex) -> Result<DijkstraData, SearchError> {
        let mut queue = self.frontier.new_queue(self.graph.number_of_vertices());
        dijkstra_one_to_all(self.graph, queue.as_mut(), source)
    }
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Result<Path, SearchError> {
        let data = self.one_to_one(source, target)?;
        data.get_path(target)
            .ok_or(SearchError::Unreachable {
                from: source,
                to: target,
            })
    }
}

pub fn dijkstra_one_to_one(
    graph: &dyn Graph,
    queue: &mut dyn FrontierQueue,
    source: Vertex,
    target: Vertex,
) -> Result<DijkstraData, SearchError> {
    check_vertex(graph, target)?;
    search(graph, queue, source, Some(target))
}

pub fn dijkstra_one_to_all(
    graph: &dyn Graph,
    queue: &mut dyn FrontierQueue,
    source: Vertex,
) -> Result<DijkstraData, SearchError> {
    search(graph, queue, source, None)
}

fn check_vertex(graph: &dyn Graph, vertex: Vertex) -> Result<(), SearchError> {
    if !graph.contains(vertex) {
        return Err(SearchError::VertexOutOfRange {
            vertex,
            number_of_vertices: graph.number_of_vertices(),
        });
    }
    Ok(())
}

/// The queue is cleared before the search starts. Whatever is left in it
/// afterwards stays there, so callers can inspect the remaining frontier.
fn search(
    graph: &dyn Graph,
    queue: &mut dyn FrontierQueue,
    source: Vertex,
    target: Option<Vertex>,
) -> Result<DijkstraData, SearchError> {
    check_vertex(graph, source)?;

    let mut data = DijkstraData::new(graph.number_of_vertices(), source);
    queue.clear();
    queue.insert(source, 0)?;
    debug!("Search from {} to {:?} initialized", source, target);

    data.set_phase(SearchPhase::Relaxing);
    while let Some(QueueEntry {
        vertex: tail,
        distance: distance_tail,
    }) = queue.pop()
    {
        // The vertex was reached on a shorter path after this entry was queued.
        if distance_tail > data.get_distance(tail) {
            continue;
        }
        data.mark_expanded();

        if Some(tail) == target {
            break;
        }

        for edge in graph.edges(tail) {
            let current_distance_head = data.get_distance(edge.head);
            let alternative_distance_head = distance_tail.saturating_add(edge.weight);
            if alternative_distance_head < current_distance_head {
                trace!(
                    "Relaxed {} -> {}: {} -> {}",
                    tail,
                    edge.head,
                    current_distance_head,
                    alternative_distance_head
                );
                data.set_distance(edge.head, alternative_distance_head);
                data.set_predecessor(edge.head, tail);
                relax(queue, edge.head, current_distance_head, alternative_distance_head)?;
            }
        }
    }

    data.set_phase(SearchPhase::Terminated);
    debug!(
        "Search from {} terminated after expanding {} vertices, {} frontier entries left",
        source,
        data.number_of_expanded(),
        queue.len()
    );

    Ok(data)
}

fn relax(
    queue: &mut dyn FrontierQueue,
    vertex: Vertex,
    old_distance: Distance,
    new_distance: Distance,
) -> Result<(), SearchError> {
    if old_distance == INFINITY {
        queue.insert(vertex, new_distance)?;
    } else {
        queue.decrease(vertex, new_distance)?;
    }
    Ok(())
}
