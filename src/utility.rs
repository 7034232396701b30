use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use itertools::Itertools;
use rand::prelude::*;
use rayon::prelude::*;

use crate::{
    graphs::{adjacency_list_graph::AdjacencyListGraph, Distance, Graph},
    queue::FrontierKind,
    search::{
        dijkstra::Dijkstra, Path, PathFinding, SearchError, ShortestPathRequest,
        ShortestPathTestCase,
    },
};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} {human_pos}/{human_len} {eta_precise} ")
    {
        bar.set_style(style);
    }
    bar
}

/// Formats the vertices of a path as `0->1->3`.
pub fn format_path(path: &Path) -> String {
    path.vertices.iter().join("->")
}

/// Generates a random directed graph with `number_of_edges` edges whose
/// weights are drawn from `1..=max_weight`. Self loops are skipped.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: Distance,
) -> AdjacencyListGraph {
    let mut graph = AdjacencyListGraph::new(number_of_vertices);
    if number_of_vertices < 2 {
        return graph;
    }

    let mut added = 0;
    while added < number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        if tail == head {
            continue;
        }
        let weight = rng.gen_range(1..=max_weight.max(1));
        if graph.add_edge(tail, head, weight).is_ok() {
            added += 1;
        }
    }

    graph
}

pub fn random_requests<R: Rng>(
    rng: &mut R,
    graph: &dyn Graph,
    number_of_requests: u32,
) -> Vec<ShortestPathRequest> {
    if graph.number_of_vertices() == 0 {
        return Vec::new();
    }

    (0..number_of_requests)
        .map(|_| ShortestPathRequest {
            source: rng.gen_range(0..graph.number_of_vertices()),
            target: rng.gen_range(0..graph.number_of_vertices()),
        })
        .collect()
}

/// Solves the requests in parallel with the indexed heap frontier.
pub fn generate_test_cases(
    graph: &dyn Graph,
    requests: &[ShortestPathRequest],
) -> Result<Vec<ShortestPathTestCase>, SearchError> {
    let dijkstra = Dijkstra::with_frontier(graph, FrontierKind::IndexedHeap);

    requests
        .par_iter()
        .progress_with(get_progressbar("Generating test cases", requests.len() as u64))
        .map(|&request| {
            let distance = match dijkstra.shortest_path_distance(request.source, request.target) {
                Ok(distance) => Some(distance),
                Err(SearchError::Unreachable { .. }) => None,
                Err(error) => return Err(error),
            };
            Ok(ShortestPathTestCase { request, distance })
        })
        .collect()
}

/// Checks a search result against a test case.
pub fn validate_path(
    graph: &dyn Graph,
    test_case: &ShortestPathTestCase,
    path: &Result<Path, SearchError>,
) -> Result<(), String> {
    let ShortestPathRequest { source, target } = test_case.request;

    let path = match (path, test_case.distance) {
        (Err(SearchError::Unreachable { .. }), None) => return Ok(()),
        (Ok(path), Some(distance)) => {
            if path.distance != distance {
                return Err(format!(
                    "wrong path distance {} instead of {}",
                    path.distance, distance
                ));
            }
            path
        }
        (Ok(_), None) => return Err("found a path where none should exist".to_string()),
        (Err(error), _) => return Err(format!("search failed: {}", error)),
    };

    // Ensure first and last vertex of path are source and target of request.
    if path.vertices.first() != Some(&source) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.vertices.last() != Some(&target) {
        return Err("last vertex of path is not target of request".to_string());
    }

    // Check that consecutive vertices are connected and the weights add up.
    let mut distance: Distance = 0;
    for (&tail, &head) in path.vertices.iter().tuple_windows() {
        let weight = graph
            .edges(tail)
            .filter(|edge| edge.head == head)
            .map(|edge| edge.weight)
            .min()
            .ok_or_else(|| format!("there is no edge from {} to {}", tail, head))?;
        distance = distance.saturating_add(weight);
    }
    if distance != path.distance {
        return Err(format!(
            "edge weights add up to {} instead of {}",
            distance, path.distance
        ));
    }

    Ok(())
}
