use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter},
    path::Path,
};

use indicatif::ProgressIterator;
use log::info;
use serde::{Deserialize, Serialize};

pub mod adjacency_list_graph;

use adjacency_list_graph::AdjacencyListGraph;

pub type Vertex = u32;
pub type Distance = u32;

/// Distance of a vertex that has not been reached (yet).
pub const INFINITY: Distance = Distance::MAX;

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {number_of_vertices} vertices")]
    VertexOutOfRange {
        vertex: Vertex,
        number_of_vertices: u32,
    },

    #[error("unable to read graph file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed line {line_number}: {line:?}")]
    Parse { line_number: usize, line: String },

    #[error("graph file ends before the vertex and edge counts")]
    MissingHeader,

    #[error("expected {expected} edges, found {found}")]
    EdgeCount { expected: u32, found: usize },

    #[error("{number_of_vertices} vertices exceed the supported maximum of {max}")]
    TooManyVertices { number_of_vertices: u32, max: u32 },

    #[error("invalid json graph: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid bincode graph: {0}")]
    Bincode(#[from] bincode::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: Vertex,
    pub head: Vertex,
    pub weight: Distance,
}

impl WeightedEdge {
    pub fn new(tail: Vertex, head: Vertex, weight: Distance) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn remove_tail(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: Vertex,
    pub weight: Distance,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: Vertex) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.edges(vertex).len() as u32)
            .sum::<u32>()
    }

    /// Outgoing edges of `tail`. Empty for vertices outside the graph.
    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    fn contains(&self, vertex: Vertex) -> bool {
        vertex < self.number_of_vertices()
    }
}

/// Reads edges from a plain text file.
///
/// The file starts with optional `#` comment lines, followed by the number
/// of vertices and the number of edges on one line each. Every following
/// line holds one edge as `tail head weight`.
pub fn read_edges_from_file(file: &Path) -> Result<(u32, Vec<WeightedEdge>), GraphError> {
    let reader = BufReader::new(File::open(file)?);
    read_edges(reader)
}

pub fn read_edges(reader: impl BufRead) -> Result<(u32, Vec<WeightedEdge>), GraphError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(index, line)| line.map(|line| (index + 1, line)))
        .filter(|line| match line {
            Ok((_, line)) => !line.starts_with('#') && !line.trim().is_empty(),
            Err(_) => true,
        });

    let mut next_count = || -> Result<u32, GraphError> {
        let (line_number, line) = lines.next().ok_or(GraphError::MissingHeader)??;
        line.trim()
            .parse()
            .map_err(|_| GraphError::Parse { line_number, line })
    };
    let number_of_vertices = next_count()?;
    let number_of_edges = next_count()?;
    if number_of_vertices > AdjacencyListGraph::MAX_VERTICES {
        return Err(GraphError::TooManyVertices {
            number_of_vertices,
            max: AdjacencyListGraph::MAX_VERTICES,
        });
    }

    let edges = lines
        .take(number_of_edges as usize)
        .progress_count(number_of_edges as u64)
        .map(|line| {
            let (line_number, line) = line?;
            parse_edge_line(&line).ok_or(GraphError::Parse { line_number, line })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if edges.len() != number_of_edges as usize {
        return Err(GraphError::EdgeCount {
            expected: number_of_edges,
            found: edges.len(),
        });
    }

    Ok((number_of_vertices, edges))
}

fn parse_edge_line(line: &str) -> Option<WeightedEdge> {
    // tail head weight
    let mut values = line.split_whitespace();
    let tail = values.next()?.parse().ok()?;
    let head = values.next()?.parse().ok()?;
    let weight = values.next()?.parse().ok()?;
    Some(WeightedEdge { tail, head, weight })
}

/// Loads a graph, choosing the format by file extension: `.json` and
/// `.bincode` are serialized graphs, everything else is read as text.
pub fn read_graph(path: &Path) -> Result<AdjacencyListGraph, GraphError> {
    info!("Reading graph from {}", path.display());
    let extension = path.extension().and_then(|extension| extension.to_str());
    let graph: AdjacencyListGraph = match extension {
        Some("json") => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        Some("bincode") => bincode::deserialize_from(BufReader::new(File::open(path)?))?,
        _ => {
            let (number_of_vertices, edges) = read_edges_from_file(path)?;
            AdjacencyListGraph::from_edges(number_of_vertices, &edges)?
        }
    };
    info!(
        "Graph has {} vertices and {} edges",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );
    Ok(graph)
}

pub fn write_graph(graph: &AdjacencyListGraph, path: &Path) -> Result<(), GraphError> {
    let writer = BufWriter::new(File::create(path)?);
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("json") => serde_json::to_writer(writer, graph)?,
        _ => bincode::serialize_into(writer, graph)?,
    }
    Ok(())
}
