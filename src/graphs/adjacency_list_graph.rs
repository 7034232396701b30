use serde::{Deserialize, Serialize};

use super::{Distance, Graph, GraphError, TaillessEdge, Vertex, WeightedEdge};

/// Directed graph stored as one vector of outgoing edges per vertex.
///
/// Parallel edges and self loops are kept as they are added.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AdjacencyListGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

impl AdjacencyListGraph {
    /// Largest vertex count accepted from untrusted input such as graph files.
    pub const MAX_VERTICES: u32 = 1 << 27;

    pub fn new(number_of_vertices: u32) -> AdjacencyListGraph {
        AdjacencyListGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    /// Like `new`, but reports vertex counts above `MAX_VERTICES` or a failed
    /// allocation as an error instead of aborting.
    pub fn try_new(number_of_vertices: u32) -> Result<AdjacencyListGraph, GraphError> {
        let too_many = GraphError::TooManyVertices {
            number_of_vertices,
            max: Self::MAX_VERTICES,
        };
        if number_of_vertices > Self::MAX_VERTICES {
            return Err(too_many);
        }

        let mut edges = Vec::new();
        edges
            .try_reserve_exact(number_of_vertices as usize)
            .map_err(|_| too_many)?;
        edges.resize_with(number_of_vertices as usize, Vec::new);
        Ok(AdjacencyListGraph { edges })
    }

    pub fn from_edges(
        number_of_vertices: u32,
        edges: &[WeightedEdge],
    ) -> Result<AdjacencyListGraph, GraphError> {
        let mut graph = AdjacencyListGraph::try_new(number_of_vertices)?;
        for edge in edges {
            graph.add_edge(edge.tail, edge.head, edge.weight)?;
        }
        Ok(graph)
    }

    pub fn add_edge(
        &mut self,
        tail: Vertex,
        head: Vertex,
        weight: Distance,
    ) -> Result<(), GraphError> {
        for vertex in [tail, head] {
            if !self.contains(vertex) {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    number_of_vertices: self.number_of_vertices(),
                });
            }
        }

        self.edges[tail as usize].push(TaillessEdge { head, weight });
        Ok(())
    }

    pub fn all_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        (0..self.number_of_vertices()).flat_map(move |tail| self.edges(tail))
    }
}

impl Graph for AdjacencyListGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // Define a struct for iterating over edges with the same tail. Struct is needed
        // as tail would otherwise not live long enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: Vertex,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_iter.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        let edges: &[TaillessEdge] = self
            .edges
            .get(tail as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        Box::new(EdgeIterator {
            edge_iter: edges.iter(),
            tail,
        })
    }
}

/// The six vertex graph used to demonstrate the frontier strategies.
///
/// The shortest path from 0 to 5 is `0 -> 1 -> 3 -> 2 -> 5` with distance 18.
pub fn example_graph() -> AdjacencyListGraph {
    let edges = [
        WeightedEdge::new(0, 1, 10),
        WeightedEdge::new(0, 4, 15),
        WeightedEdge::new(1, 2, 15),
        WeightedEdge::new(1, 3, 2),
        WeightedEdge::new(2, 5, 5),
        WeightedEdge::new(3, 2, 1),
        WeightedEdge::new(3, 5, 12),
        WeightedEdge::new(4, 5, 10),
    ];

    let mut graph = AdjacencyListGraph::new(6);
    for edge in edges {
        graph.edges[edge.tail as usize].push(edge.remove_tail());
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_rejects_unknown_vertices() {
        let mut graph = AdjacencyListGraph::new(3);

        assert!(graph.add_edge(0, 2, 1).is_ok());
        assert!(matches!(
            graph.add_edge(0, 3, 1),
            Err(GraphError::VertexOutOfRange { vertex: 3, .. })
        ));
        assert!(matches!(
            graph.add_edge(7, 0, 1),
            Err(GraphError::VertexOutOfRange { vertex: 7, .. })
        ));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn try_new_rejects_huge_vertex_counts() {
        assert!(matches!(
            AdjacencyListGraph::try_new(u32::MAX),
            Err(GraphError::TooManyVertices {
                number_of_vertices: u32::MAX,
                max: AdjacencyListGraph::MAX_VERTICES
            })
        ));
        assert!(matches!(
            AdjacencyListGraph::from_edges(3_000_000_000, &[]),
            Err(GraphError::TooManyVertices { .. })
        ));

        let graph = AdjacencyListGraph::try_new(4).unwrap();
        assert_eq!(graph.number_of_vertices(), 4);
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn keeps_parallel_edges() {
        let mut graph = AdjacencyListGraph::new(2);
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(0, 1, 3).unwrap();

        let weights: Vec<_> = graph.edges(0).map(|edge| edge.weight).collect();
        assert_eq!(weights, vec![5, 3]);
        assert_eq!(graph.edges(1).len(), 0);
        assert_eq!(graph.edges(9).len(), 0);
    }

    #[test]
    fn example_graph_shape() {
        let graph = example_graph();

        assert_eq!(graph.number_of_vertices(), 6);
        assert_eq!(graph.number_of_edges(), 8);
        assert_eq!(graph.all_edges().count(), 8);
    }
}
