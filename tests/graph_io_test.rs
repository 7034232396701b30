use std::{fs, path::PathBuf};

use frontier_paths::{
    graphs::{
        adjacency_list_graph::example_graph, read_graph, write_graph, Graph, GraphError,
    },
    search::{dijkstra::Dijkstra, PathFinding},
};

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("frontier_paths_{}_{}", std::process::id(), name))
}

#[test]
fn reads_text_graph() {
    let path = temp_file("example.txt");
    fs::write(
        &path,
        "# example graph\n6\n8\n0 1 10\n0 4 15\n1 2 15\n1 3 2\n2 5 5\n3 2 1\n3 5 12\n4 5 10\n",
    )
    .unwrap();

    let graph = read_graph(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(graph.number_of_vertices(), 6);
    assert_eq!(graph.number_of_edges(), 8);
    assert_eq!(Dijkstra::new(&graph).shortest_path_distance(0, 5), Ok(18));
}

#[test]
fn text_graph_with_unknown_vertex() {
    let path = temp_file("broken.txt");
    fs::write(&path, "2\n1\n0 2 1\n").unwrap();

    let result = read_graph(&path);
    fs::remove_file(&path).unwrap();

    assert!(matches!(
        result,
        Err(GraphError::VertexOutOfRange { vertex: 2, .. })
    ));
}

#[test]
fn serialized_graphs_keep_their_edges() {
    let graph = example_graph();

    for name in ["example.json", "example.bincode"] {
        let path = temp_file(name);
        write_graph(&graph, &path).unwrap();
        let read = read_graph(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(read.all_edges().collect::<Vec<_>>(), graph.all_edges().collect::<Vec<_>>());
    }
}

#[test]
fn missing_file() {
    assert!(matches!(
        read_graph(&temp_file("does_not_exist.txt")),
        Err(GraphError::Io(_))
    ));
}

#[test]
fn text_graph_with_huge_vertex_count() {
    let path = temp_file("huge.txt");
    fs::write(&path, "3000000000\n0\n").unwrap();

    let result = read_graph(&path);
    fs::remove_file(&path).unwrap();

    assert!(matches!(
        result,
        Err(GraphError::TooManyVertices {
            number_of_vertices: 3_000_000_000,
            ..
        })
    ));
}

#[test]
fn text_graph_with_too_few_edges() {
    let path = temp_file("short.txt");
    fs::write(&path, "# two edges promised\n3\n2\n0 1 4\n").unwrap();

    let result = read_graph(&path);
    fs::remove_file(&path).unwrap();

    assert!(matches!(
        result,
        Err(GraphError::EdgeCount {
            expected: 2,
            found: 1
        })
    ));
}
