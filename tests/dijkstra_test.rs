use frontier_paths::{
    graphs::{adjacency_list_graph::example_graph, Distance, Graph, Vertex, INFINITY},
    queue::FrontierKind,
    search::{dijkstra::Dijkstra, PathFinding, SearchError},
    utility::{format_path, generate_test_cases, random_graph, random_requests, validate_path},
};
use rand::{rngs::StdRng, SeedableRng};

/// Distances from `source` by repeated relaxation of every edge.
fn bellman_ford(graph: &dyn Graph, source: Vertex) -> Vec<Distance> {
    let mut distances = vec![INFINITY; graph.number_of_vertices() as usize];
    distances[source as usize] = 0;

    for _ in 0..graph.number_of_vertices() {
        let mut changed = false;
        for tail in 0..graph.number_of_vertices() {
            if distances[tail as usize] == INFINITY {
                continue;
            }
            for edge in graph.edges(tail) {
                let alternative = distances[tail as usize] + edge.weight;
                if alternative < distances[edge.head as usize] {
                    distances[edge.head as usize] = alternative;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    distances
}

#[test]
fn example_graph_paths() {
    let graph = example_graph();

    for frontier in FrontierKind::ALL {
        let dijkstra = Dijkstra::with_frontier(&graph, frontier);
        let path = dijkstra.shortest_path(0, 5).unwrap();
        assert_eq!(format_path(&path), "0->1->3->2->5");
        assert_eq!(path.distance, 18);

        assert_eq!(dijkstra.shortest_path_distance(0, 4), Ok(15));
        assert_eq!(
            dijkstra.shortest_path(5, 0),
            Err(SearchError::Unreachable { from: 5, to: 0 })
        );
    }
}

#[test]
fn frontiers_match_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..10 {
        let graph = random_graph(&mut rng, 60, 180, 20);
        let expected = bellman_ford(&graph, 0);

        for frontier in FrontierKind::ALL {
            let data = Dijkstra::with_frontier(&graph, frontier)
                .single_source(0)
                .unwrap();
            assert_eq!(data.distances(), expected.as_slice(), "{}", frontier.name());
        }
    }
}

#[test]
fn frontiers_agree_on_random_queries() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = random_graph(&mut rng, 300, 900, 50);
    let requests = random_requests(&mut rng, &graph, 200);
    let test_cases = generate_test_cases(&graph, &requests).unwrap();

    assert!(test_cases.iter().any(|test_case| test_case.distance.is_some()));

    for frontier in FrontierKind::ALL {
        let dijkstra = Dijkstra::with_frontier(&graph, frontier);
        for test_case in &test_cases {
            let path = dijkstra.shortest_path(test_case.request.source, test_case.request.target);
            assert_eq!(
                validate_path(&graph, test_case, &path),
                Ok(()),
                "{} frontier on {:?}",
                frontier.name(),
                test_case.request
            );
        }
    }
}
