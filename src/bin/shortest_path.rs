use std::{error::Error, path::PathBuf, time::Instant};

use clap::Parser;
use frontier_paths::{
    graphs::{adjacency_list_graph::example_graph, read_graph, Graph, Vertex},
    queue::FrontierKind,
    search::{dijkstra::dijkstra_one_to_one, SearchError},
    utility::format_path,
};
use log::info;

/// Answers a single shortest path query, once per frontier kind.
///
/// Without a graph the six vertex example graph is used.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph as text edge list, `.json` or `.bincode`
    #[arg(short, long)]
    graph: Option<PathBuf>,

    #[arg(short, long, default_value_t = 0)]
    source: Vertex,

    #[arg(short, long, default_value_t = 5)]
    target: Vertex,

    /// Frontier to use, all of them if omitted
    #[arg(short, long, value_enum)]
    frontier: Option<FrontierKind>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let graph = match &args.graph {
        Some(path) => read_graph(path)?,
        None => example_graph(),
    };

    let frontiers = match args.frontier {
        Some(frontier) => vec![frontier],
        None => FrontierKind::ALL.to_vec(),
    };

    for frontier in frontiers {
        info!("Searching with the {} frontier", frontier.name());
        let mut queue = frontier.new_queue(graph.number_of_vertices());

        let start = Instant::now();
        let data = dijkstra_one_to_one(&graph, queue.as_mut(), args.source, args.target)?;
        let duration = start.elapsed();

        println!("{}", frontier.name());
        match data.get_path(args.target) {
            Some(path) => {
                println!("{}", format_path(&path));
                println!("{}->{}: {}", data.source(), args.target, path.distance);
            }
            None => println!(
                "{}",
                SearchError::Unreachable {
                    from: data.source(),
                    to: args.target
                }
            ),
        }
        println!(
            "expanded {} vertices in {:?}, {} entries left in the frontier",
            data.number_of_expanded(),
            duration,
            queue.len()
        );
    }

    Ok(())
}
