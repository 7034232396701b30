use std::{
    error::Error,
    fs::File,
    io::BufWriter,
    path::PathBuf,
    time::{Duration, Instant},
};

use clap::Parser;
use frontier_paths::{
    graphs::{write_graph, Graph},
    queue::FrontierKind,
    search::{dijkstra::Dijkstra, PathFinding, ShortestPathTestCase},
    utility::{generate_test_cases, get_progressbar, random_graph, random_requests, validate_path},
};
use indicatif::ParallelProgressIterator;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

/// Runs random queries on a random graph with every frontier kind, checks
/// that all of them agree and reports their average query time.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short = 'n', long, default_value_t = 10_000)]
    number_of_vertices: u32,

    #[arg(short = 'm', long, default_value_t = 50_000)]
    number_of_edges: u32,

    #[arg(short = 'w', long, default_value_t = 100)]
    max_weight: u32,

    /// Number of queries per frontier
    #[arg(short, long, default_value_t = 1_000)]
    queries: u32,

    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Where to save the generated graph (`.json` or `.bincode`)
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Where to save the generated test cases as json
    #[arg(short, long)]
    test_cases: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    info!(
        "Generating graph with {} vertices and {} edges",
        args.number_of_vertices, args.number_of_edges
    );
    let graph = random_graph(
        &mut rng,
        args.number_of_vertices,
        args.number_of_edges,
        args.max_weight,
    );
    if let Some(path) = &args.graph {
        write_graph(&graph, path)?;
    }

    let requests = random_requests(&mut rng, &graph, args.queries);
    let test_cases = generate_test_cases(&graph, &requests)?;
    if let Some(path) = &args.test_cases {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(writer, &test_cases)?;
    }

    for frontier in FrontierKind::ALL {
        let dijkstra = Dijkstra::with_frontier(&graph, frontier);
        let average = benchmark_and_validate(&graph, &dijkstra, &test_cases)?;
        println!("{:>12}: {:?} per query", frontier.name(), average);
    }

    Ok(())
}

fn benchmark_and_validate(
    graph: &dyn Graph,
    dijkstra: &Dijkstra,
    test_cases: &[ShortestPathTestCase],
) -> Result<Duration, String> {
    let frontier = dijkstra.frontier();
    let pb = get_progressbar(frontier.name(), test_cases.len() as u64);

    let durations = test_cases
        .par_iter()
        .progress_with(pb)
        .map(|test_case| {
            let start = Instant::now();
            let path = dijkstra.shortest_path(test_case.request.source, test_case.request.target);
            let duration = start.elapsed();

            validate_path(graph, test_case, &path)
                .map_err(|error| format!("{} frontier: {}", frontier.name(), error))?;
            Ok(duration)
        })
        .collect::<Result<Vec<_>, String>>()?;

    if durations.is_empty() {
        return Ok(Duration::ZERO);
    }
    Ok(durations.iter().sum::<Duration>() / durations.len() as u32)
}
