use std::{error::Error, path::PathBuf, time::Instant};

use clap::Parser;
use frontier_paths::graphs::{read_graph, write_graph};

/// Reading a .bincode file is way faster than a text edge list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph as text edge list, `.json` or `.bincode`
    #[arg(short, long)]
    input: PathBuf,
    /// Output, `.json` or `.bincode`
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let graph = read_graph(&args.input)?;
    println!("Reading graph took {:?}", start.elapsed());

    let start = Instant::now();
    write_graph(&graph, &args.output)?;
    println!("Writing graph took {:?}", start.elapsed());

    Ok(())
}
