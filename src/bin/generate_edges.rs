use std::path::PathBuf;

use clap::Parser;
use transit_paths::graphs::{
    generate::{self, TRANSPORT_MODES},
    loader,
};

/// Synthesizes an edge CSV from a node CSV
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Node CSV (city, country, lat, lon)
    #[arg(short, long)]
    nodes: PathBuf,

    /// Output edge CSV
    #[arg(short, long)]
    out: PathBuf,

    /// Connect every pair of cities
    #[arg(long, conflicts_with = "knn", required_unless_present = "knn")]
    full: bool,

    /// Connect each city to its K nearest neighbors instead
    #[arg(long, value_name = "K")]
    knn: Option<usize>,
}

fn main() {
    let args = Args::parse();
    env_logger::init();

    let nodes = loader::load_nodes(&args.nodes).unwrap();
    let edges = match args.knn {
        Some(k) => generate::k_nearest_graph(&nodes, k, &TRANSPORT_MODES),
        None => generate::full_graph(&nodes, &TRANSPORT_MODES),
    };

    let mut writer = csv::Writer::from_path(&args.out).unwrap();
    for edge in &edges {
        writer.serialize(edge).unwrap();
    }
    writer.flush().unwrap();

    println!("wrote {} edges for {} cities", edges.len(), nodes.len());
}
