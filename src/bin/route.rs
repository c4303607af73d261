use std::path::PathBuf;

use clap::Parser;
use transit_paths::{
    graphs::{adjacency::Adjacency, loader, quality},
    heuristics::HaversineHeuristic,
    metrics::Metric,
    search::{search, search_with_heuristic, SearchOutcome},
    utility::get_progressspinner,
};

/// Finds a lowest-cost route between two cities
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Node CSV (city, country, lat, lon)
    #[arg(short, long)]
    nodes: PathBuf,

    /// Edge CSV (source, target, mode, metric columns)
    #[arg(short, long)]
    edges: PathBuf,

    /// Start city
    #[arg(short, long)]
    from: String,

    /// Goal city
    #[arg(short, long)]
    to: String,

    /// Metric to minimize
    #[arg(short, long, value_enum, default_value_t = Metric::Distance)]
    metric: Metric,

    /// Guide the search with the straight-line heuristic
    #[arg(long)]
    astar: bool,

    /// Treat edges as one-way instead of mirroring them
    #[arg(long)]
    directed: bool,

    /// Run the data-quality audit before searching
    #[arg(long)]
    audit: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    env_logger::init();

    let spinner = get_progressspinner("Loading route data");
    let nodes = loader::load_nodes(&args.nodes).unwrap();
    let edges = loader::load_edges(&args.edges).unwrap();
    let adjacency = Adjacency::from_edges(&edges, args.directed);
    spinner.finish_and_clear();

    if args.audit {
        for finding in quality::audit(&nodes, &edges, &adjacency) {
            eprintln!("audit: {}", finding);
        }
    }

    let outcome = if args.astar {
        let heuristic = HaversineHeuristic::new(&nodes);
        search_with_heuristic(&adjacency, &args.from, &args.to, args.metric, &heuristic)
    } else {
        search(&adjacency, &args.from, &args.to, args.metric)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome).unwrap());
        return;
    }

    match outcome {
        SearchOutcome::Found(route) => {
            println!("cost: {:.2}", route.cost);
            println!("route: {}", route.nodes.join(" -> "));
        }
        SearchOutcome::Unreachable => println!("no route from {} to {}", args.from, args.to),
        SearchOutcome::Cancelled => println!("search cancelled"),
    }
}
