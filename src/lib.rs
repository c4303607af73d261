pub mod graphs;
pub mod heuristics;
pub mod metrics;
pub mod search;
pub mod utility;

pub use crate::{
    graphs::{adjacency::Adjacency, edge::EdgeRecord, Cost, NodeIndex, NodeRecord},
    metrics::Metric,
    search::{search, search_with_heuristic, AbortSignal, Route, SearchOutcome},
};
