use std::sync::atomic::{AtomicBool, Ordering};

use ahash::HashMap;
use serde::{Deserialize, Serialize};

use crate::{
    graphs::{adjacency::Adjacency, Cost},
    heuristics::Heuristic,
    metrics::Metric,
};

pub mod astar;
pub mod dijkstra;
pub mod frontier;

/// A path through the graph and its total cost under the chosen metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub cost: Cost,
    pub nodes: Vec<String>,
}

/// Result of one search.
///
/// Unreachable and cancelled are distinct outcomes, not errors: a goal with
/// no path and a caller pulling the plug both end a search in an orderly
/// way.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOutcome {
    Found(Route),
    Unreachable,
    Cancelled,
}

impl SearchOutcome {
    /// Total cost, infinite when no route was produced.
    pub fn cost(&self) -> Cost {
        match self {
            SearchOutcome::Found(route) => route.cost,
            SearchOutcome::Unreachable | SearchOutcome::Cancelled => Cost::INFINITY,
        }
    }

    /// The node sequence, empty when no route was produced.
    pub fn nodes(&self) -> &[String] {
        match self {
            SearchOutcome::Found(route) => &route.nodes,
            SearchOutcome::Unreachable | SearchOutcome::Cancelled => &[],
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::Unreachable | SearchOutcome::Cancelled => None,
        }
    }
}

/// Cooperative cancellation flag, checked once per frontier extraction.
/// Share it across threads behind an `Arc` and trigger it from anywhere.
#[derive(Debug, Default)]
pub struct AbortSignal {
    aborted: AtomicBool,
}

impl AbortSignal {
    pub fn new() -> Self {
        AbortSignal {
            aborted: AtomicBool::new(false),
        }
    }

    pub fn abort(&self) {
        self.aborted.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Relaxed)
    }
}

/// Minimum-cost path from `start` to `goal` under `metric`, by uninformed
/// label-correcting search.
pub fn search<'a>(
    adjacency: &'a Adjacency,
    start: &'a str,
    goal: &'a str,
    metric: Metric,
) -> SearchOutcome {
    dijkstra::run(adjacency, start, goal, &metric, None)
}

/// Like [`search`], guided by a heuristic estimate of the remaining cost.
///
/// Optimality holds only for heuristics that never overestimate the true
/// remaining cost under `metric`; nothing validates that, and an
/// overestimating heuristic still terminates with some route.
pub fn search_with_heuristic<'a>(
    adjacency: &'a Adjacency,
    start: &'a str,
    goal: &'a str,
    metric: Metric,
    heuristic: &dyn Heuristic,
) -> SearchOutcome {
    astar::run(adjacency, start, goal, &metric, heuristic, None)
}

/// Backtracks predecessor links from the goal and reverses, so the path is
/// materialized exactly once instead of cloned into every frontier entry.
fn reconstruct(predecessors: &HashMap<&str, &str>, goal: &str, cost: Cost) -> Route {
    let mut nodes = vec![goal.to_string()];

    let mut current = goal;
    while let Some(&predecessor) = predecessors.get(current) {
        current = predecessor;
        nodes.push(current.to_string());
    }
    nodes.reverse();

    Route { cost, nodes }
}
