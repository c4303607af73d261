use std::collections::BinaryHeap;

use ahash::{HashMap, HashSet};
use ordered_float::OrderedFloat;

use super::{frontier::FrontierEntry, reconstruct, AbortSignal, SearchOutcome};
use crate::{
    graphs::{adjacency::Adjacency, Cost},
    heuristics::Heuristic,
    metrics::WeightPolicy,
};

/// Heuristic-guided search, same frontier discipline as
/// [`dijkstra::run`](super::dijkstra::run) but ordered by
/// `f = g + heuristic(node, goal)` while `g` tracks true accumulated cost.
///
/// A zero heuristic makes this identical to the uninformed search. A
/// heuristic that overestimates the remaining cost under the active metric
/// forfeits optimality but never termination.
pub fn run<'a>(
    adjacency: &'a Adjacency,
    start: &'a str,
    goal: &'a str,
    policy: &dyn WeightPolicy,
    heuristic: &dyn Heuristic,
    abort: Option<&AbortSignal>,
) -> SearchOutcome {
    let mut distances: HashMap<&'a str, Cost> = HashMap::default();
    let mut predecessors: HashMap<&'a str, &'a str> = HashMap::default();
    let mut expanded: HashSet<&'a str> = HashSet::default();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0;

    distances.insert(start, 0.0);
    frontier.push(FrontierEntry {
        priority: OrderedFloat(heuristic.estimate(start, goal)),
        seq,
        node: start,
    });

    while let Some(FrontierEntry { node, .. }) = frontier.pop() {
        if abort.is_some_and(AbortSignal::is_aborted) {
            return SearchOutcome::Cancelled;
        }
        if !expanded.insert(node) {
            continue;
        }
        if node == goal {
            return SearchOutcome::Found(reconstruct(&predecessors, goal, distances[node]));
        }

        let distance_node = distances[node];
        for edge in adjacency.neighbors(node) {
            let neighbor = edge.target.as_str();
            if expanded.contains(neighbor) {
                continue;
            }
            let alternative = distance_node + policy.weight(edge);
            let current = distances.get(neighbor).copied().unwrap_or(Cost::INFINITY);
            if alternative < current {
                distances.insert(neighbor, alternative);
                predecessors.insert(neighbor, node);
                seq += 1;
                frontier.push(FrontierEntry {
                    priority: OrderedFloat(alternative + heuristic.estimate(neighbor, goal)),
                    seq,
                    node: neighbor,
                });
            }
        }
    }

    SearchOutcome::Unreachable
}
