use std::collections::VecDeque;

use ahash::HashSet;

use super::{adjacency::Adjacency, edge::EdgeRecord, NodeIndex};

/// Data-quality audit over loaded route data.
///
/// Returns human-readable findings instead of failing: the search core is
/// permissive by contract, so callers decide whether a finding is fatal.
pub fn audit(nodes: &NodeIndex, edges: &[EdgeRecord], adjacency: &Adjacency) -> Vec<String> {
    let mut findings = Vec::new();

    for edge in edges {
        if nodes.get(&edge.source).is_none() {
            findings.push(format!(
                "edge references missing source node: {}",
                edge.source
            ));
        }
        if nodes.get(&edge.target).is_none() {
            findings.push(format!(
                "edge references missing target node: {}",
                edge.target
            ));
        }
        if edge.distance_km < 0.0 {
            findings.push(format!(
                "negative distance on {} -> {} ({})",
                edge.source, edge.target, edge.mode
            ));
        }
        if edge.time_min < 0.0 {
            findings.push(format!(
                "negative time on {} -> {} ({})",
                edge.source, edge.target, edge.mode
            ));
        }
        if edge.cost_usd < 0.0 {
            findings.push(format!(
                "negative cost on {} -> {} ({})",
                edge.source, edge.target, edge.mode
            ));
        }
        if edge.emission_kgco2 < 0.0 {
            findings.push(format!(
                "negative emission on {} -> {} ({})",
                edge.source, edge.target, edge.mode
            ));
        }
        if !(0.0..=1.0).contains(&edge.safety_score) {
            findings.push(format!(
                "safety score outside [0,1] on {} -> {} ({})",
                edge.source, edge.target, edge.mode
            ));
        }
    }

    if let Some(finding) = connectivity_probe(nodes, adjacency) {
        findings.push(finding);
    }

    findings
}

/// BFS from an arbitrary node; flags graphs where fewer than half of the
/// known nodes are reachable, a common symptom of mismatched city names.
fn connectivity_probe(nodes: &NodeIndex, adjacency: &Adjacency) -> Option<String> {
    let start = nodes.cities().next()?;

    let mut visited = HashSet::default();
    visited.insert(start);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for edge in adjacency.neighbors(node) {
            if visited.insert(edge.target.as_str()) {
                queue.push_back(edge.target.as_str());
            }
        }
    }

    if visited.len() < (nodes.len() / 2).max(1) {
        return Some(format!(
            "graph appears sparsely connected ({} of {} nodes reachable)",
            visited.len(),
            nodes.len()
        ));
    }

    None
}
