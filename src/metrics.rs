use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::graphs::{edge::EdgeRecord, Cost};

/// The criterion an edge is weighted by for one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Distance,
    Time,
    Cost,
    Eco,
    Safety,
}

impl Metric {
    /// Parses a metric name, falling back to `Distance` for anything
    /// unrecognized. The fallback is a documented contract inherited from
    /// the route data tooling, not an error case.
    pub fn parse(name: &str) -> Metric {
        match name {
            "distance" => Metric::Distance,
            "time" => Metric::Time,
            "cost" => Metric::Cost,
            "eco" => Metric::Eco,
            "safety" => Metric::Safety,
            _ => Metric::Distance,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Metric::Distance => "distance",
            Metric::Time => "time",
            Metric::Cost => "cost",
            Metric::Eco => "eco",
            Metric::Safety => "safety",
        })
    }
}

/// Maps an edge to the single scalar the frontier is ordered by.
///
/// Implementations must be pure and must return non-negative weights for
/// well-formed edges; the search relies on both.
pub trait WeightPolicy: Send + Sync {
    fn weight(&self, edge: &EdgeRecord) -> Cost;
}

impl WeightPolicy for Metric {
    fn weight(&self, edge: &EdgeRecord) -> Cost {
        match self {
            Metric::Distance => edge.distance_km,
            Metric::Time => edge.time_min,
            Metric::Cost => edge.cost_usd,
            Metric::Eco => edge.emission_kgco2,
            // Higher score means safer, so invert into a traversal penalty
            // and let the same minimizing search handle all metrics.
            Metric::Safety => 1.0 - edge.safety_score,
        }
    }
}
