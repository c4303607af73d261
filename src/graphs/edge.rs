use serde::{Deserialize, Serialize};

use super::Cost;

/// A directed arc of the transport multigraph.
///
/// Several records may connect the same (source, target) pair, one per
/// transport mode, each with its own magnitudes. They stay distinct arcs
/// throughout; nothing ever merges or deduplicates them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub mode: String,
    pub distance_km: Cost,
    pub time_min: Cost,
    pub cost_usd: Cost,
    pub emission_kgco2: Cost,
    /// In [0,1], higher is safer. Validated by the audit, not here.
    pub safety_score: f64,
    pub accessible: bool,
}

impl EdgeRecord {
    /// The same arc traversed in the opposite direction.
    pub fn reversed(&self) -> EdgeRecord {
        EdgeRecord {
            source: self.target.clone(),
            target: self.source.clone(),
            ..self.clone()
        }
    }
}
