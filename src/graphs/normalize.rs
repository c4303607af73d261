use itertools::{Itertools, MinMaxResult};

use super::{edge::EdgeRecord, Cost};
use crate::metrics::{Metric, WeightPolicy};

/// Metrics whose magnitudes are min-max scaled. The safety penalty already
/// lives in [0,1] and passes through untouched.
const SCALED: [Metric; 4] = [Metric::Distance, Metric::Time, Metric::Cost, Metric::Eco];

/// Per-metric min-max ranges over one edge list, for comparing magnitudes
/// of incompatible units on a common [0,1] scale.
#[derive(Clone, Debug)]
pub struct MetricRanges {
    ranges: [(Cost, Cost); 4],
}

impl MetricRanges {
    pub fn from_edges(edges: &[EdgeRecord]) -> Self {
        let mut ranges = [(0.0, 1.0); 4];
        for (slot, metric) in SCALED.iter().enumerate() {
            ranges[slot] = match edges
                .iter()
                .map(|edge| metric.weight(edge))
                .minmax_by(f64::total_cmp)
            {
                MinMaxResult::NoElements => (0.0, 1.0),
                MinMaxResult::OneElement(value) => (value, value),
                MinMaxResult::MinMax(min, max) => (min, max),
            };
        }
        MetricRanges { ranges }
    }

    /// The edge's magnitude under `metric`, scaled into [0,1] relative to
    /// the edge list the ranges were built from. A degenerate range (all
    /// edges equal) scales to 0.0.
    pub fn normalized(&self, edge: &EdgeRecord, metric: Metric) -> Cost {
        let slot = match SCALED.iter().position(|scaled| *scaled == metric) {
            Some(slot) => slot,
            None => return metric.weight(edge),
        };
        let (min, max) = self.ranges[slot];
        if max == min {
            return 0.0;
        }
        (metric.weight(edge) - min) / (max - min)
    }
}
