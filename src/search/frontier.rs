use std::cmp::Ordering;

use ordered_float::OrderedFloat;

/// One not-yet-finalized candidate on the frontier.
///
/// `priority` is the accumulated cost for the uninformed search and
/// `g + h` for the guided one. `seq` is a monotone insertion number:
/// among equal priorities the entry pushed first pops first, which keeps
/// repeated searches over the same input byte-identical.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry<'a> {
    pub priority: OrderedFloat<f64>,
    pub seq: u64,
    pub node: &'a str,
}

// The binary heap is a max-heap, so flip the ordering on both fields to
// pop the smallest priority (and, on ties, the oldest entry) first.
impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
