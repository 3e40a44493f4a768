//! Run-level counters.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::DropReason;
use crate::sources::Source;

/// Monotonic counter map accumulated over one cleaning run: totals per
/// source, kept/dropped totals, per-reason drop counts, duplicate
/// removals, final per-source counts.
///
/// Created empty at run start, mutated only by the pipeline, read once
/// at run end for reporting.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RunStats {
    counters: BTreeMap<String, u64>,
}

impl RunStats {
    pub fn incr(&mut self, name: &str) {
        self.add(name, 1);
    }

    pub fn add(&mut self, name: &str, count: u64) {
        *self.counters.entry(name.to_string()).or_insert(0) += count;
    }

    pub fn incr_source_total(&mut self, source: Source) {
        self.incr(&format!("total_{}", source));
    }

    pub fn incr_source_final(&mut self, source: Source) {
        self.incr(&format!("final_{}", source));
    }

    pub fn incr_drop(&mut self, reason: DropReason) {
        self.incr("dropped");
        self.incr(&format!("dropped_{}", reason));
    }

    /// Count for a name, zero when never touched.
    pub fn get(&self, name: &str) -> u64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    /// Counters in stable (alphabetical) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counters.iter().map(|(name, count)| (name.as_str(), *count))
    }
}
