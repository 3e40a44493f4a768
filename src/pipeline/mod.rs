/*! Run orchestration.

Owns all cross-comment state: merged candidate lists, dedup sets and
the run counters.
!*/
mod clean;
mod stats;

pub use clean::CleaningPipeline;
pub use stats::RunStats;
