//! History reduction and load progression.
//!
//! Everything here is pure and synchronous; callers fetch history first.

pub mod counting;
pub mod policy;
pub mod snapshot;

pub use counting::{assign_counts, merge_day, ExecutionCounter};
pub use policy::{decide, LoadDecision, PROGRESSION_INTERVAL, WEIGHT_INCREMENT};
pub use snapshot::{build_snapshot, ExerciseHistorySnapshot, Snapshot};
