use std::collections::HashMap;

use serde::Serialize;

use crate::models::{DayRecord, FinishedExerciseData};

/// Most recent result and baseline weight for one exercise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseHistorySnapshot {
    pub last: FinishedExerciseData,
    /// Weight of the oldest non-skipped occurrence.
    pub start_weight: f64,
}

/// Exercise name -> snapshot.
pub type Snapshot = HashMap<String, ExerciseHistorySnapshot>;

/// Reduce history (newest first) to one snapshot per exercise name.
///
/// The first non-skipped entry seen for a name is the newest and becomes `last`.
/// Every later (older) entry overwrites `start_weight`, so the loop leaves the
/// oldest weight behind. Skipped entries are ignored entirely.
pub fn build_snapshot(history: &[DayRecord]) -> Snapshot {
    let mut snapshot = Snapshot::new();

    for exercise in history
        .iter()
        .flat_map(|day| day.exercises.iter())
        .filter(|ex| !ex.skipped)
    {
        snapshot
            .entry(exercise.name.clone())
            .and_modify(|entry| entry.start_weight = exercise.weight)
            .or_insert_with(|| ExerciseHistorySnapshot {
                last: exercise.clone(),
                start_weight: exercise.weight,
            });
    }

    snapshot
}
