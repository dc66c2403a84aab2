use std::collections::{HashMap, HashSet};

use crate::models::{DayRecord, FinishedExerciseData, RawExerciseResult};

/// Running per-name count of completed (non-skipped) executions.
#[derive(Debug, Clone, Default)]
pub struct ExecutionCounter {
    counts: HashMap<String, u32>,
}

impl ExecutionCounter {
    /// Baseline from prior days. `past` is newest first, as stored.
    pub fn from_history(past: &[DayRecord]) -> Self {
        let mut counter = Self::default();
        for exercise in past
            .iter()
            .rev()
            .flat_map(|day| day.exercises.iter())
            .filter(|ex| !ex.skipped)
        {
            *counter.counts.entry(exercise.name.clone()).or_insert(0) += 1;
        }
        counter
    }

    /// Count one result. Skipped results get 0 and leave the counter untouched;
    /// repeated names within a batch count sequentially.
    pub fn assign(&mut self, raw: RawExerciseResult) -> FinishedExerciseData {
        if raw.skipped {
            return FinishedExerciseData::from_raw(raw, 0);
        }
        let count = self.counts.entry(raw.name.clone()).or_insert(0);
        *count += 1;
        let total = *count;
        FinishedExerciseData::from_raw(raw, total)
    }
}

/// Attach `total_executions_count` to a batch of raw results using `past` as the baseline.
pub fn assign_counts(
    raw: Vec<RawExerciseResult>,
    past: &[DayRecord],
) -> Vec<FinishedExerciseData> {
    let mut counter = ExecutionCounter::from_history(past);
    raw.into_iter().map(|r| counter.assign(r)).collect()
}

/// Merge freshly counted results into whatever is already stored for the date.
///
/// Stored exercises whose name is absent from `fresh` are kept first, in their
/// stored order; every name in `fresh` replaces the stored entry.
pub fn merge_day(
    date: &str,
    existing: Option<&DayRecord>,
    fresh: Vec<FinishedExerciseData>,
) -> DayRecord {
    let mut exercises: Vec<FinishedExerciseData> = {
        let fresh_names: HashSet<&str> = fresh.iter().map(|ex| ex.name.as_str()).collect();
        existing
            .map(|day| {
                day.exercises
                    .iter()
                    .filter(|ex| !fresh_names.contains(ex.name.as_str()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    };
    exercises.extend(fresh);

    DayRecord::new(date, exercises)
}
