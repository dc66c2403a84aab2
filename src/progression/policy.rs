use crate::models::SetStats;

use super::snapshot::Snapshot;

/// Added to the working weight on every `PROGRESSION_INTERVAL`-th completed execution.
pub const WEIGHT_INCREMENT: f64 = 2.5;
pub const PROGRESSION_INTERVAL: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadDecision {
    pub weight: f64,
    pub is_new: bool,
    pub stats: SetStats,
}

/// Decide next-session working weight for one exercise.
pub fn decide(exercise_name: &str, default_weight: f64, snapshot: &Snapshot) -> LoadDecision {
    let Some(entry) = snapshot.get(exercise_name) else {
        return LoadDecision {
            weight: default_weight,
            is_new: true,
            stats: SetStats { count: 1, gain: 0.0 },
        };
    };

    let last = &entry.last;

    // Skipped last time: hold the load.
    if last.skipped {
        return LoadDecision {
            weight: last.weight,
            is_new: false,
            stats: SetStats {
                count: last.total_executions_count,
                gain: (last.weight - entry.start_weight).max(0.0),
            },
        };
    }

    let count = last.total_executions_count;
    let mut next_weight = last.weight;
    if count > 0 && count % PROGRESSION_INTERVAL == 0 {
        next_weight += WEIGHT_INCREMENT;
    }

    LoadDecision {
        weight: next_weight,
        is_new: false,
        stats: SetStats {
            count: count + 1,
            gain: (next_weight - entry.start_weight).max(0.0),
        },
    }
}
