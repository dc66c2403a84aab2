use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{AppError, Result};
use crate::models::{DayRecord, RawExerciseResult, TimelineBlock, WorkoutSettings, WorkoutTemplate};
use crate::progression::{assign_counts, build_snapshot, merge_day, Snapshot};
use crate::repositories::{DiaryRepository, DiaryStore};
use crate::timeline;

type DateLocks = Arc<Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>>;

/// Session history: progression snapshots before a workout, counted and merged
/// day records after it.
#[derive(Clone)]
pub struct DiaryService<S = DiaryRepository> {
    store: S,
    locks: DateLocks,
}

impl<S: DiaryStore> DiaryService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Full history, newest first. A failed read yields an empty history so
    /// every exercise is treated as never performed.
    pub async fn history(&self) -> Vec<DayRecord> {
        match self.store.list().await {
            Ok(history) => history,
            Err(e) => {
                tracing::error!("Failed to read workout history: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn snapshot(&self) -> Snapshot {
        let snapshot = build_snapshot(&self.history().await);
        tracing::debug!("Snapshot loaded with {} exercises", snapshot.len());
        snapshot
    }

    pub async fn compile_timeline(
        &self,
        template: &WorkoutTemplate,
        settings: &WorkoutSettings,
    ) -> Vec<TimelineBlock> {
        let snapshot = self.snapshot().await;
        timeline::compile(template, settings, &snapshot)
    }

    /// Count, merge and persist one session's results for `date`.
    ///
    /// Counts come only from other dates, so re-saving a day does not inflate them.
    /// Saves for the same date are serialized for the whole read-modify-write.
    pub async fn save(&self, date: &str, results: Vec<RawExerciseResult>) -> Result<DayRecord> {
        let lock = self.date_lock(date)?;
        let outcome = {
            let _guard = lock.lock().await;
            self.save_locked(date, results).await
        };
        drop(lock);
        self.release_date_lock(date);

        match outcome {
            Ok(record) => {
                tracing::info!(
                    "Saved workout for {} ({} exercises)",
                    record.date,
                    record.exercises_count
                );
                Ok(record)
            }
            Err(e) => {
                tracing::error!("Failed to save workout for {}: {}", date, e);
                Err(e)
            }
        }
    }

    async fn save_locked(
        &self,
        date: &str,
        results: Vec<RawExerciseResult>,
    ) -> Result<DayRecord> {
        let past: Vec<DayRecord> = self
            .history()
            .await
            .into_iter()
            .filter(|day| day.date != date)
            .collect();
        let counted = assign_counts(results, &past);

        // The stored day is read separately so a failed history read cannot drop it.
        let today = self.store.find_day(date).await?;
        let record = merge_day(date, today.as_ref(), counted);

        let payload = self
            .store
            .find_payload(date)
            .await?
            .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));
        self.store.upsert(&record, payload).await?;

        Ok(record)
    }

    fn date_lock(&self, date: &str) -> Result<Arc<tokio::sync::Mutex<()>>> {
        let mut locks = self
            .locks
            .lock()
            .map_err(|_| AppError::Internal("date lock table poisoned".to_string()))?;
        Ok(locks.entry(date.to_string()).or_default().clone())
    }

    /// Drop the table entry once no other save holds or awaits it.
    fn release_date_lock(&self, date: &str) {
        if let Ok(mut locks) = self.locks.lock() {
            if locks
                .get(date)
                .is_some_and(|lock| Arc::strong_count(lock) == 1)
            {
                locks.remove(date);
            }
        }
    }

    #[cfg(test)]
    fn tracked_dates(&self) -> usize {
        self.locks.lock().map(|l| l.len()).unwrap_or(0)
    }
}
