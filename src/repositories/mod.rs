use std::future::Future;

use crate::error::Result;
use crate::models::DayRecord;

pub mod diary_repo;

pub use diary_repo::DiaryRepository;

/// Read/write access to per-day training history.
pub trait DiaryStore: Clone + Send + Sync + 'static {
    /// Every stored day, newest date first.
    fn list(&self) -> impl Future<Output = Result<Vec<DayRecord>>> + Send;

    /// The stored record for `date`. Unlike `list`, a failed read is an error: the
    /// result is merged into the next write for that date.
    fn find_day(&self, date: &str) -> impl Future<Output = Result<Option<DayRecord>>> + Send;

    /// Unrelated data co-located under `date`, if the date has a row.
    fn find_payload(
        &self,
        date: &str,
    ) -> impl Future<Output = Result<Option<serde_json::Value>>> + Send;

    /// Insert or replace the record for `record.date`, writing `payload` alongside it.
    /// Repeating the same call leaves the same state.
    fn upsert(
        &self,
        record: &DayRecord,
        payload: serde_json::Value,
    ) -> impl Future<Output = Result<()>> + Send;
}
