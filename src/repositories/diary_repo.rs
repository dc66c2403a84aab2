use chrono::Utc;
use rusqlite::OptionalExtension;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{DayRecord, DayRow, FromSqliteRow};

use super::DiaryStore;

#[derive(Clone)]
pub struct DiaryRepository {
    pool: DbPool,
}

impl DiaryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<DayRecord>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT date, day_train FROM day_records
                 WHERE day_train IS NOT NULL
                 ORDER BY date DESC",
            )?;
            let rows = DayRow::query_all(&mut stmt, [])?;

            let mut history = Vec::with_capacity(rows.len());
            for row in rows {
                let date = row.date.clone();
                match row.into_record() {
                    Ok(Some(record)) => history.push(record),
                    Ok(None) => {}
                    Err(e) => tracing::error!("Skipping unreadable day record {}: {}", date, e),
                }
            }
            Ok(history)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_date(&self, date: &str) -> Result<Option<DayRecord>> {
        let pool = self.pool.clone();
        let date = date.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let row = conn
                .query_row(
                    "SELECT date, day_train FROM day_records WHERE date = ?",
                    [&date],
                    DayRow::from_row,
                )
                .optional()?;
            match row.map(DayRow::into_record) {
                Some(Ok(record)) => Ok(record),
                Some(Err(e)) => {
                    tracing::error!("Replacing unreadable day record {}: {}", date, e);
                    Ok(None)
                }
                None => Ok(None),
            }
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_payload_by_date(&self, date: &str) -> Result<Option<serde_json::Value>> {
        let pool = self.pool.clone();
        let date = date.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let raw: Option<String> = conn
                .query_row(
                    "SELECT day_json FROM day_records WHERE date = ?",
                    [&date],
                    |row| row.get(0),
                )
                .optional()?;
            match raw {
                Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
                None => Ok(None),
            }
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn upsert_day(&self, record: &DayRecord, payload: serde_json::Value) -> Result<()> {
        let pool = self.pool.clone();
        let date = record.date.clone();
        let day_train = serde_json::to_string(record)?;
        let day_json = serde_json::to_string(&payload)?;
        let now = Utc::now();

        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO day_records (date, day_train, day_json, updated_at)
                 VALUES (?, ?, ?, ?)
                 ON CONFLICT(date)
                 DO UPDATE SET day_train = excluded.day_train,
                               day_json = excluded.day_json,
                               updated_at = excluded.updated_at",
                rusqlite::params![date, day_train, day_json, now],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

impl DiaryStore for DiaryRepository {
    async fn list(&self) -> Result<Vec<DayRecord>> {
        self.find_all().await
    }

    async fn find_day(&self, date: &str) -> Result<Option<DayRecord>> {
        self.find_by_date(date).await
    }

    async fn find_payload(&self, date: &str) -> Result<Option<serde_json::Value>> {
        self.find_payload_by_date(date).await
    }

    async fn upsert(&self, record: &DayRecord, payload: serde_json::Value) -> Result<()> {
        self.upsert_day(record, payload).await
    }
}
