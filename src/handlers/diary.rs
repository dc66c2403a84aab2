use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;

use crate::error::{AppError, Result};
use crate::models::{DayRecord, RawExerciseResult};
use crate::progression::Snapshot;
use crate::services::DiaryService;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone)]
pub struct DiaryState {
    pub diary_service: DiaryService,
}

/// Date keys must be zero-padded ISO dates so lexical order is chronological.
fn parse_date_key(date: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| AppError::Validation(format!("Invalid date: {}", date)))?;
    let normalized = parsed.format(DATE_FORMAT).to_string();
    if normalized != date {
        return Err(AppError::Validation(format!(
            "Date must be formatted as YYYY-MM-DD: {}",
            date
        )));
    }
    Ok(normalized)
}

pub async fn list(State(state): State<DiaryState>) -> Json<Vec<DayRecord>> {
    Json(state.diary_service.history().await)
}

pub async fn snapshot(State(state): State<DiaryState>) -> Json<Snapshot> {
    Json(state.diary_service.snapshot().await)
}

pub async fn save(
    State(state): State<DiaryState>,
    Path(date): Path<String>,
    Json(results): Json<Vec<RawExerciseResult>>,
) -> Result<Json<DayRecord>> {
    let date = parse_date_key(&date)?;

    if results.iter().any(|r| r.name.trim().is_empty()) {
        return Err(AppError::Validation(
            "Exercise name must not be empty".to_string(),
        ));
    }

    let record = state.diary_service.save(&date, results).await?;
    Ok(Json(record))
}
