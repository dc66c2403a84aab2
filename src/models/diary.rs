use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// One exercise outcome as reported at the end of a session, before counting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawExerciseResult {
    pub name: String,
    pub weight: f64,
    #[serde(default)]
    pub skipped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishedExerciseData {
    pub name: String,
    pub weight: f64,
    #[serde(default)]
    pub skipped: bool,
    /// Cumulative non-skipped executions including this one; 0 when skipped.
    #[serde(default)]
    pub total_executions_count: u32,
}

impl FinishedExerciseData {
    pub fn from_raw(raw: RawExerciseResult, total_executions_count: u32) -> Self {
        Self {
            name: raw.name,
            weight: raw.weight,
            skipped: raw.skipped,
            total_executions_count,
        }
    }
}

/// All finished exercises for one calendar date (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub exercises: Vec<FinishedExerciseData>,
    #[serde(default)]
    pub exercises_count: usize,
}

impl DayRecord {
    pub fn new(date: &str, exercises: Vec<FinishedExerciseData>) -> Self {
        Self {
            date: date.to_string(),
            exercises_count: exercises.len(),
            exercises,
        }
    }
}

/// Training half of a `day_records` row. `day_train` holds a serialized `DayRecord`.
#[derive(Debug, Clone)]
pub struct DayRow {
    pub date: String,
    pub day_train: Option<String>,
}

impl FromSqliteRow for DayRow {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            date: row.get("date")?,
            day_train: row.get("day_train")?,
        })
    }
}

impl DayRow {
    /// Decode the stored record, trusting the row's date column over the JSON's.
    pub fn into_record(self) -> serde_json::Result<Option<DayRecord>> {
        let Some(raw) = self.day_train else {
            return Ok(None);
        };
        let mut record: DayRecord = serde_json::from_str(&raw)?;
        record.date = self.date;
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_record_new_counts_exercises() {
        let record = DayRecord::new(
            "2024-05-01",
            vec![FinishedExerciseData::from_raw(
                RawExerciseResult {
                    name: "Deadlift".to_string(),
                    weight: 100.0,
                    skipped: false,
                },
                4,
            )],
        );
        assert_eq!(record.exercises_count, 1);
        assert_eq!(record.exercises[0].total_executions_count, 4);
    }

    #[test]
    fn test_into_record_prefers_row_date() {
        let row = DayRow {
            date: "2024-05-02".to_string(),
            day_train: Some(r#"{"date":"1999-01-01","exercises":[],"exercises_count":0}"#.to_string()),
        };
        let record = row.into_record().unwrap().unwrap();
        assert_eq!(record.date, "2024-05-02");
    }

    #[test]
    fn test_into_record_without_training_data() {
        let row = DayRow {
            date: "2024-05-02".to_string(),
            day_train: None,
        };
        assert!(row.into_record().unwrap().is_none());
    }

    #[test]
    fn test_into_record_rejects_bad_json() {
        let row = DayRow {
            date: "2024-05-02".to_string(),
            day_train: Some("{not json".to_string()),
        };
        assert!(row.into_record().is_err());
    }
}
