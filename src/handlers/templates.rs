use axum::{extract::Path, Json};

use crate::error::{AppError, Result};
use crate::models::catalog;
use crate::models::{ExerciseDefinition, WorkoutTemplate};

pub async fn list() -> Json<Vec<WorkoutTemplate>> {
    Json(catalog::default_templates())
}

pub async fn show(Path(id): Path<String>) -> Result<Json<WorkoutTemplate>> {
    catalog::find_template(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Template not found".to_string()))
}

pub async fn exercises() -> Json<Vec<ExerciseDefinition>> {
    Json(catalog::default_exercises())
}
