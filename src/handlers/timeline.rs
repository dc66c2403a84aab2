use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{catalog, TimelineBlock, WorkoutSettings, WorkoutTemplate};
use crate::services::DiaryService;
use crate::timeline::total_duration;

#[derive(Clone)]
pub struct TimelineState {
    pub diary_service: DiaryService,
    pub default_settings: WorkoutSettings,
}

#[derive(Debug, Deserialize)]
pub struct CompileTimeline {
    pub template: WorkoutTemplate,
    pub settings: Option<WorkoutSettings>,
}

#[derive(Debug, Deserialize)]
pub struct CompileBuiltinTimeline {
    pub settings: Option<WorkoutSettings>,
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub template_id: String,
    /// Seconds, summed over all blocks.
    pub total_duration: u32,
    pub blocks: Vec<TimelineBlock>,
}

async fn respond(
    state: &TimelineState,
    template: &WorkoutTemplate,
    settings: Option<WorkoutSettings>,
) -> TimelineResponse {
    let settings = settings.unwrap_or_else(|| state.default_settings.clone());
    let blocks = state
        .diary_service
        .compile_timeline(template, &settings)
        .await;

    TimelineResponse {
        template_id: template.id.clone(),
        total_duration: total_duration(&blocks),
        blocks,
    }
}

pub async fn compile(
    State(state): State<TimelineState>,
    Json(request): Json<CompileTimeline>,
) -> Json<TimelineResponse> {
    Json(respond(&state, &request.template, request.settings).await)
}

pub async fn compile_builtin(
    State(state): State<TimelineState>,
    Path(template_id): Path<String>,
    Json(request): Json<CompileBuiltinTimeline>,
) -> Result<Json<TimelineResponse>> {
    let template = catalog::find_template(&template_id)
        .ok_or_else(|| AppError::NotFound("Template not found".to_string()))?;

    Ok(Json(respond(&state, &template, request.settings).await))
}
