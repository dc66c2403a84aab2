use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{diary, health, templates, timeline};

pub fn create_router(
    diary_state: diary::DiaryState,
    timeline_state: timeline::TimelineState,
) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Built-in catalog
        .route("/exercises", get(templates::exercises))
        .route("/templates", get(templates::list))
        .route("/templates/{id}", get(templates::show))
        // History
        .route("/diary", get(diary::list))
        .route("/diary/snapshot", get(diary::snapshot))
        .route("/diary/{date}", post(diary::save))
        .with_state(diary_state)
        // Timeline compilation
        .route("/timeline", post(timeline::compile))
        .route("/templates/{id}/timeline", post(timeline::compile_builtin))
        .with_state(timeline_state)
}
