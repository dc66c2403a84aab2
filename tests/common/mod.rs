#![allow(dead_code)]

use axum::{body::Body, Router};
use http::{header, Request, Response};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use liftplan::db::{create_memory_pool, DbPool};
use liftplan::handlers::{diary, timeline};
use liftplan::migrations::run_migrations_for_tests;
use liftplan::models::WorkoutSettings;
use liftplan::repositories::DiaryRepository;
use liftplan::services::DiaryService;

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    let diary_service = DiaryService::new(DiaryRepository::new(pool));

    let diary_state = diary::DiaryState {
        diary_service: diary_service.clone(),
    };
    let timeline_state = timeline::TimelineState {
        diary_service,
        default_settings: WorkoutSettings::default(),
    };

    liftplan::routes::create_router(diary_state, timeline_state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Insert unrelated same-date data the way another feature would.
pub fn insert_payload(pool: &DbPool, date: &str, payload: &str) {
    let conn = pool.get().unwrap();
    conn.execute(
        "INSERT INTO day_records (date, day_json) VALUES (?, ?)",
        rusqlite::params![date, payload],
    )
    .unwrap();
}

pub fn read_payload(pool: &DbPool, date: &str) -> String {
    let conn = pool.get().unwrap();
    conn.query_row(
        "SELECT day_json FROM day_records WHERE date = ?",
        [date],
        |row| row.get(0),
    )
    .unwrap()
}
