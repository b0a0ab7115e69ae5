#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use skistation_api::config::ServerConfig;
use skistation_api::router::build_app_router;
use skistation_api::state::AppState;
use skistation_core::course::{CourseType, Support};
use skistation_core::types::{DbId, WeekNumber};
use skistation_db::models::course::{Course, CreateCourse};
use skistation_db::models::instructor::{CreateInstructor, Instructor};
use skistation_db::models::skier::{CreateSkier, Skier};
use skistation_db::repositories::{CourseRepo, InstructorRepo, SkierRepo};
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router on the given pool, with the same
/// middleware stack production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_skier(pool: &PgPool, date_of_birth: NaiveDate) -> Skier {
    SkierRepo::create(
        pool,
        &CreateSkier {
            first_name: "Test".to_string(),
            last_name: "Skier".to_string(),
            date_of_birth,
            city: None,
        },
    )
    .await
    .unwrap()
}

pub async fn create_course(pool: &PgPool, type_course: CourseType, support: Support) -> Course {
    CourseRepo::create(
        pool,
        &CreateCourse {
            level: 1,
            type_course,
            support,
            price: 90.0,
            time_slot: 2,
        },
    )
    .await
    .unwrap()
}

/// Insert a course whose `type_course` is outside the known set.
pub async fn create_course_with_raw_type(pool: &PgPool, raw_type: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO courses (type_course, support) VALUES ($1, 'SKI') RETURNING id",
    )
    .bind(raw_type)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_instructor(pool: &PgPool) -> Instructor {
    InstructorRepo::create(
        pool,
        &CreateInstructor {
            first_name: "Test".to_string(),
            last_name: "Instructor".to_string(),
            date_of_hire: NaiveDate::from_ymd_opt(2018, 12, 1).unwrap(),
        },
    )
    .await
    .unwrap()
}

pub async fn count_registrations(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM registrations")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Fill `seats` registrations of `course_id` in `num_week`, one new adult
/// skier per seat.
pub async fn fill_seats(pool: &PgPool, course_id: DbId, num_week: WeekNumber, seats: usize) {
    for _ in 0..seats {
        let skier = create_skier(pool, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()).await;
        sqlx::query("INSERT INTO registrations (num_week, skier_id, course_id) VALUES ($1, $2, $3)")
            .bind(num_week)
            .bind(skier.id)
            .bind(course_id)
            .execute(pool)
            .await
            .unwrap();
    }
}
