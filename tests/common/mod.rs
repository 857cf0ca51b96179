#![allow(dead_code)]

use std::path::Path;

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;

use exercise_tracker::db::{create_memory_pool, DbPool};
use exercise_tracker::handlers::{exercises, health, users};
use exercise_tracker::migrations::run_migrations_for_tests;
use exercise_tracker::models::{NewExercise, User, UserRef};
use exercise_tracker::repositories::{ExerciseRepository, UserRepository};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    let user_repo = UserRepository::new(pool.clone());
    let exercise_repo = ExerciseRepository::new(pool);

    exercise_tracker::routes::create_router(
        users::UsersState {
            user_repo: user_repo.clone(),
        },
        exercises::ExercisesState {
            user_repo: user_repo.clone(),
            exercise_repo,
        },
        health::HealthState { user_repo },
        Path::new("public"),
    )
}

pub async fn create_test_user(pool: &DbPool, username: &str) -> User {
    UserRepository::new(pool.clone())
        .create(username)
        .await
        .unwrap()
}

pub async fn create_test_exercise(
    pool: &DbPool,
    user: &User,
    description: &str,
    duration: i32,
    date: &str,
) -> exercise_tracker::models::Exercise {
    ExerciseRepository::new(pool.clone())
        .create(
            &UserRef::from(user),
            NewExercise {
                description: description.to_string(),
                duration,
                date: Some(date.parse().unwrap()),
            },
        )
        .await
        .unwrap()
}

pub fn count_exercises(pool: &DbPool, user: &User) -> i64 {
    let conn = pool.get().unwrap();
    conn.query_row(
        "SELECT COUNT(*) FROM exercises WHERE user_id = ?",
        [&user.id],
        |row| row.get(0),
    )
    .unwrap()
}

pub fn count_all_exercises(pool: &DbPool) -> i64 {
    let conn = pool.get().unwrap();
    conn.query_row("SELECT COUNT(*) FROM exercises", [], |row| row.get(0))
        .unwrap()
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
