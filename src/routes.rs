use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::handlers::{exercises, health, index, users};

pub fn create_router(
    users_state: users::UsersState,
    exercises_state: exercises::ExercisesState,
    health_state: health::HealthState,
    public_dir: &Path,
) -> Router {
    Router::new()
        // User routes
        .route("/api/users", post(users::create).get(users::list))
        .with_state(users_state)
        // Exercise routes
        .route("/api/users/{id}/exercises", post(exercises::create))
        .route("/api/users/{id}/logs", get(exercises::log))
        .with_state(exercises_state)
        .route("/health", get(health::health_check))
        .with_state(health_state)
        .route("/", get(index::index))
        // Everything else comes from the public directory
        .fallback_service(ServeDir::new(public_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}
