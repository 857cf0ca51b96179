use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::repositories::UserRepository;
use crate::version::GIT_VERSION;

#[derive(Clone)]
pub struct HealthState {
    pub user_repo: UserRepository,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    git_version: &'static str,
}

/// Reports the build version and whether the database answers a query.
pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, code, database) = match state.user_repo.count().await {
        Ok(_) => ("ok", StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            ("degraded", StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            git_version: GIT_VERSION,
        }),
    )
}
