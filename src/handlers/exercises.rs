use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::extract::{Payload, QueryParams};
use crate::models::exercise::format_date;
use crate::models::{CreateExercise, Exercise, LogQuery, User, UserRef};
use crate::repositories::{ExerciseRepository, UserRepository};

#[derive(Clone)]
pub struct ExercisesState {
    pub user_repo: UserRepository,
    pub exercise_repo: ExerciseRepository,
}

#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
    #[serde(rename = "_id")]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: format_date(exercise.date),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub user_id: String,
    pub log: Vec<LogEntry>,
}

async fn find_user(state: &ExercisesState, id: &str) -> Result<User> {
    state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

pub async fn create(
    State(state): State<ExercisesState>,
    Path(id): Path<String>,
    Payload(form): Payload<CreateExercise>,
) -> Result<Json<ExerciseResponse>> {
    let new = form.validate()?;
    let user = find_user(&state, &id).await?;

    let exercise = state
        .exercise_repo
        .create(&UserRef::from(&user), new)
        .await?;

    Ok(Json(ExerciseResponse {
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: format_date(exercise.date),
        user_id: user.id,
    }))
}

pub async fn log(
    State(state): State<ExercisesState>,
    Path(id): Path<String>,
    query: std::result::Result<QueryParams<LogQuery>, AppError>,
) -> Result<Json<LogResponse>> {
    // An unknown user wins over a malformed query string
    let user = find_user(&state, &id).await?;
    let QueryParams(query) = query?;
    let filter = query.into_filter()?;

    let exercises = state
        .exercise_repo
        .find_log(&UserRef::from(&user), filter)
        .await?;
    let log: Vec<LogEntry> = exercises.into_iter().map(LogEntry::from).collect();

    Ok(Json(LogResponse {
        username: user.username,
        count: log.len(),
        user_id: user.id,
        log,
    }))
}
