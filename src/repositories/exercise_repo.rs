use chrono::{Local, Utc};
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Exercise, FromSqliteRow, LogFilter, NewExercise, UserRef};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert an exercise for `user_id`. A missing date is stored as the
    /// current local date.
    pub async fn create(&self, user_id: &UserRef, new: NewExercise) -> Result<Exercise> {
        let exercise = Exercise {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.clone(),
            description: new.description,
            duration: new.duration,
            date: new.date.unwrap_or_else(|| Local::now().date_naive()),
            created_at: Utc::now(),
        };
        let exercise_clone = exercise.clone();

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO exercises (id, user_id, description, duration, date, created_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    exercise_clone.id,
                    exercise_clone.user_id.as_str(),
                    exercise_clone.description,
                    exercise_clone.duration,
                    exercise_clone.date,
                    exercise_clone.created_at
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        tracing::debug!(
            exercise_id = %exercise.id,
            user_id = exercise.user_id.as_str(),
            "Created exercise"
        );
        Ok(exercise)
    }

    /// A user's exercises within the filter's inclusive date bounds,
    /// ascending by date and then insertion, capped at `filter.limit`.
    pub async fn find_log(&self, user_id: &UserRef, filter: LogFilter) -> Result<Vec<Exercise>> {
        let pool = self.pool.clone();
        let user_id = user_id.as_str().to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;

            let mut sql = String::from("SELECT * FROM exercises WHERE user_id = ?");
            let mut params: Vec<&dyn rusqlite::ToSql> = vec![&user_id];

            if let Some(from) = &filter.from {
                sql.push_str(" AND date >= ?");
                params.push(from);
            }
            if let Some(to) = &filter.to {
                sql.push_str(" AND date <= ?");
                params.push(to);
            }
            sql.push_str(" ORDER BY date, created_at, rowid");
            if let Some(limit) = &filter.limit {
                sql.push_str(" LIMIT ?");
                params.push(limit);
            }

            let mut stmt = conn.prepare(&sql)?;
            let exercises = stmt
                .query_map(params.as_slice(), Exercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
