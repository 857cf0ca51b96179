use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::fields::{deserialize_optional_text, non_blank};
use super::FromSqliteRow;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for User {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            username: row.get("username")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateUser {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub username: Option<String>,
}

impl CreateUser {
    /// Returns the username to store. Blank names are rejected; anything
    /// else is kept as submitted.
    pub fn validate(self) -> Result<String> {
        if non_blank(self.username.as_deref()).is_none() {
            return Err(AppError::Validation("Username is required".to_string()));
        }
        Ok(self.username.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_keeps_username() {
        let form = CreateUser {
            username: Some("alice".to_string()),
        };
        assert_eq!(form.validate().unwrap(), "alice");
    }

    #[test]
    fn test_validate_rejects_missing() {
        let err = CreateUser::default().validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_blank() {
        let form = CreateUser {
            username: Some("   ".to_string()),
        };
        assert!(matches!(form.validate(), Err(AppError::Validation(_))));
    }
}
