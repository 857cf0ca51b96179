pub mod exercise;
pub mod fields;
pub mod from_row;
pub mod user;

pub use exercise::{CreateExercise, Exercise, LogFilter, LogQuery, NewExercise, UserRef};
pub use from_row::FromSqliteRow;
pub use user::{CreateUser, User};
