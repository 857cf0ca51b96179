pub mod exercises;
pub mod health;
pub mod index;
pub mod users;
