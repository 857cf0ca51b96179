use rusqlite::Row;

/// Builds a model from a row selected with named columns (`SELECT *`).
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}
