//! Typed errors for the persistence layer.

use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// UNIQUE, NOT NULL or FOREIGN KEY violation reported by SQLite.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sqlite(rusqlite::Error),
}

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, detail) if code.code == ErrorCode::ConstraintViolation => {
                DbError::Constraint(detail.clone().unwrap_or_else(|| code.to_string()))
            }
            _ => DbError::Sqlite(err),
        }
    }
}

impl DbError {
    pub fn is_constraint(&self) -> bool {
        matches!(self, DbError::Constraint(_))
    }
}

pub type DbResult<T> = Result<T, DbError>;
